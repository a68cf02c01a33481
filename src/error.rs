//! Error types for the A/B test simulator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_parameter() {
        let err = Error::InvalidParameter("conversion rate 1.5 outside [0, 1]".to_string());
        assert!(err.to_string().contains("Invalid parameter"));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_error_display_insufficient_data() {
        let err = Error::InsufficientData("group B has no observations".to_string());
        assert!(err.to_string().contains("Insufficient data"));
        assert!(err.to_string().contains("group B"));
    }

    #[test]
    fn test_error_display_degenerate_input() {
        let err = Error::DegenerateInput("pooled variance is zero".to_string());
        assert!(err.to_string().contains("Degenerate input"));
        assert!(err.to_string().contains("pooled variance"));
    }

    #[test]
    fn test_error_display_parse() {
        let err = Error::Parse("invalid digit found in string".to_string());
        assert!(err.to_string().contains("Parse error"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_from_parse_int_error() {
        let parse_err = "abc".parse::<i64>().unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_error_from_parse_float_error() {
        let parse_err = "0.1.2".parse::<f64>().unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_error_debug_impl() {
        let err = Error::DegenerateInput("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("DegenerateInput"));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(Error::InsufficientData("empty".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_all_variants_display_nonempty() {
        let variants: Vec<Error> = vec![
            Error::InvalidParameter("p".to_string()),
            Error::InsufficientData("i".to_string()),
            Error::DegenerateInput("d".to_string()),
            Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "io")),
            Error::Parse("parse".to_string()),
        ];

        for err in variants {
            assert!(!err.to_string().is_empty());
        }
    }
}
