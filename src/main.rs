//! A/B test simulator - interactive prompt front end
//!
//! Reads the four simulation parameters from stdin, runs one
//! generate-summarize-test pass and prints the report. No CLI flags;
//! set `AB_SIM_SEED` for a reproducible run.

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use ab_simulator::{
    config, generate_seeded, report, summarize, two_proportion_z_test, Error, Group, SimParams,
};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("ab_simulator=info".parse()?),
        )
        .init();

    println!("A/B Testing Simulator");
    println!("Simulates conversion data for two groups and tests the difference.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let n_a = prompt_count(&mut lines, "Enter sample size for Group A: ")?;
    let n_b = prompt_count(&mut lines, "Enter sample size for Group B: ")?;
    let p_a = prompt_rate(
        &mut lines,
        "Enter conversion rate for Group A (e.g., 0.10 for 10%): ",
    )?;
    let p_b = prompt_rate(
        &mut lines,
        "Enter conversion rate for Group B (e.g., 0.12 for 12%): ",
    )?;

    let params = SimParams::new(n_a, n_b, p_a, p_b)?;
    let seed = config::resolve_seed();
    info!(seed, ?params, "Running simulation");

    let records = generate_seeded(&params, seed)?;
    let summaries = summarize(&records)?;
    let result = two_proportion_z_test(&summaries[&Group::A], &summaries[&Group::B])?;

    println!();
    report::print_report(&summaries, &result);
    Ok(())
}

/// Prompt for a non-negative integer.
fn prompt_count(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<u64, Error> {
    let raw = read_value(lines, prompt)?;
    let value: i64 = raw.parse()?;
    if value < 0 {
        return Err(Error::InvalidParameter(format!(
            "sample size {} is negative",
            value
        )));
    }
    Ok(value as u64)
}

/// Prompt for a conversion rate (validated later by `SimParams`).
fn prompt_rate(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<f64, Error> {
    let raw = read_value(lines, prompt)?;
    Ok(raw.parse()?)
}

fn read_value(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<String, Error> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let line = lines
        .next()
        .ok_or_else(|| Error::Parse("unexpected end of input".to_string()))??;
    Ok(line.trim().to_string())
}
