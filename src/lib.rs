//! A/B Testing Simulator Library
//!
//! This library provides tools to:
//! - Generate synthetic binary conversion data for two experiment groups
//! - Aggregate per-group success counts and conversion rates
//! - Run a two-proportion z-test with a two-sided p-value
//! - Sweep sample sizes to show how significance behaves as data grows
//! - Render summary tables, verdicts and charts for two front ends
//!
//! The pipeline is pure: generation and analysis are functions of their
//! inputs plus a seed, and nothing outlives a single run.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod generator;
pub mod report;
pub mod sweep;
pub mod tui;

// Re-export common types
pub use analyzer::{normal_cdf, summarize, two_proportion_z_test, GroupSummary, TestResult};
pub use config::{SimParams, MAX_GROUP_SIZE, SIGNIFICANCE_LEVEL};
pub use error::{Error, Result};
pub use generator::{generate, generate_seeded, Group, TrialRecord};
pub use sweep::{sensitivity_sweep, SweepPoint};
