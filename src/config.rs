//! Simulation configuration: caps, defaults and validated parameters
//!
//! Reads an optional fixed seed from the `AB_SIM_SEED` environment variable.

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{Error, Result};

/// Hard cap on the number of trials per group.
pub const MAX_GROUP_SIZE: u64 = 10_000;

/// Default sample size per group (used as the dashboard starting point).
pub const DEFAULT_SAMPLE_SIZE: u64 = 1_000;
/// Default conversion rate for group A.
pub const DEFAULT_RATE_A: f64 = 0.10;
/// Default conversion rate for group B.
pub const DEFAULT_RATE_B: f64 = 0.12;

/// Conventional significance threshold for the verdict line.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Smallest per-group sample size in the sensitivity sweep.
pub const SWEEP_FLOOR: u64 = 100;
/// Number of points on the sensitivity sweep grid.
pub const SWEEP_POINTS: usize = 20;

/// Environment variable holding a fixed seed for reproducible runs.
pub const SEED_ENV_VAR: &str = "AB_SIM_SEED";

/// Validated input parameters for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    pub n_a: u64,
    pub n_b: u64,
    pub p_a: f64,
    pub p_b: f64,
}

impl SimParams {
    /// Build a parameter set, rejecting out-of-range values.
    ///
    /// Group sizes may be zero (the group is then empty); conversion rates
    /// must lie in `[0, 1]`.
    pub fn new(n_a: u64, n_b: u64, p_a: f64, p_b: f64) -> Result<Self> {
        for (label, n) in [("A", n_a), ("B", n_b)] {
            if n > MAX_GROUP_SIZE {
                return Err(Error::InvalidParameter(format!(
                    "sample size {} for group {} exceeds the cap of {}",
                    n, label, MAX_GROUP_SIZE
                )));
            }
        }
        for (label, p) in [("A", p_a), ("B", p_b)] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidParameter(format!(
                    "conversion rate {} for group {} outside [0, 1]",
                    p, label
                )));
            }
        }
        Ok(Self { n_a, n_b, p_a, p_b })
    }
}

/// Fixed seed from the environment, if one is set and parses.
pub fn seed_from_env() -> Option<u64> {
    let raw = env::var(SEED_ENV_VAR).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(err) => {
            tracing::warn!(%raw, "Ignoring invalid {}: {}", SEED_ENV_VAR, err);
            None
        }
    }
}

/// Seed for this process: the env override when present, entropy otherwise.
pub fn resolve_seed() -> u64 {
    seed_from_env().unwrap_or_else(rand::random)
}
