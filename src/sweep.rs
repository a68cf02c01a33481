//! Sensitivity sweep: p-value as a function of sample size
//!
//! Re-runs the generate-and-test pipeline over an evenly spaced grid of
//! per-group sample sizes with the conversion rates held fixed. Each point
//! is an independent simulation with its own derived seed, so the curve is
//! reproducible for a given base seed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analyzer::{summarize, two_proportion_z_test};
use crate::config::{SimParams, SWEEP_FLOOR, SWEEP_POINTS};
use crate::error::{Error, Result};
use crate::generator::{generate_seeded, Group};

/// One point on the sensitivity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub sample_size: u64,
    pub p_value: f64,
}

/// Run the sweep for fixed rates up to `max_size` trials per group.
///
/// Sample sizes run from [`SWEEP_FLOOR`] (clamped down when `max_size` is
/// smaller) to `max_size` over [`SWEEP_POINTS`] evenly spaced steps. Points
/// whose simulated data is degenerate (no variance at all) are omitted from
/// the curve rather than failing the sweep.
pub fn sensitivity_sweep(p_a: f64, p_b: f64, max_size: u64, seed: u64) -> Result<Vec<SweepPoint>> {
    if max_size == 0 {
        return Err(Error::InvalidParameter(
            "sweep needs a positive maximum sample size".to_string(),
        ));
    }

    let mut points = Vec::with_capacity(SWEEP_POINTS);
    for (i, size) in sample_size_grid(max_size).into_iter().enumerate() {
        let params = SimParams::new(size, size, p_a, p_b)?;
        let records = generate_seeded(&params, seed.wrapping_add(i as u64))?;
        let summaries = summarize(&records)?;

        match two_proportion_z_test(&summaries[&Group::A], &summaries[&Group::B]) {
            Ok(result) => points.push(SweepPoint {
                sample_size: size,
                p_value: result.p_value,
            }),
            Err(Error::DegenerateInput(reason)) => {
                debug!(size, %reason, "Skipping degenerate sweep point");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(points)
}

/// Evenly spaced, deduplicated grid of per-group sample sizes.
fn sample_size_grid(max_size: u64) -> Vec<u64> {
    let lo = SWEEP_FLOOR.min(max_size);
    let hi = max_size;
    let steps = (SWEEP_POINTS - 1) as u64;

    let mut sizes = Vec::with_capacity(SWEEP_POINTS);
    for i in 0..SWEEP_POINTS as u64 {
        let size = lo + (hi - lo) * i / steps;
        if sizes.last() != Some(&size) {
            sizes.push(size);
        }
    }
    sizes
}
