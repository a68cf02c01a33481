//! Significance analysis: group summaries and the two-proportion z-test
//!
//! Aggregates trial records into per-group counts, then tests the difference
//! of conversion rates under the pooled null hypothesis:
//!
//! ```text
//! pooled = (x1 + x2) / (n1 + n2)
//! se     = sqrt(pooled * (1 - pooled) * (1/n1 + 1/n2))
//! z      = (p1 - p2) / se
//! p      = 2 * (1 - phi(|z|))
//! ```
//!
//! Degenerate inputs (zero pooled variance, empty groups) surface as errors
//! instead of NaN or infinity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::generator::{Group, TrialRecord};

/// Per-group aggregation of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub successes: u64,
    pub trials: u64,
}

impl GroupSummary {
    /// Empirical conversion rate. Callers obtain summaries through
    /// [`summarize`], which guarantees `trials > 0`.
    pub fn conversion_rate(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }
}

/// Outcome of the two-proportion z-test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub z_score: f64,
    pub p_value: f64,
}

/// Aggregate trial records into per-group summaries.
///
/// Both groups must be represented; a group with zero observations yields
/// [`Error::InsufficientData`] so no caller ever divides by zero.
pub fn summarize(records: &[TrialRecord]) -> Result<BTreeMap<Group, GroupSummary>> {
    let mut summaries: BTreeMap<Group, GroupSummary> = BTreeMap::new();
    for record in records {
        let entry = summaries.entry(record.group).or_insert(GroupSummary {
            successes: 0,
            trials: 0,
        });
        entry.trials += 1;
        if record.converted {
            entry.successes += 1;
        }
    }

    for group in [Group::A, Group::B] {
        if !summaries.contains_key(&group) {
            return Err(Error::InsufficientData(format!(
                "group {} has no observations",
                group
            )));
        }
    }

    Ok(summaries)
}

/// Two-sided two-proportion z-test on a pair of group summaries.
///
/// Symmetric under swapping the groups up to the sign of `z_score`.
pub fn two_proportion_z_test(a: &GroupSummary, b: &GroupSummary) -> Result<TestResult> {
    if a.trials == 0 || b.trials == 0 {
        return Err(Error::InsufficientData(
            "both groups need at least one observation".to_string(),
        ));
    }

    let n1 = a.trials as f64;
    let n2 = b.trials as f64;
    let pooled = (a.successes + b.successes) as f64 / (n1 + n2);
    let se = (pooled * (1.0 - pooled) * (1.0 / n1 + 1.0 / n2)).sqrt();

    if se == 0.0 {
        return Err(Error::DegenerateInput(format!(
            "pooled conversion rate {} gives zero variance, z is undefined",
            pooled
        )));
    }

    let z = (a.conversion_rate() - b.conversion_rate()) / se;
    let p_value = (2.0 * (1.0 - normal_cdf(z.abs()))).min(1.0);

    debug!(z, p_value, "Two-proportion z-test");
    Ok(TestResult { z_score: z, p_value })
}

/// Standard normal CDF via the error function.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Error function, Abramowitz and Stegun approximation (max error 1.5e-7).
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}
