//! Synthetic conversion data generation
//!
//! Produces i.i.d. Bernoulli draws for two labeled groups. Generation is
//! a pure function of the parameters and the RNG; seeded runs reproduce
//! the same dataset bit for bit.

use rand::distributions::{Bernoulli, Distribution};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::config::SimParams;
use crate::error::{Error, Result};

/// Experiment arm label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Group {
    A,
    B,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::A => write!(f, "A"),
            Group::B => write!(f, "B"),
        }
    }
}

/// One observation: a group label and a binary conversion outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub group: Group,
    pub converted: bool,
}

/// Generate the full dataset for one simulation run.
///
/// Draws `n_a` Bernoulli(`p_a`) outcomes labeled [`Group::A`] followed by
/// `n_b` Bernoulli(`p_b`) outcomes labeled [`Group::B`]. A zero-sized group
/// contributes no records.
pub fn generate(params: &SimParams, rng: &mut SmallRng) -> Result<Vec<TrialRecord>> {
    let mut records = Vec::with_capacity((params.n_a + params.n_b) as usize);
    draw_group(Group::A, params.n_a, params.p_a, rng, &mut records)?;
    draw_group(Group::B, params.n_b, params.p_b, rng, &mut records)?;

    debug!(
        n_a = params.n_a,
        n_b = params.n_b,
        total = records.len(),
        "Generated trial records"
    );
    Ok(records)
}

/// Generate with a fresh RNG seeded from `seed`.
pub fn generate_seeded(params: &SimParams, seed: u64) -> Result<Vec<TrialRecord>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate(params, &mut rng)
}

fn draw_group(
    group: Group,
    n: u64,
    p: f64,
    rng: &mut SmallRng,
    out: &mut Vec<TrialRecord>,
) -> Result<()> {
    // SimParams validation already bounds p; Bernoulli::new re-checks.
    let dist = Bernoulli::new(p).map_err(|_| {
        Error::InvalidParameter(format!("conversion rate {} for group {} outside [0, 1]", p, group))
    })?;

    out.extend((0..n).map(|_| TrialRecord {
        group,
        converted: dist.sample(rng),
    }));
    Ok(())
}
