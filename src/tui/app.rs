//! Dashboard state
//!
//! The `App` struct is the single source of truth for the dashboard. It owns
//! the four input parameters and the latest simulation outcome, and
//! recomputes the outcome whenever a parameter changes. State transitions
//! are deterministic and testable in isolation.

use std::collections::BTreeMap;

use crate::analyzer::{summarize, two_proportion_z_test, GroupSummary, TestResult};
use crate::config::{self, SimParams, DEFAULT_RATE_A, DEFAULT_RATE_B, DEFAULT_SAMPLE_SIZE, MAX_GROUP_SIZE};
use crate::error::Result;
use crate::generator::{generate_seeded, Group};
use crate::sweep::{sensitivity_sweep, SweepPoint};

/// Step applied to the sample-size fields per keypress.
pub const SIZE_STEP: u64 = 100;

/// Step applied to the rate sliders per keypress, in percent.
pub const RATE_STEP: u16 = 1;

/// Minimum terminal width for the dashboard to render.
pub const MIN_COLS: u16 = 80;

/// Minimum terminal height for the dashboard to render.
pub const MIN_ROWS: u16 = 24;

/// The four editable parameter fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SampleA,
    RateA,
    SampleB,
    RateB,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::SampleA => Field::RateA,
            Field::RateA => Field::SampleB,
            Field::SampleB => Field::RateB,
            Field::RateB => Field::SampleA,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::SampleA => Field::RateB,
            Field::RateA => Field::SampleA,
            Field::SampleB => Field::RateA,
            Field::RateB => Field::SampleB,
        }
    }
}

/// Result of one full pipeline run, ready for rendering.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub summaries: BTreeMap<Group, GroupSummary>,
    pub test: TestResult,
    pub sweep: Vec<SweepPoint>,
}

/// Primary application state for the dashboard.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Currently focused parameter field.
    pub focus: Field,

    /// Sample size for group A.
    pub n_a: u64,
    /// Sample size for group B.
    pub n_b: u64,
    /// Conversion rate for group A, in percent.
    pub rate_a_pct: u16,
    /// Conversion rate for group B, in percent.
    pub rate_b_pct: u16,

    /// Latest simulation outcome, if the parameters admit one.
    pub outcome: Option<RunOutcome>,
    /// Status line: seed info, validation hints or the last error.
    pub status: String,

    base_seed: u64,
    resamples: u64,
}

impl App {
    /// New dashboard with the default experiment and an initial run.
    pub fn new(seed: u64) -> Self {
        let mut app = Self {
            should_quit: false,
            show_help: false,
            focus: Field::SampleA,
            n_a: DEFAULT_SAMPLE_SIZE,
            n_b: DEFAULT_SAMPLE_SIZE,
            rate_a_pct: (DEFAULT_RATE_A * 100.0).round() as u16,
            rate_b_pct: (DEFAULT_RATE_B * 100.0).round() as u16,
            outcome: None,
            status: String::new(),
            base_seed: seed,
            resamples: 0,
        };
        app.recompute();
        app
    }

    pub fn rate_a(&self) -> f64 {
        self.rate_a_pct as f64 / 100.0
    }

    pub fn rate_b(&self) -> f64 {
        self.rate_b_pct as f64 / 100.0
    }

    /// Move focus to the next parameter field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous parameter field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Increase the focused field by one step and rerun.
    pub fn increase(&mut self) {
        match self.focus {
            Field::SampleA => self.n_a = (self.n_a + SIZE_STEP).min(MAX_GROUP_SIZE),
            Field::SampleB => self.n_b = (self.n_b + SIZE_STEP).min(MAX_GROUP_SIZE),
            Field::RateA => self.rate_a_pct = (self.rate_a_pct + RATE_STEP).min(100),
            Field::RateB => self.rate_b_pct = (self.rate_b_pct + RATE_STEP).min(100),
        }
        self.recompute();
    }

    /// Decrease the focused field by one step and rerun.
    pub fn decrease(&mut self) {
        match self.focus {
            Field::SampleA => self.n_a = self.n_a.saturating_sub(SIZE_STEP),
            Field::SampleB => self.n_b = self.n_b.saturating_sub(SIZE_STEP),
            Field::RateA => self.rate_a_pct = self.rate_a_pct.saturating_sub(RATE_STEP),
            Field::RateB => self.rate_b_pct = self.rate_b_pct.saturating_sub(RATE_STEP),
        }
        self.recompute();
    }

    /// Rerun with fresh samples at the current parameters.
    pub fn resample(&mut self) {
        self.resamples = self.resamples.wrapping_add(1);
        self.recompute();
    }

    /// Re-invoke the full pipeline for the current parameters.
    pub fn recompute(&mut self) {
        if self.n_a == 0 || self.n_b == 0 || self.rate_a_pct == 0 || self.rate_b_pct == 0 {
            self.outcome = None;
            self.status =
                "Set all four parameters to non-zero values to run the simulation.".to_string();
            return;
        }

        let seed = self.base_seed.wrapping_add(self.resamples);
        match self.run_pipeline(seed) {
            Ok(outcome) => {
                self.outcome = Some(outcome);
                self.status = format!("seed {}  |  r re-samples, h for help", seed);
            }
            Err(err) => {
                self.outcome = None;
                self.status = err.to_string();
            }
        }
    }

    fn run_pipeline(&self, seed: u64) -> Result<RunOutcome> {
        let params = SimParams::new(self.n_a, self.n_b, self.rate_a(), self.rate_b())?;
        let records = generate_seeded(&params, seed)?;
        let summaries = summarize(&records)?;
        let test = two_proportion_z_test(&summaries[&Group::A], &summaries[&Group::B])?;
        let sweep = sensitivity_sweep(params.p_a, params.p_b, params.n_a.max(params.n_b), seed)?;

        Ok(RunOutcome {
            summaries,
            test,
            sweep,
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(config::resolve_seed())
    }
}
