//! Integration tests for the ab_simulator library
//!
//! These tests verify the public API and the statistical properties of the
//! full generate-summarize-test pipeline. Statistical assertions run over
//! many fixed seeds and check aggregates, never single-run point values.

use ab_simulator::{
    config::{MAX_GROUP_SIZE, SWEEP_POINTS},
    error::Error,
    generate_seeded, sensitivity_sweep, summarize, two_proportion_z_test, Group, SimParams,
    TestResult,
};

fn run_once(n_a: u64, n_b: u64, p_a: f64, p_b: f64, seed: u64) -> ab_simulator::Result<TestResult> {
    let params = SimParams::new(n_a, n_b, p_a, p_b)?;
    let records = generate_seeded(&params, seed)?;
    let summaries = summarize(&records)?;
    two_proportion_z_test(&summaries[&Group::A], &summaries[&Group::B])
}

// ============================================================================
// Pipeline Shape Tests
// ============================================================================

#[test]
fn test_summarize_totals_match_requested_sizes() {
    let cases = [(10, 10), (100, 250), (1000, 1000), (MAX_GROUP_SIZE, 1)];
    for (i, (n_a, n_b)) in cases.into_iter().enumerate() {
        let params = SimParams::new(n_a, n_b, 0.3, 0.7).unwrap();
        let records = generate_seeded(&params, i as u64).unwrap();
        let summaries = summarize(&records).unwrap();

        assert_eq!(summaries[&Group::A].trials, n_a);
        assert_eq!(summaries[&Group::B].trials, n_b);
        assert!(summaries[&Group::A].successes <= n_a);
        assert!(summaries[&Group::B].successes <= n_b);
    }
}

#[test]
fn test_empty_group_surfaces_insufficient_data() {
    let params = SimParams::new(0, 100, 0.5, 0.5).unwrap();
    let records = generate_seeded(&params, 1).unwrap();
    let err = summarize(&records).unwrap_err();
    assert!(matches!(err, Error::InsufficientData(_)));
}

#[test]
fn test_invalid_rate_rejected_before_generation() {
    let err = SimParams::new(100, 100, 0.5, 1.01).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_fixed_seed_reproduces_test_result() {
    // Reference scenario: n=1000/1000, p=0.10/0.12
    let first = run_once(1000, 1000, 0.10, 0.12, 42).unwrap();
    let second = run_once(1000, 1000, 0.10, 0.12, 42).unwrap();

    assert_eq!(first.z_score, second.z_score);
    assert_eq!(first.p_value, second.p_value);
}

#[test]
fn test_different_seeds_vary_results() {
    let results: Vec<TestResult> = (0..5)
        .map(|seed| run_once(1000, 1000, 0.10, 0.12, seed).unwrap())
        .collect();
    let distinct = results
        .iter()
        .map(|r| r.z_score.to_bits())
        .collect::<std::collections::HashSet<_>>();
    assert!(distinct.len() > 1);
}

// ============================================================================
// Statistical Property Tests (aggregate over many seeds)
// ============================================================================

#[test]
fn test_identical_rates_rarely_significant() {
    // n=100 per group, p=0.5 in both: the null hypothesis is true, so the
    // p-value should exceed 0.05 in the overwhelming majority of runs.
    let mut not_significant = 0;
    for seed in 0..100 {
        let result = run_once(100, 100, 0.5, 0.5, seed).unwrap();
        if result.p_value > 0.05 {
            not_significant += 1;
        }
    }
    assert!(
        not_significant >= 80,
        "only {}/100 runs were non-significant",
        not_significant
    );
}

#[test]
fn test_separated_rates_drive_p_value_to_zero() {
    for seed in 0..20 {
        let result = run_once(5000, 5000, 0.10, 0.30, seed).unwrap();
        assert!(
            result.p_value < 1e-6,
            "seed {} gave p = {}",
            seed,
            result.p_value
        );
    }
}

#[test]
fn test_swap_symmetry_on_generated_data() {
    let params = SimParams::new(900, 1100, 0.15, 0.25).unwrap();
    let records = generate_seeded(&params, 5).unwrap();
    let summaries = summarize(&records).unwrap();

    let forward = two_proportion_z_test(&summaries[&Group::A], &summaries[&Group::B]).unwrap();
    let reversed = two_proportion_z_test(&summaries[&Group::B], &summaries[&Group::A]).unwrap();

    assert!((forward.z_score + reversed.z_score).abs() < 1e-12);
    assert!((forward.p_value - reversed.p_value).abs() < 1e-12);
}

#[test]
fn test_degenerate_rates_surface_degenerate_input() {
    let err = run_once(100, 100, 0.0, 0.0, 9).unwrap_err();
    assert!(matches!(err, Error::DegenerateInput(_)));

    let err = run_once(100, 100, 1.0, 1.0, 9).unwrap_err();
    assert!(matches!(err, Error::DegenerateInput(_)));
}

// ============================================================================
// Sensitivity Sweep Tests
// ============================================================================

#[test]
fn test_sweep_grid_and_determinism() {
    let first = sensitivity_sweep(0.10, 0.12, 5000, 42).unwrap();
    let second = sensitivity_sweep(0.10, 0.12, 5000, 42).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), SWEEP_POINTS);
    assert_eq!(first.first().unwrap().sample_size, 100);
    assert_eq!(first.last().unwrap().sample_size, 5000);
    assert!(first.windows(2).all(|w| w[0].sample_size < w[1].sample_size));
}

#[test]
fn test_sweep_well_separated_rates_end_below_threshold() {
    let points = sensitivity_sweep(0.10, 0.30, MAX_GROUP_SIZE, 11).unwrap();
    let last = points.last().unwrap();
    assert!(last.p_value < 0.001, "p = {}", last.p_value);
}

#[test]
fn test_sweep_points_are_valid_probabilities() {
    let points = sensitivity_sweep(0.45, 0.55, 3000, 13).unwrap();
    for point in points {
        assert!((0.0..=1.0).contains(&point.p_value));
    }
}
