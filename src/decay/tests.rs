//! Series-level tests for the decay engine
//!
//! All tests go through `compute_series` with the Hg-197m/Hg-197g half-lives.

use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime};

use crate::decay::*;

// ============================================================================
// Helpers
// ============================================================================

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn hg197(initial_parent: f64, initial_daughter: f64) -> DecayParameters {
    DecayParameters::new(initial_parent, initial_daughter, 23.8, 64.14, at(1, 0, 0))
}

fn observe(params: &DecayParameters, points: &[NaiveDateTime]) -> Vec<Observation> {
    points
        .iter()
        .map(|ts| params.observe(ts.format("%Y-%m-%d %H:%M").to_string(), *ts))
        .collect()
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn one_parent_half_life() {
    let params = hg197(100.0, 0.0);
    let obs = observe(&params, &[at(1, 23, 48)]);
    let series = compute_series(&params, &obs).unwrap();
    let r = &series.results[0];

    assert_relative_eq!(r.elapsed_hours, 23.8, epsilon = 1e-12);
    assert_relative_eq!(r.parent_activity, 50.0, epsilon = 1e-3);
    assert!(r.daughter_activity > 0.0);
    assert_relative_eq!(
        r.parent_percent.unwrap() + r.daughter_percent.unwrap(),
        100.0,
        epsilon = 1e-9
    );
    assert!(series.warnings.is_empty());
}

#[test]
fn at_reference_time() {
    let params = hg197(100.0, 0.0);
    let obs = observe(&params, &[at(1, 0, 0)]);
    let series = compute_series(&params, &obs).unwrap();
    let r = &series.results[0];

    assert_eq!(r.elapsed_hours, 0.0);
    assert_eq!(r.parent_activity, 100.0);
    assert_eq!(r.daughter_activity, 0.0);
    assert_eq!(r.decay_factor_parent, Some(1.0));
    assert_eq!(r.decay_factor_daughter, Some(0.0));
    assert_eq!(r.parent_percent, Some(100.0));
    assert_eq!(r.daughter_percent, Some(0.0));
}

#[test]
fn before_reference_extrapolates_backward() {
    let params = hg197(100.0, 50.0);
    let obs = observe(&params, &[NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()]);
    let series = compute_series(&params, &obs).unwrap();
    let r = &series.results[0];

    assert_relative_eq!(r.elapsed_hours, -12.0);
    assert!(r.parent_activity > 100.0);
    assert!(r.decay_factor_parent.unwrap() > 1.0);
}

#[test]
fn negative_daughter_is_reported_not_clamped() {
    let params = hg197(100.0, 0.0);
    let obs = observe(&params, &[NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()]);
    let series = compute_series(&params, &obs).unwrap();

    assert!(series.results[0].daughter_activity < 0.0);
    assert_eq!(series.warnings.len(), 1);
    assert!(series.warnings[0].contains("Negative daughter activity"));
}

// ============================================================================
// Undefined quantities
// ============================================================================

#[test]
fn zero_initial_parent_leaves_parent_factor_undefined() {
    let params = hg197(0.0, 40.0);
    let obs = observe(&params, &[at(2, 0, 0)]);
    let r = &compute_series(&params, &obs).unwrap().results[0];

    assert_eq!(r.parent_activity, 0.0);
    assert_eq!(r.decay_factor_parent, None);
    assert!(r.decay_factor_daughter.is_some());
    assert_eq!(r.parent_percent, Some(0.0));
    assert_eq!(r.daughter_percent, Some(100.0));
}

#[test]
fn all_zero_activity_leaves_shares_undefined() {
    let params = hg197(0.0, 0.0);
    let obs = observe(&params, &[at(1, 6, 0), at(2, 6, 0)]);
    let series = compute_series(&params, &obs).unwrap();

    for r in &series {
        assert_eq!(r.parent_percent, None);
        assert_eq!(r.daughter_percent, None);
        assert_eq!(r.decay_factor_parent, None);
        assert_eq!(r.decay_factor_daughter, None);
    }
    assert_eq!(series.warnings.len(), 2);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn invalid_activity_is_rejected() {
    let params = hg197(-1.0, 0.0);
    let err = compute_series(&params, &[]).unwrap_err();
    assert_eq!(
        err,
        DecayError::InvalidParameter {
            param: "initial_parent".into(),
            value: "-1".into()
        }
    );

    let params = hg197(1.0, f64::NAN);
    assert!(matches!(
        compute_series(&params, &[]),
        Err(DecayError::InvalidParameter { .. })
    ));
}

#[test]
fn invalid_half_life_is_rejected_before_any_observation() {
    let params = hg197(100.0, 0.0).with_half_lives(0.0, 64.14);
    let obs = observe(&params, &[at(2, 0, 0)]);
    assert!(matches!(
        compute_series(&params, &obs),
        Err(DecayError::InvalidParameter { ref param, .. }) if param == "half_life_parent"
    ));
}

#[test]
fn degenerate_chain_is_rejected() {
    let params = hg197(100.0, 0.0).with_half_lives(23.8, 23.8 / BRANCHING_FRACTION);
    let obs = observe(&params, &[at(2, 0, 0)]);
    assert!(matches!(
        compute_series(&params, &obs),
        Err(DecayError::DegenerateChain { .. })
    ));
}

// ============================================================================
// Series properties
// ============================================================================

#[test]
fn order_follows_input_not_time() {
    let params = hg197(100.0, 10.0);
    let points = [at(3, 0, 0), at(1, 6, 0), at(2, 12, 0), at(1, 0, 0)];
    let obs = observe(&params, &points);
    let series = compute_series(&params, &obs).unwrap();

    let hours: Vec<f64> = series.iter().map(|r| r.elapsed_hours).collect();
    assert_eq!(hours, vec![48.0, 6.0, 36.0, 0.0]);
    for (r, o) in series.iter().zip(obs.iter()) {
        assert_eq!(r.raw_label, o.raw_label);
    }
}

#[test]
fn repeated_computation_is_identical() {
    let params = hg197(123.4, 5.6);
    let obs = observe(&params, &[at(1, 3, 0), at(4, 7, 30), at(1, 0, 0)]);
    let a = compute_series(&params, &obs).unwrap();
    let b = compute_series(&params, &obs).unwrap();
    assert_eq!(a, b);
}

#[test]
fn chart_series_mirror_results() {
    let params = hg197(100.0, 0.0);
    let obs = observe(&params, &[at(1, 0, 0), at(1, 23, 48)]);
    let series = compute_series(&params, &obs).unwrap();

    let activity = series.activity_series();
    let percent = series.percent_series();
    assert_eq!(activity.len(), 2);
    assert_eq!(activity[0], (0.0, 100.0, 0.0));
    assert_eq!(percent[0], (0.0, Some(100.0), Some(0.0)));
    assert_eq!(activity[1].0, percent[1].0);
}

#[test]
fn empty_observation_list_yields_empty_series() {
    let params = hg197(100.0, 0.0);
    let series = compute_series(&params, &[]).unwrap();
    assert!(series.is_empty());
    assert_eq!(series.len(), 0);
}

#[test]
fn elapsed_time_follows_parameter_reference() {
    let params = hg197(100.0, 0.0);
    let obs = observe(&params, &[at(2, 0, 0)]);
    assert_eq!(obs[0].elapsed_hours, 24.0);

    let moved = params.with_reference(at(2, 0, 0));
    let series = compute_series(&moved, &obs).unwrap();
    let r = &series.results[0];

    assert_eq!(r.timestamp, series.parameters.reference);
    assert_eq!(r.elapsed_hours, 0.0);
    assert_eq!(r.parent_activity, 100.0);
    assert_eq!(r.decay_factor_parent, Some(1.0));
}

#[test]
fn far_past_timepoint_is_rejected_not_infinite() {
    let params = hg197(100.0, 0.0);
    let mistyped_year = NaiveDate::from_ymd_opt(2022, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let obs = observe(&params, &[at(1, 12, 0), mistyped_year]);

    match compute_series(&params, &obs) {
        Err(DecayError::NonFiniteActivity {
            label,
            elapsed_hours,
        }) => {
            assert_eq!(label, "2022-01-01 00:00");
            assert_eq!(elapsed_hours, -26304.0);
        }
        other => panic!("expected NonFiniteActivity, got {other:?}"),
    }
}

#[test]
fn finite_results_pass_the_finiteness_check() {
    let params = hg197(100.0, 50.0);
    let obs = observe(&params, &[at(1, 0, 0), at(1, 23, 48), at(20, 0, 0)]);
    let series = compute_series(&params, &obs).unwrap();
    assert!(series.iter().all(ActivityResult::is_finite));
}
