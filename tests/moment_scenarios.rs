//! Fixture-driven moment tests.
//!
//! Every scenario in `tests/fixtures/moment_scenarios.json` runs through the
//! compile-time and runtime dimension instantiations and under both
//! summation modes.

mod helpers;

use helpers::assertions::{assert_matrix_rows_close, assert_symmetric, assert_vec_close};
use helpers::fixtures::{load_scenarios, run_scenario, DimensionKind};
use weighted_point_set_rs::{PointSetConfig, SummationMode};

const TOLERANCE: f64 = 1e-12;

fn check_all(config: PointSetConfig) {
    let scenarios = load_scenarios();
    assert!(!scenarios.is_empty(), "No scenarios loaded");

    for scenario in &scenarios {
        for kind in DimensionKind::ALL {
            if !kind.supports(scenario.dimension()) {
                continue;
            }
            let label = format!("{} ({:?}, {:?})", scenario.name, kind, config.summation);
            let outcome = run_scenario(kind, scenario, config);

            assert_eq!(outcome.dimension, scenario.dimension(), "{}: dimension", label);
            assert_vec_close(
                &outcome.weights,
                &scenario.expected_weights,
                TOLERANCE,
                &format!("{} weights", label),
            );
            assert_vec_close(
                &outcome.mean,
                &scenario.expected_mean,
                TOLERANCE,
                &format!("{} mean", label),
            );
            assert_matrix_rows_close(
                &outcome.covariance,
                &scenario.expected_covariance,
                TOLERANCE,
                &format!("{} covariance", label),
            );
            assert_symmetric(&outcome.covariance, 0.0, &label);
        }
    }
}

#[test]
fn test_scenarios_naive_summation() {
    check_all(PointSetConfig::default());
}

#[test]
fn test_scenarios_compensated_summation() {
    check_all(PointSetConfig::default().with_summation(SummationMode::Compensated));
}

#[test]
fn test_static_and_dynamic_agree() {
    for scenario in load_scenarios() {
        if !DimensionKind::Static.supports(scenario.dimension()) {
            continue;
        }
        let fixed = run_scenario(DimensionKind::Static, &scenario, PointSetConfig::default());
        let runtime = run_scenario(DimensionKind::Dynamic, &scenario, PointSetConfig::default());

        assert_vec_close(&fixed.weights, &runtime.weights, 1e-15, &scenario.name);
        assert_vec_close(&fixed.mean, &runtime.mean, 1e-15, &scenario.name);
        assert_vec_close(
            fixed.covariance.as_slice(),
            runtime.covariance.as_slice(),
            1e-15,
            &scenario.name,
        );
    }
}
