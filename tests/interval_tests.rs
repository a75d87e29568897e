//! Reference values and scalar behavior for the Agresti-Coull estimator

use approx::assert_abs_diff_eq;
use binomial_confidence::{agresti_coull, agresti_coull_for_level, Error, DEFAULT_Z};

/// Reference table for z = 2.0: (n, x, center, half_width)
const REFERENCE: &[(u64, u64, f64, f64)] = &[
    (1, 0, 0.4, 0.4382),
    (2, 0, 0.3333, 0.3849),
    (3, 0, 0.2857, 0.3415),
    (1, 1, 0.6, 0.4382),
    (2, 2, 0.6667, 0.3849),
    (3, 3, 0.7143, 0.3415),
];

#[test]
fn test_reference_values() {
    let estimator = agresti_coull();

    for &(n, x, center, half_width) in REFERENCE {
        let interval = estimator.estimate(n, x).unwrap().unwrap();
        assert_abs_diff_eq!(interval.center, center, epsilon = 5e-5);
        assert_abs_diff_eq!(interval.half_width, half_width, epsilon = 5e-5);
    }
}

#[test]
fn test_default_multiplier() {
    assert_eq!(agresti_coull().z(), DEFAULT_Z);
    assert_eq!(DEFAULT_Z, 2.0);
}

#[test]
fn test_complementary_counts_are_symmetric() {
    let estimator = agresti_coull();

    for n in [1u64, 2, 3, 10, 50, 1000] {
        for x in 0..=n.min(5) {
            let low = estimator.estimate(n, x).unwrap().unwrap();
            let high = estimator.estimate(n, n - x).unwrap().unwrap();

            assert_abs_diff_eq!(low.center + high.center, 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(low.half_width, high.half_width, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_undefined_for_nonpositive_sample() {
    let estimator = agresti_coull();

    assert_eq!(estimator.estimate(0u64, 0u64).unwrap(), None);
    assert_eq!(estimator.estimate(0u64, 7u64).unwrap(), None);
    assert_eq!(estimator.estimate(-5i64, 3i64).unwrap(), None);
    assert_eq!(estimator.estimate(-0.1f64, 0.0f64).unwrap(), None);
}

#[test]
fn test_center_shrinks_toward_one_half() {
    let estimator = agresti_coull();

    // Below one half the adjusted center is pulled up, above it down
    let low = estimator.estimate(50u64, 10u64).unwrap().unwrap();
    assert!(low.center > 10.0 / 50.0);
    assert!(low.center < 0.5);

    let high = estimator.estimate(50u64, 40u64).unwrap().unwrap();
    assert!(high.center < 40.0 / 50.0);
    assert!(high.center > 0.5);
}

#[test]
fn test_bounds_not_clamped() {
    // Certain outcomes at moderate n push a bound past the unit interval
    let interval = agresti_coull().estimate(100u64, 0u64).unwrap().unwrap();

    assert!(interval.lower() < 0.0);
    assert!(interval.upper() > 0.0);
    assert!(interval.contains(0.0));
}

#[test]
fn test_success_count_out_of_range() {
    let estimator = agresti_coull();

    let err = estimator.estimate(10u64, 11u64).unwrap_err();
    assert!(matches!(err, Error::SuccessCountOutOfRange { .. }));
    assert_eq!(format!("{}", err), "Success count 11 must be in [0, 10]");

    assert!(estimator.estimate(10.0, -0.5).is_err());
}

#[test]
fn test_confidence_level_multiplier() {
    let estimator = agresti_coull_for_level(0.95);
    assert_abs_diff_eq!(estimator.z(), 1.959964, epsilon = 1e-6);

    // The default multiplier corresponds to ~95.45% confidence
    assert_abs_diff_eq!(agresti_coull().confidence_level(), 0.95450, epsilon = 1e-5);
}

#[test]
fn test_estimates_are_deterministic() {
    let estimator = agresti_coull();

    let a = estimator.estimate(1234u64, 567u64).unwrap().unwrap();
    let b = estimator.estimate(1234u64, 567u64).unwrap().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_integer_and_float_counts_agree() {
    let estimator = agresti_coull();

    let from_ints = estimator.estimate(50u64, 21u64).unwrap().unwrap();
    let from_floats = estimator.estimate(50.0, 21.0).unwrap().unwrap();
    assert_eq!(from_ints, from_floats);
}
