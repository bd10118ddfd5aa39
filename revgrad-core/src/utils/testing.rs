use crate::scalar::Scalar;

/// Checks that a leaf's accumulated derivative is within `tolerance` of `expected`.
/// Panics if no derivative was accumulated or if it differs too much.
pub fn check_derivative_near(actual: &Scalar, expected: f64, tolerance: f64) {
    let derivative = match actual.derivative() {
        Some(d) => d,
        None => panic!("No derivative accumulated on {:?}", actual),
    };
    let diff = (derivative - expected).abs();
    if diff > tolerance || diff.is_nan() {
        panic!(
            "Derivative mismatch on {:?}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, derivative, expected, diff, tolerance
        );
    }
}

/// Checks several leaves at once, pairing each with its expected derivative.
pub fn check_derivatives_near(actual: &[&Scalar], expected: &[f64], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Length mismatch"
    );
    for (scalar, &e) in actual.iter().zip(expected.iter()) {
        check_derivative_near(scalar, e, tolerance);
    }
}
