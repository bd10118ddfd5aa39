use super::*;
use crate::error::RevgradError;
use crate::utils::testing::check_derivative_near;
use approx::assert_relative_eq;

#[test]
fn test_neg_forward() {
    assert_relative_eq!(neg_op(&Scalar::new(2.5)).value(), -2.5);
    assert_relative_eq!(neg_op(&Scalar::new(-1.0)).value(), 1.0);
}

#[test]
fn test_neg_backward() -> Result<(), RevgradError> {
    let x = Scalar::new(2.5);
    neg_op(&x).backward_with(3.0)?;
    check_derivative_near(&x, -3.0, 1e-12);
    Ok(())
}

#[test]
fn test_double_negation() -> Result<(), RevgradError> {
    let x = Scalar::new(1.0);
    neg_op(&neg_op(&x)).backward()?;
    check_derivative_near(&x, 1.0, 1e-12);
    Ok(())
}
