// src/scalar/methods.rs

use crate::ops::activation::{relu_op, sigmoid_op};
use crate::ops::arithmetic::{add_op, div_op, inv_op, mul_op, neg_op, sub_op};
use crate::ops::comparison::{eq_op, lt_op};
use crate::ops::math_elem::{exp_op, log_op};
use crate::scalar::Scalar;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Scalar {
    pub fn log(&self) -> Scalar {
        log_op(self)
    }

    pub fn exp(&self) -> Scalar {
        exp_op(self)
    }

    pub fn sigmoid(&self) -> Scalar {
        sigmoid_op(self)
    }

    pub fn relu(&self) -> Scalar {
        relu_op(self)
    }

    pub fn inv(&self) -> Scalar {
        inv_op(self)
    }

    /// `1.0` if `self < other`, else `0.0`. Not differentiable (zero derivative).
    pub fn lt(&self, other: &Scalar) -> Scalar {
        lt_op(self, other)
    }

    /// `1.0` if `self > other`, else `0.0`.
    pub fn gt(&self, other: &Scalar) -> Scalar {
        lt_op(other, self)
    }

    /// `1.0` if both values are equal, else `0.0`.
    pub fn equal(&self, other: &Scalar) -> Scalar {
        eq_op(self, other)
    }
}

// --- std::ops sugar ---
// Both operands by reference; a plain f64 on the right is lifted to a constant.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:ident) => {
        impl $trait<&Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op(self, rhs)
            }
        }

        impl $trait<Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op(&self, &rhs)
            }
        }

        impl $trait<f64> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op(self, &Scalar::constant(rhs))
            }
        }

        impl $trait<&Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op(&Scalar::constant(self), rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for &Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        neg_op(&self)
    }
}
