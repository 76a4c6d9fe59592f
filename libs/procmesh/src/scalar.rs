//! # Scalar Operations
//!
//! Small arithmetic helper for host-side numeric parameters.
//!
//! Kept alongside the mesh pipeline for hosts that combine numeric inputs
//! before feeding them into shape or transform parameters.

use serde::{Deserialize, Serialize};

/// Binary arithmetic operations on scalar parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Applies an arithmetic operation to two scalars.
///
/// Division by zero yields the sentinel `0.0` instead of an error or a
/// non-finite value. This never-raise fallback is documented policy:
/// scalar parameter plumbing must not abort a pipeline over a zero
/// divisor.
///
/// # Example
///
/// ```rust
/// use procmesh::scalar::{apply, ArithmeticOp};
///
/// assert_eq!(apply(ArithmeticOp::Add, 2.0, 3.0), 5.0);
/// assert_eq!(apply(ArithmeticOp::Divide, 1.0, 0.0), 0.0);
/// ```
pub fn apply(op: ArithmeticOp, a: f64, b: f64) -> f64 {
    match op {
        ArithmeticOp::Add => a + b,
        ArithmeticOp::Subtract => a - b,
        ArithmeticOp::Multiply => a * b,
        ArithmeticOp::Divide => {
            if b == 0.0 {
                0.0
            } else {
                a / b
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(apply(ArithmeticOp::Add, 2.0, 3.0), 5.0);
        assert_eq!(apply(ArithmeticOp::Subtract, 2.0, 3.0), -1.0);
        assert_eq!(apply(ArithmeticOp::Multiply, 2.0, 3.0), 6.0);
        assert_eq!(apply(ArithmeticOp::Divide, 6.0, 3.0), 2.0);
    }

    #[test]
    fn test_divide_by_zero_sentinel() {
        assert_eq!(apply(ArithmeticOp::Divide, 1.0, 0.0), 0.0);
        assert_eq!(apply(ArithmeticOp::Divide, -5.0, 0.0), 0.0);
        assert_eq!(apply(ArithmeticOp::Divide, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_divide_negative_zero() {
        // -0.0 == 0.0 in IEEE comparison, so it takes the sentinel path too
        assert_eq!(apply(ArithmeticOp::Divide, 1.0, -0.0), 0.0);
    }
}
