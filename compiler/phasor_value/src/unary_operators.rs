//! Unary operator implementations.
//!
//! Direct enum-based dispatch, mirroring `operators.rs`.

use std::ops::{Neg, Not};

use crate::errors::{integer_overflow, invalid_unary_op, ValueResult};
use crate::value::Value;

/// Unary operators understood by the value layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Numeric negation.
    Neg,
    /// Logical not over truthiness.
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

/// Evaluate a unary operation.
///
/// `!` is defined for every variant (it negates truthiness); `-` only for
/// Int and Float.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> ValueResult {
    let result = match (value, op) {
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Float(f), UnaryOp::Neg) => Ok(Value::Float(-f)),
        (_, UnaryOp::Not) => Ok(Value::Bool(value.logical_not())),
        _ => Err(invalid_unary_op(op.as_symbol(), value.type_name())),
    };
    if let Err(err) = &result {
        tracing::debug!(op = op.as_symbol(), operand = value.type_name(), %err, "unary operator failed");
    }
    result
}

impl Value {
    /// Numeric negation; fails for non-numeric variants.
    pub fn negate(&self) -> ValueResult {
        evaluate_unary(self, UnaryOp::Neg)
    }

    pub fn logical_not(&self) -> bool {
        !self.is_truthy()
    }
}

impl Neg for &Value {
    type Output = ValueResult;

    fn neg(self) -> ValueResult {
        self.negate()
    }
}

impl Not for &Value {
    type Output = Value;

    fn not(self) -> Value {
        Value::Bool(self.logical_not())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::errors::ValueErrorKind;

    mod negation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn int_positive() {
            assert_eq!(
                evaluate_unary(&Value::int(5), UnaryOp::Neg).unwrap(),
                Value::int(-5)
            );
        }

        #[test]
        fn int_negative() {
            assert_eq!(
                evaluate_unary(&Value::int(-5), UnaryOp::Neg).unwrap(),
                Value::int(5)
            );
        }

        #[test]
        fn int_zero() {
            assert_eq!(
                evaluate_unary(&Value::int(0), UnaryOp::Neg).unwrap(),
                Value::int(0)
            );
        }

        #[test]
        fn float() {
            assert_eq!(
                evaluate_unary(&Value::float(2.5), UnaryOp::Neg).unwrap(),
                Value::float(-2.5)
            );
        }

        #[test]
        fn operator_sugar() {
            assert_eq!((-&Value::int(3)).unwrap(), Value::int(-3));
            assert_eq!(Value::float(-1.0).negate().unwrap(), Value::float(1.0));
        }
    }

    mod negation_boundaries {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn int_max() {
            assert_eq!(
                evaluate_unary(&Value::int(i64::MAX), UnaryOp::Neg).unwrap(),
                Value::int(-i64::MAX)
            );
        }

        #[test]
        fn int_min_overflows() {
            let err = evaluate_unary(&Value::int(i64::MIN), UnaryOp::Neg).unwrap_err();
            assert_eq!(
                err.kind,
                ValueErrorKind::IntegerOverflow {
                    operation: "negation"
                }
            );
        }
    }

    mod logical_not {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn bools() {
            assert_eq!(
                evaluate_unary(&Value::Bool(true), UnaryOp::Not).unwrap(),
                Value::Bool(false)
            );
            assert_eq!(
                evaluate_unary(&Value::Bool(false), UnaryOp::Not).unwrap(),
                Value::Bool(true)
            );
        }

        #[test]
        fn follows_truthiness() {
            assert_eq!(!&Value::Null, Value::Bool(true));
            assert_eq!(!&Value::int(3), Value::Bool(false));
            assert_eq!(!&Value::string("false"), Value::Bool(true));
            assert_eq!(!&Value::string("no"), Value::Bool(false));
            assert_eq!(!&Value::empty_array(), Value::Bool(true));
            assert_eq!(!&Value::create_struct("S"), Value::Bool(true));
        }
    }

    mod type_errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn negate_non_numbers() {
            for value in [
                Value::Null,
                Value::Bool(true),
                Value::string("1"),
                Value::empty_array(),
                Value::create_struct("S"),
            ] {
                let err = evaluate_unary(&value, UnaryOp::Neg).unwrap_err();
                assert_eq!(
                    err.kind,
                    ValueErrorKind::InvalidUnaryOp {
                        op: "-",
                        operand: value.type_name()
                    }
                );
            }
        }
    }
}
