//! Binary operator implementations.
//!
//! Provides direct enum-based dispatch for binary operations. The variant
//! set is closed, so operands are matched pairwise instead of going through
//! trait objects.
//!
//! Numeric promotion is applied left-to-right: Int with Int stays Int (with
//! checked arithmetic), any other pairing of numbers is computed as Float.
//! `+` is the only operator with a String overload.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, modulo_by_zero, ValueError,
    ValueResult,
};
use crate::value::{ScalarInt, Value};

/// Binary operators understood by the value layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    /// Eager logical AND over truthiness.
    And,
    /// Eager logical OR over truthiness.
    Or,
}

impl BinaryOp {
    /// Source-level symbol, used in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

// Helper functions for repetitive checked arithmetic patterns

/// Checked arithmetic where the only error case is overflow.
#[inline]
fn checked_arith(result: Option<ScalarInt>, op_name: &'static str) -> ValueResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked division with zero guard.
///
/// Returns `division_by_zero` if the divisor is zero, `integer_overflow` if the
/// quotient overflows (`i64::MIN / -1`).
#[inline]
fn checked_div<F>(is_zero: bool, op: F, op_name: &'static str) -> ValueResult
where
    F: FnOnce() -> Option<ScalarInt>,
{
    if is_zero {
        Err(division_by_zero())
    } else {
        op().map(Value::Int).ok_or_else(|| integer_overflow(op_name))
    }
}

/// Checked modulo with zero guard.
#[inline]
fn checked_mod<F>(is_zero: bool, op: F, op_name: &'static str) -> ValueResult
where
    F: FnOnce() -> Option<ScalarInt>,
{
    if is_zero {
        Err(modulo_by_zero())
    } else {
        op().map(Value::Int).ok_or_else(|| integer_overflow(op_name))
    }
}

#[cold]
fn type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> ValueError {
    binary_type_mismatch(op.as_symbol(), left.type_name(), right.type_name())
}

// Direct Dispatch Function

/// Evaluate a binary operation.
///
/// This is the entry point the interpreter uses for every binary opcode.
/// Failures are returned, never panicked, and are logged at debug level.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> ValueResult {
    let result = match op {
        BinaryOp::Eq => Ok(Value::Bool(left.equals(right))),
        BinaryOp::NotEq => Ok(Value::Bool(left.not_equals(right))),
        BinaryOp::And => Ok(Value::Bool(left.logical_and(right))),
        BinaryOp::Or => Ok(Value::Bool(left.logical_or(right))),
        BinaryOp::Lt => compare(left, right, op, Ordering::is_lt).map(Value::Bool),
        BinaryOp::LtEq => compare(left, right, op, Ordering::is_le).map(Value::Bool),
        BinaryOp::Gt => compare(left, right, op, Ordering::is_gt).map(Value::Bool),
        BinaryOp::GtEq => compare(left, right, op, Ordering::is_ge).map(Value::Bool),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
            arithmetic(left, right, op)
        }
    };
    if let Err(err) = &result {
        tracing::debug!(
            op = op.as_symbol(),
            left = left.type_name(),
            right = right.type_name(),
            %err,
            "binary operator failed"
        );
    }
    result
}

// Type-Specific Evaluation Functions

fn arithmetic(left: &Value, right: &Value, op: BinaryOp) -> ValueResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_arith(*a, *b, op, left, right),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            eval_float_arith(left.as_float(), right.as_float(), op, left, right)
        }
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(joined))
        }
        _ => Err(type_mismatch(op, left, right)),
    }
}

/// Arithmetic on integers.
///
/// All arithmetic goes through `ScalarInt`'s checked methods, so overflow
/// is reported instead of wrapping.
fn eval_int_arith(
    a: ScalarInt,
    b: ScalarInt,
    op: BinaryOp,
    left: &Value,
    right: &Value,
) -> ValueResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => checked_div(b.is_zero(), || a.checked_div(b), "division"),
        BinaryOp::Mod => checked_mod(b.is_zero(), || a.checked_rem(b), "remainder"),
        _ => Err(type_mismatch(op, left, right)),
    }
}

/// Arithmetic on a promoted pair of numbers.
///
/// The divisor is checked against zero before dividing, so `x / 0.0` is an
/// error rather than an infinity. `%` has no Float form.
fn eval_float_arith(a: f64, b: f64, op: BinaryOp, left: &Value, right: &Value) -> ValueResult {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div if b == 0.0 => Err(division_by_zero()),
        BinaryOp::Div => Ok(Value::Float(a / b)),
        _ => Err(type_mismatch(op, left, right)),
    }
}

/// Ordering comparison. `holds` decides which orderings satisfy `op`; an
/// unordered pair (a NaN operand) satisfies none of them.
fn compare(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    holds: fn(Ordering) -> bool,
) -> ValueResult<bool> {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            left.as_float().partial_cmp(&right.as_float())
        }
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => return Err(type_mismatch(op, left, right)),
    };
    Ok(ordering.is_some_and(holds))
}

// Named Operators

impl Value {
    /// Eager logical AND: both operands are already evaluated.
    pub fn logical_and(&self, other: &Value) -> bool {
        self.is_truthy() && other.is_truthy()
    }

    /// Eager logical OR: both operands are already evaluated.
    pub fn logical_or(&self, other: &Value) -> bool {
        self.is_truthy() || other.is_truthy()
    }

    pub fn less_than(&self, other: &Value) -> ValueResult<bool> {
        evaluate_binary(self, other, BinaryOp::Lt)?.as_bool()
    }

    pub fn less_equal(&self, other: &Value) -> ValueResult<bool> {
        evaluate_binary(self, other, BinaryOp::LtEq)?.as_bool()
    }

    pub fn greater_than(&self, other: &Value) -> ValueResult<bool> {
        evaluate_binary(self, other, BinaryOp::Gt)?.as_bool()
    }

    pub fn greater_equal(&self, other: &Value) -> ValueResult<bool> {
        evaluate_binary(self, other, BinaryOp::GtEq)?.as_bool()
    }
}

/// Arithmetic operator sugar. The output is a `ValueResult` because every
/// operator can fail on an unsupported operand pair.
macro_rules! impl_arith_op {
    ($($trait:ident :: $method:ident => $op:expr;)*) => {$(
        impl $trait<&Value> for &Value {
            type Output = ValueResult;

            fn $method(self, rhs: &Value) -> ValueResult {
                evaluate_binary(self, rhs, $op)
            }
        }

        impl $trait for Value {
            type Output = ValueResult;

            fn $method(self, rhs: Value) -> ValueResult {
                evaluate_binary(&self, &rhs, $op)
            }
        }
    )*};
}

impl_arith_op! {
    Add::add => BinaryOp::Add;
    Sub::sub => BinaryOp::Sub;
    Mul::mul => BinaryOp::Mul;
    Div::div => BinaryOp::Div;
    Rem::rem => BinaryOp::Mod;
}
