//! Error types for value operations.
//!
//! Every failure in this crate is surfaced as a [`ValueError`]. Nothing is
//! recovered locally: the hosting interpreter decides whether an error is
//! fatal or handled at a higher level.
//!
//! # Structured Error Categories
//!
//! `ValueErrorKind` carries the operator symbol and operand type names for
//! each failure, so callers can match on the kind instead of parsing
//! messages. Factory functions (e.g., `division_by_zero()`) are the public
//! construction API; they populate both `kind` and `message`.

use std::fmt;

/// Result of a value operation.
pub type ValueResult<T = crate::Value> = Result<T, ValueError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValueErrorKind {
    // Operators
    #[error("cannot apply operator `{op}` to `{left}` and `{right}`")]
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("cannot apply unary operator `{op}` to `{operand}`")]
    InvalidUnaryOp {
        op: &'static str,
        operand: &'static str,
    },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Access
    #[error("expected {expected} value, got {got}")]
    InvalidAccessor {
        expected: &'static str,
        got: &'static str,
    },
    #[error("{operation}() called on non-struct value of type {got}")]
    NonStructFieldAccess {
        operation: &'static str,
        got: &'static str,
    },
    #[error("{operation}() called on non-array value of type {got}")]
    NonArrayElementAccess {
        operation: &'static str,
        got: &'static str,
    },
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("{type_name} is already borrowed")]
    BorrowConflict { type_name: &'static str },
}

/// Value operation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueError {
    /// Structured error category.
    pub kind: ValueErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// Additional context attached by callers.
    pub notes: Vec<String>,
}

impl ValueError {
    fn from_kind(kind: ValueErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            notes: Vec::new(),
        }
    }

    /// Add a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValueError {}

impl From<ValueErrorKind> for ValueError {
    fn from(kind: ValueErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

// Operator Errors

/// Operator applied to an unsupported pair of operand types.
#[cold]
pub fn binary_type_mismatch(op: &'static str, left: &'static str, right: &'static str) -> ValueError {
    ValueError::from_kind(ValueErrorKind::TypeMismatch { op, left, right })
}

/// Unary operator applied to an unsupported operand type.
#[cold]
pub fn invalid_unary_op(op: &'static str, operand: &'static str) -> ValueError {
    ValueError::from_kind(ValueErrorKind::InvalidUnaryOp { op, operand })
}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> ValueError {
    ValueError::from_kind(ValueErrorKind::DivisionByZero)
}

/// Modulo by zero error.
#[cold]
pub fn modulo_by_zero() -> ValueError {
    ValueError::from_kind(ValueErrorKind::ModuloByZero)
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &'static str) -> ValueError {
    ValueError::from_kind(ValueErrorKind::IntegerOverflow { operation })
}

// Access Errors

/// Strict accessor invoked on the wrong variant.
#[cold]
pub fn invalid_accessor(expected: &'static str, got: &'static str) -> ValueError {
    ValueError::from_kind(ValueErrorKind::InvalidAccessor { expected, got })
}

/// Field access on a value that is not a struct.
#[cold]
pub fn non_struct_field_access(operation: &'static str, got: &'static str) -> ValueError {
    ValueError::from_kind(ValueErrorKind::NonStructFieldAccess { operation, got })
}

/// Element access on a value that is not an array.
#[cold]
pub fn non_array_element_access(operation: &'static str, got: &'static str) -> ValueError {
    ValueError::from_kind(ValueErrorKind::NonArrayElementAccess { operation, got })
}

/// Array index outside `0..len`.
#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> ValueError {
    ValueError::from_kind(ValueErrorKind::IndexOutOfBounds { index, len })
}

/// Heap object is already mutably borrowed elsewhere.
#[cold]
pub fn borrow_conflict(type_name: &'static str) -> ValueError {
    ValueError::from_kind(ValueErrorKind::BorrowConflict { type_name })
}
