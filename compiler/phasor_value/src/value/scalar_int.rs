//! Payload of `Value::Int`.
//!
//! Phasor integers are 64-bit and never wrap. `ScalarInt` has no operator
//! impls, so the binary and unary operator code can only reach integer
//! arithmetic through the `checked_*` methods below, and every overflow
//! turns into an `IntegerOverflow` error at the call site.

use std::fmt;

/// Checked 64-bit Phasor integer.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct ScalarInt(i64);

/// Forward a checked `i64` operation, keeping the result wrapped.
macro_rules! checked_ops {
    ($($(#[$doc:meta])* $name:ident;)*) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name(self, rhs: Self) -> Option<Self> {
            self.0.$name(rhs.0).map(Self)
        }
    )*};
}

impl ScalarInt {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Zero test used for the `/` and `%` divisor guard and for truthiness.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Promotion to Float for mixed Int/Float operands.
    #[inline]
    #[allow(
        clippy::cast_precision_loss,
        reason = "Int to Float promotion is defined as the native conversion"
    )]
    pub fn to_f64(self) -> f64 {
        self.0 as f64
    }

    checked_ops! {
        checked_add;
        checked_sub;
        checked_mul;
        /// Truncates toward zero. `None` for a zero divisor and for `MIN / -1`.
        checked_div;
        /// Sign follows the dividend. `None` for a zero divisor and for `MIN % -1`.
        checked_rem;
    }

    /// `None` only for `i64::MIN`.
    #[inline]
    pub fn checked_neg(self) -> Option<Self> {
        self.0.checked_neg().map(Self)
    }
}

impl fmt::Display for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
