//! Value equality.
//!
//! Variants must match first: there is no cross-variant equality, not even
//! between `Int(2)` and `Float(2.0)`. Arrays compare element-wise and are
//! length-sensitive. Struct equality is always false, including a handle
//! compared with itself; use [`Value::ptr_eq`] for identity.

use rustc_hash::FxHashSet;

use super::Value;
use crate::stack::ensure_sufficient_stack;

impl Value {
    /// The `==` operator.
    pub fn equals(&self, other: &Value) -> bool {
        values_equal(self, other, &mut FxHashSet::default())
    }

    /// The `!=` operator, defined as `!(a == b)`.
    pub fn not_equals(&self, other: &Value) -> bool {
        !self.equals(other)
    }
}

/// Compare two values. `active` holds the array pairs currently being
/// compared; a pair reached again is treated as equal so cyclic arrays
/// terminate.
fn values_equal(a: &Value, b: &Value, active: &mut FxHashSet<(usize, usize)>) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        #[allow(clippy::float_cmp, reason = "Float equality is exact IEEE-754 comparison")]
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            let pair = (x.addr(), y.addr());
            if active.contains(&pair) {
                return true;
            }
            let (Ok(left), Ok(right)) = (x.read(), y.read()) else {
                return false;
            };
            if left.len() != right.len() {
                return false;
            }
            active.insert(pair);
            let equal = left
                .iter()
                .zip(right.iter())
                .all(|(l, r)| ensure_sufficient_stack(|| values_equal(l, r, active)));
            active.remove(&pair);
            equal
        }
        _ => false,
    }
}
