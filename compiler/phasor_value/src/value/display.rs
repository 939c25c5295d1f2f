//! Textual projection of values.
//!
//! Printing and string coercion (`Value::as_string`) both go through the
//! `Display` impl here. Rendering is deterministic: struct fields appear in
//! ascending name order, and a container reached again while it is still
//! being rendered prints as `[...]` or `Name{...}`.

use std::fmt;

use rustc_hash::FxHashSet;

use super::Value;
use crate::stack::ensure_sufficient_stack;

/// Digits after the decimal point when rendering a Float.
pub const FLOAT_DISPLAY_PRECISION: usize = 6;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f, &mut FxHashSet::default())
    }
}

/// Render `value`, tracking the addresses of containers currently open in
/// `active`.
fn write_value(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    active: &mut FxHashSet<usize>,
) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Int(n) => write!(f, "{n}"),
        Value::Float(x) => write!(f, "{x:.prec$}", prec = FLOAT_DISPLAY_PRECISION),
        Value::Str(s) => f.write_str(s),
        Value::Array(handle) => {
            let addr = handle.addr();
            let array = match handle.read() {
                Ok(array) if !active.contains(&addr) => array,
                _ => return f.write_str("[...]"),
            };
            active.insert(addr);
            f.write_str("[")?;
            for (i, item) in array.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                ensure_sufficient_stack(|| write_value(item, f, active))?;
            }
            active.remove(&addr);
            f.write_str("]")
        }
        Value::Struct(handle) => {
            let addr = handle.addr();
            let Ok(instance) = handle.read() else {
                return f.write_str("<borrowed struct>");
            };
            if active.contains(&addr) {
                return write!(f, "{}{{...}}", instance.name());
            }
            active.insert(addr);
            write!(f, "{}{{", instance.name())?;
            for (i, (name, field)) in instance.sorted_fields().into_iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{name}: ")?;
                ensure_sufficient_stack(|| write_value(field, f, active))?;
            }
            active.remove(&addr);
            f.write_str("}")
        }
    }
}
