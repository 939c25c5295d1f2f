//! Runtime values for the Phasor virtual machine.
//!
//! # Heap Enforcement
//!
//! Structs and arrays live behind a `Heap<T>` handle whose constructor is
//! private to this module, so they can only be created through the
//! `Value::create_struct` / `Value::create_array` factories.
//!
//! ```text
//! let p = Value::create_struct("Point");            // OK
//! let xs = Value::create_array(vec![Value::int(1)]); // OK
//! let p = Value::Struct(Heap::new(...));             // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Aliasing
//!
//! `Value` is cloned by value, but cloning a Struct or Array clones the
//! handle: mutations through one clone are observed through every other
//! clone of the same object. Null, Bool, Int, Float and String have no
//! shared state.

mod composite;
mod display;
mod equality;
mod heap;
mod scalar_int;

use std::fmt;

use crate::errors::{
    index_out_of_bounds, invalid_accessor, non_array_element_access, non_struct_field_access,
    ValueResult,
};

pub use composite::{ArrayInstance, StructInstance};
pub use display::FLOAT_DISPLAY_PRECISION;
pub use heap::{Heap, HeapObject, WeakHeap, WeakValue};
pub use scalar_int::ScalarInt;

/// Discriminator of a [`Value`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Bool,
    Int,
    Float,
    String,
    Struct,
    Array,
}

impl ValueType {
    /// Lowercase name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Struct => "struct",
            ValueType::Array => "array",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime value in the Phasor VM.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value; also the result of reading a missing field.
    #[default]
    Null,
    Bool(bool),
    /// 64-bit signed integer (uses `ScalarInt` to prevent unchecked arithmetic).
    Int(ScalarInt),
    Float(f64),
    /// Owned string; cloning copies the text.
    Str(String),
    /// Shared handle to a struct instance.
    Struct(Heap<StructInstance>),
    /// Shared handle to an array instance.
    Array(Heap<ArrayInstance>),
}

// Factory Methods

impl Value {
    #[inline]
    pub const fn null() -> Self {
        Value::Null
    }

    #[inline]
    pub const fn int(n: i64) -> Self {
        Value::Int(ScalarInt::new(n))
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Allocate a new struct with the given type tag and no fields.
    pub fn create_struct(name: impl Into<String>) -> Self {
        let instance = StructInstance::new(name);
        tracing::trace!(name = instance.name(), "allocating struct");
        Value::Struct(Heap::new(instance))
    }

    /// Allocate a new array holding `elements` in order.
    pub fn create_array(elements: Vec<Value>) -> Self {
        tracing::trace!(len = elements.len(), "allocating array");
        Value::Array(Heap::new(ArrayInstance::new(elements)))
    }

    /// Allocate a new empty array.
    pub fn empty_array() -> Self {
        Value::create_array(Vec::new())
    }
}

// Type Inspection

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::String,
            Value::Struct(_) => ValueType::Struct,
            Value::Array(_) => ValueType::Array,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        self.value_type().name()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// True for Int or Float.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Value::Struct(_))
    }

    /// Check if this value is truthy.
    ///
    /// Strings follow a special rule: `"true"` and `"1"` are truthy,
    /// `"false"` and `"0"` are falsy, and any other string is truthy iff it
    /// is non-empty. Structs and arrays are always falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null | Value::Struct(_) | Value::Array(_) => false,
            Value::Bool(b) => *b,
            Value::Int(n) => !n.is_zero(),
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => match s.as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                other => !other.is_empty(),
            },
        }
    }
}

// Extraction

impl Value {
    /// Strict boolean extraction.
    pub fn as_bool(&self) -> ValueResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(invalid_accessor("bool", self.type_name())),
        }
    }

    /// Integer coercion.
    ///
    /// Floats truncate toward zero (saturating at the `i64` bounds, NaN is
    /// 0); every non-numeric variant yields 0.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is the documented Float to Int coercion"
    )]
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Int(n) => n.raw(),
            Value::Float(f) => *f as i64,
            _ => 0,
        }
    }

    /// Float coercion. Ints widen; every non-numeric variant yields 0.0.
    pub fn as_float(&self) -> f64 {
        match self {
            Value::Float(f) => *f,
            Value::Int(n) => n.to_f64(),
            _ => 0.0,
        }
    }

    /// String coercion. Non-string variants fall back to their textual
    /// projection, so this never fails.
    pub fn as_string(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Strict string extraction; fails unless this is a String.
    pub fn as_str(&self) -> ValueResult<&str> {
        match self {
            Value::Str(s) => Ok(s),
            _ => Err(invalid_accessor("string", self.type_name())),
        }
    }

    /// Strict array extraction, returning a new handle to the same object.
    pub fn as_array(&self) -> ValueResult<Heap<ArrayInstance>> {
        match self {
            Value::Array(a) => Ok(a.clone()),
            _ => Err(invalid_accessor("array", self.type_name())),
        }
    }

    /// Strict struct extraction, returning a new handle to the same object.
    pub fn as_struct(&self) -> ValueResult<Heap<StructInstance>> {
        match self {
            Value::Struct(s) => Ok(s.clone()),
            _ => Err(invalid_accessor("struct", self.type_name())),
        }
    }
}

// Struct Fields

impl Value {
    /// Read a field. A missing field reads as Null.
    pub fn get_field(&self, name: &str) -> ValueResult {
        let Value::Struct(s) = self else {
            return Err(non_struct_field_access("get_field", self.type_name()));
        };
        Ok(s.read()?.get(name).cloned().unwrap_or_default())
    }

    /// Insert or overwrite a field.
    ///
    /// The mutation is visible through every value aliasing this struct.
    pub fn set_field(&self, name: impl Into<String>, value: Value) -> ValueResult<()> {
        let Value::Struct(s) = self else {
            return Err(non_struct_field_access("set_field", self.type_name()));
        };
        s.write()?.set(name, value);
        Ok(())
    }

    /// Report field presence; false for non-struct values.
    pub fn has_field(&self, name: &str) -> bool {
        match self {
            Value::Struct(s) => s.read().is_ok_and(|s| s.contains(name)),
            _ => false,
        }
    }

    /// The struct's declared type tag.
    pub fn struct_name(&self) -> ValueResult<String> {
        let Value::Struct(s) = self else {
            return Err(non_struct_field_access("struct_name", self.type_name()));
        };
        Ok(s.read()?.name().to_string())
    }

    /// Field names in ascending order.
    pub fn field_names(&self) -> ValueResult<Vec<String>> {
        let Value::Struct(s) = self else {
            return Err(non_struct_field_access("field_names", self.type_name()));
        };
        Ok(s.read()?
            .sorted_fields()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect())
    }
}

// Array Elements

impl Value {
    fn array_handle(&self, operation: &'static str) -> ValueResult<&Heap<ArrayInstance>> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(non_array_element_access(operation, self.type_name())),
        }
    }

    pub fn array_len(&self) -> ValueResult<usize> {
        Ok(self.array_handle("array_len")?.read()?.len())
    }

    /// Read the element at `index`.
    pub fn array_get(&self, index: i64) -> ValueResult {
        let array = self.array_handle("array_get")?.read()?;
        usize::try_from(index)
            .ok()
            .and_then(|i| array.get(i))
            .cloned()
            .ok_or_else(|| index_out_of_bounds(index, array.len()))
    }

    /// Replace the element at `index`.
    pub fn array_set(&self, index: i64, value: Value) -> ValueResult<()> {
        let mut array = self.array_handle("array_set")?.write()?;
        let len = array.len();
        match usize::try_from(index).ok().filter(|&i| i < len) {
            Some(i) => {
                array.set(i, value);
                Ok(())
            }
            None => Err(index_out_of_bounds(index, len)),
        }
    }

    /// Append an element.
    pub fn array_push(&self, value: Value) -> ValueResult<()> {
        self.array_handle("array_push")?.write()?.push(value);
        Ok(())
    }
}

// Identity

impl Value {
    /// True when both values hold handles to the same heap object.
    ///
    /// Always false for non-heap variants.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Struct(a), Value::Struct(b)) => Heap::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Number of strong handles to the heap object, if any.
    pub fn strong_count(&self) -> Option<usize> {
        match self {
            Value::Struct(s) => Some(Heap::strong_count(s)),
            Value::Array(a) => Some(Heap::strong_count(a)),
            _ => None,
        }
    }

    /// Create a weak reference to the heap object, if any.
    pub fn downgrade(&self) -> Option<WeakValue> {
        match self {
            Value::Struct(s) => Some(WeakValue::Struct(Heap::downgrade(s))),
            Value::Array(a) => Some(WeakValue::Array(Heap::downgrade(a))),
            _ => None,
        }
    }
}

// Conversions

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::create_array(elements)
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Struct(_) => write!(f, "Struct({self})"),
            Value::Array(_) => write!(f, "Array({self})"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
