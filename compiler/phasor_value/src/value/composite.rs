//! Heap object types: struct and array instances.
//!
//! Both are only reachable through a [`Heap`](super::Heap) handle held by a
//! `Value`, so they are shared and mutated by reference.
//!
//! Dropping a container releases its nested containers iteratively, so
//! freeing an arbitrarily deep chain of arrays or structs does not recurse.

use std::mem;

use rustc_hash::FxHashMap;

use super::heap::{Heap, HeapObject};
use super::Value;

/// Drop `pending` without recursing into nested containers.
///
/// A nested struct or array whose last strong handle is in `pending` has its
/// contents moved onto the work list before it is freed, so it drops empty.
fn release(mut pending: Vec<Value>) {
    while let Some(value) = pending.pop() {
        match value {
            Value::Array(handle) => {
                if let Some(mut array) = Heap::into_unique(handle) {
                    pending.append(&mut array.elements);
                }
            }
            Value::Struct(handle) => {
                if let Some(mut instance) = Heap::into_unique(handle) {
                    pending.extend(mem::take(&mut instance.fields).into_values());
                }
            }
            _ => {}
        }
    }
}

// StructInstance

/// A named record with string-keyed fields.
///
/// Created empty by name; fields are added or overwritten by assignment.
/// Field order is not observable except through [`sorted_fields`], which
/// the textual projection uses for deterministic output.
///
/// [`sorted_fields`]: StructInstance::sorted_fields
#[derive(Clone, Debug, Default)]
pub struct StructInstance {
    name: String,
    fields: FxHashMap<String, Value>,
}

impl StructInstance {
    /// Create a struct with the given type tag and no fields.
    pub fn new(name: impl Into<String>) -> Self {
        StructInstance {
            name: name.into(),
            fields: FxHashMap::default(),
        }
    }

    /// The declared type tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Insert or overwrite a field, returning the previous value.
    pub fn set(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(field.into(), value)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in ascending name order.
    pub fn sorted_fields(&self) -> Vec<(&str, &Value)> {
        let mut fields: Vec<_> = self
            .fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        fields.sort_unstable_by(|a, b| a.0.cmp(b.0));
        fields
    }
}

impl Drop for StructInstance {
    fn drop(&mut self) {
        if !self.fields.is_empty() {
            release(mem::take(&mut self.fields).into_values().collect());
        }
    }
}

impl HeapObject for StructInstance {
    const TYPE_NAME: &'static str = "struct";
}

// ArrayInstance

/// An ordered, resizable sequence of values of any variant.
#[derive(Clone, Debug, Default)]
pub struct ArrayInstance {
    elements: Vec<Value>,
}

impl ArrayInstance {
    pub fn new(elements: Vec<Value>) -> Self {
        ArrayInstance { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// Replace the element at `index`, returning the previous value.
    ///
    /// Returns `None` and leaves the array untouched when `index` is out of
    /// range.
    pub fn set(&mut self, index: usize, value: Value) -> Option<Value> {
        self.elements
            .get_mut(index)
            .map(|slot| mem::replace(slot, value))
    }

    pub fn push(&mut self, value: Value) {
        self.elements.push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }
}

impl Drop for ArrayInstance {
    fn drop(&mut self) {
        if !self.elements.is_empty() {
            release(mem::take(&mut self.elements));
        }
    }
}

impl HeapObject for ArrayInstance {
    const TYPE_NAME: &'static str = "array";
}

impl<'a> IntoIterator for &'a ArrayInstance {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests;
