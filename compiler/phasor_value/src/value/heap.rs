//! Shared-ownership handles for heap objects.
//!
//! `Heap<T>` is the only way a `Value` holds a struct or array. Its
//! constructor is `pub(super)`, so heap objects can only be created through
//! the `Value::create_struct` / `Value::create_array` factories.
//!
//! Cloning a `Heap<T>` duplicates the handle, not the object: every clone
//! observes mutations made through any other clone. Reference counting is
//! non-atomic and unsynchronized; a heap object must not be shared across
//! threads (`Heap<T>` is `!Send`).
//!
//! Reference counting does not reclaim cycles. Use [`WeakValue`] for
//! back-references in intentionally cyclic graphs.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::errors::{borrow_conflict, ValueResult};

use super::composite::{ArrayInstance, StructInstance};
use super::Value;

/// Object kinds that live behind a [`Heap`] handle.
pub trait HeapObject {
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;
}

/// Reference-counted, interiorly mutable handle to a heap object.
pub struct Heap<T>(Rc<RefCell<T>>);

impl<T: HeapObject> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(RefCell::new(value)))
    }

    /// Borrow the object for reading.
    ///
    /// Fails with `BorrowConflict` while a write borrow is outstanding.
    pub fn read(&self) -> ValueResult<Ref<'_, T>> {
        self.0
            .try_borrow()
            .map_err(|_| borrow_conflict(T::TYPE_NAME))
    }

    /// Borrow the object for writing.
    ///
    /// Fails with `BorrowConflict` while any other borrow is outstanding.
    pub fn write(&self) -> ValueResult<RefMut<'_, T>> {
        self.0
            .try_borrow_mut()
            .map_err(|_| borrow_conflict(T::TYPE_NAME))
    }

    /// Create a non-owning handle to the same object.
    pub fn downgrade(this: &Self) -> WeakHeap<T> {
        WeakHeap(Rc::downgrade(&this.0))
    }

    /// Take the object out if this is its last strong handle.
    pub(super) fn into_unique(this: Self) -> Option<T> {
        Rc::try_unwrap(this.0).ok().map(RefCell::into_inner)
    }
}

impl<T> Heap<T> {
    /// True when both handles refer to the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }

    /// Number of strong handles to this object.
    #[inline]
    pub fn strong_count(this: &Self) -> usize {
        Rc::strong_count(&this.0)
    }

    /// Address identifying the allocation, used by cycle guards.
    #[inline]
    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>() as usize
    }
}

impl<T> Clone for Heap<T> {
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(inner) => write!(f, "Heap({:?})", &*inner),
            Err(_) => write!(f, "Heap(<borrowed>)"),
        }
    }
}

/// Non-owning handle to a heap object.
pub struct WeakHeap<T>(Weak<RefCell<T>>);

impl<T> WeakHeap<T> {
    /// Recover a strong handle if the object is still alive.
    pub fn upgrade(&self) -> Option<Heap<T>> {
        self.0.upgrade().map(Heap)
    }
}

impl<T> Clone for WeakHeap<T> {
    fn clone(&self) -> Self {
        WeakHeap(Weak::clone(&self.0))
    }
}

impl<T> fmt::Debug for WeakHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeakHeap(strong={})", self.0.strong_count())
    }
}

/// A weak reference to a struct or array value.
///
/// Holding a `WeakValue` does not keep the object alive, so a field that
/// points back at its container through a `WeakValue` does not form a
/// retain cycle.
#[derive(Clone, Debug)]
pub enum WeakValue {
    Struct(WeakHeap<StructInstance>),
    Array(WeakHeap<ArrayInstance>),
}

impl WeakValue {
    /// Recover the value if the object is still alive.
    pub fn upgrade(&self) -> Option<Value> {
        match self {
            WeakValue::Struct(w) => w.upgrade().map(Value::Struct),
            WeakValue::Array(w) => w.upgrade().map(Value::Array),
        }
    }
}

#[cfg(test)]
mod tests;
