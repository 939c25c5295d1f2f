#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::errors::ValueErrorKind;

#[test]
fn test_heap_read() {
    let h = Heap::new(StructInstance::new("Point"));
    assert_eq!(h.read().unwrap().name(), "Point");
}

#[test]
fn test_heap_clone_shares_allocation() {
    let h1 = Heap::new(ArrayInstance::new(vec![Value::int(1)]));
    let h2 = h1.clone();
    assert!(Heap::ptr_eq(&h1, &h2));
    assert_eq!(Heap::strong_count(&h1), 2);

    h2.write().unwrap().push(Value::int(2));
    assert_eq!(h1.read().unwrap().len(), 2);
}

#[test]
fn test_distinct_allocations_not_ptr_eq() {
    let h1 = Heap::new(ArrayInstance::default());
    let h2 = Heap::new(ArrayInstance::default());
    assert!(!Heap::ptr_eq(&h1, &h2));
    assert_ne!(h1.addr(), h2.addr());
}

#[test]
fn test_write_while_reading_is_conflict() {
    let h = Heap::new(StructInstance::new("P"));
    let _guard = h.read().unwrap();
    let err = h.write().unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::BorrowConflict { type_name: "struct" });
}

#[test]
fn test_weak_upgrade_after_drop() {
    let h = Heap::new(StructInstance::new("Node"));
    let weak = Heap::downgrade(&h);
    assert!(weak.upgrade().is_some());
    drop(h);
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_weak_value_does_not_keep_alive() {
    let node = Value::create_struct("Node");
    let weak = node.downgrade().unwrap();
    assert!(weak.upgrade().unwrap().ptr_eq(&node));
    drop(node);
    assert!(weak.upgrade().is_none());
}
