//! Phasor Value - runtime value core of the Phasor virtual machine.
//!
//! This crate provides:
//! - The dynamically-typed `Value` (Null, Bool, Int, Float, String, Struct, Array)
//! - Shared heap objects for structs and arrays (`Heap`, `StructInstance`, `ArrayInstance`)
//! - Operator semantics (`evaluate_binary`, `evaluate_unary`) with explicit errors
//! - Truthiness, equality and the textual projection used by printing
//!
//! # Heap Values
//!
//! Structs and arrays are reference counted (`Rc`) and mutated through
//! interior mutability. Copying a `Value` copies the handle, not the object.
//! The crate is single-threaded: `Value` is neither `Send` nor `Sync`.
//!
//! # Debug Environment Variables
//!
//! - `RUST_LOG=phasor_value=debug`: log every operator failure.
//! - `RUST_LOG=phasor_value=trace`: also log every heap allocation.
//!
//! Logging is only installed when the host calls [`init_tracing`].

mod errors;
mod operators;
mod stack;
mod unary_operators;
mod value;

#[cfg(test)]
mod tests;

use std::sync::Once;

pub use errors::{
    binary_type_mismatch, borrow_conflict, division_by_zero, index_out_of_bounds,
    integer_overflow, invalid_accessor, invalid_unary_op, modulo_by_zero,
    non_array_element_access, non_struct_field_access, ValueError, ValueErrorKind, ValueResult,
};
pub use operators::{evaluate_binary, BinaryOp};
pub use unary_operators::{evaluate_unary, UnaryOp};
pub use value::{
    ArrayInstance, Heap, HeapObject, ScalarInt, StructInstance, Value, ValueType, WeakHeap,
    WeakValue, FLOAT_DISPLAY_PRECISION,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Respects the `RUST_LOG` environment variable
/// and does nothing when it is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
