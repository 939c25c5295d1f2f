//! Test modules relocated from implementation files.
//!
//! Inline test modules that grow past a couple hundred lines are moved
//! here to keep the implementation files readable.
