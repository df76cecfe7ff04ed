//! Domain building blocks shared by the database and HTTP layers.
//!
//! Holds no I/O: error types, common type aliases, and the input forms with
//! their field-level validation rules.

pub mod error;
pub mod forms;
pub mod types;
pub mod validation;
