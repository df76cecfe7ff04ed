//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts, built from its validated form

pub mod advisor;
pub mod instructor;
pub mod student;
