//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async create/read
//! methods that accept `&PgPool` as the first argument. None of them
//! pre-check uniqueness or references; the schema rejects bad writes.

pub mod advisor_repo;
pub mod instructor_repo;
pub mod student_repo;

pub use advisor_repo::AdvisorRepo;
pub use instructor_repo::InstructorRepo;
pub use student_repo::StudentRepo;
