//! Instructor entity model and DTOs.

use registrar_core::forms::InstructorInsertionForm;
use registrar_core::types::{RecordId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `instructor` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Instructor {
    pub ins_id: RecordId,
    pub ins_name: String,
    pub ins_email: String,
    pub dept_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an instructor.
#[derive(Debug, Clone)]
pub struct CreateInstructor {
    pub ins_id: RecordId,
    pub ins_name: String,
    pub ins_email: String,
    pub dept_name: String,
}

impl From<InstructorInsertionForm> for CreateInstructor {
    fn from(form: InstructorInsertionForm) -> Self {
        Self {
            ins_id: form.ins_id,
            ins_name: form.name,
            ins_email: form.email,
            dept_name: form.dept_name,
        }
    }
}
