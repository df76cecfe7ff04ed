//! Student entity model and DTOs.

use registrar_core::forms::StudentInsertionForm;
use registrar_core::types::{RecordId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `student` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub std_id: RecordId,
    pub std_name: String,
    pub std_email: String,
    pub dept_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a student.
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub std_id: RecordId,
    pub std_name: String,
    pub std_email: String,
    pub dept_name: String,
}

impl From<StudentInsertionForm> for CreateStudent {
    fn from(form: StudentInsertionForm) -> Self {
        Self {
            std_id: form.student_id,
            std_name: form.name,
            std_email: form.email,
            dept_name: form.dept_name,
        }
    }
}
