//! Advisor assignment model and DTOs.

use registrar_core::forms::AdvisorInsertionForm;
use registrar_core::types::{RecordId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `advisor` table: instructor `adv_id` advises student `st_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Advisor {
    pub adv_id: RecordId,
    pub st_id: RecordId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording an advisor assignment.
#[derive(Debug, Clone)]
pub struct CreateAdvisor {
    pub adv_id: RecordId,
    pub st_id: RecordId,
}

impl From<AdvisorInsertionForm> for CreateAdvisor {
    fn from(form: AdvisorInsertionForm) -> Self {
        Self {
            adv_id: form.ins_id,
            st_id: form.std_id,
        }
    }
}
