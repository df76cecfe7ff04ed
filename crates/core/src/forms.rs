//! Input forms submitted by the HTML pages.
//!
//! Every field defaults to the empty string, so a field missing from the
//! request body fails the same "required" rule as a blank one. Values are
//! trimmed while decoding, so the rules below see exactly what gets stored.

use serde::Deserialize;
use validator::Validate;

use crate::validation::validate_required;

/// `POST /InsertingStudent`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct StudentInsertionForm {
    #[validate(custom(function = "validate_required"))]
    #[serde(deserialize_with = "trimmed::deserialize")]
    pub student_id: String,
    #[validate(
        custom(function = "validate_required"),
        length(min = 2, max = 20, message = "Field must be between 2 and 20 characters long.")
    )]
    #[serde(deserialize_with = "trimmed::deserialize")]
    pub name: String,
    #[validate(
        custom(function = "validate_required"),
        email(message = "Invalid email address.")
    )]
    #[serde(deserialize_with = "trimmed::deserialize")]
    pub email: String,
    #[validate(custom(function = "validate_required"))]
    #[serde(deserialize_with = "trimmed::deserialize")]
    pub dept_name: String,
}

/// `POST /InsertingInstructor`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct InstructorInsertionForm {
    #[validate(custom(function = "validate_required"))]
    #[serde(deserialize_with = "trimmed::deserialize")]
    pub ins_id: String,
    #[validate(
        custom(function = "validate_required"),
        length(min = 2, max = 35, message = "Field must be between 2 and 35 characters long.")
    )]
    #[serde(deserialize_with = "trimmed::deserialize")]
    pub name: String,
    #[validate(
        custom(function = "validate_required"),
        email(message = "Invalid email address.")
    )]
    #[serde(deserialize_with = "trimmed::deserialize")]
    pub email: String,
    #[validate(custom(function = "validate_required"))]
    #[serde(deserialize_with = "trimmed::deserialize")]
    pub dept_name: String,
}

/// `POST /InsertingAdvisor`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct AdvisorInsertionForm {
    #[validate(custom(function = "validate_required"))]
    #[serde(deserialize_with = "trimmed::deserialize")]
    pub ins_id: String,
    #[validate(custom(function = "validate_required"))]
    #[serde(deserialize_with = "trimmed::deserialize")]
    pub std_id: String,
}

/// Name lookup shared by the student and instructor search pages.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SearchForm {
    #[validate(
        custom(function = "validate_required"),
        length(max = 60, message = "Field cannot be longer than 60 characters.")
    )]
    #[serde(deserialize_with = "trimmed::deserialize")]
    pub search: String,
}

impl SearchForm {
    /// The term to filter by.
    pub fn term(&self) -> &str {
        &self.search
    }
}

mod trimmed {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(value.trim().to_string())
    }
}
