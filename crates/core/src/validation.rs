//! Field-level validation helpers on top of the `validator` crate.
//!
//! Forms declare their rules with `#[derive(Validate)]`; [`check`] runs them
//! and flattens the result into [`FieldErrors`], which views render next to
//! each input.

use std::collections::BTreeMap;
use std::fmt;

use validator::{Validate, ValidationError, ValidationErrors};

/// Error code produced by [`validate_required`].
pub const REQUIRED: &str = "required";

/// Message shown for a blank required field.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages for one field, in rule declaration order. Empty if the field passed.
    pub fn messages_for(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of the fields that failed, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl From<&ValidationErrors> for FieldErrors {
    /// A blank required field reports only its "required" message; the
    /// remaining rules for that field are dropped.
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, field_errors) in errors.field_errors() {
            let blank = field_errors.iter().any(|e| e.code == REQUIRED);
            for error in field_errors {
                if blank && error.code != REQUIRED {
                    continue;
                }
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}."));
                out.push(field.to_string(), message);
            }
        }
        out
    }
}

/// Run a form's declared rules.
pub fn check<T: Validate>(form: &T) -> Result<(), FieldErrors> {
    form.validate().map_err(|errors| FieldErrors::from(&errors))
}

/// Custom `validator` rule: the value must contain a non-whitespace character.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new(REQUIRED);
        error.message = Some(REQUIRED_MESSAGE.into());
        return Err(error);
    }
    Ok(())
}
