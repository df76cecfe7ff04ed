//! Classification of integrity-constraint failures raised by PostgreSQL.

use registrar_core::error::CoreError;

/// SQLSTATE for `unique_violation` (covers primary keys too).
pub const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";
/// SQLSTATE for `check_violation`.
pub const CHECK_VIOLATION: &str = "23514";

/// A write rejected by one of the schema's constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique { constraint: String },
    ForeignKey { constraint: String },
    Check { constraint: String },
}

impl ConstraintViolation {
    /// Name of the violated constraint, or `"unknown"` if the server omitted it.
    pub fn constraint(&self) -> &str {
        match self {
            Self::Unique { constraint }
            | Self::ForeignKey { constraint }
            | Self::Check { constraint } => constraint,
        }
    }

    /// Human-readable description for error pages and logs.
    pub fn describe(&self) -> String {
        let what = match self.constraint() {
            "pk_student" => "A student with this ID already exists",
            "uq_student_name" => "A student with this name already exists",
            "uq_student_email" => "A student with this email already exists",
            "pk_instructor" => "An instructor with this ID already exists",
            "uq_instructor_name" => "An instructor with this name already exists",
            "uq_instructor_email" => "An instructor with this email already exists",
            "pk_advisor" => "This instructor is already advising a student",
            "fk_advisor_instructor" => "No instructor exists with this ID",
            "fk_advisor_student" => "No student exists with this ID",
            other => {
                return match self {
                    Self::Unique { .. } => {
                        format!("Duplicate value violates unique constraint: {other}")
                    }
                    Self::ForeignKey { .. } => {
                        format!("Referenced record does not exist: {other}")
                    }
                    Self::Check { .. } => format!("Value violates check constraint: {other}"),
                };
            }
        };
        what.to_string()
    }
}

impl From<ConstraintViolation> for CoreError {
    fn from(violation: ConstraintViolation) -> Self {
        let message = violation.describe();
        match violation {
            ConstraintViolation::Unique { .. } => CoreError::Conflict(message),
            ConstraintViolation::ForeignKey { .. } => CoreError::MissingReference(message),
            ConstraintViolation::Check { .. } => CoreError::InvalidValue(message),
        }
    }
}

/// Map a sqlx error to a constraint violation, if it is one.
pub fn classify(err: &sqlx::Error) -> Option<ConstraintViolation> {
    match err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code()?;
            classify_code(&code, db_err.constraint())
        }
        _ => None,
    }
}

/// Map a SQLSTATE code and optional constraint name to a violation.
pub fn classify_code(code: &str, constraint: Option<&str>) -> Option<ConstraintViolation> {
    let constraint = constraint.unwrap_or("unknown").to_string();
    match code {
        UNIQUE_VIOLATION => Some(ConstraintViolation::Unique { constraint }),
        FOREIGN_KEY_VIOLATION => Some(ConstraintViolation::ForeignKey { constraint }),
        CHECK_VIOLATION => Some(ConstraintViolation::Check { constraint }),
        _ => None,
    }
}
