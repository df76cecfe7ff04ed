#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A write collided with an existing identifier, name, or email.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A write referenced a student or instructor that does not exist.
    #[error("Missing reference: {0}")]
    MissingReference(String),

    /// A value was rejected by a column check (e.g. stored width).
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
