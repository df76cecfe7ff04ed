/// Student and instructor identifiers are free-form text keys chosen by the user.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
