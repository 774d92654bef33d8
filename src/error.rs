use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnrollmentError>;

#[derive(Error, Debug)]
pub enum EnrollmentError {
    /// A form field is missing or malformed; no state was touched.
    #[error("validation error: {0}")]
    Validation(String),
    /// Login mismatch, or no account has been registered yet.
    #[error("invalid username or password")]
    InvalidCredentials,
    /// A course name that is not part of the catalog.
    #[error("unknown course: {0}")]
    UnknownCourse(String),
    /// The persistent store failed; the operation did not complete.
    #[error("store error: {0}")]
    Store(#[from] rocksdb::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
