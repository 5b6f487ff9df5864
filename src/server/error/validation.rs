use thiserror::Error;

/// Rejected request payload.
///
/// Missing fields are reported together; otherwise the first broken rule is reported.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("{0}")]
    Invalid(String),
}
