/// Errors raised by the domain layer before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A user-supplied field failed validation.
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// A payload did not have the shape of a job record.
    #[error("Malformed job record: {0}")]
    MalformedRecord(String),
}

impl CoreError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field for field-level validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CoreError::InvalidField { field, .. } => Some(field),
            CoreError::MalformedRecord(_) => None,
        }
    }
}
