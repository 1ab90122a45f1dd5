use thiserror::Error;

/// A raw field that could not be read in the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("missing required field `{key}`")]
    Missing { key: String },
    #[error("field `{key}` expected {expected}, found {found}")]
    InvalidType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("field `{key}` has unparseable value `{value}` (expected {expected})")]
    InvalidValue {
        key: String,
        expected: &'static str,
        value: String,
    },
}

impl FieldError {
    /// Key of the offending field.
    pub fn key(&self) -> &str {
        match self {
            Self::Missing { key } | Self::InvalidType { key, .. } | Self::InvalidValue { key, .. } => {
                key
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("invalid submission json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid submission: {0}")]
    Field(#[from] FieldError),
}

pub type Result<T> = std::result::Result<T, FieldError>;
