use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid {kind}: '{value}' (expected one of: {expected})")]
    InvalidValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid criterion '{0}' (expected color=<value> or size=<value>)")]
    InvalidCriterion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
