use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid query parameter {param}: {value}")]
    InvalidQuery { param: String, value: String },

    #[error("invalid week: {0}")]
    InvalidWeek(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}
