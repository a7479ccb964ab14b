use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmOpsError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("A crop name is required when the category is 'other'")]
    MissingCropName,

    #[error("Pest classification requires a submitted sample")]
    MissingSample,

    #[error("Previous price for {crop} must be greater than zero")]
    DivisionByZero { crop: String },

    #[error("Recommendation request was cancelled")]
    Cancelled,

    #[error("Relay unavailable: {0}")]
    RelayUnavailable(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FarmOpsError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        FarmOpsError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FarmOpsError>;
