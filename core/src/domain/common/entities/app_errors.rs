use thiserror::Error;

pub const QUOTA_EXHAUSTED_MESSAGE: &str = "Image generation service is temporarily unavailable due to API limits. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Invalid(String),

    #[error("Missing API credentials for {0}")]
    MissingCredentials(String),

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("No JSON found in response")]
    NoJsonFound,

    #[error("Failed to parse JSON response: {0}")]
    InvalidResponse(String),

    #[error("Response does not match the expected schema: {0}")]
    SchemaMismatch(String),

    #[error("{}", QUOTA_EXHAUSTED_MESSAGE)]
    QuotaExhausted,

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Whether a failed provider call is worth repeating.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CoreError::ExternalServiceError(_)
                | CoreError::NoJsonFound
                | CoreError::InvalidResponse(_)
                | CoreError::SchemaMismatch(_)
                | CoreError::Timeout(_)
        )
    }
}
