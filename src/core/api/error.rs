use reqwest::StatusCode;

/// Everything that can go wrong talking to the party API.
///
/// Kept `Clone` so results can travel inside GUI messages.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{method} {path} failed: {status}")]
    Status {
        method: &'static str,
        path: String,
        status: StatusCode,
    },

    #[error("invalid response from {path}: {reason}")]
    Decode { path: String, reason: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
