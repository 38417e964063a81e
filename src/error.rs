use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response received but not 2xx. The body is never read.
    #[error("API request failed: {status_text}")]
    RequestFailed {
        status: StatusCode,
        status_text: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn request_failed(status: StatusCode) -> Self {
        AppError::RequestFailed {
            status,
            status_text: status
                .canonical_reason()
                .unwrap_or_else(|| status.as_str())
                .to_string(),
        }
    }

    /// HTTP status of a failed request, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::RequestFailed { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
