use thiserror::Error;

/// Rejected locally, before any request is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("City name must not be empty")]
    EmptyInput,
}

/// Anything that went wrong between issuing the request and holding a typed
/// forecast. Callers show one generic message for all of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to reach the forecast API: {0}")]
    Network(String),

    #[error("Forecast request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed forecast response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Banner text shown to the user regardless of the variant.
    pub fn user_message(&self) -> &'static str {
        "API error: unable to fetch the forecast."
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
