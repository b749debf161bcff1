use thiserror::Error;

/// Failure talking to the dashboard API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS...)
    #[error("network error: {0}")]
    Network(String),
    /// Response arrived with a non-2xx status
    #[error("server returned status {0}")]
    Status(u16),
    /// Response body was not the JSON we expected
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Local validation failure while building a transaction draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("amount is required")]
    MissingAmount,
    #[error("amount {0:?} is not a number greater than zero")]
    InvalidAmount(String),
}

impl DraftError {
    /// Text shown to the user; both cases ask for the same correction
    pub fn user_message(&self) -> &'static str {
        "Please enter a valid amount"
    }
}
