//! Error types
//!
//! Every fallible library call returns [`Result`]. Transport and HTTP failures
//! are passed through as-is; the only domain error is [`Error::NotRefreshable`].

use reqwest::StatusCode;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the response could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API request failed: {status}")]
    Api { status: StatusCode, message: String },

    /// The response body was not valid JSON
    #[error("failed to parse response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Refresh history was requested for a dataset that cannot be refreshed
    #[error("dataset {dataset_id} is not refreshable")]
    NotRefreshable { dataset_id: String },

    /// An entity with an empty identifier was used to address a resource
    #[error("{resource} has no id")]
    MissingId { resource: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Short message suitable for showing to a terminal user.
    /// Raw API bodies are never included.
    pub fn user_message(&self) -> String {
        if let Some(status) = self.status() {
            let message = match status.as_u16() {
                401 => "Authentication failed. Check that the access token is valid and not expired.",
                403 => "Permission denied. Check the workspace access of this account.",
                404 => "Resource not found.",
                429 => "Rate limit exceeded. Please try again later.",
                400 => "Invalid request. Check your parameters.",
                500 | 503 => "Power BI service temporarily unavailable. Please try again.",
                _ => "Request failed. Check your network connection and try again.",
            };
            return message.to_string();
        }

        if let Error::Transport(_) = self {
            return "Request failed. Check your network connection and try again.".to_string();
        }

        // Truncate long messages and drop non-printable characters
        let sanitized = self
            .to_string()
            .chars()
            .filter(|c| c.is_ascii_graphic() || *c == ' ')
            .collect::<String>();

        if sanitized.len() > 80 {
            format!("{}...", &sanitized[..80])
        } else {
            sanitized
        }
    }
}
