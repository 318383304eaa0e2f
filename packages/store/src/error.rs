//! Error taxonomy shared by every crate in the workspace.
//!
//! The `Display` text of each variant is what the user sees inline, so keep
//! messages short and free of internal detail. The detail carried by
//! [`Error::Network`] and [`Error::Storage`] is for logs only.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required form field was left empty.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid username")]
    InvalidUsername,

    #[error("Invalid password")]
    InvalidPassword,

    /// Non-success HTTP status, transport failure or an undecodable body.
    #[error("Network error: Please check your connection")]
    Network(String),

    /// Detail lookup for a recipe id that is not loaded.
    #[error("Recipe not found")]
    NotFound(u32),

    /// Browser storage is unavailable or refused the write.
    #[error("Storage unavailable: {0}")]
    Storage(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Diagnostic detail for logs, falling back to the display text.
    pub fn detail(&self) -> String {
        match self {
            Self::Network(detail) | Self::Storage(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_message_hides_detail() {
        let err = Error::Network("HTTP 503 Service Unavailable".to_string());
        assert_eq!(err.to_string(), "Network error: Please check your connection");
        assert_eq!(err.detail(), "HTTP 503 Service Unavailable");
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = Error::validation("Please fill in all fields");
        assert_eq!(err.to_string(), "Please fill in all fields");
    }
}
