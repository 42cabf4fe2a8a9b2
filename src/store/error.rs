//! Store-visible load errors
//!
//! The only failures a user ever sees. Normalization problems never get
//! here; they degrade inside the pipeline.

use thiserror::Error;

/// Shown when the counties request fails without a reason
pub const COUNTIES_FALLBACK: &str = "Failed to fetch counties";

/// Shown when the indicator request fails without a reason
pub const STATS_FALLBACK: &str = "Failed to fetch population stats";

/// What went wrong with a load, without string matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// Request never produced a response (connect failure, timeout, ...)
    NetworkFailure,
    /// Server answered with a non-2xx status
    ServerFailure(u16),
    /// Response arrived but was not the expected envelope
    DecodeFailure,
}

impl LoadErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadErrorKind::NetworkFailure => "network",
            LoadErrorKind::ServerFailure(_) => "server",
            LoadErrorKind::DecodeFailure => "decode",
        }
    }
}

/// A failed load, with a message fit for display
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub message: String,
}

impl LoadError {
    pub fn new(kind: LoadErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(LoadErrorKind::NetworkFailure, message)
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::new(LoadErrorKind::ServerFailure(status), message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(LoadErrorKind::DecodeFailure, message)
    }

    /// Replace an empty message with a fixed one
    pub fn or_fallback(mut self, fallback: &str) -> Self {
        if self.message.trim().is_empty() {
            self.message = fallback.to_string();
        }
        self
    }

    /// HTTP status, for server failures
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            LoadErrorKind::ServerFailure(status) => Some(status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::server(503, "Server returned 503: maintenance");
        assert_eq!(err.to_string(), "Server returned 503: maintenance");
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.kind.as_str(), "server");
    }

    #[test]
    fn test_fallback_message() {
        let err = LoadError::network("  ").or_fallback("Failed to fetch counties");
        assert_eq!(err.message, "Failed to fetch counties");

        let err = LoadError::decode("bad envelope").or_fallback("Failed to fetch counties");
        assert_eq!(err.message, "bad envelope");
        assert_eq!(err.status(), None);
    }
}
