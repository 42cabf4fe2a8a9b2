//! API client error types

use thiserror::Error;

use crate::store::{LoadError, LoadErrorKind};

/// Errors that can occur when talking to the county API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API unavailable: {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a transport error the way the rest of the client does
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout
        } else if error.is_connect() {
            ApiError::Unavailable(error.to_string())
        } else {
            ApiError::Request(error)
        }
    }

    pub fn kind(&self) -> LoadErrorKind {
        match self {
            ApiError::Unavailable(_) | ApiError::Timeout => LoadErrorKind::NetworkFailure,
            ApiError::Request(e) if e.is_decode() => LoadErrorKind::DecodeFailure,
            ApiError::Request(_) => LoadErrorKind::NetworkFailure,
            ApiError::Status { status, .. } => LoadErrorKind::ServerFailure(*status),
            ApiError::Decode(_) => LoadErrorKind::DecodeFailure,
        }
    }
}

impl From<ApiError> for LoadError {
    fn from(error: ApiError) -> Self {
        LoadError::new(error.kind(), error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion() {
        let err = ApiError::Status {
            status: 500,
            message: "Failed to fetch counties".to_string(),
        };
        let load: LoadError = err.into();
        assert_eq!(load.kind, LoadErrorKind::ServerFailure(500));
        assert_eq!(load.message, "Server returned 500: Failed to fetch counties");
    }

    #[test]
    fn test_network_and_decode_conversion() {
        let load: LoadError = ApiError::Timeout.into();
        assert_eq!(load.kind, LoadErrorKind::NetworkFailure);

        let load: LoadError = ApiError::Decode("missing field `code`".to_string()).into();
        assert_eq!(load.kind, LoadErrorKind::DecodeFailure);
    }
}
