//! API error types
//!
//! The `Display` output of these errors is the only user-facing error text:
//! server errors surface the backend-supplied `detail` verbatim when present.

use std::fmt;

/// Error type for backend API operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-success HTTP response; `detail` comes from the `{detail}` body
    Server { status: u16, detail: Option<String> },

    /// No response received (connection refused, DNS failure, ...)
    Transport(String),

    /// Response body could not be decoded
    Parse(String),

    /// Local file could not be read for upload
    File(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server { status, detail } => match detail {
                Some(detail) => write!(f, "{}", detail),
                None => write!(f, "Server error (HTTP {})", status),
            },
            ApiError::Transport(msg) => write!(f, "Network error: {}", msg),
            ApiError::Parse(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::File(msg) => write!(f, "File error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let detail = response
                    .into_string()
                    .ok()
                    .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
                    .and_then(|json| {
                        json.get("detail")
                            .and_then(|d| d.as_str())
                            .map(|s| s.to_string())
                    });
                ApiError::Server { status, detail }
            }
            ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_prefers_detail() {
        let err = ApiError::Server {
            status: 400,
            detail: Some("unsupported file type".to_string()),
        };
        assert_eq!(err.to_string(), "unsupported file type");
    }

    #[test]
    fn test_server_error_without_detail() {
        let err = ApiError::Server {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "Server error (HTTP 500)");
    }

    #[test]
    fn test_transport_error_display() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ApiError::Parse("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "Invalid response: expected value at line 1");
    }

    #[test]
    fn test_file_error_display() {
        let err = ApiError::File("no such file".to_string());
        assert_eq!(err.to_string(), "File error: no such file");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let api_err: ApiError = io_err.into();
        assert!(matches!(api_err, ApiError::Parse(_)));
    }
}
