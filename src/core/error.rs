//! Error types for ragterm using thiserror
//!
//! All errors are typed - no .unwrap() or .expect() in production code.

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error: {0}")]
    Api(#[from] crate::api::ApiError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience Result type for ragterm
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use std::error::Error;

    #[test]
    fn test_app_error_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("IO error"));
    }

    #[test]
    fn test_app_error_api_conversion() {
        let api_err = ApiError::Transport("connection refused".to_string());
        let app_err: AppError = api_err.into();
        assert!(matches!(app_err, AppError::Api(_)));
        assert!(app_err.to_string().contains("API error"));
    }

    #[test]
    fn test_app_error_config_display() {
        let err = AppError::Config("invalid setting".to_string());
        assert_eq!(err.to_string(), "Configuration error: invalid setting");
    }

    #[test]
    fn test_error_source_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "underlying error");
        let app_err = AppError::Io(io_err);
        assert!(app_err.source().is_some());
    }
}
