//! Submission workflows
//!
//! Each workflow owns one busy state machine gating a single in-flight
//! request. Validation failures are synchronous typed errors; request
//! outcomes arrive as events which the main loop applies back onto the
//! workflow via `complete`/`fail`.

mod query;
mod upload;

pub use query::{QueryWorkflow, TOP_K};
pub use upload::{UploadState, UploadWorkflow};

use crate::ui::labels;
use thiserror::Error;

/// Locally detected submission errors; no network call is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", labels::ERR_NO_FILE)]
    NoFileSelected,

    #[error("{}", labels::ERR_EMPTY_QUESTION)]
    EmptyQuestion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::NoFileSelected.to_string(),
            labels::ERR_NO_FILE
        );
        assert_eq!(
            ValidationError::EmptyQuestion.to_string(),
            labels::ERR_EMPTY_QUESTION
        );
    }
}
