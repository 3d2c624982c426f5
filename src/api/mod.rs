//! Backend API layer
//!
//! The `Backend` trait is the seam between the workflows and the wire:
//! production code uses [`ApiClient`] (HTTP), tests substitute a recording
//! mock. The client holds no state beyond the base URL.

mod client;
mod error;
mod types;

#[cfg(test)]
pub mod mock;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{AnswerResult, Document, HistoryItem, UploadReceipt};

use std::path::Path;
use std::sync::Arc;

/// Interface to the document-QA backend
///
/// One method per remote operation. Implementations must be safe to call
/// from worker threads; all methods block the calling thread until the
/// request resolves.
pub trait Backend: Send + Sync {
    /// List prior question/answer pairs, server order preserved
    fn fetch_history(&self) -> Result<Vec<HistoryItem>, ApiError>;

    /// List uploaded-document metadata, server order preserved
    fn fetch_documents(&self) -> Result<Vec<Document>, ApiError>;

    /// Upload one file for indexing; returns the processed chunk count
    fn upload_document(&self, file: &Path) -> Result<UploadReceipt, ApiError>;

    /// Ask a question answered from retrieved document context
    fn ask_question(&self, question: &str, top_k: u32) -> Result<AnswerResult, ApiError>;
}

/// Shared handle to a backend implementation
pub type SharedBackend = Arc<dyn Backend>;
