//! Ragterm - terminal client for a document-retrieval QA backend
//!
//! Built with ratatui for TUI, featuring:
//! - Ask questions answered from uploaded document context
//! - Upload PDF/TXT documents for indexing
//! - Browse question/answer history and uploaded-document metadata
//! - Tabbed navigation between the four views

pub mod api;
pub mod config;
pub mod core;
pub mod events;
pub mod panels;
pub mod state;
pub mod ui;
pub mod views;
pub mod workflows;

// Re-export commonly used types
pub use crate::core::{AppError, Result};
pub use events::{Event, EventBus};
pub use panels::PanelRegistry;
pub use state::AppState;
