//! Application state management
//!
//! Contains the central state container and the tab navigation state machine.

mod app;
mod tabs;

pub use app::{AppState, MessageLevel, StatusMessage};
pub use tabs::{TabController, TabId};
