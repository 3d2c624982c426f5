//! Central application state container
//!
//! Workflows and views each own their slice; this holds only what is
//! shared across tabs: navigation, the status-bar notification, and the
//! quit flag.

use super::TabController;

/// Central application state
pub struct AppState {
    /// Tab navigation
    pub tabs: TabController,

    /// Status bar message (if any)
    pub status_message: Option<StatusMessage>,

    /// Application should quit
    pub should_quit: bool,
}

/// Status bar message
pub struct StatusMessage {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageLevel {
    Info,
    Error,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self {
            tabs: TabController::new(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set status message
    pub fn set_status(&mut self, text: impl Into<String>, level: MessageLevel) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Set info status
    pub fn info(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageLevel::Info);
    }

    /// Set error status
    pub fn error(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageLevel::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TabId;

    #[test]
    fn test_new_state() {
        let state = AppState::new();
        assert!(!state.should_quit);
        assert_eq!(state.tabs.active(), TabId::Chat);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::new();
        state.quit();
        assert!(state.should_quit);
    }

    #[test]
    fn test_status_message() {
        let mut state = AppState::new();

        state.info("Hello");
        assert!(state.status_message.is_some());

        state.error("Boom");
        assert_eq!(
            state.status_message.as_ref().map(|m| m.level),
            Some(MessageLevel::Error)
        );

        state.clear_status();
        assert!(state.status_message.is_none());
    }
}
