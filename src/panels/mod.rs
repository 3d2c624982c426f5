//! Panel system with trait-based composition
//!
//! One panel per tab. Each panel owns the workflow or view backing its tab
//! and translates key events into workflow operations; the main loop only
//! routes events without knowing panel internals.

mod chat;
mod documents;
mod history;
mod upload;

pub use chat::ChatPanel;
pub use documents::DocumentsPanel;
pub use history::HistoryPanel;
pub use upload::UploadPanel;

use crate::api::SharedBackend;
use crate::core::Result;
use crate::events::Event;
use crate::state::{AppState, TabId};
use crossbeam_channel::Sender;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Panel trait - defines the interface for all tabs
pub trait Panel {
    /// The tab this panel renders
    fn id(&self) -> TabId;

    /// Handle a key event
    ///
    /// Returns Ok(true) if the event was consumed, Ok(false) to propagate.
    fn handle_key(&mut self, key: &KeyEvent, state: &mut AppState) -> Result<bool>;

    /// Render the panel into the content area
    fn render(&self, frame: &mut Frame, area: Rect);
}

/// Container for the four tab panels
pub struct PanelRegistry {
    pub chat: ChatPanel,
    pub upload: UploadPanel,
    pub history: HistoryPanel,
    pub documents: DocumentsPanel,
}

impl PanelRegistry {
    /// Create all panels sharing one backend handle and event sender
    pub fn new(backend: SharedBackend, event_tx: Sender<Event>) -> Self {
        Self {
            chat: ChatPanel::new(backend.clone(), event_tx.clone()),
            upload: UploadPanel::new(backend.clone(), event_tx.clone()),
            history: HistoryPanel::new(backend.clone(), event_tx.clone()),
            documents: DocumentsPanel::new(backend, event_tx),
        }
    }

    /// Get panel by tab
    pub fn get(&self, id: TabId) -> &dyn Panel {
        match id {
            TabId::Chat => &self.chat,
            TabId::Upload => &self.upload,
            TabId::History => &self.history,
            TabId::Documents => &self.documents,
        }
    }

    /// Get mutable panel by tab
    pub fn get_mut(&mut self, id: TabId) -> &mut dyn Panel {
        match id {
            TabId::Chat => &mut self.chat,
            TabId::Upload => &mut self.upload,
            TabId::History => &mut self.history,
            TabId::Documents => &mut self.documents,
        }
    }
}
