//! Uploaded-document metadata projection

use crate::api::{Document, SharedBackend};
use crate::events::Event;
use crossbeam_channel::Sender;

/// Read-only projection of the server's uploaded-document list
pub struct DocumentsView {
    /// Last fetched list, server order preserved
    items: Vec<Document>,

    /// Whether a fetch is in flight
    loading: bool,

    /// Render scroll offset
    pub scroll: usize,

    backend: SharedBackend,
    event_tx: Sender<Event>,
}

impl DocumentsView {
    pub fn new(backend: SharedBackend, event_tx: Sender<Event>) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            scroll: 0,
            backend,
            event_tx,
        }
    }

    pub fn items(&self) -> &[Document] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fetch the list; one fetch in flight at a time
    pub fn refresh(&mut self) {
        if self.loading {
            return;
        }
        self.loading = true;

        let backend = self.backend.clone();
        let tx = self.event_tx.clone();
        std::thread::spawn(move || match backend.fetch_documents() {
            Ok(documents) => {
                let _ = tx.send(Event::DocumentsLoaded(documents));
            }
            Err(e) => {
                let _ = tx.send(Event::DocumentsFailed(e.to_string()));
            }
        });
    }

    /// Apply a fetched list, replacing the previous one wholesale
    pub fn apply(&mut self, items: Vec<Document>) {
        self.items = items;
        self.loading = false;
        self.scroll = self.scroll.min(self.items.len().saturating_sub(1));
    }

    /// Apply a fetch failure; the previous list stays visible
    pub fn fail(&mut self) {
        self.loading = false;
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.items.len().saturating_sub(1);
        self.scroll = (self.scroll + lines).min(max);
    }
}
