//! Event system with bounded channels
//!
//! Uses crossbeam bounded channels for backpressure to prevent memory bloat.
//! Network worker threads report back to the main loop through these events;
//! each workflow applies its own completion event to its state machine.

use crate::api::{AnswerResult, Document, HistoryItem};
use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use crossterm::event::KeyEvent;
use std::time::Duration;

/// Application events - unified event type
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize (width, height)
    Resize(u16, u16),

    /// Upload finished; chunk count reported by the backend
    UploadDone { filename: String, chunks: u64 },

    /// Upload failed with a user-facing message
    UploadFailed(String),

    /// Ask finished with the retrieval-augmented answer
    AnswerReady(AnswerResult),

    /// Ask failed with a user-facing message
    AskFailed(String),

    /// History list fetch resolved
    HistoryLoaded(Vec<HistoryItem>),

    /// History list fetch failed
    HistoryFailed(String),

    /// Documents list fetch resolved
    DocumentsLoaded(Vec<Document>),

    /// Documents list fetch failed
    DocumentsFailed(String),

    /// Tick event for periodic updates
    Tick,

    /// Quit application
    Quit,
}

/// Event bus using bounded crossbeam channels
///
/// Bounded channels provide backpressure - if the receiver is slow,
/// senders will block, preventing unbounded memory growth.
pub struct EventBus {
    tx: Sender<Event>,
    rx: Receiver<Event>,
}

impl EventBus {
    /// Create a new event bus with specified capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        Self { tx, rx }
    }

    /// Get a sender clone for spawning event producers
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Receive next event, blocking until available or timeout
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Event> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Try to receive without blocking
    pub fn try_recv(&self) -> Option<Event> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain up to max events from the queue
    ///
    /// Useful for batch processing to prevent event starvation.
    pub fn drain(&self, max: usize) -> Vec<Event> {
        let mut events = Vec::with_capacity(max);
        while events.len() < max {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(_) => break,
            }
        }
        events
    }
}
