//! Query workflow state machine
//!
//! Owns the question input buffer and the transient answer of the most
//! recent successful ask. A busy flag gates resubmission; a blank question
//! is rejected synchronously without touching the network.

use super::ValidationError;
use crate::api::{AnswerResult, SharedBackend};
use crate::events::Event;
use crossbeam_channel::Sender;

/// Number of retrieved passages requested per question
pub const TOP_K: u32 = 3;

/// State machine owning question input and submission
pub struct QueryWorkflow {
    /// Current question input buffer
    input: String,

    /// Input cursor position (byte offset)
    cursor: usize,

    /// Whether an ask request is in flight
    asking: bool,

    /// Answer of the most recent successful ask
    answer: Option<AnswerResult>,

    backend: SharedBackend,
    event_tx: Sender<Event>,
}

impl QueryWorkflow {
    pub fn new(backend: SharedBackend, event_tx: Sender<Event>) -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            asking: false,
            answer: None,
            backend,
            event_tx,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn answer(&self) -> Option<&AnswerResult> {
        self.answer.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.asking
    }

    /// Insert character at cursor
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let mut new_cursor = self.cursor - 1;
            while !self.input.is_char_boundary(new_cursor) && new_cursor > 0 {
                new_cursor -= 1;
            }
            self.input.remove(new_cursor);
            self.cursor = new_cursor;
        }
    }

    /// Move cursor one character left
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            while self.cursor > 0 && !self.input.is_char_boundary(self.cursor) {
                self.cursor -= 1;
            }
        }
    }

    /// Move cursor one character right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.input.len() {
            self.cursor += 1;
            while self.cursor < self.input.len() && !self.input.is_char_boundary(self.cursor) {
                self.cursor += 1;
            }
        }
    }

    /// Submit the current question
    ///
    /// Blank after trimming is a synchronous validation error; a submit
    /// while already asking is a no-op. Otherwise the previous answer is
    /// cleared before the request goes out.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        if self.asking {
            return Ok(());
        }
        if self.input.trim().is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }

        self.answer = None;
        self.asking = true;

        let question = self.input.clone();
        let backend = self.backend.clone();
        let tx = self.event_tx.clone();
        std::thread::spawn(move || match backend.ask_question(&question, TOP_K) {
            Ok(result) => {
                let _ = tx.send(Event::AnswerReady(result));
            }
            Err(e) => {
                let _ = tx.send(Event::AskFailed(e.to_string()));
            }
        });

        Ok(())
    }

    /// Apply a successful answer: store it and clear the question input
    pub fn complete(&mut self, result: AnswerResult) {
        self.answer = Some(result);
        self.input.clear();
        self.cursor = 0;
        self.asking = false;
    }

    /// Apply a failure: question input preserved for retry
    pub fn fail(&mut self) {
        self.asking = false;
    }
}
