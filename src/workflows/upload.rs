//! Upload workflow state machine
//!
//! Idle -> FileSelected -> Uploading -> Idle on success, or back to
//! FileSelected on failure so the same file can be resubmitted without
//! reselecting. At most one upload request is in flight.

use super::ValidationError;
use crate::api::SharedBackend;
use crate::events::Event;
use crossbeam_channel::Sender;
use std::path::{Path, PathBuf};

/// Upload workflow states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    /// No selection held
    Idle,

    /// Selection held, no request in flight
    FileSelected(PathBuf),

    /// Request in flight for the held selection
    Uploading(PathBuf),
}

/// State machine owning file selection and submission
pub struct UploadWorkflow {
    state: UploadState,
    backend: SharedBackend,
    event_tx: Sender<Event>,
}

impl UploadWorkflow {
    pub fn new(backend: SharedBackend, event_tx: Sender<Event>) -> Self {
        Self {
            state: UploadState::Idle,
            backend,
            event_tx,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// The held selection, if any
    pub fn selection(&self) -> Option<&Path> {
        match &self.state {
            UploadState::Idle => None,
            UploadState::FileSelected(path) | UploadState::Uploading(path) => Some(path),
        }
    }

    /// Whether a request is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self.state, UploadState::Uploading(_))
    }

    /// Hold a new selection, replacing any previous one
    ///
    /// Ignored while a request is in flight: the outstanding upload keeps
    /// its file and nothing is queued.
    pub fn select_file(&mut self, path: PathBuf) {
        if self.is_busy() {
            return;
        }
        self.state = UploadState::FileSelected(path);
    }

    /// Submit the held selection
    ///
    /// No selection is a synchronous validation error; a submit while
    /// already uploading is a no-op (the busy flag guards duplicates).
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        let path = match &self.state {
            UploadState::Uploading(_) => return Ok(()),
            UploadState::Idle => return Err(ValidationError::NoFileSelected),
            UploadState::FileSelected(path) => path.clone(),
        };

        self.state = UploadState::Uploading(path.clone());

        let backend = self.backend.clone();
        let tx = self.event_tx.clone();
        std::thread::spawn(move || {
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            match backend.upload_document(&path) {
                Ok(receipt) => {
                    let _ = tx.send(Event::UploadDone {
                        filename,
                        chunks: receipt.chunks,
                    });
                }
                Err(e) => {
                    let _ = tx.send(Event::UploadFailed(e.to_string()));
                }
            }
        });

        Ok(())
    }

    /// Apply a successful completion: selection cleared
    pub fn complete(&mut self) {
        self.state = UploadState::Idle;
    }

    /// Apply a failure: selection retained for retry
    pub fn fail(&mut self) {
        if let UploadState::Uploading(path) = std::mem::replace(&mut self.state, UploadState::Idle)
        {
            self.state = UploadState::FileSelected(path);
        }
    }
}
