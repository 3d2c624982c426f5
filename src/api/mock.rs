//! Recording mock backend for tests
//!
//! Counts every call and mimics the server-side list growth: a successful
//! upload adds a document entry, a successful ask appends a history item.

use super::{AnswerResult, ApiError, Backend, Document, HistoryItem, UploadReceipt};
use std::path::Path;
use std::sync::Mutex;

#[derive(Default)]
pub struct MockBackend {
    pub calls: Mutex<Vec<String>>,
    pub documents: Mutex<Vec<Document>>,
    pub history: Mutex<Vec<HistoryItem>>,
    pub upload_result: Mutex<Option<Result<UploadReceipt, ApiError>>>,
    pub ask_result: Mutex<Option<Result<AnswerResult, ApiError>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the next upload outcome
    pub fn with_upload(self, result: Result<UploadReceipt, ApiError>) -> Self {
        *self.upload_result.lock().unwrap() = Some(result);
        self
    }

    /// Configure the next ask outcome
    pub fn with_answer(self, result: Result<AnswerResult, ApiError>) -> Self {
        *self.ask_result.lock().unwrap() = Some(result);
        self
    }

    /// Number of recorded calls to the named operation
    pub fn call_count(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(name))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Backend for MockBackend {
    fn fetch_history(&self) -> Result<Vec<HistoryItem>, ApiError> {
        self.record("fetch_history".to_string());
        Ok(self.history.lock().unwrap().clone())
    }

    fn fetch_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.record("fetch_documents".to_string());
        Ok(self.documents.lock().unwrap().clone())
    }

    fn upload_document(&self, file: &Path) -> Result<UploadReceipt, ApiError> {
        self.record(format!("upload_document {}", file.display()));
        let result = self
            .upload_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Ok(UploadReceipt { chunks: 1 }));
        if let Ok(ref receipt) = result {
            self.documents.lock().unwrap().push(Document {
                filename: file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                chunks: receipt.chunks,
                uploaded_at: "2024-01-01T00:00:00".to_string(),
            });
        }
        result
    }

    fn ask_question(&self, question: &str, top_k: u32) -> Result<AnswerResult, ApiError> {
        self.record(format!("ask_question {} top_k={}", question, top_k));
        let result = self
            .ask_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| {
                Ok(AnswerResult {
                    answer: "mock answer".to_string(),
                    sources: vec![],
                    timestamp: "2024-01-01T00:00:00Z".to_string(),
                })
            });
        if let Ok(ref answer) = result {
            let mut history = self.history.lock().unwrap();
            let id = history.len() as i64 + 1;
            history.push(HistoryItem {
                id,
                question: question.to_string(),
                answer: answer.answer.clone(),
                created_at: answer.timestamp.clone(),
            });
        }
        result
    }
}
