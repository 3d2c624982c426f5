//! Wire types for the backend API
//!
//! These mirror what the backend returns and are never locally mutated -
//! list types are replaced wholesale on refresh.

use serde::{Deserialize, Serialize};

/// Metadata for one uploaded document
///
/// Identity is filename + uploaded_at; the backend assigns no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub filename: String,
    pub chunks: u64,
    pub uploaded_at: String,
}

/// One prior question/answer pair, appended server-side on each ask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub created_at: String,
}

/// Answer to the most recent ask
///
/// Transient: held only until the next ask submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    pub sources: Vec<String>,
    pub timestamp: String,
}

/// Successful upload response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub chunks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_history_item_ignores_extra_fields() {
        // The backend also returns a `sources` column per history row
        let json = r#"{
            "id": 7,
            "question": "What is the refund policy?",
            "answer": "Refunds are accepted within 30 days.",
            "sources": ["policy.pdf"],
            "created_at": "2024-01-01T10:00:00"
        }"#;
        let item: HistoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.question, "What is the refund policy?");
    }

    #[test]
    fn test_upload_receipt_ignores_extra_fields() {
        let json = r#"{
            "status": "success",
            "filename": "policy.pdf",
            "chunks": 12,
            "message": "Document uploaded and processed"
        }"#;
        let receipt: UploadReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.chunks, 12);
    }

    #[test]
    fn test_answer_result_roundtrip() {
        let json = r#"{
            "answer": "Refunds are accepted within 30 days.",
            "sources": ["policy.pdf#2", "faq.txt#1"],
            "timestamp": "2024-01-01T10:00:00Z"
        }"#;
        let result: AnswerResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.sources.len(), 2);
        assert_eq!(result.timestamp, "2024-01-01T10:00:00Z");
    }
}
