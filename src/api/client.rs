//! HTTP client for the backend API
//!
//! Thin ureq wrapper over the four remote operations. Callers run these
//! from worker threads; nothing here touches UI state.

use super::{AnswerResult, ApiError, Backend, Document, HistoryItem, UploadReceipt};
use serde_json::json;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// HTTP client bound to one backend base URL
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (trailing slash tolerated)
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Backend for ApiClient {
    fn fetch_history(&self) -> Result<Vec<HistoryItem>, ApiError> {
        let response = ureq::get(&self.url("/history")).call()?;
        let items: Vec<HistoryItem> = response.into_json()?;
        Ok(items)
    }

    fn fetch_documents(&self) -> Result<Vec<Document>, ApiError> {
        let response = ureq::get(&self.url("/documents")).call()?;
        let documents: Vec<Document> = response.into_json()?;
        Ok(documents)
    }

    fn upload_document(&self, file: &Path) -> Result<UploadReceipt, ApiError> {
        let data = std::fs::read(file)
            .map_err(|e| ApiError::File(format!("{}: {}", file.display(), e)))?;
        let filename = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let boundary = make_boundary();
        let body = multipart_body(&boundary, "file", &filename, &data);

        let response = ureq::post(&self.url("/upload"))
            .set(
                "Content-Type",
                &format!("multipart/form-data; boundary={}", boundary),
            )
            .send_bytes(&body)?;
        let receipt: UploadReceipt = response.into_json()?;
        Ok(receipt)
    }

    fn ask_question(&self, question: &str, top_k: u32) -> Result<AnswerResult, ApiError> {
        let body = json!({
            "question": question,
            "top_k": top_k,
        });

        let response = ureq::post(&self.url("/ask"))
            .set("Content-Type", "application/json")
            .send_json(&body)?;
        let result: AnswerResult = response.into_json()?;
        Ok(result)
    }
}

/// Generate a request-unique multipart boundary
fn make_boundary() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("----ragterm{:032x}", nanos)
}

/// Assemble a single-field multipart/form-data body
///
/// ureq carries no multipart support, so the body is built by hand:
/// one part with a filename and content type, closed by the final boundary.
fn multipart_body(boundary: &str, field: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(data.len() + 256);
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!("Content-Type: {}\r\n\r\n", content_type_for(filename)).as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}

/// Content type from the filename extension (backend accepts PDF and TXT)
fn content_type_for(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/ask"), "http://localhost:8000/ask");
    }

    #[test]
    fn test_multipart_body_layout() {
        let body = multipart_body("XYZ", "file", "notes.txt", b"hello");
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("--XYZ\r\n"));
        assert!(text.contains("Content-Disposition: form-data; name=\"file\"; filename=\"notes.txt\""));
        assert!(text.contains("Content-Type: text/plain\r\n\r\nhello"));
        assert!(text.ends_with("\r\n--XYZ--\r\n"));
    }

    #[test]
    fn test_content_type_for_extension() {
        assert_eq!(content_type_for("report.PDF"), "application/pdf");
        assert_eq!(content_type_for("notes.txt"), "text/plain");
        assert_eq!(content_type_for("data.bin"), "application/octet-stream");
    }

    #[test]
    fn test_boundary_not_empty() {
        let boundary = make_boundary();
        assert!(boundary.starts_with("----ragterm"));
        assert!(boundary.len() > 12);
    }
}
