//! User-facing text
//!
//! All labels and prompts live here rather than inline in render code, so
//! the bundle can be swapped for a localized one.

// Tab bar
pub const TAB_CHAT: &str = "Ask";
pub const TAB_UPLOAD: &str = "Upload";
pub const TAB_HISTORY: &str = "History";
pub const TAB_DOCUMENTS: &str = "Documents";
pub const APP_TITLE: &str = " Document QA ";

// Chat tab
pub const TITLE_QUESTION: &str = " Question (Enter: ask) ";
pub const TITLE_ANSWER: &str = " Answer ";
pub const LABEL_SOURCES: &str = "Sources:";
pub const LABEL_TIME: &str = "Time:";
pub const BUSY_ASKING: &str = "thinking...";
pub const HINT_NO_ANSWER: &str = "Type a question and press Enter.";

// Upload tab
pub const TITLE_FILE_INPUT: &str = " File path (Enter: select) ";
pub const TITLE_UPLOAD: &str = " Upload ";
pub const LABEL_SELECTED: &str = "Selected:";
pub const BUSY_UPLOADING: &str = "uploading...";
pub const HINT_UPLOAD: &str = "Type a file path and press Enter to select it; press Enter on an empty input to upload the selected file. PDF and TXT are supported.";
pub const HINT_NO_SELECTION: &str = "No file selected.";

// History tab
pub const TITLE_HISTORY: &str = " History ";
pub const EMPTY_HISTORY: &str = "No questions asked yet.";
pub const LABEL_QUESTION: &str = "Q:";
pub const LABEL_ANSWER: &str = "A:";

// Documents tab
pub const TITLE_DOCUMENTS: &str = " Documents ";
pub const EMPTY_DOCUMENTS: &str = "No documents uploaded yet.";
pub const LABEL_CHUNKS: &str = "chunks";
pub const LABEL_UPLOADED: &str = "uploaded";

// Status bar
pub const LOADING: &str = "loading...";
pub const HINT_KEYS: &str = " Tab: Next view  Ctrl+Q: Quit ";

// Validation messages
pub const ERR_NO_FILE: &str = "Select a file before uploading";
pub const ERR_EMPTY_QUESTION: &str = "Type a question before asking";

// Notifications
pub const MSG_UPLOADED_PREFIX: &str = "Uploaded";
