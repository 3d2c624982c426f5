//! Read-only list views
//!
//! Each view mirrors one server-owned list. Lists are replaced wholesale on
//! refresh, never merged or re-sorted; refresh happens once at startup and
//! then only when a sibling workflow signals a successful submission.

mod documents;
mod history;

pub use documents::DocumentsView;
pub use history::HistoryView;
