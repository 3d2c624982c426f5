//! Documents tab: uploaded-document metadata

use crate::api::SharedBackend;
use crate::core::Result;
use crate::events::Event;
use crate::state::{AppState, TabId};
use crate::ui::labels;
use crate::views::DocumentsView;
use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Documents tab panel
pub struct DocumentsPanel {
    /// Server document-list projection
    pub view: DocumentsView,
}

impl DocumentsPanel {
    pub fn new(backend: SharedBackend, event_tx: Sender<Event>) -> Self {
        Self {
            view: DocumentsView::new(backend, event_tx),
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        if self.view.items().is_empty() {
            return vec![Line::from(Span::styled(
                labels::EMPTY_DOCUMENTS.to_string(),
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let mut lines = Vec::new();
        for doc in self.view.items().iter().skip(self.view.scroll) {
            lines.push(Line::from(Span::styled(
                doc.filename.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!(
                    "  {} {} | {} {}",
                    doc.chunks,
                    labels::LABEL_CHUNKS,
                    labels::LABEL_UPLOADED,
                    doc.uploaded_at
                ),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }
        lines
    }
}

impl super::Panel for DocumentsPanel {
    fn id(&self) -> TabId {
        TabId::Documents
    }

    fn handle_key(&mut self, key: &KeyEvent, _state: &mut AppState) -> Result<bool> {
        match key.code {
            KeyCode::Up => {
                self.view.scroll_up(1);
                Ok(true)
            }
            KeyCode::Down => {
                self.view.scroll_down(1);
                Ok(true)
            }
            KeyCode::PageUp => {
                self.view.scroll_up(10);
                Ok(true)
            }
            KeyCode::PageDown => {
                self.view.scroll_down(10);
                Ok(true)
            }
            KeyCode::Home => {
                self.view.scroll = 0;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = if self.view.is_loading() {
            format!("{}{} ", labels::TITLE_DOCUMENTS, labels::LOADING)
        } else {
            format!("{}({}) ", labels::TITLE_DOCUMENTS, self.view.items().len())
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let list = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(list, area);
    }
}
