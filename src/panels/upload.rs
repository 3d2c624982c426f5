//! Upload tab: file selection and submission
//!
//! Enter on a non-empty path input selects that file; Enter on an empty
//! input submits the held selection. A failed upload keeps the selection
//! so Enter resubmits the same file.

use crate::api::SharedBackend;
use crate::core::Result;
use crate::events::Event;
use crate::state::{AppState, TabId};
use crate::ui::labels;
use crate::workflows::UploadWorkflow;
use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::path::PathBuf;

/// Upload tab panel
pub struct UploadPanel {
    /// Upload submission state machine
    pub workflow: UploadWorkflow,

    /// Path input buffer
    input: String,

    /// Input cursor position (byte offset)
    cursor: usize,
}

impl UploadPanel {
    pub fn new(backend: SharedBackend, event_tx: Sender<Event>) -> Self {
        Self {
            workflow: UploadWorkflow::new(backend, event_tx),
            input: String::new(),
            cursor: 0,
        }
    }

    fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            let mut new_cursor = self.cursor - 1;
            while !self.input.is_char_boundary(new_cursor) && new_cursor > 0 {
                new_cursor -= 1;
            }
            self.input.remove(new_cursor);
            self.cursor = new_cursor;
        }
    }

    /// Enter: select the typed path, or submit when the input is empty
    fn confirm(&mut self, state: &mut AppState) {
        state.clear_status();
        let typed = self.input.trim().to_string();
        if typed.is_empty() {
            if let Err(e) = self.workflow.submit() {
                state.error(e.to_string());
            }
            return;
        }
        self.workflow.select_file(PathBuf::from(typed));
        if !self.workflow.is_busy() {
            self.input.clear();
            self.cursor = 0;
        }
    }

    fn info_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        match self.workflow.selection() {
            Some(path) => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{} ", labels::LABEL_SELECTED),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(path.display().to_string()),
                ]));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    labels::HINT_NO_SELECTION.to_string(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        if self.workflow.is_busy() {
            lines.push(Line::from(Span::styled(
                labels::BUSY_UPLOADING.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            labels::HINT_UPLOAD.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl super::Panel for UploadPanel {
    fn id(&self) -> TabId {
        TabId::Upload
    }

    fn handle_key(&mut self, key: &KeyEvent, state: &mut AppState) -> Result<bool> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                Ok(true)
            }
            KeyCode::Backspace => {
                self.backspace();
                Ok(true)
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    while self.cursor > 0 && !self.input.is_char_boundary(self.cursor) {
                        self.cursor -= 1;
                    }
                }
                Ok(true)
            }
            KeyCode::Right => {
                if self.cursor < self.input.len() {
                    self.cursor += 1;
                    while self.cursor < self.input.len() && !self.input.is_char_boundary(self.cursor)
                    {
                        self.cursor += 1;
                    }
                }
                Ok(true)
            }
            KeyCode::Enter => {
                self.confirm(state);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let input_block = Block::default()
            .title(labels::TITLE_FILE_INPUT)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let input_inner = input_block.inner(chunks[0]);
        let input = Paragraph::new(self.input.as_str()).block(input_block);
        frame.render_widget(input, chunks[0]);

        let col = self.input[..self.cursor].chars().count() as u16;
        if col < input_inner.width {
            frame.set_cursor_position((input_inner.x + col, input_inner.y));
        }

        let info_title = if self.workflow.is_busy() {
            format!("{}{} ", labels::TITLE_UPLOAD, labels::BUSY_UPLOADING)
        } else {
            labels::TITLE_UPLOAD.to_string()
        };
        let info_block = Block::default()
            .title(info_title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let info = Paragraph::new(self.info_lines())
            .block(info_block)
            .wrap(Wrap { trim: false });
        frame.render_widget(info, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockBackend;
    use crate::events::EventBus;
    use crate::panels::Panel;
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(panel: &mut UploadPanel, state: &mut AppState, text: &str) {
        for c in text.chars() {
            panel.handle_key(&key(KeyCode::Char(c)), state).unwrap();
        }
    }

    #[test]
    fn test_enter_selects_then_uploads() {
        let bus = EventBus::new(16);
        let backend = Arc::new(MockBackend::new());
        let mut panel = UploadPanel::new(backend.clone(), bus.sender());
        let mut state = AppState::new();

        type_text(&mut panel, &mut state, "docs/policy.pdf");
        panel.handle_key(&key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(panel.workflow.selection(), Some(Path::new("docs/policy.pdf")));
        assert_eq!(panel.input, "");
        assert_eq!(backend.call_count("upload_document"), 0);

        // Empty input: submit the held selection
        panel.handle_key(&key(KeyCode::Enter), &mut state).unwrap();
        assert!(panel.workflow.is_busy());
        assert!(bus.recv_timeout(Duration::from_secs(2)).is_some());
        assert_eq!(backend.call_count("upload_document"), 1);
    }

    #[test]
    fn test_submit_without_selection_sets_error_status() {
        let bus = EventBus::new(16);
        let backend = Arc::new(MockBackend::new());
        let mut panel = UploadPanel::new(backend.clone(), bus.sender());
        let mut state = AppState::new();

        panel.handle_key(&key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(
            state.status_message.as_ref().map(|m| m.text.as_str()),
            Some(labels::ERR_NO_FILE)
        );
        assert_eq!(backend.call_count("upload_document"), 0);
    }
}
