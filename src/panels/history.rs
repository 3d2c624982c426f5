//! History tab: prior question/answer pairs

use crate::api::SharedBackend;
use crate::core::Result;
use crate::events::Event;
use crate::state::{AppState, TabId};
use crate::ui::labels;
use crate::views::HistoryView;
use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// History tab panel
pub struct HistoryPanel {
    /// Server history projection
    pub view: HistoryView,
}

impl HistoryPanel {
    pub fn new(backend: SharedBackend, event_tx: Sender<Event>) -> Self {
        Self {
            view: HistoryView::new(backend, event_tx),
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        if self.view.items().is_empty() {
            return vec![Line::from(Span::styled(
                labels::EMPTY_HISTORY.to_string(),
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let mut lines = Vec::new();
        for item in self.view.items().iter().skip(self.view.scroll) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", labels::LABEL_QUESTION),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(item.question.clone()),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", labels::LABEL_ANSWER),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(item.answer.clone()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", item.created_at),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }
        lines
    }
}

impl super::Panel for HistoryPanel {
    fn id(&self) -> TabId {
        TabId::History
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
            format!("{}{} ", labels::TITLE_HISTORY, labels::LOADING)
        } else {
            format!("{}({}) ", labels::TITLE_HISTORY, self.view.items().len())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockBackend;
    use crate::api::HistoryItem;
    use crate::events::EventBus;
    use std::sync::Arc;

    #[test]
    fn test_empty_state_line() {
        let bus = EventBus::new(16);
        let backend = Arc::new(MockBackend::new());
        let panel = HistoryPanel::new(backend, bus.sender());

        let lines = panel.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, labels::EMPTY_HISTORY);
    }

    #[test]
    fn test_lines_preserve_server_order() {
        let bus = EventBus::new(16);
        let backend = Arc::new(MockBackend::new());
        let mut panel = HistoryPanel::new(backend, bus.sender());

        panel.view.apply(vec![
            HistoryItem {
                id: 2,
                question: "newest".to_string(),
                answer: "a".to_string(),
                created_at: String::new(),
            },
            HistoryItem {
                id: 1,
                question: "older".to_string(),
                answer: "b".to_string(),
                created_at: String::new(),
            },
        ]);

        let lines = panel.lines();
        assert_eq!(lines[0].spans[1].content, "newest");
        assert_eq!(lines[4].spans[1].content, "older");
    }
}
