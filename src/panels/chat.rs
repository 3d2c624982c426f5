//! Ask tab: question input and the latest retrieval-augmented answer

use crate::api::SharedBackend;
use crate::core::Result;
use crate::events::Event;
use crate::state::{AppState, TabId};
use crate::ui::labels;
use crate::workflows::QueryWorkflow;
use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Ask tab panel
pub struct ChatPanel {
    /// Question submission state machine
    pub workflow: QueryWorkflow,
}

impl ChatPanel {
    pub fn new(backend: SharedBackend, event_tx: Sender<Event>) -> Self {
        Self {
            workflow: QueryWorkflow::new(backend, event_tx),
        }
    }

    /// Format the answer area contents
    fn answer_lines(&self) -> Vec<Line<'static>> {
        if self.workflow.is_busy() {
            return vec![Line::from(Span::styled(
                labels::BUSY_ASKING.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))];
        }

        let Some(answer) = self.workflow.answer() else {
            return vec![Line::from(Span::styled(
                labels::HINT_NO_ANSWER.to_string(),
                Style::default().fg(Color::DarkGray),
            ))];
        };

        let mut lines = Vec::new();
        for text_line in answer.answer.lines() {
            lines.push(Line::from(text_line.to_string()));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            labels::LABEL_SOURCES.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for source in &answer.sources {
            lines.push(Line::from(Span::styled(
                format!("  - {}", source),
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} {}", labels::LABEL_TIME, answer.timestamp),
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl super::Panel for ChatPanel {
    fn id(&self) -> TabId {
        TabId::Chat
    }

    fn handle_key(&mut self, key: &KeyEvent, state: &mut AppState) -> Result<bool> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.workflow.insert_char(c);
                Ok(true)
            }
            KeyCode::Backspace => {
                self.workflow.backspace();
                Ok(true)
            }
            KeyCode::Left => {
                self.workflow.cursor_left();
                Ok(true)
            }
            KeyCode::Right => {
                self.workflow.cursor_right();
                Ok(true)
            }
            KeyCode::Enter => {
                state.clear_status();
                if let Err(e) = self.workflow.submit() {
                    state.error(e.to_string());
                }
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

        // Question input
        let input_title = if self.workflow.is_busy() {
            format!("{}{} ", labels::TITLE_QUESTION, labels::BUSY_ASKING)
        } else {
            labels::TITLE_QUESTION.to_string()
        };
        let input_block = Block::default()
            .title(input_title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let input_inner = input_block.inner(chunks[0]);
        let input = Paragraph::new(self.workflow.input()).block(input_block);
        frame.render_widget(input, chunks[0]);

        // Cursor in the input line
        let col = self.workflow.input()[..self.workflow.cursor()].chars().count() as u16;
        if col < input_inner.width {
            frame.set_cursor_position((input_inner.x + col, input_inner.y));
        }

        // Answer area
        let answer_block = Block::default()
            .title(labels::TITLE_ANSWER)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let answer = Paragraph::new(self.answer_lines())
            .block(answer_block)
            .wrap(Wrap { trim: false });
        frame.render_widget(answer, chunks[1]);
    }
}
