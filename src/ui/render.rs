//! Main render function

use super::labels;
use super::layout::get_layout;
use crate::panels::{Panel, PanelRegistry};
use crate::state::{AppState, MessageLevel, TabId};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Render the entire application
pub fn render(frame: &mut Frame, state: &AppState, panels: &PanelRegistry) {
    let layout = get_layout(frame.area());

    render_tab_bar(frame, layout.tabs, state);
    panels.get(state.tabs.active()).render(frame, layout.content);
    render_status_bar(frame, layout.status, state, panels);
}

/// Render the tab bar with the active tab highlighted
fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = TabId::ALL
        .iter()
        .map(|tab| Line::from(tab_title(*tab)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(labels::APP_TITLE)
                .borders(Borders::ALL),
        )
        .select(state.tabs.active().index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the status bar: busy indicators, notification, key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, panels: &PanelRegistry) {
    let mut spans = Vec::new();

    let busy = if panels.chat.workflow.is_busy() {
        Some(labels::BUSY_ASKING)
    } else if panels.upload.workflow.is_busy() {
        Some(labels::BUSY_UPLOADING)
    } else if panels.history.view.is_loading() || panels.documents.view.is_loading() {
        Some(labels::LOADING)
    } else {
        None
    };
    if let Some(busy) = busy {
        spans.push(Span::styled(
            format!(" {} ", busy),
            Style::default().bg(Color::Blue).fg(Color::White),
        ));
        spans.push(Span::raw(" "));
    }

    if let Some(msg) = &state.status_message {
        let color = match msg.level {
            MessageLevel::Info => Color::Gray,
            MessageLevel::Error => Color::Red,
        };
        spans.push(Span::styled(
            msg.text.clone(),
            Style::default().fg(color),
        ));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        labels::HINT_KEYS,
        Style::default().fg(Color::DarkGray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(status, area);
}

/// Tab display name
pub fn tab_title(tab: TabId) -> &'static str {
    match tab {
        TabId::Chat => labels::TAB_CHAT,
        TabId::Upload => labels::TAB_UPLOAD,
        TabId::History => labels::TAB_HISTORY,
        TabId::Documents => labels::TAB_DOCUMENTS,
    }
}
