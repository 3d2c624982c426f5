//! Screen layout
//!
//! Three fixed rows: tab bar, active view content, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed areas for one frame
pub struct AppLayout {
    pub tabs: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Split the screen into tab bar, content, and status bar
pub fn get_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        tabs: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_rows() {
        let layout = get_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.tabs.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.content.height, 20);
        assert_eq!(layout.status.y, 23);
    }
}
