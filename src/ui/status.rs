//! Status bar rendering
//!
//! Shows context-appropriate keyboard shortcuts at the bottom of the
//! screen.

use crate::{App, AppMode};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the status bar with context-appropriate keyboard shortcuts
///
/// # Arguments
/// - `f` - The Frame to render into
/// - `app` - The application state
/// - `area` - The screen area to render in
pub(crate) fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let shortcuts_text = match app.mode {
        AppMode::Form => {
            "[Tab] Next field  [Enter] Sign up  [Ctrl+S] Show password  [Ctrl+D] Dismiss toast  [Esc] Quit"
        }
        AppMode::Confirming => "[Y] Confirm  [N/Esc] Cancel",
    };

    let status_bar = Paragraph::new(shortcuts_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );

    f.render_widget(status_bar, area);
}
