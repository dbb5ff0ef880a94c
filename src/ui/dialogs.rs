//! Input dialogs and modals
//!
//! Currently the only modal is the confirmation dialog backing the
//! ConfirmGate.

use crate::ui::helpers::centered_rect;
use crate::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Renders the confirmation dialog for a pending action
///
/// Shown while the ConfirmGate is open; the gate's message is the prompt.
/// Y confirms, N or Esc declines.
///
/// # Arguments
/// - `f` - The Frame to render into
/// - `app` - The application state
pub(crate) fn render_confirm_dialog(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 20, f.area());
    f.render_widget(Clear, area);

    if let Some(message) = app.confirm.message() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(Color::Yellow))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default()),
                Span::styled(
                    "Y",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to confirm or "),
                Span::styled("N/ESC", Style::default().fg(Color::Green)),
                Span::raw(" to cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .title("Confirm")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );

        f.render_widget(paragraph, area);
    }
}
