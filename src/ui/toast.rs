//! Toast overlay rendering
//!
//! Draws the stack of live notifications in the top-right corner of the
//! frame. Each toast is colored by its kind and dims once its fade has
//! begun, standing in for the opacity transition a browser would animate.

use crate::ui::helpers::toast_rect;
use crate::App;
use flashtui::notify::{Notification, NotificationKind};
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of a toast box in columns
const TOAST_WIDTH: u16 = 44;

/// Height of a toast box in rows
const TOAST_HEIGHT: u16 = 4;

/// Border and title color for each notification kind
fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Info => Color::Blue,
        NotificationKind::Unstyled => Color::Gray,
    }
}

/// Renders all on-screen notifications as a top-right toast stack
///
/// Oldest first from the top. Fading toasts are rendered dimmed so manual
/// and automatic dismissal are visually distinct from an abrupt removal.
///
/// # Arguments
/// - `f` - The Frame to render into
/// - `app` - The application state
pub(crate) fn render_toasts(f: &mut Frame, app: &App) {
    let toasts: Vec<&Notification> = app.notifications.on_screen().collect();

    for (index, toast) in toasts.iter().enumerate() {
        let Some(area) = toast_rect(index, TOAST_WIDTH, TOAST_HEIGHT, f.area()) else {
            break;
        };
        f.render_widget(Clear, area);

        let color = kind_color(toast.kind);
        let mut style = Style::default().fg(color);
        if toast.is_fading() {
            style = style.add_modifier(Modifier::DIM);
        }

        let title = format!(
            " {} [{}] ",
            toast.kind.label(),
            toast.created_at.format("%H:%M:%S")
        );

        let body = Paragraph::new(toast.message.as_str())
            .wrap(Wrap { trim: true })
            .style(style)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(style),
            );

        f.render_widget(body, area);
    }
}
