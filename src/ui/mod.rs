//! User interface rendering module
//!
//! This module contains all TUI rendering logic using the ratatui library.
//! Each submodule handles rendering for a specific UI component:
//! - `form` - Sign-up form with validation feedback
//! - `toast` - Notification overlay
//! - `dialogs` - Confirmation dialog
//! - `status` - Status bar
//! - `helpers` - UI utility functions

mod dialogs;
mod form;
mod helpers;
mod status;
mod toast;

use crate::{App, AppMode};
use dialogs::render_confirm_dialog;
use form::render_signup_form;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use status::render_status_bar;
use toast::render_toasts;

/// Main UI rendering function
///
/// Lays out the title, form and status bar, overlays the confirmation
/// dialog when the gate is open, and draws the toast stack last so
/// notifications always sit on top.
///
/// # Arguments
/// - `f` - The Frame to render into
/// - `app` - The application state
pub(crate) fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let title = Paragraph::new("flashtui - Create your account")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_signup_form(f, app, chunks[1]);

    if matches!(app.mode, AppMode::Confirming) {
        render_confirm_dialog(f, app);
    }

    render_status_bar(f, app, chunks[2]);

    // Toasts render over everything, including modals
    render_toasts(f, app);
}
