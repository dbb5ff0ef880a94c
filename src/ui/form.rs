//! Sign-up form rendering
//!
//! Draws the email and password fields with live validation feedback:
//! the email border reflects the debounced verdict and the password rules
//! are shown as a checklist that updates on every keystroke.

use crate::{App, FormField};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the sign-up form
///
/// # Arguments
/// - `f` - The Frame to render into
/// - `app` - The application state
/// - `area` - The screen area to render in
pub(crate) fn render_signup_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(6), // Password rules
            Constraint::Min(1),    // Result line
        ])
        .split(area);

    // Email field: yellow while active, green/red once the debounced
    // validation has settled
    let email_border = if app.form.active_field == FormField::Email {
        Style::default().fg(Color::Yellow)
    } else {
        match app.email_status {
            Some(true) => Style::default().fg(Color::Green),
            Some(false) => Style::default().fg(Color::Red),
            None => Style::default(),
        }
    };
    let email_title = match app.email_status {
        Some(false) => "Email (invalid address)",
        _ => "Email",
    };
    let email = Paragraph::new(app.form.email.as_str()).block(
        Block::default()
            .title(email_title)
            .borders(Borders::ALL)
            .border_style(email_border),
    );
    f.render_widget(email, chunks[0]);

    // Password field, masked unless toggled
    let password_style = if app.form.active_field == FormField::Password {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let password_display = if app.form.show_password {
        app.form.password.clone()
    } else {
        "•".repeat(app.form.password.chars().count())
    };
    let password = Paragraph::new(password_display).block(
        Block::default()
            .title("Password [Ctrl+S to show/hide]")
            .borders(Borders::ALL)
            .border_style(password_style),
    );
    f.render_widget(password, chunks[1]);

    // Rule checklist from the current assessment
    let assessment = app.assessment;
    let rules = [
        ("At least 8 characters", assessment.has_length),
        ("An uppercase letter", assessment.has_upper),
        ("A lowercase letter", assessment.has_lower),
        ("A digit", assessment.has_number),
    ];
    let mut lines: Vec<Line> = rules
        .iter()
        .map(|(rule, ok)| {
            let (mark, color) = if *ok {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };
            Line::from(Span::styled(
                format!("{} {}", mark, rule),
                Style::default().fg(color),
            ))
        })
        .collect();
    if assessment.is_valid() {
        lines.push(Line::from(Span::styled(
            "Password OK",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }
    let checklist = Paragraph::new(lines).block(
        Block::default()
            .title("Password rules")
            .borders(Borders::ALL),
    );
    f.render_widget(checklist, chunks[2]);

    // Outcome of the last submission, if any
    if let Some(created_at) = &app.last_signup {
        let result = Paragraph::new(Line::from(vec![
            Span::raw("Account created: "),
            Span::styled(
                created_at.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(result, chunks[3]);
    }
}
