//! flashtui - Flash messages and sign-up validation for the terminal
//!
//! A small TUI demonstrating the flashtui toolkit:
//! - Flash alerts attached at startup (from config or command line)
//! - Toast notifications with timed auto-dismissal and manual dismissal
//! - Live email/password validation with a debounced email check
//! - A confirm-before-acting gate in front of destructive actions
//!
//! # Architecture
//!
//! The application is organized into several modules:
//! - `config` - Settings and startup flash messages
//! - `notify` - Notification lifecycle (library)
//! - `debounce` - Trailing-edge debouncer (library)
//! - `confirm` - Confirmation gate (library)
//! - `utils` - Validation and formatting (library)
//! - `ui` - Terminal UI rendering with ratatui

mod ui;

use crate::ui::ui;
use anyhow::Result;
use chrono::Local;
use clap::Parser;
use crossterm::{
    event::{self, poll, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flashtui::config::Config;
use flashtui::confirm::ConfirmGate;
use flashtui::debounce::Debouncer;
use flashtui::notify::{NotificationCenter, NotificationKind};
use flashtui::utils::formatting::format_date;
use flashtui::utils::validation::{validate_email, validate_password, PasswordAssessment};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

// Configuration constants

/// Event loop tick interval (milliseconds)
const TICK_MS: u64 = 50;

/// Quiet window for the live email check (milliseconds)
const EMAIL_DEBOUNCE_MS: u64 = 300;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Flash message to show at startup (repeatable)
    #[arg(short, long)]
    flash: Vec<String>,

    /// Override how long notifications stay visible (milliseconds)
    #[arg(long)]
    auto_dismiss_ms: Option<u64>,
}

/// Current mode of the application UI
enum AppMode {
    /// Editing the sign-up form
    Form,
    /// A confirmation dialog is open
    Confirming,
}

/// Fields in the sign-up form
#[derive(Debug, Clone, Copy, PartialEq)]
enum FormField {
    Email,
    Password,
}

/// Actions that require confirmation before running
enum AppAction {
    /// Exit the application
    Quit,
    /// Reset both form fields
    ClearForm,
}

/// Editable state of the sign-up form
struct SignupForm {
    active_field: FormField,
    email: String,
    password: String,
    show_password: bool,
}

impl SignupForm {
    fn new() -> Self {
        SignupForm {
            active_field: FormField::Email,
            email: String::new(),
            password: String::new(),
            show_password: false,
        }
    }

    /// Move to the next input field
    fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Email => FormField::Password,
            FormField::Password => FormField::Email,
        };
    }

    /// Returns a mutable reference to the currently active field's value
    fn active_input(&mut self) -> &mut String {
        match self.active_field {
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }

    fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
        self.active_field = FormField::Email;
    }
}

struct App {
    mode: AppMode,
    form: SignupForm,
    notifications: NotificationCenter,
    confirm: ConfirmGate<AppAction>,
    email_check: Debouncer<String>,
    /// Debounced email verdict; None while a check is pending or the
    /// field is untouched
    email_status: Option<bool>,
    /// Password assessment, recomputed on every keystroke
    assessment: PasswordAssessment,
    /// Formatted timestamp of the last successful submission
    last_signup: Option<String>,
}

impl App {
    fn new(auto_dismiss: Duration) -> Self {
        App {
            mode: AppMode::Form,
            form: SignupForm::new(),
            notifications: NotificationCenter::new().with_auto_dismiss(auto_dismiss),
            confirm: ConfirmGate::new(),
            email_check: Debouncer::new(Duration::from_millis(EMAIL_DEBOUNCE_MS)),
            email_status: None,
            assessment: validate_password(""),
            last_signup: None,
        }
    }

    /// Advances timers: notification lifecycles and the email debouncer
    fn on_tick(&mut self, now: Instant) {
        self.notifications.tick(now);
        if let Some(email) = self.email_check.poll(now) {
            self.email_status = Some(validate_email(&email));
        }
    }

    /// Records a keystroke in the active field and refreshes validation
    fn edit_active_field(&mut self, c: char, now: Instant) {
        self.form.active_input().push(c);
        self.after_edit(now);
    }

    fn erase_active_field(&mut self, now: Instant) {
        self.form.active_input().pop();
        self.after_edit(now);
    }

    fn after_edit(&mut self, now: Instant) {
        match self.form.active_field {
            FormField::Email => {
                // Verdict is pending until the debounce window closes
                self.email_status = None;
                self.email_check.call(self.form.email.clone(), now);
            }
            FormField::Password => {
                self.assessment = validate_password(&self.form.password);
            }
        }
    }

    /// Validates the whole form and raises the outcome as a toast
    fn submit(&mut self, now: Instant) {
        if !validate_email(&self.form.email) {
            self.email_status = Some(false);
            self.notifications
                .show_toast("Please enter a valid email address", NotificationKind::Error, now);
            return;
        }
        let assessment = validate_password(&self.form.password);
        self.assessment = assessment;
        if !assessment.is_valid() {
            let missing = assessment.failed_rules().join(", ");
            self.notifications.show_toast(
                &format!("Password needs {}", missing),
                NotificationKind::Error,
                now,
            );
            return;
        }

        match format_date(&Local::now().to_rfc3339()) {
            Ok(stamp) => {
                self.notifications.show_toast(
                    &format!("Account created for {}", self.form.email),
                    NotificationKind::Success,
                    now,
                );
                self.last_signup = Some(stamp);
            }
            Err(e) => {
                self.notifications
                    .show_toast(&format!("{}", e), NotificationKind::Error, now);
            }
        }
    }

    /// Runs a confirmed action; returns true if the app should exit
    fn run_action(&mut self, action: AppAction, now: Instant) -> bool {
        match action {
            AppAction::Quit => true,
            AppAction::ClearForm => {
                self.form.clear();
                self.email_status = None;
                self.assessment = validate_password("");
                self.notifications
                    .show_toast("Form cleared", NotificationKind::Info, now);
                false
            }
        }
    }
}

/// Handles key events in Form mode; returns true to quit
fn handle_form_input(app: &mut App, key: event::KeyEvent, now: Instant) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => {
                app.form.show_password = !app.form.show_password;
            }
            KeyCode::Char('d') => {
                app.notifications.dismiss_newest(now);
            }
            KeyCode::Char('l') => {
                app.confirm.request("Clear the form?", AppAction::ClearForm);
                app.mode = AppMode::Confirming;
            }
            KeyCode::Char('c') => return true,
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.form.next_field(),
        KeyCode::Enter => app.submit(now),
        KeyCode::Backspace => app.erase_active_field(now),
        KeyCode::Esc => {
            app.confirm.request("Quit flashtui?", AppAction::Quit);
            app.mode = AppMode::Confirming;
        }
        KeyCode::Char(c) => app.edit_active_field(c, now),
        _ => {}
    }
    false
}

/// Handles key events in Confirming mode; returns true to quit
fn handle_confirm_input(app: &mut App, key_code: KeyCode, now: Instant) -> bool {
    let decision = match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(false),
        _ => None,
    };
    if let Some(accepted) = decision {
        app.mode = AppMode::Form;
        if let Some(action) = app.confirm.resolve(accepted) {
            return app.run_action(action, now);
        }
    }
    false
}

fn main() -> Result<()> {
    let args = Args::parse();

    // A malformed config is reported in-app, not fatal
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(format!("{:#}", e))),
    };

    let auto_dismiss_ms = args.auto_dismiss_ms.unwrap_or(config.auto_dismiss_ms);
    let mut app = App::new(Duration::from_millis(auto_dismiss_ms));

    // Attach load-time alerts before the first frame: config first, then
    // any passed on the command line
    let startup = Instant::now();
    for flash in &config.flash {
        app.notifications.attach_alert(
            &flash.message,
            NotificationKind::from_name(&flash.kind),
            startup,
        );
    }
    for message in &args.flash {
        app.notifications
            .attach_alert(message, NotificationKind::Unstyled, startup);
    }
    if let Some(error) = config_error {
        app.notifications
            .show_toast(&error, NotificationKind::Error, startup);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.on_tick(now);

        terminal.draw(|f| ui(f, app))?;

        // Short poll so timers keep advancing while the user is idle
        if poll(Duration::from_millis(TICK_MS))? {
            if let Event::Key(key) = event::read()? {
                let now = Instant::now();
                let should_quit = match app.mode {
                    AppMode::Form => handle_form_input(app, key, now),
                    AppMode::Confirming => handle_confirm_input(app, key.code, now),
                };
                if should_quit {
                    return Ok(());
                }
            }
        }
    }
}
