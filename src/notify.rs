//! Notification lifecycle management
//!
//! Handles both kinds of transient notifications: flash alerts attached by
//! the host at startup and toasts created at runtime. Every notification
//! moves through the same one-way lifecycle (Visible, then FadingOut, then
//! Removed) driven by the event-loop tick, whether removal was triggered by
//! the auto-dismiss timer or by a manual dismissal.

use crate::utils::validation::sanitize_message;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long a notification stays fully visible before auto-dismissal (ms)
pub const DEFAULT_AUTO_DISMISS_MS: u64 = 5000;

/// Fade duration for the automatic dismissal path (ms)
pub const AUTO_FADE_MS: u64 = 500;

/// Fade duration for a manual dismissal (ms)
pub const MANUAL_FADE_MS: u64 = 300;

/// Severity and styling category of a notification
///
/// `Unstyled` is reserved for flash alerts attached by the host at startup
/// that carry no category of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A successful operation
    Success,
    /// A failure the user should know about
    Error,
    /// A non-fatal issue
    Warning,
    /// Neutral information
    Info,
    /// Pre-existing alert with no category
    Unstyled,
}

impl NotificationKind {
    /// Resolves a kind from its lowercase name
    ///
    /// Unrecognized names fall back to `Info` rather than failing: a bad
    /// kind is a configuration mistake, not a reason to drop the message.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            "warning" => NotificationKind::Warning,
            "info" => NotificationKind::Info,
            _ => NotificationKind::Info,
        }
    }

    /// Short label used as the toast title
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Success",
            NotificationKind::Error => "Error",
            NotificationKind::Warning => "Warning",
            NotificationKind::Info => "Info",
            NotificationKind::Unstyled => "Notice",
        }
    }
}

/// Lifecycle state of a notification
///
/// Transitions are strictly one-way: Visible to FadingOut to Removed.
/// A notification never returns to Visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationState {
    /// Fully shown, auto-dismiss timer running
    Visible,
    /// Fade started at `since`, removal due after `fade`
    FadingOut { since: Instant, fade: Duration },
    /// Detached; pruned on the next tick
    Removed,
}

/// A single transient notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// Stable identity for dismissal
    pub id: Uuid,
    pub kind: NotificationKind,
    /// Sanitized display text
    pub message: String,
    /// Wall-clock creation time, shown in the toast header
    pub created_at: DateTime<Utc>,
    shown_at: Instant,
    auto_dismiss_after: Duration,
    state: NotificationState,
}

impl Notification {
    fn new(message: &str, kind: NotificationKind, auto_dismiss_after: Duration, now: Instant) -> Self {
        Notification {
            id: Uuid::new_v4(),
            kind,
            message: sanitize_message(message),
            created_at: Utc::now(),
            shown_at: now,
            auto_dismiss_after,
            state: NotificationState::Visible,
        }
    }

    pub fn state(&self) -> NotificationState {
        self.state
    }

    /// True while the notification should still be rendered
    pub fn is_on_screen(&self) -> bool {
        !matches!(self.state, NotificationState::Removed)
    }

    /// True once the fade has begun (rendered dimmed)
    pub fn is_fading(&self) -> bool {
        matches!(self.state, NotificationState::FadingOut { .. })
    }

    /// Begins a fade unless one already started or the notification is gone.
    /// Keeping this a no-op for non-Visible states is what makes the race
    /// between the auto timer and a manual dismissal harmless.
    fn begin_fade(&mut self, now: Instant, fade: Duration) {
        if self.state == NotificationState::Visible {
            self.state = NotificationState::FadingOut { since: now, fade };
        }
    }

    fn advance(&mut self, now: Instant) {
        match self.state {
            NotificationState::Visible => {
                if now.duration_since(self.shown_at) >= self.auto_dismiss_after {
                    self.state = NotificationState::FadingOut {
                        since: now,
                        fade: Duration::from_millis(AUTO_FADE_MS),
                    };
                }
            }
            NotificationState::FadingOut { since, fade } => {
                if now.duration_since(since) >= fade {
                    self.state = NotificationState::Removed;
                }
            }
            NotificationState::Removed => {}
        }
    }
}

/// Owns all live notifications and advances their lifecycles
///
/// The host calls `tick` from its event loop; scheduling is deadline-based,
/// so a removal happens no earlier than its delay and no later than the
/// next tick after the deadline.
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    auto_dismiss_after: Duration,
}

impl NotificationCenter {
    pub fn new() -> Self {
        NotificationCenter {
            notifications: Vec::new(),
            auto_dismiss_after: Duration::from_millis(DEFAULT_AUTO_DISMISS_MS),
        }
    }

    /// Overrides the default 5000 ms auto-dismiss delay
    pub fn with_auto_dismiss(mut self, delay: Duration) -> Self {
        self.auto_dismiss_after = delay;
        self
    }

    /// Adopts a flash alert that was already present "at load"
    ///
    /// This is the explicit initialization entry point: the host calls it
    /// once per startup alert instead of the component scanning for them.
    /// Attached alerts get the same auto-dismiss schedule as toasts.
    pub fn attach_alert(&mut self, message: &str, kind: NotificationKind, now: Instant) -> Uuid {
        self.push(message, kind, now)
    }

    /// Creates a toast notification
    ///
    /// The message is sanitized on entry (control characters become spaces,
    /// see `sanitize_message`), so callers may pass untrusted text.
    /// Fire-and-forget: the returned id is only needed for manual dismissal.
    pub fn show_toast(&mut self, message: &str, kind: NotificationKind, now: Instant) -> Uuid {
        self.push(message, kind, now)
    }

    /// `show_toast` with the kind given by name; unknown names become Info
    pub fn show_toast_named(&mut self, message: &str, kind_name: &str, now: Instant) -> Uuid {
        self.push(message, NotificationKind::from_name(kind_name), now)
    }

    fn push(&mut self, message: &str, kind: NotificationKind, now: Instant) -> Uuid {
        let notification = Notification::new(message, kind, self.auto_dismiss_after, now);
        let id = notification.id;
        self.notifications.push(notification);
        id
    }

    /// Manually dismisses a notification with the short 300 ms fade
    ///
    /// No-op for unknown ids and for notifications already fading or
    /// removed, so a second dismissal (or the auto timer firing after a
    /// manual dismissal) can never error.
    pub fn dismiss(&mut self, id: Uuid, now: Instant) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.begin_fade(now, Duration::from_millis(MANUAL_FADE_MS));
        }
    }

    /// Dismisses the most recently created on-screen notification
    pub fn dismiss_newest(&mut self, now: Instant) {
        if let Some(id) = self
            .notifications
            .iter()
            .rev()
            .find(|n| n.is_on_screen())
            .map(|n| n.id)
        {
            self.dismiss(id, now);
        }
    }

    /// Advances every lifecycle and prunes removed notifications
    pub fn tick(&mut self, now: Instant) {
        for notification in &mut self.notifications {
            notification.advance(now);
        }
        self.notifications.retain(|n| n.is_on_screen());
    }

    /// Notifications that should currently be rendered, oldest first
    pub fn on_screen(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| n.is_on_screen())
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Looks up a notification by id (gone once pruned)
    pub fn get(&self, id: Uuid) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
