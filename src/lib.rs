//! flashtui library
//!
//! This library provides the core functionality for flashtui.
//! Modules are exposed for integration testing.

pub mod config;
pub mod confirm;
pub mod debounce;
pub mod notify;
pub mod utils;

// Re-export commonly used types for testing
pub use config::{Config, StartupFlash};
pub use confirm::ConfirmGate;
pub use debounce::Debouncer;
pub use notify::{Notification, NotificationCenter, NotificationKind, NotificationState};
pub use utils::validation::PasswordAssessment;
