//! Configuration management
//!
//! Handles loading and saving display settings and startup flash messages.
//!
//! Configuration files are stored in platform-specific directories:
//! - macOS: `~/Library/Application Support/flashtui/config.yaml`
//! - Linux: `~/.config/flashtui/config.yaml`
//! - Windows: `%APPDATA%\flashtui\config.yaml`

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::notify::DEFAULT_AUTO_DISMISS_MS;

/// A flash message shown when the application starts
///
/// These model server-rendered alerts that are already "on the page" at
/// load time: the app attaches each one to the notification center before
/// the first frame, where it follows the normal auto-dismiss lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupFlash {
    /// Notification kind by name (`success`, `error`, `warning`, `info`);
    /// unknown names default to info
    #[serde(default)]
    pub kind: String,
    /// Message text (sanitized on attach)
    pub message: String,
}

/// Application configuration
///
/// Persisted as YAML in the user's config directory. A missing file means
/// defaults; a malformed file is an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How long notifications stay visible before auto-dismissal (ms)
    #[serde(default = "default_auto_dismiss_ms")]
    pub auto_dismiss_ms: u64,
    /// Flash messages attached at startup
    #[serde(default)]
    pub flash: Vec<StartupFlash>,
}

fn default_auto_dismiss_ms() -> u64 {
    DEFAULT_AUTO_DISMISS_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            auto_dismiss_ms: DEFAULT_AUTO_DISMISS_MS,
            flash: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location
    ///
    /// # Returns
    /// - `Ok(Config)` with the loaded configuration, or defaults if the file doesn't exist
    /// - `Err` if the file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {:?}", config_path))?;

        let config: Config =
            serde_yaml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Saves the configuration to the default config file location
    ///
    /// Creates the config directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(self)?;
        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Returns the platform-specific configuration file path
    ///
    /// Falls back to `~/.config/flashtui/config.yaml` if platform detection
    /// fails.
    ///
    /// # Errors
    /// Returns an error if the HOME environment variable is not set (fallback case only).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "flashtui") {
            let config_dir = proj_dirs.config_dir();
            Ok(config_dir.join("config.yaml"))
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".config/flashtui/config.yaml"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.auto_dismiss_ms, 5000);
        assert!(config.flash.is_empty());
    }

    #[test]
    fn test_parse_minimal_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.auto_dismiss_ms, 5000);
        assert!(config.flash.is_empty());
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
auto_dismiss_ms: 3000
flash:
  - kind: warning
    message: "Maintenance tonight"
  - message: "Welcome"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.auto_dismiss_ms, 3000);
        assert_eq!(config.flash.len(), 2);
        assert_eq!(config.flash[0].kind, "warning");
        assert_eq!(config.flash[1].kind, "");
    }

    #[test]
    fn test_roundtrip() {
        let config = Config {
            auto_dismiss_ms: 1234,
            flash: vec![StartupFlash {
                kind: "info".to_string(),
                message: "hello".to_string(),
            }],
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.auto_dismiss_ms, 1234);
        assert_eq!(parsed.flash[0].message, "hello");
    }
}
