//! Layered configuration.
//!
//! Sources, lowest priority first: built-in defaults, an optional config file
//! (`--config`, any format the `config` crate understands), environment
//! variables prefixed with `FLAGWATCH_`, and finally command-line flags.
//!
//! ```toml
//! project = "shop"
//! environment = "online"
//! toggle = "new_checkout"
//! window = "24"
//! refresh = "5s"
//! locale = "en"
//!
//! [server]
//! url = "http://localhost:4009"
//! token = "..."
//! timeout = "10s"
//!
//! [log]
//! file = "flagwatch.log"
//! level = "debug"
//! ```
//!
//! Nested keys use a double underscore in the environment:
//! `FLAGWATCH_SERVER__TOKEN=...`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::browser::DEFAULT_DOCS_URL;
use crate::data::duration::parse_duration;
use crate::data::TimeWindow;
use crate::i18n::Locale;
use crate::source::FlagTarget;

/// Management API connection settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub url: String,
    pub token: Option<String>,
    pub timeout: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:4009".to_string(),
            token: None,
            timeout: "10s".to_string(),
        }
    }
}

/// Log output settings. Without a file, interactive mode does not log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub project: Option<String>,
    pub environment: Option<String>,
    pub toggle: Option<String>,
    /// Initial evaluation window (`lastHours` value).
    pub window: String,
    /// Poll interval, e.g. "5s".
    pub refresh: String,
    pub locale: String,
    /// Target of the empty-state SDK link.
    pub docs_url: String,
    /// Read metrics from this JSON file instead of the server.
    pub file: Option<PathBuf>,
    pub log: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            project: None,
            environment: None,
            toggle: None,
            window: TimeWindow::default().value().to_string(),
            refresh: "5s".to_string(),
            locale: Locale::default().code().to_string(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
            file: None,
            log: LogSettings::default(),
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub server: Option<String>,
    pub token: Option<String>,
    pub project: Option<String>,
    pub environment: Option<String>,
    pub toggle: Option<String>,
    pub window: Option<String>,
    pub refresh: Option<String>,
    pub locale: Option<String>,
    pub file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the optional config file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(
                Environment::with_prefix("FLAGWATCH")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Apply command-line values on top of the loaded settings.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(url) = overrides.server {
            self.server.url = url;
        }
        if overrides.token.is_some() {
            self.server.token = overrides.token;
        }
        if overrides.project.is_some() {
            self.project = overrides.project;
        }
        if overrides.environment.is_some() {
            self.environment = overrides.environment;
        }
        if overrides.toggle.is_some() {
            self.toggle = overrides.toggle;
        }
        if let Some(window) = overrides.window {
            self.window = window;
        }
        if let Some(refresh) = overrides.refresh {
            self.refresh = refresh;
        }
        if let Some(locale) = overrides.locale {
            self.locale = locale;
        }
        if overrides.file.is_some() {
            self.file = overrides.file;
        }
        if overrides.log_file.is_some() {
            self.log.file = overrides.log_file;
        }
    }

    /// The toggle to watch. All three keys are required.
    pub fn target(&self) -> Result<FlagTarget> {
        fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
            match value.as_deref().map(str::trim) {
                Some(v) if !v.is_empty() => Ok(v),
                _ => bail!("Missing {name} key: pass --{name} or set `{name}` in the config file"),
            }
        }

        Ok(FlagTarget::new(
            required(&self.project, "project")?,
            required(&self.environment, "environment")?,
            required(&self.toggle, "toggle")?,
        ))
    }

    pub fn window(&self) -> Result<TimeWindow> {
        self.window.parse()
    }

    pub fn locale(&self) -> Result<Locale> {
        self.locale.parse()
    }

    pub fn refresh_interval(&self) -> Result<Duration> {
        let interval = parse_duration(&self.refresh)
            .with_context(|| format!("Invalid refresh interval '{}'", self.refresh))?;
        if interval.is_zero() {
            bail!("Refresh interval must be greater than zero");
        }
        Ok(interval)
    }

    pub fn request_timeout(&self) -> Result<Duration> {
        let timeout = parse_duration(&self.server.timeout)
            .with_context(|| format!("Invalid server timeout '{}'", self.server.timeout))?;
        if timeout.is_zero() {
            bail!("Server timeout must be greater than zero");
        }
        Ok(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.url, "http://localhost:4009");
        assert_eq!(settings.window().unwrap(), TimeWindow::OneDay);
        assert_eq!(settings.refresh_interval().unwrap(), Duration::from_secs(5));
        assert_eq!(settings.request_timeout().unwrap(), Duration::from_secs(10));
        assert_eq!(settings.locale().unwrap(), Locale::En);
        assert_eq!(settings.docs_url, DEFAULT_DOCS_URL);
    }

    #[test]
    fn test_load_from_file() {
        let file = toml_file(
            r#"
            project = "shop"
            environment = "online"
            toggle = "new_checkout"
            window = "168"
            refresh = "2s"
            locale = "zh"

            [server]
            url = "https://flags.example.com"
            token = "secret"
            "#,
        );

        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(
            settings.target().unwrap(),
            FlagTarget::new("shop", "online", "new_checkout")
        );
        assert_eq!(settings.window().unwrap(), TimeWindow::SevenDays);
        assert_eq!(settings.refresh_interval().unwrap(), Duration::from_secs(2));
        assert_eq!(settings.locale().unwrap(), Locale::Zh);
        assert_eq!(settings.server.url, "https://flags.example.com");
        assert_eq!(settings.server.token.as_deref(), Some("secret"));
        // Untouched sections keep their defaults
        assert_eq!(settings.server.timeout, "10s");
        assert_eq!(settings.log, LogSettings::default());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(Settings::load(Some(Path::new("/nonexistent/flagwatch.toml"))).is_err());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut settings = Settings {
            project: Some("shop".to_string()),
            environment: Some("online".to_string()),
            toggle: Some("old_toggle".to_string()),
            ..Settings::default()
        };

        settings.apply(Overrides {
            toggle: Some("new_checkout".to_string()),
            window: Some("1".to_string()),
            token: Some("cli-token".to_string()),
            ..Overrides::default()
        });

        assert_eq!(settings.target().unwrap().toggle, "new_checkout");
        assert_eq!(settings.target().unwrap().project, "shop");
        assert_eq!(settings.window().unwrap(), TimeWindow::OneHour);
        assert_eq!(settings.server.token.as_deref(), Some("cli-token"));
        assert_eq!(settings.refresh, "5s");
    }

    #[test]
    fn test_missing_target_key() {
        let settings = Settings {
            project: Some("shop".to_string()),
            environment: Some("online".to_string()),
            toggle: Some("  ".to_string()),
            ..Settings::default()
        };

        let err = settings.target().unwrap_err();
        assert!(err.to_string().contains("--toggle"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let settings = Settings {
            window: "48".to_string(),
            refresh: "0s".to_string(),
            locale: "fr".to_string(),
            ..Settings::default()
        };

        assert!(settings.window().is_err());
        assert!(settings.refresh_interval().is_err());
        assert!(settings.locale().is_err());
    }
}
