//! Configuration for mjml-rs

use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{MjmlError, Result};
use crate::logging::LogFormat;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "mjml.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MjmlConfig {
    /// Outgoing mail settings
    #[serde(default)]
    pub mail: MailConfig,
    /// HTML rendering options
    #[serde(default)]
    pub render: RenderConfig,
    /// Browser preview settings
    #[serde(default)]
    pub preview: PreviewConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which transport delivers outgoing mail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Deliver through an SMTP relay
    Smtp,
    /// Write `.eml` files to a directory
    File,
}

/// Outgoing mail configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    #[serde(default = "default_transport")]
    pub transport: TransportKind,
    /// Sender mailbox (e.g., "Newsletter <news@example.com>")
    #[serde(default = "default_from")]
    pub from: String,
    /// Subject used when neither the command line nor `<mj-title>` provides one
    #[serde(default = "default_subject")]
    pub default_subject: String,
    /// Output directory for the file transport
    #[serde(default = "default_file_dir")]
    pub file_dir: PathBuf,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

/// Connection security for the SMTP relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// Plain connection, no encryption
    None,
    /// Upgrade with STARTTLS
    StartTls,
    /// Implicit TLS
    Tls,
}

/// SMTP relay configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default = "default_security")]
    pub security: SmtpSecurity,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Rendering options handed to the MJML renderer
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Strip HTML comments from the output
    #[serde(default)]
    pub disable_comments: bool,
    /// Base URL for `<mj-social>` icons
    pub social_icon_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Where the preview HTML is written before opening it
    #[serde(default = "default_preview_path")]
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_transport() -> TransportKind {
    TransportKind::Smtp
}

fn default_from() -> String {
    "mjml-rs <noreply@example.com>".to_string()
}

fn default_subject() -> String {
    "Your MJML Email".to_string()
}

fn default_file_dir() -> PathBuf {
    PathBuf::from("outbox")
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_security() -> SmtpSecurity {
    SmtpSecurity::StartTls
}

fn default_timeout() -> u64 {
    30
}

fn default_preview_path() -> PathBuf {
    PathBuf::from("src/output.html")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            transport: default_transport(),
            from: default_from(),
            default_subject: default_subject(),
            file_dir: default_file_dir(),
            smtp: SmtpConfig::default(),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            security: default_security(),
            username: None,
            password: None,
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            output_path: default_preview_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl MjmlConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MjmlError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| MjmlError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Resolve the configuration for one invocation
    ///
    /// An explicit path must exist. Without one, `mjml.toml` in the working
    /// directory is used when present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_in(explicit, Path::new("."))
    }

    /// Same as [`MjmlConfig::load`], looking for `mjml.toml` in `dir`
    pub fn load_in(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "Loading configuration");
            return Self::from_file(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.exists() {
            debug!(path = %candidate.display(), "Loading configuration");
            Self::from_file(&candidate)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the settings every command relies on
    ///
    /// Mail settings are checked separately by [`MailConfig::validate`],
    /// only when something is about to be sent.
    pub fn validate(&self) -> Result<()> {
        LogFormat::parse(&self.logging.format)?;
        Ok(())
    }
}

impl MailConfig {
    /// Override mail settings from `MJML_*` environment variables
    ///
    /// The lookup is injected so tests do not touch the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("MJML_SMTP_HOST") {
            self.smtp.host = host;
        }
        if let Some(port) = lookup("MJML_SMTP_PORT") {
            self.smtp.port = port
                .parse()
                .map_err(|_| MjmlError::Config(format!("Invalid MJML_SMTP_PORT: {}", port)))?;
        }
        if let Some(username) = lookup("MJML_SMTP_USERNAME") {
            self.smtp.username = Some(username);
        }
        if let Some(password) = lookup("MJML_SMTP_PASSWORD") {
            self.smtp.password = Some(password);
        }
        if let Some(from) = lookup("MJML_MAIL_FROM") {
            self.from = from;
        }
        Ok(())
    }

    /// Validate sender and transport settings
    pub fn validate(&self) -> Result<()> {
        self.from.parse::<Mailbox>().map_err(|e| {
            MjmlError::Config(format!("Invalid sender address '{}': {}", self.from, e))
        })?;

        if self.transport == TransportKind::Smtp {
            if self.smtp.host.trim().is_empty() {
                return Err(MjmlError::Config("SMTP host is empty".to_string()));
            }
            if self.smtp.port == 0 {
                return Err(MjmlError::Config("SMTP port must be non-zero".to_string()));
            }
            if self.smtp.username.is_some() != self.smtp.password.is_some() {
                return Err(MjmlError::Config(
                    "SMTP username and password must be set together".to_string(),
                ));
            }
        }

        Ok(())
    }
}
