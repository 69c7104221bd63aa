//! Error types for mjml-rs

use thiserror::Error;

/// Result type alias for mjml-rs operations
pub type Result<T> = std::result::Result<T, MjmlError>;

/// Errors raised while converting, previewing or sending a template
#[derive(Error, Debug)]
pub enum MjmlError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Placeholder data file is not usable
    #[error("Invalid template data: {0}")]
    Data(String),

    /// MJML markup could not be parsed
    #[error("MJML parse error: {0}")]
    Parse(String),

    /// Parsed MJML could not be rendered to HTML
    #[error("MJML render error: {0}")]
    Render(String),

    #[error("Invalid email address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Message could not be assembled
    #[error("Email build error: {0}")]
    Email(#[from] lettre::error::Error),

    /// SMTP delivery failed
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// File transport could not write the message
    #[error("File transport error: {0}")]
    FileTransport(#[from] lettre::transport::file::Error),

    /// Browser could not be launched
    #[error("Failed to open browser: {0}")]
    Browser(String),
}
