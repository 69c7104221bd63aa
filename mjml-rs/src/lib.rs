//! mjml-rs: MJML templates to HTML, in the browser, or in an inbox
//!
//! Reads an MJML file, fills `{{key}}` placeholders from an optional flat
//! JSON data file, renders the markup to HTML and then writes it to disk,
//! opens it in a browser, or emails it.
//!
//! # Commands
//!
//! ```bash
//! mjml-rs convert newsletter.mjml newsletter.html data.json
//! mjml-rs preview newsletter.mjml data.json
//! mjml-rs send newsletter.mjml reader@example.com --data data.json
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [mail]
//! transport = "smtp"
//! from = "Newsletter <news@example.com>"
//! default_subject = "Your MJML Email"
//!
//! [mail.smtp]
//! host = "smtp.example.com"
//! port = 587
//! security = "starttls"
//! username = "news@example.com"
//!
//! [render]
//! disable_comments = true
//!
//! [preview]
//! output_path = "src/output.html"
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod converter;
pub mod error;
pub mod logging;
pub mod mailer;
pub mod preview;
pub mod template;

pub use config::MjmlConfig;
pub use converter::{Conversion, Converter, MrmlConverter};
pub use error::{MjmlError, Result};
pub use template::TemplateData;
