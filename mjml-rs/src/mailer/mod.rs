//! Email delivery for rendered templates

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::Message;

use crate::config::{MailConfig, TransportKind};
use crate::error::{MjmlError, Result};

pub mod file;
pub mod mock;
pub mod smtp;

pub use file::FileMailer;
pub use mock::MockMailer;
pub use smtp::SmtpMailer;

/// Plain-text part shown by clients that cannot display HTML
pub const TEXT_FALLBACK: &str =
    "This message contains HTML content. Please view it in an HTML-capable email client.";

/// A rendered email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl OutgoingEmail {
    /// Build a `multipart/alternative` message with a text fallback and the HTML body
    pub fn to_message(&self) -> Result<Message> {
        let from = parse_mailbox(&self.from)?;
        let to = parse_mailbox(&self.to)?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(self.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                TEXT_FALLBACK.to_string(),
                self.html.clone(),
            ))?;

        Ok(message)
    }
}

/// Parse an address such as `bob@example.com` or `Bob <bob@example.com>`
pub fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address
        .parse::<Mailbox>()
        .map_err(|e| MjmlError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}

/// Delivers outgoing email
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<()>;

    /// Transport name used in log output
    fn name(&self) -> &str;
}

/// Create the mailer selected by `mail.transport`
pub fn from_config(config: &MailConfig) -> Result<Box<dyn Mailer>> {
    match config.transport {
        TransportKind::Smtp => Ok(Box::new(SmtpMailer::new(&config.smtp)?)),
        TransportKind::File => Ok(Box::new(FileMailer::new(&config.file_dir)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "News <news@example.com>".to_string(),
            to: "reader@example.com".to_string(),
            subject: "Weekly digest".to_string(),
            html: "<p>Hello</p>".to_string(),
        }
    }

    #[test]
    fn test_to_message_is_multipart_alternative() {
        let message = email().to_message().unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Subject: Weekly digest"));
        assert!(raw.contains("To: reader@example.com"));
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("text/html"));
        assert!(raw.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_invalid_recipient() {
        let mut email = email();
        email.to = "not-an-address".to_string();

        let err = email.to_message().unwrap_err();
        match err {
            MjmlError::InvalidAddress { address, .. } => assert_eq!(address, "not-an-address"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_mailbox_with_display_name() {
        let mailbox = parse_mailbox("Bob <bob@example.com>").unwrap();
        assert_eq!(mailbox.name.as_deref(), Some("Bob"));
        assert_eq!(mailbox.email.to_string(), "bob@example.com");
    }

    #[test]
    fn test_from_config_selects_file_transport() {
        let dir = tempfile::tempdir().unwrap();
        let config = MailConfig {
            transport: TransportKind::File,
            file_dir: dir.path().to_path_buf(),
            ..MailConfig::default()
        };

        let mailer = from_config(&config).unwrap();
        assert_eq!(mailer.name(), "file");
    }
}
