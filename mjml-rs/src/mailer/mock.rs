//! Mock mailer for testing
//!
//! Records every email it is asked to send instead of delivering it.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{Mailer, OutgoingEmail};
use crate::error::{MjmlError, Result};

#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail_with: Option<String>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails with `reason`
    pub fn failing(reason: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }

    /// Emails sent so far
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        if let Some(reason) = &self.fail_with {
            return Err(MjmlError::Io(std::io::Error::other(reason.clone())));
        }

        // Build the message anyway so address errors surface like a real transport
        email.to_message()?;

        if let Ok(mut sent) = self.sent.lock() {
            sent.push(email.clone());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
