//! Dry-run delivery into a directory of `.eml` files

use async_trait::async_trait;
use lettre::{AsyncFileTransport, AsyncTransport, Tokio1Executor};
use std::path::{Path, PathBuf};
use tracing::info;

use super::{Mailer, OutgoingEmail};
use crate::error::Result;

/// Writes each message to `<dir>/<id>.eml` instead of sending it
pub struct FileMailer {
    transport: AsyncFileTransport<Tokio1Executor>,
    dir: PathBuf,
}

impl FileMailer {
    /// Create the mailer, creating `dir` if needed
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            transport: AsyncFileTransport::<Tokio1Executor>::new(dir),
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl Mailer for FileMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        let message = email.to_message()?;
        let id = self.transport.send(message).await?;

        info!(
            to = %email.to,
            path = %self.dir.join(format!("{}.eml", id)).display(),
            "Email written to file"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
