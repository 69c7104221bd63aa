//! `send`: render an MJML file and email it

use std::path::Path;
use tracing::info;

use super::CommandContext;
use crate::error::Result;
use crate::mailer::{parse_mailbox, Mailer, OutgoingEmail};

pub async fn run(
    ctx: &CommandContext<'_>,
    mailer: &dyn Mailer,
    mjml_path: &Path,
    recipient: &str,
    data_path: Option<&Path>,
    subject: Option<&str>,
) -> Result<()> {
    // Reject a bad recipient before doing any rendering work
    parse_mailbox(recipient)?;

    // Render the template
    let conversion = ctx.render(mjml_path, data_path)?;

    // --subject wins over <mj-title>, which wins over the configured default
    let subject = subject
        .map(str::to_string)
        .filter(|s| !s.trim().is_empty())
        .or_else(|| conversion.title.filter(|t| !t.trim().is_empty()))
        .unwrap_or_else(|| ctx.config.mail.default_subject.clone());

    // Build and deliver the message
    let email = OutgoingEmail {
        from: ctx.config.mail.from.clone(),
        to: recipient.to_string(),
        subject,
        html: conversion.html,
    };

    mailer.send(&email).await?;
    info!(to = %recipient, subject = %email.subject, transport = mailer.name(), "Email sent");

    println!("Email sent to {}", recipient);
    Ok(())
}
