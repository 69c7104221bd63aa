//! mjml-rs: convert, preview or send MJML templates

use anyhow::Context;
use clap::Parser;
use mjml_rs::cli::{Cli, Commands};
use mjml_rs::commands::{self, CommandContext};
use mjml_rs::preview::SystemBrowser;
use mjml_rs::{logging, mailer, MjmlConfig, MrmlConverter};
use tracing::debug;

async fn run(cli: Cli, mut config: MjmlConfig) -> mjml_rs::Result<()> {
    // Mail settings only matter when something is sent
    if matches!(cli.command, Commands::Send { .. }) {
        config
            .mail
            .apply_env_overrides(|key| std::env::var(key).ok())?;
        config.mail.validate()?;
    }

    let converter = MrmlConverter::new(&config.render);
    let ctx = CommandContext::new(&config, &converter);

    match cli.command {
        Commands::Send {
            mjml_path,
            recipient,
            data,
            subject,
        } => {
            let mailer = mailer::from_config(&config.mail)?;
            commands::send::run(
                &ctx,
                mailer.as_ref(),
                &mjml_path,
                &recipient,
                data.as_deref(),
                subject.as_deref(),
            )
            .await
        }
        Commands::Preview {
            mjml_path,
            json_path,
            output,
        } => commands::preview::run(
            &ctx,
            &SystemBrowser,
            &mjml_path,
            json_path.as_deref(),
            output.as_deref(),
        )
        .map(|_| ()),
        Commands::Convert {
            mjml_path,
            output_path,
            json_path,
        } => commands::convert::run(&ctx, &mjml_path, &output_path, json_path.as_deref()),
    }
}

async fn try_main(cli: Cli) -> anyhow::Result<()> {
    // Load configuration
    let config =
        MjmlConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.validate()?;

    // Initialize logging
    logging::init(&config.logging, cli.verbose)?;
    debug!("Starting mjml-rs v{}", env!("CARGO_PKG_VERSION"));

    // Run the selected command
    run(cli, config).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = try_main(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
