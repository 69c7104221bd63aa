//! Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::{MjmlError, Result};

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(MjmlError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(logging: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        "mjml_rs=debug".to_string()
    } else {
        format!("mjml_rs={}", logging.level)
    }
}

/// Install the global subscriber, writing to stderr
pub fn init(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let format = LogFormat::parse(&logging.format)?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(logging, verbose).into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    Ok(())
}
