//! Command-line interface definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mjml-rs", version)]
#[command(about = "Convert MJML templates to HTML, preview them, or send them by email", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./mjml.toml when present)
    #[arg(short, long, global = true, env = "MJML_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert MJML to HTML and send it
    Send {
        /// MJML template to render
        mjml_path: PathBuf,
        /// Recipient address
        recipient: String,
        /// JSON file with placeholder values
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Subject line (defaults to <mj-title>, then the configured default)
        #[arg(short, long)]
        subject: Option<String>,
    },
    /// Preview an MJML file in the browser
    Preview {
        /// MJML template to render
        mjml_path: PathBuf,
        /// JSON file with placeholder values
        json_path: Option<PathBuf>,
        /// Where to write the preview HTML (overrides preview.output_path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert an MJML file to an HTML file
    Convert {
        /// MJML template to render
        mjml_path: PathBuf,
        /// HTML file to write
        output_path: PathBuf,
        /// JSON file with placeholder values
        json_path: Option<PathBuf>,
    },
}
