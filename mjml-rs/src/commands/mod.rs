//! Command handlers
//!
//! Each command runs the same pipeline: read the markup, fill placeholders
//! from an optional data file, convert to HTML, then hand the HTML to its
//! destination.

use std::path::Path;
use tracing::{debug, warn};

use crate::config::MjmlConfig;
use crate::converter::{Conversion, Converter};
use crate::error::Result;
use crate::template::{extract_placeholders, TemplateData};

pub mod convert;
pub mod preview;
pub mod send;

/// Collaborators shared by every command
pub struct CommandContext<'a> {
    pub config: &'a MjmlConfig,
    pub converter: &'a dyn Converter,
}

impl<'a> CommandContext<'a> {
    pub fn new(config: &'a MjmlConfig, converter: &'a dyn Converter) -> Self {
        Self { config, converter }
    }

    /// Read, fill in and convert an MJML file
    pub fn render(&self, mjml_path: &Path, data_path: Option<&Path>) -> Result<Conversion> {
        let markup = load_markup(mjml_path, data_path)?;
        let conversion = self.converter.convert(&markup)?;

        // Warnings are reported but never stop the conversion
        if !conversion.warnings.is_empty() {
            warn!(
                count = conversion.warnings.len(),
                warnings = ?conversion.warnings,
                "MJML conversion warnings"
            );
        }

        Ok(conversion)
    }
}

/// Read an MJML file and substitute placeholders when a data file is given
pub fn load_markup(mjml_path: &Path, data_path: Option<&Path>) -> Result<String> {
    let markup = std::fs::read_to_string(mjml_path)?;
    debug!(path = %mjml_path.display(), bytes = markup.len(), "Read MJML file");

    let Some(data_path) = data_path else {
        return Ok(markup);
    };

    // Fill placeholders from the data file
    let data = TemplateData::from_file(data_path)?;
    let markup = data.apply(&markup);

    // Anything still in braces had no value in the data file
    let unresolved = extract_placeholders(&markup);
    if !unresolved.is_empty() {
        warn!(placeholders = ?unresolved, "Placeholders left without a value");
    }

    Ok(markup)
}
