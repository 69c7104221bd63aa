//! `preview`: render an MJML file and open it in a browser

use std::path::{Path, PathBuf};

use super::CommandContext;
use crate::error::Result;
use crate::preview::{open_preview, BrowserOpener};

/// Returns the path of the preview file that was opened
pub fn run(
    ctx: &CommandContext<'_>,
    opener: &dyn BrowserOpener,
    mjml_path: &Path,
    data_path: Option<&Path>,
    output_override: Option<&Path>,
) -> Result<PathBuf> {
    // Render the template
    let conversion = ctx.render(mjml_path, data_path)?;

    // Write the preview file and hand it to the browser
    let path = preview_path(ctx, output_override)?;
    open_preview(opener, &path, &conversion.html)?;

    println!("Preview opened in browser.");
    Ok(path)
}

/// Absolute location of the preview file
///
/// `--output` takes precedence over `preview.output_path`. Relative paths
/// are resolved against the working directory.
pub fn preview_path(ctx: &CommandContext<'_>, output_override: Option<&Path>) -> Result<PathBuf> {
    let path = output_override.unwrap_or(ctx.config.preview.output_path.as_path());
    Ok(std::path::absolute(path)?)
}
