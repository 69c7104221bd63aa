//! `convert`: render an MJML file to an HTML file

use std::path::Path;
use tracing::info;

use super::CommandContext;
use crate::error::Result;

pub fn run(
    ctx: &CommandContext<'_>,
    mjml_path: &Path,
    output_path: &Path,
    data_path: Option<&Path>,
) -> Result<()> {
    // Render the template
    let conversion = ctx.render(mjml_path, data_path)?;

    // Write the HTML file
    std::fs::write(output_path, &conversion.html)?;
    info!(
        input = %mjml_path.display(),
        output = %output_path.display(),
        bytes = conversion.html.len(),
        "Converted MJML file"
    );

    println!(
        "Successfully converted {} to {}",
        mjml_path.display(),
        output_path.display()
    );
    Ok(())
}
