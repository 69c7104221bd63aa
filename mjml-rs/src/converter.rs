//! MJML to HTML conversion
//!
//! The conversion itself is delegated to `mrml`. Commands talk to it through
//! the [`Converter`] trait so the pipeline can run against a stub in tests.

use mrml::prelude::render::RenderOptions;
use std::borrow::Cow;
use tracing::debug;

use crate::config::RenderConfig;
use crate::error::{MjmlError, Result};

/// Output of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Rendered HTML document
    pub html: String,
    /// Non-fatal problems reported while reading the markup
    pub warnings: Vec<String>,
    /// Content of `<mj-title>`, if the document has one
    pub title: Option<String>,
}

/// Turns MJML markup into HTML
pub trait Converter: Send + Sync {
    fn convert(&self, markup: &str) -> Result<Conversion>;
}

/// Converter backed by the `mrml` crate
#[derive(Debug, Clone, Default)]
pub struct MrmlConverter {
    disable_comments: bool,
    social_icon_origin: Option<String>,
}

impl MrmlConverter {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            disable_comments: config.disable_comments,
            social_icon_origin: config.social_icon_origin.clone(),
        }
    }

    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::default();
        options.disable_comments = self.disable_comments;
        if let Some(origin) = &self.social_icon_origin {
            options.social_icon_origin = Some(Cow::Owned(origin.clone()));
        }
        options
    }
}

impl Converter for MrmlConverter {
    fn convert(&self, markup: &str) -> Result<Conversion> {
        let parsed = mrml::parse(markup).map_err(|e| MjmlError::Parse(e.to_string()))?;

        let warnings: Vec<String> = parsed
            .warnings
            .iter()
            .map(|warning| format!("{:?}", warning))
            .collect();

        let html = parsed
            .element
            .render(&self.render_options())
            .map_err(|e| MjmlError::Render(e.to_string()))?;

        debug!(
            bytes = html.len(),
            warnings = warnings.len(),
            "Rendered MJML to HTML"
        );

        Ok(Conversion {
            html,
            warnings,
            title: parsed.element.get_title(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = r#"<mjml>
  <mj-head>
    <mj-title>Weekly digest</mj-title>
  </mj-head>
  <mj-body>
    <mj-section>
      <mj-column>
        <mj-text>Hello from the digest</mj-text>
      </mj-column>
    </mj-section>
  </mj-body>
</mjml>"#;

    #[test]
    fn test_convert_simple_document() {
        let converter = MrmlConverter::default();
        let conversion = converter.convert(SIMPLE).unwrap();

        assert!(conversion.html.to_lowercase().contains("<!doctype html>"));
        assert!(conversion.html.contains("Hello from the digest"));
        assert_eq!(conversion.title.as_deref(), Some("Weekly digest"));
    }

    #[test]
    fn test_convert_without_title() {
        let converter = MrmlConverter::default();
        let conversion = converter
            .convert("<mjml><mj-body><mj-section><mj-column><mj-text>x</mj-text></mj-column></mj-section></mj-body></mjml>")
            .unwrap();
        assert!(conversion.title.is_none());
    }

    #[test]
    fn test_unknown_attribute_is_a_warning() {
        let converter = MrmlConverter::default();
        let conversion = converter
            .convert(r#"<mjml unknown-attribute="yes"><mj-body><mj-section><mj-column><mj-text>Still rendered</mj-text></mj-column></mj-section></mj-body></mjml>"#)
            .unwrap();

        assert!(!conversion.warnings.is_empty());
        assert!(conversion.html.contains("Still rendered"));
    }

    #[test]
    fn test_convert_rejects_non_mjml_root() {
        let converter = MrmlConverter::default();
        let err = converter.convert("<div>not mjml</div>").unwrap_err();
        assert!(matches!(err, MjmlError::Parse(_)));
    }

    #[test]
    fn test_render_options_follow_config() {
        let converter = MrmlConverter::new(&RenderConfig {
            disable_comments: true,
            social_icon_origin: Some("https://cdn.example.com/icons/".to_string()),
        });
        let options = converter.render_options();
        assert!(options.disable_comments);
        assert_eq!(
            options.social_icon_origin.as_deref(),
            Some("https://cdn.example.com/icons/")
        );
    }
}
