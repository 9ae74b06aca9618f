//! CSS minification via lightningcss

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

use super::{StyleMinifier, StyleMinifyOptions};
use crate::error::MinifyError;
use crate::utils::wrap_lines_after;

/// Style minifier backed by [`lightningcss`]
///
/// Parsing is strict: a stylesheet lightningcss cannot parse is an error,
/// not a pass-through.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightningStyleMinifier;

impl LightningStyleMinifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl StyleMinifier for LightningStyleMinifier {
    fn minify(&self, source: &str, options: &StyleMinifyOptions) -> Result<String, MinifyError> {
        let mut stylesheet = StyleSheet::parse(source, ParserOptions::default())
            .map_err(|e| MinifyError::Parse(e.to_string()))?;

        stylesheet
            .minify(MinifyOptions::default())
            .map_err(|e| MinifyError::Other(e.to_string()))?;

        let printed = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| MinifyError::Print(e.to_string()))?;

        log::debug!(
            "minified stylesheet from {} to {} bytes",
            source.len(),
            printed.code.len()
        );

        Ok(match options.line_wrap() {
            Some(width) => wrap_lines_after(&printed.code, width, &['}']),
            None => printed.code,
        })
    }
}
