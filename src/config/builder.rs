//! Builder for `CompressorConfig`
//!
//! Every option has a default, so the builder has no required fields; it
//! exists to validate the placeholder affixes before a config is handed out.

use anyhow::Result;

use super::types::CompressorConfig;
use crate::region::validate_affixes;
use crate::utils::{
    DEFAULT_LINE_WRAP_WIDTH, DEFAULT_PLACEHOLDER_PREFIX, DEFAULT_PLACEHOLDER_SUFFIX,
};

#[derive(Debug, Clone)]
pub struct CompressorConfigBuilder {
    pub(crate) compress_script: bool,
    pub(crate) compress_style: bool,
    pub(crate) js_no_rename_locals: bool,
    pub(crate) js_preserve_semicolons: bool,
    pub(crate) js_disable_optimizations: bool,
    pub(crate) js_line_wrap_width: i32,
    pub(crate) css_line_wrap_width: i32,
    pub(crate) placeholder_prefix: String,
    pub(crate) placeholder_suffix: String,
}

impl Default for CompressorConfigBuilder {
    fn default() -> Self {
        Self {
            compress_script: false,
            compress_style: false,
            js_no_rename_locals: false,
            js_preserve_semicolons: false,
            js_disable_optimizations: false,
            js_line_wrap_width: DEFAULT_LINE_WRAP_WIDTH,
            css_line_wrap_width: DEFAULT_LINE_WRAP_WIDTH,
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
            placeholder_suffix: DEFAULT_PLACEHOLDER_SUFFIX.to_string(),
        }
    }
}

impl CompressorConfig {
    /// Create a builder for configuring a `CompressorConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> CompressorConfigBuilder {
        CompressorConfigBuilder::default()
    }

    /// Start a builder pre-filled with this configuration's values
    #[must_use]
    pub fn to_builder(&self) -> CompressorConfigBuilder {
        CompressorConfigBuilder {
            compress_script: self.compress_script,
            compress_style: self.compress_style,
            js_no_rename_locals: self.js_no_rename_locals,
            js_preserve_semicolons: self.js_preserve_semicolons,
            js_disable_optimizations: self.js_disable_optimizations,
            js_line_wrap_width: self.js_line_wrap_width,
            css_line_wrap_width: self.css_line_wrap_width,
            placeholder_prefix: self.placeholder_prefix.clone(),
            placeholder_suffix: self.placeholder_suffix.clone(),
        }
    }
}

impl CompressorConfigBuilder {
    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the placeholder prefix or suffix is empty or
    /// contains whitespace or any of `<!->`, or if the suffix starts with a
    /// digit.
    pub fn build(self) -> Result<CompressorConfig> {
        validate_affixes(&self.placeholder_prefix, &self.placeholder_suffix)?;

        Ok(CompressorConfig {
            compress_script: self.compress_script,
            compress_style: self.compress_style,
            js_no_rename_locals: self.js_no_rename_locals,
            js_preserve_semicolons: self.js_preserve_semicolons,
            js_disable_optimizations: self.js_disable_optimizations,
            js_line_wrap_width: self.js_line_wrap_width,
            css_line_wrap_width: self.css_line_wrap_width,
            placeholder_prefix: self.placeholder_prefix,
            placeholder_suffix: self.placeholder_suffix,
        })
    }
}
