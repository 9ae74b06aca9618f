//! Core configuration types for HTML compression
//!
//! This module contains the `CompressorConfig` struct that holds every
//! option of a compression run. A config is read-only while a run is in
//! progress and can be reused for any number of runs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::region::validate_affixes;
use crate::utils::{
    DEFAULT_LINE_WRAP_WIDTH, DEFAULT_PLACEHOLDER_PREFIX, DEFAULT_PLACEHOLDER_SUFFIX,
};

/// Main configuration struct for HTML compression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressorConfig {
    /// Minify `<script>` payloads with the configured script minifier
    pub(crate) compress_script: bool,

    /// Minify `<style>` payloads with the configured style minifier
    pub(crate) compress_style: bool,

    /// Script minifier: keep local symbol names
    pub(crate) js_no_rename_locals: bool,

    /// Script minifier: keep semicolons that are not strictly needed
    pub(crate) js_preserve_semicolons: bool,

    /// Script minifier: skip micro-optimizations
    pub(crate) js_disable_optimizations: bool,

    /// Script minifier: maximum output line length
    ///
    /// Any value `<= 0` disables wrapping.
    ///
    /// Default: -1
    pub(crate) js_line_wrap_width: i32,

    /// Style minifier: maximum output line length
    ///
    /// Any value `<= 0` disables wrapping.
    ///
    /// Default: -1
    pub(crate) css_line_wrap_width: i32,

    /// Text opening every placeholder token.
    ///
    /// **INVARIANT:** non-empty, no whitespace, none of `<!->` (checked in
    /// the builder and by `from_json`). Input that contains the prefix is
    /// rejected at run time.
    pub(crate) placeholder_prefix: String,

    /// Text closing every placeholder token. Must not start with a digit.
    pub(crate) placeholder_suffix: String,
}

impl Default for CompressorConfig {
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
    /// Load a configuration from JSON.
    ///
    /// Missing fields take their default values.
    ///
    /// # Example
    /// ```rust
    /// # use kodegen_tools_htmlcompressor::config::CompressorConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = CompressorConfig::from_json(r#"{ "compress_style": true }"#)?;
    /// assert!(config.compress_style());
    /// assert!(!config.compress_script());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the placeholder affixes
    /// are invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse compressor configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize compressor configuration")
    }

    /// Check the invariants the builder enforces.
    ///
    /// # Errors
    ///
    /// Returns an error if the placeholder affixes are invalid.
    pub fn validate(&self) -> Result<()> {
        validate_affixes(&self.placeholder_prefix, &self.placeholder_suffix)?;
        Ok(())
    }
}
