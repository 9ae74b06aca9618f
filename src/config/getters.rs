//! Getter methods for `CompressorConfig`
//!
//! This module provides the accessors for configuration values, plus the
//! option bundles handed to the minifiers.

use super::types::CompressorConfig;
use crate::minify::{ScriptMinifyOptions, StyleMinifyOptions};

impl CompressorConfig {
    #[must_use]
    pub fn compress_script(&self) -> bool {
        self.compress_script
    }

    #[must_use]
    pub fn compress_style(&self) -> bool {
        self.compress_style
    }

    #[must_use]
    pub fn js_no_rename_locals(&self) -> bool {
        self.js_no_rename_locals
    }

    #[must_use]
    pub fn js_preserve_semicolons(&self) -> bool {
        self.js_preserve_semicolons
    }

    #[must_use]
    pub fn js_disable_optimizations(&self) -> bool {
        self.js_disable_optimizations
    }

    #[must_use]
    pub fn js_line_wrap_width(&self) -> i32 {
        self.js_line_wrap_width
    }

    #[must_use]
    pub fn css_line_wrap_width(&self) -> i32 {
        self.css_line_wrap_width
    }

    #[must_use]
    pub fn placeholder_prefix(&self) -> &str {
        &self.placeholder_prefix
    }

    #[must_use]
    pub fn placeholder_suffix(&self) -> &str {
        &self.placeholder_suffix
    }

    /// Options passed through to the script minifier
    #[must_use]
    pub fn script_options(&self) -> ScriptMinifyOptions {
        ScriptMinifyOptions {
            no_rename_locals: self.js_no_rename_locals,
            preserve_semicolons: self.js_preserve_semicolons,
            disable_optimizations: self.js_disable_optimizations,
            line_wrap_width: self.js_line_wrap_width,
        }
    }

    /// Options passed through to the style minifier
    #[must_use]
    pub fn style_options(&self) -> StyleMinifyOptions {
        StyleMinifyOptions {
            line_wrap_width: self.css_line_wrap_width,
        }
    }
}
