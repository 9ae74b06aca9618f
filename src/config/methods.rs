//! Builder setter methods
//!
//! Each option can be set independently; unset options keep their defaults.

use super::builder::CompressorConfigBuilder;

impl CompressorConfigBuilder {
    /// Minify `<script>` payloads.
    ///
    /// Minifying on every request is expensive; for pages compressed on the
    /// fly, prefer serving scripts as separate pre-minified files.
    ///
    /// Default: `false`
    #[must_use]
    pub fn compress_script(mut self, enabled: bool) -> Self {
        self.compress_script = enabled;
        self
    }

    /// Minify `<style>` payloads.
    ///
    /// Default: `false`
    #[must_use]
    pub fn compress_style(mut self, enabled: bool) -> Self {
        self.compress_style = enabled;
        self
    }

    /// Tell the script minifier not to rename local symbols.
    ///
    /// Only has an effect when script compression is enabled.
    #[must_use]
    pub fn js_no_rename_locals(mut self, enabled: bool) -> Self {
        self.js_no_rename_locals = enabled;
        self
    }

    /// Tell the script minifier to keep unnecessary semicolons.
    #[must_use]
    pub fn js_preserve_semicolons(mut self, enabled: bool) -> Self {
        self.js_preserve_semicolons = enabled;
        self
    }

    /// Tell the script minifier to skip its micro-optimizations.
    #[must_use]
    pub fn js_disable_optimizations(mut self, enabled: bool) -> Self {
        self.js_disable_optimizations = enabled;
        self
    }

    /// Maximum line length of minified script output; `<= 0` disables wrapping.
    #[must_use]
    pub fn js_line_wrap_width(mut self, width: i32) -> Self {
        self.js_line_wrap_width = width;
        self
    }

    /// Maximum line length of minified style output; `<= 0` disables wrapping.
    #[must_use]
    pub fn css_line_wrap_width(mut self, width: i32) -> Self {
        self.css_line_wrap_width = width;
        self
    }

    /// Override the placeholder prefix.
    ///
    /// Pick something that never occurs in the documents being compressed;
    /// a document containing it fails with `PlaceholderCollision`.
    #[must_use]
    pub fn placeholder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.placeholder_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn placeholder_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.placeholder_suffix = suffix.into();
        self
    }
}
