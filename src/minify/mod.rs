//! External minifiers for `<script>` and `<style>` payloads
//!
//! The pipeline only knows the [`ScriptMinifier`] and [`StyleMinifier`]
//! capabilities. Backends:
//! - [`LightningStyleMinifier`] (lightningcss), always available
//! - [`OxcScriptMinifier`] (oxc), behind the default `oxc` feature
//!
//! Any `Fn(&str, &Options) -> Result<String, MinifyError>` closure is a
//! minifier too, which is how tests and callers plug in their own.

pub mod adapter;
pub mod css;
#[cfg(feature = "oxc")]
pub mod js;

use serde::{Deserialize, Serialize};

use crate::error::MinifyError;

pub use adapter::minify_region;
pub use css::LightningStyleMinifier;
#[cfg(feature = "oxc")]
pub use js::OxcScriptMinifier;

/// Options handed to a script minifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptMinifyOptions {
    /// Do not rename local symbols
    pub no_rename_locals: bool,
    /// Keep semicolons that are not strictly needed
    pub preserve_semicolons: bool,
    /// Skip micro-optimizations
    pub disable_optimizations: bool,
    /// Maximum output line length; `<= 0` disables wrapping
    pub line_wrap_width: i32,
}

impl ScriptMinifyOptions {
    /// Line wrap width, if wrapping is enabled
    #[must_use]
    pub fn line_wrap(&self) -> Option<usize> {
        positive_width(self.line_wrap_width)
    }
}

/// Options handed to a style minifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleMinifyOptions {
    /// Maximum output line length; `<= 0` disables wrapping
    pub line_wrap_width: i32,
}

impl StyleMinifyOptions {
    /// Line wrap width, if wrapping is enabled
    #[must_use]
    pub fn line_wrap(&self) -> Option<usize> {
        positive_width(self.line_wrap_width)
    }
}

fn positive_width(width: i32) -> Option<usize> {
    usize::try_from(width).ok().filter(|&w| w > 0)
}

/// Minifies the payload of a `<script>` block
pub trait ScriptMinifier: Send + Sync {
    /// Return the minified form of `source`, or fail if it cannot be parsed.
    fn minify(&self, source: &str, options: &ScriptMinifyOptions) -> Result<String, MinifyError>;
}

/// Minifies the payload of a `<style>` block
pub trait StyleMinifier: Send + Sync {
    /// Return the minified form of `source`, or fail if it cannot be parsed.
    fn minify(&self, source: &str, options: &StyleMinifyOptions) -> Result<String, MinifyError>;
}

impl<F> ScriptMinifier for F
where
    F: Fn(&str, &ScriptMinifyOptions) -> Result<String, MinifyError> + Send + Sync,
{
    fn minify(&self, source: &str, options: &ScriptMinifyOptions) -> Result<String, MinifyError> {
        self(source, options)
    }
}

impl<F> StyleMinifier for F
where
    F: Fn(&str, &StyleMinifyOptions) -> Result<String, MinifyError> + Send + Sync,
{
    fn minify(&self, source: &str, options: &StyleMinifyOptions) -> Result<String, MinifyError> {
        self(source, options)
    }
}
