//! The compression pipeline
//!
//! 1. Extract `<pre>`, `<textarea>`, `<script>`, `<style>` regions, in that
//!    order, leaving indexed placeholder tokens behind
//! 2. Strip comments and collapse whitespace in what is left
//! 3. Put the regions back in the same kind order, minifying script and
//!    style payloads when enabled
//! 4. Trim the result
//!
//! # Usage
//! ```rust
//! # use kodegen_tools_htmlcompressor::{CompressorConfig, HtmlCompressor};
//! # fn main() -> anyhow::Result<()> {
//! let compressor = HtmlCompressor::new(CompressorConfig::default())?;
//! let html = "<div>\n  <p>a   b</p>  <!-- note -->\n  <pre>  keep\n  me</pre>\n</div>";
//! assert_eq!(
//!     compressor.compress(html)?,
//!     "<div> <p>a b</p> <pre>  keep\n  me</pre>\n</div>"
//! );
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::Arc;

use crate::config::CompressorConfig;
use crate::error::{CompressError, CompressResult};
use crate::minify::{LightningStyleMinifier, ScriptMinifier, StyleMinifier, minify_region};
use crate::normalize::{normalize_safe_text, strip_comments};
use crate::region::{
    Placeholders, Region, RegionKind, RegionStore, extract_regions, reassemble_regions,
};
use crate::utils::trim_control;

/// Anything that turns a document into a smaller equivalent one
pub trait Compressor {
    /// Compress `source`.
    ///
    /// # Errors
    ///
    /// Implementation specific; see [`CompressError`].
    fn compress(&self, source: &str) -> CompressResult<String>;
}

/// HTML compressor preserving `<pre>`, `<textarea>`, `<script>` and
/// `<style>` content.
///
/// Holds no per-run state, so one instance can serve concurrent runs from
/// several threads.
#[derive(Clone)]
pub struct HtmlCompressor {
    config: CompressorConfig,
    placeholders: Placeholders,
    script_minifier: Option<Arc<dyn ScriptMinifier>>,
    style_minifier: Option<Arc<dyn StyleMinifier>>,
}

impl HtmlCompressor {
    /// Create a compressor with the built-in minifiers installed.
    ///
    /// The style minifier is lightningcss; the script minifier is oxc when
    /// the `oxc` feature is enabled (the default) and absent otherwise.
    ///
    /// # Errors
    ///
    /// Returns `CompressError::InvalidConfig` if the placeholder affixes are
    /// invalid (possible for configs deserialized without validation).
    pub fn new(config: CompressorConfig) -> CompressResult<Self> {
        let placeholders =
            Placeholders::new(config.placeholder_prefix(), config.placeholder_suffix())?;

        Ok(Self {
            config,
            placeholders,
            script_minifier: default_script_minifier(),
            style_minifier: Some(Arc::new(LightningStyleMinifier::new())),
        })
    }

    /// Replace the script minifier
    #[must_use]
    pub fn with_script_minifier(mut self, minifier: impl ScriptMinifier + 'static) -> Self {
        self.script_minifier = Some(Arc::new(minifier));
        self
    }

    /// Replace the style minifier
    #[must_use]
    pub fn with_style_minifier(mut self, minifier: impl StyleMinifier + 'static) -> Self {
        self.style_minifier = Some(Arc::new(minifier));
        self
    }

    #[must_use]
    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Compress an HTML document.
    ///
    /// Empty input is returned unchanged.
    ///
    /// # Errors
    ///
    /// - `PlaceholderCollision` if `html` contains the placeholder prefix, or
    ///   would once its comments are removed
    /// - `Minify` if a minifier rejects a script or style payload
    /// - `MinifierUnavailable` if minification is enabled for a kind with no
    ///   minifier installed and a non-empty payload of that kind exists
    /// - `RegionMismatch` on an internal extraction/reassembly defect
    #[tracing::instrument(level = "debug", skip_all, fields(input_len = html.len()))]
    pub fn compress(&self, html: &str) -> CompressResult<String> {
        if html.is_empty() {
            return Ok(String::new());
        }

        if self.placeholders.collides_with(html) {
            tracing::warn!(
                prefix = self.placeholders.prefix(),
                "input contains the placeholder prefix, refusing to compress"
            );
            return Err(self.collision());
        }

        let mut store = RegionStore::new();
        let mut text = html.to_string();

        for kind in RegionKind::ALL {
            text = extract_regions(&text, kind, &mut store, &self.placeholders)?;
        }
        tracing::debug!(
            pre = store.sequence(RegionKind::Preformatted).len(),
            textarea = store.sequence(RegionKind::TextArea).len(),
            script = store.sequence(RegionKind::Script).len(),
            style = store.sequence(RegionKind::Style).len(),
            "regions extracted"
        );

        self.reject_spliced_tokens(&text)?;
        text = normalize_safe_text(&text);

        for kind in RegionKind::ALL {
            text = reassemble_regions(&text, kind, &mut store, &self.placeholders, |region| {
                self.restore(region)
            })?;
        }

        let output = trim_control(&text).to_string();
        tracing::debug!(output_len = output.len(), "compression finished");
        Ok(output)
    }

    /// Fail if removing comments would join caller text into something that
    /// looks like a placeholder, e.g. `%%%COMPRESS<!---->~SCRIPT~0%%%`.
    ///
    /// Real tokens are masked first, so any prefix left after stripping
    /// comments was assembled from input text.
    fn reject_spliced_tokens(&self, text: &str) -> CompressResult<()> {
        if !text.contains("<!--") {
            return Ok(());
        }

        let masked = self.placeholders.mask_tokens(text);
        if self.placeholders.collides_with(&strip_comments(&masked)) {
            tracing::warn!(
                prefix = self.placeholders.prefix(),
                "comment removal would splice the placeholder prefix, refusing to compress"
            );
            return Err(self.collision());
        }
        Ok(())
    }

    fn collision(&self) -> CompressError {
        CompressError::PlaceholderCollision {
            prefix: self.placeholders.prefix().to_string(),
        }
    }

    /// Text to put back for one region: verbatim, or with its payload
    /// minified when that kind's compression is enabled.
    fn restore(&self, region: Region) -> CompressResult<String> {
        match region.kind() {
            RegionKind::Script if self.config.compress_script() => {
                let options = self.config.script_options();
                minify_region(region, |payload| {
                    let minifier = self
                        .script_minifier
                        .as_deref()
                        .ok_or(CompressError::MinifierUnavailable(RegionKind::Script))?;
                    minifier
                        .minify(payload, &options)
                        .map_err(|source| CompressError::Minify {
                            kind: RegionKind::Script,
                            source,
                        })
                })
            }
            RegionKind::Style if self.config.compress_style() => {
                let options = self.config.style_options();
                minify_region(region, |payload| {
                    let minifier = self
                        .style_minifier
                        .as_deref()
                        .ok_or(CompressError::MinifierUnavailable(RegionKind::Style))?;
                    minifier
                        .minify(payload, &options)
                        .map_err(|source| CompressError::Minify {
                            kind: RegionKind::Style,
                            source,
                        })
                })
            }
            _ => Ok(region.into_text()),
        }
    }
}

impl Default for HtmlCompressor {
    fn default() -> Self {
        Self {
            config: CompressorConfig::default(),
            placeholders: Placeholders::default(),
            script_minifier: default_script_minifier(),
            style_minifier: Some(Arc::new(LightningStyleMinifier::new())),
        }
    }
}

impl Compressor for HtmlCompressor {
    fn compress(&self, source: &str) -> CompressResult<String> {
        HtmlCompressor::compress(self, source)
    }
}

impl fmt::Debug for HtmlCompressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlCompressor")
            .field("config", &self.config)
            .field("script_minifier", &self.script_minifier.is_some())
            .field("style_minifier", &self.style_minifier.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "oxc")]
fn default_script_minifier() -> Option<Arc<dyn ScriptMinifier>> {
    Some(Arc::new(crate::minify::OxcScriptMinifier::new()))
}

#[cfg(not(feature = "oxc"))]
fn default_script_minifier() -> Option<Arc<dyn ScriptMinifier>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MinifyError;
    use crate::minify::ScriptMinifyOptions;

    fn script_config() -> CompressorConfig {
        CompressorConfig::builder()
            .compress_script(true)
            .build()
            .expect("valid config")
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let compressor = HtmlCompressor::default();
        assert_eq!(compressor.compress("").expect("empty is valid"), "");
    }

    #[test]
    fn test_whitespace_only_input_trims_to_empty() {
        let compressor = HtmlCompressor::default();
        assert_eq!(compressor.compress(" \n\t ").expect("valid input"), "");
    }

    #[test]
    fn test_script_options_reach_minifier() {
        let config = script_config()
            .to_builder()
            .js_no_rename_locals(true)
            .js_line_wrap_width(120)
            .build()
            .expect("valid config");
        let compressor = HtmlCompressor::new(config)
            .expect("valid config")
            .with_script_minifier(
                |source: &str, options: &ScriptMinifyOptions| -> Result<String, MinifyError> {
                    assert!(options.no_rename_locals);
                    assert_eq!(options.line_wrap(), Some(120));
                    Ok(source.trim().to_string())
                },
            );

        let output = compressor
            .compress("<script>\n  go();\n</script>")
            .expect("minifier accepts payload");
        assert_eq!(output, "<script>go();</script>");
    }

    #[test]
    fn test_missing_minifier_only_matters_for_payloads() {
        let mut compressor = HtmlCompressor::new(script_config()).expect("valid config");
        compressor.script_minifier = None;

        assert_eq!(
            compressor
                .compress("<script src=\"a.js\"></script>")
                .expect("empty script needs no minifier"),
            "<script src=\"a.js\"></script>"
        );
        assert!(matches!(
            compressor.compress("<script>x()</script>"),
            Err(CompressError::MinifierUnavailable(RegionKind::Script))
        ));
    }

    #[test]
    fn test_spliced_prefix_is_a_collision() {
        let compressor = HtmlCompressor::default();
        for html in [
            "<!-- <script>evil()</script> -->%%%COMPRESS<!---->~SCRIPT~0%%%",
            "%%%COMPRESS<!---->~SCRIPT~0%%%<script>a</script>",
            "%%%COMP<!-- x --><!-- y -->RESS~PRE~0%%%",
        ] {
            assert!(
                matches!(
                    compressor.compress(html),
                    Err(CompressError::PlaceholderCollision { .. })
                ),
                "accepted {html:?}"
            );
        }
    }

    #[test]
    fn test_comments_next_to_regions_are_not_collisions() {
        let compressor = HtmlCompressor::default();
        let html = "<!-- a --><script>x()</script><!-- b --><pre> p </pre>";
        assert_eq!(
            compressor.compress(html).expect("no spliced prefix"),
            "<script>x()</script><pre> p </pre>"
        );
    }

    #[cfg(feature = "oxc")]
    #[test]
    fn test_default_build_can_minify_scripts() {
        let compressor = HtmlCompressor::new(script_config()).expect("valid config");
        assert!(compressor.script_minifier.is_some());

        let output = compressor
            .compress("<script>\n  var total = 1 + 2;\n  console.log(total);\n</script>")
            .expect("oxc accepts the script");
        assert!(output.starts_with("<script>"));
        assert!(output.contains("console.log"));
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_compressor_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HtmlCompressor>();
    }
}
