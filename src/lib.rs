pub mod compressor;
pub mod config;
pub mod error;
pub mod minify;
pub mod normalize;
pub mod region;
pub mod utils;

pub use compressor::{Compressor, HtmlCompressor};
pub use config::{CompressorConfig, CompressorConfigBuilder};
pub use error::{CompressError, CompressResult, MinifyError};
pub use minify::{
    LightningStyleMinifier, ScriptMinifier, ScriptMinifyOptions, StyleMinifier,
    StyleMinifyOptions,
};
#[cfg(feature = "oxc")]
pub use minify::OxcScriptMinifier;
pub use normalize::normalize_safe_text;
pub use region::{Placeholders, Region, RegionKind};

/// Compress `html` with a one-off compressor built from `config`
///
/// # Errors
///
/// See [`HtmlCompressor::compress`].
pub fn compress_html(html: &str, config: &CompressorConfig) -> CompressResult<String> {
    HtmlCompressor::new(config.clone())?.compress(html)
}
