//! Compression settings
//!
//! [`CompressorConfig`] holds the per-kind minification switches, the
//! options forwarded to the minifiers and the placeholder affixes. Build one
//! with [`CompressorConfig::builder`] or load it from JSON; both paths check
//! the affixes before a compressor ever sees them.

pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

pub use builder::CompressorConfigBuilder;
pub use types::CompressorConfig;
