//! Shared configuration constants for the compressor
//!
//! Default values used by `CompressorConfig` and its builder.

/// Default placeholder prefix
///
/// Inputs that already contain this string are rejected, since their
/// content could not be told apart from generated tokens.
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "%%%COMPRESS~";

/// Default placeholder suffix
pub const DEFAULT_PLACEHOLDER_SUFFIX: &str = "%%%";

/// Default line wrap width for minified output: disabled
///
/// Any value `<= 0` keeps minified script or style output on one line.
pub const DEFAULT_LINE_WRAP_WIDTH: i32 = -1;
