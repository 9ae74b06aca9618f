//! Error types for HTML compression
//!
//! `CompressError` covers everything a compression run can fail with.
//! Minifier backends report `MinifyError`, which the pipeline wraps together
//! with the region kind that was being minified.

use thiserror::Error;

use crate::region::RegionKind;

/// Result type alias for compression operations
pub type CompressResult<T> = Result<T, CompressError>;

/// Error types for a compression run
#[derive(Debug, Error)]
pub enum CompressError {
    /// The external minifier rejected a script or style payload
    #[error("Failed to minify {kind} block: {source}")]
    Minify {
        kind: RegionKind,
        #[source]
        source: MinifyError,
    },

    /// Minification was requested for a kind with no minifier installed
    #[error("Compression of {0} blocks is enabled but no minifier is configured")]
    MinifierUnavailable(RegionKind),

    /// The input already contains the placeholder prefix
    #[error("Input contains the reserved placeholder prefix '{prefix}'")]
    PlaceholderCollision { prefix: String },

    /// A placeholder does not resolve to exactly one extracted region.
    ///
    /// This is never caused by caller input; it means extraction and
    /// reassembly disagree.
    #[error("Placeholder {kind}~{index} has no matching region ({available} extracted)")]
    RegionMismatch {
        kind: RegionKind,
        index: usize,
        available: usize,
    },

    /// Configuration rejected at build time
    #[error("Invalid compressor configuration: {0}")]
    InvalidConfig(String),
}

impl CompressError {
    /// Check if the error points at a defect in the pipeline itself
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, CompressError::RegionMismatch { .. })
    }
}

/// Error reported by a script or style minifier backend
#[derive(Debug, Error)]
pub enum MinifyError {
    /// The payload could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// The payload parsed but could not be printed back
    #[error("print error: {0}")]
    Print(String),

    /// Other backend failures
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for MinifyError {
    fn from(error: anyhow::Error) -> Self {
        MinifyError::Other(error.to_string())
    }
}
