//! Region reassembly
//!
//! Resolves every placeholder token of one kind back to its stored region,
//! optionally transforming the region on the way in.

use super::kind::RegionKind;
use super::placeholder::Placeholders;
use super::store::{Region, RegionStore};
use crate::error::{CompressError, CompressResult};

/// Replace every token of `kind` in `text` with `restore(region)`.
///
/// Each token must name a region that is still in the store. A token whose
/// index was never extracted, or was already resolved, fails the run with
/// `CompressError::RegionMismatch`.
///
/// Regions that stay in the store afterwards lost their token to comment
/// removal; they are reported and left for the caller to drop.
pub fn reassemble_regions<F>(
    text: &str,
    kind: RegionKind,
    store: &mut RegionStore,
    placeholders: &Placeholders,
    mut restore: F,
) -> CompressResult<String>
where
    F: FnMut(Region) -> CompressResult<String>,
{
    let available = store.sequence(kind).len();
    if available == 0 && !placeholders.pattern(kind).is_match(text) {
        return Ok(text.to_string());
    }

    let output = placeholders.replace_tokens(text, kind, |index| {
        let region = store
            .take(kind, index)
            .ok_or(CompressError::RegionMismatch {
                kind,
                index,
                available,
            })?;
        restore(region)
    })?;

    let dropped = store.sequence(kind).remaining();
    if dropped > 0 {
        tracing::debug!(kind = %kind, dropped, "regions removed together with enclosing comments");
    }

    Ok(output)
}
