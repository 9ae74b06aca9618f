//! Region extraction
//!
//! Pulls every region of one kind out of the working text, stores it, and
//! leaves a placeholder token where it stood.

use super::kind::RegionKind;
use super::placeholder::Placeholders;
use super::store::{Region, RegionStore};
use crate::error::{CompressError, CompressResult};

/// Extract all regions of `kind` from `text`, left to right.
///
/// Regions are appended to `kind`'s sequence in document order and each is
/// replaced by its indexed token. A match that swallowed tokens of an
/// earlier kind (e.g. a `<pre>` written inside a script string) has those
/// tokens expanded back to their original text first, so the stored region
/// is always the verbatim source span.
pub fn extract_regions(
    text: &str,
    kind: RegionKind,
    store: &mut RegionStore,
    placeholders: &Placeholders,
) -> CompressResult<String> {
    let mut output = String::with_capacity(text.len());
    let mut last_end = 0;

    for found in kind.block_pattern().find_iter(text) {
        output.push_str(&text[last_end..found.start()]);

        let verbatim = absorb_nested(found.as_str(), kind, store, placeholders)?;
        let index = store.push(Region::new(kind, verbatim));
        output.push_str(&placeholders.token(kind, index));

        last_end = found.end();
    }

    output.push_str(&text[last_end..]);

    log::trace!(
        "extracted {} {} region(s)",
        store.sequence(kind).len(),
        kind
    );
    Ok(output)
}

/// Expand tokens of kinds extracted before `kind` that ended up inside a
/// newly matched span. The absorbed regions are taken out of the store.
fn absorb_nested(
    matched: &str,
    kind: RegionKind,
    store: &mut RegionStore,
    placeholders: &Placeholders,
) -> CompressResult<String> {
    let mut current = matched.to_string();

    // Later predecessors may contain tokens of earlier ones, so unwind
    // outermost first.
    for &inner in kind.predecessors().iter().rev() {
        if !placeholders.pattern(inner).is_match(&current) {
            continue;
        }
        let available = store.sequence(inner).len();
        current = placeholders.replace_tokens(&current, inner, |index| {
            store
                .take(inner, index)
                .map(Region::into_text)
                .ok_or(CompressError::RegionMismatch {
                    kind: inner,
                    index,
                    available,
                })
        })?;
        tracing::debug!(outer = %kind, inner = %inner, "absorbed nested region into enclosing block");
    }

    Ok(current)
}
