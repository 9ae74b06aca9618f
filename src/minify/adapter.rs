//! Splices minified payloads back into their tag wrapper

use crate::error::CompressResult;
use crate::region::Region;

/// Minify the payload of a `<script>` or `<style>` region.
///
/// The payload is the text between the opening and closing tag. Regions with
/// no payload (`<style></style>`), and kinds that have no payload pattern,
/// come back unchanged without `minify` ever being called. Otherwise the
/// result is `before + minify(payload) + after`; an error from `minify` is
/// returned as is.
pub fn minify_region<F>(region: Region, minify: F) -> CompressResult<String>
where
    F: FnOnce(&str) -> CompressResult<String>,
{
    let Some(pattern) = region.kind().payload_pattern() else {
        return Ok(region.into_text());
    };

    let payload = pattern
        .captures(region.as_str())
        .and_then(|caps| caps.get(1))
        .map(|found| found.range())
        .filter(|range| !range.is_empty());
    let Some(payload) = payload else {
        return Ok(region.into_text());
    };

    let source = region.as_str();
    let minified = minify(&source[payload.clone()])?;

    let mut output = String::with_capacity(source.len() - payload.len() + minified.len());
    output.push_str(&source[..payload.start]);
    output.push_str(&minified);
    output.push_str(&source[payload.end..]);
    Ok(output)
}
