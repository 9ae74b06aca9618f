//! Normalization of safe text
//!
//! Only ever applied to text with all preserved regions lifted out, so it
//! can remove comments and collapse whitespace without looking at context.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!--.*?-->").expect("COMMENT_RE: hardcoded regex is valid"));

// ASCII whitespace only; non-breaking and other Unicode spaces are content.
static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\n\x0B\x0C\r]{2,}").expect("WHITESPACE_RUN_RE: hardcoded regex is valid")
});

/// Remove HTML comments, then collapse whitespace runs to a single space.
///
/// Comment removal repeats until no comment is left, because deleting one
/// comment can splice its neighbours into a new one (`<!<!-- -->-- x -->`).
/// That makes the function idempotent.
#[must_use]
pub fn normalize_safe_text(text: &str) -> String {
    let without_comments = strip_comments(text);
    WHITESPACE_RUN_RE
        .replace_all(&without_comments, " ")
        .into_owned()
}

/// Remove every `<!-- ... -->` span, including any whitespace inside it
#[must_use]
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    let mut current = Cow::Borrowed(text);
    while COMMENT_RE.is_match(&current) {
        current = Cow::Owned(COMMENT_RE.replace_all(&current, "").into_owned());
    }
    current
}
