//! Placeholder tokens standing in for extracted regions
//!
//! A token has the form `<prefix><LABEL>~<index><suffix>`, e.g.
//! `%%%COMPRESS~SCRIPT~2%%%`. The index is the region's position in its
//! kind's sequence, so reinsertion is a lookup rather than a queue pop.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::kind::RegionKind;
use crate::error::{CompressError, CompressResult};
use crate::utils::{DEFAULT_PLACEHOLDER_PREFIX, DEFAULT_PLACEHOLDER_SUFFIX};

static DEFAULT_PLACEHOLDERS: LazyLock<Placeholders> = LazyLock::new(|| {
    Placeholders::new(DEFAULT_PLACEHOLDER_PREFIX, DEFAULT_PLACEHOLDER_SUFFIX)
        .expect("default placeholder affixes are valid")
});

/// Check that a prefix/suffix pair yields tokens that survive normalization
/// and cannot be confused with markup or with the index digits.
///
/// Affixes may not contain any comment delimiter character (`<`, `!`, `-`,
/// `>`), so a comment can never begin or end inside a token.
pub fn validate_affixes(prefix: &str, suffix: &str) -> CompressResult<()> {
    if prefix.is_empty() {
        return Err(CompressError::InvalidConfig(
            "placeholder prefix must not be empty".to_string(),
        ));
    }
    if suffix.is_empty() {
        return Err(CompressError::InvalidConfig(
            "placeholder suffix must not be empty".to_string(),
        ));
    }
    for (name, affix) in [("prefix", prefix), ("suffix", suffix)] {
        if affix
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '!' | '-' | '>'))
        {
            return Err(CompressError::InvalidConfig(format!(
                "placeholder {name} '{affix}' must not contain whitespace or any of `<!->`"
            )));
        }
    }
    if suffix.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(CompressError::InvalidConfig(format!(
            "placeholder suffix '{suffix}' must not start with a digit"
        )));
    }
    Ok(())
}

/// Token generator and matcher for one prefix/suffix pair
#[derive(Debug, Clone)]
pub struct Placeholders {
    prefix: String,
    suffix: String,
    /// One pattern per kind, indexed by [`RegionKind::ordinal`]
    patterns: [Regex; 4],
}

impl Placeholders {
    /// Compile token patterns for the given affixes
    ///
    /// # Errors
    ///
    /// Returns `CompressError::InvalidConfig` if the affixes fail
    /// [`validate_affixes`].
    pub fn new(prefix: &str, suffix: &str) -> CompressResult<Self> {
        validate_affixes(prefix, suffix)?;

        let compile = |kind: RegionKind| {
            let pattern = format!(
                r"{}{}~(\d+){}",
                regex::escape(prefix),
                kind.label(),
                regex::escape(suffix)
            );
            Regex::new(&pattern).map_err(|e| {
                CompressError::InvalidConfig(format!("placeholder pattern for {kind}: {e}"))
            })
        };

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            patterns: [
                compile(RegionKind::Preformatted)?,
                compile(RegionKind::TextArea)?,
                compile(RegionKind::Script)?,
                compile(RegionKind::Style)?,
            ],
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Token for the region at `index` of `kind`
    #[must_use]
    pub fn token(&self, kind: RegionKind, index: usize) -> String {
        format!("{}{}~{}{}", self.prefix, kind.label(), index, self.suffix)
    }

    /// Pattern matching every token of `kind`; group 1 is the index
    #[must_use]
    pub fn pattern(&self, kind: RegionKind) -> &Regex {
        &self.patterns[kind.ordinal()]
    }

    /// True if `text` already contains the prefix, in which case tokens could
    /// not be told apart from content.
    #[must_use]
    pub fn collides_with(&self, text: &str) -> bool {
        text.contains(&self.prefix)
    }

    /// Replace every token of any kind with a single space.
    ///
    /// Tokens hold no comment delimiter characters, so comment removal
    /// finds the same comments in the masked text as in the original.
    #[must_use]
    pub fn mask_tokens(&self, text: &str) -> String {
        self.patterns
            .iter()
            .fold(text.to_string(), |masked, pattern| {
                pattern.replace_all(&masked, " ").into_owned()
            })
    }

    /// Replace every token of `kind` in `text` with the output of `resolve`.
    ///
    /// Replacement text is copied literally and never rescanned. The first
    /// error from `resolve` aborts the whole replacement.
    pub fn replace_tokens<F>(&self, text: &str, kind: RegionKind, mut resolve: F) -> CompressResult<String>
    where
        F: FnMut(usize) -> CompressResult<String>,
    {
        let pattern = self.pattern(kind);
        let mut output = String::with_capacity(text.len());
        let mut last_end = 0;

        for caps in pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            output.push_str(&text[last_end..whole.start()]);
            output.push_str(&resolve(token_index(&caps))?);
            last_end = whole.end();
        }

        output.push_str(&text[last_end..]);
        Ok(output)
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        DEFAULT_PLACEHOLDERS.clone()
    }
}

/// Index digits of a matched token. Out-of-range digit strings map to
/// `usize::MAX`, which no sequence can hold.
fn token_index(caps: &Captures<'_>) -> usize {
    caps[1].parse().unwrap_or(usize::MAX)
}
