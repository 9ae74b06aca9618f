//! Region kinds and their delimiting patterns

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

// Whole-region patterns. Interior matching is lazy so each match stops at
// the nearest closing tag. Tag names fold ASCII case only (`ſ` is not `s`).

static PRE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?i-u:pre)[^>]*?>.*?</(?i-u:pre)>")
        .expect("PRE_BLOCK: hardcoded regex is valid")
});

static TEXTAREA_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?i-u:textarea)[^>]*?>.*?</(?i-u:textarea)>")
        .expect("TEXTAREA_BLOCK: hardcoded regex is valid")
});

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?i-u:script)[^>]*?>.*?</(?i-u:script)>")
        .expect("SCRIPT_BLOCK: hardcoded regex is valid")
});

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?i-u:style)[^>]*?>.*?</(?i-u:style)>")
        .expect("STYLE_BLOCK: hardcoded regex is valid")
});

// Payload patterns: capture group 1 is the non-empty interior between the
// opening and closing tag.

static SCRIPT_PAYLOAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?i-u:script)[^>]*?>(.+?)</(?i-u:script)>")
        .expect("SCRIPT_PAYLOAD: hardcoded regex is valid")
});

static STYLE_PAYLOAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?i-u:style)[^>]*?>(.+?)</(?i-u:style)>")
        .expect("STYLE_PAYLOAD: hardcoded regex is valid")
});

/// Whitespace-sensitive region of an HTML document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    /// `<pre>` blocks
    Preformatted,
    /// `<textarea>` blocks
    TextArea,
    /// `<script>` blocks
    Script,
    /// `<style>` blocks
    Style,
}

impl RegionKind {
    /// All kinds in extraction order.
    ///
    /// A region of an earlier kind hides everything inside it from the
    /// extractors of later kinds, so `<pre>` wins over a `<script>` it
    /// contains.
    pub const ALL: [RegionKind; 4] = [
        RegionKind::Preformatted,
        RegionKind::TextArea,
        RegionKind::Script,
        RegionKind::Style,
    ];

    /// Label embedded in placeholder tokens
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RegionKind::Preformatted => "PRE",
            RegionKind::TextArea => "TEXTAREA",
            RegionKind::Script => "SCRIPT",
            RegionKind::Style => "STYLE",
        }
    }

    /// Lowercase HTML tag name delimiting the region
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            RegionKind::Preformatted => "pre",
            RegionKind::TextArea => "textarea",
            RegionKind::Script => "script",
            RegionKind::Style => "style",
        }
    }

    /// Whether the payload of this kind can be routed through a minifier
    #[must_use]
    pub fn is_minifiable(self) -> bool {
        matches!(self, RegionKind::Script | RegionKind::Style)
    }

    /// Position of this kind in [`RegionKind::ALL`]
    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            RegionKind::Preformatted => 0,
            RegionKind::TextArea => 1,
            RegionKind::Script => 2,
            RegionKind::Style => 3,
        }
    }

    /// Kinds extracted before this one
    #[must_use]
    pub fn predecessors(self) -> &'static [RegionKind] {
        const IN_ORDER: &[RegionKind] = &RegionKind::ALL;
        &IN_ORDER[..self.ordinal()]
    }

    pub(crate) fn block_pattern(self) -> &'static Regex {
        match self {
            RegionKind::Preformatted => &PRE_BLOCK,
            RegionKind::TextArea => &TEXTAREA_BLOCK,
            RegionKind::Script => &SCRIPT_BLOCK,
            RegionKind::Style => &STYLE_BLOCK,
        }
    }

    pub(crate) fn payload_pattern(self) -> Option<&'static Regex> {
        match self {
            RegionKind::Script => Some(&SCRIPT_PAYLOAD),
            RegionKind::Style => Some(&STYLE_PAYLOAD),
            RegionKind::Preformatted | RegionKind::TextArea => None,
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
