//! Per-run storage for extracted regions

use super::kind::RegionKind;

/// Verbatim text of one extracted region, delimiters included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    kind: RegionKind,
    text: String,
}

impl Region {
    #[must_use]
    pub fn new(kind: RegionKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Regions of one kind in document order.
///
/// A slot is emptied when its region is taken back out, so every index is
/// resolved at most once.
#[derive(Debug, Default)]
pub struct RegionSequence {
    slots: Vec<Option<Region>>,
}

impl RegionSequence {
    fn push(&mut self, region: Region) -> usize {
        self.slots.push(Some(region));
        self.slots.len() - 1
    }

    fn take(&mut self, index: usize) -> Option<Region> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Number of regions ever extracted into this sequence
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of regions not yet taken
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

/// The four region sequences of a single compression run
#[derive(Debug, Default)]
pub struct RegionStore {
    sequences: [RegionSequence; 4],
}

impl RegionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region to its kind's sequence and return its index
    pub fn push(&mut self, region: Region) -> usize {
        self.sequences[region.kind().ordinal()].push(region)
    }

    /// Take the region at `index` out of `kind`'s sequence
    pub fn take(&mut self, kind: RegionKind, index: usize) -> Option<Region> {
        self.sequences[kind.ordinal()].take(index)
    }

    #[must_use]
    pub fn sequence(&self, kind: RegionKind) -> &RegionSequence {
        &self.sequences[kind.ordinal()]
    }
}
