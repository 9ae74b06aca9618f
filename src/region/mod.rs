//! Whitespace-sensitive regions: extraction, placeholders and reassembly
//!
//! `<pre>`, `<textarea>`, `<script>` and `<style>` blocks are lifted out of
//! the document before normalization and put back afterwards:
//! - [`extract_regions`] replaces each block with an indexed token
//! - [`Placeholders`] builds and matches those tokens
//! - [`reassemble_regions`] resolves tokens back to their blocks

pub mod extractor;
pub mod kind;
pub mod placeholder;
pub mod reassembler;
pub mod store;

pub use extractor::extract_regions;
pub use kind::RegionKind;
pub use placeholder::{Placeholders, validate_affixes};
pub use reassembler::reassemble_regions;
pub use store::{Region, RegionSequence, RegionStore};
