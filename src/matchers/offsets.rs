//! Fixed-offset single-character extraction.
//!
//! Some templated strings encode a numeric selector as a single positional
//! digit character rather than a delimited token ("Garden Patch 2, Bed 5" and
//! its translations). The digit's position shifts per language because the
//! surrounding sentence structure differs, so the two offsets are a
//! per-language table entry chosen at bootstrap. In exchange for that
//! rigidity the extraction is O(1) over the character walk with no pattern
//! machinery at all.
//!
//! Offsets index *characters*, not bytes; byte offsets would split multi-byte
//! characters in the Japanese and Chinese templates.

use super::{FieldMapping, MatchInput};

/// Extracts one character each for the `patch` and `bed` fields.
#[derive(Debug, Clone, Copy)]
pub struct OffsetExtractor {
    patch: usize,
    bed: usize,
}

impl OffsetExtractor {
    /// Offsets are order-sensitive: output order is always `patch`, `bed`,
    /// regardless of which offset is larger.
    pub fn new(patch: usize, bed: usize) -> Self {
        OffsetExtractor { patch, bed }
    }

    pub fn try_match(&self, input: &MatchInput) -> Option<FieldMapping> {
        let text = input.flat_text();
        let limit = self.patch.max(self.bed);

        let mut patch_char = None;
        let mut bed_char = None;
        let mut count = 0usize;
        for (i, c) in text.chars().enumerate() {
            if i == self.patch {
                patch_char = Some(c);
            }
            if i == self.bed {
                bed_char = Some(c);
            }
            count = i + 1;
        }

        // Guard against truncated/placeholder strings: the input must extend
        // past the larger offset.
        if count <= limit {
            return None;
        }

        let mut mapping = FieldMapping::empty();
        mapping.push("patch", patch_char?.to_string());
        mapping.push("bed", bed_char?.to_string());
        Some(mapping)
    }
}
