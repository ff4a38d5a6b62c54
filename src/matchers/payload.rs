//! Rich-text payload strategies.
//!
//! Crop status notifications ("The Krakka Root is doing well.") embed item
//! links and icon markers whose rendered width is not fixed, and whose
//! *count* can differ between clients. Comparing rendered strings is
//! therefore fragile; comparing the stable literal wrapper segments is not.
//!
//! [`PayloadComparer`] is a pure classifier: it checks that the literal
//! segments at a handful of selected positions equal the reference template,
//! ignoring everything variable in between. Selectors may count from the end
//! of the sequence ([`SegmentIndex::FromEnd`]) so a shifted variable middle
//! cannot move the match off the trailing wrapper text.
//!
//! [`PayloadExtractor`] does the inverse job: it pulls the rendered name out
//! of the one variable segment sitting at a known (per-language) position.

use super::{FieldMapping, MatchInput};
use crate::rich_text::{RichText, SegmentIndex};

/// Classifies a rich text by comparing selected literal segments against a
/// reference template.
#[derive(Debug, Clone)]
pub struct PayloadComparer {
    reference: RichText,
    selectors: Vec<SegmentIndex>,
}

impl PayloadComparer {
    /// Up to four selectors in practice; duplicates are harmless.
    ///
    /// Each selector must point at a literal segment of `reference` for the
    /// comparer to ever succeed — a selector landing on a variable segment
    /// (or out of range) makes every candidate a no-match rather than
    /// faulting.
    pub fn new(reference: RichText, selectors: &[SegmentIndex]) -> Self {
        PayloadComparer { reference, selectors: selectors.to_vec() }
    }

    pub fn try_match(&self, input: &MatchInput) -> Option<FieldMapping> {
        let candidate = input.rich()?;

        for &selector in &self.selectors {
            // Resolved against each sequence's own length: FromEnd stays on
            // the trailing wrapper even when the candidate has more variable
            // segments than the reference.
            let expected = self.reference.get(selector)?.literal()?;
            let found = candidate.get(selector)?.literal()?;
            if expected != found {
                return None;
            }
        }
        Some(FieldMapping::empty())
    }
}

/// Extracts the rendered text of one variable segment at a fixed position.
#[derive(Debug, Clone, Copy)]
pub struct PayloadExtractor {
    index: usize,
    field: &'static str,
}

impl PayloadExtractor {
    pub fn new(index: usize, field: &'static str) -> Self {
        PayloadExtractor { index, field }
    }

    pub fn try_match(&self, input: &MatchInput) -> Option<FieldMapping> {
        let candidate = input.rich()?;
        let segment = candidate.segments().get(self.index)?;
        let value = segment.visible_text()?;

        // Selecting a literal wrapper segment means the template shape is
        // not the one this extractor was configured for.
        if segment.literal().is_some() {
            return None;
        }

        let mut mapping = FieldMapping::empty();
        mapping.push(self.field, value.to_string());
        Some(mapping)
    }
}
