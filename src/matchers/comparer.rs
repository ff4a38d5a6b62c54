//! Exact/prefix text comparison.
//!
//! The simplest strategy: most context-menu commands ("Harvest", "Tend",
//! "Fertilize", ...) are fixed template strings with no variable parts, so
//! recognizing them is a single comparison against the localized reference
//! text pulled from game data at bootstrap. Prefix mode exists for templates
//! whose tail embeds a variable token but whose leading literal is stable.

use super::{FieldMapping, MatchInput};

/// How a [`TextComparer`] compares input against its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Equal,
    StartsWith,
}

/// Compares input against one reference string.
#[derive(Debug, Clone)]
pub struct TextComparer {
    reference: String,
    mode: MatchMode,
}

impl TextComparer {
    pub fn new(reference: impl Into<String>, mode: MatchMode) -> Self {
        TextComparer { reference: reference.into(), mode }
    }

    /// The localized reference text this comparer was built from.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn try_match(&self, input: &MatchInput) -> Option<FieldMapping> {
        let text = input.flat_text();
        let hit = match self.mode {
            MatchMode::Equal => text == self.reference,
            MatchMode::StartsWith => text.starts_with(&self.reference),
        };
        hit.then(FieldMapping::empty)
    }
}
