//! Letter-subsequence matching.
//!
//! Short imperative UI command strings ("Purchase a Mini Cactpot ticket." vs
//! "Purchase a Mini Cactpot ticket!") drift in punctuation, digits, and
//! spacing across minor client text revisions, and carry no stable delimiter
//! to parse by. Their letters, however, are stable: comparing only the
//! alphabetic characters (case-sensitive, in order) recognizes every variant
//! without enumerating them.

use super::{FieldMapping, MatchInput};

/// Matches input whose letter-only subsequence equals the reference's.
#[derive(Debug, Clone)]
pub struct LetterMatcher {
    // Stored pre-filtered; the reference never changes after construction.
    letters: String,
}

impl LetterMatcher {
    pub fn new(reference: &str) -> Self {
        LetterMatcher { letters: reference.chars().filter(|c| c.is_alphabetic()).collect() }
    }

    pub fn try_match(&self, input: &MatchInput) -> Option<FieldMapping> {
        let text = input.flat_text();
        let mut reference = self.letters.chars();

        for c in text.chars().filter(|c| c.is_alphabetic()) {
            if reference.next() != Some(c) {
                return None;
            }
        }
        reference.next().is_none().then(FieldMapping::empty)
    }
}
