//! Matching and extraction strategies.
//!
//! Every recognizable event is bound, per language, to exactly one strategy.
//! The strategies use fundamentally different techniques but share one
//! contract:
//!
//! ```text
//! try_match(&MatchInput) -> Option<FieldMapping>
//! ```
//!
//! `None` means "input does not conform", always — a strategy never panics or
//! errors on adversarial input, because recognition runs against a continuous
//! stream of incidental client text where failure is the common case. A pure
//! classifier that extracts nothing returns an empty mapping on success.
//!
//! ## Strategy kinds
//!
//! - `comparer.rs`: exact or prefix comparison against one reference string.
//! - `regex_extract.rs`: one compiled per-language pattern with named capture
//!   groups, exported in declaration order.
//! - `offsets.rs`: two language-specific character offsets, each yielding one
//!   single-character field.
//! - `payload.rs`: structured rich-text comparison via from-either-end
//!   segment selectors, plus single-payload field extraction.
//! - `letters.rs`: letter-subsequence equality for short UI command strings
//!   with no stable delimiter.
//!
//! The set is a closed enum rather than a trait object: each kind's
//! parameters stay strongly typed, dispatch is a plain `match`, and every
//! strategy is immutable after construction so `try_match` is a pure
//! function of its input (safe to share across threads once registered).

#[path = "matchers/comparer.rs"]
mod comparer;
#[path = "matchers/letters.rs"]
mod letters;
#[path = "matchers/offsets.rs"]
mod offsets;
#[path = "matchers/payload.rs"]
mod payload;
#[path = "matchers/regex_extract.rs"]
mod regex_extract;

pub use comparer::{MatchMode, TextComparer};
pub use letters::LetterMatcher;
pub use offsets::OffsetExtractor;
pub use payload::{PayloadComparer, PayloadExtractor};
pub use regex_extract::RegexExtractor;

use crate::rich_text::RichText;
use std::borrow::Cow;

/// Candidate input to a strategy: either a flat rendered string or a
/// structured rich text sequence.
///
/// Flat-text strategies fed a rich input operate on its flattened rendering;
/// payload strategies fed a flat string report no-match (they need segment
/// structure that a flat string no longer carries).
#[derive(Debug, Clone, Copy)]
pub enum MatchInput<'a> {
    Text(&'a str),
    Rich(&'a RichText),
}

impl<'a> From<&'a str> for MatchInput<'a> {
    fn from(text: &'a str) -> Self {
        MatchInput::Text(text)
    }
}

impl<'a> From<&'a RichText> for MatchInput<'a> {
    fn from(rich: &'a RichText) -> Self {
        MatchInput::Rich(rich)
    }
}

impl<'a> MatchInput<'a> {
    /// Flat rendered text of this input.
    pub(crate) fn flat_text(&self) -> Cow<'a, str> {
        match *self {
            MatchInput::Text(s) => Cow::Borrowed(s),
            MatchInput::Rich(r) => Cow::Owned(r.flatten()),
        }
    }

    /// The structured form, when present.
    pub(crate) fn rich(&self) -> Option<&'a RichText> {
        match *self {
            MatchInput::Text(_) => None,
            MatchInput::Rich(r) => Some(r),
        }
    }
}

/// Ordered name → extracted-substring result of a successful match.
///
/// Field order is the order the strategy declared its outputs at
/// construction; values are verbatim slices of the input (no trimming, no
/// case folding). Pure boolean matchers produce an empty mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    fields: Vec<(&'static str, String)>,
}

impl FieldMapping {
    pub fn empty() -> Self {
        FieldMapping::default()
    }

    pub(crate) fn push(&mut self, name: &'static str, value: String) {
        self.fields.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One matching/extraction strategy, bound to one `(EventId, Language)` pair
/// at registration time.
#[derive(Debug, Clone)]
pub enum Matcher {
    Comparer(TextComparer),
    Regex(RegexExtractor),
    Offsets(OffsetExtractor),
    Payload(PayloadComparer),
    PayloadField(PayloadExtractor),
    Letters(LetterMatcher),
}

impl Matcher {
    /// Run this strategy against `input`.
    pub fn try_match(&self, input: &MatchInput) -> Option<FieldMapping> {
        match self {
            Matcher::Comparer(m) => m.try_match(input),
            Matcher::Regex(m) => m.try_match(input),
            Matcher::Offsets(m) => m.try_match(input),
            Matcher::Payload(m) => m.try_match(input),
            Matcher::PayloadField(m) => m.try_match(input),
            Matcher::Letters(m) => m.try_match(input),
        }
    }

    /// Match/no-match without the field mapping.
    pub fn matches(&self, input: &MatchInput) -> bool {
        self.try_match(input).is_some()
    }
}

impl From<TextComparer> for Matcher {
    fn from(m: TextComparer) -> Self {
        Matcher::Comparer(m)
    }
}

impl From<RegexExtractor> for Matcher {
    fn from(m: RegexExtractor) -> Self {
        Matcher::Regex(m)
    }
}

impl From<OffsetExtractor> for Matcher {
    fn from(m: OffsetExtractor) -> Self {
        Matcher::Offsets(m)
    }
}

impl From<PayloadComparer> for Matcher {
    fn from(m: PayloadComparer) -> Self {
        Matcher::Payload(m)
    }
}

impl From<PayloadExtractor> for Matcher {
    fn from(m: PayloadExtractor) -> Self {
        Matcher::PayloadField(m)
    }
}

impl From<LetterMatcher> for Matcher {
    fn from(m: LetterMatcher) -> Self {
        Matcher::Letters(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich_text::Segment;

    #[test]
    fn field_mapping_preserves_declaration_order() {
        let mut mapping = FieldMapping::empty();
        mapping.push("seeds", "Krakka Root Seeds".to_string());
        mapping.push("soil", "Shroud Soil".to_string());

        let fields: Vec<_> = mapping.iter().collect();
        assert_eq!(
            fields,
            vec![("seeds", "Krakka Root Seeds"), ("soil", "Shroud Soil")]
        );
        assert_eq!(mapping.get("soil"), Some("Shroud Soil"));
        assert_eq!(mapping.get("missing"), None);
    }

    #[test]
    fn rich_input_flattens_for_text_strategies() {
        let rich = RichText::new(vec![
            Segment::text("Harvest "),
            Segment::item(7593, "Apricot"),
            Segment::text("?"),
        ]);
        let input = MatchInput::from(&rich);
        assert_eq!(input.flat_text(), "Harvest Apricot?");
    }
}
