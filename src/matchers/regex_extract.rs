//! Regular-expression field extraction.
//!
//! The five client languages order "what goes where" differently (subject /
//! object order, articles, particles), so every extraction event carries one
//! compiled pattern *per language* — but all five patterns declare identical
//! capture-group names, which keeps downstream consumers language-blind.
//! Pattern selection happens at bootstrap; one extractor instance holds
//! exactly the pattern for the active language.
//!
//! Matching runs the pattern once against the whole input. The patterns are
//! deliberately unanchored: several templates surface inside longer rendered
//! sentences (the Jumbo ticket number, for instance), and it is the literal
//! context inside the pattern that pins the match, not anchors.

use super::{FieldMapping, MatchInput};
use regex::Regex;

/// Extracts named capture groups with one per-language compiled pattern.
#[derive(Debug, Clone)]
pub struct RegexExtractor {
    pattern: &'static Regex,
    groups: &'static [&'static str],
}

impl RegexExtractor {
    /// `groups` declares which named captures to export and in which order.
    ///
    /// Every group name must exist in `pattern`; the bootstrap tables keep
    /// the five language patterns and the group list in one place so they
    /// cannot drift apart.
    pub fn new(pattern: &'static Regex, groups: &'static [&'static str]) -> Self {
        RegexExtractor { pattern, groups }
    }

    pub fn try_match(&self, input: &MatchInput) -> Option<FieldMapping> {
        let text = input.flat_text();
        let caps = self.pattern.captures(&text)?;

        let mut mapping = FieldMapping::empty();
        for &group in self.groups {
            // A declared group that did not participate is a no-match, not
            // a partial result.
            mapping.push(group, caps.name(group)?.as_str().to_string());
        }
        Some(mapping)
    }
}
