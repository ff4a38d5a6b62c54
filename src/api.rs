//! Convenience recognition entry points.
//!
//! Consumers that hold a sealed [`Registry`] usually want "does this string
//! mean event X in the current language, and what did it carry" as one call.
//! These helpers fold the lookup and the match together; a lookup miss and a
//! match failure are the same answer (`None`/`false`), because both mean
//! "this input cannot be recognized as that event here".
//!
//! Callers must pass the same [`Language`] the registry was bootstrapped
//! with; the registry cannot detect a mismatch (it simply finds nothing
//! registered under the other language).

use crate::matchers::{FieldMapping, MatchInput};
use crate::registry::Registry;
use crate::{EventId, Language};

/// Look up the strategy for `(id, language)` and run it against `input`.
///
/// # Example
/// ```
/// use hearsay::{EventId, Language, MatchMode, Registry, recognize};
///
/// let mut registry = Registry::new();
/// registry
///     .register_comparer(EventId::HarvestCrop, Language::English, "Harvest", MatchMode::Equal)
///     .unwrap();
/// registry.seal();
///
/// assert!(recognize(&registry, EventId::HarvestCrop, Language::English, "Harvest").is_some());
/// assert!(recognize(&registry, EventId::HarvestCrop, Language::German, "Harvest").is_none());
/// ```
pub fn recognize<'a>(
    registry: &Registry,
    id: EventId,
    language: Language,
    input: impl Into<MatchInput<'a>>,
) -> Option<FieldMapping> {
    registry.lookup_matcher(id, language)?.try_match(&input.into())
}

/// Like [`recognize`], for callers that only need the classification.
pub fn matches<'a>(
    registry: &Registry,
    id: EventId,
    language: Language,
    input: impl Into<MatchInput<'a>>,
) -> bool {
    recognize(registry, id, language, input).is_some()
}
