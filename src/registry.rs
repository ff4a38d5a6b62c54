//! Event registry.
//!
//! A two-level lookup keyed by `(EventId, Language)`. The registry has
//! exactly two states:
//!
//! ```text
//! Unsealed ──(register* any number of times)──▶ Unsealed
//! Unsealed ──(seal)──▶ Sealed ──(lookup* only, forever)
//! ```
//!
//! Bootstrap is the only writer; after [`Registry::seal`] every `register*`
//! call is rejected and the registry (and every strategy in it) is logically
//! immutable, so shared references can be read from any thread without
//! synchronization.
//!
//! A lookup miss is a legitimate steady state — the event may be unsupported
//! in the active language, or its localization not yet built — so `lookup`
//! returns `None` and emits a `debug!` diagnostic instead of erroring.

use crate::matchers::{MatchMode, Matcher, TextComparer};
use crate::{EventId, Language};
use std::collections::HashMap;

/// A registered value: either a matching strategy or a literal localized
/// name (name-table rows need no strategy object, just the string for the
/// active language).
#[derive(Debug, Clone)]
pub enum Binding {
    Matcher(Matcher),
    Name(String),
}

impl Binding {
    pub fn matcher(&self) -> Option<&Matcher> {
        match self {
            Binding::Matcher(m) => Some(m),
            Binding::Name(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Binding::Matcher(_) => None,
            Binding::Name(n) => Some(n),
        }
    }
}

impl From<Matcher> for Binding {
    fn from(matcher: Matcher) -> Self {
        Binding::Matcher(matcher)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("registry is sealed; cannot register {id:?} for {language:?}")]
    Sealed { id: EventId, language: Language },
    /// Re-registration before a fresh bootstrap is a logic error, never a
    /// normal runtime path.
    #[error("{id:?} is already registered for {language:?}")]
    Duplicate { id: EventId, language: Language },
}

/// Owner of every registered strategy and name.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<(EventId, Language), Binding>,
    sealed: bool,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Whether [`seal`](Registry::seal) has been called. A sealed registry
    /// doubles as the "already initialized" flag for bootstrap.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: EventId, language: Language) -> bool {
        self.entries.contains_key(&(id, language))
    }

    /// Insert a binding for `(id, language)`.
    pub fn register(
        &mut self,
        id: EventId,
        language: Language,
        binding: impl Into<Binding>,
    ) -> Result<(), RegistryError> {
        if self.sealed {
            return Err(RegistryError::Sealed { id, language });
        }
        if self.entries.contains_key(&(id, language)) {
            return Err(RegistryError::Duplicate { id, language });
        }
        self.entries.insert((id, language), binding.into());
        Ok(())
    }

    /// Convenience path for the exact/prefix text comparer.
    pub fn register_comparer(
        &mut self,
        id: EventId,
        language: Language,
        reference: impl Into<String>,
        mode: MatchMode,
    ) -> Result<(), RegistryError> {
        self.register(id, language, Matcher::from(TextComparer::new(reference, mode)))
    }

    /// Convenience path for locale-name tables: picks the variant for
    /// `language` out of the five-wide list (ordered en, jp, de, fr, cn) and
    /// stores it as a literal name.
    pub fn register_name(
        &mut self,
        id: EventId,
        language: Language,
        variants: [&str; 5],
    ) -> Result<(), RegistryError> {
        self.register(id, language, Binding::Name(variants[language.table_index()].to_string()))
    }

    /// The sole read path. A miss is an expected state, not an error.
    pub fn lookup(&self, id: EventId, language: Language) -> Option<&Binding> {
        let binding = self.entries.get(&(id, language));
        if binding.is_none() {
            tracing::debug!(?id, ?language, "no strategy registered");
        }
        binding
    }

    pub fn lookup_matcher(&self, id: EventId, language: Language) -> Option<&Matcher> {
        self.lookup(id, language).and_then(Binding::matcher)
    }

    pub fn lookup_name(&self, id: EventId, language: Language) -> Option<&str> {
        self.lookup(id, language).and_then(Binding::name)
    }

    /// One-way transition to the read-only state.
    pub fn seal(&mut self) {
        self.sealed = true;
    }
}
