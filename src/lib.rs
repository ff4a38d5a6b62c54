extern crate self as hearsay;

#[macro_use]
mod macros;
mod api;
mod bootstrap;
mod matchers;
mod registry;
mod rich_text;

pub use api::{matches, recognize};
pub use bootstrap::{
    BootstrapError, GameData, TemplateRow, TemplateText, bootstrap, initialize, recognizer,
};
pub use matchers::{
    FieldMapping, LetterMatcher, MatchInput, MatchMode, Matcher, OffsetExtractor, PayloadComparer,
    PayloadExtractor, RegexExtractor, TextComparer,
};
pub use registry::{Binding, Registry, RegistryError};
pub use rich_text::{RichText, Segment, SegmentIndex};

// --- Core shared types ------------------------------------------------------

/// Client display language the recognizer is configured for.
///
/// Fixed for the process lifetime: the client cannot change its display
/// language without a restart, so neither does the recognizer. Five-wide
/// literal tables in the bootstrap are ordered `en, jp, de, fr, cn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Japanese,
    German,
    French,
    ChineseSimplified,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Japanese,
        Language::German,
        Language::French,
        Language::ChineseSimplified,
    ];

    /// Position of this language in five-wide variant tables.
    pub(crate) fn table_index(self) -> usize {
        match self {
            Language::English => 0,
            Language::Japanese => 1,
            Language::German => 2,
            Language::French => 3,
            Language::ChineseSimplified => 4,
        }
    }
}

/// Symbolic identifier for one recognizable event or vocabulary entry.
///
/// Purely a registry key: the recognizer attaches no semantics to the fields
/// a strategy extracts for an identifier. Grouped by the client surface the
/// source string comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventId {
    // Gardening context-menu commands (plain string comparers).
    HarvestCrop,
    TendCrop,
    FertilizeCrop,
    RemoveCrop,
    DisposeCrop,
    PlantCrop,

    // Crop status notifications (rich-text payload comparers).
    CropBeyondHope,
    CropDoingWell,
    CropBetterDays,
    CropReady,
    CropPrepareBed,

    // Field extraction from prompts and targeting text.
    PlantName,
    PatchSelector,
    SeedPrompt,
    WheelPrompt,
    JumboTicket,

    // Gold Saucer ticket prompts (letter-token matchers).
    BuyMiniCactpotTicket,
    BuyJumboCactpotTicket,

    // Housing zone place names (literal names from game data).
    Mist,
    LavenderBeds,
    Goblet,
    Shirogane,
    Empyreum,

    // UI vocabulary (literal names from baked tables or game data).
    Unknown,
    CropPatch,
    CropPot,
    CropBed,
    Cottage,
    House,
    Mansion,
    Apartment,
    Chambers,
    Completed,
    Available,
    Machines,
    Retainers,
    Airship,
    Submersible,
    Retainer,
}
