//! One-time registry population.
//!
//! Bootstrap is the only code that writes to a [`Registry`]. It is handed a
//! read-only [`GameData`] accessor for the active client language, pulls the
//! raw template rows it needs, combines them with the per-language parameter
//! tables baked into [`tables`], and registers one binding per event before
//! sealing the registry.
//!
//! ## All-or-nothing
//!
//! Game-data schema drift (a renamed sheet, a shifted row) must not leave a
//! half-populated, unsealed registry behind. Every fallible read therefore
//! happens while building a *staging* list of bindings; the registry is only
//! touched once the full list exists, and sealing happens in the same
//! breath. A sealed registry is simultaneously the "already initialized"
//! flag: calling [`bootstrap`] on one is a no-op.

#[path = "bootstrap/tables.rs"]
mod tables;
#[cfg(test)]
#[path = "bootstrap/tests.rs"]
mod tests;

use crate::matchers::{
    LetterMatcher, MatchMode, Matcher, OffsetExtractor, PayloadComparer, PayloadExtractor,
    RegexExtractor, TextComparer,
};
use crate::registry::{Binding, Registry, RegistryError};
use crate::rich_text::{RichText, SegmentIndex};
use crate::{EventId, Language};
use once_cell::sync::OnceCell;
use std::collections::HashSet;

/// Identifies one external template row the bootstrap reads.
///
/// The accessor maps these to whatever sheet/row addressing its data source
/// uses; the recognizer only cares about the semantic row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateRow {
    // Gardening interaction command strings.
    PlantCommand,
    FertilizeCommand,
    TendCommand,
    HarvestCommand,
    RemoveCommand,
    DisposeCommand,

    // Crop status notification templates (rich).
    CropBeyondHopeNotice,
    CropDoingWellNotice,
    CropBetterDaysNotice,
    CropReadyNotice,
    PrepareBedPrompt,

    // Place names for the five housing zones.
    MistPlaceName,
    LavenderBedsPlaceName,
    GobletPlaceName,
    ShiroganePlaceName,
    EmpyreumPlaceName,

    // Miscellaneous UI labels.
    SubmersibleLabel,
    RetainerLabel,

    // Gold Saucer ticket purchase prompts.
    MiniCactpotPrompt,
    JumboCactpotPrompt,
}

/// One raw template row: flat text or a structured rich text.
#[derive(Debug, Clone)]
pub enum TemplateText {
    Plain(String),
    Rich(RichText),
}

impl TemplateText {
    /// The rendered flat string of this row.
    fn into_plain(self) -> String {
        match self {
            TemplateText::Plain(s) => s,
            TemplateText::Rich(r) => r.flatten(),
        }
    }

    /// The structured form; a flat row becomes a single literal segment.
    fn into_rich(self) -> RichText {
        match self {
            TemplateText::Plain(s) => RichText::from_literal(s),
            TemplateText::Rich(r) => r,
        }
    }
}

/// Read-only accessor for the external game data, handed to bootstrap and
/// never retained.
pub trait GameData {
    /// The client's active display language.
    fn language(&self) -> Language;

    /// Fetch one template row in the active language.
    fn row(&self, row: TemplateRow) -> Option<TemplateText>;
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The data source no longer carries an expected row: schema drift.
    #[error("missing template row {row:?} for {language:?}")]
    MissingRow { row: TemplateRow, language: Language },
    /// A row exists but its shape is unusable (e.g. no leading literal).
    #[error("template row {row:?} for {language:?} has no usable literal text")]
    EmptyRow { row: TemplateRow, language: Language },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Populate `registry` for the data source's active language, then seal it.
///
/// Idempotent: a sealed registry is already initialized and the call returns
/// `Ok` without observable effect. On error the registry is untouched.
pub fn bootstrap(registry: &mut Registry, data: &dyn GameData) -> Result<(), BootstrapError> {
    if registry.is_sealed() {
        return Ok(());
    }

    let language = data.language();
    let bindings = build_bindings(language, data)?;

    // Conflicts are detected before the first insert so a duplicate cannot
    // leave a partial registration behind.
    let mut keys: HashSet<EventId> = HashSet::with_capacity(bindings.len());
    for (id, _) in &bindings {
        if !keys.insert(*id) || registry.contains(*id, language) {
            return Err(RegistryError::Duplicate { id: *id, language }.into());
        }
    }

    for (id, binding) in bindings {
        registry.register(id, language, binding)?;
    }
    registry.seal();

    tracing::info!(?language, entries = registry.len(), "event recognizer bootstrapped");
    Ok(())
}

/// Selectors for the crop status notices: the trailing wrapper text (thrice,
/// as the source template does) plus the leading literal.
const NOTICE_SELECTORS: [SegmentIndex; 4] = [
    SegmentIndex::FromEnd(1),
    SegmentIndex::FromEnd(1),
    SegmentIndex::FromEnd(1),
    SegmentIndex::FromStart(0),
];

/// The "crop ready" template carries an extra trailing variable token, so it
/// also pins the third segment from the end.
const READY_SELECTORS: [SegmentIndex; 4] = [
    SegmentIndex::FromEnd(1),
    SegmentIndex::FromEnd(3),
    SegmentIndex::FromEnd(1),
    SegmentIndex::FromStart(0),
];

/// The prepare-bed prompt keeps stable literals at both ends.
const PREPARE_BED_SELECTORS: [SegmentIndex; 4] = [
    SegmentIndex::FromStart(0),
    SegmentIndex::FromStart(0),
    SegmentIndex::FromEnd(1),
    SegmentIndex::FromEnd(1),
];

fn build_bindings(
    language: Language,
    data: &dyn GameData,
) -> Result<Vec<(EventId, Binding)>, BootstrapError> {
    let plain = |row: TemplateRow| -> Result<String, BootstrapError> {
        data.row(row)
            .map(TemplateText::into_plain)
            .ok_or(BootstrapError::MissingRow { row, language })
    };
    let rich = |row: TemplateRow| -> Result<RichText, BootstrapError> {
        data.row(row)
            .map(TemplateText::into_rich)
            .ok_or(BootstrapError::MissingRow { row, language })
    };
    let comparer = |text: String, mode: MatchMode| -> Binding {
        Binding::Matcher(Matcher::from(TextComparer::new(text, mode)))
    };
    let name = |variants: [&'static str; 5]| -> Binding {
        Binding::Name(tables::pick(language, variants).to_string())
    };

    let mut out: Vec<(EventId, Binding)> = Vec::new();

    // Gardening commands: fixed strings, except the dispose prompt whose
    // tail embeds the item name.
    out.push((EventId::HarvestCrop, comparer(plain(TemplateRow::HarvestCommand)?, MatchMode::Equal)));
    out.push((EventId::TendCrop, comparer(plain(TemplateRow::TendCommand)?, MatchMode::Equal)));
    out.push((
        EventId::FertilizeCrop,
        comparer(plain(TemplateRow::FertilizeCommand)?, MatchMode::Equal),
    ));
    out.push((EventId::RemoveCrop, comparer(plain(TemplateRow::RemoveCommand)?, MatchMode::Equal)));
    out.push((EventId::PlantCrop, comparer(plain(TemplateRow::PlantCommand)?, MatchMode::Equal)));

    let dispose = rich(TemplateRow::DisposeCommand)?;
    let dispose_lead = dispose
        .first_literal()
        .ok_or(BootstrapError::EmptyRow { row: TemplateRow::DisposeCommand, language })?;
    out.push((EventId::DisposeCrop, comparer(dispose_lead.to_string(), MatchMode::StartsWith)));

    // Crop status notifications: payload comparison against the template.
    for (id, row, selectors) in [
        (EventId::CropBeyondHope, TemplateRow::CropBeyondHopeNotice, &NOTICE_SELECTORS),
        (EventId::CropDoingWell, TemplateRow::CropDoingWellNotice, &NOTICE_SELECTORS),
        (EventId::CropBetterDays, TemplateRow::CropBetterDaysNotice, &NOTICE_SELECTORS),
        (EventId::CropReady, TemplateRow::CropReadyNotice, &READY_SELECTORS),
        (EventId::CropPrepareBed, TemplateRow::PrepareBedPrompt, &PREPARE_BED_SELECTORS),
    ] {
        let matcher = PayloadComparer::new(rich(row)?, selectors);
        out.push((id, Binding::Matcher(matcher.into())));
    }

    // Extraction strategies built purely from baked tables.
    out.push((
        EventId::PlantName,
        Binding::Matcher(PayloadExtractor::new(tables::plant_payload_index(language), "plant").into()),
    ));
    let (patch, bed) = tables::patch_bed_offsets(language);
    out.push((EventId::PatchSelector, Binding::Matcher(OffsetExtractor::new(patch, bed).into())));
    out.push((
        EventId::SeedPrompt,
        Binding::Matcher(
            RegexExtractor::new(tables::planting_pattern(language), tables::PLANTING_GROUPS).into(),
        ),
    ));
    out.push((
        EventId::WheelPrompt,
        Binding::Matcher(
            RegexExtractor::new(tables::wheel_pattern(language), tables::WHEEL_GROUPS).into(),
        ),
    ));
    out.push((
        EventId::JumboTicket,
        Binding::Matcher(
            RegexExtractor::new(tables::jumbo_pattern(language), tables::JUMBO_GROUPS).into(),
        ),
    ));

    // Ticket purchase prompts: letters only, to ride out punctuation drift.
    out.push((
        EventId::BuyMiniCactpotTicket,
        Binding::Matcher(LetterMatcher::new(&plain(TemplateRow::MiniCactpotPrompt)?).into()),
    ));
    out.push((
        EventId::BuyJumboCactpotTicket,
        Binding::Matcher(LetterMatcher::new(&plain(TemplateRow::JumboCactpotPrompt)?).into()),
    ));

    // Housing zone names come from game data, localized already.
    for (id, row) in [
        (EventId::Mist, TemplateRow::MistPlaceName),
        (EventId::LavenderBeds, TemplateRow::LavenderBedsPlaceName),
        (EventId::Goblet, TemplateRow::GobletPlaceName),
        (EventId::Shirogane, TemplateRow::ShiroganePlaceName),
        (EventId::Empyreum, TemplateRow::EmpyreumPlaceName),
    ] {
        out.push((id, Binding::Name(plain(row)?)));
    }
    out.push((EventId::Submersible, Binding::Name(plain(TemplateRow::SubmersibleLabel)?)));
    out.push((EventId::Retainer, Binding::Name(plain(TemplateRow::RetainerLabel)?)));

    // UI vocabulary from the baked locale tables.
    out.push((EventId::Unknown, name(tables::UNKNOWN)));
    out.push((EventId::CropPatch, name(tables::CROP_PATCH)));
    out.push((EventId::CropPot, name(tables::CROP_POT)));
    out.push((EventId::CropBed, name(tables::CROP_BED)));
    out.push((EventId::Cottage, name(tables::COTTAGE)));
    out.push((EventId::House, name(tables::HOUSE)));
    out.push((EventId::Mansion, name(tables::MANSION)));
    out.push((EventId::Apartment, name(tables::APARTMENT)));
    out.push((EventId::Chambers, name(tables::CHAMBERS)));
    out.push((EventId::Completed, name(tables::COMPLETED)));
    out.push((EventId::Available, name(tables::AVAILABLE)));
    out.push((EventId::Machines, name(tables::MACHINES)));
    out.push((EventId::Retainers, name(tables::RETAINERS)));
    out.push((EventId::Airship, name(tables::AIRSHIP)));

    Ok(out)
}

static RECOGNIZER: OnceCell<Registry> = OnceCell::new();

/// Process-wide one-shot initialization.
///
/// The cell is set only after a successful, fully registered bootstrap;
/// repeated calls return the same registry, and a failed attempt leaves the
/// cell empty so a later call may retry.
pub fn initialize(data: &dyn GameData) -> Result<&'static Registry, BootstrapError> {
    RECOGNIZER.get_or_try_init(|| {
        let mut registry = Registry::new();
        bootstrap(&mut registry, data)?;
        Ok(registry)
    })
}

/// The process-wide registry, if [`initialize`] has succeeded.
pub fn recognizer() -> Option<&'static Registry> {
    RECOGNIZER.get()
}
