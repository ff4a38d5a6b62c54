use super::*;
use crate::rich_text::Segment;

/// In-memory stand-in for the external data source.
struct FakeData {
    language: Language,
    missing: Option<TemplateRow>,
}

impl FakeData {
    fn english() -> Self {
        FakeData { language: Language::English, missing: None }
    }

    fn without(row: TemplateRow) -> Self {
        FakeData { language: Language::English, missing: Some(row) }
    }
}

fn notice(leading: &str, trailing: &str) -> Option<TemplateText> {
    Some(TemplateText::Rich(RichText::new(vec![
        Segment::text(leading),
        Segment::item(4868, "Krakka Root"),
        Segment::text(trailing),
    ])))
}

impl GameData for FakeData {
    fn language(&self) -> Language {
        self.language
    }

    fn row(&self, row: TemplateRow) -> Option<TemplateText> {
        if self.missing == Some(row) {
            return None;
        }

        let plain = |s: &str| Some(TemplateText::Plain(s.to_string()));
        match row {
            TemplateRow::PlantCommand => plain("Plant Seeds"),
            TemplateRow::FertilizeCommand => plain("Fertilize Crop"),
            TemplateRow::TendCommand => plain("Tend Crop"),
            TemplateRow::HarvestCommand => plain("Harvest Crop"),
            TemplateRow::RemoveCommand => plain("Remove Crop"),
            TemplateRow::DisposeCommand => Some(TemplateText::Rich(RichText::new(vec![
                Segment::text("Dispose of "),
                Segment::item(4868, "Krakka Root"),
                Segment::text("?"),
            ]))),
            TemplateRow::CropBeyondHopeNotice => notice("The ", " is beyond hope..."),
            TemplateRow::CropDoingWellNotice => notice("The ", " is doing well."),
            TemplateRow::CropBetterDaysNotice => notice("The ", " has seen better days..."),
            TemplateRow::CropReadyNotice => notice("The ", " is ready to be harvested!"),
            TemplateRow::PrepareBedPrompt => Some(TemplateText::Rich(RichText::new(vec![
                Segment::text("Prepare the bed with "),
                Segment::item(7715, "Shroud Soil"),
                Segment::text(" and "),
                Segment::item(4868, "Krakka Root Seeds"),
                Segment::text("?"),
            ]))),
            TemplateRow::MistPlaceName => plain("Mist"),
            TemplateRow::LavenderBedsPlaceName => plain("The Lavender Beds"),
            TemplateRow::GobletPlaceName => plain("The Goblet"),
            TemplateRow::ShiroganePlaceName => plain("Shirogane"),
            TemplateRow::EmpyreumPlaceName => plain("Empyreum"),
            TemplateRow::SubmersibleLabel => plain("Submersible"),
            TemplateRow::RetainerLabel => plain("Retainer"),
            TemplateRow::MiniCactpotPrompt => plain("Purchase a Mini Cactpot ticket."),
            TemplateRow::JumboCactpotPrompt => plain("Purchase a Jumbo Cactpot ticket."),
        }
    }
}

const ALL_EVENTS: [EventId; 39] = [
    EventId::HarvestCrop,
    EventId::TendCrop,
    EventId::FertilizeCrop,
    EventId::RemoveCrop,
    EventId::DisposeCrop,
    EventId::PlantCrop,
    EventId::CropBeyondHope,
    EventId::CropDoingWell,
    EventId::CropBetterDays,
    EventId::CropReady,
    EventId::CropPrepareBed,
    EventId::PlantName,
    EventId::PatchSelector,
    EventId::SeedPrompt,
    EventId::WheelPrompt,
    EventId::JumboTicket,
    EventId::BuyMiniCactpotTicket,
    EventId::BuyJumboCactpotTicket,
    EventId::Mist,
    EventId::LavenderBeds,
    EventId::Goblet,
    EventId::Shirogane,
    EventId::Empyreum,
    EventId::Unknown,
    EventId::CropPatch,
    EventId::CropPot,
    EventId::CropBed,
    EventId::Cottage,
    EventId::House,
    EventId::Mansion,
    EventId::Apartment,
    EventId::Chambers,
    EventId::Completed,
    EventId::Available,
    EventId::Machines,
    EventId::Retainers,
    EventId::Airship,
    EventId::Submersible,
    EventId::Retainer,
];

#[test]
fn bootstrap_registers_every_event_for_the_active_language() {
    let mut registry = Registry::new();
    bootstrap(&mut registry, &FakeData::english()).unwrap();

    assert!(registry.is_sealed());
    assert_eq!(registry.len(), ALL_EVENTS.len());
    for id in ALL_EVENTS {
        assert!(registry.lookup(id, Language::English).is_some(), "{id:?} not registered");
    }
}

#[test]
fn registered_strategies_match_their_source_templates() {
    let mut registry = Registry::new();
    let data = FakeData::english();
    bootstrap(&mut registry, &data).unwrap();
    let lang = Language::English;

    // Plain comparers match the exact command text.
    let harvest = registry.lookup_matcher(EventId::HarvestCrop, lang).unwrap();
    assert!(harvest.matches(&"Harvest Crop".into()));
    assert!(!harvest.matches(&"Harvest Crops".into()));

    // The dispose prompt only needs its stable leading literal.
    let dispose = registry.lookup_matcher(EventId::DisposeCrop, lang).unwrap();
    assert!(dispose.matches(&"Dispose of Apricot Sapling?".into()));
    assert!(!dispose.matches(&"Remove Apricot Sapling?".into()));

    // Payload comparers recognize the template with any substituted item.
    let ready = registry.lookup_matcher(EventId::CropReady, lang).unwrap();
    let candidate = RichText::new(vec![
        Segment::text("The "),
        Segment::item(7593, "Apricot"),
        Segment::text(" is ready to be harvested!"),
    ]);
    assert!(ready.matches(&(&candidate).into()));
    let wilted = RichText::new(vec![
        Segment::text("The "),
        Segment::item(7593, "Apricot"),
        Segment::text(" has wilted..."),
    ]);
    assert!(!ready.matches(&(&wilted).into()));

    // Letter matcher shrugs off punctuation drift.
    let mini = registry.lookup_matcher(EventId::BuyMiniCactpotTicket, lang).unwrap();
    assert!(mini.matches(&"Purchase a Mini Cactpot ticket!".into()));
    assert!(!mini.matches(&"Purchase a Jumbo Cactpot ticket.".into()));

    // Regex extraction with the baked English pattern.
    let seeds = registry.lookup_matcher(EventId::SeedPrompt, lang).unwrap();
    let mapping =
        seeds.try_match(&"Prepare the bed with Shroud Soil and an Apricot Kernel?".into()).unwrap();
    assert_eq!(mapping.get("seeds"), Some("Apricot Kernel"));
    assert_eq!(mapping.get("soil"), Some("Shroud Soil"));

    // Names come through as literals, from data rows and baked tables alike.
    assert_eq!(registry.lookup_name(EventId::LavenderBeds, lang), Some("The Lavender Beds"));
    assert_eq!(registry.lookup_name(EventId::CropPatch, lang), Some("Patch"));
    assert_eq!(registry.lookup_name(EventId::Unknown, lang), Some("Unknown"));
}

#[test]
fn bootstrap_uses_the_tables_for_the_active_language() {
    let mut registry = Registry::new();
    let data = FakeData { language: Language::Japanese, missing: None };
    bootstrap(&mut registry, &data).unwrap();
    let lang = Language::Japanese;

    assert_eq!(registry.lookup_name(EventId::CropPatch, lang), Some("畑"));
    assert_eq!(registry.lookup_name(EventId::Airship, lang), Some("飛行船"));

    // Japanese patch/bed offsets are (4, 1).
    let patch = registry.lookup_matcher(EventId::PatchSelector, lang).unwrap();
    let mapping = patch.try_match(&"第3区画7番です".into()).unwrap();
    assert_eq!(mapping.get("patch"), Some("7"));
    assert_eq!(mapping.get("bed"), Some("3"));

    // And nothing was registered under any other language.
    assert!(registry.lookup(EventId::CropPatch, Language::English).is_none());
}

#[test]
fn bootstrap_is_idempotent() {
    let mut registry = Registry::new();
    let data = FakeData::english();

    bootstrap(&mut registry, &data).unwrap();
    let len = registry.len();

    bootstrap(&mut registry, &data).unwrap();
    assert_eq!(registry.len(), len);
    assert!(registry.is_sealed());
}

#[test]
fn missing_row_aborts_without_partial_registration() {
    let mut registry = Registry::new();
    let err = bootstrap(&mut registry, &FakeData::without(TemplateRow::CropReadyNotice));

    match err {
        Err(BootstrapError::MissingRow { row, language }) => {
            assert_eq!(row, TemplateRow::CropReadyNotice);
            assert_eq!(language, Language::English);
        }
        other => panic!("expected MissingRow, got {other:?}"),
    }
    assert!(registry.is_empty());
    assert!(!registry.is_sealed());
}

#[test]
fn dispose_row_without_leading_literal_is_an_empty_row_error() {
    struct NoLead;
    impl GameData for NoLead {
        fn language(&self) -> Language {
            Language::English
        }
        fn row(&self, row: TemplateRow) -> Option<TemplateText> {
            if row == TemplateRow::DisposeCommand {
                return Some(TemplateText::Rich(RichText::new(vec![Segment::item(1, "x")])));
            }
            FakeData::english().row(row)
        }
    }

    let mut registry = Registry::new();
    let err = bootstrap(&mut registry, &NoLead);
    assert!(matches!(
        err,
        Err(BootstrapError::EmptyRow { row: TemplateRow::DisposeCommand, .. })
    ));
    assert!(registry.is_empty());
}

#[test]
fn initialize_is_process_wide_and_one_shot() {
    let data = FakeData::english();
    let first = initialize(&data).unwrap();
    let second = initialize(&data).unwrap();

    assert!(std::ptr::eq(first, second));
    assert!(recognizer().is_some_and(|r| std::ptr::eq(r, first)));
    assert!(first.is_sealed());
}
