//! Per-language parameter tables.
//!
//! Everything language-specific that is *not* read from game data lives
//! here: the compiled extraction patterns, the character offsets for the
//! patch selector, the plant-name payload index, and the baked locale-name
//! lists. Each table is total over [`Language`] by construction — a `match`
//! with no fallible arm — so a missing entry is a compile error, not a
//! bootstrap failure.
//!
//! The five patterns of each extraction event declare identical capture
//! group names; only the surrounding sentence structure differs.

use crate::Language;
use regex::Regex;

/// Capture groups exported by [`planting_pattern`], in output order.
pub(crate) const PLANTING_GROUPS: &[&str] = &["seeds", "soil"];

/// Gardening prompt: "plant which seeds in which soil".
pub(crate) fn planting_pattern(language: Language) -> &'static Regex {
    match language {
        Language::English => {
            regex!(r"Prepare the bed with (?P<soil>.*?) and (a |an )?(?P<seeds>.*?)\?")
        }
        Language::French => regex!(r"Planter (un |une )?(?P<seeds>.*?) avec (?P<soil>.*?).\?"),
        Language::German => {
            regex!(r"(?P<soil>.*?) verteilen und (einer |einem )?(?P<seeds>.*?) aussäen\?")
        }
        Language::Japanese => regex!(r"(?P<soil>.*?)に(?P<seeds>.*?)を植えます。よろしいですか？"),
        Language::ChineseSimplified => regex!(r"确定要将(?P<seeds>.*?)种植在(?P<soil>.*?)中吗？"),
    }
}

pub(crate) const WHEEL_GROUPS: &[&str] = &["wheel"];

/// Aetherial wheel stand prompt: which wheel is being placed.
pub(crate) fn wheel_pattern(language: Language) -> &'static Regex {
    match language {
        Language::English => regex!(r"Place (the )?(?P<wheel>.*?) on the wheel stand\?"),
        Language::French => regex!(r"Installer (la |le )?(?P<wheel>.*?).\?"),
        Language::German => {
            regex!(r"(Das )? (?P<wheel>.*?) wirklich in den Ätherrad-Ständer einsetzen\?")
        }
        Language::Japanese => {
            regex!(r"(?s)「(?P<wheel>.*?)」を.*ホイールスタンドに設置します。.*よろしいですか？")
        }
        Language::ChineseSimplified => regex!(r"(?s)确定要将“(?P<wheel>.*?)”设置到转轮台上吗？"),
    }
}

pub(crate) const JUMBO_GROUPS: &[&str] = &["ticket"];

/// Jumbo Cactpot purchase prompt: the chosen four-digit ticket number.
pub(crate) fn jumbo_pattern(language: Language) -> &'static Regex {
    match language {
        Language::English => regex!(r"number\s+(?P<ticket>\d{4})"),
        Language::French => regex!(r"(?P<ticket>\d{4})\s+pour"),
        Language::German => regex!(r"Nummer\s+(?P<ticket>\d{4})"),
        Language::Japanese => regex!(r"(?P<ticket>\d{4})番を"),
        Language::ChineseSimplified => regex!(r"(?P<ticket>\d{4})号仙人仙彩吗？"),
    }
}

/// `(patch, bed)` character offsets into the patch targeting string.
///
/// The digits sit at different positions per language because sentence
/// structure differs; both offsets index characters, not bytes.
pub(crate) fn patch_bed_offsets(language: Language) -> (usize, usize) {
    match language {
        Language::English => (9, 0),
        Language::Japanese => (4, 1),
        Language::German => (5, 15),
        Language::French => (8, 23),
        Language::ChineseSimplified => (2, 6),
    }
}

/// Position of the plant item link inside the targeting rich text.
pub(crate) fn plant_payload_index(language: Language) -> usize {
    match language {
        Language::English | Language::German => 2,
        Language::Japanese | Language::French | Language::ChineseSimplified => 3,
    }
}

// Locale-name tables, ordered en, jp, de, fr, cn.

pub(crate) const UNKNOWN: [&str; 5] = ["Unknown", "不明", "Unbekannt", "Inconnu", "未知"];

pub(crate) const CROP_PATCH: [&str; 5] = ["Patch", "畑", "Beet", "Potager", "园圃"];
pub(crate) const CROP_POT: [&str; 5] =
    ["Flower Pot", "プランター", "Blumentopf", "Pot de Fleurs", "花盆"];
pub(crate) const CROP_BED: [&str; 5] = ["Bed", "の畝", "Furche", "Emplacement", "地垄"];

pub(crate) const COTTAGE: [&str; 5] = ["Cottage", "コテージ", "Hütte", "Maisonnette", "小屋"];
pub(crate) const HOUSE: [&str; 5] = ["House", "ハウス", "Haus", "Pavillon", "房屋"];
pub(crate) const MANSION: [&str; 5] = ["Mansion", "レジデンス", "Residenz", "Villa", "别墅"];
pub(crate) const APARTMENT: [&str; 5] = ["Apartment", "部屋", "Wohnung", "Appartement", "公寓"];
pub(crate) const CHAMBERS: [&str; 5] = ["Chambers", "ルーム", "Zimmer", "Chambre", "休息室"];
pub(crate) const COMPLETED: [&str; 5] = ["Completed", "完成", "Abgeschlossen", "Complété", "已完成"];
pub(crate) const AVAILABLE: [&str; 5] = ["Available", "利用可能", "Verfügbar", "Disponible", "可用"];
pub(crate) const MACHINES: [&str; 5] = ["Machines", "マシン", "Maschinen", "Machines", "装置"];
pub(crate) const RETAINERS: [&str; 5] = ["Retainers", "リテイナー", "Gehilfen", "Servants", "雇员"];
pub(crate) const AIRSHIP: [&str; 5] = ["Airship", "飛行船", "Luftschiff", "Aéronef", "飞空艇"];

/// Pick the variant for `language` out of a five-wide table.
pub(crate) fn pick(language: Language, variants: [&'static str; 5]) -> &'static str {
    variants[language.table_index()]
}
