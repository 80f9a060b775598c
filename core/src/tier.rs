//! Augment rarity inference.
//!
//! The export carries no tier field for augments, so the tier is read off the
//! icon path: art for higher tiers is named with roman numerals (`_II`, `_III`)
//! or a trailing digit. This is lossy. A malformed or unconventional icon path
//! silently lands in the wrong tier, and the result is only guaranteed to be a
//! consistent application of the rules below.

use std::sync::LazyLock;

use regex::Regex;
use tactidex_types::AugmentTier;

/// Set folder/file markers such as `TFT_Set13` or `TFTSet16`. Their digits are
/// not tier markers.
static SET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)TFT_?Set\d+").expect("set marker pattern is valid"));

const PRISMATIC_MARKERS: [&str; 4] = ["_III.", "III_", "-III", "3."];
const GOLD_MARKERS: [&str; 4] = ["_II.", "II_", "-II", "2."];

/// Icon path with set markers removed
pub fn strip_set_markers(icon: &str) -> String {
    SET_MARKER.replace_all(icon, "").into_owned()
}

/// Infer an augment's tier from its icon path.
///
/// Prismatic markers are checked before gold ones (every `III` also contains
/// `II`); anything unmarked is Silver.
pub fn classify_augment_tier(icon: &str) -> AugmentTier {
    let cleaned = strip_set_markers(icon);

    if PRISMATIC_MARKERS.iter().any(|m| cleaned.contains(m)) {
        AugmentTier::Prismatic
    } else if GOLD_MARKERS.iter().any(|m| cleaned.contains(m)) {
        AugmentTier::Gold
    } else {
        AugmentTier::Silver
    }
}
