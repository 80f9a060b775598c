//! Normalized view model.
//!
//! Everything here is derived from the upstream CommunityDragon export by
//! `tactidex_core::normalize` and is never mutated afterwards. A fresh load
//! produces a whole new [`SetView`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Champions
// ─────────────────────────────────────────────────────────────────────────────

/// A playable unit of the selected set.
///
/// Always carries at least one trait and is never one of the known
/// non-playable units (training dummies, neutral monsters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Champion {
    pub api_name: String,
    pub name: String,
    pub cost: i32,
    pub icon: String,
    pub traits: Vec<String>,
    pub ability: Ability,
    pub stats: ChampionStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: String,
    pub desc: String,
    pub icon: String,
    pub variables: Vec<AbilityVariable>,
}

/// Per-star-level values of an ability variable. Upstream nulls are kept so
/// the star-level index stays aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityVariable {
    pub name: String,
    pub value: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionStats {
    pub armor: f64,
    pub attack_speed: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub damage: f64,
    pub hp: f64,
    pub initial_mana: f64,
    pub magic_resist: f64,
    pub mana: f64,
    pub range: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Traits
// ─────────────────────────────────────────────────────────────────────────────

/// A synergy group with at least one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trait {
    pub api_name: String,
    pub name: String,
    pub desc: String,
    pub icon: String,
    pub effects: Vec<TraitEffect>,
}

/// One activation breakpoint of a trait.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitEffect {
    pub min_units: i64,
    pub max_units: i64,
    pub style: i64,
    pub variables: BTreeMap<String, f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Items
// ─────────────────────────────────────────────────────────────────────────────

/// Equipment of the generic item namespace or the selected set's namespace.
///
/// The boolean flags are naming-convention heuristics, not game data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub api_name: String,
    pub name: String,
    pub desc: String,
    pub icon: String,
    pub composition: Vec<String>,
    pub effects: BTreeMap<String, f64>,
    pub is_component: bool,
    pub is_completed: bool,
    pub is_radiant: bool,
    pub is_support: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Augments
// ─────────────────────────────────────────────────────────────────────────────

/// Augment rarity. Ordered so that `Prismatic > Gold > Silver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AugmentTier {
    #[default]
    Silver = 1,
    Gold = 2,
    Prismatic = 3,
}

impl AugmentTier {
    /// All tiers, highest first (display order of the augment sections)
    pub const DESCENDING: [AugmentTier; 3] = [Self::Prismatic, Self::Gold, Self::Silver];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Silver),
            2 => Some(Self::Gold),
            3 => Some(Self::Prismatic),
            _ => None,
        }
    }

    /// Human-readable tier name
    pub fn label(self) -> &'static str {
        match self {
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Prismatic => "Prismatic",
        }
    }
}

impl fmt::Display for AugmentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<AugmentTier> for u8 {
    fn from(tier: AugmentTier) -> Self {
        tier.level()
    }
}

impl TryFrom<u8> for AugmentTier {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or_else(|| format!("invalid augment tier {level}, expected 1-3"))
    }
}

/// A run-modifying pick that is active in the selected set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Augment {
    pub api_name: String,
    pub name: String,
    pub desc: String,
    pub icon: String,
    pub tier: AugmentTier,
    pub associated_traits: Vec<String>,
    pub effects: BTreeMap<String, f64>,
}

impl Augment {
    pub fn tier_name(&self) -> &'static str {
        self.tier.label()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Set View
// ─────────────────────────────────────────────────────────────────────────────

/// The complete normalized bundle for one set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetView {
    pub champions: Vec<Champion>,
    pub traits: Vec<Trait>,
    pub items: Vec<Item>,
    pub augments: Vec<Augment>,
    pub set_name: String,
    pub set_number: i64,
}

impl SetView {
    /// Header line shown above the tabs, e.g. `Lore and Legends - Set 16`
    pub fn title(&self) -> String {
        format!("{} - Set {}", self.set_name, self.set_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_ordering_puts_prismatic_first() {
        let mut tiers = vec![AugmentTier::Gold, AugmentTier::Silver, AugmentTier::Prismatic];
        tiers.sort_by(|a, b| b.cmp(a));
        assert_eq!(tiers, AugmentTier::DESCENDING.to_vec());
    }

    #[test]
    fn tier_serializes_as_level() {
        let json = serde_json::to_string(&AugmentTier::Gold).unwrap();
        assert_eq!(json, "2");
        let tier: AugmentTier = serde_json::from_str("3").unwrap();
        assert_eq!(tier, AugmentTier::Prismatic);
        assert!(serde_json::from_str::<AugmentTier>("4").is_err());
    }

    #[test]
    fn tier_labels() {
        assert_eq!(AugmentTier::Silver.label(), "Silver");
        assert_eq!(AugmentTier::Gold.to_string(), "Gold");
        assert_eq!(AugmentTier::from_level(3), Some(AugmentTier::Prismatic));
        assert_eq!(AugmentTier::from_level(0), None);
    }

    #[test]
    fn set_view_title() {
        let view = SetView {
            champions: vec![],
            traits: vec![],
            items: vec![],
            augments: vec![],
            set_name: "Lore and Legends".to_string(),
            set_number: 16,
        };
        assert_eq!(view.title(), "Lore and Legends - Set 16");
    }
}
