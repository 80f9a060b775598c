//! Raw export -> [`SetView`].
//!
//! # Pipeline
//!
//! ```text
//! RawDocument ──select_set──► RawSet ──┬─► champions (drop traitless / non-playable)
//!     │                                ├─► traits    (drop unnamed / empty / debug)
//!     │                                └─► augments  (active list ∩ items − blacklist)
//!     └── items ───────────────────────────► items   (namespace filter + flags)
//! ```
//!
//! The function is pure: the same document, config and blacklist always
//! produce an equal view, in the same order.

use hashbrown::{HashMap, HashSet};
use tactidex_types::{
    Ability, AbilityVariable, Augment, Champion, ChampionStats, CodexConfig, Item, SetView, Trait,
    TraitEffect,
};
use thiserror::Error;

use crate::blacklist::{Blacklist, is_non_playable};
use crate::collate::locale_compare;
use crate::raw::{RawChampion, RawDocument, RawItem, RawSet, RawTrait, numeric_table};
use crate::tier::classify_augment_tier;

/// apiName prefix shared by items of every set
pub const GENERIC_ITEM_PREFIX: &str = "TFT_Item";
/// apiName fragment of hyper-roll mode variants
pub const HYPER_ROLL_MARKER: &str = "_hr";
pub const AUGMENT_MARKER: &str = "Augment";
pub const DEBUG_MARKER: &str = "_DEBUG";
pub const RADIANT_MARKER: &str = "Radiant";
pub const SUPPORT_MARKER: &str = "Support";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The document has no set sub-documents at all
    #[error("no set data")]
    NoSetData,
}

/// Build the view for the configured set.
///
/// Fails only when the document has no sets; a missing target set falls back
/// (see [`select_set`]).
pub fn normalize(
    doc: &RawDocument,
    config: &CodexConfig,
    blacklist: &Blacklist,
) -> Result<SetView, NormalizeError> {
    let set = select_set(&doc.set_data, config.target_set, &config.expected_mutator())
        .ok_or(NormalizeError::NoSetData)?;

    let champions = normalize_champions(set);
    let traits = normalize_traits(set);
    let items = normalize_items(&doc.items, config.target_set);
    let augments = extract_augments(&doc.items, set, blacklist);

    tracing::debug!(
        set = set.number,
        champions = champions.len(),
        traits = traits.len(),
        items = items.len(),
        augments = augments.len(),
        "Normalized set data"
    );

    Ok(SetView {
        champions,
        traits,
        items,
        augments,
        set_name: config.display_set_name(&set.name).to_string(),
        set_number: set.number,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Set Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Pick the set sub-document to display.
///
/// 1. `number == target` and `mutator == expected_mutator`
/// 2. any `number == target`
/// 3. the highest `number` (last one wins on ties)
///
/// Returns `None` only for an empty list.
pub fn select_set<'a>(sets: &'a [RawSet], target: i64, expected_mutator: &str) -> Option<&'a RawSet> {
    if let Some(set) = sets
        .iter()
        .find(|s| s.number == target && s.mutator == expected_mutator)
    {
        return Some(set);
    }

    if let Some(set) = sets.iter().find(|s| s.number == target) {
        tracing::warn!(
            set = target,
            mutator = %set.mutator,
            expected = expected_mutator,
            "Main mutator not found, using another mode of the target set"
        );
        return Some(set);
    }

    let newest = sets.iter().max_by_key(|s| s.number)?;
    tracing::warn!(
        target = target,
        selected = newest.number,
        "Target set not found, using the newest set"
    );
    Some(newest)
}

// ─────────────────────────────────────────────────────────────────────────────
// Champions & Traits
// ─────────────────────────────────────────────────────────────────────────────

/// Playable champions of a set, in upstream order.
pub fn normalize_champions(set: &RawSet) -> Vec<Champion> {
    set.champions
        .iter()
        .filter(|c| !c.traits.is_empty() && !is_non_playable(&c.name))
        .map(to_champion)
        .collect()
}

fn to_champion(raw: &RawChampion) -> Champion {
    let stats = &raw.stats;
    Champion {
        api_name: raw.api_name.clone(),
        name: raw.name.clone(),
        cost: raw.cost,
        icon: raw.icon.clone(),
        traits: raw.traits.clone(),
        ability: Ability {
            name: raw.ability.name.clone(),
            desc: raw.ability.desc.clone(),
            icon: raw.ability.icon.clone(),
            variables: raw
                .ability
                .variables
                .iter()
                .map(|v| AbilityVariable {
                    name: v.name.clone(),
                    value: v.value.iter().map(|n| n.as_f64()).collect(),
                })
                .collect(),
        },
        stats: ChampionStats {
            armor: stats.armor,
            attack_speed: stats.attack_speed,
            crit_chance: stats.crit_chance,
            crit_multiplier: stats.crit_multiplier,
            damage: stats.damage,
            hp: stats.hp,
            initial_mana: stats.initial_mana,
            magic_resist: stats.magic_resist,
            mana: stats.mana,
            range: stats.range,
        },
    }
}

/// Named, non-debug traits with at least one breakpoint.
pub fn normalize_traits(set: &RawSet) -> Vec<Trait> {
    set.traits
        .iter()
        .filter(|t| !t.name.is_empty() && !t.effects.is_empty() && !t.api_name.contains(DEBUG_MARKER))
        .map(to_trait)
        .collect()
}

fn to_trait(raw: &RawTrait) -> Trait {
    Trait {
        api_name: raw.api_name.clone(),
        name: raw.name.clone(),
        desc: raw.desc.clone(),
        icon: raw.icon.clone(),
        effects: raw
            .effects
            .iter()
            .map(|e| TraitEffect {
                min_units: e.min_units,
                max_units: e.max_units,
                style: e.style,
                variables: numeric_table(&e.variables),
            })
            .collect(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Items
// ─────────────────────────────────────────────────────────────────────────────

/// apiName prefix of set-specific entries, e.g. `TFT16`
pub fn set_prefix(target_set: i64) -> String {
    format!("TFT{target_set}")
}

/// Whether an item belongs on the item tab.
///
/// The augment exclusion is evaluated before (and again inside) the namespace
/// test, so a set-namespaced augment can never pass through the set prefix.
pub fn is_standard_item(item: &RawItem, set_prefix: &str) -> bool {
    let api = item.api_name.as_str();
    let has_name = !item.name.is_empty();
    let is_not_hyper_roll = !api.contains(HYPER_ROLL_MARKER);
    let is_not_augment = !api.contains(AUGMENT_MARKER);
    let in_namespace = api.starts_with(GENERIC_ITEM_PREFIX)
        || (api.starts_with(set_prefix) && !api.contains(AUGMENT_MARKER));

    has_name && is_not_hyper_roll && is_not_augment && in_namespace
}

/// Standard items with derived component/completed/radiant/support flags.
pub fn normalize_items(items: &[RawItem], target_set: i64) -> Vec<Item> {
    let prefix = set_prefix(target_set);
    items
        .iter()
        .filter(|item| is_standard_item(item, &prefix))
        .map(to_item)
        .collect()
}

fn to_item(raw: &RawItem) -> Item {
    let api = raw.api_name.as_str();
    let is_radiant = api.contains(RADIANT_MARKER);
    Item {
        api_name: raw.api_name.clone(),
        name: raw.name.clone(),
        desc: raw.desc.clone(),
        icon: raw.icon.clone(),
        composition: raw.composition.clone(),
        effects: numeric_table(&raw.effects),
        is_component: raw.composition.is_empty() && !is_radiant && api.starts_with(GENERIC_ITEM_PREFIX),
        is_completed: raw.composition.len() == 2,
        is_radiant,
        is_support: api.contains(SUPPORT_MARKER),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Augments
// ─────────────────────────────────────────────────────────────────────────────

/// Active augments of `set`, highest tier first, then by name.
///
/// The set's `augments` list is authoritative; naming conventions are not
/// consulted. Ids without a matching named item, and blacklisted ids, are
/// dropped. A set without the list has no augments.
pub fn extract_augments(items: &[RawItem], set: &RawSet, blacklist: &Blacklist) -> Vec<Augment> {
    let Some(active_ids) = set.augments.as_deref() else {
        tracing::debug!(set = set.number, "Set has no active augment list");
        return Vec::new();
    };

    // Later duplicates of an apiName replace earlier ones
    let lookup: HashMap<&str, &RawItem> = items
        .iter()
        .filter(|item| !item.api_name.is_empty() && !item.name.is_empty())
        .map(|item| (item.api_name.as_str(), item))
        .collect();

    let mut seen = HashSet::new();
    let mut augments: Vec<Augment> = active_ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .filter(|id| !blacklist.contains(id.as_str()))
        .filter_map(|id| lookup.get(id.as_str()).copied())
        .map(to_augment)
        .collect();

    augments.sort_by(|a, b| b.tier.cmp(&a.tier).then_with(|| locale_compare(&a.name, &b.name)));
    augments
}

fn to_augment(raw: &RawItem) -> Augment {
    Augment {
        api_name: raw.api_name.clone(),
        name: raw.name.clone(),
        desc: raw.desc.clone(),
        icon: raw.icon.clone(),
        tier: classify_augment_tier(&raw.icon),
        associated_traits: raw.associated_traits.clone(),
        effects: numeric_table(&raw.effects),
    }
}
