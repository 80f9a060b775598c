//! Read-only queries over a [`SetView`].
//!
//! The view layer never mutates the set; it builds a [`ViewQuery`] from the
//! current tab, search text and cost filter and asks for the matching slice.
//! Every result borrows from the view.

use std::fmt;
use std::str::FromStr;

use tactidex_types::{Augment, AugmentTier, Champion, Item, SetView, Trait};

use crate::collate::locale_compare;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Champions,
    Traits,
    Items,
    Augments,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Self::Champions, Self::Traits, Self::Items, Self::Augments];

    pub fn label(self) -> &'static str {
        match self {
            Self::Champions => "Champions",
            Self::Traits => "Traits",
            Self::Items => "Items",
            Self::Augments => "Augments",
        }
    }

    /// Unfiltered number of entries shown on the tab button
    pub fn count(self, view: &SetView) -> usize {
        match self {
            Self::Champions => view.champions.len(),
            Self::Traits => view.traits.len(),
            Self::Items => view.items.len(),
            Self::Augments => view.augments.len(),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "champions" | "champion" => Ok(Self::Champions),
            "traits" | "trait" => Ok(Self::Traits),
            "items" | "item" => Ok(Self::Items),
            "augments" | "augment" => Ok(Self::Augments),
            other => Err(format!(
                "unknown tab `{other}`; expected champions|traits|items|augments"
            )),
        }
    }
}

/// The user's current selection. Cheap to rebuild on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub tab: Tab,
    pub search: String,
    /// Champion cost filter; `None` shows every cost
    pub cost: Option<i32>,
}

/// Filtered content of one tab
#[derive(Debug, Clone, PartialEq)]
pub enum TabView<'a> {
    Champions(Vec<&'a Champion>),
    Traits(Vec<&'a Trait>),
    Items {
        components: Vec<&'a Item>,
        completed: Vec<&'a Item>,
    },
    /// Sections in display order: Prismatic, Gold, Silver
    Augments(Vec<(AugmentTier, Vec<&'a Augment>)>),
}

impl<'a> TabView<'a> {
    /// Number of entries after filtering
    pub fn len(&self) -> usize {
        match self {
            Self::Champions(c) => c.len(),
            Self::Traits(t) => t.len(),
            Self::Items {
                components,
                completed,
            } => components.len() + completed.len(),
            Self::Augments(sections) => sections.iter().map(|(_, a)| a.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ViewQuery {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_cost(mut self, cost: Option<i32>) -> Self {
        self.cost = cost;
        self
    }

    pub fn apply<'a>(&self, view: &'a SetView) -> TabView<'a> {
        let needle = self.search.to_lowercase();
        match self.tab {
            Tab::Champions => {
                let mut champions: Vec<&Champion> = view
                    .champions
                    .iter()
                    .filter(|c| self.cost.is_none_or(|cost| c.cost == cost))
                    .filter(|c| {
                        needle.is_empty()
                            || contains_ci(&c.name, &needle)
                            || c.traits.iter().any(|t| contains_ci(t, &needle))
                    })
                    .collect();
                champions.sort_by(|a, b| a.cost.cmp(&b.cost).then_with(|| locale_compare(&a.name, &b.name)));
                TabView::Champions(champions)
            }
            Tab::Traits => {
                let mut traits = search_traits(&view.traits, &self.search);
                traits.sort_by(|a, b| locale_compare(&a.name, &b.name));
                TabView::Traits(traits)
            }
            Tab::Items => TabView::Items {
                // Components are few enough to always show in full
                components: component_items(&view.items),
                completed: completed_items(&view.items)
                    .into_iter()
                    .filter(|i| needle.is_empty() || contains_ci(&i.name, &needle))
                    .collect(),
            },
            Tab::Augments => {
                let matching: Vec<&Augment> = view
                    .augments
                    .iter()
                    .filter(|a| {
                        needle.is_empty() || contains_ci(&a.name, &needle) || contains_ci(&a.desc, &needle)
                    })
                    .collect();
                TabView::Augments(
                    AugmentTier::DESCENDING
                        .iter()
                        .map(|tier| {
                            let section = matching.iter().copied().filter(|a| a.tier == *tier).collect();
                            (*tier, section)
                        })
                        .collect(),
                )
            }
        }
    }
}

/// `needle` must already be lowercase
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper queries
// ─────────────────────────────────────────────────────────────────────────────

pub fn champions_by_cost(champions: &[Champion], cost: i32) -> Vec<&Champion> {
    champions.iter().filter(|c| c.cost == cost).collect()
}

/// Champions carrying `trait_name` (case-insensitive exact match)
pub fn champions_by_trait<'a>(champions: &'a [Champion], trait_name: &str) -> Vec<&'a Champion> {
    let wanted = trait_name.to_lowercase();
    champions
        .iter()
        .filter(|c| c.traits.iter().any(|t| t.to_lowercase() == wanted))
        .collect()
}

pub fn component_items(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|i| i.is_component).collect()
}

pub fn completed_items(items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|i| i.is_completed).collect()
}

/// The items `target` is built from. Unknown apiNames are skipped.
pub fn item_recipe<'a>(target: &Item, items: &'a [Item]) -> Vec<&'a Item> {
    target
        .composition
        .iter()
        .filter_map(|id| items.iter().find(|i| &i.api_name == id))
        .collect()
}

/// Items whose recipe includes `component_api_name`
pub fn items_using_component<'a>(component_api_name: &str, items: &'a [Item]) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|i| i.composition.iter().any(|c| c == component_api_name))
        .collect()
}

pub fn search_champions<'a>(champions: &'a [Champion], query: &str) -> Vec<&'a Champion> {
    let needle = query.to_lowercase();
    champions.iter().filter(|c| contains_ci(&c.name, &needle)).collect()
}

pub fn search_traits<'a>(traits: &'a [Trait], query: &str) -> Vec<&'a Trait> {
    let needle = query.to_lowercase();
    traits.iter().filter(|t| contains_ci(&t.name, &needle)).collect()
}
