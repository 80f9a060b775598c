//! Shared types for tactidex.
//!
//! The normalized view model produced by `tactidex-core`, the user configuration,
//! and the pure string helpers the view layer applies at render time.

pub mod config;
pub mod formatting;
pub mod model;

pub use config::{
    CodexConfig, DEFAULT_ASSET_BASE_URL, DEFAULT_DATA_URL, DEFAULT_DDRAGON_VERSION,
    DEFAULT_MUTATOR_PREFIX, DEFAULT_TARGET_SET,
};
pub use model::{
    Ability, AbilityVariable, Augment, AugmentTier, Champion, ChampionStats, Item, SetView, Trait,
    TraitEffect,
};
