//! Static exclude-lists consulted by the normalizer.
//!
//! The augment blacklist is curated by hand in `data/augment_blacklist.txt`
//! and compiled into a perfect-hash set by `build.rs`. Users can extend it at
//! runtime through `extra_blacklist` in the config; membership is always an
//! exact apiName match.

use hashbrown::HashSet;
use phf::phf_set;

include!(concat!(env!("OUT_DIR"), "/augment_blacklist.rs"));

/// Unit names that appear in a set's champion list but can't be fielded
pub static NON_PLAYABLE_UNITS: phf::Set<&'static str> = phf_set! {
    "Training Dummy",
    "Elder Dragon",
    "Golem",
    "Rift Scuttler",
    "Piltover Invention",
    "Target Dummy",
};

/// True if `api_name` is on the builtin augment blacklist
pub fn is_augment_blacklisted(api_name: &str) -> bool {
    AUGMENT_BLACKLIST.contains(api_name)
}

/// True if `name` is a known non-playable unit
pub fn is_non_playable(name: &str) -> bool {
    NON_PLAYABLE_UNITS.contains(name)
}

/// Builtin augment blacklist plus user-supplied additions.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    extra: HashSet<String>,
}

impl Blacklist {
    /// Only the builtin entries
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extra: extra.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, api_name: &str) -> bool {
        is_augment_blacklisted(api_name) || self.extra.contains(api_name)
    }
}
