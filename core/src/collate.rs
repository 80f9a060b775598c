//! Locale-aware string ordering for display names.
//!
//! Uses the ICU root collation at default (tertiary) strength, the same table
//! browsers apply for `localeCompare`: base letters first, then accents, then
//! case (lowercase first). Punctuation and symbols follow the root order
//! (`-` before `'` before `+`) and ligatures expand (`Æ` = `AE`, `ß` = `ss`).
//!
//! Strings the collator deems equal fall back to code-point order so the
//! result is a total order and sorts are reproducible.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

static ROOT_COLLATOR: LazyLock<CollatorBorrowed<'static>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .expect("root collation data is compiled in")
});

/// Compare two strings in root-locale order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.compare(a, b).then_with(|| a.cmp(b))
}
