//! Static data files for packaging a build without network access.
//!
//! Unlike the live view these files are unfiltered by the blacklist and use
//! naming conventions instead of the active augment list, so they double as a
//! review aid when curating the blacklist.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tactidex_types::CodexConfig;
use thiserror::Error;

use crate::collate::locale_compare;
use crate::normalize::{AUGMENT_MARKER, GENERIC_ITEM_PREFIX, set_prefix};
use crate::raw::{RawDocument, RawSet, RawTraitEffect};

pub const FULL_DATA_FILE: &str = "tft-full-data.json";
pub const ITEMS_FILE: &str = "items.json";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which set sub-document to extract. Only an exact match is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotOptions {
    pub target_set: i64,
    pub mutator: String,
}

impl From<&CodexConfig> for SnapshotOptions {
    fn from(config: &CodexConfig) -> Self {
        Self {
            target_set: config.target_set,
            mutator: config.expected_mutator(),
        }
    }
}

/// Unfiltered list lengths of the exact-match set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetStats {
    pub champions: usize,
    pub traits: usize,
    pub augments: usize,
}

/// The set matching both number and mutator, with no fallback
pub fn exact_set<'a>(doc: &'a RawDocument, options: &SnapshotOptions) -> Option<&'a RawSet> {
    doc.set_data
        .iter()
        .find(|s| s.number == options.target_set && s.mutator == options.mutator)
}

/// Raw counts for the exact-match set, `None` when it is absent.
pub fn set_stats(doc: &RawDocument, options: &SnapshotOptions) -> Option<SetStats> {
    exact_set(doc, options).map(|set| SetStats {
        champions: set.champions.len(),
        traits: set.traits.len(),
        augments: set.augments.as_ref().map_or(0, Vec::len),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotSummary {
    /// `None` when the exact set was not in the document
    pub champions: Option<usize>,
    pub traits: Option<usize>,
    pub augments: usize,
    pub items: usize,
    pub files: Vec<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChampionRecord<'a> {
    api_name: &'a str,
    name: &'a str,
    cost: i32,
    traits: &'a [String],
    icon: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TraitRecord<'a> {
    api_name: &'a str,
    name: &'a str,
    desc: &'a str,
    effects: &'a [RawTraitEffect],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AugmentRecord<'a> {
    api_name: &'a str,
    name: &'a str,
    desc: &'a str,
    icon: &'a str,
    associated_traits: &'a [String],
    effects: &'a std::collections::BTreeMap<String, Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord<'a> {
    api_name: &'a str,
    name: &'a str,
    desc: &'a str,
    composition: &'a [String],
    effects: &'a std::collections::BTreeMap<String, Value>,
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), SnapshotError> {
    fs::write(path, contents).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(value)?;
    write_file(path, json.as_bytes())
}

fn ensure_dir(dir: &Path) -> Result<(), SnapshotError> {
    fs::create_dir_all(dir).map_err(|source| SnapshotError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Save the body unchanged after checking it parses as JSON.
/// Returns the number of bytes written.
pub fn write_raw(bytes: &[u8], path: &Path) -> Result<u64, SnapshotError> {
    serde_json::from_slice::<Value>(bytes)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    write_file(path, bytes)?;
    Ok(bytes.len() as u64)
}

/// Write the full document plus per-set extracts into `out_dir`.
pub fn write_snapshot(
    doc_bytes: &[u8],
    out_dir: &Path,
    options: &SnapshotOptions,
) -> Result<SnapshotSummary, SnapshotError> {
    // Key order is kept (`preserve_order`), so the file mirrors upstream
    let value: Value = serde_json::from_slice(doc_bytes)?;
    let doc = RawDocument::deserialize(&value)?;
    ensure_dir(out_dir)?;

    let mut summary = SnapshotSummary::default();
    let n = options.target_set;

    let full_path = out_dir.join(FULL_DATA_FILE);
    write_json(&full_path, &value)?;
    summary.files.push(full_path);

    match exact_set(&doc, options) {
        Some(set) => {
            let mut champions: Vec<ChampionRecord> = set
                .champions
                .iter()
                .filter(|c| !c.traits.is_empty())
                .map(|c| ChampionRecord {
                    api_name: &c.api_name,
                    name: &c.name,
                    cost: c.cost,
                    traits: &c.traits,
                    icon: &c.icon,
                })
                .collect();
            champions.sort_by(|a, b| a.cost.cmp(&b.cost).then_with(|| locale_compare(a.name, b.name)));

            let mut traits: Vec<TraitRecord> = set
                .traits
                .iter()
                .filter(|t| !t.name.is_empty() && !t.effects.is_empty())
                .map(|t| TraitRecord {
                    api_name: &t.api_name,
                    name: &t.name,
                    desc: &t.desc,
                    effects: &t.effects,
                })
                .collect();
            traits.sort_by(|a, b| locale_compare(a.name, b.name));

            let path = out_dir.join(format!("set{n}-champions.json"));
            write_json(&path, &champions)?;
            summary.files.push(path);

            let path = out_dir.join(format!("set{n}-traits.json"));
            write_json(&path, &traits)?;
            summary.files.push(path);

            summary.champions = Some(champions.len());
            summary.traits = Some(traits.len());
        }
        None => {
            tracing::warn!(set = n, mutator = %options.mutator, "Set not found, skipping champion and trait files");
        }
    }

    let prefix = set_prefix(n);
    let mut augments: Vec<AugmentRecord> = doc
        .items
        .iter()
        .filter(|i| i.api_name.contains(&prefix) && i.api_name.contains(AUGMENT_MARKER) && !i.name.is_empty())
        .map(|i| AugmentRecord {
            api_name: &i.api_name,
            name: &i.name,
            desc: &i.desc,
            icon: &i.icon,
            associated_traits: &i.associated_traits,
            effects: &i.effects,
        })
        .collect();
    augments.sort_by(|a, b| locale_compare(a.name, b.name));

    let path = out_dir.join(format!("set{n}-augments.json"));
    write_json(&path, &augments)?;
    summary.files.push(path);

    let names: Vec<&str> = augments.iter().map(|a| a.name).collect();
    let path = out_dir.join(format!("set{n}-augment-names.txt"));
    write_file(&path, names.join("\n").as_bytes())?;
    summary.files.push(path);
    summary.augments = augments.len();

    let mut items: Vec<ItemRecord> = doc
        .items
        .iter()
        .filter(|i| {
            i.api_name.starts_with(GENERIC_ITEM_PREFIX) && !i.api_name.contains(AUGMENT_MARKER) && !i.name.is_empty()
        })
        .map(|i| ItemRecord {
            api_name: &i.api_name,
            name: &i.name,
            desc: &i.desc,
            composition: &i.composition,
            effects: &i.effects,
        })
        .collect();
    items.sort_by(|a, b| locale_compare(a.name, b.name));

    let path = out_dir.join(ITEMS_FILE);
    write_json(&path, &items)?;
    summary.files.push(path);
    summary.items = items.len();

    tracing::info!(
        dir = %out_dir.display(),
        files = summary.files.len(),
        augments = summary.augments,
        items = summary.items,
        "Snapshot written"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tactidex_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn document() -> Vec<u8> {
        serde_json::to_vec(&json!({
            "items": [
                { "apiName": "TFT16_Augment_Zeal", "name": "zeal", "effects": { "AS": 10 } },
                { "apiName": "TFT16_Augment_Anvil", "name": "Anvil" },
                { "apiName": "TFT16_Augment_Hidden", "name": "" },
                { "apiName": "TFT15_Augment_Old", "name": "Old" },
                { "apiName": "TFT_Item_BFSword", "name": "B.F. Sword" },
                { "apiName": "TFT_Item_Augment_Ghost", "name": "Ghost" },
                { "apiName": "TFT_Item_Deathblade", "name": "Deathblade", "composition": ["TFT_Item_BFSword", "TFT_Item_BFSword"] }
            ],
            "setData": [
                {
                    "number": 16, "mutator": "TFTSet16",
                    "champions": [
                        { "apiName": "TFT16_Zed", "name": "Zed", "cost": 2, "traits": ["Assassin"] },
                        { "apiName": "TFT16_Garen", "name": "Garen", "cost": 1, "traits": ["Warden"] },
                        { "apiName": "TFT16_Dummy", "name": "Training Dummy", "cost": 1, "traits": [] }
                    ],
                    "traits": [
                        { "apiName": "TFT16_Warden", "name": "Warden", "effects": [{ "minUnits": 2, "variables": { "Armor": 20 } }] },
                        { "apiName": "TFT16_Empty", "name": "Empty", "effects": [] }
                    ]
                },
                { "number": 16, "mutator": "TFTSet16_Hyper", "champions": [] }
            ]
        }))
        .unwrap()
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn writes_every_file() {
        let dir = scratch_dir("snapshot_all");
        let options = SnapshotOptions::from(&CodexConfig::default());
        let summary = write_snapshot(&document(), &dir, &options).unwrap();

        assert_eq!(summary.champions, Some(2));
        assert_eq!(summary.traits, Some(1));
        assert_eq!(summary.augments, 2);
        assert_eq!(summary.items, 2);
        assert_eq!(summary.files.len(), 6);

        let champions = read_json(&dir.join("set16-champions.json"));
        assert_eq!(champions[0]["name"], "Garen");
        assert_eq!(champions[1]["apiName"], "TFT16_Zed");

        let traits = read_json(&dir.join("set16-traits.json"));
        assert_eq!(traits[0]["effects"][0]["minUnits"], 2);
        assert_eq!(traits[0]["effects"][0]["variables"]["Armor"], 20);

        let augments = read_json(&dir.join("set16-augments.json"));
        assert_eq!(augments[1]["effects"]["AS"], 10);
        assert_eq!(augments[0]["associatedTraits"], json!([]));

        let names = fs::read_to_string(dir.join("set16-augment-names.txt")).unwrap();
        assert_eq!(names, "Anvil\nzeal");

        let items = read_json(&dir.join(ITEMS_FILE));
        assert_eq!(items[0]["name"], "B.F. Sword");
        assert_eq!(items[1]["composition"].as_array().unwrap().len(), 2);

        let full = read_json(&dir.join(FULL_DATA_FILE));
        assert_eq!(full["setData"].as_array().unwrap().len(), 2);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_exact_set_skips_set_files() {
        let dir = scratch_dir("snapshot_missing");
        let options = SnapshotOptions {
            target_set: 16,
            mutator: "TFTSet16_PVE".to_string(),
        };
        let summary = write_snapshot(&document(), &dir, &options).unwrap();

        assert_eq!(summary.champions, None);
        assert!(!dir.join("set16-champions.json").exists());
        assert_eq!(summary.augments, 2);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_raw_rejects_invalid_json() {
        let dir = scratch_dir("snapshot_raw");
        let path = dir.join("raw.json");

        assert!(matches!(write_raw(b"{oops", &path), Err(SnapshotError::Json(_))));
        assert!(!path.exists());

        assert_eq!(write_raw(b"{\"items\": []}", &path).unwrap(), 13);
        assert_eq!(fs::read(&path).unwrap(), b"{\"items\": []}");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn full_data_keeps_upstream_key_order() {
        let dir = scratch_dir("snapshot_order");
        let body = br#"{"setData": [{"number": 16, "mutator": "TFTSet16", "name": "Set16"}], "items": [], "zeta": {"b": 1, "a": 2}}"#;
        write_snapshot(body, &dir, &SnapshotOptions::from(&CodexConfig::default())).unwrap();

        let text = fs::read_to_string(dir.join(FULL_DATA_FILE)).unwrap();
        let pos = |key: &str| text.find(key).unwrap();
        assert!(pos("\"setData\"") < pos("\"items\""));
        assert!(pos("\"items\"") < pos("\"zeta\""));
        assert!(pos("\"b\"") < pos("\"a\""));
        assert!(pos("\"number\"") < pos("\"mutator\""));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn set_stats_count_the_exact_set_unfiltered() {
        let doc: RawDocument = serde_json::from_slice(&document()).unwrap();
        let stats = set_stats(&doc, &SnapshotOptions::from(&CodexConfig::default()));
        assert_eq!(
            stats,
            Some(SetStats {
                champions: 3,
                traits: 2,
                augments: 0,
            })
        );

        let options = SnapshotOptions {
            target_set: 16,
            mutator: "TFTSet16_PVE".to_string(),
        };
        assert_eq!(set_stats(&doc, &options), None);
        assert_eq!(set_stats(&RawDocument::default(), &options), None);
    }
}
