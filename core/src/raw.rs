//! Upstream CommunityDragon TFT export schema.
//!
//! The export is loosely typed: fields go missing, arrays arrive as `null`,
//! and effect tables mix numbers with nulls. Every field here defaults instead
//! of failing so that one malformed entry never rejects the whole document.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treat an explicit `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keep only the numeric entries of an effect/variable table.
pub fn numeric_table(table: &BTreeMap<String, Value>) -> BTreeMap<String, f64> {
    table
        .iter()
        .filter_map(|(k, v)| v.as_f64().map(|n| (k.clone(), n)))
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    #[serde(default, deserialize_with = "nullable")]
    pub items: Vec<RawItem>,
    #[serde(default, deserialize_with = "nullable")]
    pub set_data: Vec<RawSet>,
}

/// One season sub-document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSet {
    /// Active augment apiNames; the authoritative augment list for this set
    #[serde(default)]
    pub augments: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub champions: Vec<RawChampion>,
    #[serde(default, deserialize_with = "nullable")]
    pub mutator: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub number: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub traits: Vec<RawTrait>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(default, deserialize_with = "nullable")]
    pub api_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub associated_traits: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub composition: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub desc: String,
    #[serde(default, deserialize_with = "nullable")]
    pub effects: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChampion {
    #[serde(default, deserialize_with = "nullable")]
    pub ability: RawAbility,
    #[serde(default, deserialize_with = "nullable")]
    pub api_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub cost: i32,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub stats: RawStats,
    #[serde(default, deserialize_with = "nullable")]
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAbility {
    #[serde(default, deserialize_with = "nullable")]
    pub desc: String,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub variables: Vec<RawAbilityVariable>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAbilityVariable {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub value: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStats {
    #[serde(default, deserialize_with = "nullable")]
    pub armor: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub attack_speed: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub crit_chance: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub crit_multiplier: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub damage: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub hp: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub initial_mana: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub magic_resist: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub mana: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub range: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrait {
    #[serde(default, deserialize_with = "nullable")]
    pub api_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub desc: String,
    #[serde(default, deserialize_with = "nullable")]
    pub effects: Vec<RawTraitEffect>,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTraitEffect {
    #[serde(default, deserialize_with = "nullable")]
    pub max_units: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub min_units: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub style: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub variables: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_fields_default() {
        let doc: RawDocument = serde_json::from_value(json!({
            "items": [
                { "apiName": "TFT_Item_BFSword", "name": "B.F. Sword", "composition": null, "desc": null },
                {}
            ],
            "setData": [
                { "number": 16, "mutator": "TFTSet16", "champions": null }
            ],
            "sets": { "16": { "name": "Set16" } }
        }))
        .unwrap();

        assert_eq!(doc.items.len(), 2);
        assert!(doc.items[0].composition.is_empty());
        assert_eq!(doc.items[0].desc, "");
        assert_eq!(doc.items[1].api_name, "");
        assert!(doc.set_data[0].champions.is_empty());
        assert!(doc.set_data[0].augments.is_none());
    }

    #[test]
    fn missing_set_data_is_empty() {
        let doc: RawDocument = serde_json::from_value(json!({ "items": null })).unwrap();
        assert!(doc.items.is_empty());
        assert!(doc.set_data.is_empty());
    }

    #[test]
    fn numeric_table_drops_non_numbers() {
        let table: BTreeMap<String, Value> = serde_json::from_value(json!({
            "AD": 15,
            "AS": 0.1,
            "Unknown": null,
            "Label": "text"
        }))
        .unwrap();
        let numeric = numeric_table(&table);
        assert_eq!(numeric.len(), 2);
        assert_eq!(numeric["AD"], 15.0);
        assert_eq!(numeric["AS"], 0.1);
    }
}
