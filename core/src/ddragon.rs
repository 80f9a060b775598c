//! Alternate augment list from Riot's Data Dragon.
//!
//! Data Dragon publishes names and art but no rarity, so every augment from
//! this source is Silver.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;
use tactidex_types::{Augment, AugmentTier, CodexConfig};

use crate::collate::locale_compare;
use crate::fetch::FetchError;

const DDRAGON_CDN: &str = "https://ddragon.leagueoflegends.com/cdn";

#[derive(Debug, Default, Deserialize)]
pub struct DDragonResponse {
    #[serde(default)]
    pub data: BTreeMap<String, DDragonAugment>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DDragonAugment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub image: Option<DDragonImage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DDragonImage {
    #[serde(default)]
    pub full: String,
}

#[derive(Debug, Clone)]
pub struct DataDragonClient {
    http: reqwest::Client,
    version: String,
    target_set: i64,
    timeout: Option<Duration>,
}

impl DataDragonClient {
    pub fn from_config(config: &CodexConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            version: config.ddragon_version.clone(),
            target_set: config.target_set,
            timeout: config.request_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn augments_url(&self) -> String {
        format!("{DDRAGON_CDN}/{}/data/en_US/tft-augments.json", self.version)
    }

    /// Generic and current-set augments, sorted by name.
    ///
    /// Failures are logged and yield an empty list.
    pub async fn fetch_augments(&self) -> Vec<Augment> {
        match self.try_fetch().await {
            Ok(response) => augments_from_response(response, &self.version, self.target_set),
            Err(e) => {
                tracing::error!(url = %self.augments_url(), error = %e, "Failed to fetch Data Dragon augments");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> Result<DDragonResponse, FetchError> {
        let mut request = self.http.get(self.augments_url());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

pub fn augments_from_response(response: DDragonResponse, version: &str, target_set: i64) -> Vec<Augment> {
    let set_prefix = format!("TFT{target_set}_");
    let mut augments: Vec<Augment> = response
        .data
        .into_iter()
        .filter(|(key, _)| key.starts_with("TFT_") || key.starts_with(&set_prefix))
        .map(|(key, aug)| Augment {
            api_name: key,
            name: aug.name,
            desc: aug.desc.unwrap_or_default(),
            icon: aug
                .image
                .filter(|img| !img.full.is_empty())
                .map(|img| format!("{DDRAGON_CDN}/{version}/img/tft-augment/{}", img.full))
                .unwrap_or_default(),
            tier: AugmentTier::Silver,
            associated_traits: Vec::new(),
            effects: BTreeMap::new(),
        })
        .collect();

    augments.sort_by(|a, b| locale_compare(&a.name, &b.name));
    augments
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response() -> DDragonResponse {
        serde_json::from_value(json!({
            "type": "tft-augments",
            "data": {
                "TFT16_Augment_Zeal": { "id": "TFT16_Augment_Zeal", "name": "zeal", "image": { "full": "Zeal.png" } },
                "TFT_Augment_Anvil": { "id": "TFT_Augment_Anvil", "name": "Anvil", "desc": "Gain an anvil" },
                "TFT15_Augment_Old": { "id": "TFT15_Augment_Old", "name": "Old" },
                "TFT9_Augment_Legacy": { "id": "TFT9_Augment_Legacy", "name": "Legacy" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn keeps_generic_and_current_set_keys() {
        let augments = augments_from_response(response(), "16.4.1", 16);
        let names: Vec<&str> = augments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Anvil", "zeal"]);
        assert!(augments.iter().all(|a| a.tier == AugmentTier::Silver));
    }

    #[test]
    fn icon_points_at_cdn() {
        let augments = augments_from_response(response(), "16.4.1", 16);
        assert_eq!(
            augments[1].icon,
            "https://ddragon.leagueoflegends.com/cdn/16.4.1/img/tft-augment/Zeal.png"
        );
        assert_eq!(augments[0].icon, "");
        assert_eq!(augments[0].desc, "Gain an anvil");
    }

    #[test]
    fn url_uses_configured_version() {
        let config = CodexConfig {
            ddragon_version: "15.1.1".to_string(),
            ..CodexConfig::default()
        };
        assert_eq!(
            DataDragonClient::from_config(&config).augments_url(),
            "https://ddragon.leagueoflegends.com/cdn/15.1.1/data/en_US/tft-augments.json"
        );
    }
}
