//! Current view state shared between the loader and readers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tactidex_types::{CodexConfig, SetView};
use tokio::sync::RwLock;

use crate::blacklist::Blacklist;
use crate::fetch::DocumentSource;
use crate::normalize::normalize;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Error(String),
    Ready(Arc<SetView>),
}

impl LoadState {
    pub fn view(&self) -> Option<&Arc<SetView>> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Holds the last loaded [`SetView`]. Readers always see a complete state;
/// a reload replaces it in one write.
pub struct SetViewStore {
    config: CodexConfig,
    blacklist: Blacklist,
    state: RwLock<LoadState>,
    /// Bumped by every reload; only the newest reload may publish
    generation: AtomicU64,
}

impl SetViewStore {
    pub fn new(config: CodexConfig) -> Self {
        let blacklist = Blacklist::with_extra(config.extra_blacklist.iter().cloned());
        Self {
            config,
            blacklist,
            state: RwLock::new(LoadState::Loading),
            generation: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &CodexConfig {
        &self.config
    }

    pub async fn snapshot(&self) -> LoadState {
        self.state.read().await.clone()
    }

    /// Fetch once, normalize, and publish the outcome.
    ///
    /// Errors end up in the state rather than being returned. The returned
    /// value is the state published afterwards: this reload's outcome, or the
    /// newer one if another reload started meanwhile (the stale result is
    /// dropped).
    pub async fn reload<S: DocumentSource>(&self, source: &S) -> LoadState {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.write().await = LoadState::Loading;

        let next = match source.fetch_document().await {
            Ok(doc) => match normalize(&doc, &self.config, &self.blacklist) {
                Ok(view) => {
                    tracing::info!(
                        set = view.set_number,
                        champions = view.champions.len(),
                        augments = view.augments.len(),
                        "Set data loaded"
                    );
                    LoadState::Ready(Arc::new(view))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Document has no usable set");
                    LoadState::Error(e.to_string())
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch set data");
                LoadState::Error(e.to_string())
            }
        };

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding result of a superseded reload");
            return state.clone();
        }
        *state = next.clone();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{BytesSource, FetchError, parse_document};
    use crate::raw::RawDocument;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    struct CountingSource {
        calls: AtomicUsize,
        status: Option<u16>,
    }

    impl DocumentSource for CountingSource {
        async fn fetch_document(&self) -> Result<RawDocument, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.status {
                Some(code) => Err(FetchError::Status(code)),
                None => Ok(RawDocument::default()),
            }
        }
    }

    /// Blocks until `gate` is notified
    struct GatedSource {
        gate: Notify,
        bytes: Vec<u8>,
    }

    impl DocumentSource for GatedSource {
        async fn fetch_document(&self) -> Result<RawDocument, FetchError> {
            self.gate.notified().await;
            parse_document(&self.bytes)
        }
    }

    const DOC: &[u8] = br#"{
        "items": [{ "apiName": "TFT16_Augment_Tome", "name": "Tome" }],
        "setData": [{
            "number": 16, "mutator": "TFTSet16", "name": "Set16",
            "augments": ["TFT16_Augment_Tome"],
            "champions": [{ "apiName": "TFT16_Ahri", "name": "Ahri", "cost": 3, "traits": ["Arcanist"] }],
            "traits": []
        }]
    }"#;

    #[tokio::test]
    async fn starts_loading() {
        let store = SetViewStore::new(CodexConfig::default());
        assert!(store.snapshot().await.is_loading());
    }

    #[tokio::test]
    async fn reload_publishes_ready_view() {
        let store = SetViewStore::new(CodexConfig::default());
        let state = store.reload(&BytesSource(DOC.to_vec())).await;

        let view = state.view().expect("ready");
        assert_eq!(view.set_name, "Lore and Legends");
        assert_eq!(view.champions.len(), 1);
        assert_eq!(view.augments.len(), 1);
        assert_eq!(store.snapshot().await, state);
    }

    #[tokio::test]
    async fn extra_blacklist_applies() {
        let config = CodexConfig {
            extra_blacklist: vec!["TFT16_Augment_Tome".to_string()],
            ..CodexConfig::default()
        };
        let store = SetViewStore::new(config);
        let state = store.reload(&BytesSource(DOC.to_vec())).await;
        assert!(state.view().expect("ready").augments.is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_is_a_single_attempt() {
        let store = SetViewStore::new(CodexConfig::default());
        let source = CountingSource {
            calls: AtomicUsize::new(0),
            status: Some(503),
        };
        let state = store.reload(&source).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(state, LoadState::Error("HTTP error: 503".to_string()));
    }

    #[tokio::test]
    async fn missing_sets_surface_as_error() {
        let store = SetViewStore::new(CodexConfig::default());
        let source = CountingSource {
            calls: AtomicUsize::new(0),
            status: None,
        };
        assert_eq!(store.reload(&source).await, LoadState::Error("no set data".to_string()));
    }

    #[tokio::test]
    async fn failed_reload_replaces_previous_view() {
        let store = SetViewStore::new(CodexConfig::default());
        store.reload(&BytesSource(DOC.to_vec())).await;
        store.reload(&BytesSource(b"not json".to_vec())).await;
        assert!(matches!(store.snapshot().await, LoadState::Error(_)));
    }

    #[tokio::test]
    async fn superseded_reload_does_not_publish() {
        let store = SetViewStore::new(CodexConfig::default());
        let slow = GatedSource {
            gate: Notify::new(),
            bytes: b"not json".to_vec(),
        };
        let fast = BytesSource(DOC.to_vec());

        // The slow reload starts first but finishes after the fast one
        let (stale, fresh) = tokio::join!(store.reload(&slow), async {
            let state = store.reload(&fast).await;
            slow.gate.notify_one();
            state
        });

        assert!(fresh.view().is_some());
        assert_eq!(stale, fresh);
        assert_eq!(store.snapshot().await, fresh);
    }
}
