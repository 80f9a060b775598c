pub mod blacklist;
pub mod collate;
pub mod config;
pub mod ddragon;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod query;
pub mod raw;
pub mod snapshot;
pub mod store;
pub mod tier;


// Re-exports for convenience
pub use blacklist::Blacklist;
pub use config::{ConfigError, load_config, save_config};
pub use ddragon::DataDragonClient;
pub use error::{Error, Result};
pub use fetch::{BytesSource, CommunityDragonClient, DocumentSource, FetchError};
pub use normalize::{NormalizeError, normalize};
pub use query::{Tab, TabView, ViewQuery};
pub use raw::RawDocument;
pub use snapshot::{SnapshotError, SnapshotOptions, SnapshotSummary, write_raw, write_snapshot};
pub use store::{LoadState, SetViewStore};
