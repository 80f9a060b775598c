use thiserror::Error;

use crate::config::ConfigError;
use crate::fetch::FetchError;
use crate::normalize::NormalizeError;
use crate::snapshot::SnapshotError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

pub type Result<T> = std::result::Result<T, Error>;
