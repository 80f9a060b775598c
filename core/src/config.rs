//! Loading and saving [`CodexConfig`].
//!
//! The default location is managed by confy (`tactidex/default-config.toml`
//! in the platform config dir). An explicit path is read and written as plain
//! TOML.

use std::fs;
use std::path::{Path, PathBuf};

use tactidex_types::CodexConfig;
use thiserror::Error;

pub const APP_NAME: &str = "tactidex";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Load(#[from] confy::ConfyError),
}

/// Config from `path`, or from the default location when `None`.
/// A missing file yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<CodexConfig, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => Ok(confy::load(APP_NAME, None)?),
    }
}

pub fn load_from_path(path: &Path) -> Result<CodexConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(CodexConfig::default());
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

pub fn save_config(config: &CodexConfig, path: Option<&Path>) -> Result<(), ConfigError> {
    let Some(path) = path else {
        confy::store(APP_NAME, None, config)?;
        return Ok(());
    };

    let contents = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Where the config lives: `path` itself, or confy's default file.
pub fn config_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(confy::get_configuration_file_path(APP_NAME, None)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tactidex_config_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = scratch_file("absent.toml");
        assert_eq!(load_config(Some(&path)).unwrap(), CodexConfig::default());
    }

    #[test]
    fn save_then_load() {
        let path = scratch_file("saved.toml");
        let config = CodexConfig {
            target_set: 15,
            extra_blacklist: vec!["TFT15_Augment_Bad".to_string()],
            ..CodexConfig::default()
        };
        save_config(&config, Some(&path)).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let path = scratch_file("broken.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "target_set = \"sixteen\"").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn explicit_path_is_reported() {
        let path = scratch_file("here.toml");
        assert_eq!(config_path(Some(&path)).unwrap(), path);
    }
}
