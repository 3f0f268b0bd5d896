use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Name of the config file looked up in the data directory
pub const CONFIG_FILE: &str = "stint.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load the configuration.
///
/// An explicit path must exist. Otherwise `stint.toml` in the data directory
/// is used if present, and built-in defaults if not.
pub fn load_config(explicit: Option<&Path>, data_dir: &Path) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = data_dir.join(CONFIG_FILE);
            if !candidate.exists() {
                tracing::debug!("no config file, using defaults");
                return Ok(Config::default());
            }
            candidate
        }
    };

    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_absent() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.store.prefix, "todo");
    }

    #[test]
    fn reads_file_in_data_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[display]\ncompleted_limit = 25\n",
        )
        .unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.display.completed_limit, 25);
    }

    #[test]
    fn explicit_path_must_exist() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("elsewhere.toml");
        let err = load_config(Some(&missing), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[display\ncompleted_limit = ").unwrap();
        let err = load_config(None, tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("stint.toml"));
    }

    #[test]
    fn wrong_type_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[display]\ncompleted_limit = \"ten\"\n",
        )
        .unwrap();
        assert!(load_config(None, tmp.path()).is_err());
    }
}
