use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration, read from a TOML file at the platform config dir.
///
/// Both fields are optional; a missing config file is not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the data service, e.g. `http://localhost:8080`
    #[serde(default)]
    pub api_base: Option<String>,

    /// JSON snapshot file for offline use
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Load from the default location (`<config dir>/trackdeck/config.toml`).
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("trackdeck").join("config.toml"))
}

/// Resolve the API base URL by priority:
/// 1. Explicit CLI flag
/// 2. TRACKDECK_API_BASE environment variable
/// 3. Config file
pub fn resolve_api_base(flag: Option<&str>, config: &Config) -> Option<String> {
    if let Some(base) = flag {
        return Some(base.to_string());
    }
    if let Ok(base) = std::env::var("TRACKDECK_API_BASE")
        && !base.is_empty()
    {
        return Some(base);
    }
    config.api_base.clone()
}

/// Resolve the offline data file by priority:
/// 1. Explicit CLI flag
/// 2. TRACKDECK_DATA environment variable
/// 3. Config file
pub fn resolve_data_file(flag: Option<&Path>, config: &Config) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var("TRACKDECK_DATA")
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    config.data_file.clone()
}

/// Fail with a usable hint when neither source is configured.
pub fn require_source(api_base: &Option<String>, data_file: &Option<PathBuf>) -> Result<()> {
    if api_base.is_none() && data_file.is_none() {
        return Err(Error::Config(
            "no data source configured: pass --api-base or --data, set TRACKDECK_API_BASE or \
             TRACKDECK_DATA, or add api_base/data_file to config.toml"
                .to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/trackdeck/config.toml")).unwrap();
        assert!(config.api_base.is_none());
        assert!(config.data_file.is_none());
    }

    #[test]
    fn parses_toml_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base = \"http://localhost:8080\"").unwrap();
        writeln!(file, "data_file = \"/tmp/snapshot.json\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api_base.as_deref(), Some("http://localhost:8080"));
        assert_eq!(
            config.data_file.as_deref(),
            Some(Path::new("/tmp/snapshot.json"))
        );
    }

    #[test]
    fn flag_wins_over_config() {
        let config = Config {
            api_base: Some("http://from-config".to_string()),
            data_file: None,
        };
        assert_eq!(
            resolve_api_base(Some("http://from-flag"), &config).as_deref(),
            Some("http://from-flag")
        );
    }

    #[test]
    fn no_source_is_a_config_error() {
        let err = require_source(&None, &None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
