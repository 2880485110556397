//! Global dongnae configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DongnaeError, DongnaeResult};

static DEFAULT_DATA_DIR: &str = "~/dongnae";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Global configuration at ~/.config/dongnae/config.toml
///
/// `programs_source` / `orgs_source` may be a file path or an http(s) URL;
/// when unset, the data files are read from `data_dir`.
#[derive(Serialize, Deserialize, Clone)]
pub struct DongnaeConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub programs_source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orgs_source: Option<String>,
}

impl DongnaeConfig {
    pub fn config_path() -> DongnaeResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DongnaeError::Config("Could not determine config directory".into()))?
            .join("dongnae");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/dongnae/config.toml
    pub fn save(&self) -> DongnaeResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| DongnaeError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| DongnaeError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> DongnaeResult<()> {
        let contents = format!(
            "\
# dongnae configuration

# Where the schedule/directory JSON files live:
# data_dir = \"{}\"

# Override either data source with a path or URL:
# programs_source = \"https://example.org/data/programs.seoul.json\"
# orgs_source = \"https://example.org/data/orgs.seoul.json\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DongnaeError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DongnaeError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values_are_omitted_when_saved() {
        let config = DongnaeConfig {
            data_dir: default_data_dir(),
            programs_source: None,
            orgs_source: None,
        };

        let content = toml::to_string_pretty(&config).unwrap();
        assert!(!content.contains("data_dir"));
        assert!(!content.contains("programs_source"));
        assert!(!content.contains("orgs_source"));
    }

    #[test]
    fn test_saved_config_round_trips() {
        let config = DongnaeConfig {
            data_dir: PathBuf::from("/srv/dongnae"),
            programs_source: Some("https://example.org/programs.seoul.json".to_string()),
            orgs_source: None,
        };

        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: DongnaeConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.data_dir, PathBuf::from("/srv/dongnae"));
        assert_eq!(parsed.programs_source, config.programs_source);
        assert_eq!(parsed.orgs_source, None);
    }

    #[test]
    fn test_empty_file_falls_back_to_defaults() {
        let parsed: DongnaeConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.data_dir, default_data_dir());
        assert!(parsed.programs_source.is_none());
        assert!(parsed.orgs_source.is_none());
    }
}
