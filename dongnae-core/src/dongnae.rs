//! Dongnae configuration loading and data-source resolution.

use std::path::PathBuf;

use config::{Config, File};

use crate::constants::{ORGS_FILE, PROGRAMS_FILE};
use crate::dongnae_config::DongnaeConfig;
use crate::error::{DongnaeError, DongnaeResult};

#[derive(Clone)]
pub struct Dongnae {
    config: DongnaeConfig,
}

impl Dongnae {
    pub fn load() -> DongnaeResult<Self> {
        let config_path = DongnaeConfig::config_path()?;

        if !config_path.exists() {
            DongnaeConfig::create_default_config(&config_path)?;
        }

        let config: DongnaeConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| DongnaeError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DongnaeError::Config(e.to_string()))?;

        Ok(Dongnae { config })
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Where the program schedule data comes from: the configured override,
    /// or the fixed file name under the data directory.
    pub fn programs_source(&self) -> String {
        match &self.config.programs_source {
            Some(source) => source.clone(),
            None => self.data_path().join(PROGRAMS_FILE).display().to_string(),
        }
    }

    /// Where the organization directory data comes from.
    pub fn orgs_source(&self) -> String {
        match &self.config.orgs_source {
            Some(source) => source.clone(),
            None => self.data_path().join(ORGS_FILE).display().to_string(),
        }
    }

    /// Point the config at a different data directory and persist it.
    pub fn set_data_dir(&mut self, path: &str) -> DongnaeResult<()> {
        self.config.data_dir = PathBuf::from(path);
        self.config.save()
    }
}
