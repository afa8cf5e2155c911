use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_DATA_DIR, DEFAULT_IMPERIAL_DIR, DEFAULT_METRIC_DIR, SETTINGS_ENV_PREFIX, SETTINGS_FILE,
};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Default locations for both tools.
///
/// Layered as built-in defaults, then `theatre-data.toml` (or an explicit
/// file), then `THEATRE_DATA_*` environment variables. CLI flags win over all.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct Settings {
    #[validate(length(min = 1))]
    pub data_dir: String,

    #[validate(length(min = 1))]
    pub metric_dir: String,

    #[validate(length(min = 1))]
    pub imperial_dir: String,
}

impl Settings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let builder = Config::builder()
            .set_default("data_dir", DEFAULT_DATA_DIR)?
            .set_default("metric_dir", DEFAULT_METRIC_DIR)?
            .set_default("imperial_dir", DEFAULT_IMPERIAL_DIR)?;

        let builder = match config_file {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(SETTINGS_FILE).required(false)),
        };

        let settings: Settings = builder
            .add_source(Environment::with_prefix(SETTINGS_ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        tracing::debug!(?settings, "loaded settings");

        Ok(settings)
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn metric_dir(&self) -> PathBuf {
        PathBuf::from(&self.metric_dir)
    }

    pub fn imperial_dir(&self) -> PathBuf {
        PathBuf::from(&self.imperial_dir)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            metric_dir: DEFAULT_METRIC_DIR.to_string(),
            imperial_dir: DEFAULT_IMPERIAL_DIR.to_string(),
        }
    }
}
