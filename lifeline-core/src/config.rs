//! Global lifeline configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use crate::error::{LifelineError, LifelineResult};

/// Global configuration at ~/.config/lifeline/config.toml
///
/// Only one knob today: which timeline document to load when none is
/// passed on the command line. Absent file or absent key means the
/// built-in sample timeline is used.
#[derive(Deserialize, Clone, Default)]
pub struct GlobalConfig {
    pub timeline: Option<PathBuf>,
}

impl GlobalConfig {
    pub fn config_path() -> LifelineResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LifelineError::Config("Could not determine config directory".into()))?
            .join("lifeline");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> LifelineResult<GlobalConfig> {
        let config_path = Self::config_path()?;

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| LifelineError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| LifelineError::Config(e.to_string()))?;

        Ok(config)
    }
}
