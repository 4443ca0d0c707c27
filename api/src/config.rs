use std::path::PathBuf;

use eyre::{Context as _, Result};
use serde::{Deserialize, Serialize};

fn default_dataset() -> PathBuf {
    PathBuf::from("patient_dataset.json")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub env: Environment,

    /// Path of the JSON file holding the patient collection.
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,
}

impl Configuration {
    /// Loads the configuration from environment variables, and configuration files.
    pub fn load() -> Result<Self> {
        let mut cfg =
            config::Config::builder().add_source(config::Environment::with_prefix("PATIENTS"));

        if let Ok(env) = std::env::var("PATIENTS_CONFIG_FILE") {
            cfg = cfg.add_source(config::File::with_name(&env));
        }

        let cfg = cfg
            .build()
            .wrap_err("failed to build config")?
            .try_deserialize::<Self>()
            .wrap_err("failed to deserialize config")?;

        Ok(cfg)
    }

    #[inline]
    pub fn is_production(&self) -> bool {
        self.env == Environment::Production
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Environment {
    #[serde(rename = "development")]
    Development,

    #[serde(rename = "production")]
    #[default]
    Production,
}
