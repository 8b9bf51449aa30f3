//! Configuration loader with multi-source merging

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use followup_core_rs::PricingRates;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = "followup.toml";

/// Environment variable prefix (`FOLLOWUP_PRICING_TELEPHONY_PER_MINUTE=...`)
pub const ENV_PREFIX: &str = "FOLLOWUP_";

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub pricing: PricingRates,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `FOLLOWUP_PRICING_<RATE>` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./followup.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
        }

        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        let project = PathBuf::from(PROJECT_CONFIG_FILE);
        if project.exists() {
            figment = figment.merge(Toml::file(&project));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Env keys keep their original casing; `PRICING_X` nests as `pricing.x`
        figment.merge(Env::prefixed(ENV_PREFIX).map(|key| {
            key.as_str()
                .to_ascii_lowercase()
                .replacen("pricing_", "pricing.", 1)
                .into()
        }))
    }
}
