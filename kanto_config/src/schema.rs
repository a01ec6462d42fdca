use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "ApiConfig::default_base_url")]
    pub base_url: String,
    /// Upper bound on entries requested from the listing endpoint.
    #[serde(default = "ApiConfig::default_limit")]
    pub limit: usize,
    #[serde(default = "ApiConfig::default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            limit: Self::default_limit(),
            user_agent: Self::default_user_agent(),
        }
    }
}

impl ApiConfig {
    fn default_base_url() -> String {
        "https://pokeapi.co/api/v2".to_string()
    }

    const fn default_limit() -> usize {
        999
    }

    fn default_user_agent() -> String {
        format!("kanto/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("kanto"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Loads `~/kanto/config.json`, falling back to defaults when it is absent.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config at {}: {e}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        let config_path = config_dir.join("config.json");
        Self::write_default(&config_path)?;
        Ok(config_path)
    }

    /// Writes the default config to `path`. Refuses to overwrite.
    pub fn write_default(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let content = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
