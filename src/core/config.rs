use crate::core::enrich::DEFAULT_BENCHMARK_SYMBOL;
use crate::core::market::DEFAULT_HISTORY_MONTHS;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AlphaVantageConfig {
    pub base_url: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
}

impl Default for AlphaVantageConfig {
    fn default() -> Self {
        AlphaVantageConfig {
            base_url: "https://www.alphavantage.co".to_string(),
            api_key: default_api_key(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub alpha_vantage: Option<AlphaVantageConfig>,
    /// Remote recommendation service, tried before the built-in catalog.
    pub backend: Option<BackendConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            alpha_vantage: Some(AlphaVantageConfig::default()),
            backend: None,
        }
    }
}

fn default_api_key() -> String {
    "demo".to_string()
}

fn default_benchmark_symbol() -> String {
    DEFAULT_BENCHMARK_SYMBOL.to_string()
}

fn default_history_months() -> usize {
    DEFAULT_HISTORY_MONTHS
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default = "default_benchmark_symbol")]
    pub benchmark_symbol: String,
    #[serde(default = "default_history_months")]
    pub history_months: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            benchmark_symbol: default_benchmark_symbol(),
            history_months: default_history_months(),
        }
    }
}

impl AppConfig {
    /// Loads the default config file, or built-in defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "fundwise", "fundwise")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Alpha Vantage settings, with the API key taken from the environment when set.
    pub fn alpha_vantage(&self) -> AlphaVantageConfig {
        self.alpha_vantage_with_key(std::env::var(API_KEY_ENV).ok())
    }

    /// Blank keys are ignored.
    fn alpha_vantage_with_key(&self, key_override: Option<String>) -> AlphaVantageConfig {
        let mut av = self.providers.alpha_vantage.clone().unwrap_or_default();
        if let Some(key) = key_override.filter(|key| !key.trim().is_empty()) {
            av.api_key = key;
        }
        av
    }
}
