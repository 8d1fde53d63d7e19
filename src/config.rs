use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::NicheCatalog;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub response_delay_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_root: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            response_delay_ms: 1500,
            web_root: None,
        }
    }
}

impl ServerConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub server: ServerConfig,
    pub niches: BTreeMap<String, Vec<String>>,
}

impl GeneratorConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                Self::from_toml(&contents)?
            } else {
                GeneratorConfig::default()
            }
        } else {
            GeneratorConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        let config: GeneratorConfig = toml::from_str(contents)
            .map_err(|err| format!("failed to parse config: {}", err))?;
        config.validate()?;
        Ok(config)
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    pub fn catalog(&self) -> NicheCatalog {
        NicheCatalog::with_extra(&self.niches)
    }

    fn validate(&self) -> Result<(), String> {
        for (niche, topics) in &self.niches {
            if niche.trim().is_empty() {
                return Err("niche names must not be empty".to_string());
            }
            if topics.is_empty() {
                return Err(format!("niche `{}` has no topics", niche));
            }
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("IDEAGEN_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = env::var("IDEAGEN_PORT") {
            if let Ok(value) = port.parse::<u16>() {
                self.server.port = value;
            }
        }
        if let Ok(delay) = env::var("IDEAGEN_RESPONSE_DELAY_MS") {
            if let Ok(value) = delay.parse::<u64>() {
                self.server.response_delay_ms = value;
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    env::var("IDEAGEN_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/ideagen.toml")))
}
