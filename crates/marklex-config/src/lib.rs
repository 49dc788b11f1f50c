use marklex_engine::LexOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "MARKLEX_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config file at {config_path}: limits.{field} must be greater than zero")]
    ZeroLimit {
        config_path: PathBuf,
        field: &'static str,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Resource limits handed to every lexer built from this config.
    #[serde(default)]
    pub limits: LexOptions,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if let Some(field) = config.zero_limit() {
            return Err(ConfigError::ZeroLimit {
                config_path: config_path.to_path_buf(),
                field,
            });
        }

        log::debug!("loaded config from {}: {:?}", config_path.display(), config.limits);
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$MARKLEX_CONFIG` when set, otherwise `~/.config/marklex/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::resolve_config_path(std::env::var(CONFIG_ENV).ok().as_deref())
    }

    fn resolve_config_path(override_path: Option<&str>) -> PathBuf {
        if let Some(path) = override_path.filter(|p| !p.is_empty()) {
            return Self::expand_path(path).unwrap_or_else(|| PathBuf::from(path));
        }
        let config_dir = shellexpand::tilde("~/.config/marklex");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &str) -> Option<PathBuf> {
        match shellexpand::full(path) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    fn zero_limit(&self) -> Option<&'static str> {
        let LexOptions {
            max_nesting_depth,
            max_tokens,
            max_input_bytes,
        } = self.limits;
        [
            ("max_nesting_depth", max_nesting_depth),
            ("max_tokens", max_tokens),
            ("max_input_bytes", max_input_bytes),
        ]
        .into_iter()
        .find_map(|(field, value)| (value == 0).then_some(field))
    }
}
