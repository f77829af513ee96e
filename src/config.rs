use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
    #[error("DEFAULT_ITEMS_PER_PAGE and MAX_ITEMS_PER_PAGE must be greater than zero")]
    ZeroPageSize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub default_items_per_page: u64,
    pub max_items_per_page: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_items_per_page: 10,
            max_items_per_page: 100,
            log_level: "info".to_string(),
        }
    }
}

fn var_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::Invalid { name, value }),
        },
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let config = Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: var_or("PORT", defaults.port)?,
            default_items_per_page: var_or("DEFAULT_ITEMS_PER_PAGE", defaults.default_items_per_page)?,
            max_items_per_page: var_or("MAX_ITEMS_PER_PAGE", defaults.max_items_per_page)?,
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_items_per_page == 0 || self.max_items_per_page == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }

    /// Default page size, never above the configured maximum.
    pub fn page_size(&self) -> u64 {
        self.default_items_per_page.min(self.max_items_per_page)
    }
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Installs `config` as the process-wide configuration. The first call wins.
pub fn init_config(config: Config) -> &'static Config {
    CONFIG.get_or_init(|| config)
}

/// Process-wide configuration, falling back to defaults when never initialised.
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}
