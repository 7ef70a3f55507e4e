//! # nodal-config
//!
//! Layered configuration loading for nodal using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NODAL_*` prefix, `__` as separator)
//! 2. Project-level `.nodal/config.toml`
//! 3. User-level `~/.config/nodal/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `NODAL_CATALOG__BASE_URL` -> `catalog.base_url`,
//! `NODAL_EXPORT__DIRECTORY` -> `export.directory`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use nodal_config::NodalConfig;
//!
//! let config = NodalConfig::load_with_dotenv().expect("config");
//! println!("catalog: {}", config.catalog.base_url);
//! ```

mod catalog;
mod error;
mod export;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use export::ExportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NodalConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl NodalConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or the merged
    /// catalog settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.catalog.validate()?;
        Ok(config)
    }

    /// Load configuration after applying a `.env` file from the current
    /// directory, if one exists.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".nodal/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("NODAL_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nodal").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NodalConfig::default();
        assert!(config.catalog.validate().is_ok());
        assert_eq!(config.export.directory, ".");
    }

    #[test]
    fn figment_builds_without_files() {
        let config: NodalConfig = NodalConfig::figment()
            .extract()
            .expect("should extract defaults");
        assert!(config.catalog.base_url.starts_with("https://"));
    }
}
