use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use nodal_catalog::{CatalogClient, ClientOptions};
use nodal_config::{CatalogConfig, NodalConfig};
use nodal_core::{ProductType, Session};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: NodalConfig,
    pub catalog: CatalogClient,
}

impl AppContext {
    pub fn init(config: NodalConfig) -> anyhow::Result<Self> {
        let catalog = CatalogClient::new(client_options(&config.catalog))
            .context("failed to build catalog HTTP client")?;
        Ok(Self { config, catalog })
    }

    /// A fresh session for `product_type`, named after the configured export file.
    #[must_use]
    pub fn new_session(&self, product_type: ProductType) -> Session {
        Session::with_file_name(product_type, self.config.export.file_name_for(product_type))
    }

    /// Export directory: the command-line override, else `export.directory`.
    #[must_use]
    pub fn export_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir.map_or_else(
            || PathBuf::from(&self.config.export.directory),
            Path::to_path_buf,
        )
    }
}

fn client_options(config: &CatalogConfig) -> ClientOptions {
    ClientOptions {
        base_url: config.base_url.clone(),
        user_agent: config.user_agent.clone(),
        timeout: Duration::from_secs(config.timeout_secs),
        page_size: config.page_size,
    }
}
