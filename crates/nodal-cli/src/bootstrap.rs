use anyhow::Context;
use nodal_config::NodalConfig;

/// Load layered configuration, applying a `.env` from the current directory first.
pub fn load_config() -> anyhow::Result<NodalConfig> {
    let config = NodalConfig::load_with_dotenv().context("failed to load nodal configuration")?;
    tracing::debug!(
        base_url = %config.catalog.base_url,
        export_dir = %config.export.directory,
        "configuration loaded"
    );
    Ok(config)
}
