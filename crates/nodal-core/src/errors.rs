//! Cross-cutting error types for nodal.
//!
//! Network and configuration errors live in their own crates
//! (`CatalogError`, `ConfigError`); everything converges on `anyhow` in the
//! CLI binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The product-type selector did not name a supported product.
    #[error("unsupported product type: {0}")]
    UnsupportedProductType(String),

    /// An export file name cannot be used as-is.
    #[error("invalid export file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },

    /// CSV serialization or parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer could not be flushed into its buffer.
    #[error("CSV buffer error: {0}")]
    Buffer(String),

    /// A parsed CSV did not carry the expected header row.
    #[error("unexpected CSV header: {0}")]
    Header(String),
}
