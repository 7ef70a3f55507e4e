//! Export settings.

use nodal_core::ProductType;
use serde::{Deserialize, Serialize};

fn default_directory() -> String {
    String::from(".")
}

fn default_focal_mechanism_file_name() -> String {
    ProductType::FocalMechanism.default_file_name().to_string()
}

fn default_moment_tensor_file_name() -> String {
    ProductType::MomentTensor.default_file_name().to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory CSV exports are written into.
    #[serde(default = "default_directory")]
    pub directory: String,

    #[serde(default = "default_focal_mechanism_file_name")]
    pub focal_mechanism_file_name: String,

    #[serde(default = "default_moment_tensor_file_name")]
    pub moment_tensor_file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            focal_mechanism_file_name: default_focal_mechanism_file_name(),
            moment_tensor_file_name: default_moment_tensor_file_name(),
        }
    }
}

impl ExportConfig {
    /// Initial export file name (without `.csv`) for a product type.
    #[must_use]
    pub fn file_name_for(&self, product_type: ProductType) -> &str {
        match product_type {
            ProductType::FocalMechanism => &self.focal_mechanism_file_name,
            ProductType::MomentTensor => &self.moment_tensor_file_name,
        }
    }
}
