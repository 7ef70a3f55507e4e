//! Catalog product types that carry nodal-plane solutions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Product-type selector for a search.
///
/// Both products publish the same `nodal-plane-{1,2}-{strike,dip,rake}`
/// properties, so the extraction path is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    FocalMechanism,
    MomentTensor,
}

impl ProductType {
    /// Product type name as used by the catalog service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FocalMechanism => "focal-mechanism",
            Self::MomentTensor => "moment-tensor",
        }
    }

    /// Export file name (without extension) offered before the user edits it.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::FocalMechanism => "sismos_mecanismos_focales",
            Self::MomentTensor => "sismos_tensores_momento",
        }
    }

    /// The other product type.
    #[must_use]
    pub const fn sibling(self) -> Self {
        match self {
            Self::FocalMechanism => Self::MomentTensor,
            Self::MomentTensor => Self::FocalMechanism,
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "focal-mechanism" | "fm" => Ok(Self::FocalMechanism),
            "moment-tensor" | "mt" => Ok(Self::MomentTensor),
            _ => Err(CoreError::UnsupportedProductType(s.to_string())),
        }
    }
}
