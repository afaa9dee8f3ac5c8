//! Fungible asset type tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type tag of a fungible asset, e.g. `"SUI"` or `"0x2::sui::SUI"`.
///
/// Compared by exact string equality; no normalisation is applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetType(String);

impl AssetType {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AssetType {
    fn from(s: String) -> Self {
        Self(s)
    }
}
