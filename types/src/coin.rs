//! Owned coin object snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::asset::AssetType;

/// Opaque identifier of an on-chain object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A coin object as last observed on-chain.
///
/// Snapshots are immutable: a resync produces new `CoinObject`s rather than
/// updating existing ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinObject {
    pub id: ObjectId,
    pub asset_type: AssetType,
    pub balance: u64,
}

impl CoinObject {
    pub fn new(id: impl Into<ObjectId>, asset_type: impl Into<AssetType>, balance: u64) -> Self {
        Self {
            id: id.into(),
            asset_type: asset_type.into(),
            balance,
        }
    }

    /// Whether this coin holds the given asset.
    pub fn is_asset(&self, asset_type: &AssetType) -> bool {
        &self.asset_type == asset_type
    }
}
