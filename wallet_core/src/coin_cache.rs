//! Local snapshot of owned coin objects.
//!
//! The snapshot is replaced wholesale on every resync; individual coins are
//! never edited in place.

use std::sync::RwLock;

use coinpay_types::{AssetType, CoinObject};
use tracing::debug;

use crate::providers::CoinSnapshotProvider;

#[derive(Default)]
pub struct CoinCache {
    coins: RwLock<Vec<CoinObject>>,
}

impl CoinCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coins(coins: Vec<CoinObject>) -> Self {
        Self {
            coins: RwLock::new(coins),
        }
    }

    /// Supersede the whole snapshot.
    pub fn replace(&self, coins: Vec<CoinObject>) {
        debug!(count = coins.len(), "coin snapshot replaced");
        *self.coins.write().unwrap_or_else(|e| e.into_inner()) = coins;
    }

    /// Sum of balances for one asset, saturating at `u64::MAX`.
    pub fn total_balance(&self, asset_type: &AssetType) -> u64 {
        self.coins
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|c| c.is_asset(asset_type))
            .fold(0u64, |acc, c| acc.saturating_add(c.balance))
    }

    pub fn len(&self) -> usize {
        self.coins.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CoinSnapshotProvider for CoinCache {
    fn owned_coins(&self, asset_type: Option<&AssetType>) -> Vec<CoinObject> {
        let coins = self.coins.read().unwrap_or_else(|e| e.into_inner());
        match asset_type {
            Some(asset) => coins.iter().filter(|c| c.is_asset(asset)).cloned().collect(),
            None => coins.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CoinCache {
        CoinCache::with_coins(vec![
            CoinObject::new("c1", "SUI", 100),
            CoinObject::new("u1", "USDC", 7),
            CoinObject::new("c2", "SUI", 25),
        ])
    }

    #[test]
    fn filters_by_asset() {
        let cache = sample();
        let sui = cache.owned_coins(Some(&AssetType::new("SUI")));
        assert_eq!(sui.len(), 2);
        assert!(sui.iter().all(|c| c.asset_type.as_str() == "SUI"));
        assert_eq!(cache.owned_coins(None).len(), 3);
    }

    #[test]
    fn replace_supersedes_snapshot() {
        let cache = sample();
        cache.replace(vec![CoinObject::new("c9", "SUI", 1)]);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.owned_coins(None)[0].id.as_str(), "c9");
    }

    #[test]
    fn total_balance_saturates() {
        let cache = CoinCache::with_coins(vec![
            CoinObject::new("a", "SUI", u64::MAX),
            CoinObject::new("b", "SUI", 5),
        ]);
        assert_eq!(cache.total_balance(&AssetType::new("SUI")), u64::MAX);
        assert_eq!(sample().total_balance(&AssetType::new("SUI")), 125);
        assert!(CoinCache::new().is_empty());
    }
}
