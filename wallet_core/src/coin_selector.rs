//! Coin selection: decide between spend-all and spend-exact and gather the
//! candidate input coins.
//!
//! The selector never merges or picks a subset of coins. Every owned coin of
//! the requested asset is offered; the remote executor performs the final
//! aggregation when the transaction runs.

use std::collections::HashSet;

use coinpay_types::{AssetType, CoinObject, ObjectId};
use tracing::debug;

use crate::error::WalletError;

/// How a transfer will be constructed.
///
/// Pay-All carries no amount, so "spend everything with an explicit amount"
/// cannot be expressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionPlan {
    /// Spend every coin of the native fee asset; the executor nets out gas.
    PayAll { input_coins: Vec<ObjectId> },
    /// Send exactly `amount` of `asset_type`, drawing from `input_coins`.
    PayExact {
        input_coins: Vec<ObjectId>,
        asset_type: AssetType,
        amount: u64,
    },
}

impl SelectionPlan {
    pub fn input_coins(&self) -> &[ObjectId] {
        match self {
            SelectionPlan::PayAll { input_coins } => input_coins,
            SelectionPlan::PayExact { input_coins, .. } => input_coins,
        }
    }
}

/// Pure selection logic, parameterised by the network's fee asset.
#[derive(Clone, Debug)]
pub struct CoinSelector {
    native_asset: AssetType,
}

impl CoinSelector {
    pub fn new(native_asset: AssetType) -> Self {
        Self { native_asset }
    }

    /// The asset that pays gas and is the only one eligible for spend-all.
    pub fn native_asset(&self) -> &AssetType {
        &self.native_asset
    }

    /// Map the owned coins and a request onto a [`SelectionPlan`].
    ///
    /// Checks run in a fixed order: spend-all on a non-native asset, a zero
    /// exact amount, then an empty candidate set.
    pub fn select(
        &self,
        coins: &[CoinObject],
        asset_type: &AssetType,
        amount: u64,
        spend_all: bool,
    ) -> Result<SelectionPlan, WalletError> {
        if spend_all && asset_type != &self.native_asset {
            return Err(WalletError::InvalidRequest(format!(
                "spend-all is only supported for {}, not {asset_type}",
                self.native_asset
            )));
        }
        if !spend_all && amount == 0 {
            return Err(WalletError::InvalidRequest(
                "amount must be greater than zero".into(),
            ));
        }

        let input_coins = candidate_ids(coins, asset_type);
        if input_coins.is_empty() {
            return Err(WalletError::InsufficientCandidates {
                asset_type: asset_type.clone(),
                amount,
            });
        }

        debug!(
            asset = %asset_type,
            candidates = input_coins.len(),
            spend_all,
            "coin selection complete"
        );

        Ok(if spend_all {
            SelectionPlan::PayAll { input_coins }
        } else {
            SelectionPlan::PayExact {
                input_coins,
                asset_type: asset_type.clone(),
                amount,
            }
        })
    }
}

/// Ids of coins holding `asset_type`, in snapshot order, without duplicates.
fn candidate_ids(coins: &[CoinObject], asset_type: &AssetType) -> Vec<ObjectId> {
    let mut seen = HashSet::new();
    coins
        .iter()
        .filter(|c| c.is_asset(asset_type))
        .filter(|c| seen.insert(c.id.clone()))
        .map(|c| c.id.clone())
        .collect()
}
