//! Collaborators the transfer pipeline consumes.
//!
//! Each is injected into [`crate::TransferService`] so tests can swap in
//! deterministic implementations.

use async_trait::async_trait;
use coinpay_types::{AssetType, CoinObject, SuiAddress, TransactionResult};

use crate::error::{ExecutorError, WalletError};
use crate::transaction_builder::{PayAllTransaction, PayExactTransaction};

/// Source of the currently selected sender address.
pub trait IdentityProvider: Send + Sync {
    fn active_identity(&self) -> Option<SuiAddress>;
}

/// Read-only, possibly stale view of the coins the active identity owns.
pub trait CoinSnapshotProvider: Send + Sync {
    /// Owned coins, optionally restricted to one asset type.
    fn owned_coins(&self, asset_type: Option<&AssetType>) -> Vec<CoinObject>;
}

/// Remote boundary that signs and executes a transfer.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    async fn pay_all(&self, tx: &PayAllTransaction) -> Result<TransactionResult, ExecutorError>;

    async fn pay_exact(&self, tx: &PayExactTransaction)
        -> Result<TransactionResult, ExecutorError>;
}

/// Refreshes the owned-object cache when told local state is stale.
#[async_trait]
pub trait ResyncCollaborator: Send + Sync {
    async fn trigger_resync(&self) -> Result<(), WalletError>;
}
