//! Transfer submission: the entry point a UI or CLI action calls.
//!
//! `submit_transfer` runs these steps in order:
//! 1. Resolve the active identity (synchronously, before any I/O)
//! 2. Read the owned-coin snapshot
//! 3. Select coins and build the payload
//! 4. Dispatch the payload to the executor, exactly once
//! 5. On success, upsert the result, then signal reconciliation
//!
//! Nothing is retried here; retry policy belongs to the caller.

use std::sync::Arc;
use std::time::Instant;

use coinpay_types::{AssetType, SuiAddress, TransactionDigest, TransactionResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::coin_selector::CoinSelector;
use crate::error::WalletError;
use crate::providers::{CoinSnapshotProvider, IdentityProvider, TransactionExecutor};
use crate::reconciliation::ReconciliationTrigger;
use crate::result_store::ResultStore;
use crate::transaction_builder::{build_transfer_tx, TransactionPayload};

/// A caller's request to move funds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub asset_type: AssetType,
    /// Ignored when `spend_all` is set.
    #[serde(default)]
    pub amount: u64,
    /// Unvalidated; checked when the payload is built.
    pub recipient: String,
    pub gas_budget: u64,
    #[serde(default)]
    pub spend_all: bool,
}

impl TransferRequest {
    /// Send exactly `amount` of `asset_type`.
    pub fn exact(
        asset_type: impl Into<AssetType>,
        amount: u64,
        recipient: impl Into<String>,
        gas_budget: u64,
    ) -> Self {
        Self {
            asset_type: asset_type.into(),
            amount,
            recipient: recipient.into(),
            gas_budget,
            spend_all: false,
        }
    }

    /// Send the whole balance of `asset_type`, net of gas.
    pub fn all(
        asset_type: impl Into<AssetType>,
        recipient: impl Into<String>,
        gas_budget: u64,
    ) -> Self {
        Self {
            asset_type: asset_type.into(),
            amount: 0,
            recipient: recipient.into(),
            gas_budget,
            spend_all: true,
        }
    }
}

/// Orchestrates transfer construction, submission and cache upkeep.
///
/// Concurrent calls are not serialized against each other. Two overlapping
/// transfers over the same coins race at the executor.
pub struct TransferService {
    identity: Arc<dyn IdentityProvider>,
    coins: Arc<dyn CoinSnapshotProvider>,
    executor: Arc<dyn TransactionExecutor>,
    results: Arc<ResultStore>,
    reconciliation: ReconciliationTrigger,
    selector: CoinSelector,
}

impl TransferService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        coins: Arc<dyn CoinSnapshotProvider>,
        executor: Arc<dyn TransactionExecutor>,
        reconciliation: ReconciliationTrigger,
        native_asset: AssetType,
    ) -> Self {
        Self {
            identity,
            coins,
            executor,
            results: Arc::new(ResultStore::new()),
            reconciliation,
            selector: CoinSelector::new(native_asset),
        }
    }

    /// Share an existing result store instead of the service's own.
    pub fn with_result_store(mut self, results: Arc<ResultStore>) -> Self {
        self.results = results;
        self
    }

    pub fn result_store(&self) -> &Arc<ResultStore> {
        &self.results
    }

    /// Run the synchronous part of a submission: identity, snapshot,
    /// selection and build. No external call is made.
    pub fn prepare(
        &self,
        request: &TransferRequest,
    ) -> Result<(SuiAddress, TransactionPayload), WalletError> {
        let sender = self
            .identity
            .active_identity()
            .ok_or(WalletError::NoActiveIdentity)?;

        let coins = self.coins.owned_coins(Some(&request.asset_type));
        debug!(%sender, asset = %request.asset_type, owned = coins.len(), "preparing transfer");

        let plan = self.selector.select(
            &coins,
            &request.asset_type,
            request.amount,
            request.spend_all,
        )?;
        let payload = build_transfer_tx(plan, &request.recipient, request.gas_budget)?;
        Ok((sender, payload))
    }

    /// Build, sign and execute a transfer.
    ///
    /// On success the result is cached before reconciliation is signalled,
    /// and both happen before this future resolves.
    pub async fn submit_transfer(
        &self,
        request: TransferRequest,
    ) -> Result<TransactionResult, WalletError> {
        let start = Instant::now();
        let (sender, payload) = self.prepare(&request)?;

        info!(
            %sender,
            kind = payload.kind(),
            recipient = %payload.recipient(),
            inputs = payload.input_coins().len(),
            "submitting transfer"
        );

        let outcome = match &payload {
            TransactionPayload::PayAll(tx) => self.executor.pay_all(tx).await,
            TransactionPayload::PayExact(tx) => self.executor.pay_exact(tx).await,
        };
        let result = outcome.map_err(|e| {
            warn!(%sender, error = %e, "transfer submission failed");
            WalletError::SubmissionFailed(e)
        })?;

        if !result.is_success() {
            warn!(digest = %result.digest, status = ?result.status, "transfer executed with failure status");
        }

        self.results.upsert(result.clone());
        self.reconciliation.notify_transfer_completed(&result.digest);

        info!(
            digest = %result.digest,
            gas_used = result.gas_used,
            elapsed = ?start.elapsed(),
            "transfer submitted"
        );
        Ok(result)
    }

    pub fn get_transaction_result(&self, digest: &TransactionDigest) -> Option<TransactionResult> {
        self.results.get_by_digest(digest)
    }

    pub fn list_transaction_results(&self) -> Vec<TransactionResult> {
        self.results.get_all()
    }
}
