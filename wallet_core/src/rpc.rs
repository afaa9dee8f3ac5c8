//! JSON-RPC client for the remote signer/executor.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use coinpay_types::{AssetType, CoinObject, SuiAddress, TransactionResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::coin_cache::CoinCache;
use crate::config::WalletConfig;
use crate::error::{ExecutorError, WalletError};
use crate::providers::{IdentityProvider, ResyncCollaborator, TransactionExecutor};
use crate::transaction_builder::{PayAllTransaction, PayExactTransaction};

// ── RpcClient ──────────────────────────────────────────────────────────

/// HTTP client for a signer/executor speaking JSON-RPC 2.0.
///
/// Wraps `reqwest::Client` with the endpoint URL and provides typed
/// methods for each call the wallet needs.
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl RpcClient {
    /// Create a client targeting `url` (e.g. `http://127.0.0.1:9000`).
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, WalletError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| WalletError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            url: url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn from_config(config: &WalletConfig) -> Result<Self, WalletError> {
        Self::new(
            config.rpc_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
            Duration::from_secs(config.connect_timeout_secs),
        )
    }

    /// The configured endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a JSON-RPC request and decode its `result` field.
    async fn rpc_call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, ExecutorError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = request_body(id, method, params);
        debug!(method, id, "rpc request");

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExecutorError::Transport(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ExecutorError::Transport(format!(
                "endpoint returned HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ExecutorError::InvalidResponse(format!("invalid JSON body: {e}")))?;

        decode_response(json)
    }

    /// Execute a pay-all transfer.
    pub async fn pay_all(&self, tx: &PayAllTransaction) -> Result<TransactionResult, ExecutorError> {
        self.rpc_call("wallet_payAll", serde_json::json!([tx])).await
    }

    /// Execute a pay-exact transfer.
    pub async fn pay_exact(
        &self,
        tx: &PayExactTransaction,
    ) -> Result<TransactionResult, ExecutorError> {
        self.rpc_call("wallet_payExact", serde_json::json!([tx])).await
    }

    /// Fetch the coins `owner` currently holds, optionally for one asset.
    pub async fn owned_coins(
        &self,
        owner: &SuiAddress,
        asset_type: Option<&AssetType>,
    ) -> Result<Vec<CoinObject>, ExecutorError> {
        self.rpc_call(
            "wallet_getOwnedCoins",
            serde_json::json!([owner, asset_type]),
        )
        .await
    }
}

#[async_trait]
impl TransactionExecutor for RpcClient {
    async fn pay_all(&self, tx: &PayAllTransaction) -> Result<TransactionResult, ExecutorError> {
        RpcClient::pay_all(self, tx).await
    }

    async fn pay_exact(
        &self,
        tx: &PayExactTransaction,
    ) -> Result<TransactionResult, ExecutorError> {
        RpcClient::pay_exact(self, tx).await
    }
}

fn request_body(id: u64, method: &str, params: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    })
}

/// Split a JSON-RPC response into its `result` or `error`.
fn decode_response<T: DeserializeOwned>(mut json: serde_json::Value) -> Result<T, ExecutorError> {
    if let Some(err) = json.get("error").filter(|e| !e.is_null()) {
        let err: RpcErrorObject = serde_json::from_value(err.clone())
            .map_err(|e| ExecutorError::InvalidResponse(format!("malformed error object: {e}")))?;
        return Err(ExecutorError::Rejected(format!("{} (code {})", err.message, err.code)));
    }

    let result = json
        .get_mut("result")
        .map(serde_json::Value::take)
        .ok_or_else(|| ExecutorError::InvalidResponse("missing result field".into()))?;

    serde_json::from_value(result)
        .map_err(|e| ExecutorError::InvalidResponse(format!("unexpected result shape: {e}")))
}

// ── RpcResync ──────────────────────────────────────────────────────────

/// Refreshes a [`CoinCache`] from the RPC endpoint for the active account.
pub struct RpcResync {
    client: Arc<RpcClient>,
    identity: Arc<dyn IdentityProvider>,
    cache: Arc<CoinCache>,
}

impl RpcResync {
    pub fn new(
        client: Arc<RpcClient>,
        identity: Arc<dyn IdentityProvider>,
        cache: Arc<CoinCache>,
    ) -> Self {
        Self {
            client,
            identity,
            cache,
        }
    }
}

#[async_trait]
impl ResyncCollaborator for RpcResync {
    async fn trigger_resync(&self) -> Result<(), WalletError> {
        let owner = self
            .identity
            .active_identity()
            .ok_or(WalletError::NoActiveIdentity)?;
        let coins = self
            .client
            .owned_coins(&owner, None)
            .await
            .map_err(WalletError::Resync)?;
        self.cache.replace(coins);
        Ok(())
    }
}
