//! Wallet core library for coinpay.
//!
//! Provides the asset-transfer pipeline a wallet application needs:
//! - Coin selection (spend-all vs. spend-exact)
//! - Transfer payload building
//! - Submission through a remote signer/executor
//! - A session cache of submitted transaction results
//! - Reconciliation signalling after a transfer lands
//! - JSON-RPC client, configuration and logging setup

pub mod account;
pub mod coin_cache;
pub mod coin_selector;
pub mod config;
pub mod error;
pub mod logging;
pub mod providers;
pub mod reconciliation;
pub mod result_store;
pub mod rpc;
pub mod transaction_builder;
pub mod transfer;

pub use account::ActiveAccount;
pub use coin_cache::CoinCache;
pub use coin_selector::{CoinSelector, SelectionPlan};
pub use config::WalletConfig;
pub use error::{ExecutorError, WalletError};
pub use logging::{init_logging, LogFormat};
pub use providers::{
    CoinSnapshotProvider, IdentityProvider, ResyncCollaborator, TransactionExecutor,
};
pub use reconciliation::{ReconciliationEvent, ReconciliationTrigger};
pub use result_store::ResultStore;
pub use rpc::{RpcClient, RpcResync};
pub use transaction_builder::{
    build_transfer_tx, PayAllTransaction, PayExactTransaction, TransactionPayload,
};
pub use transfer::{TransferRequest, TransferService};
