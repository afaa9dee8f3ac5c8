use thiserror::Error;

use coinpay_types::AssetType;

/// Failure reported by the remote signer/executor or its transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutorError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("executor rejected the transaction: {0}")]
    Rejected(String),

    #[error("invalid executor response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("no active identity selected")]
    NoActiveIdentity,

    #[error("invalid transfer request: {0}")]
    InvalidRequest(String),

    #[error("no {asset_type} coins available to cover {amount}")]
    InsufficientCandidates { asset_type: AssetType, amount: u64 },

    #[error("submission failed: {0}")]
    SubmissionFailed(#[from] ExecutorError),

    #[error("owned-object resync failed: {0}")]
    Resync(#[source] ExecutorError),

    #[error("config error: {0}")]
    Config(String),
}

impl WalletError {
    /// Whether the caller may retry the same request without changing it.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WalletError::SubmissionFailed(_))
    }
}
