//! Execution outcomes reported by the remote executor.

use serde::{Deserialize, Serialize};

use crate::hash::TransactionDigest;

/// Whether the executed transaction took effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ExecutionStatus {
    Success,
    /// Executed but aborted on-chain; gas was still charged.
    Failure { error: String },
}

/// Outcome of one executed transaction, keyed by its digest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
    pub digest: TransactionDigest,
    #[serde(flatten)]
    pub status: ExecutionStatus,
    #[serde(default)]
    pub gas_used: u64,
}

impl TransactionResult {
    pub fn success(digest: impl Into<TransactionDigest>, gas_used: u64) -> Self {
        Self {
            digest: digest.into(),
            status: ExecutionStatus::Success,
            gas_used,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ExecutionStatus::Success
    }
}
