//! Nullable executor: record payloads instead of sending them.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use coinpay_types::TransactionResult;
use coinpay_wallet_core::{
    ExecutorError, PayAllTransaction, PayExactTransaction, TransactionExecutor,
};

/// A payload the executor was asked to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutedCall {
    PayAll(PayAllTransaction),
    PayExact(PayExactTransaction),
}

/// A test executor that records every call.
///
/// Responses are taken from the scripted queue first; once it is empty each
/// call succeeds with digest `D<n>` (1-based call number) and 1000 gas.
#[derive(Default)]
pub struct NullExecutor {
    calls: Mutex<Vec<ExecutedCall>>,
    scripted: Mutex<VecDeque<Result<TransactionResult, ExecutorError>>>,
}

impl NullExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the response for the next unscripted call.
    pub fn respond_with(&self, response: Result<TransactionResult, ExecutorError>) {
        self.scripted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
    }

    /// Make the next call fail with `error`.
    pub fn fail_next(&self, error: ExecutorError) {
        self.respond_with(Err(error));
    }

    /// All calls made so far (for assertions).
    pub fn calls(&self) -> Vec<ExecutedCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, call: ExecutedCall) -> Result<TransactionResult, ExecutorError> {
        let n = {
            let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
            calls.push(call);
            calls.len()
        };
        self.scripted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| Ok(TransactionResult::success(format!("D{n}").as_str(), 1000)))
    }
}

#[async_trait]
impl TransactionExecutor for NullExecutor {
    async fn pay_all(&self, tx: &PayAllTransaction) -> Result<TransactionResult, ExecutorError> {
        self.record(ExecutedCall::PayAll(tx.clone()))
    }

    async fn pay_exact(
        &self,
        tx: &PayExactTransaction,
    ) -> Result<TransactionResult, ExecutorError> {
        self.record(ExecutedCall::PayExact(tx.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinpay_types::SuiAddress;

    fn tx() -> PayAllTransaction {
        PayAllTransaction {
            input_coins: vec!["c1".into()],
            recipient: SuiAddress::parse("0xB2").unwrap(),
            gas_budget: 10,
        }
    }

    #[tokio::test]
    async fn default_responses_are_numbered() {
        let exec = NullExecutor::new();
        assert_eq!(exec.pay_all(&tx()).await.unwrap().digest.as_str(), "D1");
        assert_eq!(exec.pay_all(&tx()).await.unwrap().digest.as_str(), "D2");
        assert_eq!(exec.calls().len(), 2);
    }

    #[tokio::test]
    async fn scripted_failure_is_returned_once() {
        let exec = NullExecutor::new();
        exec.fail_next(ExecutorError::Transport("down".into()));

        assert_eq!(
            exec.pay_all(&tx()).await,
            Err(ExecutorError::Transport("down".into()))
        );
        assert!(exec.pay_all(&tx()).await.is_ok());
        assert_eq!(exec.calls(), vec![ExecutedCall::PayAll(tx()); 2]);
    }
}
