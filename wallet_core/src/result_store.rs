//! Session cache of transaction results submitted by this wallet.
//!
//! Keyed by digest. A repeated insert for the same digest replaces the entry
//! in place, so the store never holds two results with one digest. Entries
//! are never evicted.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use coinpay_types::{TransactionDigest, TransactionResult};

#[derive(Default)]
pub struct ResultStore {
    results: RwLock<HashMap<TransactionDigest, TransactionResult>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the result stored under its digest.
    ///
    /// Returns the previous entry, if any.
    pub fn upsert(&self, result: TransactionResult) -> Option<TransactionResult> {
        self.write().insert(result.digest.clone(), result)
    }

    pub fn get_by_digest(&self, digest: &TransactionDigest) -> Option<TransactionResult> {
        self.read().get(digest).cloned()
    }

    /// Snapshot of every stored result, in no particular order.
    pub fn get_all(&self) -> Vec<TransactionResult> {
        self.read().values().cloned().collect()
    }

    pub fn contains(&self, digest: &TransactionDigest) -> bool {
        self.read().contains_key(digest)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Poisoning is ignored: the only mutation is a single insert.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TransactionDigest, TransactionResult>> {
        self.results.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TransactionDigest, TransactionResult>> {
        self.results.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinpay_types::ExecutionStatus;

    #[test]
    fn empty_store() {
        let store = ResultStore::new();
        assert!(store.is_empty());
        assert!(store.get_all().is_empty());
        assert_eq!(store.get_by_digest(&"D1".into()), None);
    }

    #[test]
    fn upsert_and_get() {
        let store = ResultStore::new();
        let r = TransactionResult::success("D1", 5);
        assert_eq!(store.upsert(r.clone()), None);
        assert_eq!(store.get_by_digest(&"D1".into()), Some(r));
        assert!(store.contains(&"D1".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn repeated_digest_replaces_in_place() {
        let store = ResultStore::new();
        let first = TransactionResult::success("D1", 5);
        let second = TransactionResult {
            digest: "D1".into(),
            status: ExecutionStatus::Failure {
                error: "aborted".into(),
            },
            gas_used: 9,
        };

        store.upsert(first.clone());
        assert_eq!(store.upsert(second.clone()), Some(first));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_all(), vec![second.clone()]);
        assert_eq!(store.get_by_digest(&"D1".into()), Some(second));
    }

    #[test]
    fn distinct_digests_are_kept() {
        let store = ResultStore::new();
        store.upsert(TransactionResult::success("D1", 1));
        store.upsert(TransactionResult::success("D2", 2));

        let mut digests: Vec<String> = store
            .get_all()
            .into_iter()
            .map(|r| r.digest.to_string())
            .collect();
        digests.sort();
        assert_eq!(digests, vec!["D1", "D2"]);
    }
}
