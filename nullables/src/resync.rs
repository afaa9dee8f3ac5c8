//! Nullable resync collaborator: count triggers instead of syncing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use coinpay_wallet_core::{ResyncCollaborator, WalletError};
use tokio::sync::Notify;

type Observer = Box<dyn Fn() + Send + Sync>;

/// A test resync collaborator.
///
/// Counts triggers, optionally runs an observer closure at trigger time and
/// can be told to fail every resync.
#[derive(Default)]
pub struct NullResync {
    triggers: AtomicUsize,
    fail: bool,
    observer: Mutex<Option<Observer>>,
    notify: Notify,
}

impl NullResync {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collaborator whose every resync fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Run `f` each time a resync is triggered, before it completes.
    pub fn on_trigger(&self, f: impl Fn() + Send + Sync + 'static) {
        *self.observer.lock().unwrap_or_else(|e| e.into_inner()) = Some(Box::new(f));
    }

    /// Number of resyncs triggered so far.
    pub fn trigger_count(&self) -> usize {
        self.triggers.load(Ordering::SeqCst)
    }

    /// Wait until at least `n` resyncs have been triggered.
    pub async fn wait_for_triggers(&self, n: usize) {
        loop {
            let notified = self.notify.notified();
            if self.trigger_count() >= n {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl ResyncCollaborator for NullResync {
    async fn trigger_resync(&self) -> Result<(), WalletError> {
        {
            let observer = self.observer.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(observer) = observer.as_ref() {
                observer();
            }
        }
        self.triggers.fetch_add(1, Ordering::SeqCst);
        self.notify.notify_waiters();
        if self.fail {
            Err(WalletError::Config("resync disabled in test".into()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn counts_and_observes() {
        let resync = NullResync::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let s = Arc::clone(&seen);
        resync.on_trigger(move || {
            s.fetch_add(1, Ordering::SeqCst);
        });

        resync.trigger_resync().await.unwrap();
        resync.wait_for_triggers(1).await;

        assert_eq!(resync.trigger_count(), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failing_still_counts() {
        let resync = NullResync::failing();
        assert!(resync.trigger_resync().await.is_err());
        assert_eq!(resync.trigger_count(), 1);
    }
}
