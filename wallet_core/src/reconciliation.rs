//! Post-transfer reconciliation signal.
//!
//! A successful submission posts a [`ReconciliationEvent`] onto a channel and
//! returns immediately. A separate worker task drains the channel and asks
//! the [`ResyncCollaborator`] to refresh the owned-object cache. Nothing the
//! worker does can reach the submitter: resync errors are logged here.

use std::sync::Arc;

use coinpay_types::TransactionDigest;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::providers::ResyncCollaborator;

/// Messages delivered to the reconciliation worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReconciliationEvent {
    /// A transfer executed; local coin state is stale.
    TransferCompleted { digest: TransactionDigest },
}

/// Sending half of the reconciliation channel. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ReconciliationTrigger {
    tx: mpsc::UnboundedSender<ReconciliationEvent>,
}

impl ReconciliationTrigger {
    /// Create a trigger and the receiver a worker should drain.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ReconciliationEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Create a trigger backed by a spawned worker that calls `collaborator`.
    ///
    /// Must be called from within a Tokio runtime. The worker exits once
    /// every clone of the returned trigger has been dropped.
    pub fn spawn(collaborator: Arc<dyn ResyncCollaborator>) -> (Self, JoinHandle<()>) {
        let (trigger, rx) = Self::channel();
        let handle = tokio::spawn(run_reconciler(rx, collaborator));
        (trigger, handle)
    }

    /// Signal that a transfer completed and owned coins should be refreshed.
    ///
    /// Never blocks and never fails from the caller's point of view.
    pub fn notify_transfer_completed(&self, digest: &TransactionDigest) {
        let event = ReconciliationEvent::TransferCompleted {
            digest: digest.clone(),
        };
        if self.tx.send(event).is_err() {
            warn!(%digest, "reconciliation worker stopped; resync signal dropped");
        }
    }
}

/// Drain reconciliation events until the channel closes.
///
/// Events that pile up while a resync is running are folded into the next
/// resync rather than triggering one each.
pub async fn run_reconciler(
    mut rx: mpsc::UnboundedReceiver<ReconciliationEvent>,
    collaborator: Arc<dyn ResyncCollaborator>,
) {
    while let Some(event) = rx.recv().await {
        let mut coalesced = 0usize;
        while rx.try_recv().is_ok() {
            coalesced += 1;
        }
        debug!(?event, coalesced, "reconciliation requested");

        match collaborator.trigger_resync().await {
            Ok(()) => info!("owned-object resync complete"),
            Err(e) => warn!(error = %e, "owned-object resync failed"),
        }
    }
    debug!("reconciliation channel closed, worker exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ResyncCollaborator for Counting {
        async fn trigger_resync(&self) -> Result<(), WalletError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(WalletError::Config("boom".into()))
            } else {
                Ok(())
            }
        }
    }

    fn counting(fail: bool) -> Arc<Counting> {
        Arc::new(Counting {
            calls: AtomicUsize::new(0),
            fail,
        })
    }

    #[tokio::test]
    async fn notify_reaches_collaborator() {
        let resync = counting(false);
        let (trigger, handle) = ReconciliationTrigger::spawn(resync.clone());

        trigger.notify_transfer_completed(&"D1".into());
        drop(trigger);
        handle.await.unwrap();

        assert_eq!(resync.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn queued_events_are_coalesced() {
        let resync = counting(false);
        let (trigger, rx) = ReconciliationTrigger::channel();

        trigger.notify_transfer_completed(&"D1".into());
        trigger.notify_transfer_completed(&"D2".into());
        trigger.notify_transfer_completed(&"D3".into());
        drop(trigger);

        run_reconciler(rx, resync.clone()).await;
        assert_eq!(resync.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn resync_failure_does_not_stop_worker() {
        let resync = counting(true);
        let (trigger, handle) = ReconciliationTrigger::spawn(resync.clone());

        trigger.notify_transfer_completed(&"D1".into());
        tokio::task::yield_now().await;
        while resync.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        trigger.notify_transfer_completed(&"D2".into());
        drop(trigger);
        handle.await.unwrap();

        assert_eq!(resync.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn notify_after_worker_gone_is_silent() {
        let (trigger, rx) = ReconciliationTrigger::channel();
        drop(rx);
        trigger.notify_transfer_completed(&"D1".into());
    }
}
