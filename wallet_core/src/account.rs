//! The wallet's active account selection.

use std::sync::RwLock;

use coinpay_types::SuiAddress;
use tracing::info;

use crate::providers::IdentityProvider;

/// In-memory holder of the currently selected sender address.
#[derive(Default)]
pub struct ActiveAccount {
    address: RwLock<Option<SuiAddress>>,
}

impl ActiveAccount {
    /// An account holder with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(address: SuiAddress) -> Self {
        Self {
            address: RwLock::new(Some(address)),
        }
    }

    /// Make `address` the active sender.
    pub fn select(&self, address: SuiAddress) {
        info!(%address, "active account selected");
        *self.address.write().unwrap_or_else(|e| e.into_inner()) = Some(address);
    }

    /// Deselect the active sender.
    pub fn clear(&self) {
        *self.address.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

impl IdentityProvider for ActiveAccount {
    fn active_identity(&self) -> Option<SuiAddress> {
        self.address
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
