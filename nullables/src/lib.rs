//! Nullable collaborators for deterministic testing.
//!
//! The transfer pipeline reaches the outside world only through the traits
//! in `coinpay_wallet_core::providers`. This crate provides test-friendly
//! implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod executor;
pub mod resync;

pub use executor::{ExecutedCall, NullExecutor};
pub use resync::NullResync;
