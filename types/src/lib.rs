//! Fundamental types for the coinpay wallet.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! addresses, object ids, asset types, coin snapshots, digests and execution results.

pub mod address;
pub mod asset;
pub mod coin;
pub mod error;
pub mod hash;
pub mod result;

pub use address::SuiAddress;
pub use asset::AssetType;
pub use coin::{CoinObject, ObjectId};
pub use error::TypesError;
pub use hash::TransactionDigest;
pub use result::{ExecutionStatus, TransactionResult};
