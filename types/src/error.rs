//! Top-level error type shared across crates.

use thiserror::Error;

/// Errors raised while parsing or validating the fundamental types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    #[error("invalid asset type: {0}")]
    InvalidAssetType(String),
}
