//! Account address type with `0x` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// An account address: `0x` followed by 1 to 64 hexadecimal digits.
///
/// The caller's textual form is kept as-is, so `"0xB2"` round-trips unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SuiAddress(String);

impl SuiAddress {
    /// The standard prefix for all addresses.
    pub const PREFIX: &'static str = "0x";

    /// Maximum number of hex digits after the prefix (32 bytes).
    pub const MAX_HEX_LEN: usize = 64;

    /// Parse and validate an address string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypesError> {
        let s = raw.into();
        if Self::is_well_formed(&s) {
            Ok(Self(s))
        } else {
            Err(TypesError::InvalidAddress(s))
        }
    }

    /// Whether `s` is a well-formed address string.
    pub fn is_well_formed(s: &str) -> bool {
        match s.strip_prefix(Self::PREFIX) {
            Some(hex) => {
                !hex.is_empty()
                    && hex.len() <= Self::MAX_HEX_LEN
                    && hex.chars().all(|c| c.is_ascii_hexdigit())
            }
            None => false,
        }
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SuiAddress {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SuiAddress {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<SuiAddress> for String {
    fn from(addr: SuiAddress) -> Self {
        addr.0
    }
}
