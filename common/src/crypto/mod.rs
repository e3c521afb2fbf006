// Relief Network - Identity Primitives
// This module defines the 32-byte address used to identify callers,
// owners, licensees and collaborators. Addresses are opaque to this
// library; the host ledger authenticates them before any call lands here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Size of an address in bytes
pub const ADDRESS_LENGTH: usize = 32;

/// A ledger identity (account, organization or contract address).
///
/// Serialized as a lowercase hex string. The all-zero address is the
/// designated null/burn identity and never owns a batch.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(#[serde(with = "hex::serde")] [u8; ADDRESS_LENGTH]);

impl Address {
    /// Create an address from raw bytes
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// The null/burn identity
    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_LENGTH])
    }

    /// Check if this is the null/burn identity
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Consume into raw bytes
    pub fn to_bytes(self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(self.0))
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Address {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use hex::FromHex;
        Ok(Self(<[u8; ADDRESS_LENGTH]>::from_hex(s)?))
    }
}
