// Supply Batch Registry - Core Types
// This module defines all data structures for supply batch records.

use serde::{Deserialize, Serialize};

use crate::crypto::Address;

use super::error::SupplyError;

// ========================================
// Protocol Constants
// ========================================

/// Maximum metadata URI length (bytes); the URI must also be non-empty
pub const MAX_URI_LENGTH: usize = 256;

/// Maximum description length (bytes)
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Maximum tags per batch
pub const MAX_TAGS_COUNT: usize = 10;

/// Maximum version history entries per batch; a full history rejects
/// further appends, it never evicts
pub const MAX_VERSION_HISTORY: usize = 5;

// ========================================
// Identifiers and Clock
// ========================================

/// Batch identifier (starts from 1, strictly increasing, never reused)
pub type BatchId = u64;

/// Host logical-clock value, used for timestamps and expiry comparison
pub type Timestamp = u64;

// ========================================
// Batch Metadata
// ========================================

/// Descriptive record of a supply batch
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchMetadata {
    /// Metadata URI (1-256 bytes)
    pub uri: String,

    /// Kind of supplies carried (free text)
    pub supply_type: String,

    /// Number of units in the batch (> 0)
    pub quantity: u64,

    /// Optional expiry of the goods themselves (logical-clock value)
    pub expiration: Option<Timestamp>,

    /// Free-text description (max 500 bytes)
    pub description: String,

    /// Ordered classification tags (max 10)
    pub tags: Vec<String>,

    /// Whether ownership transfer is currently blocked.
    /// Locking blocks only transfer; metadata edits remain available.
    pub locked: bool,
}

impl BatchMetadata {
    /// Validate the metadata record
    pub fn validate(&self) -> Result<(), SupplyError> {
        if self.uri.is_empty() || self.uri.len() > MAX_URI_LENGTH {
            return Err(SupplyError::InvalidUri);
        }
        if self.quantity == 0 {
            return Err(SupplyError::InvalidQuantity);
        }
        if self.description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(SupplyError::InvalidMetadata);
        }
        if self.tags.len() > MAX_TAGS_COUNT {
            return Err(SupplyError::TooManyTags);
        }
        Ok(())
    }
}

// ========================================
// Version History
// ========================================

/// A single metadata revision.
///
/// The version number is caller-supplied; neither contiguity nor
/// uniqueness is enforced, only that it is non-zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Caller-supplied revision number (> 0)
    pub version: u64,

    /// URI of the revised metadata document
    pub updated_uri: String,

    /// Free-text revision notes
    pub notes: String,

    /// Logical-clock value at append time
    pub timestamp: Timestamp,
}

// ========================================
// Lifecycle Status
// ========================================

/// Label of the last state-changing operation applied to a batch
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BatchStatus {
    Minted,
    Transferred,
    MetadataUpdated,
    VersionAdded,
    LicenseGranted,
    LicenseRevoked,
    CollaboratorAdded,
    Locked,
    Unlocked,
}

/// Current lifecycle status of a batch.
///
/// Exactly one record per live batch; every mutating operation
/// overwrites it as its final side effect, so the record doubles as an
/// audit trail of the last action taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Label of the last operation
    pub status: BatchStatus,

    /// Logical-clock value of the last operation
    pub last_updated: Timestamp,
}

// ========================================
// Licenses
// ========================================

/// A time-bound usage grant on a batch.
///
/// Revocation removes matching entries outright; the `active` flag is
/// written `true` on grant and is never toggled by this registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseEntry {
    /// Identity the grant was issued to
    pub licensee: Address,

    /// Logical-clock value the grant expires at (inclusive)
    pub expiry: Timestamp,

    /// Free-text license terms
    pub terms: String,

    /// Whether the grant is active
    pub active: bool,
}

impl LicenseEntry {
    /// Check if the license is active at the given logical-clock value
    pub fn is_active(&self, now: Timestamp) -> bool {
        self.active && self.expiry >= now
    }
}

// ========================================
// Collaborators
// ========================================

/// A delegated-permission record on a batch.
///
/// Informational only: entries do not gate any registry operation.
/// Append-only, no removal operation exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorEntry {
    /// Delegated identity
    pub collaborator: Address,

    /// Free-text role name
    pub role: String,

    /// Ordered permission labels
    pub permissions: Vec<String>,

    /// Logical-clock value at append time
    pub added_at: Timestamp,
}

// ========================================
// Registry State
// ========================================

/// Process-wide registry state (singleton record).
///
/// The admin identity is set once at initialization and is immutable
/// thereafter. The verification capability is runtime state held by the
/// registry facade, not persisted here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryState {
    /// Admin identity
    pub admin: Address,

    /// Global switch blocking all non-admin mutating operations
    pub paused: bool,
}

impl RegistryState {
    /// Create the initial registry state for the given admin
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            paused: false,
        }
    }
}
