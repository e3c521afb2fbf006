// Supply Batch Operations Module
// This module contains the core business logic for supply batch operations.
//
// The operations are designed to be runtime-agnostic:
// - Storage operations are abstracted via traits
// - Runtime facts (caller, logical clock) are passed as parameters
// - This allows testing and reuse across different runtime environments

mod admin;
mod burn;
mod collaborator;
mod license;
mod lock;
mod metadata;
mod mint;
pub mod query;
mod transfer;
mod validation;
mod version;

pub use admin::*;
pub use burn::*;
pub use collaborator::*;
pub use license::*;
pub use lock::*;
pub use metadata::*;
pub use mint::*;
pub use transfer::*;
pub use validation::*;
pub use version::*;

use crate::crypto::Address;
use crate::supply::{
    BatchId, BatchMetadata, BatchStatus, CollaboratorEntry, LicenseEntry, RegistryState,
    StatusRecord, SupplyError, SupplyResult, Timestamp, VersionEntry,
};

// ========================================
// Storage Trait (for dependency injection)
// ========================================

/// Abstract storage interface for supply batch operations.
///
/// The layout is six keyed tables indexed by batch id plus one singleton
/// registry-state record and one id-allocation counter. A batch id exists
/// in the owner table if and only if the batch has been minted and not
/// yet burned; the other five tables only ever hold entries for ids the
/// owner table knows.
pub trait SupplyStorage {
    // Registry state (singleton)
    fn get_registry_state(&self) -> Option<RegistryState>;
    fn set_registry_state(&mut self, state: &RegistryState) -> SupplyResult<()>;

    // Ownership
    fn get_owner(&self, id: BatchId) -> Option<Address>;
    fn set_owner(&mut self, id: BatchId, owner: &Address) -> SupplyResult<()>;
    fn delete_owner(&mut self, id: BatchId) -> SupplyResult<()>;
    fn batch_exists(&self, id: BatchId) -> bool;

    // Metadata
    fn get_metadata(&self, id: BatchId) -> Option<BatchMetadata>;
    fn set_metadata(&mut self, id: BatchId, metadata: &BatchMetadata) -> SupplyResult<()>;
    fn delete_metadata(&mut self, id: BatchId) -> SupplyResult<()>;

    // Version history
    fn get_versions(&self, id: BatchId) -> Vec<VersionEntry>;
    fn set_versions(&mut self, id: BatchId, versions: &[VersionEntry]) -> SupplyResult<()>;
    fn delete_versions(&mut self, id: BatchId) -> SupplyResult<()>;

    // Status
    fn get_status(&self, id: BatchId) -> Option<StatusRecord>;
    fn set_status(&mut self, id: BatchId, status: &StatusRecord) -> SupplyResult<()>;
    fn delete_status(&mut self, id: BatchId) -> SupplyResult<()>;

    // Licenses
    fn get_licenses(&self, id: BatchId) -> Vec<LicenseEntry>;
    fn set_licenses(&mut self, id: BatchId, licenses: &[LicenseEntry]) -> SupplyResult<()>;
    fn delete_licenses(&mut self, id: BatchId) -> SupplyResult<()>;

    // Collaborators
    fn get_collaborators(&self, id: BatchId) -> Vec<CollaboratorEntry>;
    fn set_collaborators(
        &mut self,
        id: BatchId,
        collaborators: &[CollaboratorEntry],
    ) -> SupplyResult<()>;
    fn delete_collaborators(&mut self, id: BatchId) -> SupplyResult<()>;

    // Id allocation (first call returns 1; ids are never reused)
    fn allocate_batch_id(&mut self) -> SupplyResult<BatchId>;
}

// ========================================
// Runtime Context
// ========================================

/// Runtime context providing the authenticated caller and logical clock
pub struct RuntimeContext {
    /// Current caller (transaction signer, authenticated by the host)
    pub caller: Address,
    /// Current logical-clock value
    pub timestamp: Timestamp,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: Address, timestamp: Timestamp) -> Self {
        Self { caller, timestamp }
    }
}

// ========================================
// Gate Helpers
// ========================================

/// Fail with `Paused` while the global pause switch is on.
/// An uninitialized registry is treated as unpaused.
pub fn check_not_paused<S: SupplyStorage + ?Sized>(storage: &S) -> SupplyResult<()> {
    match storage.get_registry_state() {
        Some(state) if state.paused => Err(SupplyError::Paused),
        _ => Ok(()),
    }
}

/// Require the caller to be the registry admin.
/// An uninitialized registry has no admin, so every caller fails.
pub fn check_admin<S: SupplyStorage + ?Sized>(
    storage: &S,
    caller: &Address,
) -> SupplyResult<RegistryState> {
    let state = storage
        .get_registry_state()
        .ok_or(SupplyError::NotAdmin)?;
    if state.admin != *caller {
        return Err(SupplyError::NotAdmin);
    }
    Ok(state)
}

/// Require the batch to exist and the caller to be its recorded owner.
/// Returns the owner on success.
pub fn check_owner<S: SupplyStorage + ?Sized>(
    storage: &S,
    id: BatchId,
    caller: &Address,
) -> SupplyResult<Address> {
    let owner = storage.get_owner(id).ok_or(SupplyError::TokenNotFound)?;
    if owner != *caller {
        return Err(SupplyError::NotOwner);
    }
    Ok(owner)
}

/// Overwrite the batch status record.
///
/// Every mutating operation calls this as its final side effect; keeping
/// the write in one helper keeps the "status is updated last" invariant
/// enforceable in one place.
pub fn record_status<S: SupplyStorage + ?Sized>(
    storage: &mut S,
    id: BatchId,
    status: BatchStatus,
    now: Timestamp,
) -> SupplyResult<()> {
    storage.set_status(
        id,
        &StatusRecord {
            status,
            last_updated: now,
        },
    )
}
