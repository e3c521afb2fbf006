// Supply Batch Registry - Storage Layer
// This module defines the canonical storage key layout and the in-memory
// backend.
//
// Storage Key Structure:
// - Ownership:        sup:own:<batch_id>
// - Metadata:         sup:met:<batch_id>
// - Version History:  sup:ver:<batch_id>
// - Status:           sup:sta:<batch_id>
// - Licenses:         sup:lic:<batch_id>
// - Collaborators:    sup:col:<batch_id>
// - Registry State:   sup:state (singleton)
// - Batch Nonce:      sup:nonce (global counter for id allocation)

use indexmap::IndexMap;

use crate::crypto::Address;

use super::operations::SupplyStorage;
use super::types::*;
use super::SupplyResult;

// ========================================
// Storage Key Prefixes
// ========================================

/// Storage key prefixes for supply batch data
pub mod prefixes {
    /// Ownership table prefix
    pub const OWNER: &[u8] = b"sup:own:";

    /// Metadata table prefix
    pub const METADATA: &[u8] = b"sup:met:";

    /// Version history table prefix
    pub const VERSIONS: &[u8] = b"sup:ver:";

    /// Status table prefix
    pub const STATUS: &[u8] = b"sup:sta:";

    /// License table prefix
    pub const LICENSES: &[u8] = b"sup:lic:";

    /// Collaborator table prefix
    pub const COLLABORATORS: &[u8] = b"sup:col:";

    /// Singleton registry state record
    pub const REGISTRY_STATE: &[u8] = b"sup:state";

    /// Global batch id allocation counter
    pub const BATCH_NONCE: &[u8] = b"sup:nonce";
}

// ========================================
// Storage Key Generation Functions
// ========================================

fn batch_key(prefix: &[u8], id: BatchId) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + 8);
    key.extend_from_slice(prefix);
    key.extend_from_slice(&id.to_be_bytes());
    key
}

/// Generate storage key for a batch owner record
pub fn owner_key(id: BatchId) -> Vec<u8> {
    batch_key(prefixes::OWNER, id)
}

/// Generate storage key for a batch metadata record
pub fn metadata_key(id: BatchId) -> Vec<u8> {
    batch_key(prefixes::METADATA, id)
}

/// Generate storage key for a batch version history
pub fn versions_key(id: BatchId) -> Vec<u8> {
    batch_key(prefixes::VERSIONS, id)
}

/// Generate storage key for a batch status record
pub fn status_key(id: BatchId) -> Vec<u8> {
    batch_key(prefixes::STATUS, id)
}

/// Generate storage key for a batch license list
pub fn licenses_key(id: BatchId) -> Vec<u8> {
    batch_key(prefixes::LICENSES, id)
}

/// Generate storage key for a batch collaborator list
pub fn collaborators_key(id: BatchId) -> Vec<u8> {
    batch_key(prefixes::COLLABORATORS, id)
}

/// Generate storage key for the singleton registry state
pub fn registry_state_key() -> Vec<u8> {
    prefixes::REGISTRY_STATE.to_vec()
}

/// Generate storage key for the batch id counter
pub fn batch_nonce_key() -> Vec<u8> {
    prefixes::BATCH_NONCE.to_vec()
}

// ========================================
// In-Memory Backend
// ========================================

/// In-memory storage backend.
///
/// Tables keep insertion order, so iteration over a dump is
/// deterministic. Suitable for tests and single-process hosts; ledger
/// deployments implement [`SupplyStorage`] over their own state trees
/// using the key layout above.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    state: Option<RegistryState>,
    owners: IndexMap<BatchId, Address>,
    metadata: IndexMap<BatchId, BatchMetadata>,
    versions: IndexMap<BatchId, Vec<VersionEntry>>,
    statuses: IndexMap<BatchId, StatusRecord>,
    licenses: IndexMap<BatchId, Vec<LicenseEntry>>,
    collaborators: IndexMap<BatchId, Vec<CollaboratorEntry>>,
    // Last allocated id; 0 means nothing was ever minted
    last_batch_id: BatchId,
}

impl MemoryStorage {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest id allocated so far (0 if none)
    pub fn last_batch_id(&self) -> BatchId {
        self.last_batch_id
    }

    /// Number of live batches
    pub fn batch_count(&self) -> usize {
        self.owners.len()
    }

    /// Iterate over live batch ids in mint order
    pub fn batch_ids(&self) -> impl Iterator<Item = BatchId> + '_ {
        self.owners.keys().copied()
    }
}

impl SupplyStorage for MemoryStorage {
    fn get_registry_state(&self) -> Option<RegistryState> {
        self.state
    }

    fn set_registry_state(&mut self, state: &RegistryState) -> SupplyResult<()> {
        self.state = Some(*state);
        Ok(())
    }

    fn get_owner(&self, id: BatchId) -> Option<Address> {
        self.owners.get(&id).copied()
    }

    fn set_owner(&mut self, id: BatchId, owner: &Address) -> SupplyResult<()> {
        self.owners.insert(id, *owner);
        Ok(())
    }

    fn delete_owner(&mut self, id: BatchId) -> SupplyResult<()> {
        self.owners.shift_remove(&id);
        Ok(())
    }

    fn batch_exists(&self, id: BatchId) -> bool {
        self.owners.contains_key(&id)
    }

    fn get_metadata(&self, id: BatchId) -> Option<BatchMetadata> {
        self.metadata.get(&id).cloned()
    }

    fn set_metadata(&mut self, id: BatchId, metadata: &BatchMetadata) -> SupplyResult<()> {
        self.metadata.insert(id, metadata.clone());
        Ok(())
    }

    fn delete_metadata(&mut self, id: BatchId) -> SupplyResult<()> {
        self.metadata.shift_remove(&id);
        Ok(())
    }

    fn get_versions(&self, id: BatchId) -> Vec<VersionEntry> {
        self.versions.get(&id).cloned().unwrap_or_default()
    }

    fn set_versions(&mut self, id: BatchId, versions: &[VersionEntry]) -> SupplyResult<()> {
        self.versions.insert(id, versions.to_vec());
        Ok(())
    }

    fn delete_versions(&mut self, id: BatchId) -> SupplyResult<()> {
        self.versions.shift_remove(&id);
        Ok(())
    }

    fn get_status(&self, id: BatchId) -> Option<StatusRecord> {
        self.statuses.get(&id).copied()
    }

    fn set_status(&mut self, id: BatchId, status: &StatusRecord) -> SupplyResult<()> {
        self.statuses.insert(id, *status);
        Ok(())
    }

    fn delete_status(&mut self, id: BatchId) -> SupplyResult<()> {
        self.statuses.shift_remove(&id);
        Ok(())
    }

    fn get_licenses(&self, id: BatchId) -> Vec<LicenseEntry> {
        self.licenses.get(&id).cloned().unwrap_or_default()
    }

    fn set_licenses(&mut self, id: BatchId, licenses: &[LicenseEntry]) -> SupplyResult<()> {
        self.licenses.insert(id, licenses.to_vec());
        Ok(())
    }

    fn delete_licenses(&mut self, id: BatchId) -> SupplyResult<()> {
        self.licenses.shift_remove(&id);
        Ok(())
    }

    fn get_collaborators(&self, id: BatchId) -> Vec<CollaboratorEntry> {
        self.collaborators.get(&id).cloned().unwrap_or_default()
    }

    fn set_collaborators(
        &mut self,
        id: BatchId,
        collaborators: &[CollaboratorEntry],
    ) -> SupplyResult<()> {
        self.collaborators.insert(id, collaborators.to_vec());
        Ok(())
    }

    fn delete_collaborators(&mut self, id: BatchId) -> SupplyResult<()> {
        self.collaborators.shift_remove(&id);
        Ok(())
    }

    fn allocate_batch_id(&mut self) -> SupplyResult<BatchId> {
        self.last_batch_id = self
            .last_batch_id
            .checked_add(1)
            .ok_or(super::SupplyError::Overflow)?;
        Ok(self.last_batch_id)
    }
}
