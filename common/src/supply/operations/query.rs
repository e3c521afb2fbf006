// Supply Batch Query Operations
// Read-only queries. These bypass the access gate entirely and report
// unknown ids with `None` instead of an error, so audit consumers can
// probe any id safely.

use crate::crypto::Address;
use crate::supply::{
    BatchId, BatchMetadata, CollaboratorEntry, LicenseEntry, StatusRecord, VersionEntry,
};

use super::SupplyStorage;

/// Get the current owner of a batch
pub fn owner_of<S: SupplyStorage + ?Sized>(storage: &S, id: BatchId) -> Option<Address> {
    storage.get_owner(id)
}

/// Check if a batch exists (minted and not yet burned)
pub fn exists<S: SupplyStorage + ?Sized>(storage: &S, id: BatchId) -> bool {
    storage.batch_exists(id)
}

/// Get the full metadata record of a batch
pub fn get_metadata<S: SupplyStorage + ?Sized>(storage: &S, id: BatchId) -> Option<BatchMetadata> {
    storage.get_metadata(id)
}

/// Get the metadata URI of a batch
pub fn get_uri<S: SupplyStorage + ?Sized>(storage: &S, id: BatchId) -> Option<String> {
    storage.get_metadata(id).map(|metadata| metadata.uri)
}

/// Get the lock flag of a batch
pub fn is_locked<S: SupplyStorage + ?Sized>(storage: &S, id: BatchId) -> Option<bool> {
    storage.get_metadata(id).map(|metadata| metadata.locked)
}

/// Get the version history of a batch.
/// A live batch with no revisions answers `Some` of an empty list.
pub fn get_versions<S: SupplyStorage + ?Sized>(
    storage: &S,
    id: BatchId,
) -> Option<Vec<VersionEntry>> {
    if !storage.batch_exists(id) {
        return None;
    }
    Some(storage.get_versions(id))
}

/// Get the current lifecycle status of a batch
pub fn get_status<S: SupplyStorage + ?Sized>(storage: &S, id: BatchId) -> Option<StatusRecord> {
    storage.get_status(id)
}

/// Get the license list of a batch.
/// A live batch with no grants answers `Some` of an empty list.
pub fn get_licenses<S: SupplyStorage + ?Sized>(
    storage: &S,
    id: BatchId,
) -> Option<Vec<LicenseEntry>> {
    if !storage.batch_exists(id) {
        return None;
    }
    Some(storage.get_licenses(id))
}

/// Get the collaborator list of a batch.
/// A live batch with no delegations answers `Some` of an empty list.
pub fn get_collaborators<S: SupplyStorage + ?Sized>(
    storage: &S,
    id: BatchId,
) -> Option<Vec<CollaboratorEntry>> {
    if !storage.batch_exists(id) {
        return None;
    }
    Some(storage.get_collaborators(id))
}

/// Get the global pause flag. An uninitialized registry is unpaused.
pub fn is_paused<S: SupplyStorage + ?Sized>(storage: &S) -> bool {
    storage
        .get_registry_state()
        .map(|state| state.paused)
        .unwrap_or(false)
}

/// Get the registry admin identity, if the registry was initialized
pub fn admin<S: SupplyStorage + ?Sized>(storage: &S) -> Option<Address> {
    storage.get_registry_state().map(|state| state.admin)
}

#[cfg(test)]
mod tests {
    use super::super::mint::{mint, MintParams};
    use super::super::{initialize, RuntimeContext};
    use super::*;
    use crate::supply::storage::MemoryStorage;
    use crate::supply::verifier::AllowListVerifier;

    fn org() -> Address {
        Address::new([10u8; 32])
    }

    #[test]
    fn test_unknown_id_answers_none() {
        let storage = MemoryStorage::default();

        assert_eq!(owner_of(&storage, 1), None);
        assert!(!exists(&storage, 1));
        assert_eq!(get_metadata(&storage, 1), None);
        assert_eq!(get_uri(&storage, 1), None);
        assert_eq!(is_locked(&storage, 1), None);
        assert_eq!(get_versions(&storage, 1), None);
        assert_eq!(get_status(&storage, 1), None);
        assert_eq!(get_licenses(&storage, 1), None);
        assert_eq!(get_collaborators(&storage, 1), None);
    }

    #[test]
    fn test_live_batch_answers_some() {
        let mut storage = MemoryStorage::default();
        let mut verifier = AllowListVerifier::new();
        verifier.allow(org());
        let ctx = RuntimeContext::new(org(), 100);
        let id = mint(
            &mut storage,
            Some(&verifier),
            &ctx,
            MintParams::new(org(), "ipfs://batch/1", 10),
        )
        .unwrap();

        assert_eq!(owner_of(&storage, id), Some(org()));
        assert!(exists(&storage, id));
        assert_eq!(get_uri(&storage, id), Some("ipfs://batch/1".to_string()));
        assert_eq!(is_locked(&storage, id), Some(false));
        // Empty sub-records are Some(empty), not None
        assert_eq!(get_versions(&storage, id), Some(vec![]));
        assert_eq!(get_licenses(&storage, id), Some(vec![]));
        assert_eq!(get_collaborators(&storage, id), Some(vec![]));
        assert!(get_status(&storage, id).is_some());
    }

    #[test]
    fn test_registry_state_queries() {
        let mut storage = MemoryStorage::default();
        assert!(!is_paused(&storage));
        assert_eq!(admin(&storage), None);

        initialize(&mut storage, &org()).unwrap();
        assert!(!is_paused(&storage));
        assert_eq!(admin(&storage), Some(org()));
    }
}
