// Supply Batch Version History Operation

use crate::supply::{
    BatchId, BatchStatus, SupplyError, SupplyResult, VersionEntry, MAX_VERSION_HISTORY,
};

use super::validation::{validate_uri, validate_version};
use super::{check_not_paused, check_owner, record_status, RuntimeContext, SupplyStorage};

/// Append a metadata revision to the batch version history.
///
/// The history holds at most 5 entries; a full history rejects the
/// append with `HistoryFull` and keeps the existing entries unchanged.
/// The caller-supplied version number only has to be non-zero: duplicate
/// and out-of-order numbers are permitted.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller must be the current owner)
/// - `id`: Batch id
/// - `version`: Caller-supplied revision number (> 0)
/// - `updated_uri`: URI of the revised metadata document (non-empty)
/// - `notes`: Free-text revision notes
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(SupplyError)`: Error code
pub fn add_version<S: SupplyStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    id: BatchId,
    version: u64,
    updated_uri: impl Into<String>,
    notes: impl Into<String>,
) -> SupplyResult<()> {
    let updated_uri = updated_uri.into();

    // Step 1: Gate
    check_not_paused(storage)?;

    // Step 2: Ownership
    check_owner(storage, id, &ctx.caller)?;

    // Step 3: Validation, in precondition order
    validate_version(version)?;
    let mut versions = storage.get_versions(id);
    if versions.len() >= MAX_VERSION_HISTORY {
        return Err(SupplyError::HistoryFull);
    }
    validate_uri(&updated_uri)?;

    // Step 4: Append with the current clock value
    versions.push(VersionEntry {
        version,
        updated_uri,
        notes: notes.into(),
        timestamp: ctx.timestamp,
    });
    storage.set_versions(id, &versions)?;

    // Step 5: Status is written last
    record_status(storage, id, BatchStatus::VersionAdded, ctx.timestamp)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::mint::{mint, MintParams};
    use super::*;
    use crate::crypto::Address;
    use crate::supply::storage::MemoryStorage;
    use crate::supply::verifier::AllowListVerifier;

    fn org() -> Address {
        Address::new([10u8; 32])
    }

    fn setup() -> (MemoryStorage, BatchId) {
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
        (storage, id)
    }

    #[test]
    fn test_add_version_success() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 150);

        add_version(&mut storage, &ctx, id, 2, "ipfs://batch/1/v2", "customs cleared").unwrap();

        let versions = storage.get_versions(id);
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].version, 2);
        assert_eq!(versions[0].updated_uri, "ipfs://batch/1/v2");
        assert_eq!(versions[0].timestamp, 150);

        let status = storage.get_status(id).unwrap();
        assert_eq!(status.status, BatchStatus::VersionAdded);
    }

    #[test]
    fn test_add_version_duplicates_permitted() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 150);

        add_version(&mut storage, &ctx, id, 7, "ipfs://a", "").unwrap();
        add_version(&mut storage, &ctx, id, 7, "ipfs://b", "").unwrap();
        add_version(&mut storage, &ctx, id, 3, "ipfs://c", "").unwrap();

        let versions = storage.get_versions(id);
        assert_eq!(
            versions.iter().map(|v| v.version).collect::<Vec<_>>(),
            vec![7, 7, 3]
        );
    }

    #[test]
    fn test_add_version_history_full() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 150);

        for n in 1..=MAX_VERSION_HISTORY as u64 {
            add_version(&mut storage, &ctx, id, n, format!("ipfs://v{}", n), "").unwrap();
        }

        let result = add_version(&mut storage, &ctx, id, 6, "ipfs://v6", "");
        assert_eq!(result, Err(SupplyError::HistoryFull));

        // The existing entries are unchanged
        let versions = storage.get_versions(id);
        assert_eq!(versions.len(), MAX_VERSION_HISTORY);
        assert_eq!(versions.last().unwrap().version, 5);
    }

    #[test]
    fn test_add_version_invalid_inputs() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 150);

        assert_eq!(
            add_version(&mut storage, &ctx, id, 0, "ipfs://v0", ""),
            Err(SupplyError::InvalidVersion)
        );
        assert_eq!(
            add_version(&mut storage, &ctx, id, 1, "", ""),
            Err(SupplyError::InvalidUri)
        );
        assert!(storage.get_versions(id).is_empty());
    }

    #[test]
    fn test_add_version_not_owner_fails() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(Address::new([1u8; 32]), 150);

        assert_eq!(
            add_version(&mut storage, &ctx, id, 1, "ipfs://v1", ""),
            Err(SupplyError::NotOwner)
        );
    }
}
