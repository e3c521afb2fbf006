// Supply Batch Metadata Update Operation

use crate::supply::{BatchId, BatchStatus, SupplyError, SupplyResult};

use super::validation::{validate_description, validate_uri};
use super::{check_not_paused, check_owner, record_status, RuntimeContext, SupplyStorage};

/// Replace the URI and description of a batch.
///
/// Quantity, expiration, tags and the lock flag are untouched; use the
/// version history to record the revision trail. Editing is allowed
/// while the batch is locked.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller must be the current owner)
/// - `id`: Batch id
/// - `uri`: New metadata URI (1-256 bytes)
/// - `description`: New description (max 500 bytes)
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(SupplyError)`: Error code
pub fn update_metadata<S: SupplyStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    id: BatchId,
    uri: impl Into<String>,
    description: impl Into<String>,
) -> SupplyResult<()> {
    let uri = uri.into();
    let description = description.into();

    // Step 1: Gate
    check_not_paused(storage)?;

    // Step 2: Ownership
    check_owner(storage, id, &ctx.caller)?;

    // Step 3: Input validation
    validate_uri(&uri)?;
    validate_description(&description)?;

    // Step 4: Replace only the two descriptive fields
    let mut metadata = storage.get_metadata(id).ok_or(SupplyError::TokenNotFound)?;
    metadata.uri = uri;
    metadata.description = description;
    storage.set_metadata(id, &metadata)?;

    // Step 5: Status is written last
    record_status(storage, id, BatchStatus::MetadataUpdated, ctx.timestamp)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::mint::{mint, MintParams};
    use super::*;
    use crate::crypto::Address;
    use crate::supply::storage::MemoryStorage;
    use crate::supply::verifier::AllowListVerifier;
    use crate::supply::MAX_DESCRIPTION_LENGTH;

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
            MintParams::new(org(), "ipfs://batch/1", 10)
                .with_supply_type("medical")
                .with_tags(vec!["medical".to_string()])
                .with_expiration(900),
        )
        .unwrap();
        (storage, id)
    }

    #[test]
    fn test_update_replaces_uri_and_description_only() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 120);

        update_metadata(&mut storage, &ctx, id, "ipfs://batch/1/v2", "rerouted").unwrap();

        let metadata = storage.get_metadata(id).unwrap();
        assert_eq!(metadata.uri, "ipfs://batch/1/v2");
        assert_eq!(metadata.description, "rerouted");
        // Everything else survives the edit
        assert_eq!(metadata.supply_type, "medical");
        assert_eq!(metadata.quantity, 10);
        assert_eq!(metadata.expiration, Some(900));
        assert_eq!(metadata.tags, vec!["medical".to_string()]);
        assert!(!metadata.locked);

        let status = storage.get_status(id).unwrap();
        assert_eq!(status.status, BatchStatus::MetadataUpdated);
        assert_eq!(status.last_updated, 120);
    }

    #[test]
    fn test_update_allowed_while_locked() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 120);
        super::super::lock(&mut storage, &ctx, id).unwrap();

        update_metadata(&mut storage, &ctx, id, "ipfs://batch/1/v2", "").unwrap();
        assert!(storage.get_metadata(id).unwrap().locked);
    }

    #[test]
    fn test_update_invalid_inputs() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 120);

        assert_eq!(
            update_metadata(&mut storage, &ctx, id, "", "ok"),
            Err(SupplyError::InvalidUri)
        );
        assert_eq!(
            update_metadata(
                &mut storage,
                &ctx,
                id,
                "ipfs://x",
                "x".repeat(MAX_DESCRIPTION_LENGTH + 1)
            ),
            Err(SupplyError::InvalidMetadata)
        );

        // Record untouched after failures
        assert_eq!(storage.get_metadata(id).unwrap().uri, "ipfs://batch/1");
    }

    #[test]
    fn test_update_not_owner_fails() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(Address::new([1u8; 32]), 120);

        assert_eq!(
            update_metadata(&mut storage, &ctx, id, "ipfs://x", ""),
            Err(SupplyError::NotOwner)
        );
    }
}
