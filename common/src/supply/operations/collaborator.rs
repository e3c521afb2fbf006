// Supply Batch Collaborator Operations

use crate::crypto::Address;
use crate::supply::{BatchId, BatchStatus, CollaboratorEntry, SupplyResult};

use super::{check_not_paused, check_owner, record_status, RuntimeContext, SupplyStorage};

/// Record a delegated collaborator on a batch.
///
/// Entries are informational delegation records: they do not gate any
/// registry operation. The list is append-only and unbounded, with no
/// deduplication and no removal operation.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller must be the current owner)
/// - `id`: Batch id
/// - `collaborator`: Delegated identity
/// - `role`: Free-text role name
/// - `permissions`: Ordered permission labels
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(SupplyError)`: Error code
pub fn add_collaborator<S: SupplyStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    id: BatchId,
    collaborator: &Address,
    role: impl Into<String>,
    permissions: Vec<String>,
) -> SupplyResult<()> {
    // Step 1: Gate
    check_not_paused(storage)?;

    // Step 2: Ownership
    check_owner(storage, id, &ctx.caller)?;

    // Step 3: Append with the current clock value
    let mut collaborators = storage.get_collaborators(id);
    collaborators.push(CollaboratorEntry {
        collaborator: *collaborator,
        role: role.into(),
        permissions,
        added_at: ctx.timestamp,
    });
    storage.set_collaborators(id, &collaborators)?;

    // Step 4: Status is written last
    record_status(storage, id, BatchStatus::CollaboratorAdded, ctx.timestamp)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::mint::{mint, MintParams};
    use super::*;
    use crate::supply::storage::MemoryStorage;
    use crate::supply::verifier::AllowListVerifier;
    use crate::supply::SupplyError;

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
    fn test_add_collaborator_success() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 130);
        let partner = Address::new([4u8; 32]);

        add_collaborator(
            &mut storage,
            &ctx,
            id,
            &partner,
            "logistics",
            vec!["track".to_string(), "report".to_string()],
        )
        .unwrap();

        let collaborators = storage.get_collaborators(id);
        assert_eq!(collaborators.len(), 1);
        assert_eq!(collaborators[0].collaborator, partner);
        assert_eq!(collaborators[0].role, "logistics");
        assert_eq!(collaborators[0].added_at, 130);

        let status = storage.get_status(id).unwrap();
        assert_eq!(status.status, BatchStatus::CollaboratorAdded);
        assert_eq!(status.last_updated, 130);
    }

    #[test]
    fn test_add_collaborator_appends_without_dedup() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 130);
        let partner = Address::new([4u8; 32]);

        add_collaborator(&mut storage, &ctx, id, &partner, "logistics", vec![]).unwrap();
        add_collaborator(&mut storage, &ctx, id, &partner, "auditor", vec![]).unwrap();

        let collaborators = storage.get_collaborators(id);
        assert_eq!(collaborators.len(), 2);
        assert_eq!(collaborators[1].role, "auditor");
    }

    #[test]
    fn test_add_collaborator_not_owner_fails() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(Address::new([1u8; 32]), 130);

        assert_eq!(
            add_collaborator(&mut storage, &ctx, id, &org(), "role", vec![]),
            Err(SupplyError::NotOwner)
        );
    }

    #[test]
    fn test_add_collaborator_unknown_batch_fails() {
        let (mut storage, _) = setup();
        let ctx = RuntimeContext::new(org(), 130);

        assert_eq!(
            add_collaborator(&mut storage, &ctx, 42, &org(), "role", vec![]),
            Err(SupplyError::TokenNotFound)
        );
    }
}
