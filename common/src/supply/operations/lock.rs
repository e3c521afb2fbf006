// Supply Batch Lock/Unlock Operations
//
// Locking blocks ownership transfer only; metadata edits, versioning,
// licensing and collaborator delegation remain available while locked.

use crate::supply::{BatchId, BatchStatus, SupplyError, SupplyResult};

use super::{check_not_paused, check_owner, record_status, RuntimeContext, SupplyStorage};

/// Lock a batch against transfer.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller must be the current owner)
/// - `id`: Batch id
///
/// # Returns
/// - `Ok(())` on success
/// - `Err(SupplyError::TokenNotFound)` if the batch doesn't exist
/// - `Err(SupplyError::NotOwner)` if the caller is not the owner
/// - `Err(SupplyError::TokenLocked)` if already locked
pub fn lock<S: SupplyStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    id: BatchId,
) -> SupplyResult<()> {
    // 1. Gate
    check_not_paused(storage)?;

    // 2. Ownership
    check_owner(storage, id, &ctx.caller)?;

    // 3. Flip the flag, rejecting a redundant lock
    let mut metadata = storage.get_metadata(id).ok_or(SupplyError::TokenNotFound)?;
    if metadata.locked {
        return Err(SupplyError::TokenLocked);
    }
    metadata.locked = true;
    storage.set_metadata(id, &metadata)?;

    // 4. Status is written last
    record_status(storage, id, BatchStatus::Locked, ctx.timestamp)?;

    Ok(())
}

/// Unlock a previously locked batch.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller must be the current owner)
/// - `id`: Batch id
///
/// # Returns
/// - `Ok(())` on success
/// - `Err(SupplyError::TokenNotFound)` if the batch doesn't exist
/// - `Err(SupplyError::NotOwner)` if the caller is not the owner
/// - `Err(SupplyError::InvalidStatus)` if not currently locked
pub fn unlock<S: SupplyStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    id: BatchId,
) -> SupplyResult<()> {
    // 1. Gate
    check_not_paused(storage)?;

    // 2. Ownership
    check_owner(storage, id, &ctx.caller)?;

    // 3. Flip the flag, rejecting a redundant unlock
    let mut metadata = storage.get_metadata(id).ok_or(SupplyError::TokenNotFound)?;
    if !metadata.locked {
        return Err(SupplyError::InvalidStatus);
    }
    metadata.locked = false;
    storage.set_metadata(id, &metadata)?;

    // 4. Status is written last
    record_status(storage, id, BatchStatus::Unlocked, ctx.timestamp)?;

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
    fn test_lock_unlock_roundtrip() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 110);

        lock(&mut storage, &ctx, id).unwrap();
        assert!(storage.get_metadata(id).unwrap().locked);
        assert_eq!(
            storage.get_status(id).unwrap().status,
            BatchStatus::Locked
        );

        let ctx = RuntimeContext::new(org(), 111);
        unlock(&mut storage, &ctx, id).unwrap();
        assert!(!storage.get_metadata(id).unwrap().locked);
        let status = storage.get_status(id).unwrap();
        assert_eq!(status.status, BatchStatus::Unlocked);
        assert_eq!(status.last_updated, 111);
    }

    #[test]
    fn test_lock_twice_fails() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 110);

        lock(&mut storage, &ctx, id).unwrap();
        assert_eq!(lock(&mut storage, &ctx, id), Err(SupplyError::TokenLocked));
    }

    #[test]
    fn test_unlock_unlocked_fails() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(org(), 110);

        assert_eq!(
            unlock(&mut storage, &ctx, id),
            Err(SupplyError::InvalidStatus)
        );
    }

    #[test]
    fn test_lock_not_owner_fails() {
        let (mut storage, id) = setup();
        let ctx = RuntimeContext::new(Address::new([1u8; 32]), 110);

        assert_eq!(lock(&mut storage, &ctx, id), Err(SupplyError::NotOwner));
    }
}
