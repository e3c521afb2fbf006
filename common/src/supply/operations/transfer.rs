// Supply Batch Transfer Operation
// This module contains the ownership transfer logic.

use crate::crypto::Address;
use crate::supply::{BatchId, BatchStatus, SupplyError, SupplyResult};

use super::validation::validate_recipient;
use super::{check_not_paused, record_status, RuntimeContext, SupplyStorage};

/// Transfer a supply batch to a new owner.
///
/// The recorded owner must equal the asserted `sender`; the caller
/// itself is not required to hold the batch, which permits delegated
/// transfers initiated on the owner's behalf. Hosts layer any caller
/// policy of their own on top of this check.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller, logical clock)
/// - `id`: Batch id
/// - `sender`: Asserted current owner
/// - `to`: New owner
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(SupplyError)`: Error code
pub fn transfer<S: SupplyStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    id: BatchId,
    sender: &Address,
    to: &Address,
) -> SupplyResult<()> {
    // Step 1: Gate
    check_not_paused(storage)?;

    // Step 2: The batch must exist and the asserted sender must match
    let owner = storage.get_owner(id).ok_or(SupplyError::TokenNotFound)?;
    if owner != *sender {
        return Err(SupplyError::NotOwner);
    }

    // Step 3: Locked batches cannot move
    let metadata = storage.get_metadata(id).ok_or(SupplyError::TokenNotFound)?;
    if metadata.locked {
        return Err(SupplyError::TokenLocked);
    }

    // Step 4: The burn identity cannot receive
    validate_recipient(to)?;

    // Step 5: Execute transfer
    storage.set_owner(id, to)?;

    // Step 6: Status is written last
    record_status(storage, id, BatchStatus::Transferred, ctx.timestamp)?;

    Ok(())
}
