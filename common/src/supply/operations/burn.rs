// Supply Batch Burn Operation
// This module contains the terminal retirement logic.

use crate::supply::{BatchId, SupplyResult};

use super::{check_not_paused, check_owner, RuntimeContext, SupplyStorage};

/// Burn (permanently retire) a supply batch.
///
/// Removes ownership, metadata, version history, status, licenses and
/// collaborators in one atomic step. No status record survives, and the
/// id is never reused. There is no operation to revive a burned id.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller must be the current owner)
/// - `id`: Batch id
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(SupplyError)`: Error code
pub fn burn<S: SupplyStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    id: BatchId,
) -> SupplyResult<()> {
    // Step 1: Gate
    check_not_paused(storage)?;

    // Step 2: Only the recorded owner may retire a batch
    check_owner(storage, id, &ctx.caller)?;

    // Step 3: Remove every associated record
    storage.delete_owner(id)?;
    storage.delete_metadata(id)?;
    storage.delete_versions(id)?;
    storage.delete_status(id)?;
    storage.delete_licenses(id)?;
    storage.delete_collaborators(id)?;

    Ok(())
}
