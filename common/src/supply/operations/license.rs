// Supply Batch Licensing Operations
// Grant, revoke and query time-bound usage licenses on a batch.

use crate::crypto::Address;
use crate::supply::{BatchId, BatchStatus, LicenseEntry, SupplyResult, Timestamp};

use super::validation::validate_duration;
use super::{check_not_paused, check_owner, record_status, RuntimeContext, SupplyStorage};

/// Grant a time-bound usage license on a batch.
///
/// The entry is appended unconditionally: the license list carries no
/// capacity limit and no deduplication, so repeated grants to the same
/// licensee stack. The expiry saturates at the top of the clock range,
/// which reads as a license that never expires.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller must be the current owner)
/// - `id`: Batch id
/// - `licensee`: Identity the grant is issued to
/// - `duration`: Grant lifetime in clock ticks (> 0)
/// - `terms`: Free-text license terms
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(SupplyError)`: Error code
pub fn grant_license<S: SupplyStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    id: BatchId,
    licensee: &Address,
    duration: u64,
    terms: impl Into<String>,
) -> SupplyResult<()> {
    // Step 1: Gate
    check_not_paused(storage)?;

    // Step 2: Ownership
    check_owner(storage, id, &ctx.caller)?;

    // Step 3: Validation
    validate_duration(duration)?;

    // Step 4: Append the grant
    let mut licenses = storage.get_licenses(id);
    licenses.push(LicenseEntry {
        licensee: *licensee,
        expiry: ctx.timestamp.saturating_add(duration),
        terms: terms.into(),
        active: true,
    });
    storage.set_licenses(id, &licenses)?;

    // Step 5: Status is written last
    record_status(storage, id, BatchStatus::LicenseGranted, ctx.timestamp)?;

    Ok(())
}

/// Revoke every license held by a licensee on a batch.
///
/// Matching entries are removed outright, not deactivated; the operation
/// succeeds even when no entry matches.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `ctx`: Runtime context (caller must be the current owner)
/// - `id`: Batch id
/// - `licensee`: Identity whose grants are removed
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(SupplyError)`: Error code
pub fn revoke_license<S: SupplyStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    id: BatchId,
    licensee: &Address,
) -> SupplyResult<()> {
    // Step 1: Gate
    check_not_paused(storage)?;

    // Step 2: Ownership
    check_owner(storage, id, &ctx.caller)?;

    // Step 3: Remove every matching entry
    let mut licenses = storage.get_licenses(id);
    licenses.retain(|entry| entry.licensee != *licensee);
    storage.set_licenses(id, &licenses)?;

    // Step 4: Status is written last
    record_status(storage, id, BatchStatus::LicenseRevoked, ctx.timestamp)?;

    Ok(())
}

/// Check whether a licensee holds an active license on a batch.
///
/// True iff some remaining entry matches the licensee with `active` set
/// and an expiry at or after `now`. Read-only; unknown ids answer false.
pub fn is_license_active<S: SupplyStorage + ?Sized>(
    storage: &S,
    id: BatchId,
    licensee: &Address,
    now: Timestamp,
) -> bool {
    storage
        .get_licenses(id)
        .iter()
        .any(|entry| entry.licensee == *licensee && entry.is_active(now))
}
