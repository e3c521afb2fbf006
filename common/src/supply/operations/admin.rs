// Registry Administration Operations
//
// Admin operations bypass the pause gate and instead require the caller
// to be the registry admin. The admin identity is set exactly once at
// initialization and is immutable thereafter.

use crate::crypto::Address;
use crate::supply::{RegistryState, SupplyError, SupplyResult};

use super::{check_admin, RuntimeContext, SupplyStorage};

/// Write the initial registry state.
///
/// Fails with `NotAuthorized` if the registry was already initialized;
/// there is no way to replace the admin afterwards.
pub fn initialize<S: SupplyStorage + ?Sized>(
    storage: &mut S,
    admin: &Address,
) -> SupplyResult<()> {
    if storage.get_registry_state().is_some() {
        return Err(SupplyError::NotAuthorized);
    }
    storage.set_registry_state(&RegistryState::new(*admin))
}

/// Engage the global pause switch, blocking all non-admin mutations.
/// Idempotent: pausing a paused registry succeeds.
pub fn pause<S: SupplyStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
) -> SupplyResult<()> {
    let mut state = check_admin(storage, &ctx.caller)?;
    state.paused = true;
    storage.set_registry_state(&state)
}

/// Release the global pause switch.
/// Idempotent: unpausing a running registry succeeds.
pub fn unpause<S: SupplyStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
) -> SupplyResult<()> {
    let mut state = check_admin(storage, &ctx.caller)?;
    state.paused = false;
    storage.set_registry_state(&state)
}
