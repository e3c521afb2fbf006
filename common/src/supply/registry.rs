// Supply Batch Registry Facade
//
// `SupplyRegistry` ties a storage backend, the singleton registry state
// and the optional organization-verification capability together behind
// one call surface. The host serializes calls into it; nothing here
// suspends or spawns.

use log::{debug, trace};

use crate::crypto::Address;

use super::operations::{self, query, MintParams, RuntimeContext, SupplyStorage};
use super::storage::MemoryStorage;
use super::verifier::OrganizationVerifier;
use super::{
    BatchId, BatchMetadata, CollaboratorEntry, LicenseEntry, StatusRecord, SupplyResult,
    Timestamp, VersionEntry,
};

/// The supply batch registry.
///
/// The verification capability is runtime state: it is injected through
/// [`SupplyRegistry::set_verification_capability`] and not persisted.
/// While none is configured, minting fails verification.
pub struct SupplyRegistry<S: SupplyStorage> {
    storage: S,
    verifier: Option<Box<dyn OrganizationVerifier>>,
}

impl SupplyRegistry<MemoryStorage> {
    /// Create a registry over a fresh in-memory backend
    pub fn in_memory(admin: Address) -> Self {
        let mut storage = MemoryStorage::new();
        // A fresh backend cannot already be initialized
        operations::initialize(&mut storage, &admin)
            .unwrap_or_else(|_| unreachable!("fresh storage is uninitialized"));
        Self {
            storage,
            verifier: None,
        }
    }
}

impl<S: SupplyStorage> SupplyRegistry<S> {
    /// Initialize a registry over the given backend.
    ///
    /// Writes the singleton state with the given admin; fails with
    /// `NotAuthorized` if the backend was already initialized.
    pub fn new(mut storage: S, admin: Address) -> SupplyResult<Self> {
        operations::initialize(&mut storage, &admin)?;
        debug!("supply registry initialized, admin {}", admin);
        Ok(Self {
            storage,
            verifier: None,
        })
    }

    /// Resume a registry over an already-initialized backend.
    /// Returns `None` if the backend holds no registry state.
    pub fn open(storage: S) -> Option<Self> {
        query::admin(&storage)?;
        Some(Self {
            storage,
            verifier: None,
        })
    }

    /// Borrow the underlying storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the registry, returning the storage backend
    pub fn into_storage(self) -> S {
        self.storage
    }

    // ========================================
    // Admin operations
    // ========================================

    /// Engage the global pause switch (admin only)
    pub fn pause(&mut self, ctx: &RuntimeContext) -> SupplyResult<()> {
        operations::pause(&mut self.storage, ctx)?;
        debug!("registry paused by {}", ctx.caller);
        Ok(())
    }

    /// Release the global pause switch (admin only)
    pub fn unpause(&mut self, ctx: &RuntimeContext) -> SupplyResult<()> {
        operations::unpause(&mut self.storage, ctx)?;
        debug!("registry unpaused by {}", ctx.caller);
        Ok(())
    }

    /// Install the organization-verification capability (admin only).
    /// Replaces any previously configured capability.
    pub fn set_verification_capability(
        &mut self,
        ctx: &RuntimeContext,
        verifier: Box<dyn OrganizationVerifier>,
    ) -> SupplyResult<()> {
        operations::check_admin(&self.storage, &ctx.caller)?;
        self.verifier = Some(verifier);
        debug!("verification capability configured by {}", ctx.caller);
        Ok(())
    }

    // ========================================
    // Mutating operations
    // ========================================

    /// Mint a new supply batch, returning its id
    pub fn mint(&mut self, ctx: &RuntimeContext, params: MintParams) -> SupplyResult<BatchId> {
        let id = operations::mint(&mut self.storage, self.verifier.as_deref(), ctx, params)?;
        debug!("minted batch {} (caller {})", id, ctx.caller);
        Ok(id)
    }

    /// Transfer a batch from the asserted sender to a new owner
    pub fn transfer(
        &mut self,
        ctx: &RuntimeContext,
        id: BatchId,
        sender: &Address,
        to: &Address,
    ) -> SupplyResult<()> {
        operations::transfer(&mut self.storage, ctx, id, sender, to)?;
        debug!("transferred batch {} from {} to {}", id, sender, to);
        Ok(())
    }

    /// Permanently retire a batch and every record attached to it
    pub fn burn(&mut self, ctx: &RuntimeContext, id: BatchId) -> SupplyResult<()> {
        operations::burn(&mut self.storage, ctx, id)?;
        debug!("burned batch {} (caller {})", id, ctx.caller);
        Ok(())
    }

    /// Replace the URI and description of a batch
    pub fn update_metadata(
        &mut self,
        ctx: &RuntimeContext,
        id: BatchId,
        uri: impl Into<String>,
        description: impl Into<String>,
    ) -> SupplyResult<()> {
        trace!("updating metadata of batch {}", id);
        operations::update_metadata(&mut self.storage, ctx, id, uri, description)
    }

    /// Append a revision to the batch version history
    pub fn add_version(
        &mut self,
        ctx: &RuntimeContext,
        id: BatchId,
        version: u64,
        updated_uri: impl Into<String>,
        notes: impl Into<String>,
    ) -> SupplyResult<()> {
        trace!("adding version {} to batch {}", version, id);
        operations::add_version(&mut self.storage, ctx, id, version, updated_uri, notes)
    }

    /// Grant a time-bound usage license on a batch
    pub fn grant_license(
        &mut self,
        ctx: &RuntimeContext,
        id: BatchId,
        licensee: &Address,
        duration: u64,
        terms: impl Into<String>,
    ) -> SupplyResult<()> {
        trace!("granting license on batch {} to {}", id, licensee);
        operations::grant_license(&mut self.storage, ctx, id, licensee, duration, terms)
    }

    /// Remove every license held by a licensee on a batch
    pub fn revoke_license(
        &mut self,
        ctx: &RuntimeContext,
        id: BatchId,
        licensee: &Address,
    ) -> SupplyResult<()> {
        trace!("revoking licenses on batch {} for {}", id, licensee);
        operations::revoke_license(&mut self.storage, ctx, id, licensee)
    }

    /// Record a delegated collaborator on a batch
    pub fn add_collaborator(
        &mut self,
        ctx: &RuntimeContext,
        id: BatchId,
        collaborator: &Address,
        role: impl Into<String>,
        permissions: Vec<String>,
    ) -> SupplyResult<()> {
        trace!("adding collaborator {} to batch {}", collaborator, id);
        operations::add_collaborator(&mut self.storage, ctx, id, collaborator, role, permissions)
    }

    /// Lock a batch against transfer
    pub fn lock(&mut self, ctx: &RuntimeContext, id: BatchId) -> SupplyResult<()> {
        operations::lock(&mut self.storage, ctx, id)?;
        debug!("locked batch {}", id);
        Ok(())
    }

    /// Unlock a previously locked batch
    pub fn unlock(&mut self, ctx: &RuntimeContext, id: BatchId) -> SupplyResult<()> {
        operations::unlock(&mut self.storage, ctx, id)?;
        debug!("unlocked batch {}", id);
        Ok(())
    }

    // ========================================
    // Read-only queries
    // ========================================

    /// Current owner of a batch
    pub fn owner_of(&self, id: BatchId) -> Option<Address> {
        query::owner_of(&self.storage, id)
    }

    /// Whether the batch exists (minted and not yet burned)
    pub fn exists(&self, id: BatchId) -> bool {
        query::exists(&self.storage, id)
    }

    /// Full metadata record of a batch
    pub fn get_metadata(&self, id: BatchId) -> Option<BatchMetadata> {
        query::get_metadata(&self.storage, id)
    }

    /// Metadata URI of a batch
    pub fn get_uri(&self, id: BatchId) -> Option<String> {
        query::get_uri(&self.storage, id)
    }

    /// Lock flag of a batch
    pub fn is_locked(&self, id: BatchId) -> Option<bool> {
        query::is_locked(&self.storage, id)
    }

    /// Version history of a batch
    pub fn get_versions(&self, id: BatchId) -> Option<Vec<VersionEntry>> {
        query::get_versions(&self.storage, id)
    }

    /// Current lifecycle status of a batch
    pub fn get_status(&self, id: BatchId) -> Option<StatusRecord> {
        query::get_status(&self.storage, id)
    }

    /// License list of a batch
    pub fn get_licenses(&self, id: BatchId) -> Option<Vec<LicenseEntry>> {
        query::get_licenses(&self.storage, id)
    }

    /// Collaborator list of a batch
    pub fn get_collaborators(&self, id: BatchId) -> Option<Vec<CollaboratorEntry>> {
        query::get_collaborators(&self.storage, id)
    }

    /// Whether a licensee holds an active license at the given clock value
    pub fn is_license_active(&self, id: BatchId, licensee: &Address, now: Timestamp) -> bool {
        operations::is_license_active(&self.storage, id, licensee, now)
    }

    /// Global pause flag
    pub fn is_paused(&self) -> bool {
        query::is_paused(&self.storage)
    }

    /// Registry admin identity
    pub fn admin(&self) -> Option<Address> {
        query::admin(&self.storage)
    }
}
