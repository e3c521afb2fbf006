// Supply Batch Mint Operation
// This module contains the mint operation logic.

use crate::crypto::Address;
use crate::supply::verifier::OrganizationVerifier;
use crate::supply::{BatchId, BatchMetadata, BatchStatus, SupplyError, SupplyResult, Timestamp};

use super::validation::{validate_description, validate_quantity, validate_tags, validate_uri};
use super::{check_not_paused, record_status, RuntimeContext, SupplyStorage};

// ========================================
// Mint Parameters
// ========================================

/// Parameters for minting a supply batch
#[derive(Clone, Debug)]
pub struct MintParams {
    /// Recipient identity (initial owner)
    pub to: Address,
    /// Metadata URI (1-256 bytes)
    pub uri: String,
    /// Kind of supplies carried
    pub supply_type: String,
    /// Number of units (> 0)
    pub quantity: u64,
    /// Optional expiry of the goods (logical-clock value)
    pub expiration: Option<Timestamp>,
    /// Free-text description (max 500 bytes)
    pub description: String,
    /// Classification tags (max 10)
    pub tags: Vec<String>,
}

impl MintParams {
    /// Create new mint parameters
    pub fn new(to: Address, uri: impl Into<String>, quantity: u64) -> Self {
        Self {
            to,
            uri: uri.into(),
            supply_type: String::new(),
            quantity,
            expiration: None,
            description: String::new(),
            tags: Vec::new(),
        }
    }

    /// Set the supply type
    pub fn with_supply_type(mut self, supply_type: impl Into<String>) -> Self {
        self.supply_type = supply_type.into();
        self
    }

    /// Set the goods expiry
    pub fn with_expiration(mut self, expiration: Timestamp) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

// ========================================
// Mint Operation
// ========================================

/// Mint a new supply batch.
///
/// The caller must pass organization verification; a missing capability
/// is equivalent to a negative answer. Checks run in a fixed order, so
/// the first violated condition determines the reported error.
///
/// # Parameters
/// - `storage`: Storage backend
/// - `verifier`: Verification capability, if configured
/// - `ctx`: Runtime context (caller, logical clock)
/// - `params`: Mint parameters
///
/// # Returns
/// - `Ok(BatchId)`: The newly allocated batch id
/// - `Err(SupplyError)`: Error code
pub fn mint<S: SupplyStorage + ?Sized>(
    storage: &mut S,
    verifier: Option<&dyn OrganizationVerifier>,
    ctx: &RuntimeContext,
    params: MintParams,
) -> SupplyResult<BatchId> {
    // Step 1: Gate
    check_not_paused(storage)?;

    // Step 2: Organization verification
    match verifier {
        Some(v) if v.is_verified(&ctx.caller) => {}
        _ => return Err(SupplyError::NotVerified),
    }

    // Step 3: Input validation
    validate_uri(&params.uri)?;
    validate_quantity(params.quantity)?;
    validate_description(&params.description)?;
    validate_tags(&params.tags)?;

    // Step 4: Allocate the next sequential id
    let id = storage.allocate_batch_id()?;

    // Step 5: Create ownership and metadata records
    storage.set_owner(id, &params.to)?;
    storage.set_metadata(
        id,
        &BatchMetadata {
            uri: params.uri,
            supply_type: params.supply_type,
            quantity: params.quantity,
            expiration: params.expiration,
            description: params.description,
            tags: params.tags,
            locked: false,
        },
    )?;

    // Step 6: Status is written last
    record_status(storage, id, BatchStatus::Minted, ctx.timestamp)?;

    Ok(id)
}
