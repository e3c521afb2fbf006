// Supply Batch Input Validation Helpers
// This module provides validation functions for operation inputs.

use crate::crypto::Address;
use crate::supply::{
    SupplyError, SupplyResult, MAX_DESCRIPTION_LENGTH, MAX_TAGS_COUNT, MAX_URI_LENGTH,
};

/// Validate a metadata URI (non-empty, bounded)
pub fn validate_uri(uri: &str) -> SupplyResult<()> {
    if uri.is_empty() || uri.len() > MAX_URI_LENGTH {
        return Err(SupplyError::InvalidUri);
    }
    Ok(())
}

/// Validate a batch quantity (must be positive)
pub fn validate_quantity(quantity: u64) -> SupplyResult<()> {
    if quantity == 0 {
        return Err(SupplyError::InvalidQuantity);
    }
    Ok(())
}

/// Validate a description (bounded, may be empty)
pub fn validate_description(description: &str) -> SupplyResult<()> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(SupplyError::InvalidMetadata);
    }
    Ok(())
}

/// Validate a tag list (bounded count)
pub fn validate_tags(tags: &[String]) -> SupplyResult<()> {
    if tags.len() > MAX_TAGS_COUNT {
        return Err(SupplyError::TooManyTags);
    }
    Ok(())
}

/// Validate a caller-supplied version number (must be positive)
pub fn validate_version(version: u64) -> SupplyResult<()> {
    if version == 0 {
        return Err(SupplyError::InvalidVersion);
    }
    Ok(())
}

/// Validate a license duration (must be positive)
pub fn validate_duration(duration: u64) -> SupplyResult<()> {
    if duration == 0 {
        return Err(SupplyError::InvalidDuration);
    }
    Ok(())
}

/// Validate a transfer recipient (must not be the null/burn identity)
pub fn validate_recipient(recipient: &Address) -> SupplyResult<()> {
    if recipient.is_zero() {
        return Err(SupplyError::InvalidRecipient);
    }
    Ok(())
}
