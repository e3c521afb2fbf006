// Supply Batch Registry - Error Codes
// This module defines all error codes for supply batch operations.
//
// Error Code Ranges:
// - 0: Success
// - 1-99: Registry errors
// - 100-199: Batch state errors
// - 200-299: Permission errors
// - 300-399: Input validation errors
// - 900-999: System errors

use thiserror::Error;

/// Supply batch operation result type
pub type SupplyResult<T> = Result<T, SupplyError>;

/// Supply batch error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum SupplyError {
    // ========================================
    // Registry errors (1-99)
    // ========================================
    #[error("Registry is paused")]
    Paused = 1,

    // ========================================
    // Batch state errors (100-199)
    // ========================================
    #[error("Token not found")]
    TokenNotFound = 100,

    #[error("Token is locked")]
    TokenLocked = 101,

    #[error("Version history is full")]
    HistoryFull = 102,

    #[error("License expired")]
    LicenseExpired = 103,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Not the owner")]
    NotOwner = 200,

    #[error("Not the admin")]
    NotAdmin = 201,

    #[error("Caller is not a verified organization")]
    NotVerified = 202,

    #[error("Not authorized")]
    NotAuthorized = 203,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Invalid URI")]
    InvalidUri = 300,

    #[error("Invalid metadata")]
    InvalidMetadata = 301,

    #[error("Invalid quantity")]
    InvalidQuantity = 302,

    #[error("Invalid recipient")]
    InvalidRecipient = 303,

    #[error("Too many tags")]
    TooManyTags = 304,

    #[error("Invalid version")]
    InvalidVersion = 305,

    #[error("Invalid duration")]
    InvalidDuration = 306,

    #[error("Invalid status")]
    InvalidStatus = 307,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,

    #[error("Storage error")]
    StorageError = 901,
}

impl SupplyError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::Paused),
            100 => Some(Self::TokenNotFound),
            101 => Some(Self::TokenLocked),
            102 => Some(Self::HistoryFull),
            103 => Some(Self::LicenseExpired),
            200 => Some(Self::NotOwner),
            201 => Some(Self::NotAdmin),
            202 => Some(Self::NotVerified),
            203 => Some(Self::NotAuthorized),
            300 => Some(Self::InvalidUri),
            301 => Some(Self::InvalidMetadata),
            302 => Some(Self::InvalidQuantity),
            303 => Some(Self::InvalidRecipient),
            304 => Some(Self::TooManyTags),
            305 => Some(Self::InvalidVersion),
            306 => Some(Self::InvalidDuration),
            307 => Some(Self::InvalidStatus),
            900 => Some(Self::Overflow),
            901 => Some(Self::StorageError),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ERRORS: [SupplyError; 19] = [
        SupplyError::Paused,
        SupplyError::TokenNotFound,
        SupplyError::TokenLocked,
        SupplyError::HistoryFull,
        SupplyError::LicenseExpired,
        SupplyError::NotOwner,
        SupplyError::NotAdmin,
        SupplyError::NotVerified,
        SupplyError::NotAuthorized,
        SupplyError::InvalidUri,
        SupplyError::InvalidMetadata,
        SupplyError::InvalidQuantity,
        SupplyError::InvalidRecipient,
        SupplyError::TooManyTags,
        SupplyError::InvalidVersion,
        SupplyError::InvalidDuration,
        SupplyError::InvalidStatus,
        SupplyError::Overflow,
        SupplyError::StorageError,
    ];

    #[test]
    fn test_error_codes_unique() {
        let mut seen = std::collections::HashSet::new();
        for err in ALL_ERRORS {
            let code = err.code();
            assert!(
                seen.insert(code),
                "Duplicate error code: {} for {:?}",
                code,
                err
            );
        }
    }

    #[test]
    fn test_error_code_roundtrip() {
        for err in ALL_ERRORS {
            assert_eq!(SupplyError::from_code(err.code()), Some(err));
        }
    }

    #[test]
    fn test_unknown_error_code() {
        assert_eq!(SupplyError::from_code(0), None);
        assert_eq!(SupplyError::from_code(9999), None);
    }
}
