// Supply Batch Registry for the Relief Network
// This module tracks humanitarian aid shipments as unique, singly-owned
// batch records on the ledger.
//
// Features:
// - Sequential batch ids, never reused after retirement
// - Per-batch metadata with a bounded, append-only revision history
// - Time-bound usage licenses and delegated collaborator records
// - Transfer locking and a global admin pause switch
// - Organization verification delegated to an external capability
//
// Module Structure:
// - error: Error codes and types
// - types: Core data structures (BatchMetadata, LicenseEntry, etc.)
// - storage: Storage key layout and the in-memory backend
// - verifier: Organization verification capability
// - operations: Core operation logic (mint, transfer, burn, query, ...)
// - registry: The SupplyRegistry facade

mod error;
pub mod operations;
mod registry;
mod storage;
mod types;
mod verifier;

pub use error::*;
pub use operations::{MintParams, RuntimeContext, SupplyStorage};
pub use registry::*;
pub use storage::*;
pub use types::*;
pub use verifier::*;
