// Organization Verification Capability
//
// Minting is restricted to approved organizations. The registry does not
// decide trustworthiness itself: it consults an external verification
// capability through the trait below, injected at configuration time.
// When no capability is configured, verification answers negative.

use std::collections::HashSet;

use crate::crypto::Address;

/// External capability answering "is this identity an approved
/// organization".
///
/// Consulted synchronously during minting; the call must not suspend.
pub trait OrganizationVerifier {
    /// Check whether the identity is a verified organization
    fn is_verified(&self, identity: &Address) -> bool;
}

/// Reference verifier backed by an explicit allow set.
///
/// Suitable for single-process hosts and tests; ledger deployments are
/// expected to bridge to their on-chain verification registry instead.
#[derive(Clone, Debug, Default)]
pub struct AllowListVerifier {
    verified: HashSet<Address>,
}

impl AllowListVerifier {
    /// Create an empty verifier (rejects everyone)
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an identity as verified
    pub fn allow(&mut self, identity: Address) {
        self.verified.insert(identity);
    }

    /// Remove an identity from the allow set
    pub fn revoke(&mut self, identity: &Address) {
        self.verified.remove(identity);
    }
}

impl OrganizationVerifier for AllowListVerifier {
    fn is_verified(&self, identity: &Address) -> bool {
        self.verified.contains(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_allow_list_rejects() {
        let verifier = AllowListVerifier::new();
        assert!(!verifier.is_verified(&Address::new([10u8; 32])));
    }

    #[test]
    fn test_allow_and_revoke() {
        let org = Address::new([10u8; 32]);
        let other = Address::new([11u8; 32]);

        let mut verifier = AllowListVerifier::new();
        verifier.allow(org);
        assert!(verifier.is_verified(&org));
        assert!(!verifier.is_verified(&other));

        verifier.revoke(&org);
        assert!(!verifier.is_verified(&org));
    }
}
