/// Whether a proof may carry an empty leaf identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeafPolicy {
    /// Reject empty leaves with [`crate::MerkleError::EmptyLeafIdentifier`]
    /// (default).
    #[default]
    RequireNonEmpty,
    /// Hash an empty leaf like any other payload.
    AllowEmpty,
}

/// Full configuration for a [`crate::Verifier`].
///
/// The hash function and prefix bytes are not part of this struct; they are
/// fixed by the verifier's [`crate::HashScheme`] type parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifierConfig {
    /// How empty leaf identifiers are treated.  Defaults to
    /// [`LeafPolicy::RequireNonEmpty`].
    pub leaf_policy: LeafPolicy,
}

impl VerifierConfig {
    /// Create a config that accepts empty leaf identifiers.
    ///
    /// Only useful for ledgers that actually commit to empty payloads; most
    /// transaction trees never do.
    pub fn allowing_empty_leaves() -> Self {
        Self {
            leaf_policy: LeafPolicy::AllowEmpty,
        }
    }

    /// Returns `true` if a leaf identifier of length `len` passes the policy.
    pub fn leaf_allowed(&self, len: usize) -> bool {
        match self.leaf_policy {
            LeafPolicy::RequireNonEmpty => len > 0,
            LeafPolicy::AllowEmpty => true,
        }
    }
}
