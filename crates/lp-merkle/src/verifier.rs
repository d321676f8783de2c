use std::{fmt, marker::PhantomData};

use crate::{
    config::VerifierConfig,
    digest::Digest32,
    error::{DigestKind, MerkleError},
    level::Side,
    proof::MerkleProof,
    scheme::{HashScheme, Sha256Scheme},
};

/// Recomputes the root implied by a [`MerkleProof`] under hash scheme `S`.
///
/// A verifier holds no state beyond its configuration, so one instance can
/// be shared freely across threads and reused for any number of proofs.
pub struct Verifier<S: HashScheme = Sha256Scheme> {
    config: VerifierConfig,
    scheme: PhantomData<fn() -> S>,
}

impl<S: HashScheme> Verifier<S> {
    /// Create a verifier.  Fails if `S` uses the same prefix byte for leaves
    /// and internal nodes.
    pub fn new(config: VerifierConfig) -> Result<Self, MerkleError> {
        if S::LEAF_PREFIX == S::NODE_PREFIX {
            return Err(MerkleError::PrefixCollision(S::LEAF_PREFIX));
        }

        Ok(Self {
            config,
            scheme: PhantomData,
        })
    }

    /// Fold the leaf digest upward through every level, index 0 first.
    pub fn implied_root(&self, proof: &MerkleProof) -> Result<Digest32, MerkleError> {
        if !self.config.leaf_allowed(proof.leaf_id().len()) {
            return Err(MerkleError::EmptyLeafIdentifier);
        }

        let leaf = S::leaf_hash(proof.leaf_id());
        let root = proof
            .levels()
            .iter()
            .fold(leaf, |running, level| match level.side() {
                Side::Left => S::node_hash(level.digest(), &running),
                Side::Right => S::node_hash(&running, level.digest()),
            });

        Ok(root)
    }

    /// Returns `Ok(true)` if `proof` reproduces `expected_root`.
    ///
    /// A root that is not exactly [`crate::DIGEST_LEN`] bytes is an error,
    /// never a `false`.
    pub fn verify(
        &self,
        proof: &MerkleProof,
        expected_root: &[u8],
    ) -> Result<bool, MerkleError> {
        let expected = Digest32::parse(expected_root, DigestKind::Root)?;
        Ok(self.implied_root(proof)? == expected)
    }
}

impl Default for Verifier<Sha256Scheme> {
    fn default() -> Self {
        Self {
            config: VerifierConfig::default(),
            scheme: PhantomData,
        }
    }
}

impl<S: HashScheme> Clone for Verifier<S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            scheme: PhantomData,
        }
    }
}

impl<S: HashScheme> fmt::Debug for Verifier<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("config", &self.config)
            .field("leaf_prefix", &S::LEAF_PREFIX)
            .field("node_prefix", &S::NODE_PREFIX)
            .finish()
    }
}
