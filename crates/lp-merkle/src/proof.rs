use serde::{Deserialize, Serialize};

use crate::{
    digest::Digest32,
    error::MerkleError,
    level::LevelNode,
    scheme::{HashScheme, Sha256Scheme},
    verifier::Verifier,
};

/// An inclusion proof for a single leaf.
///
/// Verify by hashing the leaf upward through each sibling until the computed
/// root matches the expected root.  `levels[0]` is the sibling of the leaf and
/// the last entry is the sibling just below the root; an empty `levels` is the
/// proof for a single-leaf tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Raw leaf payload (e.g. a transaction id); hashed with the leaf prefix.
    #[serde(rename = "leafData", with = "hex::serde")]
    leaf_id: Vec<u8>,
    /// Ordered list of siblings from leaf to root.
    levels: Vec<LevelNode>,
}

impl MerkleProof {
    pub fn new(leaf_id: impl Into<Vec<u8>>, levels: Vec<LevelNode>) -> Self {
        Self {
            leaf_id: leaf_id.into(),
            levels,
        }
    }

    pub fn leaf_id(&self) -> &[u8] {
        &self.leaf_id
    }

    pub fn levels(&self) -> &[LevelNode] {
        &self.levels
    }

    /// Number of siblings, i.e. the depth of the leaf below the root.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Leaf digest under the default SHA-256 scheme.
    pub fn leaf_digest(&self) -> Digest32 {
        Sha256Scheme::leaf_hash(&self.leaf_id)
    }

    /// Root reproduced by this proof under the default verifier.
    pub fn implied_root(&self) -> Result<Digest32, MerkleError> {
        Verifier::<Sha256Scheme>::default().implied_root(self)
    }

    /// Returns `Ok(true)` if following the proof path reproduces
    /// `expected_root` under the default verifier.
    ///
    /// Malformed input (a root that is not 32 bytes, an empty leaf) is
    /// reported as an error rather than `Ok(false)`.
    pub fn is_valid(&self, expected_root: &[u8]) -> Result<bool, MerkleError> {
        Verifier::<Sha256Scheme>::default().verify(self, expected_root)
    }
}
