use sha2::{Digest, Sha256};

use crate::digest::Digest32;

/// Hash function and domain-separation tags used to rebuild a root.
///
/// Leaves are hashed as `H(LEAF_PREFIX || leaf)` and internal nodes as
/// `H(NODE_PREFIX || left || right)`.  The two prefixes must differ,
/// otherwise an internal node could be replayed as a leaf.
///
/// The prefixes and hash function have to match the ledger whose roots are
/// being checked; they are picked at compile time through the type parameter
/// of [`crate::Verifier`].
pub trait HashScheme {
    const LEAF_PREFIX: u8;
    const NODE_PREFIX: u8;

    /// Hash the concatenation of `parts`.
    fn hash(parts: &[&[u8]]) -> Digest32;

    fn leaf_hash(leaf: &[u8]) -> Digest32 {
        Self::hash(&[&[Self::LEAF_PREFIX], leaf])
    }

    fn node_hash(left: &Digest32, right: &Digest32) -> Digest32 {
        Self::hash(&[&[Self::NODE_PREFIX], left.as_ref(), right.as_ref()])
    }
}

/// SHA-256 with `0x00` for leaves and `0x01` for internal nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Scheme;

impl HashScheme for Sha256Scheme {
    const LEAF_PREFIX: u8 = 0x00;
    const NODE_PREFIX: u8 = 0x01;

    fn hash(parts: &[&[u8]]) -> Digest32 {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        Digest32::new(hasher.finalize().into())
    }
}
