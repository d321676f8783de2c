//! Reference tree builder for tests.
//!
//! Building trees is outside the library, but the verifier can only be
//! exercised against proofs that some builder produced.  Leaf digests are
//! `H(LEAF_PREFIX || leaf)`, parents are `H(NODE_PREFIX || left || right)`.
//! When a level has an odd width its last node is duplicated.

#![allow(dead_code)]

use lp_merkle::{Digest32, HashScheme, LevelNode, MerkleProof, Sha256Scheme, Side};

pub struct ReferenceTree {
    leaves: Vec<Vec<u8>>,
    /// `levels[0]` = leaf digests, `levels[last]` = single root digest.
    levels: Vec<Vec<Digest32>>,
}

impl ReferenceTree {
    pub fn new(leaves: &[Vec<u8>]) -> Self {
        Self::with_scheme::<Sha256Scheme>(leaves)
    }

    pub fn with_scheme<S: HashScheme>(leaves: &[Vec<u8>]) -> Self {
        assert!(!leaves.is_empty(), "reference tree needs at least one leaf");

        let mut current: Vec<Digest32> = leaves.iter().map(|l| S::leaf_hash(l)).collect();
        let mut levels = vec![current.clone()];

        while current.len() > 1 {
            if current.len() % 2 != 0 {
                let last = *current.last().unwrap();
                current.push(last);
            }

            let parent: Vec<Digest32> = current
                .chunks(2)
                .map(|pair| S::node_hash(&pair[0], &pair[1]))
                .collect();

            levels.push(parent.clone());
            current = parent;
        }

        Self {
            leaves: leaves.to_vec(),
            levels,
        }
    }

    pub fn root(&self) -> Digest32 {
        self.levels.last().unwrap()[0]
    }

    pub fn proof(&self, leaf_index: usize) -> MerkleProof {
        let mut levels = Vec::new();
        let mut index = leaf_index;

        for level in &self.levels[..self.levels.len() - 1] {
            let sibling_index = if index % 2 == 0 { index + 1 } else { index - 1 };
            // Odd-width levels pair the last node with itself.
            let sibling = *level.get(sibling_index).unwrap_or(&level[index]);
            let side = if index % 2 == 0 { Side::Right } else { Side::Left };

            levels.push(LevelNode::from_digest(sibling, side));
            index /= 2;
        }

        MerkleProof::new(self.leaves[leaf_index].clone(), levels)
    }
}

/// Distinct 32-byte transaction ids.
pub fn tx_ids(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| {
            let mut id = vec![0u8; 32];
            id[..8].copy_from_slice(&(i as u64 + 1).to_be_bytes());
            id
        })
        .collect()
}
