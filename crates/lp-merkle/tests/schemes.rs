//! Verifiers parameterised by other hash schemes.

mod common;

use common::{tx_ids, ReferenceTree};
use lp_merkle::{Digest32, HashScheme, Sha256Scheme, Verifier, VerifierConfig};

/// A ledger that tags leaves with `0x4c` ('L') and nodes with `0x4e` ('N').
struct TaggedScheme;

impl HashScheme for TaggedScheme {
    const LEAF_PREFIX: u8 = b'L';
    const NODE_PREFIX: u8 = b'N';

    fn hash(parts: &[&[u8]]) -> Digest32 {
        Sha256Scheme::hash(parts)
    }
}

#[test]
fn custom_scheme_verifies_its_own_trees() {
    let verifier = Verifier::<TaggedScheme>::new(VerifierConfig::default()).unwrap();

    for n in 1..=6 {
        let tree = ReferenceTree::with_scheme::<TaggedScheme>(&tx_ids(n));
        for i in 0..n {
            let proof = tree.proof(i);
            assert!(verifier.verify(&proof, tree.root().as_ref()).unwrap());
        }
    }
}

#[test]
fn schemes_are_not_interchangeable() {
    let tagged = Verifier::<TaggedScheme>::new(VerifierConfig::default()).unwrap();
    let default = Verifier::<Sha256Scheme>::default();

    let sha_tree = ReferenceTree::new(&tx_ids(5));
    let tagged_tree = ReferenceTree::with_scheme::<TaggedScheme>(&tx_ids(5));

    for i in 0..5 {
        assert!(!tagged
            .verify(&sha_tree.proof(i), sha_tree.root().as_ref())
            .unwrap());
        assert!(!default
            .verify(&tagged_tree.proof(i), tagged_tree.root().as_ref())
            .unwrap());
    }
}

#[test]
fn implied_root_matches_tree_root() {
    let verifier = Verifier::<TaggedScheme>::new(VerifierConfig::default()).unwrap();
    let tree = ReferenceTree::with_scheme::<TaggedScheme>(&tx_ids(7));
    assert_eq!(verifier.implied_root(&tree.proof(6)).unwrap(), tree.root());
}
