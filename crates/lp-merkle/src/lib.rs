//! Verification of Merkle inclusion proofs against a known root.
//!
//! A [`MerkleProof`] carries a leaf payload and the sibling digests on the
//! path to the root.  [`Verifier`] folds them into a candidate root using a
//! domain-separated [`HashScheme`] and compares it with the trusted root.

pub mod config;
pub mod digest;
pub mod error;
pub mod level;
pub mod proof;
pub mod scheme;
pub mod verifier;

pub use config::{LeafPolicy, VerifierConfig};
pub use digest::{Digest32, DIGEST_LEN};
pub use error::{DigestKind, MerkleError};
pub use level::{LevelNode, Side};
pub use proof::MerkleProof;
pub use scheme::{HashScheme, Sha256Scheme};
pub use verifier::Verifier;
