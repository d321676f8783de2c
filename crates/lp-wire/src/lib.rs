//! Decoding of Merkle inclusion proofs received from full nodes.
//!
//! Two encodings are supported: a fixed-width binary layout (see
//! [`codec`]) and the JSON form used by node APIs (see [`json`]).  Decoded
//! proofs are checked with [`lp_merkle::MerkleProof::is_valid`].

pub mod codec;
pub mod error;
pub mod json;

pub use codec::{
    decode_level, decode_levels, decode_proof, decode_root, encode_level, encode_proof,
};
pub use error::WireError;
pub use json::{proof_from_json, proof_to_json, root_from_json};

/// Upper bound on proof depth.  A binary tree indexed by `u64` is never
/// deeper than this.
pub const MAX_LEVELS: usize = 64;

/// Fails with [`WireError::TooManyLevels`] if `depth` exceeds [`MAX_LEVELS`].
pub(crate) fn check_depth(depth: usize) -> Result<(), WireError> {
    if depth > MAX_LEVELS {
        return Err(WireError::TooManyLevels(
            u32::try_from(depth).unwrap_or(u32::MAX),
        ));
    }
    Ok(())
}
