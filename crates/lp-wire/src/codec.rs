use std::cmp::Ordering;

use lp_merkle::{Digest32, DigestKind, LevelNode, MerkleProof, Side, DIGEST_LEN};
use tracing::{debug, trace};

use crate::{check_depth, WireError, MAX_LEVELS};

pub const U32_BYTES_LENGTH: usize = 4;

/// One level on the wire: side byte followed by the sibling digest.
pub const LEVEL_BYTES_LENGTH: usize = 1 + DIGEST_LEN;

/// Leaf length prefix plus level count.
pub const PROOF_BASE_BYTES_LENGTH: usize = 2 * U32_BYTES_LENGTH;

/// Split `n` bytes off the front of `bytes`.
fn take<'a>(
    bytes: &mut &'a [u8],
    n: usize,
    structure: &'static str,
) -> Result<&'a [u8], WireError> {
    if bytes.len() < n {
        return Err(WireError::UnderLength {
            structure,
            minimum: n,
            actual: bytes.len(),
        });
    }
    let (head, tail) = bytes.split_at(n);
    *bytes = tail;
    Ok(head)
}

fn take_u32(bytes: &mut &[u8], structure: &'static str) -> Result<u32, WireError> {
    let raw = take(bytes, U32_BYTES_LENGTH, structure)?;
    let mut array = [0u8; U32_BYTES_LENGTH];
    array.copy_from_slice(raw);
    Ok(u32::from_be_bytes(array))
}

pub fn encode_level(level: &LevelNode) -> [u8; LEVEL_BYTES_LENGTH] {
    let mut bytes = [0u8; LEVEL_BYTES_LENGTH];
    bytes[0] = level.side().as_byte();
    bytes[1..].copy_from_slice(level.digest().as_bytes());
    bytes
}

/// Decode exactly one level record.
pub fn decode_level(bytes: &[u8]) -> Result<LevelNode, WireError> {
    match bytes.len().cmp(&LEVEL_BYTES_LENGTH) {
        Ordering::Less => {
            debug!(len = bytes.len(), "Rejected truncated level record");
            return Err(WireError::UnderLength {
                structure: "LevelNode",
                minimum: LEVEL_BYTES_LENGTH,
                actual: bytes.len(),
            });
        }
        Ordering::Greater => {
            debug!(len = bytes.len(), "Rejected oversized level record");
            return Err(WireError::TrailingBytes(bytes.len() - LEVEL_BYTES_LENGTH));
        }
        Ordering::Equal => {}
    }

    let side = Side::try_from(bytes[0])?;
    Ok(LevelNode::new(&bytes[1..], side)?)
}

/// Decode a bare sequence of level records, as sent alongside a header.
pub fn decode_levels(bytes: &[u8]) -> Result<Vec<LevelNode>, WireError> {
    if bytes.len() % LEVEL_BYTES_LENGTH != 0 {
        debug!(len = bytes.len(), "Level list is not a whole number of records");
        return Err(WireError::UnderLength {
            structure: "LevelNode",
            minimum: LEVEL_BYTES_LENGTH,
            actual: bytes.len() % LEVEL_BYTES_LENGTH,
        });
    }
    check_depth(bytes.len() / LEVEL_BYTES_LENGTH)?;

    bytes.chunks(LEVEL_BYTES_LENGTH).map(decode_level).collect()
}

/// Serialize a proof as
/// `leaf_len (u32 BE) || leaf || level_count (u32 BE) || levels`.
///
/// Proofs that [`decode_proof`] would refuse are refused here too: a leaf
/// longer than `u32::MAX` bytes or more than [`MAX_LEVELS`] levels.
pub fn encode_proof(proof: &MerkleProof) -> Result<Vec<u8>, WireError> {
    check_depth(proof.depth())?;
    let leaf_len = u32::try_from(proof.leaf_id().len())
        .map_err(|_| WireError::LeafTooLong(proof.leaf_id().len()))?;
    let level_count = u32::try_from(proof.depth())
        .map_err(|_| WireError::TooManyLevels(u32::MAX))?;

    let mut bytes = Vec::with_capacity(
        PROOF_BASE_BYTES_LENGTH + proof.leaf_id().len() + proof.depth() * LEVEL_BYTES_LENGTH,
    );

    bytes.extend_from_slice(&leaf_len.to_be_bytes());
    bytes.extend_from_slice(proof.leaf_id());
    bytes.extend_from_slice(&level_count.to_be_bytes());
    for level in proof.levels() {
        bytes.extend_from_slice(&encode_level(level));
    }

    Ok(bytes)
}

/// Deserialize a proof written by [`encode_proof`].  The whole input must be
/// consumed.
pub fn decode_proof(bytes: &[u8]) -> Result<MerkleProof, WireError> {
    let result = decode_proof_inner(bytes);
    match &result {
        Ok(proof) => trace!(
            leaf_len = proof.leaf_id().len(),
            depth = proof.depth(),
            "Decoded merkle proof"
        ),
        Err(e) => debug!("Rejected merkle proof encoding: {e}"),
    }
    result
}

fn decode_proof_inner(mut bytes: &[u8]) -> Result<MerkleProof, WireError> {
    if bytes.len() < PROOF_BASE_BYTES_LENGTH {
        return Err(WireError::UnderLength {
            structure: "MerkleProof",
            minimum: PROOF_BASE_BYTES_LENGTH,
            actual: bytes.len(),
        });
    }

    let leaf_len = take_u32(&mut bytes, "MerkleProof")? as usize;
    let leaf = take(&mut bytes, leaf_len, "leaf identifier")?;
    let level_count = take_u32(&mut bytes, "MerkleProof")?;
    if level_count as usize > MAX_LEVELS {
        return Err(WireError::TooManyLevels(level_count));
    }

    let levels_len = level_count as usize * LEVEL_BYTES_LENGTH;
    let raw_levels = take(&mut bytes, levels_len, "proof levels")?;
    if !bytes.is_empty() {
        return Err(WireError::TrailingBytes(bytes.len()));
    }

    Ok(MerkleProof::new(leaf, decode_levels(raw_levels)?))
}

/// Wrap a root taken from a header into a digest.
pub fn decode_root(bytes: &[u8]) -> Result<Digest32, WireError> {
    Ok(Digest32::parse(bytes, DigestKind::Root)?)
}
