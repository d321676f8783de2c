use std::fmt;

use lp_merkle::{Digest32, DigestKind, LevelNode, MerkleProof};
use serde::{
    de::{self, SeqAccess, Visitor},
    Deserialize, Deserializer,
};
use tracing::debug;

use crate::{check_depth, WireError, MAX_LEVELS};

/// Wire shape of a proof.  Mirrors the serde layout of [`MerkleProof`] but
/// stops reading `levels` once the depth limit is passed.
#[derive(Deserialize)]
struct JsonProof {
    #[serde(rename = "leafData", with = "hex::serde")]
    leaf_data: Vec<u8>,
    #[serde(deserialize_with = "bounded_levels")]
    levels: Vec<LevelNode>,
}

fn bounded_levels<'de, D>(deserializer: D) -> Result<Vec<LevelNode>, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoundedLevels;

    impl<'de> Visitor<'de> for BoundedLevels {
        type Value = Vec<LevelNode>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a list of at most {MAX_LEVELS} levels")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut levels = Vec::new();
            while let Some(level) = seq.next_element()? {
                if levels.len() == MAX_LEVELS {
                    return Err(de::Error::custom(format!(
                        "proof has more than {MAX_LEVELS} levels"
                    )));
                }
                levels.push(level);
            }
            Ok(levels)
        }
    }

    deserializer.deserialize_seq(BoundedLevels)
}

/// Parse the JSON form
/// `{"leafData": "<hex>", "levels": [{"digest": "<hex>", "side": 0|1}]}`.
pub fn proof_from_json(json: &str) -> Result<MerkleProof, WireError> {
    let proof: JsonProof = serde_json::from_str(json).inspect_err(|e| {
        debug!("Rejected merkle proof json: {e}");
    })?;

    Ok(MerkleProof::new(proof.leaf_data, proof.levels))
}

/// Encode a proof as JSON.  Proofs deeper than [`MAX_LEVELS`] are refused,
/// matching [`proof_from_json`].
pub fn proof_to_json(proof: &MerkleProof) -> Result<String, WireError> {
    check_depth(proof.depth())?;
    Ok(serde_json::to_string(proof)?)
}

/// Parse a root given as a JSON hex string.  Length errors name the root.
pub fn root_from_json(json: &str) -> Result<Digest32, WireError> {
    let text: String = serde_json::from_str(json)?;
    Ok(Digest32::from_hex(&text, DigestKind::Root)?)
}
