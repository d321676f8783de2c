use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DigestKind, MerkleError};

/// Output length of every hash scheme in this crate.
pub const DIGEST_LEN: usize = 32;

/// A fixed-length hash output.
///
/// Holding the bytes in an array means a `Digest32` can never be partially
/// filled; all length checks happen in [`Digest32::parse`] and
/// [`Digest32::from_hex`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest32([u8; DIGEST_LEN]);

impl Digest32 {
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy `bytes` into a digest, failing unless exactly [`DIGEST_LEN`]
    /// bytes are supplied.  `kind` names the digest in the error.
    pub fn parse(bytes: &[u8], kind: DigestKind) -> Result<Self, MerkleError> {
        let array: [u8; DIGEST_LEN] =
            bytes
                .try_into()
                .map_err(|_| MerkleError::InvalidDigestLength {
                    kind,
                    expected: DIGEST_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(array))
    }

    /// Decode a hex string (upper or lower case) into a digest.
    pub fn from_hex(s: &str, kind: DigestKind) -> Result<Self, MerkleError> {
        let bytes = hex::decode(s)?;
        Self::parse(&bytes, kind)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex encoding, useful for display and logging.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest32 {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest32> for [u8; DIGEST_LEN] {
    fn from(digest: Digest32) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Digest32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest32({})", self.to_hex())
    }
}

impl fmt::Display for Digest32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Digest32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

fn deserialize_kind<'de, D>(deserializer: D, kind: DigestKind) -> Result<Digest32, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Digest32::from_hex(&s, kind).map_err(de::Error::custom)
}

/// Length errors from this impl name the digest a sibling, which is where
/// digests appear inside a proof.  Root fields use [`deserialize_root`].
impl<'de> Deserialize<'de> for Digest32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_kind(deserializer, DigestKind::Sibling)
    }
}

/// For `#[serde(deserialize_with = "lp_merkle::digest::deserialize_root")]` on
/// root fields, so length errors name the root.
pub fn deserialize_root<'de, D>(deserializer: D) -> Result<Digest32, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_kind(deserializer, DigestKind::Root)
}
