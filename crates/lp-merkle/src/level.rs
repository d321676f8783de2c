use serde::{Deserialize, Serialize};

use crate::{
    digest::Digest32,
    error::{DigestKind, MerkleError},
};

/// Which side the sibling sits on, relative to the node being proven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Side {
    /// Sibling is the left operand: `H(NODE_PREFIX || sibling || running)`.
    Left,
    /// Sibling is the right operand: `H(NODE_PREFIX || running || sibling)`.
    Right,
}

impl Side {
    pub const LEFT_BYTE: u8 = 0x00;
    pub const RIGHT_BYTE: u8 = 0x01;

    pub const fn as_byte(self) -> u8 {
        match self {
            Side::Left => Self::LEFT_BYTE,
            Side::Right => Self::RIGHT_BYTE,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = MerkleError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            Self::LEFT_BYTE => Ok(Side::Left),
            Self::RIGHT_BYTE => Ok(Side::Right),
            other => Err(MerkleError::InvalidSide(other)),
        }
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> Self {
        side.as_byte()
    }
}

/// One sibling on the path from a leaf to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelNode {
    digest: Digest32,
    side: Side,
}

impl LevelNode {
    /// Build a level from raw sibling bytes.  Fails unless `digest` is
    /// exactly [`crate::DIGEST_LEN`] bytes long.
    pub fn new(digest: &[u8], side: Side) -> Result<Self, MerkleError> {
        let digest = Digest32::parse(digest, DigestKind::Sibling)?;
        Ok(Self { digest, side })
    }

    pub const fn from_digest(digest: Digest32, side: Side) -> Self {
        Self { digest, side }
    }

    pub fn digest(&self) -> &Digest32 {
        &self.digest
    }

    pub fn side(&self) -> Side {
        self.side
    }
}
