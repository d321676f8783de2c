use std::fmt;

use thiserror::Error;

/// Which digest a length error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestKind {
    Sibling,
    Root,
}

impl fmt::Display for DigestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestKind::Sibling => f.write_str("sibling"),
            DigestKind::Root => f.write_str("root"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MerkleError {
    #[error("invalid {kind} digest length: expected {expected} bytes, got {actual}")]
    InvalidDigestLength {
        kind: DigestKind,
        expected: usize,
        actual: usize,
    },

    #[error("invalid side byte {0:#04x}")]
    InvalidSide(u8),

    #[error("leaf identifier is empty")]
    EmptyLeafIdentifier,

    #[error("hash scheme uses the same prefix {0:#04x} for leaves and internal nodes")]
    PrefixCollision(u8),

    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
