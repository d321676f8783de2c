use lp_merkle::MerkleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("{structure} is too short: need at least {minimum} bytes, got {actual}")]
    UnderLength {
        structure: &'static str,
        minimum: usize,
        actual: usize,
    },

    #[error("{0} unexpected trailing bytes after proof")]
    TrailingBytes(usize),

    #[error("proof declares {0} levels, more than the maximum of {max}", max = crate::MAX_LEVELS)]
    TooManyLevels(u32),

    #[error("leaf identifier of {0} bytes does not fit a u32 length prefix")]
    LeafTooLong(usize),

    #[error("merkle error: {0}")]
    Merkle(#[from] MerkleError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
