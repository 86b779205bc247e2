//! Errors raised while reconstructing a [`HandshakeRandom`](crate::random::HandshakeRandom).

use thiserror::Error;

/// Why a candidate byte sequence was rejected as a handshake random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FromBytesError {
    /// No byte sequence was supplied at all.
    #[error("random bytes must not be absent")]
    MissingValue,

    /// The sequence was not exactly 32 bytes long.
    #[error("random bytes length must be 32, got {0}")]
    InvalidLength(usize),
}
