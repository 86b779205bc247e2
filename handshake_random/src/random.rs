//! The Random value carried by both hello messages of a handshake.

use crate::{
    error::FromBytesError,
    gmt_unix_time::{GmtUnixTime, GMT_UNIX_TIME_LEN},
    util,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Length of the entropy field that follows the timestamp, in bytes.
pub const RANDOM_BYTES_LEN: usize = 28;

/// A 32-byte handshake random: a 4-byte [`GmtUnixTime`] followed by 28 bytes of entropy.
///
/// | Offset | Length | Field           |
/// |--------|--------|-----------------|
/// | 0      | 4      | `gmt_unix_time` |
/// | 4      | 28     | `random_bytes`  |
///
/// Both peers' values are later concatenated as key-derivation input, so the
/// bytes are never mutated once constructed. Every accessor hands out a copy
/// or a shared borrow.
///
/// # Examples
///
/// ```
/// # use handshake_random::random::HandshakeRandom;
/// #
/// let mut csprng = rand::rngs::OsRng;
/// let ours = HandshakeRandom::generate(&mut csprng);
///
/// let received = ours.to_vec();
/// let theirs = HandshakeRandom::try_from(received.as_slice()).unwrap();
///
/// assert_eq!(ours, theirs);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct HandshakeRandom([u8; 32]);

impl HandshakeRandom {
    /// Length of the whole value on the wire, in bytes.
    pub const LEN: usize = 32;

    /// Generate a fresh value from the operating system's CSPRNG ([`rand::rngs::OsRng`]).
    pub fn new() -> Result<Self, rand::Error> {
        Self::try_generate(&mut rand::rngs::OsRng)
    }

    /// Generate a fresh value stamped with the current time.
    ///
    /// # Panics
    ///
    /// Panics if `csprng` panics in [`rand::RngCore::fill_bytes`]. Use
    /// [`HandshakeRandom::try_generate`] to get the source's error back instead.
    pub fn generate<R: rand::CryptoRng + rand::RngCore>(csprng: &mut R) -> Self {
        Self::generate_at(GmtUnixTime::now(), csprng)
    }

    /// Generate a fresh value stamped with `now`.
    ///
    /// All 32 bytes are drawn from `csprng` before the first 4 are overwritten
    /// with the timestamp, so the output stream matches peers that fill the
    /// whole buffer and then stamp it.
    ///
    /// # Panics
    ///
    /// Panics if `csprng` panics in [`rand::RngCore::fill_bytes`]. Use
    /// [`HandshakeRandom::try_generate_at`] to get the source's error back instead.
    #[instrument(skip(csprng))]
    pub fn generate_at<R: rand::CryptoRng + rand::RngCore>(
        now: GmtUnixTime,
        csprng: &mut R,
    ) -> Self {
        let mut bytes = [0u8; Self::LEN];
        csprng.fill_bytes(&mut bytes);
        Self::stamped(bytes, now)
    }

    /// Fallible counterpart of [`HandshakeRandom::generate`].
    ///
    /// An error from the entropy source is returned as-is.
    pub fn try_generate<R: rand::CryptoRng + rand::RngCore>(
        csprng: &mut R,
    ) -> Result<Self, rand::Error> {
        Self::try_generate_at(GmtUnixTime::now(), csprng)
    }

    /// Fallible counterpart of [`HandshakeRandom::generate_at`].
    #[instrument(skip(csprng))]
    pub fn try_generate_at<R: rand::CryptoRng + rand::RngCore>(
        now: GmtUnixTime,
        csprng: &mut R,
    ) -> Result<Self, rand::Error> {
        let mut bytes = [0u8; Self::LEN];
        csprng.try_fill_bytes(&mut bytes)?;
        Ok(Self::stamped(bytes, now))
    }

    fn stamped(mut bytes: [u8; 32], now: GmtUnixTime) -> Self {
        bytes[..GMT_UNIX_TIME_LEN].copy_from_slice(&now.to_be_bytes());
        Self(bytes)
    }

    /// Reconstruct a value from bytes received from a peer.
    ///
    /// Only presence and length are checked. Any timestamp and any entropy,
    /// including all zeroes, is accepted; rejecting implausible values is up
    /// to the handshake layer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use handshake_random::{error::FromBytesError, random::HandshakeRandom};
    /// #
    /// assert_eq!(
    ///     HandshakeRandom::try_from_bytes(None),
    ///     Err(FromBytesError::MissingValue)
    /// );
    /// assert_eq!(
    ///     HandshakeRandom::try_from_bytes(Some(&[0u8; 31][..])),
    ///     Err(FromBytesError::InvalidLength(31))
    /// );
    /// assert!(HandshakeRandom::try_from_bytes(Some(&[0u8; 32][..])).is_ok());
    /// ```
    pub fn try_from_bytes(candidate: Option<&[u8]>) -> Result<Self, FromBytesError> {
        let Some(candidate) = candidate else {
            tracing::debug!("rejecting absent handshake random");
            return Err(FromBytesError::MissingValue);
        };

        let bytes = <[u8; 32]>::try_from(candidate).map_err(|_| {
            tracing::debug!(len = candidate.len(), "rejecting handshake random");
            FromBytesError::InvalidLength(candidate.len())
        })?;

        Ok(Self(bytes))
    }

    /// Copy out all 32 bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Copy out all 32 bytes onto the heap.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Borrow the bytes without copying.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Decode the timestamp field.
    pub fn gmt_unix_time(&self) -> GmtUnixTime {
        let mut ts = [0u8; GMT_UNIX_TIME_LEN];
        ts.copy_from_slice(&self.0[..GMT_UNIX_TIME_LEN]);
        GmtUnixTime::from_be_bytes(ts)
    }

    /// Copy out the 28 entropy bytes.
    pub fn random_bytes(&self) -> [u8; RANDOM_BYTES_LEN] {
        let mut entropy = [0u8; RANDOM_BYTES_LEN];
        entropy.copy_from_slice(&self.0[GMT_UNIX_TIME_LEN..]);
        entropy
    }

    /// Multi-line rendering for logs; not a wire format.
    ///
    /// ```text
    /// GMT Unix Time: 2017-12-27T14:43:12Z
    /// Random Bytes: 000102030405060708090A0B0C0D0E0F101112131415161718191A1B
    /// ```
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl From<[u8; 32]> for HandshakeRandom {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<HandshakeRandom> for [u8; 32] {
    fn from(random: HandshakeRandom) -> Self {
        random.0
    }
}

impl TryFrom<&[u8]> for HandshakeRandom {
    type Error = FromBytesError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_bytes(Some(bytes))
    }
}

impl TryFrom<Vec<u8>> for HandshakeRandom {
    type Error = FromBytesError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from_bytes(Some(bytes.as_slice()))
    }
}

impl AsRef<[u8]> for HandshakeRandom {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for HandshakeRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        util::hex::bytes_as_hex(self.0.iter(), f)
    }
}

impl fmt::Display for HandshakeRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GMT Unix Time: {}", self.gmt_unix_time())?;
        write!(f, "Random Bytes: ")?;
        util::hex::write_upper_hex(f, &self.random_bytes())?;
        writeln!(f)
    }
}

impl fmt::Debug for HandshakeRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HandshakeRandom")
            .field(&format_args!("{:#x}", self))
            .finish()
    }
}
