//! The 32-byte Random value that both peers contribute to a secure transport handshake.
//!
//! The first 4 bytes carry a big-endian [`GmtUnixTime`](gmt_unix_time::GmtUnixTime),
//! and the remaining 28 bytes are entropy drawn from a caller-supplied CSPRNG.
//! See [`HandshakeRandom`](random::HandshakeRandom).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_debug_implementations,
    future_incompatible,
    let_underscore,
    missing_docs,
    rust_2021_compatibility,
    nonstandard_style
)]
#![deny(unreachable_pub)]

pub mod error;
pub mod gmt_unix_time;
pub mod random;

pub(crate) mod util;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use error::FromBytesError;
pub use gmt_unix_time::GmtUnixTime;
pub use random::HandshakeRandom;
