//! Deterministic entropy sources and logging setup for tests.
//!
//! None of the sources here are fit for anything but tests. They are marked
//! [`rand::CryptoRng`] only so they satisfy the bounds on
//! [`HandshakeRandom::generate`](crate::random::HandshakeRandom::generate).

use thiserror::Error;

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Filtered by `RUST_LOG`. Safe to call from every test.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Produces only zero bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroRng;

impl rand::RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl rand::CryptoRng for ZeroRng {}

/// Produces `n, n + 1, n + 2, ...` (wrapping) and counts how many bytes were drawn.
#[derive(Debug, Clone, Default)]
pub struct SequenceRng {
    next: u8,
    drawn: usize,
}

impl SequenceRng {
    /// A sequence starting at `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence starting at `first`.
    pub fn starting_at(first: u8) -> Self {
        Self {
            next: first,
            drawn: 0,
        }
    }

    /// Total number of bytes handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl rand::RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next;
            self.next = self.next.wrapping_add(1);
        }
        self.drawn += dest.len();
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl rand::CryptoRng for SequenceRng {}

/// The error reported by [`FailingRng`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("entropy source exhausted")]
pub struct EntropyExhausted;

/// Fails every fallible request with [`EntropyExhausted`].
///
/// The infallible methods panic, matching what `rand` sources do when the
/// underlying generator is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingRng;

impl rand::RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("{}", EntropyExhausted)
    }

    fn next_u64(&mut self) -> u64 {
        panic!("{}", EntropyExhausted)
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("{}", EntropyExhausted)
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new(EntropyExhausted))
    }
}

impl rand::CryptoRng for FailingRng {}
