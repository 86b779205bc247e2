//! Helpers for working with hexadecimal

use std::fmt;

/// Write some bytes as lowercase hex.
///
/// The `0x` prefix is only written for the alternate form (`{:#x}`), which makes
/// this a drop-in body for [`std::fmt::LowerHex`].
pub(crate) fn bytes_as_hex<'a, I: Iterator<Item = &'a u8>>(
    mut byte_iter: I,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if f.alternate() {
        write!(f, "0x")?;
    }

    byte_iter.try_fold((), |_, byte| write!(f, "{:02x}", byte))
}

/// Write some bytes as unprefixed uppercase hex into any [`fmt::Write`].
pub(crate) fn write_upper_hex<W: fmt::Write>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    bytes
        .iter()
        .try_fold((), |_, byte| write!(out, "{:02X}", byte))
}
