//! The coarse timestamp carried in the first 4 bytes of a handshake random.

use derive_more::{From, Into};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// Length of the encoded timestamp field, in bytes.
pub const GMT_UNIX_TIME_LEN: usize = 4;

/// Seconds since the Unix epoch (UTC), truncated to 32 bits.
///
/// The field wraps in 2106. Peers decode it the same way, so no attempt is made
/// to widen it.
///
/// # Examples
///
/// ```
/// # use handshake_random::gmt_unix_time::GmtUnixTime;
/// #
/// let ts = GmtUnixTime::from_be_bytes([0x5A, 0x43, 0xB1, 0x80]);
/// assert_eq!(u32::from(ts), 1_514_385_792);
/// assert_eq!(ts.to_string(), "2017-12-27T14:43:12Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(From, Into, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct GmtUnixTime(pub u32);

impl GmtUnixTime {
    /// Read the current wall-clock time.
    ///
    /// A clock set before the epoch reads as `0`.
    pub fn now() -> Self {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(Self::from_duration_since_epoch)
            .unwrap_or_default()
    }

    /// Truncate a duration since the epoch to whole seconds, keeping the low 32 bits.
    pub fn from_duration_since_epoch(since_epoch: Duration) -> Self {
        Self(since_epoch.as_secs() as u32)
    }

    /// Decode the big-endian wire form.
    pub fn from_be_bytes(bytes: [u8; GMT_UNIX_TIME_LEN]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Encode to the big-endian wire form.
    pub fn to_be_bytes(self) -> [u8; GMT_UNIX_TIME_LEN] {
        self.0.to_be_bytes()
    }

    /// The instant this timestamp names.
    pub fn to_system_time(self) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(u64::from(self.0))
    }
}

impl From<GmtUnixTime> for SystemTime {
    fn from(ts: GmtUnixTime) -> Self {
        ts.to_system_time()
    }
}

/// Renders as an RFC 3339 UTC calendar date, e.g. `2017-12-27T14:43:12Z`.
impl fmt::Display for GmtUnixTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&humantime::format_rfc3339_seconds(self.to_system_time()), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_be_layout() {
        let ts = GmtUnixTime(0x0102_0304);
        assert_eq!(ts.to_be_bytes(), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(GmtUnixTime::from_be_bytes([0x01, 0x02, 0x03, 0x04]), ts);
    }

    #[test]
    fn test_epoch_renders_as_1970() {
        assert_eq!(GmtUnixTime(0).to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_max_value_renders_in_2106() {
        assert_eq!(GmtUnixTime(u32::MAX).to_string(), "2106-02-07T06:28:15Z");
    }

    #[test]
    fn test_truncates_to_low_32_bits() {
        let past_wrap = Duration::from_secs((1u64 << 32) + 7);
        assert_eq!(GmtUnixTime::from_duration_since_epoch(past_wrap), GmtUnixTime(7));

        let with_subsec = Duration::from_millis(1_999);
        assert_eq!(GmtUnixTime::from_duration_since_epoch(with_subsec), GmtUnixTime(1));
    }

    #[test]
    fn test_now_is_after_2017() {
        assert!(GmtUnixTime::now() > GmtUnixTime(1_514_385_792));
    }

    #[test]
    fn test_system_time_roundtrip() {
        bolero::check!()
            .with_arbitrary::<GmtUnixTime>()
            .for_each(|ts| {
                let since_epoch = SystemTime::from(*ts)
                    .duration_since(UNIX_EPOCH)
                    .unwrap();
                assert_eq!(GmtUnixTime::from_duration_since_epoch(since_epoch), *ts);
            });
    }
}
