//! Time-unit model for the integral operations.
//!
//! Series timestamps and validities are opaque integer ticks; nothing in the
//! algebra interprets them except the integrals, where the caller names the
//! unit the ticks are denominated in. The conversion from a tick count to
//! seconds lives in exactly one function ([`TimeUnit::ticks_to_seconds`]) so
//! it can be tested on its own and corrected in one place if a different
//! factor is ever required.

use serde::{Deserialize, Serialize};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Unit a series' native integer ticks are denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    /// One tick is a millisecond.
    Millis,
    /// One tick is a second.
    Seconds,
    /// One tick is a minute.
    Minutes,
    /// One tick is an hour.
    Hours,
    /// One tick is a day.
    Days,
}

impl TimeUnit {
    /// Length of one tick of this unit in whole milliseconds.
    pub fn as_millis(&self) -> i64 {
        match *self {
            TimeUnit::Millis => 1,
            TimeUnit::Seconds => MILLIS_PER_SECOND,
            TimeUnit::Minutes => MILLIS_PER_MINUTE,
            TimeUnit::Hours => MILLIS_PER_HOUR,
            TimeUnit::Days => MILLIS_PER_DAY,
        }
    }

    /// Express a tick count of this unit in seconds.
    ///
    /// The conversion is exact in `f64` (no truncation of sub-second
    /// remainders): `ticks_to_seconds(Millis, 500)` is `0.5`, not `0`.
    pub fn ticks_to_seconds(&self, ticks: i64) -> f64 {
        ticks as f64 * self.as_millis() as f64 / MILLIS_PER_SECOND as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_is_the_identity_conversion() {
        assert_eq!(TimeUnit::Seconds.ticks_to_seconds(10), 10.0);
        assert_eq!(TimeUnit::Seconds.ticks_to_seconds(0), 0.0);
        assert_eq!(TimeUnit::Seconds.ticks_to_seconds(-3), -3.0);
    }

    #[test]
    fn sub_second_ticks_keep_their_remainder() {
        assert_eq!(TimeUnit::Millis.ticks_to_seconds(500), 0.5);
        assert_eq!(TimeUnit::Millis.ticks_to_seconds(1), 0.001);
    }

    #[test]
    fn coarse_units_scale_up() {
        assert_eq!(TimeUnit::Minutes.ticks_to_seconds(2), 120.0);
        assert_eq!(TimeUnit::Hours.ticks_to_seconds(1), 3_600.0);
        assert_eq!(TimeUnit::Days.ticks_to_seconds(1), 86_400.0);
    }

    #[test]
    fn unit_serde_round_trip() {
        for unit in [
            TimeUnit::Millis,
            TimeUnit::Seconds,
            TimeUnit::Minutes,
            TimeUnit::Hours,
            TimeUnit::Days,
        ] {
            let json = serde_json::to_string(&unit).expect("serialize");
            let decoded: TimeUnit = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(unit, decoded);
        }
    }
}
