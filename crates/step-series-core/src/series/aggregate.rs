//! Temporal aggregation: bounded-length splitting and step integrals.
//!
//! All integrals here are exact: a step function's definite integral over
//! any interval is the sum of `value × overlap-length` over the entries it
//! intersects, so nothing is discretized beyond the entries themselves.
//! Durations are converted to seconds through
//! [`TimeUnit::ticks_to_seconds`], the single place where the series'
//! native tick unit is interpreted.

use num_traits::AsPrimitive;

use crate::entry::Entry;
use crate::series::Series;
use crate::series::transform::compress_entries;
use crate::step_function::StepFunction;
use crate::time::TimeUnit;

impl<V> Series<V>
where
    V: Clone,
{
    /// Cut every entry longer than `max_len` into consecutive sub-entries
    /// of length at most `max_len`, same value, no gaps introduced. The
    /// final sub-entry of a cut carries the remainder.
    ///
    /// `max_len` must be positive; a non-positive value trips a debug
    /// assertion and leaves the series unchanged in release builds.
    pub fn split_entries_longer_than(&self, max_len: i64) -> Series<V> {
        debug_assert!(max_len > 0, "split_entries_longer_than requires max_len > 0");
        if max_len <= 0 {
            return self.clone();
        }

        let mut out = Vec::with_capacity(self.len());
        for entry in self.entries() {
            out.extend(entry.split_longer_than(max_len));
        }
        Series::from_ordered(out)
    }
}

impl<V> Series<V>
where
    V: AsPrimitive<f64>,
{
    /// Exact definite integral of the step function over `[from, to)`,
    /// in value·seconds with validities read as `time_unit` ticks.
    ///
    /// Gaps contribute nothing; an interval outside the domain integrates
    /// to zero.
    pub fn integral_between(&self, from: i64, to: i64, time_unit: TimeUnit) -> f64 {
        if from >= to {
            return 0.0;
        }

        let entries = self.entries();
        // Skip entries entirely before the window, stop before entries
        // entirely after it.
        let lo = entries.partition_point(|e| e.defined_until() <= from);
        let hi = entries.partition_point(|e| e.timestamp() < to);

        entries[lo..hi]
            .iter()
            .map(|e| {
                let overlap = e.defined_until().min(to) - e.timestamp().max(from);
                e.value().as_() * time_unit.ticks_to_seconds(overlap)
            })
            .sum()
    }

    /// Running cumulative integral of the step function, sampled at entry
    /// granularity.
    ///
    /// Entries longer than `sampling_period` are first split via
    /// [`Series::split_entries_longer_than`]; then each (sub-)entry's value
    /// is replaced by the cumulative sum of `value × duration` through and
    /// including that entry, durations read as `time_unit` ticks and
    /// expressed in seconds. Timestamps and validities are unchanged, so
    /// output entry `i` holds the integral from the domain start up to
    /// `entries[i].defined_until()`.
    pub fn step_integral(&self, sampling_period: i64, time_unit: TimeUnit) -> Series<f64> {
        let split = self.split_entries_longer_than(sampling_period);

        let mut sum = 0.0;
        let out = split
            .entries()
            .iter()
            .map(|e| {
                sum += e.value().as_() * time_unit.ticks_to_seconds(e.validity());
                e.with_value(sum)
            })
            .collect();
        Series::from_ordered(out)
    }

    /// Re-sample the integral over a trailing window.
    ///
    /// Sample points are the multiples of `step` from the domain start;
    /// each output entry's value is the exact integral over the trailing
    /// interval of length `window` ending at that sample point, and its
    /// validity reaches the next sample point (the domain end for the last
    /// one). Adjacent equal values are merged.
    ///
    /// `window` and `step` must be positive; non-positive values trip a
    /// debug assertion and yield the empty series in release builds.
    pub fn sliding_integral(&self, window: i64, step: i64, time_unit: TimeUnit) -> Series<f64> {
        debug_assert!(window > 0, "sliding_integral requires window > 0");
        debug_assert!(step > 0, "sliding_integral requires step > 0");
        let Some(domain) = self.loose_domain() else {
            return Series::empty();
        };
        if window <= 0 || step <= 0 {
            return Series::empty();
        }

        let mut out = Vec::new();
        let mut t = domain.start;
        while t < domain.end {
            let value = self.integral_between(t.saturating_sub(window), t, time_unit);
            out.push(Entry::from_raw(t, value, step.min(domain.end - t)));
            t += step;
        }
        Series::from_ordered(compress_entries(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::test_util::{assert_invariants, records, series};

    #[test]
    fn split_entries_longer_than_cuts_only_long_entries() {
        let s = series(&[(0, 1, 25), (30, 2, 5)]);
        let split = s.split_entries_longer_than(10);
        assert_eq!(
            records(&split),
            vec![(0, 1, 10), (10, 1, 10), (20, 1, 5), (30, 2, 5)]
        );
        assert_invariants(&split);
    }

    #[test]
    fn split_entries_longer_than_preserves_the_domain() {
        let s = series(&[(0, 1, 25), (30, 2, 5)]);
        let split = s.split_entries_longer_than(7);
        assert_eq!(split.support(), s.support());
        assert_eq!(split.loose_domain(), s.loose_domain());
        for t in -2..40 {
            assert_eq!(split.at(t).is_some(), s.at(t).is_some(), "t={t}");
        }
    }

    #[test]
    fn step_integral_accumulates_value_times_duration() {
        let s = series(&[(100, 1, 10), (110, 2, 10), (120, 3, 10)]);
        let integral = s.step_integral(10, TimeUnit::Seconds);
        assert_eq!(
            records(&integral),
            vec![(100, 10.0, 10), (110, 30.0, 10), (120, 60.0, 10)]
        );
    }

    #[test]
    fn step_integral_splits_long_entries_first() {
        let s = series(&[(0, 2, 30)]);
        let integral = s.step_integral(10, TimeUnit::Seconds);
        assert_eq!(
            records(&integral),
            vec![(0, 20.0, 10), (10, 40.0, 10), (20, 60.0, 10)]
        );
    }

    #[test]
    fn step_integral_converts_sub_second_ticks_without_truncation() {
        let s = series(&[(0, 4, 500)]);
        let integral = s.step_integral(1_000, TimeUnit::Millis);
        assert_eq!(records(&integral), vec![(0, 2.0, 500)]);
    }

    #[test]
    fn integral_between_sums_entry_overlaps() {
        let s = series(&[(0, 1, 10), (10, 2, 10), (25, 4, 5)]);

        // Whole domain: 1×10 + 2×10 + 4×5 = 50.
        assert_eq!(s.integral_between(0, 30, TimeUnit::Seconds), 50.0);
        // Partial overlaps on both sides: 1×5 + 2×5 = 15.
        assert_eq!(s.integral_between(5, 15, TimeUnit::Seconds), 15.0);
        // Window inside the gap [20, 25).
        assert_eq!(s.integral_between(20, 25, TimeUnit::Seconds), 0.0);
        // Window outside the domain.
        assert_eq!(s.integral_between(100, 200, TimeUnit::Seconds), 0.0);
        // Degenerate window.
        assert_eq!(s.integral_between(15, 15, TimeUnit::Seconds), 0.0);
    }

    #[test]
    fn sliding_integral_windows_trail_the_sample_points() {
        let s = series(&[(0, 1, 10), (10, 3, 10)]);
        let sliding = s.sliding_integral(10, 5, TimeUnit::Seconds);
        // Samples at 0, 5, 10, 15 with trailing 10-tick windows:
        // [-10,0)=0, [-5,5)=5, [0,10)=10, [5,15)=5+15=20.
        assert_eq!(
            records(&sliding),
            vec![(0, 0.0, 5), (5, 5.0, 5), (10, 10.0, 5), (15, 20.0, 5)]
        );
        assert_invariants(&sliding);
    }

    #[test]
    fn sliding_integral_final_entry_reaches_the_domain_end() {
        let s = series(&[(0, 2, 12)]);
        let sliding = s.sliding_integral(5, 5, TimeUnit::Seconds);
        // Samples at 0, 5, 10; the samples at 5 and 10 both integrate to 10
        // and merge, and the merged entry ends at the 12-tick domain end.
        assert_eq!(records(&sliding), vec![(0, 0.0, 5), (5, 10.0, 7)]);
    }

    #[test]
    fn sliding_integral_merges_equal_adjacent_samples() {
        let s = series(&[(0, 1, 30)]);
        // Window and step of 10 over a constant value: every sample past
        // the first integrates to 10.
        let sliding = s.sliding_integral(10, 10, TimeUnit::Seconds);
        assert_eq!(records(&sliding), vec![(0, 0.0, 10), (10, 10.0, 20)]);
    }

    #[test]
    fn aggregation_degrades_on_the_empty_series() {
        let empty = Series::<i32>::empty();
        assert!(empty.split_entries_longer_than(10).is_empty());
        assert!(empty.step_integral(10, TimeUnit::Seconds).is_empty());
        assert!(empty.sliding_integral(10, 5, TimeUnit::Seconds).is_empty());
        assert_eq!(empty.integral_between(0, 10, TimeUnit::Seconds), 0.0);
    }
}
