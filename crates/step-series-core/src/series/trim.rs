//! Trimming and splitting around an instant.
//!
//! Two trim families, mirrored left/right:
//!
//! - **Continuous** trims keep the domain on one side of `t` exactly: an
//!   entry straddling `t` is sliced so the kept part begins/ends at `t`,
//!   value unchanged.
//! - **Discrete** trims work at whole-entry granularity and never slice;
//!   `include_current` decides the fate of the entry containing `t`
//!   strictly inside its interval.
//!
//! Trimming strictly outside the domain leaves the kept side untouched;
//! trimming past the whole domain yields the empty series.

use crate::series::Series;
use crate::step_function::StepFunction;

impl<V> Series<V>
where
    V: Clone,
{
    /// Keep only the domain at or after `t`, slicing the entry straddling
    /// `t` so the result begins exactly at `t`.
    pub fn trim_left(&self, t: i64) -> Series<V> {
        let entries = self.entries();
        // Entries entirely before t are dropped wholesale.
        let idx = entries.partition_point(|e| e.defined_until() <= t);
        let Some(first) = entries.get(idx) else {
            return Series::empty();
        };

        let mut out = Vec::with_capacity(entries.len() - idx);
        // The partition guarantees `first` is defined past t, so this is
        // always Some.
        if let Some(sliced) = first.trim_left(t) {
            out.push(sliced);
        }
        out.extend(entries[idx + 1..].iter().cloned());
        Series::from_ordered(out)
    }

    /// Keep only the domain strictly before `t`, slicing the entry
    /// straddling `t` so the result ends exactly at `t`.
    pub fn trim_right(&self, t: i64) -> Series<V> {
        let entries = self.entries();
        // Entries starting at or after t are dropped wholesale.
        let idx = entries.partition_point(|e| e.timestamp() < t);
        let mut out = entries[..idx].to_vec();
        if let Some(last) = out.last_mut() {
            if let Some(sliced) = last.trim_right(t) {
                *last = sliced;
            }
        }
        Series::from_ordered(out)
    }

    /// Keep the domain at or after `t` at whole-entry granularity.
    ///
    /// The entry containing `t` strictly inside its interval is kept whole
    /// when `include_current` and dropped whole otherwise. When `t` lands
    /// exactly on an entry's start the entry is always kept, matching what
    /// the continuous trim would do there.
    pub fn trim_left_discrete(&self, t: i64, include_current: bool) -> Series<V> {
        let entries = self.entries();
        let idx = entries.partition_point(|e| e.defined_until() <= t);
        let mut start = idx;
        if let Some(first) = entries.get(idx) {
            if first.timestamp() < t && !include_current {
                start += 1;
            }
        }
        Series::from_ordered(entries[start..].to_vec())
    }

    /// Keep the domain before `t` at whole-entry granularity.
    ///
    /// Mirror of [`Series::trim_left_discrete`]: an entry ending exactly at
    /// `t` is always kept (it lies entirely before `t`), and one starting
    /// exactly at `t` is always dropped.
    pub fn trim_right_discrete(&self, t: i64, include_current: bool) -> Series<V> {
        let entries = self.entries();
        let idx = entries.partition_point(|e| e.timestamp() < t);
        let mut end = idx;
        if idx > 0 && entries[idx - 1].defined_until() > t && !include_current {
            end -= 1;
        }
        Series::from_ordered(entries[..end].to_vec())
    }

    /// Partition the series around `t`:
    /// `(trim_right(t), trim_left(t))`.
    ///
    /// For `t` outside the domain one side is empty and the other equals
    /// the original.
    pub fn split_at(&self, t: i64) -> (Series<V>, Series<V>) {
        (self.trim_right(t), self.trim_left(t))
    }

    /// Keep only the domain inside `[from, to)`. Empty when `from >= to`.
    pub fn slice(&self, from: i64, to: i64) -> Series<V> {
        self.trim_left(from).trim_right(to)
    }
}
