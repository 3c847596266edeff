//! The atomic value-over-interval unit of a step-function time series.
//!
//! An [`Entry`] states that a value holds over a half-open time interval:
//!
//! - The interval is `[timestamp, timestamp + validity)`: the start instant
//!   is included, the end instant is not.
//! - `validity` is strictly positive; a zero- or negative-length entry is
//!   rejected at construction and never repaired silently.
//! - Timestamps are opaque integer ticks. The algebra never interprets the
//!   tick unit except in the integral operations, where the caller names it.
//!
//! Everything else in this crate builds on the intrinsic operations defined
//! here: containment, intersection, slicing at an instant, splitting into
//! bounded-length sub-entries, and the mergeability test used by the
//! compression post-pass.

use serde::{Deserialize, Serialize};
use snafu::prelude::*;

/// Error raised when constructing an invalid [`Entry`].
#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum EntryError {
    /// `validity` must be strictly positive; the half-open interval
    /// `[timestamp, timestamp + validity)` would otherwise be empty or
    /// reversed.
    #[snafu(display("Entry validity must be positive: got {validity} at timestamp {timestamp}"))]
    NonPositiveValidity {
        /// Start instant of the rejected entry.
        timestamp: i64,
        /// The non-positive validity that was passed.
        validity: i64,
    },
}

/// Plain serialized form of an [`Entry`].
///
/// Deserialization goes through [`Entry::new`] so a hand-edited or corrupt
/// payload cannot bypass the `validity > 0` invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "Entry")]
struct EntryRecord<V> {
    timestamp: i64,
    value: V,
    validity: i64,
}

/// A value held constant over the half-open interval
/// `[timestamp, timestamp + validity)`.
///
/// Entries are immutable: every operation that would change one returns a
/// new entry instead. `validity > 0` holds for every constructed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    bound(serialize = "V: Serialize + Clone", deserialize = "V: Deserialize<'de>"),
    try_from = "EntryRecord<V>",
    into = "EntryRecord<V>"
)]
pub struct Entry<V> {
    timestamp: i64,
    value: V,
    validity: i64,
}

impl<V> Entry<V> {
    /// Construct an entry, enforcing `validity > 0`.
    pub fn new(timestamp: i64, value: V, validity: i64) -> Result<Self, EntryError> {
        ensure!(
            validity > 0,
            NonPositiveValiditySnafu {
                timestamp,
                validity
            }
        );
        Ok(Self {
            timestamp,
            value,
            validity,
        })
    }

    /// Construct an entry whose validity is already known to be positive.
    ///
    /// Used internally by operations that derive sub-entries from an existing
    /// (already valid) entry.
    pub(crate) fn from_raw(timestamp: i64, value: V, validity: i64) -> Self {
        debug_assert!(validity > 0, "from_raw requires positive validity");
        Self {
            timestamp,
            value,
            validity,
        }
    }

    /// Start instant of the entry's interval (inclusive).
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The value held over the entry's interval.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the entry, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Length of the entry's interval in native ticks. Always positive.
    pub fn validity(&self) -> i64 {
        self.validity
    }

    /// End instant of the entry's interval (exclusive):
    /// `timestamp + validity`.
    pub fn defined_until(&self) -> i64 {
        self.timestamp + self.validity
    }

    /// Whether `t` falls inside the entry's half-open interval.
    pub fn defined_at(&self, t: i64) -> bool {
        self.timestamp <= t && t < self.defined_until()
    }

    /// Whether the two entries' intervals share at least one instant.
    pub fn overlaps(&self, other: &Entry<V>) -> bool {
        self.timestamp < other.defined_until() && other.timestamp < self.defined_until()
    }

    /// Whether `next` starts exactly where this entry ends.
    pub fn contiguous_with(&self, next: &Entry<V>) -> bool {
        self.defined_until() == next.timestamp
    }

    /// Keep only the part of the entry strictly before `t`.
    ///
    /// Returns the whole entry when `t` is at or past its end, a shortened
    /// copy when `t` falls strictly inside, and `None` when `t` is at or
    /// before its start (nothing of the entry lies before `t`).
    pub fn trim_right(&self, t: i64) -> Option<Entry<V>>
    where
        V: Clone,
    {
        if t >= self.defined_until() {
            Some(self.clone())
        } else if t > self.timestamp {
            Some(Entry::from_raw(
                self.timestamp,
                self.value.clone(),
                t - self.timestamp,
            ))
        } else {
            None
        }
    }

    /// Keep only the part of the entry at or after `t`.
    ///
    /// Mirror of [`Entry::trim_right`]: the kept part starts exactly at `t`
    /// when `t` falls strictly inside the interval.
    pub fn trim_left(&self, t: i64) -> Option<Entry<V>>
    where
        V: Clone,
    {
        if t <= self.timestamp {
            Some(self.clone())
        } else if t < self.defined_until() {
            Some(Entry::from_raw(
                t,
                self.value.clone(),
                self.defined_until() - t,
            ))
        } else {
            None
        }
    }

    /// Partition the entry around `t` into the parts strictly before and at
    /// or after `t`. Either side is `None` when empty; together the sides
    /// cover exactly the original interval.
    pub fn split_at(&self, t: i64) -> (Option<Entry<V>>, Option<Entry<V>>)
    where
        V: Clone,
    {
        (self.trim_right(t), self.trim_left(t))
    }

    /// Cut the entry into consecutive sub-entries no longer than `max_len`,
    /// all carrying the same value, with no gaps. The final sub-entry holds
    /// whatever remainder is shorter than `max_len`.
    pub fn split_longer_than(&self, max_len: i64) -> Vec<Entry<V>>
    where
        V: Clone,
    {
        debug_assert!(max_len > 0, "split_longer_than requires max_len > 0");
        if max_len <= 0 || self.validity <= max_len {
            return vec![self.clone()];
        }

        let end = self.defined_until();
        let mut out = Vec::with_capacity((self.validity / max_len + 1) as usize);
        let mut start = self.timestamp;
        while end - start > max_len {
            out.push(Entry::from_raw(start, self.value.clone(), max_len));
            start += max_len;
        }
        out.push(Entry::from_raw(start, self.value.clone(), end - start));
        out
    }

    /// Whether `next` can be merged into this entry: contiguous intervals
    /// and equal values.
    pub fn mergeable_with(&self, next: &Entry<V>) -> bool
    where
        V: PartialEq,
    {
        self.contiguous_with(next) && self.value == next.value
    }

    /// Merge a mergeable `next` entry into one spanning both intervals, or
    /// `None` if the pair is not mergeable.
    pub fn merged_with(&self, next: &Entry<V>) -> Option<Entry<V>>
    where
        V: Clone + PartialEq,
    {
        self.mergeable_with(next).then(|| {
            Entry::from_raw(
                self.timestamp,
                self.value.clone(),
                self.validity + next.validity,
            )
        })
    }

    /// Extend this entry over a mergeable successor's interval, consuming it.
    ///
    /// Caller must have checked [`Entry::mergeable_with`].
    pub(crate) fn absorb(&mut self, next: Entry<V>)
    where
        V: PartialEq,
    {
        debug_assert!(self.mergeable_with(&next), "absorb requires a mergeable pair");
        self.validity += next.validity;
    }

    /// Map the entry's value, keeping its interval.
    pub(crate) fn with_value<U>(&self, value: U) -> Entry<U> {
        Entry {
            timestamp: self.timestamp,
            value,
            validity: self.validity,
        }
    }
}

impl<V> TryFrom<EntryRecord<V>> for Entry<V> {
    type Error = EntryError;

    fn try_from(record: EntryRecord<V>) -> Result<Self, Self::Error> {
        Entry::new(record.timestamp, record.value, record.validity)
    }
}

impl<V> From<Entry<V>> for EntryRecord<V> {
    fn from(entry: Entry<V>) -> Self {
        EntryRecord {
            timestamp: entry.timestamp,
            value: entry.value,
            validity: entry.validity,
        }
    }
}
