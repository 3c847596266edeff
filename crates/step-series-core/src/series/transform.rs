//! Value transformation: map, filter, and the compression post-pass.
//!
//! Mapping preserves every original entry boundary; filtering drops failing
//! entries whole, opening gaps. Neither touches surviving neighbors.
//!
//! **Compression** here is the canonical post-pass that merges runs of
//! mergeable entries (contiguous, equal values) into one, not the binary
//! archival codec. The pass is idempotent: its output never holds two
//! adjacent mergeable entries, so applying a compressing transform twice
//! yields the same entries as applying it once.

use crate::entry::Entry;
use crate::series::Series;
use crate::step_function::StepFunction;

/// Merge every run of mergeable entries into a single entry.
///
/// One forward pass: each entry either extends the previous output entry
/// (summed validity) or starts a new run, mirroring run accumulation over
/// an ordered sequence.
pub(crate) fn compress_entries<V>(entries: Vec<Entry<V>>) -> Vec<Entry<V>>
where
    V: PartialEq,
{
    let mut out: Vec<Entry<V>> = Vec::with_capacity(entries.len());
    for entry in entries {
        match out.last_mut() {
            Some(prev) if prev.mergeable_with(&entry) => prev.absorb(entry),
            _ => out.push(entry),
        }
    }
    out
}

impl<V> Series<V> {
    /// Apply `f` to every value, preserving all entry boundaries.
    ///
    /// With `compress`, runs of resulting-adjacent equal values are merged
    /// afterwards; the timestamps `f` observes are never affected.
    pub fn map<U, F>(&self, mut f: F, compress: bool) -> Series<U>
    where
        F: FnMut(&V) -> U,
        U: PartialEq,
    {
        let mapped = self
            .entries()
            .iter()
            .map(|e| e.with_value(f(e.value())))
            .collect();
        Series::from_ordered(maybe_compress(mapped, compress))
    }

    /// Like [`Series::map`], but `f` sees the whole entry, enabling
    /// time-dependent transforms. Same compression contract.
    pub fn map_entries<U, F>(&self, mut f: F, compress: bool) -> Series<U>
    where
        F: FnMut(&Entry<V>) -> U,
        U: PartialEq,
    {
        let mapped = self
            .entries()
            .iter()
            .map(|e| e.with_value(f(e)))
            .collect();
        Series::from_ordered(maybe_compress(mapped, compress))
    }

    /// Keep only entries whose value satisfies `predicate`; dropped entries
    /// open gaps, survivors are untouched.
    pub fn filter<F>(&self, mut predicate: F) -> Series<V>
    where
        F: FnMut(&V) -> bool,
        V: Clone,
    {
        self.filter_entries(|e| predicate(e.value()))
    }

    /// Like [`Series::filter`], with the whole entry visible to the
    /// predicate.
    pub fn filter_entries<F>(&self, mut predicate: F) -> Series<V>
    where
        F: FnMut(&Entry<V>) -> bool,
        V: Clone,
    {
        let kept = self
            .entries()
            .iter()
            .filter(|e| predicate(e))
            .cloned()
            .collect();
        Series::from_ordered(kept)
    }

    /// Combined filter and map: entries mapped to `None` are dropped,
    /// `Some` replacements keep their boundary. Same compression contract
    /// as [`Series::map`].
    pub fn filter_map<U, F>(&self, mut f: F, compress: bool) -> Series<U>
    where
        F: FnMut(&V) -> Option<U>,
        U: PartialEq,
    {
        self.filter_map_entries(|e| f(e.value()), compress)
    }

    /// Like [`Series::filter_map`], with the whole entry visible to `f`.
    pub fn filter_map_entries<U, F>(&self, mut f: F, compress: bool) -> Series<U>
    where
        F: FnMut(&Entry<V>) -> Option<U>,
        U: PartialEq,
    {
        let mapped = self
            .entries()
            .iter()
            .filter_map(|e| f(e).map(|v| e.with_value(v)))
            .collect();
        Series::from_ordered(maybe_compress(mapped, compress))
    }

    /// The compression post-pass on its own: merge every run of mergeable
    /// entries. Idempotent.
    pub fn compressed(&self) -> Series<V>
    where
        V: Clone + PartialEq,
    {
        Series::from_ordered(compress_entries(self.entries().to_vec()))
    }
}

fn maybe_compress<U>(entries: Vec<Entry<U>>, compress: bool) -> Vec<Entry<U>>
where
    U: PartialEq,
{
    if compress {
        compress_entries(entries)
    } else {
        entries
    }
}
