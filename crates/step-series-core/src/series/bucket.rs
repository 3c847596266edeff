//! Bucketing: partitioning a series along a boundary sequence.
//!
//! [`Series::bucket`] is the hand-off point to downstream resampling and
//! storage-tiering logic: it walks a caller-supplied increasing sequence of
//! bucket-start timestamps and yields one `(bucket_start, sub_series)` pair
//! per boundary. The result is a plain lazy [`Iterator`]: nothing is
//! materialized until the caller advances it, and the sequence is finite
//! iff the boundary input is.
//! Restart by calling [`Series::bucket`] again.

use std::iter::Peekable;

use crate::series::Series;

/// Lazy iterator of `(bucket_start, sub_series)` pairs produced by
/// [`Series::bucket`].
///
/// Each sub-series is the receiver trimmed to
/// `[bucket_start, next_boundary)`; the final boundary's bucket is
/// unbounded on the right. Buckets with no overlap with the domain yield
/// the empty series.
pub struct Buckets<'a, V, I>
where
    I: Iterator<Item = i64>,
{
    series: &'a Series<V>,
    boundaries: Peekable<I>,
}

impl<V, I> Iterator for Buckets<'_, V, I>
where
    V: Clone,
    I: Iterator<Item = i64>,
{
    type Item = (i64, Series<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.boundaries.next()?;
        let sub = match self.boundaries.peek() {
            Some(&next) => {
                debug_assert!(next > start, "bucket boundaries must be increasing");
                self.series.slice(start, next)
            }
            None => self.series.trim_left(start),
        };
        Some((start, sub))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.boundaries.size_hint()
    }
}

impl<V> Series<V> {
    /// Partition the series along an increasing sequence of bucket-start
    /// timestamps.
    ///
    /// See [`Buckets`] for the pair semantics. The boundary sequence is
    /// consumed lazily, so an effectively unbounded generator works as long
    /// as the caller stops advancing the iterator.
    pub fn bucket<I>(&self, boundaries: I) -> Buckets<'_, V, I::IntoIter>
    where
        I: IntoIterator<Item = i64>,
    {
        Buckets {
            series: self,
            boundaries: boundaries.into_iter().peekable(),
        }
    }
}
