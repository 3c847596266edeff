//! Ordered, validated collections of non-overlapping entries.
//!
//! [`Series`] owns its entry sequence and upholds two invariants for its
//! whole lifetime:
//!
//! - timestamps are strictly increasing, and
//! - entry intervals never overlap (`entries[i].defined_until() <=
//!   entries[i + 1].timestamp()`); a strict inequality is a gap, where the
//!   series is undefined.
//!
//! The validating constructor [`Series::new`] is the construction path used
//! by the builder and codec collaborators; everything built internally by
//! the algebra goes through [`Series::from_ordered`], which trusts (and
//! debug-asserts) that an operation preserved the invariants.
//!
//! A series may hold zero entries: the empty series is the ordinary
//! "no data" outcome of trims past the domain, filters that drop
//! everything, and merges that fully override the receiver. It is a value,
//! not an error.
//!
//! The transformation algebra is spread over the submodules by
//! responsibility (`trim`, `transform`, `fill`, `merge`, `aggregate`,
//! `bucket`); read-side queries come from the
//! [`StepFunction`](crate::StepFunction) trait.

mod aggregate;
mod bucket;
pub mod error;
mod fill;
mod merge;
mod transform;
mod trim;

pub use bucket::Buckets;
pub use error::SeriesError;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::step_function::StepFunction;

/// An immutable step-function time series: an ordered sequence of
/// non-overlapping [`Entry`] values, possibly with gaps, possibly empty.
///
/// Every operation returns a new series and leaves the receiver untouched,
/// so sharing a series across threads needs no locking (`Series<V>` is
/// `Send + Sync` whenever `V` is).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    bound(serialize = "V: Serialize + Clone", deserialize = "V: Deserialize<'de>"),
    try_from = "Vec<Entry<V>>",
    into = "Vec<Entry<V>>"
)]
pub struct Series<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Series<V> {
    /// Build a series from an ordered entry sequence, validating the
    /// ordering invariants.
    ///
    /// This is the construction path for the builder collaborator (which
    /// pre-sorts its input) and for the codec collaborator (rebuilding from
    /// a decoded block). Per-entry validity is already guaranteed by
    /// [`Entry::new`]; only the cross-entry invariants are checked here.
    pub fn new(entries: Vec<Entry<V>>) -> Result<Self, SeriesError> {
        Self::check_ordering(&entries)?;
        Ok(Self { entries })
    }

    /// The empty series: defined nowhere, the identity for merges.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A series holding a single entry.
    pub fn from_entry(entry: Entry<V>) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    /// Consume the series, returning its ordered entry sequence.
    pub fn into_entries(self) -> Vec<Entry<V>> {
        self.entries
    }

    /// Wrap an entry sequence produced by an operation that preserves the
    /// ordering invariants by construction.
    pub(crate) fn from_ordered(entries: Vec<Entry<V>>) -> Self {
        debug_assert!(
            Self::check_ordering(&entries).is_ok(),
            "operation produced an invalid entry sequence"
        );
        Self { entries }
    }

    fn check_ordering(entries: &[Entry<V>]) -> Result<(), SeriesError> {
        for (i, pair) in entries.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            snafu::ensure!(
                next.timestamp() > prev.timestamp(),
                error::UnorderedEntriesSnafu {
                    index: i + 1,
                    timestamp: next.timestamp(),
                    previous: prev.timestamp(),
                }
            );
            snafu::ensure!(
                next.timestamp() >= prev.defined_until(),
                error::OverlappingEntriesSnafu {
                    index: i + 1,
                    timestamp: next.timestamp(),
                    previous_end: prev.defined_until(),
                }
            );
        }
        Ok(())
    }
}

impl<V> StepFunction<V> for Series<V> {
    fn entries(&self) -> &[Entry<V>] {
        &self.entries
    }
}

impl<V> TryFrom<Vec<Entry<V>>> for Series<V> {
    type Error = SeriesError;

    fn try_from(entries: Vec<Entry<V>>) -> Result<Self, Self::Error> {
        Series::new(entries)
    }
}

impl<V> From<Series<V>> for Vec<Entry<V>> {
    fn from(series: Series<V>) -> Self {
        series.entries
    }
}
