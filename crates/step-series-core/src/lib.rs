//! Entry algebra for step-function time series.
//!
//! This crate provides the foundational pieces for `step-series`:
//!
//! - An [`Entry`] type: a value held constant over a half-open time
//!   interval, with a `validity > 0` construction guard (`entry` module).
//! - A [`Series`] type: an ordered, validated, possibly-empty collection of
//!   non-overlapping entries exposing the full algebra: lookup, trimming
//!   and splitting, map/filter/fill, append/prepend merging, integrals, and
//!   lazy bucketing (`series` module).
//! - The [`StepFunction`] trait: the read-side queries as provided methods
//!   over an abstract ordered entry sequence, so alternative backings share
//!   the same contract (`step_function` module).
//! - A [`TimeUnit`] model isolating the one place native integer ticks are
//!   interpreted, for the integral operations (`time` module).
//!
//! Every operation is a pure function over immutable values: it returns a
//! new series and leaves the receiver untouched. Empty results and absent
//! values are ordinary outcomes (`Series::empty()` / `Option::None`), never
//! errors; only construction with invalid data fails.
//!
//! Higher-level collaborators (the sorting/canonicalizing builder, the
//! binary archival codec, resampling and storage tiering) are expected to
//! build on this crate through [`Series::new`], the entry-sequence
//! accessor, and [`Series::bucket`] rather than re-implementing the entry
//! algebra.
#![deny(missing_docs)]
pub mod entry;
pub mod series;
pub mod step_function;
pub mod time;

pub use entry::{Entry, EntryError};
pub use series::{Buckets, Series, SeriesError};
pub use step_function::StepFunction;
pub use time::TimeUnit;
