//! Combining two series: append and prepend.
//!
//! Both operations resolve domain overlap the same way: the *incoming*
//! series wins, because it carries the newer data. Only which side of the
//! receiver survives differs:
//!
//! - [`Series::append`] keeps the receiver's prefix strictly before the
//!   incoming domain;
//! - [`Series::prepend`] keeps the receiver's suffix at or after the
//!   incoming domain's end.
//!
//! A receiver entry straddling the seam is sliced down to its
//! non-overlapping remainder; entries wholly inside the incoming domain are
//! removed. With `compress`, mergeable entries across the seam are merged
//! after slicing.

use log::debug;

use crate::series::Series;
use crate::series::transform::compress_entries;
use crate::step_function::StepFunction;

impl<V> Series<V>
where
    V: Clone + PartialEq,
{
    /// Concatenate `other` after the receiver, letting `other` win wherever
    /// the domains overlap.
    ///
    /// The receiver contributes only its domain strictly before `other`'s
    /// first timestamp; an entry straddling that instant is sliced, entries
    /// at or past it are dropped. If `other` is empty the receiver is
    /// returned unchanged; if `other`'s domain starts at or before the
    /// receiver's, the result is `other`'s entries verbatim.
    pub fn append(&self, other: &Series<V>, compress: bool) -> Series<V> {
        let Some(boundary) = other.first_entry().map(|e| e.timestamp()) else {
            return self.clone();
        };

        let mut out = self.trim_right(boundary).into_entries();
        debug!(
            "append: receiver keeps {} of {} entries before {boundary}",
            out.len(),
            self.len()
        );
        out.extend(other.entries().iter().cloned());
        if compress {
            out = compress_entries(out);
        }
        Series::from_ordered(out)
    }

    /// Concatenate `other` before the receiver, letting `other` win
    /// wherever the domains overlap.
    ///
    /// Mirror of [`Series::append`]: the receiver contributes only its
    /// domain at or after `other`'s exclusive end; the straddling entry
    /// keeps its suffix from that instant on.
    pub fn prepend(&self, other: &Series<V>, compress: bool) -> Series<V> {
        let Some(boundary) = other.last_entry().map(|e| e.defined_until()) else {
            return self.clone();
        };

        let mut out = other.entries().to_vec();
        let remainder = self.trim_left(boundary).into_entries();
        debug!(
            "prepend: receiver keeps {} of {} entries at or after {boundary}",
            remainder.len(),
            self.len()
        );
        out.extend(remainder);
        if compress {
            out = compress_entries(out);
        }
        Series::from_ordered(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::series::Series;
    use crate::series::test_util::{assert_invariants, records, series};
    use crate::step_function::StepFunction;

    #[test]
    fn append_overrides_the_overlapped_suffix() {
        let receiver = series(&[(1, "a", 10), (11, "b", 10), (21, "c", 10)]);
        let incoming = series(&[(21, "d", 10)]);
        let merged = receiver.append(&incoming, false);
        assert_eq!(
            records(&merged),
            vec![(1, "a", 10), (11, "b", 10), (21, "d", 10)]
        );
        assert_invariants(&merged);
    }

    #[test]
    fn append_slices_the_straddling_entry() {
        let receiver = series(&[(0, "a", 10), (10, "b", 10)]);
        let incoming = series(&[(15, "z", 10)]);
        let merged = receiver.append(&incoming, false);
        assert_eq!(
            records(&merged),
            vec![(0, "a", 10), (10, "b", 5), (15, "z", 10)]
        );
    }

    #[test]
    fn append_drops_receiver_data_past_the_incoming_start() {
        // The receiver extends beyond the incoming domain; everything at or
        // after the incoming start belongs to the incoming series.
        let receiver = series(&[(0, "a", 100)]);
        let incoming = series(&[(10, "z", 5)]);
        let merged = receiver.append(&incoming, false);
        assert_eq!(records(&merged), vec![(0, "a", 10), (10, "z", 5)]);
    }

    #[test]
    fn append_full_override_returns_the_incoming_entries_verbatim() {
        let receiver = series(&[(5, "a", 5), (10, "b", 5)]);
        let incoming = series(&[(0, "x", 30)]);
        assert_eq!(receiver.append(&incoming, false), incoming);
    }

    #[test]
    fn append_disjoint_is_plain_concatenation() {
        let receiver = series(&[(0, "a", 5)]);
        let incoming = series(&[(10, "b", 5)]);
        let merged = receiver.append(&incoming, false);
        assert_eq!(records(&merged), vec![(0, "a", 5), (10, "b", 5)]);
    }

    #[test]
    fn append_compress_merges_across_the_seam() {
        let receiver = series(&[(0, "a", 10)]);
        let incoming = series(&[(5, "a", 10)]);
        let merged = receiver.append(&incoming, true);
        assert_eq!(records(&merged), vec![(0, "a", 15)]);

        let uncompressed = receiver.append(&incoming, false);
        assert_eq!(records(&uncompressed), vec![(0, "a", 5), (5, "a", 10)]);
    }

    #[test]
    fn append_reads_back_incoming_values_over_its_whole_domain() {
        let receiver = series(&[(0, 1, 10), (10, 2, 10), (25, 3, 10)]);
        let incoming = series(&[(8, 9, 4), (15, 8, 30)]);
        for compress in [false, true] {
            let merged = receiver.append(&incoming, compress);
            let domain = incoming.loose_domain().expect("non-empty");
            for t in domain {
                assert_eq!(merged.at(t), incoming.at(t), "t={t}");
            }
            assert_invariants(&merged);
        }
    }

    #[test]
    fn prepend_overrides_the_overlapped_prefix() {
        let receiver = series(&[(0, "a", 10), (10, "b", 10)]);
        let incoming = series(&[(0, "z", 5)]);
        let merged = receiver.prepend(&incoming, false);
        assert_eq!(
            records(&merged),
            vec![(0, "z", 5), (5, "a", 5), (10, "b", 10)]
        );
        assert_invariants(&merged);
    }

    #[test]
    fn prepend_full_override_returns_the_incoming_entries_verbatim() {
        let receiver = series(&[(5, "a", 5), (10, "b", 5)]);
        let incoming = series(&[(0, "x", 30)]);
        assert_eq!(receiver.prepend(&incoming, false), incoming);
    }

    #[test]
    fn prepend_disjoint_is_plain_concatenation() {
        let receiver = series(&[(10, "b", 5)]);
        let incoming = series(&[(0, "a", 5)]);
        let merged = receiver.prepend(&incoming, false);
        assert_eq!(records(&merged), vec![(0, "a", 5), (10, "b", 5)]);
    }

    #[test]
    fn prepend_compress_merges_across_the_seam() {
        let receiver = series(&[(0, "a", 10)]);
        let incoming = series(&[(0, "a", 5)]);
        let merged = receiver.prepend(&incoming, true);
        assert_eq!(records(&merged), vec![(0, "a", 10)]);
    }

    #[test]
    fn prepend_reads_back_incoming_values_over_its_whole_domain() {
        let receiver = series(&[(0, 1, 10), (10, 2, 10), (25, 3, 10)]);
        let incoming = series(&[(8, 9, 4), (15, 8, 10)]);
        for compress in [false, true] {
            let merged = receiver.prepend(&incoming, compress);
            let domain = incoming.loose_domain().expect("non-empty");
            for t in domain {
                assert_eq!(merged.at(t), incoming.at(t), "t={t}");
            }
            assert_invariants(&merged);
        }
    }

    #[test]
    fn merging_the_empty_series_changes_nothing() {
        let receiver = series(&[(0, 1, 10)]);
        let empty = Series::empty();
        assert_eq!(receiver.append(&empty, true), receiver);
        assert_eq!(receiver.prepend(&empty, true), receiver);

        // An empty receiver adopts the incoming entries.
        let incoming = series(&[(0, 1, 10)]);
        assert_eq!(Series::empty().append(&incoming, false), incoming);
        assert_eq!(Series::empty().prepend(&incoming, false), incoming);
    }
}
