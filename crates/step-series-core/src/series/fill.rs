//! Gap filling.

use log::debug;

use crate::entry::Entry;
use crate::series::Series;
use crate::series::transform::compress_entries;
use crate::step_function::StepFunction;

impl<V> Series<V>
where
    V: Clone + PartialEq,
{
    /// Fill every gap with an entry carrying `value`, spanning exactly the
    /// gap.
    ///
    /// The result is compressed: a fill entry that is mergeable with a
    /// neighboring original (same value, contiguous) extends that neighbor
    /// instead of standing on its own. A series without gaps is returned
    /// unchanged.
    pub fn fill(&self, value: V) -> Series<V> {
        let entries = self.entries();
        let gap_count = self.gaps().len();
        if gap_count == 0 {
            return self.clone();
        }
        debug!("fill: closing {gap_count} gaps across {} entries", entries.len());

        let mut out = Vec::with_capacity(entries.len() + gap_count);
        for entry in entries {
            if let Some(prev_end) = out.last().map(Entry::defined_until) {
                if prev_end < entry.timestamp() {
                    out.push(Entry::from_raw(
                        prev_end,
                        value.clone(),
                        entry.timestamp() - prev_end,
                    ));
                }
            }
            out.push(entry.clone());
        }
        Series::from_ordered(compress_entries(out))
    }
}
