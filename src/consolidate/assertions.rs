//! Canonical-form checks for consolidated range lists.

use super::sweep::leaves_gap;
use crate::range::Interval;

/// Returns true if `intervals` is consolidated: each interval has low <= high,
/// intervals are sorted by low, and every neighbouring pair leaves at least one
/// uncovered integer between them.
pub fn is_consolidated(intervals: &[Interval]) -> bool {
    intervals.iter().all(Interval::is_valid)
        && intervals
            .windows(2)
            .all(|w| leaves_gap(w[0].high(), w[1].low()))
}
