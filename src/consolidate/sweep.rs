use crate::range::{Interval, Value};

/// Returns true if a group ending at `high` must be closed before a range
/// starting at `next_low`, i.e. at least one integer lies between them.
///
/// Touching (`high == next_low`) and consecutive (`high + 1 == next_low`)
/// bounds stay in the same group.
pub(crate) fn leaves_gap(high: Value, next_low: Value) -> bool {
    high < next_low && high.abs_diff(next_low) > 1
}

/// Merges ranges already sorted ascending by low into consolidated form.
///
/// Single left-to-right pass. `group_start` indexes the range that opened the
/// current group and `group_high` is the highest bound seen in it, so ranges
/// nested inside an earlier one never close the group early.
pub(crate) fn sweep(sorted: &[Interval]) -> Vec<Interval> {
    let mut merged = Vec::new();
    let mut group_start = 0usize;
    let mut group_high = Value::MIN;

    for (i, current) in sorted.iter().enumerate() {
        if i == group_start || current.high() > group_high {
            group_high = current.high();
        }

        let closes = match sorted.get(i + 1) {
            None => true,
            Some(next) => leaves_gap(group_high, next.low()),
        };

        if closes {
            merged.push(Interval::new(sorted[group_start].low(), group_high));
            group_start = i + 1;
        }
    }

    merged
}
