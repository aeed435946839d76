//! Input validation for [`consolidate`](super::consolidate).

use tracing::warn;

use super::error::{ConsolidateError, Violation};
use crate::range::Interval;

/// Checks the whole input before any processing.
///
/// Every violation is collected rather than stopping at the first one, so the
/// caller sees all offending ranges at once.
pub(crate) fn validate(intervals: &[Interval]) -> Result<(), ConsolidateError> {
    let mut violations: Vec<Violation> = intervals
        .iter()
        .enumerate()
        .filter(|(_, interval)| !interval.is_valid())
        .map(|(index, interval)| Violation::Inverted {
            index,
            interval: *interval,
        })
        .collect();

    if intervals.is_empty() {
        violations.push(Violation::Empty);
    }

    if violations.is_empty() {
        return Ok(());
    }

    for violation in &violations {
        warn!(%violation, "rejected range input");
    }
    warn!(
        count = violations.len(),
        total = intervals.len(),
        "range input is invalid"
    );
    Err(ConsolidateError::InvalidInput { violations })
}
