//! Range consolidation: validation, sorting and the merge sweep.
//!
//! [`consolidate`] turns any non-empty list of closed integer ranges into the
//! minimal equivalent list:
//!
//! - the union of the output covers exactly the integers the input covers,
//! - no two output ranges overlap or sit next to each other (`[1,2]` and
//!   `[3,5]` are merged into `[1,5]` since no integer lies between them),
//! - the output is sorted ascending by low.
//!
//! # Performance
//!
//! O(n log n) for the sort of the input copy followed by an O(n) sweep.

pub mod assertions;
mod error;
mod sweep;
mod validate;

#[cfg(test)]
mod tests;

use tracing::debug;

pub use error::{ConsolidateError, Violation};
pub(crate) use sweep::{leaves_gap, sweep};
pub(crate) use validate::validate;

use crate::range::Interval;

/// Consolidates a list of closed integer ranges.
///
/// The input is left untouched; a new sorted, disjoint, non-adjacent list is
/// returned. Fails with [`ConsolidateError::InvalidInput`] when the list is
/// empty or any range has `low > high`, reporting every offending range.
///
/// # Example
///
/// ```rust
/// use range_consolidator::{consolidate, Interval};
///
/// let merged = consolidate(&[Interval::new(3, 5), Interval::new(1, 2)]).unwrap();
/// assert_eq!(merged, vec![Interval::new(1, 5)]);
///
/// assert!(consolidate(&[]).is_err());
/// ```
pub fn consolidate(intervals: &[Interval]) -> Result<Vec<Interval>, ConsolidateError> {
    validate(intervals)?;

    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(Interval::low);

    let merged = sweep(&sorted);
    debug_assert!(assertions::is_consolidated(&merged));
    debug!(
        input = intervals.len(),
        output = merged.len(),
        "consolidated ranges"
    );
    Ok(merged)
}
