//! range-consolidator - merges closed integer ranges into their minimal form.
//!
//! Given any collection of `[low, high]` ranges (postal-code restrictions,
//! id blocks, port ranges, ...) the crate produces the smallest sorted list of
//! disjoint, non-adjacent ranges covering exactly the same integers.
//!
//! ```rust
//! use range_consolidator::{consolidate, Interval};
//!
//! let zip_codes = [
//!     Interval::new(94133, 94133),
//!     Interval::new(94200, 94299),
//!     Interval::new(94226, 94399),
//! ];
//! let merged = consolidate(&zip_codes).unwrap();
//! assert_eq!(merged, vec![Interval::new(94133, 94133), Interval::new(94200, 94399)]);
//! ```

pub mod consolidate;
pub mod range;

pub use consolidate::{consolidate, ConsolidateError, Violation};
pub use range::{Interval, IntervalSet, ParseIntervalError, Value};
