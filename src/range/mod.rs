//! Closed integer ranges and the consolidated set container built on them.

mod interval;
mod interval_set;

pub use interval::{Interval, ParseIntervalError, Value};
pub use interval_set::IntervalSet;
