use std::fmt;

use thiserror::Error;

use crate::range::Interval;

/// A single reason an input range list was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The input list has no ranges.
    Empty,
    /// The range at `index` has `low > high`.
    Inverted { index: usize, interval: Interval },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty => write!(f, "input range list cannot be empty"),
            Violation::Inverted { index, interval } => write!(
                f,
                "range #{} low value {} cannot be > high value {}",
                index,
                interval.low(),
                interval.high()
            ),
        }
    }
}

/// Errors that can occur while consolidating a range list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsolidateError {
    #[error("invalid input: {}", join(.violations))]
    InvalidInput { violations: Vec<Violation> },
}

impl ConsolidateError {
    /// Every violation found in the rejected input, in input order.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ConsolidateError::InvalidInput { violations } => violations,
        }
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
