//! Closed integer interval value type.

use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// Integer type carried by interval bounds.
pub type Value = i64;

/// Closed range `[low, high]` of integers.
///
/// An `Interval` is a plain value record. [`Interval::new`] does not check
/// `low <= high`; ranges coming from callers are validated by
/// [`consolidate`](crate::consolidate()) before any processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    low: Value,
    high: Value,
}

impl Interval {
    /// Creates interval `[low, high]` without checking the bounds.
    pub const fn new(low: Value, high: Value) -> Self {
        Self { low, high }
    }

    /// Creates interval `[low, high]`, or `None` if `low > high`.
    pub const fn checked(low: Value, high: Value) -> Option<Self> {
        if low <= high {
            Some(Self { low, high })
        } else {
            None
        }
    }

    pub const fn low(&self) -> Value {
        self.low
    }

    pub const fn high(&self) -> Value {
        self.high
    }

    /// Returns true if `low <= high`.
    pub const fn is_valid(&self) -> bool {
        self.low <= self.high
    }

    /// Returns true if `value` ∈ `[low, high]`.
    pub const fn contains(&self, value: Value) -> bool {
        self.low <= value && value <= self.high
    }

    /// Checks if this interval shares at least one integer with `other`.
    pub const fn overlaps(&self, other: &Interval) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

/// Errors produced when parsing the `[low,high]` text form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseIntervalError {
    #[error("missing ',' between bounds in {0:?}")]
    MissingSeparator(String),

    #[error("unbalanced brackets in {0:?}")]
    UnbalancedBrackets(String),

    #[error("invalid bound {bound:?} in {input:?}")]
    InvalidBound {
        input: String,
        bound: String,
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for Interval {
    type Err = ParseIntervalError;

    /// Parses `[low,high]`. Brackets are optional and whitespace around the
    /// bounds is ignored. The bounds are not required to be ordered.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => trimmed,
            _ => return Err(ParseIntervalError::UnbalancedBrackets(s.to_string())),
        };

        let (low, high) = inner
            .split_once(',')
            .ok_or_else(|| ParseIntervalError::MissingSeparator(s.to_string()))?;

        let parse_bound = |bound: &str| {
            bound
                .trim()
                .parse::<Value>()
                .map_err(|source| ParseIntervalError::InvalidBound {
                    input: s.to_string(),
                    bound: bound.trim().to_string(),
                    source,
                })
        };

        Ok(Self::new(parse_bound(low)?, parse_bound(high)?))
    }
}
