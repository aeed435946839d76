//! A canonical container for consolidated integer ranges.
//!
//! [`IntervalSet`] wraps a `Vec<Interval>` and guarantees the **consolidated
//! invariant** at all times: ranges are sorted by low, none overlap and none
//! are consecutive (`[1,2]` and `[3,4]` are held as `[1,4]`).
//!
//! Read access is transparent via `Deref<Target = [Interval]>`. Mutation goes
//! through methods that validate the incoming ranges and re-establish the
//! invariant.

use std::fmt::Display;
use std::ops::{Deref, Index};

use super::interval::{Interval, Value};
use crate::consolidate::{
    self, assertions::is_consolidated, leaves_gap, ConsolidateError, Violation,
};

/// A sorted set of disjoint, non-adjacent closed integer ranges.
///
/// # Performance
///
/// - Construction from unsorted input: O(n log n) sort + O(n) sweep.
/// - `push`: O(1) amortized when ranges arrive in order, O(n log n) otherwise.
/// - `contains`: O(log n) binary search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntervalSet(Vec<Interval>);

impl IntervalSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Consolidates `intervals` into a set.
    ///
    /// Unlike [`consolidate`](crate::consolidate()), an empty slice is accepted
    /// and yields the empty set.
    pub fn try_from_slice(intervals: &[Interval]) -> Result<Self, ConsolidateError> {
        if intervals.is_empty() {
            return Ok(Self::new());
        }
        consolidate::consolidate(intervals).map(Self)
    }

    /// Wraps a `Vec` that is **already consolidated** without re-sorting.
    ///
    /// In debug builds this asserts the invariant. The caller must ensure the
    /// input is sorted with at least one uncovered integer between neighbours,
    /// e.g. the output of [`consolidate`](crate::consolidate()).
    pub fn from_consolidated_unchecked(vec: Vec<Interval>) -> Self {
        debug_assert!(
            is_consolidated(&vec),
            "IntervalSet::from_consolidated_unchecked called with non-consolidated input"
        );
        Self(vec)
    }

    /// Re-sorts and merges the held ranges. Contents are always valid here.
    fn normalize(&mut self) {
        if self.0.len() <= 1 {
            return;
        }
        self.0.sort_by_key(Interval::low);
        self.0 = consolidate::sweep(&self.0);
    }

    /// Inserts a range, maintaining consolidated form.
    ///
    /// Ranges at or beyond the current last range are merged in place; any
    /// other position falls back to a full re-consolidation.
    pub fn push(&mut self, interval: Interval) -> Result<(), ConsolidateError> {
        if !interval.is_valid() {
            return Err(ConsolidateError::InvalidInput {
                violations: vec![Violation::Inverted { index: 0, interval }],
            });
        }

        let Some(last) = self.0.last_mut() else {
            self.0.push(interval);
            return Ok(());
        };

        if interval.low() >= last.low() {
            if leaves_gap(last.high(), interval.low()) {
                self.0.push(interval);
            } else if interval.high() > last.high() {
                *last = Interval::new(last.low(), interval.high());
            }
        } else {
            self.0.push(interval);
            self.normalize();
        }
        Ok(())
    }

    /// Validates and adds every range from `intervals`, then re-consolidates.
    ///
    /// Nothing is added if any range is invalid.
    pub fn extend_from_slice(&mut self, intervals: &[Interval]) -> Result<(), ConsolidateError> {
        if intervals.is_empty() {
            return Ok(());
        }
        consolidate::validate(intervals)?;
        self.0.extend_from_slice(intervals);
        self.normalize();
        Ok(())
    }

    /// Returns true if `value` is covered by any range in the set.
    pub fn contains(&self, value: Value) -> bool {
        let idx = self.0.partition_point(|r| r.high() < value);
        self.0.get(idx).is_some_and(|r| r.contains(value))
    }

    /// Returns the consolidated union of `self` and `other`.
    pub fn union(&self, other: &IntervalSet) -> IntervalSet {
        let mut merged = self.clone();
        merged.0.extend_from_slice(&other.0);
        merged.normalize();
        merged
    }

    /// Removes all ranges.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Retains only the ranges for which the predicate returns `true`.
    ///
    /// Removal cannot unsort the set or close a gap, so no re-consolidation
    /// is needed.
    pub fn retain<F: FnMut(&Interval) -> bool>(&mut self, f: F) {
        self.0.retain(f);
    }

    /// Consumes the set and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval> {
        self.0
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.0
    }
}

impl Deref for IntervalSet {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

impl AsRef<[Interval]> for IntervalSet {
    fn as_ref(&self) -> &[Interval] {
        &self.0
    }
}

impl Index<usize> for IntervalSet {
    type Output = Interval;

    fn index(&self, index: usize) -> &Interval {
        &self.0[index]
    }
}

impl TryFrom<Vec<Interval>> for IntervalSet {
    type Error = ConsolidateError;

    fn try_from(vec: Vec<Interval>) -> Result<Self, Self::Error> {
        Self::try_from_slice(&vec)
    }
}

impl From<IntervalSet> for Vec<Interval> {
    fn from(set: IntervalSet) -> Self {
        set.0
    }
}

impl IntoIterator for IntervalSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One `[low,high]` range per line.
impl Display for IntervalSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", interval)?;
        }
        Ok(())
    }
}

/// Enables `assert_eq!(interval_set, vec![...])` in tests.
impl PartialEq<Vec<Interval>> for IntervalSet {
    fn eq(&self, other: &Vec<Interval>) -> bool {
        self.0 == *other
    }
}

impl PartialEq<IntervalSet> for Vec<Interval> {
    fn eq(&self, other: &IntervalSet) -> bool {
        *self == other.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IntervalSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntervalSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let vec = <Vec<Interval> as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(vec).map_err(serde::de::Error::custom)
    }
}
