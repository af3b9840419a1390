//! Strictly ascending, duplicate-free sequence of integers
//!
//! [`SortedSet`] is the value type every union strategy consumes and produces.
//! The invariant (each adjacent pair `a, b` satisfies `a < b`) is trusted on the
//! hot path and only asserted in debug builds; callers that cannot vouch for
//! their data should go through [`SortedSet::from_unsorted`] or
//! [`SortedSet::try_from_sorted`].

use crate::error::{Result, UnionError};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Element type of every set
pub type Value = i32;

/// Ordered sequence of distinct values, ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortedSet {
    values: Vec<Value>,
}

impl SortedSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create an empty set with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Wrap values the caller guarantees are strictly ascending
    ///
    /// The invariant is only checked in debug builds. Violating it leaves the
    /// ordering of any union computed from this set unspecified.
    pub fn from_sorted(values: Vec<Value>) -> Self {
        debug_assert!(
            is_strictly_ascending(&values),
            "SortedSet::from_sorted called with values that are not strictly ascending"
        );
        Self { values }
    }

    /// Wrap values after verifying they are strictly ascending
    pub fn try_from_sorted(values: Vec<Value>) -> Result<Self> {
        if let Some(pos) = values.windows(2).position(|w| w[0] >= w[1]) {
            return Err(UnionError::invalid_input(format!(
                "values at index {} and {} are not strictly ascending ({} >= {})",
                pos,
                pos + 1,
                values[pos],
                values[pos + 1]
            )));
        }
        Ok(Self { values })
    }

    /// Sort and deduplicate arbitrary values
    pub fn from_unsorted(mut values: Vec<Value>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// Check the invariant
    pub fn is_strictly_ascending(&self) -> bool {
        is_strictly_ascending(&self.values)
    }

    /// Check membership by binary search
    pub fn contains(&self, value: Value) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// Smallest value, if any
    pub fn first(&self) -> Option<Value> {
        self.values.first().copied()
    }

    /// Largest value, if any
    pub fn last(&self) -> Option<Value> {
        self.values.last().copied()
    }

    /// Borrow the underlying values
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Take ownership of the underlying values
    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }

    /// Append a value larger than every value already present
    pub(crate) fn push(&mut self, value: Value) {
        debug_assert!(self.values.last().is_none_or(|&last| last < value));
        self.values.push(value);
    }
}

impl Deref for SortedSet {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.values
    }
}

impl AsRef<[Value]> for SortedSet {
    fn as_ref(&self) -> &[Value] {
        &self.values
    }
}

impl From<SortedSet> for Vec<Value> {
    fn from(set: SortedSet) -> Self {
        set.values
    }
}

impl FromIterator<Value> for SortedSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SortedSet {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Check that every adjacent pair is strictly increasing
#[inline]
pub fn is_strictly_ascending(values: &[Value]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

/// Total number of values across all sets
#[inline]
pub fn total_len(sets: &[SortedSet]) -> usize {
    sets.iter().map(|s| s.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unsorted() {
        let set = SortedSet::from_unsorted(vec![5, 1, 3, 3, 1, 9]);
        assert_eq!(set.as_slice(), &[1, 3, 5, 9]);
        assert!(set.is_strictly_ascending());
    }

    #[test]
    fn test_try_from_sorted() {
        assert!(SortedSet::try_from_sorted(vec![1, 2, 3]).is_ok());
        assert!(SortedSet::try_from_sorted(vec![]).is_ok());

        let err = SortedSet::try_from_sorted(vec![1, 3, 3]).unwrap_err();
        assert_eq!(err.category(), "input");

        assert!(SortedSet::try_from_sorted(vec![4, 2]).is_err());
    }

    #[test]
    fn test_accessors() {
        let set = SortedSet::from_sorted(vec![-4, 0, 7]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.first(), Some(-4));
        assert_eq!(set.last(), Some(7));
        assert!(set.contains(0));
        assert!(!set.contains(1));
        assert_eq!(set.iter().copied().sum::<Value>(), 3);

        let empty = SortedSet::new();
        assert!(empty.is_empty());
        assert_eq!(empty.first(), None);
    }

    #[test]
    fn test_from_iterator() {
        let set: SortedSet = vec![3, 2, 1, 2].into_iter().collect();
        assert_eq!(set.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_total_len() {
        let sets = vec![
            SortedSet::from_sorted(vec![1, 2]),
            SortedSet::new(),
            SortedSet::from_sorted(vec![3]),
        ];
        assert_eq!(total_len(&sets), 3);
    }

    #[test]
    fn test_serde_transparent() {
        let set = SortedSet::from_sorted(vec![1, 2, 3]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: SortedSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
