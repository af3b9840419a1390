//! Two-way merge-union of sorted sets
//!
//! The leaf primitive of the divide-and-conquer strategies: a linear
//! two-pointer scan that emits each value once, collapsing values present in
//! both operands.

use crate::algorithms::sorted_set::{SortedSet, Value};
use std::cmp::Ordering;

/// Merge two sorted sets into a new sorted set holding their union
///
/// Runs in `O(|a| + |b|)` and allocates a single buffer of at most
/// `|a| + |b|` values.
pub fn merge(a: &SortedSet, b: &SortedSet) -> SortedSet {
    SortedSet::from_sorted(merge_slices(a, b))
}

/// Merge-union over raw ascending slices
pub fn merge_slices(a: &[Value], b: &[Value]) -> Vec<Value> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => {
                result.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                result.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                result.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }

    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    result
}
