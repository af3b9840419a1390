//! Sequential divide-and-conquer union
//!
//! Splits the input at the midpoint, unions both halves recursively and
//! combines them with a pairwise merge. The reduction tree has depth
//! `ceil(log2 k)`, so total merge work is `O(N log k)` rather than the
//! `O(N k)` of folding every set into a running accumulator.

use crate::algorithms::pairwise_merge;
use crate::algorithms::sorted_set::{SortedSet, Value};
use crate::algorithms::{AlgorithmName, UnionStrategy};
use crate::error::{Result, check_range};
use std::borrow::Cow;

/// Sequential binary-tree reduction over pairwise merges
#[derive(Debug, Clone, Copy, Default)]
pub struct DivideConquerUnion;

impl DivideConquerUnion {
    /// Create a new instance
    pub fn new() -> Self {
        Self
    }

    /// Union the sets in `sets[start..end]`
    ///
    /// Fails with `InvalidRange` if the range does not lie inside `sets`.
    pub fn union_range(&self, sets: &[SortedSet], start: usize, end: usize) -> Result<SortedSet> {
        check_range(start, end, sets.len())?;
        Ok(union_slice(&sets[start..end]).into_owned())
    }
}

/// Union of every set in `sets`
///
/// A single-set input is returned borrowed; callers that need an owned value
/// copy it with [`Cow::into_owned`]. Every merged result is freshly allocated
/// and never aliases an input.
pub fn union_slice(sets: &[SortedSet]) -> Cow<'_, SortedSet> {
    match sets {
        [] => Cow::Owned(SortedSet::new()),
        [single] => Cow::Borrowed(single),
        _ => {
            let midpoint = sets.len() / 2;
            let (left, right) = sets.split_at(midpoint);
            let a = union_slice(left);
            let b = union_slice(right);
            Cow::Owned(pairwise_merge::merge(&a, &b))
        }
    }
}

impl UnionStrategy for DivideConquerUnion {
    fn name(&self) -> AlgorithmName {
        AlgorithmName::PairwiseSequential
    }

    fn union(&self, sets: &[SortedSet]) -> Result<SortedSet> {
        Ok(union_slice(sets).into_owned())
    }

    fn estimate_memory(&self, input_size: usize) -> usize {
        // The two operands of the final merge plus its output
        2 * input_size * std::mem::size_of::<Value>()
    }
}
