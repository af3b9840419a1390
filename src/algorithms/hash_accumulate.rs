//! Hash-accumulate-then-sort union
//!
//! Ignores the sortedness of its inputs: every value goes into one
//! deduplicating hash set, whose contents are then sorted. Accumulation is
//! `O(N)` amortized and the sort `O(D log D)` for `D` distinct values, so this
//! strategy only pays off when duplication across sets is heavy (`D << N`).

use crate::algorithms::sorted_set::{SortedSet, Value};
use crate::algorithms::{AlgorithmName, UnionStats, UnionStrategy, timed_phase};
use crate::error::Result;
use ahash::AHashSet;
use std::time::Instant;

/// Union through an intermediate hash set
#[derive(Debug, Clone, Copy, Default)]
pub struct HashAccumulateUnion;

impl HashAccumulateUnion {
    /// Create a new instance
    pub fn new() -> Self {
        Self
    }

    fn run(&self, sets: &[SortedSet], stats: &mut UnionStats) -> SortedSet {
        let accumulator = timed_phase(&mut stats.phases, "inserting", || {
            // The largest input is a lower bound on the distinct count
            let capacity = sets.iter().map(|s| s.len()).max().unwrap_or(0);
            let mut accumulator: AHashSet<Value> = AHashSet::with_capacity(capacity);
            for set in sets {
                accumulator.extend(set.iter().copied());
            }
            accumulator
        });

        let mut values: Vec<Value> = accumulator.into_iter().collect();

        timed_phase(&mut stats.phases, "sorting", || values.sort_unstable());

        SortedSet::from_sorted(values)
    }
}

impl UnionStrategy for HashAccumulateUnion {
    fn name(&self) -> AlgorithmName {
        AlgorithmName::HashAccumulate
    }

    fn union(&self, sets: &[SortedSet]) -> Result<SortedSet> {
        Ok(self.run(sets, &mut UnionStats::default()))
    }

    fn execute(&self, sets: &[SortedSet]) -> Result<(SortedSet, UnionStats)> {
        let start = Instant::now();
        let mut phase_stats = UnionStats::default();
        let output = self.run(sets, &mut phase_stats);

        let mut stats = UnionStats::collect(sets, &output, start.elapsed());
        stats.phases = phase_stats.phases;
        Ok((output, stats))
    }

    fn estimate_memory(&self, input_size: usize) -> usize {
        // Hash table slots (with load-factor slack) plus the sorted copy
        let slot = std::mem::size_of::<Value>() + 1;
        input_size * slot * 2 + input_size * std::mem::size_of::<Value>()
    }
}
