//! Chunked parallel divide-and-conquer union
//!
//! The `k` input sets are split into `chunk_count` contiguous, equal-sized
//! chunks. Each chunk is reduced independently on the rayon pool into its own
//! partial result; collecting the partials is the only synchronization point.
//! The partials are then reduced sequentially with the same divide-and-conquer
//! merge. Chunks are equal by count, not by element volume, so uneven set sizes
//! can leave some workers idle.

use crate::algorithms::divide_conquer::union_slice;
use crate::algorithms::sorted_set::{SortedSet, Value};
use crate::algorithms::{AlgorithmName, UnionStats, UnionStrategy, timed_phase};
use crate::error::{Result, check_partitioning};
use rayon::prelude::*;
use std::time::Instant;

/// Default number of chunks
pub const DEFAULT_CHUNK_COUNT: usize = 8;

/// Divide-and-conquer union fanned out over equal chunks
#[derive(Debug, Clone, Copy)]
pub struct ParallelDivideConquerUnion {
    chunk_count: usize,
}

impl ParallelDivideConquerUnion {
    /// Create an instance splitting the input into `chunk_count` chunks
    pub fn new(chunk_count: usize) -> Self {
        Self { chunk_count }
    }

    /// Configured number of chunks
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    fn run(&self, sets: &[SortedSet], stats: &mut UnionStats) -> Result<SortedSet> {
        // Rejected before any worker is spawned
        check_partitioning(sets.len(), self.chunk_count)?;

        if sets.is_empty() {
            return Ok(SortedSet::new());
        }

        let step = sets.len() / self.chunk_count;
        let partials: Vec<SortedSet> = timed_phase(&mut stats.phases, "parallel", || {
            sets.par_chunks(step)
                .map(|chunk| union_slice(chunk).into_owned())
                .collect()
        });
        stats.used_parallel = true;

        Ok(timed_phase(&mut stats.phases, "combine", || {
            union_slice(&partials).into_owned()
        }))
    }
}

impl Default for ParallelDivideConquerUnion {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_COUNT)
    }
}

impl UnionStrategy for ParallelDivideConquerUnion {
    fn name(&self) -> AlgorithmName {
        AlgorithmName::PairwiseParallel
    }

    fn union(&self, sets: &[SortedSet]) -> Result<SortedSet> {
        self.run(sets, &mut UnionStats::default())
    }

    fn execute(&self, sets: &[SortedSet]) -> Result<(SortedSet, UnionStats)> {
        let start = Instant::now();
        let mut phase_stats = UnionStats::default();
        let output = self.run(sets, &mut phase_stats)?;

        let mut stats = UnionStats::collect(sets, &output, start.elapsed());
        stats.used_parallel = phase_stats.used_parallel;
        stats.phases = phase_stats.phases;
        Ok((output, stats))
    }

    fn estimate_memory(&self, input_size: usize) -> usize {
        // Every chunk holds a merge tree at once, plus the partials
        3 * input_size * std::mem::size_of::<Value>()
    }

    fn supports_parallel(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::DivideConquerUnion;
    use crate::error::UnionError;

    fn interleaved_sets(k: usize) -> Vec<SortedSet> {
        (0..k)
            .map(|i| {
                let i = i as Value;
                SortedSet::from_sorted((0..20).map(|j| j * 3 + i % 5).collect())
            })
            .collect()
    }

    #[test]
    fn test_parallel_three_sets() {
        let input = vec![
            SortedSet::from_sorted(vec![1, 3, 5]),
            SortedSet::from_sorted(vec![2, 3, 6]),
            SortedSet::from_sorted(vec![3, 4]),
        ];
        for chunk_count in [1, 3] {
            let result = ParallelDivideConquerUnion::new(chunk_count).union(&input).unwrap();
            assert_eq!(result.as_slice(), &[1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_parallel_rejects_uneven_partition() {
        let input = interleaved_sets(10);
        match ParallelDivideConquerUnion::new(3).union(&input) {
            Err(UnionError::InvalidPartitioning {
                num_sets,
                chunk_count,
            }) => {
                assert_eq!(num_sets, 10);
                assert_eq!(chunk_count, 3);
            }
            other => panic!("expected InvalidPartitioning, got {:?}", other),
        }
    }

    #[test]
    fn test_parallel_rejects_zero_chunks() {
        let input = interleaved_sets(4);
        assert!(ParallelDivideConquerUnion::new(0).union(&input).is_err());
    }

    #[test]
    fn test_parallel_rejects_more_chunks_than_sets() {
        let input = interleaved_sets(4);
        assert!(ParallelDivideConquerUnion::new(8).union(&input).is_err());
    }

    #[test]
    fn test_parallel_empty_input() {
        let result = ParallelDivideConquerUnion::new(4).union(&[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let input = interleaved_sets(24);
        let expected = DivideConquerUnion::new().union(&input).unwrap();

        for chunk_count in [1, 2, 3, 4, 6, 8, 12, 24] {
            let result = ParallelDivideConquerUnion::new(chunk_count).union(&input).unwrap();
            assert_eq!(result, expected, "chunk_count = {}", chunk_count);
        }
    }

    #[test]
    fn test_parallel_execute_records_phases() {
        let input = interleaved_sets(16);
        let (result, stats) = ParallelDivideConquerUnion::default().execute(&input).unwrap();

        assert!(result.is_strictly_ascending());
        assert!(stats.used_parallel);
        assert_eq!(stats.input_sets, 16);
        assert!(stats.phase("parallel").is_some());
        assert!(stats.phase("combine").is_some());
    }

    #[test]
    fn test_strategy_metadata() {
        let parallel = ParallelDivideConquerUnion::default();
        assert_eq!(parallel.name(), AlgorithmName::PairwiseParallel);
        assert_eq!(parallel.chunk_count(), DEFAULT_CHUNK_COUNT);
        assert!(parallel.supports_parallel());
    }
}
