//! K-way union strategies
//!
//! Each strategy computes the sorted, duplicate-free union of `k` sorted sets.
//! They differ only in how they get there:
//!
//! - [`DivideConquerUnion`]: binary-tree reduction with pairwise merges
//! - [`ParallelDivideConquerUnion`]: the same reduction over equal chunks on a thread pool
//! - [`HashAccumulateUnion`]: hash-set accumulation followed by a sort
//! - [`MinPointerUnion`]: one cursor per set, repeatedly emitting the global minimum
//! - [`MultiwaySweepUnion`]: sweep over every candidate value of the universe

pub mod divide_conquer;
pub mod hash_accumulate;
pub mod min_pointer;
pub mod multiway_sweep;
pub mod pairwise_merge;
pub mod parallel_union;
pub mod sorted_set;

pub use divide_conquer::DivideConquerUnion;
pub use hash_accumulate::HashAccumulateUnion;
pub use min_pointer::MinPointerUnion;
pub use multiway_sweep::MultiwaySweepUnion;
pub use pairwise_merge::merge;
pub use parallel_union::ParallelDivideConquerUnion;
pub use sorted_set::{SortedSet, Value};

use crate::error::{Result, UnionError};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Names of the supported strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AlgorithmName {
    /// Sequential divide-and-conquer pairwise merge
    PairwiseSequential,
    /// Chunked divide-and-conquer on worker threads
    PairwiseParallel,
    /// Hash-set accumulation followed by a sort
    HashAccumulate,
    /// Min-tracking multi-pointer merge
    MinPointer,
    /// Sweep over the value universe
    MultiwaySweep,
}

impl AlgorithmName {
    /// Every strategy, in canonical comparison order
    pub const ALL: [AlgorithmName; 5] = [
        AlgorithmName::PairwiseSequential,
        AlgorithmName::PairwiseParallel,
        AlgorithmName::HashAccumulate,
        AlgorithmName::MinPointer,
        AlgorithmName::MultiwaySweep,
    ];

    /// Tag used for selection and reporting
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PairwiseSequential => "pairwise-sequential",
            Self::PairwiseParallel => "pairwise-parallel",
            Self::HashAccumulate => "hash-accumulate",
            Self::MinPointer => "min-pointer",
            Self::MultiwaySweep => "multiway-sweep",
        }
    }

    /// Whether the strategy fans out to worker threads
    pub fn is_parallel(&self) -> bool {
        matches!(self, Self::PairwiseParallel)
    }
}

impl fmt::Display for AlgorithmName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmName {
    type Err = UnionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnionError::unsupported_algorithm(s))
    }
}

/// Wall-clock time spent in one named phase of a strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseTiming {
    /// Phase label, e.g. `"parallel"` or `"sorting"`
    pub name: &'static str,
    /// Time spent in the phase
    pub elapsed: Duration,
}

/// Performance statistics for a single union invocation
#[derive(Debug, Clone, Default)]
pub struct UnionStats {
    /// Number of input sets (k)
    pub input_sets: usize,
    /// Total input values across all sets
    pub items_processed: usize,
    /// Number of distinct values produced
    pub output_elements: usize,
    /// Processing time in microseconds
    pub processing_time_us: u64,
    /// Whether worker threads were used
    pub used_parallel: bool,
    /// Sub-phase timings, in execution order
    pub phases: Vec<PhaseTiming>,
}

impl UnionStats {
    /// Summarize a finished invocation
    pub fn collect(sets: &[SortedSet], output: &SortedSet, elapsed: Duration) -> Self {
        Self {
            input_sets: sets.len(),
            items_processed: sorted_set::total_len(sets),
            output_elements: output.len(),
            processing_time_us: elapsed.as_micros() as u64,
            used_parallel: false,
            phases: Vec::new(),
        }
    }

    /// Calculate processing rate in input items per second
    pub fn items_per_second(&self) -> f64 {
        if self.processing_time_us == 0 {
            return 0.0;
        }
        (self.items_processed as f64) / (self.processing_time_us as f64 / 1_000_000.0)
    }

    /// Ratio of distinct output values to input values
    pub fn distinct_ratio(&self) -> f64 {
        if self.items_processed == 0 {
            return 0.0;
        }
        self.output_elements as f64 / self.items_processed as f64
    }

    /// Look up a phase timing by name
    pub fn phase(&self, name: &str) -> Option<Duration> {
        self.phases.iter().find(|p| p.name == name).map(|p| p.elapsed)
    }
}

/// A k-way union strategy
pub trait UnionStrategy: Send + Sync {
    /// Name this strategy is selected by
    fn name(&self) -> AlgorithmName;

    /// Compute the union of `sets`
    fn union(&self, sets: &[SortedSet]) -> Result<SortedSet>;

    /// Compute the union and report statistics for the invocation
    fn execute(&self, sets: &[SortedSet]) -> Result<(SortedSet, UnionStats)> {
        let start = Instant::now();
        let output = self.union(sets)?;
        let stats = UnionStats::collect(sets, &output, start.elapsed());
        Ok((output, stats))
    }

    /// Estimate peak auxiliary memory in bytes for `input_size` total values
    fn estimate_memory(&self, input_size: usize) -> usize;

    /// Check if the strategy runs on worker threads
    fn supports_parallel(&self) -> bool {
        false
    }
}

/// Time a closure and append the result to `phases`
pub(crate) fn timed_phase<T>(
    phases: &mut Vec<PhaseTiming>,
    name: &'static str,
    f: impl FnOnce() -> T,
) -> T {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    log::debug!("{} time: {}ms", name, elapsed.as_millis());
    phases.push(PhaseTiming { name, elapsed });
    value
}
