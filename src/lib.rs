//! # kway-union: K-way Union of Sorted Integer Sets
//!
//! This crate computes the union of many sorted, duplicate-free integer sets and
//! provides several interchangeable strategies for doing so, so they can be
//! checked against each other and timed on identical input.
//!
//! ## Strategies
//!
//! - **pairwise-sequential**: divide-and-conquer reduction over pairwise merges
//! - **pairwise-parallel**: the same reduction over equal chunks on a thread pool
//! - **hash-accumulate**: hash-set accumulation followed by a sort
//! - **min-pointer**: one cursor per set, repeatedly emitting the global minimum
//! - **multiway-sweep**: sweep over every value of a known universe
//!
//! ## Quick Start
//!
//! ```rust
//! use kway_union::{SortedSet, UnionConfig, UnionEngine};
//!
//! let sets = vec![
//!     SortedSet::from_sorted(vec![1, 3, 5]),
//!     SortedSet::from_sorted(vec![2, 3, 6]),
//!     SortedSet::from_sorted(vec![3, 4]),
//! ];
//!
//! let engine = UnionEngine::new(UnionConfig::small()).unwrap();
//! let result = engine.run("min-pointer", &sets).unwrap();
//! assert_eq!(result.set.as_slice(), &[1, 2, 3, 4, 5, 6]);
//!
//! // Every strategy must agree with the first one
//! let report = engine.compare_all(&sets);
//! assert!(report.all_agree());
//! ```

#![warn(missing_docs)]

pub mod algorithms;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;

// Re-export core types
pub use algorithms::{
    AlgorithmName, DivideConquerUnion, HashAccumulateUnion, MinPointerUnion, MultiwaySweepUnion,
    ParallelDivideConquerUnion, PhaseTiming, SortedSet, UnionStats, UnionStrategy, Value, merge,
};
pub use config::{Config, UnionConfig};
pub use engine::{ComparisonEntry, ComparisonReport, UnionEngine, UnionResult, Verdict};
pub use error::{Result, UnionError};
pub use generator::SetGenerator;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only logs the version)
pub fn init() {
    log::debug!("Initializing kway-union v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_info() {
        // Version should be semver format like "0.1.0"
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }
}
