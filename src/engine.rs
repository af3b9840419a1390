//! Strategy dispatch and cross-strategy comparison
//!
//! [`UnionEngine`] maps an [`AlgorithmName`] to its strategy, runs it against a
//! read-only slice of input sets and times the call. [`UnionEngine::compare`]
//! runs several strategies over identical input: the first successful output
//! becomes the reference, and every later output must equal it element for
//! element. A disagreement is recorded and logged, and the remaining
//! strategies still run.

use crate::algorithms::{
    AlgorithmName, DivideConquerUnion, HashAccumulateUnion, MinPointerUnion, MultiwaySweepUnion,
    ParallelDivideConquerUnion, SortedSet, UnionStats, UnionStrategy,
};
use crate::config::{Config, UnionConfig};
use crate::error::{Result, UnionError};
use std::time::{Duration, Instant};

/// Output of one strategy invocation
#[derive(Debug, Clone)]
pub struct UnionResult {
    /// Strategy that produced the output
    pub algorithm: AlgorithmName,
    /// The union
    pub set: SortedSet,
    /// Wall-clock duration of the invocation
    pub elapsed: Duration,
    /// Statistics reported by the strategy
    pub stats: UnionStats,
}

/// Outcome of one strategy within a comparison run
#[derive(Debug)]
pub enum Verdict {
    /// First successful output; later outputs are checked against it
    Reference,
    /// Output equals the reference
    Match,
    /// Output differs from the reference
    Mismatch(UnionError),
    /// The strategy failed before producing output
    Failed(UnionError),
}

impl Verdict {
    /// Whether this entry agrees with the reference
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Reference | Self::Match)
    }
}

/// One row of a comparison run
#[derive(Debug)]
pub struct ComparisonEntry {
    /// Strategy that ran
    pub algorithm: AlgorithmName,
    /// Wall-clock duration, zero if the strategy failed
    pub elapsed: Duration,
    /// Number of values produced, zero if the strategy failed
    pub output_len: usize,
    /// Agreement with the reference
    pub verdict: Verdict,
}

/// Result of running several strategies over the same input
#[derive(Debug, Default)]
pub struct ComparisonReport {
    /// Entries in execution order
    pub entries: Vec<ComparisonEntry>,
    reference: Option<UnionResult>,
}

impl ComparisonReport {
    /// The reference result, if any strategy succeeded
    pub fn reference(&self) -> Option<&UnionResult> {
        self.reference.as_ref()
    }

    /// Entries whose output differs from the reference
    pub fn mismatches(&self) -> impl Iterator<Item = &ComparisonEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.verdict, Verdict::Mismatch(_)))
    }

    /// Entries that failed before producing output
    pub fn failures(&self) -> impl Iterator<Item = &ComparisonEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.verdict, Verdict::Failed(_)))
    }

    /// True if every strategy succeeded and agreed with the reference
    pub fn all_agree(&self) -> bool {
        self.entries.iter().all(|e| e.verdict.is_ok())
    }

    /// Turn the first mismatch or failure into an error
    pub fn ensure_consistent(self) -> Result<()> {
        for entry in self.entries {
            match entry.verdict {
                Verdict::Mismatch(err) | Verdict::Failed(err) => return Err(err),
                Verdict::Reference | Verdict::Match => {}
            }
        }
        Ok(())
    }
}

/// Dispatches union requests to strategies built from a [`UnionConfig`]
#[derive(Debug, Clone)]
pub struct UnionEngine {
    config: UnionConfig,
}

impl UnionEngine {
    /// Create an engine after validating `config`
    pub fn new(config: UnionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration the strategies are built from
    pub fn config(&self) -> &UnionConfig {
        &self.config
    }

    /// Build the strategy registered under `name`
    pub fn strategy(&self, name: AlgorithmName) -> Result<Box<dyn UnionStrategy>> {
        let strategy: Box<dyn UnionStrategy> = match name {
            AlgorithmName::PairwiseSequential => Box::new(DivideConquerUnion::new()),
            AlgorithmName::PairwiseParallel => {
                Box::new(ParallelDivideConquerUnion::new(self.config.parallel_chunk_count))
            }
            AlgorithmName::HashAccumulate => Box::new(HashAccumulateUnion::new()),
            AlgorithmName::MinPointer => Box::new(MinPointerUnion::new()),
            AlgorithmName::MultiwaySweep => Box::new(MultiwaySweepUnion::from_config(&self.config)?),
        };
        Ok(strategy)
    }

    /// Run the strategy selected by its exact name
    ///
    /// Unknown names fail with `UnsupportedAlgorithm` before any work.
    pub fn run(&self, name: &str, sets: &[SortedSet]) -> Result<UnionResult> {
        let algorithm: AlgorithmName = name.parse()?;
        self.run_algorithm(algorithm, sets)
    }

    /// Run one strategy and time it
    pub fn run_algorithm(&self, algorithm: AlgorithmName, sets: &[SortedSet]) -> Result<UnionResult> {
        let strategy = self.strategy(algorithm)?;

        let start = Instant::now();
        let (set, stats) = strategy.execute(sets)?;
        let elapsed = start.elapsed();

        log::debug!(
            "{}: {} sets, {} values -> {} distinct in {}ms",
            algorithm,
            stats.input_sets,
            stats.items_processed,
            set.len(),
            elapsed.as_millis()
        );

        Ok(UnionResult {
            algorithm,
            set,
            elapsed,
            stats,
        })
    }

    /// Run every named strategy against the same input and check agreement
    ///
    /// All names are resolved first, so an unknown name fails the call before
    /// any strategy runs. Per-strategy failures and mismatches are recorded in
    /// the report rather than returned.
    pub fn compare<S: AsRef<str>>(&self, names: &[S], sets: &[SortedSet]) -> Result<ComparisonReport> {
        let algorithms = names
            .iter()
            .map(|n| n.as_ref().parse::<AlgorithmName>())
            .collect::<Result<Vec<_>>>()?;
        Ok(self.compare_algorithms(&algorithms, sets))
    }

    /// Run every strategy in canonical order and check agreement
    pub fn compare_all(&self, sets: &[SortedSet]) -> ComparisonReport {
        self.compare_algorithms(&AlgorithmName::ALL, sets)
    }

    fn compare_algorithms(&self, algorithms: &[AlgorithmName], sets: &[SortedSet]) -> ComparisonReport {
        let mut report = ComparisonReport::default();

        for &algorithm in algorithms {
            let result = match self.run_algorithm(algorithm, sets) {
                Ok(result) => result,
                Err(err) => {
                    log::warn!("{} failed: {}", algorithm, err);
                    report.entries.push(ComparisonEntry {
                        algorithm,
                        elapsed: Duration::ZERO,
                        output_len: 0,
                        verdict: Verdict::Failed(err),
                    });
                    continue;
                }
            };

            let verdict = match &report.reference {
                None => {
                    log::info!("{}: reference output size {}", algorithm, result.set.len());
                    Verdict::Reference
                }
                Some(reference) if reference.set == result.set => {
                    log::info!("{}: output is correct", algorithm);
                    Verdict::Match
                }
                Some(reference) => {
                    let err = mismatch(reference, &result);
                    log::warn!("{}", err);
                    Verdict::Mismatch(err)
                }
            };

            report.entries.push(ComparisonEntry {
                algorithm,
                elapsed: result.elapsed,
                output_len: result.set.len(),
                verdict,
            });
            if report.reference.is_none() {
                report.reference = Some(result);
            }
        }

        report
    }
}

fn mismatch(reference: &UnionResult, actual: &UnionResult) -> UnionError {
    let expected = reference.set.as_slice();
    let got = actual.set.as_slice();
    let first_difference = expected
        .iter()
        .zip(got)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| expected.len().min(got.len()));

    UnionError::result_mismatch(
        actual.algorithm.as_str(),
        reference.algorithm.as_str(),
        expected.len(),
        got.len(),
        first_difference,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Value;

    fn sets(data: &[&[Value]]) -> Vec<SortedSet> {
        data.iter().map(|s| SortedSet::from_sorted(s.to_vec())).collect()
    }

    fn engine() -> UnionEngine {
        UnionEngine::new(UnionConfig::small()).unwrap()
    }

    #[test]
    fn test_run_every_algorithm() {
        let input = sets(&[&[1, 3, 5], &[2, 3, 6], &[3, 4]]);
        let engine = engine();

        for name in AlgorithmName::ALL {
            let result = engine.run(name.as_str(), &input).unwrap();
            assert_eq!(result.algorithm, name);
            assert_eq!(result.set.as_slice(), &[1, 2, 3, 4, 5, 6], "{}", name);
            assert_eq!(result.stats.output_elements, 6);
        }
    }

    #[test]
    fn test_run_unsupported_algorithm() {
        let input = sets(&[&[1]]);
        match engine().run("bogus", &input) {
            Err(UnionError::UnsupportedAlgorithm { name }) => assert_eq!(name, "bogus"),
            other => panic!("expected UnsupportedAlgorithm, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let bad = UnionConfig::small().with_sets(10, 3).with_chunk_count(3);
        assert!(matches!(
            UnionEngine::new(bad),
            Err(UnionError::InvalidPartitioning { .. })
        ));
    }

    #[test]
    fn test_parallel_checks_actual_set_count() {
        let engine = UnionEngine::new(UnionConfig::small().with_chunk_count(3)).unwrap();
        let input: Vec<SortedSet> = (0..10).map(|i| SortedSet::from_sorted(vec![i])).collect();

        assert!(matches!(
            engine.run_algorithm(AlgorithmName::PairwiseParallel, &input),
            Err(UnionError::InvalidPartitioning {
                num_sets: 10,
                chunk_count: 3
            })
        ));
    }

    #[test]
    fn test_compare_all_agree() {
        let input = sets(&[&[1, 2], &[3, 4], &[5, 6]]);
        let report = engine().compare_all(&input);

        assert_eq!(report.entries.len(), 5);
        assert!(report.all_agree());
        assert!(matches!(report.entries[0].verdict, Verdict::Reference));
        assert_eq!(
            report.reference().map(|r| r.algorithm),
            Some(AlgorithmName::PairwiseSequential)
        );
        assert_eq!(report.mismatches().count(), 0);
        assert!(report.ensure_consistent().is_ok());
    }

    #[test]
    fn test_compare_reports_mismatch_and_continues() {
        // 20 lies outside the sweep universe [1, 10], so the sweep drops it
        let input = sets(&[&[1, 3], &[2, 20]]);
        let report = engine()
            .compare(&["pairwise-sequential", "multiway-sweep", "min-pointer"], &input)
            .unwrap();

        assert_eq!(report.entries.len(), 3);
        assert!(!report.all_agree());
        assert!(matches!(report.entries[2].verdict, Verdict::Match));

        let mismatches: Vec<_> = report.mismatches().collect();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].algorithm, AlgorithmName::MultiwaySweep);
        match &mismatches[0].verdict {
            Verdict::Mismatch(UnionError::ResultMismatch {
                expected_len,
                actual_len,
                first_difference,
                ..
            }) => {
                assert_eq!(*expected_len, 4);
                assert_eq!(*actual_len, 3);
                assert_eq!(*first_difference, 3);
            }
            other => panic!("unexpected verdict: {:?}", other),
        }

        assert!(matches!(
            report.ensure_consistent(),
            Err(UnionError::ResultMismatch { .. })
        ));
    }

    #[test]
    fn test_compare_records_failure_and_continues() {
        let engine = UnionEngine::new(UnionConfig::small().with_chunk_count(3)).unwrap();
        let input: Vec<SortedSet> = (0..10).map(|i| SortedSet::from_sorted(vec![i])).collect();
        let report = engine
            .compare(&["pairwise-parallel", "hash-accumulate", "min-pointer"], &input)
            .unwrap();

        assert_eq!(report.failures().count(), 1);
        // The first successful strategy becomes the reference
        assert!(matches!(report.entries[1].verdict, Verdict::Reference));
        assert!(matches!(report.entries[2].verdict, Verdict::Match));
        assert_eq!(
            report.reference().map(|r| r.algorithm),
            Some(AlgorithmName::HashAccumulate)
        );
    }

    #[test]
    fn test_compare_rejects_unknown_name_before_running() {
        let input = sets(&[&[1]]);
        let result = engine().compare(&["min-pointer", "bogus"], &input);
        assert!(matches!(result, Err(UnionError::UnsupportedAlgorithm { .. })));
    }
}
