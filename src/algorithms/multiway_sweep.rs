//! Multiway sweep over the value universe
//!
//! Iterates over candidate values rather than set contents: for every `v` in
//! `[min_value, max_value]` each set's cursor is advanced up to `v`, and `v` is
//! emitted as soon as one cursor lands on it. The cost is
//! `O((max_value - min_value) * k)` regardless of how sparse the data is, so it
//! only competes when the universe is small relative to the input.
//!
//! Values outside `[min_value, max_value]` are never emitted.

use crate::algorithms::sorted_set::{SortedSet, Value};
use crate::algorithms::{AlgorithmName, UnionStrategy};
use crate::config::UnionConfig;
use crate::error::{Result, UnionError};

/// Union by sweeping every value of a known, finite universe
#[derive(Debug, Clone, Copy)]
pub struct MultiwaySweepUnion {
    min_value: Value,
    max_value: Value,
}

impl MultiwaySweepUnion {
    /// Create a sweep over `[min_value, max_value]`
    pub fn new(min_value: Value, max_value: Value) -> Result<Self> {
        if min_value > max_value {
            return Err(UnionError::configuration(format!(
                "sweep range is empty: min_value {} > max_value {}",
                min_value, max_value
            )));
        }
        Ok(Self {
            min_value,
            max_value,
        })
    }

    /// Create a sweep over the configured value universe
    pub fn from_config(config: &UnionConfig) -> Result<Self> {
        Self::new(config.min_elem, config.max_elem)
    }

    /// Inclusive bounds of the sweep
    pub fn range(&self) -> (Value, Value) {
        (self.min_value, self.max_value)
    }
}

impl UnionStrategy for MultiwaySweepUnion {
    fn name(&self) -> AlgorithmName {
        AlgorithmName::MultiwaySweep
    }

    fn union(&self, sets: &[SortedSet]) -> Result<SortedSet> {
        let mut cursors = vec![0usize; sets.len()];
        let mut result = SortedSet::new();

        for v in self.min_value..=self.max_value {
            for (set, cursor) in sets.iter().zip(cursors.iter_mut()) {
                while *cursor < set.len() && set[*cursor] < v {
                    *cursor += 1;
                }

                // An exhausted cursor never matches
                if set.get(*cursor) == Some(&v) {
                    result.push(v);
                    break;
                }
            }
        }

        Ok(result)
    }

    fn estimate_memory(&self, input_size: usize) -> usize {
        input_size * std::mem::size_of::<Value>()
    }
}
