//! Value universe and input dimensions for a union run.

use super::{Config, parse_env_var};
use crate::algorithms::Value;
use crate::error::{Result, UnionError, check_partitioning};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters shared by the input generator and the union strategies.
///
/// `min_elem` and `max_elem` bound the universe of values. The multiway
/// sweep iterates over every value in that range; the other strategies only
/// use it for reporting. `parallel_chunk_count` must evenly divide the number
/// of input sets handed to the parallel strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionConfig {
    /// Smallest value that may appear in an input set
    pub min_elem: Value,
    /// Largest value that may appear in an input set
    pub max_elem: Value,
    /// Upper bound on draws per set before deduplication
    pub max_set_size: usize,
    /// Number of input sets (k)
    pub num_sets: usize,
    /// Number of contiguous chunks for the parallel divide-and-conquer union
    pub parallel_chunk_count: usize,
}

impl UnionConfig {
    /// Tiny universe, handy for printing every input and output.
    pub fn small() -> Self {
        Self {
            min_elem: 1,
            max_elem: 10,
            max_set_size: 3,
            num_sets: 3,
            parallel_chunk_count: 1,
        }
    }

    /// 2^11 sets of up to 2^11 values drawn from `[1, 2^22]`.
    pub fn medium() -> Self {
        Self {
            min_elem: 1,
            max_elem: 1 << 22,
            max_set_size: 1 << 11,
            num_sets: 1 << 11,
            parallel_chunk_count: 1 << 3,
        }
    }

    /// Replace the value universe.
    pub fn with_range(mut self, min_elem: Value, max_elem: Value) -> Self {
        self.min_elem = min_elem;
        self.max_elem = max_elem;
        self
    }

    /// Replace the number of sets and per-set draw count.
    pub fn with_sets(mut self, num_sets: usize, max_set_size: usize) -> Self {
        self.num_sets = num_sets;
        self.max_set_size = max_set_size;
        self
    }

    /// Replace the parallel chunk count.
    pub fn with_chunk_count(mut self, parallel_chunk_count: usize) -> Self {
        self.parallel_chunk_count = parallel_chunk_count;
        self
    }

    /// Number of distinct values in `[min_elem, max_elem]`.
    pub fn universe_size(&self) -> u64 {
        if self.max_elem < self.min_elem {
            return 0;
        }
        (i64::from(self.max_elem) - i64::from(self.min_elem)) as u64 + 1
    }
}

impl Default for UnionConfig {
    fn default() -> Self {
        Self::medium()
    }
}

impl Config for UnionConfig {
    fn validate(&self) -> Result<()> {
        if self.min_elem > self.max_elem {
            return Err(UnionError::configuration(format!(
                "min_elem ({}) must not exceed max_elem ({})",
                self.min_elem, self.max_elem
            )));
        }
        if self.max_set_size == 0 {
            return Err(UnionError::configuration("max_set_size must be greater than 0"));
        }
        if self.num_sets == 0 {
            return Err(UnionError::configuration("num_sets must be greater than 0"));
        }
        if self.parallel_chunk_count == 0 {
            return Err(UnionError::configuration(
                "parallel_chunk_count must be greater than 0",
            ));
        }
        check_partitioning(self.num_sets, self.parallel_chunk_count)
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.min_elem = parse_env_var(&format!("{}MIN_ELEM", prefix), config.min_elem);
        config.max_elem = parse_env_var(&format!("{}MAX_ELEM", prefix), config.max_elem);
        config.max_set_size = parse_env_var(&format!("{}MAX_SET_SIZE", prefix), config.max_set_size);
        config.num_sets = parse_env_var(&format!("{}NUM_SETS", prefix), config.num_sets);
        config.parallel_chunk_count = parse_env_var(
            &format!("{}PARALLEL_CHUNK_COUNT", prefix),
            config.parallel_chunk_count,
        );
        config.validate()?;
        Ok(config)
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            UnionError::configuration(format!("Failed to serialize union config: {}", e))
        })?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            UnionError::configuration(format!("Failed to parse union config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
