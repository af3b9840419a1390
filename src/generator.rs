//! Random input generation
//!
//! Builds each input set from `max_set_size` uniform draws over
//! `[min_elem, max_elem]`, sorted and deduplicated, so a set holds at most
//! `max_set_size` values. Seeded generators are deterministic.

use crate::algorithms::{SortedSet, Value};
use crate::config::{Config, UnionConfig};
use crate::error::Result;
use rand::distributions::Uniform;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generator of independent random sorted sets
#[derive(Debug, Clone)]
pub struct SetGenerator {
    config: UnionConfig,
    rng: StdRng,
    distribution: Uniform<Value>,
}

impl SetGenerator {
    /// Create a deterministic generator
    pub fn new(config: UnionConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from system entropy
    pub fn from_entropy(config: UnionConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    fn with_rng(config: UnionConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let distribution = Uniform::new_inclusive(config.min_elem, config.max_elem);
        Ok(Self {
            config,
            rng,
            distribution,
        })
    }

    /// Configuration the sets are drawn from
    pub fn config(&self) -> &UnionConfig {
        &self.config
    }

    /// Draw a single set
    pub fn generate_set(&mut self) -> SortedSet {
        let draws: Vec<Value> = (&mut self.rng)
            .sample_iter(self.distribution)
            .take(self.config.max_set_size)
            .collect();
        SortedSet::from_unsorted(draws)
    }

    /// Draw `config.num_sets` sets
    pub fn generate(&mut self) -> Vec<SortedSet> {
        log::debug!(
            "building {} sets of up to {} values in [{}, {}]",
            self.config.num_sets,
            self.config.max_set_size,
            self.config.min_elem,
            self.config.max_elem
        );
        (0..self.config.num_sets).map(|_| self.generate_set()).collect()
    }
}
