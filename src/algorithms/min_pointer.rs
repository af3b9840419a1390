//! Min-tracking multi-pointer union
//!
//! Keeps one cursor per input set. Each round scans every live cursor for the
//! global minimum, emits it once and advances every cursor past all values
//! `<=` that minimum. A linear scan over `k` cursors per emitted value gives
//! `O(N k)` in the worst case; this is the plain reference the faster
//! strategies are checked against.

use crate::algorithms::sorted_set::{SortedSet, Value};
use crate::algorithms::{AlgorithmName, UnionStrategy};
use crate::error::Result;

/// Position of the next unconsidered value in one set
#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    values: &'a [Value],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(values: &'a [Value]) -> Self {
        Self { values, pos: 0 }
    }

    #[inline]
    fn current(&self) -> Option<Value> {
        self.values.get(self.pos).copied()
    }

    /// Skip every value `<= bound`
    #[inline]
    fn advance_past(&mut self, bound: Value) {
        while self.current().is_some_and(|v| v <= bound) {
            self.pos += 1;
        }
    }
}

/// Union by repeatedly emitting the minimum over all cursors
#[derive(Debug, Clone, Copy, Default)]
pub struct MinPointerUnion;

impl MinPointerUnion {
    /// Create a new instance
    pub fn new() -> Self {
        Self
    }
}

impl UnionStrategy for MinPointerUnion {
    fn name(&self) -> AlgorithmName {
        AlgorithmName::MinPointer
    }

    fn union(&self, sets: &[SortedSet]) -> Result<SortedSet> {
        let mut cursors: Vec<Cursor<'_>> = sets.iter().map(|s| Cursor::new(s)).collect();
        let mut result = SortedSet::new();

        // Terminates once every cursor is exhausted
        while let Some(min) = cursors.iter().filter_map(Cursor::current).min() {
            result.push(min);

            // `<=` rather than `==` also skips any repeat that slipped past the
            // set invariant, so the output stays strictly ascending.
            for cursor in &mut cursors {
                cursor.advance_past(min);
            }
        }

        Ok(result)
    }

    fn estimate_memory(&self, input_size: usize) -> usize {
        input_size * std::mem::size_of::<Value>()
    }
}
