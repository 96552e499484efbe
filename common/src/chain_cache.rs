//! A lazily populated cache of where squigit values lead.
//!
//! Unlike the precomputed [`SquigitTable`](crate::squigit_table::SquigitTable),
//! this cache starts empty and learns as chains are followed: every
//! intermediate squigit seen on the way to a known value is recorded on the
//! same side, so later chains passing through it stop immediately.

use crate::ChainEnd;
use crate::squigit::squigit;
use log::debug;

/// Two-sided membership cache indexed by squigit value.
#[derive(Debug, Clone)]
pub struct ChainCache {
    reaches_one: Vec<bool>,
    reaches_89: Vec<bool>,
    /// Scratch list of values visited by the chain currently being followed.
    chain: Vec<u32>,
}

impl ChainCache {
    /// Create an empty cache that can hold every value in [0, bound].
    #[must_use]
    pub fn new(bound: u32) -> Self {
        debug!("Created chain cache over [0, {bound}]");
        Self {
            reaches_one: vec![false; bound as usize + 1],
            reaches_89: vec![false; bound as usize + 1],
            chain: Vec::new(),
        }
    }

    /// Look up a value that has already been resolved, either because it was
    /// cached or because it is one of the fixed points.
    ///
    /// The cache is consulted before the literal comparison: a value can
    /// already be known without being 1 or 89 itself.
    #[must_use]
    pub fn get(&self, value: u32) -> Option<ChainEnd> {
        let index = value as usize;
        if self.reaches_89[index] {
            Some(ChainEnd::EightyNine)
        } else if self.reaches_one[index] {
            Some(ChainEnd::One)
        } else {
            match value {
                1 => Some(ChainEnd::One),
                89 => Some(ChainEnd::EightyNine),
                _ => None,
            }
        }
    }

    /// Follow the chain from `start` until it hits a resolved value, then
    /// record every intermediate squigit on the matching side.
    ///
    /// `start` itself is never cached, so it may be larger than the bound.
    ///
    /// # Panics
    /// Panics if the chain visits a value larger than the cache's bound.
    pub fn classify(&mut self, start: u32) -> ChainEnd {
        self.chain.clear();

        let mut current = start;
        let end = loop {
            let val = squigit(current);
            if let Some(end) = self.get(val) {
                break end;
            }
            self.chain.push(val);
            current = val;
        };

        let side = match end {
            ChainEnd::One => &mut self.reaches_one,
            ChainEnd::EightyNine => &mut self.reaches_89,
        };
        for &val in &self.chain {
            side[val as usize] = true;
        }

        end
    }

    /// How many values have been learned so far, as (reaches 1, reaches 89).
    #[must_use]
    pub fn learned(&self) -> (usize, usize) {
        let count = |side: &[bool]| side.iter().filter(|&&marked| marked).count();
        (count(&self.reaches_one), count(&self.reaches_89))
    }
}
