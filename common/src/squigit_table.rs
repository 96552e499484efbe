//! A bounded lookup table recording which squigit values reach 1.
//!
//! Any number with `d` decimal digits has a squigit of at most 81·d, so for
//! every number below ten million the squigit lies in [0, 567]. That makes it
//! cheap to classify every possible squigit once and then answer each
//! starting number with one squigit and one lookup.
//!
//! The table has to cover every value a chain can visit, not just the first
//! squigit. For `d >= 3` the interval [0, 81·d] is closed under squigit
//! (anything in it has at most `d` digits), but for one and two digit starts
//! chains wander above 81·d (9 → 81 → 65 → 61 → 37 → 58 → 89 → 145), so the
//! bound never drops below the three digit one, 243.

use crate::SQUARED_NINE;
use crate::squigit::{digit_count, squigit};
use log::debug;

/// The smallest digit count for which [0, 81·d] is closed under squigit.
pub const MIN_CLOSED_DIGITS: u32 = 3;

/// The largest value a chain can visit when it starts from a number with at
/// most `digits` decimal digits.
#[must_use]
pub fn squigit_bound(digits: u32) -> u32 {
    SQUARED_NINE * digits.max(MIN_CLOSED_DIGITS)
}

/// The largest value a chain can visit when it starts anywhere in
/// [1, `upper_bound`).
#[must_use]
pub fn squigit_bound_for_range(upper_bound: u32) -> u32 {
    squigit_bound(digit_count(upper_bound.saturating_sub(1)))
}

/// Precomputed classification of every squigit value in [1, bound].
///
/// Only the values that reach 1 are stored since there are far fewer of
/// them; anything not marked reaches 89.
#[derive(Debug, Clone)]
pub struct SquigitTable {
    bound: u32,
    reaches_one: Vec<bool>,
}

impl SquigitTable {
    /// Classify every value in [1, bound]. Each value is resolved on its own
    /// by iterating squigit until it hits 1 or 89.
    #[must_use]
    pub fn new(bound: u32) -> Self {
        let mut reaches_one = vec![false; bound as usize + 1];
        for value in 1..=bound {
            reaches_one[value as usize] = resolves_to_one(value);
        }

        debug!(
            "Built squigit table over [1, {bound}]: {} values reach 1",
            reaches_one.iter().filter(|&&one| one).count()
        );

        Self { bound, reaches_one }
    }

    /// The largest value this table can classify.
    #[must_use]
    pub fn bound(&self) -> u32 {
        self.bound
    }

    /// Whether the chain through `value` arrives at 1.
    ///
    /// # Panics
    /// Panics if `value` is larger than the table's bound.
    #[must_use]
    pub fn reaches_one(&self, value: u32) -> bool {
        self.reaches_one[value as usize]
    }

    /// Whether the chain through `value` arrives at 89.
    /// Zero is not a squigit of any positive number and is reported as reaching 89.
    ///
    /// # Panics
    /// Panics if `value` is larger than the table's bound.
    #[must_use]
    pub fn reaches_89(&self, value: u32) -> bool {
        !self.reaches_one[value as usize]
    }
}

/// Iterate squigit from `value` (inclusive) until it hits 1 or 89.
fn resolves_to_one(value: u32) -> bool {
    let mut val = value;
    loop {
        match val {
            1 => return true,
            89 => return false,
            _ => val = squigit(val),
        }
    }
}
