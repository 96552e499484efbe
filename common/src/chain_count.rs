//! The four strategies for counting chains that arrive at 89.
//!
//! Every strategy answers the same question: how many starting numbers in
//! [1, `upper_bound`) have a chain that arrives at 89? They trade simplicity
//! for speed:
//!  1. Brute force follows every chain to the end. Slow, but obviously
//!     correct, so it serves as the oracle for the others.
//!  2. Brute force with a cache remembers where each intermediate squigit
//!     leads, so later chains can stop as soon as they touch a known value.
//!  3. The squigits method notices that the first squigit already lands in a
//!     small bounded range (at most 567 below ten million). It classifies
//!     that whole range up front and then needs a single squigit per number.
//!  4. The digits method notices that the squigit only depends on which
//!     digits a number has, not their order. It walks the 11440 multisets of
//!     seven digits instead of ten million numbers and multiplies each hit
//!     by the number of ways to arrange it.
//!
//! Strategies 1-3 accept any upper bound. The digits method enumerates
//! fixed-width digit strings, so it needs the bound to be a power of ten.

use crate::chain_cache::ChainCache;
use crate::combinations::{DigitCombinations, MAX_DIGIT, count_combinations};
use crate::permutations::multiset_permutations;
use crate::squigit::{chain_end, squigit};
use crate::squigit_table::{SquigitTable, squigit_bound, squigit_bound_for_range};
use crate::{ChainEnd, Strategy};
use anyhow::{Context, Result, ensure};
use log::{debug, trace};

impl Strategy {
    /// Count the starting numbers below `upper_bound` whose chain arrives at 89.
    ///
    /// # Errors
    /// Returns an error if this strategy cannot handle the upper bound.
    pub fn count(self, upper_bound: u32) -> Result<u64> {
        debug!("Counting chains below {upper_bound} with {self}");
        match self {
            Strategy::BruteForce => Ok(count_brute_force(upper_bound)),
            Strategy::BruteForceCached => Ok(count_brute_force_cached(upper_bound)),
            Strategy::Squigits => Ok(count_squigits(upper_bound)),
            Strategy::Digits => count_digits(upper_bound),
        }
    }
}

/// Follow every chain to its end with no caching at all.
#[must_use]
pub fn count_brute_force(upper_bound: u32) -> u64 {
    (1..upper_bound)
        .filter(|&start| chain_end(start) == ChainEnd::EightyNine)
        .count() as u64
}

/// Follow every chain, caching the destination of each intermediate squigit
/// as it is discovered.
#[must_use]
pub fn count_brute_force_cached(upper_bound: u32) -> u64 {
    let mut cache = ChainCache::new(squigit_bound_for_range(upper_bound));

    let count = (1..upper_bound)
        .filter(|&start| cache.classify(start) == ChainEnd::EightyNine)
        .count() as u64;

    let (learned_one, learned_89) = cache.learned();
    trace!("Cache learned {learned_one} values reaching 1 and {learned_89} reaching 89");

    count
}

/// Precompute the destination of every possible squigit, then classify each
/// number with one squigit and one lookup.
#[must_use]
pub fn count_squigits(upper_bound: u32) -> u64 {
    let table = SquigitTable::new(squigit_bound_for_range(upper_bound));
    (1..upper_bound)
        .filter(|&start| table.reaches_89(squigit(start)))
        .count() as u64
}

/// Count digit combinations instead of numbers.
///
/// # Errors
/// Returns an error if `upper_bound` is not 10^d for some d >= 1, or if an
/// arrangement count overflows.
pub fn count_digits(upper_bound: u32) -> Result<u64> {
    let digits = power_of_ten_exponent(upper_bound).with_context(|| {
        format!("digits method needs a power of ten upper bound, got {upper_bound}")
    })?;
    ensure!(
        digits >= 1,
        "digits method needs an upper bound of at least 10, got {upper_bound}"
    );

    let table = SquigitTable::new(squigit_bound(digits));
    trace!(
        "Walking {} combinations of {digits} digits",
        count_combinations(u64::from(digits), u64::from(MAX_DIGIT) + 1)
    );

    let mut count = 0;
    for combination in DigitCombinations::new(digits as usize) {
        let squigit_val: u32 = combination
            .iter()
            .map(|&digit| u32::from(digit) * u32::from(digit))
            .sum();

        // the all-zero combination is the number 0, which is not a starting number
        if squigit_val != 0 && table.reaches_89(squigit_val) {
            count += multiset_permutations(&combination)?;
        }
    }

    Ok(count)
}

/// The exponent `d` if `num` is exactly 10^d.
fn power_of_ten_exponent(num: u32) -> Option<u32> {
    let exponent = num.checked_ilog10()?;
    (10u32.pow(exponent) == num).then_some(exponent)
}
