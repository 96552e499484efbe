//! A library with common utilities for counting square-digit chains.
//!
//! A number chain is created by continuously replacing a number with the sum
//! of the squares of its decimal digits (its "squigit"). Every chain started
//! from a positive number eventually gets stuck at either 1 or 89. This crate
//! counts how many starting numbers below some bound arrive at 89, using four
//! strategies of increasing cleverness that must all agree.

pub mod benchmark;
pub mod chain_cache;
pub mod chain_count;
pub mod chain_stats;
pub mod combinations;
pub mod permutations;
pub mod report;
pub mod squigit;
pub mod squigit_table;

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The exclusive upper bound on starting numbers in the puzzle as posed.
pub const TEN_MILLION: u32 = 10_000_000;

/// The square of the largest decimal digit, the most any one digit can add to a squigit.
pub const SQUARED_NINE: u32 = 81;

/// The largest squigit of any number below ten million: 9² × 7.
pub const MAX_SQUIGIT: u32 = SQUARED_NINE * 7;

/// The two fixed points that every chain from a positive number falls into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainEnd {
    One,
    EightyNine,
}

/// Each counting strategy the client can run, in order from slowest to fastest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Follow every chain to the end with no caching.
    BruteForce,
    /// Follow every chain, remembering where intermediate squigits lead.
    BruteForceCached,
    /// Classify every possible squigit up front, then take one squigit per number.
    Squigits,
    /// Count digit combinations instead of numbers and multiply by arrangements.
    Digits,
}

impl Strategy {
    /// All strategies in the fixed order they are run and reported.
    pub const ALL: [Strategy; 4] = [
        Strategy::BruteForce,
        Strategy::BruteForceCached,
        Strategy::Squigits,
        Strategy::Digits,
    ];

    /// The name printed alongside this strategy's results.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute_force_method",
            Strategy::BruteForceCached => "brute_force_method_cached",
            Strategy::Squigits => "squigits_method",
            Strategy::Digits => "digits_method",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One bin of the chain length distribution: how many starting numbers
/// needed exactly `steps` squigit applications to reach 1 or 89.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainLengthCount {
    pub steps: u32,
    pub count: u64,
}
