//! A module to generate some basic offline benchmarking ranges.

use crate::TEN_MILLION;
use clap::ValueEnum;
use std::fmt;

/// Different benchmark sizes. All are powers of ten so every strategy can run them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum BenchmarkMode {
    /// A quick sanity check: 1e3.
    Tiny,
    /// A small range that runs in a blink even for brute force: 1e5.
    Small,
    /// The puzzle as posed: every number below ten million.
    Default,
    /// A large range where brute force starts to hurt: 1e8.
    Large,
    /// The largest power of ten that fits our starting numbers: 1e9.
    Massive,
}

/// Get the exclusive upper bound for a benchmark.
#[must_use]
pub fn get_benchmark_upper_bound(mode: BenchmarkMode) -> u32 {
    match mode {
        BenchmarkMode::Tiny => 1_000,
        BenchmarkMode::Small => 100_000,
        BenchmarkMode::Default => TEN_MILLION,
        BenchmarkMode::Large => 100_000_000,
        BenchmarkMode::Massive => 1_000_000_000,
    }
}

impl fmt::Display for BenchmarkMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
