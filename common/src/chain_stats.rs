//! Statistics on how long chains are before they settle.
//!
//! Below ten million no chain needs more than a dozen or so squigit
//! applications to reach 1 or 89. This uses the same trick as the squigits
//! method: precompute the remaining steps for every possible squigit, then
//! each starting number costs one squigit and one lookup.

use crate::ChainLengthCount;
use crate::squigit::{chain_steps, squigit};
use crate::squigit_table::squigit_bound_for_range;
use itertools::Itertools;
use log::debug;

/// Bin every starting number in [1, `upper_bound`) by the number of squigit
/// applications its chain takes to reach 1 or 89, sorted by steps.
#[must_use]
pub fn get_chain_length_distribution(upper_bound: u32) -> Vec<ChainLengthCount> {
    // steps still needed once a chain is holding this value
    let bound = squigit_bound_for_range(upper_bound);
    let remaining: Vec<u32> = (0..=bound)
        .map(|value| match value {
            0 | 1 | 89 => 0,
            _ => chain_steps(value).1,
        })
        .collect();

    let mut distribution: Vec<ChainLengthCount> = (1..upper_bound)
        .map(|start| 1 + remaining[squigit(start) as usize])
        .counts()
        .into_iter()
        .map(|(steps, count)| ChainLengthCount {
            steps,
            count: count as u64,
        })
        .collect();
    distribution.sort_by_key(|d| d.steps);

    debug!(
        "Chain lengths below {upper_bound}: longest is {:?} steps",
        longest_chain(&distribution)
    );

    distribution
}

/// The largest number of steps any chain in the distribution took.
#[must_use]
pub fn longest_chain(distribution: &[ChainLengthCount]) -> Option<u32> {
    distribution.iter().map(|d| d.steps).max()
}
