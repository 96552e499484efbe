//! Count the distinct arrangements of a multiset of digits.
//!
//! A combination like [0, 0, 1, 1, 1, 5, 7] stands for every seven digit
//! string that uses exactly those digits. Repeated digits are
//! indistinguishable, so by the rule of product there are
//!
//! ```text
//!     n! / (c_0! · c_1! · ... · c_9!)
//! ```
//!
//! of them, where `c_i` is how often digit `i` repeats. Leading zeros are
//! allowed: "0000057" is still the number 57.
//!
//! The factorials are computed as arbitrary-precision naturals so that large
//! combinations fail loudly on conversion instead of silently overflowing.

use anyhow::{Result, anyhow};
use itertools::Itertools;
use malachite::base::num::arithmetic::traits::Factorial;
use malachite::natural::Natural;

/// The number of distinct strings that are arrangements of `combination`.
/// The digits may be in any order.
///
/// # Errors
/// Returns an error if the count does not fit in a u64.
pub fn multiset_permutations(combination: &[u8]) -> Result<u64> {
    let mut count = Natural::factorial(combination.len() as u64);
    for repeats in combination.iter().counts().into_values() {
        count /= Natural::factorial(repeats as u64);
    }
    u64::try_from(&count).map_err(|_| anyhow!("{count} arrangements do not fit in a u64"))
}
