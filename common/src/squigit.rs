//! The squigit function and helpers for following a chain to its end.
//!
//! "Squigit" is shorthand for the sum of the squared decimal digits of a
//! number. For example the squigit of 89 is 145 and the squigit of 20 is 4.

use crate::ChainEnd;

/// Calculate the sum of the squares of the decimal digits of a number.
#[must_use]
pub fn squigit(num: u32) -> u32 {
    // 🔥🔥🔥 HOT LOOP 🔥🔥🔥
    let mut n = num;
    let mut sum = 0;
    while n != 0 {
        let digit = n % 10;
        sum += digit * digit;
        n /= 10;
    }
    sum
}

/// Count the decimal digits in a number (minimum 1 for zero).
#[must_use]
pub fn digit_count(num: u32) -> u32 {
    num.checked_ilog10().map_or(1, |log| log + 1)
}

/// Follow the chain from `start` and report which fixed point it lands on.
///
/// # Panics
/// Panics if `start` is zero, since zero is its own fixed point.
#[must_use]
pub fn chain_end(start: u32) -> ChainEnd {
    chain_steps(start).0
}

/// Follow the chain from `start`, returning the fixed point it lands on and
/// the number of squigit applications it took to get there.
///
/// The squigit is always applied at least once, so starting at 1 or 89
/// walks that fixed point's own cycle.
///
/// # Panics
/// Panics if `start` is zero, since zero is its own fixed point.
#[must_use]
pub fn chain_steps(start: u32) -> (ChainEnd, u32) {
    assert!(start != 0, "the chain from zero never leaves zero");

    let mut current = start;
    let mut steps = 0;
    loop {
        current = squigit(current);
        steps += 1;
        match current {
            1 => return (ChainEnd::One, steps),
            89 => return (ChainEnd::EightyNine, steps),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squigit() {
        assert_eq!(squigit(0), 0);
        assert_eq!(squigit(1), 1);
        assert_eq!(squigit(7), 49);
        assert_eq!(squigit(20), 4);
        assert_eq!(squigit(44), 32);
        assert_eq!(squigit(85), 89);
        assert_eq!(squigit(89), 145);
        assert_eq!(squigit(145), 42);
        assert_eq!(squigit(1000), 1);
        assert_eq!(squigit(9_999_999), crate::MAX_SQUIGIT);
    }

    #[test]
    fn test_squigit_ignores_digit_order() {
        assert_eq!(squigit(57), squigit(705));
        assert_eq!(squigit(705), squigit(7005));
        assert_eq!(squigit(7005), squigit(5007));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(567), 3);
        assert_eq!(digit_count(9_999_999), 7);
        assert_eq!(digit_count(10_000_000), 8);
        assert_eq!(digit_count(u32::MAX), 10);
    }

    #[test]
    fn test_chain_end() {
        // 44 → 32 → 13 → 10 → 1
        assert_eq!(chain_steps(44), (ChainEnd::One, 4));
        // 85 → 89
        assert_eq!(chain_steps(85), (ChainEnd::EightyNine, 1));
        // 145 → 42 → 20 → 4 → 16 → 37 → 58 → 89
        assert_eq!(chain_steps(145), (ChainEnd::EightyNine, 7));
        assert_eq!(chain_end(7), ChainEnd::One);
        assert_eq!(chain_end(2), ChainEnd::EightyNine);
    }

    #[test]
    fn test_chain_from_fixed_points() {
        assert_eq!(chain_steps(1), (ChainEnd::One, 1));
        // 89 → 145 → 42 → 20 → 4 → 16 → 37 → 58 → 89
        assert_eq!(chain_steps(89), (ChainEnd::EightyNine, 8));
    }

    #[test]
    #[should_panic(expected = "never leaves zero")]
    fn test_chain_from_zero() {
        let _ = chain_end(0);
    }
}
