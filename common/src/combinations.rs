//! Lazy enumeration of digit combinations.
//!
//! Many numbers share the same multiset of digits, like [10, 100, 1000] or
//! [57, 705, 7005, 5007], and therefore the same squigit. Instead of walking
//! every number we walk every multiset of `size` digits exactly once. Each
//! multiset is represented canonically as a non-decreasing digit vector, so
//! there are C(size + 9, 9) of them: 11440 for seven digits.
//!
//! The iterator works like an odometer whose wheels may never be lower than
//! the wheel to their left. To advance, find the rightmost wheel that can
//! still turn, turn it, and reset every wheel to its right to the same digit.

/// The largest decimal digit.
pub const MAX_DIGIT: u8 = 9;

/// An iterator over every non-decreasing vector of `size` digits in [0, `max_digit`].
///
/// Combinations are yielded in lexicographic order starting from all zeros.
#[derive(Debug, Clone)]
pub struct DigitCombinations {
    current: Vec<u8>,
    max_digit: u8,
    exhausted: bool,
}

impl DigitCombinations {
    /// Enumerate every multiset of `size` decimal digits.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_max_digit(size, MAX_DIGIT)
    }

    /// Enumerate every multiset of `size` digits drawn from [0, `max_digit`].
    #[must_use]
    pub fn with_max_digit(size: usize, max_digit: u8) -> Self {
        Self {
            current: vec![0; size],
            max_digit,
            exhausted: false,
        }
    }
}

impl Iterator for DigitCombinations {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let combination = self.current.clone();

        match self.current.iter().rposition(|&digit| digit < self.max_digit) {
            Some(wheel) => {
                let next_digit = self.current[wheel] + 1;
                for digit in &mut self.current[wheel..] {
                    *digit = next_digit;
                }
            }
            None => self.exhausted = true,
        }

        Some(combination)
    }
}

/// The number of multisets of `size` elements drawn from `alphabet` symbols,
/// C(size + alphabet - 1, size), by stars and bars.
#[must_use]
pub fn count_combinations(size: u64, alphabet: u64) -> u64 {
    if alphabet == 0 {
        return u64::from(size == 0);
    }
    let n = size + alphabet - 1;
    let k = size.min(alphabet - 1);
    // each partial product is itself a binomial coefficient, so the division is exact
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use std::collections::HashSet;

    #[test]
    fn test_count_combinations() {
        assert_eq!(count_combinations(7, 10), 11440);
        assert_eq!(count_combinations(1, 10), 10);
        assert_eq!(count_combinations(2, 10), 55);
        assert_eq!(count_combinations(0, 10), 1);
        assert_eq!(count_combinations(3, 1), 1);
        assert_eq!(count_combinations(0, 0), 1);
        assert_eq!(count_combinations(2, 0), 0);
    }

    #[test]
    fn test_seven_digit_combinations() {
        let combinations: Vec<Vec<u8>> = DigitCombinations::new(7).collect();
        assert_eq!(combinations.len(), 11440);

        // no multiset shows up twice
        let unique: HashSet<&Vec<u8>> = combinations.iter().collect();
        assert_eq!(unique.len(), combinations.len());

        // every combination is canonical
        for combination in &combinations {
            assert_eq!(combination.len(), 7);
            assert!(combination.is_sorted());
            assert!(combination.iter().all(|&d| d <= MAX_DIGIT));
        }

        assert_eq!(combinations.first(), Some(&vec![0; 7]));
        assert_eq!(combinations.last(), Some(&vec![9; 7]));
    }

    #[test]
    fn test_matches_itertools() {
        for size in 1..=5 {
            let ours: Vec<Vec<u8>> = DigitCombinations::new(size).collect();
            let reference: Vec<Vec<u8>> = (0..=MAX_DIGIT).combinations_with_replacement(size).collect();
            assert_eq!(ours, reference, "size {size}");
        }
    }

    #[test]
    fn test_every_digit_multiset_is_present() {
        // every number below 10^4, zero-padded, sorts into one of our combinations
        let combinations: HashSet<Vec<u8>> = DigitCombinations::new(4).collect();
        for num in 0..10_000u32 {
            let mut digits: Vec<u8> = format!("{num:04}").bytes().map(|b| b - b'0').collect();
            digits.sort_unstable();
            assert!(combinations.contains(&digits), "missing {digits:?}");
        }
    }

    #[test]
    fn test_small_alphabet() {
        let combinations: Vec<Vec<u8>> = DigitCombinations::with_max_digit(2, 2).collect();
        assert_eq!(
            combinations,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 1],
                vec![1, 2],
                vec![2, 2],
            ]
        );
    }

    #[test]
    fn test_counts_agree() {
        for size in 0..=8 {
            assert_eq!(
                DigitCombinations::new(size).count() as u64,
                count_combinations(size as u64, u64::from(MAX_DIGIT) + 1)
            );
        }
    }
}
