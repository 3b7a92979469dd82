//! Positional digit model.
//!
//! Digits are addressed by their power-of-ten offset: position 0 is the
//! least significant digit. All arithmetic uses an exact table of powers of
//! ten, so no floating point ever touches a digit.

use std::fmt;

use crate::{Error, Result};

/// Maximum number of decimal digits in a `u64` (`u64::MAX` has 20).
pub(crate) const MAX_DIGITS: usize = 20;

/// Exact powers of ten, `POW10[k] == 10^k`.
pub(crate) const POW10: [u128; MAX_DIGITS] = powers_of_ten();

const fn powers_of_ten() -> [u128; MAX_DIGITS] {
    let mut table = [1u128; MAX_DIGITS];
    let mut k = 1;
    while k < MAX_DIGITS {
        table[k] = table[k - 1] * 10;
        k += 1;
    }
    table
}

/// Digit at `position` of `number`.
#[inline]
pub(crate) const fn digit_at(number: u128, position: usize) -> u8 {
    ((number / POW10[position]) % 10) as u8
}

/// Exchange the digits at positions `low` and `high`, leaving every other
/// position untouched.
///
/// # Panics
///
/// Panics if either position is 20 or more.
pub const fn transpose(number: u128, low: usize, high: usize) -> u128 {
    let a = digit_at(number, low) as u128;
    let b = digit_at(number, high) as u128;
    number + b * POW10[low] + a * POW10[high] - a * POW10[low] - b * POW10[high]
}

/// A strictly positive integer viewed as a sequence of decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u64", into = "u64"))]
pub struct DigitNumber(u64);

impl DigitNumber {
    /// Validate a positive number.
    pub const fn new(value: u64) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidArgument(0));
        }
        Ok(Self(value))
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Number of decimal digits.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.ilog10() as usize + 1
    }

    /// Always false: a positive number has at least one digit.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Digit at `position`, counted from the least significant end.
    ///
    /// Positions past the most significant digit read as 0.
    pub fn digit(&self, position: usize) -> u8 {
        if position >= MAX_DIGITS {
            return 0;
        }
        digit_at(self.0 as u128, position)
    }

    /// Digits, least significant first.
    pub fn digits(&self) -> Vec<u8> {
        (0..self.len()).map(|p| self.digit(p)).collect()
    }

    /// How many times each digit 0-9 occurs.
    pub fn digit_counts(&self) -> [u8; 10] {
        let mut counts = [0u8; 10];
        for position in 0..self.len() {
            counts[self.digit(position) as usize] += 1;
        }
        counts
    }

    /// Whether both numbers use exactly the same multiset of digits.
    pub fn is_permutation_of(&self, other: &Self) -> bool {
        self.digit_counts() == other.digit_counts()
    }
}

impl TryFrom<u64> for DigitNumber {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<i64> for DigitNumber {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u64::try_from(value)
            .map_err(|_| Error::InvalidArgument(value as i128))
            .and_then(Self::new)
    }
}

impl From<DigitNumber> for u64 {
    fn from(value: DigitNumber) -> Self {
        value.0
    }
}

impl fmt::Display for DigitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
