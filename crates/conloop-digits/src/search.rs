//! Transposition descent toward the nearest larger permutation.
//!
//! Starting from the input (the *control* value), the search probes every
//! pair of digit slots and moves to the first transposition it accepts:
//!
//! ```text
//! candidate > control && (candidate < current || current == control)
//! ```
//!
//! The first accepted step leaves the control value for anything larger;
//! every later step must undercut the current number while staying above
//! the control. The sequence of accepted numbers therefore strictly
//! decreases and is bounded below, so the descent terminates. It stops at
//! the first number from which no transposition is accepted.
//!
//! # Scan Order
//!
//! Pairs are probed with the more significant slot in the outer loop and
//! the less significant slot in the inner loop, both ascending from the
//! least significant end:
//!
//! ```text
//! (1,0) (2,0) (2,1) (3,0) (3,1) (3,2) ...
//! ```
//!
//! Several transpositions can tie or overshoot, so this order decides which
//! path the descent takes. With it the result is always the smallest
//! permutation above the input.

use tracing::{debug, trace};

use crate::number::transpose;
use crate::{DigitNumber, Error, Result};

/// Smallest integer greater than `number` with the same decimal digits, or
/// `number` itself when its digits are already in descending order.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `number` is zero.
/// - [`Error::Overflow`] if the answer does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use conloop_digits::nearest_larger;
///
/// assert_eq!(nearest_larger(12345), Ok(12354));
/// assert_eq!(nearest_larger(90822), Ok(92028));
/// assert_eq!(nearest_larger(321), Ok(321));
/// ```
pub fn nearest_larger(number: u64) -> Result<u64> {
    DigitNumber::new(number)?.nearest_larger()
}

impl DigitNumber {
    /// Smallest larger permutation of these digits, see [`nearest_larger`].
    pub fn nearest_larger(self) -> Result<u64> {
        let number = self.value();
        let found = descend(number as u128, self.len());

        debug!(number, found = %found, "nearest larger permutation");
        u64::try_from(found).map_err(|_| Error::Overflow { number })
    }
}

#[inline]
fn accepts(candidate: u128, current: u128, control: u128) -> bool {
    candidate > control && (candidate < current || current == control)
}

fn descend(control: u128, len: usize) -> u128 {
    let mut current = control;
    let mut steps = 0usize;

    'search: loop {
        for high in 1..len {
            for low in 0..high {
                let candidate = transpose(current, low, high);
                if accepts(candidate, current, control) {
                    steps += 1;
                    trace!(step = steps, low, high, from = %current, to = %candidate, "accepted transposition");
                    current = candidate;
                    continue 'search;
                }
            }
        }
        return current;
    }
}
