//! Conloop Digits
//!
//! Finds the nearest larger integer made of the same decimal digits.
//!
//! # Digit Model
//!
//! A number is never split into a string. Each digit is addressed by its
//! power-of-ten offset (position 0 is the ones digit) and read or written
//! with integer division and modulo over an exact table of powers of ten.
//! Swapping two slots is a single transposition: every other digit,
//! including any between the pair, stays where it is.
//!
//! # Search
//!
//! The nearest larger permutation is found by a greedy descent over
//! pairwise transpositions rather than the usual scan from the right. See
//! the `search` module docs for the acceptance rule and scan order.
//!
//! ```rust
//! use conloop_digits::{nearest_larger, DigitNumber};
//!
//! assert_eq!(nearest_larger(123450), Ok(123504));
//!
//! let n = DigitNumber::new(321321).unwrap();
//! assert_eq!(n.nearest_larger(), Ok(322113));
//! ```

mod error;
mod number;
mod search;

pub use error::{Error, Result};
pub use number::{transpose, DigitNumber};
pub use search::nearest_larger;
