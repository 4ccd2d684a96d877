//! Prime factor counts over a bounded range of integers.
//!
//! A [PrimeFactorSequence] covers the integers `0..=bound`. It computes how many prime factors
//! (with multiplicity) each integer has, filters the integers by that count, pairs close
//! neighbours among them, and walks integers to primes with the `0` (n -> 2n+1) and
//! `1` (n -> n+1) moves.
//!
//! ```
//! use prime_directive::{IntPair, PrimeFactorSequence};
//!
//! let seq = PrimeFactorSequence::new(20).unwrap();
//! assert_eq!(seq.factor_count_sequence()[12], 3);
//! assert_eq!(seq.numbers_with_exact_factor_count(2), [4, 6, 9, 10, 14, 15]);
//! assert_eq!(seq.close_adjacent_pairs(2, 1), [IntPair(9, 10), IntPair(14, 15)]);
//! assert_eq!(seq.change_to_prime(8), "0");
//! ```

mod buffer;
mod error;
mod factor;
mod reach;
mod sequence;
mod traits;

pub mod nt_funcs;

pub use buffer::{PrimeSet, Sieve};
pub use error::{Error, Result};
pub use factor::FactorCounter;
pub use reach::{Move, Path, PrimeReacher, Reach, UNREACHABLE};
pub use sequence::{IntPair, PrimeFactorSequence};
pub use traits::{PrimeSource, PrimeTable, SequenceConfig};
