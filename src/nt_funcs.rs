//! Standalone functions that build a throwaway [PrimeFactorSequence] for a single query.
//!
//! Each call sieves the primes up to the bound again, so keep an instance around when
//! asking more than one question about the same range.

use crate::buffer::Sieve;
use crate::error::{Error, Result};
use crate::factor::FactorCounter;
use crate::sequence::PrimeFactorSequence;
use crate::traits::{PrimeSource, SequenceConfig};

fn instance(bound: u64) -> Result<PrimeFactorSequence> {
    PrimeFactorSequence::with_config(bound, SequenceConfig::uncached())
}

/// All primes not larger than bound, sorted. Fails if the sieve for the bound is not addressable.
pub fn primes_upto(bound: u64) -> Result<Vec<u64>> {
    let max = FactorCounter::max_bound();
    if bound > max {
        return Err(Error::bound_too_large(bound, max));
    }
    Ok(Sieve.primes(bound))
}

/// This function re-exports [PrimeFactorSequence::count_factors()] with a fresh instance
pub fn factor_count(bound: u64, n: u64) -> Result<u32> {
    instance(bound)?.count_factors(n)
}

/// This function re-exports [PrimeFactorSequence::factor_count_sequence()] with a fresh instance
pub fn factor_count_sequence(bound: u64) -> Result<Vec<u32>> {
    Ok(instance(bound)?.factor_count_sequence())
}

/// This function re-exports [PrimeFactorSequence::change_to_prime()] with a fresh instance
pub fn change_to_prime(bound: u64, n: u64) -> Result<String> {
    Ok(instance(bound)?.change_to_prime(n))
}
