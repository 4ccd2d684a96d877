//! Traits at the seams of the crate and the configuration of a sequence instance.

/// A generator of prime lists, the external collaborator of [crate::PrimeFactorSequence].
///
/// Implementations must be exact: the returned list is strictly ascending, contains every
/// prime not larger than `upper_bound` and no composite. The factor counts and the reacher
/// paths are only correct if this holds.
pub trait PrimeSource {
    /// Return all primes **not larger than** `upper_bound`, sorted ascending.
    fn primes(&self, upper_bound: u64) -> Vec<u64>;
}

impl<F: Fn(u64) -> Vec<u64>> PrimeSource for F {
    fn primes(&self, upper_bound: u64) -> Vec<u64> {
        self(upper_bound)
    }
}

/// Read-only primality queries over a finite table of primes.
pub trait PrimeTable<'a> {
    type PrimeIter: Iterator<Item = &'a u64>;

    /// Directly return an iterator of the primes in the table, ascending
    fn iter(&'a self) -> Self::PrimeIter;

    /// Test if the number is in the table. Numbers beyond the table are reported as
    /// not prime, so callers have to compare against [PrimeTable::largest] themselves.
    fn contains(&self, num: u64) -> bool;

    /// The largest prime in the table, None if the table is empty
    fn largest(&self) -> Option<u64>;
}

/// Tuning knobs of a [crate::PrimeFactorSequence]. None of them changes observable results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of filtered subsequences (keyed by factor count) kept in an LRU cache.
    /// Zero disables the cache.
    pub filter_cache: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self { filter_cache: 16 }
    }
}

impl SequenceConfig {
    /// A configuration that recomputes every query
    pub fn uncached() -> Self {
        Self { filter_cache: 0 }
    }
}
