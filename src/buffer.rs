//! Prime list generation and the validated prime set used by the other modules.

use bitvec::bitvec;
use tracing::debug;

use crate::error::{Error, Result};
use crate::traits::{PrimeSource, PrimeTable};

/// Odd-only sieve of Eratosthenes, the default [PrimeSource].
#[derive(Debug, Clone, Copy, Default)]
pub struct Sieve;

impl PrimeSource for Sieve {
    fn primes(&self, upper_bound: u64) -> Vec<u64> {
        if upper_bound < 2 {
            return Vec::new();
        }

        // bit i stands for the odd number 2i+3, a set bit marks a composite
        let mut sieve = bitvec![0; ((upper_bound - 1) / 2) as usize];
        for p in (3..=num_integer::sqrt(upper_bound)).step_by(2) {
            if sieve[((p - 3) / 2) as usize] {
                continue;
            }
            for multi in (p * p..=upper_bound).step_by(2 * p as usize) {
                sieve.set(((multi - 3) / 2) as usize, true);
            }
        }

        let mut list = Vec::with_capacity(sieve.count_zeros() + 1);
        list.push(2);
        list.extend(sieve.iter_zeros().map(|x| (x as u64) * 2 + 3));
        list
    }
}

/// Sorted list of all primes up to a bound, queried by binary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeSet {
    list: Vec<u64>,
}

impl PrimeSet {
    /// Fetch the primes up to `upper_bound` from the source and check that the list is
    /// strictly ascending and bounded.
    pub fn from_source<S: PrimeSource + ?Sized>(source: &S, upper_bound: u64) -> Result<Self> {
        let list = source.primes(upper_bound);
        if let Some(w) = list.windows(2).find(|w| w[0] >= w[1]) {
            return Err(Error::InvalidPrimeTable(format!(
                "{} is followed by {}",
                w[0], w[1]
            )));
        }
        if let Some(&last) = list.last() {
            if last > upper_bound {
                return Err(Error::InvalidPrimeTable(format!(
                    "{} exceeds the bound {}",
                    last, upper_bound
                )));
            }
        }
        if let Some(&first) = list.first() {
            if first < 2 {
                return Err(Error::InvalidPrimeTable(format!("{} is not a prime", first)));
            }
        }

        debug!(upper_bound, count = list.len(), "prime table loaded");
        Ok(PrimeSet { list })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.list
    }
}

impl<'a> PrimeTable<'a> for PrimeSet {
    type PrimeIter = std::slice::Iter<'a, u64>;

    fn iter(&'a self) -> Self::PrimeIter {
        self.list.iter()
    }

    fn contains(&self, num: u64) -> bool {
        self.list.binary_search(&num).is_ok()
    }

    fn largest(&self) -> Option<u64> {
        self.list.last().copied()
    }
}
