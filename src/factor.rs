//! Counting prime factors with multiplicity (the big omega function Ω(n)) over a bounded range.
//!
//! The counter repeatedly strips the smallest prime factor. Smallest factors are looked up
//! from a table derived from the prime set, so one count costs O(log n).

use bitvec::prelude::{BitSlice, Lsb0};
use num_traits::ToPrimitive;

use crate::buffer::PrimeSet;
use crate::error::{Error, Result};
use crate::traits::PrimeTable;

/// Counts prime factors of integers in `[0, bound]`.
#[derive(Debug, Clone)]
pub struct FactorCounter {
    bound: u64,
    /// lpf[n] is the smallest prime in the set dividing n, 0 for n < 2
    lpf: Vec<u64>,
}

impl FactorCounter {
    /// Build the least prime factor table for `[0, bound]`. Primes are visited in ascending
    /// order and a slot is only written once, so the smallest prime always wins.
    pub fn new(primes: &PrimeSet, bound: u64) -> Result<Self> {
        let max = Self::max_bound();
        let size = match bound.checked_add(1).and_then(|s| s.to_usize()) {
            Some(size) if bound <= max => size,
            _ => return Err(Error::bound_too_large(bound, max)),
        };
        let mut lpf = Vec::new();
        lpf.try_reserve_exact(size)
            .map_err(|_| Error::bound_too_large(bound, max))?;
        lpf.resize(size, 0u64);
        for &p in primes.iter() {
            for multi in (p..=bound).step_by(p as usize) {
                let slot = &mut lpf[multi as usize];
                if *slot == 0 {
                    *slot = p;
                }
            }
        }
        Ok(FactorCounter { bound, lpf })
    }

    /// The largest bound whose sieve and factor table can be addressed on this platform.
    /// Both the odd-only sieve bits and the `u64` table slots have to stay within their
    /// allocation limits.
    pub fn max_bound() -> u64 {
        let table = (isize::MAX as u64 / std::mem::size_of::<u64>() as u64).saturating_sub(1);
        let sieve = (BitSlice::<usize, Lsb0>::MAX_BITS as u64)
            .saturating_mul(2)
            .saturating_add(1);
        table.min(sieve)
    }

    #[inline]
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// The smallest prime factor of n, None for 0 and 1.
    pub fn smallest_factor(&self, n: u64) -> Result<Option<u64>> {
        match self.lpf.get(self.index(n)?) {
            Some(&0) => Ok(None),
            Some(&p) => Ok(Some(p)),
            None => Err(Error::out_of_range(n, self.bound)),
        }
    }

    /// Return the number of prime factors of n counted with multiplicity.
    ///
    /// 0 and 1 have no prime factors, a prime has one. Otherwise the smallest prime factor
    /// p is divided out and the count continues on n / p. Integers above the bound are
    /// rejected since their factors are not covered by the table.
    pub fn count_factors(&self, n: u64) -> Result<u32> {
        Ok(self.count_in_table(self.index(n)?))
    }

    /// Factor counts of every integer in `[0, bound]`, in ascending order of the integer.
    pub fn counts(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.lpf.len()).map(move |n| self.count_in_table(n))
    }

    /// n must be a valid index into the table
    fn count_in_table(&self, n: usize) -> u32 {
        let mut residual = n as u64;
        let mut count = 0;
        loop {
            let p = match self.lpf[residual as usize] {
                0 => return count, // residual is 0 or 1
                p if p == residual => return count + 1,
                p => p,
            };
            residual /= p;
            count += 1;
        }
    }

    fn index(&self, n: u64) -> Result<usize> {
        if n > self.bound {
            return Err(Error::out_of_range(n, self.bound));
        }
        n.to_usize().ok_or_else(|| Error::out_of_range(n, self.bound))
    }
}
