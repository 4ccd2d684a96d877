//! Factor count sequences over `[0, bound]` and the subsequences derived from them.

use std::cell::RefCell;
use std::fmt;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

use lru::LruCache;
use tracing::debug;

use crate::buffer::{PrimeSet, Sieve};
use crate::error::{Error, Result};
use crate::factor::FactorCounter;
use crate::reach::{PrimeReacher, Reach};
use crate::traits::{PrimeSource, SequenceConfig};

/// Two values that are adjacent in a filtered subsequence, in the order they were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntPair(pub u64, pub u64);

impl From<(u64, u64)> for IntPair {
    fn from((a, b): (u64, u64)) -> Self {
        IntPair(a, b)
    }
}

impl fmt::Display for IntPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Prime factor statistics of all integers from 0 to an upper bound.
///
/// The prime table is fetched once on construction and never changes afterwards,
/// every query returns a fresh value.
pub struct PrimeFactorSequence {
    bound: u64,
    primes: PrimeSet,
    counter: FactorCounter,
    // filtered subsequences keyed by factor count
    filtered: Option<RefCell<LruCache<u32, Vec<u64>>>>,
}

impl PrimeFactorSequence {
    /// Create an instance for `[0, upper_bound]` with primes from the bundled sieve.
    pub fn new(upper_bound: u64) -> Result<Self> {
        Self::with_config(upper_bound, SequenceConfig::default())
    }

    pub fn with_config(upper_bound: u64, config: SequenceConfig) -> Result<Self> {
        Self::with_source(upper_bound, &Sieve, config)
    }

    /// Create an instance taking its primes from a custom source. The source output is
    /// checked to be strictly ascending and bounded.
    pub fn with_source<S: PrimeSource + ?Sized>(
        upper_bound: u64,
        source: &S,
        config: SequenceConfig,
    ) -> Result<Self> {
        if upper_bound == 0 {
            return Err(Error::InvalidBound);
        }
        // checked before sieving, the source would allocate for the whole range
        let max = FactorCounter::max_bound();
        if upper_bound > max {
            return Err(Error::bound_too_large(upper_bound, max));
        }
        let primes = PrimeSet::from_source(source, upper_bound)?;
        let counter = FactorCounter::new(&primes, upper_bound)?;
        let filtered =
            NonZeroUsize::new(config.filter_cache).map(|cap| RefCell::new(LruCache::new(cap)));

        debug!(upper_bound, primes = primes.len(), ?config, "sequence created");
        Ok(PrimeFactorSequence {
            bound: upper_bound,
            primes,
            counter,
            filtered,
        })
    }

    #[inline]
    pub fn bound(&self) -> u64 {
        self.bound
    }

    pub fn primes(&self) -> &PrimeSet {
        &self.primes
    }

    /// The integers covered by this instance, 0 to bound inclusive
    pub fn numbers(&self) -> RangeInclusive<u64> {
        0..=self.bound
    }

    /// Number of prime factors of n counted with multiplicity, n must not exceed the bound.
    pub fn count_factors(&self, n: u64) -> Result<u32> {
        self.counter.count_factors(n)
    }

    /// Sequence L of length bound + 1 where L[i] is the number of prime factors of i,
    /// including repeated factors.
    pub fn factor_count_sequence(&self) -> Vec<u32> {
        self.counter.counts().collect()
    }

    /// Ascending list of the integers in `[0, bound]` with exactly m prime factors,
    /// including repeated factors.
    pub fn numbers_with_exact_factor_count(&self, m: u32) -> Vec<u64> {
        let cache = match &self.filtered {
            Some(cache) => cache,
            None => return self.filter_counts(m),
        };

        if let Some(hit) = cache.borrow_mut().get(&m) {
            return hit.clone();
        }
        debug!(m, "filter cache miss");
        let result = self.filter_counts(m);
        cache.borrow_mut().put(m, result.clone());
        result
    }

    fn filter_counts(&self, m: u32) -> Vec<u64> {
        self.numbers()
            .zip(self.counter.counts())
            .filter(|&(_, count)| count == m)
            .map(|(i, _)| i)
            .collect()
    }

    /// Pairs (a, b) of neighbours in [numbers_with_exact_factor_count(m)] with b - a <= gap.
    ///
    /// Only directly consecutive entries are paired, an entry is never skipped even if a
    /// later one is still within the gap.
    ///
    /// [numbers_with_exact_factor_count(m)]: PrimeFactorSequence::numbers_with_exact_factor_count
    pub fn close_adjacent_pairs(&self, m: u32, gap: u64) -> Vec<IntPair> {
        self.numbers_with_exact_factor_count(m)
            .windows(2)
            .filter(|w| w[1] - w[0] <= gap)
            .map(|w| IntPair(w[0], w[1]))
            .collect()
    }

    /// A walker to primes sharing the prime table of this instance
    pub fn reacher(&self) -> PrimeReacher<'_, PrimeSet> {
        PrimeReacher::new(&self.primes)
    }

    /// See [PrimeReacher::path_to]
    pub fn path_to(&self, n: u64) -> Reach {
        self.reacher().path_to(n)
    }

    /// See [PrimeReacher::change_to_prime]
    pub fn change_to_prime(&self, n: u64) -> String {
        self.reacher().change_to_prime(n)
    }
}

impl fmt::Debug for PrimeFactorSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimeFactorSequence")
            .field("bound", &self.bound)
            .field("primes", &self.primes.len())
            .field("cached", &self.filtered.as_ref().map(|c| c.borrow().len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::PrimeTable;
    use rand::random;

    #[test]
    fn construction_test() {
        assert_eq!(PrimeFactorSequence::new(0).unwrap_err(), Error::InvalidBound);

        let seq = PrimeFactorSequence::new(1).unwrap();
        assert_eq!(seq.factor_count_sequence(), [0, 0]);
        assert!(seq.primes().is_empty());

        for huge in [u64::MAX, 1 << 62, FactorCounter::max_bound() + 1] {
            assert!(matches!(
                PrimeFactorSequence::new(huge),
                Err(Error::BoundTooLarge { bound, .. }) if bound == huge
            ));
        }
        let sourced = |_: u64| -> Vec<u64> { panic!("no sieving for an oversized bound") };
        assert!(PrimeFactorSequence::with_source(u64::MAX, &sourced, SequenceConfig::default()).is_err());

        let bad = |_: u64| -> Vec<u64> { vec![3, 2] };
        assert!(matches!(
            PrimeFactorSequence::with_source(10, &bad, SequenceConfig::default()),
            Err(Error::InvalidPrimeTable(_))
        ));
    }

    #[test]
    fn example_bound_20_test() {
        let seq = PrimeFactorSequence::new(20).unwrap();
        let counts = seq.factor_count_sequence();
        assert_eq!(counts.len(), 21);
        assert_eq!(counts[12], 3);

        let two = seq.numbers_with_exact_factor_count(2);
        assert_eq!(two, [4, 6, 9, 10, 14, 15]);

        let pairs = seq.close_adjacent_pairs(2, 2);
        assert!(pairs.contains(&IntPair(4, 6)));
        assert!(!pairs.contains(&IntPair(6, 9)));
        assert_eq!(pairs, [IntPair(4, 6), IntPair(9, 10), IntPair(14, 15)]);
    }

    #[test]
    fn sequence_test() {
        let seq = PrimeFactorSequence::new(100).unwrap();
        let counts = seq.factor_count_sequence();
        assert_eq!(counts.len(), 101);
        for (i, &c) in counts.iter().enumerate() {
            assert_eq!(c == 0, i <= 1);
            assert_eq!(seq.count_factors(i as u64), Ok(c));
        }
        for &p in seq.primes().iter() {
            assert_eq!(counts[p as usize], 1);
        }
        assert_eq!(seq.count_factors(101), Err(Error::OutOfRange { value: 101, bound: 100 }));
    }

    #[test]
    fn exact_count_test() {
        let seq = PrimeFactorSequence::new(200).unwrap();
        let counts = seq.factor_count_sequence();
        for m in 0..9 {
            let numbers = seq.numbers_with_exact_factor_count(m);
            assert!(numbers.windows(2).all(|w| w[0] < w[1]));
            for i in seq.numbers() {
                assert_eq!(numbers.contains(&i), counts[i as usize] == m, "{} with m={}", i, m);
            }
        }

        // 3-almost primes below 30 (OEIS A014612)
        let three = seq.numbers_with_exact_factor_count(3);
        assert_eq!(three[..6], [8, 12, 18, 20, 27, 28]);

        assert_eq!(seq.numbers_with_exact_factor_count(0), [0, 1]);
        assert!(seq.numbers_with_exact_factor_count(20).is_empty());
    }

    #[test]
    fn close_pairs_test() {
        let seq = PrimeFactorSequence::new(500).unwrap();
        let counts = seq.factor_count_sequence();
        for m in 1..5 {
            for gap in [0, 1, 2, 5, 10] {
                let pairs = seq.close_adjacent_pairs(m, gap);
                assert!(pairs.iter().all(|p| p.1 - p.0 <= gap));

                // pair every a having m factors with the next integer b having m factors
                let mut expected = Vec::new();
                for a in 0..counts.len() {
                    if counts[a] != m {
                        continue;
                    }
                    for b in a + 1..counts.len() {
                        if counts[b] == m {
                            if (b - a) as u64 <= gap {
                                expected.push(IntPair::from((a as u64, b as u64)));
                            }
                            break;
                        }
                    }
                }
                assert_eq!(pairs, expected, "m={} gap={}", m, gap);
            }
        }

        // twin primes
        let twins = seq.close_adjacent_pairs(1, 2);
        assert_eq!(twins[..4], [IntPair(2, 3), IntPair(3, 5), IntPair(5, 7), IntPair(11, 13)]);

        // gap 0 never pairs distinct values
        assert!(seq.close_adjacent_pairs(2, 0).is_empty());

        // fewer than two matches
        assert!(seq.close_adjacent_pairs(8, 100).is_empty()); // only 256 and 384
        assert_eq!(seq.close_adjacent_pairs(8, 128), [IntPair(256, 384)]);
        assert!(seq.close_adjacent_pairs(20, 100).is_empty());
    }

    #[test]
    fn adjacent_only_test() {
        // 4, 6, 9: 9 - 4 = 5 is within the gap but 4 and 9 are not neighbours
        let seq = PrimeFactorSequence::new(20).unwrap();
        let pairs = seq.close_adjacent_pairs(2, 5);
        assert!(!pairs.contains(&IntPair(4, 9)));
        assert_eq!(pairs[..2], [IntPair(4, 6), IntPair(6, 9)]);
    }

    #[test]
    fn cache_consistency_test() {
        let cached = PrimeFactorSequence::with_config(1000, SequenceConfig { filter_cache: 2 }).unwrap();
        let uncached = PrimeFactorSequence::with_config(1000, SequenceConfig::uncached()).unwrap();
        for _ in 0..50 {
            let m = random::<u32>() % 10;
            let gap = random::<u64>() % 20;
            assert_eq!(
                cached.numbers_with_exact_factor_count(m),
                uncached.numbers_with_exact_factor_count(m)
            );
            assert_eq!(cached.close_adjacent_pairs(m, gap), uncached.close_adjacent_pairs(m, gap));
        }

        // mutating a returned value does not leak into the cache
        let mut first = cached.numbers_with_exact_factor_count(1);
        first.clear();
        assert_eq!(cached.numbers_with_exact_factor_count(1).len(), 168);
    }

    #[test]
    fn idempotence_test() {
        let seq = PrimeFactorSequence::new(300).unwrap();
        assert_eq!(seq.factor_count_sequence(), seq.factor_count_sequence());
        assert_eq!(seq.numbers_with_exact_factor_count(2), seq.numbers_with_exact_factor_count(2));
        assert_eq!(seq.close_adjacent_pairs(3, 4), seq.close_adjacent_pairs(3, 4));
        for n in 0..=300 {
            assert_eq!(seq.change_to_prime(n), seq.change_to_prime(n));
        }
    }

    #[test]
    fn reach_test() {
        let seq = PrimeFactorSequence::new(50).unwrap();
        assert_eq!(seq.change_to_prime(13), "");
        assert_eq!(seq.change_to_prime(8), "0");
        assert_eq!(seq.path_to(13), Reach::Prime);

        let seq = PrimeFactorSequence::new(10).unwrap();
        assert_eq!(seq.change_to_prime(9), "-");
        assert!(!seq.path_to(9).is_reachable());
    }

    #[test]
    fn pair_display_test() {
        assert_eq!(IntPair(4, 6).to_string(), "(4, 6)");
    }
}
