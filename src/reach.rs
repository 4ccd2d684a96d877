//! Walking from an integer to a prime with two moves: `0` maps n to 2n+1 and `1` maps n to n+1.
//!
//! The walk is a greedy single pass, not a shortest path search. At each value it finishes with
//! the increment move if n+1 is prime, finishes with the doubling move if 2n+1 is prime, and
//! otherwise doubles and continues. The increment move therefore only ever appears as the last
//! move of a path. Primality is decided by the finite prime table, so a walk that climbs above
//! the largest known prime gives up.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{Error, Result};
use crate::traits::PrimeTable;

/// Marker printed for a walk that left the prime table before reaching a prime
pub const UNREACHABLE: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// n -> 2n+1, written as `0`
    Double,
    /// n -> n+1, written as `1`
    Increment,
}

impl Move {
    /// Apply the move on n, None on overflow
    #[inline]
    pub fn apply(self, n: u64) -> Option<u64> {
        match self {
            Move::Double => n.checked_mul(2).and_then(|d| d.checked_add(1)),
            Move::Increment => n.checked_add(1),
        }
    }

    #[inline]
    pub fn digit(self) -> char {
        match self {
            Move::Double => '0',
            Move::Increment => '1',
        }
    }
}

impl TryFrom<char> for Move {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '0' => Ok(Move::Double),
            '1' => Ok(Move::Increment),
            other => Err(Error::InvalidMove(other)),
        }
    }
}

/// A sequence of moves, displayed as a string of binary digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Move>);

impl Path {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    /// Apply all moves in order starting from `start`, None if any step overflows
    pub fn replay(&self, start: u64) -> Option<u64> {
        self.0.iter().try_fold(start, |n, m| m.apply(n))
    }
}

impl From<Vec<Move>> for Path {
    fn from(moves: Vec<Move>) -> Self {
        Path(moves)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|m| write!(f, "{}", m.digit()))
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars().map(Move::try_from).collect::<Result<Vec<_>>>().map(Path)
    }
}

/// Outcome of a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reach {
    /// The start value is already prime, no move is needed
    Prime,
    /// The walk ends on a prime after these moves
    Path(Path),
    /// The walk reached `stuck_at`, which is larger than every prime in the table
    Unreachable { stuck_at: u64 },
}

impl Reach {
    /// Moves of a successful walk, empty for a prime start value
    pub fn path(&self) -> Option<&Path> {
        static EMPTY: Path = Path(Vec::new());
        match self {
            Reach::Prime => Some(&EMPTY),
            Reach::Path(p) => Some(p),
            Reach::Unreachable { .. } => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !matches!(self, Reach::Unreachable { .. })
    }
}

/// Renders the walk in its string form: empty for a prime, the digits of the path,
/// or `-` when the walk failed at any depth.
impl fmt::Display for Reach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reach::Prime => Ok(()),
            Reach::Path(p) => fmt::Display::fmt(p, f),
            Reach::Unreachable { .. } => f.write_str(UNREACHABLE),
        }
    }
}

/// Finds walks to a prime using primality queries against a prime table.
#[derive(Debug, Clone, Copy)]
pub struct PrimeReacher<'a, T: ?Sized> {
    table: &'a T,
}

impl<'a, T: PrimeTable<'a> + ?Sized> PrimeReacher<'a, T> {
    pub fn new(table: &'a T) -> Self {
        PrimeReacher { table }
    }

    fn is_known_prime(&self, n: Option<u64>) -> bool {
        n.map_or(false, |v| self.table.contains(v))
    }

    /// Compute the walk from n to a prime.
    pub fn path_to(&self, n: u64) -> Reach {
        if self.table.contains(n) {
            return Reach::Prime;
        }

        let mut moves = Vec::new();
        let mut current = n;
        loop {
            match self.table.largest() {
                Some(largest) if current <= largest => {}
                _ => {
                    trace!(start = n, stuck_at = current, "walk left the prime table");
                    return Reach::Unreachable { stuck_at: current };
                }
            }

            let doubled = Move::Double.apply(current);
            let increment_prime = self.is_known_prime(Move::Increment.apply(current));
            let double_prime = self.is_known_prime(doubled);

            if !increment_prime && !double_prime {
                trace!(start = n, current, "neither n+1 nor 2n+1 is prime, doubling");
                moves.push(Move::Double);
                current = match doubled {
                    Some(d) => d,
                    None => return Reach::Unreachable { stuck_at: current },
                };
            } else {
                moves.push(if increment_prime {
                    Move::Increment
                } else {
                    Move::Double
                });
                return Reach::Path(Path(moves));
            }
        }
    }

    /// String form of [PrimeReacher::path_to]: `""` if n is prime, `"-"` if no prime could be
    /// reached within the table, otherwise the move digits.
    pub fn change_to_prime(&self, n: u64) -> String {
        self.path_to(n).to_string()
    }
}
