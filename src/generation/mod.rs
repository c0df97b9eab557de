//! Lazy meta-collections over a finite input sequence.
//!
//! This module provides the three classical meta-collections:
//!
//! - [`Permutations`]: every ordering of the input
//! - [`Combinations`]: every unordered subset of size `K`
//! - [`Variations`]: every ordered subset of size `K`
//!
//! Each collection is built once, computes its exact [`MetaCollection::count`]
//! up front, and hands out any number of independent enumerators. Results
//! are produced on demand, one per call, so collections whose size exceeds
//! what could ever be materialized can still be walked or sampled from the
//! front.
//!
//! # Generation Modes
//!
//! [`GenerateOption`] selects whether repeated results are produced:
//!
//! | Collection     | `WithoutRepetition`        | `WithRepetition`         |
//! |----------------|----------------------------|--------------------------|
//! | `Permutations` | `N! / Π(run!)`             | `N!`                     |
//! | `Combinations` | `C(N, K)`                  | `C(N + K - 1, K)`        |
//! | `Variations`   | `N! / (N - K)!`            | `N^K`                    |
//!
//! # Enumeration Protocol
//!
//! Enumerators implement [`Iterator`] and additionally expose the explicit
//! cursor protocol [`MetaEnumerator`] (`move_next`, `current`, `reset`).
//!
//! # Examples
//!
//! ```rust
//! use lexicomb::generation::{Combinations, MetaCollection, Permutations, Variations};
//! use lexicomb::GenerateOption;
//!
//! let permutations = Permutations::new(vec!['a', 'a', 'b']).unwrap();
//! let all: Vec<Vec<char>> = permutations.iter().collect();
//! assert_eq!(all, vec![vec!['a', 'a', 'b'], vec!['a', 'b', 'a'], vec!['b', 'a', 'a']]);
//!
//! let combinations = Combinations::new(vec![1, 2, 3, 4], 2).unwrap();
//! assert_eq!(combinations.count().to_string(), "6");
//!
//! let variations = Variations::with_option(vec![0, 1], 3, GenerateOption::WithRepetition).unwrap();
//! assert_eq!(variations.iter().count(), 8);
//! ```

mod combinations;
mod extension;
mod permutations;
mod variations;

pub use combinations::{CombinationIter, Combinations};
pub use extension::CombinatoricsExt;
pub use permutations::{PermutationIter, Permutations};
pub use variations::{VariationIter, Variations};

use std::fmt;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::Result;

/// Selects whether a meta-collection produces repeated results.
///
/// # Examples
///
/// ```rust
/// use lexicomb::GenerateOption;
///
/// assert_eq!(GenerateOption::default(), GenerateOption::WithoutRepetition);
/// assert_eq!(GenerateOption::WithRepetition.to_string(), "with repetition");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerateOption {
    /// Values that compare equal are interchangeable (permutations), and
    /// each input position is used at most once (combinations, variations).
    #[default]
    WithoutRepetition,
    /// Every position is distinct (permutations), and each input position
    /// may be used any number of times (combinations, variations).
    WithRepetition,
}

impl GenerateOption {
    /// Maps a `with_repetition` flag onto the matching option.
    #[inline]
    pub const fn from_repetition(with_repetition: bool) -> Self {
        if with_repetition {
            Self::WithRepetition
        } else {
            Self::WithoutRepetition
        }
    }

    /// Returns `true` for [`GenerateOption::WithRepetition`].
    #[inline]
    pub const fn allows_repetition(self) -> bool {
        matches!(self, Self::WithRepetition)
    }
}

impl fmt::Display for GenerateOption {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WithoutRepetition => formatter.write_str("without repetition"),
            Self::WithRepetition => formatter.write_str("with repetition"),
        }
    }
}

/// Read-only metadata shared by every meta-collection.
pub trait MetaCollection {
    /// The exact number of results a full enumeration produces.
    fn count(&self) -> &BigUint;

    /// The number of values in the input sequence (`N`).
    fn upper_index(&self) -> usize;

    /// The number of values in each result (`K`).
    fn lower_index(&self) -> usize;

    /// The generation mode fixed at construction.
    fn generate_option(&self) -> GenerateOption;
}

/// Explicit cursor protocol for enumerators.
///
/// This mirrors what [`Iterator::next`] does in one step: `move_next`
/// advances, `current` reads the result the cursor rests on.
///
/// # Examples
///
/// ```rust
/// use lexicomb::generation::{MetaEnumerator, Permutations};
///
/// let permutations = Permutations::new(vec![1, 2]).unwrap();
/// let mut enumerator = permutations.iter();
///
/// assert!(enumerator.current().is_err());
/// assert!(enumerator.move_next());
/// assert_eq!(enumerator.current().unwrap(), vec![1, 2]);
/// assert!(enumerator.move_next());
/// assert_eq!(enumerator.current().unwrap(), vec![2, 1]);
/// assert!(!enumerator.move_next());
/// assert!(enumerator.current().is_err());
/// assert!(enumerator.reset().is_err());
/// ```
pub trait MetaEnumerator {
    /// The type of each result.
    type Output;

    /// Advances to the next result. Returns `false` once the enumerator is
    /// exhausted; further calls keep returning `false`.
    fn move_next(&mut self) -> bool;

    /// Returns the result the enumerator is positioned on.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::InvalidOperation`](crate::CombinatoricsError::InvalidOperation)
    /// before the first successful `move_next` and after exhaustion.
    fn current(&self) -> Result<Self::Output>;

    /// Restarting an enumerator in place is not supported; request a new one
    /// from the collection instead.
    ///
    /// # Errors
    ///
    /// Always returns [`CombinatoricsError::UnsupportedOperation`](crate::CombinatoricsError::UnsupportedOperation).
    fn reset(&mut self) -> Result<()> {
        Err(crate::error::CombinatoricsError::reset_unsupported())
    }
}

/// Where an enumerator stands relative to its result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    BeforeFirst,
    InSet,
    AfterLast,
}

/// Tracks how many results an enumerator has produced, for `size_hint`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Progress {
    total: Option<u64>,
    produced: u64,
}

impl Progress {
    pub(crate) fn new(count: &BigUint) -> Self {
        Self {
            total: count.to_u64(),
            produced: 0,
        }
    }

    #[inline]
    pub(crate) const fn record(&mut self) {
        self.produced = self.produced.saturating_add(1);
    }

    pub(crate) fn size_hint(&self, position: Position) -> (usize, Option<usize>) {
        if position == Position::AfterLast {
            return (0, Some(0));
        }
        match self.total {
            Some(total) => {
                let remaining = total.saturating_sub(self.produced);
                usize::try_from(remaining).map_or((usize::MAX, None), |remaining| {
                    (remaining, Some(remaining))
                })
            }
            None => (usize::MAX, None),
        }
    }
}
