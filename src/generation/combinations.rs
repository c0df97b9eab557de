//! Unordered subsets ("N choose K").
//!
//! [`Combinations`] does not enumerate anything itself. It builds a marker
//! sequence, hands it to a private [`Permutations`], and maps every marker
//! arrangement back onto the input values:
//!
//! ```text
//! WithoutRepetition, 5 choose 3:   markers [E E E A A]        (N markers)
//!   E = emit the value under the cursor, then advance
//!   A = advance without emitting
//!
//! WithRepetition, 5 choose 3:      markers [E E E A A A A]    (N - 1 + K markers)
//!   E = emit the value under the cursor, stay
//!   A = advance without emitting
//! ```
//!
//! Emit markers sort before advance markers, so the first result is always
//! the first `K` values (or the first value `K` times).

use std::iter::FusedIterator;

use num_bigint::BigUint;

use super::{GenerateOption, MetaCollection, MetaEnumerator, PermutationIter, Permutations};
use crate::error::{CombinatoricsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Marker {
    Emit,
    Advance,
}

/// All size-`K` subsets of a sequence.
///
/// Values are taken by position in the order given: duplicate values in the
/// input are distinct positions, so `[a, a]` choose 1 yields `[a]` twice.
///
/// # Examples
///
/// ```rust
/// use lexicomb::generation::{Combinations, MetaCollection};
/// use lexicomb::GenerateOption;
///
/// let combinations = Combinations::new(vec!['A', 'B', 'C'], 2).unwrap();
/// let all: Vec<Vec<char>> = combinations.iter().collect();
/// assert_eq!(all, vec![vec!['A', 'B'], vec!['A', 'C'], vec!['B', 'C']]);
///
/// let multisets = Combinations::with_option(vec!['A', 'B', 'C'], 2, GenerateOption::WithRepetition)
///     .unwrap();
/// assert_eq!(multisets.count().to_string(), "6");
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    values: Vec<T>,
    lower_index: usize,
    generate_option: GenerateOption,
    markers: Option<Permutations<Marker>>,
    count: BigUint,
}

impl<T> Combinations<T> {
    /// Creates the subsets of size `lower_index` without repetition.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::InvalidArgument`] when `lower_index`
    /// exceeds the number of values.
    pub fn new(values: impl IntoIterator<Item = T>, lower_index: usize) -> Result<Self> {
        Self::with_option(values, lower_index, GenerateOption::WithoutRepetition)
    }

    /// Creates the subsets of size `lower_index` in the given mode.
    ///
    /// With repetition any `lower_index` is accepted; with no input values
    /// and a positive `lower_index` the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::InvalidArgument`] when `lower_index`
    /// exceeds the number of values in [`GenerateOption::WithoutRepetition`]
    /// mode, or when the marker sequence would be longer than `u32::MAX`.
    pub fn with_option(
        values: impl IntoIterator<Item = T>,
        lower_index: usize,
        generate_option: GenerateOption,
    ) -> Result<Self> {
        let values: Vec<T> = values.into_iter().collect();
        let upper_index = values.len();

        let marker_sequence = match generate_option {
            GenerateOption::WithoutRepetition => {
                if lower_index > upper_index {
                    return Err(CombinatoricsError::invalid_argument(
                        "lower_index",
                        format!("{lower_index} exceeds the {upper_index} available values"),
                    ));
                }
                Some(marker_run(upper_index - lower_index, lower_index))
            }
            GenerateOption::WithRepetition => match upper_index.checked_sub(1) {
                Some(advances) => Some(marker_run(advances, lower_index)),
                None if lower_index == 0 => Some(Vec::new()),
                None => None,
            },
        };

        let markers = marker_sequence.map(Permutations::new).transpose()?;
        let count = markers
            .as_ref()
            .map_or_else(BigUint::default, |markers| markers.count().clone());

        tracing::debug!(
            upper_index,
            lower_index,
            %generate_option,
            %count,
            "built combinations"
        );

        Ok(Self {
            values,
            lower_index,
            generate_option,
            markers,
            count,
        })
    }

    /// Returns a fresh enumerator positioned before the first subset.
    pub fn iter(&self) -> CombinationIter<'_, T> {
        CombinationIter {
            parent: self,
            markers: self.markers.as_ref().map(Permutations::iter),
        }
    }

    /// Returns the input values in the order given.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

fn marker_run(advances: usize, emits: usize) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(advances + emits);
    markers.resize(advances, Marker::Advance);
    markers.resize(advances + emits, Marker::Emit);
    markers
}

impl<T> MetaCollection for Combinations<T> {
    #[inline]
    fn count(&self) -> &BigUint {
        &self.count
    }

    #[inline]
    fn upper_index(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn lower_index(&self) -> usize {
        self.lower_index
    }

    #[inline]
    fn generate_option(&self) -> GenerateOption {
        self.generate_option
    }
}

impl<'a, T: Clone> IntoIterator for &'a Combinations<T> {
    type Item = Vec<T>;
    type IntoIter = CombinationIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An enumerator over the results of a [`Combinations`].
pub struct CombinationIter<'a, T> {
    parent: &'a Combinations<T>,
    /// `None` when the collection is empty.
    markers: Option<PermutationIter<'a, Marker>>,
}

impl<T: Clone> CombinationIter<'_, T> {
    fn project(&self, markers: &[Marker]) -> Vec<T> {
        let advance_on_emit = self.parent.generate_option == GenerateOption::WithoutRepetition;
        let mut subset = Vec::with_capacity(self.parent.lower_index);
        let mut cursor = 0;

        for marker in markers {
            match marker {
                Marker::Emit => {
                    subset.push(self.parent.values[cursor].clone());
                    if advance_on_emit {
                        cursor += 1;
                    }
                }
                Marker::Advance => cursor += 1,
            }
        }

        subset
    }
}

impl<T: Clone> MetaEnumerator for CombinationIter<'_, T> {
    type Output = Vec<T>;

    fn move_next(&mut self) -> bool {
        self.markers
            .as_mut()
            .is_some_and(|markers| markers.move_next())
    }

    fn current(&self) -> Result<Vec<T>> {
        let Some(markers) = &self.markers else {
            return Err(CombinatoricsError::invalid_operation(
                "current",
                "the collection has no results",
            ));
        };
        markers
            .current_slice()
            .map(|arrangement| self.project(arrangement))
    }
}

impl<T: Clone> Iterator for CombinationIter<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current().ok()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.markers
            .as_ref()
            .map_or((0, Some(0)), |markers| markers.size_hint())
    }
}

impl<T: Clone> FusedIterator for CombinationIter<'_, T> {}
