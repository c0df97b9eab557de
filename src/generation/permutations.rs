//! Lexicographic permutations of a finite sequence.
//!
//! This module provides [`Permutations`], the engine every other
//! meta-collection in this crate delegates to.
//!
//! # Overview
//!
//! At construction the input is copied and a parallel array of
//! lexicographic codes is derived from it:
//!
//! ```text
//! WithoutRepetition (sorted):  values [A A B C D E E]   codes [1 1 2 3 4 5 5]
//! WithRepetition   (as given): values [A A B C D E E]   codes [0 1 2 3 4 5 6]
//! ```
//!
//! Enumeration only ever compares codes. Equal values share a code, so
//! swapping them never yields a new arrangement and each distinct
//! permutation is produced exactly once. With distinct codes, all `N!`
//! orderings of positions are produced.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity           |
//! |--------------|----------------------|
//! | construction | O(n log n) + count   |
//! | `move_next`  | O(n) worst case      |
//! | `current`    | O(n) (clones)        |
//!
//! # Examples
//!
//! ```rust
//! use lexicomb::generation::{MetaCollection, Permutations};
//!
//! let permutations = Permutations::new(vec![3, 1, 2]).unwrap();
//! assert_eq!(permutations.count().to_string(), "6");
//!
//! let mut iterator = permutations.iter();
//! assert_eq!(iterator.next(), Some(vec![1, 2, 3]));
//! assert_eq!(iterator.next(), Some(vec![1, 3, 2]));
//! assert_eq!(iterator.last(), Some(vec![3, 2, 1]));
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;

use num_bigint::BigUint;

use super::{GenerateOption, MetaCollection, MetaEnumerator, Position, Progress};
use crate::counting::distinct_arrangements;
use crate::error::{CombinatoricsError, Result};

/// All orderings of a sequence, in ascending lexicographic order.
///
/// # Type Parameters
///
/// * `T` - The element type. Enumeration clones elements into each result.
///
/// # Examples
///
/// ```rust
/// use lexicomb::generation::Permutations;
/// use lexicomb::GenerateOption;
///
/// // Equal values are interchangeable without repetition...
/// let distinct = Permutations::with_option(vec!['a', 'a', 'b'], GenerateOption::WithoutRepetition)
///     .unwrap();
/// assert_eq!(distinct.iter().count(), 3);
///
/// // ...and distinct positions with repetition.
/// let positional = Permutations::with_option(vec!['a', 'a', 'b'], GenerateOption::WithRepetition)
///     .unwrap();
/// assert_eq!(positional.iter().count(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    values: Vec<T>,
    lexicographic_codes: Vec<usize>,
    generate_option: GenerateOption,
    count: BigUint,
}

impl<T: Ord> Permutations<T> {
    /// Creates the distinct permutations of `values` under their natural order.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::InvalidArgument`] when the input holds
    /// more than `u32::MAX` values.
    pub fn new(values: impl IntoIterator<Item = T>) -> Result<Self> {
        Self::with_option(values, GenerateOption::WithoutRepetition)
    }

    /// Creates the permutations of `values` in the given mode, ordering
    /// values by [`Ord`].
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::InvalidArgument`] when the input holds
    /// more than `u32::MAX` values.
    pub fn with_option(
        values: impl IntoIterator<Item = T>,
        generate_option: GenerateOption,
    ) -> Result<Self> {
        Self::with_comparator(values, generate_option, T::cmp)
    }
}

impl<T> Permutations<T> {
    /// Creates the permutations of `values` in the given mode, ordering
    /// values with `compare`.
    ///
    /// `compare` must be a total order. It is only consulted here, to sort
    /// the input and derive codes; enumeration never calls it. In
    /// [`GenerateOption::WithRepetition`] mode it is not called at all.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::InvalidArgument`] when the input holds
    /// more than `u32::MAX` values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexicomb::generation::Permutations;
    /// use lexicomb::GenerateOption;
    ///
    /// // Case-insensitive: "a" and "A" are the same value.
    /// let permutations = Permutations::with_comparator(
    ///     vec!["a", "B", "A"],
    ///     GenerateOption::WithoutRepetition,
    ///     |left: &&str, right: &&str| left.to_lowercase().cmp(&right.to_lowercase()),
    /// )
    /// .unwrap();
    /// assert_eq!(permutations.iter().count(), 3);
    /// ```
    pub fn with_comparator<F>(
        values: impl IntoIterator<Item = T>,
        generate_option: GenerateOption,
        mut compare: F,
    ) -> Result<Self>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut values: Vec<T> = values.into_iter().collect();

        let lexicographic_codes = match generate_option {
            GenerateOption::WithRepetition => (0..values.len()).collect(),
            GenerateOption::WithoutRepetition => {
                values.sort_by(&mut compare);
                let mut codes = Vec::with_capacity(values.len());
                let mut code = 1;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 && compare(&values[index - 1], value) != Ordering::Equal {
                        code += 1;
                    }
                    codes.push(code);
                }
                codes
            }
        };

        Self::from_parts(values, lexicographic_codes, generate_option)
    }

    /// Creates the permutations of values that have no ordering.
    ///
    /// Only [`GenerateOption::WithRepetition`] can be served without an
    /// ordering, since it treats every position as distinct.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::UnsupportedOperation`] for
    /// [`GenerateOption::WithoutRepetition`], and
    /// [`CombinatoricsError::InvalidArgument`] when the input holds more
    /// than `u32::MAX` values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexicomb::generation::Permutations;
    /// use lexicomb::{CombinatoricsError, GenerateOption};
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Opaque(f64);
    ///
    /// let values = vec![Opaque(0.5), Opaque(1.5)];
    /// let permutations =
    ///     Permutations::without_ordering(values.clone(), GenerateOption::WithRepetition).unwrap();
    /// assert_eq!(permutations.iter().count(), 2);
    ///
    /// let error =
    ///     Permutations::without_ordering(values, GenerateOption::WithoutRepetition).unwrap_err();
    /// assert!(matches!(error, CombinatoricsError::UnsupportedOperation { .. }));
    /// ```
    pub fn without_ordering(
        values: impl IntoIterator<Item = T>,
        generate_option: GenerateOption,
    ) -> Result<Self> {
        match generate_option {
            GenerateOption::WithRepetition => {
                let values: Vec<T> = values.into_iter().collect();
                let lexicographic_codes = (0..values.len()).collect();
                Self::from_parts(values, lexicographic_codes, generate_option)
            }
            GenerateOption::WithoutRepetition => Err(CombinatoricsError::unsupported_operation(
                "without_ordering",
                "permutations without repetition need an ordering; use with_comparator",
            )),
        }
    }

    fn from_parts(
        values: Vec<T>,
        lexicographic_codes: Vec<usize>,
        generate_option: GenerateOption,
    ) -> Result<Self> {
        debug_assert_eq!(values.len(), lexicographic_codes.len());
        debug_assert!(lexicographic_codes.is_sorted());

        let count = distinct_arrangements(&lexicographic_codes)?;
        tracing::debug!(
            upper_index = values.len(),
            %generate_option,
            %count,
            "built permutations"
        );

        Ok(Self {
            values,
            lexicographic_codes,
            generate_option,
            count,
        })
    }

    /// Returns a fresh enumerator positioned before the first permutation.
    ///
    /// Every call returns an independent enumerator; the collection itself
    /// is never modified.
    pub fn iter(&self) -> PermutationIter<'_, T> {
        PermutationIter::new(self)
    }

    /// Returns the input values in the order enumeration starts from
    /// (sorted for [`GenerateOption::WithoutRepetition`]).
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T> MetaCollection for Permutations<T> {
    #[inline]
    fn count(&self) -> &BigUint {
        &self.count
    }

    #[inline]
    fn upper_index(&self) -> usize {
        self.values.len()
    }

    /// Always equal to [`MetaCollection::upper_index`].
    #[inline]
    fn lower_index(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn generate_option(&self) -> GenerateOption {
        self.generate_option
    }
}

impl<'a, T: Clone> IntoIterator for &'a Permutations<T> {
    type Item = Vec<T>;
    type IntoIter = PermutationIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An enumerator over the results of a [`Permutations`].
///
/// The enumerator owns working copies of the values and their codes and
/// permutes them in place; the parent collection is only read.
pub struct PermutationIter<'a, T> {
    parent: &'a Permutations<T>,
    values: Vec<T>,
    lexicographic_codes: Vec<usize>,
    position: Position,
    progress: Progress,
}

impl<'a, T> PermutationIter<'a, T> {
    fn new(parent: &'a Permutations<T>) -> Self {
        Self {
            parent,
            values: Vec::with_capacity(parent.values.len()),
            lexicographic_codes: Vec::with_capacity(parent.values.len()),
            position: Position::BeforeFirst,
            progress: Progress::new(&parent.count),
        }
    }

    #[inline]
    pub(crate) const fn position(&self) -> Position {
        self.position
    }

    /// Borrows the current arrangement without cloning it.
    pub(crate) fn current_slice(&self) -> Result<&[T]> {
        match self.position {
            Position::InSet => Ok(&self.values),
            Position::BeforeFirst => Err(CombinatoricsError::before_first()),
            Position::AfterLast => Err(CombinatoricsError::after_last()),
        }
    }

    /// Rearranges the working copy into the next lexicographic permutation.
    ///
    /// Returns `false`, leaving the arrangement untouched, when it is
    /// already the last one. Requires at least two elements.
    fn advance(&mut self) -> bool {
        let codes = &self.lexicographic_codes;
        let length = codes.len();

        // Largest pivot with codes[pivot - 1] < codes[pivot].
        let mut pivot = length - 1;
        while codes[pivot - 1] >= codes[pivot] {
            pivot -= 1;
            if pivot == 0 {
                return false;
            }
        }

        // Largest successor with codes[successor] > codes[pivot - 1].
        let mut successor = length - 1;
        while codes[successor] <= codes[pivot - 1] {
            successor -= 1;
        }

        self.values.swap(pivot - 1, successor);
        self.lexicographic_codes.swap(pivot - 1, successor);

        self.values[pivot..].reverse();
        self.lexicographic_codes[pivot..].reverse();

        true
    }
}

impl<T: Clone> MetaEnumerator for PermutationIter<'_, T> {
    type Output = Vec<T>;

    fn move_next(&mut self) -> bool {
        match self.position {
            Position::BeforeFirst => {
                self.values.extend_from_slice(&self.parent.values);
                self.lexicographic_codes
                    .extend_from_slice(&self.parent.lexicographic_codes);
                self.position = Position::InSet;
            }
            Position::InSet => {
                if self.values.len() < 2 || !self.advance() {
                    tracing::trace!(upper_index = self.values.len(), "permutations exhausted");
                    self.position = Position::AfterLast;
                }
            }
            Position::AfterLast => {}
        }

        let in_set = self.position == Position::InSet;
        if in_set {
            self.progress.record();
        }
        in_set
    }

    fn current(&self) -> Result<Vec<T>> {
        self.current_slice().map(<[T]>::to_vec)
    }
}

impl<T: Clone> Iterator for PermutationIter<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current().ok()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.progress.size_hint(self.position)
    }
}

impl<T: Clone> FusedIterator for PermutationIter<'_, T> {}
