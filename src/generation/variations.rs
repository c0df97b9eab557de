//! Ordered subsets ("N pick K").
//!
//! [`Variations`] runs one of two algorithms depending on the mode.
//!
//! Without repetition it delegates to a private [`Permutations`] over slot
//! markers. Each input position carries either the output slot its value
//! goes to, or "unselected":
//!
//! ```text
//! 5 pick 3:   markers [0 1 2 _ _]
//!             values  [a b c d e]   ->  [a b c]
//!
//!             markers [_ 2 _ 0 1]
//!             values  [a b c d e]   ->  [d e b]
//! ```
//!
//! With repetition it runs a base-`N` odometer with `K` digits, least
//! significant digit last, and reads each digit as an input position.

use std::iter::FusedIterator;

use num_bigint::BigUint;

use super::{
    GenerateOption, MetaCollection, MetaEnumerator, PermutationIter, Permutations, Position,
    Progress,
};
use crate::counting::tuple_count;
use crate::error::{CombinatoricsError, Result};

/// Destination of one input position in a variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Slot {
    Output(usize),
    Unselected,
}

/// All ordered size-`K` selections from a sequence.
///
/// Values are taken by position in the order given.
///
/// # Examples
///
/// ```rust
/// use lexicomb::generation::{MetaCollection, Variations};
/// use lexicomb::GenerateOption;
///
/// let variations = Variations::new(vec!['A', 'B', 'C'], 2).unwrap();
/// assert_eq!(variations.count().to_string(), "6");
/// assert_eq!(variations.iter().next(), Some(vec!['A', 'B']));
///
/// let tuples = Variations::with_option(vec![0, 1], 2, GenerateOption::WithRepetition).unwrap();
/// let all: Vec<Vec<i32>> = tuples.iter().collect();
/// assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct Variations<T> {
    values: Vec<T>,
    lower_index: usize,
    generate_option: GenerateOption,
    /// Present only without repetition.
    slots: Option<Permutations<Slot>>,
    count: BigUint,
}

impl<T> Variations<T> {
    /// Creates the ordered selections of size `lower_index` without
    /// repetition.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::InvalidArgument`] when `lower_index`
    /// exceeds the number of values.
    pub fn new(values: impl IntoIterator<Item = T>, lower_index: usize) -> Result<Self> {
        Self::with_option(values, lower_index, GenerateOption::WithoutRepetition)
    }

    /// Creates the ordered selections of size `lower_index` in the given mode.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::InvalidArgument`] when `lower_index`
    /// exceeds the number of values in [`GenerateOption::WithoutRepetition`]
    /// mode, or exceeds `u32::MAX` in [`GenerateOption::WithRepetition`] mode.
    pub fn with_option(
        values: impl IntoIterator<Item = T>,
        lower_index: usize,
        generate_option: GenerateOption,
    ) -> Result<Self> {
        let values: Vec<T> = values.into_iter().collect();
        let upper_index = values.len();

        let (slots, count) = match generate_option {
            GenerateOption::WithoutRepetition => {
                if lower_index > upper_index {
                    return Err(CombinatoricsError::invalid_argument(
                        "lower_index",
                        format!("{lower_index} exceeds the {upper_index} available values"),
                    ));
                }
                let markers = (0..lower_index)
                    .map(Slot::Output)
                    .chain(std::iter::repeat_n(Slot::Unselected, upper_index - lower_index));
                let slots = Permutations::new(markers)?;
                let count = slots.count().clone();
                (Some(slots), count)
            }
            GenerateOption::WithRepetition => (None, tuple_count(upper_index, lower_index)?),
        };

        tracing::debug!(
            upper_index,
            lower_index,
            %generate_option,
            %count,
            "built variations"
        );

        Ok(Self {
            values,
            lower_index,
            generate_option,
            slots,
            count,
        })
    }

    /// Returns a fresh enumerator positioned before the first selection.
    pub fn iter(&self) -> VariationIter<'_, T> {
        let state = match &self.slots {
            Some(slots) => State::Slots(slots.iter()),
            None => State::Odometer {
                digits: Vec::with_capacity(self.lower_index),
                position: Position::BeforeFirst,
            },
        };
        VariationIter {
            parent: self,
            state,
            progress: Progress::new(&self.count),
        }
    }

    /// Returns the input values in the order given.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T> MetaCollection for Variations<T> {
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

impl<'a, T: Clone> IntoIterator for &'a Variations<T> {
    type Item = Vec<T>;
    type IntoIter = VariationIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

enum State<'a> {
    Slots(PermutationIter<'a, Slot>),
    Odometer {
        digits: Vec<usize>,
        position: Position,
    },
}

/// An enumerator over the results of a [`Variations`].
pub struct VariationIter<'a, T> {
    parent: &'a Variations<T>,
    state: State<'a>,
    progress: Progress,
}

impl<T> VariationIter<'_, T> {
    fn position(&self) -> Position {
        match &self.state {
            State::Slots(slots) => slots.position(),
            State::Odometer { position, .. } => *position,
        }
    }
}

/// Advances a base-`base` odometer by one. Returns `false` when the carry
/// runs off the most significant digit, leaving every digit at zero.
fn increment(digits: &mut [usize], base: usize) -> bool {
    for digit in digits.iter_mut().rev() {
        *digit += 1;
        if *digit < base {
            return true;
        }
        *digit = 0;
    }
    false
}

impl<T: Clone> MetaEnumerator for VariationIter<'_, T> {
    type Output = Vec<T>;

    fn move_next(&mut self) -> bool {
        let upper_index = self.parent.values.len();
        let advanced = match &mut self.state {
            State::Slots(slots) => slots.move_next(),
            State::Odometer { digits, position } => {
                match *position {
                    Position::BeforeFirst => {
                        // No tuple of positive length can be drawn from nothing.
                        *position = if upper_index == 0 && self.parent.lower_index > 0 {
                            Position::AfterLast
                        } else {
                            digits.resize(self.parent.lower_index, 0);
                            Position::InSet
                        };
                    }
                    Position::InSet => {
                        if !increment(digits, upper_index) {
                            tracing::trace!(
                                lower_index = self.parent.lower_index,
                                "variations exhausted"
                            );
                            *position = Position::AfterLast;
                        }
                    }
                    Position::AfterLast => {}
                }
                *position == Position::InSet
            }
        };

        if advanced {
            self.progress.record();
        }
        advanced
    }

    fn current(&self) -> Result<Vec<T>> {
        let values = &self.parent.values;
        match &self.state {
            State::Slots(slots) => {
                let markers = slots.current_slice()?;
                let mut selection: Vec<Option<&T>> = vec![None; self.parent.lower_index];
                for (value, marker) in values.iter().zip(markers) {
                    if let Slot::Output(slot) = marker {
                        selection[*slot] = Some(value);
                    }
                }
                debug_assert!(selection.iter().all(Option::is_some));
                Ok(selection.into_iter().flatten().cloned().collect())
            }
            State::Odometer { digits, position } => match position {
                Position::InSet => Ok(digits.iter().map(|&digit| values[digit].clone()).collect()),
                Position::BeforeFirst => Err(CombinatoricsError::before_first()),
                Position::AfterLast => Err(CombinatoricsError::after_last()),
            },
        }
    }
}

impl<T: Clone> Iterator for VariationIter<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current().ok()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.progress.size_hint(self.position())
    }
}

impl<T: Clone> FusedIterator for VariationIter<'_, T> {}
