//! Builder methods on any [`IntoIterator`].

use std::cmp::Ordering;

use super::{Combinations, GenerateOption, Permutations, Variations};
use crate::error::Result;

/// Collects an iterable into a meta-collection.
///
/// Implemented for every [`IntoIterator`], so any vector, slice iterator or
/// adapter chain can be turned into a collection in place.
///
/// # Examples
///
/// ```rust
/// use lexicomb::generation::{CombinatoricsExt, MetaCollection};
/// use lexicomb::GenerateOption;
///
/// let words = ["red", "green", "blue"];
///
/// let orderings = words.into_permutations(GenerateOption::WithoutRepetition).unwrap();
/// assert_eq!(orderings.iter().count(), 6);
///
/// let pairs = words.iter().copied().into_combinations(2, GenerateOption::WithoutRepetition).unwrap();
/// assert_eq!(pairs.count().to_string(), "3");
///
/// let codes = (0..10).into_variations(4, GenerateOption::WithRepetition).unwrap();
/// assert_eq!(codes.count().to_string(), "10000");
/// ```
pub trait CombinatoricsExt: IntoIterator + Sized {
    /// Builds the permutations of the items, ordered by [`Ord`].
    ///
    /// # Errors
    ///
    /// See [`Permutations::with_option`].
    fn into_permutations(self, generate_option: GenerateOption) -> Result<Permutations<Self::Item>>
    where
        Self::Item: Ord,
    {
        Permutations::with_option(self, generate_option)
    }

    /// Builds the permutations of the items, ordered by `compare`.
    ///
    /// # Errors
    ///
    /// See [`Permutations::with_comparator`].
    fn into_permutations_by<F>(
        self,
        generate_option: GenerateOption,
        compare: F,
    ) -> Result<Permutations<Self::Item>>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Permutations::with_comparator(self, generate_option, compare)
    }

    /// Builds the size-`lower_index` combinations of the items.
    ///
    /// # Errors
    ///
    /// See [`Combinations::with_option`].
    fn into_combinations(
        self,
        lower_index: usize,
        generate_option: GenerateOption,
    ) -> Result<Combinations<Self::Item>> {
        Combinations::with_option(self, lower_index, generate_option)
    }

    /// Builds the size-`lower_index` variations of the items.
    ///
    /// # Errors
    ///
    /// See [`Variations::with_option`].
    fn into_variations(
        self,
        lower_index: usize,
        generate_option: GenerateOption,
    ) -> Result<Variations<Self::Item>> {
        Variations::with_option(self, lower_index, generate_option)
    }
}

impl<I: IntoIterator> CombinatoricsExt for I {}
