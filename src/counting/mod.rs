//! Overflow-free counting of result-set sizes.
//!
//! Sizes of meta-collections grow factorially; `21!` already exceeds `u64`.
//! This module computes them exactly:
//!
//! - [`PrimeFactors`]: integers as prime factor lists, so numerators and
//!   denominators cancel before anything is multiplied out
//! - [`distinct_arrangements`]: the number of distinct orderings of a sorted
//!   multiset, `N! / (r1! * r2! * ...)`
//! - [`tuple_count`]: `N^K` for ordered tuples drawn with repetition
//!
//! # Examples
//!
//! ```rust
//! use lexicomb::counting::distinct_arrangements;
//! use num_bigint::BigUint;
//!
//! // "MISSISSIPPI" sorted: I I I I M P P S S S S
//! let codes = [1, 1, 1, 1, 2, 3, 3, 4, 4, 4, 4];
//! assert_eq!(distinct_arrangements(&codes).unwrap(), BigUint::from(34_650u32));
//! ```

mod prime_factors;

pub use prime_factors::{PrimeFactors, prime_table};

use num_bigint::BigUint;

use crate::error::{CombinatoricsError, Result};

/// Converts a length or index into the `u32` domain of the prime table.
pub(crate) fn to_u32(parameter: &'static str, value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        CombinatoricsError::invalid_argument(
            parameter,
            format!("{value} exceeds the supported maximum of {}", u32::MAX),
        )
    })
}

/// Counts the distinct orderings of a sequence whose equal elements share a
/// lexicographic code.
///
/// `codes` must be grouped so that equal codes are adjacent, as they are for
/// a sorted sequence. The result is `N!` divided by `run!` for every maximal
/// run of equal codes.
///
/// # Errors
///
/// Returns [`CombinatoricsError::InvalidArgument`] when `codes` is longer
/// than `u32::MAX`.
pub fn distinct_arrangements(codes: &[usize]) -> Result<BigUint> {
    let length = to_u32("values", codes.len())?;
    let numerator = PrimeFactors::factorial(length);

    let denominator: PrimeFactors = codes
        .chunk_by(|previous, next| previous == next)
        .filter(|run| run.len() > 1)
        .map(|run| to_u32("values", run.len()).map(PrimeFactors::factorial))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .product();

    Ok(numerator.divide(&denominator)?.evaluate())
}

/// Counts the ordered `lower_index`-tuples over `upper_index` values when
/// values may repeat: `upper_index ^ lower_index`.
///
/// `0^0` is one (the single empty tuple).
///
/// # Errors
///
/// Returns [`CombinatoricsError::InvalidArgument`] when `lower_index`
/// exceeds `u32::MAX`.
pub fn tuple_count(upper_index: usize, lower_index: usize) -> Result<BigUint> {
    let exponent = to_u32("lower_index", lower_index)?;
    Ok(BigUint::from(upper_index).pow(exponent))
}
