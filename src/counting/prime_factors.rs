//! Prime factor lists with exact multiplication and division.
//!
//! [`PrimeFactors`] stores an integer as the sorted multiset of its prime
//! factors. Products of many small integers (factorials, falling factorials,
//! binomial coefficients) are assembled as factor lists, cancelled against
//! each other, and only then evaluated into a [`BigUint`]. Nothing overflows
//! on the way and the final product never contains factors that a division
//! would immediately remove.
//!
//! # Examples
//!
//! ```rust
//! use lexicomb::counting::PrimeFactors;
//! use num_bigint::BigUint;
//!
//! // 10! / (3! * 7!) = 120
//! let numerator = PrimeFactors::factorial(10);
//! let denominator = PrimeFactors::factorial(3) * PrimeFactors::factorial(7);
//! let quotient = numerator.divide(&denominator).unwrap();
//! assert_eq!(quotient.evaluate(), BigUint::from(120u32));
//! ```

use std::ops::Mul;
use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::One;

use crate::error::{CombinatoricsError, Result};

/// Exclusive upper bound of the prime table. Every composite `u32` has a
/// prime factor below this bound.
const SIEVE_LIMIT: usize = 1 << 16;

static PRIME_TABLE: LazyLock<Vec<u32>> = LazyLock::new(sieve_of_eratosthenes);

fn sieve_of_eratosthenes() -> Vec<u32> {
    let mut is_prime = vec![true; SIEVE_LIMIT];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut candidate = 2;
    while candidate * candidate < SIEVE_LIMIT {
        if is_prime[candidate] {
            for multiple in (candidate * candidate..SIEVE_LIMIT).step_by(candidate) {
                is_prime[multiple] = false;
            }
        }
        candidate += 1;
    }

    is_prime
        .iter()
        .enumerate()
        .filter(|(_, prime)| **prime)
        .filter_map(|(number, _)| u32::try_from(number).ok())
        .collect()
}

/// Returns every prime below 2^16 in ascending order.
///
/// The table is built once, on first use.
///
/// # Examples
///
/// ```rust
/// use lexicomb::counting::prime_table;
///
/// assert_eq!(&prime_table()[..5], &[2, 3, 5, 7, 11]);
/// assert_eq!(prime_table().last(), Some(&65521));
/// ```
pub fn prime_table() -> &'static [u32] {
    &PRIME_TABLE
}

/// An integer represented by the sorted list of its prime factors.
///
/// The empty list represents one. Factors are kept in ascending order and
/// repeated as often as they divide the value, so `12` is stored as
/// `[2, 2, 3]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrimeFactors {
    factors: Vec<u32>,
}

impl PrimeFactors {
    /// Returns the factor list of one (the empty product).
    #[inline]
    pub const fn one() -> Self {
        Self {
            factors: Vec::new(),
        }
    }

    /// Factors a positive integer by trial division with [`prime_table`].
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::InvalidArgument`] when `value` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexicomb::counting::PrimeFactors;
    ///
    /// assert_eq!(PrimeFactors::of(360).unwrap().factors(), &[2, 2, 2, 3, 3, 5]);
    /// assert_eq!(PrimeFactors::of(65537).unwrap().factors(), &[65537]);
    /// assert!(PrimeFactors::of(1).unwrap().is_one());
    /// assert!(PrimeFactors::of(0).is_err());
    /// ```
    pub fn of(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(CombinatoricsError::invalid_argument(
                "value",
                "zero has no prime factorization",
            ));
        }

        Ok(Self {
            factors: trial_division(value),
        })
    }

    /// Rebuilds a factor list from individual primes given in any order.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::InvalidArgument`] when any entry is not
    /// a prime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lexicomb::counting::PrimeFactors;
    ///
    /// let factors = PrimeFactors::from_factors([5, 2, 3, 2]).unwrap();
    /// assert_eq!(factors.factors(), &[2, 2, 3, 5]);
    /// assert!(PrimeFactors::from_factors([2, 4]).is_err());
    /// ```
    pub fn from_factors(factors: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut factors: Vec<u32> = factors.into_iter().collect();
        if let Some(&composite) = factors.iter().find(|&&factor| !is_prime(factor)) {
            return Err(CombinatoricsError::invalid_argument(
                "factors",
                format!("{composite} is not a prime"),
            ));
        }
        factors.sort_unstable();
        Ok(Self { factors })
    }

    /// Returns the factor list of `value!`.
    ///
    /// `0!` and `1!` are both one.
    pub fn factorial(value: u32) -> Self {
        let mut factors: Vec<u32> = (2..=value).flat_map(trial_division).collect();
        factors.sort_unstable();
        Self { factors }
    }

    /// Returns the prime factors in ascending order.
    #[inline]
    pub fn factors(&self) -> &[u32] {
        &self.factors
    }

    /// Returns `true` if this is the empty product.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.factors.is_empty()
    }

    /// Returns the product of `self` and `other` as a factor list.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut merged = Vec::with_capacity(self.factors.len() + other.factors.len());
        let mut left = self.factors.iter().peekable();
        let mut right = other.factors.iter().peekable();

        while let (Some(&&lhs), Some(&&rhs)) = (left.peek(), right.peek()) {
            if lhs <= rhs {
                merged.push(lhs);
                left.next();
            } else {
                merged.push(rhs);
                right.next();
            }
        }
        merged.extend(left);
        merged.extend(right);

        Self { factors: merged }
    }

    /// Divides `self` by `divisor`, cancelling shared factors.
    ///
    /// Division is only meaningful when the quotient is an integer, which is
    /// always the case for the counting formulas this type supports.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatoricsError::InvalidArgument`] when `divisor` contains
    /// a prime factor (with multiplicity) that `self` does not.
    pub fn divide(&self, divisor: &Self) -> Result<Self> {
        let mut quotient = Vec::with_capacity(self.factors.len());
        let mut remaining = divisor.factors.iter().peekable();

        for &factor in &self.factors {
            match remaining.peek() {
                Some(&&cancel) if cancel == factor => {
                    remaining.next();
                }
                Some(&&cancel) if cancel < factor => {
                    return Err(not_divisible(cancel));
                }
                _ => quotient.push(factor),
            }
        }

        match remaining.next() {
            Some(&cancel) => Err(not_divisible(cancel)),
            None => Ok(Self { factors: quotient }),
        }
    }

    /// Multiplies the factors out into an arbitrary-precision integer.
    pub fn evaluate(&self) -> BigUint {
        self.factors
            .iter()
            .fold(BigUint::one(), |product, &factor| product * factor)
    }
}

fn not_divisible(factor: u32) -> CombinatoricsError {
    CombinatoricsError::invalid_argument(
        "divisor",
        format!("prime factor {factor} does not divide the dividend"),
    )
}

/// Trial division by [`prime_table`]. Callers rule out zero.
fn trial_division(value: u32) -> Vec<u32> {
    debug_assert_ne!(value, 0, "zero has no prime factorization");

    let mut remaining = value;
    let mut factors = Vec::new();

    for &prime in prime_table() {
        if u64::from(prime) * u64::from(prime) > u64::from(remaining) {
            break;
        }
        while remaining % prime == 0 {
            factors.push(prime);
            remaining /= prime;
        }
    }

    // Whatever survives trial division up to its square root is prime.
    if remaining > 1 {
        factors.push(remaining);
    }

    factors
}

fn is_prime(value: u32) -> bool {
    value > 1 && trial_division(value) == [value]
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PrimeFactors {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            factors: Vec<u32>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::from_factors(raw.factors).map_err(serde::de::Error::custom)
    }
}

impl Mul for PrimeFactors {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<&PrimeFactors> for &PrimeFactors {
    type Output = PrimeFactors;

    fn mul(self, rhs: &PrimeFactors) -> Self::Output {
        self.multiply(rhs)
    }
}

impl std::iter::Product for PrimeFactors {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut factors: Vec<u32> = iter.flat_map(|item| item.factors).collect();
        factors.sort_unstable();
        Self { factors }
    }
}
