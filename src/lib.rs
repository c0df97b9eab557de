//! # lexicomb
//!
//! Lazy enumeration of permutations, combinations and variations over a
//! finite input sequence, with exact result counts.
//!
//! ## Overview
//!
//! Combinatorial spaces grow far faster than memory. This library walks
//! them one result at a time instead of materializing them:
//!
//! - **Permutations**: every ordering, in ascending lexicographic order,
//!   with equal values treated as interchangeable
//! - **Combinations**: every unordered subset of a fixed size
//! - **Variations**: every ordered subset of a fixed size
//!
//! Each collection can be built with or without repetition (see
//! [`GenerateOption`]) and reports its exact size as a [`BigUint`] computed
//! from prime factor lists, so even `1000!` results are counted without
//! overflow.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`GenerateOption`] and
//!   [`counting::PrimeFactors`]
//!
//! ## Logging
//!
//! Construction emits `tracing` events at `DEBUG` level and exhausted
//! enumerators at `TRACE` level. Install any `tracing` subscriber to see
//! them.
//!
//! ## Example
//!
//! ```rust
//! use lexicomb::prelude::*;
//!
//! let variations = Variations::new(vec!['A', 'B', 'C'], 2).unwrap();
//! assert_eq!(variations.count().to_string(), "6");
//!
//! for pair in &variations {
//!     assert_eq!(pair.len(), 2);
//!     assert_ne!(pair[0], pair[1]);
//! }
//! ```
//!
//! [`BigUint`]: num_bigint::BigUint

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use lexicomb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CombinatoricsError;
    pub use crate::generation::*;
}

pub mod counting;
pub mod error;
pub mod generation;

pub use error::{CombinatoricsError, Result};
pub use generation::GenerateOption;

static_assertions::assert_impl_all!(generation::Permutations<String>: Send, Sync);
static_assertions::assert_impl_all!(generation::Combinations<String>: Send, Sync);
static_assertions::assert_impl_all!(generation::Variations<String>: Send, Sync);
static_assertions::assert_impl_all!(generation::PermutationIter<'static, String>: Send);
static_assertions::assert_impl_all!(CombinatoricsError: Send, Sync, std::error::Error);
