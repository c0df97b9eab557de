//! Integration tests for Combinations.

use std::collections::BTreeSet;

use lexicomb::generation::{Combinations, MetaCollection, MetaEnumerator};
use lexicomb::{CombinatoricsError, GenerateOption};
use num_bigint::BigUint;
use rstest::rstest;

fn binomial(upper: u64, lower: u64) -> BigUint {
    (0..lower).fold(BigUint::from(1u32), |accumulator, index| {
        accumulator * (upper - index) / (index + 1)
    })
}

#[rstest]
fn test_choose_two_of_three_as_sets() {
    let combinations = Combinations::new(vec!['A', 'B', 'C'], 2).unwrap();
    let subsets: BTreeSet<BTreeSet<char>> = combinations
        .iter()
        .map(|subset| subset.into_iter().collect())
        .collect();

    let expected: BTreeSet<BTreeSet<char>> = [['A', 'B'], ['A', 'C'], ['B', 'C']]
        .into_iter()
        .map(BTreeSet::from)
        .collect();
    assert_eq!(subsets, expected);
}

#[rstest]
#[case(5, 0)]
#[case(5, 1)]
#[case(5, 2)]
#[case(6, 3)]
#[case(8, 8)]
#[case(10, 4)]
fn test_count_is_binomial(#[case] upper: u64, #[case] lower: u64) {
    let combinations = Combinations::new(0..upper, lower as usize).unwrap();

    assert_eq!(combinations.count(), &binomial(upper, lower));
    assert_eq!(
        BigUint::from(combinations.iter().count()),
        binomial(upper, lower)
    );
}

#[rstest]
#[case(3, 2)]
#[case(4, 3)]
#[case(2, 5)]
#[case(1, 4)]
fn test_count_with_repetition_is_multiset_coefficient(#[case] upper: u64, #[case] lower: u64) {
    let combinations =
        Combinations::with_option(0..upper, lower as usize, GenerateOption::WithRepetition)
            .unwrap();
    let expected = binomial(upper + lower - 1, lower);

    assert_eq!(combinations.count(), &expected);
    assert_eq!(BigUint::from(combinations.iter().count()), expected);
}

#[rstest]
fn test_with_repetition_results_are_non_decreasing() {
    let combinations =
        Combinations::with_option(vec![1, 2, 3, 4], 3, GenerateOption::WithRepetition).unwrap();

    for subset in &combinations {
        assert_eq!(subset.len(), 3);
        assert!(subset.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

#[rstest]
fn test_subsets_preserve_input_order() {
    let combinations = Combinations::new(vec!['c', 'a', 'b'], 2).unwrap();
    let all: Vec<Vec<char>> = combinations.iter().collect();

    assert_eq!(all, vec![vec!['c', 'a'], vec!['c', 'b'], vec!['a', 'b']]);
}

#[rstest]
fn test_duplicate_values_are_distinct_positions() {
    let combinations = Combinations::new(vec!['a', 'a', 'b'], 2).unwrap();
    let all: Vec<Vec<char>> = combinations.iter().collect();

    assert_eq!(all, vec![vec!['a', 'a'], vec!['a', 'b'], vec!['a', 'b']]);
}

#[rstest]
fn test_metadata() {
    let combinations =
        Combinations::with_option(vec![1, 2, 3, 4], 2, GenerateOption::WithRepetition).unwrap();

    assert_eq!(combinations.upper_index(), 4);
    assert_eq!(combinations.lower_index(), 2);
    assert_eq!(
        combinations.generate_option(),
        GenerateOption::WithRepetition
    );
    assert_eq!(combinations.values(), &[1, 2, 3, 4]);
}

#[rstest]
fn test_lower_index_out_of_range() {
    let error = Combinations::new(Vec::<i32>::new(), 1).unwrap_err();

    assert_eq!(
        error.to_string(),
        "invalid argument `lower_index`: 1 exceeds the 0 available values"
    );
}

#[rstest]
#[case(Vec::new(), 0, 1)]
#[case(Vec::new(), 3, 0)]
#[case(vec![9], 0, 1)]
#[case(vec![9], 3, 1)]
fn test_boundaries_with_repetition(
    #[case] values: Vec<i32>,
    #[case] lower: usize,
    #[case] expected: usize,
) {
    let combinations =
        Combinations::with_option(values, lower, GenerateOption::WithRepetition).unwrap();

    assert_eq!(combinations.iter().count(), expected);
    assert_eq!(combinations.count(), &BigUint::from(expected));
}

#[rstest]
fn test_enumerator_protocol() {
    let combinations = Combinations::new(vec![1, 2, 3], 3).unwrap();
    let mut enumerator = combinations.iter();

    assert!(matches!(
        enumerator.current(),
        Err(CombinatoricsError::InvalidOperation { .. })
    ));
    assert!(enumerator.move_next());
    assert_eq!(enumerator.current().unwrap(), vec![1, 2, 3]);
    assert!(!enumerator.move_next());
    assert!(!enumerator.move_next());
    assert!(matches!(
        enumerator.reset(),
        Err(CombinatoricsError::UnsupportedOperation { .. })
    ));
}
