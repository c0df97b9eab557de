//! Integration tests for Permutations.
//!
//! These tests exercise the public API: lexicographic order, multiset
//! handling, custom orderings, counts and the enumerator protocol.

use lexicomb::generation::{MetaCollection, MetaEnumerator, Permutations};
use lexicomb::{CombinatoricsError, GenerateOption};
use num_bigint::BigUint;
use rstest::rstest;

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
fn test_distinct_values_in_lexicographic_order() {
    let permutations = Permutations::new(vec![1, 2, 3]).unwrap();
    let all: Vec<Vec<i32>> = permutations.iter().collect();

    assert_eq!(
        all,
        vec![
            vec![1, 2, 3],
            vec![1, 3, 2],
            vec![2, 1, 3],
            vec![2, 3, 1],
            vec![3, 1, 2],
            vec![3, 2, 1],
        ]
    );
}

#[rstest]
fn test_results_strictly_ascend() {
    let permutations = Permutations::new(vec!['d', 'a', 'c', 'b', 'a']).unwrap();
    let all: Vec<Vec<char>> = permutations.iter().collect();

    assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
}

#[rstest]
fn test_unsorted_input_starts_from_sorted_order() {
    let permutations = Permutations::new(vec![3, 1, 2]).unwrap();
    let mut iterator = permutations.iter();

    assert_eq!(iterator.next(), Some(vec![1, 2, 3]));
    assert_eq!(iterator.last(), Some(vec![3, 2, 1]));
}

// =============================================================================
// Multisets
// =============================================================================

#[rstest]
fn test_multiset_yields_each_arrangement_once() {
    let permutations = Permutations::new(vec!["A", "A", "B"]).unwrap();
    let all: Vec<Vec<&str>> = permutations.iter().collect();

    assert_eq!(
        all,
        vec![vec!["A", "A", "B"], vec!["A", "B", "A"], vec!["B", "A", "A"]]
    );
}

#[rstest]
#[case("MISSISSIPPI", 34_650)]
#[case("AABB", 6)]
#[case("ABCDE", 120)]
#[case("ZZZZ", 1)]
fn test_word_arrangement_counts(#[case] word: &str, #[case] expected: u64) {
    let permutations = Permutations::new(word.chars()).unwrap();

    assert_eq!(permutations.count(), &BigUint::from(expected));
    assert_eq!(permutations.iter().count() as u64, expected);
}

#[rstest]
fn test_with_repetition_counts_positions() {
    let permutations =
        Permutations::with_option(vec!["A", "A", "B"], GenerateOption::WithRepetition).unwrap();

    assert_eq!(permutations.count(), &BigUint::from(6u32));
    assert_eq!(permutations.iter().count(), 6);
}

// =============================================================================
// Custom Orderings
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Task {
    name: &'static str,
    priority: u8,
}

#[rstest]
fn test_comparator_groups_equal_priorities() {
    let tasks = vec![
        Task { name: "deploy", priority: 2 },
        Task { name: "build", priority: 1 },
        Task { name: "test", priority: 1 },
    ];
    let permutations = Permutations::with_comparator(
        tasks,
        GenerateOption::WithoutRepetition,
        |left: &Task, right: &Task| left.priority.cmp(&right.priority),
    )
    .unwrap();

    let priorities: Vec<Vec<u8>> = permutations
        .iter()
        .map(|schedule| schedule.iter().map(|task| task.priority).collect())
        .collect();
    assert_eq!(priorities, vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);

    let first: Vec<&str> = permutations
        .iter()
        .next()
        .unwrap()
        .iter()
        .map(|task| task.name)
        .collect();
    assert_eq!(first, vec!["build", "test", "deploy"]);
}

#[rstest]
fn test_reverse_comparator_reverses_order() {
    let permutations = Permutations::with_comparator(
        vec![1, 2, 3],
        GenerateOption::WithoutRepetition,
        |left: &i32, right: &i32| right.cmp(left),
    )
    .unwrap();
    let mut iterator = permutations.iter();

    assert_eq!(iterator.next(), Some(vec![3, 2, 1]));
    assert_eq!(iterator.last(), Some(vec![1, 2, 3]));
}

#[rstest]
fn test_without_ordering_rejects_without_repetition() {
    let error = Permutations::without_ordering(vec![0.5_f64, 0.25], GenerateOption::WithoutRepetition)
        .unwrap_err();

    assert!(matches!(
        error,
        CombinatoricsError::UnsupportedOperation {
            operation: "without_ordering",
            ..
        }
    ));
}

#[rstest]
fn test_without_ordering_with_repetition_keeps_input_order() {
    let permutations =
        Permutations::without_ordering(vec![0.5_f64, 0.25], GenerateOption::WithRepetition)
            .unwrap();
    let all: Vec<Vec<f64>> = permutations.iter().collect();

    assert_eq!(all, vec![vec![0.5, 0.25], vec![0.25, 0.5]]);
}

// =============================================================================
// Counting
// =============================================================================

#[rstest]
fn test_count_beyond_u64() {
    let permutations = Permutations::new(0..30).unwrap();
    let expected = (1..=30u32).fold(BigUint::from(1u32), |product, term| product * term);

    assert_eq!(permutations.count(), &expected);
    assert_eq!(permutations.upper_index(), 30);
    assert_eq!(permutations.lower_index(), 30);
}

#[rstest]
fn test_huge_collection_can_be_sampled_lazily() {
    let permutations = Permutations::new(0..200).unwrap();
    let first: Vec<Vec<i32>> = permutations.iter().take(3).collect();

    assert_eq!(first[0], (0..200).collect::<Vec<_>>());
    assert_eq!(first[1][198..], [199, 198]);
    assert_eq!(first[2][197..], [198, 197, 199]);
    assert_eq!(permutations.iter().size_hint(), (usize::MAX, None));
}

// =============================================================================
// Enumerator Protocol
// =============================================================================

#[rstest]
fn test_enumerator_protocol() {
    let permutations = Permutations::new(vec!['x', 'y']).unwrap();
    let mut enumerator = permutations.iter();

    assert!(matches!(
        enumerator.current(),
        Err(CombinatoricsError::InvalidOperation { .. })
    ));
    assert!(enumerator.move_next());
    assert_eq!(enumerator.current().unwrap(), vec!['x', 'y']);
    assert!(enumerator.move_next());
    assert_eq!(enumerator.current().unwrap(), vec!['y', 'x']);
    assert!(!enumerator.move_next());
    assert!(matches!(
        enumerator.current(),
        Err(CombinatoricsError::InvalidOperation { .. })
    ));
    assert!(matches!(
        enumerator.reset(),
        Err(CombinatoricsError::UnsupportedOperation { .. })
    ));
}

#[rstest]
fn test_iterator_is_fused() {
    let permutations = Permutations::new(vec![1]).unwrap();
    let mut iterator = permutations.iter();

    assert_eq!(iterator.next(), Some(vec![1]));
    assert_eq!(iterator.next(), None);
    assert_eq!(iterator.next(), None);
}

#[rstest]
fn test_for_loop_over_reference() {
    let permutations = Permutations::new(vec![1, 2, 3]).unwrap();
    let mut seen = 0;
    for permutation in &permutations {
        assert_eq!(permutation.len(), 3);
        seen += 1;
    }
    assert_eq!(seen, 6);
}
