#![cfg(feature = "collection")]
//! Unit tests for the Collection abstraction and its traversal primitives.
//!
//! Tests cover:
//! - Shape classification of sequences and mappings
//! - Enumeration order and keys
//! - each / index_of / contains over both shapes

use rstest::rstest;
use std::collections::HashMap;
use underbar::collection;
use underbar::collection::{Collection, Key, Shape, contains, each, index_of};

// =============================================================================
// Classification
// =============================================================================

#[rstest]
fn sequence_is_classified_as_sequence() {
    let sequence = collection![1, 2, 3];

    assert_eq!(sequence.shape(), Shape::Sequence);
    assert!(sequence.is_sequence());
    assert!(!sequence.is_mapping());
    assert_eq!(sequence.as_slice(), Some(&[1, 2, 3][..]));
}

#[rstest]
fn mapping_is_classified_as_mapping() {
    let mapping = collection! { "a" => 1, "b" => 2 };

    assert_eq!(mapping.shape(), Shape::Mapping);
    assert!(mapping.is_mapping());
    assert_eq!(mapping.as_slice(), None);
    assert_eq!(mapping.len(), 2);
}

#[rstest]
fn hash_map_converts_into_mapping() {
    let mut source = HashMap::new();
    source.insert("x".to_string(), 'x');

    let mapping = Collection::from(source);

    assert!(mapping.is_mapping());
    assert_eq!(mapping.get(Key::Name("x")), Some(&'x'));
}

#[rstest]
fn empty_collections_of_both_shapes() {
    let sequence: Collection<i32> = collection![];
    let mapping: Collection<i32> = Collection::from(HashMap::new());

    assert!(sequence.is_empty());
    assert!(mapping.is_empty());
    assert_eq!(sequence.entries().count(), 0);
    assert_eq!(mapping.entries().count(), 0);
}

// =============================================================================
// each
// =============================================================================

#[rstest]
fn each_visits_sequence_in_index_order() {
    let letters = collection!["a", "b", "c"];
    let mut visited = Vec::new();

    each(&letters, |value, key, collection| {
        assert_eq!(collection, &letters);
        visited.push((*value, key.as_index()));
    });

    assert_eq!(
        visited,
        vec![("a", Some(0)), ("b", Some(1)), ("c", Some(2))]
    );
}

#[rstest]
fn each_visits_mapping_entries_exactly_once() {
    let mapping = collection! { "a" => 1, "b" => 2 };
    let mut visited = Vec::new();

    each(&mapping, |value, key, collection| {
        let name = key.as_name().map(str::to_string);
        assert_eq!(collection.get(key), Some(value));
        visited.push((name, *value));
    });

    visited.sort();
    assert_eq!(
        visited,
        vec![(Some("a".to_string()), 1), (Some("b".to_string()), 2)]
    );
}

#[rstest]
fn each_on_empty_collection_never_calls() {
    let empty: Collection<u8> = collection![];
    let mut calls = 0;

    each(&empty, |_, _, _| calls += 1);

    assert_eq!(calls, 0);
}

#[rstest]
fn each_keys_display_like_property_names() {
    let sequence = collection![true];
    let mut rendered = Vec::new();

    each(&sequence, |_, key, _| rendered.push(key.to_string()));

    assert_eq!(rendered, vec!["0"]);
}

// =============================================================================
// index_of
// =============================================================================

#[rstest]
#[case(&[10, 20, 30], 20, Some(1))]
#[case(&[10, 20, 20], 20, Some(1))]
#[case(&[10, 20, 30], 40, None)]
#[case(&[], 1, None)]
fn index_of_finds_first_match(
    #[case] sequence: &[i32],
    #[case] target: i32,
    #[case] expected: Option<usize>,
) {
    assert_eq!(index_of(sequence, &target), expected);
}

// =============================================================================
// contains
// =============================================================================

#[rstest]
#[case(4, true)]
#[case(9, false)]
fn contains_over_sequence(#[case] target: i32, #[case] expected: bool) {
    assert_eq!(contains(&collection![1, 2, 3, 4], &target), expected);
}

#[rstest]
fn contains_checks_mapping_values_not_keys() {
    let mapping = collection! { "moe" => 1, "larry" => 3 };

    assert!(contains(&mapping, &3));
    assert!(!contains(&mapping, &2));
}

#[rstest]
fn contains_on_empty_collection_is_false() {
    let empty: Collection<&str> = collection![];
    assert!(!contains(&empty, &"anything"));
}
