//! Property-based tests for the closure builders

use crate::ops;
use proptest::prelude::*;

fn small_items() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 0..64)
}

proptest! {
    #[test]
    fn test_filter_partitions_its_input(items in small_items()) {
        let odds = ops::filter(|v| v % 2 != 0);
        let evens = ops::filter(|v| v % 2 == 0);
        prop_assert_eq!(odds(&items).len() + evens(&items).len(), items.len());
    }

    #[test]
    fn test_filter_output_is_an_ordered_subsequence(items in small_items()) {
        let positives = ops::filter(|v| v > 0);
        let kept = positives(&items);
        prop_assert!(kept.iter().all(|&v| v > 0));

        // every kept element appears in the input, in order
        let mut remaining = items.iter();
        for &k in &kept {
            prop_assert!(remaining.any(|&v| v == k));
        }
    }

    #[test]
    fn test_map_preserves_length_and_is_pointwise(items in small_items()) {
        let doubled = ops::map(|v| 2 * v);
        let out = doubled(&items);
        prop_assert_eq!(out.len(), items.len());
        for (i, &v) in items.iter().enumerate() {
            prop_assert_eq!(out[i], 2 * v);
        }
    }

    #[test]
    fn test_reduce_matches_a_running_sum(
        batches in prop::collection::vec(small_items(), 0..8),
    ) {
        let mut running = ops::reduce(0, |a, b| a + b);
        let mut expected = 0i64;
        for batch in &batches {
            expected += batch.iter().sum::<i64>();
            prop_assert_eq!(running(batch), expected);
        }
    }

    #[test]
    fn test_map_reduce_equals_map_then_reduce(items in small_items()) {
        let mut fused = ops::map_reduce(0, |v| v * v, |a, v| a + v);
        let squared = ops::map(|v| v * v);
        let mut folded = ops::reduce(0, |a, b| a + b);
        prop_assert_eq!(fused(&items), folded(&squared(&items)));
    }
}
