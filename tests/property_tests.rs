//! Property-based tests using proptest
//!
//! These tests generate random operation sequences and verify the heap
//! against a plain `Vec` reference model.

use leftist_heap::LeftistHeap;
use proptest::prelude::*;

/// Removes one occurrence of the maximum from the model.
fn model_pop_max(model: &mut Vec<i32>) -> Option<i32> {
    let (index, _) = model
        .iter()
        .enumerate()
        .max_by_key(|(_, value)| **value)?;
    Some(model.swap_remove(index))
}

fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}

proptest! {
    /// Popping everything yields the input in descending order.
    #[test]
    fn pop_order_is_descending(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut heap = LeftistHeap::new();
        for value in &values {
            heap.push(*value).unwrap();
        }

        let mut last = i32::MAX;
        while let Ok(value) = heap.pop() {
            prop_assert!(value <= last, "popped {} after {}", value, last);
            last = value;
        }
        prop_assert!(heap.is_empty());
    }

    /// Random push/pop interleavings agree with a Vec model on top, len,
    /// and the final multiset.
    #[test]
    fn matches_reference_model(ops in prop::collection::vec((any::<bool>(), any::<i32>()), 0..200)) {
        let mut heap = LeftistHeap::new();
        let mut model: Vec<i32> = Vec::new();

        for (should_pop, value) in ops {
            if should_pop && !model.is_empty() {
                let expected = model_pop_max(&mut model);
                prop_assert_eq!(heap.pop().ok(), expected);
            } else {
                heap.push(value).unwrap();
                model.push(value);
            }

            prop_assert_eq!(heap.len(), model.len());
            prop_assert_eq!(heap.peek().copied(), model.iter().max().copied());
        }

        let mut drained = Vec::new();
        while let Ok(value) = heap.pop() {
            drained.push(value);
        }
        prop_assert_eq!(sorted(drained), sorted(model));
    }

    /// Merge produces the multiset union and drains the other heap.
    #[test]
    fn merge_is_multiset_union(
        left in prop::collection::vec(any::<i32>(), 0..100),
        right in prop::collection::vec(any::<i32>(), 0..100),
    ) {
        let mut a = LeftistHeap::new();
        for value in &left {
            a.push(*value).unwrap();
        }
        let mut b = LeftistHeap::new();
        for value in &right {
            b.push(*value).unwrap();
        }

        a.merge(&mut b).unwrap();
        prop_assert_eq!(a.len(), left.len() + right.len());
        prop_assert!(b.is_empty());

        let mut drained = Vec::new();
        while let Ok(value) = a.pop() {
            drained.push(value);
        }
        let mut expected = left;
        expected.extend(right);
        prop_assert_eq!(sorted(drained), sorted(expected));
    }

    /// A clone shares no state with the original.
    #[test]
    fn clone_is_independent(
        values in prop::collection::vec(any::<i32>(), 1..100),
        extra in any::<i32>(),
    ) {
        let mut original = LeftistHeap::new();
        for value in &values {
            original.push(*value).unwrap();
        }

        let mut copy = original.clone();
        copy.pop().unwrap();
        copy.push(extra).unwrap();
        copy.push(extra).unwrap();

        prop_assert_eq!(original.len(), values.len());
        prop_assert_eq!(original.peek().copied(), values.iter().max().copied());

        let mut drained = Vec::new();
        while let Ok(value) = original.pop() {
            drained.push(value);
        }
        prop_assert_eq!(sorted(drained), sorted(values));
    }
}
