// Property tests: random operation sequences against both engines

use heapviz::compare::ComparisonDriver;
use heapviz::container::{HeapContainer, SortedContainer};
use heapviz::engine::{HeapEngine, SortedArrayEngine, TracedEngine};
use heapviz::trace::{StepKind, Trace};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Insert(i32),
    ExtractMin,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-999i32..=999).prop_map(Op::Insert),
        1 => Just(Op::ExtractMin),
    ]
}

fn costs_never_decrease<C>(trace: &Trace<C>) -> bool {
    (1..trace.len()).all(|i| {
        let before = trace.cost_at(i - 1);
        let after = trace.cost_at(i);
        after.compares >= before.compares && after.swaps >= before.swaps
    })
}

/// Every two-index swap shows the previous snapshot with exactly those two
/// cells exchanged. `cells` maps a snapshot to the cells the indices address.
fn swaps_exchange_previous_cells<C>(
    trace: &Trace<C>,
    cells: impl Fn(&C) -> Vec<Option<i32>>,
) -> Result<(), TestCaseError> {
    let steps: Vec<_> = trace.iter().collect();
    for pair in steps.windows(2) {
        let (before, step) = (pair[0], pair[1]);
        if step.kind() != StepKind::Swap || step.indices().len() != 2 {
            continue;
        }
        let mut expected = cells(before.snapshot());
        expected.swap(step.indices()[0], step.indices()[1]);
        prop_assert_eq!(cells(step.snapshot()), expected, "{}", step.rationale());
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_every_operation(
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let heap_engine = HeapEngine::new();
        let sorted_engine = SortedArrayEngine::new();
        let mut heap = HeapContainer::new();
        let mut sorted = SortedContainer::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(value) => {
                    let h = heap_engine.insert(&heap, value);
                    let s = sorted_engine.insert(&sorted, value);
                    prop_assert_eq!(h.trace.final_snapshot(), Some(&h.final_container));
                    prop_assert_eq!(s.trace.final_snapshot(), Some(&s.final_container));
                    heap = h.final_container;
                    sorted = s.final_container;
                    model.push(value);
                }
                Op::ExtractMin => {
                    let h = heap_engine.extract_min(&heap);
                    let s = sorted_engine.extract_min(&sorted);
                    let expected = model.iter().copied().min();
                    prop_assert_eq!(h.value, expected);
                    prop_assert_eq!(s.value, expected);
                    prop_assert_eq!(h.trace.is_empty(), expected.is_none());
                    prop_assert_eq!(s.trace.is_empty(), expected.is_none());
                    if let Some(min) = expected {
                        let pos = model.iter().position(|&v| v == min).unwrap();
                        model.swap_remove(pos);
                    }
                    heap = h.final_container;
                    sorted = s.final_container;
                }
            }

            prop_assert!(heap.is_min_heap());
            prop_assert!(sorted.is_sorted());
            prop_assert_eq!(heap.len(), model.len());
            prop_assert_eq!(sorted.len(), model.len());

            let mut heap_values = heap.values().to_vec();
            heap_values.sort_unstable();
            prop_assert_eq!(heap_values.as_slice(), sorted.values());
        }
    }

    #[test]
    fn prop_every_snapshot_of_insert_is_complete(
        values in prop::collection::vec(-999i32..=999, 0..24),
        value in -999i32..=999,
    ) {
        let engine = HeapEngine::new();
        let heap = engine.build(values.iter().copied());
        let outcome = engine.insert(&heap, value);

        // Mid-insert snapshots hold every value; only the last is in heap order
        for step in outcome.trace.iter() {
            prop_assert_eq!(step.snapshot().len(), values.len() + 1);
            prop_assert!(step.indices().iter().all(|&i| i >= 1 && i <= values.len() + 1));
        }
        prop_assert_eq!(outcome.trace.count(StepKind::Insert), 1);
        prop_assert!(costs_never_decrease(&outcome.trace));
    }

    #[test]
    fn prop_same_input_same_trace(
        values in prop::collection::vec(-999i32..=999, 1..24),
        value in -999i32..=999,
    ) {
        let mut first = ComparisonDriver::new(&values);
        let mut second = ComparisonDriver::new(&values);

        prop_assert_eq!(first.insert(value), second.insert(value));
        prop_assert_eq!(first.extract_min(), second.extract_min());
    }

    #[test]
    fn prop_sorted_insert_swaps_match_larger_values(
        values in prop::collection::vec(-999i32..=999, 0..24),
        value in -999i32..=999,
    ) {
        let engine = SortedArrayEngine::new();
        let sorted = SortedContainer::from_unsorted(values.clone());
        let outcome = engine.insert(&sorted, value);

        let larger = values.iter().filter(|&&v| v > value).count();
        prop_assert_eq!(outcome.trace.count(StepKind::Swap), larger);
        prop_assert!(costs_never_decrease(&outcome.trace));
    }

    #[test]
    fn prop_heap_swaps_bounded_by_height(values in prop::collection::vec(-999i32..=999, 1..24)) {
        let engine = HeapEngine::new();
        let heap = engine.build(values.iter().copied());
        let outcome = engine.extract_min(&heap);

        // Moving the last value to the root counts as one swap
        let height = usize::BITS - heap.len().leading_zeros();
        prop_assert!(outcome.trace.count(StepKind::Swap) <= height as usize);
        prop_assert!(costs_never_decrease(&outcome.trace));
    }

    #[test]
    fn prop_swap_steps_exchange_two_cells(
        values in prop::collection::vec(-999i32..=999, 1..24),
        value in -999i32..=999,
    ) {
        let heap_engine = HeapEngine::new();
        let heap = heap_engine.build(values.iter().copied());
        let heap_cells = |c: &HeapContainer| c.slots();

        // Sift-up after insert and sift-down after extract
        swaps_exchange_previous_cells(&heap_engine.insert(&heap, value).trace, heap_cells)?;
        swaps_exchange_previous_cells(&heap_engine.extract_min(&heap).trace, heap_cells)?;

        let sorted = SortedContainer::from_unsorted(values.clone());
        let outcome = SortedArrayEngine::new().insert(&sorted, value);
        swaps_exchange_previous_cells(&outcome.trace, |c: &SortedContainer| {
            c.values().iter().copied().map(Some).collect()
        })?;
    }
}
