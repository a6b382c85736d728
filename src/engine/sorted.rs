//! Traced sorted-array operations
//!
//! Insert is one pass of insertion sort: append, then walk left swapping while
//! the left neighbour is larger. Extract-min takes index 0 and shifts every
//! remaining element one slot to the left.

use super::{ExtractOutcome, InsertOutcome, TracedEngine};
use crate::container::SortedContainer;
use crate::trace::{StepKind, Trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct SortedArrayEngine;

impl SortedArrayEngine {
    pub fn new() -> Self {
        SortedArrayEngine
    }
}

fn snapshot(array: &[i32]) -> SortedContainer {
    SortedContainer::from_vec_unchecked(array.to_vec())
}

impl TracedEngine for SortedArrayEngine {
    type Container = SortedContainer;

    fn name(&self) -> &'static str {
        "Sorted array"
    }

    fn insert(&self, container: &SortedContainer, value: i32) -> InsertOutcome<SortedContainer> {
        let mut array = container.values().to_vec();
        let mut trace = Trace::new();

        array.push(value);
        let last = array.len() - 1;
        trace.push(
            StepKind::Insert,
            vec![last],
            format!("Insert {} at the end of the array (index {})", value, last),
            snapshot(&array),
        );

        let mut i = last;
        while i > 0 {
            let left = i - 1;

            trace.push(
                StepKind::Compare,
                vec![i, left],
                format!("Compare index {} ({}) with {} ({})", i, array[i], left, array[left]),
                snapshot(&array),
            );

            if array[left] > array[i] {
                let left_val = array[left];
                let right_val = array[i];
                array.swap(left, i);
                trace.push(
                    StepKind::Swap,
                    vec![left, i],
                    format!("{} > {} → shift right", left_val, right_val),
                    snapshot(&array),
                );
                i -= 1;
            } else {
                trace.push(
                    StepKind::Compare,
                    vec![i],
                    format!("{} <= {} → position confirmed", array[left], array[i]),
                    snapshot(&array),
                );
                break;
            }
        }

        if i == 0 {
            trace.push(
                StepKind::Compare,
                vec![0],
                "Index 0 reached → position confirmed".to_string(),
                snapshot(&array),
            );
        }

        let rationale = format!(
            "Insert complete ({} element comparisons, {} swaps)",
            trace.element_comparisons(),
            trace.count(StepKind::Swap)
        );
        let final_container = SortedContainer::from_vec_unchecked(array);
        trace.push(StepKind::Complete, vec![], rationale, final_container.clone());

        InsertOutcome {
            final_container,
            trace,
        }
    }

    fn extract_min(&self, container: &SortedContainer) -> ExtractOutcome<SortedContainer> {
        let Some(min) = container.peek() else {
            return ExtractOutcome {
                value: None,
                final_container: SortedContainer::new(),
                trace: Trace::new(),
            };
        };

        let mut array = container.values().to_vec();
        let mut trace = Trace::new();

        trace.push(
            StepKind::Remove,
            vec![0],
            format!("Remove minimum {} (index 0)", min),
            snapshot(&array),
        );

        // Snapshots show the shorter array; the trailing duplicate is never visible
        let new_len = array.len() - 1;
        for i in 0..new_len {
            array[i] = array[i + 1];
            trace.push(
                StepKind::Swap,
                vec![i, i + 1],
                format!("Move index {} ({}) to index {}", i + 1, array[i], i),
                snapshot(&array[..new_len]),
            );
        }
        array.truncate(new_len);

        let rationale = format!(
            "Extracted minimum {} ({} swaps)",
            min,
            trace.count(StepKind::Swap)
        );
        let final_container = SortedContainer::from_vec_unchecked(array);
        trace.push(StepKind::Complete, vec![], rationale, final_container.clone());

        ExtractOutcome {
            value: Some(min),
            final_container,
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(values: &[i32]) -> SortedContainer {
        SortedContainer::from_sorted(values.to_vec()).unwrap()
    }

    #[test]
    fn test_insert_into_empty_hits_boundary() {
        let outcome = SortedArrayEngine.insert(&SortedContainer::new(), 3);

        assert_eq!(outcome.final_container.values(), &[3]);
        let kinds: Vec<_> = outcome.trace.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![StepKind::Insert, StepKind::Compare, StepKind::Complete]
        );
        assert_eq!(
            outcome.trace.steps()[1].rationale(),
            "Index 0 reached → position confirmed"
        );
        assert_eq!(
            outcome.trace.steps()[2].rationale(),
            "Insert complete (0 element comparisons, 0 swaps)"
        );
    }

    #[test]
    fn test_insert_in_middle() {
        let outcome = SortedArrayEngine.insert(&sorted(&[7, 11, 12, 14, 20]), 13);

        assert_eq!(outcome.final_container.values(), &[7, 11, 12, 13, 14, 20]);
        let steps = outcome.trace.steps();
        assert_eq!(steps[1].indices(), &[5, 4]);
        assert_eq!(steps[2].indices(), &[4, 5]);
        assert_eq!(steps[2].rationale(), "20 > 13 → shift right");
        let confirm = &steps[steps.len() - 2];
        assert_eq!(confirm.indices(), &[3]);
        assert_eq!(confirm.rationale(), "12 <= 13 → position confirmed");
        assert_eq!(
            outcome.trace.last().unwrap().rationale(),
            "Insert complete (3 element comparisons, 2 swaps)"
        );
    }

    #[test]
    fn test_complete_counts_element_comparisons_only() {
        let outcome = SortedArrayEngine.insert(&sorted(&[7, 11, 12, 14, 20]), 5);

        // Five pairwise compares plus the index-0 boundary step
        assert_eq!(outcome.trace.count(StepKind::Compare), 6);
        assert_eq!(outcome.trace.element_comparisons(), 5);
        assert_eq!(
            outcome.trace.last().unwrap().rationale(),
            "Insert complete (5 element comparisons, 5 swaps)"
        );
    }

    #[test]
    fn test_insert_largest_value() {
        let outcome = SortedArrayEngine.insert(&sorted(&[1, 2]), 9);
        assert_eq!(outcome.final_container.values(), &[1, 2, 9]);
        assert_eq!(outcome.trace.len(), 4);
        assert_eq!(outcome.trace.count(StepKind::Swap), 0);
    }

    #[test]
    fn test_insert_equal_value_stops() {
        let outcome = SortedArrayEngine.insert(&sorted(&[4, 4]), 4);
        assert_eq!(outcome.final_container.values(), &[4, 4, 4]);
        assert_eq!(outcome.trace.count(StepKind::Swap), 0);
    }

    #[test]
    fn test_extract_shift_snapshots() {
        let outcome = SortedArrayEngine.extract_min(&sorted(&[1, 2, 3]));

        assert_eq!(outcome.value, Some(1));
        assert_eq!(outcome.final_container.values(), &[2, 3]);

        let steps = outcome.trace.steps();
        assert_eq!(steps[0].kind(), StepKind::Remove);
        assert_eq!(steps[0].snapshot().values(), &[1, 2, 3]);
        assert_eq!(steps[1].indices(), &[0, 1]);
        assert_eq!(steps[1].snapshot().values(), &[2, 2]);
        assert_eq!(steps[2].indices(), &[1, 2]);
        assert_eq!(steps[2].snapshot().values(), &[2, 3]);
        assert_eq!(steps[3].rationale(), "Extracted minimum 1 (2 swaps)");
    }

    #[test]
    fn test_extract_single() {
        let outcome = SortedArrayEngine.extract_min(&sorted(&[8]));
        assert_eq!(outcome.value, Some(8));
        assert!(outcome.final_container.is_empty());
        assert_eq!(outcome.trace.len(), 2);
    }

    #[test]
    fn test_extract_empty_is_noop() {
        let outcome = SortedArrayEngine.extract_min(&SortedContainer::new());
        assert_eq!(outcome.value, None);
        assert!(outcome.final_container.is_empty());
        assert!(outcome.trace.is_empty());
    }
}
