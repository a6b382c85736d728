//! Traced min-heap operations
//!
//! Insert appends at slot n + 1 and sifts up, comparing against the parent at
//! each level. Extract-min removes the root, moves the last value into slot 1
//! and sifts down, comparing against the left child first and then the right
//! child against whichever of the two won.

use super::{ExtractOutcome, InsertOutcome, TracedEngine};
use crate::container::{left_child_index, parent_index, right_child_index, HeapContainer};
use crate::trace::{StepKind, Trace};

/// Root slot of the heap
const ROOT: usize = 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeapEngine;

impl HeapEngine {
    pub fn new() -> Self {
        HeapEngine
    }

    /// Sift the value at `idx` down, recording compares and swaps
    fn sift_down(heap: &mut HeapContainer, trace: &mut Trace<HeapContainer>, mut idx: usize) {
        let last = heap.last_index();

        loop {
            let left = left_child_index(idx);
            let right = right_child_index(idx);
            let mut smallest = idx;

            if left <= last {
                trace.push(
                    StepKind::Compare,
                    vec![idx, left],
                    format!(
                        "Compare index {} ({}) with left child {} ({})",
                        idx,
                        heap.at(idx),
                        left,
                        heap.at(left)
                    ),
                    heap.clone(),
                );
                if heap.at(left) < heap.at(smallest) {
                    smallest = left;
                }
            }

            if right <= last {
                trace.push(
                    StepKind::Compare,
                    vec![smallest, right],
                    format!(
                        "Compare current smallest {} ({}) with right child {} ({})",
                        smallest,
                        heap.at(smallest),
                        right,
                        heap.at(right)
                    ),
                    heap.clone(),
                );
                if heap.at(right) < heap.at(smallest) {
                    smallest = right;
                }
            }

            if smallest == idx {
                // Leaves stop silently
                if left <= last {
                    trace.push(
                        StepKind::Compare,
                        vec![idx],
                        format!(
                            "Index {} ({}) is not larger than its children → position confirmed",
                            idx,
                            heap.at(idx)
                        ),
                        heap.clone(),
                    );
                }
                break;
            }

            let current = heap.at(idx);
            let child = heap.at(smallest);
            heap.swap(idx, smallest);
            trace.push(
                StepKind::Swap,
                vec![idx, smallest],
                format!("{} > {} → swap", current, child),
                heap.clone(),
            );
            idx = smallest;
        }
    }
}

impl TracedEngine for HeapEngine {
    type Container = HeapContainer;

    fn name(&self) -> &'static str {
        "MinHeap"
    }

    fn insert(&self, container: &HeapContainer, value: i32) -> InsertOutcome<HeapContainer> {
        let mut heap = container.clone();
        let mut trace = Trace::new();

        let insert_idx = heap.push(value);
        trace.push(
            StepKind::Insert,
            vec![insert_idx],
            format!("Insert {} at the end of the array (index {})", value, insert_idx),
            heap.clone(),
        );

        let mut idx = insert_idx;
        while idx > ROOT {
            let parent = parent_index(idx);
            let child_val = heap.at(idx);
            let parent_val = heap.at(parent);

            trace.push(
                StepKind::Compare,
                vec![idx, parent],
                format!(
                    "Compare index {} ({}) with parent {} ({})",
                    idx, child_val, parent, parent_val
                ),
                heap.clone(),
            );

            if child_val < parent_val {
                heap.swap(idx, parent);
                trace.push(
                    StepKind::Swap,
                    vec![idx, parent],
                    format!("{} < {} → swap", child_val, parent_val),
                    heap.clone(),
                );
                idx = parent;
            } else {
                trace.push(
                    StepKind::Compare,
                    vec![idx],
                    format!("{} >= {} → position confirmed", child_val, parent_val),
                    heap.clone(),
                );
                break;
            }
        }

        trace.push(
            StepKind::Complete,
            vec![],
            "Insert complete".to_string(),
            heap.clone(),
        );

        InsertOutcome {
            final_container: heap,
            trace,
        }
    }

    fn extract_min(&self, container: &HeapContainer) -> ExtractOutcome<HeapContainer> {
        let Some(min) = container.peek() else {
            return ExtractOutcome {
                value: None,
                final_container: HeapContainer::new(),
                trace: Trace::new(),
            };
        };

        let mut heap = container.clone();
        let mut trace = Trace::new();

        trace.push(
            StepKind::Remove,
            vec![ROOT],
            format!("Remove minimum {} (root)", min),
            heap.clone(),
        );

        let last_index = heap.last_index();
        heap.swap_remove_root();

        if heap.is_empty() {
            trace.push(
                StepKind::Complete,
                vec![],
                "Heap empty".to_string(),
                heap.clone(),
            );
            return ExtractOutcome {
                value: Some(min),
                final_container: heap,
                trace,
            };
        }

        trace.push(
            StepKind::Swap,
            vec![ROOT],
            format!("Move last element {} (index {}) to the root", heap.at(ROOT), last_index),
            heap.clone(),
        );

        Self::sift_down(&mut heap, &mut trace, ROOT);

        trace.push(
            StepKind::Complete,
            vec![],
            format!("Extracted minimum {}", min),
            heap.clone(),
        );

        ExtractOutcome {
            value: Some(min),
            final_container: heap,
            trace,
        }
    }
}
