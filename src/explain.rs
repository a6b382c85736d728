//! Reference cards for the MinHeap functions
//!
//! Each [`HeapFunction`] has a [`FunctionCard`] with its cost, pseudocode and
//! key points. [`demo_trace`] runs the function on a small fixed heap so the
//! card can be replayed step by step next to its description.

use crate::container::HeapContainer;
use crate::engine::{HeapEngine, TracedEngine};
use crate::trace::{StepKind, Trace};
use std::fmt;

/// Values the demo heap is built from, in insertion order
pub const DEMO_VALUES: [i32; 5] = [7, 12, 11, 20, 14];

/// Value the insert and heapify-up demos add
pub const DEMO_INSERT_VALUE: i32 = 5;

/// The functions a card exists for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapFunction {
    Insert,
    ExtractMin,
    HeapifyUp,
    HeapifyDown,
    Peek,
}

/// Static description of one function
#[derive(Debug)]
pub struct FunctionCard {
    pub signature: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub complexity: &'static str,
    pub pseudocode: &'static [&'static str],
    pub key_points: &'static [&'static str],
}

const INSERT_CARD: FunctionCard = FunctionCard {
    signature: "insert(value)",
    title: "Insert",
    description: "Adds a new value to the heap. The value is appended at the end of \
                  the array, then heapifyUp moves it to its proper position.",
    complexity: "O(log n)",
    pseudocode: &[
        "1. Append the new value at the end of the array",
        "2. Run heapifyUp from the new position",
        "3. Swap with the parent while smaller",
        "4. Stop at the root or when the parent is smaller",
    ],
    key_points: &[
        "The tree always stays complete",
        "Worst case climbs to the root (height = log n)",
    ],
};

const EXTRACT_MIN_CARD: FunctionCard = FunctionCard {
    signature: "extractMin()",
    title: "Extract minimum",
    description: "Removes and returns the minimum (the root). The last element moves \
                  to the root, then heapifyDown restores the order.",
    complexity: "O(log n)",
    pseudocode: &[
        "1. Save the root (the minimum)",
        "2. Move the last element to the root",
        "3. Shrink the array by one",
        "4. Run heapifyDown from the root",
        "5. Return the saved minimum",
    ],
    key_points: &[
        "The minimum is always reachable in O(1)",
        "Reordering takes O(log n)",
    ],
};

const HEAPIFY_UP_CARD: FunctionCard = FunctionCard {
    signature: "heapifyUp(index)",
    title: "Sift up",
    description: "Starts at the given index and moves up while smaller than the \
                  parent. Called after an insert.",
    complexity: "O(log n)",
    pseudocode: &[
        "while (index > 1):",
        "  parent = index / 2",
        "  if heap[index] < heap[parent]:",
        "    swap(index, parent)",
        "    index = parent",
        "  else:",
        "    break",
    ],
    key_points: &[
        "Min heap: swap when the child is smaller than its parent",
        "Runs at most once per tree level",
    ],
};

const HEAPIFY_DOWN_CARD: FunctionCard = FunctionCard {
    signature: "heapifyDown(index)",
    title: "Sift down",
    description: "Starts at the given index and moves down while larger than a \
                  child. Called after an extract.",
    complexity: "O(log n)",
    pseudocode: &[
        "while (hasChildren):",
        "  smallest = the smaller child",
        "  if heap[index] > heap[smallest]:",
        "    swap(index, smallest)",
        "    index = smallest",
        "  else:",
        "    break",
    ],
    key_points: &[
        "Compares against the smaller of the two children",
        "Stops when it reaches a leaf",
    ],
};

const PEEK_CARD: FunctionCard = FunctionCard {
    signature: "peek()",
    title: "Peek",
    description: "Returns the minimum (the root) without removing it.",
    complexity: "O(1)",
    pseudocode: &["return heap[1]"],
    key_points: &["The fastest heap operation", "The root is always the minimum"],
};

impl HeapFunction {
    pub const ALL: [HeapFunction; 5] = [
        HeapFunction::Insert,
        HeapFunction::ExtractMin,
        HeapFunction::HeapifyUp,
        HeapFunction::HeapifyDown,
        HeapFunction::Peek,
    ];

    pub fn card(self) -> &'static FunctionCard {
        match self {
            HeapFunction::Insert => &INSERT_CARD,
            HeapFunction::ExtractMin => &EXTRACT_MIN_CARD,
            HeapFunction::HeapifyUp => &HEAPIFY_UP_CARD,
            HeapFunction::HeapifyDown => &HEAPIFY_DOWN_CARD,
            HeapFunction::Peek => &PEEK_CARD,
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }

    /// The card after this one, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The card before this one, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for HeapFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.card().signature)
    }
}

/// The heap every demo starts from
pub fn demo_heap() -> HeapContainer {
    HeapEngine::new().build(DEMO_VALUES)
}

/// Steps of `function` run on [`demo_heap`]. The sift functions replay the
/// operation that calls them.
pub fn demo_trace(function: HeapFunction) -> Trace<HeapContainer> {
    let engine = HeapEngine::new();
    let heap = demo_heap();

    match function {
        HeapFunction::Insert | HeapFunction::HeapifyUp => {
            engine.insert(&heap, DEMO_INSERT_VALUE).trace
        }
        HeapFunction::ExtractMin | HeapFunction::HeapifyDown => engine.extract_min(&heap).trace,
        HeapFunction::Peek => peek_trace(heap),
    }
}

fn peek_trace(heap: HeapContainer) -> Trace<HeapContainer> {
    let mut trace = Trace::new();
    let Some(min) = heap.peek() else {
        return trace;
    };

    trace.push(
        StepKind::Compare,
        vec![1],
        format!("Minimum = heap[1] = {}", min),
        heap.clone(),
    );
    trace.push(
        StepKind::Complete,
        vec![1],
        format!("peek() returns {} without removing it", min),
        heap,
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(trace: &Trace<HeapContainer>) -> Vec<StepKind> {
        trace.iter().map(|s| s.kind()).collect()
    }

    #[test]
    fn test_every_function_has_a_full_card() {
        for function in HeapFunction::ALL {
            let card = function.card();
            assert!(!card.description.is_empty());
            assert!(!card.pseudocode.is_empty());
            assert!(!card.key_points.is_empty());
            assert_eq!(function.to_string(), card.signature);
        }
        assert_eq!(HeapFunction::Peek.card().complexity, "O(1)");
        assert_eq!(HeapFunction::Insert.card().complexity, "O(log n)");
    }

    #[test]
    fn test_card_navigation_wraps() {
        assert_eq!(HeapFunction::Insert.next(), HeapFunction::ExtractMin);
        assert_eq!(HeapFunction::Peek.next(), HeapFunction::Insert);
        assert_eq!(HeapFunction::Insert.prev(), HeapFunction::Peek);
        for function in HeapFunction::ALL {
            assert_eq!(function.next().prev(), function);
        }
    }

    #[test]
    fn test_demo_heap() {
        let heap = demo_heap();
        assert_eq!(heap.values(), &[7, 12, 11, 20, 14]);
        assert!(heap.is_min_heap());
    }

    #[test]
    fn test_insert_demo_climbs_to_root() {
        let trace = demo_trace(HeapFunction::Insert);
        assert_eq!(
            kinds(&trace),
            vec![
                StepKind::Insert,
                StepKind::Compare,
                StepKind::Swap,
                StepKind::Compare,
                StepKind::Swap,
                StepKind::Complete,
            ]
        );
        let last = trace.final_snapshot().unwrap();
        assert_eq!(last.values(), &[5, 12, 7, 20, 14, 11]);
        assert_eq!(demo_trace(HeapFunction::HeapifyUp), trace);
    }

    #[test]
    fn test_extract_demo_sifts_down() {
        let trace = demo_trace(HeapFunction::ExtractMin);
        assert_eq!(
            kinds(&trace),
            vec![
                StepKind::Remove,
                StepKind::Swap,
                StepKind::Compare,
                StepKind::Compare,
                StepKind::Swap,
                StepKind::Complete,
            ]
        );
        assert_eq!(trace.final_snapshot().unwrap().values(), &[11, 12, 14, 20]);
        assert_eq!(demo_trace(HeapFunction::HeapifyDown), trace);
    }

    #[test]
    fn test_peek_demo_leaves_heap_alone() {
        let trace = demo_trace(HeapFunction::Peek);
        assert_eq!(kinds(&trace), vec![StepKind::Compare, StepKind::Complete]);
        assert!(trace.iter().all(|s| s.indices() == &[1]));
        assert!(trace.iter().all(|s| s.snapshot() == &demo_heap()));
        assert_eq!(
            trace.last().unwrap().rationale(),
            "peek() returns 7 without removing it"
        );
    }
}
