//! Side-by-side runs of the heap and sorted-array engines
//!
//! [`ComparisonDriver`] owns one container per engine, seeded from the same
//! values, and applies every operation to both. The resulting [`Comparison`]
//! lines the two traces up step by step and reduces them to compare/swap
//! counters so the UI can show where the O(log n) heap pulls away from the
//! O(n) sorted array.

use crate::container::{HeapContainer, SortedContainer};
use crate::engine::{HeapEngine, SortedArrayEngine, TracedEngine};
use crate::trace::{CostCounter, StepRecord, Trace};
use std::fmt;

/// Which primitive was run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert(i32),
    ExtractMin,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert(v) => write!(f, "insert({})", v),
            Operation::ExtractMin => write!(f, "extractMin()"),
        }
    }
}

/// The two steps shown together at one replay position. A side is `None` once
/// its trace has run out.
#[derive(Debug, Clone, Copy)]
pub struct AlignedStep<'a> {
    pub index: usize,
    pub heap: Option<&'a StepRecord<HeapContainer>>,
    pub sorted: Option<&'a StepRecord<SortedContainer>>,
}

/// Outcome of comparing total compare+swap counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    HeapCheaper {
        heap: usize,
        sorted: usize,
        /// Rounded share of the sorted array's work the heap saved
        percent: usize,
    },
    SortedCheaper {
        heap: usize,
        sorted: usize,
    },
    Tie {
        total: usize,
    },
}

impl Verdict {
    fn from_totals(heap: usize, sorted: usize) -> Self {
        if sorted > heap {
            let percent = ((sorted - heap) * 100 + sorted / 2) / sorted;
            Verdict::HeapCheaper {
                heap,
                sorted,
                percent,
            }
        } else if heap > sorted {
            Verdict::SortedCheaper { heap, sorted }
        } else {
            Verdict::Tie { total: heap }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::HeapCheaper {
                heap,
                sorted,
                percent,
            } => write!(
                f,
                "MinHeap finished with {}% fewer operations ({} vs {})",
                percent, heap, sorted
            ),
            Verdict::SortedCheaper { heap, sorted } => {
                write!(f, "Sorted array was cheaper ({} vs {})", sorted, heap)
            }
            Verdict::Tie { total } => write!(f, "Same number of operations ({})", total),
        }
    }
}

/// Both traces of one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub operation: Operation,
    /// Extracted value on each side (always `None` for inserts)
    pub heap_value: Option<i32>,
    pub sorted_value: Option<i32>,
    pub heap_trace: Trace<HeapContainer>,
    pub sorted_trace: Trace<SortedContainer>,
}

impl Comparison {
    /// Replay length: the longer of the two traces
    pub fn total_steps(&self) -> usize {
        self.heap_trace.len().max(self.sorted_trace.len())
    }

    pub fn aligned(&self, index: usize) -> AlignedStep<'_> {
        AlignedStep {
            index,
            heap: self.heap_trace.get(index),
            sorted: self.sorted_trace.get(index),
        }
    }

    pub fn aligned_steps(&self) -> impl Iterator<Item = AlignedStep<'_>> + '_ {
        (0..self.total_steps()).map(move |i| self.aligned(i))
    }

    /// Heap compare/swap counts over steps `0..=index`
    pub fn heap_cost_at(&self, index: usize) -> CostCounter {
        self.heap_trace.cost_at(index)
    }

    /// Sorted-array compare/swap counts over steps `0..=index`
    pub fn sorted_cost_at(&self, index: usize) -> CostCounter {
        self.sorted_trace.cost_at(index)
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_totals(
            self.heap_trace.total_cost().total(),
            self.sorted_trace.total_cost().total(),
        )
    }
}

/// Runs each operation on a heap and a sorted array holding the same values
#[derive(Debug, Clone)]
pub struct ComparisonDriver {
    heap_engine: HeapEngine,
    sorted_engine: SortedArrayEngine,
    heap: HeapContainer,
    sorted: SortedContainer,
    seed: Vec<i32>,
}

impl ComparisonDriver {
    /// Seed both containers with `values`
    pub fn new(values: &[i32]) -> Self {
        let heap_engine = HeapEngine::new();
        ComparisonDriver {
            heap: heap_engine.build(values.iter().copied()),
            sorted: SortedContainer::from_unsorted(values.to_vec()),
            heap_engine,
            sorted_engine: SortedArrayEngine::new(),
            seed: values.to_vec(),
        }
    }

    pub fn heap(&self) -> &HeapContainer {
        &self.heap
    }

    pub fn sorted(&self) -> &SortedContainer {
        &self.sorted
    }

    /// Insert `value` into both containers and keep the results
    pub fn insert(&mut self, value: i32) -> Comparison {
        let heap = self.heap_engine.insert(&self.heap, value);
        let sorted = self.sorted_engine.insert(&self.sorted, value);
        self.heap = heap.final_container;
        self.sorted = sorted.final_container;

        Comparison {
            operation: Operation::Insert(value),
            heap_value: None,
            sorted_value: None,
            heap_trace: heap.trace,
            sorted_trace: sorted.trace,
        }
    }

    /// Extract the minimum from both containers and keep the results
    pub fn extract_min(&mut self) -> Comparison {
        let heap = self.heap_engine.extract_min(&self.heap);
        let sorted = self.sorted_engine.extract_min(&self.sorted);
        self.heap = heap.final_container;
        self.sorted = sorted.final_container;

        Comparison {
            operation: Operation::ExtractMin,
            heap_value: heap.value,
            sorted_value: sorted.value,
            heap_trace: heap.trace,
            sorted_trace: sorted.trace,
        }
    }

    /// Restore both containers to the seed values
    pub fn reset(&mut self) {
        *self = ComparisonDriver::new(&self.seed);
    }
}
