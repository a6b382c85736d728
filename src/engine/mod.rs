//! Step-recording algorithm engines
//!
//! - [`heap`]: [`HeapEngine`], sift-up insert and sift-down extract-min on a
//!   1-indexed binary min-heap
//! - [`sorted`]: [`SortedArrayEngine`], insertion-sort insert and left-shift
//!   extract-min on an ascending array
//!
//! # Execution Model
//!
//! Every call clones the caller's container into a private working copy, runs
//! the algorithm to completion and appends a [`StepRecord`](crate::trace::StepRecord)
//! after each state change or decision. Nothing is shared between calls, so a
//! consumer may abandon replay of a trace at any point.
//!
//! Extracting from an empty container is a no-op that yields `None` and an
//! empty trace. Range and capacity checks are the caller's job
//! (see [`crate::session`]).

pub mod heap;
pub mod sorted;

pub use heap::HeapEngine;
pub use sorted::SortedArrayEngine;

use crate::trace::Trace;

/// Result of a traced insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome<C> {
    pub final_container: C,
    pub trace: Trace<C>,
}

/// Result of a traced extract-min
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOutcome<C> {
    /// The removed minimum, `None` when the container was empty
    pub value: Option<i32>,
    pub final_container: C,
    pub trace: Trace<C>,
}

/// An engine that performs the two priority-queue primitives while recording
/// every step.
pub trait TracedEngine {
    type Container: Clone;

    /// Short name for displays ("MinHeap", "Sorted array")
    fn name(&self) -> &'static str;

    fn insert(&self, container: &Self::Container, value: i32) -> InsertOutcome<Self::Container>;

    fn extract_min(&self, container: &Self::Container) -> ExtractOutcome<Self::Container>;

    /// Build a container by inserting `values` in order, discarding the traces
    fn build<I>(&self, values: I) -> Self::Container
    where
        I: IntoIterator<Item = i32>,
        Self::Container: Default,
    {
        values
            .into_iter()
            .fold(Self::Container::default(), |container, v| {
                self.insert(&container, v).final_container
            })
    }
}
