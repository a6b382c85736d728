//! Value-type containers operated on by the engines
//!
//! - [`HeapContainer`]: 1-indexed binary min-heap with an empty sentinel slot 0
//! - [`SortedContainer`]: 0-indexed ascending array
//!
//! Both are plain values. Engines borrow them, clone a private working copy and
//! hand back a new container, so a caller's container is never mutated behind
//! its back.
//!
//! # Heap Indexing
//!
//! ```text
//! slot:    0     1   2   3   4   5
//! value: [None, 7, 12, 11, 13, 20]
//! parent(i) = i / 2    left(i) = 2i    right(i) = 2i + 1
//! ```

use crate::errors::ContainerError;
use std::fmt;

/// Parent slot of a 1-based heap index
pub fn parent_index(i: usize) -> usize {
    i / 2
}

/// Left child slot of a 1-based heap index
pub fn left_child_index(i: usize) -> usize {
    2 * i
}

/// Right child slot of a 1-based heap index
pub fn right_child_index(i: usize) -> usize {
    2 * i + 1
}

/// Binary min-heap laid out in a 1-indexed array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeapContainer {
    // values[k] lives in slot k + 1; slot 0 is implicit
    values: Vec<i32>,
}

impl HeapContainer {
    /// Create an empty heap (sentinel slot only)
    pub fn new() -> Self {
        HeapContainer { values: Vec::new() }
    }

    /// Build from a sentinel-prefixed slot view such as `[None, Some(7), Some(12)]`.
    ///
    /// The layout is checked (slot 0 empty, every other slot filled) but the heap
    /// property is not; use [`HeapContainer::is_min_heap`] for that.
    pub fn from_slots(slots: &[Option<i32>]) -> Result<Self, ContainerError> {
        match slots.first() {
            None | Some(Some(_)) => return Err(ContainerError::MissingSentinel),
            Some(None) => {}
        }

        let mut values = Vec::with_capacity(slots.len() - 1);
        for (index, slot) in slots.iter().enumerate().skip(1) {
            match slot {
                Some(v) => values.push(*v),
                None => return Err(ContainerError::EmptySlot { index }),
            }
        }
        Ok(HeapContainer { values })
    }

    /// Build from values already in heap order (slot 1 first), rejecting
    /// layouts that break the min-heap property.
    pub fn from_heap_order(values: Vec<i32>) -> Result<Self, ContainerError> {
        let heap = HeapContainer { values };
        match heap.first_violation() {
            Some(index) => Err(ContainerError::NotAHeap { index }),
            None => Ok(heap),
        }
    }

    /// Number of stored values (slot count minus the sentinel)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index of the last occupied slot (0 when empty)
    pub fn last_index(&self) -> usize {
        self.values.len()
    }

    /// Value at a 1-based slot; `None` for the sentinel or out of range
    pub fn get(&self, index: usize) -> Option<i32> {
        if index == 0 {
            return None;
        }
        self.values.get(index - 1).copied()
    }

    /// The minimum (slot 1)
    pub fn peek(&self) -> Option<i32> {
        self.values.first().copied()
    }

    /// Stored values in slot order, without the sentinel
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Sentinel-prefixed slot view: `[None, Some(v1), ..., Some(vn)]`
    pub fn slots(&self) -> Vec<Option<i32>> {
        std::iter::once(None)
            .chain(self.values.iter().copied().map(Some))
            .collect()
    }

    /// Check value[i] >= value[i / 2] for every i in 2..=n
    pub fn is_min_heap(&self) -> bool {
        self.first_violation().is_none()
    }

    fn first_violation(&self) -> Option<usize> {
        (2..=self.len()).find(|&i| self.at(i) < self.at(parent_index(i)))
    }

    // Slot access for indices already known to be in 1..=len
    pub(crate) fn at(&self, index: usize) -> i32 {
        self.values[index - 1]
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a - 1, b - 1);
    }

    /// Append a value, returning its slot
    pub(crate) fn push(&mut self, value: i32) -> usize {
        self.values.push(value);
        self.values.len()
    }

    /// Remove the root and move the last value into slot 1
    pub(crate) fn swap_remove_root(&mut self) -> Option<i32> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.swap_remove(0))
    }
}

impl fmt::Display for HeapContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[_")?;
        for v in &self.values {
            write!(f, ", {}", v)?;
        }
        write!(f, "]")
    }
}

/// Ascending array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedContainer {
    values: Vec<i32>,
}

impl SortedContainer {
    pub fn new() -> Self {
        SortedContainer { values: Vec::new() }
    }

    /// Sort arbitrary values into a container
    pub fn from_unsorted(mut values: Vec<i32>) -> Self {
        values.sort_unstable();
        SortedContainer { values }
    }

    /// Wrap values that must already be ascending
    pub fn from_sorted(values: Vec<i32>) -> Result<Self, ContainerError> {
        match values.windows(2).position(|w| w[0] > w[1]) {
            Some(i) => Err(ContainerError::NotSorted { index: i + 1 }),
            None => Ok(SortedContainer { values }),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// The minimum (index 0)
    pub fn peek(&self) -> Option<i32> {
        self.values.first().copied()
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    // Engines keep the array ordered themselves
    pub(crate) fn from_vec_unchecked(values: Vec<i32>) -> Self {
        SortedContainer { values }
    }
}

impl fmt::Display for SortedContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}
