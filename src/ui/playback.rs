//! Forward-only playback of recorded steps
//!
//! The UI never mutates a container while animating. It walks a cursor over
//! step records and shows each record's snapshot; the session has already
//! committed the final container.

use crate::compare::{AlignedStep, Comparison};
use crate::trace::{StepRecord, Trace};

/// Position over `len` steps. `None` until the first step is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    len: usize,
    position: Option<usize>,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Cursor {
            len,
            position: None,
        }
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Showing the last step (or nothing to show)
    pub fn is_finished(&self) -> bool {
        match self.position {
            Some(p) => p + 1 >= self.len,
            None => self.len == 0,
        }
    }

    /// Move one step forward; false when already at the end
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.position = Some(self.position.map_or(0, |p| p + 1));
        true
    }

    /// Jump to the last step
    pub fn finish(&mut self) {
        if self.len > 0 {
            self.position = Some(self.len - 1);
        }
    }
}

/// Steps from one or more traces of the same container, played in order
#[derive(Debug, Clone)]
pub struct Playback<C> {
    steps: Vec<StepRecord<C>>,
    cursor: Cursor,
}

impl<C> Default for Playback<C> {
    fn default() -> Self {
        Playback {
            steps: Vec::new(),
            cursor: Cursor::default(),
        }
    }
}

impl<C> Playback<C> {
    pub fn new<I>(traces: I) -> Self
    where
        I: IntoIterator<Item = Trace<C>>,
    {
        let steps: Vec<_> = traces.into_iter().flat_map(Trace::into_steps).collect();
        let cursor = Cursor::new(steps.len());
        Playback { steps, cursor }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current(&self) -> Option<&StepRecord<C>> {
        self.cursor.position().and_then(|p| self.steps.get(p))
    }

    pub fn advance(&mut self) -> bool {
        self.cursor.advance()
    }

    pub fn finish(&mut self) {
        self.cursor.finish();
    }
}

/// Lock-step playback of a heap vs sorted-array comparison
#[derive(Debug, Clone)]
pub struct ComparePlayback {
    comparison: Comparison,
    cursor: Cursor,
}

impl ComparePlayback {
    pub fn new(comparison: Comparison) -> Self {
        let cursor = Cursor::new(comparison.total_steps());
        ComparePlayback { comparison, cursor }
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current(&self) -> Option<AlignedStep<'_>> {
        self.cursor.position().map(|p| self.comparison.aligned(p))
    }

    pub fn advance(&mut self) -> bool {
        self.cursor.advance()
    }

    pub fn finish(&mut self) {
        self.cursor.finish();
    }
}
