// Step traces shared by both engines

use std::fmt;

/// What a step did. This set is closed: consumers (palette, cost counters)
/// match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Insert,
    Remove,
    Compare,
    Swap,
    Complete,
}

impl StepKind {
    pub const ALL: [StepKind; 5] = [
        StepKind::Insert,
        StepKind::Remove,
        StepKind::Compare,
        StepKind::Swap,
        StepKind::Complete,
    ];

    /// Short uppercase badge used by the UI
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Insert => "INSERT",
            StepKind::Remove => "REMOVE",
            StepKind::Compare => "COMPARE",
            StepKind::Swap => "SWAP",
            StepKind::Complete => "COMPLETE",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded step, with the container as it stood after the step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord<C> {
    kind: StepKind,
    indices: Vec<usize>,
    rationale: String,
    snapshot: C,
}

impl<C> StepRecord<C> {
    pub(crate) fn new(kind: StepKind, indices: Vec<usize>, rationale: String, snapshot: C) -> Self {
        StepRecord {
            kind,
            indices,
            rationale,
            snapshot,
        }
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Affected positions (0, 1 or 2 entries)
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    pub fn snapshot(&self) -> &C {
        &self.snapshot
    }

    /// A compare step that weighed two positions against each other, as opposed
    /// to a single-position "position confirmed" step
    pub fn is_element_comparison(&self) -> bool {
        self.kind == StepKind::Compare && self.indices.len() == 2
    }
}

/// Running compare/swap totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CostCounter {
    pub compares: usize,
    pub swaps: usize,
}

impl CostCounter {
    pub fn record(&mut self, kind: StepKind) {
        match kind {
            StepKind::Compare => self.compares += 1,
            StepKind::Swap => self.swaps += 1,
            StepKind::Insert | StepKind::Remove | StepKind::Complete => {}
        }
    }

    /// Compares plus swaps
    pub fn total(&self) -> usize {
        self.compares + self.swaps
    }
}

/// Ordered, append-only list of steps produced by one engine call.
///
/// Only the engines append; once returned a trace is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<C> {
    steps: Vec<StepRecord<C>>,
}

impl<C> Default for Trace<C> {
    fn default() -> Self {
        Trace { steps: Vec::new() }
    }
}

impl<C> Trace<C> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(
        &mut self,
        kind: StepKind,
        indices: Vec<usize>,
        rationale: String,
        snapshot: C,
    ) {
        self.steps.push(StepRecord::new(kind, indices, rationale, snapshot));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepRecord<C>> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[StepRecord<C>] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord<C>> {
        self.steps.iter()
    }

    pub fn last(&self) -> Option<&StepRecord<C>> {
        self.steps.last()
    }

    pub fn into_steps(self) -> Vec<StepRecord<C>> {
        self.steps
    }

    /// Snapshot of the closing `Complete` step
    pub fn final_snapshot(&self) -> Option<&C> {
        self.steps
            .last()
            .filter(|s| s.kind == StepKind::Complete)
            .map(|s| &s.snapshot)
    }

    /// Number of steps of the given kind
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// Compare-steps that weighed two positions
    pub fn element_comparisons(&self) -> usize {
        self.steps.iter().filter(|s| s.is_element_comparison()).count()
    }

    /// Totals over steps `0..=index` (clamped to the trace length)
    pub fn cost_at(&self, index: usize) -> CostCounter {
        let mut cost = CostCounter::default();
        for step in self.steps.iter().take(index.saturating_add(1)) {
            cost.record(step.kind);
        }
        cost
    }

    /// Totals over the whole trace
    pub fn total_cost(&self) -> CostCounter {
        self.cost_at(usize::MAX)
    }
}

impl<'a, C> IntoIterator for &'a Trace<C> {
    type Item = &'a StepRecord<C>;
    type IntoIter = std::slice::Iter<'a, StepRecord<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trace<Vec<i32>> {
        let mut trace = Trace::new();
        trace.push(StepKind::Insert, vec![1], "insert".into(), vec![2, 1]);
        trace.push(StepKind::Compare, vec![1, 0], "compare".into(), vec![2, 1]);
        trace.push(StepKind::Swap, vec![0, 1], "swap".into(), vec![1, 2]);
        trace.push(StepKind::Compare, vec![0], "confirm".into(), vec![1, 2]);
        trace.push(StepKind::Complete, vec![], "done".into(), vec![1, 2]);
        trace
    }

    #[test]
    fn test_counts() {
        let trace = sample();
        assert_eq!(trace.count(StepKind::Compare), 2);
        assert_eq!(trace.element_comparisons(), 1);
        assert_eq!(trace.total_cost(), CostCounter { compares: 2, swaps: 1 });
        assert_eq!(trace.cost_at(0), CostCounter::default());
        assert_eq!(trace.cost_at(2), CostCounter { compares: 1, swaps: 1 });
        assert_eq!(trace.cost_at(99), trace.total_cost());
    }

    #[test]
    fn test_final_snapshot_requires_complete() {
        let trace = sample();
        assert_eq!(trace.final_snapshot(), Some(&vec![1, 2]));

        let mut partial: Trace<Vec<i32>> = Trace::new();
        partial.push(StepKind::Insert, vec![0], "insert".into(), vec![5]);
        assert_eq!(partial.final_snapshot(), None);
        assert_eq!(Trace::<Vec<i32>>::new().final_snapshot(), None);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(StepKind::ALL.len(), 5);
        assert_eq!(StepKind::Swap.to_string(), "SWAP");
    }
}
