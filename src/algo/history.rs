use fxhash::FxHashSet;
use itertools::Itertools;

use super::{AlgorithmKind, RunState};
use crate::{error::*, node::NodeId};

/// Everything a presentation layer needs to draw one step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepSnapshot {
    /// Index of the step; step 0 is produced by `set_start_nodes`
    pub step: usize,
    /// Node(s) being processed in this step
    pub current: Vec<NodeId>,
    /// Nodes newly discovered from `current`
    pub reachable: Vec<NodeId>,
    /// Nodes finalized so far, in finalization order
    pub visited: Vec<NodeId>,
    /// Human readable description of the step
    pub narration: String,
}

impl StepSnapshot {
    pub fn is_current(&self, u: NodeId) -> bool {
        self.current.contains(&u)
    }

    pub fn is_reachable(&self, u: NodeId) -> bool {
        self.reachable.contains(&u)
    }

    pub fn is_visited(&self, u: NodeId) -> bool {
        self.visited.contains(&u)
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.current
            .iter()
            .chain(self.reachable.iter())
            .chain(self.visited.iter())
            .copied()
    }
}

/// Per-node classification under the cursor, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    Untouched,
    /// Being processed in the step under the cursor
    Current,
    /// The search target, shown on the step that found it
    Found,
    /// Newly discovered in the step under the cursor
    Reachable,
    /// Finalized in this or an earlier step
    Visited,
}

/// Append-only history of a run with a cursor for scrubbing.
///
/// Steps are only ever appended at the head. Moving the cursor back and forth
/// never recomputes anything.
#[derive(Debug, Clone, Default)]
pub struct StepLog {
    steps: Vec<StepSnapshot>,
    cursor: usize,
    state: RunState,
    touched: FxHashSet<NodeId>,
}

impl StepLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records step 0 and switches the run to [`RunState::Running`]
    pub(crate) fn begin(&mut self, snapshot: StepSnapshot) {
        self.steps.clear();
        self.cursor = 0;
        self.state = RunState::Running;
        self.record(snapshot, RunState::Running);
    }

    /// Appends a freshly computed step and moves the cursor onto it
    pub(crate) fn record(&mut self, mut snapshot: StepSnapshot, state: RunState) {
        debug_assert!(self.is_at_head());
        snapshot.step = self.steps.len();
        self.touched.extend(snapshot.nodes());
        self.steps.push(snapshot);
        self.cursor = self.steps.len() - 1;
        self.state = state;
    }

    /// Moves the cursor one step back; returns *false* at step 0
    pub(crate) fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor one stored step forward; returns *false* at the head
    pub(crate) fn advance_cursor(&mut self) -> bool {
        if self.is_at_head() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn is_started(&self) -> bool {
        self.state != RunState::NotStarted
    }

    /// Returns [`GraphError::PreconditionViolated`] if `set_start_nodes` was not called yet
    pub(crate) fn ensure_started(&self, kind: AlgorithmKind) -> Result<()> {
        if self.is_started() {
            Ok(())
        } else {
            Err(GraphError::precondition(format!("{} was not started", kind.name())))
        }
    }

    /// Returns *true* if no stored step lies beyond the cursor
    pub fn is_at_head(&self) -> bool {
        self.cursor + 1 >= self.steps.len()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of steps taken after step 0
    pub fn step_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> Option<&StepSnapshot> {
        self.steps.get(self.cursor)
    }

    pub fn snapshot(&self, step: usize) -> Option<&StepSnapshot> {
        self.steps.get(step)
    }

    pub fn snapshots(&self) -> &[StepSnapshot] {
        &self.steps
    }

    /// Narrations of all steps computed so far, including those beyond the cursor
    pub fn descriptions(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().map(|step| step.narration.as_str())
    }

    /// Every node that appeared in any snapshot so far
    pub fn touched(&self) -> &FxHashSet<NodeId> {
        &self.touched
    }

    pub(crate) fn take_touched(&mut self) -> FxHashSet<NodeId> {
        std::mem::take(&mut self.touched)
    }

    pub fn classify(&self, u: NodeId) -> NodeClass {
        let Some(snapshot) = self.current() else {
            return NodeClass::Untouched;
        };

        if snapshot.is_current(u) {
            if self.state == RunState::Found && self.is_at_head() {
                NodeClass::Found
            } else {
                NodeClass::Current
            }
        } else if snapshot.is_reachable(u) {
            NodeClass::Reachable
        } else if snapshot.is_visited(u) {
            NodeClass::Visited
        } else {
            NodeClass::Untouched
        }
    }

    pub fn status_line(&self, kind: AlgorithmKind) -> String {
        if !self.is_at_head() {
            format!("On Step: {}/{}", self.cursor, self.step_count())
        } else if self.state.is_finished() {
            format!("{} algo has completed in {} steps", kind.name(), self.step_count())
        } else {
            format!("Curr Step: {}", self.cursor)
        }
    }
}

/// Joins a list of nodes for narration: `1, 4, 2`
pub(crate) fn node_list(nodes: &[NodeId]) -> String {
    nodes.iter().join(", ")
}
