/*!
# Stepwise Algorithms

Breadth-first search, depth-first search and Dijkstra's algorithm, executed one
visible step at a time so that a presentation layer can draw every intermediate
state and scrub back and forth through the run.

All three share the same life cycle, provided by [`StepAlgorithm`]:
1. `set_start_nodes` validates the start node(s) and records step 0,
2. `step_forward` either replays a stored step (if the cursor was moved back) or
   computes and appends a new one,
3. `step_backward` only moves the cursor.

The algorithms only ever read the graph through [`AdjacencyView`].
Callers must not mutate the graph while a run is active; [`Session`](crate::session::Session)
enforces this.

```
use stepgraph::prelude::*;

let mut store = GraphStore::new();
let a = store.create_node();
let b = store.create_node();
store.join_nodes(a, b, 1, LinkKind::Doubly).unwrap();

let mut bfs = Bfs::new();
bfs.set_start_nodes(&store, &[a, b]).unwrap();
while bfs.step_forward(&store).unwrap() {}

assert_eq!(bfs.state(), RunState::Found);
assert_eq!(bfs.found_path(), Some(vec![a, b]));
```
*/

mod bfs;
mod dfs;
mod dijkstra;
mod history;
mod run;
mod sequencer;
mod table;

use fxhash::FxHashSet;
use tracing::trace;

use crate::{error::*, node::*, ops::*};

pub use bfs::*;
pub use dfs::*;
pub use dijkstra::*;
pub use history::*;
pub use run::*;
pub use sequencer::*;
pub use table::*;

/// The algorithms a run can be started with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Dijkstra,
}

impl AlgorithmKind {
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "BFS",
            AlgorithmKind::Dfs => "DFS",
            AlgorithmKind::Dijkstra => "Dijkstra",
        }
    }

    /// BFS and DFS need a start and a target, Dijkstra only a start
    pub fn required_start_nodes(self) -> usize {
        match self {
            AlgorithmKind::Bfs | AlgorithmKind::Dfs => 2,
            AlgorithmKind::Dijkstra => 1,
        }
    }
}

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    NotStarted,
    Running,
    /// The target was visited (BFS/DFS only)
    Found,
    /// Nothing is left to visit
    Exhausted,
}

impl RunState {
    pub fn is_finished(self) -> bool {
        matches!(self, RunState::Found | RunState::Exhausted)
    }
}

mod sealed {
    use super::*;

    /// Per-algorithm search state behind [`StepAlgorithm`].
    ///
    /// Lives in a private module so that only the provided methods of
    /// [`StepAlgorithm`] can drive it.
    pub trait SearchCore {
        fn log_mut(&mut self) -> &mut StepLog;

        /// Initializes the search state from the start nodes and returns step 0
        fn seed<G: AdjacencyView>(&mut self, graph: &G, nodes: &[NodeId]) -> Result<StepSnapshot>;

        /// Computes the next step of a started search
        fn advance<G: AdjacencyView>(&mut self, graph: &G) -> Result<(StepSnapshot, RunState)>;
    }
}

use sealed::SearchCore;

/// Shared life cycle of all stepwise algorithms.
///
/// The bookkeeping of history, cursor and state is handled by the provided methods.
/// The trait is sealed: it is implemented by [`Bfs`], [`Dfs`], [`Dijkstra`] and
/// [`AlgorithmRun`] only.
pub trait StepAlgorithm: SearchCore {
    fn kind(&self) -> AlgorithmKind;

    fn log(&self) -> &StepLog;

    /// Validates and stores the start node(s) and records step 0.
    ///
    /// # Errors
    /// - [`GraphError::PreconditionViolated`] if start nodes were already set
    /// - [`GraphError::InvalidArgument`] if the number of nodes does not match
    ///   [`AlgorithmKind::required_start_nodes`]
    /// - [`GraphError::UnknownNode`] if a node is not live
    fn set_start_nodes<G: AdjacencyView>(&mut self, graph: &G, nodes: &[NodeId]) -> Result<()> {
        let kind = self.kind();
        if self.log().is_started() {
            return Err(GraphError::precondition(format!(
                "start nodes of {} are already set",
                kind.name()
            )));
        }
        if nodes.len() != kind.required_start_nodes() {
            return Err(GraphError::invalid(format!(
                "{} needs {} start node(s), got {}",
                kind.name(),
                kind.required_start_nodes(),
                nodes.len()
            )));
        }
        if let Some(&u) = nodes.iter().find(|&&u| !graph.contains_node(u)) {
            return Err(GraphError::UnknownNode(u));
        }

        let snapshot = self.seed(graph, nodes)?;
        trace!(algo = kind.name(), ?nodes, "{}", snapshot.narration);
        self.log_mut().begin(snapshot);
        Ok(())
    }

    /// Moves to the next step and returns *true*, or returns *false* if the run is
    /// finished and the cursor is already at the last step.
    ///
    /// # Errors
    /// [`GraphError::PreconditionViolated`] if the start nodes were not set yet.
    fn step_forward<G: AdjacencyView>(&mut self, graph: &G) -> Result<bool> {
        let log = self.log();
        log.ensure_started(self.kind())?;
        if !log.is_at_head() {
            return Ok(self.log_mut().advance_cursor());
        }
        if log.state().is_finished() {
            return Ok(false);
        }

        let (snapshot, state) = self.advance(graph)?;
        trace!(
            algo = self.kind().name(),
            step = self.log().snapshots().len(),
            ?state,
            "{}",
            snapshot.narration
        );
        self.log_mut().record(snapshot, state);
        Ok(true)
    }

    /// Moves the cursor one step back; returns *false* at step 0.
    ///
    /// # Errors
    /// [`GraphError::PreconditionViolated`] if the start nodes were not set yet.
    fn step_backward(&mut self) -> Result<bool> {
        self.log().ensure_started(self.kind())?;
        Ok(self.log_mut().retreat())
    }

    /// Narrations of all steps computed so far
    fn step_descriptions(&self) -> Vec<&str> {
        self.log().descriptions().collect()
    }

    fn state(&self) -> RunState {
        self.log().state()
    }

    fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    /// Snapshot under the cursor, `None` before the run was started
    fn snapshot(&self) -> Option<&StepSnapshot> {
        self.log().current()
    }

    fn touched(&self) -> &FxHashSet<NodeId> {
        self.log().touched()
    }

    fn classify(&self, u: NodeId) -> NodeClass {
        self.log().classify(u)
    }

    fn status_line(&self) -> String {
        self.log().status_line(self.kind())
    }
}
