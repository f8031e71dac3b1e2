/*!
# Session

A [`Session`] bundles a [`GraphStore`] with at most one algorithm run.

While a run is selected, the graph is locked: every mutating call is rejected with
[`GraphError::PreconditionViolated`]. Quitting the run unlocks the graph and hands
back every node the run ever displayed, so that a presentation layer can reset
whatever per-node state it keeps.
*/

use fxhash::FxHashSet;
use tracing::{debug, warn};

use crate::{algo::*, error::*, link::*, node::*, store::*};

#[derive(Debug, Clone, Default)]
pub struct Session {
    store: GraphStore,
    run: Option<AlgorithmRun>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing store
    pub fn with_store(store: GraphStore) -> Self {
        Self { store, run: None }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn into_store(self) -> GraphStore {
        self.store
    }

    /// Returns *true* while an algorithm is selected
    pub fn is_locked(&self) -> bool {
        self.run.is_some()
    }

    fn ensure_unlocked(&self, operation: &str) -> Result<()> {
        match &self.run {
            Some(run) => {
                warn!(
                    operation,
                    algo = run.kind().name(),
                    "graph is locked by a running algorithm"
                );
                Err(GraphError::precondition(format!(
                    "cannot {operation} while {} is active",
                    run.kind().name()
                )))
            }
            None => Ok(()),
        }
    }

    pub fn create_node(&mut self) -> Result<NodeId> {
        self.ensure_unlocked("create a node")?;
        Ok(self.store.create_node())
    }

    pub fn join_nodes(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: Weight,
        kind: LinkKind,
    ) -> Result<LinkId> {
        self.ensure_unlocked("join nodes")?;
        self.store.join_nodes(a, b, weight, kind)
    }

    pub fn unjoin_nodes(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        self.ensure_unlocked("unjoin nodes")?;
        self.store.unjoin_nodes(a, b)
    }

    pub fn delete_node(&mut self, n: NodeId) -> Result<()> {
        self.ensure_unlocked("delete a node")?;
        self.store.delete_node(n)
    }

    pub fn set_link_weight(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<()> {
        self.ensure_unlocked("change a link weight")?;
        self.store.set_link_weight(a, b, weight)
    }

    pub fn find_node(&self, id: NodeId) -> Result<&Node> {
        self.store.find_node(id)
    }

    /// Selects the algorithm to run next.
    ///
    /// A selected run that has not been started yet is replaced.
    ///
    /// # Errors
    /// [`GraphError::PreconditionViolated`] if a started run is still active.
    pub fn select_algorithm(&mut self, kind: AlgorithmKind) -> Result<()> {
        if let Some(run) = &self.run {
            if run.log().is_started() {
                warn!(
                    selected = kind.name(),
                    active = run.kind().name(),
                    "algorithm is still running"
                );
                return Err(GraphError::precondition(format!(
                    "quit {} before selecting {}",
                    run.kind().name(),
                    kind.name()
                )));
            }
        }

        debug!(algo = kind.name(), "selected algorithm");
        self.run = Some(AlgorithmRun::new(kind));
        Ok(())
    }

    pub fn active_algorithm(&self) -> Option<AlgorithmKind> {
        self.run.as_ref().map(|run| run.kind())
    }

    pub fn run(&self) -> Option<&AlgorithmRun> {
        self.run.as_ref()
    }

    fn active_run(&mut self) -> Result<&mut AlgorithmRun> {
        self.run
            .as_mut()
            .ok_or_else(|| GraphError::precondition("no algorithm selected"))
    }

    /// Starts the selected algorithm at the given node(s)
    pub fn start(&mut self, nodes: &[NodeId]) -> Result<()> {
        let Some(run) = self.run.as_mut() else {
            return Err(GraphError::precondition("no algorithm selected"));
        };
        run.set_start_nodes(&self.store, nodes)
    }

    pub fn step_forward(&mut self) -> Result<bool> {
        let Some(run) = self.run.as_mut() else {
            return Err(GraphError::precondition("no algorithm selected"));
        };
        run.step_forward(&self.store)
    }

    pub fn step_backward(&mut self) -> Result<bool> {
        self.active_run()?.step_backward()
    }

    /// Snapshot under the cursor of the active run
    pub fn snapshot(&self) -> Option<&StepSnapshot> {
        self.run.as_ref().and_then(|run| run.snapshot())
    }

    pub fn step_descriptions(&self) -> Vec<&str> {
        self.run
            .as_ref()
            .map(|run| run.step_descriptions())
            .unwrap_or_default()
    }

    pub fn status_line(&self) -> Option<String> {
        self.run.as_ref().map(|run| run.status_line())
    }

    pub fn classify(&self, u: NodeId) -> NodeClass {
        self.run
            .as_ref()
            .map_or(NodeClass::Untouched, |run| run.classify(u))
    }

    pub fn dijkstra_table(&self) -> Option<&DijkstraTable> {
        self.run.as_ref().and_then(|run| run.dijkstra_table())
    }

    /// Drops the active run, unlocks the graph and returns every node the run displayed
    pub fn quit_algorithm(&mut self) -> FxHashSet<NodeId> {
        match self.run.take() {
            Some(mut run) => {
                let touched = run.take_touched();
                debug!(
                    algo = run.kind().name(),
                    steps = run.log().step_count(),
                    touched = touched.len(),
                    "quit algorithm"
                );
                touched
            }
            None => FxHashSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn diamond_session() -> Session {
        Session::with_store(store_with_links(
            5,
            &[(0, 1, 5), (1, 2, 3), (0, 3, 1), (3, 2, 1)],
        ))
    }

    #[test]
    fn graph_is_locked_while_algorithm_selected() {
        let mut session = diamond_session();
        session.select_algorithm(AlgorithmKind::Bfs).unwrap();
        assert!(session.is_locked());

        assert!(matches!(session.create_node(), Err(GraphError::PreconditionViolated(_))));
        assert!(matches!(
            session.join_nodes(0, 4, 1, LinkKind::Doubly),
            Err(GraphError::PreconditionViolated(_))
        ));
        assert!(matches!(session.unjoin_nodes(0, 1), Err(GraphError::PreconditionViolated(_))));
        assert!(matches!(session.delete_node(4), Err(GraphError::PreconditionViolated(_))));
        assert_eq!(session.store().number_of_links(), 4);

        session.quit_algorithm();
        assert!(!session.is_locked());
        session.join_nodes(0, 4, 1, LinkKind::Doubly).unwrap();
        assert_eq!(session.store().number_of_components(), 1);
    }

    #[test]
    fn full_dijkstra_run() {
        let mut session = diamond_session();
        assert!(matches!(session.start(&[0]), Err(GraphError::PreconditionViolated(_))));

        session.select_algorithm(AlgorithmKind::Dijkstra).unwrap();
        session.start(&[0]).unwrap();
        while session.step_forward().unwrap() {}

        let table = session.dijkstra_table().unwrap();
        assert_eq!(table.distance_to(1), Some(5));
        assert_eq!(table.distance_to(4), None);
        assert_eq!(session.step_descriptions().len(), 6);
        assert_eq!(
            session.status_line().as_deref(),
            Some("Dijkstra algo has completed in 5 steps")
        );

        assert!(session.step_backward().unwrap());
        assert_eq!(session.classify(1), NodeClass::Current);
        assert_eq!(session.classify(0), NodeClass::Visited);

        let touched = session.quit_algorithm();
        assert_eq!(touched.len(), 4);
        assert!(!touched.contains(&4));
        assert!(session.snapshot().is_none());
        assert!(session.dijkstra_table().is_none());
    }

    #[test]
    fn reselecting_requires_quit_once_started() {
        let mut session = diamond_session();
        session.select_algorithm(AlgorithmKind::Bfs).unwrap();
        session.select_algorithm(AlgorithmKind::Dfs).unwrap();
        assert_eq!(session.active_algorithm(), Some(AlgorithmKind::Dfs));

        session.start(&[0, 2]).unwrap();
        assert!(matches!(
            session.select_algorithm(AlgorithmKind::Bfs),
            Err(GraphError::PreconditionViolated(_))
        ));

        session.quit_algorithm();
        session.select_algorithm(AlgorithmKind::Bfs).unwrap();
        assert!(session.quit_algorithm().is_empty());
    }

    #[test]
    fn stepping_without_run() {
        let mut session = diamond_session();
        assert!(session.step_forward().is_err());
        assert!(session.step_backward().is_err());
        assert!(session.step_descriptions().is_empty());
        assert_eq!(session.classify(0), NodeClass::Untouched);
        assert!(session.quit_algorithm().is_empty());
    }
}
