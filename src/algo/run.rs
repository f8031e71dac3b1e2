use super::*;

/// A run of any of the three algorithms, dispatched without trait objects.
#[derive(Debug, Clone)]
pub enum AlgorithmRun {
    Bfs(Bfs),
    Dfs(Dfs),
    Dijkstra(Dijkstra),
}

macro_rules! dispatch {
    ($self:expr, $run:ident => $body:expr) => {
        match $self {
            AlgorithmRun::Bfs($run) => $body,
            AlgorithmRun::Dfs($run) => $body,
            AlgorithmRun::Dijkstra($run) => $body,
        }
    };
}

impl AlgorithmRun {
    /// Creates a fresh, not yet started run
    pub fn new(kind: AlgorithmKind) -> Self {
        match kind {
            AlgorithmKind::Bfs => AlgorithmRun::Bfs(Bfs::new()),
            AlgorithmKind::Dfs => AlgorithmRun::Dfs(Dfs::new()),
            AlgorithmKind::Dijkstra => AlgorithmRun::Dijkstra(Dijkstra::new()),
        }
    }

    /// The distance table, if this is a Dijkstra run
    pub fn dijkstra_table(&self) -> Option<&DijkstraTable> {
        match self {
            AlgorithmRun::Dijkstra(dijkstra) => Some(dijkstra.table()),
            _ => None,
        }
    }

    /// Path from start to target for a BFS/DFS run that found its target
    pub fn found_path(&self) -> Option<Vec<NodeId>> {
        match self {
            AlgorithmRun::Bfs(bfs) => bfs.found_path(),
            AlgorithmRun::Dfs(dfs) => dfs.found_path(),
            AlgorithmRun::Dijkstra(_) => None,
        }
    }

    /// Hands out everything that was ever shown, leaving the run's set empty
    pub(crate) fn take_touched(&mut self) -> FxHashSet<NodeId> {
        self.log_mut().take_touched()
    }
}

impl From<Bfs> for AlgorithmRun {
    fn from(bfs: Bfs) -> Self {
        AlgorithmRun::Bfs(bfs)
    }
}

impl From<Dfs> for AlgorithmRun {
    fn from(dfs: Dfs) -> Self {
        AlgorithmRun::Dfs(dfs)
    }
}

impl From<Dijkstra> for AlgorithmRun {
    fn from(dijkstra: Dijkstra) -> Self {
        AlgorithmRun::Dijkstra(dijkstra)
    }
}

impl StepAlgorithm for AlgorithmRun {
    fn kind(&self) -> AlgorithmKind {
        dispatch!(self, run => run.kind())
    }

    fn log(&self) -> &StepLog {
        dispatch!(self, run => run.log())
    }
}

impl SearchCore for AlgorithmRun {
    fn log_mut(&mut self) -> &mut StepLog {
        dispatch!(self, run => run.log_mut())
    }

    fn seed<G: AdjacencyView>(&mut self, graph: &G, nodes: &[NodeId]) -> Result<StepSnapshot> {
        dispatch!(self, run => run.seed(graph, nodes))
    }

    fn advance<G: AdjacencyView>(&mut self, graph: &G) -> Result<(StepSnapshot, RunState)> {
        dispatch!(self, run => run.advance(graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn dispatches_to_inner_run() {
        let store = store_with_links(3, &[(0, 1, 2), (1, 2, 2)]);

        for kind in [AlgorithmKind::Bfs, AlgorithmKind::Dfs, AlgorithmKind::Dijkstra] {
            let mut run = AlgorithmRun::new(kind);
            assert_eq!(run.kind(), kind);

            let start: &[NodeId] = if kind == AlgorithmKind::Dijkstra { &[0] } else { &[0, 2] };
            run.set_start_nodes(&store, start).unwrap();
            while run.step_forward(&store).unwrap() {}

            assert!(run.is_finished());
            assert_eq!(run.dijkstra_table().is_some(), kind == AlgorithmKind::Dijkstra);
            match kind {
                AlgorithmKind::Dijkstra => {
                    assert_eq!(run.dijkstra_table().unwrap().distance_to(2), Some(4));
                    assert_eq!(run.found_path(), None);
                }
                _ => assert_eq!(run.found_path(), Some(vec![0, 1, 2])),
            }

            let touched = run.take_touched();
            assert_eq!(touched.len(), 3);
            assert!(run.touched().is_empty());
        }
    }

    #[test]
    fn search_core_checks_its_own_input() {
        let store = store_with_links(2, &[(0, 1, 1)]);

        for kind in [AlgorithmKind::Bfs, AlgorithmKind::Dfs, AlgorithmKind::Dijkstra] {
            let mut run = AlgorithmRun::new(kind);
            assert!(matches!(run.advance(&store), Err(GraphError::PreconditionViolated(_))));
            for nodes in [&[][..], &[0, 1, 0][..]] {
                assert!(matches!(run.seed(&store, nodes), Err(GraphError::InvalidArgument(_))));
            }
            assert_eq!(run.state(), RunState::NotStarted);
            assert!(run.snapshot().is_none());
        }
    }
}
