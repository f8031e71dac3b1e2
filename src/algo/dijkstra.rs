use fxhash::FxBuildHasher;
use indexmap::IndexMap;

use super::*;
use crate::link::Distance;

/// Stepwise Dijkstra from a single start node.
///
/// Each step settles the current node, relaxes all its traversable links into
/// unsettled nodes and then picks the unsettled node with the smallest distance
/// by scanning the frontier. Ties go to the node that entered the frontier first.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    log: StepLog,
    start: NodeId,
    current: Option<NodeId>,
    settled: FxHashSet<NodeId>,
    settle_order: Vec<NodeId>,
    frontier: IndexMap<NodeId, TableEntry, FxBuildHasher>,
    table: DijkstraTable,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self {
            log: StepLog::new(),
            start: INVALID_NODE,
            current: None,
            settled: FxHashSet::default(),
            settle_order: Vec::new(),
            frontier: IndexMap::default(),
            table: DijkstraTable::new(),
        }
    }
}

impl Dijkstra {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NodeId> {
        (self.start != INVALID_NODE).then_some(self.start)
    }

    /// Distances and predecessors discovered so far
    pub fn table(&self) -> &DijkstraTable {
        &self.table
    }

    /// Nodes in the order they were settled
    pub fn settle_order(&self) -> &[NodeId] {
        &self.settle_order
    }

    pub fn is_settled(&self, u: NodeId) -> bool {
        self.settled.contains(&u)
    }

    /// Shortest path from the start to `u` found so far, following table predecessors
    pub fn path_to(&self, u: NodeId) -> Option<Vec<NodeId>> {
        self.table.path_to(u)
    }

    /// Removes and returns the frontier entry with the smallest distance
    fn pop_closest(&mut self) -> Option<NodeId> {
        let mut best: Option<(usize, Distance)> = None;
        for (idx, entry) in self.frontier.values().enumerate() {
            if best.is_none_or(|(_, dist)| entry.distance < dist) {
                best = Some((idx, entry.distance));
            }
        }

        let (idx, _) = best?;
        self.frontier.shift_remove_index(idx).map(|(u, _)| u)
    }
}

impl StepAlgorithm for Dijkstra {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Dijkstra
    }

    fn log(&self) -> &StepLog {
        &self.log
    }
}

impl SearchCore for Dijkstra {
    fn log_mut(&mut self) -> &mut StepLog {
        &mut self.log
    }

    fn seed<G: AdjacencyView>(&mut self, _graph: &G, nodes: &[NodeId]) -> Result<StepSnapshot> {
        let &[start] = nodes else {
            return Err(GraphError::invalid(format!(
                "Dijkstra needs exactly one start node, got {}",
                nodes.len()
            )));
        };
        self.start = start;
        self.current = Some(start);
        self.table.relax(0, start, TableEntry::new(0, None));

        Ok(StepSnapshot {
            current: vec![start],
            narration: format!("Starting Dijkstra at node {start}"),
            ..Default::default()
        })
    }

    fn advance<G: AdjacencyView>(&mut self, graph: &G) -> Result<(StepSnapshot, RunState)> {
        self.log.ensure_started(AlgorithmKind::Dijkstra)?;
        let Some(u) = self.current else {
            let snapshot = StepSnapshot {
                visited: self.settle_order.clone(),
                narration: "Completed Dijkstra's Algorithm".to_string(),
                ..Default::default()
            };
            return Ok((snapshot, RunState::Exhausted));
        };
        let node = graph.node_ref(u)?;
        let base = self.table.distance_to(u).ok_or_else(|| {
            GraphError::precondition(format!("node {u} is current but has no distance"))
        })?;
        let step = self.log.snapshots().len();

        self.settled.insert(u);
        self.settle_order.push(u);

        let mut lines = vec![format!("Settling node {u} at distance {base}")];
        let mut reachable = Vec::new();

        for (v, weight) in node.traversable_neighbors() {
            if self.settled.contains(&v) {
                continue;
            }
            reachable.push(v);

            let candidate = base + weight as Distance;
            let entry = TableEntry::new(candidate, Some(u));
            match self.table.distance_to(v) {
                None => {
                    self.frontier.insert(v, entry);
                    self.table.relax(step, v, entry);
                    lines.push(format!("Adding {u}->{v} weight as {candidate}"));
                }
                Some(old) if candidate < old => {
                    self.frontier.insert(v, entry);
                    self.table.relax(step, v, entry);
                    lines.push(format!("Updating {u}->{v} weight from {old} to {candidate}"));
                }
                Some(_) => {}
            }
        }

        self.current = self.pop_closest();

        let snapshot = StepSnapshot {
            current: vec![u],
            reachable,
            visited: self.settle_order.clone(),
            narration: lines.join("\n"),
            ..Default::default()
        };
        Ok((snapshot, RunState::Running))
    }
}
