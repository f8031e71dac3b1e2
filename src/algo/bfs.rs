use std::collections::VecDeque;

use super::*;

/// Stepwise breadth-first search from a start node towards a target.
///
/// Every step dequeues one node, marks it visited and enqueues all traversable
/// neighbors that were not discovered before, in adjacency order.
#[derive(Debug, Clone)]
pub struct Bfs {
    log: StepLog,
    start: NodeId,
    target: NodeId,
    queue: VecDeque<NodeId>,
    discovered: FxHashSet<NodeId>,
    tree: PredecessorMap,
    visited: Vec<NodeId>,
}

impl Default for Bfs {
    fn default() -> Self {
        Self {
            log: StepLog::new(),
            start: INVALID_NODE,
            target: INVALID_NODE,
            queue: VecDeque::new(),
            discovered: FxHashSet::default(),
            tree: PredecessorMap::new(),
            visited: Vec::new(),
        }
    }
}

impl Bfs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NodeId> {
        (self.start != INVALID_NODE).then_some(self.start)
    }

    pub fn target(&self) -> Option<NodeId> {
        (self.target != INVALID_NODE).then_some(self.target)
    }

    /// Path from start to target along the discovery tree, once the target was found
    pub fn found_path(&self) -> Option<Vec<NodeId>> {
        if self.state() != RunState::Found {
            return None;
        }
        self.tree.path(self.start, self.target)
    }
}

impl StepAlgorithm for Bfs {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bfs
    }

    fn log(&self) -> &StepLog {
        &self.log
    }
}

impl SearchCore for Bfs {
    fn log_mut(&mut self) -> &mut StepLog {
        &mut self.log
    }

    fn seed<G: AdjacencyView>(&mut self, _graph: &G, nodes: &[NodeId]) -> Result<StepSnapshot> {
        let &[start, target] = nodes else {
            return Err(GraphError::invalid(format!(
                "BFS needs a start and a target node, got {} node(s)",
                nodes.len()
            )));
        };
        self.start = start;
        self.target = target;
        self.queue = NodeSequencer::init(start);
        self.discovered.insert(start);

        Ok(StepSnapshot {
            current: vec![start],
            narration: format!("Starting BFS at node {start}, searching for node {target}"),
            ..Default::default()
        })
    }

    fn advance<G: AdjacencyView>(&mut self, graph: &G) -> Result<(StepSnapshot, RunState)> {
        self.log.ensure_started(AlgorithmKind::Bfs)?;
        let Some(u) = NodeSequencer::peek(&self.queue) else {
            let snapshot = StepSnapshot {
                visited: self.visited.clone(),
                narration: format!("Failed to find node {}", self.target),
                ..Default::default()
            };
            return Ok((snapshot, RunState::Exhausted));
        };
        let node = graph.node_ref(u)?;
        NodeSequencer::pop(&mut self.queue);
        self.visited.push(u);

        if u == self.target {
            let snapshot = StepSnapshot {
                current: vec![u],
                visited: self.visited.clone(),
                narration: format!("Found node {u}"),
                ..Default::default()
            };
            return Ok((snapshot, RunState::Found));
        }

        let reachable: Vec<NodeId> = node
            .traversable_neighbors()
            .map(|(v, _)| v)
            .filter(|&v| self.discovered.insert(v))
            .collect();
        for &v in &reachable {
            self.tree.record(v, u);
            NodeSequencer::push(&mut self.queue, v);
        }

        let mut narration = format!("Visiting node {u}");
        if !reachable.is_empty() {
            narration.push_str(&format!("; can reach {}", node_list(&reachable)));
        }

        let snapshot = StepSnapshot {
            current: vec![u],
            reachable,
            visited: self.visited.clone(),
            narration,
            ..Default::default()
        };
        Ok((snapshot, RunState::Running))
    }
}
