use super::*;

/// Stepwise depth-first search from a start node towards a target.
///
/// Each step processes one node: it is marked visited, its first traversable
/// neighbor that was not entered yet becomes the next node, and the remaining ones
/// are reported as reachable. When a node has nowhere left to go, the next step
/// backtracks through the stack of entered nodes to the closest one that still
/// has an unentered neighbor.
#[derive(Debug, Clone)]
pub struct Dfs {
    log: StepLog,
    start: NodeId,
    target: NodeId,
    next: Option<NodeId>,
    stack: Vec<NodeId>,
    entered: FxHashSet<NodeId>,
    tree: PredecessorMap,
    visited: Vec<NodeId>,
}

impl Default for Dfs {
    fn default() -> Self {
        Self {
            log: StepLog::new(),
            start: INVALID_NODE,
            target: INVALID_NODE,
            next: None,
            stack: Vec::new(),
            entered: FxHashSet::default(),
            tree: PredecessorMap::new(),
            visited: Vec::new(),
        }
    }
}

impl Dfs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NodeId> {
        (self.start != INVALID_NODE).then_some(self.start)
    }

    pub fn target(&self) -> Option<NodeId> {
        (self.target != INVALID_NODE).then_some(self.target)
    }

    /// Path from start to target along the recursion tree, once the target was found
    pub fn found_path(&self) -> Option<Vec<NodeId>> {
        if self.state() != RunState::Found {
            return None;
        }
        self.tree.path(self.start, self.target)
    }

    fn has_unentered_neighbor<G: AdjacencyView>(&self, graph: &G, u: NodeId) -> bool {
        graph
            .traversable_neighbors_of(u)
            .any(|(v, _)| !self.entered.contains(&v))
    }

    fn exhausted(&self) -> (StepSnapshot, RunState) {
        let snapshot = StepSnapshot {
            visited: self.visited.clone(),
            narration: format!("Failed to find node {}", self.target),
            ..Default::default()
        };
        (snapshot, RunState::Exhausted)
    }
}

impl StepAlgorithm for Dfs {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Dfs
    }

    fn log(&self) -> &StepLog {
        &self.log
    }
}

impl SearchCore for Dfs {
    fn log_mut(&mut self) -> &mut StepLog {
        &mut self.log
    }

    fn seed<G: AdjacencyView>(&mut self, _graph: &G, nodes: &[NodeId]) -> Result<StepSnapshot> {
        let &[start, target] = nodes else {
            return Err(GraphError::invalid(format!(
                "DFS needs a start and a target node, got {} node(s)",
                nodes.len()
            )));
        };
        self.start = start;
        self.target = target;
        self.next = Some(start);
        self.entered.insert(start);

        Ok(StepSnapshot {
            current: vec![start],
            narration: format!("Starting DFS at node {start}, searching for node {target}"),
            ..Default::default()
        })
    }

    fn advance<G: AdjacencyView>(&mut self, graph: &G) -> Result<(StepSnapshot, RunState)> {
        self.log.ensure_started(AlgorithmKind::Dfs)?;
        let (u, resumed) = match self.next {
            Some(u) => (u, false),
            None => loop {
                let Some(frame) = NodeSequencer::pop(&mut self.stack) else {
                    return Ok(self.exhausted());
                };
                if self.has_unentered_neighbor(graph, frame) {
                    break (frame, true);
                }
            },
        };
        let node = graph.node_ref(u)?;

        if !resumed {
            self.visited.push(u);
        }

        let mut narration = if resumed {
            format!("Recursing to: {u}; ")
        } else {
            String::new()
        };

        if u == self.target {
            narration.push_str(&format!("Found node {u}"));
            let snapshot = StepSnapshot {
                current: vec![u],
                visited: self.visited.clone(),
                narration,
                ..Default::default()
            };
            return Ok((snapshot, RunState::Found));
        }

        let mut next = None;
        let mut reachable = Vec::new();
        for (v, _) in node.traversable_neighbors() {
            if self.entered.contains(&v) || next == Some(v) || reachable.contains(&v) {
                continue;
            }
            if next.is_none() {
                next = Some(v);
            } else {
                reachable.push(v);
            }
        }

        if let Some(v) = next {
            self.entered.insert(v);
            self.tree.record(v, u);
            NodeSequencer::push(&mut self.stack, u);
        }
        self.next = next;

        narration.push_str(&format!("Visiting node {u}"));
        if let Some(v) = next {
            narration.push_str(&format!("; can reach {v}"));
            if !reachable.is_empty() {
                narration.push_str(&format!(", {}", node_list(&reachable)));
            }
        }

        let mut discovered = Vec::with_capacity(reachable.len() + 1);
        discovered.extend(next);
        discovered.extend(reachable);

        let snapshot = StepSnapshot {
            current: vec![u],
            reachable: discovered,
            visited: self.visited.clone(),
            narration,
            ..Default::default()
        };
        Ok((snapshot, RunState::Running))
    }
}
