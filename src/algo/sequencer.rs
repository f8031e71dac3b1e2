use std::collections::VecDeque;

use fxhash::FxHashMap;

use crate::node::NodeId;

/// Abstraction for the frontier of a stepwise search.
///
/// The container decides the visiting order:
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer holding a single item
    fn init(item: T) -> Self;

    /// Pushes an item into the frontier
    fn push(&mut self, item: T);

    /// Removes and returns the next item
    fn pop(&mut self) -> Option<T>;

    /// Returns a copy of the next item without removing it
    fn peek(&self) -> Option<T>;
}

impl<T: Clone> NodeSequencer<T> for VecDeque<T> {
    fn init(item: T) -> Self {
        Self::from(vec![item])
    }
    fn push(&mut self, item: T) {
        self.push_back(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn peek(&self) -> Option<T> {
        self.front().cloned()
    }
}

impl<T: Clone> NodeSequencer<T> for Vec<T> {
    fn init(item: T) -> Self {
        vec![item]
    }
    fn push(&mut self, item: T) {
        self.push(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<T> {
        self.last().cloned()
    }
}

/// Discovery tree of a search: every discovered node points to the node it was
/// discovered from. The start node has no entry.
#[derive(Debug, Clone, Default)]
pub struct PredecessorMap {
    parent: FxHashMap<NodeId, NodeId>,
}

impl PredecessorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `child` was discovered from `parent`. Earlier records win.
    pub fn record(&mut self, child: NodeId, parent: NodeId) {
        self.parent.entry(child).or_insert(parent);
    }

    pub fn parent_of(&self, u: NodeId) -> Option<NodeId> {
        self.parent.get(&u).copied()
    }

    /// Walks the tree back from `target` and returns the path `start -> ... -> target`,
    /// or `None` if `target` was never discovered from `start`.
    pub fn path(&self, start: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
        let mut path = vec![target];
        let mut u = target;
        while u != start {
            u = self.parent_of(u)?;
            if path.len() > self.parent.len() {
                return None;
            }
            path.push(u);
        }
        path.reverse();
        Some(path)
    }
}
