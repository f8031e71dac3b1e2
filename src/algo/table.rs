use std::collections::BTreeMap;

use crate::{link::Distance, node::NodeId};

/// Best known distance to a node and the node it was reached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableEntry {
    pub distance: Distance,
    pub predecessor: Option<NodeId>,
}

impl TableEntry {
    pub fn new(distance: Distance, predecessor: Option<NodeId>) -> Self {
        Self {
            distance,
            predecessor,
        }
    }
}

/// A single change to the table, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relaxation {
    pub step: usize,
    pub node: NodeId,
    /// `None` when `node` was discovered for the first time
    pub previous: Option<TableEntry>,
    pub entry: TableEntry,
}

/// Distances and predecessors shown next to a Dijkstra run.
///
/// Holds the best entry for every node discovered so far (settled or not),
/// ordered by node id, plus an append-only log of every change.
#[derive(Debug, Clone, Default)]
pub struct DijkstraTable {
    entries: BTreeMap<NodeId, TableEntry>,
    log: Vec<Relaxation>,
}

impl DijkstraTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `entry` for `node` and returns the entry it replaced
    pub(crate) fn relax(
        &mut self,
        step: usize,
        node: NodeId,
        entry: TableEntry,
    ) -> Option<TableEntry> {
        let previous = self.entries.insert(node, entry);
        self.log.push(Relaxation {
            step,
            node,
            previous,
            entry,
        });
        previous
    }

    pub fn get(&self, node: NodeId) -> Option<&TableEntry> {
        self.entries.get(&node)
    }

    pub fn distance_to(&self, node: NodeId) -> Option<Distance> {
        self.get(node).map(|e| e.distance)
    }

    pub fn predecessor_of(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|e| e.predecessor)
    }

    /// Entries ordered by node id
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TableEntry)> + '_ {
        self.entries.iter().map(|(&u, e)| (u, e))
    }

    /// Every change in the order it was made
    pub fn relaxations(&self) -> &[Relaxation] {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Follows predecessors back from `node` and returns the path from the root.
    /// Returns `None` if `node` is not in the table.
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        let mut path = vec![node];
        let mut entry = self.get(node)?;
        while let Some(pred) = entry.predecessor {
            if path.len() > self.entries.len() {
                return None;
            }
            path.push(pred);
            entry = self.get(pred)?;
        }
        path.reverse();
        Some(path)
    }
}
