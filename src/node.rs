/*!
# Node Representation

Nodes are identified by an opaque `NodeId = u32` handed out by the store.
Identifiers only ever grow, so an id is never shared by two live nodes.

A [`Node`] owns its adjacency list: one [`AdjacencyRecord`] per link it takes part in.
A link between `a` and `b` therefore shows up twice, once in each endpoint's list,
and both records carry the same [`LinkId`].
*/

use smallvec::SmallVec;

use crate::link::{LinkId, Weight};

/// Opaque node identifier
pub type NodeId = u32;

/// Node-Value that is never issued by the store
pub const INVALID_NODE: NodeId = NodeId::MAX;

/// There can be at most `2^32 - 1` nodes in a store
pub type NumNodes = NodeId;

/// One endpoint's view of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjacencyRecord {
    /// The node on the other end of the link
    pub neighbor: NodeId,
    /// Weight of the link (identical on both records)
    pub weight: Weight,
    /// Identifier of the link (identical on both records)
    pub link_id: LinkId,
    /// *true* if the owner of this record may traverse to `neighbor`
    pub directed_from_this_node: bool,
}

impl AdjacencyRecord {
    /// Returns *true* if an algorithm standing on the owner may move to `neighbor`
    pub fn is_traversable(&self) -> bool {
        self.directed_from_this_node
    }
}

/// Most nodes drawn by hand have only a handful of links
pub type AdjacencyList = SmallVec<[AdjacencyRecord; 4]>;

/// A vertex of the store together with its ordered adjacency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    adjacency: AdjacencyList,
}

impl Node {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            adjacency: SmallVec::new(),
        }
    }

    /// Returns the identifier of the node
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the adjacency records in insertion order
    pub fn adjacency(&self) -> &[AdjacencyRecord] {
        &self.adjacency
    }

    /// Returns the number of links attached to this node
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns an iterator over all neighbors, ignoring link direction
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.iter().map(|rec| rec.neighbor)
    }

    /// Returns an iterator over `(neighbor, weight)` for all links this node may traverse
    pub fn traversable_neighbors(&self) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.adjacency
            .iter()
            .filter(|rec| rec.is_traversable())
            .map(|rec| (rec.neighbor, rec.weight))
    }

    /// Returns the position of the record pointing to `neighbor`, if any
    pub(crate) fn position_of(&self, neighbor: NodeId) -> Option<usize> {
        self.adjacency.iter().position(|rec| rec.neighbor == neighbor)
    }

    /// Returns the record pointing to `neighbor`, if any
    pub fn record_to(&self, neighbor: NodeId) -> Option<&AdjacencyRecord> {
        self.adjacency.iter().find(|rec| rec.neighbor == neighbor)
    }

    pub(crate) fn record_at_mut(&mut self, idx: usize) -> &mut AdjacencyRecord {
        &mut self.adjacency[idx]
    }

    pub(crate) fn push_record(&mut self, record: AdjacencyRecord) {
        debug_assert!(self.position_of(record.neighbor).is_none());
        self.adjacency.push(record);
    }

    /// Removes the record pointing to `neighbor` and returns it.
    /// The relative order of the remaining records is kept.
    pub(crate) fn remove_record_to(&mut self, neighbor: NodeId) -> Option<AdjacencyRecord> {
        let idx = self.position_of(neighbor)?;
        Some(self.adjacency.remove(idx))
    }

    pub(crate) fn take_adjacency(&mut self) -> AdjacencyList {
        std::mem::take(&mut self.adjacency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(neighbor: NodeId, directed: bool) -> AdjacencyRecord {
        AdjacencyRecord {
            neighbor,
            weight: 1,
            link_id: neighbor,
            directed_from_this_node: directed,
        }
    }

    #[test]
    fn remove_keeps_order() {
        let mut node = Node::new(0);
        for v in [3, 1, 2] {
            node.push_record(record(v, true));
        }

        assert_eq!(node.remove_record_to(1).map(|r| r.neighbor), Some(1));
        assert_eq!(node.neighbors().collect::<Vec<_>>(), vec![3, 2]);
        assert!(node.remove_record_to(1).is_none());
    }

    #[test]
    fn traversable_filters_direction() {
        let mut node = Node::new(0);
        node.push_record(record(1, true));
        node.push_record(record(2, false));
        node.push_record(record(3, true));

        let out: Vec<_> = node.traversable_neighbors().map(|(v, _)| v).collect();
        assert_eq!(out, vec![1, 3]);
        assert_eq!(node.degree(), 3);
    }
}
