use itertools::Itertools;

use crate::{error::*, link::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of live nodes
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over all live node ids (in no particular order)
    fn vertices(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Returns all live node ids in ascending order
    fn ordered_vertices(&self) -> Vec<NodeId> {
        self.vertices().sorted_unstable().collect()
    }

    /// Returns *true* if `u` is a live node
    fn contains_node(&self, u: NodeId) -> bool;

    /// Returns *true* if the graph has no nodes (and thus no links)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only access to adjacency records.
///
/// This is all the stepwise algorithms ever see of the store, which keeps them from
/// mutating links or component membership.
pub trait AdjacencyView: GraphNodeOrder + Sized {
    /// Returns the node with id `u`, if it is live
    fn try_node(&self, u: NodeId) -> Option<&Node>;

    /// Returns the node with id `u` or [`GraphError::UnknownNode`]
    fn node_ref(&self, u: NodeId) -> Result<&Node> {
        self.try_node(u).ok_or(GraphError::UnknownNode(u))
    }

    /// Returns an iterator over all neighbors of `u`, ignoring direction.
    /// Yields nothing if `u` is not live.
    fn neighbors_of(&self, u: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.try_node(u).into_iter().flat_map(|node| node.neighbors())
    }

    /// Returns an iterator over `(neighbor, weight)` pairs that `u` may traverse to,
    /// in adjacency order. Yields nothing if `u` is not live.
    fn traversable_neighbors_of(&self, u: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.try_node(u)
            .into_iter()
            .flat_map(|node| node.traversable_neighbors())
    }

    /// Returns the number of links attached to `u` (0 if `u` is not live)
    fn degree_of(&self, u: NodeId) -> usize {
        self.try_node(u).map_or(0, |node| node.degree())
    }

    /// Returns *true* if `u` and `v` share a link (in any direction)
    fn has_link(&self, u: NodeId, v: NodeId) -> bool {
        self.try_node(u)
            .is_some_and(|node| node.record_to(v).is_some())
    }

    /// Returns *true* if an algorithm standing on `u` may move to `v`
    fn can_traverse(&self, u: NodeId, v: NodeId) -> bool {
        self.try_node(u)
            .and_then(|node| node.record_to(v))
            .is_some_and(|rec| rec.is_traversable())
    }

    /// Returns the weight of the link between `u` and `v`, if any
    fn weight_between(&self, u: NodeId, v: NodeId) -> Option<Weight> {
        self.try_node(u)
            .and_then(|node| node.record_to(v))
            .map(|rec| rec.weight)
    }
}
