/*!
# Component Store

[`GraphStore`] owns every node and keeps track of which connected component
(ignoring link direction) each node belongs to.

Components live in *slots*: `slots[i]` holds the head node of one component, or
`None` if the slot is open. Open slots are reused (oldest first) before the slot
vector grows. `membership` maps every live node to its slot, so looking up the
component of a node is `O(1)` regardless of component size.

Joining two components re-labels the component of the second endpoint.
Removing a link or deleting a node re-traverses the affected component and moves
every piece that got cut off into a fresh slot. All re-labeling uses an explicit
stack, so deep path-like components are fine.

```
use stepgraph::prelude::*;

let mut store = GraphStore::new();
let a = store.create_node();
let b = store.create_node();
let c = store.create_node();

store.join_nodes(a, b, 5, LinkKind::Doubly).unwrap();
store.join_nodes(b, c, 1, LinkKind::SinglyTo).unwrap();
assert_eq!(store.number_of_components(), 1);

store.unjoin_nodes(a, b).unwrap();
assert_eq!(store.number_of_components(), 2);
assert_eq!(store.component_of(b), store.component_of(c));
```
*/

mod components;

use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, error, trace};

use crate::{error::*, link::*, node::*, ops::*};

pub use components::*;

/// Index into the slot vector
pub type SlotIdx = usize;

/// Runtime knobs of a [`GraphStore`], configured via setters before the store is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    verify_lookups: bool,
    slot_capacity: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            verify_lookups: false,
            slot_capacity: 16,
        }
    }
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// If set, [`GraphStore::find_node`] additionally confirms that the node is
    /// reachable from the head of its slot.
    pub fn verify_lookups(mut self, verify: bool) -> Self {
        self.verify_lookups = verify;
        self
    }

    /// Number of slots reserved up front
    pub fn slot_capacity(mut self, capacity: usize) -> Self {
        self.slot_capacity = capacity;
        self
    }

    /// Returns *true* if lookups are verified against the slot head
    pub fn verifies_lookups(&self) -> bool {
        self.verify_lookups
    }
}

/// Dynamic collection of nodes and weighted links with component tracking.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: FxHashMap<NodeId, Node>,
    slots: Vec<Option<NodeId>>,
    open_slots: VecDeque<SlotIdx>,
    membership: FxHashMap<NodeId, SlotIdx>,
    registry: LinkRegistry,
    num_links: usize,
    options: StoreOptions,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::with_options(StoreOptions::default())
    }
}

impl GraphStore {
    /// Creates an empty store with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given options
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            nodes: FxHashMap::default(),
            slots: Vec::with_capacity(options.slot_capacity),
            open_slots: VecDeque::new(),
            membership: FxHashMap::default(),
            registry: LinkRegistry::new(),
            num_links: 0,
            options,
        }
    }

    /// Returns the options this store was built with
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Creates a new singleton node and returns its id.
    ///
    /// The node becomes the head of the oldest open slot, or of a newly appended one.
    pub fn create_node(&mut self) -> NodeId {
        let id = self.registry.issue_node_id();
        self.nodes.insert(id, Node::new(id));
        let slot = self.allocate_slot(id);
        self.membership.insert(id, slot);

        debug!(node = id, slot, "created node");
        id
    }

    /// Links `a` and `b` with the given weight and kind and returns the link id.
    ///
    /// - If `a` and `b` live in different components, the component of `b` is merged into
    ///   the slot of `a` and the slot of `b` is freed.
    /// - If the two nodes are already linked, no new link is created: the stored records are
    ///   rewritten to the requested kind and weight and the existing link id is returned.
    ///
    /// # Errors
    /// - [`GraphError::InvalidArgument`] if `a == b`
    /// - [`GraphError::UnknownNode`] if either node is not live
    pub fn join_nodes(
        &mut self,
        a: NodeId,
        b: NodeId,
        weight: Weight,
        kind: LinkKind,
    ) -> Result<LinkId> {
        if a == b {
            return Err(GraphError::invalid(format!("cannot join node {a} with itself")));
        }
        let slot_a = self.component_of(a)?;
        let slot_b = self.component_of(b)?;
        let existing = self.record_positions(a, b)?;

        if slot_a != slot_b {
            debug_assert!(existing.is_none());
            let mut visited = FxHashSet::default();
            let moved = self.relabel_from(b, slot_a, &mut visited);
            self.free_slot(slot_b);
            debug!(into = slot_a, freed = slot_b, moved, "merged components");
        }

        let (flag_a, flag_b) = kind.flags();
        let link_id = match existing {
            Some((idx_a, idx_b)) => {
                let link_id = self.update_record(a, idx_a, weight, flag_a)?;
                self.update_record(b, idx_b, weight, flag_b)?;
                debug!(a, b, link = link_id, weight, ?kind, "updated link");
                link_id
            }
            None => {
                let link_id = self.registry.issue_link_id();
                self.node_mut(a)?.push_record(AdjacencyRecord {
                    neighbor: b,
                    weight,
                    link_id,
                    directed_from_this_node: flag_a,
                });
                self.node_mut(b)?.push_record(AdjacencyRecord {
                    neighbor: a,
                    weight,
                    link_id,
                    directed_from_this_node: flag_b,
                });
                self.num_links += 1;
                debug!(a, b, link = link_id, weight, ?kind, "joined nodes");
                link_id
            }
        };

        Ok(link_id)
    }

    /// Removes the link between `a` and `b`.
    ///
    /// Returns `Ok(false)` without touching anything if the nodes live in different
    /// components or are not linked. If removing the link disconnects the component,
    /// the piece that does not contain the component head moves into a new slot.
    ///
    /// # Errors
    /// - [`GraphError::InvalidArgument`] if `a == b`
    /// - [`GraphError::UnknownNode`] if either node is not live
    pub fn unjoin_nodes(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        if a == b {
            return Err(GraphError::invalid(format!("cannot unjoin node {a} from itself")));
        }
        let slot = self.component_of(a)?;
        if slot != self.component_of(b)? {
            return Ok(false);
        }
        if self.record_positions(a, b)?.is_none() {
            return Ok(false);
        }

        self.node_mut(a)?.remove_record_to(b);
        self.node_mut(b)?.remove_record_to(a);
        self.num_links -= 1;

        let reach_a = self.undirected_reach(a);
        if reach_a.contains(&b) {
            debug!(a, b, slot, "unjoined nodes, component still connected");
            return Ok(true);
        }

        let head = self.slots[slot]
            .ok_or_else(|| GraphError::precondition(format!("slot {slot} of node {a} is open")))?;
        let mover = if reach_a.contains(&head) { b } else { a };

        let new_slot = self.allocate_slot(mover);
        let mut visited = FxHashSet::default();
        let moved = self.relabel_from(mover, new_slot, &mut visited);
        debug!(a, b, from = slot, to = new_slot, moved, "unjoined nodes, component split");

        Ok(true)
    }

    /// Deletes node `n` together with all its links.
    ///
    /// Every former neighbor that is not already covered by an earlier neighbor heads a
    /// fresh slot holding everything still reachable from it. The slot of `n` is freed.
    ///
    /// # Errors
    /// - [`GraphError::UnknownNode`] if `n` is not live
    pub fn delete_node(&mut self, n: NodeId) -> Result<()> {
        let slot = self.component_of(n)?;
        let records = self.node_mut(n)?.take_adjacency();

        for rec in &records {
            if let Some(neighbor) = self.nodes.get_mut(&rec.neighbor) {
                neighbor.remove_record_to(n);
            }
        }
        self.num_links -= records.len();

        let mut visited = FxHashSet::default();
        visited.insert(n);
        let mut fan_out = 0;
        for rec in &records {
            if visited.contains(&rec.neighbor) {
                continue;
            }
            let new_slot = self.allocate_slot(rec.neighbor);
            let moved = self.relabel_from(rec.neighbor, new_slot, &mut visited);
            trace!(head = rec.neighbor, slot = new_slot, moved, "re-homed piece of deleted node");
            fan_out += 1;
        }

        self.free_slot(slot);
        self.membership.remove(&n);
        self.nodes.remove(&n);

        debug!(node = n, slot, links = records.len(), fan_out, "deleted node");
        Ok(())
    }

    /// Looks up a node by id in `O(1)`.
    ///
    /// With [`StoreOptions::verify_lookups`] set, the node is also confirmed to be
    /// reachable from the head of its slot.
    pub fn find_node(&self, id: NodeId) -> Result<&Node> {
        let slot = self.component_of(id)?;

        if self.options.verify_lookups {
            let head = self.slots.get(slot).copied().flatten();
            let consistent = head.is_some_and(|head| self.undirected_reach(head).contains(&id));
            if !consistent {
                error!(node = id, slot, ?head, "node is not reachable from its slot head");
                return Err(GraphError::precondition(format!(
                    "node {id} is not reachable from the head of slot {slot}"
                )));
            }
        }

        self.node_ref(id)
    }

    /// Sets the weight of the existing link between `a` and `b` on both records.
    ///
    /// # Errors
    /// - [`GraphError::UnknownNode`] if either node is not live
    /// - [`GraphError::InvalidArgument`] if `a == b` or the nodes are not linked
    pub fn set_link_weight(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<()> {
        if a == b {
            return Err(GraphError::invalid(format!("node {a} has no link to itself")));
        }
        self.component_of(a)?;
        self.component_of(b)?;

        let Some((idx_a, idx_b)) = self.record_positions(a, b)? else {
            return Err(GraphError::invalid(format!("nodes {a} and {b} are not linked")));
        };
        self.node_mut(a)?.record_at_mut(idx_a).weight = weight;
        self.node_mut(b)?.record_at_mut(idx_b).weight = weight;

        debug!(a, b, weight, "updated link weight");
        Ok(())
    }

    /// Returns all live node ids in ascending order
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.ordered_vertices()
    }

    /// Returns the slot holding the component of `u`
    pub fn component_of(&self, u: NodeId) -> Result<SlotIdx> {
        self.membership
            .get(&u)
            .copied()
            .ok_or(GraphError::UnknownNode(u))
    }

    /// Returns the head node of slot `slot`, or `None` if the slot is open or out of range
    pub fn head_of(&self, slot: SlotIdx) -> Option<NodeId> {
        self.slots.get(slot).copied().flatten()
    }

    /// Returns the raw slot vector; `None` entries are open slots
    pub fn slot_heads(&self) -> &[Option<NodeId>] {
        &self.slots
    }

    /// Returns the open slots in the order they will be reused
    pub fn open_slots(&self) -> impl Iterator<Item = SlotIdx> + '_ {
        self.open_slots.iter().copied()
    }

    /// Returns the number of components (occupied slots)
    pub fn number_of_components(&self) -> usize {
        self.slots.len() - self.open_slots.len()
    }

    /// Returns the number of links
    pub fn number_of_links(&self) -> usize {
        self.num_links
    }

    /// Returns *true* if `a` and `b` belong to the same component
    pub fn same_component(&self, a: NodeId, b: NodeId) -> Result<bool> {
        Ok(self.component_of(a)? == self.component_of(b)?)
    }

    /// Returns the link between `a` and `b`, if any
    pub fn link_between(&self, a: NodeId, b: NodeId) -> Option<LinkView> {
        let rec_a = self.try_node(a)?.record_to(b)?;
        let rec_b = self.try_node(b)?.record_to(a)?;
        Some(link_view(a, rec_a, rec_b))
    }

    /// Returns every link exactly once, ordered by link id
    pub fn links(&self) -> Vec<LinkView> {
        let mut links: Vec<LinkView> = self
            .nodes
            .values()
            .flat_map(|node| {
                node.adjacency()
                    .iter()
                    .filter(move |rec| node.id() < rec.neighbor)
                    .filter_map(move |rec| self.link_between(node.id(), rec.neighbor))
            })
            .collect();
        links.sort_unstable_by_key(|link| link.id);
        links
    }

    fn allocate_slot(&mut self, head: NodeId) -> SlotIdx {
        if let Some(slot) = self.open_slots.pop_front() {
            debug_assert!(self.slots[slot].is_none());
            self.slots[slot] = Some(head);
            slot
        } else {
            self.slots.push(Some(head));
            self.slots.len() - 1
        }
    }

    fn free_slot(&mut self, slot: SlotIdx) {
        debug_assert!(self.slots[slot].is_some());
        self.slots[slot] = None;
        self.open_slots.push_back(slot);
    }

    fn node_mut(&mut self, u: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(&u).ok_or(GraphError::UnknownNode(u))
    }

    /// Positions of the records `a -> b` and `b -> a`, if the nodes are linked.
    /// A one-sided link is reported as an error before anything is mutated.
    fn record_positions(&self, a: NodeId, b: NodeId) -> Result<Option<(usize, usize)>> {
        let idx_a = self.node_ref(a)?.position_of(b);
        let idx_b = self.node_ref(b)?.position_of(a);
        match (idx_a, idx_b) {
            (Some(idx_a), Some(idx_b)) => Ok(Some((idx_a, idx_b))),
            (None, None) => Ok(None),
            _ => Err(GraphError::precondition(format!(
                "link between {a} and {b} is only recorded on one endpoint"
            ))),
        }
    }

    fn update_record(
        &mut self,
        u: NodeId,
        idx: usize,
        weight: Weight,
        directed: bool,
    ) -> Result<LinkId> {
        let rec = self.node_mut(u)?.record_at_mut(idx);
        rec.weight = weight;
        rec.directed_from_this_node = directed;
        Ok(rec.link_id)
    }
}

/// Builds the canonical view of a link from both of its records
fn link_view(a: NodeId, rec_a: &AdjacencyRecord, rec_b: &AdjacencyRecord) -> LinkView {
    let b = rec_a.neighbor;
    let ((from, rec_from), (to, rec_to)) = if rec_a.is_traversable() {
        ((a, rec_a), (b, rec_b))
    } else {
        ((b, rec_b), (a, rec_a))
    };
    let kind = LinkKind::from_flags(rec_from.is_traversable(), rec_to.is_traversable())
        .unwrap_or_default();
    let (from, to) = match kind {
        LinkKind::Doubly => (from.min(to), from.max(to)),
        LinkKind::SinglyTo => (from, to),
    };
    LinkView {
        id: rec_a.link_id,
        from,
        to,
        weight: rec_a.weight,
        kind,
    }
}

impl GraphNodeOrder for GraphStore {
    fn number_of_nodes(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    fn contains_node(&self, u: NodeId) -> bool {
        self.nodes.contains_key(&u)
    }
}

impl AdjacencyView for GraphStore {
    fn try_node(&self, u: NodeId) -> Option<&Node> {
        self.nodes.get(&u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;

    #[test]
    fn create_reuses_open_slots_first() {
        let mut store = GraphStore::new();
        let nodes = (0..4).map(|_| store.create_node()).collect_vec();
        assert_eq!(nodes, vec![0, 1, 2, 3]);
        assert_eq!(store.number_of_components(), 4);

        store.join_nodes(0, 1, 1, LinkKind::Doubly).unwrap();
        store.join_nodes(0, 2, 1, LinkKind::Doubly).unwrap();
        assert_eq!(store.open_slots().collect_vec(), vec![1, 2]);

        let fresh = store.create_node();
        assert_eq!(fresh, 4);
        assert_eq!(store.component_of(fresh).unwrap(), 1);
        assert_eq!(store.open_slots().collect_vec(), vec![2]);
        assert_consistent(&store);
    }

    #[test]
    fn join_merges_into_first_slot() {
        let mut store = store_with_nodes(4);
        store.join_nodes(2, 3, 7, LinkKind::Doubly).unwrap();
        store.join_nodes(0, 2, 1, LinkKind::Doubly).unwrap();

        let slot = store.component_of(0).unwrap();
        assert_eq!(slot, 0);
        for u in [0, 2, 3] {
            assert_eq!(store.component_of(u).unwrap(), slot);
        }
        assert_ne!(store.component_of(1).unwrap(), slot);
        assert_eq!(store.number_of_components(), 2);
        assert_consistent(&store);
    }

    #[test]
    fn join_is_idempotent() {
        let mut store = store_with_nodes(2);
        let first = store.join_nodes(0, 1, 4, LinkKind::Doubly).unwrap();
        let second = store.join_nodes(0, 1, 4, LinkKind::Doubly).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.number_of_links(), 1);
        assert_eq!(store.find_node(0).unwrap().degree(), 1);
        assert_eq!(store.find_node(1).unwrap().degree(), 1);
        assert_eq!(store.weight_between(0, 1), Some(4));
        assert_eq!(store.weight_between(1, 0), Some(4));
        assert_consistent(&store);
    }

    #[test]
    fn rejoin_updates_weight_and_kind() {
        let mut store = store_with_nodes(2);
        store.join_nodes(0, 1, 4, LinkKind::Doubly).unwrap();

        store.join_nodes(0, 1, 9, LinkKind::Doubly).unwrap();
        assert_eq!(store.weight_between(1, 0), Some(9));

        store.join_nodes(1, 0, 9, LinkKind::SinglyTo).unwrap();
        assert!(store.can_traverse(1, 0));
        assert!(!store.can_traverse(0, 1));

        let link = store.link_between(0, 1).unwrap();
        assert_eq!((link.from, link.to, link.kind), (1, 0, LinkKind::SinglyTo));
        assert_eq!(store.number_of_links(), 1);
        assert_consistent(&store);
    }

    #[test]
    fn split_on_path() {
        // A - B - C
        let mut store = store_with_links(3, &[(0, 1, 1), (1, 2, 1)]);
        assert_eq!(store.number_of_components(), 1);

        assert!(store.unjoin_nodes(0, 1).unwrap());
        assert_eq!(store.number_of_components(), 2);
        assert!(!store.same_component(0, 1).unwrap());
        assert!(store.same_component(1, 2).unwrap());
        assert_consistent(&store);

        assert!(store.unjoin_nodes(1, 2).unwrap());
        assert_eq!(store.number_of_components(), 3);
        assert!(!store.same_component(1, 2).unwrap());
        assert_consistent(&store);
    }

    #[test]
    fn split_moves_piece_without_head() {
        // 0 is the head; cutting 1-2 must move {2, 3} and keep {0, 1} in place
        let mut store = store_with_links(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
        let slot = store.component_of(0).unwrap();

        assert!(store.unjoin_nodes(2, 1).unwrap());
        assert_eq!(store.component_of(1).unwrap(), slot);
        assert_ne!(store.component_of(2).unwrap(), slot);
        assert_eq!(store.component_of(2).unwrap(), store.component_of(3).unwrap());
        assert_eq!(store.head_of(slot), Some(0));
        assert_consistent(&store);
    }

    #[test]
    fn unjoin_on_cycle_keeps_component() {
        let mut store = store_with_links(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        assert!(store.unjoin_nodes(0, 1).unwrap());
        assert_eq!(store.number_of_components(), 1);
        assert_eq!(store.number_of_links(), 2);
        assert_consistent(&store);
    }

    #[test]
    fn unjoin_tolerates_missing_links() {
        let mut store = store_with_links(4, &[(0, 1, 1), (1, 2, 1)]);

        assert!(!store.unjoin_nodes(0, 2).unwrap());
        assert!(!store.unjoin_nodes(0, 3).unwrap());
        assert_eq!(store.number_of_links(), 2);
        assert_eq!(store.number_of_components(), 2);
        assert_consistent(&store);
    }

    #[test]
    fn delete_fans_out_into_singletons() {
        // star with center 0 and leaves 1..=4 that are not linked among each other
        let mut store = store_with_links(5, &[(0, 1, 1), (0, 2, 1), (0, 3, 1), (0, 4, 1)]);
        store.delete_node(0).unwrap();

        assert!(!store.contains_node(0));
        assert_eq!(store.number_of_components(), 4);
        assert_eq!(store.number_of_links(), 0);
        for (a, b) in (1..=4).tuple_combinations() {
            assert!(!store.same_component(a, b).unwrap());
        }
        assert_consistent(&store);
    }

    #[test]
    fn delete_keeps_connected_leaves_together() {
        let mut links = vec![(0, 1, 1), (0, 2, 1), (0, 3, 1), (0, 4, 1)];
        links.extend((1..=4).tuple_combinations().map(|(a, b)| (a, b, 2)));
        let mut store = store_with_links(5, &links);

        store.delete_node(0).unwrap();
        assert_eq!(store.number_of_components(), 1);
        assert_eq!(store.number_of_links(), 6);
        let slot = store.component_of(1).unwrap();
        assert!((2..=4).all(|u| store.component_of(u).unwrap() == slot));
        assert_consistent(&store);
    }

    #[test]
    fn delete_isolated_node_vanishes() {
        let mut store = store_with_nodes(3);
        store.delete_node(1).unwrap();

        assert_eq!(store.number_of_nodes(), 2);
        assert_eq!(store.number_of_components(), 2);
        assert_eq!(store.open_slots().collect_vec(), vec![1]);
        assert_eq!(store.find_node(1), Err(GraphError::UnknownNode(1)));
        assert_consistent(&store);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut store = store_with_nodes(2);
        store.delete_node(1).unwrap();
        assert_eq!(store.create_node(), 2);
    }

    #[test]
    fn rejected_operations_leave_store_untouched() {
        let mut store = store_with_links(4, &[(0, 1, 1), (2, 3, 1)]);
        let before = StoreFingerprint::of(&store);

        assert!(matches!(
            store.join_nodes(1, 1, 1, LinkKind::Doubly),
            Err(GraphError::InvalidArgument(_))
        ));
        assert_eq!(
            store.join_nodes(0, 42, 1, LinkKind::Doubly),
            Err(GraphError::UnknownNode(42))
        );
        assert!(matches!(store.unjoin_nodes(2, 2), Err(GraphError::InvalidArgument(_))));
        assert_eq!(store.unjoin_nodes(9, 2), Err(GraphError::UnknownNode(9)));
        assert_eq!(store.delete_node(17), Err(GraphError::UnknownNode(17)));
        assert!(matches!(store.set_link_weight(0, 2, 5), Err(GraphError::InvalidArgument(_))));

        assert_eq!(StoreFingerprint::of(&store), before);
        assert_consistent(&store);
    }

    #[test]
    fn set_link_weight_updates_both_records() {
        let mut store = store_with_links(2, &[(0, 1, 3)]);
        store.set_link_weight(1, 0, 8).unwrap();
        assert_eq!(store.weight_between(0, 1), Some(8));
        assert_eq!(store.weight_between(1, 0), Some(8));
    }

    #[test]
    fn verified_lookup() {
        let mut store = GraphStore::with_options(StoreOptions::new().verify_lookups(true));
        let a = store.create_node();
        let b = store.create_node();
        store.join_nodes(a, b, 1, LinkKind::SinglyTo).unwrap();

        assert!(store.options().verifies_lookups());
        assert_eq!(store.find_node(b).unwrap().id(), b);
        assert_eq!(store.find_node(7), Err(GraphError::UnknownNode(7)));
    }

    #[test]
    fn links_are_listed_once() {
        let mut store = store_with_links(3, &[(0, 1, 4), (2, 1, 6)]);
        store.join_nodes(2, 0, 1, LinkKind::SinglyTo).unwrap();

        let links = store.links();
        assert_eq!(links.len(), 3);
        assert_eq!(links.iter().map(|l| l.id).collect_vec(), vec![0, 1, 2]);
        assert_eq!((links[1].from, links[1].to, links[1].kind), (1, 2, LinkKind::Doubly));
        assert_eq!((links[2].from, links[2].to, links[2].kind), (2, 0, LinkKind::SinglyTo));
    }
}
