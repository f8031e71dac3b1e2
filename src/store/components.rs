use super::*;

/// A connected component as listed by [`GraphStore::get_all_components`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Slot the component lives in
    pub slot: SlotIdx,
    /// Head node of the slot
    pub head: NodeId,
    /// All members in depth-first order starting at the head
    pub members: Vec<NodeId>,
}

impl Component {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, u: NodeId) -> bool {
        self.members.contains(&u)
    }
}

/// Iterator over all occupied slots of a [`GraphStore`], in slot order
pub struct Components<'a> {
    store: &'a GraphStore,
    slot: SlotIdx,
}

impl Iterator for Components<'_> {
    type Item = Component;

    fn next(&mut self) -> Option<Self::Item> {
        while self.slot < self.store.slots.len() {
            let slot = self.slot;
            self.slot += 1;

            if let Some(head) = self.store.slots[slot] {
                return Some(Component {
                    slot,
                    head,
                    members: self.store.depth_first_members(head),
                });
            }
        }
        None
    }
}

impl GraphStore {
    /// Returns an iterator over all components in slot order
    pub fn components(&self) -> Components<'_> {
        Components {
            store: self,
            slot: 0,
        }
    }

    /// Lists every component with its members in depth-first order from the head.
    /// Open slots are skipped.
    pub fn get_all_components(&self) -> Vec<Component> {
        self.components().collect()
    }

    /// Returns all nodes reachable from `start`, ignoring link direction
    pub fn undirected_reach(&self, start: NodeId) -> FxHashSet<NodeId> {
        let mut visited = FxHashSet::default();
        if !self.contains_node(start) {
            return visited;
        }

        let mut stack = vec![start];
        visited.insert(start);
        while let Some(u) = stack.pop() {
            for v in self.neighbors_of(u) {
                if visited.insert(v) {
                    stack.push(v);
                }
            }
        }
        visited
    }

    /// Moves everything reachable from `start` that is not yet in `visited` into `slot`.
    /// Returns the number of re-labeled nodes.
    pub(super) fn relabel_from(
        &mut self,
        start: NodeId,
        slot: SlotIdx,
        visited: &mut FxHashSet<NodeId>,
    ) -> usize {
        if !visited.insert(start) {
            return 0;
        }

        let mut stack = vec![start];
        let mut count = 0;
        while let Some(u) = stack.pop() {
            self.membership.insert(u, slot);
            count += 1;

            if let Some(node) = self.nodes.get(&u) {
                stack.extend(node.neighbors().filter(|&v| visited.insert(v)));
            }
        }

        trace!(start, slot, count, "re-labeled nodes");
        count
    }

    /// Pre-order depth-first walk from `head` following adjacency order.
    /// Frames are `(node, next adjacency index)` so no recursion is needed.
    fn depth_first_members(&self, head: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut visited = FxHashSet::default();
        let mut frames: Vec<(NodeId, usize)> = Vec::new();

        if self.contains_node(head) {
            visited.insert(head);
            order.push(head);
            frames.push((head, 0));
        }

        while let Some(frame) = frames.last_mut() {
            let (u, idx) = *frame;
            frame.1 += 1;
            let next = self
                .try_node(u)
                .and_then(|node| node.adjacency().get(idx))
                .map(|rec| rec.neighbor);

            match next {
                Some(v) if visited.insert(v) => {
                    order.push(v);
                    frames.push((v, 0));
                }
                Some(_) => {}
                None => {
                    frames.pop();
                }
            }
        }

        order
    }

    /// Verifies every structural invariant of the store:
    /// - membership covers exactly the live nodes
    /// - open slots are exactly the `None` entries, each listed once
    /// - every slot head is a member of its own slot and reaches exactly the nodes labeled with it
    /// - every link is recorded on both endpoints with equal id and weight and at least one
    ///   traversable side
    ///
    /// # Errors
    /// Returns [`GraphError::PreconditionViolated`] describing the first violation found.
    pub fn check_consistency(&self) -> Result<()> {
        let fail = |msg: String| Err(GraphError::precondition(msg));

        if self.membership.len() != self.nodes.len() {
            return fail(format!(
                "{} nodes but {} membership entries",
                self.nodes.len(),
                self.membership.len()
            ));
        }
        for (&u, &slot) in &self.membership {
            if !self.nodes.contains_key(&u) {
                return fail(format!("membership lists dead node {u}"));
            }
            if self.head_of(slot).is_none() {
                return fail(format!("node {u} is labeled with open slot {slot}"));
            }
        }

        let mut seen_open = FxHashSet::default();
        for slot in self.open_slots() {
            if !seen_open.insert(slot) {
                return fail(format!("slot {slot} is listed as open twice"));
            }
            if slot >= self.slots.len() || self.slots[slot].is_some() {
                return fail(format!("slot {slot} is listed as open but occupied"));
            }
        }
        let num_empty = self.slots.iter().filter(|slot| slot.is_none()).count();
        if num_empty != seen_open.len() {
            return fail(format!(
                "{num_empty} empty slots but {} open slots",
                seen_open.len()
            ));
        }

        let mut covered = 0;
        for (slot, head) in self.slots.iter().enumerate() {
            let Some(head) = *head else { continue };
            if self.membership.get(&head) != Some(&slot) {
                return fail(format!("head {head} of slot {slot} is labeled elsewhere"));
            }
            for u in self.undirected_reach(head) {
                if self.membership.get(&u) != Some(&slot) {
                    return fail(format!(
                        "node {u} is reachable from head {head} but not in slot {slot}"
                    ));
                }
                covered += 1;
            }
        }
        if covered != self.nodes.len() {
            return fail(format!(
                "{covered} of {} nodes are reachable from their slot head",
                self.nodes.len()
            ));
        }

        let mut num_records = 0;
        for node in self.nodes.values() {
            let u = node.id();
            for (idx, rec) in node.adjacency().iter().enumerate() {
                let v = rec.neighbor;
                if v == u {
                    return fail(format!("node {u} is linked to itself"));
                }
                if node.position_of(v) != Some(idx) {
                    return fail(format!("node {u} has two records for {v}"));
                }
                let Some(back) = self.try_node(v).and_then(|other| other.record_to(u)) else {
                    return fail(format!("link {u}-{v} is not recorded on {v}"));
                };
                if back.link_id != rec.link_id || back.weight != rec.weight {
                    return fail(format!("records of link {u}-{v} disagree"));
                }
                if !back.is_traversable() && !rec.is_traversable() {
                    return fail(format!("link {u}-{v} is traversable from neither side"));
                }
                num_records += 1;
            }
        }
        if num_records != 2 * self.num_links {
            return fail(format!(
                "{num_records} adjacency records for {} links",
                self.num_links
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn components_skip_open_slots() {
        let mut store = store_with_links(5, &[(0, 1, 1), (3, 4, 1)]);
        let comps = store.get_all_components();
        assert_eq!(comps.len(), 3);
        assert_eq!(comps.iter().map(|c| c.slot).collect::<Vec<_>>(), vec![0, 2, 3]);

        store.delete_node(2).unwrap();
        let comps = store.get_all_components();
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].members, vec![0, 1]);
        assert_eq!(comps[1].head, 3);
        assert_eq!(comps[1].members, vec![3, 4]);
    }

    #[test]
    fn members_in_depth_first_order() {
        //   0 - 1 - 3
        //   |
        //   2 - 4
        let store = store_with_links(5, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 4, 1)]);
        let comps = store.get_all_components();
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].members, vec![0, 1, 3, 2, 4]);
        assert!(comps[0].contains(4));
        assert_eq!(comps[0].len(), 5);
    }

    #[test]
    fn members_ignore_direction() {
        let mut store = store_with_nodes(3);
        store.join_nodes(1, 0, 1, LinkKind::SinglyTo).unwrap();
        store.join_nodes(2, 1, 1, LinkKind::SinglyTo).unwrap();

        let comps = store.get_all_components();
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].head, 2);
        assert_eq!(comps[0].members, vec![2, 1, 0]);
    }

    #[test]
    fn long_path_relabels_without_recursion() {
        let n = 20_000;
        let links: Vec<_> = (1..n).map(|u| (u - 1, u, 1)).collect();
        let mut store = store_with_links(n, &links);
        assert_eq!(store.number_of_components(), 1);

        store.unjoin_nodes(n / 2, n / 2 - 1).unwrap();
        assert_eq!(store.number_of_components(), 2);
        assert_eq!(store.undirected_reach(0).len(), (n / 2) as usize);
        assert_consistent(&store);
    }

    #[test]
    fn detects_broken_membership() {
        let mut store = store_with_links(3, &[(0, 1, 1)]);
        assert!(store.check_consistency().is_ok());

        store.membership.insert(1, 2);
        assert!(matches!(
            store.check_consistency(),
            Err(GraphError::PreconditionViolated(_))
        ));
    }

    #[test]
    fn detects_one_sided_link() {
        let mut store = store_with_links(2, &[(0, 1, 1)]);
        store.nodes.get_mut(&1).unwrap().remove_record_to(0);
        assert!(store.check_consistency().is_err());
    }

    #[test]
    fn verified_lookup_reports_broken_slot() {
        let mut store = GraphStore::with_options(StoreOptions::new().verify_lookups(true));
        for _ in 0..3 {
            store.create_node();
        }
        store.membership.insert(2, 0);
        assert!(matches!(store.find_node(2), Err(GraphError::PreconditionViolated(_))));
    }

    #[test]
    fn random_operations_keep_invariants() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed_1234);

        for _ in 0..30 {
            let mut store = GraphStore::new();
            for _ in 0..300 {
                let live = store.ordered_vertices();
                match rng.random_range(0..10) {
                    0..=2 => {
                        store.create_node();
                    }
                    3..=6 if live.len() >= 2 => {
                        let a = live[rng.random_range(0..live.len())];
                        let b = live[rng.random_range(0..live.len())];
                        let kind = if rng.random_bool(0.5) {
                            LinkKind::Doubly
                        } else {
                            LinkKind::SinglyTo
                        };
                        let res = store.join_nodes(a, b, rng.random_range(0..20), kind);
                        assert_eq!(res.is_err(), a == b);
                        if a != b {
                            assert!(store.same_component(a, b).unwrap());
                        }
                    }
                    7..=8 if !live.is_empty() => {
                        let a = live[rng.random_range(0..live.len())];
                        let neighbors: Vec<_> = store.neighbors_of(a).collect();
                        if let Some(&b) = neighbors.first() {
                            assert!(store.unjoin_nodes(a, b).unwrap());
                            assert!(!store.has_link(a, b));
                        }
                    }
                    9 if !live.is_empty() => {
                        let a = live[rng.random_range(0..live.len())];
                        store.delete_node(a).unwrap();
                        assert!(!store.contains_node(a));
                    }
                    _ => {}
                }

                assert_consistent(&store);
                assert_components_match_reachability(&store);
            }
        }
    }
}
