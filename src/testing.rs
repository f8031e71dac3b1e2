//! Shared helpers for the unit tests of this crate
#![cfg(test)]

use fxhash::FxHashMap;
use itertools::Itertools;
use rand::Rng;

use crate::{link::*, node::*, ops::*, store::*};

/// Creates a store with `n` singleton nodes `0..n`
pub(crate) fn store_with_nodes(n: NumNodes) -> GraphStore {
    let mut store = GraphStore::new();
    for u in 0..n {
        assert_eq!(store.create_node(), u);
    }
    store
}

/// Creates a store with nodes `0..n` and the given doubly links, joined in order
pub(crate) fn store_with_links(n: NumNodes, links: &[(NodeId, NodeId, Weight)]) -> GraphStore {
    let mut store = store_with_nodes(n);
    for &(u, v, w) in links {
        store.join_nodes(u, v, w, LinkKind::Doubly).unwrap();
    }
    store
}

/// Creates a store with `n` nodes and up to `m` random links.
/// Each link is singly with probability `singly_prob`.
pub(crate) fn random_store<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m: usize,
    singly_prob: f64,
) -> GraphStore {
    let mut store = store_with_nodes(n);
    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v {
            continue;
        }
        let kind = if rng.random_bool(singly_prob) {
            LinkKind::SinglyTo
        } else {
            LinkKind::Doubly
        };
        store.join_nodes(u, v, rng.random_range(0..20), kind).unwrap();
    }
    store
}

pub(crate) fn assert_consistent(store: &GraphStore) {
    if let Err(err) = store.check_consistency() {
        panic!("store is inconsistent: {err}\n{store:?}");
    }
}

/// Two nodes share a slot iff they are connected when ignoring direction
pub(crate) fn assert_components_match_reachability(store: &GraphStore) {
    for u in store.ordered_vertices() {
        let reach = store.undirected_reach(u);
        for v in store.ordered_vertices() {
            assert_eq!(
                store.same_component(u, v).unwrap(),
                reach.contains(&v),
                "nodes {u} and {v}"
            );
        }
    }
}

/// Observable component bookkeeping of a store, for before/after comparisons
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct StoreFingerprint {
    slots: Vec<Option<NodeId>>,
    open: Vec<SlotIdx>,
    membership: Vec<(NodeId, SlotIdx)>,
    links: Vec<LinkView>,
}

impl StoreFingerprint {
    pub(crate) fn of(store: &GraphStore) -> Self {
        Self {
            slots: store.slot_heads().to_vec(),
            open: store.open_slots().collect(),
            membership: store
                .ordered_vertices()
                .into_iter()
                .map(|u| (u, store.component_of(u).unwrap()))
                .collect(),
            links: store.links(),
        }
    }
}

/// Bellman-Ford over all traversable records; only reachable nodes are returned
pub(crate) fn shortest_distances(store: &GraphStore, start: NodeId) -> FxHashMap<NodeId, Distance> {
    let arcs = store
        .ordered_vertices()
        .into_iter()
        .flat_map(|u| {
            store
                .traversable_neighbors_of(u)
                .map(move |(v, w)| (u, v, w as Distance))
                .collect_vec()
        })
        .collect_vec();

    let mut dist = FxHashMap::default();
    dist.insert(start, 0);
    for _ in 0..store.len() {
        let mut changed = false;
        for &(u, v, w) in &arcs {
            let Some(&du) = dist.get(&u) else { continue };
            if dist.get(&v).is_none_or(|&dv| du + w < dv) {
                dist.insert(v, du + w);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

/// Number of links on a shortest directed path, for every reachable node
pub(crate) fn hop_distances(store: &GraphStore, start: NodeId) -> FxHashMap<NodeId, usize> {
    let mut hops = FxHashMap::default();
    hops.insert(start, 0);
    let mut layer = vec![start];
    let mut depth = 0;

    while !layer.is_empty() {
        depth += 1;
        let next = layer
            .iter()
            .flat_map(|&u| store.traversable_neighbors_of(u).map(|(v, _)| v))
            .unique()
            .filter(|v| !hops.contains_key(v))
            .collect_vec();
        for &v in &next {
            hops.insert(v, depth);
        }
        layer = next;
    }
    hops
}
