/*!
`stepgraph` is a dynamic graph store with connected-component tracking, together with
stepwise versions of BFS, DFS and Dijkstra that can be replayed one visible step at a time.
It is meant to sit underneath an interactive graph editor/visualizer.

# Representation

Nodes are identified by opaque `u32` ids handed out by the store; ids are never reused.
Every node owns an ordered list of adjacency records, one per link it takes part in.
Links carry a non-negative `u32` weight and are either
- **doubly**: traversable from both endpoints, or
- **singly**: traversable only from the endpoint that created it.

Direction only matters to the algorithms. For component tracking, links are undirected.

# Components

The [`GraphStore`](crate::store::GraphStore) keeps every component in a *slot* and labels
each node with its slot, so "which component is this node in" is a constant-time lookup.
Joining nodes merges components, removing links or nodes splits them; see [`store`].

# Algorithms

[`algo`] contains [`Bfs`](crate::algo::Bfs), [`Dfs`](crate::algo::Dfs) and
[`Dijkstra`](crate::algo::Dijkstra). Each run records one snapshot per step
(current node, newly reachable nodes, visited nodes and a narration line), and
the cursor can be moved back and forth through that history without recomputation.
A [`Session`](crate::session::Session) ties a store and at most one run together and
locks the graph while the run is active.

# Usage

In most use-cases, `use stepgraph::prelude::*;` suffices.

```
use stepgraph::prelude::*;

let mut session = Session::new();
let a = session.create_node().unwrap();
let b = session.create_node().unwrap();
let c = session.create_node().unwrap();
session.join_nodes(a, b, 4, LinkKind::Doubly).unwrap();
session.join_nodes(b, c, 1, LinkKind::SinglyTo).unwrap();

session.select_algorithm(AlgorithmKind::Dijkstra).unwrap();
session.start(&[a]).unwrap();
while session.step_forward().unwrap() {}

assert_eq!(session.dijkstra_table().unwrap().distance_to(c), Some(5));
let touched = session.quit_algorithm();
assert_eq!(touched.len(), 3);
```

# Logging

All mutations and steps are reported through [`tracing`](https://docs.rs/tracing);
the library never installs a subscriber.
*/

pub mod algo;
pub mod error;
pub mod link;
pub mod node;
pub mod ops;
pub mod session;
pub mod store;
pub(crate) mod testing;

/// `stepgraph::prelude` includes identifiers, links, the store, the algorithms and the session.
pub mod prelude {
    pub use super::{algo::*, error::*, link::*, node::*, ops::*, session::*, store::*};
}
