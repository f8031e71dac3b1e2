use crate::node::NodeId;

/// Opaque link identifier
pub type LinkId = u32;

/// Links carry non-negative integer weights
pub type Weight = u32;

/// Sum of weights along a path
pub type Distance = u64;

/// Whether a link may be traversed in both directions or only from its first endpoint.
///
/// Direction only matters to algorithms. Component bookkeeping always treats
/// links as undirected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum LinkKind {
    /// Traversable from both endpoints
    #[default]
    Doubly,
    /// Traversable only from the first endpoint towards the second
    SinglyTo,
}

impl LinkKind {
    /// Direction flags `(first endpoint's record, second endpoint's record)`
    pub fn flags(self) -> (bool, bool) {
        match self {
            LinkKind::Doubly => (true, true),
            LinkKind::SinglyTo => (true, false),
        }
    }

    /// Recovers the kind from the flags stored on the `from` and `to` records.
    /// Returns `None` if neither side may traverse the link.
    pub fn from_flags(from: bool, to: bool) -> Option<Self> {
        match (from, to) {
            (true, true) => Some(LinkKind::Doubly),
            (true, false) => Some(LinkKind::SinglyTo),
            _ => None,
        }
    }
}

/// Read-only description of a single link, as handed to presentation layers.
///
/// For [`LinkKind::SinglyTo`] links, `from` is the endpoint that may traverse.
/// For [`LinkKind::Doubly`] links, `from` is the endpoint with the smaller id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LinkView {
    pub id: LinkId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
    pub kind: LinkKind,
}

/// Issues monotonically increasing node and link identifiers.
#[derive(Debug, Clone, Default)]
pub struct LinkRegistry {
    next_node: NodeId,
    next_link: LinkId,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh node id
    pub fn issue_node_id(&mut self) -> NodeId {
        let id = self.next_node;
        self.next_node += 1;
        id
    }

    /// Returns a fresh link id
    pub fn issue_link_id(&mut self) -> LinkId {
        let id = self.next_link;
        self.next_link += 1;
        id
    }
}
