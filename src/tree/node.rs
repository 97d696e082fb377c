//! Arena-backed node and edge storage for the suffix tree.
//!
//! Every node except the root stands for the edge leading into it from its
//! parent. Edge labels are half-open ranges into the shared text, never copied
//! substrings. Children form a singly linked sibling chain, but all links
//! (`first_child`, `next_sibling`, `parent`, `suffix_link`) are plain indices
//! into the arena: the tree owns every node and no node owns another.

/// Sentinel end offset for a leaf edge that still grows with the text.
pub(crate) const OPEN: usize = usize::MAX;

/// Handle to a node in a [`SuffixTree`] arena.
///
/// Handles are only meaningful for the tree that produced them; querying a
/// tree with a handle from another tree returns unrelated data or panics when
/// the index is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root always occupies the first arena slot.
    pub(crate) const ROOT: Self = Self(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    /// Build-phase scratch state; cleared by `finalize`.
    pub(crate) suffix_link: Option<NodeId>,
}

impl Node {
    fn root() -> Self {
        Self {
            start: 0,
            end: 0,
            parent: None,
            first_child: None,
            next_sibling: None,
            suffix_link: None,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.end == OPEN
    }
}

/// Suffix tree over a borrowed byte text.
///
/// Built by [`SuffixTree::make`]. Once returned, the tree is immutable and all
/// edge ranges are concrete, so it can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct SuffixTree<'t> {
    pub(crate) text: &'t [u8],
    pub(crate) nodes: Vec<Node>,
}

impl<'t> SuffixTree<'t> {
    /// Tree holding only the root (empty label, no children).
    pub(crate) fn with_root(text: &'t [u8]) -> Self {
        let mut nodes = Vec::with_capacity(2 * text.len() + 1);
        nodes.push(Node::root());
        Self { text, nodes }
    }

    /// Push a node into the arena without wiring it into any sibling chain.
    pub(crate) fn alloc(&mut self, start: usize, end: usize, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            start,
            end,
            parent: Some(parent),
            first_child: None,
            next_sibling: None,
            suffix_link: None,
        });
        id
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Exclusive end of the edge while position `i` is the last one consumed.
    #[inline]
    pub(crate) fn end_at(&self, id: NodeId, i: usize) -> usize {
        let node = self.node(id);
        if node.is_open() {
            i + 1
        } else {
            node.end
        }
    }

    /// Edge length while position `i` is the last one consumed.
    #[inline]
    pub(crate) fn len_at(&self, id: NodeId, i: usize) -> usize {
        self.end_at(id, i) - self.node(id).start
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The full text the tree was built over.
    pub fn text(&self) -> &'t [u8] {
        self.text
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for the root-only tree built over an empty text.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Offset in the text where the edge into `id` begins.
    pub fn edge_start(&self, id: NodeId) -> usize {
        self.node(id).start
    }

    /// Offset one past the last byte of the edge into `id`.
    pub fn edge_end(&self, id: NodeId) -> usize {
        self.node(id).end
    }

    /// Length of the edge label into `id`; zero for the root.
    pub fn edge_len(&self, id: NodeId) -> usize {
        let node = self.node(id);
        node.end - node.start
    }

    /// Edge label into `id` as a view into the text.
    pub fn label(&self, id: NodeId) -> &'t [u8] {
        let node = self.node(id);
        &self.text[node.start..node.end]
    }

    /// Parent of `id`, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// True when `id` has no children. The root of an empty tree counts.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).first_child.is_none()
    }

    /// Direct children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            nodes: &self.nodes,
            next: self.node(id).first_child,
        }
    }

    /// Number of leaves, i.e. suffixes represented by the tree.
    pub fn leaf_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.nodes
            .iter()
            .skip(1)
            .filter(|node| node.first_child.is_none())
            .count()
    }
}

/// Forward-only iterator over a node's sibling chain.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    nodes: &'a [Node],
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.nodes[current.0].next_sibling;
        Some(current)
    }
}
