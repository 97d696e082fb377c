//! Edge selection and edge splitting.

use super::node::{NodeId, SuffixTree, OPEN};

impl SuffixTree<'_> {
    /// Child of `node` whose label starts with `byte`, if any.
    ///
    /// At most one child can match. Scans the sibling chain, so the cost is
    /// the branching factor at `node`.
    pub(crate) fn select_edge(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        self.children(node)
            .find(|&child| self.text[self.node(child).start] == byte)
    }

    /// Insert a new internal node `offset` bytes into the edge leading to
    /// `edge` and return it.
    ///
    /// The new node takes over `edge`'s slot in its parent's sibling chain and
    /// `edge` becomes its only child with the label shortened from the front.
    /// No other node is touched. `offset` must lie strictly inside the label.
    pub(crate) fn split_edge(&mut self, edge: NodeId, offset: usize) -> NodeId {
        let (start, parent, sibling) = {
            let node = self.node(edge);
            debug_assert!(offset > 0, "split offset must be inside the edge");
            debug_assert!(node.is_open() || node.start + offset < node.end);
            (node.start, node.parent, node.next_sibling)
        };
        let parent = parent.unwrap_or(NodeId::ROOT);

        let middle = self.alloc(start, start + offset, parent);
        {
            let mid = self.node_mut(middle);
            mid.first_child = Some(edge);
            mid.next_sibling = sibling;
        }
        self.replace_child(parent, edge, middle);

        let node = self.node_mut(edge);
        node.start += offset;
        node.parent = Some(middle);
        node.next_sibling = None;

        log::trace!(
            "split edge {:?} at offset {offset} under {:?}",
            edge.index(),
            middle.index()
        );
        middle
    }

    /// Point whichever link referenced `old` (the parent's `first_child` or a
    /// preceding sibling's `next_sibling`) at `new` instead.
    fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        if self.node(parent).first_child == Some(old) {
            self.node_mut(parent).first_child = Some(new);
            return;
        }
        let previous = self
            .children(parent)
            .find(|&child| self.node(child).next_sibling == Some(old));
        if let Some(previous) = previous {
            self.node_mut(previous).next_sibling = Some(new);
        }
    }

    /// Append a new open-ended leaf starting at `start` as the last child of
    /// `node`.
    pub(crate) fn attach_leaf(&mut self, node: NodeId, start: usize) -> NodeId {
        let leaf = self.alloc(start, OPEN, node);
        let tail = self.children(node).last();
        match tail {
            Some(tail) => self.node_mut(tail).next_sibling = Some(leaf),
            None => self.node_mut(node).first_child = Some(leaf),
        }
        log::trace!("leaf {:?} at {start} under {:?}", leaf.index(), node.index());
        leaf
    }
}
