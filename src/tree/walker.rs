//! Up-walk and down-walk: the two halves of a single suffix extension.
//!
//! Each phase `i` appends `text[i]` to every suffix that does not yet end in a
//! leaf. Leaves grow implicitly through their open end, so only the suffixes
//! after the most recently created leaf need explicit work. A single extension
//! starts from that leaf, climbs to a point from which the next shorter suffix
//! can be re-entered (the up-walk), then descends to where `text[i]` is
//! missing (the down-walk). The phase stops at the first suffix that is
//! already present, because every shorter one is then present too.
//!
//! A range `[start, end)` handed between the two walks always ends at `i + 1`
//! and names the part of the current suffix that lies below the node being
//! walked from. The down-walk skips whole edges by comparing lengths and only
//! looks at the single byte where the suffix would leave the tree.

use super::builder::Builder;
use super::node::NodeId;

impl Builder<'_> {
    /// Extend the suffix that follows the one ending in `leaf`.
    ///
    /// Returns the new leaf, or `None` once the suffix was already present.
    pub(crate) fn single_extension(&mut self, leaf: NodeId) -> Option<NodeId> {
        let start = self.tree.edge_start(leaf);
        let end = self.tree.end_at(leaf, self.phase);
        self.walk_up(leaf, start, end)
    }

    /// Find where the suffix one byte shorter than the one spelled down to
    /// `node` can be resumed, and descend from there.
    ///
    /// `[start, end)` is the part of the longer suffix below `node`'s parent.
    /// A root parent restarts one byte further into the text; a linked parent
    /// is jumped through; an unlinked parent is climbed past, which widens the
    /// range by that parent's edge.
    pub(crate) fn walk_up(
        &mut self,
        mut node: NodeId,
        mut start: usize,
        end: usize,
    ) -> Option<NodeId> {
        let mut ascents = 0;
        let resumed = loop {
            let Some(parent) = self.tree.parent(node) else {
                break None;
            };
            if parent == self.tree.root() {
                self.stats.root_restarts += 1;
                break Some((parent, start + 1));
            }
            if let Some(link) = self.tree.node(parent).suffix_link {
                self.stats.link_jumps += 1;
                break Some((link, start));
            }
            ascents += 1;
            start -= self.tree.len_at(parent, self.phase);
            node = parent;
        };

        if ascents > 0 {
            log::trace!("climbed {ascents} unlinked node(s) in phase {}", self.phase);
            self.stats.unlinked_ascents += ascents;
            self.stats.max_unlinked_ascents = self.stats.max_unlinked_ascents.max(ascents);
        }

        let (from, start) = resumed?;
        self.walk_down(from, start, end)
    }

    /// Follow `[start, end)` down from `node` and make sure it ends in the tree.
    ///
    /// Returns the leaf that had to be inserted, or `None` when the range was
    /// already spelled by the tree (implicitly or at a node).
    pub(crate) fn walk_down(
        &mut self,
        mut node: NodeId,
        mut start: usize,
        end: usize,
    ) -> Option<NodeId> {
        let text = self.tree.text;
        loop {
            if start == end {
                self.pending = None;
                return None;
            }

            let Some(edge) = self.tree.select_edge(node, text[start]) else {
                self.link_pending(node);
                self.stats.extensions += 1;
                return Some(self.tree.attach_leaf(node, start));
            };

            let remaining = end - start;
            let edge_len = self.tree.len_at(edge, self.phase);
            if remaining > edge_len {
                node = edge;
                start += edge_len;
                continue;
            }

            // Everything but the last byte of the range is known to match.
            let offset = remaining - 1;
            if offset == 0 {
                self.link_pending(node);
                return None;
            }
            if text[start + offset] == text[self.tree.edge_start(edge) + offset] {
                self.pending = None;
                return None;
            }

            let middle = self.tree.split_edge(edge, offset);
            self.stats.splits += 1;
            self.link_pending(middle);
            self.pending = Some(middle);
            self.stats.extensions += 1;
            return Some(self.tree.attach_leaf(middle, start + offset));
        }
    }

    /// Give the node split in the previous extension its suffix link.
    ///
    /// `target` must spell that node's path minus its first byte.
    fn link_pending(&mut self, target: NodeId) {
        if let Some(source) = self.pending.take() {
            self.tree.node_mut(source).suffix_link = Some(target);
            self.stats.suffix_links += 1;
            log::trace!("suffix link {:?} -> {:?}", source.index(), target.index());
        }
    }
}
