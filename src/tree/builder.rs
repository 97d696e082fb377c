//! Construction driver: feeds the text to the extension walker one position
//! at a time and closes the open leaf edges at the end.

use super::node::{NodeId, SuffixTree};
use crate::text::{self, TextConfig, TextError};

/// Counters collected while a tree is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Text positions processed after the initial edge.
    pub phases: usize,
    /// Leaves inserted by explicit extensions.
    pub extensions: usize,
    /// Edges split to make room for a branch.
    pub splits: usize,
    /// Suffix links set on internal nodes.
    pub suffix_links: usize,
    /// Up-walks that resumed through a suffix link.
    pub link_jumps: usize,
    /// Up-walks that resumed at the root.
    pub root_restarts: usize,
    /// Parent steps taken through nodes that had no suffix link yet.
    pub unlinked_ascents: usize,
    /// Most unlinked parent steps taken by a single up-walk.
    pub max_unlinked_ascents: usize,
}

/// Mutable construction state. Lives only for the duration of one build.
pub(crate) struct Builder<'t> {
    pub(crate) tree: SuffixTree<'t>,
    /// Last text position consumed.
    pub(crate) phase: usize,
    /// Node split by the previous extension of this phase, still unlinked.
    pub(crate) pending: Option<NodeId>,
    pub(crate) stats: BuildStats,
}

impl<'t> Builder<'t> {
    fn new(tree: SuffixTree<'t>) -> Self {
        Self {
            tree,
            phase: 0,
            pending: None,
            stats: BuildStats::default(),
        }
    }

    /// Run phases `1..text.len()` starting from the leaf covering the whole
    /// text, then close every open edge.
    fn build(&mut self, mut active: NodeId) {
        for i in 1..self.tree.text.len() {
            self.phase = i;
            self.stats.phases += 1;
            active = self.extend(active);
        }
        self.tree.finalize();
    }

    /// One phase: extend suffixes until one is already present.
    ///
    /// Returns the most recent leaf, which seeds the next phase.
    fn extend(&mut self, mut active: NodeId) -> NodeId {
        self.pending = None;
        while let Some(leaf) = self.single_extension(active) {
            active = leaf;
        }
        active
    }
}

impl<'t> SuffixTree<'t> {
    /// Build the suffix tree of `text`.
    ///
    /// `text` should end with a sentinel byte that occurs nowhere else;
    /// otherwise some suffixes end inside the tree instead of at their own
    /// leaf. This is not checked here; see [`SuffixTree::try_make`].
    /// An empty text yields a tree holding only the root.
    pub fn make(text: &'t [u8]) -> Self {
        Self::make_with_stats(text).0
    }

    /// Like [`SuffixTree::make`], also returning construction counters.
    pub fn make_with_stats(text: &'t [u8]) -> (Self, BuildStats) {
        let mut tree = Self::with_root(text);
        if text.is_empty() {
            return (tree, BuildStats::default());
        }

        let root = tree.root();
        let first = tree.attach_leaf(root, 0);
        let mut builder = Builder::new(tree);
        builder.build(first);

        let Builder { tree, stats, .. } = builder;
        log::debug!(
            "built suffix tree over {} bytes: {} nodes, {} splits, {} suffix links",
            text.len(),
            tree.len(),
            stats.splits,
            stats.suffix_links
        );
        (tree, stats)
    }

    /// Validate `text` against `config` and build its suffix tree.
    ///
    /// The sentinel is never appended here because the tree borrows `text`;
    /// use [`text::prepare`] for that.
    pub fn try_make(text: &'t [u8], config: &TextConfig) -> Result<Self, TextError> {
        text::validate(text, config)?;
        Ok(Self::make(text))
    }

    /// Close every open leaf edge at the end of the text and drop the
    /// build-time suffix links.
    ///
    /// Runs once at the end of construction; later calls change nothing.
    pub fn finalize(&mut self) {
        let len = self.text.len();
        for node in &mut self.nodes {
            if node.is_open() {
                node.end = len;
            }
            node.suffix_link = None;
        }
    }
}
