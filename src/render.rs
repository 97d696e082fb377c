//! Plain-text dumps of a finished tree.
//!
//! Both writers only use the public traversal interface and can be pointed at
//! any `io::Write` (stdout, a file, a `Vec<u8>` in tests).

use std::io::{self, Write};

use crate::tree::{NodeId, SuffixTree};

/// Print the tree in nested form.
///
/// A node's label follows its parent's on the same line. Each child after the
/// first starts a new line indented by the depth of its parent, and every
/// leaf ends its line, so each line ends with one suffix.
pub fn write_nested<W: Write>(tree: &SuffixTree<'_>, out: &mut W) -> io::Result<()> {
    // (node, depth of its parent, whether to indent before printing)
    let mut stack: Vec<(NodeId, usize, bool)> = vec![(tree.root(), 0, false)];
    while let Some((node, indent, pad)) = stack.pop() {
        if pad {
            write!(out, "{:width$}", "", width = indent)?;
        }
        out.write_all(tree.label(node))?;

        let depth = indent + tree.edge_len(node);
        let children: Vec<NodeId> = tree.children(node).collect();
        if children.is_empty() {
            writeln!(out)?;
            continue;
        }
        for (position, &child) in children.iter().enumerate().rev() {
            stack.push((child, depth, position > 0));
        }
    }
    Ok(())
}

/// Print every edge label in pre-order, one per line, starting with the
/// root's empty label.
pub fn write_edges<W: Write>(tree: &SuffixTree<'_>, out: &mut W) -> io::Result<()> {
    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        out.write_all(tree.label(node))?;
        writeln!(out)?;
        let children: Vec<NodeId> = tree.children(node).collect();
        stack.extend(children.into_iter().rev());
    }
    Ok(())
}

/// Nested dump collected into a `String`, lossily decoded.
pub fn nested_string(tree: &SuffixTree<'_>) -> String {
    collect(tree, write_nested)
}

/// Edge dump collected into a `String`, lossily decoded.
pub fn edges_string(tree: &SuffixTree<'_>) -> String {
    collect(tree, write_edges)
}

fn collect<F>(tree: &SuffixTree<'_>, write: F) -> String
where
    F: FnOnce(&SuffixTree<'_>, &mut Vec<u8>) -> io::Result<()>,
{
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = write(tree, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
