//! Structural checks on finished suffix trees.
//!
//! Every property is checked on a few hand-picked texts and on seeded random
//! texts over small alphabets, where repeats (and so splits and suffix links)
//! are frequent.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ukkonen_rs::{NodeId, SuffixTree};

/// Root-to-leaf path labels, in traversal order.
fn leaf_paths(tree: &SuffixTree<'_>) -> Vec<Vec<u8>> {
    let mut paths = Vec::new();
    let mut stack = vec![(tree.root(), Vec::new())];
    while let Some((node, mut path)) = stack.pop() {
        path.extend_from_slice(tree.label(node));
        if tree.is_leaf(node) {
            paths.push(path);
            continue;
        }
        for child in tree.children(node) {
            stack.push((child, path.clone()));
        }
    }
    paths
}

fn all_nodes(tree: &SuffixTree<'_>) -> Vec<NodeId> {
    let mut nodes = Vec::new();
    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        nodes.push(node);
        stack.extend(tree.children(node));
    }
    nodes
}

fn path_to(tree: &SuffixTree<'_>, mut node: NodeId) -> Vec<u8> {
    let mut parts = Vec::new();
    while let Some(parent) = tree.parent(node) {
        parts.push(tree.label(node));
        node = parent;
    }
    parts.into_iter().rev().flatten().copied().collect()
}

/// Descend from the root spelling `pattern` edge by edge; returns the node
/// whose path equals `pattern` exactly, if the pattern ends on a node.
fn follow(tree: &SuffixTree<'_>, pattern: &[u8]) -> Option<NodeId> {
    let mut node = tree.root();
    let mut rest = pattern;
    while !rest.is_empty() {
        let edge = tree
            .children(node)
            .find(|&child| tree.label(child).first() == rest.first())?;
        let label = tree.label(edge);
        if label.len() > rest.len() || &rest[..label.len()] != label {
            return None;
        }
        rest = &rest[label.len()..];
        node = edge;
    }
    Some(node)
}

fn ranges(tree: &SuffixTree<'_>) -> Vec<(usize, usize)> {
    all_nodes(tree)
        .into_iter()
        .map(|node| (tree.edge_start(node), tree.edge_end(node)))
        .collect()
}

fn random_text(rng: &mut StdRng, alphabet: &[u8], len: usize) -> Vec<u8> {
    let mut text: Vec<u8> = (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();
    text.push(b'$');
    text
}

fn assert_well_formed(text: &[u8]) {
    let (tree, stats) = SuffixTree::make_with_stats(text);
    let shown = String::from_utf8_lossy(text);

    // Every suffix appears exactly once as a root-to-leaf path.
    let mut paths = leaf_paths(&tree);
    paths.sort();
    let mut suffixes: Vec<Vec<u8>> = (0..text.len()).map(|i| text[i..].to_vec()).collect();
    suffixes.sort();
    assert_eq!(paths, suffixes, "suffix coverage failed for {shown}");
    assert_eq!(tree.leaf_count(), text.len());

    for node in all_nodes(&tree) {
        if node != tree.root() {
            assert!(
                tree.edge_start(node) < tree.edge_end(node),
                "empty edge in tree for {shown}"
            );
            assert!(tree.edge_end(node) <= text.len());
        }

        let firsts: Vec<u8> = tree
            .children(node)
            .map(|child| tree.label(child)[0])
            .collect();
        let unique: HashSet<u8> = firsts.iter().copied().collect();
        assert_eq!(unique.len(), firsts.len(), "duplicate first byte in {shown}");

        if node != tree.root() && !tree.is_leaf(node) {
            assert!(firsts.len() >= 2, "internal node without a branch in {shown}");
        }

        // The path must be a prefix of the suffix of any leaf below it.
        let path = path_to(&tree, node);
        let mut leaf = node;
        while let Some(first) = tree.children(leaf).next() {
            leaf = first;
        }
        let suffix = text.len() - path_to(&tree, leaf).len();
        assert!(
            text[suffix..].starts_with(&path),
            "path {:?} is not a prefix of suffix {suffix} of {shown}",
            String::from_utf8_lossy(&path)
        );
    }

    assert!(tree.len() <= 2 * text.len(), "too many nodes for {shown}");
    assert!(
        stats.max_unlinked_ascents <= 1,
        "up-walk climbed {} unlinked nodes for {shown}",
        stats.max_unlinked_ascents
    );
}

#[test]
fn worked_example_has_expected_shape() {
    let text = b"ATAAATG$";
    let tree = SuffixTree::make(text);
    assert_eq!(tree.leaf_count(), 8);

    let firsts: HashSet<u8> = tree
        .children(tree.root())
        .map(|child| tree.label(child)[0])
        .collect();
    assert_eq!(firsts, HashSet::from([b'A', b'T', b'G', b'$']));

    let leaf = follow(&tree, b"AAATG$").expect("suffix AAATG$ ends on a node");
    assert!(tree.is_leaf(leaf));
    assert_eq!(path_to(&tree, leaf).len(), 6);

    assert_well_formed(text);
}

#[test]
fn repeated_byte_branches_once() {
    let tree = SuffixTree::make(b"aa$");
    let root = tree.root();
    let children: Vec<NodeId> = tree.children(root).collect();
    assert_eq!(children.len(), 2);

    let branch = follow(&tree, b"a").expect("internal node for a");
    assert!(!tree.is_leaf(branch));
    let below: Vec<&[u8]> = tree.children(branch).map(|c| tree.label(c)).collect();
    assert_eq!(below, vec![&b"a$"[..], &b"$"[..]]);

    let end = follow(&tree, b"$").expect("leaf for $");
    assert!(tree.is_leaf(end));
}

#[test]
fn sentinel_alone_is_single_leaf() {
    let tree = SuffixTree::make(b"$");
    let children: Vec<NodeId> = tree.children(tree.root()).collect();
    assert_eq!(children.len(), 1);
    assert_eq!(tree.label(children[0]), b"$");
    assert!(tree.is_leaf(children[0]));
}

#[test]
fn classic_texts_are_well_formed() {
    let texts: [&[u8]; 9] = [
        b"banana$",
        b"mississippi$",
        b"abracadabra$",
        b"aaaaaaaaaa$",
        b"abababababab$",
        b"abcabxabcd$",
        b"xabxac$",
        b"GATTACAGATTACA$",
        b"dedododeeodo$",
    ];
    for text in texts {
        assert_well_formed(text);
    }
}

#[test]
fn random_binary_texts_are_well_formed() {
    let mut rng = StdRng::seed_from_u64(42);
    for len in 0..60 {
        for _ in 0..5 {
            assert_well_formed(&random_text(&mut rng, b"ab", len));
        }
    }
}

#[test]
fn random_dna_texts_are_well_formed() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let len = rng.gen_range(1..200);
        assert_well_formed(&random_text(&mut rng, b"ACGT", len));
    }
}

#[test]
fn finalize_again_changes_nothing() {
    let text = b"GATTACAGATTACA$";
    let tree = SuffixTree::make(text);
    let mut again = tree.clone();
    again.finalize();

    assert_eq!(ranges(&tree), ranges(&again));
    assert_eq!(leaf_paths(&tree), leaf_paths(&again));
    assert_eq!(again.leaf_count(), text.len());
}

#[test]
fn finished_tree_is_shared_across_threads() {
    let text = b"mississippi$";
    let tree = SuffixTree::make(text);
    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| leaf_paths(&tree).len()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("reader thread panicked"))
            .collect()
    });
    assert_eq!(counts, vec![text.len(); 4]);
}

#[test]
fn children_keep_insertion_order() {
    // 'b', 'c' and '$' are first seen in that order; 'a' owns the first slot.
    let tree = SuffixTree::make(b"abcab$");
    let firsts: Vec<u8> = tree
        .children(tree.root())
        .map(|child| tree.label(child)[0])
        .collect();
    assert_eq!(firsts, vec![b'a', b'b', b'c', b'$']);
}
