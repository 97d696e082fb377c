//! ukkonen_rs: online suffix tree construction.
//!
//! [`SuffixTree::make`] builds the suffix tree of a sentinel-terminated byte
//! text in amortized linear time. Edge labels are ranges into the borrowed
//! text, and the finished tree is read through [`SuffixTree::children`],
//! [`SuffixTree::label`] and friends. [`text`] holds the boundary checks a
//! caller should run on untrusted input, and [`render`] prints a tree for
//! inspection.

pub mod render;
pub mod text;
pub mod tree;

pub use text::{prepare, validate, TextConfig, TextError, DEFAULT_SENTINEL};
pub use tree::{BuildStats, Children, NodeId, SuffixTree};
