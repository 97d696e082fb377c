//! Suffix tree construction (online, Ukkonen-style).

mod builder;
mod navigate;
mod node;
mod walker;

pub use self::builder::BuildStats;
pub use self::node::{Children, NodeId, SuffixTree};
