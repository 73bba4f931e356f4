//! Module containing the public collection types built on the word tree
//! nodes.

mod word_tree;
pub use word_tree::*;
