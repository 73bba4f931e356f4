#![deny(
    missing_docs,
    clippy::missing_safety_doc,
    unsafe_code,
    deprecated_in_future,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    rustdoc::invalid_codeblock_attributes
)]
#![doc(
    html_playground_url = "https://play.rust-lang.org/",
    test(attr(deny(warnings)))
)]

//! Word hierarchy: a radix tree of words and the visitors that render it
//!
//! A [`WordTree`] stores a vocabulary with shared prefixes merged into single
//! edges. The [`visitor`] module walks the tree depth-first and offers:
//!
//!  - [`RegexCompiler`](visitor::RegexCompiler), which compiles the tree into
//!    one regular expression matching exactly the stored words,
//!  - [`TreePrinter`](visitor::TreePrinter), an indented text dump,
//!  - [`DotPrinter`](visitor::DotPrinter), a Graphviz rendering,
//!  - [`CoverageChecker`](visitor::CoverageChecker), which checks the tree
//!    against the vocabulary it was built from.
//!
//! ```rust
//! use wordhierarchy::{visitor::RegexCompiler, WordTree};
//!
//! let tree = WordTree::from(["cat", "car", "dog"]);
//! assert_eq!(RegexCompiler::compile(&tree), "ca[tr]|dog");
//! ```

mod collections;
mod nodes;

#[doc(hidden)]
pub mod tests_common;

pub use collections::*;
pub use nodes::{visitor, *};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
