//! Word tree lookup and manipulation

mod insert;
pub use insert::EmptyWordError;
pub(crate) use insert::*;

mod lookup;
pub(crate) use lookup::search;
