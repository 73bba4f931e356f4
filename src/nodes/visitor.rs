//! Utilities for inspecting and rendering the word tree.

mod coverage;
mod dot_printer;
mod pretty_printer;
mod regex_compiler;

use crate::{WordNode, WordTree};
pub use coverage::*;
pub use dot_printer::*;
pub use pretty_printer::*;
pub use regex_compiler::*;

/// The `Visitable` trait allows [`Visitor`]s to traverse the structure of the
/// implementing type.
pub trait Visitable {
    /// Walk the implementing type depth-first, calling the hooks of the given
    /// [`Visitor`].
    ///
    /// For every node, in pre-order:
    ///  1. [`Visitor::visit`] is called on the node.
    ///  2. If the node has children, [`Visitor::before_children`] is called,
    ///     then each child is traversed in insertion order, then
    ///     [`Visitor::after_children`] is called.
    ///
    /// Every `before_children` call is matched by exactly one
    /// `after_children` call on the same node, and the pairs of descendants
    /// are nested strictly inside.
    fn visit_with<V: Visitor>(&self, visitor: &mut V);
}

impl Visitable for WordNode<'_> {
    fn visit_with<V: Visitor>(&self, visitor: &mut V) {
        // The return value is informational only and never prunes the walk.
        let _ = visitor.visit(*self);

        if self.is_leaf() {
            return;
        }

        visitor.before_children(*self);
        for child in self.children() {
            child.visit_with(visitor);
        }
        visitor.after_children(*self);
    }
}

impl Visitable for WordTree {
    fn visit_with<V: Visitor>(&self, visitor: &mut V) {
        self.root().visit_with(visitor)
    }
}

/// The `Visitor` trait allows creating new operations on the word tree by
/// hooking into a depth-first traversal.
///
/// A visitor instance is meant for a single traversal. Buffers and stacks
/// held by the implementations in this module are not reset between walks.
pub trait Visitor {
    /// Visit a single node, before any of its children.
    ///
    /// The returned value reports whether this visitor rendered or recorded
    /// anything for the node. It is never used to skip children.
    fn visit(&mut self, node: WordNode<'_>) -> bool;

    /// Called once for every node with at least one child, right before the
    /// first child is visited.
    fn before_children(&mut self, _node: WordNode<'_>) {}

    /// Called once for every node with at least one child, right after the
    /// subtree of the last child has been visited.
    fn after_children(&mut self, _node: WordNode<'_>) {}
}
