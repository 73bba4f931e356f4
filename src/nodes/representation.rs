//! Word tree node representation

use std::fmt;

/// A stable identifier for a node in a [`WordTree`][crate::WordTree].
///
/// Identifiers are handed out in creation order, starting from the root at
/// `NodeId(0)`. They are unique within a single tree and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The identifier of the root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Return the numeric value of this identifier.
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The owned storage for a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeData {
    /// Edge label leading into this node, absent only for the root
    pub(crate) segment: Option<String>,
    /// Children in insertion order
    pub(crate) children: Vec<NodeId>,
    /// True if the path from the root to this node spells a stored word
    pub(crate) complete: bool,
    /// Back reference used for upward lookups, absent only for the root
    pub(crate) parent: Option<NodeId>,
}

impl NodeData {
    fn root() -> Self {
        NodeData {
            segment: None,
            children: Vec::new(),
            complete: false,
            parent: None,
        }
    }
}

/// Arena holding every node of a tree, indexed by [`NodeId`].
///
/// Ownership only flows downward: the arena owns all the nodes, parents refer
/// to children by id, and the `parent` back references are plain ids as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeArena {
    nodes: Vec<NodeData>,
}

impl NodeArena {
    /// Create an arena containing only the root.
    pub(crate) fn new() -> Self {
        NodeArena {
            nodes: vec![NodeData::root()],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// # Panics
    ///  - Panics if `id` was not produced by this arena.
    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    /// # Panics
    ///  - Panics if `id` was not produced by this arena.
    pub(crate) fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    /// Append a new node carrying `segment` to the end of `parent`'s children
    /// and return its id.
    pub(crate) fn push_child(&mut self, parent: NodeId, segment: &str, complete: bool) -> NodeId {
        debug_assert!(!segment.is_empty(), "only the root may have an empty segment");

        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            segment: Some(segment.to_owned()),
            children: Vec::new(),
            complete,
            parent: Some(parent),
        });
        self.data_mut(parent).children.push(id);
        id
    }

    /// Split the segment of `id` at byte offset `at`.
    ///
    /// The node keeps its id, the first `at` bytes of its segment, and gains a
    /// single new child. That child takes over the remainder of the segment,
    /// the completeness flag, and all previous children. Returns the id of the
    /// new child.
    ///
    /// # Panics
    ///  - Panics if `id` is the root, or if `at` is not strictly inside the
    ///    segment on a character boundary.
    pub(crate) fn split(&mut self, id: NodeId, at: usize) -> NodeId {
        let new_id = NodeId(self.nodes.len());

        let node = self.data_mut(id);
        let segment = node
            .segment
            .as_mut()
            .expect("the root segment can never be split");
        assert!(
            0 < at && at < segment.len(),
            "split point [{at}] must fall strictly inside segment [{segment:?}]"
        );
        let suffix = segment.split_off(at);
        let moved_children = std::mem::replace(&mut node.children, vec![new_id]);
        let complete = std::mem::replace(&mut node.complete, false);

        for child in &moved_children {
            self.data_mut(*child).parent = Some(new_id);
        }

        self.nodes.push(NodeData {
            segment: Some(suffix),
            children: moved_children,
            complete,
            parent: Some(id),
        });

        new_id
    }
}

/// A borrowed view of a single node of a [`WordTree`][crate::WordTree].
///
/// This is what the [`Visitor`][crate::visitor::Visitor] hooks receive. It is
/// `Copy` and only lives as long as the borrow of the tree, which keeps the
/// tree immutable for the duration of any traversal.
#[derive(Clone, Copy)]
pub struct WordNode<'a> {
    arena: &'a NodeArena,
    id: NodeId,
}

impl<'a> WordNode<'a> {
    pub(crate) fn new(arena: &'a NodeArena, id: NodeId) -> Self {
        WordNode { arena, id }
    }

    fn data(&self) -> &'a NodeData {
        self.arena.data(self.id)
    }

    /// The identifier of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The text on the edge leading into this node, or `None` for the root.
    pub fn segment(&self) -> Option<&'a str> {
        self.data().segment.as_deref()
    }

    /// Returns true if this node terminates a stored word, regardless of
    /// whether longer words continue below it.
    pub fn is_complete(&self) -> bool {
        self.data().complete
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.data().children.is_empty()
    }

    /// Returns true if this is the root node.
    pub fn is_root(&self) -> bool {
        self.data().parent.is_none()
    }

    /// The number of direct children.
    pub fn num_children(&self) -> usize {
        self.data().children.len()
    }

    /// Iterate over the direct children, in insertion order.
    pub fn children(&self) -> Children<'a> {
        Children {
            arena: self.arena,
            ids: self.data().children.iter(),
        }
    }

    /// The parent of this node, or `None` for the root.
    pub fn parent(&self) -> Option<WordNode<'a>> {
        self.data()
            .parent
            .map(|parent| WordNode::new(self.arena, parent))
    }

    /// Reconstruct the full word spelled by the path from the root to this
    /// node. The root spells the empty string.
    pub fn word(&self) -> String {
        let mut segments = Vec::new();
        let mut current = Some(*self);
        while let Some(node) = current {
            if let Some(segment) = node.segment() {
                segments.push(segment);
            }
            current = node.parent();
        }

        segments.into_iter().rev().collect()
    }
}

impl fmt::Debug for WordNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordNode")
            .field("id", &self.id)
            .field("segment", &self.segment())
            .field("complete", &self.is_complete())
            .field("num_children", &self.num_children())
            .finish()
    }
}

impl PartialEq for WordNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl Eq for WordNode<'_> {}

/// Iterator over the children of a [`WordNode`].
#[derive(Debug, Clone)]
pub struct Children<'a> {
    arena: &'a NodeArena,
    ids: std::slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = WordNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|id| WordNode::new(self.arena, *id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|id| WordNode::new(self.arena, *id))
    }
}

impl ExactSizeIterator for Children<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_moves_children_and_completeness_down() {
        let mut arena = NodeArena::new();
        let cat = arena.push_child(NodeId::ROOT, "cat", true);
        let cats = arena.push_child(cat, "s", true);

        let tail = arena.split(cat, 2);

        assert_eq!(arena.data(cat).segment.as_deref(), Some("ca"));
        assert!(!arena.data(cat).complete);
        assert_eq!(arena.data(cat).children, vec![tail]);

        assert_eq!(arena.data(tail).segment.as_deref(), Some("t"));
        assert!(arena.data(tail).complete);
        assert_eq!(arena.data(tail).parent, Some(cat));
        assert_eq!(arena.data(tail).children, vec![cats]);
        assert_eq!(arena.data(cats).parent, Some(tail));
    }

    #[test]
    fn split_respects_multibyte_boundaries() {
        let mut arena = NodeArena::new();
        let node = arena.push_child(NodeId::ROOT, "äöü", true);

        let tail = arena.split(node, 'ä'.len_utf8());

        assert_eq!(arena.data(node).segment.as_deref(), Some("ä"));
        assert_eq!(arena.data(tail).segment.as_deref(), Some("öü"));
    }

    #[test]
    #[should_panic]
    fn split_root_panics() {
        let mut arena = NodeArena::new();
        let _ = arena.split(NodeId::ROOT, 0);
    }

    #[test]
    fn word_reconstructs_through_parents() {
        let mut arena = NodeArena::new();
        let ca = arena.push_child(NodeId::ROOT, "ca", false);
        let t = arena.push_child(ca, "t", true);
        let r = arena.push_child(ca, "r", true);

        assert_eq!(WordNode::new(&arena, t).word(), "cat");
        assert_eq!(WordNode::new(&arena, r).word(), "car");
        assert_eq!(WordNode::new(&arena, ca).word(), "ca");
        assert_eq!(WordNode::new(&arena, NodeId::ROOT).word(), "");
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut arena = NodeArena::new();
        let d = arena.push_child(NodeId::ROOT, "dog", true);
        let c = arena.push_child(NodeId::ROOT, "cat", true);

        let root = WordNode::new(&arena, NodeId::ROOT);
        let ids: Vec<_> = root.children().map(|child| child.id()).collect();
        assert_eq!(ids, vec![d, c]);
        assert_eq!(root.children().len(), 2);
        assert!(root.is_root());
        assert!(root.segment().is_none());
        assert_eq!(
            root.children().next().and_then(|child| child.parent()),
            Some(root)
        );
    }
}
