use crate::{
    nodes::operations::lookup::{common_prefix_len, find_child_with_first_char},
    NodeArena, NodeId,
};
use std::fmt;

/// The kind of change needed to store a word, as found by
/// [`search_for_insert_point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertSearchResultType {
    /// The word ends exactly on an existing node
    Exact {
        /// The node spelling the word
        node: NodeId,
    },
    /// No child of `parent` shares a first character with the rest of the
    /// word, so the rest becomes a new child
    IntoExisting {
        /// The node receiving the new child
        parent: NodeId,
    },
    /// The word diverges from, or ends inside, the segment of `node`
    MismatchSegment {
        /// The node whose segment has to be split
        node: NodeId,
        /// Byte offset inside the segment of `node` where the split happens
        matched_bytes: usize,
    },
}

/// Everything needed to apply an insert of a single word to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InsertPoint {
    /// The type of operation that needs to be performed to insert the word
    pub(crate) insert_type: InsertSearchResultType,
    /// The number of bytes of the word consumed by fully matched segments
    pub(crate) word_bytes_used: usize,
}

/// The result of applying an [`InsertPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InsertResult {
    /// The node now spelling the inserted word
    pub(crate) node: NodeId,
    /// True if the word was already stored before the insert
    pub(crate) existed: bool,
}

/// Walk down from the root, consuming whole segments that match `word`, and
/// report where the word has to be attached.
pub(crate) fn search_for_insert_point(arena: &NodeArena, word: &str) -> InsertPoint {
    let mut current = NodeId::ROOT;
    let mut word_bytes_used = 0;

    loop {
        let rest = &word[word_bytes_used..];
        if rest.is_empty() {
            return InsertPoint {
                insert_type: InsertSearchResultType::Exact { node: current },
                word_bytes_used,
            };
        }

        let Some(child) = find_child_with_first_char(arena, current, rest) else {
            return InsertPoint {
                insert_type: InsertSearchResultType::IntoExisting { parent: current },
                word_bytes_used,
            };
        };

        let segment = arena.data(child).segment.as_deref().unwrap_or_default();
        let matched_bytes = common_prefix_len(segment, rest);
        if matched_bytes < segment.len() {
            return InsertPoint {
                insert_type: InsertSearchResultType::MismatchSegment {
                    node: child,
                    matched_bytes,
                },
                word_bytes_used,
            };
        }

        word_bytes_used += matched_bytes;
        current = child;
    }
}

impl InsertPoint {
    /// Modify the tree so that it stores `word`.
    ///
    /// `word` must be the same word that was used to find this insert point,
    /// and the tree must not have been modified since.
    pub(crate) fn apply(self, arena: &mut NodeArena, word: &str) -> InsertResult {
        let rest = &word[self.word_bytes_used..];

        match self.insert_type {
            InsertSearchResultType::Exact { node } => {
                let data = arena.data_mut(node);
                let existed = data.complete;
                data.complete = true;
                InsertResult { node, existed }
            },
            InsertSearchResultType::IntoExisting { parent } => InsertResult {
                node: arena.push_child(parent, rest, true),
                existed: false,
            },
            InsertSearchResultType::MismatchSegment {
                node,
                matched_bytes,
            } => {
                let _ = arena.split(node, matched_bytes);
                let rest = &rest[matched_bytes..];
                if rest.is_empty() {
                    // The word ends at the split point
                    arena.data_mut(node).complete = true;
                    InsertResult {
                        node,
                        existed: false,
                    }
                } else {
                    InsertResult {
                        node: arena.push_child(node, rest, true),
                        existed: false,
                    }
                }
            },
        }
    }
}

/// Insert `word` into the tree, splitting segments where needed.
///
/// # Errors
///
///  - Returns an [`EmptyWordError`] if `word` is empty, since the root can
///    never be a complete word.
pub(crate) fn insert(arena: &mut NodeArena, word: &str) -> Result<InsertResult, EmptyWordError> {
    if word.is_empty() {
        return Err(EmptyWordError);
    }

    Ok(search_for_insert_point(arena, word).apply(arena, word))
}

/// Attempted to insert the empty word, which the root node cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyWordError;

impl fmt::Display for EmptyWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to insert the empty word, which the tree cannot store.")
    }
}

impl std::error::Error for EmptyWordError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordNode;

    fn render(arena: &NodeArena, id: NodeId) -> String {
        let node = WordNode::new(arena, id);
        let children: Vec<_> = node.children().map(|child| render(arena, child.id())).collect();
        let mut out = node.segment().unwrap_or("*").to_string();
        if node.is_complete() {
            out.push('!');
        }
        if !children.is_empty() {
            out.push('{');
            out.push_str(&children.join(","));
            out.push('}');
        }
        out
    }

    fn build(words: &[&str]) -> NodeArena {
        let mut arena = NodeArena::new();
        for word in words {
            let _ = insert(&mut arena, word).unwrap();
        }
        arena
    }

    #[test]
    fn insert_shares_prefixes() {
        let arena = build(&["cat", "car", "dog"]);
        assert_eq!(render(&arena, NodeId::ROOT), "*{ca{t!,r!},dog!}");
    }

    #[test]
    fn insert_extending_existing_word() {
        let arena = build(&["a", "ab"]);
        assert_eq!(render(&arena, NodeId::ROOT), "*{a!{b!}}");
    }

    #[test]
    fn insert_prefix_of_existing_word() {
        let arena = build(&["ab", "a"]);
        assert_eq!(render(&arena, NodeId::ROOT), "*{a!{b!}}");
    }

    #[test]
    fn insert_splits_segment_with_children() {
        let arena = build(&["tester", "test", "team"]);
        assert_eq!(render(&arena, NodeId::ROOT), "*{te{st!{er!},am!}}");
    }

    #[test]
    fn insert_existing_word_is_reported() {
        let mut arena = NodeArena::new();
        let first = insert(&mut arena, "word").unwrap();
        let second = insert(&mut arena, "word").unwrap();

        assert!(!first.existed);
        assert!(second.existed);
        assert_eq!(first.node, second.node);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn insert_incomplete_split_point_is_not_existing() {
        let mut arena = NodeArena::new();
        let _ = insert(&mut arena, "cat").unwrap();
        let _ = insert(&mut arena, "car").unwrap();

        // "ca" exists as a node but is not yet a word
        let result = insert(&mut arena, "ca").unwrap();
        assert!(!result.existed);
        assert_eq!(render(&arena, NodeId::ROOT), "*{ca!{t!,r!}}");
    }

    #[test]
    fn insert_empty_word_is_rejected() {
        let mut arena = NodeArena::new();
        assert_eq!(insert(&mut arena, ""), Err(EmptyWordError));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn insert_point_for_diverging_word() {
        let arena = build(&["cat"]);
        let point = search_for_insert_point(&arena, "cow");
        assert_eq!(
            point,
            InsertPoint {
                insert_type: InsertSearchResultType::MismatchSegment {
                    node: NodeId(1),
                    matched_bytes: 1,
                },
                word_bytes_used: 0,
            }
        );
    }
}
