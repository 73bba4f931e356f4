use crate::{NodeArena, NodeId};

/// Find the child of `parent` whose segment starts with the first character of
/// `rest`.
///
/// Siblings never share a first character, so there is at most one such child.
pub(crate) fn find_child_with_first_char(
    arena: &NodeArena,
    parent: NodeId,
    rest: &str,
) -> Option<NodeId> {
    let first = rest.chars().next()?;
    arena
        .data(parent)
        .children
        .iter()
        .copied()
        .find(|child| {
            arena
                .data(*child)
                .segment
                .as_deref()
                .and_then(|segment| segment.chars().next())
                == Some(first)
        })
}

/// Return the length in bytes of the longest common prefix of `a` and `b`,
/// always ending on a character boundary of both strings.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, a_char), b_char)| a_char != b_char)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// Search the tree for the node that spells exactly `word`.
///
/// Returns the node even if it is not marked complete; callers decide whether
/// an incomplete node counts as a match.
pub(crate) fn search(arena: &NodeArena, word: &str) -> Option<NodeId> {
    let mut current = NodeId::ROOT;
    let mut rest = word;

    while !rest.is_empty() {
        let child = find_child_with_first_char(arena, current, rest)?;
        let segment = arena.data(child).segment.as_deref()?;
        rest = rest.strip_prefix(segment)?;
        current = child;
    }

    Some(current)
}
