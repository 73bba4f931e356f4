//! Module containing the implementation of [`WordTree`].

use crate::{insert, search, EmptyWordError, NodeArena, NodeId, WordNode};
use std::fmt;

/// A set of words stored as a radix tree.
///
/// Every node except the root carries a non-empty text segment. A path from
/// the root spells a word, and nodes where a stored word ends are marked
/// complete. Chains of nodes are only split where words diverge, so siblings
/// never start with the same character.
///
/// The tree is built up front and then handed to the visitors in
/// [`visitor`](crate::visitor), which only ever borrow it immutably.
#[derive(Clone, PartialEq, Eq)]
pub struct WordTree {
    /// The number of complete words stored in the tree.
    num_words: usize,
    /// Storage for every node, including the root.
    arena: NodeArena,
}

impl WordTree {
    /// Create a new, empty [`WordTree`] containing only the root node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordhierarchy::WordTree;
    ///
    /// let tree = WordTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.num_nodes(), 1);
    /// ```
    pub fn new() -> Self {
        WordTree {
            num_words: 0,
            arena: NodeArena::new(),
        }
    }

    /// Returns the number of words stored in the tree.
    pub fn len(&self) -> usize {
        self.num_words
    }

    /// Returns true if the tree stores no words.
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    /// Returns the number of nodes in the tree, including the root.
    pub fn num_nodes(&self) -> usize {
        self.arena.len()
    }

    /// Returns the root node, which has no segment.
    pub fn root(&self) -> WordNode<'_> {
        WordNode::new(&self.arena, NodeId::ROOT)
    }

    /// Returns the node with the given identifier, if it belongs to this tree.
    pub fn node(&self, id: NodeId) -> Option<WordNode<'_>> {
        self.arena
            .contains(id)
            .then(|| WordNode::new(&self.arena, id))
    }

    /// Returns true if `word` was inserted into the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordhierarchy::WordTree;
    ///
    /// let tree = WordTree::from(["cat", "car"]);
    /// assert!(tree.contains("cat"));
    /// assert!(!tree.contains("ca"));
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// Returns the node where `word` ends, if `word` is stored in the tree.
    pub fn find(&self, word: &str) -> Option<WordNode<'_>> {
        search(&self.arena, word)
            .map(|id| WordNode::new(&self.arena, id))
            .filter(|node| node.is_complete())
    }

    /// Insert a word into the tree.
    ///
    /// Returns `Ok(true)` if the word was newly added and `Ok(false)` if it was
    /// already present.
    ///
    /// # Errors
    ///
    ///  - Returns an [`EmptyWordError`] if `word` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordhierarchy::WordTree;
    ///
    /// let mut tree = WordTree::new();
    /// assert_eq!(tree.try_insert("cat"), Ok(true));
    /// assert_eq!(tree.try_insert("cat"), Ok(false));
    /// assert!(tree.try_insert("").is_err());
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn try_insert(&mut self, word: &str) -> Result<bool, EmptyWordError> {
        let result = insert(&mut self.arena, word)?;
        tracing::trace!(word, node = %result.node, existed = result.existed, "inserted word");
        if !result.existed {
            self.num_words += 1;
        }
        Ok(!result.existed)
    }

    /// Insert a word into the tree.
    ///
    /// Returns true if the word was newly added. Empty words are ignored and
    /// return false.
    pub fn insert(&mut self, word: &str) -> bool {
        self.try_insert(word).unwrap_or(false)
    }
}

impl Default for WordTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WordTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordTree")
            .field("num_words", &self.num_words)
            .field("num_nodes", &self.arena.len())
            .finish()
    }
}

impl<S: AsRef<str>> Extend<S> for WordTree {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for word in iter {
            let _ = self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordTree {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut tree = WordTree::new();
        tree.extend(iter);
        tracing::debug!(
            num_words = tree.len(),
            num_nodes = tree.num_nodes(),
            "built word tree"
        );
        tree
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for WordTree {
    fn from(words: [S; N]) -> Self {
        words.into_iter().collect()
    }
}
