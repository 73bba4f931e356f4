use crate::{
    visitor::{Visitable, Visitor},
    WordNode, WordTree,
};

const ALTERNATION: char = '|';
const OPTIONAL: char = '?';

/// Settings which customize the output of the [`RegexCompiler`] visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexCompilerSettings {
    /// Escape regex metacharacters appearing in word segments, so that every
    /// word is matched literally
    pub escape_literals: bool,
}

impl Default for RegexCompilerSettings {
    fn default() -> Self {
        RegexCompilerSettings {
            escape_literals: true,
        }
    }
}

/// What has to be appended once the children of a node have been rendered.
///
/// One token is pushed for every node that has children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosingToken {
    /// The children were not wrapped
    None,
    /// The children were wrapped in a non-capturing group
    Group,
    /// The children were collapsed into a character class
    Class,
}

impl ClosingToken {
    /// The text that opens the grouping closed by this token.
    pub const fn opening(self) -> &'static str {
        match self {
            ClosingToken::None => "",
            ClosingToken::Group => "(?:",
            ClosingToken::Class => "[",
        }
    }

    /// The text that closes the grouping.
    pub const fn closing(self) -> &'static str {
        match self {
            ClosingToken::None => "",
            ClosingToken::Group => ")",
            ClosingToken::Class => "]",
        }
    }

    /// Decide how the children of `node` have to be wrapped.
    ///
    /// `node` must have at least one child.
    fn for_children_of(node: WordNode<'_>) -> Self {
        if node.is_root() {
            // Top level alternatives are never wrapped
            return ClosingToken::None;
        }

        let mut children = node.children();
        if children.len() > 1 {
            if children.all(|child| child.is_leaf() && is_single_char(child)) {
                ClosingToken::Class
            } else {
                ClosingToken::Group
            }
        } else {
            match children.next() {
                Some(child) if !child.is_leaf() || !is_single_char(child) => ClosingToken::Group,
                _ => ClosingToken::None,
            }
        }
    }
}

fn is_single_char(node: WordNode<'_>) -> bool {
    let mut chars = node.segment().unwrap_or_default().chars();
    chars.next().is_some() && chars.next().is_none()
}

/// A visitor of the word tree that compiles it into a single regular
/// expression matching exactly the complete words of the tree.
///
/// The pattern is built in one pre-order pass:
///  - Each node appends its segment. Leaves then append an alternation
///    separator, unless they sit inside a character class.
///  - Before the children of a node, a [`ClosingToken`] is chosen and its
///    opening text appended. Two or more single character leaves become a
///    character class, any other set of several children a non-capturing
///    group. A single child is only grouped if it is longer than one
///    character or has children of its own.
///  - After the children, the trailing separator is removed (outside
///    character classes), the grouping is closed, `?` is appended if the node
///    itself is a complete word, and a separator is appended for the next
///    sibling.
///
/// ```rust
/// use wordhierarchy::{visitor::RegexCompiler, WordTree};
///
/// let tree = WordTree::from(["cat", "car", "dog"]);
/// assert_eq!(RegexCompiler::compile(&tree), "ca[tr]|dog");
///
/// let tree = WordTree::from(["a", "ab"]);
/// assert_eq!(RegexCompiler::compile(&tree), "ab?");
/// ```
///
/// The pattern is not anchored. An empty tree compiles to the empty pattern.
#[derive(Debug)]
pub struct RegexCompiler {
    pattern: String,
    closing_tokens: Vec<ClosingToken>,
    settings: RegexCompilerSettings,
}

impl RegexCompiler {
    /// Compile the given tree with the default settings.
    pub fn compile(tree: &WordTree) -> String {
        Self::compile_with_settings(tree, RegexCompilerSettings::default())
    }

    /// Compile the given tree.
    pub fn compile_with_settings(tree: &WordTree, settings: RegexCompilerSettings) -> String {
        let mut visitor = RegexCompiler::new(settings);
        tree.visit_with(&mut visitor);
        let pattern = visitor.into_pattern();

        tracing::debug!(
            num_words = tree.len(),
            pattern_len = pattern.len(),
            "compiled word tree to regex"
        );

        pattern
    }

    /// Create a visitor for a single traversal.
    pub fn new(settings: RegexCompilerSettings) -> Self {
        RegexCompiler {
            pattern: String::new(),
            closing_tokens: Vec::new(),
            settings,
        }
    }

    /// Finish the traversal and return the pattern.
    pub fn into_pattern(mut self) -> String {
        // The last top level alternative has no sibling after it
        self.pattern.pop();
        self.pattern
    }

    fn current_token(&self) -> ClosingToken {
        self.closing_tokens
            .last()
            .copied()
            .unwrap_or(ClosingToken::None)
    }

    fn push_literal(&mut self, segment: &str) {
        if self.settings.escape_literals {
            regex_syntax::escape_into(segment, &mut self.pattern);
        } else {
            self.pattern.push_str(segment);
        }
    }

    fn chop_separator(&mut self) {
        let removed = self.pattern.pop();
        debug_assert_eq!(removed, Some(ALTERNATION));
    }
}

impl Visitor for RegexCompiler {
    fn visit(&mut self, node: WordNode<'_>) -> bool {
        let Some(segment) = node.segment() else {
            return false;
        };

        self.push_literal(segment);
        if node.is_leaf() && self.current_token() != ClosingToken::Class {
            self.pattern.push(ALTERNATION);
        }

        true
    }

    fn before_children(&mut self, node: WordNode<'_>) {
        let token = ClosingToken::for_children_of(node);
        self.pattern.push_str(token.opening());
        self.closing_tokens.push(token);
    }

    fn after_children(&mut self, node: WordNode<'_>) {
        if self.current_token() != ClosingToken::Class {
            self.chop_separator();
        }

        let token = self
            .closing_tokens
            .pop()
            .expect("before_children pushed a token for this node");
        self.pattern.push_str(token.closing());

        if node.is_complete() {
            self.pattern.push(OPTIONAL);
        }
        self.pattern.push(ALTERNATION);
    }
}
