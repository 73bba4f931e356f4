use crate::{
    visitor::{Visitable, Visitor},
    WordNode, WordTree,
};

/// Settings which customize the output of the [`TreePrinter`] visitor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PrinterSettings {
    /// Add the node identifier after each segment
    pub display_id: bool,
}

/// Marker printed after the segment of nodes that do not end a word.
pub const INCOMPLETE_MARKER: &str = "-";

/// A visitor of the word tree that renders it as indented text, one line per
/// node.
///
/// Each line holds the indentation (one space per level), the segment, a
/// space, optionally the node identifier and a space, then
/// [`INCOMPLETE_MARKER`] if the node does not end a word. The root has no
/// segment and is not printed, but still counts as a level, so top level
/// segments are indented by one space.
///
/// ```rust
/// use wordhierarchy::{visitor::{PrinterSettings, TreePrinter}, WordTree};
///
/// let tree = WordTree::from(["cat", "car", "dog"]);
/// assert_eq!(
///     TreePrinter::print(&tree, PrinterSettings::default()),
///     " ca -\n  t \n  r \n dog \n"
/// );
/// ```
#[derive(Debug)]
pub struct TreePrinter {
    output: String,
    depth: usize,
    settings: PrinterSettings,
}

impl TreePrinter {
    /// Render the given tree.
    pub fn print(tree: &WordTree, settings: PrinterSettings) -> String {
        let mut visitor = TreePrinter::new(settings);
        tree.visit_with(&mut visitor);
        visitor.into_string()
    }

    /// Create a visitor for a single traversal.
    pub fn new(settings: PrinterSettings) -> Self {
        TreePrinter {
            output: String::new(),
            depth: 0,
            settings,
        }
    }

    /// Finish the traversal and return the rendered text.
    pub fn into_string(self) -> String {
        self.output
    }
}

impl Visitor for TreePrinter {
    fn visit(&mut self, node: WordNode<'_>) -> bool {
        let Some(segment) = node.segment() else {
            return false;
        };

        self.output.extend(std::iter::repeat_n(' ', self.depth));
        self.output.push_str(segment);
        self.output.push(' ');
        if self.settings.display_id {
            self.output.push_str(&node.id().to_string());
            self.output.push(' ');
        }
        if !node.is_complete() {
            self.output.push_str(INCOMPLETE_MARKER);
        }
        self.output.push('\n');

        true
    }

    fn before_children(&mut self, _node: WordNode<'_>) {
        self.depth += 1;
    }

    fn after_children(&mut self, _node: WordNode<'_>) {
        self.depth -= 1;
    }
}
