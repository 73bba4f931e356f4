use crate::{
    visitor::{Visitable, Visitor},
    WordNode, WordTree,
};
use std::{
    fmt::Write as _,
    io::{self, Write},
};

/// Settings which customize the output of the [`DotPrinter`] visitor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DotPrinterSettings {
    /// Add node identifiers to the node labels
    pub display_node_id: bool,
}

/// A visitor of the word tree that will print the tree in "dot" notation.
///
/// Every node becomes a record labelled with its segment, complete nodes are
/// drawn with a double border, and every parent/child link becomes an edge.
///
/// See ['DOT Language | Graphviz'](https://graphviz.org/doc/info/lang.html) for
/// information about syntax and example of the language.
#[derive(Debug)]
pub struct DotPrinter {
    output: String,
    settings: DotPrinterSettings,
}

impl DotPrinter {
    /// Write the dot-format of the given tree to the given output.
    pub fn print<O: Write>(
        mut output: O,
        tree: &WordTree,
        settings: DotPrinterSettings,
    ) -> io::Result<()> {
        let mut visitor = DotPrinter {
            output: String::new(),
            settings,
        };

        visitor.output_prelude();
        tree.visit_with(&mut visitor);
        visitor.output_epilogue();

        output.write_all(visitor.output.as_bytes())
    }

    fn output_prelude(&mut self) {
        self.output.push_str("strict digraph G {\n");
        self.output.push_str("node [shape=record]\n");
    }

    fn output_epilogue(&mut self) {
        self.output.push_str("}\n");
    }
}

/// Escape the characters that are special inside a record label.
fn escape_label(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len());
    for c in segment.chars() {
        if matches!(c, '"' | '\\' | '{' | '}' | '|' | '<' | '>' | ' ') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Visitor for DotPrinter {
    fn visit(&mut self, node: WordNode<'_>) -> bool {
        let node_id = node.id();
        let label = node.segment().map_or_else(|| "root".to_owned(), escape_label);

        // Writing into a `String` cannot fail
        let _ = write!(self.output, "n{node_id} [label=\"{{");
        if self.settings.display_node_id {
            let _ = write!(self.output, "{node_id} | ");
        }
        let _ = write!(self.output, "{label}}}\"");
        if node.is_complete() {
            self.output.push_str(" peripheries=2");
        }
        self.output.push_str("]\n");

        if let Some(parent) = node.parent() {
            let _ = writeln!(self.output, "n{} -> n{node_id}", parent.id());
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_tree_output_to_dot() {
        let tree = WordTree::from(["cat", "car", "dog"]);

        let mut buffer = Vec::new();
        DotPrinter::print(&mut buffer, &tree, DotPrinterSettings::default()).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            [
                "strict digraph G {",
                "node [shape=record]",
                "n0 [label=\"{root}\"]",
                "n1 [label=\"{ca}\"]",
                "n0 -> n1",
                "n2 [label=\"{t}\" peripheries=2]",
                "n1 -> n2",
                "n3 [label=\"{r}\" peripheries=2]",
                "n1 -> n3",
                "n4 [label=\"{dog}\" peripheries=2]",
                "n0 -> n4",
                "}",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn node_ids_and_escaping() {
        let tree = WordTree::from(["a|b"]);
        let settings = DotPrinterSettings {
            display_node_id: true,
        };

        let mut buffer = Vec::new();
        DotPrinter::print(&mut buffer, &tree, settings).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("n1 [label=\"{1 | a\\|b}\" peripheries=2]\n"));
        assert!(output.contains("n0 [label=\"{0 | root}\"]\n"));
    }
}
