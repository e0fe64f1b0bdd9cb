//! Parse-tree emission as Graphviz DOT
//!
//! The emitter never builds a tree in memory. Every grammar-rule application
//! and every consumed token becomes one edge declaration, appended in the
//! order the parser makes its decisions:
//!
//! ```text
//! digraph ParseTree {
//!     "PARSE TREE-0" [label="PARSE TREE", shape=diamond];
//!     "PARSE TREE-0" -> {"<PROGRAM>-1" [label="<PROGRAM>", shape=rect]};
//!     ...
//! }
//! ```
//!
//! Each call is also kept as a [`Fragment`] so a finished analysis can be
//! replayed step by step (see [`crate::ui`]).

pub mod link;
pub mod node;

pub use link::graphviz_online_url;
pub use node::{NodeId, NodeIds, ParseNode, Shape};

use crate::errors::SyntaxError;
use node::escape;

/// Display label of empty-production leaves.
pub const EPSILON_LABEL: &str = "&epsilon;";

/// One piece of the emitted document, as produced by a single emitter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Shape of the node this fragment introduces, `None` for the footer
    pub shape: Option<Shape>,
    pub text: String,
}

/// Streams parse-tree nodes into a DOT document.
#[derive(Debug, Default)]
pub struct TreeEmitter {
    ids: NodeIds,
    fragments: Vec<Fragment>,
    finished: bool,
}

impl TreeEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the document with its root node. Must be the first call.
    pub fn write_header(&mut self, label: &str) -> ParseNode {
        debug_assert!(self.fragments.is_empty(), "header written twice");
        let node = self.ids.allocate(label);
        let text = format!(
            "digraph ParseTree {{\n\t\"{}\" [label=\"{}\", shape={}];\n",
            escape(&node.to_string()),
            escape(node.label()),
            Shape::Root.dot_name()
        );
        self.push(Some(Shape::Root), text);
        node
    }

    /// Add a grammar-rule node under `parent` and return it.
    pub fn add_internal(&mut self, parent: &ParseNode, label: &str) -> ParseNode {
        let node = self.ids.allocate(label);
        self.push_edge(parent, &node, node.label(), Shape::Internal);
        node
    }

    /// Add a token leaf under `parent`. Leaves are never extended, so the
    /// node is not returned.
    pub fn add_terminal(&mut self, parent: &ParseNode, lexeme: &str) {
        let node = self.ids.allocate(lexeme);
        self.push_edge(parent, &node, lexeme, Shape::Terminal);
    }

    /// Mark an empty-production derivation under `parent`.
    pub fn add_empty(&mut self, parent: &ParseNode) {
        let node = self.ids.allocate("EMPTY");
        self.push_edge(parent, &node, EPSILON_LABEL, Shape::Empty);
    }

    /// Truncate the document at `parent` with an error node and hand the
    /// error back for the caller to propagate.
    pub fn syntax_error(&mut self, error: SyntaxError, parent: &ParseNode) -> SyntaxError {
        let node = self.ids.allocate("ERROR");
        let text = format!(
            "\t\"{}\" -> {{\"{}\" [label=\"{}\", shape={}]}};\n}}\n",
            escape(&parent.to_string()),
            escape(&node.to_string()),
            escape(&error.to_string()),
            Shape::Error.dot_name()
        );
        self.push(Some(Shape::Error), text);
        self.finished = true;
        error
    }

    /// Close a successfully parsed document.
    pub fn write_footer(&mut self) {
        debug_assert!(!self.finished, "document already closed");
        self.push(None, "}\n".to_string());
        self.finished = true;
    }

    /// Everything emitted so far.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The document text emitted so far.
    pub fn document(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    /// True once the footer or an error node has been written.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn nodes_allocated(&self) -> NodeId {
        self.ids.allocated()
    }

    fn push_edge(&mut self, parent: &ParseNode, child: &ParseNode, label: &str, shape: Shape) {
        let text = format!(
            "\t\"{}\" -> {{\"{}\" [label=\"{}\", shape={}]}};\n",
            escape(&parent.to_string()),
            escape(&child.to_string()),
            escape(label),
            shape.dot_name()
        );
        self.push(Some(shape), text);
    }

    fn push(&mut self, shape: Option<Shape>, text: String) {
        self.fragments.push(Fragment { shape, text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_footer() {
        let mut emitter = TreeEmitter::new();
        let root = emitter.write_header("PARSE TREE");
        assert_eq!(root.id(), 0);
        emitter.write_footer();
        assert_eq!(
            emitter.document(),
            "digraph ParseTree {\n\t\"PARSE TREE-0\" [label=\"PARSE TREE\", shape=diamond];\n}\n"
        );
        assert!(emitter.is_finished());
    }

    #[test]
    fn test_edges() {
        let mut emitter = TreeEmitter::new();
        let root = emitter.write_header("ROOT");
        let program = emitter.add_internal(&root, "<PROGRAM>");
        emitter.add_terminal(&program, "x");
        emitter.add_empty(&program);

        let lines: Vec<&str> = emitter.fragments()[1..]
            .iter()
            .map(|f| f.text.as_str())
            .collect();
        assert_eq!(
            lines,
            vec![
                "\t\"ROOT-0\" -> {\"<PROGRAM>-1\" [label=\"<PROGRAM>\", shape=rect]};\n",
                "\t\"<PROGRAM>-1\" -> {\"x-2\" [label=\"x\", shape=oval]};\n",
                "\t\"<PROGRAM>-1\" -> {\"EMPTY-3\" [label=\"&epsilon;\", shape=none]};\n",
            ]
        );
        assert!(!emitter.is_finished());
    }

    #[test]
    fn test_syntax_error_truncates() {
        let mut emitter = TreeEmitter::new();
        let root = emitter.write_header("ROOT");
        let err = emitter.syntax_error(SyntaxError::new("ASSIGN", "::="), &root);
        assert_eq!(err.expected, "ASSIGN");

        let last = emitter.fragments().last().unwrap();
        assert_eq!(last.shape, Some(Shape::Error));
        assert_eq!(
            last.text,
            "\t\"ROOT-0\" -> {\"ERROR-1\" [label=\"SYNTAX ERROR: 'ASSIGN' was expected but '::=' was found.\", shape=octagon]};\n}\n"
        );
        assert!(emitter.is_finished());
    }

    #[test]
    fn test_quotes_in_lexemes_are_escaped() {
        let mut emitter = TreeEmitter::new();
        let root = emitter.write_header("ROOT");
        emitter.add_terminal(&root, "\"");
        assert_eq!(
            emitter.fragments()[1].text,
            "\t\"ROOT-0\" -> {\"\\\"-1\" [label=\"\\\"\", shape=oval]};\n"
        );
    }

    #[test]
    fn test_every_call_allocates_one_id() {
        let mut emitter = TreeEmitter::new();
        let root = emitter.write_header("ROOT");
        let inner = emitter.add_internal(&root, "<A>");
        emitter.add_terminal(&inner, "a");
        emitter.add_empty(&inner);
        assert_eq!(emitter.nodes_allocated(), 4);
        assert_eq!(emitter.fragments().len(), 4);
    }
}
