//! Parse-tree node identity and rendering helpers

use std::fmt;

/// Numeric node identity, unique within one parse.
pub type NodeId = u32;

/// A node of the emitted tree: a display label plus a unique id.
///
/// The parser only holds these transiently, to pass as the parent of deeper
/// calls. The tree itself lives in the emitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    label: String,
    id: NodeId,
}

impl ParseNode {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn id(&self) -> NodeId {
        self.id
    }
}

/// Graph-wide node name, `<label>-<id>`.
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.label, self.id)
    }
}

/// Hands out node ids in strictly increasing order.
///
/// Owned by a single emitter, so two analyses never share a counter.
#[derive(Debug, Clone, Default)]
pub struct NodeIds {
    next: NodeId,
}

impl NodeIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh node.
    pub fn allocate(&mut self, label: impl Into<String>) -> ParseNode {
        let id = self.next;
        self.next += 1;
        ParseNode {
            label: label.into(),
            id,
        }
    }

    /// Number of ids handed out so far.
    pub fn allocated(&self) -> NodeId {
        self.next
    }
}

/// Visual classification of a node. Rendering only, never semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// The document root
    Root,
    /// A grammar-rule application
    Internal,
    /// A consumed token
    Terminal,
    /// An empty-production marker
    Empty,
    /// Where parsing stopped
    Error,
}

impl Shape {
    /// Graphviz `shape` attribute.
    pub fn dot_name(self) -> &'static str {
        match self {
            Shape::Root => "diamond",
            Shape::Internal => "rect",
            Shape::Terminal => "oval",
            Shape::Empty => "none",
            Shape::Error => "octagon",
        }
    }
}

/// Escape text for use inside a double-quoted DOT string.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(ch),
        }
    }
    escaped
}
