//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its shared helpers and the
//! [`Parser::analyze`] entry point.
//!
//! # Parser Architecture
//!
//! Top-down, left-to-right recursive descent with one token of lookahead and
//! no backtracking. There is one procedure per grammar symbol:
//! - `statements`: `program`, `stmt_list`, `stmt`, `condition`
//! - `expressions`: `expr`, `term_tail`, `term`, `factor_tail`, `factor`
//! - `terminals`: one matcher per terminal
//!
//! Parsing and tree emission are the same pass. Each procedure adds its own
//! node to the [`TreeEmitter`] before descending, so the order of edges in
//! the output is the order rules were applied.
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::emitter::{Fragment, ParseNode, TreeEmitter};
use crate::errors::SyntaxError;
use crate::parser::grammar::Nonterminal;
use crate::parser::lexer::TokenKind;
use crate::parser::stream::LexicalStream;

/// Label of the document's root node unless configured otherwise.
pub const DEFAULT_ROOT_LABEL: &str = "PARSE TREE";

/// Recursive descent parser that emits its parse tree as it goes
pub struct Parser {
    pub(crate) lexer: LexicalStream,
    pub(crate) emitter: TreeEmitter,
    root_label: String,
}

impl Parser {
    pub fn new(lexer: LexicalStream) -> Self {
        Self::with_root_label(lexer, DEFAULT_ROOT_LABEL)
    }

    pub fn with_root_label(lexer: LexicalStream, root_label: impl Into<String>) -> Self {
        Parser {
            lexer,
            emitter: TreeEmitter::new(),
            root_label: root_label.into(),
        }
    }

    /// Parse the whole stream, emitting the tree.
    ///
    /// On success the document is closed with its footer. On the first syntax
    /// error the document has already been truncated; the error is logged and
    /// returned.
    pub fn analyze(&mut self) -> Result<(), SyntaxError> {
        let root = self.emitter.write_header(&self.root_label);

        match self.program(&root) {
            Ok(()) => {
                self.emitter.write_footer();
                if !self.lexer.is_empty() {
                    log::warn!(
                        "{} token(s) after the end of the program were ignored, starting at '{}'",
                        self.lexer.len(),
                        self.lexer.current_lexeme()
                    );
                }
                log::debug!(
                    "parse succeeded with {} nodes",
                    self.emitter.nodes_allocated()
                );
                Ok(())
            }
            Err(err) => {
                log::error!("{err}");
                Err(err)
            }
        }
    }

    /// The document emitted so far.
    pub fn document(&self) -> String {
        self.emitter.document()
    }

    pub fn fragments(&self) -> &[Fragment] {
        self.emitter.fragments()
    }

    /// Tokens left in the stream.
    pub fn lexer(&self) -> &LexicalStream {
        &self.lexer
    }

    /// Split the parser into its remaining tokens and emitter.
    pub fn into_parts(self) -> (LexicalStream, TreeEmitter) {
        (self.lexer, self.emitter)
    }

    // ===== Helper methods =====

    /// Add the node for a nonterminal about to be expanded.
    pub(crate) fn enter(&mut self, parent: &ParseNode, rule: Nonterminal) -> ParseNode {
        log::trace!("{rule} at '{}'", self.lexer.current_lexeme());
        self.emitter.add_internal(parent, &rule.label())
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.lexer.is_current(kind)
    }

    /// Build the error for the current token, truncate the document at
    /// `parent` and return the error to propagate.
    pub(crate) fn raise(&mut self, expected: &str, parent: &ParseNode) -> SyntaxError {
        let err = SyntaxError::new(expected, self.lexer.current_lexeme());
        self.emitter.syntax_error(err, parent)
    }
}
