//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! program   -> stmt_list
//! stmt_list -> stmt stmt_list | ε
//! stmt      -> IF condition THEN stmt_list ENDIF
//!            | OTHER ASSIGN expr
//!            | READ OTHER
//!            | WRITE expr
//!            | WHILE condition DO stmt_list ENDWHILE
//! condition -> expr RELATION expr
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::emitter::ParseNode;
use crate::errors::SyntaxError;
use crate::parser::grammar::{Nonterminal, STATEMENT, STMT_START};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// program -> stmt_list
    pub(crate) fn program(&mut self, parent: &ParseNode) -> Result<(), SyntaxError> {
        let node = self.enter(parent, Nonterminal::Program);

        self.stmt_list(&node)
    }

    /// stmt_list -> stmt stmt_list | ε
    ///
    /// Iterative, like the expression tails: every further statement hangs
    /// off a new `<STMT_LIST>` nested under the previous one.
    pub(crate) fn stmt_list(&mut self, parent: &ParseNode) -> Result<(), SyntaxError> {
        let mut node = self.enter(parent, Nonterminal::StmtList);

        while self.lexer.is_current_any(&STMT_START) {
            self.stmt(&node)?;
            node = self.enter(&node, Nonterminal::StmtList);
        }

        // The list's ε is drawn as a leaf too, so every node ends in a visible child
        self.emitter.add_empty(&node);
        Ok(())
    }

    /// One statement, chosen by the current token.
    pub(crate) fn stmt(&mut self, parent: &ParseNode) -> Result<(), SyntaxError> {
        let node = self.enter(parent, Nonterminal::Stmt);

        match self.lexer.current_kind() {
            TokenKind::If => {
                self.terminal(&node, TokenKind::If)?;
                self.condition(&node)?;
                self.terminal(&node, TokenKind::Then)?;
                self.stmt_list(&node)?;
                self.terminal(&node, TokenKind::EndIf)
            }
            TokenKind::Other => {
                self.terminal(&node, TokenKind::Other)?;
                self.terminal(&node, TokenKind::Assign)?;
                self.expr(&node)
            }
            TokenKind::Read => {
                self.terminal(&node, TokenKind::Read)?;
                self.terminal(&node, TokenKind::Other)
            }
            TokenKind::Write => {
                self.terminal(&node, TokenKind::Write)?;
                self.expr(&node)
            }
            TokenKind::While => {
                self.terminal(&node, TokenKind::While)?;
                self.condition(&node)?;
                self.terminal(&node, TokenKind::Do)?;
                self.stmt_list(&node)?;
                self.terminal(&node, TokenKind::Done)
            }
            _ => Err(self.raise(STATEMENT, &node)),
        }
    }

    /// condition -> expr RELATION expr
    pub(crate) fn condition(&mut self, parent: &ParseNode) -> Result<(), SyntaxError> {
        let node = self.enter(parent, Nonterminal::Condition);

        self.expr(&node)?;
        self.terminal(&node, TokenKind::Relation)?;
        self.expr(&node)
    }
}
