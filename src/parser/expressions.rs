//! Expression parsing implementation
//!
//! Arithmetic expressions use the classic left-factored grammar, so `+`/`-`
//! bind looser than `*`/`/` without any precedence table:
//!
//! ```text
//! expr        -> term term_tail
//! term_tail   -> ADD_OP term term_tail | ε
//! term        -> factor factor_tail
//! factor_tail -> MULT_OP factor factor_tail | ε
//! factor      -> OPEN_PAREN expr CLOSE_PAREN | OTHER | NUMBER
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::emitter::ParseNode;
use crate::errors::SyntaxError;
use crate::parser::grammar::Nonterminal;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// expr -> term term_tail
    pub(crate) fn expr(&mut self, parent: &ParseNode) -> Result<(), SyntaxError> {
        let node = self.enter(parent, Nonterminal::Expr);

        self.term(&node)?;
        self.term_tail(&node)
    }

    /// term_tail -> ADD_OP term term_tail | ε
    ///
    /// Iterative: each repetition nests a new tail node under the previous
    /// one, so the emitted tree matches the right-recursive rule.
    pub(crate) fn term_tail(&mut self, parent: &ParseNode) -> Result<(), SyntaxError> {
        let mut node = self.enter(parent, Nonterminal::TermTail);

        while self.check(TokenKind::AddOp) {
            self.terminal(&node, TokenKind::AddOp)?;
            self.term(&node)?;
            node = self.enter(&node, Nonterminal::TermTail);
        }

        self.emitter.add_empty(&node);
        Ok(())
    }

    /// term -> factor factor_tail
    pub(crate) fn term(&mut self, parent: &ParseNode) -> Result<(), SyntaxError> {
        let node = self.enter(parent, Nonterminal::Term);

        self.factor(&node)?;
        self.factor_tail(&node)
    }

    /// factor_tail -> MULT_OP factor factor_tail | ε
    pub(crate) fn factor_tail(&mut self, parent: &ParseNode) -> Result<(), SyntaxError> {
        let mut node = self.enter(parent, Nonterminal::FactorTail);

        while self.check(TokenKind::MultOp) {
            self.terminal(&node, TokenKind::MultOp)?;
            self.factor(&node)?;
            node = self.enter(&node, Nonterminal::FactorTail);
        }

        self.emitter.add_empty(&node);
        Ok(())
    }

    /// factor -> OPEN_PAREN expr CLOSE_PAREN | OTHER | NUMBER
    ///
    /// `NUMBER` is the fallback alternative, so any other token is reported
    /// as a missing number.
    pub(crate) fn factor(&mut self, parent: &ParseNode) -> Result<(), SyntaxError> {
        let node = self.enter(parent, Nonterminal::Factor);

        match self.lexer.current_kind() {
            TokenKind::OpenParen => {
                self.terminal(&node, TokenKind::OpenParen)?;
                self.expr(&node)?;
                self.terminal(&node, TokenKind::CloseParen)
            }
            TokenKind::Other => self.terminal(&node, TokenKind::Other),
            _ => self.terminal(&node, TokenKind::Number),
        }
    }
}
