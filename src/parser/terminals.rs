//! Terminal matching
//!
//! Every terminal of the grammar is matched the same way: compare the current
//! token kind, then either record the token in the tree and advance, or raise
//! a syntax error naming the terminal and the lexeme found. There are no
//! lenient terminals; `DO` and `ENDWHILE` fail like every other one.

use crate::emitter::ParseNode;
use crate::errors::SyntaxError;
use crate::parser::grammar::terminal_label;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Match one terminal of kind `expected` under `parent`.
    ///
    /// A match adds a `<SYMBOL>` node holding the lexeme as an oval leaf.
    pub(crate) fn terminal(
        &mut self,
        parent: &ParseNode,
        expected: TokenKind,
    ) -> Result<(), SyntaxError> {
        if !self.check(expected) {
            return Err(self.raise(expected.symbol(), parent));
        }

        log::trace!("matched {} '{}'", expected, self.lexer.current_lexeme());
        let node = self.emitter.add_internal(parent, &terminal_label(expected));
        self.emitter.add_terminal(&node, self.lexer.current_lexeme());
        self.lexer.advance();
        Ok(())
    }
}
