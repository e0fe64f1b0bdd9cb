//! The fixed grammar and its nonterminal tags
//!
//! Every nonterminal procedure announces itself with one of these tags, so
//! the emitted tree labels come from the grammar rather than from the Rust
//! function names.

use super::lexer::TokenKind;
use std::fmt;

/// The grammar, terminals in capitals.
pub const GRAMMAR: &str = "\
program        -> stmt_list
stmt_list      -> stmt stmt_list | ε
stmt           -> IF condition THEN stmt_list ENDIF
                | OTHER ASSIGN expr
                | READ OTHER
                | WRITE expr
                | WHILE condition DO stmt_list ENDWHILE
condition      -> expr RELATION expr
expr           -> term term_tail
term_tail      -> ADD_OP term term_tail | ε
term           -> factor factor_tail
factor_tail    -> MULT_OP factor factor_tail | ε
factor         -> OPEN_PAREN expr CLOSE_PAREN | OTHER | NUMBER
";

/// Kinds that can start a statement; `stmt_list` keeps going while the
/// current token is one of these.
///
/// No statement starts with `(`: a leading parenthesis is reported by `stmt`.
pub const STMT_START: [TokenKind; 6] = [
    TokenKind::Other,
    TokenKind::Read,
    TokenKind::Write,
    TokenKind::If,
    TokenKind::While,
    TokenKind::OpenParen,
];

/// Expected-symbol name used when no statement alternative applies.
pub const STATEMENT: &str = "STATEMENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nonterminal {
    Program,
    StmtList,
    Stmt,
    Condition,
    Expr,
    TermTail,
    Term,
    FactorTail,
    Factor,
}

impl Nonterminal {
    pub fn name(self) -> &'static str {
        match self {
            Nonterminal::Program => "program",
            Nonterminal::StmtList => "stmt_list",
            Nonterminal::Stmt => "stmt",
            Nonterminal::Condition => "condition",
            Nonterminal::Expr => "expr",
            Nonterminal::TermTail => "term_tail",
            Nonterminal::Term => "term",
            Nonterminal::FactorTail => "factor_tail",
            Nonterminal::Factor => "factor",
        }
    }

    /// Tree label: the rule name uppercased and bracketed, e.g. `<STMT_LIST>`.
    pub fn label(self) -> String {
        format!("<{}>", self.name().to_uppercase())
    }
}

impl fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tree label of the node wrapping a matched terminal, e.g. `<ASSIGN>`.
pub fn terminal_label(kind: TokenKind) -> String {
    format!("<{}>", kind.symbol())
}
