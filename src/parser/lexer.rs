//! Token classifier for the analyzer's toy language
//!
//! Lexemes arrive already split on whitespace (see [`super::stream`]), so this
//! module only decides which [`TokenKind`] a lexeme belongs to. There is no
//! character-level scanning: `a:=1` is a single lexeme and classifies as
//! [`TokenKind::Other`].

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// All token kinds, in declaration order.
///
/// Most kinds own a fixed set of spellings; [`TokenKind::Eof`],
/// [`TokenKind::Other`] and [`TokenKind::Number`] are assigned by rule instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OpenParen,  // (
    CloseParen, // )
    AddOp,      // + -
    Read,       // read
    Write,      // write
    MultOp,     // * /
    If,         // if
    Then,       // then
    EndIf,      // fi
    Else,       // else
    While,      // while
    Do,         // do
    Done,       // od
    Assign,     // :=
    Relation,   // < > <= >= = !=

    // Assigned by rule, never by spelling
    Eof,
    Other,
    Number,
}

impl TokenKind {
    /// Every kind in declaration order. Classification scans in this order.
    pub const ALL: [TokenKind; 18] = [
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::AddOp,
        TokenKind::Read,
        TokenKind::Write,
        TokenKind::MultOp,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::EndIf,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::Done,
        TokenKind::Assign,
        TokenKind::Relation,
        TokenKind::Eof,
        TokenKind::Other,
        TokenKind::Number,
    ];

    /// The exact spellings that classify as this kind.
    pub fn lexemes(self) -> &'static [&'static str] {
        match self {
            TokenKind::OpenParen => &["("],
            TokenKind::CloseParen => &[")"],
            TokenKind::AddOp => &["+", "-"],
            TokenKind::Read => &["read"],
            TokenKind::Write => &["write"],
            TokenKind::MultOp => &["*", "/"],
            TokenKind::If => &["if"],
            TokenKind::Then => &["then"],
            TokenKind::EndIf => &["fi"],
            TokenKind::Else => &["else"],
            TokenKind::While => &["while"],
            TokenKind::Do => &["do"],
            TokenKind::Done => &["od"],
            TokenKind::Assign => &[":="],
            TokenKind::Relation => &["<", ">", "<=", ">=", "=", "!="],
            TokenKind::Eof | TokenKind::Other | TokenKind::Number => &[],
        }
    }

    /// The grammar symbol for this kind, as it appears in tree labels and
    /// syntax error messages.
    ///
    /// `od` closes a `while` loop, so [`TokenKind::Done`] is the `ENDWHILE`
    /// terminal of the grammar.
    pub fn symbol(self) -> &'static str {
        match self {
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::AddOp => "ADD_OP",
            TokenKind::Read => "READ",
            TokenKind::Write => "WRITE",
            TokenKind::MultOp => "MULT_OP",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::EndIf => "ENDIF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Done => "ENDWHILE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Relation => "RELATION",
            TokenKind::Eof => "EOF",
            TokenKind::Other => "OTHER",
            TokenKind::Number => "NUMBER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Spelling table built once from [`TokenKind::ALL`].
///
/// The first kind to claim a spelling keeps it, which matches a linear scan
/// in declaration order even if two sets were ever to overlap.
fn spelling_table() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = FxHashMap::default();
        for kind in TokenKind::ALL {
            for &lexeme in kind.lexemes() {
                table.entry(lexeme).or_insert(kind);
            }
        }
        table
    })
}

/// Classify a lexeme. Total: every string maps to exactly one kind.
pub fn classify(lexeme: &str) -> TokenKind {
    let lexeme = lexeme.trim();

    if lexeme.is_empty() {
        return TokenKind::Eof;
    }

    // Digits only: no sign, no decimal point
    if lexeme.bytes().all(|b| b.is_ascii_digit()) {
        return TokenKind::Number;
    }

    spelling_table()
        .get(lexeme)
        .copied()
        .unwrap_or(TokenKind::Other)
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(lexeme: impl Into<String>) -> Self {
        let lexeme = lexeme.into();
        let kind = classify(&lexeme);
        Token { lexeme, kind }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{lexeme={}, token={}}}", self.lexeme, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(classify("read"), TokenKind::Read);
        assert_eq!(classify("write"), TokenKind::Write);
        assert_eq!(classify("if"), TokenKind::If);
        assert_eq!(classify("then"), TokenKind::Then);
        assert_eq!(classify("fi"), TokenKind::EndIf);
        assert_eq!(classify("else"), TokenKind::Else);
        assert_eq!(classify("while"), TokenKind::While);
        assert_eq!(classify("do"), TokenKind::Do);
        assert_eq!(classify("od"), TokenKind::Done);
    }

    #[test]
    fn test_operators() {
        assert_eq!(classify("("), TokenKind::OpenParen);
        assert_eq!(classify(")"), TokenKind::CloseParen);
        assert_eq!(classify("-"), TokenKind::AddOp);
        assert_eq!(classify("/"), TokenKind::MultOp);
        assert_eq!(classify(":="), TokenKind::Assign);
        for rel in ["<", ">", "<=", ">=", "=", "!="] {
            assert_eq!(classify(rel), TokenKind::Relation, "{rel}");
        }
    }

    #[test]
    fn test_rule_based_kinds() {
        assert_eq!(classify(""), TokenKind::Eof);
        assert_eq!(classify("   "), TokenKind::Eof);
        assert_eq!(classify("0"), TokenKind::Number);
        assert_eq!(classify("00042"), TokenKind::Number);
        assert_eq!(classify("-1"), TokenKind::Other);
        assert_eq!(classify("1.5"), TokenKind::Other);
        assert_eq!(classify("x"), TokenKind::Other);
        assert_eq!(classify("::="), TokenKind::Other);
        assert_eq!(classify("a:=1"), TokenKind::Other);
        // Case matters
        assert_eq!(classify("IF"), TokenKind::Other);
    }

    #[test]
    fn test_non_ascii_digits_are_not_numbers() {
        assert_eq!(classify("١٢"), TokenKind::Other);
    }

    #[test]
    fn test_spelling_sets_do_not_overlap() {
        let mut seen = FxHashMap::default();
        for kind in TokenKind::ALL {
            for &lexeme in kind.lexemes() {
                assert!(
                    seen.insert(lexeme, kind).is_none(),
                    "'{lexeme}' claimed twice"
                );
            }
        }
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("while");
        assert_eq!(token.kind, TokenKind::While);
        assert_eq!(token.to_string(), "{lexeme=while, token=WHILE}");
    }
}
