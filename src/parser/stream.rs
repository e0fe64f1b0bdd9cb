//! Lexical stream: the queue of classified tokens the parser consumes
//!
//! The stream is built in one pass from raw input lines. Comment lines (those
//! whose trimmed text starts with `#`) are dropped, the remaining lines are
//! joined with single spaces and split on whitespace runs. Every piece is
//! classified with [`classify`](super::lexer::classify).
//!
//! Running off the end is not an error: an exhausted stream reports
//! [`TokenKind::Eof`] and the lexeme `EOF`.

use super::lexer::{Token, TokenKind};
use std::collections::VecDeque;

/// Lexeme reported once the stream is exhausted.
pub const EOF_LEXEME: &str = "EOF";

/// Marker that starts a comment line.
pub const COMMENT_MARKER: char = '#';

/// Ordered queue of tokens, consumed strictly front to back.
#[derive(Debug, Clone, Default)]
pub struct LexicalStream {
    tokens: VecDeque<Token>,
    consumed: usize,
}

impl LexicalStream {
    /// Build a stream from raw input lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = lines
            .into_iter()
            .filter_map(|line| {
                let trimmed = line.as_ref().trim();
                if trimmed.starts_with(COMMENT_MARKER) {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        let tokens: VecDeque<Token> = joined.split_whitespace().map(Token::new).collect();
        log::debug!("tokenized {} lexemes", tokens.len());

        LexicalStream {
            tokens,
            consumed: 0,
        }
    }

    /// Build a stream from a whole source text.
    pub fn from_source(source: &str) -> Self {
        Self::from_lines(source.lines())
    }

    /// Kind of the front token, or [`TokenKind::Eof`] when exhausted.
    pub fn current_kind(&self) -> TokenKind {
        self.tokens
            .front()
            .map(|token| token.kind)
            .unwrap_or(TokenKind::Eof)
    }

    /// Lexeme of the front token, or `EOF` when exhausted or at an
    /// end-of-input token.
    pub fn current_lexeme(&self) -> &str {
        match self.tokens.front() {
            Some(token) if token.kind != TokenKind::Eof => &token.lexeme,
            _ => EOF_LEXEME,
        }
    }

    /// Simple wrapper around [`current_kind`](Self::current_kind).
    pub fn is_current(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// True if the current kind is any of `kinds`.
    pub fn is_current_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    /// Drop the front token. No-op on an empty stream.
    pub fn advance(&mut self) {
        if self.tokens.pop_front().is_some() {
            self.consumed += 1;
        }
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens advanced past so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(stream: &LexicalStream) -> Vec<TokenKind> {
        stream.remaining().map(|t| t.kind).collect()
    }

    #[test]
    fn test_splits_on_whitespace_runs() {
        let stream = LexicalStream::from_source("x   :=\t1 +\n  2");
        assert_eq!(
            kinds(&stream),
            vec![
                TokenKind::Other,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::AddOp,
                TokenKind::Number,
            ]
        );
    }

    #[test]
    fn test_comment_lines_are_dropped() {
        let stream = LexicalStream::from_lines(["# ignore me := ( read", "read x", "   # indented"]);
        let lexemes: Vec<&str> = stream.remaining().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["read", "x"]);
    }

    #[test]
    fn test_hash_inside_a_line_is_not_a_comment() {
        let stream = LexicalStream::from_source("write x # not a comment");
        assert_eq!(stream.len(), 6);
    }

    #[test]
    fn test_lines_are_joined_with_spaces() {
        // No token may span a line break
        let stream = LexicalStream::from_lines(["x :", "= 1"]);
        assert_eq!(stream.len(), 4);
        assert_eq!(stream.current_lexeme(), "x");
    }

    #[test]
    fn test_empty_input_is_eof() {
        let stream = LexicalStream::from_source("");
        assert!(stream.is_empty());
        assert_eq!(stream.current_kind(), TokenKind::Eof);
        assert_eq!(stream.current_lexeme(), "EOF");
    }

    #[test]
    fn test_advance_past_end_is_a_no_op() {
        let mut stream = LexicalStream::from_source("write 1");
        stream.advance();
        assert_eq!(stream.current_kind(), TokenKind::Number);
        assert_eq!(stream.current_lexeme(), "1");
        stream.advance();
        stream.advance();
        stream.advance();
        assert_eq!(stream.current_kind(), TokenKind::Eof);
        assert_eq!(stream.current_lexeme(), "EOF");
        assert_eq!(stream.consumed(), 2);
    }

    #[test]
    fn test_is_current_any() {
        let stream = LexicalStream::from_source("( 1 )");
        assert!(stream.is_current_any(&[TokenKind::Other, TokenKind::OpenParen]));
        assert!(!stream.is_current_any(&[TokenKind::CloseParen]));
    }
}
