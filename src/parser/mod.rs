//! Syntax analysis for the toy imperative language
//!
//! This module turns raw source lines into a parse tree, emitted as it is
//! derived:
//! - [`lexer`]: token kinds and lexeme classification
//! - [`stream`]: the token queue consumed by the parser
//! - [`grammar`]: the fixed grammar and its nonterminal tags
//! - [`parse`]: the recursive descent [`Parser`]
//!
//! # Language
//!
//! Statements: assignment (`x := e`), `read x`, `write e`,
//! `if c then ... fi`, `while c do ... od`. Expressions: `+ - * /`,
//! parentheses, identifiers and unsigned integers. Conditions compare two
//! expressions with `< > <= >= = !=`.
//!
//! Every token must be separated by whitespace, and a line whose first
//! non-blank character is `#` is a comment.
//!
//! # Parser Implementation
//!
//! Hand-written LL(1) recursive descent, one procedure per grammar symbol.
//! No external parser generator dependencies.

mod expressions;
mod statements;
mod terminals;

pub mod grammar;
pub mod lexer;
pub mod parse;
pub mod stream;

pub use grammar::{Nonterminal, GRAMMAR};
pub use lexer::{classify, Token, TokenKind};
pub use parse::{Parser, DEFAULT_ROOT_LABEL};
pub use stream::LexicalStream;
