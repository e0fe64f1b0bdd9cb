//! # Introduction
//!
//! descent checks a small whitespace-separated teaching language against its
//! LL(1) grammar and renders the derivation as a Graphviz `digraph`.  Every
//! emitted piece of the document is also recorded, so the derivation can be
//! replayed step by step in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Analysis pipeline
//!
//! ```text
//! Source → LexicalStream → Parser → TreeEmitter → DOT document / TUI
//! ```
//!
//! 1. [`parser::lexer`]: classifies each whitespace-delimited word into a
//!    [`parser::TokenKind`].
//! 2. [`parser::stream`]: turns source lines into a token queue, dropping
//!    comment lines.
//! 3. [`parser`]: one recursive-descent routine per nonterminal, stopping at
//!    the first mismatch.
//! 4. [`emitter`]: writes DOT nodes and edges with unique ids and keeps the
//!    fragment log.
//! 5. [`ui`]: ratatui-based replay viewer; not part of the stable library API.
//!
//! ## Grammar
//!
//! See [`parser::GRAMMAR`].
//!
//! ```
//! use descent::{analyze_source, AnalyzerOptions};
//!
//! let analysis = analyze_source("read x", &AnalyzerOptions::default());
//! assert!(analysis.is_success());
//! assert!(analysis.document().starts_with("digraph ParseTree {"));
//! ```

pub mod analysis;
pub mod config;
pub mod emitter;
pub mod errors;
pub mod parser;
pub mod ui;

pub use analysis::{analyze_file, analyze_lines, analyze_source, Analysis, AnalyzerOptions};
pub use errors::{AnalyzeError, SyntaxError};
