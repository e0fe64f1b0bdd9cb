//! One-call analysis pipeline
//!
//! ```text
//! lines → LexicalStream → Parser (+ TreeEmitter) → Analysis
//! ```
//!
//! Every call builds fresh state, so analysing the same input twice yields
//! byte-identical documents.

use crate::emitter::{Fragment, Shape};
use crate::errors::{self, AnalyzeError, SyntaxError};
use crate::parser::{LexicalStream, Parser, Token, DEFAULT_ROOT_LABEL};
use std::path::Path;

/// Knobs for a single analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Label of the document's root node
    pub root_label: String,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        AnalyzerOptions {
            root_label: DEFAULT_ROOT_LABEL.to_string(),
        }
    }
}

/// Everything a finished (or aborted) analysis produced.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The classified input, before any token was consumed
    pub tokens: Vec<Token>,
    /// Emitter calls, in order
    pub fragments: Vec<Fragment>,
    /// `Err` holds the first syntax error
    pub outcome: Result<(), SyntaxError>,
    /// Tokens still unconsumed when parsing stopped
    pub trailing: usize,
}

impl Analysis {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The generated DOT document.
    pub fn document(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn error(&self) -> Option<&SyntaxError> {
        self.outcome.as_ref().err()
    }

    /// Tokens consumed after the first `step` fragments were emitted.
    ///
    /// Each consumed token produces exactly one terminal leaf.
    pub fn consumed_at(&self, step: usize) -> usize {
        self.fragments
            .iter()
            .take(step)
            .filter(|f| f.shape == Some(Shape::Terminal))
            .count()
    }
}

/// Analyse a program given as raw lines.
pub fn analyze_lines<I, S>(lines: I, options: &AnalyzerOptions) -> Analysis
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stream = LexicalStream::from_lines(lines);
    let tokens: Vec<Token> = stream.remaining().cloned().collect();

    let mut parser = Parser::with_root_label(stream, options.root_label.clone());
    let outcome = parser.analyze();

    let (rest, emitter) = parser.into_parts();
    let fragments = emitter.into_fragments();
    log::debug!(
        "analysis finished: {} tokens, {} fragments, {} left unconsumed",
        tokens.len(),
        fragments.len(),
        rest.len()
    );

    Analysis {
        tokens,
        fragments,
        outcome,
        trailing: rest.len(),
    }
}

/// Analyse a program given as one text.
pub fn analyze_source(source: &str, options: &AnalyzerOptions) -> Analysis {
    analyze_lines(source.lines(), options)
}

/// Read `path` and analyse its contents.
pub fn analyze_file(path: &Path, options: &AnalyzerOptions) -> errors::Result<Analysis> {
    let source = std::fs::read_to_string(path).map_err(|source| AnalyzeError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("analysing {}", path.display());
    Ok(analyze_source(&source, options))
}
