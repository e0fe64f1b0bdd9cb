//! Error types for the analyzer
//!
//! [`SyntaxError`] is the only failure the grammar itself can produce. It is
//! fatal: the first mismatch aborts the whole analysis, there is no recovery.
//! [`AnalyzeError`] covers everything around the grammar: reading and writing
//! files, and the terminal viewer.

use std::io;
use std::path::PathBuf;

/// A terminal did not match the current token.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("SYNTAX ERROR: '{expected}' was expected but '{found}' was found.")]
pub struct SyntaxError {
    /// Grammar symbol the parser wanted
    pub expected: String,
    /// Lexeme actually at the front of the stream (`EOF` when exhausted)
    pub found: String,
}

impl SyntaxError {
    pub fn new(expected: impl Into<String>, found: impl Into<String>) -> Self {
        SyntaxError {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Failures of a full run, from reading the input to rendering the result.
#[derive(thiserror::Error, Debug)]
pub enum AnalyzeError {
    #[error("could not read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write output file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal viewer failed: {0}")]
    Viewer(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_message() {
        let err = SyntaxError::new("ASSIGN", "::=");
        assert_eq!(
            err.to_string(),
            "SYNTAX ERROR: 'ASSIGN' was expected but '::=' was found."
        );
    }

    #[test]
    fn test_read_error_names_the_file() {
        let err = AnalyzeError::ReadInput {
            path: PathBuf::from("prog.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "could not read input file prog.txt: no such file"
        );
    }
}
