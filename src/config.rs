//! Command-line configuration

use crate::analysis::AnalyzerOptions;
use crate::parser::DEFAULT_ROOT_LABEL;
use clap::Parser as ClapParser;
use std::path::{Path, PathBuf};

/// Checks a whitespace-separated program against the grammar and prints its
/// parse tree as a Graphviz digraph.
#[derive(ClapParser, Debug, Clone)]
#[command(name = "descent", version)]
pub struct Args {
    /// The program to analyse
    input: PathBuf,

    /// Write the graph to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Label of the root node
    #[arg(long, default_value = DEFAULT_ROOT_LABEL)]
    root_label: String,

    /// Print the classified tokens to stderr before parsing
    #[arg(long)]
    tokens: bool,

    /// Print a GraphvizOnline link that renders the graph
    #[arg(long)]
    link: bool,

    /// Replay the derivation in a terminal viewer
    #[arg(long)]
    view: bool,

    /// Increase message verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all log output
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    args: Args,
}

impl Config {
    /// Parse the process arguments. Exits with usage on error.
    pub fn new() -> Self {
        Config::from(Args::parse())
    }

    pub fn try_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Args::try_parse_from(iter).map(Config::from)
    }

    pub fn input(&self) -> &Path {
        &self.args.input
    }

    pub fn output(&self) -> Option<&Path> {
        self.args.output.as_deref()
    }

    pub fn show_tokens(&self) -> bool {
        self.args.tokens
    }

    pub fn show_link(&self) -> bool {
        self.args.link
    }

    pub fn view(&self) -> bool {
        self.args.view
    }

    pub fn quiet(&self) -> bool {
        self.args.quiet
    }

    /// Log verbosity for `stderrlog`: errors and warnings by default, each
    /// `-v` adds a level.
    pub fn verbosity(&self) -> usize {
        1 + usize::from(self.args.verbose)
    }

    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            root_label: self.args.root_label.clone(),
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config { args }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_from_iter(["descent", "prog.txt"]).unwrap();
        assert_eq!(config.input(), Path::new("prog.txt"));
        assert_eq!(config.output(), None);
        assert_eq!(config.analyzer_options(), AnalyzerOptions::default());
        assert_eq!(config.verbosity(), 1);
        assert!(!config.quiet());
        assert!(!config.view());
    }

    #[test]
    fn test_flags() {
        let config = Config::try_from_iter([
            "descent",
            "prog.txt",
            "-o",
            "tree.dot",
            "--root-label",
            "ROOT",
            "--tokens",
            "--link",
            "-vv",
        ])
        .unwrap();
        assert_eq!(config.output(), Some(Path::new("tree.dot")));
        assert_eq!(config.analyzer_options().root_label, "ROOT");
        assert!(config.show_tokens());
        assert!(config.show_link());
        assert_eq!(config.verbosity(), 3);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Config::try_from_iter(["descent", "prog.txt", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Config::try_from_iter(["descent"]).is_err());
    }
}
