// descent: recursive-descent syntax analyzer with Graphviz parse trees

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use descent::config::Config;
use descent::emitter::graphviz_online_url;
use descent::ui::App;
use descent::{analyze_file, Analysis, AnalyzeError};

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::new();

    stderrlog::new()
        .module(module_path!())
        .quiet(config.quiet())
        .verbosity(config.verbosity())
        .init()
        .context("failed to initialize logging")?;

    let analysis = analyze_file(config.input(), &config.analyzer_options())?;

    if config.show_tokens() {
        for token in &analysis.tokens {
            eprintln!("{}\t{}", token.lexeme, token.kind);
        }
    }

    let document = analysis.document();
    match config.output() {
        Some(path) => {
            fs::write(path, &document).map_err(|source| AnalyzeError::WriteOutput {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    if config.show_link() {
        // Keep stdout pure DOT
        eprintln!("{}", graphviz_online_url(&document));
    }

    let success = analysis.is_success();
    if config.view() {
        run_viewer(analysis)?;
    }

    // The syntax error itself was already logged by the parser
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_viewer(analysis: Analysis) -> Result<(), AnalyzeError> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(analysis);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(AnalyzeError::from)
}
