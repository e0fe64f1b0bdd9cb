//! Main TUI application state and logic

use crate::analysis::Analysis;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Delay between steps in auto-play mode
const PLAY_INTERVAL: Duration = Duration::from_millis(250);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tokens,
    Document,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tokens => FocusedPane::Document,
            FocusedPane::Document => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// The analysis being replayed
    pub analysis: Analysis,

    /// Number of fragments shown, `0..=fragments.len()`
    pub step: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub token_scroll: usize,
    pub document_scroll: usize,

    /// Keep the parser position visible in the token pane
    pub follow_tokens: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    /// Create a new app positioned before the first fragment
    pub fn new(analysis: Analysis) -> Self {
        App {
            analysis,
            step: 0,
            focused_pane: FocusedPane::Document,
            token_scroll: 0,
            document_scroll: 0,
            follow_tokens: true,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    pub fn total_steps(&self) -> usize {
        self.analysis.fragments.len()
    }

    pub fn is_at_end(&self) -> bool {
        self.step >= self.total_steps()
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.is_at_end() {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                } else {
                    self.step_forward();
                    self.status_message = "Playing...".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Tokens (left) | Document (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(main_chunks[0]);

        super::panes::render_token_pane(
            frame,
            columns[0],
            &self.analysis.tokens,
            self.analysis.consumed_at(self.step),
            self.focused_pane == FocusedPane::Tokens,
            self.follow_tokens,
            &mut self.token_scroll,
        );

        super::panes::render_document_pane(
            frame,
            columns[1],
            &self.analysis.fragments,
            self.step,
            self.focused_pane == FocusedPane::Document,
            &mut self.document_scroll,
        );

        let error = if self.is_at_end() {
            self.analysis.error()
        } else {
            None
        };
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.step,
            self.total_steps(),
            error,
            self.is_playing,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Tokens => {
                    self.follow_tokens = false;
                    self.token_scroll = self.token_scroll.saturating_sub(1);
                }
                FocusedPane::Document => {
                    // Clamp first, the offset may still be usize::MAX from auto-scroll
                    let lines = self.document_lines();
                    self.document_scroll = self.document_scroll.min(lines).saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Tokens => {
                    self.follow_tokens = false;
                    self.token_scroll = self.token_scroll.saturating_add(1);
                }
                FocusedPane::Document => {
                    self.document_scroll = self.document_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    self.last_play_time = Instant::now();
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.jump_to(self.total_steps());
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.jump_to(0);
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    /// Show one more fragment
    pub fn step_forward(&mut self) {
        if self.is_at_end() {
            self.status_message = "Cannot step forward: end of derivation".to_string();
            return;
        }
        self.jump_to(self.step + 1);
        self.status_message = "Stepped forward".to_string();
    }

    /// Hide the newest fragment
    pub fn step_backward(&mut self) {
        if self.step == 0 {
            self.status_message = "Cannot step backward: at start".to_string();
            return;
        }
        self.jump_to(self.step - 1);
        self.status_message = "Stepped backward".to_string();
    }

    fn jump_to(&mut self, step: usize) {
        self.step = step.min(self.total_steps());
        self.follow_tokens = true;
        // Auto-scroll document to bottom
        self.document_scroll = usize::MAX;
    }

    fn document_lines(&self) -> usize {
        self.analysis.fragments[..self.step]
            .iter()
            .map(|f| f.text.lines().count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_source, AnalyzerOptions};
    use crossterm::event::KeyModifiers;

    fn app(source: &str) -> App {
        App::new(analyze_source(source, &AnalyzerOptions::default()))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_stepping() {
        let mut app = app("read x");
        assert_eq!(app.step, 0);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.step, 0);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.step, 2);
        press(&mut app, KeyCode::Enter);
        assert!(app.is_at_end());
        press(&mut app, KeyCode::Right);
        assert_eq!(app.step, app.total_steps());
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.step, 0);
    }

    #[test]
    fn test_focus_and_quit() {
        let mut app = app("");
        assert_eq!(app.focused_pane, FocusedPane::Document);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_scrolling_up_after_auto_scroll() {
        let mut app = app("x := 1 + 2");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.document_scroll, usize::MAX);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.document_scroll, app.document_lines() - 1);
    }
}
