//! Terminal viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! Replays a finished [`Analysis`] one emitter call at a time, next to the
//! token stream it consumed.
//!
//! - **[`app`]**: replay position, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for each visible pane
//!   (tokens, document, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! [`Analysis`]: crate::analysis::Analysis

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
