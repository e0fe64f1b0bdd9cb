//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`tokens`]: the classified token stream, with the parser's position
//! - [`document`]: the DOT document emitted so far
//! - [`status`]: status bar with keybindings and replay state
//!
//! Each pane module exports a primary `render_*` function. Scroll offsets
//! live in [`App`](crate::ui::App) and are clamped here at render time.

pub mod document;
pub mod status;
pub mod tokens;

pub use document::render_document_pane;
pub use status::render_status_bar;
pub use tokens::render_token_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Clamp `offset` so the last page is full, or zero if everything fits.
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        *offset = (*offset).min(total_items - visible_height);
    } else {
        *offset = 0;
    }
}

pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 20);

        let mut offset = 5;
        clamp_scroll(&mut offset, 3, 10);
        assert_eq!(offset, 0);

        let mut offset = 4;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 4);
    }
}
