//! Token stream pane rendering

use super::{border_style, clamp_scroll};
use crate::parser::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Other => Style::default().fg(DEFAULT_THEME.fg),
        TokenKind::Number => Style::default().fg(DEFAULT_THEME.secondary),
        _ => Style::default().fg(DEFAULT_THEME.keyword),
    }
}

/// Render the token pane.
///
/// Tokens before `consumed` are dimmed; the token at `consumed` is the one
/// the parser is looking at. With `follow` set, the scroll offset is moved
/// so that token stays visible.
pub fn render_token_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    consumed: usize,
    is_focused: bool,
    follow: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Tokens ({}/{}) ", consumed, tokens.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if follow {
        if consumed < *scroll_offset {
            *scroll_offset = consumed;
        } else if consumed >= *scroll_offset + visible_height {
            *scroll_offset = consumed + 1 - visible_height;
        }
    }
    clamp_scroll(scroll_offset, tokens.len(), visible_height);

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, token)| {
            let (marker, lexeme_style, symbol_style, bg) = if i < consumed {
                let dim = Style::default().fg(DEFAULT_THEME.comment);
                ("  ", dim, dim, None)
            } else if i == consumed {
                (
                    "▶ ",
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                    kind_style(token.kind),
                    Some(DEFAULT_THEME.current_line_bg),
                )
            } else {
                (
                    "  ",
                    Style::default().fg(DEFAULT_THEME.fg),
                    kind_style(token.kind),
                    None,
                )
            };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.primary)),
                Span::styled(format!("{:>4} ", i + 1), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(format!("{:<12}", token.lexeme), lexeme_style),
                Span::styled(token.kind.symbol(), symbol_style),
            ]);

            let item = ListItem::new(line);
            match bg {
                Some(color) => item.style(Style::default().bg(color)),
                None => item,
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
