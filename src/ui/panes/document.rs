//! DOT document pane rendering
//!
//! Shows the fragments emitted up to the current replay step. The newest
//! fragment is highlighted, and every line is colored by the shape of the
//! node it introduces.

use super::{border_style, clamp_scroll};
use crate::emitter::{Fragment, Shape};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn shape_style(shape: Option<Shape>) -> Style {
    match shape {
        Some(Shape::Root) => Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
        Some(Shape::Internal) => Style::default().fg(DEFAULT_THEME.fg),
        Some(Shape::Terminal) => Style::default().fg(DEFAULT_THEME.terminal),
        Some(Shape::Empty) => Style::default().fg(DEFAULT_THEME.comment),
        Some(Shape::Error) => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(DEFAULT_THEME.success),
    }
}

/// Render the document pane with the first `shown` fragments.
pub fn render_document_pane(
    frame: &mut Frame,
    area: Rect,
    fragments: &[Fragment],
    shown: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Parse Tree (DOT) ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let shown = shown.min(fragments.len());
    if shown == 0 {
        let paragraph = Paragraph::new("(nothing emitted yet, press → to step)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = fragments[..shown]
        .iter()
        .enumerate()
        .flat_map(|(i, fragment)| {
            let is_newest = i + 1 == shown;
            let style = if is_newest {
                shape_style(fragment.shape).bg(DEFAULT_THEME.current_line_bg)
            } else {
                shape_style(fragment.shape)
            };
            fragment
                .text
                .lines()
                .map(move |line| ListItem::new(line.replace('\t', "    ")).style(style))
                .collect::<Vec<_>>()
        })
        .collect();

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
