//! Heap tree rendering
//!
//! Level `d` of the tree holds slots `2^d ..= 2^(d+1) - 1`. Each level splits
//! the pane width into `2^d` equal columns and centres every node in its
//! column, so children sit under their parent.

use crate::trace::StepKind;
use crate::ui::theme::{Palette, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split a sentinel-prefixed slot list into tree levels of `(slot, value)`
pub fn tree_levels(slots: &[Option<i32>]) -> Vec<Vec<(usize, i32)>> {
    let mut levels = Vec::new();
    let mut start = 1;

    while start < slots.len() {
        let end = (start * 2).min(slots.len());
        let level: Vec<(usize, i32)> = (start..end)
            .filter_map(|i| slots[i].map(|v| (i, v)))
            .collect();
        levels.push(level);
        start *= 2;
    }

    levels
}

/// Render the heap as a tree
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    slots: &[Option<i32>],
    highlighted: &[usize],
    kind: Option<StepKind>,
    palette: &Palette,
) {
    let block = Block::default()
        .title(" Tree View ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let levels = tree_levels(slots);
    if levels.is_empty() {
        let paragraph = Paragraph::new("(empty heap)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let mut lines = Vec::with_capacity(levels.len() * 2);

    for (depth, level) in levels.iter().enumerate() {
        let column = (width >> depth).max(1);
        let mut spans = Vec::with_capacity(level.len() * 3);

        for (slot, value) in level {
            let label = value.to_string();
            let left = column.saturating_sub(label.len()) / 2;
            let right = column.saturating_sub(label.len() + left);

            spans.push(Span::raw(" ".repeat(left)));
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(palette.cell_color(*slot, highlighted, kind))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" ".repeat(right)));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
