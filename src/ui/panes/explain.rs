//! Function cards: a selectable list and the selected card's details

use crate::explain::HeapFunction;
use crate::ui::theme::{function_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// One list row per function: marker, signature and complexity
pub fn function_list_lines(selected: HeapFunction) -> Vec<Line<'static>> {
    HeapFunction::ALL
        .iter()
        .map(|&function| {
            let card = function.card();
            let is_selected = function == selected;
            let name_style = if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            Line::from(vec![
                Span::styled(
                    if is_selected { "▶ " } else { "  " },
                    Style::default().fg(function_color(function)),
                ),
                Span::styled(card.signature, name_style),
                Span::raw(" "),
                Span::styled(card.complexity, Style::default().fg(function_color(function))),
            ])
        })
        .collect()
}

/// Render the list of functions
pub fn render_function_list(frame: &mut Frame, area: Rect, selected: HeapFunction) {
    let block = Block::default()
        .title(" Functions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let mut lines = function_list_lines(selected);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑↓ choose  ↵ run demo",
        Style::default().fg(DEFAULT_THEME.comment),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the selected card: description, pseudocode and key points
pub fn render_function_card(frame: &mut Frame, area: Rect, function: HeapFunction) {
    let card = function.card();
    let accent = function_color(function);

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", card.signature),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} ", card.complexity),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let heading = Style::default()
        .fg(DEFAULT_THEME.primary)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(card.title, Style::default().fg(accent))),
        Line::from(Span::styled(card.description, Style::default().fg(DEFAULT_THEME.fg))),
        Line::from(""),
        Line::from(Span::styled("Pseudocode", heading)),
    ];
    lines.extend(card.pseudocode.iter().map(|line| {
        Line::from(Span::styled(
            format!("  {}", line),
            Style::default().fg(DEFAULT_THEME.secondary),
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Key points", heading)));
    lines.extend(
        card.key_points
            .iter()
            .map(|point| Line::from(format!("  • {}", point))),
    );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_marks_only_the_selected_function() {
        let lines = function_list_lines(HeapFunction::HeapifyDown);
        assert_eq!(lines.len(), HeapFunction::ALL.len());

        let marked: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.spans[0].content.starts_with('▶'))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(marked, vec![3]);
        assert_eq!(lines[3].spans[1].content, "heapifyDown(index)");
        assert_eq!(lines[4].spans[3].content, "O(1)");
    }
}
