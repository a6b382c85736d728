//! Operand input and heap summary

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the controls pane
pub struct ControlsRenderData<'a> {
    pub input: &'a str,
    pub size: usize,
    /// `None` for the comparison view, which has no capacity limit
    pub capacity: Option<usize>,
    pub min: Option<i32>,
    pub speed_ms: u64,
}

/// Render the controls pane
pub fn render_controls_pane(
    frame: &mut Frame,
    area: Rect,
    data: ControlsRenderData,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.number);

    let input_span = if data.input.is_empty() {
        Span::styled("type a value, ↵ to insert", label)
    } else {
        Span::styled(
            format!("{}▏", data.input),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )
    };

    let size_text = match data.capacity {
        Some(cap) => format!("{} / {}", data.size, cap),
        None => data.size.to_string(),
    };
    let min_text = data
        .min
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(vec![Span::styled(" value  ", label), input_span]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" size   ", label),
            Span::styled(size_text, value),
        ]),
        Line::from(vec![
            Span::styled(" min    ", label),
            Span::styled(min_text, value),
        ]),
        Line::from(vec![
            Span::styled(" speed  ", label),
            Span::styled(format!("{}ms", data.speed_ms), value),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
