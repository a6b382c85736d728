//! Current step card: badge, rationale, affected indices, progress

use crate::trace::StepKind;
use crate::ui::theme::{Palette, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the step card
pub struct StepInfoRenderData<'a> {
    pub kind: Option<StepKind>,
    pub rationale: &'a str,
    pub indices: &'a [usize],
    /// Zero-based position of the shown step
    pub position: Option<usize>,
    pub total: usize,
}

fn step_icon(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Insert => "+",
        StepKind::Remove => "-",
        StepKind::Compare => "?",
        StepKind::Swap => "~",
        StepKind::Complete => "v",
    }
}

/// Text progress bar, `filled` out of `width` cells
fn progress_bar(done: usize, total: usize, width: usize) -> String {
    if total == 0 || width == 0 {
        return String::new();
    }
    let filled = (done * width / total).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render the step card
pub fn render_step_info_pane(
    frame: &mut Frame,
    area: Rect,
    data: StepInfoRenderData,
    palette: &Palette,
) {
    let block = Block::default()
        .title(" Current Step ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let (Some(kind), Some(position)) = (data.kind, data.position) else {
        let paragraph = Paragraph::new("Run an operation to see each step explained")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };

    let color = palette.color(kind);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} {} ", step_icon(kind), kind.label()),
                Style::default()
                    .bg(color)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} / {}", position + 1, data.total),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            data.rationale.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ];

    if !data.indices.is_empty() {
        let badges: Vec<Span> = data
            .indices
            .iter()
            .map(|i| Span::styled(format!("[{}] ", i), Style::default().fg(DEFAULT_THEME.number)))
            .collect();
        lines.push(Line::from(badges));
    }

    let bar_width = area.width.saturating_sub(4) as usize;
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        progress_bar(position + 1, data.total, bar_width),
        Style::default().fg(color),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(1, 4, 8), "██░░░░░░");
        assert_eq!(progress_bar(4, 4, 4), "████");
        assert_eq!(progress_bar(1, 0, 4), "");
    }
}
