//! Sorted array vs MinHeap view
//!
//! Two columns replay the same operation in lock step. Each column shows its
//! array, running compare/swap counters and the step it is on; the verdict
//! appears once both traces are exhausted.

use super::array::{array_lines, ArrayRenderData};
use crate::trace::{CostCounter, StepKind};
use crate::ui::theme::{Palette, DEFAULT_THEME};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// One column of the comparison
pub struct ColumnRenderData<'a> {
    pub label: &'a str,
    pub accent: Color,
    pub cells: Vec<(usize, Option<i32>)>,
    pub highlighted: &'a [usize],
    pub kind: Option<StepKind>,
    pub rationale: Option<&'a str>,
    pub cost: CostCounter,
    pub total_steps: usize,
}

/// Data needed to render the comparison view
pub struct ComparisonRenderData<'a> {
    pub sorted: ColumnRenderData<'a>,
    pub heap: ColumnRenderData<'a>,
    /// Operation being replayed, e.g. "insert(5)"
    pub operation: Option<String>,
    pub verdict: Option<String>,
}

fn render_column(frame: &mut Frame, area: Rect, data: ColumnRenderData, palette: &Palette) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", data.label),
            Style::default()
                .fg(data.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} steps ", data.total_steps),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(data.accent));

    let mut lines = Vec::new();
    if data.cells.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty array)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
        lines.push(Line::from(""));
    } else {
        let cells = ArrayRenderData {
            cells: data.cells,
            highlighted: data.highlighted,
            kind: data.kind,
        };
        let (values, indices) = array_lines(&cells, palette);
        lines.push(values);
        lines.push(indices);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" compares ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            data.cost.compares.to_string(),
            Style::default()
                .fg(palette.color(StepKind::Compare))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   swaps ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            data.cost.swaps.to_string(),
            Style::default()
                .fg(palette.color(StepKind::Swap))
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(""));

    if let (Some(kind), Some(rationale)) = (data.kind, data.rationale) {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", kind.label()),
                Style::default()
                    .bg(palette.color(kind))
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(rationale.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the comparison view
pub fn render_comparison_view(
    frame: &mut Frame,
    area: Rect,
    data: ComparisonRenderData,
    palette: &Palette,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Sorted array vs MinHeap",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Run the same operation on both and compare the work each one does",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ]);
    frame.render_widget(header, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_column(frame, columns[0], data.sorted, palette);
    render_column(frame, columns[1], data.heap, palette);

    let mut footer = Vec::new();
    if let Some(op) = data.operation {
        footer.push(Span::styled(
            format!(" {} ", op),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }
    if let Some(verdict) = data.verdict {
        footer.push(Span::styled(
            verdict,
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    frame.render_widget(Paragraph::new(Line::from(footer)).block(block), rows[2]);
}
