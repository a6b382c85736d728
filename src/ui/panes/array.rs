//! Array row rendering, shared by the heap view and both comparison columns

use crate::trace::StepKind;
use crate::ui::theme::{Palette, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Smallest cell width, so single digits still read as boxes
const MIN_CELL_WIDTH: usize = 4;

/// Data needed to render a row of array cells
pub struct ArrayRenderData<'a> {
    /// `(index, value)` per cell; `None` marks the heap sentinel
    pub cells: Vec<(usize, Option<i32>)>,
    pub highlighted: &'a [usize],
    pub kind: Option<StepKind>,
}

/// Build the value row and the index row for a set of cells
pub fn array_lines(data: &ArrayRenderData, palette: &Palette) -> (Line<'static>, Line<'static>) {
    let mut values = Vec::with_capacity(data.cells.len() * 2);
    let mut indices = Vec::with_capacity(data.cells.len() * 2);

    for (index, value) in &data.cells {
        let label = match value {
            Some(v) => v.to_string(),
            None => "null".to_string(),
        };
        let width = label.len().max(index.to_string().len()).max(MIN_CELL_WIDTH) + 2;

        let style = match value {
            Some(_) => Style::default()
                .bg(palette.cell_color(*index, data.highlighted, data.kind))
                .fg(DEFAULT_THEME.cell_text)
                .add_modifier(Modifier::BOLD),
            None => Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::DIM),
        };

        values.push(Span::styled(format!("{:^width$}", label, width = width), style));
        values.push(Span::raw(" "));
        indices.push(Span::styled(
            format!("{:^width$}", index, width = width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        indices.push(Span::raw(" "));
    }

    (Line::from(values), Line::from(indices))
}

/// Render an array pane with a title and an "empty" placeholder
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    data: ArrayRenderData,
    palette: &Palette,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    // The sentinel alone does not count as content
    if data.cells.iter().all(|(_, v)| v.is_none()) {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let (values, indices) = array_lines(&data, palette);
    let paragraph = Paragraph::new(vec![values, indices]).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_have_one_cell_per_entry() {
        let data = ArrayRenderData {
            cells: vec![(0, None), (1, Some(7)), (2, Some(-120))],
            highlighted: &[1],
            kind: Some(StepKind::Insert),
        };
        let (values, indices) = array_lines(&data, &Palette::new());

        // a cell span plus a gap per entry
        assert_eq!(values.spans.len(), 6);
        assert_eq!(indices.spans.len(), 6);
        assert_eq!(values.spans[2].content.trim(), "7");
        assert_eq!(values.spans[4].content.trim(), "-120");
        assert_eq!(values.spans[2].content.len(), indices.spans[2].content.len());
    }
}
