use crate::explain::HeapFunction;
use crate::trace::StepKind;
use ratatui::style::Color;
use rustc_hash::FxHashMap;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub cell_text: Color,      // Text drawn on top of coloured cells
    pub heap_label: Color,     // Column accent for the heap side
    pub sorted_label: Color,   // Column accent for the sorted side
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for status line
    cell_text: Color::Rgb(255, 255, 255),
    heap_label: Color::Rgb(16, 185, 129),
    sorted_label: Color::Rgb(245, 158, 11),
};

/// Cell colours keyed by step kind. Cells not touched by the current step use
/// `default`.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: FxHashMap<StepKind, Color>,
    default: Color,
}

impl Palette {
    pub fn new() -> Self {
        let mut colors = FxHashMap::default();
        colors.insert(StepKind::Compare, Color::Rgb(245, 158, 11)); // Amber
        colors.insert(StepKind::Swap, Color::Rgb(239, 68, 68)); // Red
        colors.insert(StepKind::Insert, Color::Rgb(16, 185, 129)); // Green
        colors.insert(StepKind::Remove, Color::Rgb(239, 68, 68));
        colors.insert(StepKind::Complete, Color::Rgb(16, 185, 129));
        Palette {
            colors,
            default: Color::Rgb(59, 130, 246), // Blue
        }
    }

    pub fn default_color(&self) -> Color {
        self.default
    }

    pub fn color(&self, kind: StepKind) -> Color {
        self.colors.get(&kind).copied().unwrap_or(self.default)
    }

    /// Colour for the cell at `index` given the step currently shown
    pub fn cell_color(&self, index: usize, highlighted: &[usize], kind: Option<StepKind>) -> Color {
        match kind {
            Some(kind) if highlighted.contains(&index) => self.color(kind),
            _ => self.default,
        }
    }
}

/// Accent colour of a function card
pub fn function_color(function: HeapFunction) -> Color {
    match function {
        HeapFunction::Insert => Color::Rgb(16, 185, 129),      // Green
        HeapFunction::ExtractMin => Color::Rgb(239, 68, 68),   // Red
        HeapFunction::HeapifyUp => Color::Rgb(245, 158, 11),   // Amber
        HeapFunction::HeapifyDown => Color::Rgb(139, 92, 246), // Violet
        HeapFunction::Peek => Color::Rgb(59, 130, 246),        // Blue
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_color() {
        let palette = Palette::new();
        for kind in StepKind::ALL {
            assert!(palette.colors.contains_key(&kind));
        }
    }

    #[test]
    fn test_function_colors_are_distinct() {
        let colors: Vec<Color> = HeapFunction::ALL.iter().map(|&f| function_color(f)).collect();
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn test_cell_color_only_for_highlighted() {
        let palette = Palette::new();
        let swap = palette.color(StepKind::Swap);
        assert_eq!(palette.cell_color(2, &[2, 1], Some(StepKind::Swap)), swap);
        assert_eq!(
            palette.cell_color(3, &[2, 1], Some(StepKind::Swap)),
            palette.default_color()
        );
        assert_eq!(palette.cell_color(2, &[2], None), palette.default_color());
    }
}
