//! TUI pane rendering modules
//!
//! Every pane is a stateless render function fed by a small data struct, so the
//! panes never see sessions or engines, only snapshots and step records.
//!
//! # Pane Modules
//!
//! - [`array`]: array row with highlighted cells (heap view and both comparison columns)
//! - [`tree`]: heap drawn as a binary tree, one row per level
//! - [`step_info`]: the current step's kind, rationale, indices and progress
//! - [`explain`]: function list and the selected function's card
//! - [`controls`]: operand input, heap size, minimum and playback speed
//! - [`comparison`]: sorted array vs MinHeap side by side with cost counters
//! - [`status`]: status bar with keybindings and playback state

pub mod array;
pub mod comparison;
pub mod controls;
pub mod explain;
pub mod status;
pub mod step_info;
pub mod tree;

// Re-export render functions for convenience
pub use array::{render_array_pane, ArrayRenderData};
pub use comparison::{render_comparison_view, ColumnRenderData, ComparisonRenderData};
pub use controls::{render_controls_pane, ControlsRenderData};
pub use explain::{render_function_card, render_function_list};
pub use status::render_status_bar;
pub use step_info::{render_step_info_pane, StepInfoRenderData};
pub use tree::render_tree_pane;
