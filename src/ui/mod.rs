//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, operand input, view switching
//! - **[`playback`]**: forward-only cursors over recorded steps
//! - **[`panes`]**: stateless render functions for each visible pane (array, tree,
//!   step card, controls, comparison columns, status bar)
//! - **[`theme`]**: colour palette, including the step-kind colour mapping
//!
//! The entry point for consumers is [`App`]: construct it from the two sessions
//! and a [`Config`], then call [`App::run`] to start the event loop.
//!
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod playback;
pub mod theme;

pub use app::App;
