//! # Introduction
//!
//! heapviz records every elementary step a min-heap and a sorted array take
//! while inserting a value or extracting the minimum. Each step carries the
//! indices it touched, a one-line rationale and a snapshot of the container,
//! so the run can be replayed one step at a time in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Operation → Engine → Trace (steps + snapshots) → Playback → TUI
//! ```
//!
//! 1. [`container`]: the two containers: a 1-based heap array with an empty
//!    sentinel slot and a 0-based ascending array.
//! 2. [`engine`]: [`engine::HeapEngine`] and [`engine::SortedArrayEngine`]
//!    run `insert` and `extract_min` on a copy of the input and record a
//!    [`trace::Trace`].
//! 3. [`trace`]: step records and running compare/swap counters.
//! 4. [`compare`]: runs one operation on both containers and aligns the two
//!    traces step by step.
//! 5. [`session`]: capacity and operand-range checks for the interactive views.
//! 6. [`explain`]: reference cards for the heap functions, each with a demo
//!    trace on a small fixed heap.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! Engines never fail: extracting from an empty container returns no value and
//! an empty trace. Limits such as the 24-element capacity live in
//! [`session`].

pub mod compare;
pub mod config;
pub mod container;
pub mod engine;
pub mod errors;
pub mod explain;
pub mod session;
pub mod trace;
pub mod ui;
