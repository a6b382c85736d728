//! Main TUI application state and logic

use crate::config::{Config, View, MAX_SPEED_MS, MIN_SPEED_MS, SPEED_STEP_MS};
use crate::container::HeapContainer;
use crate::errors::SessionError;
use crate::explain::{demo_heap, demo_trace, HeapFunction};
use crate::session::constants::MAX_HEAP_SIZE;
use crate::session::{parse_operand, ComparisonSession, HeapSession};
use crate::trace::{CostCounter, StepRecord, Trace};
use crate::ui::panes::{
    render_array_pane, render_comparison_view, render_controls_pane, render_function_card,
    render_function_list, render_status_bar, render_step_info_pane, render_tree_pane,
    ArrayRenderData, ColumnRenderData, ComparisonRenderData, ControlsRenderData,
    StepInfoRenderData,
};
use crate::ui::playback::{ComparePlayback, Cursor, Playback};
use crate::ui::theme::{Palette, DEFAULT_THEME};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest operand the input box accepts ("-999")
const MAX_INPUT_LEN: usize = 4;

/// The main application state
pub struct App {
    /// Which view is on screen
    pub view: View,

    heap_session: HeapSession,
    heap_playback: Playback<HeapContainer>,

    compare_session: ComparisonSession,
    compare_playback: Option<ComparePlayback>,

    /// Card selected in the function view
    pub explain_function: HeapFunction,
    explain_playback: Playback<HeapContainer>,

    palette: Palette,
    rng: StdRng,

    /// Operand being typed
    pub input: String,

    /// Delay between animated steps
    pub speed_ms: u64,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a rejected operation
    pub is_error: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app around already-built sessions
    pub fn new(
        heap_session: HeapSession,
        compare_session: ComparisonSession,
        config: &Config,
    ) -> Self {
        App {
            view: config.view,
            heap_session,
            heap_playback: Playback::default(),
            compare_session,
            compare_playback: None,
            explain_function: HeapFunction::Insert,
            explain_playback: Playback::default(),
            palette: Palette::new(),
            rng: StdRng::from_entropy(),
            input: String::new(),
            speed_ms: config.speed_ms,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            status_message: String::from("Ready!"),
            is_error: false,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing
                && self.last_play_time.elapsed() >= Duration::from_millis(self.speed_ms)
            {
                if !self.advance() {
                    self.is_playing = false;
                    self.set_status(self.finished_message());
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    pub fn heap_session(&self) -> &HeapSession {
        &self.heap_session
    }

    pub fn compare_session(&self) -> &ComparisonSession {
        &self.compare_session
    }

    /// Playback position for the view on screen
    pub fn cursor(&self) -> Cursor {
        match self.view {
            View::Heap => self.heap_playback.cursor(),
            View::Compare => self
                .compare_playback
                .as_ref()
                .map(|p| p.cursor())
                .unwrap_or_default(),
            View::Explain => self.explain_playback.cursor(),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        match self.view {
            View::Heap => self.render_heap_view(frame, main_chunks[0]),
            View::Compare => self.render_compare_view(frame, main_chunks[0]),
            View::Explain => self.render_explain_view(frame, main_chunks[0]),
        }

        render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.cursor(),
            self.is_playing,
            self.is_error,
        );
    }

    fn render_heap_view(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(9),
            ])
            .split(area);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(rows[2]);

        let step = self.heap_playback.current();
        let (slots, highlighted, kind) = match step {
            Some(step) => (step.snapshot().slots(), step.indices(), Some(step.kind())),
            None => (self.heap_session.heap().slots(), &[][..], None),
        };

        let title = format!("Array View [{}]", slots.len() - 1);
        render_array_pane(
            frame,
            rows[0],
            &title,
            ArrayRenderData {
                cells: slots.iter().copied().enumerate().collect(),
                highlighted,
                kind,
            },
            &self.palette,
        );

        render_tree_pane(frame, rows[1], &slots, highlighted, kind, &self.palette);

        render_controls_pane(
            frame,
            bottom[0],
            ControlsRenderData {
                input: &self.input,
                size: self.heap_session.len(),
                capacity: Some(MAX_HEAP_SIZE),
                min: self.heap_session.peek(),
                speed_ms: self.speed_ms,
            },
            !self.input.is_empty(),
        );

        render_step_info_pane(
            frame,
            bottom[1],
            StepInfoRenderData {
                kind,
                rationale: step.map_or("", |s| s.rationale()),
                indices: highlighted,
                position: self.heap_playback.cursor().position(),
                total: self.heap_playback.cursor().len(),
            },
            &self.palette,
        );
    }

    fn render_compare_view(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(area);

        let driver = self.compare_session.driver();
        let playback = self.compare_playback.as_ref();
        let current = playback.and_then(|p| p.current().map(|aligned| (p, aligned)));

        let (sorted, heap, operation, verdict) = match current {
            Some((playback, aligned)) => {
                let comparison = playback.comparison();
                let verdict = playback
                    .cursor()
                    .is_finished()
                    .then(|| comparison.verdict().to_string());
                (
                    column(
                        "Sorted array",
                        DEFAULT_THEME.sorted_label,
                        aligned.sorted,
                        &comparison.sorted_trace,
                        aligned.index,
                        |c| c.values().iter().copied().map(Some).enumerate().collect(),
                    ),
                    column(
                        "MinHeap",
                        DEFAULT_THEME.heap_label,
                        aligned.heap,
                        &comparison.heap_trace,
                        aligned.index,
                        |c| c.slots().into_iter().enumerate().skip(1).collect(),
                    ),
                    Some(comparison.operation.to_string()),
                    verdict,
                )
            }
            None => (
                idle_column(
                    "Sorted array",
                    DEFAULT_THEME.sorted_label,
                    driver.sorted().values().iter().copied().map(Some).enumerate().collect(),
                ),
                idle_column(
                    "MinHeap",
                    DEFAULT_THEME.heap_label,
                    driver.heap().slots().into_iter().enumerate().skip(1).collect(),
                ),
                None,
                None,
            ),
        };

        render_comparison_view(
            frame,
            rows[0],
            ComparisonRenderData {
                sorted,
                heap,
                operation,
                verdict,
            },
            &self.palette,
        );

        render_controls_pane(
            frame,
            rows[1],
            ControlsRenderData {
                input: &self.input,
                size: driver.heap().len(),
                capacity: None,
                min: driver.heap().peek(),
                speed_ms: self.speed_ms,
            },
            !self.input.is_empty(),
        );
    }

    fn render_explain_view(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(area);

        render_function_list(frame, columns[0], self.explain_function);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Length(4),
                Constraint::Min(6),
                Constraint::Length(7),
            ])
            .split(columns[1]);

        render_function_card(frame, rows[0], self.explain_function);

        let step = self.explain_playback.current();
        let (slots, highlighted, kind) = match step {
            Some(step) => (step.snapshot().slots(), step.indices(), Some(step.kind())),
            None => (demo_heap().slots(), &[][..], None),
        };

        let title = format!("Demo: {}", self.explain_function);
        render_array_pane(
            frame,
            rows[1],
            &title,
            ArrayRenderData {
                cells: slots.iter().copied().enumerate().collect(),
                highlighted,
                kind,
            },
            &self.palette,
        );

        render_tree_pane(frame, rows[2], &slots, highlighted, kind, &self.palette);

        render_step_info_pane(
            frame,
            rows[3],
            StepInfoRenderData {
                kind,
                rationale: step.map_or("Press Enter to run the demo", |s| s.rationale()),
                indices: highlighted,
                position: self.explain_playback.cursor().position(),
                total: self.explain_playback.cursor().len(),
            },
            &self.palette,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '0'..='9') => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            KeyCode::Char('-') => {
                // Only as a leading sign
                if self.input.is_empty() {
                    self.input.push('-');
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => {
                self.input.clear();
            }
            KeyCode::Enter => self.insert_input(),
            KeyCode::Char('x') | KeyCode::Char('X') => self.extract_min(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.random_fill(),
            KeyCode::Char('c') | KeyCode::Char('C') => self.clear(),
            KeyCode::Up if self.view == View::Explain => {
                self.select_function(self.explain_function.prev());
            }
            KeyCode::Down if self.view == View::Explain => {
                self.select_function(self.explain_function.next());
            }
            KeyCode::Tab => {
                self.is_playing = false;
                self.view = match self.view {
                    View::Heap => View::Compare,
                    View::Compare => View::Explain,
                    View::Explain => View::Heap,
                };
                self.set_status(match self.view {
                    View::Heap => "MinHeap view",
                    View::Compare => "Sorted array vs MinHeap view",
                    View::Explain => "Function reference",
                });
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                if self.advance() {
                    self.set_status("Stepped forward");
                } else {
                    self.set_status(self.finished_message());
                }
            }
            KeyCode::End => {
                self.is_playing = false;
                self.skip_to_end();
                self.set_status(self.finished_message());
            }
            KeyCode::Char('[') => {
                self.speed_ms = (self.speed_ms + SPEED_STEP_MS).min(MAX_SPEED_MS);
                self.set_status(format!("Speed {}ms", self.speed_ms));
            }
            KeyCode::Char(']') => {
                self.speed_ms = self
                    .speed_ms
                    .saturating_sub(SPEED_STEP_MS)
                    .max(MIN_SPEED_MS);
                self.set_status(format!("Speed {}ms", self.speed_ms));
            }
            _ => {}
        }
    }

    fn select_function(&mut self, function: HeapFunction) {
        self.is_playing = false;
        self.explain_function = function;
        self.explain_playback = Playback::default();
        self.set_status(function.card().title);
    }

    fn run_demo(&mut self) {
        self.explain_playback = Playback::new(vec![demo_trace(self.explain_function)]);
        self.begin_playing();
        self.set_status(format!("Running {} demo...", self.explain_function));
    }

    fn insert_input(&mut self) {
        if self.view == View::Explain {
            self.run_demo();
            return;
        }
        if self.input.is_empty() {
            self.set_status("Type a value first");
            return;
        }

        let result = parse_operand(&self.input).and_then(|value| match self.view {
            View::Heap => {
                let trace = self.heap_session.insert(value)?;
                self.start_heap_playback(vec![trace]);
                Ok(value)
            }
            View::Compare => {
                let comparison = self.compare_session.insert(value)?;
                self.start_compare_playback(ComparePlayback::new(comparison));
                Ok(value)
            }
            View::Explain => Ok(value),
        });

        match result {
            Ok(value) => {
                self.input.clear();
                self.set_status(format!("Inserting {}...", value));
            }
            Err(e) => self.set_error(e),
        }
    }

    fn extract_min(&mut self) {
        let result = match self.view {
            View::Heap => self.heap_session.extract_min().map(|(value, trace)| {
                self.start_heap_playback(vec![trace]);
                value
            }),
            View::Compare => self.compare_session.extract_min().map(|comparison| {
                let value = comparison.heap_value;
                self.start_compare_playback(ComparePlayback::new(comparison));
                value.unwrap_or_default()
            }),
            View::Explain => {
                self.set_status("Extract is not available in this view");
                return;
            }
        };

        match result {
            Ok(value) => self.set_status(format!("Extracting minimum {}...", value)),
            Err(e) => self.set_error(e),
        }
    }

    fn random_fill(&mut self) {
        if self.view != View::Heap {
            self.set_status("Random fill is only available in the MinHeap view");
            return;
        }

        match self.heap_session.random_fill(&mut self.rng) {
            Ok(traces) => {
                let count = traces.len();
                self.start_heap_playback(traces);
                self.set_status(format!("Inserting {} random values...", count));
            }
            Err(e) => self.set_error(e),
        }
    }

    fn clear(&mut self) {
        self.is_playing = false;
        self.input.clear();
        match self.view {
            View::Heap => {
                self.heap_session.clear();
                self.heap_playback = Playback::default();
                self.set_status("Heap cleared");
            }
            View::Compare => {
                self.compare_session.reset();
                self.compare_playback = None;
                self.set_status("Comparison reset");
            }
            View::Explain => {
                self.explain_playback = Playback::default();
                self.set_status("Demo reset");
            }
        }
    }

    fn start_heap_playback(&mut self, traces: Vec<Trace<HeapContainer>>) {
        self.heap_playback = Playback::new(traces);
        self.begin_playing();
    }

    fn start_compare_playback(&mut self, playback: ComparePlayback) {
        self.compare_playback = Some(playback);
        self.begin_playing();
    }

    fn begin_playing(&mut self) {
        self.advance();
        self.is_playing = true;
        self.last_play_time = Instant::now();
    }

    fn toggle_play(&mut self) {
        if self.cursor().is_finished() {
            self.is_playing = false;
            self.set_status("Nothing to play");
            return;
        }
        self.is_playing = !self.is_playing;
        if self.is_playing {
            self.last_play_time = Instant::now()
                .checked_sub(Duration::from_millis(self.speed_ms))
                .unwrap_or(Instant::now());
            self.set_status("Playing...");
        } else {
            self.set_status("Paused");
        }
    }

    /// Show the next step of the view on screen
    fn advance(&mut self) -> bool {
        match self.view {
            View::Heap => self.heap_playback.advance(),
            View::Compare => self
                .compare_playback
                .as_mut()
                .is_some_and(|p| p.advance()),
            View::Explain => self.explain_playback.advance(),
        }
    }

    fn skip_to_end(&mut self) {
        match self.view {
            View::Heap => self.heap_playback.finish(),
            View::Compare => {
                if let Some(playback) = self.compare_playback.as_mut() {
                    playback.finish();
                }
            }
            View::Explain => self.explain_playback.finish(),
        }
    }

    fn finished_message(&self) -> String {
        match (self.view, self.compare_playback.as_ref()) {
            (View::Compare, Some(playback)) => playback.comparison().verdict().to_string(),
            (View::Explain, _) => "Demo complete".to_string(),
            _ => "Playback complete".to_string(),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.is_error = false;
    }

    fn set_error(&mut self, err: SessionError) {
        self.status_message = err.to_string();
        self.is_error = true;
    }
}

/// Column data for a side that is being replayed. `step` is `None` once the
/// side's own trace has run out; it then keeps showing its final snapshot.
fn column<'a, C>(
    label: &'a str,
    accent: Color,
    step: Option<&'a StepRecord<C>>,
    trace: &'a Trace<C>,
    position: usize,
    cells: impl Fn(&C) -> Vec<(usize, Option<i32>)>,
) -> ColumnRenderData<'a> {
    let live = step.is_some();
    let step = step.or_else(|| trace.last());

    ColumnRenderData {
        label,
        accent,
        cells: step.map(|s| cells(s.snapshot())).unwrap_or_default(),
        highlighted: step.filter(|_| live).map_or(&[][..], |s| s.indices()),
        kind: step.map(|s| s.kind()),
        rationale: step.map(|s| s.rationale()),
        cost: trace.cost_at(position),
        total_steps: trace.len(),
    }
}

/// Column data before any operation has run
fn idle_column(
    label: &str,
    accent: Color,
    cells: Vec<(usize, Option<i32>)>,
) -> ColumnRenderData<'_> {
    ColumnRenderData {
        label,
        accent,
        cells,
        highlighted: &[],
        kind: None,
        rationale: None,
        cost: CostCounter::default(),
        total_steps: 0,
    }
}
