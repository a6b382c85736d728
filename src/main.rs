// heapviz: step-by-step MinHeap and sorted array visualizer

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use heapviz::config::{usage, Config};
use heapviz::session::constants::COMPARISON_SEED_VALUES;
use heapviz::session::{ComparisonSession, HeapSession};
use heapviz::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("heapviz");

    let config = match Config::from_args(args.iter().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(program_name));
            std::process::exit(1);
        }
    };

    if config.show_help {
        println!("{}", usage(program_name));
        return Ok(());
    }

    eprintln!(
        "Building heap from {} values...",
        config.initial_values.len()
    );
    let heap_session = HeapSession::new(&config.initial_values);
    match heap_session.peek() {
        Some(min) => eprintln!("Heap ready: size {}, min {}", heap_session.len(), min),
        None => eprintln!("Heap ready: empty"),
    }

    let compare_session = ComparisonSession::new(&COMPARISON_SEED_VALUES);
    eprintln!(
        "Comparison seeded with {} values.",
        compare_session.driver().sorted().len()
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(heap_session, compare_session, &config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
