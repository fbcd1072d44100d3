//! Terminal User Interface (TUI) module
//!
//! Provides an interactive single-screen lookup view: search bar, info panel and map

use std::io::{self, Stderr};
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{debug, info};

mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

pub use app::{App, LookupOutcome, ViewState, Viewport};
pub use event_handler::handle_key_event;
pub use input_handler::{handle_backspace, handle_clear_input, handle_text_input};
pub use ui::ui;

use crate::config::StaticConfig;
use crate::errors::{Result, TrackerError};
use crate::services::create_provider;
use constants::TICK_RATE_MS;

type TuiTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application
pub async fn run_tui(config: &StaticConfig) -> Result<()> {
    let provider = create_provider(&config.geo);

    // Setup terminal
    enable_raw_mode().map_err(terminal_error)?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;

    // Create app (dispatches the caller's own lookup) and run it
    let mut app = App::new(provider);
    info!("TUI started");
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    info!("TUI exited");
    res
}

/// Main application loop
fn run_app(terminal: &mut TuiTerminal, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(TICK_RATE_MS);

    loop {
        // Render UI
        terminal.draw(|f| ui(f, app)).map_err(terminal_error)?;

        // Handle events
        if event::poll(tick_rate).map_err(terminal_error)?
            && let Event::Key(key) = event::read().map_err(terminal_error)?
            && key.kind == KeyEventKind::Press
            && handle_key_event(app, key)
        {
            return Ok(());
        }

        let applied = app.drain_outcomes();
        if applied > 0 {
            debug!("Applied {} lookup outcome(s)", applied);
        }
        app.tick();
    }
}

fn terminal_error(e: io::Error) -> TrackerError {
    TrackerError::terminal(e.to_string())
}
