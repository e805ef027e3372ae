//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::debug;

use crate::config::Settings;
use crate::error::FintroError;
use crate::models::CashflowSeries;

use super::app::App;
use super::event::{Event, EventHandler};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for the chart view
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the chart view until the user closes it
///
/// The series is validated before the terminal is touched, so the render
/// path never sees malformed data. Blocks the calling thread until the view
/// is closed.
pub fn run_chart(series: CashflowSeries, settings: &Settings) -> Result<()> {
    series
        .validate()
        .map_err(|e| FintroError::Chart(e.to_string()))?;

    debug!(months = series.len(), "starting chart view");
    let mut terminal = init_terminal()?;

    let mut app = App::new(series);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));

    // Main event loop
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &app);
        })?;

        match events.next()? {
            Event::Key(key) => app.on_key(key),
            Event::Resize(_, _) => {
                // Terminal will redraw automatically
            }
            Event::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;
    debug!("chart view closed");

    Ok(())
}
