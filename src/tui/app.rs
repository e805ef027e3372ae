//! Application state for the chart view
//!
//! The chart is static: the only state beyond the sample series is the quit
//! flag.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::CashflowSeries;

/// State for the chart view
pub struct App {
    /// The series being rendered
    pub series: CashflowSeries,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create the app around a validated series
    pub fn new(series: CashflowSeries) -> Self {
        Self {
            series,
            should_quit: false,
        }
    }

    /// Signal the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle a key event; the view only supports closing
    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            let mut app = App::new(samples::cashflow_series());
            app.on_key(key(code, KeyModifiers::NONE));
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new(samples::cashflow_series());
        app.on_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut app = App::new(samples::cashflow_series());
        app.on_key(key(KeyCode::Char('x'), KeyModifiers::NONE));
        app.on_key(key(KeyCode::Enter, KeyModifiers::NONE));
        assert!(!app.should_quit);
    }
}
