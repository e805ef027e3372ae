//! Layout definitions for the chart view
//!
//! Splits the screen into a header, the chart area, and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the chart view
pub struct ChartLayout {
    /// Title and legend area
    pub header: Rect,
    /// Bar chart area
    pub chart: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl ChartLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header + legend
                Constraint::Min(10),   // Chart
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            chart: chunks[1],
            status_bar: chunks[2],
        }
    }
}
