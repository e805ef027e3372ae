//! Chart view rendering
//!
//! The chart demo has a single view: header, grouped bar chart, status bar.

pub mod chart;

use ratatui::Frame;

use super::app::App;
use super::layout::ChartLayout;

/// Render the entire chart view
pub fn render(frame: &mut Frame, app: &App) {
    let layout = ChartLayout::new(frame.area());

    chart::render_header(frame, layout.header);
    chart::render_chart(frame, app, layout.chart);
    chart::render_status_bar(frame, layout.status_bar);
}
