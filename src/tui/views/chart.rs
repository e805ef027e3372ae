//! Bar chart view
//!
//! Renders the income-vs-expenses series as a grouped bar chart: one bar
//! group per month, income bar first, expense bar second.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::models::CashflowSeries;
use crate::tui::app::App;

const INCOME_COLOR: Color = Color::Green;
const EXPENSE_COLOR: Color = Color::Red;

/// Render the header: title, subtitle, and legend
pub fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Personal Finance Manager",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Sample income and expenses by month"),
        Line::from(vec![
            Span::styled("■ Income  ", Style::default().fg(INCOME_COLOR)),
            Span::styled("■ Expenses", Style::default().fg(EXPENSE_COLOR)),
        ]),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Render the grouped bar chart
pub fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title("Income vs Expenses - Sample Data")
        .borders(Borders::ALL);

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(5)
        .bar_gap(1)
        .group_gap(2)
        .max(chart_max(&app.series));

    for group in bar_groups(&app.series) {
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

/// Render the status bar with the quit hint
pub fn render_status_bar(frame: &mut Frame, area: Rect) {
    let status = Line::from(vec![
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("/"),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" close window"),
    ]);

    frame.render_widget(Paragraph::new(status), area);
}

/// Build one bar group per month label
fn bar_groups(series: &CashflowSeries) -> Vec<BarGroup<'_>> {
    series
        .groups()
        .map(|month| {
            let bars = vec![
                Bar::default()
                    .value(month.income.dollars().max(0) as u64)
                    .style(Style::default().fg(INCOME_COLOR))
                    .value_style(Style::default().fg(Color::Black).bg(INCOME_COLOR)),
                Bar::default()
                    .value(month.expenses.dollars().max(0) as u64)
                    .style(Style::default().fg(EXPENSE_COLOR))
                    .value_style(Style::default().fg(Color::Black).bg(EXPENSE_COLOR)),
            ];

            BarGroup::default()
                .label(Line::from(month.label.to_string()))
                .bars(&bars)
        })
        .collect()
}

/// Y-axis ceiling: the largest value in the series
fn chart_max(series: &CashflowSeries) -> u64 {
    series.max_value().dollars().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    #[test]
    fn test_one_group_per_month() {
        let series = samples::cashflow_series();
        let groups = bar_groups(&series);
        assert_eq!(groups.len(), series.months.len());
    }

    #[test]
    fn test_chart_max_covers_series() {
        let series = samples::cashflow_series();
        assert_eq!(chart_max(&series), 3500);
    }
}
