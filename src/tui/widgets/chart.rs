//! Weekly contribution bar chart.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// One bar per week; wide enough for an `MM/DD` label underneath.
const BAR_WIDTH: u16 = 6;
const BAR_GAP: u16 = 2;

/// Renders the weekly bar chart.
pub fn render_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let bars: Vec<Bar> = state
        .labels
        .iter()
        .zip(&state.values)
        .map(|(label, value)| {
            Bar::default()
                .value(*value)
                .label(Line::from(label.as_str()))
        })
        .collect();

    let title = format!(" GitHub Weekly Contributions ({}) ", state.window_title);
    let chart = BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(Styles::bar())
        .label_style(Styles::bar_label())
        .value_style(Styles::bar_value());

    frame.render_widget(chart, area);
}
