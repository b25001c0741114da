//! One-line header bar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the header line: app name, week/contribution totals, label mode.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = format!(
        " ghgraph | {} | {} weeks | {} contributions | labels: {} ",
        state.window_title,
        state.values.len(),
        state.total_contributions,
        state.label_mode,
    );

    let header = Paragraph::new(Line::from(text)).style(Styles::header());
    frame.render_widget(header, area);
}
