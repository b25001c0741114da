//! Recent-days summary panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the recent-days panel below the chart.
pub fn render_recent(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::with_capacity(state.recent.len() + 3);
    lines.push(Line::default());
    for entry in &state.recent {
        lines.push(Line::from(format!("  {}", entry)));
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        "  Press 'q' to quit, 'm' to switch labels, '?' for help",
        Styles::dim(),
    ));

    let title = format!(" Last {} Days Contributions ", state.recent_count);
    let panel =
        Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(panel, area);
}
