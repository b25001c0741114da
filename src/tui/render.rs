//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::AppState;
use super::widgets::{render_chart, render_header, render_help, render_recent};

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: header, chart, recent-days panel
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(7),
        Constraint::Fill(3),
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_chart(frame, chunks[1], state);
    render_recent(frame, chunks[2], state);

    // Help popup (rendered last to overlay everything)
    if state.show_help {
        render_help(frame, area);
    }
}
