//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

/// Renders the help popup centered on screen.
pub fn render_help(frame: &mut Frame, area: Rect) {
    let popup_width = (area.width * 50 / 100).clamp(30, 44);
    let popup_height = 9u16.min(area.height);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());

    let key_line = |key: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", key), Styles::help_key()),
            Span::raw(text.to_string()),
        ])
    };

    let lines = vec![
        Line::default(),
        key_line("q, Esc", "quit"),
        key_line("Ctrl-C", "quit"),
        key_line("m", "toggle month / date labels"),
        key_line("h, ?", "toggle this help"),
        Line::default(),
        Line::styled("  Press Esc to close", Styles::dim()),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
