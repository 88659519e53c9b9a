//! Footer widget displaying key and mouse bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the footer panel with bindings help.
pub fn render(frame: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![
        Span::raw("[Click] Cycle rod | "),
        Span::raw("[Drag] Try on | "),
        Span::raw("[Right click] Take off | "),
        Span::raw("[c] Clear all | "),
        Span::raw("[r] Reset | "),
        Span::raw("[x] Check & repair | "),
        Span::raw("[q] Quit"),
    ])];

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
