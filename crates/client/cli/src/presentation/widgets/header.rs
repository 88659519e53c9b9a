//! Header widget: frame counter and the current pointer capture.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{narrate, ui::View};

pub fn render(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let wardrobe = view.wardrobe;
    let holding = wardrobe
        .captured()
        .map_or_else(|| "-".to_string(), |id| narrate::item_name(wardrobe, id));

    let mut spans = vec![
        Span::raw("Frame: "),
        Span::styled(
            wardrobe.frame().to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | Holding: "),
        Span::styled(
            holding,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Worn: "),
        Span::styled(
            wardrobe.worn().len().to_string(),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw(" | Pending: "),
        Span::raw(wardrobe.pending_tasks().to_string()),
    ];

    if let Some((zone, accepts)) = view.scene.hover() {
        let (label, color) = if accepts {
            ("fits", Color::Green)
        } else {
            ("won't fit", Color::Red)
        };
        spans.push(Span::raw(" | Over: "));
        spans.push(Span::styled(
            format!("{} ({})", narrate::zone_name(wardrobe, zone), label),
            Style::default().fg(color),
        ));
    }

    let paragraph = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).title("Wardrobe"));

    frame.render_widget(paragraph, area);
}
