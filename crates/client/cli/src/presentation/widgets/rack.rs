//! Side panel listing each rod's offering and what is worn.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use wardrobe_core::Wardrobe;

use crate::presentation::narrate;

pub fn render(frame: &mut Frame, area: Rect, wardrobe: &Wardrobe) {
    let label = Style::default().fg(Color::White);
    let mut lines = vec![Line::from(Span::styled(
        "Rods",
        Style::default().fg(Color::Cyan),
    ))];

    for rod in wardrobe.rods() {
        let offering = match (rod.offered(), rod.cursor()) {
            (Some(item), Some(cursor)) => format!(
                "{} ({}/{})",
                narrate::item_name(wardrobe, item),
                cursor + 1,
                rod.members().len()
            ),
            _ => "-".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", rod.name()), label),
            Span::raw(offering),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Worn",
        Style::default().fg(Color::Cyan),
    )));
    for zone in wardrobe.zones() {
        let occupant = zone
            .occupant()
            .map_or_else(|| "-".to_string(), |item| narrate::item_name(wardrobe, item));
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", zone.name()), label),
            Span::styled(occupant, Style::default().fg(Color::LightGreen)),
        ]));
    }

    let issues = wardrobe.diagnostics().len();
    if issues > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} catalog issue(s), see log", issues),
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Rack"));

    frame.render_widget(paragraph, area);
}
