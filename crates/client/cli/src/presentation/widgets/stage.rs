//! Stage widget: zones as outlined boxes, garments as labeled blocks.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use wardrobe_core::{Bounds, Category, DrawLayer, Transform};

use crate::presentation::{
    scene::Sprite,
    ui::View,
    viewport::{Viewport, world_bounds},
};

/// Renders the stage and returns the viewport used for it.
pub fn render(frame: &mut Frame, area: Rect, view: &View<'_>) -> Option<Viewport> {
    let block = Block::default().borders(Borders::ALL).title("Stage");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let viewport = Viewport::fit(world_bounds(view.wardrobe), inner);
    let hover = view.scene.hover();

    for zone in view.wardrobe.zones() {
        let Some(rect) = viewport.to_rect(zone.bounds()) else {
            continue;
        };
        let color = match hover {
            Some((hovered, true)) if hovered == zone.id() => Color::Green,
            Some((hovered, false)) if hovered == zone.id() => Color::Red,
            _ => Color::DarkGray,
        };
        let outline = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(zone.name().to_owned());
        frame.render_widget(outline, rect);
    }

    for sprite in view.scene.draw_order() {
        let bounds = Bounds::from_size(Transform::new(sprite.position, sprite.scale), sprite.size);
        let Some(rect) = viewport.to_rect(bounds) else {
            continue;
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(sprite.name.as_str()).style(sprite_style(sprite)), rect);
    }

    Some(viewport)
}

fn sprite_style(sprite: &Sprite) -> Style {
    let mut style = Style::default()
        .fg(Color::Black)
        .bg(category_color(sprite.category));
    if sprite.layer == DrawLayer::Dragged {
        style = style.add_modifier(Modifier::BOLD);
    }
    if !sprite.hit_test {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Hat => Color::LightYellow,
        Category::Glasses => Color::LightCyan,
        Category::Scarf => Color::LightMagenta,
        Category::HeadBand => Color::Magenta,
        Category::Shirt => Color::LightBlue,
        Category::Pants => Color::Blue,
        Category::Shoes => Color::Gray,
        Category::FullBody => Color::LightRed,
        Category::Luggage => Color::Yellow,
    }
}
