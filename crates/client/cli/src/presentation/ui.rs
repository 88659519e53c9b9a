//! Frame layout and panel composition.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use wardrobe_core::Wardrobe;

use crate::{
    presentation::{scene::Scene, terminal::Tui, viewport::Viewport, widgets},
    state::AppState,
};

/// Everything a frame reads. Widgets never mutate it.
pub struct View<'a> {
    pub wardrobe: &'a Wardrobe,
    pub scene: &'a Scene,
    pub app_state: &'a AppState,
}

/// Draws one frame and returns the viewport the stage was drawn with, for
/// mapping the next mouse events.
pub fn render(terminal: &mut Tui, view: &View<'_>) -> Result<Option<Viewport>> {
    let mut viewport = None;
    terminal.draw(|frame| viewport = render_frame(frame, view))?;
    Ok(viewport)
}

fn render_frame(frame: &mut Frame, view: &View<'_>) -> Option<Viewport> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(widgets::messages::MESSAGE_PANEL_HEIGHT + 2),
            Constraint::Length(3),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], view);
    let viewport = render_body(frame, chunks[1], view);
    widgets::messages::render(frame, chunks[2], &view.app_state.messages);
    widgets::footer::render(frame, chunks[3]);
    viewport
}

fn render_body(frame: &mut Frame, area: Rect, view: &View<'_>) -> Option<Viewport> {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let viewport = widgets::stage::render(frame, chunks[0], view);
    widgets::rack::render(frame, chunks[1], view.wardrobe);
    viewport
}
