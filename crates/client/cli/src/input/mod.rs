//! Input processing for the CLI client.
//!
//! This module owns the key and mouse mapping so the rest of the
//! application can remain agnostic about concrete bindings or the
//! specifics of `crossterm` events.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use wardrobe_core::{PointerEvent, Timestamp, Vec2};

use crate::presentation::viewport::Viewport;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Send every worn item back to its rod.
    ClearAll,
    /// Rebuild the wardrobe from the catalog.
    Reset,
    /// Check cross-component invariants and repair what can be repaired.
    Repair,
    /// No meaningful command was produced.
    None,
}

/// High-level outcome of processing a mouse event.
#[derive(Debug, PartialEq)]
pub enum MouseAction {
    /// Forward to the engine's pointer pipeline.
    Pointer(PointerEvent),
    /// Empty the zone under this world position.
    ClearAt(Vec2),
    None,
}

/// Translates terminal events into wardrobe commands.
///
/// Only the left button drives the pointer. Presses outside the stage are
/// ignored, but once a press started on the stage its drag and release are
/// always forwarded (clamped to the stage edge) so the engine never keeps a
/// stale capture.
#[derive(Debug, Default)]
pub struct InputHandler {
    pressed: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('c') => KeyAction::ClearAll,
            KeyCode::Char('r') => KeyAction::Reset,
            KeyCode::Char('x') => KeyAction::Repair,
            _ => KeyAction::None,
        }
    }

    pub fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        viewport: &Viewport,
        now: Timestamp,
    ) -> MouseAction {
        let on_stage = viewport.contains(mouse.column, mouse.row);
        let position = viewport.to_world(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if on_stage => {
                self.pressed = true;
                MouseAction::Pointer(PointerEvent::down(position, now))
            }
            MouseEventKind::Drag(MouseButton::Left) if self.pressed => {
                MouseAction::Pointer(PointerEvent::moved(position, now))
            }
            MouseEventKind::Up(MouseButton::Left) if self.pressed => {
                self.pressed = false;
                MouseAction::Pointer(PointerEvent::up(position, now))
            }
            MouseEventKind::Down(MouseButton::Right) if on_stage => MouseAction::ClearAt(position),
            _ => MouseAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use ratatui::layout::Rect;
    use wardrobe_core::{Bounds, PointerKind};

    fn viewport() -> Viewport {
        let world = Bounds::new(Vec2::ZERO, Vec2::new(10.0, 5.0));
        Viewport::fit(world, Rect::new(0, 0, 40, 10))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn left_button_sequence_becomes_pointer_events() {
        let viewport = viewport();
        let mut input = InputHandler::new();
        let kinds: Vec<PointerKind> = [
            MouseEventKind::Down(MouseButton::Left),
            MouseEventKind::Drag(MouseButton::Left),
            MouseEventKind::Up(MouseButton::Left),
        ]
        .into_iter()
        .filter_map(|kind| match input.handle_mouse(mouse(kind, 5, 5), &viewport, Timestamp(0)) {
            MouseAction::Pointer(event) => Some(event.kind),
            _ => None,
        })
        .collect();
        assert_eq!(
            kinds,
            vec![PointerKind::Down, PointerKind::Move, PointerKind::Up]
        );
    }

    #[test]
    fn release_off_stage_is_still_forwarded() {
        let viewport = viewport();
        let mut input = InputHandler::new();
        input.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), 5, 5),
            &viewport,
            Timestamp(0),
        );
        let up = input.handle_mouse(
            mouse(MouseEventKind::Up(MouseButton::Left), 80, 30),
            &viewport,
            Timestamp(100),
        );
        assert_eq!(
            up,
            MouseAction::Pointer(PointerEvent::up(viewport.to_world(39, 9), Timestamp(100)))
        );
    }

    #[test]
    fn presses_off_stage_and_stray_releases_are_ignored() {
        let viewport = viewport();
        let mut input = InputHandler::new();
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 60, 2);
        assert_eq!(input.handle_mouse(down, &viewport, Timestamp(0)), MouseAction::None);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 5, 5);
        assert_eq!(input.handle_mouse(up, &viewport, Timestamp(0)), MouseAction::None);
    }

    #[test]
    fn right_click_clears_the_zone_under_the_pointer() {
        let viewport = viewport();
        let mut input = InputHandler::new();
        let click = mouse(MouseEventKind::Down(MouseButton::Right), 5, 5);
        assert_eq!(
            input.handle_mouse(click, &viewport, Timestamp(0)),
            MouseAction::ClearAt(viewport.to_world(5, 5))
        );
    }

    #[test]
    fn key_bindings() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(key(KeyCode::Char('q'), KeyModifiers::NONE)), KeyAction::Quit);
        assert_eq!(
            input.handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            KeyAction::ClearAll
        );
        assert_eq!(input.handle_key(key(KeyCode::Char('r'), KeyModifiers::NONE)), KeyAction::Reset);
        assert_eq!(input.handle_key(key(KeyCode::Char('x'), KeyModifiers::NONE)), KeyAction::Repair);
        assert_eq!(input.handle_key(key(KeyCode::Char('z'), KeyModifiers::NONE)), KeyAction::None);
    }
}
