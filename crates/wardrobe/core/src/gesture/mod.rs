//! Tap / drag disambiguation for a single garment item.
//!
//! The recognizer is a three-state machine (`Idle → Pressed → Dragging`)
//! fed with pointer samples and per-frame updates:
//!
//! - A press becomes a drag when **either** the press has lasted
//!   `long_press_ms` **or** the pointer moved `drag_distance` away from the
//!   press point. A slow deliberate drag and a fast flick both register.
//! - Releasing before the drag condition, within `short_tap_ms`, is a tap.
//! - Releasing after `short_tap_ms` without ever reaching the drag condition
//!   is a slow click; what happens then is a policy decision of the engine.
//! - Releasing while dragging is a drop at the release position.
mod pointer;

pub use pointer::{PointerEvent, PointerKind};

use crate::config::GestureThresholds;
use crate::geometry::Vec2;
use crate::state::Timestamp;

/// Current phase of a recognizer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GesturePhase {
    #[default]
    Idle,
    Pressed {
        at: Timestamp,
        origin: Vec2,
    },
    Dragging {
        last: Vec2,
    },
}

/// High-level intent emitted by the recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureIntent {
    /// Short press released in place.
    Tap,
    /// The press turned into a drag.
    DragStart { position: Vec2 },
    /// Pointer released after dragging.
    Drop { position: Vec2 },
    /// Press released after the tap window without reaching the drag condition.
    SlowClick,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureRecognizer {
    thresholds: GestureThresholds,
    phase: GesturePhase,
}

impl GestureRecognizer {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            phase: GesturePhase::Idle,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn thresholds(&self) -> GestureThresholds {
        self.thresholds
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, GesturePhase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// Pointer went down on the item. Restarts any gesture in progress.
    pub fn press(&mut self, position: Vec2, at: Timestamp) {
        self.phase = GesturePhase::Pressed {
            at,
            origin: position,
        };
    }

    /// Pointer moved while held.
    pub fn motion(&mut self, position: Vec2, at: Timestamp) -> Option<GestureIntent> {
        match self.phase {
            GesturePhase::Pressed { at: pressed_at, origin } => {
                if self.drag_condition(pressed_at, origin, position, at) {
                    self.phase = GesturePhase::Dragging { last: position };
                    Some(GestureIntent::DragStart { position })
                } else {
                    None
                }
            }
            GesturePhase::Dragging { .. } => {
                self.phase = GesturePhase::Dragging { last: position };
                None
            }
            GesturePhase::Idle => None,
        }
    }

    /// Per-frame update while the pointer is held still.
    ///
    /// Promotes a long press into a drag at the press position.
    pub fn update(&mut self, at: Timestamp) -> Option<GestureIntent> {
        match self.phase {
            GesturePhase::Pressed { at: pressed_at, origin }
                if at.millis_since(pressed_at) >= self.thresholds.long_press_ms =>
            {
                self.phase = GesturePhase::Dragging { last: origin };
                Some(GestureIntent::DragStart { position: origin })
            }
            _ => None,
        }
    }

    /// Pointer released. Always returns the recognizer to `Idle`.
    pub fn release(&mut self, position: Vec2, at: Timestamp) -> Option<GestureIntent> {
        let phase = std::mem::take(&mut self.phase);
        match phase {
            GesturePhase::Idle => None,
            GesturePhase::Dragging { .. } => Some(GestureIntent::Drop { position }),
            GesturePhase::Pressed { at: pressed_at, origin } => {
                if self.drag_condition(pressed_at, origin, position, at) {
                    Some(GestureIntent::Drop { position })
                } else if at.millis_since(pressed_at) < self.thresholds.short_tap_ms {
                    Some(GestureIntent::Tap)
                } else {
                    Some(GestureIntent::SlowClick)
                }
            }
        }
    }

    /// Abandons the gesture without emitting an intent.
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    fn drag_condition(
        &self,
        pressed_at: Timestamp,
        origin: Vec2,
        position: Vec2,
        at: Timestamp,
    ) -> bool {
        at.millis_since(pressed_at) >= self.thresholds.long_press_ms
            || origin.distance(position) >= self.thresholds.drag_distance
    }
}
