use crate::geometry::Vec2;
use crate::state::Timestamp;

/// The three pointer event kinds the engine consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Raw pointer sample in world coordinates with a monotonic timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Vec2,
    pub at: Timestamp,
}

impl PointerEvent {
    pub const fn new(kind: PointerKind, position: Vec2, at: Timestamp) -> Self {
        Self { kind, position, at }
    }

    pub const fn down(position: Vec2, at: Timestamp) -> Self {
        Self::new(PointerKind::Down, position, at)
    }

    pub const fn moved(position: Vec2, at: Timestamp) -> Self {
        Self::new(PointerKind::Move, position, at)
    }

    pub const fn up(position: Vec2, at: Timestamp) -> Self {
        Self::new(PointerKind::Up, position, at)
    }
}
