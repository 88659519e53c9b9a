//! Output side of the engine: updates for the visual presentation layer.
//!
//! The engine never reads rendering state back. Every change to an item's
//! position, scale, visibility, hit-testing or draw layer is appended to an
//! outbox that the frontend drains once per frame with
//! [`Wardrobe::drain_events`](crate::engine::Wardrobe::drain_events).
use crate::geometry::Vec2;
use crate::state::{ItemId, ZoneId};

/// Coarse draw order bucket for a garment sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawLayer {
    /// Hanging on its rod (offered or dormant).
    Rack,
    /// Worn on the character inside a drop zone.
    Worn,
    /// Following the pointer; drawn above everything else.
    Dragged,
}

/// A single presentation update.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PresentationEvent {
    /// Sprite moved or rescaled.
    Moved {
        item: ItemId,
        position: Vec2,
        scale: f32,
    },
    /// Sprite shown or hidden.
    Visibility { item: ItemId, visible: bool },
    /// Pointer hit-testing enabled or disabled for the sprite.
    HitTest { item: ItemId, enabled: bool },
    /// Draw layer changed.
    Layer { item: ItemId, layer: DrawLayer },
    /// The dragged item now hovers `zone` (or nothing).
    ///
    /// `accepts` tells whether releasing here would place the item, so the
    /// presenter can highlight valid targets.
    Hover {
        item: ItemId,
        zone: Option<ZoneId>,
        accepts: bool,
    },
}

impl PresentationEvent {
    /// The item this update applies to.
    pub fn item(&self) -> ItemId {
        match self {
            Self::Moved { item, .. }
            | Self::Visibility { item, .. }
            | Self::HitTest { item, .. }
            | Self::Layer { item, .. }
            | Self::Hover { item, .. } => *item,
        }
    }
}
