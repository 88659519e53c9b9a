//! Client-side mirror of the sprite state the engine publishes.
//!
//! The terminal has no retained scene graph, so every
//! [`PresentationEvent`] is folded into a [`Sprite`] table that the stage
//! widget draws from.
use wardrobe_core::{Category, DrawLayer, ItemId, PresentationEvent, Vec2, Wardrobe, ZoneId};

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub size: Vec2,
    pub position: Vec2,
    pub scale: f32,
    pub visible: bool,
    pub hit_test: bool,
    pub layer: DrawLayer,
    /// Zone under the sprite while dragged, and whether it would accept it.
    pub hover: Option<(ZoneId, bool)>,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    sprites: Vec<Sprite>,
}

impl Scene {
    /// Creates hidden sprites for every item; the engine's initial events
    /// fill in the rest.
    pub fn from_wardrobe(wardrobe: &Wardrobe) -> Self {
        let sprites = wardrobe
            .items()
            .iter()
            .map(|item| Sprite {
                id: item.id(),
                name: item.name().to_owned(),
                category: item.category(),
                size: item.size(),
                position: item.home().position,
                scale: item.home().scale,
                visible: false,
                hit_test: false,
                layer: DrawLayer::Rack,
                hover: None,
            })
            .collect();
        Self { sprites }
    }

    pub fn apply(&mut self, event: &PresentationEvent) {
        let Some(sprite) = self.sprites.get_mut(event.item().index()) else {
            tracing::warn!("presentation event for unknown {}", event.item());
            return;
        };
        match *event {
            PresentationEvent::Moved {
                position, scale, ..
            } => {
                sprite.position = position;
                sprite.scale = scale;
            }
            PresentationEvent::Visibility { visible, .. } => sprite.visible = visible,
            PresentationEvent::HitTest { enabled, .. } => sprite.hit_test = enabled,
            PresentationEvent::Layer { layer, .. } => sprite.layer = layer,
            PresentationEvent::Hover { zone, accepts, .. } => {
                sprite.hover = zone.map(|zone| (zone, accepts));
            }
        }
    }

    pub fn apply_all(&mut self, events: impl IntoIterator<Item = PresentationEvent>) -> usize {
        let mut applied = 0;
        for event in events {
            self.apply(&event);
            applied += 1;
        }
        applied
    }

    /// Visible sprites back to front.
    pub fn draw_order(&self) -> Vec<&Sprite> {
        let mut visible: Vec<&Sprite> = self.sprites.iter().filter(|s| s.visible).collect();
        visible.sort_by_key(|sprite| (sprite.layer, sprite.id));
        visible
    }

    /// Hover state of whichever sprite is being dragged.
    pub fn hover(&self) -> Option<(ZoneId, bool)> {
        self.sprites
            .iter()
            .filter(|sprite| sprite.layer == DrawLayer::Dragged)
            .find_map(|sprite| sprite.hover)
    }
}
