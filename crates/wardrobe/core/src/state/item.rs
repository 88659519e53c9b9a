//! Garment items and the store that owns them.
//!
//! Items never own their rod or zone; they only remember which rod is their
//! home slot. Presence is an enum so an item is in exactly one of the
//! dormant / offered / dragging / placed states at any time.
use crate::geometry::{Bounds, Transform, Vec2};
use crate::gesture::GestureRecognizer;
use crate::presentation::{DrawLayer, PresentationEvent};
use crate::rules::DormantVisibility;
use crate::state::{Category, ItemId, RodId, ZoneId};

/// Where a drag started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragOrigin {
    /// Picked up from the rod as its offered item.
    Rod,
    /// Pulled out of a zone before it settled; the zone was vacated.
    Zone(ZoneId),
}

/// Lifecycle state of a garment item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Neither offered nor placed. Hidden unless its category is configured
    /// to stay visible while dormant.
    #[default]
    Dormant,
    /// The single interactive member of its rod.
    Offered,
    /// Following the pointer.
    Dragging { origin: DragOrigin },
    /// Occupant of a drop zone.
    Placed(ZoneId),
}

impl Presence {
    pub fn layer(self) -> DrawLayer {
        match self {
            Presence::Dormant | Presence::Offered => DrawLayer::Rack,
            Presence::Dragging { .. } => DrawLayer::Dragged,
            Presence::Placed(_) => DrawLayer::Worn,
        }
    }
}

/// A single garment.
#[derive(Clone, Debug)]
pub struct GarmentItem {
    id: ItemId,
    name: String,
    category: Category,
    home_slot: RodId,
    size: Vec2,
    /// Authored resting transform on the rod.
    rest: Transform,
    /// Cached spatial snapshot restored on every return.
    home: Transform,
    current: Transform,
    presence: Presence,
    hit_testable: bool,
    hover: Option<ZoneId>,
    /// Item origin minus pointer position, captured at press time.
    grab_offset: Vec2,
    pub(crate) gesture: GestureRecognizer,
}

impl GarmentItem {
    pub(crate) fn new(
        id: ItemId,
        name: impl Into<String>,
        category: Category,
        home_slot: RodId,
        rest: Transform,
        size: Vec2,
        gesture: GestureRecognizer,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            home_slot,
            size,
            rest,
            home: rest,
            current: rest,
            presence: Presence::Dormant,
            hit_testable: true,
            hover: None,
            grab_offset: Vec2::ZERO,
            gesture,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn home_slot(&self) -> RodId {
        self.home_slot
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn home(&self) -> Transform {
        self.home
    }

    pub fn transform(&self) -> Transform {
        self.current
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.current, self.size)
    }

    pub fn hit_testable(&self) -> bool {
        self.hit_testable
    }

    /// Zone the item hovered during the last drag sample.
    pub fn hover(&self) -> Option<ZoneId> {
        self.hover
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.presence, Presence::Placed(_))
    }

    pub fn placed_in(&self) -> Option<ZoneId> {
        match self.presence {
            Presence::Placed(zone) => Some(zone),
            _ => None,
        }
    }

    pub fn is_offered(&self) -> bool {
        self.presence == Presence::Offered
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.presence, Presence::Dragging { .. })
    }

    /// Offered by its rod or placed in a zone.
    pub fn is_interactive(&self) -> bool {
        matches!(self.presence, Presence::Offered | Presence::Placed(_))
    }

    pub fn gesture(&self) -> &GestureRecognizer {
        &self.gesture
    }

    pub(crate) fn grab_offset(&self) -> Vec2 {
        self.grab_offset
    }
}

/// Owner of every garment item, indexed by [`ItemId`].
///
/// All item mutations go through the store so that each visible change is
/// mirrored into the presentation outbox exactly once.
#[derive(Clone, Debug, Default)]
pub(crate) struct ItemStore {
    items: Vec<GarmentItem>,
    dormant_visibility: DormantVisibility,
    events: Vec<PresentationEvent>,
}

impl ItemStore {
    pub(crate) fn new(dormant_visibility: DormantVisibility) -> Self {
        Self {
            items: Vec::new(),
            dormant_visibility,
            events: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, item: GarmentItem) -> ItemId {
        let id = item.id;
        debug_assert_eq!(id.index(), self.items.len());
        self.items.push(item);
        id
    }

    pub(crate) fn get(&self, id: ItemId) -> Option<&GarmentItem> {
        self.items.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut GarmentItem> {
        self.items.get_mut(id.index())
    }

    pub(crate) fn all(&self) -> &[GarmentItem] {
        &self.items
    }

    pub(crate) fn is_placed(&self, id: ItemId) -> bool {
        self.get(id).is_some_and(GarmentItem::is_placed)
    }

    pub(crate) fn is_visible(&self, item: &GarmentItem) -> bool {
        match item.presence {
            Presence::Dormant => self.dormant_visibility.shows(item.category),
            _ => true,
        }
    }

    /// Changes presence and reports any resulting visibility or layer change.
    pub(crate) fn set_presence(&mut self, id: ItemId, presence: Presence) {
        let Some(item) = self.items.get(id.index()) else {
            return;
        };
        let before = item.presence;
        if before == presence {
            return;
        }
        let was_visible = self.is_visible(item);

        let item = &mut self.items[id.index()];
        item.presence = presence;
        let item = &self.items[id.index()];
        let is_visible = self.is_visible(item);

        if was_visible != is_visible {
            self.events.push(PresentationEvent::Visibility {
                item: id,
                visible: is_visible,
            });
        }
        if before.layer() != presence.layer() {
            self.events.push(PresentationEvent::Layer {
                item: id,
                layer: presence.layer(),
            });
        }
    }

    pub(crate) fn set_hit_testable(&mut self, id: ItemId, enabled: bool) {
        let Some(item) = self.items.get_mut(id.index()) else {
            return;
        };
        if item.hit_testable != enabled {
            item.hit_testable = enabled;
            self.events
                .push(PresentationEvent::HitTest { item: id, enabled });
        }
    }

    pub(crate) fn move_to(&mut self, id: ItemId, transform: Transform) {
        let Some(item) = self.items.get_mut(id.index()) else {
            return;
        };
        if item.current != transform {
            item.current = transform;
            self.events.push(PresentationEvent::Moved {
                item: id,
                position: transform.position,
                scale: transform.scale,
            });
        }
    }

    /// Restores the cached home snapshot.
    pub(crate) fn snap_home(&mut self, id: ItemId) {
        if let Some(home) = self.get(id).map(|item| item.home) {
            self.move_to(id, home);
        }
    }

    /// Recomputes the home snapshot from the rest transform and moves there.
    pub(crate) fn refresh_home(&mut self, id: ItemId) {
        let Some(item) = self.items.get_mut(id.index()) else {
            return;
        };
        item.home = item.rest;
        self.snap_home(id);
    }

    pub(crate) fn set_grab_offset(&mut self, id: ItemId, offset: Vec2) {
        if let Some(item) = self.items.get_mut(id.index()) {
            item.grab_offset = offset;
        }
    }

    /// Records the zone under a dragged item; reports only actual changes.
    pub(crate) fn set_hover(&mut self, id: ItemId, zone: Option<ZoneId>, accepts: bool) {
        let Some(item) = self.items.get_mut(id.index()) else {
            return;
        };
        if item.hover != zone {
            item.hover = zone;
            self.events.push(PresentationEvent::Hover {
                item: id,
                zone,
                accepts,
            });
        }
    }

    /// Emits the full current state of an item (used once after load).
    pub(crate) fn announce(&mut self, id: ItemId) {
        let Some(item) = self.get(id) else {
            return;
        };
        let events = [
            PresentationEvent::Moved {
                item: id,
                position: item.current.position,
                scale: item.current.scale,
            },
            PresentationEvent::Visibility {
                item: id,
                visible: self.is_visible(item),
            },
            PresentationEvent::Layer {
                item: id,
                layer: item.presence.layer(),
            },
            PresentationEvent::HitTest {
                item: id,
                enabled: item.hit_testable,
            },
        ];
        self.events.extend(events);
    }

    pub(crate) fn drain_events(&mut self) -> Vec<PresentationEvent> {
        std::mem::take(&mut self.events)
    }

    #[cfg(test)]
    pub(crate) fn pending_events(&self) -> &[PresentationEvent] {
        &self.events
    }
}
