use crate::geometry::{Bounds, Transform, Vec2};
use crate::state::{Category, CategorySet, ItemId, ZoneId};

/// A body region that accepts certain categories and holds at most one item.
#[derive(Clone, Debug)]
pub struct DropZone {
    id: ZoneId,
    name: String,
    accepted: CategorySet,
    anchor: Vec2,
    size: Vec2,
    /// Scale applied to an item while it sits in this zone.
    placed_scale: f32,
    occupant: Option<ItemId>,
}

impl DropZone {
    pub(crate) fn new(
        id: ZoneId,
        name: impl Into<String>,
        accepted: CategorySet,
        anchor: Vec2,
        size: Vec2,
        placed_scale: f32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            accepted,
            anchor,
            size,
            placed_scale,
            occupant: None,
        }
    }

    pub fn id(&self) -> ZoneId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accepted(&self) -> CategorySet {
        self.accepted
    }

    pub fn accepts(&self, category: Category) -> bool {
        self.accepted.has(category)
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn placed_scale(&self) -> f32 {
        self.placed_scale
    }

    /// Transform a placed item snaps to.
    pub fn snap_transform(&self) -> Transform {
        Transform::new(self.anchor, self.placed_scale)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(Transform::new(self.anchor, 1.0), self.size)
    }

    pub fn occupant(&self) -> Option<ItemId> {
        self.occupant
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub(crate) fn set_occupant(&mut self, item: ItemId) -> Option<ItemId> {
        self.occupant.replace(item)
    }

    pub(crate) fn take_occupant(&mut self) -> Option<ItemId> {
        self.occupant.take()
    }
}
