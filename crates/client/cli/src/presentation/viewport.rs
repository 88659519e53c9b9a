//! Mapping between terminal cells and world coordinates.
//!
//! World y grows upward, terminal rows grow downward. A cell is roughly
//! twice as tall as it is wide, so one world unit spans twice as many
//! columns as rows.
use ratatui::layout::Rect;
use wardrobe_core::{Bounds, Vec2, Wardrobe};

/// Extra world units kept around the content.
const MARGIN: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    area: Rect,
    origin: Vec2,
    /// Top-left corner of the world rectangle in world units.
    top_left: Vec2,
    cols_per_unit: f32,
    rows_per_unit: f32,
}

impl Viewport {
    /// Fits `world` into `area`, centered, preserving aspect.
    pub fn fit(world: Bounds, area: Rect) -> Self {
        let size = world.max() - world.min();
        let width = size.x.max(f32::EPSILON);
        let height = size.y.max(f32::EPSILON);

        let rows_per_unit = (f32::from(area.width) / (2.0 * width))
            .min(f32::from(area.height) / height)
            .max(f32::EPSILON);
        let cols_per_unit = 2.0 * rows_per_unit;

        let pad_x = (f32::from(area.width) - width * cols_per_unit).max(0.0) / 2.0;
        let pad_y = (f32::from(area.height) - height * rows_per_unit).max(0.0) / 2.0;

        Self {
            area,
            origin: Vec2::new(f32::from(area.x) + pad_x, f32::from(area.y) + pad_y),
            top_left: Vec2::new(world.min().x, world.max().y),
            cols_per_unit,
            rows_per_unit,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.right()
            && row >= self.area.y
            && row < self.area.bottom()
    }

    /// World position at the center of a cell. Cells outside the area are
    /// clamped to its edge so a drag leaving the stage keeps tracking.
    pub fn to_world(&self, column: u16, row: u16) -> Vec2 {
        let column = column.clamp(self.area.x, self.area.right().saturating_sub(1));
        let row = row.clamp(self.area.y, self.area.bottom().saturating_sub(1));
        let dx = (f32::from(column) + 0.5 - self.origin.x) / self.cols_per_unit;
        let dy = (f32::from(row) + 0.5 - self.origin.y) / self.rows_per_unit;
        Vec2::new(self.top_left.x + dx, self.top_left.y - dy)
    }

    /// Cell containing `point`; may lie outside the area.
    pub fn to_cell(&self, point: Vec2) -> (i32, i32) {
        let (column, row) = self.project(point);
        (column.floor() as i32, row.floor() as i32)
    }

    /// Cell rectangle covering `bounds`, clipped to the area. Never empty
    /// while any part of `bounds` is visible.
    pub fn to_rect(&self, bounds: Bounds) -> Option<Rect> {
        let (left, top) = self.project(Vec2::new(bounds.min().x, bounds.max().y));
        let (right, bottom) = self.project(Vec2::new(bounds.max().x, bounds.min().y));

        let left = (left.floor() as i32).max(i32::from(self.area.x));
        let top = (top.floor() as i32).max(i32::from(self.area.y));
        let right = (right.ceil() as i32).min(i32::from(self.area.right()));
        let bottom = (bottom.ceil() as i32).min(i32::from(self.area.bottom()));
        if right <= left || bottom <= top {
            return None;
        }

        // Clipped to the u16 area above.
        Some(Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }

    fn project(&self, point: Vec2) -> (f32, f32) {
        (
            self.origin.x + (point.x - self.top_left.x) * self.cols_per_unit,
            self.origin.y + (self.top_left.y - point.y) * self.rows_per_unit,
        )
    }
}

/// World rectangle covering every zone and every item's home position.
pub fn world_bounds(wardrobe: &Wardrobe) -> Bounds {
    let rects = wardrobe
        .zones()
        .iter()
        .map(|zone| zone.bounds())
        .chain(
            wardrobe
                .items()
                .iter()
                .map(|item| Bounds::from_size(item.home(), item.size())),
        );

    let mut extent: Option<(Vec2, Vec2)> = None;
    for rect in rects {
        let (min, max) = (rect.min(), rect.max());
        extent = Some(match extent {
            Some((lo, hi)) => (
                Vec2::new(lo.x.min(min.x), lo.y.min(min.y)),
                Vec2::new(hi.x.max(max.x), hi.y.max(max.y)),
            ),
            None => (min, max),
        });
    }

    let (min, max) = extent.unwrap_or((Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)));
    let center = Vec2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
    let half = Vec2::new(
        (max.x - min.x) / 2.0 + MARGIN,
        (max.y - min.y) / 2.0 + MARGIN,
    );
    Bounds::new(center, half)
}
