//! Spatial queries: which drop zone lies under a dragged item.
//!
//! Collision detection belongs to the host, so the engine only asks a
//! [`RegionOracle`]. [`ZoneRegions`] is the built-in axis-aligned
//! implementation used by the terminal client and the tests.
use crate::geometry::Bounds;
use crate::state::{DropZone, ZoneId};

/// Resolves the zone an item's bounds currently overlap.
pub trait RegionOracle {
    /// Returns the best-overlapping zone, or `None` over empty space.
    fn zone_at(&self, bounds: &Bounds) -> Option<ZoneId>;
}

/// Axis-aligned zone rectangles.
///
/// The zone with the largest overlap area wins; ties go to the lower id.
#[derive(Clone, Debug, Default)]
pub struct ZoneRegions {
    regions: Vec<(ZoneId, Bounds)>,
}

impl ZoneRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_zones<'a>(zones: impl IntoIterator<Item = &'a DropZone>) -> Self {
        let mut regions = Self::new();
        for zone in zones {
            regions.insert(zone.id(), zone.bounds());
        }
        regions
    }

    /// Adds or replaces the rectangle of `zone`.
    pub fn insert(&mut self, zone: ZoneId, bounds: Bounds) {
        match self.regions.iter_mut().find(|(id, _)| *id == zone) {
            Some(entry) => entry.1 = bounds,
            None => self.regions.push((zone, bounds)),
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl RegionOracle for ZoneRegions {
    fn zone_at(&self, bounds: &Bounds) -> Option<ZoneId> {
        let mut best: Option<(ZoneId, f32)> = None;
        for &(zone, region) in &self.regions {
            let area = region.overlap_area(bounds);
            if area <= 0.0 {
                continue;
            }
            best = match best {
                Some((current, best_area))
                    if best_area > area || (best_area == area && current < zone) =>
                {
                    Some((current, best_area))
                }
                _ => Some((zone, area)),
            };
        }
        best.map(|(zone, _)| zone)
    }
}

impl<F> RegionOracle for F
where
    F: Fn(&Bounds) -> Option<ZoneId>,
{
    fn zone_at(&self, bounds: &Bounds) -> Option<ZoneId> {
        self(bounds)
    }
}
