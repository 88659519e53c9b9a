//! Domain state: items, rods, zones and their identifiers.
mod category;
mod ids;
pub(crate) mod item;
mod rod;
mod zone;

pub use category::{Category, CategorySet};
pub use ids::{ItemId, RodId, Tick, Timestamp, ZoneId};
pub use item::{DragOrigin, GarmentItem, Presence};
pub use rod::Rod;
pub use zone::DropZone;
