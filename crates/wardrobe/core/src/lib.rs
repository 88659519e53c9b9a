//! Deterministic wardrobe interaction engine.
//!
//! `wardrobe-core` turns raw pointer input into dress-up interactions: garment
//! items are cycled on per-slot rods, dragged onto body drop zones, swapped
//! and evicted according to category rules. All state mutation flows through
//! [`engine::Wardrobe`]; rendering, collision and input polling stay outside
//! and talk to the engine through [`PointerEvent`]s, the [`RegionOracle`] and
//! the [`PresentationEvent`] outbox.
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod presentation;
pub mod region;
pub mod rules;
pub mod state;

pub use catalog::{Catalog, ConflictSpec, ItemSpec, RodSpec, ZoneSpec};
pub use config::{ConfigError, GestureThresholds, SlowClickPolicy, WardrobeConfig};
pub use engine::{
    CatalogError, CatalogIssue, Eviction, EvictionCause, Interaction, InvariantViolation,
    Placement, PlacementError, RejectReason, Wardrobe,
};
pub use error::{ErrorSeverity, WardrobeError};
pub use geometry::{Bounds, Transform, Vec2};
pub use gesture::{GestureIntent, GesturePhase, GestureRecognizer, PointerEvent, PointerKind};
pub use presentation::{DrawLayer, PresentationEvent};
pub use region::{RegionOracle, ZoneRegions};
pub use rules::{ConflictRules, DormantVisibility};
pub use state::{
    Category, CategorySet, DragOrigin, DropZone, GarmentItem, ItemId, Presence, Rod, RodId, Tick,
    Timestamp, ZoneId,
};
