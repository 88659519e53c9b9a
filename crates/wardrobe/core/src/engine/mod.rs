//! The wardrobe engine.
//!
//! [`Wardrobe`] owns every item, rod and zone and is the single entry point
//! for mutation. Each public `&mut self` method fully restores the
//! consistency rules before it returns, so no caller ever observes a
//! half-finished swap.
mod errors;
mod input;
mod invariants;
mod placement;
mod schedule;

pub use errors::{CatalogError, CatalogIssue, InvariantViolation, PlacementError};
pub use input::{Interaction, RejectReason};
pub use placement::{Eviction, EvictionCause, Placement};

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::config::WardrobeConfig;
use crate::geometry::{Transform, Vec2};
use crate::gesture::GestureRecognizer;
use crate::presentation::PresentationEvent;
use crate::rules::ConflictRules;
use crate::state::{
    DropZone, GarmentItem, ItemId, Rod, RodId, Tick, ZoneId, item::ItemStore,
};

use schedule::{DeferredAction, Scheduler};

/// Interaction engine for one character's wardrobe.
#[derive(Clone, Debug)]
pub struct Wardrobe {
    config: WardrobeConfig,
    rules: ConflictRules,
    items: ItemStore,
    rods: Vec<Rod>,
    zones: Vec<DropZone>,
    scheduler: Scheduler,
    frame: Tick,
    /// Item holding the pointer between press and release.
    captured: Option<ItemId>,
    diagnostics: Vec<CatalogIssue>,
}

impl Wardrobe {
    /// Builds the engine and offers the first item of every non-empty rod.
    ///
    /// Names and limits are validated up front. Degradable problems do not
    /// fail the build; they are recorded in [`diagnostics`](Self::diagnostics).
    pub fn from_catalog(catalog: &Catalog, config: WardrobeConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        check_limits(catalog)?;
        check_unique("rod", catalog.rods.iter().map(|rod| rod.name.as_str()))?;
        check_unique("zone", catalog.zones.iter().map(|zone| zone.name.as_str()))?;
        check_unique(
            "item",
            catalog
                .rods
                .iter()
                .flat_map(|rod| rod.items.iter().map(|item| item.name.as_str())),
        )?;

        let mut diagnostics = Vec::new();
        for spec in &catalog.conflicts {
            if spec.excludes.contains(&spec.category) {
                diagnostics.push(CatalogIssue::SelfExclusion {
                    category: spec.category,
                });
            }
        }

        let mut items = ItemStore::new(catalog.dormant_visibility());
        let mut rods = Vec::with_capacity(catalog.rods.len());
        for (rod_index, rod_spec) in catalog.rods.iter().enumerate() {
            let rod_id = RodId::from_index(rod_index);
            let mut rod = Rod::new(rod_id, rod_spec.name.clone());
            if rod_spec.items.is_empty() {
                diagnostics.push(CatalogIssue::EmptyRod {
                    rod: rod_spec.name.clone(),
                });
            }
            for item_spec in &rod_spec.items {
                let scale = sanitize_scale(&item_spec.name, item_spec.scale, &mut diagnostics);
                let id = ItemId::from_index(items.all().len());
                items.push(GarmentItem::new(
                    id,
                    item_spec.name.clone(),
                    item_spec.category,
                    rod_id,
                    Transform::new(item_spec.position, scale),
                    item_spec.size,
                    GestureRecognizer::new(config.gesture),
                ));
                rod.admit(id);
            }
            rods.push(rod);
        }

        let mut zones = Vec::with_capacity(catalog.zones.len());
        for (zone_index, zone_spec) in catalog.zones.iter().enumerate() {
            let accepted = zone_spec.accepted();
            if accepted.is_empty() {
                diagnostics.push(CatalogIssue::ZoneAcceptsNothing {
                    zone: zone_spec.name.clone(),
                });
            }
            if !(zone_spec.size.x > 0.0 && zone_spec.size.y > 0.0) {
                diagnostics.push(CatalogIssue::DegenerateZone {
                    zone: zone_spec.name.clone(),
                });
            }
            let scale = sanitize_scale(&zone_spec.name, zone_spec.scale, &mut diagnostics);
            zones.push(DropZone::new(
                ZoneId::from_index(zone_index),
                zone_spec.name.clone(),
                accepted,
                zone_spec.anchor,
                zone_spec.size,
                scale,
            ));
        }

        for issue in &diagnostics {
            tracing::warn!("catalog: {}", issue);
        }

        let mut wardrobe = Self {
            config,
            rules: catalog.conflict_rules(),
            items,
            rods,
            zones,
            scheduler: Scheduler::new(),
            frame: Tick::ZERO,
            captured: None,
            diagnostics,
        };

        for rod in &mut wardrobe.rods {
            rod.advance(&mut wardrobe.items);
        }
        let ids: Vec<ItemId> = wardrobe.items.all().iter().map(GarmentItem::id).collect();
        for id in ids {
            wardrobe.items.announce(id);
        }

        tracing::info!(
            "wardrobe loaded: {} rods, {} items, {} zones ({} issue(s))",
            wardrobe.rods.len(),
            wardrobe.items.all().len(),
            wardrobe.zones.len(),
            wardrobe.diagnostics.len()
        );
        Ok(wardrobe)
    }

    // ===== queries =====

    pub fn config(&self) -> &WardrobeConfig {
        &self.config
    }

    pub fn rules(&self) -> &ConflictRules {
        &self.rules
    }

    pub fn item(&self, id: ItemId) -> Option<&GarmentItem> {
        self.items.get(id)
    }

    pub fn rod(&self, id: RodId) -> Option<&Rod> {
        self.rods.get(id.index())
    }

    pub fn zone(&self, id: ZoneId) -> Option<&DropZone> {
        self.zones.get(id.index())
    }

    pub fn items(&self) -> &[GarmentItem] {
        self.items.all()
    }

    pub fn rods(&self) -> &[Rod] {
        &self.rods
    }

    pub fn zones(&self) -> &[DropZone] {
        &self.zones
    }

    pub fn item_by_name(&self, name: &str) -> Option<ItemId> {
        self.items
            .all()
            .iter()
            .find(|item| item.name() == name)
            .map(GarmentItem::id)
    }

    pub fn rod_by_name(&self, name: &str) -> Option<RodId> {
        self.rods.iter().find(|rod| rod.name() == name).map(Rod::id)
    }

    pub fn zone_by_name(&self, name: &str) -> Option<ZoneId> {
        self.zones
            .iter()
            .find(|zone| zone.name() == name)
            .map(DropZone::id)
    }

    /// Item currently offered by `rod`.
    pub fn offered(&self, rod: RodId) -> Option<ItemId> {
        self.rod(rod).and_then(Rod::offered)
    }

    /// Occupied zones with their occupants, in zone order.
    pub fn worn(&self) -> Vec<(ZoneId, ItemId)> {
        self.zones
            .iter()
            .filter_map(|zone| zone.occupant().map(|item| (zone.id(), item)))
            .collect()
    }

    /// Whether the item is currently drawn.
    pub fn is_visible(&self, id: ItemId) -> bool {
        self.items
            .get(id)
            .is_some_and(|item| self.items.is_visible(item))
    }

    /// Configuration issues found while building from the catalog.
    pub fn diagnostics(&self) -> &[CatalogIssue] {
        &self.diagnostics
    }

    pub fn frame(&self) -> Tick {
        self.frame
    }

    /// Item holding the pointer, if a press is in progress.
    pub fn captured(&self) -> Option<ItemId> {
        self.captured
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    pub fn has_pending_task(&self, item: ItemId) -> bool {
        self.scheduler.is_pending_for(item)
    }

    /// Takes every presentation update produced since the last call.
    pub fn drain_events(&mut self) -> Vec<PresentationEvent> {
        self.items.drain_events()
    }

    /// Topmost interactive, hit-testable, visible item under `point`.
    ///
    /// Dragged items win over worn ones, worn over the rack; within a layer
    /// the highest id wins.
    pub fn hit_test(&self, point: Vec2) -> Option<ItemId> {
        self.items
            .all()
            .iter()
            .filter(|item| {
                item.hit_testable()
                    && item.is_interactive()
                    && self.items.is_visible(item)
                    && item.bounds().contains(point)
            })
            .max_by_key(|item| (item.presence().layer(), item.id()))
            .map(GarmentItem::id)
    }

    /// Zone whose rectangle contains `point`.
    pub fn zone_at_point(&self, point: Vec2) -> Option<ZoneId> {
        self.zones
            .iter()
            .find(|zone| zone.bounds().contains(point))
            .map(DropZone::id)
    }

    // ===== frame update =====

    fn run_deferred(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::SettleHitTest { item, zone } => {
                let settled = self
                    .items
                    .get(item)
                    .is_some_and(|it| it.placed_in() == Some(zone));
                if settled {
                    self.items.set_hit_testable(item, false);
                    tracing::debug!("{} settled in {}; hit-testing disabled", item, zone);
                } else {
                    tracing::debug!("stale settle task for {} skipped", item);
                }
            }
        }
    }

    fn fire_due_tasks(&mut self) {
        for action in self.scheduler.take_due(self.frame) {
            self.run_deferred(action);
        }
    }
}

fn check_limits(catalog: &Catalog) -> Result<(), CatalogError> {
    if catalog.rods.len() > WardrobeConfig::MAX_RODS {
        return Err(CatalogError::TooManyRods {
            max: WardrobeConfig::MAX_RODS,
            count: catalog.rods.len(),
        });
    }
    if catalog.zones.len() > WardrobeConfig::MAX_ZONES {
        return Err(CatalogError::TooManyZones {
            max: WardrobeConfig::MAX_ZONES,
            count: catalog.zones.len(),
        });
    }
    let count = catalog.item_count();
    if count > WardrobeConfig::MAX_ITEMS {
        return Err(CatalogError::TooManyItems {
            max: WardrobeConfig::MAX_ITEMS,
            count,
        });
    }
    Ok(())
}

fn check_unique<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateName {
                kind,
                name: name.to_owned(),
            });
        }
    }
    Ok(())
}

fn sanitize_scale(name: &str, scale: f32, diagnostics: &mut Vec<CatalogIssue>) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        diagnostics.push(CatalogIssue::InvalidScale {
            name: name.to_owned(),
            scale,
        });
        1.0
    }
}
