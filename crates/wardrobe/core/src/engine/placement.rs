//! Cycling, placement, eviction and return.
//!
//! Placement protocol for `place(zone, item)`:
//!
//! 1. evict occupants of other zones whose category conflicts with the item
//! 2. evict this zone's occupant (swap)
//! 3. admit the item, snap it to the zone anchor and mark it placed
//! 4. let the item's home rod offer something else if it was offering it
//!
//! Every eviction goes through the same return path, which restores the
//! item's home transform and hands it back to its rod as the newly offered
//! member.
use arrayvec::ArrayVec;

use super::{DeferredAction, Interaction, PlacementError, RejectReason, Wardrobe};
use crate::config::WardrobeConfig;
use crate::state::{Category, DragOrigin, ItemId, Presence, RodId, ZoneId};

/// Why an occupant left its zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvictionCause {
    /// Replaced by a new item in the same zone.
    Swap,
    /// Removed because the new item's category excludes it.
    Conflict,
    /// The zone was cleared explicitly.
    Cleared,
}

/// An occupant sent back to its rod.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Eviction {
    pub item: ItemId,
    pub zone: ZoneId,
    pub cause: EvictionCause,
}

/// Outcome of a successful placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub item: ItemId,
    pub zone: ZoneId,
    /// Every item that had to leave, conflicts first, then the swap.
    pub evicted: ArrayVec<Eviction, { WardrobeConfig::MAX_ZONES }>,
}

impl Placement {
    /// Previous occupant of the target zone.
    pub fn previous(&self) -> Option<ItemId> {
        self.evicted
            .iter()
            .find(|eviction| eviction.cause == EvictionCause::Swap)
            .map(|eviction| eviction.item)
    }
}

impl Wardrobe {
    /// Pure membership test; false for unknown zones.
    pub fn accepts(&self, zone: ZoneId, category: Category) -> bool {
        self.zone(zone).is_some_and(|z| z.accepts(category))
    }

    /// Cycles the item's rod, unless the item is placed.
    pub fn tap(&mut self, item: ItemId) -> Option<Interaction> {
        let it = self.items.get(item)?;
        if it.is_placed() {
            tracing::debug!("tap on placed {} ignored", item);
            return None;
        }
        let rod = it.home_slot();
        let offered = self.advance(rod).ok()?;
        Some(Interaction::Cycled { rod, offered })
    }

    /// Moves `rod` to its next offerable member.
    pub fn advance(&mut self, rod: RodId) -> Result<Option<ItemId>, PlacementError> {
        let target = self
            .rods
            .get_mut(rod.index())
            .ok_or(PlacementError::UnknownRod(rod))?;
        let offered = target.advance(&mut self.items);
        if let Some(item) = offered {
            self.scheduler.cancel_for(item);
        }
        Ok(offered)
    }

    /// Re-registers an unplaced item with its home rod and offers it.
    pub fn register_return(&mut self, item: ItemId) -> Result<Option<ItemId>, PlacementError> {
        let it = self.items.get(item).ok_or(PlacementError::UnknownItem(item))?;
        if let Some(zone) = it.placed_in() {
            return Err(PlacementError::StillPlaced { item, zone });
        }
        let rod = it.home_slot();
        self.scheduler.cancel_for(item);
        let target = self
            .rods
            .get_mut(rod.index())
            .ok_or(PlacementError::UnknownRod(rod))?;
        Ok(target.register_return(item, &mut self.items))
    }

    /// Hides every offered member of `rod` whose category is not `category`.
    ///
    /// A hidden cursor member hands the offering to the next member of
    /// `category`, so the rod never points at an item nobody can see.
    pub fn resolve_conflicts(
        &mut self,
        rod: RodId,
        category: Category,
    ) -> Result<usize, PlacementError> {
        let target = self
            .rods
            .get_mut(rod.index())
            .ok_or(PlacementError::UnknownRod(rod))?;
        Ok(target.resolve_conflicts(category, &mut self.items))
    }

    /// Places `item` into `zone`, evicting whatever has to leave.
    pub fn place(&mut self, zone: ZoneId, item: ItemId) -> Result<Placement, PlacementError> {
        let target = self.zone(zone).ok_or(PlacementError::UnknownZone(zone))?;
        let it = self.items.get(item).ok_or(PlacementError::UnknownItem(item))?;
        let category = it.category();
        if target.accepted().is_empty() {
            tracing::warn!("{} ({}) accepts nothing; placement refused", zone, target.name());
            return Err(PlacementError::ZoneAcceptsNothing { zone });
        }
        if !target.accepts(category) {
            return Err(PlacementError::Incompatible { zone, category });
        }

        let mut evicted = ArrayVec::new();
        match it.presence() {
            Presence::Placed(current) if current == zone => {
                return Ok(Placement {
                    item,
                    zone,
                    evicted,
                });
            }
            Presence::Placed(current) => {
                self.zones[current.index()].take_occupant();
                self.scheduler.cancel_for(item);
            }
            _ => {}
        }

        let excluded = self.rules.excluded_by(category);
        if !excluded.is_empty() {
            let conflicting: Vec<ZoneId> = self
                .zones
                .iter()
                .filter(|other| other.id() != zone)
                .filter(|other| {
                    other
                        .occupant()
                        .and_then(|occupant| self.items.get(occupant))
                        .is_some_and(|occupant| excluded.has(occupant.category()))
                })
                .map(|other| other.id())
                .collect();
            for other in conflicting {
                if let Some(eviction) = self.evict(other, EvictionCause::Conflict) {
                    evicted.push(eviction);
                }
            }
        }

        if let Some(eviction) = self.evict(zone, EvictionCause::Swap) {
            evicted.push(eviction);
        }

        let snap = self.zones[zone.index()].snap_transform();
        self.zones[zone.index()].set_occupant(item);
        self.scheduler.cancel_for(item);
        self.items.set_presence(item, Presence::Placed(zone));
        self.items.move_to(item, snap);
        self.items.set_hover(item, None, false);
        self.items.set_hit_testable(item, true);
        self.scheduler.schedule(
            self.frame + self.config.settle_delay_ticks,
            DeferredAction::SettleHitTest { item, zone },
        );
        self.refresh_home_rod(item);

        tracing::debug!(
            "{} placed in {} ({} eviction(s))",
            item,
            zone,
            evicted.len()
        );
        Ok(Placement {
            item,
            zone,
            evicted,
        })
    }

    /// Sends the occupant of `zone` (if any) back to its rod.
    pub fn clear(&mut self, zone: ZoneId) -> Result<Option<ItemId>, PlacementError> {
        if self.zone(zone).is_none() {
            return Err(PlacementError::UnknownZone(zone));
        }
        Ok(self
            .evict(zone, EvictionCause::Cleared)
            .map(|eviction| eviction.item))
    }

    /// Brings `item` back to its rod from wherever it is.
    ///
    /// A placed item leaves its zone first. The home transform is restored,
    /// hover and pending tasks are cleared, hit-testing is re-enabled and the
    /// home rod offers the item.
    pub fn mark_returned(&mut self, item: ItemId) -> Result<(), PlacementError> {
        let it = self.items.get(item).ok_or(PlacementError::UnknownItem(item))?;
        if let Some(zone) = it.placed_in() {
            if self.zones[zone.index()].occupant() == Some(item) {
                self.zones[zone.index()].take_occupant();
            }
        }
        self.return_to_rod(item);
        Ok(())
    }

    /// Resolves a drop of `item` over `candidate`.
    ///
    /// Never fails: anything other than a successful placement returns the
    /// item to its home transform with interactivity restored.
    pub fn drop_attempt(&mut self, item: ItemId, candidate: Option<ZoneId>) -> Interaction {
        let Some(zone) = candidate else {
            tracing::debug!("{} dropped over empty space", item);
            self.return_home(item);
            return Interaction::Returned { item };
        };

        match self.place(zone, item) {
            Ok(placement) => Interaction::Placed(placement),
            Err(error) => {
                let reason = match error {
                    PlacementError::Incompatible { .. } => RejectReason::Incompatible,
                    PlacementError::ZoneAcceptsNothing { .. } => RejectReason::ZoneAcceptsNothing,
                    _ => RejectReason::UnknownZone,
                };
                tracing::warn!("drop of {} on {} rejected: {}", item, zone, error);
                self.return_home(item);
                Interaction::Rejected { item, zone, reason }
            }
        }
    }

    // ===== internal =====

    fn evict(&mut self, zone: ZoneId, cause: EvictionCause) -> Option<Eviction> {
        let item = self.zones.get_mut(zone.index())?.take_occupant()?;
        tracing::debug!("{} evicted from {} ({:?})", item, zone, cause);
        self.return_to_rod(item);
        Some(Eviction { item, zone, cause })
    }

    /// Shared return path: the item must already be out of any zone.
    fn return_to_rod(&mut self, item: ItemId) {
        let Some(rod) = self.items.get(item).map(|it| it.home_slot()) else {
            return;
        };
        self.scheduler.cancel_for(item);
        if self.captured == Some(item) {
            self.captured = None;
        }
        if let Some(it) = self.items.get_mut(item) {
            it.gesture.cancel();
        }
        self.items.set_presence(item, Presence::Dormant);
        self.items.set_hover(item, None, false);
        self.items.snap_home(item);
        self.items.set_hit_testable(item, true);

        match self.rods.get_mut(rod.index()) {
            Some(home) => {
                home.register_return(item, &mut self.items);
            }
            None => tracing::error!("{} has no home rod {}", item, rod),
        }
    }

    /// Puts a dropped item back where it came from.
    fn return_home(&mut self, item: ItemId) {
        let Some(it) = self.items.get(item) else {
            return;
        };
        let rod = it.home_slot();
        let still_offered = self.offered(rod) == Some(item);
        match it.presence() {
            Presence::Dragging {
                origin: DragOrigin::Rod,
            }
            | Presence::Offered
                if still_offered =>
            {
                self.items.set_presence(item, Presence::Offered);
                self.items.set_hover(item, None, false);
                self.items.snap_home(item);
                self.items.set_hit_testable(item, true);
            }
            Presence::Placed(zone) => {
                if self.zones[zone.index()].occupant() == Some(item) {
                    self.zones[zone.index()].take_occupant();
                }
                self.return_to_rod(item);
            }
            _ => self.return_to_rod(item),
        }
    }

    /// Lets the home rod move on if it was offering the item that just left.
    fn refresh_home_rod(&mut self, item: ItemId) {
        let Some(rod) = self.items.get(item).map(|it| it.home_slot()) else {
            return;
        };
        if let Some(home) = self.rods.get_mut(rod.index()) {
            if home.needs_refresh(&self.items) {
                home.advance(&mut self.items);
            }
        }
    }
}
