//! Consistency checks across items, rods and zones, plus local repair.
use super::{InvariantViolation, Wardrobe};
use crate::state::{ItemId, Presence};

impl Wardrobe {
    /// Verifies every cross-component rule, reporting the first violation.
    ///
    /// - each rod offers at most one item, and only the one under its cursor
    /// - a rod's cursor never points at a placed or dormant item
    /// - each item is a member of its home rod
    /// - zone occupants and placed items agree in both directions
    /// - occupants are of an accepted category
    /// - no two worn items conflict
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for rod in &self.rods {
            let offered: Vec<ItemId> = rod
                .members()
                .iter()
                .copied()
                .filter(|&id| self.items.get(id).is_some_and(|item| item.is_offered()))
                .collect();
            if offered.len() > 1 {
                return Err(InvariantViolation::MultipleOffered {
                    rod: rod.id(),
                    count: offered.len(),
                });
            }
            if let Some(item) = rod.offered() {
                if self.items.is_placed(item) {
                    return Err(InvariantViolation::CursorOnPlaced { rod: rod.id(), item });
                }
                if self.items.get(item).map(|it| it.presence()) == Some(Presence::Dormant) {
                    return Err(InvariantViolation::CursorOnHidden { rod: rod.id(), item });
                }
            }
            if let Some(&item) = offered.first() {
                if rod.offered() != Some(item) {
                    return Err(InvariantViolation::OfferedOffCursor { rod: rod.id(), item });
                }
            }
        }

        for item in self.items.all() {
            let rod = item.home_slot();
            let on_rod = self
                .rod(rod)
                .is_some_and(|home| home.members().contains(&item.id()));
            if !on_rod {
                return Err(InvariantViolation::MissingFromRod { rod, item: item.id() });
            }
            if let Presence::Placed(zone) = item.presence() {
                if self.zone(zone).and_then(|z| z.occupant()) != Some(item.id()) {
                    return Err(InvariantViolation::PlacedWithoutZone {
                        item: item.id(),
                        zone,
                    });
                }
            }
        }

        let worn = self.worn();
        for &(zone, item) in &worn {
            let Some(occupant) = self.items.get(item) else {
                return Err(InvariantViolation::OccupantNotPlaced { zone, item });
            };
            if occupant.placed_in() != Some(zone) {
                return Err(InvariantViolation::OccupantNotPlaced { zone, item });
            }
            if !self.accepts(zone, occupant.category()) {
                return Err(InvariantViolation::IncompatibleOccupant { zone, item });
            }
        }

        for (index, &(_, first)) in worn.iter().enumerate() {
            for &(_, second) in &worn[index + 1..] {
                let (Some(a), Some(b)) = (self.items.get(first), self.items.get(second)) else {
                    continue;
                };
                if self.rules.conflicts(a.category(), b.category()) {
                    return Err(InvariantViolation::ConflictingWorn { first, second });
                }
            }
        }

        Ok(())
    }

    /// Applies local corrections for rod-level violations.
    ///
    /// A cursor on a placed or dormant item is unset and the rod rescans; extra offered
    /// members outside the cursor go dormant. Returns the number of repairs.
    pub fn repair(&mut self) -> usize {
        let mut repairs = 0;
        for rod in &mut self.rods {
            if rod.repair(&mut self.items) {
                repairs += 1;
            }
            let cursor_item = rod.offered();
            let stray: Vec<ItemId> = rod
                .members()
                .iter()
                .copied()
                .filter(|&id| Some(id) != cursor_item)
                .filter(|&id| self.items.get(id).is_some_and(|item| item.is_offered()))
                .collect();
            for id in stray {
                tracing::warn!("{} offered outside the cursor of '{}'; hiding", id, rod.name());
                self.items.set_presence(id, Presence::Dormant);
                repairs += 1;
            }
        }
        if repairs > 0 {
            tracing::warn!("repaired {} rod inconsistency(ies)", repairs);
        }
        repairs
    }
}
