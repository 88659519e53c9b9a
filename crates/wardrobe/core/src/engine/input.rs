//! Pointer routing: hit-testing, capture, gesture intents.
//!
//! A pointer-down captures the topmost interactive item; every following
//! move and the release go to that item's recognizer regardless of where the
//! pointer is. Intents are resolved here into cycling, dragging and drops.
use super::{Placement, Wardrobe};
use crate::config::SlowClickPolicy;
use crate::geometry::{Transform, Vec2};
use crate::gesture::{GestureIntent, PointerEvent, PointerKind};
use crate::region::RegionOracle;
use crate::state::{DragOrigin, ItemId, Presence, RodId, Timestamp, ZoneId};

/// Why a zone refused a dropped item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The zone does not accept the item's category.
    Incompatible,
    /// The zone has no accepted categories at all.
    ZoneAcceptsNothing,
    /// The region oracle reported a zone the wardrobe does not know.
    UnknownZone,
}

/// User-level outcome of a pointer event or frame update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// A tap cycled `rod`; `offered` is its new offering.
    Cycled {
        rod: RodId,
        offered: Option<ItemId>,
    },
    DragStarted {
        item: ItemId,
        origin: DragOrigin,
    },
    Placed(Placement),
    /// Dropped over empty space and sent home.
    Returned { item: ItemId },
    /// Dropped on a zone that refused it; sent home.
    Rejected {
        item: ItemId,
        zone: ZoneId,
        reason: RejectReason,
    },
    /// Released after the tap window without dragging.
    SlowClick {
        item: ItemId,
        policy: SlowClickPolicy,
    },
}

impl Wardrobe {
    /// Feeds one pointer sample through hit-testing and gesture recognition.
    ///
    /// Never fails; rejected drops come back as [`Interaction::Rejected`]
    /// with the item already returned home.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        regions: &impl RegionOracle,
    ) -> Option<Interaction> {
        match event.kind {
            PointerKind::Down => {
                self.pointer_down(event.position, event.at);
                None
            }
            PointerKind::Move => self.pointer_move(event.position, event.at, regions),
            PointerKind::Up => self.pointer_up(event.position, event.at, regions),
        }
    }

    /// Per-frame update.
    ///
    /// Advances the frame counter, fires due deferred tasks and lets a held
    /// press turn into a drag once the long-press threshold passes.
    pub fn tick(&mut self, now: Timestamp, regions: &impl RegionOracle) -> Option<Interaction> {
        self.frame = self.frame + 1;
        self.fire_due_tasks();

        let item = self.captured?;
        let intent = self.items.get_mut(item)?.gesture.update(now);
        match intent {
            Some(GestureIntent::DragStart { position }) => {
                let started = self.begin_drag(item);
                if started.is_some() {
                    self.follow(item, position, regions);
                }
                started
            }
            _ => None,
        }
    }

    fn pointer_down(&mut self, position: Vec2, at: Timestamp) {
        if self.captured.is_some() {
            tracing::debug!("pointer down while a press is active; abandoning it");
            self.release_capture();
        }
        let Some(item) = self.hit_test(position) else {
            return;
        };
        let Some(it) = self.items.get_mut(item) else {
            return;
        };
        it.gesture.press(position, at);
        let offset = it.transform().position - position;
        self.items.set_grab_offset(item, offset);
        self.captured = Some(item);
        tracing::debug!("{} pressed at {}", item, position);
    }

    fn pointer_move(
        &mut self,
        position: Vec2,
        at: Timestamp,
        regions: &impl RegionOracle,
    ) -> Option<Interaction> {
        let item = self.captured?;
        let intent = self.items.get_mut(item)?.gesture.motion(position, at);
        let started = match intent {
            Some(GestureIntent::DragStart { .. }) => self.begin_drag(item),
            _ => None,
        };
        if self.items.get(item).is_some_and(|it| it.is_dragging()) {
            self.follow(item, position, regions);
        }
        started
    }

    fn pointer_up(
        &mut self,
        position: Vec2,
        at: Timestamp,
        regions: &impl RegionOracle,
    ) -> Option<Interaction> {
        let item = self.captured.take()?;
        let intent = self.items.get_mut(item)?.gesture.release(position, at);
        match intent? {
            GestureIntent::Tap => self.tap(item),
            GestureIntent::SlowClick => Some(self.slow_click(item)),
            GestureIntent::Drop { position } => {
                let dragging = self.items.get(item).is_some_and(|it| it.is_dragging());
                if !dragging {
                    self.begin_drag(item)?;
                }
                self.follow(item, position, regions);
                let bounds = self.items.get(item)?.bounds();
                let candidate = regions.zone_at(&bounds);
                Some(self.drop_attempt(item, candidate))
            }
            GestureIntent::DragStart { .. } => None,
        }
    }

    fn slow_click(&mut self, item: ItemId) -> Interaction {
        let policy = self.config.slow_click;
        match policy {
            SlowClickPolicy::Ignore => {
                tracing::debug!("slow click on {} ignored", item);
            }
            SlowClickPolicy::Cycle => {
                if let Some(Interaction::Cycled { rod, offered }) = self.tap(item) {
                    tracing::debug!("slow click cycled {} to {:?}", rod, offered);
                }
            }
            SlowClickPolicy::SnapBack => {
                let target = match self.items.get(item).map(|it| it.presence()) {
                    Some(Presence::Placed(zone)) => self.zone(zone).map(|z| z.snap_transform()),
                    Some(_) => self.items.get(item).map(|it| it.home()),
                    None => None,
                };
                if let Some(target) = target {
                    self.items.move_to(item, target);
                }
            }
        }
        Interaction::SlowClick { item, policy }
    }

    /// Lifts an offered or placed item into the dragging state.
    ///
    /// A placed item leaves its zone immediately, so the zone never holds a
    /// dragging occupant. Pending settle tasks are cancelled here, not on press.
    fn begin_drag(&mut self, item: ItemId) -> Option<Interaction> {
        let origin = match self.items.get(item)?.presence() {
            Presence::Offered => DragOrigin::Rod,
            Presence::Placed(zone) => {
                self.zones.get_mut(zone.index())?.take_occupant();
                DragOrigin::Zone(zone)
            }
            Presence::Dragging { origin } => return Some(Interaction::DragStarted { item, origin }),
            Presence::Dormant => {
                tracing::warn!("dormant {} cannot be dragged", item);
                if let Some(it) = self.items.get_mut(item) {
                    it.gesture.cancel();
                }
                return None;
            }
        };
        self.scheduler.cancel_for(item);
        self.items.set_presence(item, Presence::Dragging { origin });
        self.items.set_hit_testable(item, true);
        tracing::debug!("{} drag started from {:?}", item, origin);
        Some(Interaction::DragStarted { item, origin })
    }

    /// Moves a dragged item under the pointer and samples the zone it hovers.
    fn follow(&mut self, item: ItemId, pointer: Vec2, regions: &impl RegionOracle) {
        let Some(it) = self.items.get(item) else {
            return;
        };
        let target = Transform::new(pointer + it.grab_offset(), it.transform().scale);
        let category = it.category();
        self.items.move_to(item, target);

        let Some(bounds) = self.items.get(item).map(|it| it.bounds()) else {
            return;
        };
        let zone = regions.zone_at(&bounds);
        let accepts = zone.is_some_and(|zone| self.accepts(zone, category));
        if self.items.get(item).and_then(|it| it.hover()) != zone {
            tracing::debug!("{} hovers {:?} (accepts: {})", item, zone, accepts);
        }
        self.items.set_hover(item, zone, accepts);
    }

    /// Drops the current capture without resolving it as a gesture.
    fn release_capture(&mut self) {
        let Some(item) = self.captured.take() else {
            return;
        };
        let dragging = self.items.get(item).is_some_and(|it| it.is_dragging());
        if let Some(it) = self.items.get_mut(item) {
            it.gesture.cancel();
        }
        if dragging {
            self.drop_attempt(item, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WardrobeConfig;
    use crate::engine::tests::outfit_catalog;
    use crate::region::ZoneRegions;

    fn ms(value: u64) -> Timestamp {
        Timestamp::from_millis(value)
    }

    fn setup(config: WardrobeConfig) -> (Wardrobe, ZoneRegions) {
        let wardrobe = Wardrobe::from_catalog(&outfit_catalog(), config).unwrap();
        let regions = ZoneRegions::from_zones(wardrobe.zones());
        (wardrobe, regions)
    }

    #[test]
    fn quick_click_cycles_the_rod() {
        let (mut wardrobe, regions) = setup(WardrobeConfig::default());
        let rack = Vec2::new(-8.0, 4.0);
        assert_eq!(wardrobe.handle_pointer(PointerEvent::down(rack, ms(0)), &regions), None);
        assert_eq!(wardrobe.captured(), Some(ItemId(0)));
        assert_eq!(
            wardrobe.handle_pointer(PointerEvent::up(rack, ms(100)), &regions),
            Some(Interaction::Cycled {
                rod: RodId(0),
                offered: Some(ItemId(1))
            })
        );
        assert_eq!(wardrobe.captured(), None);
    }

    #[test]
    fn press_on_empty_space_captures_nothing() {
        let (mut wardrobe, regions) = setup(WardrobeConfig::default());
        let far = Vec2::new(50.0, 50.0);
        wardrobe.handle_pointer(PointerEvent::down(far, ms(0)), &regions);
        assert_eq!(wardrobe.captured(), None);
        assert_eq!(wardrobe.handle_pointer(PointerEvent::up(far, ms(50)), &regions), None);
    }

    #[test]
    fn drag_keeps_the_grab_offset() {
        let (mut wardrobe, regions) = setup(WardrobeConfig::default());
        wardrobe.handle_pointer(PointerEvent::down(Vec2::new(-8.2, 4.1), ms(0)), &regions);
        let started = wardrobe.handle_pointer(PointerEvent::moved(Vec2::new(-6.2, 4.1), ms(30)), &regions);
        assert_eq!(
            started,
            Some(Interaction::DragStarted {
                item: ItemId(0),
                origin: DragOrigin::Rod
            })
        );
        let position = wardrobe.item(ItemId(0)).unwrap().transform().position;
        assert!((position.x - -6.0).abs() < 1e-4);
        assert!((position.y - 4.0).abs() < 1e-4);
    }

    #[test]
    fn hovering_reports_acceptance() {
        let (mut wardrobe, regions) = setup(WardrobeConfig::default());
        wardrobe.handle_pointer(PointerEvent::down(Vec2::new(-8.0, 4.0), ms(0)), &regions);
        wardrobe.handle_pointer(PointerEvent::moved(Vec2::new(4.0, 8.0), ms(20)), &regions);
        let head = wardrobe.zone_by_name("head").unwrap();
        let events = wardrobe.drain_events();
        assert!(events.contains(&crate::presentation::PresentationEvent::Hover {
            item: ItemId(0),
            zone: Some(head),
            accepts: false
        }));
    }

    #[test]
    fn long_press_starts_a_drag_on_tick() {
        let (mut wardrobe, regions) = setup(WardrobeConfig::default());
        wardrobe.handle_pointer(PointerEvent::down(Vec2::new(-8.0, 8.0), ms(0)), &regions);
        assert_eq!(wardrobe.tick(ms(200), &regions), None);
        assert_eq!(
            wardrobe.tick(ms(450), &regions),
            Some(Interaction::DragStarted {
                item: ItemId(2),
                origin: DragOrigin::Rod
            })
        );
        assert!(wardrobe.item(ItemId(2)).unwrap().is_dragging());
    }

    #[test]
    fn slow_click_policy_cycle_advances() {
        let (mut wardrobe, regions) =
            setup(WardrobeConfig::default().with_slow_click(SlowClickPolicy::Cycle));
        let rack = Vec2::new(-8.0, 4.0);
        wardrobe.handle_pointer(PointerEvent::down(rack, ms(0)), &regions);
        assert_eq!(
            wardrobe.handle_pointer(PointerEvent::up(rack, ms(300)), &regions),
            Some(Interaction::SlowClick {
                item: ItemId(0),
                policy: SlowClickPolicy::Cycle
            })
        );
        assert_eq!(wardrobe.offered(RodId(0)), Some(ItemId(1)));
    }

    #[test]
    fn slow_click_is_ignored_by_default() {
        let (mut wardrobe, regions) = setup(WardrobeConfig::default());
        let rack = Vec2::new(-8.0, 4.0);
        wardrobe.handle_pointer(PointerEvent::down(rack, ms(0)), &regions);
        wardrobe.handle_pointer(PointerEvent::up(rack, ms(300)), &regions);
        assert_eq!(wardrobe.offered(RodId(0)), Some(ItemId(0)));
    }

    #[test]
    fn new_press_abandons_a_stuck_drag() {
        let (mut wardrobe, regions) = setup(WardrobeConfig::default());
        let home = wardrobe.item(ItemId(0)).unwrap().home();
        wardrobe.handle_pointer(PointerEvent::down(Vec2::new(-8.0, 4.0), ms(0)), &regions);
        wardrobe.handle_pointer(PointerEvent::moved(Vec2::new(0.0, 0.0), ms(20)), &regions);
        // The release was lost; the next press must not leave item 0 dragging.
        wardrobe.handle_pointer(PointerEvent::down(Vec2::new(50.0, 50.0), ms(500)), &regions);
        let tee = wardrobe.item(ItemId(0)).unwrap();
        assert!(tee.is_offered());
        assert_eq!(tee.transform(), home);
        assert_eq!(wardrobe.check_invariants(), Ok(()));
    }

    #[test]
    fn slow_click_snap_back_restores_the_home_transform() {
        let (mut wardrobe, regions) =
            setup(WardrobeConfig::default().with_slow_click(SlowClickPolicy::SnapBack));
        let home = wardrobe.item(ItemId(0)).unwrap().home();
        let nudged = Transform::new(Vec2::new(-7.9, 4.1), home.scale);
        wardrobe.items.move_to(ItemId(0), nudged);

        let rack = Vec2::new(-8.0, 4.0);
        wardrobe.handle_pointer(PointerEvent::down(rack, ms(0)), &regions);
        assert_eq!(
            wardrobe.handle_pointer(PointerEvent::up(rack, ms(300)), &regions),
            Some(Interaction::SlowClick {
                item: ItemId(0),
                policy: SlowClickPolicy::SnapBack
            })
        );
        assert_eq!(wardrobe.item(ItemId(0)).unwrap().transform(), home);
        assert_eq!(wardrobe.offered(RodId(0)), Some(ItemId(0)));
        assert_eq!(wardrobe.check_invariants(), Ok(()));
    }

    #[test]
    fn slow_click_snap_back_keeps_a_placed_item_in_its_zone() {
        let (mut wardrobe, regions) =
            setup(WardrobeConfig::default().with_slow_click(SlowClickPolicy::SnapBack));
        let head = wardrobe.zone_by_name("head").unwrap();
        wardrobe.place(head, ItemId(2)).unwrap();
        let seated = wardrobe.zone(head).unwrap().snap_transform();

        let hat = Vec2::new(4.0, 8.0);
        wardrobe.handle_pointer(PointerEvent::down(hat, ms(0)), &regions);
        assert_eq!(wardrobe.captured(), Some(ItemId(2)));
        assert_eq!(
            wardrobe.handle_pointer(PointerEvent::up(hat, ms(300)), &regions),
            Some(Interaction::SlowClick {
                item: ItemId(2),
                policy: SlowClickPolicy::SnapBack
            })
        );
        let cap = wardrobe.item(ItemId(2)).unwrap();
        assert_eq!(cap.placed_in(), Some(head));
        assert_eq!(cap.transform(), seated);
    }

    #[test]
    fn tapping_a_freshly_placed_item_keeps_its_settle_task() {
        let (mut wardrobe, regions) = setup(WardrobeConfig::default());
        let head = wardrobe.zone_by_name("head").unwrap();
        let (rack, hat) = (Vec2::new(-8.0, 8.0), Vec2::new(4.0, 8.0));
        wardrobe.handle_pointer(PointerEvent::down(rack, ms(0)), &regions);
        wardrobe.handle_pointer(PointerEvent::moved(hat, ms(30)), &regions);
        wardrobe.handle_pointer(PointerEvent::up(hat, ms(60)), &regions);
        assert_eq!(wardrobe.item(ItemId(2)).unwrap().placed_in(), Some(head));
        assert!(wardrobe.has_pending_task(ItemId(2)));

        // Tap inside the settle window: ignored on a worn item.
        wardrobe.handle_pointer(PointerEvent::down(hat, ms(70)), &regions);
        assert!(wardrobe.has_pending_task(ItemId(2)));
        assert_eq!(wardrobe.handle_pointer(PointerEvent::up(hat, ms(90)), &regions), None);

        for frame in 0..10 {
            wardrobe.tick(ms(100 + frame * 16), &regions);
        }
        let cap = wardrobe.item(ItemId(2)).unwrap();
        assert_eq!(cap.placed_in(), Some(head));
        assert!(!cap.hit_testable());
        assert_eq!(wardrobe.pending_tasks(), 0);
        assert_eq!(wardrobe.hit_test(hat), None);
    }
}
