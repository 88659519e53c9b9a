use wardrobe_core::{
    Catalog, Category, DragOrigin, EvictionCause, GestureIntent, GestureRecognizer,
    GestureThresholds, Interaction, ItemId, ItemSpec, PlacementError, PointerEvent, RejectReason,
    RodId, RodSpec, Timestamp, Vec2, Wardrobe, WardrobeConfig, ZoneRegions, ZoneSpec,
};

const HATS: Vec2 = Vec2::new(-8.0, 10.0);
const TOPS: Vec2 = Vec2::new(-8.0, 6.0);
const BOTTOMS: Vec2 = Vec2::new(-8.0, 2.0);
const DRESSES: Vec2 = Vec2::new(-8.0, -2.0);

const HEAD: Vec2 = Vec2::new(4.0, 10.0);
const TORSO: Vec2 = Vec2::new(4.0, 6.0);
const LEGS: Vec2 = Vec2::new(4.0, 2.0);
const NOWHERE: Vec2 = Vec2::new(30.0, 30.0);

fn catalog() -> Catalog {
    Catalog::new()
        .with_rod(
            RodSpec::new("hats")
                .with_item(ItemSpec::new("cap", Category::Hat, HATS))
                .with_item(ItemSpec::new("beret", Category::Hat, HATS))
                .with_item(ItemSpec::new("fedora", Category::Hat, HATS)),
        )
        .with_rod(
            RodSpec::new("tops")
                .with_item(ItemSpec::new("tee", Category::Shirt, TOPS))
                .with_item(ItemSpec::new("polo", Category::Shirt, TOPS).with_scale(1.2)),
        )
        .with_rod(RodSpec::new("bottoms").with_item(ItemSpec::new("jeans", Category::Pants, BOTTOMS)))
        .with_rod(
            RodSpec::new("dresses")
                .with_item(ItemSpec::new("sundress", Category::FullBody, DRESSES)),
        )
        .with_zone(ZoneSpec::new("head", [Category::Hat], HEAD, Vec2::new(2.0, 2.0)))
        .with_zone(
            ZoneSpec::new(
                "torso",
                [Category::Shirt, Category::FullBody],
                TORSO,
                Vec2::new(3.0, 3.0),
            )
            .with_scale(0.9),
        )
        .with_zone(ZoneSpec::new("legs", [Category::Pants], LEGS, Vec2::new(3.0, 3.0)))
}

fn setup() -> (Wardrobe, ZoneRegions) {
    let wardrobe = Wardrobe::from_catalog(&catalog(), WardrobeConfig::default()).unwrap();
    let regions = ZoneRegions::from_zones(wardrobe.zones());
    (wardrobe, regions)
}

fn ms(value: u64) -> Timestamp {
    Timestamp::from_millis(value)
}

fn id(wardrobe: &Wardrobe, name: &str) -> ItemId {
    wardrobe.item_by_name(name).unwrap()
}

/// Press at `from`, drag to `to`, release there.
fn drag(
    wardrobe: &mut Wardrobe,
    regions: &ZoneRegions,
    from: Vec2,
    to: Vec2,
    start: u64,
) -> Option<Interaction> {
    wardrobe.handle_pointer(PointerEvent::down(from, ms(start)), regions);
    wardrobe.handle_pointer(PointerEvent::moved(to, ms(start + 30)), regions);
    let outcome = wardrobe.handle_pointer(PointerEvent::up(to, ms(start + 60)), regions);
    assert_eq!(wardrobe.check_invariants(), Ok(()));
    outcome
}

fn offered_counts_are_sane(wardrobe: &Wardrobe) {
    for rod in wardrobe.rods() {
        let offered: Vec<_> = rod
            .members()
            .iter()
            .filter(|&&item| wardrobe.item(item).unwrap().is_offered())
            .collect();
        assert!(offered.len() <= 1, "{} offers {:?}", rod.name(), offered);
        if let Some(&&item) = offered.first() {
            assert!(!wardrobe.item(item).unwrap().is_placed());
        }
    }
}

#[test]
fn rod_cycles_in_insertion_order_and_wraps() {
    let (mut wardrobe, _) = setup();
    let hats = wardrobe.rod_by_name("hats").unwrap();
    let (cap, beret, fedora) = (id(&wardrobe, "cap"), id(&wardrobe, "beret"), id(&wardrobe, "fedora"));

    // Loading advanced once from the unset cursor.
    let mut order = vec![wardrobe.offered(hats).unwrap()];
    for _ in 0..3 {
        order.push(wardrobe.advance(hats).unwrap().unwrap());
        offered_counts_are_sane(&wardrobe);
    }
    assert_eq!(order, vec![cap, beret, fedora, cap]);
}

#[test]
fn quick_press_yields_exactly_one_tap() {
    let mut recognizer = GestureRecognizer::new(GestureThresholds::default());
    let mut intents = Vec::new();
    recognizer.press(Vec2::ZERO, ms(0));
    intents.extend(recognizer.motion(Vec2::new(0.01, 0.0), ms(40)));
    intents.extend(recognizer.update(ms(80)));
    intents.extend(recognizer.motion(Vec2::new(0.02, 0.01), ms(120)));
    intents.extend(recognizer.release(Vec2::new(0.02, 0.01), ms(200)));
    assert_eq!(intents, vec![GestureIntent::Tap]);
}

#[test]
fn tap_through_pointer_cycles_the_rod() {
    let (mut wardrobe, regions) = setup();
    let hats = wardrobe.rod_by_name("hats").unwrap();
    wardrobe.handle_pointer(PointerEvent::down(HATS, ms(0)), &regions);
    let outcome = wardrobe.handle_pointer(PointerEvent::up(HATS, ms(120)), &regions);
    assert_eq!(
        outcome,
        Some(Interaction::Cycled {
            rod: hats,
            offered: Some(id(&wardrobe, "beret"))
        })
    );
    assert!(!wardrobe.is_visible(id(&wardrobe, "cap")));
}

#[test]
fn place_then_evict_restores_the_home_transform() {
    let (mut wardrobe, regions) = setup();
    let polo = id(&wardrobe, "polo");
    let tee = id(&wardrobe, "tee");
    wardrobe.advance(wardrobe.rod_by_name("tops").unwrap()).unwrap();
    let before = wardrobe.item(polo).unwrap().transform();
    assert_eq!(before.scale, 1.2);

    let placed = drag(&mut wardrobe, &regions, TOPS, TORSO, 0);
    assert!(matches!(placed, Some(Interaction::Placed(ref p)) if p.item == polo));
    let worn = wardrobe.item(polo).unwrap();
    assert!(worn.is_placed());
    assert_eq!(worn.transform().scale, 0.9);

    // The tops rod now offers the tee; wearing it evicts the polo.
    assert_eq!(wardrobe.offered(wardrobe.rod_by_name("tops").unwrap()), Some(tee));
    let swapped = drag(&mut wardrobe, &regions, TOPS, TORSO, 1_000);
    let Some(Interaction::Placed(placement)) = &swapped else {
        panic!("expected placement, got {swapped:?}");
    };
    assert_eq!(placement.previous(), Some(polo));

    let returned = wardrobe.item(polo).unwrap();
    assert!(!returned.is_placed());
    assert_eq!(returned.transform(), before);
    assert_eq!(returned.home(), before);
    offered_counts_are_sane(&wardrobe);
}

#[test]
fn advance_is_idempotent_when_every_member_is_placed() {
    let (mut wardrobe, regions) = setup();
    let bottoms = wardrobe.rod_by_name("bottoms").unwrap();
    drag(&mut wardrobe, &regions, BOTTOMS, LEGS, 0);

    assert_eq!(wardrobe.rod(bottoms).unwrap().cursor(), None);
    assert_eq!(wardrobe.advance(bottoms), Ok(None));
    assert_eq!(wardrobe.advance(bottoms), Ok(None));
    assert_eq!(wardrobe.rod(bottoms).unwrap().cursor(), None);
    assert_eq!(wardrobe.check_invariants(), Ok(()));
}

#[test]
fn full_body_evicts_shirt_and_pants() {
    let (mut wardrobe, regions) = setup();
    let (tee, jeans, sundress) = (
        id(&wardrobe, "tee"),
        id(&wardrobe, "jeans"),
        id(&wardrobe, "sundress"),
    );
    drag(&mut wardrobe, &regions, TOPS, TORSO, 0);
    drag(&mut wardrobe, &regions, BOTTOMS, LEGS, 1_000);
    assert_eq!(wardrobe.worn().len(), 2);

    let outcome = drag(&mut wardrobe, &regions, DRESSES, TORSO, 2_000);
    let Some(Interaction::Placed(placement)) = &outcome else {
        panic!("expected placement, got {outcome:?}");
    };
    let causes: Vec<_> = placement
        .evicted
        .iter()
        .map(|eviction| (eviction.item, eviction.cause))
        .collect();
    assert_eq!(
        causes,
        vec![(jeans, EvictionCause::Conflict), (tee, EvictionCause::Swap)]
    );

    for item in [tee, jeans] {
        let it = wardrobe.item(item).unwrap();
        assert!(!it.is_placed());
        assert!(it.is_offered());
        assert_eq!(it.transform(), it.home());
    }
    let torso = wardrobe.zone_by_name("torso").unwrap();
    assert_eq!(wardrobe.worn(), vec![(torso, sundress)]);
}

#[test]
fn wearing_pants_evicts_a_full_body_garment() {
    let (mut wardrobe, regions) = setup();
    let sundress = id(&wardrobe, "sundress");
    drag(&mut wardrobe, &regions, DRESSES, TORSO, 0);
    drag(&mut wardrobe, &regions, BOTTOMS, LEGS, 1_000);
    assert!(!wardrobe.item(sundress).unwrap().is_placed());
    assert!(wardrobe.item(sundress).unwrap().is_offered());
}

#[test]
fn shirt_dropped_on_hat_zone_returns_home() {
    let (mut wardrobe, regions) = setup();
    let (cap, tee) = (id(&wardrobe, "cap"), id(&wardrobe, "tee"));
    let head = wardrobe.zone_by_name("head").unwrap();
    wardrobe.place(head, cap).unwrap();
    let home = wardrobe.item(tee).unwrap().home();

    let outcome = drag(&mut wardrobe, &regions, TOPS, HEAD, 0);
    assert_eq!(
        outcome,
        Some(Interaction::Rejected {
            item: tee,
            zone: head,
            reason: RejectReason::Incompatible
        })
    );
    let it = wardrobe.item(tee).unwrap();
    assert_eq!(it.transform(), home);
    assert!(it.is_offered());
    assert!(it.hit_testable());
    assert_eq!(it.hover(), None);
    assert_eq!(wardrobe.zone(head).unwrap().occupant(), Some(cap));
}

#[test]
fn drop_over_empty_space_returns_home() {
    let (mut wardrobe, regions) = setup();
    let tee = id(&wardrobe, "tee");
    let home = wardrobe.item(tee).unwrap().home();
    assert_eq!(
        drag(&mut wardrobe, &regions, TOPS, NOWHERE, 0),
        Some(Interaction::Returned { item: tee })
    );
    assert_eq!(wardrobe.item(tee).unwrap().transform(), home);
    assert!(wardrobe.item(tee).unwrap().is_offered());
}

#[test]
fn swap_returns_previous_occupant_as_newly_offered() {
    let (mut wardrobe, regions) = setup();
    let hats = wardrobe.rod_by_name("hats").unwrap();
    let head = wardrobe.zone_by_name("head").unwrap();
    let (cap, beret) = (id(&wardrobe, "cap"), id(&wardrobe, "beret"));

    drag(&mut wardrobe, &regions, HATS, HEAD, 0);
    assert_eq!(wardrobe.offered(hats), Some(beret));

    drag(&mut wardrobe, &regions, HATS, HEAD, 1_000);
    assert_eq!(wardrobe.zone(head).unwrap().occupant(), Some(beret));
    assert_eq!(wardrobe.offered(hats), Some(cap));
    assert!(!wardrobe.item(cap).unwrap().is_placed());
    offered_counts_are_sane(&wardrobe);
}

#[test]
fn placed_item_stops_hit_testing_after_the_settle_delay() {
    let (mut wardrobe, regions) = setup();
    let cap = id(&wardrobe, "cap");
    drag(&mut wardrobe, &regions, HATS, HEAD, 0);
    assert!(wardrobe.item(cap).unwrap().hit_testable());
    assert!(wardrobe.has_pending_task(cap));

    wardrobe.tick(ms(100), &regions);
    assert!(!wardrobe.item(cap).unwrap().hit_testable());
    assert_eq!(wardrobe.pending_tasks(), 0);
    assert_eq!(wardrobe.hit_test(HEAD), None);
}

#[test]
fn dragging_out_before_settle_cancels_the_deferred_task() {
    let (mut wardrobe, regions) = setup();
    let (tee, polo) = (id(&wardrobe, "tee"), id(&wardrobe, "polo"));
    let torso = wardrobe.zone_by_name("torso").unwrap();
    drag(&mut wardrobe, &regions, TOPS, TORSO, 0);
    assert!(wardrobe.has_pending_task(tee));

    // A press alone is not a move; the task survives it.
    wardrobe.handle_pointer(PointerEvent::down(TORSO, ms(100)), &regions);
    assert_eq!(wardrobe.captured(), Some(tee));
    assert!(wardrobe.has_pending_task(tee));

    // Pulling it out vacates the zone at once.
    let started = wardrobe.handle_pointer(PointerEvent::moved(NOWHERE, ms(130)), &regions);
    assert_eq!(
        started,
        Some(Interaction::DragStarted {
            item: tee,
            origin: DragOrigin::Zone(torso)
        })
    );
    assert!(!wardrobe.has_pending_task(tee));
    wardrobe.tick(ms(140), &regions);
    assert!(wardrobe.item(tee).unwrap().hit_testable());
    assert_eq!(wardrobe.zone(torso).unwrap().occupant(), None);
    assert_eq!(wardrobe.check_invariants(), Ok(()));

    let outcome = wardrobe.handle_pointer(PointerEvent::up(NOWHERE, ms(160)), &regions);
    assert_eq!(outcome, Some(Interaction::Returned { item: tee }));
    assert!(wardrobe.item(tee).unwrap().is_offered());
    assert!(!wardrobe.item(polo).unwrap().is_offered());
    assert_eq!(wardrobe.check_invariants(), Ok(()));
}

#[test]
fn worn_item_settles_even_when_tapped_inside_the_settle_window() {
    let (mut wardrobe, regions) = setup();
    let cap = id(&wardrobe, "cap");
    drag(&mut wardrobe, &regions, HATS, HEAD, 0);

    wardrobe.handle_pointer(PointerEvent::down(HEAD, ms(70)), &regions);
    assert_eq!(wardrobe.handle_pointer(PointerEvent::up(HEAD, ms(90)), &regions), None);
    for frame in 0..10 {
        wardrobe.tick(ms(100 + frame * 16), &regions);
    }

    assert!(wardrobe.item(cap).unwrap().is_placed());
    assert!(!wardrobe.item(cap).unwrap().hit_testable());
    assert_eq!(wardrobe.pending_tasks(), 0);
}

#[test]
fn mark_returned_brings_a_dragged_item_home() {
    let (mut wardrobe, regions) = setup();
    let (tee, polo) = (id(&wardrobe, "tee"), id(&wardrobe, "polo"));
    wardrobe.handle_pointer(PointerEvent::down(TOPS, ms(0)), &regions);
    wardrobe.handle_pointer(PointerEvent::moved(TORSO, ms(30)), &regions);
    assert!(wardrobe.item(tee).unwrap().is_dragging());

    assert_eq!(wardrobe.mark_returned(tee), Ok(()));
    let it = wardrobe.item(tee).unwrap();
    assert!(it.is_offered());
    assert!(it.hit_testable());
    assert_eq!(it.transform(), it.home());
    assert_eq!(it.hover(), None);
    assert_eq!(wardrobe.captured(), None);
    assert!(!wardrobe.item(polo).unwrap().is_offered());
    assert_eq!(wardrobe.check_invariants(), Ok(()));

    // The stale release finds nothing captured.
    assert_eq!(wardrobe.handle_pointer(PointerEvent::up(TORSO, ms(60)), &regions), None);
    assert!(wardrobe.item(tee).unwrap().is_offered());
}

#[test]
fn mark_returned_empties_the_zone_of_a_worn_item() {
    let (mut wardrobe, regions) = setup();
    let (tee, polo) = (id(&wardrobe, "tee"), id(&wardrobe, "polo"));
    let torso = wardrobe.zone_by_name("torso").unwrap();
    drag(&mut wardrobe, &regions, TOPS, TORSO, 0);
    assert_eq!(wardrobe.offered(wardrobe.rod_by_name("tops").unwrap()), Some(polo));

    assert_eq!(wardrobe.mark_returned(tee), Ok(()));
    assert_eq!(wardrobe.zone(torso).unwrap().occupant(), None);
    assert!(!wardrobe.has_pending_task(tee));
    let it = wardrobe.item(tee).unwrap();
    assert!(it.is_offered());
    assert_eq!(it.transform(), it.home());
    assert!(!wardrobe.item(polo).unwrap().is_offered());
    assert_eq!(wardrobe.check_invariants(), Ok(()));
}

#[test]
fn mark_returned_rejects_unknown_items() {
    let (mut wardrobe, _) = setup();
    assert_eq!(
        wardrobe.mark_returned(ItemId(99)),
        Err(PlacementError::UnknownItem(ItemId(99)))
    );
}

#[test]
fn resolving_conflicts_on_a_shared_rod_keeps_it_usable() {
    let catalog = Catalog::new()
        .with_rod(
            RodSpec::new("tops")
                .with_item(ItemSpec::new("tee", Category::Shirt, TOPS))
                .with_item(ItemSpec::new("dress", Category::FullBody, TOPS)),
        )
        .with_zone(ZoneSpec::new(
            "torso",
            [Category::Shirt, Category::FullBody],
            TORSO,
            Vec2::new(3.0, 3.0),
        ));
    let mut wardrobe = Wardrobe::from_catalog(&catalog, WardrobeConfig::default()).unwrap();
    let regions = ZoneRegions::from_zones(wardrobe.zones());
    let tops = wardrobe.rod_by_name("tops").unwrap();
    let (tee, dress) = (id(&wardrobe, "tee"), id(&wardrobe, "dress"));
    assert_eq!(wardrobe.offered(tops), Some(tee));

    assert_eq!(wardrobe.resolve_conflicts(tops, Category::FullBody), Ok(1));
    assert!(!wardrobe.item(tee).unwrap().is_offered());
    assert_eq!(wardrobe.offered(tops), Some(dress));
    assert!(wardrobe.item(dress).unwrap().is_interactive());
    assert_eq!(wardrobe.check_invariants(), Ok(()));
    assert_eq!(wardrobe.hit_test(TOPS), Some(dress));

    drag(&mut wardrobe, &regions, TOPS, TORSO, 0);
    assert_eq!(wardrobe.offered(tops), Some(tee));
    // No hat hangs here; the rod keeps cycling instead of going blank.
    wardrobe.resolve_conflicts(tops, Category::Hat).unwrap();
    assert_eq!(wardrobe.offered(tops), Some(tee));
    assert!(wardrobe.item(tee).unwrap().is_interactive());
    assert_eq!(wardrobe.check_invariants(), Ok(()));
    assert_eq!(
        wardrobe.resolve_conflicts(RodId(7), Category::Hat),
        Err(PlacementError::UnknownRod(RodId(7)))
    );
}

#[test]
fn clearing_a_zone_returns_the_occupant() {
    let (mut wardrobe, regions) = setup();
    let jeans = id(&wardrobe, "jeans");
    let legs = wardrobe.zone_by_name("legs").unwrap();
    drag(&mut wardrobe, &regions, BOTTOMS, LEGS, 0);
    wardrobe.tick(ms(100), &regions);
    assert!(!wardrobe.item(jeans).unwrap().hit_testable());

    assert_eq!(wardrobe.clear(legs), Ok(Some(jeans)));
    let it = wardrobe.item(jeans).unwrap();
    assert!(it.is_offered());
    assert!(it.hit_testable());
    assert_eq!(it.transform(), it.home());
    assert_eq!(wardrobe.check_invariants(), Ok(()));
}

#[test]
fn dormant_accessories_can_stay_visible() {
    let catalog = catalog().with_dormant_visible([Category::Hat]);
    let wardrobe = Wardrobe::from_catalog(&catalog, WardrobeConfig::default()).unwrap();
    let beret = wardrobe.item_by_name("beret").unwrap();
    let polo = wardrobe.item_by_name("polo").unwrap();
    assert!(!wardrobe.item(beret).unwrap().is_interactive());
    assert!(wardrobe.is_visible(beret));
    assert!(!wardrobe.is_visible(polo));
}

#[test]
fn invariants_hold_through_a_busy_session() {
    let (mut wardrobe, regions) = setup();
    let steps = [
        (HATS, HEAD),
        (TOPS, TORSO),
        (HATS, HEAD),
        (BOTTOMS, LEGS),
        (DRESSES, TORSO),
        (TOPS, LEGS),
        (TOPS, TORSO),
        (HATS, NOWHERE),
        (HATS, HEAD),
    ];
    for (index, (from, to)) in steps.into_iter().enumerate() {
        drag(&mut wardrobe, &regions, from, to, index as u64 * 1_000);
        wardrobe.tick(ms(index as u64 * 1_000 + 500), &regions);
        offered_counts_are_sane(&wardrobe);
        assert_eq!(wardrobe.check_invariants(), Ok(()));
        assert_eq!(wardrobe.repair(), 0);
        for item in wardrobe.items() {
            assert!(
                item.is_interactive() || wardrobe.rod(item.home_slot()).unwrap().offered().is_some()
                    || !wardrobe.is_visible(item.id()),
                "{} is stranded",
                item.name()
            );
        }
    }
}
