//! End-to-end drag lifecycles through the coordinator.

use ferrodrop::{
    CancelReason, DragConfig, DragCoordinator, DragError, DragEvent, DragPhase, DragStart, DropOutcome,
    DropRejection, DropZoneDescriptor, DuplicateZonePolicy, ItemRef, MeasureTable, Orientation, ReorderOp,
    SessionChange, Vec2,
};
use ferrodrop_test_utils::RecordingListener;
use ferrodrop_test_utils::fixtures::{add_vertical_stack, item_ids};

fn card(id: &str) -> ItemRef {
    ItemRef::new(id, "card")
}

fn start(id: &str) -> DragStart {
    DragStart::new(card(id), Vec2::ZERO)
}

/// Zones `A` (cards) and `B` (text), no geometry.
fn two_zones() -> (DragCoordinator, RecordingListener) {
    ferrodrop::logging::init_for_tests();
    let recorder = RecordingListener::new();
    let mut dnd = DragCoordinator::headless();
    dnd.register_zone(DropZoneDescriptor::new("A").accepts("card")).unwrap();
    dnd.register_zone(DropZoneDescriptor::new("B").accepts("text")).unwrap();
    dnd.add_listener(recorder.clone());
    (dnd, recorder)
}

#[test]
fn test_drop_on_rejecting_zone_cancels() {
    let (mut dnd, recorder) = two_zones();

    dnd.begin_drag(start("x")).unwrap();
    let outcome = dnd.end_drag(Some("B")).unwrap();

    assert_eq!(
        outcome,
        DropOutcome::Cancelled(CancelReason::Rejected {
            zone: "B".into(),
            reason: DropRejection::TypeNotAccepted,
        })
    );
    assert_eq!(recorder.count("drop"), 0);
    assert_eq!(recorder.names(), vec!["drag_start", "drag_end"]);
    assert_eq!(dnd.phase(), DragPhase::Idle);
}

#[test]
fn test_drop_on_accepting_zone_fires_once() {
    let (mut dnd, recorder) = two_zones();

    dnd.begin_drag(start("x")).unwrap();
    let outcome = dnd.end_drag(Some("A")).unwrap();

    assert!(outcome.is_dropped());
    assert_eq!(outcome.zone().map(|z| z.as_str()), Some("A"));
    assert_eq!(recorder.names(), vec!["drag_start", "drop", "drag_end"]);

    let events = recorder.events();
    match &events[1] {
        DragEvent::Drop { item, zone, .. } => {
            assert_eq!(item.id, "x");
            assert_eq!(zone, "A");
        }
        other => panic!("expected drop, got {other:?}"),
    }
}

#[test]
fn test_release_over_nothing_or_unknown_zone() {
    let (mut dnd, recorder) = two_zones();

    dnd.begin_drag(start("x")).unwrap();
    assert_eq!(
        dnd.end_drag(None).unwrap(),
        DropOutcome::Cancelled(CancelReason::NoTarget)
    );

    dnd.begin_drag(start("x")).unwrap();
    let outcome = dnd.end_drag(Some("missing")).unwrap();
    assert!(matches!(
        outcome,
        DropOutcome::Cancelled(CancelReason::Rejected {
            reason: DropRejection::UnknownZone,
            ..
        })
    ));

    assert_eq!(recorder.count("drag_start"), 2);
    assert_eq!(recorder.count("drag_end"), 2);
    assert_eq!(recorder.count("drop"), 0);
}

#[test]
fn test_second_begin_is_rejected() {
    let (mut dnd, recorder) = two_zones();

    dnd.begin_drag(start("x")).unwrap();
    let err = dnd.begin_drag(start("y")).unwrap_err();

    assert_eq!(
        err,
        DragError::InvalidState {
            operation: "begin drag",
            phase: DragPhase::Dragging,
        }
    );
    assert_eq!(recorder.count("drag_start"), 1);
    assert_eq!(dnd.session().map(|s| s.item.id.as_str()), Some("x"));
}

#[test]
fn test_out_of_order_calls_change_nothing() {
    let (mut dnd, recorder) = two_zones();

    assert!(matches!(dnd.end_drag(Some("A")), Err(DragError::InvalidState { .. })));
    assert!(matches!(dnd.cancel(), Err(DragError::InvalidState { .. })));
    assert!(matches!(
        dnd.update_pointer(Vec2::new(1.0, 1.0)),
        Err(DragError::InvalidState { .. })
    ));

    assert!(recorder.is_empty());
    assert_eq!(dnd.phase(), DragPhase::Idle);
}

#[test]
fn test_disabled_and_full_zones_reject() {
    let (mut dnd, _recorder) = two_zones();
    dnd.register_zone(DropZoneDescriptor::new("off").disabled(true)).unwrap();
    dnd.register_zone(DropZoneDescriptor::new("full").capacity(1).item_count(1))
        .unwrap();

    dnd.begin_drag(start("x")).unwrap();
    assert_eq!(
        dnd.end_drag(Some("off")).unwrap(),
        DropOutcome::Cancelled(CancelReason::Rejected {
            zone: "off".into(),
            reason: DropRejection::Disabled,
        })
    );

    dnd.begin_drag(start("x")).unwrap();
    assert_eq!(
        dnd.end_drag(Some("full")).unwrap(),
        DropOutcome::Cancelled(CancelReason::Rejected {
            zone: "full".into(),
            reason: DropRejection::AtCapacity,
        })
    );

    // Rearranging inside a full zone is fine.
    dnd.begin_drag(start("x").from_zone("full", 0)).unwrap();
    assert!(dnd.end_drag(Some("full")).unwrap().is_dropped());
}

#[test]
fn test_predicate_rejects() {
    let (mut dnd, _recorder) = two_zones();
    dnd.register_zone(DropZoneDescriptor::new("odd").accept_if(|item| item.id.as_str().ends_with('1')))
        .unwrap();

    dnd.begin_drag(start("x2")).unwrap();
    assert!(matches!(
        dnd.end_drag(Some("odd")).unwrap(),
        DropOutcome::Cancelled(CancelReason::Rejected {
            reason: DropRejection::PredicateRejected,
            ..
        })
    ));

    dnd.begin_drag(start("x1")).unwrap();
    assert!(dnd.end_drag(Some("odd")).unwrap().is_dropped());
}

#[test]
fn test_register_unregister_restores_registry() {
    let (mut dnd, _recorder) = two_zones();
    let before = dnd.snapshot().drop_zones;

    dnd.register_zone(DropZoneDescriptor::new("C")).unwrap();
    assert!(dnd.registry().contains("C"));
    assert!(dnd.unregister_zone("C").is_some());

    assert_eq!(dnd.snapshot().drop_zones, before);
    assert!(dnd.unregister_zone("C").is_none());
}

#[test]
fn test_duplicate_zone_policies() {
    let (mut dnd, _recorder) = two_zones();
    assert_eq!(
        dnd.register_zone(DropZoneDescriptor::new("A").accepts("text")),
        Err(DragError::DuplicateZone("A".into()))
    );
    assert!(dnd.registry().lookup("A").unwrap().accepted_types.contains("card"));

    let config = DragConfig::new().duplicate_policy(DuplicateZonePolicy::Replace);
    let mut dnd = DragCoordinator::with_config(config, ferrodrop::NoMeasure);
    dnd.register_zone(DropZoneDescriptor::new("A").accepts("card")).unwrap();
    dnd.register_zone(DropZoneDescriptor::new("A").accepts("text")).unwrap();
    let zone = dnd.registry().lookup("A").unwrap();
    assert!(zone.accepted_types.contains("text"));
    assert!(!zone.accepted_types.contains("card"));
}

#[test]
fn test_cancel_emits_drag_end() {
    let (mut dnd, recorder) = two_zones();

    dnd.begin_drag(start("x")).unwrap();
    assert_eq!(
        dnd.cancel().unwrap(),
        DropOutcome::Cancelled(CancelReason::Explicit)
    );
    assert_eq!(recorder.names(), vec!["drag_start", "drag_end"]);
    assert!(!dnd.is_dragging());
}

#[test]
fn test_escape_cancels_unless_disabled() {
    let (mut dnd, recorder) = two_zones();
    assert!(dnd.on_escape().is_none());

    dnd.begin_drag(start("x")).unwrap();
    assert_eq!(
        dnd.on_escape(),
        Some(DropOutcome::Cancelled(CancelReason::Escape))
    );
    assert_eq!(recorder.outcomes(), vec![DropOutcome::Cancelled(CancelReason::Escape)]);

    let mut dnd = DragCoordinator::with_config(DragConfig::new().cancel_on_escape(false), ferrodrop::NoMeasure);
    dnd.begin_drag(start("x")).unwrap();
    assert!(dnd.on_escape().is_none());
    assert!(dnd.is_dragging());
}

#[test]
fn test_unmounting_dragged_item_cancels() {
    let (mut dnd, recorder) = two_zones();
    dnd.begin_drag(start("x")).unwrap();

    assert!(dnd.item_unmounted("other").is_none());
    assert!(dnd.is_dragging());

    assert_eq!(
        dnd.item_unmounted("x"),
        Some(DropOutcome::Cancelled(CancelReason::SourceUnmounted))
    );
    assert_eq!(recorder.names(), vec!["drag_start", "drag_end"]);
}

#[test]
fn test_activation_threshold() {
    let recorder = RecordingListener::new();
    let mut dnd = DragCoordinator::with_config(DragConfig::new().activation_distance(5.0), ferrodrop::NoMeasure);
    dnd.register_zone(DropZoneDescriptor::new("A")).unwrap();
    dnd.add_listener(recorder.clone());

    // Released early: treated as a click.
    dnd.begin_drag(start("x")).unwrap();
    assert_eq!(dnd.phase(), DragPhase::Pending);
    assert!(dnd.preview(|_, _| ()).is_none());
    assert_eq!(
        dnd.end_drag(Some("A")).unwrap(),
        DropOutcome::Cancelled(CancelReason::NotActivated)
    );
    assert!(recorder.is_empty());

    dnd.begin_drag(start("x")).unwrap();
    let change = dnd.update_pointer(Vec2::new(3.0, 0.0)).unwrap();
    assert_eq!(change, SessionChange::POINTER);
    assert_eq!(dnd.phase(), DragPhase::Pending);

    let change = dnd.update_pointer(Vec2::new(6.0, 0.0)).unwrap();
    assert!(change.contains(SessionChange::ACTIVATED));
    assert_eq!(dnd.phase(), DragPhase::Dragging);
    assert_eq!(recorder.names(), vec!["drag_start"]);

    assert!(dnd.end_drag(Some("A")).unwrap().is_dropped());
    assert_eq!(recorder.names(), vec!["drag_start", "drop", "drag_end"]);
}

#[test]
fn test_drop_handler_can_start_a_new_drag() {
    let (mut dnd, recorder) = two_zones();
    dnd.add_listener(|event: &DragEvent, commands: &mut ferrodrop::DragCommands| {
        if let DragEvent::Drop { item, .. } = event
            && item.id == "x"
        {
            commands.begin_drag(DragStart::new(card("y"), Vec2::ZERO));
        }
    });

    dnd.begin_drag(start("x")).unwrap();
    assert!(dnd.end_drag(Some("A")).unwrap().is_dropped());

    assert!(dnd.take_deferred_errors().is_empty());
    assert_eq!(dnd.session().map(|s| s.item.id.as_str()), Some("y"));
    assert_eq!(
        recorder.names(),
        vec!["drag_start", "drop", "drag_end", "drag_start"]
    );
}

#[test]
fn test_listener_commands_are_bounded() {
    let recorder = RecordingListener::new();
    let mut dnd = DragCoordinator::with_config(DragConfig::new().max_command_rounds(8), ferrodrop::NoMeasure);
    dnd.add_listener(recorder.clone());
    // Cancels every start and restarts every end, forever.
    dnd.add_listener(|event: &DragEvent, commands: &mut ferrodrop::DragCommands| match event {
        DragEvent::DragStart { .. } => commands.cancel(),
        DragEvent::DragEnd { .. } => commands.begin_drag(DragStart::new(card("x"), Vec2::ZERO)),
        _ => {}
    });

    dnd.begin_drag(start("x")).unwrap();

    assert_eq!(recorder.count("drag_start"), 5);
    assert_eq!(recorder.count("drag_end"), 4);
    assert!(dnd.is_dragging());
}

#[test]
fn test_failed_listener_command_is_reported() {
    let (mut dnd, _recorder) = two_zones();
    dnd.add_listener(|event: &DragEvent, commands: &mut ferrodrop::DragCommands| {
        if let DragEvent::DragStart { .. } = event {
            commands.begin_drag(DragStart::new(card("again"), Vec2::ZERO));
        }
    });

    dnd.begin_drag(start("x")).unwrap();

    let errors = dnd.take_deferred_errors();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], DragError::InvalidState { .. }));
    assert_eq!(dnd.session().map(|s| s.item.id.as_str()), Some("x"));
}

#[test]
fn test_teardown_cancels_and_clears() {
    let (mut dnd, recorder) = two_zones();
    dnd.begin_drag(start("x")).unwrap();

    let mut removed = dnd.teardown();
    removed.sort();

    let expected: Vec<ferrodrop::ZoneId> = vec!["A".into(), "B".into()];
    assert_eq!(removed, expected);
    assert!(dnd.registry().is_empty());
    assert_eq!(recorder.outcomes(), vec![DropOutcome::Cancelled(CancelReason::Explicit)]);
}

#[test]
fn test_snapshot_reflects_session() {
    let (mut dnd, _recorder) = two_zones();
    let idle = dnd.snapshot();
    assert!(!idle.is_dragging);
    assert!(idle.dragged_item.is_none());
    let ids: Vec<&str> = idle.drop_zones.iter().map(|z| z.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert_eq!(idle.zone("A").unwrap().accepted_types, vec!["card".to_string()]);

    dnd.begin_drag(start("x")).unwrap();
    dnd.update_pointer(Vec2::new(4.0, 2.0)).unwrap();
    let active = dnd.snapshot();
    assert!(active.is_dragging);
    assert_eq!(active.phase, DragPhase::Dragging);
    assert_eq!(active.dragged_item.map(|i| i.id), Some("x".into()));
    assert_eq!(active.pointer, Some(Vec2::new(4.0, 2.0)));
}

#[test]
fn test_preview_and_render_item() {
    let (mut dnd, _recorder) = two_zones();
    let grab = DragStart::new(card("x"), Vec2::new(20.0, 20.0)).origin_offset(Vec2::new(5.0, 5.0));
    dnd.begin_drag(grab).unwrap();
    dnd.update_pointer(Vec2::new(30.0, 40.0)).unwrap();

    let preview = dnd.preview(|item, dragging| (item.id.clone(), dragging)).unwrap();
    assert_eq!(preview.position, Vec2::new(25.0, 35.0));
    assert_eq!(preview.content, ("x".into(), true));

    assert!(dnd.render_item(&card("x"), |_, dragging| dragging));
    assert!(!dnd.render_item(&card("y"), |_, dragging| dragging));
}

/// Two vertical lists side by side: `todo` at x = 0 and `done` at x = 200,
/// rows 20px tall.
fn board() -> (DragCoordinator<MeasureTable>, RecordingListener) {
    let todo = item_ids("t", 4);
    let done = item_ids("d", 2);
    let mut table = MeasureTable::new();
    add_vertical_stack(&mut table, "todo", &todo, 0.0, 0.0, 100.0, 20.0);
    add_vertical_stack(&mut table, "done", &done, 200.0, 0.0, 100.0, 20.0);

    let recorder = RecordingListener::new();
    let mut dnd = DragCoordinator::new(table);
    dnd.register_zone(DropZoneDescriptor::new("todo").accepts("card").list(Orientation::Vertical, todo))
        .unwrap();
    dnd.register_zone(DropZoneDescriptor::new("done").accepts("card").list(Orientation::Vertical, done))
        .unwrap();
    dnd.add_listener(recorder.clone());
    (dnd, recorder)
}

#[test]
fn test_same_list_release_produces_list_move() {
    let (mut dnd, _recorder) = board();
    dnd.begin_drag(DragStart::new(card("t2"), Vec2::new(50.0, 50.0)).from_zone("todo", 2))
        .unwrap();
    assert_eq!(dnd.hover().insertion_index, Some(2));

    dnd.update_pointer(Vec2::new(50.0, 25.0)).unwrap();
    let outcome = dnd.release().unwrap();

    let op = outcome.reorder().cloned().unwrap();
    assert_eq!(op, ReorderOp::List { from: 2, to: 1 });
    let reordered = op.apply_list(&["t0", "t1", "t2", "t3"]).unwrap();
    assert_eq!(reordered, vec!["t0", "t2", "t1", "t3"]);
}

#[test]
fn test_cross_list_release_produces_transfer() {
    let (mut dnd, recorder) = board();
    dnd.begin_drag(DragStart::new(card("t0"), Vec2::new(50.0, 10.0)).from_zone("todo", 0))
        .unwrap();
    dnd.update_pointer(Vec2::new(250.0, 25.0)).unwrap();

    assert!(dnd.hover().is_over("done"));
    assert!(dnd.hover().accepts);
    assert_eq!(dnd.hover().insertion_index, Some(1));

    let outcome = dnd.release().unwrap();
    let op = outcome.reorder().cloned().unwrap();
    assert_eq!(
        op,
        ReorderOp::Transfer {
            from_zone: "todo".into(),
            from: 0,
            to_zone: "done".into(),
            to: 1,
        }
    );
    let (todo, done) = op.apply_transfer(&["t0", "t1"], &["d0", "d1"]).unwrap();
    assert_eq!(todo, vec!["t1"]);
    assert_eq!(done, vec!["d0", "t0", "d1"]);
    assert_eq!(recorder.names().last(), Some(&"drag_end"));
}

#[test]
fn test_release_between_zones_is_no_target() {
    let (mut dnd, _recorder) = board();
    dnd.begin_drag(DragStart::new(card("t0"), Vec2::new(50.0, 10.0)).from_zone("todo", 0))
        .unwrap();
    dnd.update_pointer(Vec2::new(150.0, 10.0)).unwrap();

    assert!(dnd.hover().over_zone.is_none());
    assert_eq!(
        dnd.release().unwrap(),
        DropOutcome::Cancelled(CancelReason::NoTarget)
    );
}

#[test]
fn test_unregistering_hovered_zone_clears_hover() {
    let (mut dnd, recorder) = board();
    dnd.begin_drag(DragStart::new(card("t0"), Vec2::new(50.0, 10.0)).from_zone("todo", 0))
        .unwrap();
    dnd.update_pointer(Vec2::new(250.0, 10.0)).unwrap();
    assert!(dnd.hover().is_over("done"));
    let hover_events = recorder.count("hover_changed");

    dnd.unregister_zone("done");

    assert!(dnd.hover().over_zone.is_none());
    assert_eq!(recorder.count("hover_changed"), hover_events + 1);
}
