//! End-to-end tests against the public API.

mod common;

use common::{board_with_days, day, ids, timed};
use itinerary_core::{
    display::Itinerary,
    operations::{apply_command, replay, Command, ReplayMode, ReplayStep},
    params::{InsertActivity, MoveActivity, ScheduleActivity, UnscheduleActivity},
    BoardConfig, Event, ItineraryError, Location,
};

#[test]
fn test_sample_puzzle_session() {
    let mut board = BoardConfig::sample().build().expect("Sample should build");

    // Beach (240) + City Tour (180) + Museum (120) + Lunch (90) = 630 of 720
    for id in ["act-4", "act-2", "act-1", "act-3"] {
        let outcome = board
            .schedule(&ScheduleActivity {
                activity_id: id.into(),
                bucket_id: day(1),
                index: None,
            })
            .expect("Activity should fit");
        assert!(outcome.events.is_empty());
    }
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 630);

    // Dinner (120) would need 750
    let err = board
        .schedule(&ScheduleActivity {
            activity_id: "act-6".into(),
            bucket_id: day(1),
            index: None,
        })
        .expect_err("Dinner should not fit");
    assert!(matches!(
        err,
        ItineraryError::CapacityExceeded {
            requested: 120,
            remaining: 90,
            ..
        }
    ));
    assert_eq!(
        board.locate(&"act-6".into()),
        Some(Location::Pool { index: 1 })
    );

    // Swapping Lunch for Dinner crosses the 90% line (648 minutes)
    board
        .unschedule(&UnscheduleActivity {
            bucket_id: day(1),
            activity_id: "act-3".into(),
            index: None,
        })
        .unwrap();
    let outcome = board
        .schedule(&ScheduleActivity {
            activity_id: "act-6".into(),
            bucket_id: day(1),
            index: None,
        })
        .unwrap();
    assert_eq!(
        outcome.events,
        vec![Event::BucketCompleted { bucket_id: day(1) }]
    );
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 660);
    board.check_invariants().unwrap();

    let rendered = Itinerary(&board).to_string();
    assert!(rendered.contains("1 of 4 days complete"));
    assert!(rendered.contains("(91% Filled)"));
}

#[test]
fn test_move_rejected_when_destination_lacks_time() {
    let mut board = board_with_days(&[720, 720]);
    let tour = board
        .add_activity(&InsertActivity {
            bucket_id: day(1),
            activity: timed("Tour", 120),
            index: None,
        })
        .unwrap()
        .value;
    board
        .add_activity(&InsertActivity {
            bucket_id: day(1),
            activity: timed("Free time", 480),
            index: None,
        })
        .unwrap();
    board
        .add_activity(&InsertActivity {
            bucket_id: day(2),
            activity: timed("Road trip", 700),
            index: None,
        })
        .unwrap();

    let before = board.clone();
    let result = board.move_activity(&MoveActivity {
        source: day(1),
        destination: day(2),
        activity_id: tour.id,
        index: Some(0),
    });

    assert!(matches!(
        result,
        Err(ItineraryError::CapacityExceeded {
            requested: 120,
            remaining: 20,
            ..
        })
    ));
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 600);
    assert_eq!(ids(&board, &day(1)), ids(&before, &day(1)));
    assert_eq!(ids(&board, &day(2)), ids(&before, &day(2)));
}

#[test]
fn test_replay_script_from_json() {
    let mut board = BoardConfig::sample().build().unwrap();
    let script: Vec<Command> = serde_json::from_str(
        r#"[
            { "op": "schedule", "activity_id": "act-4", "bucket_id": "day-2" },
            { "op": "insert", "bucket_id": "day-2", "label": "Sunset cruise",
              "category": "sightseeing", "duration_minutes": 200, "time": "18:30",
              "location": "Harbour" },
            { "op": "insert", "bucket_id": "day-2", "label": "Late show",
              "duration_minutes": 300 },
            { "op": "move", "source": "day-2", "destination": "day-3",
              "activity_id": "act-4" },
            { "op": "reorder", "bucket_id": "day-2", "from": 0, "to": 5 }
        ]"#,
    )
    .expect("Script should parse");

    let steps = replay(&mut board, &script, ReplayMode::Continue);
    assert_eq!(steps.len(), 5);
    assert!(steps[0].is_applied());
    assert!(steps[1].is_applied());
    match &steps[2] {
        ReplayStep::Rejected { event, .. } => assert_eq!(
            event,
            &Some(Event::CapacityExceededAttempt {
                bucket_id: day(2),
                requested: 300,
                remaining: 280,
            })
        ),
        other => panic!("expected a capacity rejection, got {other:?}"),
    }
    assert!(steps[3].is_applied());
    assert!(matches!(
        &steps[4],
        ReplayStep::Rejected { event: None, .. }
    ));

    let cruise = &board.bucket(&day(2)).unwrap().items()[0];
    assert_eq!(cruise.label, "Sunset cruise");
    assert_eq!(cruise.location.as_deref(), Some("Harbour"));
    // Generated IDs continue after the sample's act-1..act-6
    assert_eq!(cruise.id.as_str(), "act-7");
    assert_eq!(ids(&board, &day(3)), vec!["act-4"]);
    board.check_invariants().unwrap();
}

#[test]
fn test_apply_command_rejection_is_noop() {
    let mut board = board_with_days(&[60]);
    let before = board.activity_count();

    let err = apply_command(
        &mut board,
        &Command::Insert(InsertActivity {
            bucket_id: day(1),
            activity: timed("Too long", 61),
            index: None,
        }),
    )
    .expect_err("Should be rejected");

    assert!(err.telemetry_event().is_some());
    assert_eq!(board.activity_count(), before);
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 0);
}
