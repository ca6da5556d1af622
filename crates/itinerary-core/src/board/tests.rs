//! Tests for the board module.

use super::*;
use crate::{
    config::BucketConfig,
    models::{Category, Placement},
    params::{
        InsertActivity, MoveActivity, RemoveActivity, ReorderActivities, ScheduleActivity,
        UnscheduleActivity,
    },
};

/// Board with the given day capacities, named `day-1`, `day-2`, ...
fn board_with_days(capacities: &[u32]) -> Board {
    capacities
        .iter()
        .enumerate()
        .fold(BoardBuilder::new(), |builder, (i, cap)| {
            builder.with_bucket(BucketConfig::new(
                format!("day-{}", i + 1),
                format!("Day {}", i + 1),
                *cap,
            ))
        })
        .build()
        .expect("Failed to build board")
}

fn activity(id: &str, minutes: u32) -> Activity {
    Activity::new(id, format!("Activity {id}"), Category::Other, minutes)
        .expect("Failed to create activity")
}

fn day(n: usize) -> BucketId {
    BucketId::new(format!("day-{n}"))
}

fn ids(board: &Board, bucket: &BucketId) -> Vec<String> {
    board
        .bucket(bucket)
        .expect("Day should exist")
        .items()
        .iter()
        .map(|item| item.id.to_string())
        .collect()
}

fn completed(bucket: &BucketId) -> Event {
    Event::BucketCompleted {
        bucket_id: bucket.clone(),
    }
}

#[test]
fn test_fill_reject_then_complete() {
    let mut board = board_with_days(&[720]);
    for (n, minutes) in [60, 120, 90, 60, 90].into_iter().enumerate() {
        let outcome = board
            .insert(&day(1), activity(&format!("a{n}"), minutes), None)
            .expect("Insert should fit");
        assert!(outcome.events.is_empty());
    }
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 420);
    assert!(board.bucket(&day(1)).unwrap().can_admit(300));

    let err = board
        .insert(&day(1), activity("huge", 301), None)
        .expect_err("301 minutes should not fit in 300");
    assert!(matches!(
        err,
        ItineraryError::CapacityExceeded {
            requested: 301,
            remaining: 300,
            ..
        }
    ));
    assert_eq!(
        err.telemetry_event(),
        Some(Event::CapacityExceededAttempt {
            bucket_id: day(1),
            requested: 301,
            remaining: 300,
        })
    );
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 420);
    assert_eq!(board.bucket(&day(1)).unwrap().len(), 5);

    let outcome = board
        .insert(&day(1), activity("beach", 240), None)
        .expect("240 minutes should fit");
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 660);
    assert_eq!(outcome.events, vec![completed(&day(1))]);
    assert_eq!(
        outcome.value,
        Placement {
            bucket_id: day(1),
            index: 5
        }
    );
}

#[test]
fn test_rejected_move_leaves_both_days_untouched() {
    let mut board = board_with_days(&[720, 720]);
    board.insert(&day(1), activity("tour", 120), None).unwrap();
    board.insert(&day(1), activity("rest", 480), None).unwrap();
    board.insert(&day(2), activity("long", 700), None).unwrap();

    let err = board
        .move_activity(&MoveActivity {
            source: day(1),
            destination: day(2),
            activity_id: "tour".into(),
            index: None,
        })
        .expect_err("Move should be rejected");

    assert!(matches!(
        err,
        ItineraryError::CapacityExceeded {
            requested: 120,
            remaining: 20,
            ..
        }
    ));
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 600);
    assert_eq!(ids(&board, &day(1)), vec!["tour", "rest"]);
    assert_eq!(board.bucket(&day(2)).unwrap().capacity_used(), 700);
    assert_eq!(ids(&board, &day(2)), vec!["long"]);
    board.check_invariants().unwrap();
}

#[test]
fn test_move_between_days() {
    let mut board = board_with_days(&[100, 100]);
    board.insert(&day(1), activity("a", 50), None).unwrap();
    board.insert(&day(1), activity("b", 40), None).unwrap();
    board.insert(&day(2), activity("c", 45), None).unwrap();

    let outcome = board
        .move_activity(&MoveActivity {
            source: day(1),
            destination: day(2),
            activity_id: "a".into(),
            index: Some(0),
        })
        .expect("Move should succeed");

    assert_eq!(outcome.value.index, 0);
    assert_eq!(outcome.events, vec![completed(&day(2))]);
    assert_eq!(ids(&board, &day(1)), vec!["b"]);
    assert_eq!(ids(&board, &day(2)), vec!["a", "c"]);
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 40);
    assert_eq!(board.bucket(&day(2)).unwrap().capacity_used(), 95);
}

#[test]
fn test_move_within_same_day_is_reorder() {
    let mut board = board_with_days(&[100]);
    for id in ["a", "b", "c"] {
        board.insert(&day(1), activity(id, 30), None).unwrap();
    }

    let outcome = board
        .move_activity(&MoveActivity {
            source: day(1),
            destination: day(1),
            activity_id: "a".into(),
            index: Some(42),
        })
        .expect("Same-day move should succeed");

    // Clamped to the last slot; no capacity change, no events
    assert_eq!(outcome.value.index, 2);
    assert!(outcome.events.is_empty());
    assert_eq!(ids(&board, &day(1)), vec!["b", "c", "a"]);
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 90);
}

#[test]
fn test_move_missing_activity_or_day() {
    let mut board = board_with_days(&[100, 100]);
    board.insert(&day(1), activity("a", 30), None).unwrap();

    assert!(matches!(
        board.move_activity(&MoveActivity {
            source: day(2),
            destination: day(1),
            activity_id: "a".into(),
            index: None,
        }),
        Err(ItineraryError::ActivityNotFound { .. })
    ));
    assert!(matches!(
        board.move_activity(&MoveActivity {
            source: day(1),
            destination: day(9),
            activity_id: "a".into(),
            index: None,
        }),
        Err(ItineraryError::BucketNotFound { .. })
    ));
    assert_eq!(ids(&board, &day(1)), vec!["a"]);
}

#[test]
fn test_edge_trigger_fires_on_every_upward_crossing() {
    let mut board = board_with_days(&[100]);

    let first = board.insert(&day(1), activity("big", 95), None).unwrap();
    assert_eq!(first.events, vec![completed(&day(1))]);

    // Already above the threshold: no new event
    let second = board.insert(&day(1), activity("tiny", 1), None).unwrap();
    assert!(second.events.is_empty());

    // Drop below and cross again
    let removed = board.remove(&day(1), &"big".into()).unwrap();
    assert!(removed.events.is_empty());
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 1);

    let again = board.insert(&day(1), activity("big", 95), None).unwrap();
    assert_eq!(again.events, vec![completed(&day(1))]);
}

#[test]
fn test_once_trigger_fires_only_first_time() {
    let mut board = BoardBuilder::new()
        .with_policy(CompletionPolicy {
            trigger: CompletionTrigger::Once,
            ..CompletionPolicy::default()
        })
        .with_bucket(BucketConfig::new("day-1", "Day 1", 100))
        .build()
        .unwrap();

    let first = board.insert(&day(1), activity("big", 95), None).unwrap();
    assert!(first.completed_any());

    board.remove(&day(1), &"big".into()).unwrap();
    let again = board.insert(&day(1), activity("big", 95), None).unwrap();
    assert!(again.events.is_empty());
    assert!(board.is_complete(&day(1)).unwrap());
}

#[test]
fn test_seeded_complete_day_does_not_fire_under_once() {
    let mut board = BoardBuilder::new()
        .with_policy(CompletionPolicy {
            trigger: CompletionTrigger::Once,
            ..CompletionPolicy::default()
        })
        .with_bucket(
            BucketConfig::new("day-1", "Day 1", 100)
                .with_item(NewActivity::new("Check-in", Category::Accommodation).with_duration(92)),
        )
        .build()
        .unwrap();

    board.remove(&day(1), &"act-1".into()).unwrap();
    let outcome = board.insert(&day(1), activity("x", 92), None).unwrap();
    assert!(outcome.events.is_empty());
}

#[test]
fn test_custom_ratio() {
    let mut board = BoardBuilder::new()
        .with_policy(CompletionPolicy::with_ratio(0.5))
        .with_bucket(BucketConfig::new("day-1", "Day 1", 100))
        .build()
        .unwrap();

    assert!(board
        .insert(&day(1), activity("a", 49), None)
        .unwrap()
        .events
        .is_empty());
    let outcome = board.insert(&day(1), activity("b", 1), None).unwrap();
    assert_eq!(outcome.events, vec![completed(&day(1))]);
}

#[test]
fn test_full_bucket_admits_nothing() {
    let mut board = board_with_days(&[60]);
    board.insert(&day(1), activity("a", 60), None).unwrap();

    let err = board
        .insert(&day(1), activity("b", 1), None)
        .expect_err("Full day should reject");
    assert!(matches!(
        err,
        ItineraryError::CapacityExceeded { remaining: 0, .. }
    ));
}

#[test]
fn test_insert_index_is_clamped() {
    let mut board = board_with_days(&[100]);
    board.insert(&day(1), activity("a", 10), None).unwrap();
    board.insert(&day(1), activity("b", 10), Some(0)).unwrap();
    let outcome = board.insert(&day(1), activity("c", 10), Some(99)).unwrap();

    assert_eq!(outcome.value.index, 2);
    assert_eq!(ids(&board, &day(1)), vec!["b", "a", "c"]);
}

#[test]
fn test_insert_rejects_duplicates_and_unknown_days() {
    let mut board = board_with_days(&[100, 100]);
    board.insert(&day(1), activity("a", 10), None).unwrap();

    assert!(matches!(
        board.insert(&day(2), activity("a", 10), None),
        Err(ItineraryError::DuplicateActivity { .. })
    ));
    assert!(matches!(
        board.insert(&day(7), activity("z", 10), None),
        Err(ItineraryError::BucketNotFound { .. })
    ));
    assert_eq!(board.activity_count(), 1);
}

#[test]
fn test_remove_returns_activity() {
    let mut board = board_with_days(&[100]);
    board.insert(&day(1), activity("a", 25), None).unwrap();

    let outcome = board
        .remove_activity(&RemoveActivity {
            bucket_id: day(1),
            activity_id: "a".into(),
        })
        .unwrap();
    assert_eq!(outcome.value.duration_minutes(), 25);
    assert!(board.bucket(&day(1)).unwrap().is_empty());
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 0);

    assert!(matches!(
        board.remove(&day(1), &"a".into()),
        Err(ItineraryError::ActivityNotFound { .. })
    ));
}

#[test]
fn test_reorder() {
    let mut board = board_with_days(&[100]);
    for id in ["a", "b", "c"] {
        board.insert(&day(1), activity(id, 20), None).unwrap();
    }

    let outcome = board
        .reorder(&ReorderActivities {
            bucket_id: day(1),
            from: 2,
            to: 0,
        })
        .unwrap();
    assert!(outcome.events.is_empty());
    assert_eq!(ids(&board, &day(1)), vec!["c", "a", "b"]);

    // No-op reorder is allowed
    board
        .reorder(&ReorderActivities {
            bucket_id: day(1),
            from: 1,
            to: 1,
        })
        .unwrap();
    assert_eq!(ids(&board, &day(1)), vec!["c", "a", "b"]);
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 60);
}

#[test]
fn test_reorder_out_of_bounds() {
    let mut board = board_with_days(&[100]);
    board.insert(&day(1), activity("a", 20), None).unwrap();

    assert!(matches!(
        board.reorder(&ReorderActivities {
            bucket_id: day(1),
            from: 0,
            to: 1,
        }),
        Err(ItineraryError::InvalidIndex { index: 1, len: 1 })
    ));
    assert!(matches!(
        board.reorder(&ReorderActivities {
            bucket_id: day(1),
            from: 3,
            to: 0,
        }),
        Err(ItineraryError::InvalidIndex { index: 3, len: 1 })
    ));
    assert_eq!(ids(&board, &day(1)), vec!["a"]);
}

#[test]
fn test_add_activity_estimates_and_generates_ids() {
    let mut board = board_with_days(&[720]);

    let outcome = board
        .add_activity(&InsertActivity {
            bucket_id: day(1),
            activity: NewActivity::new("Museum", Category::Sightseeing),
            index: None,
        })
        .unwrap();
    assert_eq!(outcome.value.id.as_str(), "act-1");
    assert_eq!(outcome.value.duration_minutes(), 120);

    let second = board
        .add_activity(&InsertActivity {
            bucket_id: day(1),
            activity: NewActivity::new("Hotel", Category::Accommodation),
            index: Some(0),
        })
        .unwrap();
    assert_eq!(second.value.id.as_str(), "act-2");
    assert_eq!(ids(&board, &day(1)), vec!["act-2", "act-1"]);
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 150);
}

#[test]
fn test_add_activity_failure_keeps_id_counter() {
    let mut board = board_with_days(&[100]);

    let err = board
        .add_activity(&InsertActivity {
            bucket_id: day(1),
            activity: NewActivity::new("Road trip", Category::Transportation).with_duration(500),
            index: None,
        })
        .expect_err("Should not fit");
    assert!(matches!(err, ItineraryError::CapacityExceeded { .. }));

    let blank = board.add_activity(&InsertActivity {
        bucket_id: day(1),
        activity: NewActivity::new("  ", Category::Food),
        index: None,
    });
    assert!(matches!(blank, Err(ItineraryError::InvalidInput { .. })));

    let outcome = board
        .add_activity(&InsertActivity {
            bucket_id: day(1),
            activity: NewActivity::new("Coffee", Category::Food).with_duration(15),
            index: None,
        })
        .unwrap();
    assert_eq!(outcome.value.id.as_str(), "act-1");
}

#[test]
fn test_generated_ids_skip_existing() {
    let mut board = board_with_days(&[100]);
    board.insert(&day(1), activity("act-1", 10), None).unwrap();

    let created = board
        .add_to_pool(&NewActivity::new("Walk", Category::Other).with_duration(20))
        .unwrap();
    assert_eq!(created.id.as_str(), "act-2");
}

#[test]
fn test_pool_schedule_and_unschedule() {
    let mut board = board_with_days(&[100, 100]);
    let beach = board
        .add_to_pool(&NewActivity::new("Beach", Category::Other).with_duration(95))
        .unwrap();
    board
        .add_to_pool(&NewActivity::new("Lunch", Category::Food))
        .unwrap();
    assert_eq!(board.pool().len(), 2);

    let outcome = board
        .schedule(&ScheduleActivity {
            activity_id: beach.id.clone(),
            bucket_id: day(1),
            index: None,
        })
        .unwrap();
    assert_eq!(outcome.events, vec![completed(&day(1))]);
    assert_eq!(board.pool().len(), 1);
    assert_eq!(
        board.locate(&beach.id),
        Some(Location::Bucket {
            bucket_id: day(1),
            index: 0
        })
    );

    let back = board
        .unschedule(&UnscheduleActivity {
            bucket_id: day(1),
            activity_id: beach.id.clone(),
            index: Some(0),
        })
        .unwrap();
    assert_eq!(back.value, 0);
    assert_eq!(board.locate(&beach.id), Some(Location::Pool { index: 0 }));
    assert_eq!(board.bucket(&day(1)).unwrap().capacity_used(), 0);
    board.check_invariants().unwrap();
}

#[test]
fn test_schedule_rejection_keeps_pool() {
    let mut board = board_with_days(&[60]);
    let beach = board
        .add_to_pool(&NewActivity::new("Beach", Category::Other).with_duration(240))
        .unwrap();

    let err = board
        .schedule(&ScheduleActivity {
            activity_id: beach.id.clone(),
            bucket_id: day(1),
            index: None,
        })
        .expect_err("Beach should not fit");
    assert!(matches!(
        err,
        ItineraryError::CapacityExceeded {
            requested: 240,
            remaining: 60,
            ..
        }
    ));
    assert_eq!(board.locate(&beach.id), Some(Location::Pool { index: 0 }));
    assert!(board.bucket(&day(1)).unwrap().is_empty());
}

#[test]
fn test_discard_from_pool() {
    let mut board = board_with_days(&[60]);
    let walk = board
        .add_to_pool(&NewActivity::new("Walk", Category::Other))
        .unwrap();

    let discarded = board.discard(&walk.id).unwrap();
    assert_eq!(discarded.label, "Walk");
    assert!(board.pool().is_empty());
    assert!(matches!(
        board.discard(&walk.id),
        Err(ItineraryError::ActivityNotFound { .. })
    ));
}

#[test]
fn test_builder_validation() {
    assert!(matches!(
        BoardBuilder::new()
            .with_bucket(BucketConfig::new("day-1", "Day 1", 0))
            .build(),
        Err(ItineraryError::Configuration { .. })
    ));
    assert!(matches!(
        BoardBuilder::new()
            .with_bucket(BucketConfig::new("day-1", "Day 1", 60))
            .with_bucket(BucketConfig::new("day-1", "Again", 60))
            .build(),
        Err(ItineraryError::Configuration { .. })
    ));
    assert!(matches!(
        BoardBuilder::new()
            .with_policy(CompletionPolicy::with_ratio(1.5))
            .build(),
        Err(ItineraryError::Configuration { .. })
    ));

    let overflow = BoardBuilder::new()
        .with_bucket(
            BucketConfig::new("day-1", "Day 1", 60)
                .with_item(NewActivity::new("Tour", Category::Sightseeing)),
        )
        .build();
    match overflow {
        Err(ItineraryError::Configuration { message }) => {
            assert!(message.contains("exceed its capacity of 60 minutes"))
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_summaries_and_completion_state() {
    let mut board = board_with_days(&[100, 200]);
    board.insert(&day(1), activity("a", 90), None).unwrap();

    let summaries = board.summaries();
    assert_eq!(summaries.len(), 2);
    assert!(summaries[0].complete);
    assert_eq!(summaries[0].fill_percent, 90);
    assert!(!summaries[1].complete);
    assert!(board.is_complete(&day(1)).unwrap());
    assert!(matches!(
        board.is_complete(&day(5)),
        Err(ItineraryError::BucketNotFound { .. })
    ));
}
