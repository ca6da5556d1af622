//! Shared helpers for integration tests.

#![allow(dead_code)]

use itinerary_core::{
    models::Category, params::NewActivity, Board, BoardBuilder, BucketConfig, BucketId,
};

/// Board with the given day capacities, named `day-1`, `day-2`, ...
pub fn board_with_days(capacities: &[u32]) -> Board {
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

/// Activity description with an explicit duration.
pub fn timed(label: &str, minutes: u32) -> NewActivity {
    NewActivity::new(label, Category::Other).with_duration(minutes)
}

/// ID of the n-th day (1-based).
pub fn day(n: usize) -> BucketId {
    BucketId::new(format!("day-{n}"))
}

/// Activity IDs of a day in order.
pub fn ids(board: &Board, bucket: &BucketId) -> Vec<String> {
    board
        .bucket(bucket)
        .expect("Day should exist")
        .items()
        .iter()
        .map(|item| item.id.to_string())
        .collect()
}
