//! Thread-safe handle for serving one board to many tasks.
//!
//! The engine itself is synchronous and single-writer. [`SharedBoard`] wraps
//! it in an `Arc<tokio::sync::Mutex<_>>` so concurrent callers are
//! serialised: each operation locks, mutates and unlocks as one atomic step,
//! and no caller ever observes a half-applied move.

use std::sync::Arc;

use log::debug;
use tokio::sync::Mutex;

use crate::{
    board::Board,
    error::Result,
    models::{Activity, Bucket, BucketId, BucketSummary, Outcome, Placement},
    operations::{apply_command, replay, Command, CommandOutcome, ReplayMode, ReplayStep},
    params::{InsertActivity, MoveActivity, RemoveActivity, ReorderActivities},
};

/// Cloneable, async-aware handle to a board.
#[derive(Debug, Clone)]
pub struct SharedBoard {
    inner: Arc<Mutex<Board>>,
}

impl SharedBoard {
    /// Wraps a board for shared use.
    pub fn new(board: Board) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    /// Creates an activity inside a day.
    pub async fn add_activity(&self, params: &InsertActivity) -> Result<Outcome<Activity>> {
        self.inner.lock().await.add_activity(params)
    }

    /// Removes an activity from a day.
    pub async fn remove_activity(&self, params: &RemoveActivity) -> Result<Outcome<Activity>> {
        self.inner.lock().await.remove_activity(params)
    }

    /// Moves an activity between days.
    pub async fn move_activity(&self, params: &MoveActivity) -> Result<Outcome<Placement>> {
        self.inner.lock().await.move_activity(params)
    }

    /// Reorders a day.
    pub async fn reorder(&self, params: &ReorderActivities) -> Result<Outcome<()>> {
        self.inner.lock().await.reorder(params)
    }

    /// Applies any command under a single lock.
    pub async fn apply(&self, command: &Command) -> Result<CommandOutcome> {
        let mut board = self.inner.lock().await;
        debug!("shared board applying {}", command.describe());
        apply_command(&mut board, command)
    }

    /// Replays a script under a single lock so no other caller can
    /// interleave with it.
    pub async fn replay(&self, commands: &[Command], mode: ReplayMode) -> Vec<ReplayStep> {
        let mut board = self.inner.lock().await;
        replay(&mut board, commands, mode)
    }

    /// Copy of one day.
    pub async fn bucket(&self, id: &BucketId) -> Result<Bucket> {
        self.inner.lock().await.bucket(id).cloned()
    }

    /// Capacity summaries for every day.
    pub async fn summaries(&self) -> Vec<BucketSummary> {
        self.inner.lock().await.summaries()
    }

    /// Point-in-time copy of the whole board.
    pub async fn snapshot(&self) -> Board {
        self.inner.lock().await.clone()
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}
