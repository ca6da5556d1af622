//! Capacity bookkeeping for a single day.
//!
//! A [`Ledger`] tracks how many minutes of a bucket are consumed against its
//! ceiling. It is pure arithmetic: callers ask [`Ledger::can_admit`] before
//! growing usage, and [`Ledger::apply`] refuses any adjustment that would
//! leave usage negative or above the ceiling.

use serde::Serialize;
use thiserror::Error;

/// Reasons a ledger refuses an adjustment.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    /// A ledger must be able to hold at least one minute
    #[error("capacity must be positive")]
    ZeroCapacity,
    /// Growing usage would pass the ceiling
    #[error("cannot add {requested} minutes with only {remaining} remaining")]
    Overflow { requested: u32, remaining: u32 },
    /// Shrinking usage would go below zero
    #[error("cannot release {released} minutes when only {used} are in use")]
    Underflow { released: u32, used: u32 },
}

/// Consumed versus maximum minutes of one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ledger {
    capacity_used: u32,
    capacity_max: u32,
}

impl Ledger {
    /// Creates an empty ledger with the given ceiling.
    pub fn new(capacity_max: u32) -> Result<Self, LedgerError> {
        if capacity_max == 0 {
            return Err(LedgerError::ZeroCapacity);
        }
        Ok(Self {
            capacity_used: 0,
            capacity_max,
        })
    }

    /// Minutes currently in use.
    pub fn used(&self) -> u32 {
        self.capacity_used
    }

    /// Ceiling in minutes.
    pub fn max(&self) -> u32 {
        self.capacity_max
    }

    /// Minutes still available.
    pub fn remaining(&self) -> u32 {
        self.capacity_max - self.capacity_used
    }

    /// Whether `minutes` more would still fit under the ceiling.
    pub fn can_admit(&self, minutes: u32) -> bool {
        minutes <= self.remaining()
    }

    /// Used fraction of the ceiling, `0.0` for a zero ceiling.
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity_max == 0 {
            0.0
        } else {
            f64::from(self.capacity_used) / f64::from(self.capacity_max)
        }
    }

    /// Adjusts usage by a signed number of minutes.
    ///
    /// The ledger is unchanged when an error is returned.
    pub fn apply(&mut self, delta: i64) -> Result<(), LedgerError> {
        if delta >= 0 {
            let requested = u32::try_from(delta).unwrap_or(u32::MAX);
            if !self.can_admit(requested) {
                return Err(LedgerError::Overflow {
                    requested,
                    remaining: self.remaining(),
                });
            }
            self.capacity_used += requested;
        } else {
            let released = u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX);
            if released > self.capacity_used {
                return Err(LedgerError::Underflow {
                    released,
                    used: self.capacity_used,
                });
            }
            self.capacity_used -= released;
        }
        Ok(())
    }
}
