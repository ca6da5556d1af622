//! Completion threshold and re-trigger policy.
//!
//! A day counts as complete once `used >= max * ratio`. Whether crossing the
//! threshold again after dropping below it fires another event is decided by
//! [`CompletionTrigger`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ItineraryError, Result};

/// Fill ratio at which a day counts as complete.
pub const DEFAULT_COMPLETION_RATIO: f64 = 0.9;

const RATIO_EPSILON: f64 = 1e-9;

/// When a completion event fires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompletionTrigger {
    /// Every upward crossing, judged from the current call's before/after usage
    #[default]
    Edge,

    /// Only the first upward crossing of each day
    Once,
}

impl FromStr for CompletionTrigger {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "edge" => Ok(CompletionTrigger::Edge),
            "once" => Ok(CompletionTrigger::Once),
            _ => Err(format!("Invalid completion trigger: {s}")),
        }
    }
}

/// Completion threshold and trigger mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompletionPolicy {
    /// Fraction of the ceiling, in `(0, 1]`
    pub ratio: f64,

    /// Re-trigger behaviour
    pub trigger: CompletionTrigger,
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_COMPLETION_RATIO,
            trigger: CompletionTrigger::Edge,
        }
    }
}

impl CompletionPolicy {
    /// Policy with a custom ratio and the default edge trigger.
    pub fn with_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            ..Self::default()
        }
    }

    /// Checks the ratio is a finite number in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !self.ratio.is_finite() || self.ratio <= 0.0 || self.ratio > 1.0 {
            return Err(ItineraryError::configuration(format!(
                "completion ratio must be in (0, 1], got {}",
                self.ratio
            )));
        }
        Ok(())
    }

    /// Whether `used` minutes out of `max` meet the threshold.
    pub fn is_complete(&self, used: u32, max: u32) -> bool {
        // Tolerance absorbs products like 720 * 0.9 landing a hair above 648.
        max > 0 && f64::from(used) + RATIO_EPSILON >= f64::from(max) * self.ratio
    }

    /// Whether moving from `before` to `after` minutes crosses the threshold
    /// upward.
    pub fn crossed(&self, before: u32, after: u32, max: u32) -> bool {
        !self.is_complete(before, max) && self.is_complete(after, max)
    }
}
