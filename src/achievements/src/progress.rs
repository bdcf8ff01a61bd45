//! Counter-style achievements: plain progress, thresholds and streaks

use crate::achievement::{Incrementable, ThresholdTracked, Transition};
use crate::clock::Timestamp;
use std::time::Duration;

/// Monotonic counter that completes once it reaches its goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressAchievement {
    pub(crate) goal: i64,
    pub(crate) current: i64,
}

impl ProgressAchievement {
    pub fn new(goal: i64) -> Self {
        Self { goal, current: 0 }
    }

    pub fn goal(&self) -> i64 {
        self.goal
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    /// Add `amount` to the counter. Negative amounts are accepted for
    /// corrective backfill.
    pub fn increment_progress(&mut self, amount: i64) -> Transition {
        if amount == 0 {
            return Transition::Unchanged;
        }
        self.current = self.current.saturating_add(amount);
        Transition::goal_or_updated(self.current >= self.goal)
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

impl Incrementable for ProgressAchievement {
    fn increment(&mut self, amount: i64, _now: Timestamp) -> Transition {
        self.increment_progress(amount)
    }
}

/// Mirrors an absolute value such as "gags currently equipped"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdAchievement {
    pub(crate) goal: i64,
    pub(crate) current: i64,
}

impl ThresholdAchievement {
    pub fn new(goal: i64) -> Self {
        Self { goal, current: 0 }
    }

    pub fn goal(&self) -> i64 {
        self.goal
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

impl ThresholdTracked for ThresholdAchievement {
    fn update_threshold(&mut self, value: i64) -> Transition {
        if value >= self.goal {
            self.current = value;
            return Transition::GoalReached;
        }
        if value == self.current {
            return Transition::Unchanged;
        }
        self.current = value;
        Transition::Updated
    }
}

/// Threshold that only counts while an external gate holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalThresholdAchievement {
    pub(crate) goal: i64,
    pub(crate) current: i64,
    pub(crate) condition_met: bool,
}

impl ConditionalThresholdAchievement {
    pub fn new(goal: i64) -> Self {
        Self {
            goal,
            current: 0,
            condition_met: false,
        }
    }

    pub fn goal(&self) -> i64 {
        self.goal
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn condition_met(&self) -> bool {
        self.condition_met
    }

    /// Record the gate. Opening it re-evaluates the value already recorded.
    pub fn set_condition(&mut self, holds: bool) -> Transition {
        if self.condition_met == holds {
            return Transition::Unchanged;
        }
        self.condition_met = holds;
        Transition::goal_or_updated(holds && self.current >= self.goal)
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.condition_met = false;
    }
}

impl ThresholdTracked for ConditionalThresholdAchievement {
    fn update_threshold(&mut self, value: i64) -> Transition {
        let changed = value != self.current;
        self.current = value;
        if self.condition_met && value >= self.goal {
            Transition::GoalReached
        } else if changed {
            Transition::Updated
        } else {
            Transition::Unchanged
        }
    }
}

/// Progress that must keep arriving: a gap longer than `window` between two
/// increments drops the running streak back to zero before counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedProgressAchievement {
    pub(crate) goal: i64,
    pub(crate) window: Duration,
    pub(crate) current: i64,
    pub(crate) last_increment: Option<Timestamp>,
}

impl TimedProgressAchievement {
    pub fn new(goal: i64, window: Duration) -> Self {
        Self {
            goal,
            window,
            current: 0,
            last_increment: None,
        }
    }

    pub fn goal(&self) -> i64 {
        self.goal
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn last_increment(&self) -> Option<Timestamp> {
        self.last_increment
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.last_increment = None;
    }
}

impl Incrementable for TimedProgressAchievement {
    fn increment(&mut self, amount: i64, now: Timestamp) -> Transition {
        if let Some(last) = self.last_increment {
            if now.elapsed_since(last) > self.window {
                log::debug!(
                    "Streak lapsed after {:?} (window {:?}), dropping {} progress",
                    now.elapsed_since(last),
                    self.window,
                    self.current
                );
                self.current = 0;
            }
        }
        self.current = self.current.saturating_add(amount);
        self.last_increment = Some(now);
        Transition::goal_or_updated(self.current >= self.goal)
    }
}
