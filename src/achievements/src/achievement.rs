//! Achievement definitions and the closed set of variant behaviours

use crate::clock::Timestamp;
use crate::duration::DurationAchievement;
use crate::progress::{
    ConditionalThresholdAchievement, ProgressAchievement, ThresholdAchievement,
    TimedProgressAchievement,
};
use crate::task::{
    ConditionalAchievement, ConditionalProgressAchievement, TimeLimitConditionalAchievement,
    TimeRequiredConditionalAchievement,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Stable identifier assigned at authoring time
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
#[serde(transparent)]
pub struct AchievementId(pub u32);

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a single variant operation did to its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing observable changed
    Unchanged,
    /// State changed but the goal is not met
    Updated,
    /// The goal is met; the caller must mark the achievement completed
    GoalReached,
}

impl Transition {
    pub(crate) fn goal_or_updated(reached: bool) -> Self {
        if reached {
            Transition::GoalReached
        } else {
            Transition::Updated
        }
    }
}

/// Counters that grow by increments
pub trait Incrementable {
    fn increment(&mut self, amount: i64, now: Timestamp) -> Transition;
}

/// Counters that mirror an absolute external value
pub trait ThresholdTracked {
    fn update_threshold(&mut self, value: i64) -> Transition;
}

/// Wall-clock accrual over keyed sessions
pub trait DurationTracked {
    fn start_tracking(&mut self, key: &str, owner: &str, now: Timestamp) -> Transition;
    fn stop_tracking(&mut self, key: &str, owner: &str, now: Timestamp) -> Transition;
    fn cleanup_tracking(&mut self, owner: &str, valid_keys: &[&str], now: Timestamp)
    -> Transition;
}

/// Tasks with a start timestamp and a timing rule
pub trait TimedTask {
    fn start_task(&mut self, now: Timestamp) -> Transition;
    fn check_completion(&mut self, now: Timestamp) -> Transition;
    fn interrupt_task(&mut self) -> Transition;
    fn is_running(&self) -> bool;
}

/// One of the nine achievement behaviours
#[derive(Debug, Clone, PartialEq)]
pub enum AchievementKind {
    Progress(ProgressAchievement),
    Threshold(ThresholdAchievement),
    Conditional(ConditionalAchievement),
    ConditionalProgress(ConditionalProgressAchievement),
    ConditionalThreshold(ConditionalThresholdAchievement),
    Duration(DurationAchievement),
    TimedProgress(TimedProgressAchievement),
    TimeRequired(TimeRequiredConditionalAchievement),
    TimeLimit(TimeLimitConditionalAchievement),
}

impl AchievementKind {
    pub fn name(&self) -> &'static str {
        match self {
            AchievementKind::Progress(_) => "Progress",
            AchievementKind::Threshold(_) => "Threshold",
            AchievementKind::Conditional(_) => "Conditional",
            AchievementKind::ConditionalProgress(_) => "ConditionalProgress",
            AchievementKind::ConditionalThreshold(_) => "ConditionalThreshold",
            AchievementKind::Duration(_) => "Duration",
            AchievementKind::TimedProgress(_) => "TimedProgress",
            AchievementKind::TimeRequired(_) => "TimeRequiredConditional",
            AchievementKind::TimeLimit(_) => "TimeLimitConditional",
        }
    }

    pub fn as_incrementable_mut(&mut self) -> Option<&mut dyn Incrementable> {
        match self {
            AchievementKind::Progress(a) => Some(a),
            AchievementKind::TimedProgress(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_threshold_mut(&mut self) -> Option<&mut dyn ThresholdTracked> {
        match self {
            AchievementKind::Threshold(a) => Some(a),
            AchievementKind::ConditionalThreshold(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_duration_mut(&mut self) -> Option<&mut dyn DurationTracked> {
        match self {
            AchievementKind::Duration(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_timed_task_mut(&mut self) -> Option<&mut dyn TimedTask> {
        match self {
            AchievementKind::TimeRequired(a) => Some(a),
            AchievementKind::TimeLimit(a) => Some(a),
            _ => None,
        }
    }

    /// Periodic driver for variants that react to elapsed time alone
    pub fn on_tick(&mut self, now: Timestamp) -> Transition {
        match self {
            AchievementKind::TimeRequired(a) => a.check_completion(now),
            AchievementKind::TimeLimit(a) => a.expire_if_elapsed(now),
            AchievementKind::ConditionalProgress(a) => a.tick_pending_begin(),
            _ => Transition::Unchanged,
        }
    }

    /// Drop all mutable state, keeping the authored goal
    pub fn reset(&mut self) {
        match self {
            AchievementKind::Progress(a) => a.reset(),
            AchievementKind::Threshold(a) => a.reset(),
            AchievementKind::Conditional(_) => {}
            AchievementKind::ConditionalProgress(a) => a.reset(),
            AchievementKind::ConditionalThreshold(a) => a.reset(),
            AchievementKind::Duration(a) => a.reset(),
            AchievementKind::TimedProgress(a) => a.reset(),
            AchievementKind::TimeRequired(a) => a.reset(),
            AchievementKind::TimeLimit(a) => a.reset(),
        }
    }
}

/// An achievement: immutable authored identity plus one variant's state
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    completed: bool,
    kind: AchievementKind,
}

impl Achievement {
    pub fn new(
        id: AchievementId,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: AchievementKind,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            kind,
        }
    }

    pub fn progress(id: AchievementId, title: &str, description: &str, goal: i64) -> Self {
        Self::new(id, title, description, AchievementKind::Progress(ProgressAchievement::new(goal)))
    }

    pub fn threshold(id: AchievementId, title: &str, description: &str, goal: i64) -> Self {
        let kind = AchievementKind::Threshold(ThresholdAchievement::new(goal));
        Self::new(id, title, description, kind)
    }

    pub fn conditional(id: AchievementId, title: &str, description: &str) -> Self {
        Self::new(id, title, description, AchievementKind::Conditional(ConditionalAchievement))
    }

    pub fn conditional_progress(
        id: AchievementId,
        title: &str,
        description: &str,
        goal: i64,
    ) -> Self {
        let kind = AchievementKind::ConditionalProgress(ConditionalProgressAchievement::new(goal));
        Self::new(id, title, description, kind)
    }

    pub fn conditional_threshold(
        id: AchievementId,
        title: &str,
        description: &str,
        goal: i64,
    ) -> Self {
        let kind =
            AchievementKind::ConditionalThreshold(ConditionalThresholdAchievement::new(goal));
        Self::new(id, title, description, kind)
    }

    pub fn duration(id: AchievementId, title: &str, description: &str, goal: Duration) -> Self {
        Self::new(id, title, description, AchievementKind::Duration(DurationAchievement::new(goal)))
    }

    pub fn timed_progress(
        id: AchievementId,
        title: &str,
        description: &str,
        goal: i64,
        window: Duration,
    ) -> Self {
        let kind = AchievementKind::TimedProgress(TimedProgressAchievement::new(goal, window));
        Self::new(id, title, description, kind)
    }

    pub fn time_required(
        id: AchievementId,
        title: &str,
        description: &str,
        required: Duration,
    ) -> Self {
        let kind = AchievementKind::TimeRequired(TimeRequiredConditionalAchievement::new(required));
        Self::new(id, title, description, kind)
    }

    pub fn time_limit(id: AchievementId, title: &str, description: &str, limit: Duration) -> Self {
        let kind = AchievementKind::TimeLimit(TimeLimitConditionalAchievement::new(limit));
        Self::new(id, title, description, kind)
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn kind(&self) -> &AchievementKind {
        &self.kind
    }

    /// Mutable access to the variant. Completed achievements hand out nothing,
    /// which is what makes every mutator a no-op after completion.
    pub fn kind_mut(&mut self) -> Option<&mut AchievementKind> {
        if self.completed {
            None
        } else {
            Some(&mut self.kind)
        }
    }

    /// Flip into the terminal state. Returns false if it already was.
    pub(crate) fn mark_completed(&mut self) -> bool {
        !std::mem::replace(&mut self.completed, true)
    }

    /// Unguarded access for snapshot restore
    pub(crate) fn parts_mut(&mut self) -> (&mut bool, &mut AchievementKind) {
        (&mut self.completed, &mut self.kind)
    }

    pub fn reset(&mut self) {
        self.completed = false;
        self.kind.reset();
    }
}
