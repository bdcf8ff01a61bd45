//! Task-scoped achievements
//!
//! These share the `Idle -> Running -> {Completed | Idle}` shape: an
//! interrupt or an expiry puts the task back to idle without credit, and
//! only the operations below move between states.

use crate::achievement::{TimedTask, Transition};
use crate::clock::Timestamp;
use std::time::Duration;

/// Completes the first time the caller reports its predicate as true
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConditionalAchievement;

impl ConditionalAchievement {
    pub fn check_completion(&self, condition_holds: bool) -> Transition {
        if condition_holds {
            Transition::GoalReached
        } else {
            Transition::Unchanged
        }
    }
}

/// Progress that only accrues while a task is begun
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalProgressAchievement {
    pub(crate) goal: i64,
    pub(crate) current: i64,
    pub(crate) task_begun: bool,
    /// Ticks left before a delayed begin takes effect
    pub(crate) pending_begin: Option<u32>,
}

impl ConditionalProgressAchievement {
    pub fn new(goal: i64) -> Self {
        Self {
            goal,
            current: 0,
            task_begun: false,
            pending_begin: None,
        }
    }

    pub fn goal(&self) -> i64 {
        self.goal
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn task_begun(&self) -> bool {
        self.task_begun
    }

    pub fn pending_begin(&self) -> Option<u32> {
        self.pending_begin
    }

    /// Begin a task, optionally after `delay_ticks` periodic ticks.
    /// Calls while a task is begun or pending are ignored.
    pub fn begin_conditional_task(&mut self, delay_ticks: u32) -> Transition {
        if self.task_begun || self.pending_begin.is_some() {
            return Transition::Unchanged;
        }
        if delay_ticks == 0 {
            self.task_begun = true;
        } else {
            self.pending_begin = Some(delay_ticks);
        }
        Transition::Updated
    }

    /// Add `amount` to the running task. Zero only re-evaluates the goal.
    pub fn check_task_progress(&mut self, amount: i64) -> Transition {
        if !self.task_begun {
            return Transition::Unchanged;
        }
        self.current = self.current.saturating_add(amount);
        if self.current >= self.goal {
            Transition::GoalReached
        } else if amount != 0 {
            Transition::Updated
        } else {
            Transition::Unchanged
        }
    }

    /// Close the running task. When its terminal condition holds the task
    /// counts one unit and the task ends; otherwise it stays begun and the
    /// caller is expected to interrupt it.
    pub fn finish_conditional_task(&mut self, condition_holds: bool) -> Transition {
        if !self.task_begun || !condition_holds {
            return Transition::Unchanged;
        }
        self.task_begun = false;
        self.current = self.current.saturating_add(1);
        Transition::goal_or_updated(self.current >= self.goal)
    }

    /// Abort the running or pending task and throw away everything it
    /// accumulated. Idle tasks keep the units of earlier finished runs.
    pub fn start_over_due_to_interrupt(&mut self) -> Transition {
        if !self.task_begun && self.pending_begin.is_none() {
            return Transition::Unchanged;
        }
        self.task_begun = false;
        self.pending_begin = None;
        self.current = 0;
        Transition::Updated
    }

    pub(crate) fn tick_pending_begin(&mut self) -> Transition {
        match self.pending_begin {
            Some(ticks) if ticks <= 1 => {
                self.pending_begin = None;
                self.task_begun = true;
                Transition::Updated
            }
            Some(ticks) => {
                self.pending_begin = Some(ticks - 1);
                Transition::Updated
            }
            None => Transition::Unchanged,
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.task_begun = false;
        self.pending_begin = None;
    }
}

/// Must stay in a qualifying state for at least `required`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRequiredConditionalAchievement {
    pub(crate) required: Duration,
    pub(crate) started_at: Option<Timestamp>,
}

impl TimeRequiredConditionalAchievement {
    pub fn new(required: Duration) -> Self {
        Self {
            required,
            started_at: None,
        }
    }

    pub fn required(&self) -> Duration {
        self.required
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    pub fn reset(&mut self) {
        self.started_at = None;
    }
}

impl TimedTask for TimeRequiredConditionalAchievement {
    fn start_task(&mut self, now: Timestamp) -> Transition {
        if self.started_at.is_some() {
            return Transition::Unchanged;
        }
        self.started_at = Some(now);
        Transition::Updated
    }

    fn check_completion(&mut self, now: Timestamp) -> Transition {
        match self.started_at {
            Some(start) if now.elapsed_since(start) >= self.required => Transition::GoalReached,
            _ => Transition::Unchanged,
        }
    }

    fn interrupt_task(&mut self) -> Transition {
        match self.started_at.take() {
            Some(_) => Transition::Updated,
            None => Transition::Unchanged,
        }
    }

    fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

/// Must be finished within `limit` of starting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLimitConditionalAchievement {
    pub(crate) limit: Duration,
    pub(crate) started_at: Option<Timestamp>,
}

impl TimeLimitConditionalAchievement {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            started_at: None,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    /// Drop a task whose deadline has passed. Never completes anything.
    pub(crate) fn expire_if_elapsed(&mut self, now: Timestamp) -> Transition {
        match self.started_at {
            Some(start) if now.elapsed_since(start) > self.limit => {
                log::debug!("Time limit of {:?} exceeded, task expired", self.limit);
                self.started_at = None;
                Transition::Updated
            }
            _ => Transition::Unchanged,
        }
    }

    pub fn reset(&mut self) {
        self.started_at = None;
    }
}

impl TimedTask for TimeLimitConditionalAchievement {
    fn start_task(&mut self, now: Timestamp) -> Transition {
        if self.started_at.is_some() {
            return Transition::Unchanged;
        }
        self.started_at = Some(now);
        Transition::Updated
    }

    fn check_completion(&mut self, now: Timestamp) -> Transition {
        match self.started_at {
            Some(start) if now.elapsed_since(start) <= self.limit => Transition::GoalReached,
            Some(_) => self.expire_if_elapsed(now),
            None => Transition::Unchanged,
        }
    }

    fn interrupt_task(&mut self) -> Transition {
        match self.started_at.take() {
            Some(_) => Transition::Updated,
            None => Transition::Unchanged,
        }
    }

    fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}
