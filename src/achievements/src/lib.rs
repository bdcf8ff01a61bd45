//! Achievement progress engine
//!
//! Owns a registry of achievements, each one of nine behaviours, and applies
//! caller-driven operations to them. Completion is terminal: it fires the
//! notifier exactly once and writes the state through to persistence.

pub mod achievement;
pub mod catalog;
pub mod clock;
pub mod duration;
pub mod hooks;
pub mod progress;
pub mod registry;
pub mod snapshot;
pub mod task;

#[cfg(test)]
mod tests;

pub use achievement::{Achievement, AchievementId, AchievementKind, Transition};
pub use catalog::{all_achievements, ids};
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use hooks::{CompletionNotifier, LogNotifier, StatePersistence};
pub use registry::Registry;
pub use snapshot::{ImportReport, SavedAchievement, SavedState, SkipReason, StateSnapshot};

use error::EngineError;

/// What an engine operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No achievement with that id
    Missing,
    /// The achievement's variant does not support the operation
    Mismatch,
    /// Accepted, nothing changed (includes every call on a completed achievement)
    Unchanged,
    Updated,
    /// This call completed the achievement
    Completed,
}

impl Outcome {
    pub fn is_completed(self) -> bool {
        self == Outcome::Completed
    }
}

/// The main engine that tracks progress and unlocks
pub struct AchievementEngine {
    registry: Registry,
    clock: Box<dyn Clock>,
    notifier: Option<Box<dyn CompletionNotifier>>,
    persistence: Option<Box<dyn StatePersistence>>,
    /// Completed since the last drain, in completion order
    newly_unlocked: Vec<AchievementId>,
    dirty: bool,
}

impl AchievementEngine {
    pub fn new(registry: Registry, clock: impl Clock + 'static) -> Self {
        Self {
            registry,
            clock: Box::new(clock),
            notifier: None,
            persistence: None,
            newly_unlocked: Vec::new(),
            dirty: false,
        }
    }

    /// Engine over the built-in catalog
    pub fn with_catalog(clock: impl Clock + 'static) -> Result<Self, EngineError> {
        let registry = Registry::from_catalog(all_achievements())?;
        Ok(Self::new(registry, clock))
    }

    pub fn set_notifier(&mut self, notifier: impl CompletionNotifier + 'static) {
        self.notifier = Some(Box::new(notifier));
    }

    pub fn set_persistence(&mut self, persistence: impl StatePersistence + 'static) {
        self.persistence = Some(Box::new(persistence));
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    // ---- Progress / TimedProgress ----

    pub fn increment_progress(&mut self, id: AchievementId, amount: i64) -> Outcome {
        self.apply(id, "IncrementProgress", |kind, now| {
            kind.as_incrementable_mut().map(|a| a.increment(amount, now))
        })
    }

    // ---- Threshold / ConditionalThreshold ----

    pub fn update_threshold(&mut self, id: AchievementId, value: i64) -> Outcome {
        self.apply(id, "UpdateThreshold", |kind, _| {
            kind.as_threshold_mut().map(|a| a.update_threshold(value))
        })
    }

    pub fn set_threshold_condition(&mut self, id: AchievementId, holds: bool) -> Outcome {
        self.apply(id, "SetThresholdCondition", |kind, _| match kind {
            AchievementKind::ConditionalThreshold(a) => Some(a.set_condition(holds)),
            _ => None,
        })
    }

    // ---- Conditional ----

    pub fn check_condition(&mut self, id: AchievementId, condition_holds: bool) -> Outcome {
        self.apply(id, "CheckCondition", |kind, _| match kind {
            AchievementKind::Conditional(a) => Some(a.check_completion(condition_holds)),
            _ => None,
        })
    }

    // ---- ConditionalProgress ----

    pub fn begin_conditional_task(&mut self, id: AchievementId, delay_ticks: u32) -> Outcome {
        self.apply(id, "BeginConditionalTask", |kind, _| match kind {
            AchievementKind::ConditionalProgress(a) => Some(a.begin_conditional_task(delay_ticks)),
            _ => None,
        })
    }

    pub fn check_task_progress(&mut self, id: AchievementId, amount: i64) -> Outcome {
        self.apply(id, "CheckTaskProgress", |kind, _| match kind {
            AchievementKind::ConditionalProgress(a) => Some(a.check_task_progress(amount)),
            _ => None,
        })
    }

    pub fn finish_conditional_task(&mut self, id: AchievementId, condition_holds: bool) -> Outcome {
        self.apply(id, "FinishConditionalTask", |kind, _| match kind {
            AchievementKind::ConditionalProgress(a) => {
                Some(a.finish_conditional_task(condition_holds))
            }
            _ => None,
        })
    }

    pub fn start_over_due_to_interrupt(&mut self, id: AchievementId) -> Outcome {
        self.apply(id, "StartOverDueToInterrupt", |kind, _| match kind {
            AchievementKind::ConditionalProgress(a) => Some(a.start_over_due_to_interrupt()),
            _ => None,
        })
    }

    // ---- Duration ----

    pub fn start_tracking(&mut self, id: AchievementId, key: &str, owner: &str) -> Outcome {
        self.apply(id, "StartTracking", |kind, now| {
            kind.as_duration_mut().map(|a| a.start_tracking(key, owner, now))
        })
    }

    pub fn stop_tracking(&mut self, id: AchievementId, key: &str, owner: &str) -> Outcome {
        self.apply(id, "StopTracking", |kind, now| {
            kind.as_duration_mut().map(|a| a.stop_tracking(key, owner, now))
        })
    }

    /// Close every session of `owner` whose key is not in `valid_keys`
    pub fn cleanup_tracking(
        &mut self,
        id: AchievementId,
        owner: &str,
        valid_keys: &[&str],
    ) -> Outcome {
        self.apply(id, "CleanupTracking", |kind, now| {
            kind.as_duration_mut()
                .map(|a| a.cleanup_tracking(owner, valid_keys, now))
        })
    }

    // ---- TimeRequired / TimeLimit ----

    pub fn start_task(&mut self, id: AchievementId) -> Outcome {
        self.apply(id, "StartTask", |kind, now| {
            kind.as_timed_task_mut().map(|a| a.start_task(now))
        })
    }

    pub fn check_completion(&mut self, id: AchievementId) -> Outcome {
        self.apply(id, "CheckCompletion", |kind, now| {
            kind.as_timed_task_mut().map(|a| a.check_completion(now))
        })
    }

    pub fn interrupt_task(&mut self, id: AchievementId) -> Outcome {
        self.apply(id, "InterruptTask", |kind, _| {
            kind.as_timed_task_mut().map(|a| a.interrupt_task())
        })
    }

    /// Periodic driver: completes elapsed time-required tasks, expires
    /// overrun time-limit tasks and counts down delayed task begins.
    /// Returns the achievements completed by this tick.
    pub fn tick(&mut self) -> Vec<AchievementId> {
        let now = self.clock.now();
        let mut reached = Vec::new();

        for achievement in self.registry.iter_mut() {
            let id = achievement.id;
            let Some(kind) = achievement.kind_mut() else {
                continue;
            };
            match kind.on_tick(now) {
                Transition::GoalReached => reached.push(id),
                Transition::Updated => self.dirty = true,
                Transition::Unchanged => {}
            }
        }

        let completed: Vec<AchievementId> =
            reached.into_iter().filter(|id| self.complete(*id)).collect();
        if !completed.is_empty() {
            self.write_through();
        }
        completed
    }

    // ---- Queries ----

    pub fn get(&self, id: AchievementId) -> Option<&Achievement> {
        self.registry.get(id)
    }

    /// Like `get`, for callers that treat a missing id as an error
    pub fn require(&self, id: AchievementId) -> Result<&Achievement, EngineError> {
        self.registry
            .get(id)
            .ok_or(EngineError::UnknownAchievement(id.0))
    }

    pub fn is_completed(&self, id: AchievementId) -> bool {
        self.registry
            .get(id)
            .map(|a| a.is_completed())
            .unwrap_or(false)
    }

    /// Whether a conditional-progress task is currently begun
    pub fn conditional_task_begun(&self, id: AchievementId) -> bool {
        matches!(
            self.registry.get(id).map(|a| a.kind()),
            Some(AchievementKind::ConditionalProgress(a)) if a.task_begun()
        )
    }

    /// Whether a time-required or time-limit task has a start timestamp
    pub fn timed_task_running(&self, id: AchievementId) -> bool {
        match self.registry.get(id).map(|a| a.kind()) {
            Some(AchievementKind::TimeRequired(a)) => a.started_at().is_some(),
            Some(AchievementKind::TimeLimit(a)) => a.started_at().is_some(),
            _ => false,
        }
    }

    /// All achievements in authoring order
    pub fn achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.registry.iter()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn unlocked_achievements(&self) -> Vec<&Achievement> {
        self.registry.iter().filter(|a| a.is_completed()).collect()
    }

    pub fn locked_achievements(&self) -> Vec<&Achievement> {
        self.registry.iter().filter(|a| !a.is_completed()).collect()
    }

    /// Get unlock percentage (0.0 to 1.0)
    pub fn unlock_percentage(&self) -> f32 {
        let total = self.registry.len();
        if total == 0 {
            return 0.0;
        }
        self.unlocked_achievements().len() as f32 / total as f32
    }

    /// Newly unlocked achievements since the last drain
    pub fn drain_newly_unlocked(&mut self) -> Vec<AchievementId> {
        std::mem::take(&mut self.newly_unlocked)
    }

    pub fn peek_newly_unlocked(&self) -> &[AchievementId] {
        &self.newly_unlocked
    }

    /// State changed since the last successful persist or import
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ---- Persistence ----

    pub fn export_state(&self) -> StateSnapshot {
        StateSnapshot {
            version: snapshot::SNAPSHOT_VERSION,
            achievements: self.registry.iter().map(snapshot::capture).collect(),
        }
    }

    /// Replace all mutable state with `snapshot`. Achievements missing from
    /// the snapshot start fresh; entries for unknown ids or a different
    /// variant are skipped and reported. Does not fire the notifier.
    pub fn import_state(&mut self, snapshot: &StateSnapshot) -> ImportReport {
        if snapshot.version > snapshot::SNAPSHOT_VERSION {
            log::warn!(
                "Importing snapshot version {} with engine version {}; reading what is understood",
                snapshot.version,
                snapshot::SNAPSHOT_VERSION
            );
        }

        for achievement in self.registry.iter_mut() {
            achievement.reset();
        }

        let mut report = ImportReport::default();
        for saved in &snapshot.achievements {
            let Some(achievement) = self.registry.get_mut(saved.id) else {
                log::warn!("Skipping saved state for unknown achievement {}", saved.id);
                report.skipped.push((saved.id, SkipReason::UnknownId));
                continue;
            };
            match snapshot::apply(achievement, saved) {
                Ok(()) => report.applied += 1,
                Err(reason) => {
                    log::warn!("Skipping saved state for {}: {}", saved.id, reason);
                    report.skipped.push((saved.id, reason));
                }
            }
        }

        self.newly_unlocked.clear();
        self.dirty = false;
        log::debug!(
            "Imported {} achievement states, skipped {}",
            report.applied,
            report.skipped.len()
        );
        report
    }

    /// Persist the full state now. Without a persistence target this is a no-op.
    pub fn save(&mut self) -> Result<(), EngineError> {
        let snapshot = self.export_state();
        if let Some(persistence) = self.persistence.as_mut() {
            persistence.persist(&snapshot)?;
            self.dirty = false;
        }
        Ok(())
    }

    /// Reset all achievements and progress
    pub fn reset(&mut self) {
        for achievement in self.registry.iter_mut() {
            achievement.reset();
        }
        self.newly_unlocked.clear();
        self.dirty = true;
    }

    // ---- Internals ----

    fn apply<F>(&mut self, id: AchievementId, operation: &'static str, op: F) -> Outcome
    where
        F: FnOnce(&mut AchievementKind, Timestamp) -> Option<Transition>,
    {
        let now = self.clock.now();
        let Some(achievement) = self.registry.get_mut(id) else {
            log::warn!("{} on unknown achievement {}", operation, id);
            return Outcome::Missing;
        };
        let Some(kind) = achievement.kind_mut() else {
            return Outcome::Unchanged;
        };
        let kind_name = kind.name();

        match op(kind, now) {
            None => {
                log::warn!(
                    "{} is not supported by {} achievement {}",
                    operation,
                    kind_name,
                    id
                );
                Outcome::Mismatch
            }
            Some(Transition::Unchanged) => Outcome::Unchanged,
            Some(Transition::Updated) => {
                self.dirty = true;
                Outcome::Updated
            }
            Some(Transition::GoalReached) => {
                if self.complete(id) {
                    self.write_through();
                }
                Outcome::Completed
            }
        }
    }

    /// Terminal transition. Returns false if the achievement was already completed.
    fn complete(&mut self, id: AchievementId) -> bool {
        let Some(achievement) = self.registry.get_mut(id) else {
            return false;
        };
        if !achievement.mark_completed() {
            return false;
        }

        self.dirty = true;
        self.newly_unlocked.push(id);
        log::debug!("Achievement {} completed", id);
        if let Some(notifier) = self.notifier.as_mut() {
            notifier.on_achievement_completed(achievement);
        }
        true
    }

    /// Best-effort persist after a completion
    fn write_through(&mut self) {
        if self.persistence.is_none() {
            return;
        }
        if let Err(err) = self.save() {
            log::error!("Failed to persist achievement state: {}", error::handle_error(&err));
        }
    }
}

impl std::fmt::Debug for AchievementEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AchievementEngine")
            .field("achievements", &self.registry.len())
            .field("completed", &self.unlocked_achievements().len())
            .field("newly_unlocked", &self.newly_unlocked)
            .field("dirty", &self.dirty)
            .finish()
    }
}
