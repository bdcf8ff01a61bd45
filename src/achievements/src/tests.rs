//! Engine-level tests for the achievements system

use crate::*;
use error::EngineError;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const COUNTER: AchievementId = AchievementId(1);
const STREAK: AchievementId = AchievementId(2);
const CROWD: AchievementId = AchievementId(3);
const GATED_CROWD: AchievementId = AchievementId(4);
const ONE_SHOT: AchievementId = AchievementId(5);
const DUTY: AchievementId = AchievementId(6);
const WEAR_TIME: AchievementId = AchievementId(7);
const STAY: AchievementId = AchievementId(8);
const DODGE: AchievementId = AchievementId(9);

fn test_registry() -> Registry {
    Registry::from_catalog(vec![
        Achievement::progress(COUNTER, "Counter", "Count to three", 3),
        Achievement::timed_progress(
            STREAK,
            "Streak",
            "Three within a minute",
            3,
            Duration::from_secs(60),
        ),
        Achievement::threshold(CROWD, "Crowd", "Five at once", 5),
        Achievement::conditional_threshold(GATED_CROWD, "Gated Crowd", "Five at once, gagged", 5),
        Achievement::conditional(ONE_SHOT, "One Shot", "Just do it"),
        Achievement::conditional_progress(DUTY, "Duty", "Two duties", 2),
        Achievement::duration(WEAR_TIME, "Wear Time", "Ten minutes", Duration::from_secs(600)),
        Achievement::time_required(STAY, "Stay", "Stay thirty seconds", Duration::from_secs(30)),
        Achievement::time_limit(DODGE, "Dodge", "Within twenty seconds", Duration::from_secs(20)),
    ])
    .expect("valid test catalog")
}

fn engine_at_zero() -> (AchievementEngine, ManualClock) {
    let clock = ManualClock::new(Timestamp::from_secs(0));
    let engine = AchievementEngine::new(test_registry(), clock.clone());
    (engine, clock)
}

/// Collects notifier calls so tests can count them
fn recording_notifier(engine: &mut AchievementEngine) -> Rc<RefCell<Vec<AchievementId>>> {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);
    engine.set_notifier(move |achievement: &Achievement| sink.borrow_mut().push(achievement.id));
    fired
}

#[derive(Default, Clone)]
struct MemoryStore {
    saved: Rc<RefCell<Vec<StateSnapshot>>>,
    fail: bool,
}

impl StatePersistence for MemoryStore {
    fn persist(&mut self, snapshot: &StateSnapshot) -> Result<(), EngineError> {
        if self.fail {
            return Err(EngineError::Serialization("disk full".to_string()));
        }
        self.saved.borrow_mut().push(snapshot.clone());
        Ok(())
    }
}

#[test]
fn test_progress_completes_and_notifies_once() {
    let (mut engine, _clock) = engine_at_zero();
    let fired = recording_notifier(&mut engine);

    assert_eq!(engine.increment_progress(COUNTER, 1), Outcome::Updated);
    assert_eq!(engine.increment_progress(COUNTER, 1), Outcome::Updated);
    assert_eq!(engine.increment_progress(COUNTER, 1), Outcome::Completed);
    assert_eq!(engine.increment_progress(COUNTER, 1), Outcome::Unchanged);

    assert!(engine.is_completed(COUNTER));
    assert_eq!(*fired.borrow(), vec![COUNTER]);
    assert_eq!(engine.drain_newly_unlocked(), vec![COUNTER]);
    assert!(engine.drain_newly_unlocked().is_empty());
}

#[test]
fn test_completed_state_is_frozen() {
    let (mut engine, _clock) = engine_at_zero();
    engine.increment_progress(COUNTER, 5);
    let before = engine.get(COUNTER).cloned();

    engine.increment_progress(COUNTER, -10);
    engine.increment_progress(COUNTER, 2);

    assert_eq!(engine.get(COUNTER).cloned(), before);
}

#[test]
fn test_unknown_id_and_wrong_variant() {
    let (mut engine, _clock) = engine_at_zero();
    assert_eq!(engine.increment_progress(AchievementId(999), 1), Outcome::Missing);
    assert_eq!(engine.update_threshold(COUNTER, 3), Outcome::Mismatch);
    assert_eq!(engine.start_tracking(COUNTER, "k", "U1"), Outcome::Mismatch);
    assert_eq!(engine.begin_conditional_task(STAY, 0), Outcome::Mismatch);
    assert!(!engine.is_dirty());
    assert!(matches!(
        engine.require(AchievementId(999)),
        Err(EngineError::UnknownAchievement(999))
    ));
    assert!(engine.require(COUNTER).is_ok());
}

#[test]
fn test_threshold_follows_live_value() {
    let (mut engine, _clock) = engine_at_zero();
    assert_eq!(engine.update_threshold(CROWD, 4), Outcome::Updated);
    assert_eq!(engine.update_threshold(CROWD, 2), Outcome::Updated);
    assert_eq!(engine.update_threshold(CROWD, 2), Outcome::Unchanged);
    assert_eq!(engine.update_threshold(CROWD, 5), Outcome::Completed);
}

#[test]
fn test_conditional_threshold_needs_gate() {
    let (mut engine, _clock) = engine_at_zero();
    assert_eq!(engine.update_threshold(GATED_CROWD, 6), Outcome::Updated);
    assert!(!engine.is_completed(GATED_CROWD));
    assert_eq!(engine.set_threshold_condition(GATED_CROWD, true), Outcome::Completed);
}

#[test]
fn test_conditional_completes_on_true_only() {
    let (mut engine, _clock) = engine_at_zero();
    assert_eq!(engine.check_condition(ONE_SHOT, false), Outcome::Unchanged);
    assert_eq!(engine.check_condition(ONE_SHOT, true), Outcome::Completed);
}

#[test]
fn test_timed_progress_streak_lapses() {
    let (mut engine, clock) = engine_at_zero();
    engine.increment_progress(STREAK, 1);
    clock.set_secs(30);
    engine.increment_progress(STREAK, 1);
    clock.set_secs(200);
    assert_eq!(engine.increment_progress(STREAK, 1), Outcome::Updated);

    match engine.get(STREAK).map(|a| a.kind()) {
        Some(AchievementKind::TimedProgress(a)) => assert_eq!(a.current(), 1),
        other => panic!("unexpected kind {:?}", other),
    }

    clock.set_secs(220);
    engine.increment_progress(STREAK, 1);
    clock.set_secs(240);
    assert_eq!(engine.increment_progress(STREAK, 1), Outcome::Completed);
}

#[test]
fn test_conditional_progress_task_lifecycle() {
    let (mut engine, _clock) = engine_at_zero();

    // Not begun: nothing counts
    assert_eq!(engine.finish_conditional_task(DUTY, true), Outcome::Unchanged);

    engine.begin_conditional_task(DUTY, 0);
    assert!(engine.conditional_task_begun(DUTY));
    assert_eq!(engine.finish_conditional_task(DUTY, true), Outcome::Updated);
    assert!(!engine.conditional_task_begun(DUTY));

    engine.begin_conditional_task(DUTY, 0);
    assert_eq!(engine.finish_conditional_task(DUTY, true), Outcome::Completed);
}

#[test]
fn test_interrupt_discards_task_progress() {
    let (mut engine, _clock) = engine_at_zero();
    engine.begin_conditional_task(DUTY, 0);
    engine.finish_conditional_task(DUTY, true);
    engine.begin_conditional_task(DUTY, 0);

    assert_eq!(engine.start_over_due_to_interrupt(DUTY), Outcome::Updated);
    assert_eq!(engine.start_over_due_to_interrupt(DUTY), Outcome::Unchanged);
    assert!(!engine.conditional_task_begun(DUTY));

    match engine.get(DUTY).map(|a| a.kind()) {
        Some(AchievementKind::ConditionalProgress(a)) => assert_eq!(a.current(), 0),
        other => panic!("unexpected kind {:?}", other),
    }
}

#[test]
fn test_interrupt_after_finished_run_keeps_units() {
    let (mut engine, _clock) = engine_at_zero();
    engine.begin_conditional_task(DUTY, 0);
    engine.finish_conditional_task(DUTY, true);

    assert_eq!(engine.start_over_due_to_interrupt(DUTY), Outcome::Unchanged);
    match engine.get(DUTY).map(|a| a.kind()) {
        Some(AchievementKind::ConditionalProgress(a)) => assert_eq!(a.current(), 1),
        other => panic!("unexpected kind {:?}", other),
    }

    engine.begin_conditional_task(DUTY, 0);
    assert_eq!(engine.finish_conditional_task(DUTY, true), Outcome::Completed);
}

#[test]
fn test_interrupted_run_does_not_carry_over() {
    const TRIPLE: AchievementId = AchievementId(10);
    let registry = Registry::from_catalog(vec![Achievement::conditional_progress(
        TRIPLE,
        "Triple",
        "Three units in one run",
        3,
    )])
    .expect("valid catalog");
    let mut engine = AchievementEngine::new(registry, ManualClock::new(Timestamp::from_secs(0)));

    engine.begin_conditional_task(TRIPLE, 0);
    assert_eq!(engine.check_task_progress(TRIPLE, 2), Outcome::Updated);
    assert_eq!(engine.start_over_due_to_interrupt(TRIPLE), Outcome::Updated);

    engine.begin_conditional_task(TRIPLE, 0);
    assert_eq!(engine.check_task_progress(TRIPLE, 2), Outcome::Updated);
    match engine.get(TRIPLE).map(|a| a.kind()) {
        Some(AchievementKind::ConditionalProgress(a)) => assert_eq!(a.current(), 2),
        other => panic!("unexpected kind {:?}", other),
    }
    assert_eq!(engine.finish_conditional_task(TRIPLE, true), Outcome::Completed);
}

#[test]
fn test_delayed_begin_counts_down_on_tick() {
    let (mut engine, _clock) = engine_at_zero();
    engine.begin_conditional_task(DUTY, 2);
    assert!(!engine.conditional_task_begun(DUTY));

    engine.tick();
    assert!(!engine.conditional_task_begun(DUTY));
    engine.tick();
    assert!(engine.conditional_task_begun(DUTY));
}

#[test]
fn test_duration_accrues_between_start_and_stop() {
    let (mut engine, clock) = engine_at_zero();
    engine.start_tracking(WEAR_TIME, "0_Ball Gag", "U1");
    clock.set_secs(300);
    assert_eq!(engine.stop_tracking(WEAR_TIME, "0_Ball Gag", "U1"), Outcome::Updated);

    engine.start_tracking(WEAR_TIME, "0_Ball Gag", "U1");
    clock.set_secs(600);
    assert_eq!(engine.stop_tracking(WEAR_TIME, "0_Ball Gag", "U1"), Outcome::Completed);
}

#[test]
fn test_duration_stop_from_other_owner_ignored() {
    let (mut engine, clock) = engine_at_zero();
    engine.start_tracking(WEAR_TIME, "set-a", "U1");
    clock.set_secs(900);
    assert_eq!(engine.stop_tracking(WEAR_TIME, "set-a", "U2"), Outcome::Unchanged);
    assert!(!engine.is_completed(WEAR_TIME));
}

#[test]
fn test_cleanup_closes_stale_sessions_of_owner() {
    let (mut engine, clock) = engine_at_zero();
    engine.start_tracking(WEAR_TIME, "set-a", "U1");
    engine.start_tracking(WEAR_TIME, "set-b", "U1");
    engine.start_tracking(WEAR_TIME, "set-c", "U2");
    clock.set_secs(100);

    assert_eq!(engine.cleanup_tracking(WEAR_TIME, "U1", &["set-b"]), Outcome::Updated);

    match engine.get(WEAR_TIME).map(|a| a.kind()) {
        Some(AchievementKind::Duration(d)) => {
            assert_eq!(d.accumulated(), Duration::from_secs(100));
            assert!(!d.is_tracking("set-a"));
            assert!(d.is_tracking("set-b"));
            assert!(d.is_tracking("set-c"));
        }
        other => panic!("unexpected kind {:?}", other),
    }
}

#[test]
fn test_cleanup_with_no_valid_keys_credits_once() {
    let (mut engine, clock) = engine_at_zero();
    engine.start_tracking(WEAR_TIME, "R1", "U1");
    clock.set_secs(120);

    assert_eq!(engine.cleanup_tracking(WEAR_TIME, "U1", &[]), Outcome::Updated);
    assert_eq!(engine.cleanup_tracking(WEAR_TIME, "U1", &[]), Outcome::Unchanged);

    match engine.get(WEAR_TIME).map(|a| a.kind()) {
        Some(AchievementKind::Duration(d)) => {
            assert_eq!(d.accumulated(), Duration::from_secs(120));
            assert!(!d.is_tracking("R1"));
        }
        other => panic!("unexpected kind {:?}", other),
    }
    assert!(!engine.is_completed(WEAR_TIME));
}

#[test]
fn test_time_required_completes_on_tick() {
    let (mut engine, clock) = engine_at_zero();
    engine.start_task(STAY);
    clock.set_secs(29);
    assert!(engine.tick().is_empty());
    assert_eq!(engine.check_completion(STAY), Outcome::Unchanged);
    assert!(engine.timed_task_running(STAY));

    clock.set_secs(30);
    assert_eq!(engine.tick(), vec![STAY]);
    assert!(engine.is_completed(STAY));
}

#[test]
fn test_time_required_interrupt_resets_clock() {
    let (mut engine, clock) = engine_at_zero();
    engine.start_task(STAY);
    clock.set_secs(20);
    assert_eq!(engine.interrupt_task(STAY), Outcome::Updated);
    engine.start_task(STAY);
    clock.set_secs(40);
    assert_eq!(engine.check_completion(STAY), Outcome::Unchanged);
    clock.set_secs(50);
    assert_eq!(engine.check_completion(STAY), Outcome::Completed);
}

#[test]
fn test_time_limit_expiry_sequence() {
    let (mut engine, clock) = engine_at_zero();
    engine.start_task(DODGE);

    clock.set_secs(15);
    assert!(engine.tick().is_empty());
    assert!(engine.timed_task_running(DODGE));

    clock.set_secs(25);
    assert!(engine.tick().is_empty());
    assert!(!engine.timed_task_running(DODGE));
    assert_eq!(engine.check_completion(DODGE), Outcome::Unchanged);

    engine.start_task(DODGE);
    clock.set_secs(45);
    assert_eq!(engine.check_completion(DODGE), Outcome::Completed);
}

#[test]
fn test_completion_writes_through() {
    let (mut engine, _clock) = engine_at_zero();
    let store = MemoryStore::default();
    engine.set_persistence(store.clone());

    engine.increment_progress(COUNTER, 1);
    assert!(store.saved.borrow().is_empty());
    assert!(engine.is_dirty());

    engine.increment_progress(COUNTER, 2);
    assert_eq!(store.saved.borrow().len(), 1);
    assert!(!engine.is_dirty());

    let saved = store.saved.borrow();
    let entry = saved[0]
        .achievements
        .iter()
        .find(|a| a.id == COUNTER)
        .expect("counter saved");
    assert!(entry.completed);
}

#[test]
fn test_persist_failure_keeps_completion() {
    let (mut engine, _clock) = engine_at_zero();
    engine.set_persistence(MemoryStore {
        fail: true,
        ..MemoryStore::default()
    });

    assert_eq!(engine.check_condition(ONE_SHOT, true), Outcome::Completed);
    assert!(engine.is_completed(ONE_SHOT));
    assert!(engine.is_dirty());
    assert!(engine.save().is_err());
}

#[test]
fn test_export_import_restores_state() {
    let (mut engine, clock) = engine_at_zero();
    engine.increment_progress(COUNTER, 2);
    engine.check_condition(ONE_SHOT, true);
    engine.start_tracking(WEAR_TIME, "0_Ball Gag", "U1");
    engine.begin_conditional_task(DUTY, 3);
    let snapshot = engine.export_state();

    let (mut restored, _) = engine_at_zero();
    let report = restored.import_state(&snapshot);

    assert_eq!(report.applied, 9);
    assert!(report.skipped.is_empty());
    assert_eq!(restored.export_state(), snapshot);
    assert!(restored.is_completed(ONE_SHOT));
    assert!(restored.drain_newly_unlocked().is_empty());

    // Sessions survive the reload and keep accruing from their original start
    clock.set_secs(600);
    let restored_clock = ManualClock::new(Timestamp::from_secs(600));
    let mut later = AchievementEngine::new(test_registry(), restored_clock);
    later.import_state(&snapshot);
    assert_eq!(later.stop_tracking(WEAR_TIME, "0_Ball Gag", "U1"), Outcome::Completed);
}

#[test]
fn test_import_skips_unknown_and_mismatched() {
    let (mut engine, _clock) = engine_at_zero();
    engine.increment_progress(COUNTER, 1);

    let snapshot = StateSnapshot {
        version: 1,
        achievements: vec![
            SavedAchievement {
                id: AchievementId(77),
                completed: true,
                state: SavedState::Conditional,
            },
            SavedAchievement {
                id: CROWD,
                completed: true,
                state: SavedState::Progress { current: 9 },
            },
        ],
    };

    let report = engine.import_state(&snapshot);
    assert_eq!(report.applied, 0);
    assert_eq!(
        report.skipped,
        vec![
            (AchievementId(77), SkipReason::UnknownId),
            (
                CROWD,
                SkipReason::KindMismatch {
                    expected: "Threshold",
                    found: "Progress"
                }
            ),
        ]
    );
    // Import replaces state: the counter is back to fresh
    assert_eq!(engine.export_state(), {
        let (fresh, _) = engine_at_zero();
        fresh.export_state()
    });
}

#[test]
fn test_reset_clears_everything() {
    let (mut engine, _clock) = engine_at_zero();
    engine.check_condition(ONE_SHOT, true);
    engine.increment_progress(COUNTER, 1);
    engine.reset();

    assert!(engine.unlocked_achievements().is_empty());
    assert!(engine.peek_newly_unlocked().is_empty());
    assert_eq!(engine.locked_achievements().len(), 9);
}

#[test]
fn test_unlock_percentage() {
    let (mut engine, _clock) = engine_at_zero();
    assert_eq!(engine.unlock_percentage(), 0.0);
    engine.check_condition(ONE_SHOT, true);
    engine.update_threshold(CROWD, 5);
    engine.increment_progress(COUNTER, 3);
    assert!((engine.unlock_percentage() - 3.0 / 9.0).abs() < f32::EPSILON);
}

#[test]
fn test_catalog_engine_builds() {
    let engine = AchievementEngine::with_catalog(SystemClock).expect("catalog is valid");
    assert_eq!(engine.achievements().count(), all_achievements().len());
    assert!(engine.get(ids::BONDODGE).is_some());
}

proptest! {
    #[test]
    fn prop_completion_is_monotonic(amounts in prop::collection::vec(-5i64..10, 0..40)) {
        let (mut engine, _clock) = engine_at_zero();
        let fired = recording_notifier(&mut engine);
        let mut seen_complete = false;

        for amount in amounts {
            engine.increment_progress(COUNTER, amount);
            let now_complete = engine.is_completed(COUNTER);
            prop_assert!(!(seen_complete && !now_complete));
            seen_complete = now_complete;
        }

        let expected: usize = if seen_complete { 1 } else { 0 };
        prop_assert_eq!(fired.borrow().len(), expected);
    }

    #[test]
    fn prop_repeated_start_keeps_first_timestamp(
        starts in prop::collection::vec(0u64..1000, 1..10)
    ) {
        let (mut engine, clock) = engine_at_zero();
        let mut sorted = starts.clone();
        sorted.sort_unstable();

        for secs in &sorted {
            clock.set_secs(*secs);
            engine.start_tracking(WEAR_TIME, "key", "U1");
            engine.start_task(STAY);
        }

        match engine.get(WEAR_TIME).map(|a| a.kind()) {
            Some(AchievementKind::Duration(d)) => {
                let session = d.sessions().get("key").expect("session open");
                prop_assert_eq!(session.started_at, Timestamp::from_secs(sorted[0]));
            }
            other => prop_assert!(false, "unexpected kind {:?}", other),
        }
    }
}
