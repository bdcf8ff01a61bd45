//! Export/import contract for the persistence adapter
//!
//! A snapshot holds only mutable state. Titles, descriptions and goals come
//! from the catalog at startup and are never read back from disk.

use crate::achievement::{Achievement, AchievementId, AchievementKind};
use crate::clock::Timestamp;
use crate::duration::Session;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct StateSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub achievements: Vec<SavedAchievement>,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            achievements: Vec::new(),
        }
    }
}

#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct SavedAchievement {
    pub id: AchievementId,
    #[serde(default)]
    pub completed: bool,
    pub state: SavedState,
}

/// Mutable fields of each variant
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
#[serde(tag = "type")]
pub enum SavedState {
    Progress {
        current: i64,
    },
    Threshold {
        current: i64,
    },
    Conditional,
    ConditionalProgress {
        current: i64,
        task_begun: bool,
        #[serde(default)]
        pending_begin: Option<u32>,
    },
    ConditionalThreshold {
        current: i64,
        condition_met: bool,
    },
    Duration {
        accumulated_ms: u64,
        #[serde(default)]
        sessions: BTreeMap<String, Session>,
    },
    TimedProgress {
        current: i64,
        last_increment: Option<Timestamp>,
    },
    TimeRequiredConditional {
        started_at: Option<Timestamp>,
    },
    TimeLimitConditional {
        started_at: Option<Timestamp>,
    },
}

impl SavedState {
    pub fn name(&self) -> &'static str {
        match self {
            SavedState::Progress { .. } => "Progress",
            SavedState::Threshold { .. } => "Threshold",
            SavedState::Conditional => "Conditional",
            SavedState::ConditionalProgress { .. } => "ConditionalProgress",
            SavedState::ConditionalThreshold { .. } => "ConditionalThreshold",
            SavedState::Duration { .. } => "Duration",
            SavedState::TimedProgress { .. } => "TimedProgress",
            SavedState::TimeRequiredConditional { .. } => "TimeRequiredConditional",
            SavedState::TimeLimitConditional { .. } => "TimeLimitConditional",
        }
    }
}

/// Why a snapshot entry was not applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnknownId,
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnknownId => write!(f, "not in the catalog"),
            SkipReason::KindMismatch { expected, found } => {
                write!(f, "catalog has {}, save has {}", expected, found)
            }
        }
    }
}

/// Result of applying a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub applied: usize,
    pub skipped: Vec<(AchievementId, SkipReason)>,
}

pub(crate) fn capture(achievement: &Achievement) -> SavedAchievement {
    let state = match achievement.kind() {
        AchievementKind::Progress(a) => SavedState::Progress { current: a.current },
        AchievementKind::Threshold(a) => SavedState::Threshold { current: a.current },
        AchievementKind::Conditional(_) => SavedState::Conditional,
        AchievementKind::ConditionalProgress(a) => SavedState::ConditionalProgress {
            current: a.current,
            task_begun: a.task_begun,
            pending_begin: a.pending_begin,
        },
        AchievementKind::ConditionalThreshold(a) => SavedState::ConditionalThreshold {
            current: a.current,
            condition_met: a.condition_met,
        },
        AchievementKind::Duration(a) => SavedState::Duration {
            accumulated_ms: u64::try_from(a.accumulated.as_millis()).unwrap_or(u64::MAX),
            sessions: a.sessions.clone(),
        },
        AchievementKind::TimedProgress(a) => SavedState::TimedProgress {
            current: a.current,
            last_increment: a.last_increment,
        },
        AchievementKind::TimeRequired(a) => SavedState::TimeRequiredConditional {
            started_at: a.started_at,
        },
        AchievementKind::TimeLimit(a) => SavedState::TimeLimitConditional {
            started_at: a.started_at,
        },
    };

    SavedAchievement {
        id: achievement.id,
        completed: achievement.is_completed(),
        state,
    }
}

/// Overwrite an achievement's mutable state. Fails without touching it when
/// the saved variant does not match the catalog.
pub(crate) fn apply(
    achievement: &mut Achievement,
    saved: &SavedAchievement,
) -> Result<(), SkipReason> {
    let (completed, kind) = achievement.parts_mut();

    match (kind, &saved.state) {
        (AchievementKind::Progress(a), SavedState::Progress { current }) => {
            a.current = *current;
        }
        (AchievementKind::Threshold(a), SavedState::Threshold { current }) => {
            a.current = *current;
        }
        (AchievementKind::Conditional(_), SavedState::Conditional) => {}
        (
            AchievementKind::ConditionalProgress(a),
            SavedState::ConditionalProgress {
                current,
                task_begun,
                pending_begin,
            },
        ) => {
            a.current = *current;
            a.task_begun = *task_begun;
            a.pending_begin = *pending_begin;
        }
        (
            AchievementKind::ConditionalThreshold(a),
            SavedState::ConditionalThreshold {
                current,
                condition_met,
            },
        ) => {
            a.current = *current;
            a.condition_met = *condition_met;
        }
        (
            AchievementKind::Duration(a),
            SavedState::Duration {
                accumulated_ms,
                sessions,
            },
        ) => {
            a.accumulated = Duration::from_millis(*accumulated_ms);
            a.sessions = sessions.clone();
        }
        (
            AchievementKind::TimedProgress(a),
            SavedState::TimedProgress {
                current,
                last_increment,
            },
        ) => {
            a.current = *current;
            a.last_increment = *last_increment;
        }
        (AchievementKind::TimeRequired(a), SavedState::TimeRequiredConditional { started_at }) => {
            a.started_at = *started_at;
        }
        (AchievementKind::TimeLimit(a), SavedState::TimeLimitConditional { started_at }) => {
            a.started_at = *started_at;
        }
        (kind, state) => {
            return Err(SkipReason::KindMismatch {
                expected: kind.name(),
                found: state.name(),
            });
        }
    }

    *completed = saved.completed;
    Ok(())
}
