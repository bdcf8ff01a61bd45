//! Wall-clock accrual over concurrently open sessions
//!
//! A duration achievement watches many activities at once, one session per
//! tracking key (a gag layer, a restraint set, a pattern, a partner). Each
//! closed session credits its elapsed time to one shared total.

use crate::achievement::{DurationTracked, Transition};
use crate::clock::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// An open tracking session
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode,
)]
pub struct Session {
    pub owner_uid: String,
    pub started_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationAchievement {
    pub(crate) goal: Duration,
    pub(crate) accumulated: Duration,
    /// Keyed by tracking key; at most one open session per key
    pub(crate) sessions: BTreeMap<String, Session>,
}

impl DurationAchievement {
    pub fn new(goal: Duration) -> Self {
        Self {
            goal,
            accumulated: Duration::ZERO,
            sessions: BTreeMap::new(),
        }
    }

    pub fn goal(&self) -> Duration {
        self.goal
    }

    /// Time credited by closed sessions only
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn sessions(&self) -> &BTreeMap<String, Session> {
        &self.sessions
    }

    pub fn is_tracking(&self, key: &str) -> bool {
        self.sessions.contains_key(key)
    }

    fn close(&mut self, key: &str, now: Timestamp) -> Option<Duration> {
        let session = self.sessions.remove(key)?;
        let elapsed = now.elapsed_since(session.started_at);
        self.accumulated = self.accumulated.saturating_add(elapsed);
        Some(elapsed)
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.sessions.clear();
    }
}

impl DurationTracked for DurationAchievement {
    fn start_tracking(&mut self, key: &str, owner: &str, now: Timestamp) -> Transition {
        if self.sessions.contains_key(key) {
            return Transition::Unchanged;
        }
        self.sessions.insert(
            key.to_string(),
            Session {
                owner_uid: owner.to_string(),
                started_at: now,
            },
        );
        Transition::Updated
    }

    fn stop_tracking(&mut self, key: &str, owner: &str, now: Timestamp) -> Transition {
        match self.sessions.get(key) {
            Some(session) if session.owner_uid == owner => {}
            Some(session) => {
                log::debug!(
                    "Ignoring stop for '{}' from {}, session belongs to {}",
                    key,
                    owner,
                    session.owner_uid
                );
                return Transition::Unchanged;
            }
            None => return Transition::Unchanged,
        }
        self.close(key, now);
        Transition::goal_or_updated(self.accumulated >= self.goal)
    }

    fn cleanup_tracking(
        &mut self,
        owner: &str,
        valid_keys: &[&str],
        now: Timestamp,
    ) -> Transition {
        let stale: Vec<String> = self
            .sessions
            .iter()
            .filter(|(key, session)| {
                session.owner_uid == owner && !valid_keys.contains(&key.as_str())
            })
            .map(|(key, _)| key.clone())
            .collect();

        if stale.is_empty() {
            return Transition::Unchanged;
        }

        for key in &stale {
            if let Some(elapsed) = self.close(key, now) {
                log::debug!(
                    "Reconciled stale session '{}' for {}, credited {:?}",
                    key,
                    owner,
                    elapsed
                );
            }
        }
        Transition::goal_or_updated(self.accumulated >= self.goal)
    }
}
