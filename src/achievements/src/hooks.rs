//! Seams to the outside world: completion rewards and persistence

use crate::achievement::Achievement;
use crate::snapshot::StateSnapshot;
use error::EngineError;

/// Receives exactly one call per achievement, when it completes
pub trait CompletionNotifier {
    fn on_achievement_completed(&mut self, achievement: &Achievement);
}

impl<F> CompletionNotifier for F
where
    F: FnMut(&Achievement),
{
    fn on_achievement_completed(&mut self, achievement: &Achievement) {
        self(achievement)
    }
}

/// Logs unlocks at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl CompletionNotifier for LogNotifier {
    fn on_achievement_completed(&mut self, achievement: &Achievement) {
        log::info!(
            "Achievement unlocked: {} ({}) - {}",
            achievement.title,
            achievement.id,
            achievement.description
        );
    }
}

/// Write-through target for engine state
pub trait StatePersistence {
    fn persist(&mut self, snapshot: &StateSnapshot) -> Result<(), EngineError>;
}
