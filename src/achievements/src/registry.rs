//! Ordered id -> achievement mapping

use crate::achievement::{Achievement, AchievementId};
use error::EngineError;
use std::collections::HashMap;

/// Owns every achievement. Iteration follows authoring order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Achievement>,
    index: HashMap<AchievementId, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a catalog, rejecting duplicate ids
    pub fn from_catalog(
        achievements: impl IntoIterator<Item = Achievement>,
    ) -> Result<Self, EngineError> {
        let mut registry = Self::new();
        for achievement in achievements {
            registry.insert(achievement)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, achievement: Achievement) -> Result<(), EngineError> {
        if self.index.contains_key(&achievement.id) {
            return Err(EngineError::DuplicateAchievement(achievement.id.0));
        }
        self.index.insert(achievement.id, self.entries.len());
        self.entries.push(achievement);
        Ok(())
    }

    pub fn get(&self, id: AchievementId) -> Option<&Achievement> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, id: AchievementId) -> Option<&mut Achievement> {
        match self.index.get(&id) {
            Some(&i) => self.entries.get_mut(i),
            None => None,
        }
    }

    pub fn contains(&self, id: AchievementId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Achievement> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Registry::from_catalog(vec![
            Achievement::progress(AchievementId(1), "A", "first", 1),
            Achievement::progress(AchievementId(1), "B", "clash", 1),
        ]);
        assert!(matches!(result, Err(EngineError::DuplicateAchievement(1))));
    }

    #[test]
    fn test_iteration_keeps_authoring_order() {
        let registry = Registry::from_catalog(vec![
            Achievement::progress(AchievementId(30), "C", "", 1),
            Achievement::progress(AchievementId(10), "A", "", 1),
            Achievement::progress(AchievementId(20), "B", "", 1),
        ])
        .expect("valid catalog");

        let order: Vec<u32> = registry.iter().map(|a| a.id.0).collect();
        assert_eq!(order, vec![30, 10, 20]);
        assert_eq!(registry.get(AchievementId(10)).map(|a| a.title.as_str()), Some("A"));
        assert!(registry.get(AchievementId(99)).is_none());
    }
}
