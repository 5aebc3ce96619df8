//! Achievement catalog - lookup and registration of achievement definitions
//!
//! The catalog only describes achievements. Awarding one to a student is done
//! on that student's [`ProgressLedger`](crate::progress::ProgressLedger).

use indexmap::IndexMap;

use super::definitions::{Achievement, AchievementCategory, STANDARD_ACHIEVEMENTS};

/// Table of achievement definitions keyed by id, in registration order
#[derive(Debug, Clone)]
pub struct AchievementCatalog {
    achievements: IndexMap<String, Achievement>,
}

impl Default for AchievementCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementCatalog {
    /// Create a catalog seeded with the standard achievements
    pub fn new() -> Self {
        let achievements = STANDARD_ACHIEVEMENTS
            .iter()
            .map(|a| (a.id.to_string(), a.clone()))
            .collect();
        Self { achievements }
    }

    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.get(id)
    }

    /// Every achievement, in catalog order
    pub fn all(&self) -> Vec<&Achievement> {
        self.achievements.values().collect()
    }

    pub fn by_category(&self, category: AchievementCategory) -> Vec<&Achievement> {
        self.achievements
            .values()
            .filter(|a| a.category == category)
            .collect()
    }

    /// Insert an achievement, replacing any existing one with the same id.
    ///
    /// A replaced entry keeps its position in the catalog.
    pub fn register(&mut self, achievement: Achievement) -> &Achievement {
        let id = achievement.id.to_string();
        let (index, previous) = self.achievements.insert_full(id, achievement);
        if previous.is_some() {
            tracing::debug!(
                achievement = %self.achievements[index].id,
                "replaced achievement definition"
            );
        }
        &self.achievements[index]
    }

    /// Display line for an achievement
    pub fn display(&self, achievement: &Achievement) -> String {
        achievement.to_string()
    }

    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }

    /// Points available from every achievement in the catalog
    pub fn total_points(&self) -> u64 {
        self.achievements.values().map(|a| u64::from(a.points)).sum()
    }
}
