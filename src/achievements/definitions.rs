//! Achievement definitions and metadata
//!
//! The standard achievements are defined here; custom ones can be added to a
//! catalog at runtime.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of milestone an achievement rewards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    /// Complete a number of lessons
    Completion,
    /// Finish a lesson faster than estimated
    Speed,
    /// Perfect quiz score
    #[serde(rename = "perfect")]
    PerfectScore,
    /// Complete every challenge in a module
    ChallengeMaster,
    /// Consecutive lesson completions
    Streak,
    /// Lessons across several topics
    Explorer,
    /// Many code challenges completed
    #[serde(rename = "code_warrior")]
    CodeVolume,
    /// High average quiz score
    #[serde(rename = "quiz_ace")]
    QuizAverage,
}

impl AchievementCategory {
    /// Stable string id, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completion => "completion",
            Self::Speed => "speed",
            Self::PerfectScore => "perfect",
            Self::ChallengeMaster => "challenge_master",
            Self::Streak => "streak",
            Self::Explorer => "explorer",
            Self::CodeVolume => "code_warrior",
            Self::QuizAverage => "quiz_ace",
        }
    }

    /// Parse from the string id (also accepts the label in kebab form)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "completion" => Some(Self::Completion),
            "speed" => Some(Self::Speed),
            "perfect" | "perfect_score" => Some(Self::PerfectScore),
            "challenge_master" => Some(Self::ChallengeMaster),
            "streak" => Some(Self::Streak),
            "explorer" => Some(Self::Explorer),
            "code_warrior" | "code_volume" => Some(Self::CodeVolume),
            "quiz_ace" | "quiz_average" => Some(Self::QuizAverage),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Completion => "Completion",
            Self::Speed => "Speed",
            Self::PerfectScore => "Perfect Score",
            Self::ChallengeMaster => "Challenge Master",
            Self::Streak => "Streaks",
            Self::Explorer => "Explorer",
            Self::CodeVolume => "Code Volume",
            Self::QuizAverage => "Quiz Average",
        }
    }

    pub fn all() -> &'static [AchievementCategory] {
        &[
            Self::Completion,
            Self::Speed,
            Self::PerfectScore,
            Self::ChallengeMaster,
            Self::Streak,
            Self::Explorer,
            Self::CodeVolume,
            Self::QuizAverage,
        ]
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    #[serde(rename = "type")]
    pub category: AchievementCategory,
    pub icon: Cow<'static, str>,
    pub points: u32,
    /// Human-readable unlock condition
    pub criteria: Cow<'static, str>,
}

impl Achievement {
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        category: AchievementCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: Cow::Borrowed(""),
            category,
            icon: Cow::Borrowed("⭐"),
            points: 0,
            criteria: Cow::Borrowed(""),
        }
    }

    pub fn with_description(mut self, description: impl Into<Cow<'static, str>>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<Cow<'static, str>>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn with_criteria(mut self, criteria: impl Into<Cow<'static, str>>) -> Self {
        self.criteria = criteria.into();
        self
    }
}

/// `<icon> <name> - <description> (+<points> points)`
impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} (+{} points)",
            self.icon, self.name, self.description, self.points
        )
    }
}

const fn standard(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: AchievementCategory,
    icon: &'static str,
    points: u32,
    criteria: &'static str,
) -> Achievement {
    Achievement {
        id: Cow::Borrowed(id),
        name: Cow::Borrowed(name),
        description: Cow::Borrowed(description),
        category,
        icon: Cow::Borrowed(icon),
        points,
        criteria: Cow::Borrowed(criteria),
    }
}

/// The achievements every catalog starts with
pub static STANDARD_ACHIEVEMENTS: &[Achievement] = &[
    // === COMPLETION ===
    standard(
        "first_lesson",
        "First Steps",
        "Complete your first lesson!",
        AchievementCategory::Completion,
        "🎓",
        50,
        "Complete 1 lesson",
    ),
    // === STREAK ===
    standard(
        "lesson_streak_5",
        "On a Roll!",
        "Complete 5 lessons in a row!",
        AchievementCategory::Streak,
        "🔥",
        250,
        "Complete 5 consecutive lessons",
    ),
    standard(
        "lesson_streak_10",
        "Unstoppable!",
        "Complete 10 lessons in a row!",
        AchievementCategory::Streak,
        "⚡",
        500,
        "Complete 10 consecutive lessons",
    ),
    // === QUIZ ===
    standard(
        "perfect_quiz",
        "Quiz Master",
        "Get a perfect score on a quiz!",
        AchievementCategory::PerfectScore,
        "100️⃣",
        150,
        "Score 100% on a quiz",
    ),
    // === CHALLENGES ===
    standard(
        "code_warrior",
        "Code Warrior",
        "Complete 5 code challenges!",
        AchievementCategory::CodeVolume,
        "⚔️",
        300,
        "Complete 5 code challenges",
    ),
    // === EXPLORATION ===
    standard(
        "explorer",
        "Topic Explorer",
        "Explore lessons in 3 different topics!",
        AchievementCategory::Explorer,
        "🗺️",
        200,
        "Learn 3 different topics",
    ),
    // === SPEED ===
    standard(
        "speed_learner",
        "Speed Learner",
        "Complete a lesson in half the estimated time!",
        AchievementCategory::Speed,
        "⏱️",
        100,
        "Complete lesson faster than estimate",
    ),
    standard(
        "all_challenges",
        "Challenge Master",
        "Complete all challenges in a module!",
        AchievementCategory::ChallengeMaster,
        "🏆",
        400,
        "Complete all module challenges",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ids_are_unique() {
        let mut ids: Vec<_> = STANDARD_ACHIEVEMENTS.iter().map(|a| a.id.as_ref()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), STANDARD_ACHIEVEMENTS.len());
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_display_format() {
        let a = &STANDARD_ACHIEVEMENTS[0];
        assert_eq!(
            a.to_string(),
            "🎓 First Steps - Complete your first lesson! (+50 points)"
        );
    }

    #[test]
    fn test_category_roundtrip() {
        for category in AchievementCategory::all() {
            assert_eq!(AchievementCategory::from_str(category.as_str()), Some(*category));
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        assert_eq!(
            AchievementCategory::from_str("perfect-score"),
            Some(AchievementCategory::PerfectScore)
        );
    }

    #[test]
    fn test_achievement_json_keys() {
        let value = serde_json::to_value(&STANDARD_ACHIEVEMENTS[3]).unwrap();
        assert_eq!(value["type"], "perfect");
        assert_eq!(value["criteria"], "Score 100% on a quiz");
        assert_eq!(value["points"], 150);
    }
}
