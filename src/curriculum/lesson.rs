//! Lessons, difficulty levels and modules

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Difficulty level of a lesson, ordered from easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Numeric level, 1 for beginner
    pub fn level(&self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" | "1" => Ok(Self::Beginner),
            "intermediate" | "2" => Ok(Self::Intermediate),
            "advanced" | "3" => Ok(Self::Advanced),
            _ => Err(format!("Unknown difficulty: {s}")),
        }
    }
}

fn default_duration() -> u32 {
    15
}

fn default_points() -> u32 {
    100
}

/// A single lesson in the curriculum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub topic: String,
    pub difficulty: Difficulty,
    #[serde(default = "default_duration")]
    pub estimated_duration_minutes: u32,
    /// Lesson ids that should be learned first, in declared order
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_points")]
    pub gamification_points: u32,
}

impl Lesson {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        topic: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            topic: topic.into(),
            difficulty,
            estimated_duration_minutes: default_duration(),
            prerequisites: Vec::new(),
            learning_outcomes: Vec::new(),
            tags: Vec::new(),
            gamification_points: default_points(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.estimated_duration_minutes = minutes;
        self
    }

    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_outcomes<I, S>(mut self, outcomes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.learning_outcomes = outcomes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.gamification_points = points;
        self
    }
}

/// A named group of lessons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub lessons: Vec<Lesson>,
}

impl LessonModule {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            lessons: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
        assert_eq!(Difficulty::Advanced.level(), 3);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!("ADVANCED".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_lesson_json_shape() {
        let lesson = Lesson::new("python_variables", "Variables", "Python", Difficulty::Beginner)
            .with_description("Store information")
            .with_duration(20)
            .with_prerequisites(["python_hello"])
            .with_outcomes(["Create variables"])
            .with_points(150);

        assert_eq!(
            serde_json::to_value(&lesson).unwrap(),
            json!({
                "id": "python_variables",
                "title": "Variables",
                "description": "Store information",
                "topic": "Python",
                "difficulty": "BEGINNER",
                "estimated_duration_minutes": 20,
                "prerequisites": ["python_hello"],
                "learning_outcomes": ["Create variables"],
                "tags": [],
                "gamification_points": 150,
            })
        );
    }

    #[test]
    fn test_lesson_defaults() {
        let lesson = Lesson::new("a", "A", "Python", Difficulty::Beginner);
        assert_eq!(lesson.estimated_duration_minutes, 15);
        assert_eq!(lesson.gamification_points, 100);
        assert!(lesson.prerequisites.is_empty());
    }
}
