//! Data models for student progress
//!
//! These structures are what a ledger holds in memory and what its export
//! file contains.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Completion percentage at which a lesson counts as completed
pub const COMPLETE_PERCENTAGE: u32 = 100;

/// Progress on a single lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub lesson_id: String,
    pub lesson_title: String,
    pub started_at: DateTime<Local>,
    pub completed_at: Option<DateTime<Local>>,
    /// 0..=100
    pub completion_percentage: u32,
    pub quiz_score: Option<u32>,
    /// Challenge ids, first completion order, no duplicates
    pub challenges_completed: Vec<String>,
    pub time_spent_minutes: u64,
}

impl LessonProgress {
    pub fn new(lesson_id: impl Into<String>, lesson_title: impl Into<String>) -> Self {
        Self {
            lesson_id: lesson_id.into(),
            lesson_title: lesson_title.into(),
            started_at: Local::now(),
            completed_at: None,
            completion_percentage: 0,
            quiz_score: None,
            challenges_completed: Vec::new(),
            time_spent_minutes: 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completion_percentage >= COMPLETE_PERCENTAGE
    }
}

/// Aggregate view of a ledger, as returned by `ProgressLedger::summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub student_name: String,
    pub total_lessons_started: usize,
    pub total_lessons_completed: usize,
    pub total_points: i64,
    pub total_time_minutes: u64,
    /// Mean of every recorded quiz score, `None` when nothing was scored
    pub average_quiz_score: Option<f64>,
    pub achievements_earned: usize,
    pub achievements: Vec<String>,
}
