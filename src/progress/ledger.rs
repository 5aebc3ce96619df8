//! Per-student progress ledger

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::models::{COMPLETE_PERCENTAGE, LessonProgress, ProgressSummary};
use crate::export::{self, ExportError};

/// Error type for progress operations
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("Lesson {0} not started yet")]
    LessonNotStarted(String),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Tracks one student's lessons, points and earned achievements
#[derive(Debug, Clone)]
pub struct ProgressLedger {
    student_name: String,
    created_at: DateTime<Local>,
    lesson_progress: IndexMap<String, LessonProgress>,
    total_points: i64,
    achievements: Vec<String>,
}

impl ProgressLedger {
    pub fn new(student_name: impl Into<String>) -> Self {
        Self {
            student_name: student_name.into(),
            created_at: Local::now(),
            lesson_progress: IndexMap::new(),
            total_points: 0,
            achievements: Vec::new(),
        }
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn total_points(&self) -> i64 {
        self.total_points
    }

    pub fn achievements(&self) -> &[String] {
        &self.achievements
    }

    pub fn lesson(&self, lesson_id: &str) -> Option<&LessonProgress> {
        self.lesson_progress.get(lesson_id)
    }

    pub fn lessons(&self) -> impl Iterator<Item = &LessonProgress> {
        self.lesson_progress.values()
    }

    /// Start (or restart) a lesson. Restarting discards earlier progress.
    pub fn start_lesson(
        &mut self,
        lesson_id: impl Into<String>,
        lesson_title: impl Into<String>,
    ) -> &LessonProgress {
        let progress = LessonProgress::new(lesson_id, lesson_title);
        let id = progress.lesson_id.clone();
        let (index, previous) = self.lesson_progress.insert_full(id, progress);
        if previous.is_some() {
            tracing::debug!(
                student = %self.student_name,
                lesson = %self.lesson_progress[index].lesson_id,
                "restarted lesson"
            );
        }
        &self.lesson_progress[index]
    }

    /// Record completion of a started lesson.
    ///
    /// A `None` score keeps whatever score was recorded before.
    pub fn complete_lesson(
        &mut self,
        lesson_id: &str,
        completion_percentage: u32,
        quiz_score: Option<u32>,
    ) -> Result<(), ProgressError> {
        let progress = self
            .lesson_progress
            .get_mut(lesson_id)
            .ok_or_else(|| ProgressError::LessonNotStarted(lesson_id.to_string()))?;

        progress.completion_percentage = completion_percentage.min(COMPLETE_PERCENTAGE);
        progress.completed_at = Some(Local::now());
        if let Some(score) = quiz_score {
            progress.quiz_score = Some(score);
        }
        tracing::debug!(
            student = %self.student_name,
            lesson = lesson_id,
            percentage = progress.completion_percentage,
            score = ?progress.quiz_score,
            "completed lesson"
        );
        Ok(())
    }

    pub fn complete_lesson_fully(&mut self, lesson_id: &str) -> Result<(), ProgressError> {
        self.complete_lesson(lesson_id, COMPLETE_PERCENTAGE, None)
    }

    /// Add time spent on a lesson; ignored for lessons that were never started
    pub fn add_time(&mut self, lesson_id: &str, minutes: u32) {
        match self.lesson_progress.get_mut(lesson_id) {
            Some(progress) => progress.time_spent_minutes += u64::from(minutes),
            None => tracing::debug!(lesson = lesson_id, "time for unstarted lesson ignored"),
        }
    }

    /// Record a completed challenge once; ignored for lessons that were never started
    pub fn add_challenge_completion(&mut self, lesson_id: &str, challenge_id: &str) {
        let Some(progress) = self.lesson_progress.get_mut(lesson_id) else {
            tracing::debug!(lesson = lesson_id, "challenge for unstarted lesson ignored");
            return;
        };
        if !progress.challenges_completed.iter().any(|c| c == challenge_id) {
            progress.challenges_completed.push(challenge_id.to_string());
        }
    }

    /// Add (or with a negative amount, remove) points; the total saturates
    pub fn add_points(&mut self, amount: i64, reason: &str) {
        self.total_points = self.total_points.saturating_add(amount);
        tracing::info!(
            student = %self.student_name,
            amount,
            total = self.total_points,
            reason,
            "points added"
        );
    }

    /// Returns false if the achievement was already earned
    pub fn award_achievement(&mut self, achievement_id: &str) -> bool {
        if self.achievements.iter().any(|a| a == achievement_id) {
            return false;
        }
        self.achievements.push(achievement_id.to_string());
        tracing::info!(
            student = %self.student_name,
            achievement = achievement_id,
            "achievement awarded"
        );
        true
    }

    pub fn summary(&self) -> ProgressSummary {
        let scores: Vec<u32> = self
            .lesson_progress
            .values()
            .filter_map(|p| p.quiz_score)
            .collect();
        let average_quiz_score = if scores.is_empty() {
            None
        } else {
            let total: u64 = scores.iter().map(|&s| u64::from(s)).sum();
            Some(total as f64 / scores.len() as f64)
        };

        ProgressSummary {
            student_name: self.student_name.clone(),
            total_lessons_started: self.lesson_progress.len(),
            total_lessons_completed: self
                .lesson_progress
                .values()
                .filter(|p| p.is_completed())
                .count(),
            total_points: self.total_points,
            total_time_minutes: self
                .lesson_progress
                .values()
                .map(|p| p.time_spent_minutes)
                .sum(),
            average_quiz_score,
            achievements_earned: self.achievements.len(),
            achievements: self.achievements.clone(),
        }
    }

    /// The ledger in its export file layout
    pub fn to_file(&self) -> ProgressFile {
        ProgressFile {
            student_name: self.student_name.clone(),
            created_at: self.created_at,
            summary: self.summary(),
            lesson_progress: self.lesson_progress.clone(),
        }
    }

    /// Write the ledger as JSON and return the absolute path written
    pub fn export(&self, path: &Path) -> Result<PathBuf, ProgressError> {
        let written = export::write_json(path, &self.to_file())?;
        tracing::info!(
            student = %self.student_name,
            lessons = self.lesson_progress.len(),
            path = %written.display(),
            "exported progress"
        );
        Ok(written)
    }

    /// Restore a ledger from an export file
    pub fn load(path: &Path) -> Result<Self, ProgressError> {
        let file: ProgressFile = export::read_json(path)?;
        Ok(Self::from_file(file))
    }

    pub fn from_file(file: ProgressFile) -> Self {
        Self {
            student_name: file.student_name,
            created_at: file.created_at,
            lesson_progress: file.lesson_progress,
            total_points: file.summary.total_points,
            achievements: file.summary.achievements,
        }
    }
}

/// Export layout of a ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressFile {
    pub student_name: String,
    pub created_at: DateTime<Local>,
    pub summary: ProgressSummary,
    pub lesson_progress: IndexMap<String, LessonProgress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_scenario() {
        let mut ledger = ProgressLedger::new("Emma");
        ledger.start_lesson("u1", "Intro");
        ledger.complete_lesson("u1", 100, Some(95)).unwrap();
        ledger.add_time("u1", 18);
        ledger.add_challenge_completion("u1", "c1");
        ledger.add_points(100, "Completed intro");
        ledger.award_achievement("first_lesson");

        let summary = ledger.summary();
        assert_eq!(summary.student_name, "Emma");
        assert_eq!(summary.total_lessons_started, 1);
        assert_eq!(summary.total_lessons_completed, 1);
        assert_eq!(summary.total_points, 100);
        assert_eq!(summary.total_time_minutes, 18);
        assert_eq!(summary.average_quiz_score, Some(95.0));
        assert_eq!(summary.achievements_earned, 1);
        assert_eq!(summary.achievements, vec!["first_lesson"]);
    }

    #[test]
    fn test_complete_unstarted_lesson_fails_without_side_effects() {
        let mut ledger = ProgressLedger::new("Emma");
        ledger.start_lesson("u1", "Intro");

        let err = ledger.complete_lesson("nope", 100, Some(50)).unwrap_err();
        assert!(matches!(err, ProgressError::LessonNotStarted(ref id) if id == "nope"));
        assert_eq!(err.to_string(), "Lesson nope not started yet");
        assert!(ledger.lesson("nope").is_none());
        assert_eq!(ledger.summary().total_lessons_started, 1);
    }

    #[test]
    fn test_restart_discards_progress() {
        let mut ledger = ProgressLedger::new("Emma");
        ledger.start_lesson("u1", "Intro");
        ledger.add_time("u1", 10);
        ledger.complete_lesson_fully("u1").unwrap();

        let restarted = ledger.start_lesson("u1", "Intro again");
        assert_eq!(restarted.lesson_title, "Intro again");
        assert_eq!(restarted.time_spent_minutes, 0);
        assert!(!restarted.is_completed());
        assert_eq!(ledger.summary().total_lessons_started, 1);
    }

    #[test]
    fn test_repeat_completion_keeps_previous_score() {
        let mut ledger = ProgressLedger::new("Emma");
        ledger.start_lesson("u1", "Intro");
        ledger.complete_lesson("u1", 50, Some(70)).unwrap();
        ledger.complete_lesson("u1", 250, None).unwrap();

        let progress = ledger.lesson("u1").unwrap();
        assert_eq!(progress.quiz_score, Some(70));
        assert_eq!(progress.completion_percentage, 100);
        assert!(progress.completed_at.is_some());
    }

    #[test]
    fn test_time_and_challenges_on_unstarted_lesson_are_ignored() {
        let mut ledger = ProgressLedger::new("Emma");
        ledger.add_time("ghost", 5);
        ledger.add_challenge_completion("ghost", "c1");
        assert_eq!(ledger.summary().total_lessons_started, 0);
        assert_eq!(ledger.summary().total_time_minutes, 0);
    }

    #[test]
    fn test_time_is_additive_and_challenges_unique() {
        let mut ledger = ProgressLedger::new("Emma");
        ledger.start_lesson("u1", "Intro");
        ledger.add_time("u1", 5);
        ledger.add_time("u1", 7);
        ledger.add_challenge_completion("u1", "c1");
        ledger.add_challenge_completion("u1", "c2");
        ledger.add_challenge_completion("u1", "c1");

        let progress = ledger.lesson("u1").unwrap();
        assert_eq!(progress.time_spent_minutes, 12);
        assert_eq!(progress.challenges_completed, vec!["c1", "c2"]);
    }

    #[test]
    fn test_points_accumulate_and_awards_are_idempotent() {
        let mut ledger = ProgressLedger::new("Emma");
        ledger.add_points(100, "");
        ledger.add_points(50, "bonus");
        ledger.add_points(-20, "correction");
        assert_eq!(ledger.total_points(), 130);

        assert!(ledger.award_achievement("first_lesson"));
        assert!(!ledger.award_achievement("first_lesson"));
        assert_eq!(ledger.summary().achievements_earned, 1);
    }

    #[test]
    fn test_average_counts_zero_scores() {
        let mut ledger = ProgressLedger::new("Emma");
        assert_eq!(ledger.summary().average_quiz_score, None);

        ledger.start_lesson("a", "A");
        ledger.start_lesson("b", "B");
        ledger.start_lesson("c", "C");
        ledger.complete_lesson("a", 100, Some(0)).unwrap();
        ledger.complete_lesson("b", 100, Some(90)).unwrap();

        assert_eq!(ledger.summary().average_quiz_score, Some(45.0));
    }

    #[test]
    fn test_points_saturate_instead_of_overflowing() {
        let mut ledger = ProgressLedger::new("Emma");
        ledger.add_points(i64::MAX, "");
        ledger.add_points(1, "");
        assert_eq!(ledger.total_points(), i64::MAX);

        ledger.add_points(i64::MIN, "");
        ledger.add_points(i64::MIN, "");
        assert_eq!(ledger.total_points(), i64::MIN);
    }
}
