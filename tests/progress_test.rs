//! Integration tests for progress ledger export and reload

mod common;

use lessonkit::progress::{ProgressError, ProgressLedger};

#[test]
fn test_export_layout() {
    let dir = common::output_dir();
    let ledger = common::sample_ledger();
    let path = ledger.export(&dir.path().join("students/emma.json")).unwrap();

    assert!(path.is_absolute());
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(value["student_name"], "Emma");
    assert!(value["created_at"].is_string());

    let summary = &value["summary"];
    assert_eq!(summary["student_name"], "Emma");
    assert_eq!(summary["total_lessons_started"], 2);
    assert_eq!(summary["total_lessons_completed"], 1);
    assert_eq!(summary["total_points"], 100);
    assert_eq!(summary["total_time_minutes"], 25);
    assert_eq!(summary["average_quiz_score"], 95.0);
    assert_eq!(summary["achievements_earned"], 1);
    assert_eq!(summary["achievements"], serde_json::json!(["first_lesson"]));

    let hello = &value["lesson_progress"]["python_hello"];
    assert_eq!(hello["lesson_id"], "python_hello");
    assert_eq!(hello["lesson_title"], "Hello, Python!");
    assert!(hello["started_at"].is_string());
    assert!(hello["completed_at"].is_string());
    assert_eq!(hello["completion_percentage"], 100);
    assert_eq!(hello["quiz_score"], 95);
    assert_eq!(hello["challenges_completed"], serde_json::json!(["challenge_1"]));
    assert_eq!(hello["time_spent_minutes"], 18);

    let variables = &value["lesson_progress"]["python_variables"];
    assert!(variables["completed_at"].is_null());
    assert!(variables["quiz_score"].is_null());
}

#[test]
fn test_export_then_load_keeps_state() {
    let dir = common::output_dir();
    let original = common::sample_ledger();
    let path = original.export(&dir.path().join("emma.json")).unwrap();

    let mut loaded = ProgressLedger::load(&path).unwrap();

    assert_eq!(loaded.summary(), original.summary());
    assert_eq!(loaded.to_file(), original.to_file());
    assert_eq!(loaded.created_at(), original.created_at());

    // A restored ledger keeps working
    loaded.complete_lesson_fully("python_variables").unwrap();
    assert!(!loaded.award_achievement("first_lesson"));
    assert_eq!(loaded.summary().total_lessons_completed, 2);
}

#[test]
fn test_failed_completion_leaves_export_unchanged() {
    let dir = common::output_dir();
    let mut ledger = common::sample_ledger();
    let before = ledger.to_file();

    let err = ledger.complete_lesson("python_loops", 100, Some(80)).unwrap_err();
    assert!(matches!(err, ProgressError::LessonNotStarted(_)));
    assert_eq!(ledger.to_file(), before);

    let path = ledger.export(&dir.path().join("emma.json")).unwrap();
    assert_eq!(ProgressLedger::load(&path).unwrap().to_file(), before);
}

#[test]
fn test_load_rejects_non_progress_json() {
    let dir = common::output_dir();
    let path = dir.path().join("notebook.json");
    std::fs::write(&path, r#"{"cells": [], "nbformat": 4}"#).unwrap();

    let err = ProgressLedger::load(&path).unwrap_err();
    assert!(matches!(err, ProgressError::Export(_)));
}
