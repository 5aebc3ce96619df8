//! Shared fixtures for integration tests

#![allow(dead_code)]

use lessonkit::curriculum::{Curriculum, Difficulty, Lesson};
use lessonkit::notebook::{NotebookBuilder, VisualType};
use lessonkit::progress::ProgressLedger;
use tempfile::TempDir;

/// Scratch directory for export files
pub fn output_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A notebook using every kind of content block
pub fn sample_notebook() -> NotebookBuilder {
    let mut nb = NotebookBuilder::new("Loops", "Repeat things", "Ms. Rivera");
    nb.set_title_and_intro("🔁 Loops", "Computers never get bored!")
        .add_markdown("## Counting\n", &["intro"])
        .add_code("for i in range(3):\n    print(i)", &[], Some(1))
        .add_quiz("How many times?", &["1", "2", "3"], 2, "range(3) gives 0, 1 and 2.")
        .add_challenge("Count down", "Print 3, 2, 1", "", &["Use range with a step"])
        .add_visual_exercise("Stars", "Draw a triangle", VisualType::AsciiArt)
        .add_visual_exercise("Colors", "Pick a color", VisualType::Other("color_picker".into()))
        .add_fun_fact("The first computer bug was a real moth!");
    nb
}

/// Two modules where `games_pong` depends on a diamond of Python lessons
pub fn sample_curriculum() -> Curriculum {
    let mut c = Curriculum::new("Python for Young Coders");
    c.create_module("python_basics", "Python Basics", "The fundamentals");
    c.create_module("games", "Games", "Make something fun");

    c.add_lesson(
        "python_basics",
        Lesson::new("python_hello", "Hello, Python!", "Python", Difficulty::Beginner)
            .with_outcomes(["Use print()"]),
    )
    .expect("module exists");
    c.add_lesson(
        "python_basics",
        Lesson::new("python_variables", "Variables", "Python", Difficulty::Beginner)
            .with_duration(20)
            .with_prerequisites(["python_hello"])
            .with_points(150),
    )
    .expect("module exists");
    c.add_lesson(
        "python_basics",
        Lesson::new("python_loops", "Loops", "Python", Difficulty::Intermediate)
            .with_prerequisites(["python_hello"])
            .with_tags(["loops"]),
    )
    .expect("module exists");
    c.add_lesson(
        "games",
        Lesson::new("games_pong", "Pong", "Games", Difficulty::Advanced)
            .with_description("Build a paddle game")
            .with_prerequisites(["python_variables", "python_loops", "turtle_graphics"])
            .with_points(300),
    )
    .expect("module exists");
    c
}

/// Emma has finished one lesson and started another
pub fn sample_ledger() -> ProgressLedger {
    let mut ledger = ProgressLedger::new("Emma");
    ledger.start_lesson("python_hello", "Hello, Python!");
    ledger
        .complete_lesson("python_hello", 100, Some(95))
        .expect("lesson started");
    ledger.add_time("python_hello", 18);
    ledger.add_challenge_completion("python_hello", "challenge_1");
    ledger.start_lesson("python_variables", "Variables");
    ledger.add_time("python_variables", 7);
    ledger.add_points(100, "Completed Python Basics lesson");
    ledger.award_achievement("first_lesson");
    ledger
}
