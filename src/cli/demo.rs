//! Demo command implementation
//!
//! Builds a sample lesson notebook, a three-lesson curriculum and a student
//! ledger, then prints the achievement catalog.

use anyhow::{Context, Result};
use std::path::Path;

use lessonkit::achievements::AchievementCatalog;
use lessonkit::config::{Config, NotebookSettings};
use lessonkit::curriculum::{Curriculum, Difficulty, Lesson};
use lessonkit::notebook::{NotebookBuilder, VisualType};
use lessonkit::progress::ProgressLedger;

pub const NOTEBOOK_FILE: &str = "python_hello_world.ipynb";
pub const CURRICULUM_FILE: &str = "curriculum_kids.json";
pub const PROGRESS_FILE: &str = "emma_progress.json";

const MODULE_ID: &str = "python_basics";

/// Write the sample files into `out_dir` (or the configured output dir)
pub fn demo_command(config: &Config, out_dir: Option<&Path>) -> Result<()> {
    let out_dir = out_dir.unwrap_or(config.output.dir.as_path());
    tracing::debug!(dir = %out_dir.display(), "writing demo files");

    let notebook = hello_world_notebook(&config.notebook);
    let written = notebook
        .save(&out_dir.join(NOTEBOOK_FILE))
        .context("Failed to save sample notebook")?;
    println!("✅ Lesson saved to: {} ({} cells)", written.display(), notebook.len());

    let curriculum = sample_curriculum(&config.curriculum.name)?;
    let written = curriculum
        .export(&out_dir.join(CURRICULUM_FILE))
        .context("Failed to export sample curriculum")?;
    let overview = curriculum.overview();
    println!("\n✅ Curriculum created!");
    println!("   Modules: {}", overview.total_modules);
    println!("   Lessons: {}", overview.total_lessons);
    println!("   Saved to: {}", written.display());

    let catalog = AchievementCatalog::new();
    println!("\n🏆 Available Achievements:\n");
    for achievement in catalog.all() {
        println!("   {}", catalog.display(achievement));
    }

    let ledger = sample_ledger()?;
    let summary = ledger.summary();
    let written = ledger
        .export(&out_dir.join(PROGRESS_FILE))
        .context("Failed to export sample progress")?;
    println!("\n✅ Progress Tracking:");
    println!("   Student: {}", summary.student_name);
    println!("   Lessons Completed: {}", summary.total_lessons_completed);
    println!("   Total Points: {}", summary.total_points);
    println!("   Achievements: {}", summary.achievements.join(", "));
    println!("   Progress saved to: {}", written.display());

    Ok(())
}

/// The "Hello, Python!" introductory lesson
pub fn hello_world_notebook(settings: &NotebookSettings) -> NotebookBuilder {
    let mut notebook =
        NotebookBuilder::from_settings("Hello, Python!", "Your first Python program", settings);

    notebook
        .set_title_and_intro(
            "🐍 Hello, Python!",
            "Welcome, young programmer! Let's learn how to make Python say hello! 👋",
        )
        .add_fun_fact(
            "Python is named after the British comedy group Monty Python, not the snake! 🎭",
        )
        .add_markdown(
            "## 🎯 What You'll Learn\n\n\
             - What the `print()` function does\n\
             - How to display text on your screen\n\
             - How to run your first Python program\n",
            &[],
        )
        .add_markdown("## 💻 Your First Program", &[])
        .add_code(
            "print('Hello, World!')\n\
             print('Welcome to Python!')\n\
             print('🚀 I am learning to code!')",
            &[],
            None,
        )
        .add_quiz(
            "What will the print() function do?",
            &[
                "Display text on the screen",
                "Make the computer beep",
                "Create a new file",
                "Print something on paper",
            ],
            0,
            "Perfect! The `print()` function displays whatever text you put between \
             the parentheses on your screen. It's like telling Python to show something!",
        )
        .add_visual_exercise(
            "Make Your Own Message",
            "Try modifying the print statements to display YOUR name and favorite emoji!",
            VisualType::AsciiArt,
        )
        .add_challenge(
            "Create Your Own Print Messages",
            "Write 3 print() statements that display:\n\
             1. Your name\n\
             2. Your favorite animal\n\
             3. A fun fact about yourself",
            "# Write your 3 print statements here:\n\
             print('Your name here')\n\
             print('Your animal here')\n\
             print('Your fact here')",
            &[
                "Remember to use quotes around your text",
                "Each print() statement should be on a new line",
                "You can add emojis! 🎉",
            ],
        )
        .add_fun_fact(
            "Did you know? You can use emojis in print statements! \
             Try `print('🎮 Gaming is fun!')`",
        )
        .add_markdown(
            "## ✅ You Did It!\n\n\
             Great job! You've learned how to use the `print()` function. \
             This is the foundation of every Python program! 🎉\n\n\
             **Next Steps:** Try writing more complex print statements with different messages.",
            &[],
        );

    notebook
}

/// Three beginner Python lessons, each building on the previous one
pub fn sample_curriculum(name: &str) -> Result<Curriculum> {
    let mut curriculum = Curriculum::new(name);
    curriculum.create_module(
        MODULE_ID,
        "Python Basics",
        "Learn the fundamentals of Python programming",
    );

    let lessons = [
        Lesson::new("python_hello", "Hello, Python!", "Python", Difficulty::Beginner)
            .with_description("Your first Python program using print()")
            .with_duration(15)
            .with_outcomes([
                "Understand what Python is",
                "Use the print() function",
                "Run your first program",
            ])
            .with_points(100),
        Lesson::new(
            "python_variables",
            "Variables and Data Types",
            "Python",
            Difficulty::Beginner,
        )
        .with_description("Learn how to store and use information")
        .with_duration(20)
        .with_prerequisites(["python_hello"])
        .with_outcomes([
            "Create variables",
            "Understand data types (string, int, float)",
            "Use variables in print statements",
        ])
        .with_points(150),
        Lesson::new("python_input", "Getting User Input", "Python", Difficulty::Beginner)
            .with_description("Make your programs interactive!")
            .with_duration(20)
            .with_prerequisites(["python_variables"])
            .with_outcomes([
                "Use the input() function",
                "Store user responses",
                "Create interactive programs",
            ])
            .with_points(150),
    ];

    for lesson in lessons {
        curriculum.add_lesson(MODULE_ID, lesson)?;
    }

    Ok(curriculum)
}

/// Emma finishes her first lesson
pub fn sample_ledger() -> Result<ProgressLedger> {
    let mut ledger = ProgressLedger::new("Emma");
    ledger.start_lesson("python_hello", "Hello, Python!");
    ledger.complete_lesson("python_hello", 100, Some(95))?;
    ledger.add_time("python_hello", 18);
    ledger.add_challenge_completion("python_hello", "challenge_1");
    ledger.add_points(100, "Completed Python Basics lesson");
    ledger.award_achievement("first_lesson");
    Ok(ledger)
}
