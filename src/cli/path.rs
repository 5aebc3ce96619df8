//! Path command implementation

use anyhow::{Context, Result};
use std::path::Path;

use lessonkit::curriculum::Curriculum;

/// Print the learning path to `lesson_id` from an exported curriculum
pub fn path_command(curriculum_path: &Path, lesson_id: &str) -> Result<()> {
    let curriculum = Curriculum::load(curriculum_path)
        .with_context(|| format!("Failed to load curriculum: {}", curriculum_path.display()))?;

    let path = curriculum
        .learning_path(lesson_id)
        .with_context(|| format!("Failed to compute learning path for {}", lesson_id))?;

    if path.is_empty() {
        println!("Lesson {} is not part of {}.", lesson_id, curriculum.name());
        return Ok(());
    }

    println!("Learning path to {} ({} lessons):\n", lesson_id, path.len());
    let mut total_minutes = 0;
    for (step, id) in path.iter().enumerate() {
        match curriculum.lesson(id) {
            Some(lesson) => {
                total_minutes += lesson.estimated_duration_minutes;
                println!(
                    "  {}. {} - {} [{}, {} min]",
                    step + 1,
                    id,
                    lesson.title,
                    lesson.difficulty,
                    lesson.estimated_duration_minutes
                );
            }
            None => println!("  {}. {}", step + 1, id),
        }
    }
    println!("\nEstimated time: {} min", total_minutes);

    Ok(())
}
