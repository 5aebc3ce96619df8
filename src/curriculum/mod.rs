//! Curriculum structure and lesson sequencing
//!
//! Lessons are grouped into modules. Each lesson declares the lessons it
//! builds on, and [`Curriculum::learning_path`] turns those prerequisites
//! into an order a student can follow.
//!
//! ```ignore
//! let mut curriculum = Curriculum::new("Python for Young Coders");
//! curriculum.create_module("python_basics", "Python Basics", "The fundamentals");
//! curriculum.add_lesson(
//!     "python_basics",
//!     Lesson::new("python_variables", "Variables", "Python", Difficulty::Beginner)
//!         .with_prerequisites(["python_hello"]),
//! )?;
//! let path = curriculum.learning_path("python_variables")?;
//! ```

mod lesson;
mod manager;
mod path;

pub use lesson::{Difficulty, Lesson, LessonModule};
pub use manager::{
    Curriculum, CurriculumError, CurriculumFile, CurriculumOverview, DEFAULT_CURRICULUM_NAME,
    ModuleOverview, ModuleRecord,
};
