//! lessonkit - interactive lessons for young programmers
//!
//! Four independent components, composed only by the `lessonkit` binary:
//!
//! - [`notebook`]: builds Jupyter notebooks (nbformat 4.4) from typed content
//!   blocks such as quizzes, challenges and fun facts.
//! - [`curriculum`]: groups lessons into modules and orders them by their
//!   prerequisites.
//! - [`achievements`]: the catalog of badges a student can earn.
//! - [`progress`]: a per-student ledger of lessons, scores and points.
//!
//! Everything is written as pretty-printed JSON through [`export`].

pub mod achievements;
pub mod config;
pub mod curriculum;
pub mod export;
pub mod notebook;
pub mod progress;
