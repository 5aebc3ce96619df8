//! Student progress tracking
//!
//! A [`ProgressLedger`] belongs to one student. It records which lessons were
//! started and completed, quiz scores, time spent, challenge completions,
//! points and earned achievement ids. Achievement ids are plain strings; the
//! ledger does not consult an [`AchievementCatalog`](crate::achievements::AchievementCatalog).

mod ledger;
mod models;

pub use ledger::{ProgressError, ProgressFile, ProgressLedger};
pub use models::{COMPLETE_PERCENTAGE, LessonProgress, ProgressSummary};
