//! Achievement definitions and the catalog that holds them

mod catalog;
mod definitions;

pub use catalog::AchievementCatalog;
pub use definitions::{Achievement, AchievementCategory, STANDARD_ACHIEVEMENTS};
