//! Achievements command implementation

use anyhow::{Result, bail};

use lessonkit::achievements::{AchievementCatalog, AchievementCategory};

/// List catalog entries, optionally limited to one category
pub fn achievements_command(category: Option<&str>) -> Result<()> {
    let catalog = AchievementCatalog::new();

    let entries = match category {
        Some(name) => {
            let Some(category) = AchievementCategory::from_str(name) else {
                let known: Vec<_> = AchievementCategory::all().iter().map(|c| c.as_str()).collect();
                bail!("Unknown category: {}\nKnown categories: {}", name, known.join(", "));
            };
            catalog.by_category(category)
        }
        None => catalog.all(),
    };

    if entries.is_empty() {
        println!("No achievements found.");
        return Ok(());
    }

    println!("🏆 Available Achievements ({}):\n", entries.len());
    for achievement in entries {
        println!("   {}", catalog.display(achievement));
    }

    Ok(())
}
