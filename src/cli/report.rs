//! Report command implementation

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use lessonkit::config::Config;
use lessonkit::progress::ProgressLedger;

/// Summarise every progress export in `dir` (or the configured output dir)
pub fn report_command(config: &Config, dir: Option<&Path>) -> Result<()> {
    let dir = dir.unwrap_or(config.output.dir.as_path());
    let ledgers = load_ledgers(dir)?;

    if ledgers.is_empty() {
        println!("No progress exports found in {}.", dir.display());
        return Ok(());
    }

    println!("Progress reports ({}):\n", ledgers.len());

    for (path, ledger) in ledgers {
        let summary = ledger.summary();
        println!("  {} ({})", summary.student_name, path.display());
        println!(
            "    Lessons: {} started, {} completed",
            summary.total_lessons_started, summary.total_lessons_completed
        );
        println!(
            "    Points: {}  Time: {} min",
            summary.total_points, summary.total_time_minutes
        );
        match summary.average_quiz_score {
            Some(avg) => println!("    Average quiz score: {:.1}", avg),
            None => println!("    Average quiz score: -"),
        }
        if !summary.achievements.is_empty() {
            println!("    Achievements: {}", summary.achievements.join(", "));
        }
        println!();
    }

    Ok(())
}

/// Load every `*.json` file in `dir` that parses as a progress export.
///
/// Other JSON files (notebooks, curricula) are skipped. Results are sorted
/// by path.
pub fn load_ledgers(dir: &Path) -> Result<Vec<(PathBuf, ProgressLedger)>> {
    let pattern = format!("{}/*.json", glob::Pattern::escape(&dir.to_string_lossy()));

    let mut ledgers = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("Invalid glob: {pattern}"))? {
        let path = match entry {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!("Glob match error in {}: {}", dir.display(), err);
                continue;
            }
        };
        match ProgressLedger::load(&path) {
            Ok(ledger) => ledgers.push((path, ledger)),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "not a progress export")
            }
        }
    }

    ledgers.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(ledgers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_ledgers_skips_other_json() {
        let dir = tempdir().unwrap();

        let mut emma = ProgressLedger::new("Emma");
        emma.add_points(10, "");
        emma.export(&dir.path().join("emma.json")).unwrap();
        let liam = ProgressLedger::new("Liam");
        liam.export(&dir.path().join("liam.json")).unwrap();

        std::fs::write(dir.path().join("curriculum.json"), r#"{"name": "x", "modules": {}}"#)
            .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        let ledgers = load_ledgers(dir.path()).unwrap();
        let names: Vec<_> = ledgers.iter().map(|(_, l)| l.student_name()).collect();
        assert_eq!(names, vec!["Emma", "Liam"]);
        assert_eq!(ledgers[0].1.total_points(), 10);
    }

    #[test]
    fn test_load_ledgers_empty_dir() {
        let dir = tempdir().unwrap();
        assert!(load_ledgers(dir.path()).unwrap().is_empty());
    }
}
