use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lessonkit::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "lessonkit")]
#[command(about = "Build lesson notebooks, curricula and progress reports for young learners")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.lessonkit/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate a sample notebook, curriculum and student progress file
    Demo {
        /// Output directory (defaults to the configured output dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List the achievement catalog
    Achievements {
        /// Only show achievements of this category (e.g. streak, perfect)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the learning path to a lesson of an exported curriculum
    Path {
        /// Curriculum JSON export
        #[arg(long)]
        curriculum: PathBuf,

        /// Lesson to reach
        lesson_id: String,
    },

    /// Summarise the progress exports in a directory
    Report {
        /// Directory to scan (defaults to the configured output dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(Config::global_config_path);
            cli::init::init_command(&path, force)?;
        }
        Commands::Demo { out } => {
            let config = Config::load(cli.config.as_deref())?;
            cli::demo::demo_command(&config, out.as_deref())?;
        }
        Commands::Achievements { category } => {
            cli::achievements::achievements_command(category.as_deref())?;
        }
        Commands::Path {
            curriculum,
            lesson_id,
        } => {
            cli::path::path_command(&curriculum, &lesson_id)?;
        }
        Commands::Report { dir } => {
            let config = Config::load(cli.config.as_deref())?;
            cli::report::report_command(&config, dir.as_deref())?;
        }
    }

    Ok(())
}
