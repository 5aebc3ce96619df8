//! Configuration loading and management

mod io;
mod settings;

pub use settings::{CurriculumSettings, NotebookSettings, OutputSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure
///
/// Every section and field is optional in the file; missing values fall
/// back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Notebook authoring defaults
    #[serde(default)]
    pub notebook: NotebookSettings,

    /// Curriculum defaults
    #[serde(default)]
    pub curriculum: CurriculumSettings,

    /// Where generated files go
    #[serde(default)]
    pub output: OutputSettings,
}
