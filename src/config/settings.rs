//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::curriculum::DEFAULT_CURRICULUM_NAME;
use crate::notebook::{DEFAULT_AUTHOR, KernelSpec, LanguageInfo};

/// Notebook authoring settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookSettings {
    /// Author shown in the header cell of every notebook
    #[serde(default = "default_author")]
    pub author: String,

    /// Kernel written into notebook metadata
    #[serde(default)]
    pub kernel: KernelSpec,

    /// Language written into notebook metadata
    #[serde(default)]
    pub language: LanguageInfo,
}

/// Curriculum settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumSettings {
    /// Name used when a curriculum is created without one
    #[serde(default = "default_curriculum_name")]
    pub name: String,
}

/// Output location settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Directory for generated notebooks and exports, relative to the working directory
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_curriculum_name() -> String {
    DEFAULT_CURRICULUM_NAME.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for NotebookSettings {
    fn default() -> Self {
        Self {
            author: default_author(),
            kernel: KernelSpec::default(),
            language: LanguageInfo::default(),
        }
    }
}

impl Default for CurriculumSettings {
    fn default() -> Self {
        Self {
            name: default_curriculum_name(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}
