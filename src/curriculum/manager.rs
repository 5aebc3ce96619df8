//! Curriculum registry: modules, lesson index and prerequisite graph

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::lesson::{Difficulty, Lesson, LessonModule};
use super::path;
use crate::export::{self, ExportError};

pub const DEFAULT_CURRICULUM_NAME: &str = "Kid's Learning Curriculum";

/// Error type for curriculum operations
#[derive(Debug, thiserror::Error)]
pub enum CurriculumError {
    #[error("Module {0} not found")]
    ModuleNotFound(String),

    #[error("Prerequisite cycle detected: {}", .cycle.join(" -> "))]
    CycleDetected { cycle: Vec<String> },

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Organizes lessons into modules and tracks prerequisites between them
///
/// All maps keep insertion order, which is also the order of filters,
/// exports and overviews.
#[derive(Debug, Clone)]
pub struct Curriculum {
    name: String,
    modules: IndexMap<String, LessonModule>,
    lessons: IndexMap<String, Lesson>,
    /// Prerequisites as first registered for each lesson id
    graph: IndexMap<String, Vec<String>>,
}

impl Default for Curriculum {
    fn default() -> Self {
        Self::new(DEFAULT_CURRICULUM_NAME)
    }
}

impl Curriculum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modules: IndexMap::new(),
            lessons: IndexMap::new(),
            graph: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a new empty module, replacing any module with the same id
    pub fn create_module(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut LessonModule {
        let module = LessonModule::new(id, title, description);
        let id = module.id.clone();
        if self.modules.contains_key(&id) {
            tracing::warn!(module = %id, "replacing existing module");
        }
        let index = self.modules.insert_full(id, module).0;
        &mut self.modules[index]
    }

    /// Add a lesson to an existing module.
    ///
    /// The lesson index is overwritten for a repeated id, but the prerequisite
    /// graph keeps the first registration of that id.
    pub fn add_lesson(&mut self, module_id: &str, lesson: Lesson) -> Result<(), CurriculumError> {
        let module = self
            .modules
            .get_mut(module_id)
            .ok_or_else(|| CurriculumError::ModuleNotFound(module_id.to_string()))?;

        module.lessons.push(lesson.clone());
        self.graph
            .entry(lesson.id.clone())
            .or_insert_with(|| lesson.prerequisites.clone());
        tracing::debug!(module = module_id, lesson = %lesson.id, "added lesson");
        self.lessons.insert(lesson.id.clone(), lesson);
        Ok(())
    }

    /// Lesson ids to work through, prerequisites first, ending with `start_id`
    pub fn learning_path(&self, start_id: &str) -> Result<Vec<String>, CurriculumError> {
        path::learning_path(start_id, &self.lessons, &self.graph)
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.get(id)
    }

    pub fn module(&self, id: &str) -> Option<&LessonModule> {
        self.modules.get(id)
    }

    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.values()
    }

    pub fn modules(&self) -> impl Iterator<Item = &LessonModule> {
        self.modules.values()
    }

    pub fn lessons_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Lesson> {
        self.lessons
            .values()
            .filter(|l| l.difficulty == difficulty)
            .collect()
    }

    pub fn lessons_by_topic(&self, topic: &str) -> Vec<&Lesson> {
        self.lessons.values().filter(|l| l.topic == topic).collect()
    }

    /// Summary counts per module
    pub fn overview(&self) -> CurriculumOverview {
        CurriculumOverview {
            name: self.name.clone(),
            total_modules: self.modules.len(),
            total_lessons: self.lessons.len(),
            modules: self
                .modules
                .iter()
                .map(|(id, m)| {
                    (
                        id.clone(),
                        ModuleOverview {
                            title: m.title.clone(),
                            lesson_count: m.lessons.len(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// The curriculum in its export file layout
    pub fn to_file(&self) -> CurriculumFile {
        CurriculumFile {
            name: self.name.clone(),
            modules: self
                .modules
                .iter()
                .map(|(id, m)| {
                    (
                        id.clone(),
                        ModuleRecord {
                            title: m.title.clone(),
                            description: m.description.clone(),
                            lessons: m.lessons.clone(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Write the curriculum as JSON and return the absolute path written
    pub fn export(&self, path: &Path) -> Result<PathBuf, CurriculumError> {
        let written = export::write_json(path, &self.to_file())?;
        tracing::info!(
            curriculum = %self.name,
            modules = self.modules.len(),
            lessons = self.lessons.len(),
            path = %written.display(),
            "exported curriculum"
        );
        Ok(written)
    }

    /// Rebuild a curriculum from an export file.
    ///
    /// The file does not record the order lessons were added across modules,
    /// so lessons are replayed module by module. A lesson id listed in more
    /// than one module therefore resolves by file order: the first listing
    /// supplies its prerequisites and the last one its index entry.
    pub fn load(path: &Path) -> Result<Self, CurriculumError> {
        let file: CurriculumFile = export::read_json(path)?;
        Self::from_file(file)
    }

    /// Replay an export file through `create_module` and `add_lesson`
    pub fn from_file(file: CurriculumFile) -> Result<Self, CurriculumError> {
        let mut curriculum = Self::new(file.name);
        for (id, record) in file.modules {
            curriculum.create_module(id.clone(), record.title, record.description);
            for lesson in record.lessons {
                if curriculum.lessons.contains_key(&lesson.id) {
                    tracing::warn!(
                        module = %id,
                        lesson = %lesson.id,
                        "lesson listed in more than one module, keeping first prerequisites"
                    );
                }
                curriculum.add_lesson(&id, lesson)?;
            }
        }
        Ok(curriculum)
    }
}

/// Export layout of a curriculum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumFile {
    pub name: String,
    pub modules: IndexMap<String, ModuleRecord>,
}

/// Export layout of a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// Counts returned by [`Curriculum::overview`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumOverview {
    pub name: String,
    pub total_modules: usize,
    pub total_lessons: usize,
    pub modules: IndexMap<String, ModuleOverview>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOverview {
    pub title: String,
    pub lesson_count: usize,
}
