//! Append-only notebook builder

use std::path::{Path, PathBuf};

use chrono::Local;

use super::block::{Challenge, ContentBlock, Quiz, VisualType};
use super::cell::{Cell, KernelSpec, LanguageInfo, NotebookMetadata};
use super::{Notebook, NBFORMAT, NBFORMAT_MINOR};
use crate::config::NotebookSettings;
use crate::export::{self, ExportError};

pub const DEFAULT_AUTHOR: &str = "Learning System";

/// Inert record of a quiz's intended answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    /// Index of the quiz's first cell in the notebook
    pub cell_index: usize,
    pub question: String,
    pub correct_index: usize,
}

/// Builds a notebook by appending content blocks in reading order
///
/// Cells are never removed or reordered once appended.
///
/// ```ignore
/// let mut nb = NotebookBuilder::new("Hello, Python!", "First program", "Teacher");
/// nb.set_title_and_intro("🐍 Hello, Python!", "Welcome!")
///     .add_code("print('Hello')", &[], None)
///     .add_fun_fact("Python is named after Monty Python");
/// nb.save(Path::new("lessons/hello.ipynb"))?;
/// ```
#[derive(Debug, Clone)]
pub struct NotebookBuilder {
    title: String,
    description: String,
    author: String,
    metadata: NotebookMetadata,
    cells: Vec<Cell>,
    answer_key: Vec<AnswerKey>,
}

impl NotebookBuilder {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            author: author.into(),
            metadata: NotebookMetadata::default(),
            cells: Vec::new(),
            answer_key: Vec::new(),
        }
    }

    /// Create a builder using the author and kernel from configuration
    pub fn from_settings(
        title: impl Into<String>,
        description: impl Into<String>,
        settings: &NotebookSettings,
    ) -> Self {
        Self::new(title, description, settings.author.clone())
            .with_kernel(settings.kernel.clone(), settings.language.clone())
    }

    /// Replace the default Python kernel descriptor
    pub fn with_kernel(mut self, kernelspec: KernelSpec, language_info: LanguageInfo) -> Self {
        self.metadata = NotebookMetadata {
            kernelspec,
            language_info,
        };
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Correct answers recorded for each quiz, in the order the quizzes were added
    pub fn answer_key(&self) -> &[AnswerKey] {
        &self.answer_key
    }

    /// Append a block, expanding it into its cells
    pub fn push(&mut self, block: ContentBlock) -> &mut Self {
        if let ContentBlock::Quiz(quiz) = &block {
            self.answer_key.push(AnswerKey {
                cell_index: self.cells.len(),
                question: quiz.question.clone(),
                correct_index: quiz.correct_index,
            });
        }
        let cells = block.into_cells();
        tracing::trace!(
            added = cells.len(),
            total = self.cells.len() + cells.len(),
            "appended block"
        );
        self.cells.extend(cells);
        self
    }

    pub fn add_markdown(&mut self, content: &str, tags: &[&str]) -> &mut Self {
        self.push(ContentBlock::Text {
            content: content.to_string(),
            tags: owned(tags),
        })
    }

    pub fn add_code(
        &mut self,
        code: &str,
        tags: &[&str],
        execution_count: Option<u32>,
    ) -> &mut Self {
        self.push(ContentBlock::Code {
            code: code.to_string(),
            tags: owned(tags),
            execution_count,
        })
    }

    /// Add a multiple-choice question, plus an answer cell when `explanation` is non-empty.
    ///
    /// `correct_index` only goes into [`answer_key`](Self::answer_key).
    pub fn add_quiz(
        &mut self,
        question: &str,
        options: &[&str],
        correct_index: usize,
        explanation: &str,
    ) -> &mut Self {
        self.push(ContentBlock::Quiz(Quiz {
            question: question.to_string(),
            options: owned(options),
            correct_index,
            explanation: explanation.to_string(),
        }))
    }

    pub fn add_challenge(
        &mut self,
        title: &str,
        description: &str,
        starter_code: &str,
        hints: &[&str],
    ) -> &mut Self {
        self.push(ContentBlock::Challenge(Challenge {
            title: title.to_string(),
            description: description.to_string(),
            starter_code: starter_code.to_string(),
            hints: owned(hints),
        }))
    }

    pub fn add_visual_exercise(
        &mut self,
        title: &str,
        description: &str,
        visual_type: VisualType,
    ) -> &mut Self {
        self.push(ContentBlock::VisualExercise {
            title: title.to_string(),
            description: description.to_string(),
            visual_type,
        })
    }

    pub fn add_fun_fact(&mut self, fact: &str) -> &mut Self {
        self.push(ContentBlock::Fact(fact.to_string()))
    }

    /// Append a heading, an author/date/topic block and the introduction
    pub fn set_title_and_intro(&mut self, title: &str, introduction: &str) -> &mut Self {
        let created = Local::now().format("%B %d, %Y");
        let meta = format!(
            "\n**Author:** {}  \n**Created:** {}  \n**Topic:** {}\n",
            self.author, created, self.title
        );

        self.add_markdown(&format!("# {title}"), &[])
            .add_markdown(&meta, &[])
            .add_markdown(introduction, &[])
    }

    /// Snapshot the notebook document; the builder is left untouched
    pub fn generate(&self) -> Notebook {
        Notebook {
            cells: self.cells.clone(),
            metadata: self.metadata.clone(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// The notebook as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(&self.generate())?)
    }

    /// Write the notebook to `path` and return the absolute path written
    pub fn save(&self, path: &Path) -> Result<PathBuf, ExportError> {
        let written = export::write_json(path, &self.generate())?;
        tracing::info!(
            title = %self.title,
            cells = self.cells.len(),
            path = %written.display(),
            "saved notebook"
        );
        Ok(written)
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
