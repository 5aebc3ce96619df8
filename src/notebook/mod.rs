//! Interactive notebook generation
//!
//! Lessons are assembled from typed [`ContentBlock`]s (text, code, quizzes,
//! challenges, visual exercises, fun facts) and written as Jupyter
//! nbformat 4.4 documents.
//!
//! # Usage
//!
//! ```ignore
//! let mut nb = NotebookBuilder::new("Hello, Python!", "Your first program", "Teacher");
//! nb.set_title_and_intro("🐍 Hello, Python!", "Let's make Python say hello!")
//!     .add_quiz("What does print() do?", &["Shows text", "Beeps"], 0, "It shows text!")
//!     .add_challenge("Greetings", "Print three lines", "", &["Use quotes"]);
//! let path = nb.save(Path::new("lessons/hello.ipynb"))?;
//! ```

mod block;
mod builder;
mod cell;

pub use block::{
    CHALLENGE_PLACEHOLDER, Challenge, ContentBlock, Quiz, TAG_CHALLENGE, TAG_CHALLENGE_CODE,
    TAG_FUN_FACT, TAG_QUIZ, TAG_QUIZ_ANSWER, TAG_VISUAL_CODE, TAG_VISUAL_EXERCISE, VisualType,
};
pub use builder::{AnswerKey, DEFAULT_AUTHOR, NotebookBuilder};
pub use cell::{Cell, CellMetadata, KernelSpec, LanguageInfo, NotebookMetadata, split_source};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::export::{self, ExportError};

/// Major notebook format version
pub const NBFORMAT: u32 = 4;
/// Minor notebook format version
pub const NBFORMAT_MINOR: u32 = 4;

/// A complete notebook document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: NotebookMetadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    /// Read a notebook file back from disk
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        export::read_json(path)
    }

    /// Cells carrying `tag`, in document order
    pub fn cells_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Cell> + 'a {
        self.cells
            .iter()
            .filter(move |c| c.tags().iter().any(|t| t == tag))
    }
}
