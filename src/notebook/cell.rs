//! Notebook cells and document-level metadata in nbformat 4 layout

use serde::{Deserialize, Serialize};

/// Tags attached to a cell, used by notebook viewers for filtering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellMetadata {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A single notebook cell
///
/// Serialized with an internal `cell_type` tag so that markdown cells carry
/// only `metadata` and `source`, while code cells also carry
/// `execution_count` and `outputs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    Markdown {
        metadata: CellMetadata,
        source: Vec<String>,
    },
    Code {
        metadata: CellMetadata,
        source: Vec<String>,
        execution_count: Option<u32>,
        outputs: Vec<serde_json::Value>,
    },
}

impl Cell {
    /// Create a markdown cell from text
    pub fn markdown(content: &str, tags: Vec<String>) -> Self {
        Self::Markdown {
            metadata: CellMetadata { tags },
            source: split_source(content),
        }
    }

    /// Create a code cell from source text
    pub fn code(code: &str, tags: Vec<String>, execution_count: Option<u32>) -> Self {
        Self::Code {
            metadata: CellMetadata { tags },
            source: split_source(code),
            execution_count,
            outputs: Vec::new(),
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code { .. })
    }

    pub fn tags(&self) -> &[String] {
        match self {
            Self::Markdown { metadata, .. } | Self::Code { metadata, .. } => &metadata.tags,
        }
    }

    pub fn source(&self) -> &[String] {
        match self {
            Self::Markdown { source, .. } | Self::Code { source, .. } => source,
        }
    }

    /// The cell text with its lines joined back together
    pub fn text(&self) -> String {
        self.source().join("\n")
    }
}

/// Split text into the line sequence notebook viewers expect.
///
/// Separators are not kept, so a trailing newline produces a trailing empty line.
pub fn split_source(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Kernel descriptor written into notebook metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelSpec {
    pub display_name: String,
    pub language: String,
    pub name: String,
}

impl Default for KernelSpec {
    fn default() -> Self {
        Self {
            display_name: "Python 3".to_string(),
            language: "python".to_string(),
            name: "python3".to_string(),
        }
    }
}

/// Language descriptor written into notebook metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageInfo {
    pub name: String,
    pub version: String,
}

impl Default for LanguageInfo {
    fn default() -> Self {
        Self {
            name: "python".to_string(),
            version: "3.9.0".to_string(),
        }
    }
}

/// Notebook-level metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    pub kernelspec: KernelSpec,
    pub language_info: LanguageInfo,
}
