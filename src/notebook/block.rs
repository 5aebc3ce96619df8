//! Typed content blocks and how each one materializes into cells

use std::fmt;
use std::str::FromStr;

use super::cell::Cell;

pub const TAG_QUIZ: &str = "quiz";
pub const TAG_QUIZ_ANSWER: &str = "quiz-answer";
pub const TAG_CHALLENGE: &str = "challenge";
pub const TAG_CHALLENGE_CODE: &str = "challenge-code";
pub const TAG_VISUAL_EXERCISE: &str = "visual-exercise";
pub const TAG_VISUAL_CODE: &str = "visual-code";
pub const TAG_FUN_FACT: &str = "fun-fact";

/// Placeholder used when a challenge has no starter code
pub const CHALLENGE_PLACEHOLDER: &str = "# Write your code here";

const ASCII_ART_EXAMPLE: &str = r#"
# Example ASCII Art - Modify this!
print("""
    ~~~~ Fun Program ~~~~
    🎉 Learning is Fun! 🎉
""")
"#;

/// Kind of visual exercise
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VisualType {
    /// Comes with an editable ASCII art example cell
    #[default]
    AsciiArt,
    /// Any other kind; only the description cell is produced
    Other(String),
}

impl VisualType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::AsciiArt => "ascii_art",
            Self::Other(name) => name,
        }
    }
}

impl FromStr for VisualType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ascii_art" => Self::AsciiArt,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for VisualType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    /// Recorded as-is; never checked against `options` and never rendered
    pub correct_index: usize,
    pub explanation: String,
}

/// A coding challenge with optional starter code and hints
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub starter_code: String,
    pub hints: Vec<String>,
}

/// One unit of notebook content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text {
        content: String,
        tags: Vec<String>,
    },
    Code {
        code: String,
        tags: Vec<String>,
        execution_count: Option<u32>,
    },
    Quiz(Quiz),
    Challenge(Challenge),
    VisualExercise {
        title: String,
        description: String,
        visual_type: VisualType,
    },
    Fact(String),
}

impl ContentBlock {
    /// Expand the block into the cells it occupies, in reading order
    pub fn into_cells(self) -> Vec<Cell> {
        match self {
            Self::Text { content, tags } => vec![Cell::markdown(&content, tags)],
            Self::Code {
                code,
                tags,
                execution_count,
            } => vec![Cell::code(&code, tags, execution_count)],
            Self::Quiz(quiz) => quiz_cells(&quiz),
            Self::Challenge(challenge) => challenge_cells(&challenge),
            Self::VisualExercise {
                title,
                description,
                visual_type,
            } => visual_cells(&title, &description, &visual_type),
            Self::Fact(fact) => vec![Cell::markdown(
                &format!("### 💡 Did You Know?\n\n{fact}\n"),
                tags(&[TAG_FUN_FACT]),
            )],
        }
    }
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|t| t.to_string()).collect()
}

/// Letter label for the option at `index`: A, B, C, ...
fn option_label(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|i| char::from_u32(u32::from('A') + i))
        .unwrap_or('?')
}

fn quiz_cells(quiz: &Quiz) -> Vec<Cell> {
    let mut content = format!("## 🎯 Quiz Question\n\n**{}**\n\n", quiz.question);
    for (i, option) in quiz.options.iter().enumerate() {
        content.push_str(&format!("- {}) {}\n", option_label(i), option));
    }

    let mut cells = vec![Cell::markdown(&content, tags(&[TAG_QUIZ]))];
    if !quiz.explanation.is_empty() {
        cells.push(Cell::markdown(
            &format!("**Answer Explanation:**\n{}", quiz.explanation),
            tags(&[TAG_QUIZ_ANSWER]),
        ));
    }
    cells
}

fn challenge_cells(challenge: &Challenge) -> Vec<Cell> {
    let mut content = format!(
        "## 🚀 Challenge: {}\n\n{}\n\n",
        challenge.title, challenge.description
    );
    if !challenge.hints.is_empty() {
        content.push_str("\n**Hints:**\n");
        for (i, hint) in challenge.hints.iter().enumerate() {
            content.push_str(&format!("- Hint {}: {}\n", i + 1, hint));
        }
    }

    let code = if challenge.starter_code.is_empty() {
        CHALLENGE_PLACEHOLDER
    } else {
        challenge.starter_code.as_str()
    };

    vec![
        Cell::markdown(&content, tags(&[TAG_CHALLENGE])),
        Cell::code(code, tags(&[TAG_CHALLENGE_CODE]), None),
    ]
}

fn visual_cells(title: &str, description: &str, visual_type: &VisualType) -> Vec<Cell> {
    let content = format!("## 🎨 Visual Exercise: {title}\n\n{description}\n\n");
    let mut cells = vec![Cell::markdown(&content, tags(&[TAG_VISUAL_EXERCISE]))];
    match visual_type {
        VisualType::AsciiArt => {
            cells.push(Cell::code(ASCII_ART_EXAMPLE, tags(&[TAG_VISUAL_CODE]), None));
        }
        VisualType::Other(_) => {}
    }
    cells
}
