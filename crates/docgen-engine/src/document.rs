//! Rich-text document model: ordered sections of styled paragraphs and
//! text runs, ready for handoff to a binary document serializer.

use serde::{Deserialize, Serialize};

use crate::error::DocGenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justified,
}

/// A contiguous run of text sharing one style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    /// Font size in points
    pub size: u8,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            size: 11,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            size: 11,
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            size: 14,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    pub alignment: Alignment,
    /// Vertical space after the paragraph, in points
    pub spacing_after: u16,
}

impl Paragraph {
    pub fn new(runs: Vec<TextRun>, alignment: Alignment) -> Self {
        Self {
            runs,
            alignment,
            spacing_after: 120,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![TextRun::plain(text)], Alignment::Left)
    }

    pub fn justified(text: impl Into<String>) -> Self {
        Self::new(vec![TextRun::plain(text)], Alignment::Justified)
    }

    pub fn centered_heading(text: impl Into<String>) -> Self {
        Self::new(vec![TextRun::heading(text)], Alignment::Center)
    }

    /// Plain text of the paragraph, runs concatenated
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub paragraphs: Vec<Paragraph>,
}

/// The assembled document, sections in reading order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTree {
    pub title: String,
    pub sections: Vec<Section>,
}

impl DocumentTree {
    /// Serialize the tree to the JSON interchange blob consumed by the
    /// external binary document serializer. The only fallible operation in
    /// the workspace.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, DocGenError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// All paragraph text concatenated, for assertions and debugging
    pub fn full_text(&self) -> String {
        self.sections
            .iter()
            .flat_map(|s| s.paragraphs.iter())
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
