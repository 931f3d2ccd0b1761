//! Greedy, paragraph-aware line filling.
//!
//! Nodes are laid out left to right until the next one would push the line
//! past the maximum width, then wrap to a new line. Widths are natural
//! widths; stretching and shrinking happen later in the justifier.

use std::collections::BTreeSet;

use super::{BreakStrategy, paragraphs, validate_max_width};
use crate::error::Result;
use crate::line::{Line, Measure};

/// Greedy fill within paragraphs.
///
/// A paragraph start always begins a new line. A node wider than
/// `max_line_width` gets a line of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphAware {
    max_line_width: f64,
    paragraph_breaks: BTreeSet<usize>,
}

impl ParagraphAware {
    /// `paragraph_breaks` holds the indices of nodes that start a paragraph.
    pub fn new(max_line_width: f64, paragraph_breaks: impl IntoIterator<Item = usize>) -> Result<Self> {
        Ok(Self {
            max_line_width: validate_max_width(max_line_width)?,
            paragraph_breaks: paragraph_breaks.into_iter().collect(),
        })
    }

    pub fn max_line_width(&self) -> f64 {
        self.max_line_width
    }

    pub fn paragraph_breaks(&self) -> &BTreeSet<usize> {
        &self.paragraph_breaks
    }

    fn fill(&self, paragraph: &[Measure], lines: &mut Vec<Line>) {
        let mut start = 0;
        let mut line_width = 0.0;

        for (i, item) in paragraph.iter().enumerate() {
            // Wrap unless the line is still empty
            if i > start && line_width + item.width() > self.max_line_width {
                lines.push(Line::from_measures(&paragraph[start..i]));
                start = i;
                line_width = 0.0;
            }
            line_width += item.width();
        }

        if start < paragraph.len() {
            lines.push(Line::from_measures(&paragraph[start..]));
        }
    }
}

impl BreakStrategy for ParagraphAware {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn arrange(&self, items: &[Measure]) -> Vec<Line> {
        let mut lines = Vec::new();
        for paragraph in paragraphs(items, &self.paragraph_breaks) {
            self.fill(paragraph, &mut lines);
        }
        lines
    }
}

// =========================================================================
// Tests
// =========================================================================
