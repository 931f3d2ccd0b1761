//! Minimum-badness line breaking.
//!
//! Chooses break points per paragraph by dynamic programming over every
//! feasible line, instead of committing to the first line that fits. Inner
//! lines are scored by the cube of their slack ratio, the final line by the
//! square of its rag, and single-node inner lines pay a fixed penalty.

use std::collections::BTreeSet;

use super::{BreakStrategy, paragraphs, validate_max_width};
use crate::error::Result;
use crate::line::{Line, Measure};

const INNER_WEIGHT: f64 = 2400.0;
const LAST_LINE_WEIGHT: f64 = 120.0;
const SINGLE_ITEM_PENALTY: f64 = 3000.0;

/// Total-fit breaking within paragraphs.
///
/// Same configuration and guarantees as
/// [`ParagraphAware`](super::ParagraphAware): paragraph starts force a new
/// line and a node wider than `max_line_width` sits alone.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalBreak {
    max_line_width: f64,
    paragraph_breaks: BTreeSet<usize>,
}

impl OptimalBreak {
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

    fn badness(&self, width: f64, members: usize, is_last: bool) -> f64 {
        let max = self.max_line_width;
        if width > max {
            // Only reachable for a lone oversized node, which has no alternative.
            return 0.0;
        }
        let slack = max - width;
        if is_last {
            let rag = slack / max;
            return rag * rag * LAST_LINE_WEIGHT;
        }
        let ratio = (slack / max).clamp(0.0, 1.0);
        let mut badness = ratio * ratio * ratio * INNER_WEIGHT;
        if members == 1 {
            badness += SINGLE_ITEM_PENALTY;
        }
        badness
    }

    /// Line end indices (exclusive) for one paragraph.
    fn breaks_for(&self, paragraph: &[Measure]) -> Vec<usize> {
        let n = paragraph.len();
        let mut cost = vec![f64::INFINITY; n + 1];
        let mut next = vec![n; n + 1];
        cost[n] = 0.0;

        for i in (0..n).rev() {
            let mut width = 0.0;
            for j in i..n {
                width += paragraph[j].width();
                if j > i && width > self.max_line_width {
                    break;
                }
                let candidate = self.badness(width, j + 1 - i, j + 1 == n) + cost[j + 1];
                if candidate < cost[i] {
                    cost[i] = candidate;
                    next[i] = j + 1;
                }
            }
        }

        let mut ends = Vec::with_capacity(n / 2 + 1);
        let mut cursor = 0;
        while cursor < n {
            cursor = next[cursor];
            ends.push(cursor);
        }
        ends
    }
}

impl BreakStrategy for OptimalBreak {
    fn name(&self) -> &'static str {
        "optimal"
    }

    fn arrange(&self, items: &[Measure]) -> Vec<Line> {
        let mut lines = Vec::new();
        for paragraph in paragraphs(items, &self.paragraph_breaks) {
            let mut start = 0;
            for end in self.breaks_for(paragraph) {
                lines.push(Line::from_measures(&paragraph[start..end]));
                start = end;
            }
        }
        lines
    }
}

// =========================================================================
// Tests
// =========================================================================
