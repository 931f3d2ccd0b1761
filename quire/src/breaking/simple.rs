//! One node per line.

use super::BreakStrategy;
use crate::line::{Line, Measure};

/// Every node starts a new line. The default when no flow is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleBreak;

impl BreakStrategy for SimpleBreak {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn arrange(&self, items: &[Measure]) -> Vec<Line> {
        items
            .iter()
            .map(|item| Line::from_measures(std::slice::from_ref(item)))
            .collect()
    }
}
