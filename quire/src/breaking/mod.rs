//! Line breaking strategies.
//!
//! A [`BreakStrategy`] partitions a sequence of measured nodes into lines.
//! Strategies only ever see [`Measure`]s, never the tree itself, so they
//! cannot change a component while arranging it.
//!
//! # Built-in strategies
//!
//! - [`SimpleBreak`]: one node per line
//! - [`FixedCount`]: `n` nodes per line
//! - [`ParagraphAware`]: greedy fill up to a maximum width, paragraphs always
//!   start a new line
//! - [`OptimalBreak`]: minimum total badness per paragraph
//!
//! All of them are reachable through [`StrategyConfig`](crate::config::StrategyConfig).
//! Other policies plug in by implementing the trait.

mod fixed_count;
mod optimal;
mod paragraph;
mod simple;

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Result, invalid};
use crate::line::{Line, Measure};

pub use fixed_count::FixedCount;
pub use optimal::OptimalBreak;
pub use paragraph::ParagraphAware;
pub use simple::SimpleBreak;

/// A line breaking policy.
///
/// Implementations must be pure: the same input always yields the same
/// lines, and every input measure appears exactly once, in order.
pub trait BreakStrategy: fmt::Debug + Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Partition `items` into unjustified lines.
    fn arrange(&self, items: &[Measure]) -> Vec<Line>;
}

impl<S: BreakStrategy + ?Sized> BreakStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn arrange(&self, items: &[Measure]) -> Vec<Line> {
        (**self).arrange(items)
    }
}

// =========================================================================
// Shared helpers
// =========================================================================

/// Check a maximum line width for the width-driven strategies.
pub(crate) fn validate_max_width(max_line_width: f64) -> Result<f64> {
    if max_line_width > 0.0 && max_line_width.is_finite() {
        Ok(max_line_width)
    } else {
        Err(invalid(format!(
            "max line width must be a positive finite value, got {max_line_width}"
        )))
    }
}

/// Split `items` at paragraph starts.
///
/// Each index in `breaks` marks the first item of a new paragraph. Index 0
/// and indices past the end are no-ops.
pub(crate) fn paragraphs<'a>(items: &'a [Measure], breaks: &BTreeSet<usize>) -> Vec<&'a [Measure]> {
    let mut out = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0;
    for &at in breaks.range(1..items.len().max(1)) {
        out.push(&items[start..at]);
        start = at;
    }
    if start < items.len() {
        out.push(&items[start..]);
    }
    out
}

// =========================================================================
// Tests
// =========================================================================
