//! Justification: scale line members so the line matches a target width.
//!
//! The difference between natural and target width is spread over members in
//! proportion to their headroom in the needed direction: stretch headroom
//! `(stretch - 1) * width` when the line is short, shrink headroom
//! `(1 - shrink) * width` when it is long. Each resulting scale is clamped to
//! the member's bounds. A line is flagged underfull or overfull when any
//! member had to be clamped or the resulting widths miss the target.
//!
//! The same distribution is reused by the tree to spread a scale committed to
//! a group over that group's children.

use tracing::trace;

use crate::component::Elasticity;
use crate::error::{Result, invalid};
use crate::line::{Line, LineFit};
use crate::primitives::{DEFAULT_TOLERANCE, approx_eq};

/// Result of spreading a width difference over a set of items.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Distribution {
    pub scales: Vec<f64>,
    pub fit: LineFit,
}

/// Distribute `target - Σ width` over `items` (natural width, elasticity).
pub(crate) fn distribute(items: &[(f64, Elasticity)], target: f64, tolerance: f64) -> Distribution {
    let natural: f64 = items.iter().map(|(width, _)| width).sum();
    let difference = target - natural;

    if approx_eq(natural, target, tolerance) {
        return Distribution {
            scales: vec![1.0; items.len()],
            fit: LineFit::Exact,
        };
    }

    let stretching = difference > 0.0;
    let headroom = |e: &Elasticity, width: f64| {
        if stretching {
            e.stretch_headroom(width)
        } else {
            e.shrink_headroom(width)
        }
    };
    let miss = if stretching {
        LineFit::Underfull
    } else {
        LineFit::Overfull
    };

    let total: f64 = items.iter().map(|(width, e)| headroom(e, *width)).sum();
    if total <= 0.0 {
        return Distribution {
            scales: vec![1.0; items.len()],
            fit: miss,
        };
    }

    // Share of the difference each unit of headroom absorbs. Past 1.0 every
    // elastic item ends up clamped at its bound.
    let ratio = difference.abs() / total;
    let direction = if stretching { 1.0 } else { -1.0 };

    let mut achieved = 0.0;
    let mut clamped = false;
    let scales: Vec<f64> = items
        .iter()
        .map(|(width, e)| {
            let scale = if *width > 0.0 {
                let raw = 1.0 + direction * ratio * headroom(e, *width) / width;
                let scale = e.clamp(raw);
                clamped |= scale != raw;
                scale
            } else {
                1.0
            };
            achieved += width * scale;
            scale
        })
        .collect();

    let fit = if !clamped && approx_eq(achieved, target, tolerance) {
        LineFit::Exact
    } else {
        miss
    };
    Distribution { scales, fit }
}

// =========================================================================
// Justifier
// =========================================================================

/// Assigns per-member scales so lines match a target width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Justifier {
    tolerance: f64,
}

impl Justifier {
    /// Create a justifier comparing widths within `tolerance`.
    pub fn new(tolerance: f64) -> Result<Self> {
        if !(tolerance >= 0.0 && tolerance.is_finite()) {
            return Err(invalid(format!(
                "tolerance must be a finite value >= 0, got {tolerance}"
            )));
        }
        Ok(Self { tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Justify one line to `target_width`, storing scales and fit on the line.
    pub fn justify(&self, line: &mut Line, target_width: f64) -> LineFit {
        let items: Vec<(f64, Elasticity)> = line
            .members()
            .iter()
            .map(|m| (m.natural.width, m.elasticity))
            .collect();
        let distribution = distribute(&items, target_width, self.tolerance);

        for (member, scale) in line.members_mut().iter_mut().zip(&distribution.scales) {
            member.scale = *scale;
        }
        line.set_justified(target_width, distribution.fit);

        trace!(
            members = line.len(),
            natural = line.natural_width(),
            effective = line.effective_width(),
            target = target_width,
            fit = ?distribution.fit,
            "justified line"
        );
        distribution.fit
    }

    /// Justify every line. Returns how many lines ended up flagged.
    pub fn justify_all(&self, lines: &mut [Line], target_width: f64) -> usize {
        lines
            .iter_mut()
            .map(|line| self.justify(line, target_width))
            .filter(|fit| *fit != LineFit::Exact)
            .count()
    }
}

impl Default for Justifier {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
