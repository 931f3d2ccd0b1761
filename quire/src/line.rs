//! Lines - one output row of a composition.
//!
//! A line references its members by [`NodeId`] and carries a copy of the
//! measurements the break strategy saw, plus the scale the justifier assigned
//! to each member. Lines never own components; a new layout pass builds a
//! fresh set of lines.

use serde::Serialize;

use crate::component::Elasticity;
use crate::primitives::Size;
use crate::tree::NodeId;

/// Read-only measurement of one top-level node, as seen by break strategies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measure {
    pub node: NodeId,
    pub size: Size,
    pub elasticity: Elasticity,
}

impl Measure {
    #[inline]
    pub fn width(&self) -> f64 {
        self.size.width
    }
}

/// A node placed on a line together with its assigned scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineMember {
    pub node: NodeId,
    pub natural: Size,
    pub elasticity: Elasticity,
    pub scale: f64,
}

impl LineMember {
    pub fn effective_width(&self) -> f64 {
        self.natural.width * self.scale
    }
}

impl From<&Measure> for LineMember {
    fn from(measure: &Measure) -> Self {
        Self {
            node: measure.node,
            natural: measure.size,
            elasticity: measure.elasticity,
            scale: 1.0,
        }
    }
}

/// How well a justified line matches its target width.
///
/// Underfull and overfull are advisory: the line is still complete, it just
/// could not be stretched or shrunk far enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineFit {
    #[default]
    Exact,
    Underfull,
    Overfull,
}

/// An ordered row of members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    members: Vec<LineMember>,
    target_width: f64,
    fit: LineFit,
}

impl Line {
    /// Build an unjustified line. Every member starts at scale 1 and the
    /// target is the natural width until a justifier assigns one.
    pub fn from_measures(measures: &[Measure]) -> Self {
        let members: Vec<LineMember> = measures.iter().map(LineMember::from).collect();
        let target_width = members.iter().map(|m| m.natural.width).sum();
        Self {
            members,
            target_width,
            fit: LineFit::Exact,
        }
    }

    pub fn members(&self) -> &[LineMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Node ids in member order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members.iter().map(|m| m.node)
    }

    /// Sum of natural widths.
    pub fn natural_width(&self) -> f64 {
        self.members.iter().map(|m| m.natural.width).sum()
    }

    /// Sum of scaled widths.
    pub fn effective_width(&self) -> f64 {
        self.members.iter().map(LineMember::effective_width).sum()
    }

    /// Tallest member; heights are not elastic.
    pub fn height(&self) -> f64 {
        self.members
            .iter()
            .map(|m| m.natural.height)
            .fold(0.0, f64::max)
    }

    pub fn target_width(&self) -> f64 {
        self.target_width
    }

    pub fn fit(&self) -> LineFit {
        self.fit
    }

    pub fn is_overfull(&self) -> bool {
        self.fit == LineFit::Overfull
    }

    pub fn is_underfull(&self) -> bool {
        self.fit == LineFit::Underfull
    }

    pub(crate) fn members_mut(&mut self) -> &mut [LineMember] {
        &mut self.members
    }

    pub(crate) fn set_justified(&mut self, target_width: f64, fit: LineFit) {
        self.target_width = target_width;
        self.fit = fit;
    }
}
