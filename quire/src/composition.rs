//! Composition - binds components, a break strategy and a target width.
//!
//! ```text
//! set_components / set_strategy / set_target_width -> stale
//! arrange(): measure -> strategy.arrange -> justify -> commit scales -> cache
//! ```
//!
//! Lines are derived data: any configuration change marks them stale and the
//! next [`Composition::arrange`] rebuilds them from scratch. Arranging again
//! without a change returns the cached lines untouched.

use std::collections::HashSet;

use tracing::debug;

use crate::breaking::BreakStrategy;
use crate::config::{LayoutConfig, validate_target_width};
use crate::error::{LayoutError, Result, invalid};
use crate::justify::Justifier;
use crate::line::{Line, Measure};
use crate::tree::{ComponentTree, NodeId};

/// Owns a component tree and produces justified lines from it.
#[derive(Debug)]
pub struct Composition {
    tree: ComponentTree,
    /// Top-level nodes in reading order.
    sequence: Vec<NodeId>,
    strategy: Box<dyn BreakStrategy>,
    justifier: Justifier,
    target_width: f64,
    lines: Vec<Line>,
    stale: bool,
    /// Number of arrange passes that actually recomputed lines.
    passes: u64,
}

impl Composition {
    /// Create an empty composition.
    pub fn new(strategy: impl BreakStrategy + 'static, target_width: f64) -> Result<Self> {
        Ok(Self {
            tree: ComponentTree::new(),
            sequence: Vec::new(),
            strategy: Box::new(strategy),
            justifier: Justifier::default(),
            target_width: validate_target_width(target_width)?,
            lines: Vec::new(),
            stale: true,
            passes: 0,
        })
    }

    /// Create an empty composition from a validated configuration.
    pub fn from_config(config: &LayoutConfig) -> Result<Self> {
        let mut composition = Self::new(config.strategy.build()?, config.target_width)?;
        composition.justifier = config.justifier()?;
        Ok(composition)
    }

    // =====================================================================
    // Configuration
    // =====================================================================

    /// Replace the components.
    ///
    /// `sequence` lists the top-level nodes in reading order. Each must exist
    /// in `tree`, have no parent, and appear only once.
    pub fn set_components(&mut self, tree: ComponentTree, sequence: Vec<NodeId>) -> Result<()> {
        let mut seen = HashSet::with_capacity(sequence.len());
        for &id in &sequence {
            if !tree.contains(id) {
                return Err(LayoutError::UnknownNode(id));
            }
            if let Some(parent) = tree.parent(id) {
                return Err(invalid(format!(
                    "{id} is a child of {parent}; only top-level nodes can be arranged"
                )));
            }
            if !seen.insert(id) {
                return Err(invalid(format!("{id} appears more than once")));
            }
        }

        self.tree = tree;
        self.sequence = sequence;
        self.stale = true;
        Ok(())
    }

    /// Replace the components, arranging every root of `tree` in creation order.
    pub fn set_tree(&mut self, tree: ComponentTree) {
        self.sequence = tree.roots();
        self.tree = tree;
        self.stale = true;
    }

    pub fn set_strategy(&mut self, strategy: impl BreakStrategy + 'static) {
        self.strategy = Box::new(strategy);
        self.stale = true;
    }

    pub fn set_target_width(&mut self, target_width: f64) -> Result<()> {
        self.target_width = validate_target_width(target_width)?;
        self.stale = true;
        Ok(())
    }

    pub fn set_justifier(&mut self, justifier: Justifier) {
        self.justifier = justifier;
        self.stale = true;
    }

    // =====================================================================
    // Layout
    // =====================================================================

    /// Break and justify the components, or return the cached lines if
    /// nothing changed since the last pass.
    ///
    /// Committed scales are written back into the owned tree. A sequence
    /// node that was attached to a group through [`Composition::tree_mut`]
    /// is laid out only as part of that group.
    pub fn arrange(&mut self) -> &[Line] {
        if !self.stale {
            return &self.lines;
        }

        let tree = &self.tree;
        let mut nested = 0usize;
        let measures: Vec<Measure> = self
            .sequence
            .iter()
            .filter_map(|&id| {
                if tree.parent(id).is_some() {
                    nested += 1;
                    return None;
                }
                tree.measure(id)
            })
            .collect();

        let mut lines = self.strategy.arrange(&measures);
        let flagged = self.justifier.justify_all(&mut lines, self.target_width);

        let tolerance = self.justifier.tolerance();
        for member in lines.iter().flat_map(|line| line.members()) {
            self.tree.commit_scale(member.node, member.scale, tolerance);
        }

        self.passes += 1;
        debug!(
            strategy = self.strategy.name(),
            components = measures.len(),
            nested,
            lines = lines.len(),
            flagged,
            target_width = self.target_width,
            pass = self.passes,
            "arranged composition"
        );

        self.lines = lines;
        self.stale = false;
        &self.lines
    }

    // =====================================================================
    // Accessors
    // =====================================================================

    /// Lines from the last arrange pass (possibly stale).
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn tree(&self) -> &ComponentTree {
        &self.tree
    }

    /// Mutable tree access. Marks the lines stale.
    pub fn tree_mut(&mut self) -> &mut ComponentTree {
        self.stale = true;
        &mut self.tree
    }

    pub fn into_tree(self) -> ComponentTree {
        self.tree
    }

    pub fn sequence(&self) -> &[NodeId] {
        &self.sequence
    }

    pub fn strategy(&self) -> &dyn BreakStrategy {
        &*self.strategy
    }

    pub fn justifier(&self) -> Justifier {
        self.justifier
    }

    pub fn target_width(&self) -> f64 {
        self.target_width
    }

    /// Indexed lines that could not shrink enough.
    pub fn overfull_lines(&self) -> impl Iterator<Item = (usize, &Line)> {
        self.lines.iter().enumerate().filter(|(_, l)| l.is_overfull())
    }

    /// Indexed lines that could not stretch enough.
    pub fn underfull_lines(&self) -> impl Iterator<Item = (usize, &Line)> {
        self.lines.iter().enumerate().filter(|(_, l)| l.is_underfull())
    }
}

// =========================================================================
// Tests
// =========================================================================
