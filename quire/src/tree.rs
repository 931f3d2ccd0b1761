//! Component tree.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Each node is
//! either a leaf [`Component`] or a group owning an ordered list of children.
//! The tree structure is encoded via child lists on groups plus a `parent`
//! link on every node; the parent link is a lookup aid only, ownership always
//! flows from the arena.
//!
//! A group is sized from its children: widths add up (horizontal flow),
//! heights take the maximum. An empty group is a zero-size placeholder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::component::{Component, Elasticity};
use crate::error::{LayoutError, Result};
use crate::justify::distribute;
use crate::line::Measure;
use crate::primitives::Size;

/// Index of a node in a [`ComponentTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node holds.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// An atomic component.
    Leaf(Component),
    /// A composite; its size and elasticity are derived from `children`.
    Group { children: Vec<NodeId> },
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
}

/// Arena-backed tree of components and groups.
#[derive(Debug, Clone, Default)]
pub struct ComponentTree {
    nodes: Vec<Node>,
}

impl ComponentTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    // =====================================================================
    // Construction
    // =====================================================================

    /// Add a detached leaf.
    pub fn leaf(&mut self, component: Component) -> NodeId {
        self.push(NodeKind::Leaf(component))
    }

    /// Add a detached, empty group.
    pub fn group(&mut self) -> NodeId {
        self.push(NodeKind::Group {
            children: Vec::new(),
        })
    }

    /// Add a group and attach `children` to it in order.
    pub fn group_of(&mut self, children: impl IntoIterator<Item = NodeId>) -> Result<NodeId> {
        let group = self.group();
        for child in children {
            self.add_child(group, child)?;
        }
        Ok(group)
    }

    /// Append `child` to `parent`'s children.
    ///
    /// A child that already has a parent is detached from it first. Fails
    /// with `CycleDetected` if `child` is `parent` or one of its ancestors.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check(parent)?;
        self.check(child)?;
        if !self.is_group(parent) {
            return Err(LayoutError::NotAGroup(parent));
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(LayoutError::CycleDetected { parent, child });
        }

        if let Some(old_parent) = self.nodes[child.index()].parent {
            self.detach(old_parent, child);
        }

        if let NodeKind::Group { children } = &mut self.nodes[parent.index()].kind {
            children.push(child);
        }
        self.nodes[child.index()].parent = Some(parent);
        Ok(())
    }

    /// Detach `child` from `parent`. Returns false if it was not a child of `parent`.
    ///
    /// The child becomes a detached root.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool> {
        self.check(parent)?;
        self.check(child)?;
        if self.nodes[child.index()].parent != Some(parent) {
            return Ok(false);
        }
        self.detach(parent, child);
        Ok(true)
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { kind, parent: None });
        id
    }

    fn detach(&mut self, parent: NodeId, child: NodeId) {
        if let NodeKind::Group { children } = &mut self.nodes[parent.index()].kind {
            children.retain(|&c| c != child);
        }
        self.nodes[child.index()].parent = None;
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(LayoutError::UnknownNode(id))
        }
    }

    // =====================================================================
    // Queries
    // =====================================================================

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.index()).map(|n| &n.kind)
    }

    /// The component stored at a leaf, or `None` for groups.
    pub fn component(&self, id: NodeId) -> Option<&Component> {
        match self.kind(id) {
            Some(NodeKind::Leaf(c)) => Some(c),
            _ => None,
        }
    }

    pub fn component_mut(&mut self, id: NodeId) -> Option<&mut Component> {
        match self.nodes.get_mut(id.index()).map(|n| &mut n.kind) {
            Some(NodeKind::Leaf(c)) => Some(c),
            _ => None,
        }
    }

    pub fn is_group(&self, id: NodeId) -> bool {
        matches!(self.kind(id), Some(NodeKind::Group { .. }))
    }

    /// Children of a group; empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.kind(id) {
            Some(NodeKind::Group { children }) => children,
            _ => &[],
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|n| n.parent)
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.parent(id);
        while let Some(node) = cursor {
            out.push(node);
            cursor = self.parent(node);
        }
        out
    }

    /// Whether `candidate` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, candidate: NodeId, id: NodeId) -> bool {
        let mut cursor = self.parent(id);
        while let Some(node) = cursor {
            if node == candidate {
                return true;
            }
            cursor = self.parent(node);
        }
        false
    }

    /// Descendants of `id` in pre-order, not including `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev());
        }
        out
    }

    /// Leaf nodes under `id` in reading order (`id` itself if it is a leaf).
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        if self.component(id).is_some() {
            return vec![id];
        }
        self.descendants(id)
            .into_iter()
            .filter(|&n| self.component(n).is_some())
            .collect()
    }

    /// Nodes without a parent, in creation order.
    pub fn roots(&self) -> Vec<NodeId> {
        (0..self.nodes.len())
            .map(|i| NodeId(i as u32))
            .filter(|&id| self.parent(id).is_none())
            .collect()
    }

    // =====================================================================
    // Sizing
    // =====================================================================

    /// Natural size: intrinsic for leaves, derived from children for groups.
    pub fn natural_size(&self, id: NodeId) -> Size {
        match self.kind(id) {
            Some(NodeKind::Leaf(c)) => c.natural_size(),
            Some(NodeKind::Group { children }) => children
                .iter()
                .fold(Size::ZERO, |acc, &child| acc.beside(self.natural_size(child))),
            None => Size::ZERO,
        }
    }

    pub fn natural_width(&self, id: NodeId) -> f64 {
        self.natural_size(id).width
    }

    pub fn natural_height(&self, id: NodeId) -> f64 {
        self.natural_size(id).height
    }

    /// Current width. For groups this is the sum over children and ignores
    /// any scale a group might have been given as a line member.
    pub fn effective_width(&self, id: NodeId) -> f64 {
        match self.kind(id) {
            Some(NodeKind::Leaf(c)) => c.effective_width(),
            Some(NodeKind::Group { children }) => {
                children.iter().map(|&child| self.effective_width(child)).sum()
            }
            None => 0.0,
        }
    }

    /// Elasticity of a node.
    ///
    /// A group's bounds aggregate its children's headroom, so committing a
    /// scale within them can always be spread over the children without
    /// pushing any leaf past its own bounds. Empty groups are rigid.
    pub fn elasticity(&self, id: NodeId) -> Elasticity {
        match self.kind(id) {
            Some(NodeKind::Leaf(c)) => c.elasticity(),
            Some(NodeKind::Group { children }) => {
                let natural = self.natural_width(id);
                if natural <= 0.0 {
                    return Elasticity::RIGID;
                }
                let (stretch, shrink) = children.iter().fold((0.0, 0.0), |(st, sh), &child| {
                    let e = self.elasticity(child);
                    let w = self.natural_width(child);
                    (st + e.stretch_headroom(w), sh + e.shrink_headroom(w))
                });
                Elasticity {
                    shrink: 1.0 - shrink / natural,
                    stretch: 1.0 + stretch / natural,
                }
            }
            None => Elasticity::RIGID,
        }
    }

    /// Read-only measurement handed to break strategies.
    pub fn measure(&self, id: NodeId) -> Option<Measure> {
        self.contains(id).then(|| Measure {
            node: id,
            size: self.natural_size(id),
            elasticity: self.elasticity(id),
        })
    }

    /// Commit a justified scale to a node.
    ///
    /// Leaves store it directly. Groups spread the width it implies over
    /// their children with the justifier's distribution.
    pub(crate) fn commit_scale(&mut self, id: NodeId, scale: f64, tolerance: f64) {
        let children = match self.nodes.get_mut(id.index()).map(|n| &mut n.kind) {
            Some(NodeKind::Leaf(c)) => {
                c.commit_scale(scale);
                return;
            }
            Some(NodeKind::Group { children }) => children.clone(),
            None => return,
        };

        let target = self.natural_width(id) * scale;
        let items: Vec<(f64, Elasticity)> = children
            .iter()
            .map(|&child| (self.natural_width(child), self.elasticity(child)))
            .collect();
        let distribution = distribute(&items, target, tolerance);
        for (child, child_scale) in children.into_iter().zip(distribution.scales) {
            self.commit_scale(child, child_scale, tolerance);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
