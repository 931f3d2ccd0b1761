//! Quire: component composition and line breaking.
//!
//! Quire lays out a tree of sizeable components (text runs, images, groups)
//! into lines under a pluggable breaking policy, then justifies each line by
//! letting components grow or shrink within their elasticity bounds.
//!
//! # Architecture
//!
//! ```text
//! ComponentTree -> Composition -> BreakStrategy::arrange -> Justifier -> &[Line]
//! ```
//!
//! The engine does not render anything. The lines it returns carry, for each
//! member, the node it refers to and the scale that was committed to it; a
//! renderer reads those back from the tree.
//!
//! # Usage
//!
//! ```
//! use quire::{Component, ComponentTree, Composition, Elasticity, FixedCount};
//!
//! let mut tree = ComponentTree::new();
//! let elasticity = Elasticity::new(0.5, 1.5)?;
//! let words: Vec<_> = (0..3)
//!     .map(|_| Component::new(40.0, 12.0, elasticity).map(|c| tree.leaf(c)))
//!     .collect::<Result<_, _>>()?;
//!
//! let mut composition = Composition::new(FixedCount::new(3)?, 150.0)?;
//! composition.set_components(tree, words)?;
//!
//! let lines = composition.arrange();
//! assert_eq!(lines.len(), 1);
//! assert!((lines[0].effective_width() - 150.0).abs() < 1e-9);
//! # Ok::<(), quire::LayoutError>(())
//! ```

// Core types
pub mod component;
pub mod primitives;
pub mod tree;

// Layout
pub mod breaking;
pub mod justify;
pub mod line;

pub mod composition;
pub mod config;

mod error;

pub use breaking::{BreakStrategy, FixedCount, OptimalBreak, ParagraphAware, SimpleBreak};
pub use component::{Component, Elasticity, GraphicId};
pub use composition::Composition;
pub use config::{LayoutConfig, StrategyConfig};
pub use error::{LayoutError, Result};
pub use justify::Justifier;
pub use line::{Line, LineFit, LineMember, Measure};
pub use primitives::{DEFAULT_TOLERANCE, Size};
pub use tree::{ComponentTree, NodeId, NodeKind};
