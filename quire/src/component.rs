//! Leaf components - the atoms of a composition.
//!
//! A component has a fixed natural size and elasticity bounds chosen at
//! construction. The only thing that ever changes afterwards is its scale.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result, invalid};
use crate::primitives::Size;

// =========================================================================
// Elasticity
// =========================================================================

/// How far a component may shrink or stretch, as multipliers of its natural width.
///
/// `shrink` lies in `(0, 1]` and `stretch` is at least `1`. Both equal to `1`
/// describes a rigid component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Elasticity {
    pub shrink: f64,
    pub stretch: f64,
}

impl Elasticity {
    /// Neither shrinks nor stretches.
    pub const RIGID: Self = Self {
        shrink: 1.0,
        stretch: 1.0,
    };

    /// Create validated elasticity bounds.
    pub fn new(shrink: f64, stretch: f64) -> Result<Self> {
        Self { shrink, stretch }.validate()
    }

    /// Same amount of give in both directions, e.g. `0.25` -> `[0.75, 1.25]`.
    pub fn symmetric(amount: f64) -> Result<Self> {
        Self::new(1.0 - amount, 1.0 + amount)
    }

    /// Check the bounds, returning `self` when they are usable.
    pub fn validate(self) -> Result<Self> {
        if !(self.shrink > 0.0 && self.shrink <= 1.0) {
            return Err(invalid(format!(
                "shrinkability must be in (0, 1], got {}",
                self.shrink
            )));
        }
        if !(self.stretch >= 1.0 && self.stretch.is_finite()) {
            return Err(invalid(format!(
                "stretchability must be a finite value >= 1, got {}",
                self.stretch
            )));
        }
        Ok(self)
    }

    pub fn is_rigid(&self) -> bool {
        self.shrink == 1.0 && self.stretch == 1.0
    }

    /// Whether `scale` lies within `[shrink, stretch]`.
    #[inline]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.shrink && scale <= self.stretch
    }

    #[inline]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.shrink, self.stretch)
    }

    /// Width a component of natural `width` can gain.
    #[inline]
    pub fn stretch_headroom(&self, width: f64) -> f64 {
        (self.stretch - 1.0) * width
    }

    /// Width a component of natural `width` can give up.
    #[inline]
    pub fn shrink_headroom(&self, width: f64) -> f64 {
        (1.0 - self.shrink) * width
    }
}

impl Default for Elasticity {
    fn default() -> Self {
        Self::RIGID
    }
}

// =========================================================================
// Component
// =========================================================================

/// Opaque handle to a graphic owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphicId(pub u64);

/// An atomic, sizeable layout unit: a text run, an image, a piece of glue.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    size: Size,
    elasticity: Elasticity,
    scale: f64,
    text: Option<String>,
    graphic: Option<GraphicId>,
}

impl Component {
    /// Create a component with a natural size and elasticity bounds.
    ///
    /// Both dimensions must be finite and strictly positive.
    pub fn new(width: f64, height: f64, elasticity: Elasticity) -> Result<Self> {
        if !(width > 0.0 && width.is_finite()) {
            return Err(invalid(format!("natural width must be positive, got {width}")));
        }
        if !(height > 0.0 && height.is_finite()) {
            return Err(invalid(format!("natural height must be positive, got {height}")));
        }
        Ok(Self {
            size: Size::new(width, height),
            elasticity: elasticity.validate()?,
            scale: 1.0,
            text: None,
            graphic: None,
        })
    }

    /// A rigid component.
    pub fn rigid(width: f64, height: f64) -> Result<Self> {
        Self::new(width, height, Elasticity::RIGID)
    }

    /// Attach the text this component stands for.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach a renderer-owned graphic.
    pub fn with_graphic(mut self, graphic: GraphicId) -> Self {
        self.graphic = Some(graphic);
        self
    }

    pub fn natural_size(&self) -> Size {
        self.size
    }

    pub fn natural_width(&self) -> f64 {
        self.size.width
    }

    pub fn natural_height(&self) -> f64 {
        self.size.height
    }

    pub fn elasticity(&self) -> Elasticity {
        self.elasticity
    }

    pub fn stretchability(&self) -> f64 {
        self.elasticity.stretch
    }

    pub fn shrinkability(&self) -> f64 {
        self.elasticity.shrink
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn graphic(&self) -> Option<GraphicId> {
        self.graphic
    }

    /// Grow to `new_scale`, which must lie in `[1, stretchability]`.
    ///
    /// On failure the current scale is left untouched.
    pub fn grow(&mut self, new_scale: f64) -> Result<()> {
        self.set_within(new_scale, 1.0, self.elasticity.stretch)
    }

    /// Shrink to `new_scale`, which must lie in `[shrinkability, 1]`.
    ///
    /// On failure the current scale is left untouched.
    pub fn shrink(&mut self, new_scale: f64) -> Result<()> {
        self.set_within(new_scale, self.elasticity.shrink, 1.0)
    }

    /// Return to natural size.
    pub fn reset(&mut self) {
        self.scale = 1.0;
    }

    /// Natural width times the current scale.
    pub fn effective_width(&self) -> f64 {
        self.size.width * self.scale
    }

    /// Heights are not elastic.
    pub fn effective_height(&self) -> f64 {
        self.size.height
    }

    /// Store a justified scale, clamped into the elasticity bounds.
    pub(crate) fn commit_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = self.elasticity.clamp(scale);
        }
    }

    fn set_within(&mut self, new_scale: f64, min: f64, max: f64) -> Result<()> {
        // NaN fails both comparisons and is rejected here too.
        if !(new_scale >= min && new_scale <= max) {
            return Err(LayoutError::OutOfBounds {
                requested: new_scale,
                min,
                max,
            });
        }
        self.scale = new_scale;
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================
