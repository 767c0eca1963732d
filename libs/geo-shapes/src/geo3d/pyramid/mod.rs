//! Right pyramid over a rectangular base.
//!
//! The slant height is taken from the half base width only, and that single
//! slant height is applied to all four lateral faces. For square bases this
//! is the true slant height; for other bases the lateral area is an
//! approximation kept for compatibility with the reference outputs.

use crate::error::{check_dimension, ShapeResult};

/// A pyramid with a `base_width` x `base_depth` base and apex `height`.
///
/// # Examples
/// ```
/// use geo_shapes::Pyramid;
///
/// let pyramid = Pyramid::new(6.0, 8.0, 10.0);
/// assert!((pyramid.volume() - 160.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pyramid {
    base_width: f64,
    base_depth: f64,
    height: f64,
}

impl Pyramid {
    /// Creates a pyramid. Any input is accepted.
    pub const fn new(base_width: f64, base_depth: f64, height: f64) -> Self {
        Self {
            base_width,
            base_depth,
            height,
        }
    }

    /// Creates a pyramid, rejecting negative or non-finite dimensions.
    pub fn try_new(base_width: f64, base_depth: f64, height: f64) -> ShapeResult<Self> {
        Ok(Self::new(
            check_dimension("Pyramid", "base_width", base_width)?,
            check_dimension("Pyramid", "base_depth", base_depth)?,
            check_dimension("Pyramid", "height", height)?,
        ))
    }

    /// Width of the base.
    pub const fn base_width(&self) -> f64 {
        self.base_width
    }

    /// Depth of the base.
    pub const fn base_depth(&self) -> f64 {
        self.base_depth
    }

    /// Apex height above the base.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// `base_width * base_depth`.
    pub fn base_area(&self) -> f64 {
        self.base_width * self.base_depth
    }

    /// `sqrt((base_width / 2)^2 + height^2)`; `base_depth` does not enter.
    pub fn slant_height(&self) -> f64 {
        (self.base_width / 2.0).hypot(self.height)
    }

    /// `2 * (base_width + base_depth) * slant_height`.
    pub fn lateral_area(&self) -> f64 {
        2.0 * (self.base_width + self.base_depth) * self.slant_height()
    }

    /// `base_width * base_depth * height / 3`.
    pub fn volume(&self) -> f64 {
        self.base_area() * self.height / 3.0
    }

    /// Base plus lateral area.
    pub fn surface_area(&self) -> f64 {
        self.base_area() + self.lateral_area()
    }
}
