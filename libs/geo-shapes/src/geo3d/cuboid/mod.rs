//! Rectangular box.

use glam::DVec3;

use crate::error::{check_dimension, ShapeResult};

/// A box with `width`, `height` and `depth`.
///
/// # Examples
/// ```
/// use geo_shapes::Cuboid;
///
/// let cuboid = Cuboid::new(3.0, 4.0, 5.0);
/// assert_eq!(cuboid.volume(), 60.0);
/// assert_eq!(cuboid.surface_area(), 94.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    width: f64,
    height: f64,
    depth: f64,
}

impl Cuboid {
    /// Creates a cuboid. Any input is accepted.
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Creates a cuboid, rejecting negative or non-finite dimensions.
    pub fn try_new(width: f64, height: f64, depth: f64) -> ShapeResult<Self> {
        Ok(Self::new(
            check_dimension("Cuboid", "width", width)?,
            check_dimension("Cuboid", "height", height)?,
            check_dimension("Cuboid", "depth", depth)?,
        ))
    }

    /// Creates a cuboid from a `(width, height, depth)` vector.
    ///
    /// # Examples
    /// ```
    /// use geo_shapes::Cuboid;
    /// use glam::DVec3;
    ///
    /// let unit = Cuboid::from_size(DVec3::ONE);
    /// assert_eq!(unit.surface_area(), 6.0);
    /// ```
    pub const fn from_size(size: DVec3) -> Self {
        Self::new(size.x, size.y, size.z)
    }

    /// Width of the cuboid.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Height of the cuboid.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Depth of the cuboid.
    pub const fn depth(&self) -> f64 {
        self.depth
    }

    /// The `(width, height, depth)` vector.
    pub const fn size(&self) -> DVec3 {
        DVec3::new(self.width, self.height, self.depth)
    }

    /// `width * height * depth`.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// Total area of the six faces.
    pub fn surface_area(&self) -> f64 {
        2.0 * (self.width * self.height + self.width * self.depth + self.height * self.depth)
    }
}

#[cfg(test)]
mod tests;
