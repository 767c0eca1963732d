//! Axis-free rectangle described by its two edge lengths.

use glam::DVec2;

use crate::error::{check_dimension, ShapeResult};

/// A rectangle with `width` and `height`.
///
/// # Examples
/// ```
/// use geo_shapes::Rectangle;
///
/// let rect = Rectangle::new(5.0, 3.0);
/// assert_eq!(rect.area(), 15.0);
/// assert_eq!(rect.perimeter(), 16.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a rectangle. Any input is accepted, including zero and
    /// negative lengths.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a rectangle, rejecting negative or non-finite lengths.
    ///
    /// # Examples
    /// ```
    /// use geo_shapes::Rectangle;
    /// assert!(Rectangle::try_new(0.0, 5.0).is_ok());
    /// assert!(Rectangle::try_new(-1.0, 5.0).is_err());
    /// ```
    pub fn try_new(width: f64, height: f64) -> ShapeResult<Self> {
        Ok(Self::new(
            check_dimension("Rectangle", "width", width)?,
            check_dimension("Rectangle", "height", height)?,
        ))
    }

    /// Creates a rectangle from a `(width, height)` vector.
    pub const fn from_size(size: DVec2) -> Self {
        Self::new(size.x, size.y)
    }

    /// Width of the rectangle.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Height of the rectangle.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// The `(width, height)` vector.
    pub const fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// `width * height`.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// `2 * (width + height)`.
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
}
