//! Cylinder primitive.

use config::constants::PiPolicy;

use crate::error::{check_dimension, ShapeResult};

/// A closed right circular cylinder of `radius` and `height`.
///
/// # Examples
/// ```
/// use geo_shapes::Cylinder;
///
/// let unit = Cylinder::new(1.0, 1.0);
/// assert_eq!(unit.volume(), 3.14159);
/// assert_eq!(Cylinder::new(0.0, 12.0).surface_area(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    radius: f64,
    height: f64,
}

impl Cylinder {
    /// Creates a cylinder. Any input is accepted.
    pub const fn new(radius: f64, height: f64) -> Self {
        Self { radius, height }
    }

    /// Creates a cylinder, rejecting a negative or non-finite radius or height.
    pub fn try_new(radius: f64, height: f64) -> ShapeResult<Self> {
        Ok(Self::new(
            check_dimension("Cylinder", "radius", radius)?,
            check_dimension("Cylinder", "height", height)?,
        ))
    }

    /// Radius of both end caps.
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance between the end caps.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Area of one end cap with the reference pi.
    pub fn base_area(&self) -> f64 {
        self.base_area_with(PiPolicy::Reference)
    }

    /// Area of the curved side with the reference pi.
    pub fn lateral_area(&self) -> f64 {
        self.lateral_area_with(PiPolicy::Reference)
    }

    /// End cap area using the pi selected by `pi`.
    pub fn base_area_with(&self, pi: PiPolicy) -> f64 {
        pi.value() * self.radius.powi(2)
    }

    /// Curved side area using the pi selected by `pi`.
    pub fn lateral_area_with(&self, pi: PiPolicy) -> f64 {
        2.0 * pi.value() * self.radius * self.height
    }

    /// `pi * r^2 * h` with the reference pi.
    pub fn volume(&self) -> f64 {
        self.volume_with(PiPolicy::Reference)
    }

    /// `2 * pi * r * (r + h)` with the reference pi, both caps included.
    pub fn surface_area(&self) -> f64 {
        self.surface_area_with(PiPolicy::Reference)
    }

    /// Volume using the pi selected by `pi`.
    pub fn volume_with(&self, pi: PiPolicy) -> f64 {
        pi.value() * self.radius.powi(2) * self.height
    }

    /// Total surface area using the pi selected by `pi`.
    pub fn surface_area_with(&self, pi: PiPolicy) -> f64 {
        2.0 * pi.value() * self.radius * (self.radius + self.height)
    }
}
