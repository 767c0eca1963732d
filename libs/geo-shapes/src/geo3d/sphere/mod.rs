//! Sphere primitive.

use config::constants::PiPolicy;

use crate::error::{check_dimension, ShapeResult};

/// A sphere of a given `radius`.
///
/// # Examples
/// ```
/// use geo_shapes::{PiPolicy, Sphere};
///
/// let unit = Sphere::new(1.0);
/// assert_eq!(unit.surface_area(), 4.0 * 3.14159);
/// assert_eq!(unit.surface_area_with(PiPolicy::Precise), 4.0 * std::f64::consts::PI);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Creates a sphere. Any input is accepted.
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Creates a sphere, rejecting a negative or non-finite radius.
    pub fn try_new(radius: f64) -> ShapeResult<Self> {
        Ok(Self::new(check_dimension("Sphere", "radius", radius)?))
    }

    /// Radius of the sphere.
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// `4/3 * pi * r^3` with the reference pi.
    pub fn volume(&self) -> f64 {
        self.volume_with(PiPolicy::Reference)
    }

    /// `4 * pi * r^2` with the reference pi.
    pub fn surface_area(&self) -> f64 {
        self.surface_area_with(PiPolicy::Reference)
    }

    /// Volume using the pi selected by `pi`.
    pub fn volume_with(&self, pi: PiPolicy) -> f64 {
        4.0 / 3.0 * pi.value() * self.radius.powi(3)
    }

    /// Surface area using the pi selected by `pi`.
    pub fn surface_area_with(&self, pi: PiPolicy) -> f64 {
        4.0 * pi.value() * self.radius.powi(2)
    }
}
