//! Solid shapes measured by volume and surface area.
//!
//! Circular solids ([`Sphere`], [`Cylinder`]) default to the reference pi
//! from [`config::constants::REFERENCE_PI`]; their `*_with` variants take a
//! [`PiPolicy`](config::constants::PiPolicy) instead.

pub mod cuboid;
pub mod cylinder;
pub mod pyramid;
pub mod sphere;

pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use pyramid::Pyramid;
pub use sphere::Sphere;
