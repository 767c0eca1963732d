//! Closed-form formulas for simple 2D and 3D shapes.
//!
//! Every shape is an immutable `Copy` value. Queries recompute their result
//! from the stored dimensions on each call; nothing is cached.
//!
//! - [`geo2d`]: [`Rectangle`] and [`Triangle`] expose `area()` and `perimeter()`.
//! - [`geo3d`]: [`Cuboid`], [`Pyramid`], [`Sphere`] and [`Cylinder`] expose
//!   `volume()` and `surface_area()`.
//!
//! `new` constructors accept any input and let it flow through the formulas.
//! `try_new` constructors reject non-physical dimensions with a [`ShapeError`].
//!
//! ```rust
//! use geo_shapes::{Cylinder, Rectangle, Triangle};
//!
//! assert_eq!(Rectangle::new(5.0, 3.0).area(), 15.0);
//! assert!((Triangle::new(3.0, 4.0, 5.0).area() - 6.0).abs() < 1e-9);
//! assert_eq!(Cylinder::new(0.0, 12.0).volume(), 0.0);
//! ```

pub mod error;
pub mod geo2d;
pub mod geo3d;

pub use config::constants::{PiPolicy, REFERENCE_PI};
pub use error::{ShapeError, ShapeResult};
pub use geo2d::{Rectangle, Triangle};
pub use geo3d::{Cuboid, Cylinder, Pyramid, Sphere};
