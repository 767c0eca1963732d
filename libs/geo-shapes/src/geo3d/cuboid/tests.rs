//! Tests for the cuboid formulas.

use glam::DVec3;

use crate::geo3d::cuboid::Cuboid;
use crate::ShapeError;

#[test]
fn test_cuboid_stores_dimensions() {
    let cuboid = Cuboid::new(3.0, 4.0, 5.0);
    assert_eq!(cuboid.width(), 3.0);
    assert_eq!(cuboid.height(), 4.0);
    assert_eq!(cuboid.depth(), 5.0);
}

#[test]
fn test_cuboid_volume() {
    assert_eq!(Cuboid::new(3.0, 4.0, 5.0).volume(), 60.0);
    assert_eq!(Cuboid::new(2.5, 3.0, 4.0).volume(), 2.5 * 3.0 * 4.0);
}

/// 2 * (3*4 + 3*5 + 4*5) = 94.
#[test]
fn test_cuboid_surface_area() {
    assert_eq!(Cuboid::new(3.0, 4.0, 5.0).surface_area(), 94.0);
    assert_eq!(Cuboid::new(1.0, 1.0, 1.0).surface_area(), 6.0);
}

/// A zero width flattens the box into a single doubled 4x5 face.
#[test]
fn test_cuboid_zero_dimension() {
    let flat = Cuboid::new(0.0, 4.0, 5.0);
    assert_eq!(flat.volume(), 0.0);
    assert_eq!(flat.surface_area(), 40.0);
}

#[test]
fn test_cuboid_size_roundtrip() {
    let size = DVec3::new(3.0, 4.0, 5.0);
    assert_eq!(Cuboid::from_size(size), Cuboid::new(3.0, 4.0, 5.0));
    assert_eq!(Cuboid::new(3.0, 4.0, 5.0).size(), size);
}

#[test]
fn test_cuboid_try_new() {
    assert!(Cuboid::try_new(0.0, 4.0, 5.0).is_ok());
    assert!(matches!(
        Cuboid::try_new(3.0, 4.0, f64::INFINITY),
        Err(ShapeError::InvalidDimension { shape: "Cuboid", name: "depth", .. })
    ));
}
