//! Triangle described by its three side lengths.
//!
//! Area uses Heron's formula, `sqrt(s * (s - a) * (s - b) * (s - c))` with
//! `s` the semi-perimeter. Sides that cannot form a triangle make the
//! radicand negative; [`Triangle::area`] clamps it to zero while
//! [`Triangle::try_area`] reports it.

use config::constants::{approx_zero, EPSILON};

use crate::error::{check_dimension, ShapeError, ShapeResult};

/// A triangle with sides `a`, `b` and `c`.
///
/// # Examples
/// ```
/// use geo_shapes::Triangle;
///
/// let tri = Triangle::new(3.0, 4.0, 5.0);
/// assert_eq!(tri.perimeter(), 12.0);
/// assert!((tri.area() - 6.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Creates a triangle. Any input is accepted, including side lengths
    /// that violate the triangle inequality.
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Creates a triangle, rejecting negative or non-finite sides and sides
    /// that cannot close.
    ///
    /// Degenerate triangles, where the longest side equals the sum of the
    /// other two, are accepted.
    ///
    /// # Examples
    /// ```
    /// use geo_shapes::{ShapeError, Triangle};
    /// assert!(Triangle::try_new(1.0, 2.0, 3.0).is_ok());
    /// assert!(matches!(
    ///     Triangle::try_new(1.0, 1.0, 10.0),
    ///     Err(ShapeError::InvalidTriangle { .. })
    /// ));
    /// ```
    pub fn try_new(a: f64, b: f64, c: f64) -> ShapeResult<Self> {
        let triangle = Self::new(
            check_dimension("Triangle", "a", a)?,
            check_dimension("Triangle", "b", b)?,
            check_dimension("Triangle", "c", c)?,
        );
        if !triangle.closes() {
            tracing::debug!(a, b, c, "sides violate the triangle inequality");
            return Err(triangle.invalid());
        }
        Ok(triangle)
    }

    /// First side.
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Second side.
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Third side.
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// All three sides in construction order.
    pub const fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// `a + b + c`.
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Half the perimeter, the `s` of Heron's formula.
    pub fn semi_perimeter(&self) -> f64 {
        self.perimeter() / 2.0
    }

    /// The Heron radicand `s * (s - a) * (s - b) * (s - c)`.
    ///
    /// Equals the squared area for real triangles, zero for degenerate ones
    /// and is negative when the sides cannot close.
    pub fn area_squared(&self) -> f64 {
        let s = self.semi_perimeter();
        s * (s - self.a) * (s - self.b) * (s - self.c)
    }

    /// Area by Heron's formula.
    ///
    /// A negative radicand is clamped to zero, so impossible triangles report
    /// an area of `0.0`. NaN sides still yield NaN.
    ///
    /// # Examples
    /// ```
    /// use geo_shapes::Triangle;
    /// assert_eq!(Triangle::new(1.0, 2.0, 3.0).area(), 0.0);
    /// assert_eq!(Triangle::new(1.0, 1.0, 10.0).area(), 0.0);
    /// ```
    pub fn area(&self) -> f64 {
        let radicand = self.area_squared();
        if radicand < 0.0 {
            // Collinear sides can round below zero; only warn for sides that cannot close
            if !self.closes() {
                tracing::warn!(
                    a = self.a,
                    b = self.b,
                    c = self.c,
                    radicand,
                    "negative Heron radicand clamped to zero"
                );
            }
            return 0.0;
        }
        radicand.sqrt()
    }

    /// Area by Heron's formula, failing when the sides cannot close.
    ///
    /// Degenerate triangles whose radicand rounds below zero give `0.0`.
    pub fn try_area(&self) -> ShapeResult<f64> {
        if !self.closes() {
            return Err(self.invalid());
        }
        Ok(self.area_squared().max(0.0).sqrt())
    }

    /// Whether the longest side equals the sum of the other two, i.e. the
    /// vertices are collinear.
    pub fn is_degenerate(&self) -> bool {
        approx_zero(self.relative_slack())
    }

    /// Whether the sides satisfy the triangle inequality within tolerance.
    /// False for NaN sides.
    fn closes(&self) -> bool {
        self.relative_slack() >= -EPSILON
    }

    /// Sum of the two shorter sides minus the longest one, in units of the
    /// longest side (or absolute below unit length).
    fn relative_slack(&self) -> f64 {
        let longest = self.a.max(self.b).max(self.c);
        (self.perimeter() - 2.0 * longest) / longest.max(1.0)
    }

    fn invalid(&self) -> ShapeError {
        ShapeError::InvalidTriangle {
            a: self.a,
            b: self.b,
            c: self.c,
        }
    }
}
