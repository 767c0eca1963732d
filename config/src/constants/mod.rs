//! Centralized configuration values shared across the shape formula crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, e.g. when deciding whether a triangle is degenerate.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// PI CONSTANTS
// =============================================================================

/// Truncated pi used by the reference formulas.
///
/// Sphere and cylinder outputs are pinned against this value rather than
/// [`std::f64::consts::PI`], so it is the default for every circular formula.
///
/// # Example
///
/// ```rust
/// use config::constants::REFERENCE_PI;
///
/// let unit_circle_area = REFERENCE_PI * 1.0 * 1.0;
/// assert_eq!(unit_circle_area, 3.14159);
/// ```
pub const REFERENCE_PI: f64 = 3.14159;

/// Number of decimal places to which [`REFERENCE_PI`] agrees with the true pi.
///
/// # Example
///
/// ```rust
/// use config::constants::{REFERENCE_PI, REFERENCE_PI_DECIMALS};
///
/// let scale = 10f64.powi(REFERENCE_PI_DECIMALS);
/// assert_eq!(
///     (REFERENCE_PI * scale).round(),
///     (std::f64::consts::PI * scale).round()
/// );
/// ```
pub const REFERENCE_PI_DECIMALS: i32 = 4;

/// Selects which value of pi circular formulas use.
///
/// # Examples
/// ```
/// use config::constants::{PiPolicy, REFERENCE_PI};
/// assert_eq!(PiPolicy::Reference.value(), REFERENCE_PI);
/// assert_eq!(PiPolicy::Precise.value(), std::f64::consts::PI);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PiPolicy {
    /// The truncated [`REFERENCE_PI`], matching the pinned reference outputs.
    #[default]
    Reference,
    /// Full double precision [`std::f64::consts::PI`].
    Precise,
}

impl PiPolicy {
    /// Returns the numeric value of pi for this policy.
    #[inline]
    pub const fn value(self) -> f64 {
        match self {
            PiPolicy::Reference => REFERENCE_PI,
            PiPolicy::Precise => std::f64::consts::PI,
        }
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
