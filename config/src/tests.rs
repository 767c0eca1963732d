//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// PI TESTS
// =============================================================================

#[test]
fn test_reference_pi_literal() {
    assert_eq!(REFERENCE_PI, 3.14159);
}

#[test]
fn test_reference_pi_matches_pi_to_four_places() {
    // Rounded to REFERENCE_PI_DECIMALS places the difference vanishes
    let diff = (REFERENCE_PI - std::f64::consts::PI).abs();
    assert!(diff < 0.5 * 10f64.powi(-REFERENCE_PI_DECIMALS));
}

#[test]
fn test_reference_pi_is_truncated() {
    // Truncation undershoots the true value
    assert!(REFERENCE_PI < std::f64::consts::PI);
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 10.0));
}
