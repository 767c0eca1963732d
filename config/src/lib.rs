//! # Config Crate
//!
//! Centralized numeric constants for the shape formula crates. Every magic
//! number used by the formulas (the reference pi, comparison tolerances) is
//! defined here so that the shape crates stay free of scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, PiPolicy, EPSILON, REFERENCE_PI};
//!
//! // The reference pi is the default for every circular formula
//! assert_eq!(PiPolicy::default().value(), REFERENCE_PI);
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! assert!(approx_zero(value));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Reference Compatible**: Defaults reproduce the pinned reference outputs
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
