//! Numerical tolerances used throughout the crate
//!
//! These are comparison tolerances only. They never alter stored weights or
//! computed moments.

/// Tolerance for the sum-to-one invariant of normalized weights
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Tolerance for comparing a second moment against its transpose
pub const SYMMETRY_TOLERANCE: f64 = 1e-12;
