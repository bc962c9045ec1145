//! Error types for weighted point sets
//!
//! Every rejected replacement is reported through [`PointSetError`] before any
//! state is touched, so a failed call leaves the previous sample set intact.

use std::fmt;

/// Errors that can occur when replacing the points of a set
#[derive(Debug, Clone, PartialEq)]
pub enum PointSetError {
    /// No points were supplied
    EmptyPoints,

    /// Point and weight sequences have different lengths
    LengthMismatch {
        /// Number of points supplied
        points: usize,
        /// Number of weights supplied
        weights: usize,
    },

    /// A point (or requested dimension) disagrees with the expected dimension
    DimensionMismatch {
        /// Dimension of the first point, or the compile-time dimension
        expected: usize,
        /// Dimension that was found
        actual: usize,
        /// Index of the offending point (`None` for construction)
        index: Option<usize>,
    },

    /// Weight total is zero or not finite, so weights cannot be normalized
    DegenerateWeights {
        /// The offending total
        total: f64,
    },

    /// A weight is negative
    NegativeWeight {
        /// Index of the offending weight
        index: usize,
        /// The offending value
        weight: f64,
    },
}

impl fmt::Display for PointSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointSetError::EmptyPoints => write!(f, "Point set must contain at least one point"),
            PointSetError::LengthMismatch { points, weights } => {
                write!(
                    f,
                    "Length mismatch: {} points but {} weights",
                    points, weights
                )
            }
            PointSetError::DimensionMismatch {
                expected,
                actual,
                index: Some(index),
            } => {
                write!(
                    f,
                    "Dimension mismatch at point {}: expected {}, got {}",
                    index, expected, actual
                )
            }
            PointSetError::DimensionMismatch {
                expected,
                actual,
                index: None,
            } => {
                write!(
                    f,
                    "Dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
            PointSetError::DegenerateWeights { total } => {
                write!(f, "Weights cannot be normalized: total is {}", total)
            }
            PointSetError::NegativeWeight { index, weight } => {
                write!(f, "Negative weight {} at index {}", weight, index)
            }
        }
    }
}

impl std::error::Error for PointSetError {}
