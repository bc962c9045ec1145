//! Configuration for weighted point sets
//!
//! Controls how much validation a replacement performs and which summation
//! scheme the moment computations use.

use serde::{Deserialize, Serialize};

/// Summation scheme used when accumulating moments and weight totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummationMode {
    /// Plain accumulation in insertion order
    #[default]
    Naive,
    /// Kahan-Babuska-Neumaier compensated accumulation
    Compensated,
}

/// Validation and numerical policy for a [`WeightedPointSet`](super::WeightedPointSet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointSetConfig {
    /// Reject points whose dimension differs from the first point
    pub check_dimensions: bool,
    /// Reject weights whose total is zero or not finite
    pub reject_degenerate_weights: bool,
    /// Reject negative weights
    pub reject_negative_weights: bool,
    /// Summation scheme for moments and weight totals
    pub summation: SummationMode,
}

impl Default for PointSetConfig {
    fn default() -> Self {
        Self {
            check_dimensions: true,
            reject_degenerate_weights: true,
            reject_negative_weights: false,
            summation: SummationMode::Naive,
        }
    }
}

impl PointSetConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that performs only the structural checks (empty input, length mismatch)
    ///
    /// Dimension mismatches and zero weight totals pass through unchecked and
    /// produce undefined numerical results downstream.
    pub fn unchecked() -> Self {
        Self {
            check_dimensions: false,
            reject_degenerate_weights: false,
            reject_negative_weights: false,
            summation: SummationMode::Naive,
        }
    }

    /// Set dimension checking
    pub fn with_check_dimensions(mut self, check: bool) -> Self {
        self.check_dimensions = check;
        self
    }

    /// Set degenerate-weight rejection
    pub fn with_reject_degenerate_weights(mut self, reject: bool) -> Self {
        self.reject_degenerate_weights = reject;
        self
    }

    /// Set negative-weight rejection
    pub fn with_reject_negative_weights(mut self, reject: bool) -> Self {
        self.reject_negative_weights = reject;
        self
    }

    /// Set the summation scheme
    pub fn with_summation(mut self, summation: SummationMode) -> Self {
        self.summation = summation;
        self
    }
}
