//! Observability for point set mutation and moment queries.
//!
//! This module provides the [`PointSetReporter`] trait for logging and test
//! instrumentation. Reporters receive callbacks when a sample set is
//! replaced, when a replacement is rejected, and when moments are computed,
//! without touching the numerical code paths.
//!
//! The default [`NoOpReporter`] has empty callbacks and reports itself as
//! disabled, so replacements skip building the [`ReplaceSummary`] (whose
//! effective sample size is a pass over the weights).
//!
//! # Example
//!
//! ```
//! use nalgebra::DVector;
//! use weighted_point_set_rs::{DebugReporter, DynamicPointSet};
//!
//! let mut reporter = DebugReporter::new();
//! let mut set = DynamicPointSet::<f64>::dynamic();
//!
//! let points = vec![DVector::from_vec(vec![1.0]), DVector::from_vec(vec![3.0])];
//! set.replace_points_uniform_reported(points, &mut reporter).unwrap();
//!
//! assert_eq!(reporter.replace_events().len(), 1);
//! assert_eq!(reporter.replace_events()[0].num_points, 2);
//! ```

use crate::distribution::PointSetError;

// ============================================================================
// Events
// ============================================================================

/// Summary of a successful replacement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplaceSummary {
    /// Number of points now stored
    pub num_points: usize,
    /// Dimension of the stored points
    pub dimension: usize,
    /// Whether the uniform-weight overload was used
    pub uniform: bool,
    /// Effective sample size of the normalized weights
    pub effective_sample_size: f64,
}

// ============================================================================
// PointSetReporter Trait
// ============================================================================

/// Observability trait for weighted point sets.
///
/// All methods have default empty implementations, so you only need
/// to override the events you care about.
///
/// Reporters use `&mut self` for callbacks, so they are NOT required
/// to be `Send + Sync`.
///
/// # Example
///
/// ```
/// use weighted_point_set_rs::{PointSetError, PointSetReporter};
///
/// struct RejectionCounter {
///     rejected: usize,
/// }
///
/// impl PointSetReporter for RejectionCounter {
///     fn on_replace_rejected(&mut self, _error: &PointSetError) {
///         self.rejected += 1;
///     }
/// }
/// ```
pub trait PointSetReporter {
    /// Whether replacement summaries should be built for this reporter.
    ///
    /// When `false`, [`on_points_replaced`](Self::on_points_replaced) is not
    /// called. Rejections and moment queries are still reported.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Called after the point and weight sequences have been swapped in.
    fn on_points_replaced(&mut self, _summary: &ReplaceSummary) {}

    /// Called when a replacement is rejected. The previous state is intact.
    fn on_replace_rejected(&mut self, _error: &PointSetError) {}

    /// Called after mean and covariance are computed from one snapshot.
    fn on_moments_computed(&mut self, _num_points: usize, _dimension: usize) {}
}

// ============================================================================
// NoOpReporter
// ============================================================================

/// Zero-cost reporter that does nothing.
///
/// This is the reporter used by the plain (non-`_reported`) operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    /// Create a new no-op reporter.
    pub fn new() -> Self {
        Self
    }
}

impl PointSetReporter for NoOpReporter {
    fn is_enabled(&self) -> bool {
        false
    }
}

// ============================================================================
// DebugReporter
// ============================================================================

/// Reporter that captures all events for inspection.
#[derive(Debug, Clone, Default)]
pub struct DebugReporter {
    replacements: Vec<ReplaceSummary>,
    rejections: Vec<PointSetError>,
    /// (num_points, dimension) per moment query
    moment_queries: Vec<(usize, usize)>,
}

impl DebugReporter {
    /// Create a new debug reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all captured events.
    pub fn clear(&mut self) {
        self.replacements.clear();
        self.rejections.clear();
        self.moment_queries.clear();
    }

    /// Get captured replacement events.
    pub fn replace_events(&self) -> &[ReplaceSummary] {
        &self.replacements
    }

    /// Get captured rejection events.
    pub fn rejection_events(&self) -> &[PointSetError] {
        &self.rejections
    }

    /// Get captured moment queries as `(num_points, dimension)`.
    pub fn moment_events(&self) -> &[(usize, usize)] {
        &self.moment_queries
    }

    /// Total number of captured events across all types.
    pub fn total_events(&self) -> usize {
        self.replacements.len() + self.rejections.len() + self.moment_queries.len()
    }
}

impl PointSetReporter for DebugReporter {
    fn on_points_replaced(&mut self, summary: &ReplaceSummary) {
        self.replacements.push(*summary);
    }

    fn on_replace_rejected(&mut self, error: &PointSetError) {
        self.rejections.push(error.clone());
    }

    fn on_moments_computed(&mut self, num_points: usize, dimension: usize) {
        self.moment_queries.push((num_points, dimension));
    }
}

// ============================================================================
// LoggingReporter
// ============================================================================

/// Reporter that emits events through the `log` crate.
///
/// Levels:
/// - `on_points_replaced`: DEBUG (INFO when verbose)
/// - `on_replace_rejected`: WARN
/// - `on_moments_computed`: TRACE
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingReporter {
    verbose: bool,
}

impl LoggingReporter {
    /// Create a new logging reporter.
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Create a verbose logging reporter that includes weight diagnostics.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl PointSetReporter for LoggingReporter {
    fn on_points_replaced(&mut self, summary: &ReplaceSummary) {
        if self.verbose {
            log::info!(
                "Points replaced: {} points of dimension {}, uniform={}, ess={:.3}",
                summary.num_points,
                summary.dimension,
                summary.uniform,
                summary.effective_sample_size
            );
        } else {
            log::debug!(
                "Points replaced: {} points of dimension {}",
                summary.num_points,
                summary.dimension
            );
        }
    }

    fn on_replace_rejected(&mut self, error: &PointSetError) {
        log::warn!("Replacement rejected, previous points kept: {}", error);
    }

    fn on_moments_computed(&mut self, num_points: usize, dimension: usize) {
        log::trace!(
            "Moments computed over {} points of dimension {}",
            num_points,
            dimension
        );
    }
}

// ============================================================================
// CompositeReporter
// ============================================================================

/// Reporter that forwards events to two child reporters.
#[derive(Debug, Clone)]
pub struct CompositeReporter<A: PointSetReporter, B: PointSetReporter> {
    first: A,
    second: B,
}

impl<A: PointSetReporter, B: PointSetReporter> CompositeReporter<A, B> {
    /// Create a new composite reporter.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Get a reference to the first reporter.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Get a reference to the second reporter.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Consume and return both reporters.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: PointSetReporter, B: PointSetReporter> PointSetReporter for CompositeReporter<A, B> {
    fn is_enabled(&self) -> bool {
        self.first.is_enabled() || self.second.is_enabled()
    }

    fn on_points_replaced(&mut self, summary: &ReplaceSummary) {
        if self.first.is_enabled() {
            self.first.on_points_replaced(summary);
        }
        if self.second.is_enabled() {
            self.second.on_points_replaced(summary);
        }
    }

    fn on_replace_rejected(&mut self, error: &PointSetError) {
        self.first.on_replace_rejected(error);
        self.second.on_replace_rejected(error);
    }

    fn on_moments_computed(&mut self, num_points: usize, dimension: usize) {
        self.first.on_moments_computed(num_points, dimension);
        self.second.on_moments_computed(num_points, dimension);
    }
}

// ============================================================================
// Tests
// ============================================================================
