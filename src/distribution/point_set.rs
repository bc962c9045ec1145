//! Weighted point set (sum of point masses)
//!
//! A [`WeightedPointSet`] approximates a probability distribution by a finite
//! sequence of vectors with non-negative weights summing to one, as produced
//! by particle-based estimators. The set is never empty: it starts as a single
//! point mass at the zero vector and is only ever mutated by swapping in a
//! complete new point/weight sequence.
//!
//! The dimension may be fixed at compile time (`Const<N>`) or at runtime
//! (`Dyn`). For runtime dimensions each replacement defines the dimension.

use nalgebra::allocator::Allocator;
use nalgebra::{Const, DVector, DefaultAllocator, Dim, DimName, Dyn, OVector, RealField};

use super::config::PointSetConfig;
use super::errors::PointSetError;
use super::traits::{Moments, PointSetMoments, SecondMoment};
use crate::common::linalg::{
    effective_sample_size, normalize_weights, to_f64, uniform_weights, weight_total,
    weighted_outer_sum, weighted_sum,
};
use crate::reporter::{NoOpReporter, PointSetReporter, ReplaceSummary};

/// Point set whose dimension is chosen at runtime
pub type DynamicPointSet<T> = WeightedPointSet<T, Dyn>;

/// Point set whose dimension is fixed at compile time
pub type StaticPointSet<T, const N: usize> = WeightedPointSet<T, Const<N>>;

/// Weighted empirical distribution over `D`-dimensional vectors
///
/// Invariants:
/// - `points.len() == weights.len() >= 1`
/// - every point has the same dimension (checked at replacement unless
///   [`PointSetConfig::check_dimensions`] is disabled)
/// - weights sum to one after every successful replacement
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPointSet<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<D>,
{
    points: Vec<OVector<T, D>>,
    weights: DVector<T>,
    config: PointSetConfig,
}

impl<T, D> WeightedPointSet<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<D>,
{
    /// Create a set holding one point mass at the zero vector
    ///
    /// A runtime (`Dyn`) dimension only describes this initial point; it is
    /// not pinned, and each later replacement defines the dimension anew.
    /// `Const<N>` dimensions are fixed by the type.
    ///
    /// # Example
    /// ```
    /// use nalgebra::{Const, Dyn};
    /// use weighted_point_set_rs::WeightedPointSet;
    ///
    /// let fixed = WeightedPointSet::<f64, _>::new(Const::<3>);
    /// assert_eq!(fixed.dimension(), 3);
    ///
    /// let runtime = WeightedPointSet::<f64, _>::new(Dyn(5));
    /// assert_eq!(runtime.dimension(), 5);
    /// ```
    pub fn new(dimension: D) -> Self {
        Self::with_config(dimension, PointSetConfig::default())
    }

    /// Create a set with an explicit validation and summation policy
    pub fn with_config(dimension: D, config: PointSetConfig) -> Self {
        Self {
            points: vec![OVector::<T, D>::zeros_generic(dimension, Const::<1>)],
            weights: DVector::from_element(1, T::one()),
            config,
        }
    }

    /// Create a set from a runtime dimension value
    ///
    /// For compile-time dimensions the value must match `D`.
    pub fn with_dimension(dimension: usize) -> Result<Self, PointSetError> {
        if let Some(expected) = D::try_to_usize() {
            if expected != dimension {
                return Err(PointSetError::DimensionMismatch {
                    expected,
                    actual: dimension,
                    index: None,
                });
            }
        }
        Ok(Self::new(D::from_usize(dimension)))
    }

    /// Current configuration
    #[inline]
    pub fn config(&self) -> &PointSetConfig {
        &self.config
    }

    /// Replace all points and weights; weights are rescaled to sum to one
    ///
    /// The input is fully validated first. On error nothing is modified.
    ///
    /// # Errors
    /// - [`PointSetError::EmptyPoints`] if `points` is empty
    /// - [`PointSetError::LengthMismatch`] if `weights` has a different length
    /// - [`PointSetError::DimensionMismatch`] if points differ in dimension
    /// - [`PointSetError::NegativeWeight`] if enabled and a weight is negative
    /// - [`PointSetError::DegenerateWeights`] if enabled and the total is zero or not finite
    pub fn replace_points(
        &mut self,
        points: Vec<OVector<T, D>>,
        weights: DVector<T>,
    ) -> Result<(), PointSetError> {
        self.replace_points_reported(points, weights, &mut NoOpReporter)
    }

    /// [`replace_points`](Self::replace_points) with event reporting
    pub fn replace_points_reported<R: PointSetReporter + ?Sized>(
        &mut self,
        points: Vec<OVector<T, D>>,
        weights: DVector<T>,
        reporter: &mut R,
    ) -> Result<(), PointSetError> {
        let normalized = self
            .normalized_weights(&points, &weights)
            .map_err(|error| reject(reporter, error))?;
        self.commit(points, normalized, false, reporter);
        Ok(())
    }

    /// Replace all points, giving each the weight `1/N`
    ///
    /// # Errors
    /// - [`PointSetError::EmptyPoints`] if `points` is empty
    /// - [`PointSetError::DimensionMismatch`] if points differ in dimension
    pub fn replace_points_uniform(
        &mut self,
        points: Vec<OVector<T, D>>,
    ) -> Result<(), PointSetError> {
        self.replace_points_uniform_reported(points, &mut NoOpReporter)
    }

    /// [`replace_points_uniform`](Self::replace_points_uniform) with event reporting
    pub fn replace_points_uniform_reported<R: PointSetReporter + ?Sized>(
        &mut self,
        points: Vec<OVector<T, D>>,
        reporter: &mut R,
    ) -> Result<(), PointSetError> {
        self.validate_points(&points)
            .map_err(|error| reject(reporter, error))?;
        let weights = uniform_weights(points.len());
        self.commit(points, weights, true, reporter);
        Ok(())
    }

    /// Stored points in insertion order
    #[inline]
    pub fn points(&self) -> &[OVector<T, D>] {
        &self.points
    }

    /// Stored normalized weights
    #[inline]
    pub fn weights(&self) -> &DVector<T> {
        &self.weights
    }

    /// Copies of the stored points and weights
    pub fn to_parts(&self) -> (Vec<OVector<T, D>>, DVector<T>) {
        (self.points.clone(), self.weights.clone())
    }

    /// Consume the set and return its points and weights
    pub fn into_parts(self) -> (Vec<OVector<T, D>>, DVector<T>) {
        (self.points, self.weights)
    }

    /// Iterate over `(point, weight)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&OVector<T, D>, T)> + '_ {
        self.points.iter().zip(self.weights.iter().copied())
    }

    /// Number of point masses (always at least one)
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Dimension of the stored points (row count of the first point)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.points.first().map_or(0, |p| p.nrows())
    }

    /// Weighted mean `Σ wᵢ xᵢ`
    ///
    /// If dimension checking was disabled and the points differ in dimension,
    /// every component of the result is NaN.
    pub fn mean(&self) -> OVector<T, D> {
        weighted_sum(
            &self.points,
            &self.weights,
            self.dimension_generic(),
            self.config.summation,
        )
    }

    /// Effective sample size `1 / Σ wᵢ²`
    ///
    /// Equals the number of points for uniform weights and one for a
    /// single dominant point.
    pub fn effective_sample_size(&self) -> T {
        effective_sample_size(&self.weights)
    }

    fn dimension_generic(&self) -> D {
        self.points[0].shape_generic().0
    }

    fn validate_points(&self, points: &[OVector<T, D>]) -> Result<(), PointSetError> {
        let first = points.first().ok_or(PointSetError::EmptyPoints)?;
        if self.config.check_dimensions {
            let expected = first.nrows();
            if let Some((index, point)) = points
                .iter()
                .enumerate()
                .find(|(_, p)| p.nrows() != expected)
            {
                return Err(PointSetError::DimensionMismatch {
                    expected,
                    actual: point.nrows(),
                    index: Some(index),
                });
            }
        }
        Ok(())
    }

    fn normalized_weights(
        &self,
        points: &[OVector<T, D>],
        weights: &DVector<T>,
    ) -> Result<DVector<T>, PointSetError> {
        if points.is_empty() {
            return Err(PointSetError::EmptyPoints);
        }
        if weights.len() != points.len() {
            return Err(PointSetError::LengthMismatch {
                points: points.len(),
                weights: weights.len(),
            });
        }
        self.validate_points(points)?;

        if self.config.reject_negative_weights {
            if let Some((index, &weight)) =
                weights.iter().enumerate().find(|&(_, &w)| w < T::zero())
            {
                return Err(PointSetError::NegativeWeight {
                    index,
                    weight: to_f64(weight),
                });
            }
        }

        let total = weight_total(weights, self.config.summation);
        if self.config.reject_degenerate_weights && (total == T::zero() || !total.is_finite()) {
            return Err(PointSetError::DegenerateWeights {
                total: to_f64(total),
            });
        }

        Ok(normalize_weights(weights, total))
    }

    fn commit<R: PointSetReporter + ?Sized>(
        &mut self,
        points: Vec<OVector<T, D>>,
        weights: DVector<T>,
        uniform: bool,
        reporter: &mut R,
    ) {
        self.points = points;
        self.weights = weights;
        if !reporter.is_enabled() {
            return;
        }
        reporter.on_points_replaced(&ReplaceSummary {
            num_points: self.num_points(),
            dimension: self.dimension(),
            uniform,
            effective_sample_size: to_f64(self.effective_sample_size()),
        });
    }
}

impl<T, D> WeightedPointSet<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<D> + Allocator<D, D>,
{
    /// Weighted covariance `Σ wᵢ (xᵢ - μ)(xᵢ - μ)ᵀ`
    ///
    /// The mean is computed once from the same state. The result is exactly
    /// symmetric and positive semi-definite when all weights are non-negative.
    ///
    /// If dimension checking was disabled and the points differ in dimension,
    /// every entry of the result is NaN.
    pub fn covariance(&self) -> SecondMoment<T, D> {
        self.moments().covariance
    }

    /// Mean and covariance from a single pass over the current state
    pub fn moments(&self) -> PointSetMoments<T, D> {
        self.moments_reported(&mut NoOpReporter)
    }

    /// [`moments`](Self::moments) with event reporting
    pub fn moments_reported<R: PointSetReporter + ?Sized>(
        &self,
        reporter: &mut R,
    ) -> PointSetMoments<T, D> {
        let mean = self.mean();
        let covariance = weighted_outer_sum(&self.points, &self.weights, &mean, self.config.summation);
        reporter.on_moments_computed(self.num_points(), self.dimension());
        PointSetMoments { mean, covariance }
    }
}

impl<T: RealField + Copy> WeightedPointSet<T, Dyn> {
    /// Create a set whose dimension is determined by the first replacement
    ///
    /// Holds a single zero-length point with weight one until then.
    pub fn dynamic() -> Self {
        Self::new(Dyn(0))
    }
}

impl<T, D> Default for WeightedPointSet<T, D>
where
    T: RealField + Copy,
    D: DimName,
    DefaultAllocator: Allocator<D>,
{
    fn default() -> Self {
        Self::new(D::name())
    }
}

impl<T, D> Moments<T, D> for WeightedPointSet<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<D> + Allocator<D, D>,
{
    fn mean(&self) -> OVector<T, D> {
        WeightedPointSet::mean(self)
    }

    fn covariance(&self) -> SecondMoment<T, D> {
        WeightedPointSet::covariance(self)
    }

    fn dimension(&self) -> usize {
        WeightedPointSet::dimension(self)
    }
}

fn reject<R: PointSetReporter + ?Sized>(reporter: &mut R, error: PointSetError) -> PointSetError {
    reporter.on_replace_rejected(&error);
    error
}
