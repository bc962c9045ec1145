//! Core traits for distributions
//!
//! This module defines the moment interface shared by distribution types.

use nalgebra::allocator::Allocator;
use nalgebra::{DefaultAllocator, Dim, OMatrix, OVector, RealField};

/// Second moment type paired with a vector of dimension `D`
pub type SecondMoment<T, D> = OMatrix<T, D, D>;

/// First and second moments of a distribution
///
/// Implemented by [`WeightedPointSet`](super::WeightedPointSet); generic code
/// that only needs moments can be written against this trait.
///
/// # Type Parameters
/// - `T` - Scalar type
/// - `D` - Vector dimension (`Const<N>` or `Dyn`)
pub trait Moments<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<D> + Allocator<D, D>,
{
    /// First moment (mean vector)
    fn mean(&self) -> OVector<T, D>;

    /// Second central moment (covariance matrix)
    fn covariance(&self) -> SecondMoment<T, D>;

    /// Dimension of the variate
    fn dimension(&self) -> usize;
}

/// Mean and covariance computed from one consistent snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct PointSetMoments<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<D> + Allocator<D, D>,
{
    /// First moment
    pub mean: OVector<T, D>,
    /// Second central moment
    pub covariance: SecondMoment<T, D>,
}
