//! Linear algebra utilities
//!
//! Moment kernels and weight handling shared by the weighted point set.
//! All functions are generic over the scalar type and over compile-time
//! or runtime dimensions.

use nalgebra::allocator::Allocator;
use nalgebra::{Const, DVector, DefaultAllocator, Dim, OMatrix, OVector, RealField};

use crate::distribution::SummationMode;

/// Running Kahan-Babuska-Neumaier sum of scalars
///
/// Keeps a separate compensation term so that small addends are not lost
/// against a large running total.
#[derive(Debug, Clone, Copy)]
pub struct CompensatedSum<T> {
    sum: T,
    compensation: T,
}

impl<T: RealField + Copy> CompensatedSum<T> {
    /// Create an empty sum
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            compensation: T::zero(),
        }
    }

    /// Add a term
    #[inline]
    pub fn add(&mut self, term: T) {
        neumaier_add(&mut self.sum, &mut self.compensation, term);
    }

    /// Current compensated total
    #[inline]
    pub fn value(&self) -> T {
        self.sum + self.compensation
    }
}

impl<T: RealField + Copy> Default for CompensatedSum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealField + Copy> FromIterator<T> for CompensatedSum<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut acc = Self::new();
        for term in iter {
            acc.add(term);
        }
        acc
    }
}

#[inline]
fn neumaier_add<T: RealField + Copy>(sum: &mut T, compensation: &mut T, term: T) {
    let t = *sum + term;
    if sum.abs() >= term.abs() {
        *compensation += (*sum - t) + term;
    } else {
        *compensation += (term - t) + *sum;
    }
    *sum = t;
}

/// Elementwise compensated accumulation of `term` into `sum`
fn accumulate_compensated<T, R, C>(
    sum: &mut OMatrix<T, R, C>,
    compensation: &mut OMatrix<T, R, C>,
    term: &OMatrix<T, R, C>,
) where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    DefaultAllocator: Allocator<R, C>,
{
    for ((s, c), &x) in sum
        .iter_mut()
        .zip(compensation.iter_mut())
        .zip(term.iter())
    {
        neumaier_add(s, c, x);
    }
}

/// Total of a weight vector
pub fn weight_total<T: RealField + Copy>(weights: &DVector<T>, mode: SummationMode) -> T {
    match mode {
        SummationMode::Naive => weights.iter().fold(T::zero(), |acc, &w| acc + w),
        SummationMode::Compensated => weights.iter().copied().collect::<CompensatedSum<T>>().value(),
    }
}

/// Rescale weights so they sum to one
///
/// Divides every weight by `total` (a probability mass normalization, not a
/// Euclidean one). A zero `total` yields non-finite weights.
pub fn normalize_weights<T: RealField + Copy>(weights: &DVector<T>, total: T) -> DVector<T> {
    weights / total
}

/// Uniform weights `1/n`
pub fn uniform_weights<T: RealField + Copy>(n: usize) -> DVector<T> {
    let count: T = nalgebra::convert(n as f64);
    DVector::from_element(n, T::one() / count)
}

/// Effective sample size `1 / Σ wᵢ²` of normalized weights
pub fn effective_sample_size<T: RealField + Copy>(weights: &DVector<T>) -> T {
    T::one() / weights.norm_squared()
}

/// Weighted sum `Σ wᵢ xᵢ` of vectors
///
/// # Arguments
/// * `points` - Vectors to sum, all of dimension `dimension`
/// * `weights` - One weight per vector
/// * `dimension` - Dimension of the result (additive identity is the zero vector)
/// * `mode` - Summation scheme
///
/// A point whose dimension differs from `dimension` makes the whole result NaN.
pub fn weighted_sum<T, D>(
    points: &[OVector<T, D>],
    weights: &DVector<T>,
    dimension: D,
    mode: SummationMode,
) -> OVector<T, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<D>,
{
    if !dimensions_agree(points, dimension.value()) {
        return OVector::<T, D>::from_element_generic(dimension, Const::<1>, nan());
    }
    let mut sum = OVector::<T, D>::zeros_generic(dimension, Const::<1>);
    match mode {
        SummationMode::Naive => {
            for (point, &w) in points.iter().zip(weights.iter()) {
                sum.axpy(w, point, T::one());
            }
        }
        SummationMode::Compensated => {
            let mut compensation = OVector::<T, D>::zeros_generic(dimension, Const::<1>);
            for (point, &w) in points.iter().zip(weights.iter()) {
                let term = point * w;
                accumulate_compensated(&mut sum, &mut compensation, &term);
            }
            sum += compensation;
        }
    }
    sum
}

/// Weighted sum of outer products of deviations `Σ wᵢ (xᵢ - μ)(xᵢ - μ)ᵀ`
///
/// The result is symmetrized, so it equals its transpose exactly.
///
/// A point whose dimension differs from that of `mean` makes the whole
/// result NaN.
pub fn weighted_outer_sum<T, D>(
    points: &[OVector<T, D>],
    weights: &DVector<T>,
    mean: &OVector<T, D>,
    mode: SummationMode,
) -> OMatrix<T, D, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<D> + Allocator<D, D>,
{
    let (dim, _) = mean.shape_generic();
    if !dimensions_agree(points, dim.value()) {
        return OMatrix::<T, D, D>::from_element_generic(dim, dim, nan());
    }
    let mut sum = OMatrix::<T, D, D>::zeros_generic(dim, dim);
    match mode {
        SummationMode::Naive => {
            for (point, &w) in points.iter().zip(weights.iter()) {
                let deviation = point - mean;
                sum.ger(w, &deviation, &deviation, T::one());
            }
        }
        SummationMode::Compensated => {
            let mut compensation = OMatrix::<T, D, D>::zeros_generic(dim, dim);
            let mut term = OMatrix::<T, D, D>::zeros_generic(dim, dim);
            for (point, &w) in points.iter().zip(weights.iter()) {
                let deviation = point - mean;
                term.ger(w, &deviation, &deviation, T::zero());
                accumulate_compensated(&mut sum, &mut compensation, &term);
            }
            sum += compensation;
        }
    }
    symmetrize(&sum)
}

fn dimensions_agree<T, D>(points: &[OVector<T, D>], dimension: usize) -> bool
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<D>,
{
    points.iter().all(|p| p.nrows() == dimension)
}

#[inline]
fn nan<T: RealField + Copy>() -> T {
    nalgebra::convert(f64::NAN)
}

/// Make matrix symmetric
///
/// Averages a square matrix with its transpose.
pub fn symmetrize<T, D>(matrix: &OMatrix<T, D, D>) -> OMatrix<T, D, D>
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<D, D>,
{
    let half: T = nalgebra::convert(0.5);
    (matrix + matrix.transpose()) * half
}

/// Check whether a square matrix equals its transpose within `tolerance`
pub fn is_symmetric<T, D>(matrix: &OMatrix<T, D, D>, tolerance: T) -> bool
where
    T: RealField + Copy,
    D: Dim,
    DefaultAllocator: Allocator<D, D>,
{
    let n = matrix.nrows();
    (0..n).all(|i| (i + 1..n).all(|j| (matrix[(i, j)] - matrix[(j, i)]).abs() <= tolerance))
}

/// Lossy conversion of a generic scalar to `f64` for error reporting
pub(crate) fn to_f64<T: RealField + Copy>(value: T) -> f64 {
    nalgebra::try_convert::<T, f64>(value).unwrap_or(f64::NAN)
}
