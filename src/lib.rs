/*!
# Weighted point sets

Weighted empirical distributions for particle-based Bayesian estimation: a
probability distribution approximated by a finite set of point masses whose
weights sum to one.

## Features

- Compile-time (`Const<N>`) and runtime (`Dyn`) dimensions over any
  `nalgebra::RealField` scalar
- Atomic replacement of the whole sample set, with explicit or uniform weights
- Mean, covariance and effective sample size queries
- Optional compensated summation and configurable input validation

## Modules

- [`distribution`] - the point set, its configuration, errors and moment trait
- [`reporter`] - observability hooks (logging, event capture)
- [`common`] - numerical kernels and tolerances

## Example

```rust
use nalgebra::{DVector, Vector2};
use weighted_point_set_rs::StaticPointSet;

let mut set = StaticPointSet::<f64, 2>::default();
set.replace_points(
    vec![Vector2::new(0.0, 0.0), Vector2::new(2.0, 0.0), Vector2::new(0.0, 2.0)],
    DVector::from_vec(vec![1.0, 1.0, 1.0]),
)
.unwrap();

let mean = set.mean();
assert!((mean.x - 2.0 / 3.0).abs() < 1e-12);

let cov = set.covariance();
assert!((cov[(0, 1)] + 4.0 / 9.0).abs() < 1e-12);
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Weighted point sets and the moment interface
pub mod distribution;

/// Observability hooks for point set mutation and moment queries
pub mod reporter;

/// Low-level utilities (moment kernels, tolerances)
pub mod common;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use distribution::{
    DynamicPointSet, Moments, PointSetConfig, PointSetError, PointSetMoments, SecondMoment,
    StaticPointSet, SummationMode, WeightedPointSet,
};

pub use reporter::{
    CompositeReporter, DebugReporter, LoggingReporter, NoOpReporter, PointSetReporter,
    ReplaceSummary,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
