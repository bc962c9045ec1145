/*!
Weighted empirical distributions.

A [`WeightedPointSet`] stores point masses and their normalized weights and
answers first and second moment queries. Supporting modules:

- [`config`] - validation and summation policy
- [`errors`] - replacement errors
- [`traits`] - the [`Moments`] interface
*/

pub mod config;
pub mod errors;
pub mod point_set;
pub mod traits;

pub use config::{PointSetConfig, SummationMode};
pub use errors::PointSetError;
pub use point_set::{DynamicPointSet, StaticPointSet, WeightedPointSet};
pub use traits::{Moments, PointSetMoments, SecondMoment};
