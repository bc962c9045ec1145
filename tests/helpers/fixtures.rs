//! Scenario fixture loading and dimension-kind dispatch
//!
//! Scenarios live in `tests/fixtures/moment_scenarios.json`. Each one is run
//! through both a compile-time-dimension set and a runtime-dimension set,
//! selected by [`DimensionKind`].

use std::fs;

use nalgebra::allocator::Allocator;
use nalgebra::{Const, DMatrix, DVector, DefaultAllocator, Dim, Dyn, OVector, SVector};
use serde::Deserialize;

use weighted_point_set_rs::{PointSetConfig, WeightedPointSet};

/// Which point set instantiation a scenario runs through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionKind {
    /// `StaticPointSet<f64, N>` for N in 1..=3
    Static,
    /// `DynamicPointSet<f64>`
    Dynamic,
}

impl DimensionKind {
    /// All kinds, for parameterized loops
    pub const ALL: [DimensionKind; 2] = [DimensionKind::Static, DimensionKind::Dynamic];

    /// Largest dimension with a static instantiation
    pub const MAX_STATIC_DIMENSION: usize = 3;

    /// Whether a scenario of `dimension` can run under this kind
    pub fn supports(self, dimension: usize) -> bool {
        match self {
            DimensionKind::Static => (1..=Self::MAX_STATIC_DIMENSION).contains(&dimension),
            DimensionKind::Dynamic => true,
        }
    }
}

/// A moment scenario with its expected normalized weights and moments
#[derive(Debug, Clone, Deserialize)]
pub struct MomentScenario {
    pub name: String,
    pub points: Vec<Vec<f64>>,
    /// `None` selects the uniform-weight overload
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
    pub expected_weights: Vec<f64>,
    pub expected_mean: Vec<f64>,
    pub expected_covariance: Vec<Vec<f64>>,
}

impl MomentScenario {
    /// Dimension of the scenario's points
    pub fn dimension(&self) -> usize {
        self.points.first().map_or(0, Vec::len)
    }
}

/// What a point set reported after running a scenario
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub dimension: usize,
    pub weights: Vec<f64>,
    pub mean: Vec<f64>,
    pub covariance: DMatrix<f64>,
}

/// Load all moment scenarios
pub fn load_scenarios() -> Vec<MomentScenario> {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/moment_scenarios.json"
    );
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path, e));
    serde_json::from_str(&json).expect("Failed to parse moment scenarios")
}

/// Run a scenario through the instantiation selected by `kind`
///
/// # Panics
/// If `kind` does not support the scenario's dimension, or the replacement fails.
pub fn run_scenario(
    kind: DimensionKind,
    scenario: &MomentScenario,
    config: PointSetConfig,
) -> ScenarioOutcome {
    match (kind, scenario.dimension()) {
        (DimensionKind::Static, 1) => run_static::<1>(scenario, config),
        (DimensionKind::Static, 2) => run_static::<2>(scenario, config),
        (DimensionKind::Static, 3) => run_static::<3>(scenario, config),
        (DimensionKind::Static, d) => {
            panic!("{}: no static instantiation for dimension {}", scenario.name, d)
        }
        (DimensionKind::Dynamic, _) => {
            let points = scenario
                .points
                .iter()
                .map(|p| DVector::from_column_slice(p))
                .collect();
            run(
                WeightedPointSet::<f64, Dyn>::with_config(Dyn(0), config),
                points,
                scenario,
            )
        }
    }
}

fn run_static<const N: usize>(scenario: &MomentScenario, config: PointSetConfig) -> ScenarioOutcome {
    let points = scenario
        .points
        .iter()
        .map(|p| SVector::<f64, N>::from_column_slice(p))
        .collect();
    run(
        WeightedPointSet::<f64, Const<N>>::with_config(Const::<N>, config),
        points,
        scenario,
    )
}

fn run<D>(
    mut set: WeightedPointSet<f64, D>,
    points: Vec<OVector<f64, D>>,
    scenario: &MomentScenario,
) -> ScenarioOutcome
where
    D: Dim,
    DefaultAllocator: Allocator<D> + Allocator<D, D>,
{
    let result = match &scenario.weights {
        Some(weights) => set.replace_points(points, DVector::from_vec(weights.clone())),
        None => set.replace_points_uniform(points),
    };
    result.unwrap_or_else(|e| panic!("{}: replacement failed: {}", scenario.name, e));

    let moments = set.moments();
    let n = set.dimension();
    ScenarioOutcome {
        dimension: n,
        weights: set.weights().iter().copied().collect(),
        mean: moments.mean.iter().copied().collect(),
        covariance: DMatrix::from_iterator(n, n, moments.covariance.iter().copied()),
    }
}
