//! Solving legal configurations.
//!
//! [`Solver`] validates its input and hands it to a [`SolveStrategy`]. Two
//! strategies exist: [`LayerByLayer`], which solves anything quickly in a
//! bounded number of moves, and [`IterativeDeepening`], which finds shortest
//! solutions but is only practical for short scrambles.

use crate::{
    configuration::Configuration,
    notation::Move,
    start, success,
    validate::{LegalityError, validate},
};
use log::info;
use std::{
    fmt::{self, Display},
    sync::atomic::{AtomicBool, Ordering},
    time::Instant,
};
use thiserror::Error;

mod cross;
mod iterative_deepening;
mod layers;
mod stage_search;

pub use iterative_deepening::IterativeDeepening;
pub use layers::LayerByLayer;

/// A step of the layer by layer method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Cross,
    FirstLayerCorners,
    SecondLayerEdges,
    LastLayerEdgeOrientation,
    LastLayerCorners,
    LastLayerEdgePermutation,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Cross,
        Stage::FirstLayerCorners,
        Stage::SecondLayerEdges,
        Stage::LastLayerEdgeOrientation,
        Stage::LastLayerCorners,
        Stage::LastLayerEdgePermutation,
    ];
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Cross => "cross",
            Stage::FirstLayerCorners => "first layer corners",
            Stage::SecondLayerEdges => "second layer edges",
            Stage::LastLayerEdgeOrientation => "last layer edge orientation",
            Stage::LastLayerCorners => "last layer corners",
            Stage::LastLayerEdgePermutation => "last layer edge permutation",
        })
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("Refusing to solve an illegal configuration: {0}")]
    UnsolvableInput(#[from] LegalityError),
    #[error("The {stage} stage found nothing within its search bound")]
    StageExhausted { stage: Stage },
    #[error("No solution of at most {max_depth} moves exists")]
    DepthLimitExceeded { max_depth: usize },
    #[error("The solve was cancelled before it started")]
    Cancelled,
}

/// A way of solving a cube.
pub trait SolveStrategy {
    /// A short name for logs.
    fn name(&self) -> &'static str;

    /// Finds moves that take `configuration` to a solved cube.
    /// `configuration` must already have passed [`validate`]; [`Solver`]
    /// makes sure of that.
    ///
    /// # Errors
    ///
    /// Whatever keeps the strategy from finding a solution.
    ///
    /// # Panics
    ///
    /// May panic if `configuration` has a slot with no real piece.
    fn solve_legal(&self, configuration: &Configuration) -> Result<Vec<Move>, SolveError>;
}

/// Validates, then solves with the strategy `S`.
#[derive(Debug, Clone, Default)]
pub struct Solver<S: SolveStrategy = LayerByLayer> {
    strategy: S,
}

impl<S: SolveStrategy> Solver<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Returns moves that, applied in order to `configuration`, give the
    /// solved cube. A solved configuration gives no moves.
    ///
    /// # Errors
    ///
    /// `UnsolvableInput` before any work is done if `configuration` fails
    /// validation, or an error from the strategy.
    pub fn solve(&self, configuration: &Configuration) -> Result<Vec<Move>, SolveError> {
        validate(configuration)?;
        if configuration.is_solved() {
            return Ok(vec![]);
        }

        info!(start!("Solving {} with the {} strategy"), configuration, self.strategy.name());
        let start = Instant::now();
        let solution = self.strategy.solve_legal(configuration)?;
        info!(
            success!("Found a {} move solution in {:.3}s"),
            solution.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(solution)
    }

    /// Like [`Solver::solve`], but does nothing if `cancelled` is already set.
    ///
    /// # Errors
    ///
    /// `Cancelled` if the flag is set, otherwise as [`Solver::solve`].
    pub fn solve_unless_cancelled(
        &self,
        configuration: &Configuration,
        cancelled: &AtomicBool,
    ) -> Result<Vec<Move>, SolveError> {
        if cancelled.load(Ordering::Acquire) {
            return Err(SolveError::Cancelled);
        }
        self.solve(configuration)
    }
}

/// Solves with the default layer by layer strategy.
///
/// # Errors
///
/// `UnsolvableInput` if `configuration` is illegal.
pub fn solve(configuration: &Configuration) -> Result<Vec<Move>, SolveError> {
    Solver::<LayerByLayer>::default().solve(configuration)
}
