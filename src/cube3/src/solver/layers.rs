//! The layer by layer method: the down face cross, the down corners, the
//! middle edges, then the up layer in three steps.
//!
//! Apart from the cross, every stage is a small breadth first search whose
//! steps are well known algorithms rather than single turns. The algorithm
//! sets are chosen so that each search is guaranteed to succeed within a few
//! steps; the tests at the bottom check this exhaustively for the last layer.

use super::{
    SolveError, SolveStrategy, Stage,
    cross::CrossTable,
    stage_search::{Algorithm, Goal, Tracking, breadth_first, up_turns},
};
use crate::{
    configuration::Configuration,
    cubie::CubieCube,
    notation::{Move, MoveSequence},
    pieces::{Corner, Edge},
    working,
};
use log::debug;
use std::sync::LazyLock;

const CROSS_EDGES: [Edge; 4] = [Edge::Dr, Edge::Df, Edge::Dl, Edge::Db];
const DOWN_CORNERS: [Corner; 4] = [Corner::Dfr, Corner::Dlf, Corner::Dbl, Corner::Drb];
const MIDDLE_EDGES: [Edge; 4] = [Edge::Fr, Edge::Fl, Edge::Bl, Edge::Br];
const FIRST_TWO_LAYER_EDGES: [Edge; 8] = [
    Edge::Dr,
    Edge::Df,
    Edge::Dl,
    Edge::Db,
    Edge::Fr,
    Edge::Fl,
    Edge::Bl,
    Edge::Br,
];
const UP_EDGES: [Edge; 4] = [Edge::Ur, Edge::Uf, Edge::Ul, Edge::Ub];

/// `R U R' U'` from every side, each repeated up to five times, cycles a
/// corner between the up layer and a down slot through all its twists.
static CORNER_ALGORITHMS: LazyLock<Vec<Algorithm>> = LazyLock::new(|| {
    let mut algorithms = up_turns();
    for side in Algorithm::from_notation("R U R' U'").from_every_side() {
        algorithms.extend((1..=5).map(|times| side.repeated(times)));
    }
    algorithms
});

/// Inserting an up layer edge into a middle slot from either side.
static MIDDLE_EDGE_ALGORITHMS: LazyLock<Vec<Algorithm>> = LazyLock::new(|| {
    let mut algorithms = up_turns();
    for notation in ["U R U' R' U' F' U F", "U' L' U L U F U' F'"] {
        algorithms.extend(Algorithm::from_notation(notation).from_every_side());
    }
    algorithms
});

/// Flipping up layer edges in pairs.
static EDGE_ORIENTATION_ALGORITHMS: LazyLock<Vec<Algorithm>> = LazyLock::new(|| {
    let mut algorithms = up_turns();
    for notation in ["F R U R' U' F'", "F U R U' R' F'"] {
        algorithms.extend(Algorithm::from_notation(notation).from_every_side());
    }
    algorithms
});

/// Sune and anti-Sune, a corner three-cycle both ways, and a pure twist of
/// two corners. Together with up turns these reach every arrangement of the
/// up corners.
static CORNER_ARRANGING_ALGORITHMS: LazyLock<Vec<Algorithm>> = LazyLock::new(|| {
    let mut algorithms = up_turns();
    algorithms.extend(
        [
            "R U R' U R U2 R'",
            "R U2 R' U' R U' R'",
            "R U' L' U R' U' L",
            "L' U R U' L U R'",
            "R' D' R D R' D' R D U R' D' R D R' D' R D R' D' R D R' D' R D U'",
        ]
        .into_iter()
        .map(Algorithm::from_notation),
    );
    algorithms
});

/// The two three-cycles of up edges, from every side.
static EDGE_PERMUTATION_ALGORITHMS: LazyLock<Vec<Algorithm>> = LazyLock::new(|| {
    ["R U' R U R U R U' R' U' R2", "R2 U R U R' U' R' U' R' U R'"]
        .into_iter()
        .flat_map(|notation| Algorithm::from_notation(notation).from_every_side())
        .collect()
});

/// Solves any legal cube in a bounded number of moves, with the cross on the
/// down face.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerByLayer;

impl SolveStrategy for LayerByLayer {
    fn name(&self) -> &'static str {
        "layer by layer"
    }

    fn solve_legal(&self, configuration: &Configuration) -> Result<Vec<Move>, SolveError> {
        let mut cube = CubieCube::from_legal(configuration);
        let mut solution = vec![];
        for stage in Stage::ALL {
            let moves = solve_stage(stage, &cube)
                .ok_or(SolveError::StageExhausted { stage })?;
            debug!(working!("Solved the {} with {}"), stage, MoveSequence(moves.clone()));
            cube = cube.then_moves(&moves);
            solution.extend(moves);
        }
        debug_assert_eq!(cube, CubieCube::SOLVED);

        let solution = MoveSequence(solution).simplified();
        debug_assert!({
            let mut check = *configuration;
            check.apply_all(&solution);
            check.is_solved()
        });
        Ok(solution.into_inner())
    }
}

fn solve_stage(stage: Stage, cube: &CubieCube) -> Option<Vec<Move>> {
    match stage {
        Stage::Cross => Some(CrossTable::get().solve(cube)),
        Stage::FirstLayerCorners => {
            let base = Goal::new().edges(&CROSS_EDGES, Tracking::Full);
            one_piece_at_a_time(cube, &DOWN_CORNERS, &CORNER_ALGORITHMS, 3, |done| {
                base.clone().corners(done, Tracking::Full)
            })
        }
        Stage::SecondLayerEdges => {
            let base = Goal::new()
                .edges(&CROSS_EDGES, Tracking::Full)
                .corners(&DOWN_CORNERS, Tracking::Full);
            one_piece_at_a_time(cube, &MIDDLE_EDGES, &MIDDLE_EDGE_ALGORITHMS, 3, |done| {
                base.clone().edges(done, Tracking::Full)
            })
        }
        Stage::LastLayerEdgeOrientation => {
            let goal = Goal::new()
                .corners(&DOWN_CORNERS, Tracking::Full)
                .edges(&FIRST_TWO_LAYER_EDGES, Tracking::Full)
                .edges(&UP_EDGES, Tracking::Orientation);
            breadth_first(cube, &goal, &EDGE_ORIENTATION_ALGORITHMS, 3)
        }
        Stage::LastLayerCorners => {
            let goal = Goal::new()
                .corners(&Corner::ALL, Tracking::Full)
                .edges(&FIRST_TWO_LAYER_EDGES, Tracking::Full)
                .edges(&UP_EDGES, Tracking::Orientation);
            breadth_first(cube, &goal, &CORNER_ARRANGING_ALGORITHMS, 6)
        }
        Stage::LastLayerEdgePermutation => {
            let goal = Goal::new()
                .corners(&Corner::ALL, Tracking::Full)
                .edges(&Edge::ALL, Tracking::Full);
            breadth_first(cube, &goal, &EDGE_PERMUTATION_ALGORITHMS, 3)
        }
    }
}

/// Places `pieces` one after another. `goal` gives what must be solved once
/// the pieces seen so far are in place.
fn one_piece_at_a_time<P>(
    cube: &CubieCube,
    pieces: &[P],
    algorithms: &[Algorithm],
    max_depth: usize,
    goal: impl Fn(&[P]) -> Goal,
) -> Option<Vec<Move>> {
    let mut cube = *cube;
    let mut moves = vec![];
    for placed in 1..=pieces.len() {
        let piece_moves = breadth_first(&cube, &goal(&pieces[..placed]), algorithms, max_depth)?;
        cube = cube.then_moves(&piece_moves);
        moves.extend(piece_moves);
    }
    Some(moves)
}
