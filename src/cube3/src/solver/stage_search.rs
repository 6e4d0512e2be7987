//! Breadth first search over sequences of algorithms, looking only at the
//! pieces a stage cares about.

use crate::{
    cubie::{CubieCube, UNKNOWN},
    notation::{Face, Move, MoveSequence},
    pieces::{Corner, Edge},
};
use fxhash::FxHashSet;
use log::trace;

/// How much of a piece a stage must restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tracking {
    Ignored,
    /// Only its twist or flip; it may end up in any slot.
    Orientation,
    Full,
}

/// Which pieces a stage must restore. Every other piece is forgotten before
/// searching, so positions that differ only in those pieces are the same
/// search state.
#[derive(Debug, Clone)]
pub(super) struct Goal {
    corners: [Tracking; 8],
    edges: [Tracking; 12],
}

impl Goal {
    pub(super) fn new() -> Self {
        Self {
            corners: [Tracking::Ignored; 8],
            edges: [Tracking::Ignored; 12],
        }
    }

    pub(super) fn corners(mut self, corners: &[Corner], tracking: Tracking) -> Self {
        for corner in corners {
            self.corners[corner.index()] = tracking;
        }
        self
    }

    pub(super) fn edges(mut self, edges: &[Edge], tracking: Tracking) -> Self {
        for edge in edges {
            self.edges[edge.index()] = tracking;
        }
        self
    }

    /// Forgets everything about `cube` this goal does not track.
    pub(super) fn project(&self, cube: &CubieCube) -> CubieCube {
        let mut projected = *cube;
        for slot in 0..8 {
            let piece = cube.corner_permutation[slot];
            match self.corners[usize::from(piece)] {
                Tracking::Full => {}
                Tracking::Orientation => projected.corner_permutation[slot] = UNKNOWN,
                Tracking::Ignored => {
                    projected.corner_permutation[slot] = UNKNOWN;
                    projected.corner_orientation[slot] = UNKNOWN;
                }
            }
        }
        for slot in 0..12 {
            let piece = cube.edge_permutation[slot];
            match self.edges[usize::from(piece)] {
                Tracking::Full => {}
                Tracking::Orientation => projected.edge_permutation[slot] = UNKNOWN,
                Tracking::Ignored => {
                    projected.edge_permutation[slot] = UNKNOWN;
                    projected.edge_orientation[slot] = UNKNOWN;
                }
            }
        }
        projected
    }
}

/// A move sequence together with its effect, used as a single step of a
/// stage search.
#[derive(Debug, Clone)]
pub(super) struct Algorithm {
    moves: Vec<Move>,
    effect: CubieCube,
}

impl Algorithm {
    pub(super) fn new(moves: Vec<Move>) -> Self {
        let effect = CubieCube::SOLVED.then_moves(&moves);
        Self { moves, effect }
    }

    /// Builds an algorithm from notation that is known to be valid.
    pub(super) fn from_notation(notation: &str) -> Self {
        let moves: MoveSequence = notation
            .parse()
            .expect("algorithms are written in valid notation");
        Self::new(moves.into_inner())
    }

    /// The same algorithm performed from another side of the cube: every
    /// side face is replaced by the one `quarter_turns` steps clockwise from
    /// it, seen from above.
    pub(super) fn from_side(&self, quarter_turns: usize) -> Self {
        let moves = self
            .moves
            .iter()
            .map(|m| {
                let face = (0..quarter_turns).fold(m.face, |face, _| next_side(face));
                Move::new(face, m.amount)
            })
            .collect();
        Self::new(moves)
    }

    pub(super) fn repeated(&self, times: usize) -> Self {
        Self::new(self.moves.repeat(times))
    }

    /// The algorithm seen from all four sides, without duplicates.
    pub(super) fn from_every_side(&self) -> Vec<Algorithm> {
        let mut variants: Vec<Algorithm> = Vec::with_capacity(4);
        for quarter_turns in 0..4 {
            let variant = self.from_side(quarter_turns);
            if variants.iter().all(|other| other.moves != variant.moves) {
                variants.push(variant);
            }
        }
        variants
    }
}

/// The side face one quarter turn clockwise from `face` seen from above.
/// The up and down faces stay put.
fn next_side(face: Face) -> Face {
    match face {
        Face::Front => Face::Right,
        Face::Right => Face::Back,
        Face::Back => Face::Left,
        Face::Left => Face::Front,
        Face::Up | Face::Down => face,
    }
}

/// Single turns of the up face, to line the last layer up with the slot an
/// algorithm works on.
pub(super) fn up_turns() -> Vec<Algorithm> {
    Move::ALL
        .iter()
        .filter(|m| m.face == Face::Up)
        .map(|&m| Algorithm::new(vec![m]))
        .collect()
}

struct Node {
    cube: CubieCube,
    /// The node this one was reached from and the algorithm that led here.
    /// `None` for the start.
    link: Option<(usize, usize)>,
}

/// Finds the fewest algorithms from `alphabet` that bring `cube` to `goal`,
/// using at most `max_depth` of them. Returns their concatenated moves.
pub(super) fn breadth_first(
    cube: &CubieCube,
    goal: &Goal,
    alphabet: &[Algorithm],
    max_depth: usize,
) -> Option<Vec<Move>> {
    let start = goal.project(cube);
    if start.known_pieces_solved() {
        return Some(vec![]);
    }

    let mut nodes = vec![Node {
        cube: start,
        link: None,
    }];
    let mut visited = FxHashSet::default();
    visited.insert(start);

    let mut layer_start = 0;
    for depth in 1..=max_depth {
        let layer_end = nodes.len();
        for parent in layer_start..layer_end {
            for (algorithm_index, algorithm) in alphabet.iter().enumerate() {
                let next = nodes[parent].cube.then(&algorithm.effect);
                if !visited.insert(next) {
                    continue;
                }
                nodes.push(Node {
                    cube: next,
                    link: Some((parent, algorithm_index)),
                });
                if next.known_pieces_solved() {
                    trace!("Stage search visited {} states to depth {depth}", visited.len());
                    return Some(path(&nodes, nodes.len() - 1, alphabet));
                }
            }
        }
        layer_start = layer_end;
        if layer_start == nodes.len() {
            break;
        }
    }

    trace!("Stage search exhausted {} states", visited.len());
    None
}

fn path(nodes: &[Node], mut node: usize, alphabet: &[Algorithm]) -> Vec<Move> {
    let mut algorithms = vec![];
    while let Some((parent, algorithm)) = nodes[node].link {
        algorithms.push(algorithm);
        node = parent;
    }
    algorithms
        .iter()
        .rev()
        .flat_map(|&algorithm| alphabet[algorithm].moves.iter().copied())
        .collect()
}

/// How many projected states `alphabet` reaches from the solved cube, and
/// how many algorithms the farthest one takes.
#[cfg(test)]
pub(super) fn reachable(goal: &Goal, alphabet: &[Algorithm]) -> (usize, usize) {
    let start = goal.project(&CubieCube::SOLVED);
    let mut visited = FxHashSet::default();
    visited.insert(start);
    let mut frontier = vec![start];
    let mut depth = 0;
    loop {
        let mut next_frontier = vec![];
        for cube in &frontier {
            for algorithm in alphabet {
                let next = cube.then(&algorithm.effect);
                if visited.insert(next) {
                    next_frontier.push(next);
                }
            }
        }
        if next_frontier.is_empty() {
            return (visited.len(), depth);
        }
        depth += 1;
        frontier = next_frontier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_side() {
        let algorithm = Algorithm::from_notation("R U R' F2 L' B D");
        let moved =
            |quarter_turns| MoveSequence(algorithm.from_side(quarter_turns).moves).to_string();
        assert_eq!(moved(1), "B U B' R2 F' L D");
        assert_eq!(moved(2), "L U L' B2 R' F D");
        assert_eq!(moved(4), "R U R' F2 L' B D");
    }

    #[test]
    fn test_symmetric_algorithm_has_one_side() {
        assert_eq!(Algorithm::from_notation("U2 D").from_every_side().len(), 1);
        assert_eq!(Algorithm::from_notation("R U").from_every_side().len(), 4);
    }

    #[test]
    fn test_finds_inverse() {
        let sexy = Algorithm::from_notation("R U R' U'");
        let alphabet = [sexy.clone()];
        let goal = Goal::new()
            .corners(&Corner::ALL, Tracking::Full)
            .edges(&Edge::ALL, Tracking::Full);
        // Six repetitions are the identity, so five undo one.
        let cube = CubieCube::SOLVED.then(&sexy.effect);
        let moves = breadth_first(&cube, &goal, &alphabet, 5).unwrap();
        assert_eq!(moves.len(), 20);
        assert!(breadth_first(&cube, &goal, &alphabet, 4).is_none());
    }

    #[test]
    fn test_ignored_pieces_do_not_matter() {
        let goal = Goal::new().edges(&[Edge::Dr], Tracking::Full);
        let cube = CubieCube::SOLVED.then_move(crate::face_turn!(Up));
        assert_eq!(breadth_first(&cube, &goal, &up_turns(), 1), Some(vec![]));
    }
}
