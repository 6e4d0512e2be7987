//! IDA* over single face turns. Finds a shortest solution, which is only
//! feasible when the cube is a handful of moves from solved.

use super::{SolveError, SolveStrategy};
use crate::{configuration::Configuration, cubie::CubieCube, notation::Move, working};
use log::{debug, trace};

/// Searches every solution length in turn, up to `max_depth` moves.
#[derive(Debug, Clone, Copy)]
pub struct IterativeDeepening {
    max_depth: usize,
}

impl IterativeDeepening {
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for IterativeDeepening {
    fn default() -> Self {
        Self::new(7)
    }
}

impl SolveStrategy for IterativeDeepening {
    fn name(&self) -> &'static str {
        "iterative deepening"
    }

    fn solve_legal(&self, configuration: &Configuration) -> Result<Vec<Move>, SolveError> {
        let cube = CubieCube::from_legal(configuration);
        let mut path = Vec::with_capacity(self.max_depth);
        let mut nodes = 0_u64;
        for depth in 0..=self.max_depth {
            debug!(working!("Searching depth {}..."), depth);
            if search(&cube, depth, &mut path, &mut nodes) {
                trace!("Expanded {nodes} nodes");
                return Ok(path);
            }
        }
        trace!("Expanded {nodes} nodes");
        Err(SolveError::DepthLimitExceeded {
            max_depth: self.max_depth,
        })
    }
}

/// A lower bound on the moves left: a face turn moves at most four corners
/// and four edges.
fn lower_bound(cube: &CubieCube) -> usize {
    let unsolved = |permutation: &[u8], orientation: &[u8]| {
        permutation
            .iter()
            .zip(orientation)
            .enumerate()
            .filter(|&(slot, (&piece, &twist))| usize::from(piece) != slot || twist != 0)
            .count()
    };
    let corners = unsolved(&cube.corner_permutation, &cube.corner_orientation);
    let edges = unsolved(&cube.edge_permutation, &cube.edge_orientation);
    corners.div_ceil(4).max(edges.div_ceil(4))
}

/// Whether `next` may follow `previous`. Turns of the same face would merge,
/// and turns of opposite faces commute, so only one order of them is tried.
fn allowed_after(previous: Option<&Move>, next: Move) -> bool {
    match previous {
        None => true,
        Some(previous) => {
            previous.face != next.face
                && !(previous.face == next.face.opposite() && previous.face > next.face)
        }
    }
}

fn search(cube: &CubieCube, depth_left: usize, path: &mut Vec<Move>, nodes: &mut u64) -> bool {
    *nodes += 1;
    if *cube == CubieCube::SOLVED {
        return true;
    }
    if lower_bound(cube) > depth_left {
        return false;
    }
    for m in Move::ALL {
        if !allowed_after(path.last(), m) {
            continue;
        }
        path.push(m);
        if search(&cube.then_move(m), depth_left - 1, path, nodes) {
            return true;
        }
        path.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face_turn;

    #[test]
    fn test_commuting_turns_have_one_order() {
        assert!(allowed_after(Some(&face_turn!(Up)), face_turn!(Down)));
        assert!(!allowed_after(Some(&face_turn!(Down)), face_turn!(Up)));
        assert!(!allowed_after(Some(&face_turn!(Right)), face_turn!(Right, Double)));
        assert!(allowed_after(Some(&face_turn!(Right)), face_turn!(Up)));
    }

    #[test]
    fn test_lower_bound() {
        assert_eq!(lower_bound(&CubieCube::SOLVED), 0);
        assert_eq!(lower_bound(&CubieCube::SOLVED.then_move(face_turn!(Front))), 1);
        let two = CubieCube::SOLVED.then_moves(&[face_turn!(Front), face_turn!(Back)]);
        assert_eq!(lower_bound(&two), 2);
    }
}
