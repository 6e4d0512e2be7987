//! The cube as a permutation and orientation of pieces, used by the solver
//! searches.
//!
//! A [`CubieCube`] may be partially known: a solver stage only cares about
//! some pieces, so every other piece is replaced by [`UNKNOWN`], which keeps
//! states that differ only in irrelevant pieces identical.

use crate::{configuration::Configuration, notation::Move, pieces::Pieces};
use std::sync::LazyLock;

/// Marks a piece, or the orientation of a piece, that is not tracked.
pub(crate) const UNKNOWN: u8 = u8::MAX;

/// `corner_permutation[i]` is the piece in corner slot `i` and
/// `corner_orientation[i]` its twist, likewise for edges. Numbering follows
/// [`crate::pieces::Corner::ALL`] and [`crate::pieces::Edge::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CubieCube {
    pub corner_permutation: [u8; 8],
    pub corner_orientation: [u8; 8],
    pub edge_permutation: [u8; 12],
    pub edge_orientation: [u8; 12],
}

static MOVE_CUBIES: LazyLock<[CubieCube; 18]> = LazyLock::new(|| {
    Move::ALL.map(|m| {
        CubieCube::from_pieces(&Configuration::solved().applied(m).pieces())
            .expect("a face turn of the solved cube has only real pieces")
    })
});

#[allow(clippy::cast_possible_truncation)]
impl CubieCube {
    pub const SOLVED: CubieCube = CubieCube {
        corner_permutation: [0, 1, 2, 3, 4, 5, 6, 7],
        corner_orientation: [0; 8],
        edge_permutation: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        edge_orientation: [0; 12],
    };

    /// `None` if some slot holds no real piece.
    pub fn from_pieces(pieces: &Pieces) -> Option<CubieCube> {
        let mut cube = CubieCube::SOLVED;
        for (slot, piece) in pieces.corners.iter().enumerate() {
            cube.corner_permutation[slot] = piece.identity?.index() as u8;
            cube.corner_orientation[slot] = piece.orientation;
        }
        for (slot, piece) in pieces.edges.iter().enumerate() {
            cube.edge_permutation[slot] = piece.identity?.index() as u8;
            cube.edge_orientation[slot] = piece.orientation;
        }
        Some(cube)
    }

    /// Reads the pieces of a configuration that has passed validation.
    ///
    /// # Panics
    ///
    /// If some slot holds no real piece, which validation rules out.
    pub fn from_legal(configuration: &Configuration) -> CubieCube {
        Self::from_pieces(&configuration.pieces())
            .expect("a validated configuration has only real pieces")
    }

    /// The effect of a single face turn on the solved cube.
    pub fn of_move(m: Move) -> &'static CubieCube {
        &MOVE_CUBIES[m.index()]
    }

    /// The cube after performing `other` on `self`. Unknown pieces stay
    /// unknown.
    #[must_use]
    pub fn then(&self, other: &CubieCube) -> CubieCube {
        let mut result = *self;
        for slot in 0..8 {
            let from = other.corner_permutation[slot] as usize;
            result.corner_permutation[slot] = self.corner_permutation[from];
            result.corner_orientation[slot] =
                add_orientation(self.corner_orientation[from], other.corner_orientation[slot], 3);
        }
        for slot in 0..12 {
            let from = other.edge_permutation[slot] as usize;
            result.edge_permutation[slot] = self.edge_permutation[from];
            result.edge_orientation[slot] =
                add_orientation(self.edge_orientation[from], other.edge_orientation[slot], 2);
        }
        result
    }

    #[must_use]
    pub fn then_move(&self, m: Move) -> CubieCube {
        self.then(Self::of_move(m))
    }

    #[must_use]
    pub fn then_moves(&self, moves: &[Move]) -> CubieCube {
        moves.iter().fold(*self, |cube, &m| cube.then_move(m))
    }

    /// Every known piece is in its own slot with no twist or flip.
    pub fn known_pieces_solved(&self) -> bool {
        let solved = |permutation: &[u8], orientation: &[u8]| {
            permutation
                .iter()
                .enumerate()
                .all(|(slot, &piece)| piece == UNKNOWN || piece as usize == slot)
                && orientation.iter().all(|&o| o == UNKNOWN || o == 0)
        };
        solved(&self.corner_permutation, &self.corner_orientation)
            && solved(&self.edge_permutation, &self.edge_orientation)
    }
}

fn add_orientation(a: u8, b: u8, modulus: u8) -> u8 {
    if a == UNKNOWN { UNKNOWN } else { (a + b) % modulus }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::MoveSequence;

    #[test]
    fn test_matches_sticker_turns() {
        let sequence: MoveSequence = "R U2 F' L D B2 R' U F2 D'".parse().unwrap();
        let mut configuration = Configuration::solved();
        let mut cube = CubieCube::SOLVED;
        for &m in sequence.iter() {
            configuration.apply(m);
            cube = cube.then_move(m);
            assert_eq!(CubieCube::from_pieces(&configuration.pieces()), Some(cube));
        }
    }

    #[test]
    fn test_unknown_pieces_stay_unknown() {
        let mut cube = CubieCube::SOLVED;
        cube.corner_permutation[0] = UNKNOWN;
        cube.corner_orientation[0] = UNKNOWN;
        let turned = cube.then_moves(&"R U R' U'".parse::<MoveSequence>().unwrap());
        assert_eq!(turned.corner_permutation.iter().filter(|&&p| p == UNKNOWN).count(), 1);
        assert_eq!(turned.corner_orientation.iter().filter(|&&o| o == UNKNOWN).count(), 1);
    }

    #[test]
    fn test_solved_check_ignores_unknown() {
        let mut cube = CubieCube::SOLVED.then_move(Move::ALL[0]);
        assert!(!cube.known_pieces_solved());
        cube.corner_permutation[..4].fill(UNKNOWN);
        cube.corner_orientation[..4].fill(UNKNOWN);
        cube.edge_permutation[..4].fill(UNKNOWN);
        cube.edge_orientation[..4].fill(UNKNOWN);
        assert!(cube.known_pieces_solved());
    }
}
