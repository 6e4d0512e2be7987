//! Applying face turns to sticker configurations.
//!
//! Each turn is a permutation of the 54 sticker slots, derived once from the
//! cube's geometry. Every sticker has an integer position on the surface of
//! the cube, with coordinates in `-1..=1` on the axes x (left to right),
//! y (down to up) and z (back to front), and an outward normal. A clockwise
//! quarter turn of a face rotates every sticker in that face's layer by -90°
//! about the face's normal. Half and counter-clockwise turns are the quarter
//! turn applied two and three times.

use crate::{
    configuration::{Configuration, STICKER_COUNT, STICKERS_PER_FACE},
    notation::{Face, Move},
};
use log::trace;
use std::sync::LazyLock;

type Vector = [i8; 3];

/// A sticker permutation in "source" form: after the turn, slot `i` holds the
/// sticker that was in slot `table[i]`.
pub(crate) type TurnTable = [u8; STICKER_COUNT];

/// Indexed by [`Move::index`].
static TURN_TABLES: LazyLock<[TurnTable; 18]> = LazyLock::new(|| {
    trace!("Deriving sticker permutations for all face turns");
    let mut tables = [[0; STICKER_COUNT]; 18];
    for face in Face::ALL {
        let quarter = quarter_turn(face);
        let half = compose(&quarter, &quarter);
        let three_quarters = compose(&half, &quarter);
        for (table, m) in tables[face.index() * 3..face.index() * 3 + 3]
            .iter_mut()
            .zip(Move::ALL[face.index() * 3..].iter())
        {
            *table = match m.amount.quarter_turns() {
                1 => quarter,
                2 => half,
                _ => three_quarters,
            };
        }
    }
    tables
});

/// The outward normal of a face followed by the directions of increasing
/// column and increasing row in its stored grid.
const fn frame(face: Face) -> (Vector, Vector, Vector) {
    match face {
        Face::Up => ([0, 1, 0], [1, 0, 0], [0, 0, 1]),
        Face::Down => ([0, -1, 0], [1, 0, 0], [0, 0, -1]),
        Face::Left => ([-1, 0, 0], [0, 0, 1], [0, -1, 0]),
        Face::Right => ([1, 0, 0], [0, 0, -1], [0, -1, 0]),
        Face::Front => ([0, 0, 1], [1, 0, 0], [0, -1, 0]),
        Face::Back => ([0, 0, -1], [-1, 0, 0], [0, -1, 0]),
    }
}

/// The position and outward normal of the sticker at flat index `sticker`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn geometry(sticker: usize) -> (Vector, Vector) {
    let (normal, right, down) = frame(Face::ALL[sticker / STICKERS_PER_FACE]);
    let row = (sticker % STICKERS_PER_FACE / 3) as i8 - 1;
    let column = (sticker % 3) as i8 - 1;
    let position =
        std::array::from_fn(|axis| normal[axis] + column * right[axis] + row * down[axis]);
    (position, normal)
}

fn dot(a: Vector, b: Vector) -> i8 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Rotates `v` clockwise by a quarter turn about `axis`, as seen looking at
/// the cube from the side `axis` points to.
fn rotate_clockwise(v: Vector, axis: Vector) -> Vector {
    let along = dot(axis, v);
    let cross = [
        axis[1] * v[2] - axis[2] * v[1],
        axis[2] * v[0] - axis[0] * v[2],
        axis[0] * v[1] - axis[1] * v[0],
    ];
    std::array::from_fn(|i| axis[i] * along - cross[i])
}

#[allow(clippy::cast_possible_truncation)]
fn quarter_turn(face: Face) -> TurnTable {
    let (axis, _, _) = frame(face);
    let lookup: Vec<(Vector, Vector)> = (0..STICKER_COUNT).map(geometry).collect();
    let mut table: TurnTable = std::array::from_fn(|i| i as u8);
    for (sticker, &(position, normal)) in lookup.iter().enumerate() {
        if dot(position, axis) != 1 {
            continue;
        }
        let moved = (rotate_clockwise(position, axis), rotate_clockwise(normal, axis));
        let destination = lookup
            .iter()
            .position(|&slot| slot == moved)
            .expect("rotating a sticker of the cube lands on another sticker");
        table[destination] = sticker as u8;
    }
    table
}

/// The permutation performing `first` and then `second`.
fn compose(first: &TurnTable, second: &TurnTable) -> TurnTable {
    std::array::from_fn(|i| first[second[i] as usize])
}

pub(crate) fn turn_table(m: Move) -> &'static TurnTable {
    &TURN_TABLES[m.index()]
}

impl Configuration {
    /// Turns a face in place.
    pub fn apply(&mut self, m: Move) {
        *self = self.applied(m);
    }

    /// The configuration after turning a face, leaving `self` untouched.
    #[must_use]
    pub fn applied(&self, m: Move) -> Configuration {
        let table = turn_table(m);
        let flat = self.flat();
        let mut stickers = *self.stickers();
        for (i, sticker) in stickers.as_flattened_mut().iter_mut().enumerate() {
            *sticker = flat[table[i] as usize];
        }
        Configuration::from_stickers(stickers)
    }

    /// Applies every move in order.
    pub fn apply_all(&mut self, moves: &[Move]) {
        for &m in moves {
            self.apply(m);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{face_turn, notation::Color};
    use itertools::Itertools;

    fn moved_stickers(m: Move) -> usize {
        turn_table(m)
            .iter()
            .enumerate()
            .filter(|&(i, &source)| i != source as usize)
            .count()
    }

    #[test]
    fn test_tables_are_permutations() {
        for m in Move::ALL {
            assert!(turn_table(m).iter().all_unique(), "{m}");
        }
    }

    #[test]
    fn test_turns_move_twenty_stickers() {
        // The 8 outer stickers of the face and 12 on the neighbouring strips.
        for m in Move::ALL {
            assert_eq!(moved_stickers(m), 20, "{m}");
        }
    }

    #[test]
    fn test_up_turn_strips() {
        let up = Configuration::solved().applied(face_turn!(Up));
        // Clockwise seen from above, the front strip comes from the right.
        assert_eq!(up.face(Face::Front)[..3], [Color::Red; 3]);
        assert_eq!(up.face(Face::Left)[..3], [Color::Green; 3]);
        assert_eq!(up.face(Face::Back)[..3], [Color::Orange; 3]);
        assert_eq!(up.face(Face::Right)[..3], [Color::Blue; 3]);
        assert_eq!(up.face(Face::Front)[3..], [Color::Green; 6]);
    }

    #[test]
    fn test_right_turn_strips() {
        let right = Configuration::solved().applied(face_turn!(Right));
        // R lifts the front column onto the top.
        for i in [2, 5, 8] {
            assert_eq!(right.sticker(Face::Up, i), Color::Green);
            assert_eq!(right.sticker(Face::Front, i), Color::Yellow);
            assert_eq!(right.sticker(Face::Down, i), Color::Blue);
        }
        for i in [0, 3, 6] {
            assert_eq!(right.sticker(Face::Back, i), Color::White);
        }
    }

    #[test]
    fn test_face_stickers_cycle() {
        let mut stickers = *Configuration::solved().stickers();
        stickers[Face::Front.index()][0] = Color::Blue;
        let marked = Configuration::from_stickers(stickers);
        // The top left corner of the front face travels to its top right.
        let turned = marked.applied(face_turn!(Front));
        assert_eq!(turned.sticker(Face::Front, 2), Color::Blue);
        assert_eq!(turned.sticker(Face::Front, 0), Color::Green);
    }

    #[test]
    fn test_in_place_matches_applied() {
        let mut configuration = Configuration::solved();
        let sequence = [
            face_turn!(Right),
            face_turn!(Up, Double),
            face_turn!(Front, CounterClockwise),
        ];
        configuration.apply_all(&sequence);
        let folded = sequence
            .iter()
            .fold(Configuration::solved(), |c, &m| c.applied(m));
        assert_eq!(configuration, folded);
    }
}
