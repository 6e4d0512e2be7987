//! Random scrambles.

use crate::notation::{Amount, Face, Move, MoveSequence};
use log::debug;

/// A random sequence of `count` moves in which no two consecutive moves turn
/// the same face.
#[must_use]
pub fn generate_scramble(count: usize) -> Vec<Move> {
    generate_scramble_with(&mut fastrand::Rng::new(), count)
}

/// Like [`generate_scramble`] but drawing from `rng`, so that a seeded
/// generator gives a reproducible scramble.
#[must_use]
pub fn generate_scramble_with(rng: &mut fastrand::Rng, count: usize) -> Vec<Move> {
    let mut scramble: Vec<Move> = Vec::with_capacity(count);
    for _ in 0..count {
        let previous = scramble.last().map(|m| m.face);
        // Draw among the faces other than the previous one.
        let mut face_index = rng.usize(..if previous.is_some() { 5 } else { 6 });
        if let Some(previous) = previous {
            if face_index >= previous.index() {
                face_index += 1;
            }
        }
        let amount = Amount::ALL[rng.usize(..Amount::ALL.len())];
        scramble.push(Move::new(Face::ALL[face_index], amount));
    }
    debug!("Generated scramble {}", MoveSequence(scramble.clone()));
    scramble
}
