//! The cross: the four down edges, solved through an exact distance table.
//!
//! The table covers every arrangement of the four edges, indexed by the slot
//! and flip of each edge, and stores the fewest moves needed to solve it. It
//! is built once by a breadth first search outwards from the solved cross.
//! Solving then just follows any move that lowers the distance.

use crate::{
    cubie::CubieCube,
    notation::Move,
    pieces::Edge,
    start, success, working,
};
use log::{debug, info};
use std::{collections::VecDeque, sync::LazyLock, time::Instant};

const CROSS_EDGES: [Edge; 4] = [Edge::Dr, Edge::Df, Edge::Dl, Edge::Db];
/// Each edge is in one of 12 slots with one of 2 flips.
const PLACEMENTS: usize = 24;
const TABLE_SIZE: usize = PLACEMENTS.pow(4);
const UNVISITED: u8 = u8::MAX;

static CROSS_TABLE: LazyLock<CrossTable> = LazyLock::new(CrossTable::generate);

/// Where a face turn sends the edge in each slot, and whether it flips it.
struct EdgeTurn {
    destination: [u8; 12],
    flip: [u8; 12],
}

pub(super) struct CrossTable {
    turns: Vec<EdgeTurn>,
    distances: Box<[u8]>,
}

#[allow(clippy::cast_possible_truncation)]
fn edge_turns() -> Vec<EdgeTurn> {
    Move::ALL
        .iter()
        .map(|&m| {
            let cube = CubieCube::of_move(m);
            let mut turn = EdgeTurn {
                destination: [0; 12],
                flip: [0; 12],
            };
            for slot in 0..12 {
                let from = cube.edge_permutation[slot] as usize;
                turn.destination[from] = slot as u8;
                turn.flip[from] = cube.edge_orientation[slot];
            }
            turn
        })
        .collect()
}

fn index(cube: &CubieCube) -> usize {
    let mut index = 0;
    for edge in CROSS_EDGES.iter().rev() {
        let slot = cube
            .edge_permutation
            .iter()
            .position(|&piece| usize::from(piece) == edge.index())
            .unwrap_or(0);
        index = index * PLACEMENTS + slot * 2 + usize::from(cube.edge_orientation[slot]);
    }
    index
}

impl CrossTable {
    fn generate() -> Self {
        info!(start!("Generating the cross distance table"));
        let start = Instant::now();
        let turns = edge_turns();
        let mut distances = vec![UNVISITED; TABLE_SIZE].into_boxed_slice();
        let solved = index(&CubieCube::SOLVED);
        distances[solved] = 0;

        let mut queue = VecDeque::from([solved]);
        while let Some(current) = queue.pop_front() {
            let next_distance = distances[current] + 1;
            for turn in &turns {
                let next = step(turn, current);
                if distances[next] == UNVISITED {
                    distances[next] = next_distance;
                    queue.push_back(next);
                }
            }
        }

        let reachable = distances.iter().filter(|&&d| d != UNVISITED).count();
        debug!(working!("{} reachable cross states"), reachable);
        info!(
            success!("Generated the cross distance table in {:.3}s"),
            start.elapsed().as_secs_f64()
        );
        Self { turns, distances }
    }

    pub(super) fn get() -> &'static CrossTable {
        &CROSS_TABLE
    }

    #[cfg(test)]
    fn distance(&self, cube: &CubieCube) -> u8 {
        self.distances[index(cube)]
    }

    /// Moves solving the cross of `cube`, as few as possible.
    pub(super) fn solve(&self, cube: &CubieCube) -> Vec<Move> {
        let mut current = index(cube);
        let mut moves = vec![];
        while self.distances[current] != 0 {
            let distance = self.distances[current];
            let Some((next, m)) = self
                .turns
                .iter()
                .zip(Move::ALL)
                .map(|(turn, m)| (step(turn, current), m))
                .find(|&(next, _)| self.distances[next] == distance - 1)
            else {
                break;
            };
            moves.push(m);
            current = next;
        }
        moves
    }
}

/// The table index after applying `turn` to the cross at `index`.
fn step(turn: &EdgeTurn, mut index: usize) -> usize {
    let mut next = 0;
    let mut scale = 1;
    for _ in 0..CROSS_EDGES.len() {
        let placement = index % PLACEMENTS;
        index /= PLACEMENTS;
        let (slot, flip) = (placement / 2, placement % 2);
        let moved = usize::from(turn.destination[slot]) * 2
            + (flip + usize::from(turn.flip[slot])) % 2;
        next += moved * scale;
        scale *= PLACEMENTS;
    }
    next
}
