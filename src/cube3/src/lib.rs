#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::module_name_repetitions)]

//! A 3×3×3 cube: sticker configurations, face turns, legality checks,
//! scrambles and solvers.
//!
//! ```
//! use cube3::{Configuration, generate_scramble, solve};
//!
//! let mut cube = Configuration::solved();
//! cube.apply_all(&generate_scramble(20));
//! let solution = solve(&cube).unwrap();
//! cube.apply_all(&solution);
//! assert!(cube.is_solved());
//! ```

pub mod configuration;
pub(crate) mod cubie;
pub mod notation;
pub mod pieces;
pub mod scramble;
pub mod solver;
pub(crate) mod turns;
pub mod validate;

pub use configuration::{Configuration, FaceGrids};
pub use notation::{Amount, Color, Face, InvalidMoveNotation, Move, MoveSequence, format, parse};
pub use pieces::{Corner, Edge, Pieces};
pub use scramble::{generate_scramble, generate_scramble_with};
pub use solver::{
    IterativeDeepening, LayerByLayer, SolveError, SolveStrategy, Solver, Stage, solve,
};
pub use validate::{LegalityError, validate};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
