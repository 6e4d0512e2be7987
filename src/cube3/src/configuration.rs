//! The sticker-level state of the cube.
//!
//! Faces are stored in [`Face::ALL`] order, each as nine stickers in row-major
//! order as seen on the usual unfolded net:
//!
//! ```text
//!              ┌──┬──┬──┐
//!              │U0│U1│U2│
//!              ├──┼──┼──┤
//!              │U3│U4│U5│
//!              ├──┼──┼──┤
//!              │U6│U7│U8│
//!    ┌──┬──┬──┐├──┼──┼──┤┌──┬──┬──┐┌──┬──┬──┐
//!    │L0│L1│L2││F0│F1│F2││R0│R1│R2││B0│B1│B2│
//!    ├──┼──┼──┤├──┼──┼──┤├──┼──┼──┤├──┼──┼──┤
//!    │L3│L4│L5││F3│F4│F5││R3│R4│R5││B3│B4│B5│
//!    ├──┼──┼──┤├──┼──┼──┤├──┼──┼──┤├──┼──┼──┤
//!    │L6│L7│L8││F6│F7│F8││R6│R7│R8││B6│B7│B8│
//!    └──┴──┴──┘├──┼──┼──┤└──┴──┴──┘└──┴──┴──┘
//!              │D0│D1│D2│
//!              ├──┼──┼──┤
//!              │D3│D4│D5│
//!              ├──┼──┼──┤
//!              │D6│D7│D8│
//!              └──┴──┴──┘
//! ```

use crate::notation::{Color, Face};
use itertools::Itertools;
use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};
use thiserror::Error;

pub const STICKERS_PER_FACE: usize = 9;
pub const STICKER_COUNT: usize = 6 * STICKERS_PER_FACE;
/// Index of the center sticker within a face.
pub const CENTER: usize = 4;

/// The colors of all 54 stickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Configuration {
    stickers: [[Color; STICKERS_PER_FACE]; 6],
}

impl Configuration {
    /// The solved reference cube, every face showing [`Color::of_face`].
    #[must_use]
    pub const fn solved() -> Self {
        let mut stickers = [[Color::White; STICKERS_PER_FACE]; 6];
        let mut face = 0;
        while face < 6 {
            stickers[face] = [Color::of_face(Face::ALL[face]); STICKERS_PER_FACE];
            face += 1;
        }
        Self { stickers }
    }

    /// Builds a configuration from externally captured stickers. Nothing is
    /// checked here; see [`crate::validate`].
    #[must_use]
    pub const fn from_stickers(stickers: [[Color; STICKERS_PER_FACE]; 6]) -> Self {
        Self { stickers }
    }

    #[must_use]
    pub const fn stickers(&self) -> &[[Color; STICKERS_PER_FACE]; 6] {
        &self.stickers
    }

    /// All stickers, face after face.
    #[must_use]
    pub fn flat(&self) -> &[Color] {
        self.stickers.as_flattened()
    }

    #[must_use]
    pub const fn face(&self, face: Face) -> &[Color; STICKERS_PER_FACE] {
        &self.stickers[face.index()]
    }

    #[must_use]
    pub const fn sticker(&self, face: Face, index: usize) -> Color {
        self.stickers[face.index()][index]
    }

    #[must_use]
    pub const fn center(&self, face: Face) -> Color {
        self.sticker(face, CENTER)
    }

    /// Whether every face shows a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.stickers.iter().all(|face| face.iter().all_equal())
    }

    /// How many stickers of each color there are, indexed by [`Color::index`].
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.flat() {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Renders the configuration as an unfolded net of color letters.
    #[must_use]
    pub fn net(&self) -> String {
        let row = |face: Face, row: usize| {
            self.face(face)[row * 3..row * 3 + 3]
                .iter()
                .map(|color| color.letter())
                .join(" ")
        };
        let middle = |r: usize| {
            [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .map(|face| row(face, r))
                .join(" ")
        };
        (0..3)
            .map(|r| format!("      {}\n", row(Face::Up, r)))
            .chain((0..3).map(|r| format!("{}\n", middle(r))))
            .chain((0..3).map(|r| format!("      {}\n", row(Face::Down, r))))
            .collect()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::solved()
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces = self
            .stickers
            .iter()
            .map(|face| face.iter().map(|color| color.letter()).collect::<String>())
            .join(" ");
        f.write_str(&faces)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseConfigurationError {
    #[error("Expected {STICKER_COUNT} stickers but got {0}")]
    WrongLength(usize),
    #[error("`{0}` is not a color, expected one of W Y O R G B")]
    UnknownColor(char),
}

impl FromStr for Configuration {
    type Err = ParseConfigurationError;

    /// Reads 54 color letters, faces in U D L R F B order. Whitespace is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Color::from_letter(c).ok_or(ParseConfigurationError::UnknownColor(c)))
            .collect::<Result<Vec<_>, _>>()?;
        if colors.len() != STICKER_COUNT {
            return Err(ParseConfigurationError::WrongLength(colors.len()));
        }
        let mut stickers = [[Color::White; STICKERS_PER_FACE]; 6];
        for (face, chunk) in stickers.iter_mut().zip(colors.chunks_exact(STICKERS_PER_FACE)) {
            face.copy_from_slice(chunk);
        }
        Ok(Self { stickers })
    }
}

impl From<Configuration> for String {
    fn from(configuration: Configuration) -> String {
        configuration.to_string()
    }
}

impl TryFrom<String> for Configuration {
    type Error = ParseConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One face as a 3×3 grid of rows.
pub type FaceGrid = [[Color; 3]; 3];

/// The configuration as six 3×3 grids, the shape renderers work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceGrids(pub [FaceGrid; 6]);

impl FaceGrids {
    #[must_use]
    pub const fn grid(&self, face: Face) -> &FaceGrid {
        &self.0[face.index()]
    }
}

impl Index<Face> for FaceGrids {
    type Output = FaceGrid;

    fn index(&self, face: Face) -> &Self::Output {
        self.grid(face)
    }
}

impl From<&Configuration> for FaceGrids {
    fn from(configuration: &Configuration) -> Self {
        let mut grids = [[[Color::White; 3]; 3]; 6];
        for (grid, face) in grids.iter_mut().zip(configuration.stickers.iter()) {
            for (i, &color) in face.iter().enumerate() {
                grid[i / 3][i % 3] = color;
            }
        }
        FaceGrids(grids)
    }
}

impl From<&FaceGrids> for Configuration {
    fn from(grids: &FaceGrids) -> Self {
        let mut stickers = [[Color::White; STICKERS_PER_FACE]; 6];
        for (face, grid) in stickers.iter_mut().zip(grids.0.iter()) {
            face.copy_from_slice(grid.as_flattened());
        }
        Configuration { stickers }
    }
}
