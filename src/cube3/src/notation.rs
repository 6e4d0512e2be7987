//! The vocabulary of the cube: faces, sticker colors, and face turns written
//! in the usual `R U R' U'` notation.

use itertools::Itertools;
use std::{
    fmt::{self, Display},
    ops::{Deref, DerefMut},
    str::FromStr,
};
use thiserror::Error;

/// One of the six faces of the cube.
///
/// - U: top face
/// - D: bottom face
/// - L: left face
/// - R: right face
/// - F: front face
/// - B: back face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Position of the face in [`Face::ALL`], which is also the order faces
    /// are stored in a configuration.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Face> {
        Some(match letter {
            'U' => Face::Up,
            'D' => Face::Down,
            'L' => Face::Left,
            'R' => Face::Right,
            'F' => Face::Front,
            'B' => Face::Back,
            _ => return None,
        })
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A sticker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Orange,
        Color::Red,
        Color::Green,
        Color::Blue,
    ];

    /// The color of `face` on the solved reference cube.
    #[must_use]
    pub const fn of_face(face: Face) -> Color {
        Color::ALL[face.index()]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Color> {
        Some(match letter {
            'W' => Color::White,
            'Y' => Color::Yellow,
            'O' => Color::Orange,
            'R' => Color::Red,
            'G' => Color::Green,
            'B' => Color::Blue,
            _ => return None,
        })
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// How far a face is turned. `CounterClockwise` is written with a `'` suffix
/// and `Double`, a 180 degree turn, with a `2` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Amount {
    Clockwise,
    CounterClockwise,
    Double,
}

impl Amount {
    pub const ALL: [Amount; 3] = [Amount::Clockwise, Amount::CounterClockwise, Amount::Double];

    /// The number of clockwise quarter turns this amount is equivalent to.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Amount::Clockwise => 1,
            Amount::Double => 2,
            Amount::CounterClockwise => 3,
        }
    }

    /// The amount equivalent to `quarter_turns` clockwise quarter turns, or
    /// `None` if the turns cancel out.
    #[must_use]
    pub const fn from_quarter_turns(quarter_turns: u8) -> Option<Amount> {
        match quarter_turns % 4 {
            1 => Some(Amount::Clockwise),
            2 => Some(Amount::Double),
            3 => Some(Amount::CounterClockwise),
            _ => None,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Amount {
        match self {
            Amount::Clockwise => Amount::CounterClockwise,
            Amount::CounterClockwise => Amount::Clockwise,
            Amount::Double => Amount::Double,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Amount::Clockwise => "",
            Amount::CounterClockwise => "'",
            Amount::Double => "2",
        }
    }
}

/// A single face turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Move {
    pub face: Face,
    pub amount: Amount,
}

#[macro_export]
macro_rules! face_turn {
    ($face:ident) => {
        $crate::notation::Move::new(
            $crate::notation::Face::$face,
            $crate::notation::Amount::Clockwise,
        )
    };
    ($face:ident, $amount:ident) => {
        $crate::notation::Move::new(
            $crate::notation::Face::$face,
            $crate::notation::Amount::$amount,
        )
    };
}

impl Move {
    /// Every face turn, grouped by face in [`Face::ALL`] order and, within a
    /// face, in [`Amount::ALL`] order.
    pub const ALL: [Move; 18] = [
        face_turn!(Up),
        face_turn!(Up, CounterClockwise),
        face_turn!(Up, Double),
        face_turn!(Down),
        face_turn!(Down, CounterClockwise),
        face_turn!(Down, Double),
        face_turn!(Left),
        face_turn!(Left, CounterClockwise),
        face_turn!(Left, Double),
        face_turn!(Right),
        face_turn!(Right, CounterClockwise),
        face_turn!(Right, Double),
        face_turn!(Front),
        face_turn!(Front, CounterClockwise),
        face_turn!(Front, Double),
        face_turn!(Back),
        face_turn!(Back, CounterClockwise),
        face_turn!(Back, Double),
    ];

    #[must_use]
    pub const fn new(face: Face, amount: Amount) -> Self {
        Self { face, amount }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            amount: self.amount.inverse(),
        }
    }

    /// Position of the move in [`Move::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.face.index() * 3 + self.amount as usize
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.amount.suffix())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a move, expected one of U D L R F B optionally followed by ' or 2")]
pub struct InvalidMoveNotation(pub String);

impl FromStr for Move {
    type Err = InvalidMoveNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidMoveNotation(s.to_owned());
        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
        let amount = match chars.next() {
            None => Amount::Clockwise,
            Some('\'') => Amount::CounterClockwise,
            Some('2') => Amount::Double,
            Some(_) => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Move::new(face, amount))
    }
}

impl From<Move> for String {
    fn from(m: Move) -> String {
        m.to_string()
    }
}

impl TryFrom<String> for Move {
    type Error = InvalidMoveNotation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parses a single move such as `R`, `U'` or `F2`.
///
/// # Errors
///
/// Anything other than a face letter followed by nothing, `'` or `2`.
pub fn parse(text: &str) -> Result<Move, InvalidMoveNotation> {
    text.parse()
}

#[must_use]
pub fn format(m: Move) -> String {
    m.to_string()
}

/// A sequence of moves, used for scrambles, solutions and algorithms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MoveSequence(pub Vec<Move>);

impl MoveSequence {
    /// The sequence that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.iter().rev().map(|m| m.inverse()).collect()
    }

    /// Merges runs of turns of the same face, dropping the runs that cancel
    /// out, until no two adjacent moves turn the same face. The resulting
    /// sequence has the same effect on every configuration.
    #[must_use]
    pub fn simplified(&self) -> Self {
        let mut simplified: Vec<Move> = Vec::with_capacity(self.len());
        for &m in self.iter() {
            match simplified.last() {
                Some(last) if last.face == m.face => {
                    let quarter_turns = last.amount.quarter_turns() + m.amount.quarter_turns();
                    simplified.pop();
                    if let Some(amount) = Amount::from_quarter_turns(quarter_turns) {
                        simplified.push(Move::new(m.face, amount));
                    }
                }
                _ => simplified.push(m),
            }
        }
        MoveSequence(simplified)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Move> {
        self.0
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = InvalidMoveNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Move>).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(parse("R"), Ok(face_turn!(Right)));
        assert_eq!(parse("U'"), Ok(face_turn!(Up, CounterClockwise)));
        assert_eq!(parse("F2"), Ok(face_turn!(Front, Double)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["", "X", "u", "R3", "R22", "R2'", "R''", " R", "R ", "RU", "'"] {
            assert_eq!(parse(text), Err(InvalidMoveNotation(text.to_owned())), "{text:?}");
        }
    }

    #[test]
    fn test_move_table_order() {
        for (i, m) in Move::ALL.into_iter().enumerate() {
            assert_eq!(m.index(), i);
        }
        assert!(Move::ALL.iter().all_unique());
    }

    #[test]
    fn test_opposite_is_involution() {
        for face in Face::ALL {
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn test_inverse() {
        assert_eq!(face_turn!(Left).inverse(), face_turn!(Left, CounterClockwise));
        assert_eq!(face_turn!(Back, Double).inverse(), face_turn!(Back, Double));
        for m in Move::ALL {
            assert_eq!(m.inverse().inverse(), m);
        }
    }

    #[test]
    fn test_sequence_parse_and_display() {
        let sequence: MoveSequence = "R  U R'\tU'".parse().unwrap();
        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.to_string(), "R U R' U'");
        assert_eq!(sequence.inverse().to_string(), "U R U' R'");
        assert!("R U x".parse::<MoveSequence>().is_err());
        assert!("".parse::<MoveSequence>().unwrap().is_empty());
    }

    #[test]
    fn test_simplified() {
        let simplify = |s: &str| s.parse::<MoveSequence>().unwrap().simplified().to_string();
        assert_eq!(simplify("U U"), "U2");
        assert_eq!(simplify("U U'"), "");
        assert_eq!(simplify("U2 U"), "U'");
        assert_eq!(simplify("R U U' R'"), "");
        assert_eq!(simplify("R U2 U2 R L"), "R2 L");
        assert_eq!(simplify("R L R"), "R L R");
    }
}
