//! Reading corner and edge pieces off the stickers.
//!
//! Pieces are never stored: they are recomputed from a [`Configuration`]
//! whenever they are needed, so they cannot drift out of sync with the
//! stickers.

use crate::{
    configuration::{CENTER, Configuration},
    notation::{Color, Face},
};
use std::fmt::{self, Display};

/// A corner slot, named by the faces it touches. Also names the corner piece
/// that belongs in that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    Urf,
    Ufl,
    Ulb,
    Ubr,
    Dfr,
    Dlf,
    Dbl,
    Drb,
}

/// An edge slot, named by the faces it touches. Also names the edge piece
/// that belongs in that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge {
    Ur,
    Uf,
    Ul,
    Ub,
    Dr,
    Df,
    Dl,
    Db,
    Fr,
    Fl,
    Bl,
    Br,
}

/// Stickers of each corner slot, starting with the up or down sticker and
/// going clockwise around the corner.
const CORNER_FACELETS: [[(Face, usize); 3]; 8] = {
    use Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};
    [
        [(U, 8), (R, 0), (F, 2)],
        [(U, 6), (F, 0), (L, 2)],
        [(U, 0), (L, 0), (B, 2)],
        [(U, 2), (B, 0), (R, 2)],
        [(D, 2), (F, 8), (R, 6)],
        [(D, 0), (L, 8), (F, 6)],
        [(D, 6), (B, 8), (L, 6)],
        [(D, 8), (R, 8), (B, 6)],
    ]
};

/// Stickers of each edge slot, starting with the up, down, front or back
/// sticker.
const EDGE_FACELETS: [[(Face, usize); 2]; 12] = {
    use Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};
    [
        [(U, 5), (R, 1)],
        [(U, 7), (F, 1)],
        [(U, 3), (L, 1)],
        [(U, 1), (B, 1)],
        [(D, 5), (R, 7)],
        [(D, 1), (F, 7)],
        [(D, 3), (L, 7)],
        [(D, 7), (B, 7)],
        [(F, 5), (R, 3)],
        [(F, 3), (L, 5)],
        [(B, 5), (L, 3)],
        [(B, 3), (R, 5)],
    ]
};

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::Urf,
        Corner::Ufl,
        Corner::Ulb,
        Corner::Ubr,
        Corner::Dfr,
        Corner::Dlf,
        Corner::Dbl,
        Corner::Drb,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The stickers of this slot as `(face, index)` pairs.
    #[must_use]
    pub const fn facelets(self) -> [(Face, usize); 3] {
        CORNER_FACELETS[self.index()]
    }

    #[must_use]
    pub const fn faces(self) -> [Face; 3] {
        let [(a, _), (b, _), (c, _)] = self.facelets();
        [a, b, c]
    }
}

impl Edge {
    pub const ALL: [Edge; 12] = [
        Edge::Ur,
        Edge::Uf,
        Edge::Ul,
        Edge::Ub,
        Edge::Dr,
        Edge::Df,
        Edge::Dl,
        Edge::Db,
        Edge::Fr,
        Edge::Fl,
        Edge::Bl,
        Edge::Br,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The stickers of this slot as `(face, index)` pairs.
    #[must_use]
    pub const fn facelets(self) -> [(Face, usize); 2] {
        EDGE_FACELETS[self.index()]
    }

    #[must_use]
    pub const fn faces(self) -> [Face; 2] {
        let [(a, _), (b, _)] = self.facelets();
        [a, b]
    }
}

impl Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.faces().iter().try_for_each(|face| write!(f, "{face}"))
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.faces().iter().try_for_each(|face| write!(f, "{face}"))
    }
}

/// What occupies a corner slot. `identity` is `None` when the stickers do not
/// form any real corner piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerPiece {
    pub identity: Option<Corner>,
    /// Which of the slot's stickers (0, 1 or 2, clockwise from the up or down
    /// sticker) shows the piece's up or down color.
    pub orientation: u8,
}

/// What occupies an edge slot. `identity` is `None` when the stickers do not
/// form any real edge piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgePiece {
    pub identity: Option<Edge>,
    /// 1 when the piece sits flipped relative to the slot.
    pub orientation: u8,
}

/// The pieces of a configuration, indexed by slot in [`Corner::ALL`] and
/// [`Edge::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pieces {
    pub corners: [CornerPiece; 8],
    pub edges: [EdgePiece; 12],
}

impl Pieces {
    /// Identifies the piece in every slot.
    ///
    /// Colors are matched to faces through the center stickers, so any color
    /// scheme works. This never fails; illegal stickers show up as unknown
    /// identities or impossible orientations for [`crate::validate`] to
    /// reject.
    #[must_use]
    pub fn extract(configuration: &Configuration) -> Pieces {
        let faces = color_faces(configuration);
        let face_at = |(face, index): (Face, usize)| {
            faces[configuration.sticker(face, index).index()]
        };

        let corners = Corner::ALL.map(|slot| {
            let seen = slot.facelets().map(face_at);
            let identity = Corner::ALL.into_iter().find(|piece| {
                let reference = piece.faces();
                (0..3).any(|twist| (0..3).all(|k| seen[k] == Some(reference[(k + twist) % 3])))
            });
            let orientation = seen
                .iter()
                .position(|face| matches!(face, Some(Face::Up | Face::Down)))
                .unwrap_or(0);
            CornerPiece {
                identity,
                orientation: u8::try_from(orientation).unwrap_or(0),
            }
        });

        let edges = Edge::ALL.map(|slot| {
            let seen = slot.facelets().map(face_at);
            Edge::ALL
                .into_iter()
                .find_map(|piece| {
                    let [a, b] = piece.faces();
                    if seen == [Some(a), Some(b)] {
                        Some(EdgePiece {
                            identity: Some(piece),
                            orientation: 0,
                        })
                    } else if seen == [Some(b), Some(a)] {
                        Some(EdgePiece {
                            identity: Some(piece),
                            orientation: 1,
                        })
                    } else {
                        None
                    }
                })
                .unwrap_or(EdgePiece {
                    identity: None,
                    orientation: 0,
                })
        });

        Pieces { corners, edges }
    }

    #[must_use]
    pub fn corner_orientation_sum(&self) -> u32 {
        self.corners.iter().map(|piece| u32::from(piece.orientation)).sum()
    }

    #[must_use]
    pub fn edge_orientation_sum(&self) -> u32 {
        self.edges.iter().map(|piece| u32::from(piece.orientation)).sum()
    }
}

impl Configuration {
    /// Shorthand for [`Pieces::extract`].
    #[must_use]
    pub fn pieces(&self) -> Pieces {
        Pieces::extract(self)
    }
}

/// For each color, the first face whose center shows it.
fn color_faces(configuration: &Configuration) -> [Option<Face>; 6] {
    let mut faces = [None; 6];
    for face in Face::ALL {
        let color: Color = configuration.sticker(face, CENTER);
        if faces[color.index()].is_none() {
            faces[color.index()] = Some(face);
        }
    }
    faces
}

/// Whether the permutation mapping slot `i` to `permutation[i]` is odd.
pub(crate) fn is_odd_permutation(permutation: &[usize]) -> bool {
    let mut inversions = 0;
    for (i, &a) in permutation.iter().enumerate() {
        inversions += permutation[i + 1..].iter().filter(|&&b| b < a).count();
    }
    inversions % 2 == 1
}
