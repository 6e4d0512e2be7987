//! Deciding whether a configuration can be reached from the solved cube.

use crate::{
    configuration::Configuration,
    notation::{Color, Face},
    pieces::{Corner, Edge, Pieces, is_odd_permutation},
};
use itertools::Itertools;
use log::debug;
use thiserror::Error;

/// Why a configuration cannot be reached from the solved cube. Only the
/// first failing check is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalityError {
    #[error("{color} appears on {count} stickers, expected exactly 9")]
    InvalidStickerCount { color: Color, count: usize },
    #[error("Two faces have the same center color")]
    NonUniqueCenters,
    #[error("The stickers at the {slot} corner do not form a corner piece, or repeat another one")]
    InvalidCornerPiece { slot: Corner },
    #[error("The stickers at the {slot} edge do not form an edge piece, or repeat another one")]
    InvalidEdgePiece { slot: Edge },
    #[error("A corner is twisted in place")]
    InvalidCornerOrientation,
    #[error("An edge is flipped in place")]
    InvalidEdgeOrientation,
    #[error("Two pieces are swapped")]
    InvalidPermutationParity,
}

/// Checks, in order: sticker counts, distinct centers, that every slot holds
/// a distinct real piece, corner twist, edge flip, and permutation parity.
///
/// # Errors
///
/// The first check that fails.
pub fn validate(configuration: &Configuration) -> Result<(), LegalityError> {
    let result = check(configuration);
    if let Err(e) = result {
        debug!("Rejected {configuration}: {e}");
    }
    result
}

fn check(configuration: &Configuration) -> Result<(), LegalityError> {
    let counts = configuration.color_counts();
    let miscounted = Color::ALL
        .into_iter()
        .filter(|color| counts[color.index()] != 9)
        .max_by_key(|color| (counts[color.index()] > 9, std::cmp::Reverse(color.index())));
    if let Some(color) = miscounted {
        return Err(LegalityError::InvalidStickerCount {
            color,
            count: counts[color.index()],
        });
    }

    if !Face::ALL
        .iter()
        .map(|&face| configuration.center(face))
        .all_unique()
    {
        return Err(LegalityError::NonUniqueCenters);
    }

    let pieces = Pieces::extract(configuration);

    let corners = placed(pieces.corners.iter().map(|piece| piece.identity.map(Corner::index)), 8)
        .map_err(|slot| LegalityError::InvalidCornerPiece {
            slot: Corner::ALL[slot],
        })?;
    let edges = placed(pieces.edges.iter().map(|piece| piece.identity.map(Edge::index)), 12)
        .map_err(|slot| LegalityError::InvalidEdgePiece {
            slot: Edge::ALL[slot],
        })?;

    if pieces.corner_orientation_sum() % 3 != 0 {
        return Err(LegalityError::InvalidCornerOrientation);
    }
    if pieces.edge_orientation_sum() % 2 != 0 {
        return Err(LegalityError::InvalidEdgeOrientation);
    }
    if is_odd_permutation(&corners) != is_odd_permutation(&edges) {
        return Err(LegalityError::InvalidPermutationParity);
    }
    Ok(())
}

/// Collects piece identities into a permutation, or returns the first slot
/// whose piece is unknown or already seen.
fn placed(
    identities: impl Iterator<Item = Option<usize>>,
    len: usize,
) -> Result<Vec<usize>, usize> {
    let mut seen = vec![false; len];
    identities
        .enumerate()
        .map(|(slot, identity)| match identity {
            Some(piece) if !seen[piece] => {
                seen[piece] = true;
                Ok(piece)
            }
            _ => Err(slot),
        })
        .collect()
}

impl Configuration {
    /// Whether [`validate`] accepts this configuration.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        check(self).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_count_is_reported_first() {
        let mut stickers = *Configuration::solved().stickers();
        // Yellow 8, Blue 10: Blue is reported even though Yellow comes first.
        stickers[Face::Down.index()][0] = Color::Blue;
        assert_eq!(
            validate(&Configuration::from_stickers(stickers)),
            Err(LegalityError::InvalidStickerCount {
                color: Color::Blue,
                count: 10,
            })
        );
    }

    #[test]
    fn test_duplicate_piece() {
        let mut stickers = *Configuration::solved().stickers();
        // Recoloring the side stickers of UF and UB swaps the two edges.
        stickers[Face::Back.index()][1] = Color::Green;
        stickers[Face::Front.index()][1] = Color::Blue;
        assert_eq!(
            validate(&Configuration::from_stickers(stickers)),
            Err(LegalityError::InvalidPermutationParity)
        );

        // Here UF appears twice, at UF and at UB, and UB nowhere.
        let mut stickers = *Configuration::solved().stickers();
        stickers[Face::Back.index()][1] = Color::Green;
        stickers[Face::Front.index()][7] = Color::Blue;
        assert_eq!(
            validate(&Configuration::from_stickers(stickers)),
            Err(LegalityError::InvalidEdgePiece { slot: Edge::Ub })
        );
    }
}
