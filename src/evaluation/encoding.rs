//! Occupancy tensor consumed by external evaluators.
//!
//! The encoding has two 8x8 planes indexed `[file - 1][rank - 1][plane]`: plane
//! 0 marks active light pieces and plane 1 marks active dark pieces. Men and
//! kings are not distinguished.
// TODO: Add king planes once the evaluator input layer is widened to 4 planes.

use crate::checkers::core::{Color, BOARD_WIDTH};
use crate::checkers::roster::Roster;

/// Number of piece planes.
pub const PLANES: usize = 2;

/// `[file - 1][rank - 1][plane]` occupancy, 1 for an active piece.
pub type BoardEncoding = [[[u8; PLANES]; BOARD_WIDTH as usize]; BOARD_WIDTH as usize];

/// Encodes active piece occupancy of the roster.
#[must_use]
pub fn encode(roster: &Roster) -> BoardEncoding {
    let mut encoding = [[[0; PLANES]; BOARD_WIDTH as usize]; BOARD_WIDTH as usize];
    for (_, piece) in roster.active() {
        let square = piece.position();
        encoding[square.file() as usize - 1][square.rank() as usize - 1][piece.color().plane()] =
            1;
    }
    encoding
}

/// Number of marked cells in the plane of `color`.
#[must_use]
pub fn plane_count(encoding: &BoardEncoding, color: Color) -> usize {
    encoding
        .iter()
        .flatten()
        .filter(|cell| cell[color.plane()] == 1)
        .count()
}

/// Flattens the encoding in `[file][rank][plane]` order, the layout external
/// tensors are built from.
#[must_use]
pub fn flatten(encoding: &BoardEncoding) -> Vec<u8> {
    encoding.iter().flatten().flatten().copied().collect()
}
