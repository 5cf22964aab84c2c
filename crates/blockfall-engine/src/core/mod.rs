pub use self::{active_piece::*, board::*, piece::*};

pub(crate) mod active_piece;
pub(crate) mod board;
pub(crate) mod piece;

/// Number of columns on the board.
pub const BOARD_WIDTH: usize = 10;
/// Number of rows on the board.
pub const BOARD_HEIGHT: usize = 20;

// Signed copies for piece coordinates, which may sit above or left of the grid.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const WIDTH_I32: i32 = BOARD_WIDTH as i32;
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const HEIGHT_I32: i32 = BOARD_HEIGHT as i32;

/// Converts an offset inside a piece bounding box (below `PieceShape::MAX_SIZE`).
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const fn shape_offset(n: usize) -> i32 {
    n as i32
}
