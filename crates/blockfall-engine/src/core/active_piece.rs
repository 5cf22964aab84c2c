use serde::{Deserialize, Serialize};

use super::{
    WIDTH_I32,
    piece::{PieceColor, PieceKind, PieceShape},
    shape_offset,
};

/// Board coordinates of a piece's bounding-box corner.
///
/// Signed, because a falling piece may start above the board and a rotated
/// bounding box may extend past a wall through its empty columns.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the translated position, or `None` if a coordinate overflows.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

/// The falling piece: its kind, current orientation and position.
///
/// Pieces are immutable; movement and rotation return new `ActivePiece`
/// values, which the engine only keeps after a collision check.
///
/// # Example
///
/// ```
/// use blockfall_engine::{ActivePiece, PieceKind, Position};
///
/// let piece = ActivePiece::spawn(PieceKind::O);
/// assert_eq!(piece.origin(), Position::new(4, 0));
///
/// let moved = piece.moved(-1, 1).unwrap();
/// assert_eq!(moved.origin(), Position::new(3, 1));
/// assert_eq!(piece.origin(), Position::new(4, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivePiece {
    kind: PieceKind,
    shape: PieceShape,
    origin: Position,
}

impl ActivePiece {
    /// Creates a piece in its canonical orientation at the top-center of the
    /// board: `x = floor(W / 2) - floor(N / 2)`, `y = 0`.
    #[must_use]
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = kind.shape();
        let half = shape_offset(shape.size() / 2);
        Self {
            kind,
            shape,
            origin: Position::new(WIDTH_I32 / 2 - half, 0),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &PieceShape {
        &self.shape
    }

    #[must_use]
    pub fn origin(&self) -> Position {
        self.origin
    }

    #[must_use]
    pub fn color(&self) -> PieceColor {
        self.kind.color()
    }

    #[must_use]
    pub fn with_origin(&self, origin: Position) -> Self {
        Self { origin, ..*self }
    }

    /// Returns the translated piece, or `None` if the origin would overflow.
    #[must_use]
    pub fn moved(&self, dx: i32, dy: i32) -> Option<Self> {
        self.origin.offset(dx, dy).map(|origin| self.with_origin(origin))
    }

    /// Returns the piece rotated 90° clockwise around its bounding box,
    /// keeping the same origin.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_right(),
            ..*self
        }
    }

    /// Returns an iterator of the board coordinates covered by the piece.
    ///
    /// Coordinates saturate at `i32::MAX`, which is off the board either way.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape.occupied_cells().map(move |(col, row)| {
            (
                self.origin.x.saturating_add(shape_offset(col)),
                self.origin.y.saturating_add(shape_offset(row)),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_positions() {
        // floor(10 / 2) - floor(N / 2)
        assert_eq!(ActivePiece::spawn(PieceKind::I).origin(), Position::new(3, 0));
        assert_eq!(ActivePiece::spawn(PieceKind::O).origin(), Position::new(4, 0));
        for kind in [
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            assert_eq!(ActivePiece::spawn(kind).origin(), Position::new(4, 0));
        }
    }

    #[test]
    fn test_spawn_uses_canonical_shape() {
        for kind in PieceKind::ALL {
            let piece = ActivePiece::spawn(kind);
            assert_eq!(*piece.shape(), kind.shape());
            assert_eq!(piece.color(), kind.color());
        }
    }

    #[test]
    fn test_occupied_positions() {
        let piece = ActivePiece::spawn(PieceKind::T).moved(1, 2).unwrap();
        let positions: Vec<_> = piece.occupied_positions().collect();
        assert_eq!(positions, vec![(6, 2), (5, 3), (6, 3), (7, 3)]);
    }

    #[test]
    fn test_rotated_keeps_origin() {
        let piece = ActivePiece::spawn(PieceKind::J).moved(2, 5).unwrap();
        let rotated = piece.rotated();
        assert_eq!(rotated.origin(), piece.origin());
        assert_eq!(*rotated.shape(), PieceKind::J.shape().rotated_right());
        assert_eq!(rotated.kind(), PieceKind::J);
    }

    #[test]
    fn test_moved_rejects_overflow() {
        let piece = ActivePiece::spawn(PieceKind::T);
        assert_eq!(piece.moved(i32::MAX, 0), None);
        assert_eq!(piece.moved(0, i32::MAX), None);
        assert_eq!(Position::new(i32::MIN, 0).offset(-1, 0), None);
        assert_eq!(Position::new(4, 0).offset(-5, 3), Some(Position::new(-1, 3)));
    }

    #[test]
    fn test_occupied_positions_saturate() {
        let piece = ActivePiece::spawn(PieceKind::O).with_origin(Position::new(i32::MAX, 0));
        assert!(piece.occupied_positions().all(|(x, _)| x == i32::MAX));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(-2, 7).to_string(), "(-2, 7)");
    }
}
