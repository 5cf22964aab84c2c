use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::BoardParseError;

use super::{
    BOARD_HEIGHT, BOARD_WIDTH, HEIGHT_I32, WIDTH_I32,
    active_piece::ActivePiece,
    piece::{PieceKind, PieceShape},
    shape_offset,
};

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Locked piece of a specific type.
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// `.` for an empty cell, the piece letter otherwise.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(kind) => kind.as_char(),
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            _ => match PieceKind::from_char(c) {
                Some(kind) => Some(Cell::Piece(kind)),
                None => None,
            },
        }
    }
}

/// A single row of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRow {
    cells: [Cell; BOARD_WIDTH],
}

impl BoardRow {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; BOARD_WIDTH],
    };

    #[must_use]
    pub fn cells(&self) -> &[Cell; BOARD_WIDTH] {
        &self.cells
    }

    /// A row is full when every cell is non-empty.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

/// The playfield: a fixed 10×20 grid of [`Cell`]s.
///
/// Rows are stored in a fixed-size array indexed from the top (`y = 0`) to the
/// bottom (`y = 19`). Line clearing compacts rows inside that array, so the
/// dimensions never change after construction.
///
/// # Coordinate System
///
/// - `x` grows to the right, `y` grows downward
/// - Piece coordinates are signed: a falling piece may hang above the top edge
///   (`y < 0`), and the empty columns of a rotated bounding box may hang past
///   either wall
///
/// # Text Form
///
/// `Display` prints one line per row with `.` for empty cells and the piece
/// letter otherwise. `FromStr` parses the same form; shorter input is padded
/// with empty rows at the top, which keeps test fixtures short:
///
/// ```
/// use blockfall_engine::{Board, Cell, PieceKind};
///
/// let board: Board = "IIIIIIIII.".parse().unwrap();
/// assert_eq!(board.cell(0, 19), Some(Cell::Piece(PieceKind::I)));
/// assert_eq!(board.cell(9, 19), Some(Cell::Empty));
/// assert!(board.is_occupied(0, 19));
/// assert!(board.is_occupied(10, 5)); // right wall
/// assert!(!board.is_occupied(3, -1)); // above the board
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [BoardRow; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [BoardRow::EMPTY; BOARD_HEIGHT],
    };

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|&x| x < BOARD_WIDTH)?;
        let y = usize::try_from(y).ok().filter(|&y| y < BOARD_HEIGHT)?;
        Some((x, y))
    }

    /// Returns the cell at (`x`, `y`), or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y).and_then(|row| row.cells.get(x)).copied()
    }

    /// Returns an iterator over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.rows.iter().map(BoardRow::cells)
    }

    /// Number of non-empty cells on the board.
    #[must_use]
    pub fn filled_cell_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Returns whether the cell at (`x`, `y`) blocks a piece.
    ///
    /// - Outside the side walls (`x < 0` or `x >= 10`): occupied
    /// - Below the floor (`y >= 20`): occupied
    /// - Above the board (`y < 0`) between the walls: free
    /// - Otherwise: whether the grid cell is filled
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if !(0..WIDTH_I32).contains(&x) || y >= HEIGHT_I32 {
            return true;
        }
        match Self::index(x, y) {
            Some((x, y)) => !self.rows[y].cells[x].is_empty(),
            None => false,
        }
    }

    /// Returns whether `shape` placed with its top-left corner at (`x`, `y`)
    /// hits a wall, the floor, or a filled cell.
    ///
    /// Shape cells above the board only take part in the wall check. A cell
    /// whose coordinate overflows `i32` is outside the board and collides.
    #[must_use]
    pub fn is_collision(&self, x: i32, y: i32, shape: &PieceShape) -> bool {
        shape.occupied_cells().any(|(col, row)| {
            match (
                x.checked_add(shape_offset(col)),
                y.checked_add(shape_offset(row)),
            ) {
                (Some(x), Some(y)) => self.is_occupied(x, y),
                _ => true,
            }
        })
    }

    /// Returns whether `piece` collides at its current origin.
    #[must_use]
    pub fn is_colliding(&self, piece: &ActivePiece) -> bool {
        let origin = piece.origin();
        self.is_collision(origin.x, origin.y, piece.shape())
    }

    /// Writes the piece's cells into the grid with the piece's kind.
    ///
    /// Cells still above the board (`y < 0`) are dropped.
    pub fn place(&mut self, piece: &ActivePiece) {
        let cell = Cell::Piece(piece.kind());
        for (x, y) in piece.occupied_positions() {
            if let Some((x, y)) = Self::index(x, y) {
                self.rows[y].cells[x] = cell;
            }
        }
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// Remaining rows keep their relative order and move down; one empty row is
    /// inserted at the top for each removed row. The scan runs bottom to top
    /// over the whole board, so no full row is left afterwards.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut count = 0;
        for y in (0..BOARD_HEIGHT).rev() {
            if self.rows[y].is_filled() {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[y + count] = self.rows[y];
            }
        }
        self.rows[..count].fill(BoardRow::EMPTY);
        count
    }

    #[cfg(test)]
    pub(crate) fn fill_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y].cells[x] = cell;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for cell in row.cells {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() > BOARD_HEIGHT {
            return Err(BoardParseError::TooManyRows {
                max: BOARD_HEIGHT,
                found: lines.len(),
            });
        }

        let mut board = Board::EMPTY;
        let top = BOARD_HEIGHT - lines.len();
        for (i, line) in lines.iter().enumerate() {
            let y = top + i;
            let found = line.chars().count();
            if found != BOARD_WIDTH {
                return Err(BoardParseError::RowWidth {
                    row: y,
                    expected: BOARD_WIDTH,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                board.rows[y].cells[x] = Cell::from_char(ch).ok_or(BoardParseError::InvalidCell {
                    row: y,
                    column: x,
                    ch,
                })?;
            }
        }
        Ok(board)
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: usize, kind: PieceKind) {
        for x in 0..BOARD_WIDTH {
            board.fill_cell(x, y, Cell::Piece(kind));
        }
    }

    #[test]
    fn test_initial_board() {
        let board = Board::EMPTY;
        assert_eq!(board.rows().count(), BOARD_HEIGHT);
        assert_eq!(board.filled_cell_count(), 0);
        for row in board.rows() {
            assert!(row.iter().all(|cell| cell.is_empty()));
        }
    }

    #[test]
    fn test_is_occupied_walls_and_floor() {
        let board = Board::EMPTY;
        assert!(board.is_occupied(-1, 0));
        assert!(board.is_occupied(10, 0));
        assert!(board.is_occupied(0, 20));
        assert!(board.is_occupied(-1, -3));
        assert!(!board.is_occupied(0, 0));
        assert!(!board.is_occupied(9, 19));
        assert!(!board.is_occupied(5, -2));
    }

    #[test]
    fn test_collision_past_right_wall() {
        let board = Board::EMPTY;
        for kind in PieceKind::ALL {
            let shape = kind.shape();
            let (col, _) = shape.occupied_cells().next().unwrap();
            // put the first occupied cell at x = W
            let x = WIDTH_I32 - shape_offset(col);
            assert!(board.is_collision(x, 5, &shape), "{kind:?}");
        }
    }

    #[test]
    fn test_no_collision_inside_empty_board() {
        let board = Board::EMPTY;
        for kind in PieceKind::ALL {
            assert!(!board.is_collision(3, 5, &kind.shape()), "{kind:?}");
        }
    }

    #[test]
    fn test_collision_above_board_checks_walls_only() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 0, PieceKind::Z);
        let shape = PieceKind::O.shape();
        // entirely above the board, between the walls
        assert!(!board.is_collision(4, -2, &shape));
        // lower row reaches the filled row 0
        assert!(board.is_collision(4, -1, &shape));
        // above the board but past the left wall
        assert!(board.is_collision(-1, -2, &shape));
    }

    #[test]
    fn test_collision_with_filled_cell() {
        let mut board = Board::EMPTY;
        board.fill_cell(5, 10, Cell::Piece(PieceKind::S));
        let shape = PieceKind::O.shape();
        assert!(board.is_collision(4, 9, &shape));
        assert!(board.is_collision(5, 10, &shape));
        assert!(!board.is_collision(6, 10, &shape));
    }

    #[test]
    fn test_collision_at_coordinate_limits() {
        let board = Board::EMPTY;
        let shape = PieceKind::T.shape();
        assert!(board.is_collision(i32::MAX, 0, &shape));
        assert!(board.is_collision(0, i32::MAX, &shape));
        assert!(board.is_collision(i32::MIN, 0, &shape));
        // far above the board between the walls is open sky
        assert!(!board.is_collision(3, i32::MIN, &shape));
    }

    #[test]
    fn test_place_drops_cells_above_board() {
        let mut board = Board::EMPTY;
        // vertical I in column 2 of its box, top two cells above the board
        let piece = ActivePiece::spawn(PieceKind::I)
            .rotated()
            .moved(0, -2)
            .unwrap();
        board.place(&piece);
        assert_eq!(board.filled_cell_count(), 2);
        let x = usize::try_from(piece.origin().x + 2).unwrap();
        assert_eq!(board.cell(x, 0), Some(Cell::Piece(PieceKind::I)));
        assert_eq!(board.cell(x, 1), Some(Cell::Piece(PieceKind::I)));
    }

    #[test]
    fn test_clear_lines_basic() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, BOARD_HEIGHT - 1, PieceKind::I);
        board.fill_cell(0, BOARD_HEIGHT - 2, Cell::Piece(PieceKind::T));

        assert_eq!(board.clear_full_lines(), 1);
        // the partial row moved down by one
        assert_eq!(
            board.cell(0, BOARD_HEIGHT - 1),
            Some(Cell::Piece(PieceKind::T))
        );
        assert_eq!(board.filled_cell_count(), 1);
    }

    #[test]
    fn test_clear_lines_non_adjacent() {
        let mut board: Board = "
            J.........
            IIIIIIIIII
            .L........
            OOOOOOOOOO
        "
        .parse()
        .unwrap();

        assert_eq!(board.clear_full_lines(), 2);
        let expected: Board = "
            J.........
            .L........
        "
        .parse()
        .unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn test_clear_lines_all_filled() {
        let mut board = Board::EMPTY;
        for y in 0..BOARD_HEIGHT {
            fill_row(&mut board, y, PieceKind::L);
        }
        assert_eq!(board.clear_full_lines(), BOARD_HEIGHT);
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_clear_lines_with_partial_lines() {
        let mut board = Board::EMPTY;
        for x in 0..BOARD_WIDTH - 1 {
            board.fill_cell(x, 0, Cell::Piece(PieceKind::I));
        }
        let before = board.clone();
        assert_eq!(board.clear_full_lines(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_lines_conserves_dimensions_and_leaves_no_full_row() {
        let mut board: Board = "
            ZZ..ZZZZZZ
            SSSSSSSSSS
            TTTTTTTTTT
            .T.T.T.T.T
            JJJJJJJJJJ
        "
        .parse()
        .unwrap();
        let filled_before = board.filled_cell_count();

        let cleared = board.clear_full_lines();
        assert_eq!(cleared, 3);
        assert_eq!(board.rows().count(), BOARD_HEIGHT);
        assert!(board.rows().all(|row| row.len() == BOARD_WIDTH));
        assert_eq!(
            board.filled_cell_count(),
            filled_before - cleared * BOARD_WIDTH
        );
        assert!(board.rows().all(|row| row.iter().any(|c| c.is_empty())));
        assert_eq!(board.clear_full_lines(), 0);
    }

    #[test]
    fn test_text_form_roundtrip() {
        let board: Board = "
            .....O....
            T..SSZZ...
        "
        .parse()
        .unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().count(), BOARD_HEIGHT);
        assert_eq!(text.lines().last(), Some("T..SSZZ..."));
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "IIII".parse::<Board>(),
            Err(BoardParseError::RowWidth { found: 4, .. })
        ));
        assert!(matches!(
            "IIIIXIIIII".parse::<Board>(),
            Err(BoardParseError::InvalidCell {
                row: 19,
                column: 4,
                ch: 'X'
            })
        ));
        let too_many = vec![".........."; BOARD_HEIGHT + 1].join("\n");
        assert!(matches!(
            too_many.parse::<Board>(),
            Err(BoardParseError::TooManyRows { found: 21, .. })
        ));
    }

    #[test]
    fn test_board_serialization() {
        let mut board = Board::EMPTY;
        board.fill_cell(3, 19, Cell::Piece(PieceKind::S));
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, board);
        assert!(serde_json::from_str::<Board>("\"nope\"").is_err());
    }
}
