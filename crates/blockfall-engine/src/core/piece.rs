use std::fmt;

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize, Serializer};

/// Enum representing the type of piece.
///
/// Each kind resolves to an immutable canonical [`PieceShape`] and a
/// [`PieceColor`] through a fixed lookup table.
///
/// # Example
///
/// ```
/// use blockfall_engine::PieceKind;
///
/// let shape = PieceKind::T.shape();
/// assert_eq!(shape.size(), 3);
/// assert_eq!(PieceKind::T.color().to_string(), "#a000f0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// S-piece.
    S = 3,
    /// Z-piece.
    Z = 4,
    /// J-piece.
    J = 5,
    /// L-piece.
    L = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All piece kinds in catalog order.
    pub const ALL: [PieceKind; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Returns the canonical (spawn orientation) shape of this kind.
    #[must_use]
    pub const fn shape(self) -> PieceShape {
        CATALOG[self as usize].shape
    }

    /// Returns the display color of this kind.
    #[must_use]
    pub const fn color(self) -> PieceColor {
        CATALOG[self as usize].color
    }

    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    /// Parses a piece kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('I'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// RGB color tag of a piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("#{r:02x}{g:02x}{b:02x}")]
pub struct PieceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PieceColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Serialize for PieceColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// An N×N occupancy matrix of a piece in one orientation (N is 2, 3 or 4).
///
/// Shapes are values: [`rotated_right`](Self::rotated_right) returns a new
/// matrix and never mutates the receiver. Cells outside the N×N area are
/// always empty, so two shapes compare equal exactly when their matrices do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceShape {
    size: u8,
    // cells[row][col]
    cells: [[bool; PieceShape::MAX_SIZE]; PieceShape::MAX_SIZE],
}

impl PieceShape {
    /// Largest bounding box side among all pieces.
    pub const MAX_SIZE: usize = 4;

    #[expect(clippy::cast_possible_truncation)]
    const fn from_rows(size: usize, cells: [[bool; Self::MAX_SIZE]; Self::MAX_SIZE]) -> Self {
        assert!(size >= 2 && size <= Self::MAX_SIZE);
        let mut row = 0;
        while row < Self::MAX_SIZE {
            let mut col = 0;
            while col < Self::MAX_SIZE {
                assert!(!cells[row][col] || (row < size && col < size));
                col += 1;
            }
            row += 1;
        }
        Self {
            size: size as u8,
            cells,
        }
    }

    /// Side length N of the bounding matrix.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size as usize
    }

    /// Returns whether the cell at (`col`, `row`) of the matrix is occupied.
    ///
    /// Coordinates outside the matrix are reported as empty.
    #[must_use]
    pub const fn is_occupied(&self, col: usize, row: usize) -> bool {
        col < self.size() && row < self.size() && self.cells[row][col]
    }

    /// Returns an iterator of occupied `(col, row)` offsets, row by row.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size();
        (0..size).flat_map(move |row| {
            (0..size)
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col, row))
        })
    }

    /// Returns the matrix rotated 90° clockwise.
    ///
    /// `rotated[col][N - 1 - row] = original[row][col]`
    #[must_use]
    pub const fn rotated_right(&self) -> Self {
        let size = self.size();
        let mut cells = [[false; Self::MAX_SIZE]; Self::MAX_SIZE];
        let mut row = 0;
        while row < size {
            let mut col = 0;
            while col < size {
                cells[col][size - 1 - row] = self.cells[row][col];
                col += 1;
            }
            row += 1;
        }
        Self {
            size: self.size,
            cells,
        }
    }

    fn row_string(&self, row: usize, occupied: char, empty: char) -> String {
        self.cells[row][..self.size()]
            .iter()
            .map(|&cell| if cell { occupied } else { empty })
            .collect()
    }
}

impl fmt::Display for PieceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            if row > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&self.row_string(row, '#', '.'))?;
        }
        Ok(())
    }
}

impl Serialize for PieceShape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Format: ["010", "111", "000"]
        serializer.collect_seq((0..self.size()).map(|row| self.row_string(row, '1', '0')))
    }
}

struct CatalogEntry {
    shape: PieceShape,
    color: PieceColor,
}

const CATALOG: [CatalogEntry; PieceKind::LEN] = {
    const X: bool = true;
    const E: bool = false;
    const EEEE: [bool; 4] = [E; 4];

    const fn entry(size: usize, cells: [[bool; 4]; 4], color: PieceColor) -> CatalogEntry {
        CatalogEntry {
            shape: PieceShape::from_rows(size, cells),
            color,
        }
    }

    [
        // I-piece
        entry(
            4,
            [EEEE, [X, X, X, X], EEEE, EEEE],
            PieceColor::new(0x00, 0xf5, 0xff),
        ),
        // O-piece
        entry(
            2,
            [[X, X, E, E], [X, X, E, E], EEEE, EEEE],
            PieceColor::new(0xff, 0xff, 0x00),
        ),
        // T-piece
        entry(
            3,
            [[E, X, E, E], [X, X, X, E], EEEE, EEEE],
            PieceColor::new(0xa0, 0x00, 0xf0),
        ),
        // S-piece
        entry(
            3,
            [[E, X, X, E], [X, X, E, E], EEEE, EEEE],
            PieceColor::new(0x00, 0xf0, 0x00),
        ),
        // Z-piece
        entry(
            3,
            [[X, X, E, E], [E, X, X, E], EEEE, EEEE],
            PieceColor::new(0xf0, 0x00, 0x00),
        ),
        // J-piece
        entry(
            3,
            [[X, E, E, E], [X, X, X, E], EEEE, EEEE],
            PieceColor::new(0x00, 0x00, 0xf0),
        ),
        // L-piece
        entry(
            3,
            [[E, E, X, E], [X, X, X, E], EEEE, EEEE],
            PieceColor::new(0xf0, 0xa0, 0x00),
        ),
    ]
};
