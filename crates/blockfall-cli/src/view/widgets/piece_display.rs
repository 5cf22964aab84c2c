use blockfall_engine::PieceKind;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::BlockDisplay;

/// A single piece in its spawn orientation, trimmed to its occupied rows and columns.
#[derive(Debug, Default)]
pub struct PieceDisplay<'a> {
    piece: Option<PieceKind>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new() -> Self {
        Self {
            piece: None,
            block: None,
        }
    }

    pub fn piece(self, piece: PieceKind) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        4 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

/// Bounding box of the occupied cells: `(min_col, min_row, width, height)`.
fn occupied_bounds(kind: PieceKind) -> (usize, usize, usize, usize) {
    let shape = kind.shape();
    let (mut min_col, mut min_row) = (usize::MAX, usize::MAX);
    let (mut max_col, mut max_row) = (0, 0);
    for (col, row) in shape.occupied_cells() {
        min_col = min_col.min(col);
        min_row = min_row.min(row);
        max_col = max_col.max(col);
        max_row = max_row.max(row);
    }
    (min_col, min_row, max_col - min_col + 1, max_row - min_row + 1)
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some(piece) = self.piece else {
            return;
        };
        let (min_col, min_row, width, height) = occupied_bounds(piece);
        let (Ok(cols), Ok(rows)) = (u16::try_from(width), u16::try_from(height)) else {
            return;
        };
        let piece_area = area.centered(
            Constraint::Length(cols * BlockDisplay::width()),
            Constraint::Length(rows * BlockDisplay::height()),
        );

        let col_constraints = (0..cols).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints = (0..rows).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let grid_rows = piece_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        let shape = piece.shape();
        let occupied_block = BlockDisplay::piece(piece);
        for (y, grid_row) in grid_rows.enumerate() {
            for (x, grid_cell) in grid_row.into_iter().enumerate() {
                let block = if shape.is_occupied(min_col + x, min_row + y) {
                    &occupied_block
                } else {
                    &BlockDisplay::EMPTY
                };
                Widget::render(block, grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupied_bounds() {
        assert_eq!(occupied_bounds(PieceKind::I), (0, 1, 4, 1));
        assert_eq!(occupied_bounds(PieceKind::O), (0, 0, 2, 2));
        assert_eq!(occupied_bounds(PieceKind::T), (0, 0, 3, 2));
    }

    #[test]
    fn test_every_piece_fits_panel() {
        for kind in PieceKind::ALL {
            let (_, _, width, height) = occupied_bounds(kind);
            assert!(width <= 4 && height <= 2, "{kind:?}");
        }
    }
}
