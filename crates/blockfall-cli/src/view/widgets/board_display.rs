use std::iter;

use blockfall_engine::{ActivePiece, Board};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::view::widgets::BlockDisplay;

type BlockGrid = [[BlockDisplay; Board::WIDTH]; Board::HEIGHT];

/// The playfield with the falling piece and its landing preview drawn on top.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    ghost: Option<ActivePiece>,
    active_piece: Option<ActivePiece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            ghost: None,
            active_piece: None,
            block: None,
        }
    }

    pub fn ghost(self, piece: ActivePiece) -> Self {
        Self {
            ghost: Some(piece),
            ..self
        }
    }

    pub fn active_piece(self, piece: ActivePiece) -> Self {
        Self {
            active_piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        Board::WIDTH as u16 * BlockDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        Board::HEIGHT as u16 * BlockDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    fn block_grid(&self) -> BlockGrid {
        let mut grid = [[BlockDisplay::EMPTY_DOT; Board::WIDTH]; Board::HEIGHT];
        for (grid_row, row) in iter::zip(&mut grid, self.board.rows()) {
            for (block, cell) in iter::zip(grid_row, row) {
                *block = BlockDisplay::from_cell(*cell, true);
            }
        }

        let mut overlay = |piece: &ActivePiece, display: BlockDisplay| {
            for (x, y) in piece.occupied_positions() {
                // cells above the board are not drawn
                if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
                    && let Some(block) = grid.get_mut(y).and_then(|row| row.get_mut(x))
                {
                    *block = display;
                }
            }
        };
        if let Some(ghost) = &self.ghost {
            overlay(ghost, BlockDisplay::ghost(ghost.kind()));
        }
        if let Some(piece) = &self.active_piece {
            overlay(piece, BlockDisplay::piece(piece.kind()));
        }
        grid
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints =
            (0..Board::WIDTH).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints =
            (0..Board::HEIGHT).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<{ Board::HEIGHT }>(&vertical)
            .into_iter()
            .map(|row| row.layout::<{ Board::WIDTH }>(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, self.block_grid()) {
            for (grid_cell, block) in iter::zip(grid_row, row) {
                block.render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{Cell, PieceKind};

    use super::*;

    #[test]
    fn test_grid_overlays_piece_over_ghost() {
        let board: Board = "IIIIIIIII.".parse().unwrap();
        let piece = ActivePiece::spawn(PieceKind::O);
        let ghost = piece.moved(0, 17).unwrap();
        let grid = BoardDisplay::new(&board)
            .ghost(ghost)
            .active_piece(piece)
            .block_grid();

        assert_eq!(grid[0][4], BlockDisplay::piece(PieceKind::O));
        assert_eq!(grid[17][5], BlockDisplay::ghost(PieceKind::O));
        assert_eq!(grid[19][0], BlockDisplay::from_cell(Cell::Piece(PieceKind::I), true));
        assert_eq!(grid[19][9], BlockDisplay::EMPTY_DOT);
    }

    #[test]
    fn test_grid_skips_cells_above_board() {
        let board = Board::EMPTY;
        let piece = ActivePiece::spawn(PieceKind::T).moved(0, -1).unwrap();
        let grid = BoardDisplay::new(&board).active_piece(piece).block_grid();
        // only the bottom row of the T is visible
        let visible = grid
            .iter()
            .flatten()
            .filter(|block| **block == BlockDisplay::piece(PieceKind::T))
            .count();
        assert_eq!(visible, 3);
    }

    #[test]
    fn test_size_includes_border() {
        let board = Board::EMPTY;
        let display = BoardDisplay::new(&board).block(BlockWidget::bordered());
        assert_eq!(display.width(), 22);
        assert_eq!(display.height(), 22);
    }
}
