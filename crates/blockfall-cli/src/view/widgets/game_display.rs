use blockfall_engine::{EngineState, GameEngine};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::view::widgets::{BoardDisplay, PieceDisplay, StatsDisplay, color, style};

/// Full game view: stats on the left, the board in the middle, the next piece on the right.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    engine: &'a GameEngine,
    show_ghost: bool,
    horizontal_padding: u16,
    vertical_padding: u16,
}

impl<'a> GameDisplay<'a> {
    pub fn new(engine: &'a GameEngine, show_ghost: bool) -> Self {
        Self {
            engine,
            show_ghost,
            horizontal_padding: 1,
            vertical_padding: 0,
        }
    }
}

fn border_color(state: EngineState) -> Color {
    match state {
        EngineState::Idle => color::GRAY,
        EngineState::Running => color::WHITE,
        EngineState::Paused => color::YELLOW,
        EngineState::GameOver => color::RED,
    }
}

fn popup(engine: &GameEngine) -> Option<(Vec<Line<'static>>, Style)> {
    match engine.state() {
        EngineState::Running => None,
        EngineState::Idle => Some((
            vec![Line::from("PRESS S TO START")],
            Style::new().fg(color::BLACK).bg(color::WHITE),
        )),
        EngineState::Paused => Some((
            vec![Line::from("PAUSED")],
            Style::new().fg(color::BLACK).bg(color::YELLOW),
        )),
        EngineState::GameOver => Some((
            vec![
                Line::from("GAME OVER!!"),
                Line::from(format!("FINAL SCORE: {}", engine.stats().score())),
            ],
            Style::new().fg(color::WHITE).bg(color::RED),
        )),
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let state = self.engine.state();
        let block_padding = Padding::symmetric(self.horizontal_padding, self.vertical_padding);
        let border_style = border_color(state);

        let game_board = {
            let mut widget = BoardDisplay::new(self.engine.board())
                .block(Block::bordered().border_style(border_style).style(style::DEFAULT));
            if self.show_ghost
                && let Some(ghost) = self.engine.ghost_piece()
            {
                widget = widget.ghost(ghost);
            }
            if let Some(piece) = self.engine.active_piece() {
                widget = widget.active_piece(*piece);
            }
            widget
        };
        let next_panel = {
            let panel = PieceDisplay::new().block(
                Block::bordered()
                    .title(Line::from("NEXT").centered())
                    .padding(block_padding)
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
            if state.is_idle() {
                panel
            } else {
                panel.piece(self.engine.next_piece())
            }
        };
        let stats = StatsDisplay::new(self.engine).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(game_board.width()),
            Constraint::Length(next_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] = Layout::vertical([Constraint::Length(stats.height())]).areas(left_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(center_column);
        let [next_area] =
            Layout::vertical([Constraint::Length(next_panel.height())]).areas(right_column);

        let game_board_width = game_board.width();
        stats.render(stats_area, buf);
        game_board.render(board_area, buf);
        next_panel.render(next_area, buf);

        if let Some((lines, style)) = popup(self.engine) {
            #[expect(clippy::cast_possible_truncation)]
            let text_height = lines.len() as u16;
            let block = Block::new().style(style);
            let text = Text::from(lines).style(style).centered();
            let area = board_area.centered(
                Constraint::Length(game_board_width),
                Constraint::Length(text_height + 2),
            );
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(text_height)), buf);
        }
    }
}
