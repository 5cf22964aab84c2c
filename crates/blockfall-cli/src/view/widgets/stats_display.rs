use std::iter;

use blockfall_engine::GameEngine;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::{format_play_time, widgets::style};

pub struct StatsDisplay<'a> {
    engine: &'a GameEngine,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(engine: &'a GameEngine) -> Self {
        Self {
            engine,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        ROWS.len() as u16 + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(&'static dyn Fn(&GameEngine) -> String),
    LabelValue(&'static str, &'static dyn Fn(&GameEngine) -> String),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(&|engine| engine.stats().score().to_string()),
    Row::FullLabel("TIME:"),
    Row::FullValue(&|engine| format_play_time(engine.stats().play_time())),
    Row::Empty,
    Row::LabelValue("LEVEL:", &|engine| engine.stats().level().to_string()),
    Row::LabelValue("LINES:", &|engine| {
        engine.stats().total_cleared_lines().to_string()
    }),
    Row::LabelValue("SPEED:", &|engine| format!("{}ms", engine.drop_interval_ms())),
    Row::Empty,
    Row::LabelValue("PIECES:", &|engine| {
        engine.stats().completed_pieces().to_string()
    }),
    Row::LabelValue("SINGLES:", &|engine| {
        engine.stats().line_cleared_counter()[1].to_string()
    }),
    Row::LabelValue("DOUBLES:", &|engine| {
        engine.stats().line_cleared_counter()[2].to_string()
    }),
    Row::LabelValue("TRIPLES:", &|engine| {
        engine.stats().line_cleared_counter()[3].to_string()
    }),
    Row::LabelValue("TETRIS:", &|engine| {
        engine.stats().line_cleared_counter()[4].to_string()
    }),
];

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas[..].iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.engine), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.engine), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
