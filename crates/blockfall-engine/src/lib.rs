pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("lines_per_level must be greater than zero")]
    ZeroLinesPerLevel,
    #[display("min_drop_interval_ms must be greater than zero")]
    ZeroMinDropInterval,
    #[display("min_drop_interval_ms ({min}) exceeds initial_drop_interval_ms ({initial})")]
    MinAboveInitial { min: u64, initial: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    #[display("expected at most {max} rows, got {found}")]
    TooManyRows { max: usize, found: usize },
    #[display("row {row}: expected {expected} cells, got {found}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[display("row {row}, column {column}: invalid cell '{ch}'")]
    InvalidCell { row: usize, column: usize, ch: char },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PieceSeedParseError {
    #[display("invalid hex: expected 32 characters, got {found}")]
    Length { found: usize },
    #[display("invalid hex: {source}")]
    Digits { source: std::num::ParseIntError },
}
