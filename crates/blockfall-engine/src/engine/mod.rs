//! Game engine logic and state management.
//!
//! This module drives the core data structures through a game:
//!
//! - [`GameEngine`] - State machine owning the board, active piece and timing
//! - [`Command`] / [`CommandQueue`] - Input queued between ticks
//! - [`GameStats`] - Score, level, lines and play time
//! - [`EngineConfig`] - Timing and scoring rules
//! - [`PieceQueue`] - Single-slot lookahead of uniformly random pieces
//! - [`PieceSeed`] - Seed for deterministic piece generation
//!
//! # Game Flow
//!
//! 1. [`GameEngine::start`] spawns the first piece and enters `Running`
//! 2. The driver submits commands and calls [`GameEngine::tick`] at a fixed rate
//! 3. Each tick applies queued commands, then gravity
//! 4. A piece that cannot fall locks; full lines clear and the next piece spawns
//! 5. The game ends when a freshly spawned piece collides

pub use self::{command::*, config::*, game_engine::*, game_stats::*, piece_queue::*};

mod command;
mod config;
mod game_engine;
mod game_stats;
mod piece_queue;
