use serde::Serialize;

use crate::{
    ConfigError,
    core::{active_piece::ActivePiece, board::Board, piece::PieceKind},
};

use super::{Command, CommandQueue, EngineConfig, GameStats, PieceQueue, PieceSeed};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum EngineState {
    #[display("idle")]
    Idle,
    #[display("running")]
    Running,
    #[display("paused")]
    Paused,
    #[display("game over")]
    GameOver,
}

/// What happened when a piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockOutcome {
    pub cleared_lines: usize,
    /// Line-clear points awarded by this lock. Hard-drop points are not included.
    pub points: usize,
    pub level_before: usize,
    pub level_after: usize,
    /// The next piece collided at spawn.
    pub game_over: bool,
}

impl LockOutcome {
    #[must_use]
    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

/// The falling-block game: board, active piece, next piece, stats and timing.
///
/// The engine is driven by [`tick`](Self::tick). Input sources either call the
/// operations directly or [`submit`](Self::submit) commands, which are applied
/// at the start of the next tick, before gravity.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Command, EngineConfig, GameEngine, PieceSeed};
///
/// let seed = PieceSeed::from_bytes([7; 16]);
/// let mut engine = GameEngine::with_seed(EngineConfig::default(), seed).unwrap();
/// assert!(!engine.running());
///
/// engine.start();
/// assert!(engine.running());
///
/// engine.submit(Command::HardDrop);
/// let outcome = engine.tick(16).unwrap();
/// assert_eq!(outcome.cleared_lines, 0);
/// assert_eq!(engine.stats().completed_pieces(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    board: Board,
    active_piece: Option<ActivePiece>,
    piece_queue: PieceQueue,
    stats: GameStats,
    state: EngineState,
    drop_interval_ms: u64,
    drop_timer_ms: u64,
    commands: CommandQueue,
    last_lock: Option<LockOutcome>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Creates an idle engine with the default rules and a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(EngineConfig::default(), PieceQueue::new())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, PieceQueue::new()))
    }

    /// Like [`Self::with_config`], but with a specific seed for deterministic piece generation.
    pub fn with_seed(config: EngineConfig, seed: PieceSeed) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, PieceQueue::with_seed(seed)))
    }

    fn from_parts(config: EngineConfig, piece_queue: PieceQueue) -> Self {
        let drop_interval_ms = config.initial_drop_interval_ms;
        Self {
            config,
            board: Board::EMPTY,
            active_piece: None,
            piece_queue,
            stats: GameStats::new(),
            state: EngineState::Idle,
            drop_interval_ms,
            drop_timer_ms: 0,
            commands: CommandQueue::default(),
            last_lock: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece. `None` before the first start.
    ///
    /// After a game over this is the piece that collided at spawn.
    #[must_use]
    pub fn active_piece(&self) -> Option<&ActivePiece> {
        self.active_piece.as_ref()
    }

    #[must_use]
    pub fn next_piece(&self) -> PieceKind {
        self.piece_queue.peek_next()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Returns whether a game is in progress, paused or not.
    #[must_use]
    pub fn running(&self) -> bool {
        matches!(self.state, EngineState::Running | EngineState::Paused)
    }

    #[must_use]
    pub fn paused(&self) -> bool {
        self.state.is_paused()
    }

    #[must_use]
    pub fn drop_interval_ms(&self) -> u64 {
        self.drop_interval_ms
    }

    /// The most recent lock, if any piece has locked since the last (re)start.
    #[must_use]
    pub fn last_lock(&self) -> Option<&LockOutcome> {
        self.last_lock.as_ref()
    }

    /// Starts a fresh game unless one is already running or paused.
    pub fn start(&mut self) {
        if self.running() {
            return;
        }
        self.reset();
        self.state = EngineState::Running;
        self.spawn();
        tracing::info!(next = ?self.next_piece(), "game started");
    }

    /// Discards the current game, whatever its state, and starts a fresh one.
    pub fn restart(&mut self) {
        tracing::info!(
            state = %self.state,
            score = self.stats.score(),
            "restarting game"
        );
        self.state = EngineState::Idle;
        self.start();
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            EngineState::Running => EngineState::Paused,
            EngineState::Paused => EngineState::Running,
            state @ (EngineState::Idle | EngineState::GameOver) => state,
        };
    }

    /// Translates the active piece by (`dx`, `dy`).
    ///
    /// Returns `false`, leaving the piece untouched, when the game is not
    /// running or the moved piece would collide.
    pub fn move_active_piece(&mut self, dx: i32, dy: i32) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let Some(piece) = self.active_piece else {
            return false;
        };
        let Some(moved) = piece.moved(dx, dy).filter(|p| !self.board.is_colliding(p)) else {
            tracing::trace!(dx, dy, origin = %piece.origin(), "move rejected");
            return false;
        };
        self.active_piece = Some(moved);
        true
    }

    /// Rotates the active piece clockwise in place. There is no wall kick.
    pub fn rotate_active_piece(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        let Some(piece) = self.active_piece else {
            return false;
        };
        let rotated = piece.rotated();
        if self.board.is_colliding(&rotated) {
            tracing::trace!(kind = ?piece.kind(), origin = %piece.origin(), "rotation rejected");
            return false;
        }
        self.active_piece = Some(rotated);
        true
    }

    /// Drops the active piece as far as it goes and locks it immediately.
    ///
    /// Each row descended is worth `hard_drop_points`.
    pub fn hard_drop(&mut self) -> Option<LockOutcome> {
        if !self.state.is_running() {
            return None;
        }
        let piece = self.active_piece?;
        let (landed, rows) = self.landing_position(piece);
        self.stats.record_hard_drop(rows, &self.config);
        Some(self.lock(landed))
    }

    /// The landing projection of the active piece. Never mutates the engine.
    #[must_use]
    pub fn ghost_piece(&self) -> Option<ActivePiece> {
        self.active_piece
            .map(|piece| self.landing_position(piece).0)
    }

    fn landing_position(&self, mut piece: ActivePiece) -> (ActivePiece, usize) {
        let mut rows = 0;
        loop {
            let Some(next) = piece.moved(0, 1).filter(|p| !self.board.is_colliding(p)) else {
                return (piece, rows);
            };
            piece = next;
            rows += 1;
        }
    }

    /// Queues a command for the next tick. Returns `false` if the queue is full.
    pub fn submit(&mut self, command: Command) -> bool {
        self.commands.push(command)
    }

    /// Executes a command immediately.
    ///
    /// Gameplay commands are ignored unless the state is [`EngineState::Running`].
    pub fn apply(&mut self, command: Command) -> Option<LockOutcome> {
        if command.is_gameplay() && !self.state.is_running() {
            tracing::trace!(?command, state = %self.state, "command ignored");
            return None;
        }
        match command {
            Command::MoveLeft => {
                self.move_active_piece(-1, 0);
            }
            Command::MoveRight => {
                self.move_active_piece(1, 0);
            }
            Command::SoftDrop => {
                self.move_active_piece(0, 1);
            }
            Command::Rotate => {
                self.rotate_active_piece();
            }
            Command::HardDrop => return self.hard_drop(),
            Command::TogglePause => self.toggle_pause(),
            Command::Start => self.start(),
            Command::Restart => self.restart(),
        }
        None
    }

    /// Advances the game by `elapsed_ms`.
    ///
    /// Pending commands are applied first. Then, if the game is running, the
    /// elapsed time feeds the drop timer; once it reaches the drop interval the
    /// timer resets and the piece falls one row, locking if it cannot.
    ///
    /// Returns the last lock that happened during this tick.
    pub fn tick(&mut self, elapsed_ms: u64) -> Option<LockOutcome> {
        let mut outcome = None;
        for command in self.commands.take() {
            if let Some(lock) = self.apply(command) {
                outcome = Some(lock);
            }
        }

        if !self.state.is_running() {
            return outcome;
        }
        self.stats.add_play_time(elapsed_ms);
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms {
            return outcome;
        }
        self.drop_timer_ms = 0;
        if !self.move_active_piece(0, 1)
            && let Some(piece) = self.active_piece
        {
            outcome = Some(self.lock(piece));
        }
        outcome
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            state: self.state,
            running: self.running(),
            paused: self.paused(),
            board: &self.board,
            active_piece: self.active_piece.as_ref(),
            ghost_piece: self.ghost_piece(),
            next_piece: self.next_piece(),
            stats: &self.stats,
            drop_interval_ms: self.drop_interval_ms,
            last_lock: self.last_lock,
        }
    }

    fn reset(&mut self) {
        self.board = Board::EMPTY;
        self.active_piece = None;
        self.stats = GameStats::new();
        self.drop_interval_ms = self.stats.drop_interval_ms(&self.config);
        self.drop_timer_ms = 0;
        self.last_lock = None;
    }

    fn lock(&mut self, piece: ActivePiece) -> LockOutcome {
        self.board.place(&piece);
        let cleared_lines = self.board.clear_full_lines();
        let level_before = self.stats.level();
        let points = self.stats.record_lock(cleared_lines, &self.config);
        let level_after = self.stats.level();
        self.drop_interval_ms = self.stats.drop_interval_ms(&self.config);
        tracing::debug!(
            kind = ?piece.kind(),
            origin = %piece.origin(),
            cleared_lines,
            points,
            score = self.stats.score(),
            level = level_after,
            "piece locked"
        );
        if level_after > level_before {
            tracing::debug!(
                level = level_after,
                drop_interval_ms = self.drop_interval_ms,
                "level up"
            );
        }

        let game_over = !self.spawn();
        let outcome = LockOutcome {
            cleared_lines,
            points,
            level_before,
            level_after,
            game_over,
        };
        self.last_lock = Some(outcome);
        outcome
    }

    /// Promotes the next piece to active. Returns `false` on a spawn collision,
    /// which ends the game.
    fn spawn(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.piece_queue.pop_next());
        self.active_piece = Some(piece);
        if self.board.is_colliding(&piece) {
            self.state = EngineState::GameOver;
            tracing::info!(
                score = self.stats.score(),
                level = self.stats.level(),
                lines = self.stats.total_cleared_lines(),
                "game over"
            );
            return false;
        }
        true
    }
}

/// Read-only view of the engine for renderers and JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot<'a> {
    pub state: EngineState,
    pub running: bool,
    pub paused: bool,
    pub board: &'a Board,
    pub active_piece: Option<&'a ActivePiece>,
    pub ghost_piece: Option<ActivePiece>,
    pub next_piece: PieceKind,
    pub stats: &'a GameStats,
    pub drop_interval_ms: u64,
    pub last_lock: Option<LockOutcome>,
}

#[cfg(test)]
mod tests {
    use crate::core::{Cell, Position};

    use super::*;

    const SEED: PieceSeed = PieceSeed::from_bytes([
        0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77,
        0x88,
    ]);

    fn started_engine() -> GameEngine {
        let mut engine = GameEngine::with_seed(EngineConfig::default(), SEED).unwrap();
        engine.start();
        engine
    }

    fn started_with(kind: PieceKind) -> GameEngine {
        let mut engine = started_engine();
        engine.active_piece = Some(ActivePiece::spawn(kind));
        engine
    }

    fn origin(engine: &GameEngine) -> Position {
        engine.active_piece().unwrap().origin()
    }

    #[test]
    fn test_new_engine_is_idle() {
        let mut engine = GameEngine::with_seed(EngineConfig::default(), SEED).unwrap();
        assert_eq!(engine.state(), EngineState::Idle);
        assert!(!engine.running());
        assert!(engine.active_piece().is_none());

        engine.submit(Command::MoveLeft);
        engine.submit(Command::HardDrop);
        assert!(engine.tick(5000).is_none());
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(*engine.board(), Board::EMPTY);
        assert!(!engine.move_active_piece(1, 0));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            lines_per_level: 0,
            ..EngineConfig::default()
        };
        assert_eq!(
            GameEngine::with_config(config).unwrap_err(),
            ConfigError::ZeroLinesPerLevel
        );
    }

    #[test]
    fn test_start_spawns_at_top_center() {
        let engine = started_engine();
        assert_eq!(engine.state(), EngineState::Running);
        let piece = engine.active_piece().unwrap();
        assert_eq!(piece.origin().y, 0);
        assert_eq!(*piece, ActivePiece::spawn(piece.kind()));
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut engine = started_with(PieceKind::T);
        assert!(engine.move_active_piece(1, 0));
        let before = *engine.active_piece().unwrap();
        engine.start();
        assert_eq!(*engine.active_piece().unwrap(), before);

        engine.toggle_pause();
        engine.start();
        assert!(engine.paused());
    }

    #[test]
    fn test_o_piece_falls_eighteen_rows() {
        let mut engine = started_with(PieceKind::O);
        assert_eq!(origin(&engine), Position::new(4, 0));
        for _ in 0..18 {
            assert!(engine.move_active_piece(0, 1));
        }
        assert_eq!(origin(&engine), Position::new(4, 18));
        assert!(!engine.move_active_piece(0, 1));
        assert_eq!(origin(&engine), Position::new(4, 18));
    }

    #[test]
    fn test_walls_block_horizontal_moves() {
        let mut engine = started_with(PieceKind::O);
        while engine.move_active_piece(-1, 0) {}
        assert_eq!(origin(&engine), Position::new(0, 0));
        while engine.move_active_piece(1, 0) {}
        assert_eq!(origin(&engine), Position::new(8, 0));
    }

    #[test]
    fn test_extreme_moves_are_rejected() {
        let mut engine = started_with(PieceKind::T);
        for (dx, dy) in [(i32::MAX, 0), (i32::MIN, 0), (0, i32::MAX), (0, i32::MIN)] {
            assert!(!engine.move_active_piece(dx, dy), "({dx}, {dy})");
            assert_eq!(origin(&engine), Position::new(4, 0));
        }
        assert!(engine.move_active_piece(-1, 0));
    }

    #[test]
    fn test_rotation_blocked_without_wall_kick() {
        let mut engine = started_with(PieceKind::I);
        // vertical I in the leftmost column
        assert!(engine.rotate_active_piece());
        while engine.move_active_piece(-1, 0) {}
        assert_eq!(origin(&engine), Position::new(-2, 0));
        // horizontal I would stick out of the left wall
        let before = *engine.active_piece().unwrap();
        assert!(!engine.rotate_active_piece());
        assert_eq!(*engine.active_piece().unwrap(), before);
    }

    #[test]
    fn test_vertical_i_completes_bottom_row() {
        let mut engine = started_with(PieceKind::I);
        for x in 1..Board::WIDTH {
            engine.board.fill_cell(x, 19, Cell::Piece(PieceKind::O));
        }
        assert!(engine.rotate_active_piece());
        while engine.move_active_piece(-1, 0) {}

        let outcome = engine.hard_drop().unwrap();
        assert_eq!(outcome.cleared_lines, 1);
        assert_eq!(outcome.points, 100);
        assert!(!outcome.game_over);
        assert_eq!(engine.stats().hard_drop_points(), 32);
        assert_eq!(engine.stats().score(), 132);

        // the completed row is gone; the upper part of the I shifted down into it
        let expected: Board = "
            I.........
            I.........
            I.........
        "
        .parse()
        .unwrap();
        assert_eq!(*engine.board(), expected);
        assert_eq!(engine.last_lock(), Some(&outcome));
    }

    #[test]
    fn test_spawn_collision_ends_game() {
        let mut engine = started_engine();
        for y in 0..4 {
            for x in 3..7 {
                engine.board.fill_cell(x, y, Cell::Piece(PieceKind::Z));
            }
        }

        let outcome = engine.tick(1000).unwrap();
        assert!(outcome.game_over);
        assert_eq!(engine.state(), EngineState::GameOver);
        assert!(!engine.running());

        let board = engine.board().clone();
        let piece = *engine.active_piece().unwrap();
        for command in [Command::MoveLeft, Command::HardDrop, Command::TogglePause] {
            engine.submit(command);
        }
        for _ in 0..10 {
            assert!(engine.tick(1000).is_none());
        }
        assert_eq!(*engine.board(), board);
        assert_eq!(*engine.active_piece().unwrap(), piece);
        assert_eq!(engine.state(), EngineState::GameOver);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut engine = started_engine();
        for y in 0..4 {
            for x in 3..7 {
                engine.board.fill_cell(x, y, Cell::Piece(PieceKind::Z));
            }
        }
        engine.tick(1000);
        assert!(engine.state().is_game_over());

        engine.submit(Command::Restart);
        engine.tick(0);
        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(*engine.board(), Board::EMPTY);
        assert_eq!(engine.stats().score(), 0);
        assert_eq!(engine.stats().level(), 1);
        assert!(engine.last_lock().is_none());
    }

    #[test]
    fn test_start_after_game_over() {
        let mut engine = started_engine();
        for y in 0..4 {
            for x in 3..7 {
                engine.board.fill_cell(x, y, Cell::Piece(PieceKind::Z));
            }
        }
        engine.tick(1000);
        assert!(engine.state().is_game_over());

        engine.submit(Command::Start);
        engine.tick(0);
        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(*engine.board(), Board::EMPTY);
        assert_eq!(engine.stats().completed_pieces(), 0);
        assert_eq!(origin(&engine).y, 0);
    }

    #[test]
    fn test_restart_while_paused() {
        let mut engine = started_with(PieceKind::O);
        engine.hard_drop();
        assert_eq!(engine.board().filled_cell_count(), 4);
        engine.tick(500);
        engine.toggle_pause();
        assert!(engine.paused());

        engine.submit(Command::Restart);
        engine.tick(0);
        assert_eq!(engine.state(), EngineState::Running);
        assert!(!engine.paused());
        assert_eq!(*engine.board(), Board::EMPTY);
        assert_eq!(engine.stats().score(), 0);
        assert_eq!(engine.stats().completed_pieces(), 0);
        assert!(engine.stats().play_time().is_zero());
        // the drop timer starts over as well
        engine.tick(999);
        assert_eq!(origin(&engine).y, 0);
        engine.tick(1);
        assert_eq!(origin(&engine).y, 1);
    }

    #[test]
    fn test_gravity_waits_for_drop_interval() {
        let mut engine = started_with(PieceKind::T);
        assert!(engine.tick(999).is_none());
        assert_eq!(origin(&engine), Position::new(4, 0));
        engine.tick(1);
        assert_eq!(origin(&engine), Position::new(4, 1));
        // the timer resets after each drop, and one tick drops at most one row
        engine.tick(5000);
        assert_eq!(origin(&engine), Position::new(4, 2));
        engine.tick(999);
        assert_eq!(origin(&engine), Position::new(4, 2));
    }

    #[test]
    fn test_gravity_locks_on_floor() {
        let mut engine = started_with(PieceKind::O);
        while engine.move_active_piece(0, 1) {}
        let outcome = engine.tick(1000).unwrap();
        assert_eq!(outcome.cleared_lines, 0);
        assert_eq!(engine.board().filled_cell_count(), 4);
        assert_eq!(engine.board().cell(4, 19), Some(Cell::Piece(PieceKind::O)));
        assert_eq!(origin(&engine).y, 0);
        assert_eq!(engine.stats().completed_pieces(), 1);
    }

    #[test]
    fn test_inputs_applied_before_gravity() {
        let mut engine = started_with(PieceKind::O);
        engine.submit(Command::MoveLeft);
        engine.submit(Command::MoveLeft);
        engine.tick(1000);
        assert_eq!(origin(&engine), Position::new(2, 1));
    }

    #[test]
    fn test_pause_freezes_game_and_keeps_timer() {
        let mut engine = started_with(PieceKind::T);
        engine.tick(600);
        engine.toggle_pause();
        assert!(engine.paused());
        assert!(engine.running());

        assert!(!engine.move_active_piece(-1, 0));
        assert!(!engine.rotate_active_piece());
        assert!(engine.hard_drop().is_none());
        engine.submit(Command::HardDrop);
        engine.tick(10_000);
        assert_eq!(origin(&engine), Position::new(4, 0));

        engine.submit(Command::TogglePause);
        engine.tick(400);
        assert!(!engine.paused());
        assert_eq!(origin(&engine), Position::new(4, 1));
        assert_eq!(engine.stats().play_time().as_millis(), 1000);
    }

    #[test]
    fn test_hard_drop_scores_rows() {
        let mut engine = started_with(PieceKind::O);
        let outcome = engine.hard_drop().unwrap();
        assert_eq!(outcome.points, 0);
        assert_eq!(engine.stats().score(), 36);
        assert_eq!(engine.board().cell(4, 18), Some(Cell::Piece(PieceKind::O)));
    }

    #[test]
    fn test_ghost_piece_does_not_mutate() {
        let mut engine = started_with(PieceKind::O);
        engine.move_active_piece(-2, 3);
        let before = *engine.active_piece().unwrap();
        let ghost = engine.ghost_piece().unwrap();
        assert_eq!(ghost.origin(), Position::new(2, 18));
        assert_eq!(engine.ghost_piece(), Some(ghost));
        assert_eq!(*engine.active_piece().unwrap(), before);
        assert_eq!(*engine.board(), Board::EMPTY);
    }

    #[test]
    fn test_level_up_shortens_drop_interval() {
        let mut engine = started_with(PieceKind::I);
        let mut last = None;
        for y in 10..Board::HEIGHT {
            for x in 0..Board::WIDTH - 1 {
                engine.board.fill_cell(x, y, Cell::Piece(PieceKind::J));
            }
        }
        // three vertical I pieces in the rightmost column clear 4 + 4 + 2 lines
        for _ in 0..3 {
            engine.active_piece = Some(ActivePiece::spawn(PieceKind::I).rotated());
            while engine.move_active_piece(1, 0) {}
            last = engine.hard_drop();
        }
        let outcome = last.unwrap();
        assert_eq!(engine.stats().total_cleared_lines(), 10);
        assert_eq!(outcome.level_before, 1);
        assert_eq!(outcome.level_after, 2);
        assert!(outcome.leveled_up());
        assert_eq!(engine.drop_interval_ms(), 900);
    }

    #[test]
    fn test_snapshot_serializes() {
        let engine = started_with(PieceKind::T);
        let value = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(value["state"], "Running");
        assert_eq!(value["running"], true);
        assert_eq!(value["paused"], false);
        assert_eq!(value["stats"]["level"], 1);
        assert_eq!(value["drop_interval_ms"], 1000);
        assert_eq!(value["ghost_piece"]["origin"]["y"], 18);
    }
}
