//! Game state module - the controller state machine
//!
//! Ties together board, spawner and the active piece. Every mutation is a
//! tentative placement checked against the collision rule: accepted
//! placements are kept, rejected ones leave the state untouched. A piece that
//! cannot fall any further locks into the board, full rows are cleared, the
//! score is updated and the next piece spawns. If that new piece already
//! collides the game is over and nothing changes from then on.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::piece::Piece;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::line_clear_score;
use crate::shapes::{shape, ShapeMatrix};
use crate::snapshot::GameSnapshot;
use crate::spawner::Spawner;
use crate::types::{Command, Direction, PieceKind};

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Running,
    /// Terminal: no transition leaves this state
    GameOver,
}

/// Emitted every time a piece locks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_awarded: u32,
    /// Whether the piece spawned after this lock collided
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: GameConfig,
    board: Board,
    active: Piece,
    spawner: Spawner<R>,
    /// Monotonic id for spawned pieces (the first piece is 1).
    piece_id: u32,
    pieces_locked: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    lines: u32,
    game_over: bool,
}

impl GameState<SimpleRng> {
    /// Start a game on an empty board with the seeded LCG spawner
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_source(config, SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        let config = GameConfig::default();
        Self::from_parts(
            config,
            Board::with_size(config.width, config.height),
            Spawner::seeded(1),
        )
    }
}

impl<R: RandomSource> GameState<R> {
    /// Start a game on an empty board with an explicit random source
    pub fn with_source(config: GameConfig, source: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::with_size(config.width, config.height);
        Ok(Self::from_parts(config, board, Spawner::new(source)))
    }

    /// Start a game on a pre-filled board. Dimensions come from the board.
    pub fn with_board(board: Board, drop_interval_ms: u32, source: R) -> Result<Self, ConfigError> {
        let config = GameConfig {
            width: board.width(),
            height: board.height(),
            drop_interval_ms,
        };
        config.validate()?;
        Ok(Self::from_parts(config, board, Spawner::new(source)))
    }

    fn from_parts(config: GameConfig, board: Board, mut spawner: Spawner<R>) -> Self {
        let active = Piece::spawn(spawner.draw(), config.width);
        let mut state = Self {
            config,
            board,
            active,
            spawner,
            piece_id: 0,
            pieces_locked: 0,
            last_event: None,
            score: 0,
            lines: 0,
            game_over: false,
        };
        state.enter_spawned();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The live piece. After game over this is the piece that failed to spawn.
    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Variant that will spawn after the current piece locks
    pub fn next_kind(&self) -> PieceKind {
        self.spawner.peek()
    }

    pub fn next_shape(&self) -> ShapeMatrix {
        shape(self.spawner.peek())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> Status {
        if self.game_over {
            Status::GameOver
        } else {
            Status::Running
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Collision rule: a placement is invalid if any filled cell is left of
    /// the board, right of it, below the floor, or on an occupied visible
    /// cell. Cells above the top edge are never checked for occupancy.
    pub fn collides(&self, piece: &Piece) -> bool {
        let width = self.board.width() as i8;
        let height = self.board.height() as i8;
        piece.cells().any(|(x, y)| {
            x < 0 || x >= width || y >= height || (y >= 0 && self.board.is_occupied(x, y))
        })
    }

    /// Promote the spawner's lookahead to the active piece
    fn spawn_piece(&mut self) {
        let kind = self.spawner.draw();
        self.active = Piece::spawn(kind, self.board.width());
        self.enter_spawned();
    }

    fn enter_spawned(&mut self) {
        self.piece_id = self.piece_id.wrapping_add(1);
        if self.collides(&self.active) {
            self.game_over = true;
            info!(
                kind = %self.active.kind,
                score = self.score,
                lines = self.lines,
                "spawn blocked, game over"
            );
        } else {
            debug!(
                kind = %self.active.kind,
                x = self.active.x,
                next = %self.spawner.peek(),
                piece_id = self.piece_id,
                "piece spawned"
            );
        }
    }

    /// Try to shift the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let candidate = self.active.shifted(dx, dy);
        if self.collides(&candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Move one column sideways. Never locks.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }
        self.try_move(direction.dx(), 0)
    }

    /// Rotate 90° clockwise in place; rejected outright if it would collide
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let candidate = self.active.rotated();
        if self.collides(&candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Lower the piece one row, or lock it if it cannot fall.
    ///
    /// Returns false only when the game is already over.
    pub fn soft_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Time-driven fall: drops one row once `elapsed_ms` exceeds the interval
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        if self.game_over || elapsed_ms <= u64::from(self.config.drop_interval_ms) {
            return false;
        }
        self.soft_drop()
    }

    /// Write the active piece into the board, clear rows, score, respawn
    fn lock_piece(&mut self) {
        let piece = self.active;
        self.board.lock_cells(piece.cells(), piece.kind);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let cleared = self.board.clear_full_rows();
        let awarded = line_clear_score(cleared);
        self.score = self.score.saturating_add(awarded);
        self.lines = self.lines.saturating_add(cleared as u32);

        debug!(
            kind = %piece.kind,
            x = piece.x,
            y = piece.y,
            lines_cleared = cleared,
            score = self.score,
            "piece locked"
        );

        self.spawn_piece();

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            score_awarded: awarded,
            game_over: self.game_over,
        });
    }

    /// Process one command to completion.
    ///
    /// Returns whether the state advanced. Commands after game over are
    /// accepted and ignored.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }
        match command {
            Command::MoveLeft => self.move_piece(Direction::Left),
            Command::MoveRight => self.move_piece(Direction::Right),
            Command::SoftDropNow => self.soft_drop(),
            Command::Rotate => self.rotate(),
            Command::Tick { elapsed_ms } => self.tick(elapsed_ms),
        }
    }

    /// Row the active piece would land on if dropped straight down
    pub fn ghost_y(&self) -> i8 {
        if self.game_over {
            return self.active.y;
        }
        let mut ghost = self.active;
        while !self.collides(&ghost.shifted(0, 1)) {
            ghost = ghost.shifted(0, 1);
        }
        ghost.y
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            board: self.board.to_rows(),
            active: self.active.into(),
            ghost_y: self.ghost_y(),
            next: self.spawner.peek().into(),
            score: self.score,
            lines: self.lines,
            pieces_locked: self.pieces_locked,
            piece_id: self.piece_id,
            game_over: self.game_over,
        }
    }
}

/// Value-in, value-out step: `(state, command) -> state`
pub fn step<R: RandomSource>(mut state: GameState<R>, command: Command) -> GameState<R> {
    state.apply(command);
    state
}
