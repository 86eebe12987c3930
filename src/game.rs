//! Core game session: state machine and orchestration
//!
//! One `Game` owns the board, the bag, the active piece and the counters.
//! Nothing here blocks; every command runs to completion before returning,
//! so a session is always consistent between calls.

use crate::bag::Bag;
use crate::board::Board;
use crate::config::EngineConfig;
use crate::piece::{Descent, Piece};
use crate::score::Score;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::tetromino::{RotationDirection, TetrominoType};
use std::time::Duration;

/// Session lifecycle. GameOver is terminal until an explicit `start()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Playing,
    GameOver,
}

/// A single game session
pub struct Game {
    board: Board,
    bag: Bag,
    /// The falling piece; None before the first spawn and after game over
    current: Option<Piece>,
    /// One identifier kept in flight for the next-piece display
    preview: Option<TetrominoType>,
    pub score: Score,
    pub state: GameState,
    config: EngineConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a session with default tunables and an entropy-seeded bag
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default(), Bag::new())
    }

    /// Create a session whose piece sequence is reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(EngineConfig::default(), Bag::with_seed(seed))
    }

    pub fn with_config(config: EngineConfig, bag: Bag) -> Self {
        let score = Score::new(&config);
        Self {
            board: Board::new(),
            bag,
            current: None,
            preview: None,
            score,
            state: GameState::NotStarted,
            config,
        }
    }

    /// Begin play, or restart after a game over.
    ///
    /// Resets the board and counters, pre-seeds the preview, spawns the
    /// first piece and transitions to Playing. The bag keeps its sequence
    /// across restarts.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = Score::new(&self.config);
        self.preview = Some(self.bag.next());
        self.state = GameState::Playing;
        self.spawn_next();
        tracing::info!("session started");
    }

    /// Shift the active piece horizontally; colliding shifts revert silently
    pub fn move_piece(&mut self, dx: i32) {
        if self.state != GameState::Playing {
            return;
        }
        if let Some(piece) = &mut self.current {
            piece.shift(dx, &self.board);
        }
    }

    /// Rotate the active piece with positional correction; a rotation that
    /// fits nowhere is a silent no-op
    pub fn rotate(&mut self, direction: RotationDirection) {
        if self.state != GameState::Playing {
            return;
        }
        if let Some(piece) = &mut self.current {
            piece.rotate(direction, &self.board);
        }
    }

    /// One descent of the active piece. Called by the scheduler when the
    /// drop interval elapses, or directly for an immediate soft-drop step.
    ///
    /// On lock: merge, sweep and score, then respawn. The respawn may end
    /// the session.
    pub fn step(&mut self) {
        if self.state != GameState::Playing {
            return;
        }
        let Some(piece) = &mut self.current else {
            return;
        };
        if piece.descend(&self.board) == Descent::Locked {
            self.lock_current();
        }
    }

    /// The interval between automatic descents at the current level
    pub fn drop_interval(&self) -> Duration {
        self.score.drop_interval()
    }

    /// The active piece, if one is falling
    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// The piece the next spawn will use
    pub fn preview(&self) -> Option<TetrominoType> {
        self.preview
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Read-only view of the whole session for renderers and HUDs
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.rows().to_vec(),
            active: self.current.as_ref().map(PieceSnapshot::of),
            preview: self.preview,
            points: self.score.points,
            lines: self.score.lines,
            level: self.score.level,
            drop_interval_ms: self.drop_interval().as_millis() as u64,
            game_over: self.is_game_over(),
        }
    }

    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        self.board.merge(&piece);
        tracing::debug!(kind = ?piece.kind, row = piece.row, col = piece.col, "piece locked");

        let cleared = self.board.sweep_full_rows();
        if cleared > 0 {
            let outcome = self.score.apply_clear(cleared, &self.config);
            tracing::info!(
                cleared,
                points = outcome.points,
                total = self.score.points,
                lines = self.score.lines,
                "rows cleared"
            );
            if outcome.levels_gained > 0 {
                tracing::info!(
                    level = self.score.level,
                    interval_ms = self.drop_interval().as_millis() as u64,
                    "level up"
                );
            }
        }

        self.spawn_next();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Spawn the previewed piece and draw a fresh preview. A spawn that
    /// collides immediately ends the session without creating a piece.
    fn spawn_next(&mut self) {
        let kind = match self.preview.take() {
            Some(kind) => kind,
            None => self.bag.next(),
        };
        self.preview = Some(self.bag.next());

        let piece = Piece::spawn(kind);
        if self.board.collides(&piece) {
            self.state = GameState::GameOver;
            self.current = None;
            tracing::info!(
                points = self.score.points,
                lines = self.score.lines,
                level = self.score.level,
                "game over"
            );
        } else {
            self.current = Some(piece);
        }
    }
}
