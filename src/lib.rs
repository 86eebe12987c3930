//! blockfall: a deterministic falling-block puzzle engine
//!
//! The crate owns the game rules only: a 10x20 grid, the 7-bag randomizer,
//! collision-aware movement and rotation with positional correction,
//! chained-clear scoring and level-derived gravity. Rendering, input wiring
//! and the frame clock live in the host; they talk to a [`game::Game`]
//! through its command surface and read it back via [`snapshot::GameSnapshot`].
//!
//! A minimal host loop:
//!
//! ```
//! use blockfall::{Game, Scheduler};
//! use std::time::Duration;
//!
//! let mut game = Game::with_seed(7);
//! let mut scheduler = Scheduler::default();
//! game.start();
//!
//! // per frame: feed elapsed time, then hand the snapshot to the renderer
//! scheduler.tick(&mut game, Duration::from_millis(16));
//! let view = game.snapshot();
//! assert!(!view.game_over);
//! ```
//!
//! Sessions are plain owned values: no globals, no locking, one control flow
//! per session. Everything is deterministic given a bag seed and a sequence
//! of commands and elapsed times.

pub mod bag;
pub mod board;
pub mod config;
pub mod game;
pub mod piece;
pub mod scheduler;
pub mod score;
pub mod snapshot;
pub mod tetromino;

pub use bag::Bag;
pub use board::{BOARD_HEIGHT, BOARD_WIDTH, Board};
pub use config::EngineConfig;
pub use game::{Game, GameState};
pub use piece::{Descent, Piece};
pub use scheduler::Scheduler;
pub use score::Score;
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use tetromino::{Matrix, RotationDirection, TetrominoType};
