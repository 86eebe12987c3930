//! Read-only session view for the rendering/HUD side
//!
//! The engine never draws or formats anything; renderers take a snapshot
//! each frame and interpret it. Everything here serializes, so a host can
//! also ship the view over a wire if it wants to.

use crate::board::BOARD_WIDTH;
use crate::piece::Piece;
use crate::tetromino::{Matrix, TetrominoType};
use serde::{Deserialize, Serialize};

/// The active piece as seen by a renderer: current matrix plus anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: TetrominoType,
    pub matrix: Matrix,
    pub row: i32,
    pub col: i32,
}

impl PieceSnapshot {
    pub fn of(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            matrix: piece.matrix().clone(),
            row: piece.row,
            col: piece.col,
        }
    }
}

/// Everything a frame needs: occupancy, active piece, preview and counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board rows top to bottom; 0 = empty, 1..=7 = piece tag
    pub board: Vec<[u8; BOARD_WIDTH]>,
    pub active: Option<PieceSnapshot>,
    pub preview: Option<TetrominoType>,
    pub points: u64,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u64,
    pub game_over: bool,
}

impl GameSnapshot {
    /// The preview piece's matrix, for the next-piece box
    pub fn preview_matrix(&self) -> Option<Matrix> {
        self.preview.map(|kind| kind.shape())
    }
}
