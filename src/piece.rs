//! Active falling piece logic

use crate::board::Board;
use crate::tetromino::{Matrix, RotationDirection, TetrominoType};

/// Fixed spawn anchor: top of the board, roughly centered
pub const SPAWN_COL: i32 = 3;
pub const SPAWN_ROW: i32 = 0;

/// Outcome of one descent attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The piece moved down one row
    Moved,
    /// The piece could not move; it should be locked into the board
    Locked,
}

/// An active falling piece: its current shape matrix plus the anchor
/// (top-left of the matrix) within the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: TetrominoType,
    matrix: Matrix,
    pub row: i32,
    pub col: i32,
}

impl Piece {
    /// Create a piece of the given type at the spawn anchor
    pub fn spawn(kind: TetrominoType) -> Self {
        Self {
            kind,
            matrix: kind.shape(),
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    /// Absolute occupied cells as (row, col, tag)
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.matrix
            .occupied()
            .map(|(r, c, tag)| (self.row + r as i32, self.col + c as i32, tag))
    }

    /// The current shape matrix (reflects rotation)
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Try to shift horizontally, returns true if successful.
    /// A colliding shift is reverted whole; there is no partial move.
    pub fn shift(&mut self, dx: i32, board: &Board) -> bool {
        self.col += dx;
        if board.collides(self) {
            self.col -= dx;
            false
        } else {
            true
        }
    }

    /// Move down one row, or report that the piece should lock
    pub fn descend(&mut self, board: &Board) -> Descent {
        self.row += 1;
        if board.collides(self) {
            self.row -= 1;
            Descent::Locked
        } else {
            Descent::Moved
        }
    }

    /// Try to rotate, nudging the piece horizontally to make it fit.
    ///
    /// After the matrix transform, candidate anchor offsets are tried in the
    /// order 0, +1, -1, +2, -2, ... with magnitudes bounded by the matrix
    /// width. The first non-colliding offset is kept; if none fits, matrix
    /// and anchor are restored and the rotate is a no-op.
    ///
    /// This search is intentionally not an SRS kick table; the alternating
    /// sequence and width bound are part of the engine's behavior.
    pub fn rotate(&mut self, direction: RotationDirection, board: &Board) -> bool {
        let rotated = match direction {
            RotationDirection::Clockwise => self.matrix.rotated_cw(),
            RotationDirection::CounterClockwise => self.matrix.rotated_ccw(),
        };
        let previous = std::mem::replace(&mut self.matrix, rotated);
        let home_col = self.col;

        if !board.collides(self) {
            return true;
        }

        let width = self.matrix.width() as i32;
        for magnitude in 1..=width {
            for offset in [magnitude, -magnitude] {
                self.col = home_col + offset;
                if !board.collides(self) {
                    return true;
                }
            }
        }

        // No correction fits: undo the rotation entirely
        self.col = home_col;
        self.matrix = previous;
        false
    }
}
