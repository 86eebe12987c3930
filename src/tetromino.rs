//! Tetromino definitions and shape matrices
//!
//! All 7 standard tetrominoes in their fixed default orientation. Rotation is
//! a pure matrix transform; pieces carry their current matrix rather than a
//! rotation index.

use serde::{Deserialize, Serialize};

/// The 7 tetromino types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TetrominoType {
    I, // long bar
    O, // square
    T, // T-shape
    S, // S-shape
    Z, // Z-shape
    J, // J-shape
    L, // L-shape
}

impl TetrominoType {
    /// Get all tetromino types for bag randomization
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::I,
            TetrominoType::O,
            TetrominoType::T,
            TetrominoType::S,
            TetrominoType::Z,
            TetrominoType::J,
            TetrominoType::L,
        ]
    }

    /// The non-zero cell tag this type writes into the board.
    /// Renderers map tags back to piece types; 0 always means empty.
    pub fn tag(&self) -> u8 {
        match self {
            TetrominoType::I => 1,
            TetrominoType::O => 2,
            TetrominoType::T => 3,
            TetrominoType::S => 4,
            TetrominoType::Z => 5,
            TetrominoType::J => 6,
            TetrominoType::L => 7,
        }
    }

    /// The shape matrix in default orientation. Occupied cells hold the
    /// type's tag so a merge writes renderable values directly.
    pub fn shape(&self) -> Matrix {
        let t = self.tag();
        let rows: Vec<Vec<u8>> = match self {
            TetrominoType::I => vec![
                vec![0, 0, 0, 0],
                vec![t, t, t, t],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ],
            TetrominoType::O => vec![
                vec![t, t],
                vec![t, t],
            ],
            TetrominoType::T => vec![
                vec![0, 0, 0],
                vec![t, t, t],
                vec![0, t, 0],
            ],
            TetrominoType::S => vec![
                vec![0, t, t],
                vec![t, t, 0],
                vec![0, 0, 0],
            ],
            TetrominoType::Z => vec![
                vec![t, t, 0],
                vec![0, t, t],
                vec![0, 0, 0],
            ],
            TetrominoType::J => vec![
                vec![0, t, 0],
                vec![0, t, 0],
                vec![0, t, t],
            ],
            TetrominoType::L => vec![
                vec![0, t, 0],
                vec![0, t, 0],
                vec![t, t, 0],
            ],
        };
        Matrix::from_rows(rows)
    }
}

/// Direction for rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// A shape matrix: 0 = empty, non-zero = occupied (piece tag).
///
/// Rotations return a fresh matrix so a rejected rotation can be discarded
/// without touching the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    cells: Vec<Vec<u8>>,
}

impl Matrix {
    pub fn from_rows(cells: Vec<Vec<u8>>) -> Self {
        Self { cells }
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Cell value at (row, col); out-of-range reads as empty.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    /// Iterate occupied cells as (row, col, tag)
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(c, &v)| (r, c, v))
        })
    }

    fn transposed(&self) -> Matrix {
        let (h, w) = (self.height(), self.width());
        let mut cells = vec![vec![0u8; h]; w];
        for r in 0..h {
            for c in 0..w {
                cells[c][r] = self.cells[r][c];
            }
        }
        Matrix { cells }
    }

    /// 90 degrees clockwise: transpose, then reverse each row
    pub fn rotated_cw(&self) -> Matrix {
        let mut m = self.transposed();
        for row in &mut m.cells {
            row.reverse();
        }
        m
    }

    /// 90 degrees counter-clockwise: transpose, then reverse the row order
    pub fn rotated_ccw(&self) -> Matrix {
        let mut m = self.transposed();
        m.cells.reverse();
        m
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.cells
    }
}
