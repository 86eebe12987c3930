//! Game board representation, collision detection and row sweeping

use crate::piece::Piece;

/// Standard board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// The game board
///
/// Stored as `[row][col]` with row 0 at the top, matching the direction
/// pieces fall. 0 = empty, 1..=7 = locked piece tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[u8; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[0; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [[0; BOARD_WIDTH]; BOARD_HEIGHT];
    }

    /// Get the cell at a position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<u8> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
            return None;
        }
        Some(self.cells[row][col])
    }

    /// Check whether a piece, placed at its current anchor, collides.
    ///
    /// A cell collides when it leaves the horizontal bounds, reaches the
    /// floor, or overlaps a locked cell. Rows above the board are not
    /// storage-backed and count as empty, so a piece may hang partially
    /// above row 0 during spawn and rotation correction.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(row, col, _)| {
            if col < 0 || col >= BOARD_WIDTH as i32 {
                return true;
            }
            if row >= BOARD_HEIGHT as i32 {
                return true;
            }
            if row < 0 {
                return false;
            }
            self.cells[row as usize][col as usize] != 0
        })
    }

    /// Write a piece's occupied cells into the board.
    ///
    /// Cells above row 0 are dropped; the caller guarantees the placement
    /// was collision-checked.
    pub fn merge(&mut self, piece: &Piece) {
        for (row, col, tag) in piece.cells() {
            if row < 0 {
                continue;
            }
            if let Some(cell) = self
                .cells
                .get_mut(row as usize)
                .and_then(|r| r.get_mut(col as usize))
            {
                *cell = tag;
            }
        }
    }

    /// Remove every full row, compact the rest downward and top up with
    /// empty rows. Returns how many rows were cleared.
    pub fn sweep_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_row = BOARD_HEIGHT as i32 - 1;

        // Bottom-to-top: survivors slide down, full rows vanish
        for read_row in (0..BOARD_HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            if write_row as usize != read_row {
                self.cells[write_row as usize] = self.cells[read_row];
            }
            write_row -= 1;
        }

        for row in 0..=write_row {
            self.cells[row as usize] = [0; BOARD_WIDTH];
        }

        cleared
    }

    fn is_row_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(|&cell| cell != 0)
    }

    /// Check if the board is completely empty
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell == 0))
    }

    /// Full occupancy snapshot for renderers
    pub fn rows(&self) -> &[[u8; BOARD_WIDTH]; BOARD_HEIGHT] {
        &self.cells
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize, tag: u8) {
        self.cells[row][col] = tag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::tetromino::TetrominoType;

    fn fill_row(board: &mut Board, row: usize) {
        for col in 0..BOARD_WIDTH {
            board.set(row, col, 1);
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, -1), None);
        assert_eq!(board.get(BOARD_HEIGHT as i32, 0), None);
        assert_eq!(board.get(0, BOARD_WIDTH as i32), None);
    }

    #[test]
    fn test_spawned_piece_does_not_collide_on_empty_board() {
        let board = Board::new();
        let piece = Piece::spawn(TetrominoType::T);
        assert!(!board.collides(&piece));
    }

    #[test]
    fn test_collides_with_locked_cell() {
        let mut board = Board::new();
        let piece = Piece::spawn(TetrominoType::O);
        // O at spawn occupies rows 0-1, cols 3-4
        board.set(1, 3, 5);
        assert!(board.collides(&piece));
    }

    #[test]
    fn test_merge_writes_piece_tags() {
        let mut board = Board::new();
        let piece = Piece::spawn(TetrominoType::O);
        board.merge(&piece);
        let tag = TetrominoType::O.tag();
        assert_eq!(board.get(0, 3), Some(tag));
        assert_eq!(board.get(0, 4), Some(tag));
        assert_eq!(board.get(1, 3), Some(tag));
        assert_eq!(board.get(1, 4), Some(tag));
    }

    #[test]
    fn test_sweep_no_full_rows() {
        let mut board = Board::new();
        board.set(19, 0, 1);
        assert_eq!(board.sweep_full_rows(), 0);
        assert_eq!(board.get(19, 0), Some(1));
    }

    #[test]
    fn test_sweep_single_bottom_row() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(18, 0, 3);

        assert_eq!(board.sweep_full_rows(), 1);
        // Row above slides down, swept row is gone
        assert_eq!(board.get(19, 0), Some(3));
        assert_eq!(board.get(18, 0), Some(0));
    }

    #[test]
    fn test_sweep_preserves_survivor_order() {
        let mut board = Board::new();
        board.set(16, 0, 1);
        fill_row(&mut board, 17);
        board.set(18, 0, 2);
        fill_row(&mut board, 19);

        assert_eq!(board.sweep_full_rows(), 2);
        assert_eq!(board.get(19, 0), Some(2));
        assert_eq!(board.get(18, 0), Some(1));
        assert_eq!(board.get(17, 0), Some(0));
    }

    #[test]
    fn test_sweep_all_rows() {
        let mut board = Board::new();
        for row in 0..BOARD_HEIGHT {
            fill_row(&mut board, row);
        }
        assert_eq!(board.sweep_full_rows(), BOARD_HEIGHT);
        assert!(board.is_empty());
    }
}
