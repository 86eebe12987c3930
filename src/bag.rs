//! 7-bag randomizer for piece generation
//!
//! All 7 pieces are shuffled, then dealt out before reshuffling. Every
//! aligned run of 7 draws contains each piece exactly once, which prevents
//! long droughts. The RNG is injectable so sequences are reproducible.

use crate::tetromino::TetrominoType;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// The 7-bag piece randomizer
#[derive(Debug, Clone)]
pub struct Bag {
    /// Current shuffled permutation of the 7 types
    pieces: [TetrominoType; 7],
    /// Index of the next piece to deal; 7 means the bag is drained
    cursor: usize,
    rng: ChaCha8Rng,
}

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}

impl Bag {
    /// Create a bag seeded from entropy
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    /// Create a bag with a fixed seed, for reproducible sequences
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            pieces: TetrominoType::all(),
            cursor: 7, // drained, first draw reshuffles
            rng,
        }
    }

    /// Deal the next piece, reshuffling when the bag is drained
    pub fn next(&mut self) -> TetrominoType {
        self.refill_if_drained();
        let piece = self.pieces[self.cursor];
        self.cursor += 1;
        piece
    }

    /// Look at the piece `next()` would return without consuming it
    pub fn peek(&mut self) -> TetrominoType {
        self.refill_if_drained();
        self.pieces[self.cursor]
    }

    fn refill_if_drained(&mut self) {
        if self.cursor >= self.pieces.len() {
            self.pieces = TetrominoType::all();
            self.pieces.shuffle(&mut self.rng);
            self.cursor = 0;
        }
    }
}
