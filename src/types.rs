//! Core value types shared across the board-generation pipeline.

use instant::Duration;
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

use crate::level_config::ShuffleMethod;
use crate::MAX_WORD_LENGTH;

/// Zero-indexed grid coordinate, where row 0 is the top row and col 0 is the
/// leftmost column.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }
}

/// The direction a placed word runs in. Diagonal always runs top-left to
/// bottom-right (row and col both increase); the generator never places
/// anti-diagonal words, although the validator can still find them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Direction {
    /// The (row, col) step taken for each successive letter.
    #[must_use]
    pub fn deltas(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
        }
    }

    /// All directions the generator is allowed to place words in.
    pub const ALL: [Direction; 3] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
            Direction::Diagonal => "diagonal",
        };
        write!(f, "{name}")
    }
}

/// The ordered letter positions of a single placed word. Words are short, so
/// these live on the stack.
pub type LetterPositions = SmallVec<[Position; MAX_WORD_LENGTH]>;

/// A word successfully placed on the board, with one position per letter.
/// Immutable once constructed; every position is guaranteed in-bounds by the
/// placer that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedWord {
    /// The normalized (uppercase, diacritics-stripped) word.
    pub word: String,
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
    /// Ordered positions, one per letter; `positions.len()` equals the
    /// word's letter count.
    pub positions: LetterPositions,
}

impl PlacedWord {
    /// Read this word's letters back out of a grid, in placement order.
    #[must_use]
    pub fn read_from(&self, board: &[Vec<char>]) -> String {
        self.positions
            .iter()
            .filter_map(|pos| board.get(pos.row).and_then(|row| row.get(pos.col)))
            .collect()
    }
}

/// Diagnostics for a single generation run. Informational only; correctness
/// never depends on anything in here.
#[derive(Debug, Clone)]
pub struct GenerationStats {
    /// How many words the caller asked for, before filtering.
    pub requested_words: usize,
    pub placed_words: usize,
    pub skipped_words: usize,
    /// Which shuffle method reordered the word list, and its nominal entropy.
    pub shuffle_method: ShuffleMethod,
    pub shuffle_entropy: f64,
    pub total_time: Duration,
}

impl GenerationStats {
    /// Fraction of requested words that ended up on the board, in `[0, 1]`.
    /// A full board is 1.0; an all-filler degraded board is 0.0.
    #[must_use]
    pub fn placement_rate(&self) -> f64 {
        if self.requested_words == 0 {
            1.0
        } else {
            self.placed_words as f64 / self.requested_words as f64
        }
    }
}

/// The finished product of a generation run: the letter grid, the words that
/// made it on, and the words that didn't.
#[derive(Debug, Clone)]
pub struct BoardData {
    /// `height` rows of `width` uppercase letters each.
    pub board: Vec<Vec<char>>,
    pub placed_words: Vec<PlacedWord>,
    /// Requested words that were filtered out or failed placement, in their
    /// normalized form. Under-placement is expected behavior, not an error.
    pub skipped_words: Vec<String>,
    pub stats: GenerationStats,
}

impl BoardData {
    #[must_use]
    pub fn height(&self) -> usize {
        self.board.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.board.first().map_or(0, Vec::len)
    }
}
