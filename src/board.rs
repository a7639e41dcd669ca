//! Full-board generation: normalize and filter the requested words, shuffle
//! them per the level's configuration, place what fits, and fill every
//! remaining cell with a random letter. Under-placement is an expected
//! outcome, reported through `skipped_words` rather than an error; the only
//! hard failures are contract violations like a zero-sized board.

use instant::Instant;
use rand::Rng;
use std::error::Error;
use std::fmt;

use chrono::NaiveDate;

use crate::level_config::LevelConfig;
use crate::placement::find_best_placement;
use crate::rng::LehmerRng;
use crate::shuffle::shuffle_words;
use crate::types::{BoardData, GenerationStats, PlacedWord};
use crate::util::normalize_word;
use crate::{CHECK_INVARIANTS, MIN_WORD_LENGTH};

/// A contract violation that prevents generation from starting at all.
/// Partial placement is never an error; see [`BoardData::skipped_words`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Height and width must both be at least 1.
    InvalidDimensions { height: usize, width: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { height, width } => {
                write!(f, "invalid board dimensions {height}x{width}")
            }
        }
    }
}

impl Error for BoardError {}

/// Generate a board for today's (UTC) date. See [`generate_board_on`].
pub fn generate_board(
    height: usize,
    width: usize,
    words: &[String],
    level: u32,
) -> Result<BoardData, BoardError> {
    generate_board_with_config(height, width, words, &LevelConfig::resolve(level))
}

/// Generate a board for an explicit date; the same `(height, width, words,
/// level, date)` always produces an identical board.
pub fn generate_board_on(
    height: usize,
    width: usize,
    words: &[String],
    level: u32,
    date: NaiveDate,
) -> Result<BoardData, BoardError> {
    generate_board_with_config(height, width, words, &LevelConfig::resolve_on(level, date))
}

/// Generate a board from an already-resolved configuration. Words that
/// normalize to fewer than [`MIN_WORD_LENGTH`] letters or more than
/// `min(height, width)` are skipped up front; words the placer cannot fit are
/// skipped after the search. An empty surviving word list still yields a
/// fully-filled board.
pub fn generate_board_with_config(
    height: usize,
    width: usize,
    words: &[String],
    config: &LevelConfig,
) -> Result<BoardData, BoardError> {
    if height == 0 || width == 0 {
        return Err(BoardError::InvalidDimensions { height, width });
    }

    let start = Instant::now();
    let mut rng = LehmerRng::new(config.seed);

    let max_word_length = height.min(width);
    let mut skipped_words: Vec<String> = Vec::new();
    let mut eligible: Vec<String> = Vec::new();
    for raw in words {
        let normalized = normalize_word(raw);
        let letter_count = normalized.chars().count();
        if (MIN_WORD_LENGTH..=max_word_length).contains(&letter_count) {
            eligible.push(normalized);
        } else {
            skipped_words.push(normalized);
        }
    }

    let shuffled = shuffle_words(&eligible, config.shuffle_method, &mut rng);

    let mut grid: Vec<Vec<Option<char>>> = vec![vec![None; width]; height];
    let mut placed_words: Vec<PlacedWord> = Vec::new();
    for word in shuffled.items {
        match find_best_placement(&word, &grid, &placed_words, config, &mut rng) {
            Some(candidate) => {
                for (ch, pos) in word.chars().zip(candidate.positions.iter()) {
                    grid[pos.row][pos.col] = Some(ch);
                }
                placed_words.push(PlacedWord {
                    word,
                    start_row: candidate.row,
                    start_col: candidate.col,
                    direction: candidate.direction,
                    positions: candidate.positions,
                });
            }
            None => skipped_words.push(word),
        }
    }

    let mut board: Vec<Vec<char>> = Vec::with_capacity(height);
    for grid_row in grid {
        let mut row = Vec::with_capacity(width);
        for cell in grid_row {
            row.push(match cell {
                Some(ch) => ch,
                None => filler_letter(&mut rng),
            });
        }
        board.push(row);
    }

    let stats = GenerationStats {
        requested_words: words.len(),
        placed_words: placed_words.len(),
        skipped_words: skipped_words.len(),
        shuffle_method: shuffled.method,
        shuffle_entropy: shuffled.entropy,
        total_time: start.elapsed(),
    };

    let data = BoardData {
        board,
        placed_words,
        skipped_words,
        stats,
    };

    if CHECK_INVARIANTS {
        check_board_invariants(&data, height, width);
    }

    Ok(data)
}

/// An independently drawn uniform uppercase letter for an uncovered cell.
fn filler_letter(rng: &mut LehmerRng) -> char {
    (b'A' + rng.gen_range(0..26u8)) as char
}

fn check_board_invariants(data: &BoardData, height: usize, width: usize) {
    assert_eq!(data.board.len(), height, "board height mismatch");
    for row in &data.board {
        assert_eq!(row.len(), width, "board width mismatch");
        for &cell in row {
            assert!(cell.is_ascii_uppercase(), "non-letter cell {cell:?}");
        }
    }
    for placed in &data.placed_words {
        assert_eq!(
            placed.read_from(&data.board),
            placed.word,
            "placed word not readable from board"
        );
    }
}

/// Render a board as lines of space-separated letters, one row per line.
#[must_use]
pub fn render_board(data: &BoardData) -> String {
    data.board
        .iter()
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn assert_well_formed(data: &BoardData, height: usize, width: usize) {
        assert_eq!(data.board.len(), height);
        for row in &data.board {
            assert_eq!(row.len(), width);
            for &cell in row {
                assert!(cell.is_ascii_uppercase(), "cell {cell:?}");
            }
        }
    }

    #[test]
    fn concrete_scenario_places_all_three_words() {
        let words = owned(&["GATO", "CASA", "SOL"]);
        let data = generate_board_on(12, 8, &words, 1, fixed_date()).unwrap();

        assert_well_formed(&data, 12, 8);
        assert_eq!(data.placed_words.len(), 3, "skipped: {:?}", data.skipped_words);
        for placed in &data.placed_words {
            assert_eq!(placed.read_from(&data.board), placed.word);
            assert_eq!(placed.positions.len(), placed.word.chars().count());
        }
    }

    #[test]
    fn empty_word_list_yields_full_filler_board() {
        let data = generate_board_on(9, 9, &[], 4, fixed_date()).unwrap();
        assert_well_formed(&data, 9, 9);
        assert!(data.placed_words.is_empty());
        assert!(data.skipped_words.is_empty());
    }

    #[test]
    fn all_words_filtered_is_degraded_mode_not_an_error() {
        // Too short, too long for an 8x8 board, and non-alphabetic.
        let words = owned(&["AB", "EXTRAORDINARIO", "123"]);
        let data = generate_board_on(8, 8, &words, 2, fixed_date()).unwrap();

        assert_well_formed(&data, 8, 8);
        assert!(data.placed_words.is_empty());
        assert_eq!(data.skipped_words.len(), 3);
    }

    #[test]
    fn word_longer_than_narrow_dimension_is_skipped() {
        // Ten letters cannot fit on a board whose narrow side is 8.
        let words = owned(&["BIBLIOTECA", "SOL"]);
        let data = generate_board_on(12, 8, &words, 1, fixed_date()).unwrap();

        assert!(data
            .placed_words
            .iter()
            .all(|placed| placed.word != "BIBLIOTECA"));
        assert!(data.skipped_words.contains(&"BIBLIOTECA".to_string()));
    }

    #[test]
    fn every_requested_word_is_placed_or_skipped() {
        let words = owned(&["GATO", "CASA", "SOL", "LUA", "MAR", "XY", "ESTRELINHA"]);
        let data = generate_board_on(10, 10, &words, 6, fixed_date()).unwrap();
        assert_eq!(
            data.placed_words.len() + data.skipped_words.len(),
            words.len()
        );
    }

    #[test]
    fn same_level_and_date_generate_identical_boards() {
        let words = owned(&["GATO", "CASA", "SOL", "LUA", "MAR"]);
        let a = generate_board_on(10, 10, &words, 3, fixed_date()).unwrap();
        let b = generate_board_on(10, 10, &words, 3, fixed_date()).unwrap();

        assert_eq!(a.board, b.board);
        assert_eq!(a.placed_words, b.placed_words);
        assert_eq!(a.skipped_words, b.skipped_words);
    }

    #[test]
    fn words_with_diacritics_are_normalized_before_placement() {
        let words = owned(&["coração", "pão"]);
        let data = generate_board_on(10, 10, &words, 1, fixed_date()).unwrap();

        let all: Vec<&str> = data
            .placed_words
            .iter()
            .map(|p| p.word.as_str())
            .chain(data.skipped_words.iter().map(String::as_str))
            .collect();
        assert!(all.contains(&"CORACAO"));
        assert!(all.contains(&"PAO"));
    }

    #[test]
    fn shared_cells_carry_the_same_letter_for_both_words() {
        use std::collections::HashMap;

        let words = owned(&[
            "CASA", "CASO", "GATO", "SAPO", "MALA", "PATO", "RATO", "LUVA",
        ]);
        let data = generate_board_on(12, 12, &words, 9, fixed_date()).unwrap();

        let mut letter_at: HashMap<(usize, usize), char> = HashMap::new();
        for placed in &data.placed_words {
            for (ch, pos) in placed.word.chars().zip(placed.positions.iter()) {
                let prior = letter_at.insert((pos.row, pos.col), ch);
                if let Some(previous) = prior {
                    assert_eq!(previous, ch, "conflicting letters at {pos:?}");
                }
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let words = owned(&["SOL"]);
        assert!(matches!(
            generate_board_on(0, 8, &words, 1, fixed_date()),
            Err(BoardError::InvalidDimensions {
                height: 0,
                width: 8
            })
        ));
        assert!(matches!(
            generate_board_on(8, 0, &words, 1, fixed_date()),
            Err(BoardError::InvalidDimensions {
                height: 8,
                width: 0
            })
        ));
    }

    #[test]
    fn stats_reflect_the_run() {
        let words = owned(&["GATO", "CASA", "XY"]);
        let data = generate_board_on(10, 10, &words, 1, fixed_date()).unwrap();

        assert_eq!(data.stats.requested_words, 3);
        assert_eq!(data.stats.placed_words, data.placed_words.len());
        assert_eq!(data.stats.skipped_words, data.skipped_words.len());
        assert!(data.stats.placement_rate() <= 1.0);
    }

    #[test]
    fn render_board_shapes_rows_and_columns() {
        let words = owned(&["SOL"]);
        let data = generate_board_on(4, 6, &words, 1, fixed_date()).unwrap();
        let rendered = render_board(&data);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(line.split(' ').count(), 6);
        }
    }

    #[test]
    fn placed_directions_are_the_three_supported_ones() {
        let words = owned(&["GATO", "CASA", "SOL", "LUA", "MAR", "PATO", "BOLA"]);
        let data = generate_board_on(12, 12, &words, 11, fixed_date()).unwrap();
        for placed in &data.placed_words {
            assert!(matches!(
                placed.direction,
                Direction::Horizontal | Direction::Vertical | Direction::Diagonal
            ));
        }
    }
}
