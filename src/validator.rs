//! Post-generation verification: confirm that requested words are actually
//! findable in the finished grid. The scan covers all 8 straight-line
//! directions, which is broader than the 3 the generator places in, so a
//! report of "not found" really means the word is absent. A failed check is a
//! warning for the caller, never an error — partial placement is a legitimate
//! outcome of the degraded mode.

use crate::util::normalize_word;

/// All 8 straight-line scan directions as (row, col) steps.
pub const SCAN_DIRECTIONS: [(i64, i64); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The verification result for a single requested word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCheck {
    /// The normalized form that was searched for.
    pub word: String,
    pub found: bool,
}

/// Per-word results plus the aggregate verdict for one board.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub checks: Vec<WordCheck>,
}

impl ValidationReport {
    /// True when every requested word was found somewhere in the grid.
    #[must_use]
    pub fn all_found(&self) -> bool {
        self.checks.iter().all(|check| check.found)
    }

    /// The normalized words that could not be found.
    #[must_use]
    pub fn missing(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|check| !check.found)
            .map(|check| check.word.as_str())
            .collect()
    }
}

/// Check every requested word against the grid. Words are normalized the same
/// way the generator normalizes them, so callers can pass the raw request
/// list. Read-only; the grid is never modified.
#[must_use]
pub fn verify_board(board: &[Vec<char>], requested: &[String]) -> ValidationReport {
    let checks = requested
        .iter()
        .map(|raw| {
            let word = normalize_word(raw);
            let found = !word.is_empty() && find_word(board, &word);
            WordCheck { word, found }
        })
        .collect();
    ValidationReport { checks }
}

/// Scan the grid for any straight-line occurrence of `word` (already
/// normalized), trying all 8 directions from every cell.
#[must_use]
pub fn find_word(board: &[Vec<char>], word: &str) -> bool {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return false;
    }

    let height = board.len() as i64;
    for (row, board_row) in board.iter().enumerate() {
        let width = board_row.len() as i64;
        for col in 0..board_row.len() {
            for (dr, dc) in SCAN_DIRECTIONS {
                let end_row = row as i64 + dr * (letters.len() as i64 - 1);
                let end_col = col as i64 + dc * (letters.len() as i64 - 1);
                if end_row < 0 || end_row >= height || end_col < 0 || end_col >= width {
                    continue;
                }
                if matches_from(board, &letters, row as i64, col as i64, dr, dc) {
                    return true;
                }
            }
        }
    }
    false
}

fn matches_from(board: &[Vec<char>], letters: &[char], row: i64, col: i64, dr: i64, dc: i64) -> bool {
    letters.iter().enumerate().all(|(i, &ch)| {
        let r = (row + dr * i as i64) as usize;
        let c = (col + dc * i as i64) as usize;
        board.get(r).and_then(|board_row| board_row.get(c)) == Some(&ch)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn parse_board(fixture: &str) -> Vec<Vec<char>> {
        fixture
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.trim().chars().collect())
            .collect()
    }

    fn fixture() -> Vec<Vec<char>> {
        // SOL across the top row, LUA down the right edge, GATO on the main
        // diagonal, MAR written right-to-left in the bottom row.
        parse_board(indoc! {"
            GSOLL
            XAXXU
            XXTXA
            XXXOX
            RAMXX
        "})
    }

    #[test]
    fn finds_words_in_the_three_generated_directions() {
        let board = fixture();
        assert!(find_word(&board, "SOL"));
        assert!(find_word(&board, "LUA"));
        assert!(find_word(&board, "GATO"));
    }

    #[test]
    fn finds_words_written_backwards() {
        let board = fixture();
        // MAR appears right-to-left; the 8-direction scan still finds it.
        assert!(find_word(&board, "MAR"));
        // And AUL is LUA read bottom-to-top.
        assert!(find_word(&board, "AUL"));
    }

    #[test]
    fn absent_words_are_not_found() {
        let board = fixture();
        assert!(!find_word(&board, "CASA"));
        assert!(!find_word(&board, "SOLO"));
    }

    #[test]
    fn report_aggregates_and_lists_missing_words() {
        let board = fixture();
        let requested: Vec<String> = ["SOL", "GATO", "CASA"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let report = verify_board(&board, &requested);

        assert!(!report.all_found());
        assert_eq!(report.missing(), vec!["CASA"]);
        assert_eq!(report.checks.len(), 3);
    }

    #[test]
    fn requested_words_are_normalized_before_scanning() {
        let board = parse_board(indoc! {"
            PAO
            XXX
        "});
        let requested = vec!["pão".to_string()];
        assert!(verify_board(&board, &requested).all_found());
    }

    #[test]
    fn empty_grid_and_empty_words_are_handled() {
        assert!(!find_word(&[], "SOL"));
        let board = fixture();
        assert!(!find_word(&board, ""));
    }

    #[test]
    fn every_placed_word_of_a_generated_board_is_findable() {
        use crate::board::generate_board_on;
        use chrono::NaiveDate;

        let words: Vec<String> = ["gato", "casa", "sol", "lua", "mar", "pato"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        for level in [1u32, 5, 9, 13, 17] {
            let data = generate_board_on(10, 10, &words, level, date).unwrap();
            let placed: Vec<String> =
                data.placed_words.iter().map(|p| p.word.clone()).collect();
            let report = verify_board(&data.board, &placed);
            assert!(report.all_found(), "level {level}: {:?}", report.missing());
        }
    }
}
