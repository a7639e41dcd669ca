//! Strategic word placement: for a single word and the board's current state,
//! enumerate candidate (row, col, direction) placements in a strategy-specific
//! order, score every candidate that fits, and return the best one.
//!
//! The anchor-generation strategy decides which cells are *considered* first;
//! the score decides which candidate *wins*. Ties go to the first-seen
//! candidate, so the anchor order still matters even between equal scores.

use float_ord::FloatOrd;
use rand::seq::SliceRandom;

use crate::level_config::{LevelConfig, PlacementStrategy};
use crate::rng::LehmerRng;
use crate::types::{Direction, LetterPositions, PlacedWord, Position};
use crate::util::{cell_distance, normalized_center_distance};

/// Relative contribution of the level's direction weight to a candidate score.
pub const DIRECTION_SCORE_WEIGHT: f64 = 40.0;

/// Relative contribution of the center/border position bias.
pub const POSITION_SCORE_WEIGHT: f64 = 30.0;

/// Relative contribution of the distance to previously placed words.
pub const SEPARATION_SCORE_WEIGHT: f64 = 20.0;

/// Relative contribution of seeded noise, scaled by the level's random factor.
pub const NOISE_SCORE_WEIGHT: f64 = 10.0;

/// Average nearest-occupied-cell distance (in cells) at which the separation
/// reward saturates.
pub const SEPARATION_CAP: f64 = 3.0;

/// A candidate placement under evaluation. Transient: one survives per placed
/// word, the rest are discarded during the search.
#[derive(Debug, Clone)]
pub struct PlacementCandidate {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub score: f64,
    pub positions: LetterPositions,
}

/// Find the best-scoring valid placement for `word` on the current board, or
/// `None` when no candidate keeps every letter in bounds without contradicting
/// letters already on the grid. `None` is a per-word signal the caller treats
/// as recoverable, not an error.
#[must_use]
pub fn find_best_placement(
    word: &str,
    board: &[Vec<Option<char>>],
    placed: &[PlacedWord],
    config: &LevelConfig,
    rng: &mut LehmerRng,
) -> Option<PlacementCandidate> {
    let height = board.len();
    let width = board.first().map_or(0, Vec::len);
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() || height == 0 || width == 0 {
        return None;
    }

    let occupied: Vec<(usize, usize)> = placed
        .iter()
        .flat_map(|pw| pw.positions.iter().map(|pos| (pos.row, pos.col)))
        .collect();

    let mut best: Option<PlacementCandidate> = None;
    for (row, col) in anchor_order(config.strategy, height, width, rng) {
        for direction in Direction::ALL {
            let Some(positions) =
                candidate_positions(letters.len(), row, col, direction, height, width)
            else {
                continue;
            };
            if !fits_existing_letters(&letters, &positions, board) {
                continue;
            }

            let score = score_candidate(&positions, direction, &occupied, height, width, config, rng);
            let replaces = best
                .as_ref()
                .map_or(true, |current| FloatOrd(score) > FloatOrd(current.score));
            if replaces {
                best = Some(PlacementCandidate {
                    row,
                    col,
                    direction,
                    score,
                    positions,
                });
            }
        }
    }
    best
}

/// The letter positions a word would occupy from an anchor, or `None` if any
/// letter would land out of bounds.
fn candidate_positions(
    len: usize,
    row: usize,
    col: usize,
    direction: Direction,
    height: usize,
    width: usize,
) -> Option<LetterPositions> {
    let (dr, dc) = direction.deltas();
    let end_row = row + dr * (len - 1);
    let end_col = col + dc * (len - 1);
    if end_row >= height || end_col >= width {
        return None;
    }
    Some(
        (0..len)
            .map(|i| Position::new(row + dr * i, col + dc * i))
            .collect(),
    )
}

/// A candidate is only valid if every cell it covers is either empty or
/// already holds the same letter (the standard word-search overlap rule).
fn fits_existing_letters(
    letters: &[char],
    positions: &LetterPositions,
    board: &[Vec<Option<char>>],
) -> bool {
    letters
        .iter()
        .zip(positions.iter())
        .all(|(&ch, pos)| match board[pos.row][pos.col] {
            None => true,
            Some(existing) => existing == ch,
        })
}

fn score_candidate(
    positions: &LetterPositions,
    direction: Direction,
    occupied: &[(usize, usize)],
    height: usize,
    width: usize,
    config: &LevelConfig,
    rng: &mut LehmerRng,
) -> f64 {
    let first = positions[0];
    let last = positions[positions.len() - 1];
    let mid_row = (first.row + last.row) as f64 / 2.0;
    let mid_col = (first.col + last.col) as f64 / 2.0;

    let center_distance = normalized_center_distance(mid_row, mid_col, height, width);
    let center_proximity = 1.0 - center_distance;
    let border_proximity = center_distance;

    let bias = &config.position_bias;
    DIRECTION_SCORE_WEIGHT * config.direction_weights.get(direction)
        + POSITION_SCORE_WEIGHT
            * (bias.center_weight * center_proximity + bias.border_weight * border_proximity)
        + SEPARATION_SCORE_WEIGHT * separation_score(positions, occupied)
        + NOISE_SCORE_WEIGHT * rng.next_f64() * bias.random_factor
}

/// How far a candidate's letters sit from everything already on the board, as
/// a 0-1 reward. The average nearest-occupied distance is capped at
/// [`SEPARATION_CAP`] cells; with nothing placed yet the score is always 1.
#[must_use]
pub fn separation_score(positions: &LetterPositions, occupied: &[(usize, usize)]) -> f64 {
    if occupied.is_empty() {
        return 1.0;
    }

    let total: f64 = positions
        .iter()
        .map(|pos| {
            occupied
                .iter()
                .map(|&cell| FloatOrd(cell_distance((pos.row, pos.col), cell)))
                .min()
                .map_or(0.0, |FloatOrd(d)| d)
        })
        .sum();
    let average = total / positions.len() as f64;
    (average / SEPARATION_CAP).min(1.0)
}

/// Produce the strategy-specific order in which board cells are tried as
/// placement anchors. Every strategy yields each cell exactly once.
#[must_use]
pub fn anchor_order(
    strategy: PlacementStrategy,
    height: usize,
    width: usize,
    rng: &mut LehmerRng,
) -> Vec<(usize, usize)> {
    match strategy {
        PlacementStrategy::CenterFirst => center_first_order(height, width),
        PlacementStrategy::EdgesFirst => edges_first_order(height, width),
        PlacementStrategy::DiagonalPriority => diagonal_priority_order(height, width),
        PlacementStrategy::SpiralOut => spiral_out_order(height, width),
        PlacementStrategy::ZoneBased => zone_based_order(height, width, rng),
        PlacementStrategy::RandomWeighted => random_weighted_order(height, width, rng),
    }
}

fn all_cells(height: usize, width: usize) -> Vec<(usize, usize)> {
    (0..height)
        .flat_map(|row| (0..width).map(move |col| (row, col)))
        .collect()
}

/// Expanding rings outward from the center cell (Chebyshev distance).
fn center_first_order(height: usize, width: usize) -> Vec<(usize, usize)> {
    let center_row = (height.saturating_sub(1)) / 2;
    let center_col = (width.saturating_sub(1)) / 2;
    let mut cells = all_cells(height, width);
    cells.sort_by_key(|&(row, col)| {
        let dr = row.abs_diff(center_row);
        let dc = col.abs_diff(center_col);
        dr.max(dc)
    });
    cells
}

/// The border ring first, then successive inner rings.
fn edges_first_order(height: usize, width: usize) -> Vec<(usize, usize)> {
    let mut cells = all_cells(height, width);
    cells.sort_by_key(|&(row, col)| {
        row.min(col)
            .min(height - 1 - row)
            .min(width - 1 - col)
    });
    cells
}

/// Both board diagonals first, then cells ordered by distance to the nearest
/// diagonal.
fn diagonal_priority_order(height: usize, width: usize) -> Vec<(usize, usize)> {
    let mut cells = all_cells(height, width);
    cells.sort_by_key(|&(row, col)| {
        let main = row.abs_diff(col);
        let anti = (row + col).abs_diff(width.saturating_sub(1));
        main.min(anti)
    });
    cells
}

/// A deterministic outward spiral from the center, turning right-down-left-up
/// with leg lengths 1, 1, 2, 2, 3, 3, ...
fn spiral_out_order(height: usize, width: usize) -> Vec<(usize, usize)> {
    let total = height * width;
    let mut cells = Vec::with_capacity(total);

    let mut row = ((height.saturating_sub(1)) / 2) as i64;
    let mut col = ((width.saturating_sub(1)) / 2) as i64;
    let mut push = |cells: &mut Vec<(usize, usize)>, r: i64, c: i64| {
        if r >= 0 && c >= 0 && (r as usize) < height && (c as usize) < width {
            cells.push((r as usize, c as usize));
        }
    };
    push(&mut cells, row, col);

    const TURNS: [(i64, i64); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
    let mut turn = 0;
    let mut leg = 1usize;
    while cells.len() < total {
        for _ in 0..2 {
            let (dr, dc) = TURNS[turn];
            for _ in 0..leg {
                row += dr;
                col += dc;
                push(&mut cells, row, col);
            }
            turn = (turn + 1) % 4;
        }
        leg += 1;
    }
    cells.truncate(total);
    cells
}

/// Four quadrants in shuffled order, cells shuffled within each quadrant.
fn zone_based_order(height: usize, width: usize, rng: &mut LehmerRng) -> Vec<(usize, usize)> {
    let row_split = height / 2;
    let col_split = width / 2;

    let mut quadrants: [Vec<(usize, usize)>; 4] = Default::default();
    for (row, col) in all_cells(height, width) {
        let quadrant = usize::from(row >= row_split) * 2 + usize::from(col >= col_split);
        quadrants[quadrant].push((row, col));
    }

    let mut quadrant_order = [0usize, 1, 2, 3];
    quadrant_order.shuffle(rng);

    let mut cells = Vec::with_capacity(height * width);
    for index in quadrant_order {
        let quadrant = &mut quadrants[index];
        quadrant.shuffle(rng);
        cells.append(quadrant);
    }
    cells
}

/// Every cell, uniformly shuffled.
fn random_weighted_order(height: usize, width: usize, rng: &mut LehmerRng) -> Vec<(usize, usize)> {
    let mut cells = all_cells(height, width);
    cells.shuffle(rng);
    cells
}
