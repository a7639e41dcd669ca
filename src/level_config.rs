//! Level configuration: maps a level number (plus the calendar date) to the
//! deterministic knobs that shape a board — which placement strategy orders
//! candidate cells, which shuffle method orders the words, how directions and
//! board regions are weighted, and the seed every random draw flows from.
//!
//! Configurations repeat on a 20-level cycle, but the seed folds in the
//! calendar day, so the "same" level rotates to a fresh board each day while
//! staying stable within the day.

use chrono::{Datelike, NaiveDate, Utc};

use crate::rng::{LehmerRng, LEHMER_MODULUS};
use crate::types::Direction;
use crate::util::{clamp_unit, round2};
use crate::LEVEL_CYCLE;

/// Governs the order in which candidate board cells are considered when
/// placing a word.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PlacementStrategy {
    CenterFirst,
    EdgesFirst,
    DiagonalPriority,
    SpiralOut,
    ZoneBased,
    RandomWeighted,
}

impl PlacementStrategy {
    /// The strategy's conventional kebab-case name, as shown in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PlacementStrategy::CenterFirst => "center-first",
            PlacementStrategy::EdgesFirst => "edges-first",
            PlacementStrategy::DiagonalPriority => "diagonal-priority",
            PlacementStrategy::SpiralOut => "spiral-out",
            PlacementStrategy::ZoneBased => "zone-based",
            PlacementStrategy::RandomWeighted => "random-weighted",
        }
    }
}

/// Governs the order in which words are attempted.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ShuffleMethod {
    FisherYates,
    Rotational,
    Segmented,
    WeightedRandom,
    PatternBased,
}

impl ShuffleMethod {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShuffleMethod::FisherYates => "fisher-yates",
            ShuffleMethod::Rotational => "rotational",
            ShuffleMethod::Segmented => "segmented",
            ShuffleMethod::WeightedRandom => "weighted-random",
            ShuffleMethod::PatternBased => "pattern-based",
        }
    }
}

/// Per-direction scoring multipliers in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionWeights {
    pub horizontal: f64,
    pub vertical: f64,
    pub diagonal: f64,
}

impl DirectionWeights {
    #[must_use]
    pub fn get(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.horizontal,
            Direction::Vertical => self.vertical,
            Direction::Diagonal => self.diagonal,
        }
    }
}

/// Weights in `[0, 1]` biasing where on the board words tend to land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionBias {
    pub center_weight: f64,
    pub border_weight: f64,
    /// How much pure noise enters the placement score.
    pub random_factor: f64,
}

/// The full deterministic configuration for one board-generation run.
/// Computed on demand from `(level, date)`; cheap to recompute, never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub level: u32,
    pub seed: i64,
    pub strategy: PlacementStrategy,
    pub shuffle_method: ShuffleMethod,
    pub direction_weights: DirectionWeights,
    pub position_bias: PositionBias,
}

/// The fixed strategy assignment for each of the 20 cycle positions.
/// Strategies repeat across the table (positions 0 and 6 are both
/// center-first) but produce distinct boards because the seed differs.
pub const LEVEL_STRATEGIES: [PlacementStrategy; LEVEL_CYCLE] = [
    // Levels 1-4: fisher-yates bucket.
    PlacementStrategy::CenterFirst,
    PlacementStrategy::EdgesFirst,
    PlacementStrategy::DiagonalPriority,
    PlacementStrategy::SpiralOut,
    // Levels 5-8: rotational bucket.
    PlacementStrategy::ZoneBased,
    PlacementStrategy::RandomWeighted,
    PlacementStrategy::CenterFirst,
    PlacementStrategy::EdgesFirst,
    // Levels 9-12: segmented bucket.
    PlacementStrategy::DiagonalPriority,
    PlacementStrategy::SpiralOut,
    PlacementStrategy::ZoneBased,
    PlacementStrategy::RandomWeighted,
    // Levels 13-16: weighted-random bucket.
    PlacementStrategy::CenterFirst,
    PlacementStrategy::SpiralOut,
    PlacementStrategy::EdgesFirst,
    PlacementStrategy::DiagonalPriority,
    // Levels 17-20: pattern-based bucket.
    PlacementStrategy::ZoneBased,
    PlacementStrategy::CenterFirst,
    PlacementStrategy::RandomWeighted,
    PlacementStrategy::SpiralOut,
];

/// Shuffle methods by cycle bucket; each entry covers 4 consecutive levels.
pub const SHUFFLE_METHODS: [ShuffleMethod; 5] = [
    ShuffleMethod::FisherYates,
    ShuffleMethod::Rotational,
    ShuffleMethod::Segmented,
    ShuffleMethod::WeightedRandom,
    ShuffleMethod::PatternBased,
];

/// Prime multipliers dispersing the level number across seed space.
const SEED_PRIME_SQUARE: i64 = 7_919;
const SEED_PRIME_LINEAR: i64 = 104_729;

/// Prime multipliers for the calendar component; these make the seed (and
/// therefore the board) rotate once per day.
const SEED_PRIME_DAY: i64 = 5_077;
const SEED_PRIME_MONTH: i64 = 15_485_863;

/// Maximum relative drift applied to the base direction weights.
const DIRECTION_JITTER: f64 = 0.10;

/// Maximum relative drift applied to the base center/border weights.
const POSITION_JITTER: f64 = 0.075;

/// Maximum relative drift applied to the base randomness factor.
const RANDOMNESS_JITTER: f64 = 0.05;

/// Compute the seed for a level on a given date: a polynomial in the level
/// with prime multipliers, plus a day-of-month/month component, reduced mod
/// `2^31 - 1`.
#[must_use]
pub fn compute_seed(level: u32, date: NaiveDate) -> i64 {
    let modulus = LEHMER_MODULUS as i64;
    let l = i64::from(level.max(1)) % modulus;
    let square_term = (l * l % modulus) * SEED_PRIME_SQUARE % modulus;
    let linear_term = l * SEED_PRIME_LINEAR % modulus;
    let calendar_term = (i64::from(date.day()) * SEED_PRIME_DAY
        + i64::from(date.month()) * SEED_PRIME_MONTH)
        % modulus;
    (square_term + linear_term + calendar_term) % modulus
}

/// Base direction weights and position bias for each strategy, before the
/// per-instance perturbation.
#[must_use]
pub fn base_profile(strategy: PlacementStrategy) -> (DirectionWeights, PositionBias) {
    match strategy {
        PlacementStrategy::CenterFirst => (
            DirectionWeights {
                horizontal: 0.80,
                vertical: 0.80,
                diagonal: 0.50,
            },
            PositionBias {
                center_weight: 0.90,
                border_weight: 0.10,
                random_factor: 0.20,
            },
        ),
        PlacementStrategy::EdgesFirst => (
            DirectionWeights {
                horizontal: 0.70,
                vertical: 0.70,
                diagonal: 0.60,
            },
            PositionBias {
                center_weight: 0.10,
                border_weight: 0.90,
                random_factor: 0.25,
            },
        ),
        PlacementStrategy::DiagonalPriority => (
            DirectionWeights {
                horizontal: 0.50,
                vertical: 0.50,
                diagonal: 0.95,
            },
            PositionBias {
                center_weight: 0.50,
                border_weight: 0.50,
                random_factor: 0.30,
            },
        ),
        PlacementStrategy::SpiralOut => (
            DirectionWeights {
                horizontal: 0.75,
                vertical: 0.75,
                diagonal: 0.60,
            },
            PositionBias {
                center_weight: 0.70,
                border_weight: 0.30,
                random_factor: 0.35,
            },
        ),
        PlacementStrategy::ZoneBased => (
            DirectionWeights {
                horizontal: 0.70,
                vertical: 0.70,
                diagonal: 0.70,
            },
            PositionBias {
                center_weight: 0.50,
                border_weight: 0.50,
                random_factor: 0.50,
            },
        ),
        PlacementStrategy::RandomWeighted => (
            DirectionWeights {
                horizontal: 0.65,
                vertical: 0.65,
                diagonal: 0.65,
            },
            PositionBias {
                center_weight: 0.40,
                border_weight: 0.40,
                random_factor: 0.80,
            },
        ),
    }
}

impl LevelConfig {
    /// Resolve the configuration for a level using today's (UTC) date.
    #[must_use]
    pub fn resolve(level: u32) -> LevelConfig {
        LevelConfig::resolve_on(level, Utc::now().date_naive())
    }

    /// Resolve the configuration for a level on an explicit date. This is the
    /// deterministic entry point: the same `(level, date)` always yields an
    /// identical config.
    #[must_use]
    pub fn resolve_on(level: u32, date: NaiveDate) -> LevelConfig {
        let level = level.max(1);
        let normalized = ((level - 1) as usize) % LEVEL_CYCLE;
        let strategy = LEVEL_STRATEGIES[normalized];
        let shuffle_method = SHUFFLE_METHODS[normalized / 4];
        let seed = compute_seed(level, date);

        let (base_weights, base_bias) = base_profile(strategy);

        // Perturbation draws come from the config's own seed, in a fixed
        // order, so the perturbed weights are as reproducible as the seed.
        let mut rng = LehmerRng::new(seed);
        let mut perturb = |base: f64, jitter: f64| -> f64 {
            let drift = 1.0 + jitter * (2.0 * rng.next_f64() - 1.0);
            round2(clamp_unit(base * drift))
        };

        let direction_weights = DirectionWeights {
            horizontal: perturb(base_weights.horizontal, DIRECTION_JITTER),
            vertical: perturb(base_weights.vertical, DIRECTION_JITTER),
            diagonal: perturb(base_weights.diagonal, DIRECTION_JITTER),
        };
        let position_bias = PositionBias {
            center_weight: perturb(base_bias.center_weight, POSITION_JITTER),
            border_weight: perturb(base_bias.border_weight, POSITION_JITTER),
            random_factor: perturb(base_bias.random_factor, RANDOMNESS_JITTER),
        };

        LevelConfig {
            level,
            seed,
            strategy,
            shuffle_method,
            direction_weights,
            position_bias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn same_level_and_date_resolve_identically() {
        let a = LevelConfig::resolve_on(7, fixed_date());
        let b = LevelConfig::resolve_on(7, fixed_date());
        assert_eq!(a, b);
    }

    #[test]
    fn strategy_and_shuffle_cycle_every_twenty_levels() {
        for level in 1..=40u32 {
            let low = LevelConfig::resolve_on(level, fixed_date());
            let high = LevelConfig::resolve_on(level + 20, fixed_date());
            assert_eq!(low.strategy, high.strategy, "level {level}");
            assert_eq!(low.shuffle_method, high.shuffle_method, "level {level}");
            assert_ne!(low.seed, high.seed, "level {level}");
        }
    }

    #[test]
    fn shuffle_method_buckets_span_four_levels() {
        let date = fixed_date();
        assert_eq!(
            LevelConfig::resolve_on(1, date).shuffle_method,
            ShuffleMethod::FisherYates
        );
        assert_eq!(
            LevelConfig::resolve_on(4, date).shuffle_method,
            ShuffleMethod::FisherYates
        );
        assert_eq!(
            LevelConfig::resolve_on(5, date).shuffle_method,
            ShuffleMethod::Rotational
        );
        assert_eq!(
            LevelConfig::resolve_on(20, date).shuffle_method,
            ShuffleMethod::PatternBased
        );
    }

    #[test]
    fn table_repeats_strategies_with_different_seeds() {
        let date = fixed_date();
        let one = LevelConfig::resolve_on(1, date);
        let seven = LevelConfig::resolve_on(7, date);
        assert_eq!(one.strategy, PlacementStrategy::CenterFirst);
        assert_eq!(seven.strategy, PlacementStrategy::CenterFirst);
        assert_ne!(one.seed, seven.seed);
    }

    #[test]
    fn seed_changes_with_the_calendar_day() {
        let march_15 = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let march_16 = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        let april_15 = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        let base = compute_seed(3, march_15);
        assert_ne!(base, compute_seed(3, march_16));
        assert_ne!(base, compute_seed(3, april_15));
    }

    #[test]
    fn weights_are_clamped_and_rounded() {
        for level in 1..=20u32 {
            let config = LevelConfig::resolve_on(level, fixed_date());
            for w in [
                config.direction_weights.horizontal,
                config.direction_weights.vertical,
                config.direction_weights.diagonal,
                config.position_bias.center_weight,
                config.position_bias.border_weight,
                config.position_bias.random_factor,
            ] {
                assert!((0.0..=1.0).contains(&w), "level {level}: {w}");
                assert_eq!(w, round2(w), "level {level}: {w} not rounded");
            }
        }
    }

    #[test]
    fn zero_level_is_coerced_to_one() {
        let zero = LevelConfig::resolve_on(0, fixed_date());
        let one = LevelConfig::resolve_on(1, fixed_date());
        assert_eq!(zero, one);
    }

    #[test]
    fn seed_stays_in_lehmer_range() {
        for level in [1u32, 13, 999, u32::MAX] {
            let seed = compute_seed(level, fixed_date());
            assert!(seed >= 0 && seed < LEHMER_MODULUS as i64, "level {level}");
        }
    }
}
