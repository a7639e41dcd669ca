//! Word-list shuffling. Each level's configuration picks one of five
//! reordering methods, trading entropy against structural bias: fisher-yates
//! is fully uniform, while pattern-based barely disturbs the input. Every
//! method operates on a copy, preserves the input multiset, and reports which
//! method ran along with its nominal entropy for diagnostics.

use float_ord::FloatOrd;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::level_config::ShuffleMethod;
use crate::rng::LehmerRng;

/// Exponent applied to word length when computing weighted-random processing
/// weights; superlinear so longer words surface toward the front.
const LENGTH_WEIGHT_EXPONENT: f64 = 1.2;

/// Additive noise on each element's base weight.
const WEIGHT_JITTER: f64 = 0.25;

/// Relative perturbation applied to weights during the descending sort.
const SORT_PERTURBATION: f64 = 0.15;

/// The four fixed index permutations used by pattern-based shuffling, tiled
/// across the input in chunks of five.
const SHUFFLE_PATTERNS: [[usize; 5]; 4] = [
    [2, 0, 4, 1, 3],
    [4, 3, 2, 1, 0],
    [1, 3, 0, 2, 4],
    [3, 1, 4, 0, 2],
];

/// A shuffled copy of the input plus diagnostics about how it was produced.
/// The entropy value is the method's nominal constant, not re-derived from
/// the actual output.
#[derive(Debug, Clone)]
pub struct ShuffleOutcome<T> {
    pub items: Vec<T>,
    pub method: ShuffleMethod,
    pub entropy: f64,
}

/// The nominal entropy constant for a shuffle method, on a 0-1 scale where
/// 1 would be a perfectly uniform permutation.
#[must_use]
pub fn nominal_entropy(method: ShuffleMethod) -> f64 {
    match method {
        ShuffleMethod::FisherYates => 0.95,
        ShuffleMethod::Rotational => 0.70,
        ShuffleMethod::Segmented => 0.80,
        ShuffleMethod::WeightedRandom => 0.85,
        ShuffleMethod::PatternBased => 0.60,
    }
}

/// Shuffle a word list. Weighted-random ordering uses word length (raised to
/// [`LENGTH_WEIGHT_EXPONENT`]) so longer words tend to be attempted first,
/// while they still have the most open board to land on.
#[must_use]
pub fn shuffle_words(
    words: &[String],
    method: ShuffleMethod,
    rng: &mut LehmerRng,
) -> ShuffleOutcome<String> {
    shuffle_with_weight(words, method, rng, |word, _| {
        (word.chars().count() as f64).powf(LENGTH_WEIGHT_EXPONENT)
    })
}

/// Shuffle arbitrary items. Without a length to weigh, weighted-random
/// ordering falls back to a position-based weight favoring earlier elements.
#[must_use]
pub fn shuffle<T: Clone>(
    items: &[T],
    method: ShuffleMethod,
    rng: &mut LehmerRng,
) -> ShuffleOutcome<T> {
    let len = items.len();
    shuffle_with_weight(items, method, rng, |_, index| (len - index) as f64)
}

fn shuffle_with_weight<T: Clone>(
    items: &[T],
    method: ShuffleMethod,
    rng: &mut LehmerRng,
    weight: impl Fn(&T, usize) -> f64,
) -> ShuffleOutcome<T> {
    let mut out: Vec<T> = items.to_vec();

    if out.len() >= 2 {
        match method {
            ShuffleMethod::FisherYates => out.shuffle(rng),
            ShuffleMethod::Rotational => rotate_segments(&mut out, rng),
            ShuffleMethod::Segmented => shuffle_segments(&mut out, rng),
            ShuffleMethod::WeightedRandom => out = weighted_order(items, rng, weight),
            ShuffleMethod::PatternBased => out = apply_pattern(items, rng),
        }
    }

    ShuffleOutcome {
        items: out,
        method,
        entropy: nominal_entropy(method),
    }
}

/// Split the list into contiguous segment ranges of near-equal size.
fn segment_ranges(len: usize, count: usize) -> Vec<(usize, usize)> {
    let count = count.min(len).max(1);
    let base = len / count;
    let remainder = len % count;

    let mut ranges = Vec::with_capacity(count);
    let mut start = 0;
    for segment in 0..count {
        let size = base + usize::from(segment < remainder);
        ranges.push((start, start + size));
        start += size;
    }
    ranges
}

/// Rotational: `max(2, ceil(n/3))` segments, each rotated by an independent
/// random offset. Local order inside each segment survives, shifted.
fn rotate_segments<T>(items: &mut [T], rng: &mut LehmerRng) {
    let count = (items.len() + 2) / 3;
    for (start, end) in segment_ranges(items.len(), count.max(2)) {
        let segment = &mut items[start..end];
        if segment.len() >= 2 {
            let offset = rng.gen_range(0..segment.len());
            segment.rotate_left(offset);
        }
    }
}

/// Segmented: 2-4 contiguous segments (more for longer lists), each
/// independently Fisher-Yates shuffled; segment order is preserved.
fn shuffle_segments<T>(items: &mut [T], rng: &mut LehmerRng) {
    let count = (items.len() / 4).clamp(2, 4);
    for (start, end) in segment_ranges(items.len(), count) {
        items[start..end].shuffle(rng);
    }
}

/// Weighted-random: sort descending by jittered weight, so high-weight
/// elements tend toward the front without the order being fully fixed.
fn weighted_order<T: Clone>(
    items: &[T],
    rng: &mut LehmerRng,
    weight: impl Fn(&T, usize) -> f64,
) -> Vec<T> {
    let mut keyed: Vec<(FloatOrd<f64>, T)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let base = weight(item, index) + WEIGHT_JITTER * rng.next_f64();
            let key = base * (1.0 + SORT_PERTURBATION * (2.0 * rng.next_f64() - 1.0));
            (FloatOrd(key), item.clone())
        })
        .collect();

    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Pattern-based: pick one of the fixed 5-element permutations and tile it
/// across the list; a tail shorter than one tile keeps its original order.
fn apply_pattern<T: Clone>(items: &[T], rng: &mut LehmerRng) -> Vec<T> {
    let pattern = &SHUFFLE_PATTERNS[rng.next_index(SHUFFLE_PATTERNS.len())];
    let tile = pattern.len();

    let mut out = Vec::with_capacity(items.len());
    let mut start = 0;
    while start + tile <= items.len() {
        for &offset in pattern {
            out.push(items[start + offset].clone());
        }
        start += tile;
    }
    out.extend(items[start..].iter().cloned());
    out
}
