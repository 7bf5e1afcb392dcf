//! Iterative quicksort with selectable pivot strategy and an insertion sort cutoff.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::Error;
use crate::stats::{Outcome, Recorder, Stats};

/// Which element of a range becomes the partition pivot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PivotStrategy {
    First,
    Last,
    MedianOfThree,
}

impl PivotStrategy {
    pub const ALL: [PivotStrategy; 3] = [Self::First, Self::Last, Self::MedianOfThree];

    pub fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
            Self::MedianOfThree => "median_of_three",
        }
    }
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| Error::InvalidPivot(s.to_owned()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuicksortConfig {
    pub pivot: PivotStrategy,
    /// Ranges of at most this many elements are insertion sorted instead of partitioned.
    pub insertion_threshold: usize,
}

impl QuicksortConfig {
    pub fn new(pivot: PivotStrategy, insertion_threshold: usize) -> Self {
        Self {
            pivot,
            insertion_threshold,
        }
    }
}

impl fmt::Display for QuicksortConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.pivot, self.insertion_threshold)
    }
}

/// Parses `PIVOT:THRESHOLD`, e.g. `median_of_three:2`.
impl FromStr for QuicksortConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pivot, threshold) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidConfig(s.to_owned()))?;

        let insertion_threshold = threshold
            .trim()
            .parse()
            .map_err(|_| Error::InvalidConfig(s.to_owned()))?;

        Ok(Self::new(pivot.trim().parse()?, insertion_threshold))
    }
}

/// Sorts `v` in place and returns the statistics of the call.
pub fn sort<T>(v: &mut [T], config: QuicksortConfig) -> Stats<T>
where
    T: Ord + Clone,
{
    sort_by(v, config, |a, b| a.lt(b))
}

/// Sorts an owned vector, returning it together with the statistics.
pub fn sort_vec<T>(mut v: Vec<T>, config: QuicksortConfig) -> Outcome<Vec<T>, T>
where
    T: Ord + Clone,
{
    let stats = sort(&mut v, config);

    Outcome { sorted: v, stats }
}

/// Sorts `v` in place with the comparison function `is_less`.
///
/// Ranges are kept on an explicit stack of inclusive `(low, high)` bounds. Each popped range is
/// either discarded (fewer than two elements), insertion sorted (at most
/// `config.insertion_threshold` elements) or partitioned around a pivot, pushing both sides.
///
/// This sort is unstable and, depending on the pivot strategy, quadratic for some inputs, e.g.
/// `PivotStrategy::First` on ascending input.
pub fn sort_by<T, F>(v: &mut [T], config: QuicksortConfig, mut is_less: F) -> Stats<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut recorder = Recorder::for_len(v.len());

    let mut stack = Vec::new();
    if !v.is_empty() {
        stack.push((0, v.len() - 1));
    }

    let mut partitions = 0usize;

    while let Some((low, high)) = stack.pop() {
        if low >= high {
            continue;
        }

        // Taking the sort branch and checking the cutoff both count as comparisons.
        recorder.count_comparison();
        recorder.count_comparison();

        let range_len = high - low + 1;
        if range_len <= config.insertion_threshold {
            insertion_sort(&mut v[low..=high], &mut is_less, &mut recorder);
            continue;
        }

        let pivot_pos = choose_pivot(v, low, high, config.pivot, &mut is_less, &mut recorder);
        let mid = partition(v, low, high, pivot_pos, &mut is_less, &mut recorder);
        partitions += 1;

        // Empty or single element sides are discarded when popped.
        stack.push((low, mid.saturating_sub(1)));
        stack.push((mid + 1, high));
    }

    trace!(len = v.len(), partitions, %config, "quicksort done");

    recorder.finish()
}

/// Sorts `v` by shifting larger predecessors one slot to the right.
///
/// Every shift counts a comparison before and an exchange after moving the element. Writing the
/// key into its final slot counts one more exchange.
fn insertion_sort<T: Clone>(
    v: &mut [T],
    is_less: &mut impl FnMut(&T, &T) -> bool,
    recorder: &mut Recorder<T>,
) {
    for i in 1..v.len() {
        let key = v[i].clone();
        let mut hole = i;

        while hole > 0 && is_less(&key, &v[hole - 1]) {
            recorder.comparison(&v[hole - 1], &key);
            v[hole] = v[hole - 1].clone();
            recorder.exchange(&v[hole - 1], &key);
            hole -= 1;
        }

        recorder.exchange(&v[hole], &key);
        v[hole] = key;
    }
}

/// Returns the position of the pivot within `low..=high`.
fn choose_pivot<T: Clone>(
    v: &[T],
    low: usize,
    high: usize,
    strategy: PivotStrategy,
    is_less: &mut impl FnMut(&T, &T) -> bool,
    recorder: &mut Recorder<T>,
) -> usize {
    match strategy {
        PivotStrategy::First => low,
        PivotStrategy::Last => high,
        PivotStrategy::MedianOfThree => {
            let mid = low + (high - low) / 2;
            let mut candidates = [low, mid, high];

            // Three element sorting network. Candidates only swap on strictly less, so equal
            // values keep the low, mid, high order.
            let mut sort2 = |candidates: &mut [usize; 3], a: usize, b: usize| {
                let (a_val, b_val) = (&v[candidates[a]], &v[candidates[b]]);
                recorder.comparison(a_val, b_val);
                if is_less(b_val, a_val) {
                    candidates.swap(a, b);
                }
            };

            sort2(&mut candidates, 0, 1);
            sort2(&mut candidates, 1, 2);
            sort2(&mut candidates, 0, 1);

            candidates[1]
        }
    }
}

/// Lomuto partition of `low..=high` around the element at `pivot_pos`.
///
/// The pivot is parked at `high`, every element that is less or equal is swapped to the growing
/// left side, and finally the pivot is swapped in between. Returns the final pivot position.
fn partition<T: Clone>(
    v: &mut [T],
    low: usize,
    high: usize,
    pivot_pos: usize,
    is_less: &mut impl FnMut(&T, &T) -> bool,
    recorder: &mut Recorder<T>,
) -> usize {
    swap(v, pivot_pos, high, recorder);

    let mut lt_end = low;
    for j in low..high {
        if !is_less(&v[high], &v[j]) {
            recorder.comparison(&v[j], &v[high]);
            swap(v, lt_end, j, recorder);
            lt_end += 1;
        }
    }

    swap(v, lt_end, high, recorder);

    lt_end
}

#[inline]
fn swap<T: Clone>(v: &mut [T], a: usize, b: usize, recorder: &mut Recorder<T>) {
    recorder.exchange(&v[a], &v[b]);
    v.swap(a, b);
}
