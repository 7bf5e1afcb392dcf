//! Comparison and exchange accounting shared by both engines.

use std::fmt;

/// Inputs longer than this get counters only, no traces.
pub const TRACE_LEN_LIMIT: usize = 50;

/// Number of trace entries shown for natural merge sort runs.
pub const MERGE_TRACE_CAP: usize = 50;

/// Number of trace entries shown for quicksort runs.
pub const QUICKSORT_TRACE_CAP: usize = 100;

/// Counters and traces of one sort call. Produced once at the end of the call and read-only from
/// then on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats<T> {
    pub comparisons: u64,
    pub exchanges: u64,
    /// Pairs of values that were compared, empty for inputs longer than [`TRACE_LEN_LIMIT`].
    pub comparison_trace: Vec<(T, T)>,
    /// Pairs of values involved in an exchange, empty for inputs longer than [`TRACE_LEN_LIMIT`].
    pub exchange_trace: Vec<(T, T)>,
}

impl<T: Clone> Stats<T> {
    pub fn capped_comparison_trace(&self, cap: usize) -> Vec<TraceEntry<T>> {
        cap_trace(&self.comparison_trace, cap)
    }

    pub fn capped_exchange_trace(&self, cap: usize) -> Vec<TraceEntry<T>> {
        cap_trace(&self.exchange_trace, cap)
    }
}

/// One displayed trace item, the ellipsis marks a trace that was cut off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEntry<T> {
    Pair(T, T),
    Ellipsis,
}

impl<T: fmt::Display> fmt::Display for TraceEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::Pair(a, b) => write!(f, "({a}, {b})"),
            TraceEntry::Ellipsis => f.write_str("..."),
        }
    }
}

/// Sorted output of one sort call together with the statistics it produced.
#[derive(Clone, Debug)]
pub struct Outcome<S, T> {
    pub sorted: S,
    pub stats: Stats<T>,
}

fn cap_trace<T: Clone>(trace: &[(T, T)], cap: usize) -> Vec<TraceEntry<T>> {
    let mut entries = trace
        .iter()
        .take(cap)
        .map(|(a, b)| TraceEntry::Pair(a.clone(), b.clone()))
        .collect::<Vec<_>>();

    if trace.len() > cap {
        entries.push(TraceEntry::Ellipsis);
    }

    entries
}

/// Mutable side of [`Stats`], owned by the engine while it runs.
pub(crate) struct Recorder<T> {
    stats: Stats<T>,
    trace: bool,
}

impl<T: Clone> Recorder<T> {
    pub(crate) fn for_len(len: usize) -> Self {
        Self {
            stats: Stats {
                comparisons: 0,
                exchanges: 0,
                comparison_trace: Vec::new(),
                exchange_trace: Vec::new(),
            },
            trace: len <= TRACE_LEN_LIMIT,
        }
    }

    /// Counts a comparison that does not involve two element values.
    #[inline]
    pub(crate) fn count_comparison(&mut self) {
        self.stats.comparisons += 1;
    }

    #[inline]
    pub(crate) fn comparison(&mut self, a: &T, b: &T) {
        self.stats.comparisons += 1;
        if self.trace {
            self.stats.comparison_trace.push((a.clone(), b.clone()));
        }
    }

    #[inline]
    pub(crate) fn exchange(&mut self, a: &T, b: &T) {
        self.stats.exchanges += 1;
        if self.trace {
            self.stats.exchange_trace.push((a.clone(), b.clone()));
        }
    }

    pub(crate) fn finish(self) -> Stats<T> {
        self.stats
    }
}
