//! Iterative natural merge sort over a [`DoublyLinkedList`].
//!
//! The source list is cut into maximal non-decreasing runs, then adjacent runs are merged pairwise,
//! pass after pass, until a single run is left. Runs and merged runs share the node table of the
//! source list, so the whole sort relinks nodes and never allocates or copies one.

use tracing::{debug, trace};

use crate::linked_list::{Chain, DoublyLinkedList, Node};
use crate::stats::{Outcome, Recorder};

/// Sorts a copy of `v`, the result is returned as a linked list.
pub fn sort<T>(v: &[T]) -> Outcome<DoublyLinkedList<T>, T>
where
    T: Ord + Clone,
{
    sort_by(v, |a, b| a.lt(b))
}

pub fn sort_by<T, F>(v: &[T], is_less: F) -> Outcome<DoublyLinkedList<T>, T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    sort_list_by(v.iter().cloned().collect(), is_less)
}

/// Sorts `list` in place by relinking its nodes.
///
/// Ties keep their original order, for equal heads the one from the left run is taken first.
pub fn sort_list_by<T, F>(
    mut list: DoublyLinkedList<T>,
    mut is_less: F,
) -> Outcome<DoublyLinkedList<T>, T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = list.len();
    let mut recorder = Recorder::for_len(len);

    let mut source = list.take_chain();
    let nodes = list.nodes_mut();

    let runs = cut_runs(nodes, &mut source, &mut is_less, &mut recorder);
    debug!(len, runs = runs.len(), "detected natural runs");

    let sorted = merge_runs(nodes, runs, &mut is_less, &mut recorder);
    list.set_chain(sorted);

    Outcome {
        sorted: list,
        stats: recorder.finish(),
    }
}

/// Returns the values of every natural run in `v`, in order.
pub fn detect_runs<T>(v: &[T]) -> Vec<Vec<T>>
where
    T: Ord + Clone,
{
    let mut list = v.iter().cloned().collect::<DoublyLinkedList<T>>();
    let mut recorder = Recorder::for_len(v.len());

    let mut source = list.take_chain();
    let runs = cut_runs(
        list.nodes_mut(),
        &mut source,
        &mut |a: &T, b: &T| a.lt(b),
        &mut recorder,
    );

    runs.into_iter()
        .map(|run| {
            let mut values = Vec::new();
            let mut current = run.head();
            while let Some(id) = current {
                values.push(list.value(id).clone());
                current = list.node(id).next();
            }

            values
        })
        .collect()
}

/// Detaches the maximal non-decreasing runs of `source` one after the other.
fn cut_runs<T: Clone>(
    nodes: &mut [Node<T>],
    source: &mut Chain,
    is_less: &mut impl FnMut(&T, &T) -> bool,
    recorder: &mut Recorder<T>,
) -> Vec<Chain> {
    let mut runs = Vec::new();

    while let Some(start) = source.head() {
        let mut last = start;
        let mut run_len = 1;

        while let Some(next) = nodes[last.0].next() {
            let current_val = nodes[last.0].value();
            let next_val = nodes[next.0].value();

            recorder.comparison(current_val, next_val);
            if is_less(next_val, current_val) {
                break;
            }

            last = next;
            run_len += 1;
        }

        runs.push(source.split_front(nodes, last, run_len));
    }

    debug_assert!(source.is_empty());
    runs
}

/// Merges adjacent pairs of runs until one is left. An empty `runs` yields an empty chain.
fn merge_runs<T: Clone>(
    nodes: &mut [Node<T>],
    mut runs: Vec<Chain>,
    is_less: &mut impl FnMut(&T, &T) -> bool,
    recorder: &mut Recorder<T>,
) -> Chain {
    let mut pass = 0;

    while runs.len() > 1 {
        pass += 1;

        let mut merged = Vec::with_capacity(runs.len().div_ceil(2));
        let mut pending = runs.into_iter();

        while let Some(left) = pending.next() {
            match pending.next() {
                Some(right) => merged.push(merge_pair(nodes, left, right, is_less, recorder)),
                // An odd run out goes into the next pass unchanged.
                None => merged.push(left),
            }
        }

        trace!(pass, runs = merged.len(), "merge pass done");
        runs = merged;
    }

    runs.pop().unwrap_or_default()
}

/// Merges two non-decreasing runs into one.
///
/// Every head comparison is counted. Taking the right head ahead of the pending left head counts
/// as an exchange and is logged as `(left, right)`.
fn merge_pair<T: Clone>(
    nodes: &mut [Node<T>],
    mut left: Chain,
    mut right: Chain,
    is_less: &mut impl FnMut(&T, &T) -> bool,
    recorder: &mut Recorder<T>,
) -> Chain {
    let mut out = Chain::default();

    while let (Some(left_head), Some(right_head)) = (left.head(), right.head()) {
        let left_val = nodes[left_head.0].value();
        let right_val = nodes[right_head.0].value();

        recorder.comparison(left_val, right_val);

        let take_right = is_less(right_val, left_val);
        if take_right {
            recorder.exchange(left_val, right_val);
        }

        let from = if take_right { &mut right } else { &mut left };
        if let Some(moved) = from.pop_head(nodes) {
            out.push_node(nodes, moved);
        }
    }

    out.append_chain(nodes, left);
    out.append_chain(nodes, right);

    out
}
