use quickmerge::linked_list::DoublyLinkedList;
use quickmerge::natural_merge;
use quickmerge::stats::{TraceEntry, MERGE_TRACE_CAP};

#[test]
fn detects_maximal_runs() {
    let runs = natural_merge::detect_runs(&[1, 2, 1, 3, 5, 2, 4]);

    assert_eq!(runs, vec![vec![1, 2], vec![1, 3, 5], vec![2, 4]]);
}

#[test]
fn merges_runs_with_counts() {
    let outcome = natural_merge::sort(&[1, 2, 1, 3, 5, 2, 4]);

    assert_eq!(outcome.sorted.to_vec(), vec![1, 1, 2, 2, 3, 4, 5]);

    // 6 during run detection, 3 merging [1, 2] with [1, 3, 5], 6 in the final merge.
    assert_eq!(outcome.stats.comparisons, 15);
    assert_eq!(outcome.stats.exchanges, 3);
    assert_eq!(
        outcome.stats.exchange_trace,
        vec![(2, 1), (3, 2), (5, 4)]
    );
    assert_eq!(
        outcome.stats.comparison_trace[..6],
        [(1, 2), (2, 1), (1, 3), (3, 5), (5, 2), (2, 4)]
    );
}

#[test]
fn empty_and_single() {
    let empty = natural_merge::sort::<i64>(&[]);
    assert!(empty.sorted.is_empty());
    assert_eq!(empty.stats.comparisons, 0);
    assert_eq!(empty.stats.exchanges, 0);

    let single = natural_merge::sort(&[42]);
    assert_eq!(single.sorted.to_vec(), vec![42]);
    assert_eq!(single.stats.comparisons, 0);
    assert_eq!(single.stats.exchanges, 0);

    assert!(natural_merge::detect_runs::<i32>(&[]).is_empty());
}

#[test]
fn sorted_input_is_one_run() {
    let v = (0..40).collect::<Vec<i32>>();

    assert_eq!(natural_merge::detect_runs(&v).len(), 1);

    let outcome = natural_merge::sort(&v);
    assert_eq!(outcome.sorted.to_vec(), v);
    assert_eq!(outcome.stats.comparisons, 39);
    assert_eq!(outcome.stats.exchanges, 0);
}

#[test]
fn all_equal_is_one_run() {
    let v = vec![7; 25];

    assert_eq!(natural_merge::detect_runs(&v), vec![v.clone()]);
    assert_eq!(natural_merge::sort(&v).stats.exchanges, 0);
}

#[test]
fn reverse_input_counts() {
    let outcome = natural_merge::sort(&[5, 4, 3, 2, 1]);

    assert_eq!(outcome.sorted.to_vec(), vec![1, 2, 3, 4, 5]);

    // Five single element runs: 4 comparisons to find them, then passes of
    // [5]+[4], [3]+[2] | [4, 5]+[2, 3] | [2, 3, 4, 5]+[1].
    assert_eq!(outcome.stats.comparisons, 4 + 1 + 1 + 2 + 1);
    assert_eq!(outcome.stats.exchanges, 1 + 1 + 2 + 1);
}

#[test]
fn stable_for_equal_keys() {
    let v = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];

    let outcome = natural_merge::sort_by(&v, |a, b| a.0 < b.0);

    assert_eq!(
        outcome.sorted.to_vec(),
        vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]
    );
}

#[test]
fn sorts_list_in_place() {
    let list = [3, 1, 2].into_iter().collect::<DoublyLinkedList<_>>();

    let outcome = natural_merge::sort_list_by(list, |a, b| a < b);

    assert_eq!(outcome.sorted.len(), 3);
    assert_eq!(outcome.sorted.front(), Some(&1));
    assert_eq!(outcome.sorted.back(), Some(&3));
    assert_eq!(outcome.sorted.get(1).ok(), Some(&2));
}

#[test]
fn traces_only_for_short_input() {
    let short = (0..50).rev().collect::<Vec<i32>>();
    let outcome = natural_merge::sort(&short);
    assert_eq!(
        outcome.stats.comparison_trace.len() as u64,
        outcome.stats.comparisons
    );
    assert_eq!(
        outcome.stats.exchange_trace.len() as u64,
        outcome.stats.exchanges
    );

    let long = (0..51).rev().collect::<Vec<i32>>();
    let outcome = natural_merge::sort(&long);
    assert!(outcome.stats.comparisons > 0);
    assert!(outcome.stats.comparison_trace.is_empty());
    assert!(outcome.stats.exchange_trace.is_empty());
}

#[test]
fn capped_trace_ends_with_ellipsis() {
    let v = (0..50).rev().collect::<Vec<i32>>();
    let stats = natural_merge::sort(&v).stats;

    let capped = stats.capped_comparison_trace(MERGE_TRACE_CAP);
    assert_eq!(capped.len(), MERGE_TRACE_CAP + 1);
    assert_eq!(capped.last(), Some(&TraceEntry::Ellipsis));
    assert_eq!(capped[0], TraceEntry::Pair(49, 48));

    let uncapped = stats.capped_comparison_trace(usize::MAX);
    assert!(!uncapped.contains(&TraceEntry::Ellipsis));
}
