use std::time::Duration;

use quickmerge::input;
use quickmerge::quicksort::{PivotStrategy, QuicksortConfig};
use quickmerge::report::{self, Records, RunReport};
use quickmerge::stats::TraceEntry;
use quickmerge::timing::{Performance, RunStatus};
use quickmerge::Error;

#[test]
fn break_string_wraps_terms() {
    assert_eq!(
        report::break_string(["aa", "bb", "cc"], 6),
        "\n\t\taa bb\n\t\tcc"
    );
    assert_eq!(report::break_string([1, 2, 3], 80), "\n\t\t1 2 3");
    assert_eq!(report::break_string(Vec::<i32>::new(), 80), "");

    // A term longer than the line still gets a line of its own.
    assert_eq!(
        report::break_string(["a", "abcdefgh", "b"], 4),
        "\n\t\ta\n\t\tabcdefgh\n\t\tb"
    );
}

#[test]
fn original_records_header() {
    let lines = report::format_original_records(&[3, 1, 2]);

    assert_eq!(lines, vec!["Original: \n\t\t3 1 2", "Size: 3 Records\n"]);
}

#[test]
fn input_error_header() {
    let err = input::parse_records("1 2\n3 x4").unwrap_err();

    assert_eq!(
        report::format_input_error(&err),
        vec!["Original: \n\tERROR - invalid literal for integer on line 2: 'x4'"]
    );
}

#[test]
fn sorted_results() {
    assert_eq!(
        report::format_sorted_results(1, Records::Sorted(&[1, 2]), 15),
        "\n1. \tSorted: \n\t\t1 2\nRuntime: 15μs"
    );
    assert_eq!(
        report::format_sorted_results::<i32>(2, Records::Sorted(&[]), 7),
        "\n2. Runtime: 7μs"
    );
    assert_eq!(
        report::format_sorted_results::<i32>(3, Records::Error("bad input"), 0),
        "\n3. \tError - \n\t\tbad input\nRuntime: 0μs"
    );
}

#[test]
fn logs_with_and_without_traces() {
    assert_eq!(
        report::format_logs::<i32>(&[], &[], 4, 2),
        "\nComparisons: 4\nExchanges: 2"
    );

    let comparisons = [TraceEntry::Pair(1, 2), TraceEntry::Ellipsis];
    let exchanges = [TraceEntry::Pair(2, 1)];
    assert_eq!(
        report::format_logs(&comparisons, &exchanges, 9, 1),
        "\nComparisons: 9\nExchanges: 1\nAll Comparisons:\n\t\t(1, 2) ...\n\nAll Exchanges:\n\t\t(2, 1)"
    );
}

#[test]
fn render_quicksort_run() {
    let run = RunReport {
        line_number: 1,
        records: Records::Sorted(&[1, 2]),
        runtime: Duration::from_micros(3),
        config: Some(QuicksortConfig::new(PivotStrategy::MedianOfThree, 2)),
        comparisons: 2,
        exchanges: 0,
        comparison_trace: Vec::new(),
        exchange_trace: Vec::new(),
    };

    assert_eq!(
        report::render(&run),
        "\n1. \tSorted: \n\t\t1 2\nRuntime: 3μs\nPivot type: median_of_three\n\
         Insertion Sort Threshold: 2\nComparisons: 2\nExchanges: 0"
    );
}

#[test]
fn performance_report() {
    let mut performance = Performance::new();

    performance.set_size(10).start();
    performance.stop();
    performance.record(RunStatus::Success);

    performance.measure(3, || ());
    performance.record(RunStatus::Success);

    performance.measure(3, || ());
    performance.record(RunStatus::Failure);

    assert_eq!(performance.num_successes(), 2);
    assert_eq!(performance.num_failures(), 1);

    let text = report::format_performance_report(&performance, true);
    let lines = text.lines().collect::<Vec<_>>();

    assert!(lines.contains(&"Total number of successes: 2"));
    assert!(lines.contains(&"Total number of errors: 1"));
    assert!(lines.contains(&"\tNOTE: Runtimes measured in microseconds (μs)"));

    // Sizes are listed in ascending order.
    let size_3 = lines.iter().position(|line| line.starts_with("3: [")).unwrap();
    let size_10 = lines.iter().position(|line| line.starts_with("10: [")).unwrap();
    assert!(size_3 < size_10);
}

#[test]
fn stop_without_start() {
    let mut performance = Performance::new();

    assert_eq!(performance.stop(), Duration::ZERO);
    assert_eq!(performance.runtime_micros(), 0);
}

#[test]
fn parse_records() {
    assert_eq!(
        input::parse_records("5 3\n\n  8 -1\n").unwrap(),
        vec![5, 3, 8, -1]
    );
    assert!(input::parse_records("").unwrap().is_empty());

    assert!(matches!(
        input::parse_records("1\n2\n3.5"),
        Err(Error::MalformedRecord { line: 3, token }) if token == "3.5"
    ));
}
