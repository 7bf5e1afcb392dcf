//! Plain text rendering of sort runs and of the performance report.
//!
//! Long sequences are wrapped at `CHARS_PER_LINE` and indented with two tabs below their label.

use std::fmt::Display;
use std::time::Duration;

use crate::error::Error;
use crate::quicksort::QuicksortConfig;
use crate::stats::TraceEntry;
use crate::timing::Performance;

pub const CHARS_PER_LINE: usize = 80;

/// What a run section shows in place of the sorted values.
#[derive(Debug)]
pub enum Records<'a, T> {
    /// The sorted values, empty when they are not shown.
    Sorted(&'a [T]),
    Error(&'a str),
}

// Not derived, that would require `T: Copy`.
impl<T> Clone for Records<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Records<'_, T> {}

/// Everything shown for one sort run.
#[derive(Clone, Debug)]
pub struct RunReport<'a, T> {
    pub line_number: usize,
    pub records: Records<'a, T>,
    pub runtime: Duration,
    /// Set for quicksort runs.
    pub config: Option<QuicksortConfig>,
    pub comparisons: u64,
    pub exchanges: u64,
    pub comparison_trace: Vec<TraceEntry<T>>,
    pub exchange_trace: Vec<TraceEntry<T>>,
}

/// Renders one run section.
pub fn render<T: Display>(run: &RunReport<'_, T>) -> String {
    let mut out = format_sorted_results(run.line_number, run.records, run.runtime.as_micros());

    if let Some(config) = run.config {
        out.push_str(&format!(
            "\nPivot type: {}\nInsertion Sort Threshold: {}",
            config.pivot, config.insertion_threshold
        ));
    }

    out.push_str(&format_logs(
        &run.comparison_trace,
        &run.exchange_trace,
        run.comparisons,
        run.exchanges,
    ));

    out
}

/// Joins `terms` with spaces, breaking lines so that none exceeds `chars_per_line`. Every line is
/// preceded by a newline and two tabs.
pub fn break_string<I>(terms: I, chars_per_line: usize) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for term in terms {
        let term = term.to_string();

        if !current_line.is_empty() && current_line.len() + term.len() + 1 > chars_per_line {
            lines.push(std::mem::take(&mut current_line));
        }

        current_line.push_str(&term);
        current_line.push(' ');
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
        .iter()
        .map(|line| format!("\n\t\t{}", line.trim_end()))
        .collect()
}

/// Header block listing the unsorted input.
pub fn format_original_records<T: Display>(records: &[T]) -> Vec<String> {
    let prefix = "Original: ";

    vec![
        format!(
            "{prefix}{}",
            break_string(records, CHARS_PER_LINE - prefix.len())
        ),
        format_size(records.len()),
    ]
}

/// Header block shown instead of the input when it could not be read.
pub fn format_input_error(error: &Error) -> Vec<String> {
    vec![format!("Original: \n\tERROR - {error}")]
}

pub fn format_size(len: usize) -> String {
    format!("Size: {len} Records\n")
}

/// First lines of a run section: the line number, the sorted values or error message if there is
/// anything to show, and the runtime.
pub fn format_sorted_results<T: Display>(
    line_number: usize,
    records: Records<'_, T>,
    runtime_micros: u128,
) -> String {
    let mut out = format!("\n{line_number}. ");
    let label_len = out.len();

    match records {
        Records::Sorted(values) if !values.is_empty() => {
            out.push_str("\tSorted: ");
            out.push_str(&break_string(values, CHARS_PER_LINE - label_len - 9));
            out.push('\n');
        }
        Records::Sorted(_) => {}
        Records::Error(message) => {
            out.push_str("\tError - ");
            out.push_str(&break_string(
                message.split_whitespace(),
                CHARS_PER_LINE - label_len - 9,
            ));
            out.push('\n');
        }
    }

    out.push_str(&format!("Runtime: {runtime_micros}μs"));
    out
}

/// Counter lines followed by the traces, if any were kept.
pub fn format_logs<T: Display>(
    comparisons: &[TraceEntry<T>],
    exchanges: &[TraceEntry<T>],
    num_comparisons: u64,
    num_exchanges: u64,
) -> String {
    let mut lines = vec![
        format!("\nComparisons: {num_comparisons}"),
        format!("Exchanges: {num_exchanges}"),
    ];

    if !comparisons.is_empty() {
        let prefix = "All Comparisons:";
        lines.push(format!(
            "{prefix}{}",
            break_string(comparisons, CHARS_PER_LINE - prefix.len())
        ));
    }

    if !exchanges.is_empty() {
        let prefix = "All Exchanges:";
        lines.push(format!(
            "\n{prefix}{}",
            break_string(exchanges, CHARS_PER_LINE - prefix.len())
        ));
    }

    lines.join("\n")
}

/// Runtimes of all recorded runs grouped by input length, smallest length first.
pub fn format_performance_report(performance: &Performance, micros: bool) -> String {
    let as_unit = |runtime: &Duration| {
        if micros {
            runtime.as_micros()
        } else {
            runtime.as_nanos()
        }
    };

    let mut lines = vec!["\n-------Performance Report-------\n".to_owned()];

    lines.push(format!(
        "Total number of successes: {}",
        performance.num_successes()
    ));
    for (size, runtimes) in performance.successes() {
        let mut runtimes = runtimes.iter().map(as_unit).collect::<Vec<_>>();
        runtimes.sort_unstable();
        lines.push(format!("{size}: {runtimes:?}"));
    }

    lines.push("-".to_owned());

    lines.push(format!(
        "Total number of errors: {}",
        performance.num_failures()
    ));
    for (size, runtimes) in performance.failures() {
        let mut runtimes = runtimes.iter().map(as_unit).collect::<Vec<_>>();
        runtimes.sort_unstable();
        lines.push(format!("{size}: {runtimes:?}"));
    }

    lines.push("\nFormat:\n\tsize: [runtime1, ..., runtimeN]".to_owned());
    lines.push(format!(
        "\tNOTE: Runtimes measured in {}",
        if micros {
            "microseconds (μs)"
        } else {
            "nanoseconds (ns)"
        }
    ));

    lines.join("\n")
}
